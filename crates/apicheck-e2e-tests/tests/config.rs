use apicheck_cli::{report::EXIT_FAILURE, run::run};
use apicheck_e2e_tests::{FixtureConfig, spawn_fixture};
use apicheck_types::CheckConfig;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_missing_base_url_makes_no_requests() {
    let fixture = spawn_fixture(FixtureConfig::default()).await.unwrap();
    let config = CheckConfig { base_url: None };

    let mut out = Vec::new();
    let status = run(&config, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(status, EXIT_FAILURE);
    assert!(text.contains("REACT_APP_BACKEND_URL not found in environment"));
    assert!(!text.contains("TEST SUMMARY"));
    assert_eq!(fixture.requests(), 0);
}

#[tokio::test]
#[traced_test]
async fn test_empty_base_url_makes_no_requests() {
    let fixture = spawn_fixture(FixtureConfig::default()).await.unwrap();
    let config = CheckConfig {
        base_url: Some(String::new()),
    };

    let mut out = Vec::new();
    let status = run(&config, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(status, EXIT_FAILURE);
    assert_eq!(text, "❌ REACT_APP_BACKEND_URL not found in environment\n");
    assert_eq!(fixture.requests(), 0);
}

#[tokio::test]
#[traced_test]
async fn test_unusable_base_url() {
    let config = CheckConfig::new(reqwest::Url::parse("mailto:ops@example.com").unwrap());

    let mut out = Vec::new();
    let status = run(&config, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(status, EXIT_FAILURE);
    assert!(text.starts_with("❌ Base URL mailto:ops@example.com"));
}
