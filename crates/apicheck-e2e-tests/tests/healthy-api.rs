use apicheck_cli::{
    checks::{Check, REQUEST_TIMEOUT, build_client, status::check_create_status},
    report::{EXIT_SUCCESS, Reporter},
    run::{run, run_checks},
};
use apicheck_e2e_tests::{FixtureConfig, spawn_fixture};
use apicheck_types::CheckConfig;
use tracing::info;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_all_checks_pass() {
    let fixture = spawn_fixture(FixtureConfig::default()).await.unwrap();
    let config = CheckConfig::new(fixture.base_url.clone());

    let mut out = Vec::new();
    let status = run(&config, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();
    info!("Report:\n{}", text);

    assert_eq!(status, EXIT_SUCCESS);
    assert!(text.contains(&format!("Testing API at: {}api/", fixture.base_url)));
    assert!(text.contains("✅ Health check passed"));
    assert!(text.contains("✅ CORS headers configured correctly"));
    assert!(text.contains("✅ Create status check passed (id: "));
    assert!(text.contains("✅ Get status checks passed - Found 1 records"));
    assert!(text.contains("Tests Passed: 4/4"));
    assert!(text.contains("🎉 ALL TESTS PASSED"));
    assert!(!text.contains("❌"));
    assert_eq!(fixture.requests(), 4);
}

#[tokio::test]
#[traced_test]
async fn test_report_order_and_created_id() {
    let fixture = spawn_fixture(FixtureConfig::default()).await.unwrap();
    let api_url = CheckConfig::new(fixture.base_url.clone())
        .api_url()
        .unwrap();
    let client = build_client(REQUEST_TIMEOUT).unwrap();
    let mut reporter = Reporter::new(Vec::new());

    let report = run_checks(&client, &api_url, &mut reporter).await.unwrap();

    let checks: Vec<Check> = report.results().iter().map(|r| r.check).collect();
    assert_eq!(checks, Check::ALL);
    assert!(report.all_passed());
    let created = &report.results()[2];
    assert!(created.created_id.as_ref().is_some_and(|id| !id.is_empty()));
    assert!(report.results()[3].created_id.is_none());

    let text = String::from_utf8(reporter.into_inner()).unwrap();
    let started: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with("🔍"))
        .collect();
    assert_eq!(
        started,
        [
            "🔍 Testing API Health Check...",
            "🔍 Testing CORS Headers...",
            "🔍 Testing Create Status Check...",
            "🔍 Testing Get Status Checks...",
        ]
    );
}

#[tokio::test]
#[traced_test]
async fn test_create_twice_gives_distinct_ids() {
    let fixture = spawn_fixture(FixtureConfig::default()).await.unwrap();
    let api_url = CheckConfig::new(fixture.base_url.clone())
        .api_url()
        .unwrap();
    let client = build_client(REQUEST_TIMEOUT).unwrap();

    let first = check_create_status(&client, &api_url).await.unwrap();
    let second = check_create_status(&client, &api_url).await.unwrap();

    assert!(first.created_id.is_some());
    assert!(second.created_id.is_some());
    assert_ne!(first.created_id, second.created_id);
}
