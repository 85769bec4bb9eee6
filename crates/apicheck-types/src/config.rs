pub use clap::Parser;
use url::Url;

pub const BASE_URL_ENV: &str = "REACT_APP_BACKEND_URL";
const API_PREFIX: &str = "api/";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("REACT_APP_BACKEND_URL not found in environment")]
    MissingBaseUrl,
    #[error("Base URL {0} cannot be used as a base for API paths")]
    InvalidBaseUrl(Url),
    #[error("Base URL {value:?} is not a valid URL: {source}")]
    UnparsableBaseUrl {
        value: String,
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, clap::Parser)]
#[command(
    version,
    about,
    long_about = "Smoke tests for the status check API - checks health, CORS, create and list endpoints and exits with 0 only if all of them pass."
)]
pub struct CheckConfig {
    #[arg(
        long,
        env = BASE_URL_ENV,
        help = "Base URL of the backend, API is expected under [base-url]/api/"
    )]
    pub base_url: Option<String>,
}

impl CheckConfig {
    pub fn new(base_url: Url) -> Self {
        CheckConfig {
            base_url: Some(base_url.into()),
        }
    }

    /// Root of the API, always ending with `/api/`, so relative joins stay under it.
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        // empty value is the same as unset
        let value = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        let base = Url::parse(value).map_err(|source| ConfigError::UnparsableBaseUrl {
            value: value.to_string(),
            source,
        })?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(base.clone()));
        }

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.join(API_PREFIX)
            .map_err(|_| ConfigError::InvalidBaseUrl(base))
    }
}
