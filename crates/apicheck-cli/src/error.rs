use reqwest::StatusCode;

pub type Error = anyhow::Error;
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a single check did not pass. Never propagated past the runner.
#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("status {status}, response: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("response is not valid JSON: {body}")]
    InvalidJson { body: String },
    #[error("unexpected response: {0}")]
    UnexpectedBody(serde_json::Value),
    #[error("missing CORS header(s): {}", .0.join(", "))]
    MissingHeaders(Vec<&'static str>),
    #[error("expected list, got: {0}")]
    NotAList(&'static str),
}

impl CheckError {
    /// Message including the source chain, reqwest keeps the interesting part
    /// (connection refused, timeout) in sources.
    pub fn detail(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        if let CheckError::Request(e) = self {
            // reqwest::Error is already part of the message
            source = std::error::Error::source(e);
        }
        while let Some(e) = source {
            msg.push_str(": ");
            msg.push_str(&e.to_string());
            source = e.source();
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_messages() {
        let err = CheckError::MissingHeaders(vec![
            "access-control-allow-methods",
            "access-control-allow-headers",
        ]);
        assert_eq!(
            err.detail(),
            "missing CORS header(s): access-control-allow-methods, access-control-allow-headers"
        );

        let err = CheckError::UnexpectedStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        };
        assert_eq!(err.detail(), "status 500 Internal Server Error, response: boom");

        let err = CheckError::UnexpectedBody(json!({"message": "Goodbye"}));
        assert_eq!(err.detail(), r#"unexpected response: {"message":"Goodbye"}"#);

        assert_eq!(
            CheckError::NotAList("object").detail(),
            "expected list, got: object"
        );
    }
}
