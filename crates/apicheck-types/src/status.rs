use serde::{Deserialize, Serialize};

/// Client name sent by the create check.
pub const TEST_CLIENT_NAME: &str = "F1RacingPortfolio";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl StatusCheckCreate {
    pub fn new(client_name: impl Into<String>) -> Self {
        StatusCheckCreate {
            client_name: client_name.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}
