// gitgang-core/src/moderation/purgomalum.rs
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::ModerationError;
use crate::moderation::ModerationTransport;

/// HTTP transport for PurgoMalum-style `containsprofanity` endpoints.
///
/// Sends `GET <endpoint>?text=<url-encoded text>` and hands back the body.
/// Non-2xx responses are failures so they go through the retry path.
pub struct PurgoMalumTransport {
    client: Client,
    endpoint: String,
}

impl PurgoMalumTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ModerationTransport for PurgoMalumTransport {
    fn name(&self) -> &str { "purgomalum" }

    async fn query(&self, text: &str) -> Result<String, ModerationError> {
        debug!("Querying moderation endpoint {}", self.endpoint);
        let resp = self.client
            .get(&self.endpoint)
            .query(&[("text", text)])
            .header("User-Agent", "GitGang-Contribution-Bot")
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.text().await?)
    }
}
