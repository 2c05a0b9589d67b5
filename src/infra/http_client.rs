use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::app::ports::HttpClientPort;
use crate::constants::USER_AGENT;
use crate::error::{LinksError, Result};

pub struct ReqwestHttp {
    client: Client,
}

impl ReqwestHttp {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpClientPort for ReqwestHttp {
    #[instrument(skip(self))]
    fn get_text(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Non-success response");
            return Err(LinksError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        if !(content_type.starts_with("text/csv") || content_type.starts_with("text/plain")) {
            // A private sheet answers with an HTML sign-in page instead of CSV
            warn!(%content_type, "Unexpected content type for CSV export");
        }

        let body = resp.text()?;
        info!(status = status.as_u16(), bytes = body.len(), %content_type, "Fetched sheet");
        Ok(body)
    }
}
