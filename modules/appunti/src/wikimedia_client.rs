//! HTTP client for fetching Wikimedia pages to scrape.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered with a non-success status
    #[error("Wikimedia request failed: {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct WikimediaClient {
    client: reqwest::Client,
}

impl WikimediaClient {
    /// Wikimedia sites refuse requests without a descriptive User-Agent.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Fetch a page and return its body as text
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        log::info!("Wikimedia response status: {}", status);
        log::debug!("Wikimedia response headers: {:?}", resp.headers());

        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let html = resp.text().await?;
        log::info!("Received HTML content length: {}", html.len());
        Ok(html)
    }
}
