use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::app::Result;
use crate::fetcher::{Fetcher, PassageQuery};

pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("bgate/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// The passage page URL: `<base>?search=<reference>&version=<translation>`.
    pub fn passage_url(&self, query: &PassageQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("search", &query.reference);
            if let Some(translation) = &query.translation {
                pairs.append_pair("version", translation);
            }
        }
        url
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, query: &PassageQuery) -> Result<String> {
        let url = self.passage_url(query);
        info!(%url, "Fetching passage");

        let response = self.client.get(url).send().await?;
        debug!(status = %response.status(), "Response received");
        let response = response.error_for_status()?;

        Ok(response.text().await?)
    }
}
