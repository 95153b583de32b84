use std::sync::Arc;

use tracing::info;

use crate::app::error::Result;
use crate::document::HtmlDocument;
use crate::domain::Passage;
use crate::extractor::ContentExtractor;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::{Fetcher, PassageQuery};

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub extractor: ContentExtractor,
}

impl AppContext {
    pub fn new(base_url: &str) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(base_url)?);
        Ok(Self::with_fetcher(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            fetcher,
            extractor: ContentExtractor::new(),
        }
    }

    /// Fetch, parse and extract the passage for `query`.
    pub async fn load_passage(&self, query: &PassageQuery) -> Result<Passage> {
        let html = self.fetcher.fetch(query).await?;
        let document = HtmlDocument::parse(&html);
        let passage = self.extractor.extract(&document.root())?;
        info!(
            reference = %query.reference,
            verses = passage.verse_count(),
            "Loaded passage"
        );
        Ok(passage)
    }
}
