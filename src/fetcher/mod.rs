pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::{BgateError, Result};

/// What to look up: a passage reference and, optionally, a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageQuery {
    pub reference: String,
    pub translation: Option<String>,
}

impl PassageQuery {
    pub fn new(reference: &str, translation: Option<&str>) -> Result<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(BgateError::InvalidQuery("query is empty".into()));
        }

        let translation = translation
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from);

        Ok(Self {
            reference: reference.to_string(),
            translation,
        })
    }
}

#[async_trait]
pub trait Fetcher {
    /// Fetch the page for `query` and return its HTML.
    async fn fetch(&self, query: &PassageQuery) -> Result<String>;
}
