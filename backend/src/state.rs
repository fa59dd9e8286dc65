//! Shared application state.
//!
//! One `AppState` is built in `main.rs` and handed to every Actix worker as `web::Data`.
//! Its parts are reference counted, so all workers see the same records.

use crate::config::AppConfig;
use crate::fetcher::ImageFetcher;
use crate::store::RecordStore;
use crate::summary::{MockSummarizer, Summarizer};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub summarizer: Arc<dyn Summarizer>,
    pub fetcher: ImageFetcher,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// In-memory store and the template summarizer, tuned by `config`.
    pub fn from_config(config: AppConfig) -> Result<Self, reqwest::Error> {
        let fetcher = ImageFetcher::new(config.fetch_timeout, config.max_redirects)?;
        Ok(Self {
            store: RecordStore::in_memory(),
            summarizer: Arc::new(MockSummarizer::new(config.summary_delay)),
            fetcher,
            config: Arc::new(config),
        })
    }
}
