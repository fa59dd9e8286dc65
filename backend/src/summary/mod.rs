//! Report summary composition.
//!
//! A `Summarizer` turns a `SummarySource` into the narrative stored on a report. The shipped
//! implementation is `MockSummarizer`; a real text-generation backend plugs in behind the same
//! trait. Calls go through [`compose`], which bounds them with a timeout.

mod mock;

pub use mock::MockSummarizer;

use async_trait::async_trait;
use common::model::installation::Installation;
use std::time::Duration;

/// What a report summary is generated from.
#[derive(Debug, Clone, Copy)]
pub enum SummarySource<'a> {
    /// An ad-hoc scan with no installation behind it.
    Scan { qr_data: &'a str },
    /// A formal report for a recorded installation.
    Installation(&'a Installation),
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("summary provider timed out after {0:?}")]
    Timeout(Duration),

    #[error("summary provider failed: {0}")]
    Provider(String),
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, source: SummarySource<'_>) -> Result<String, SummaryError>;
}

pub async fn compose(
    summarizer: &dyn Summarizer,
    source: SummarySource<'_>,
    timeout: Duration,
) -> Result<String, SummaryError> {
    tokio::time::timeout(timeout, summarizer.summarize(source))
        .await
        .map_err(|_| SummaryError::Timeout(timeout))?
}
