//! Catalog Lookups
//!
//! Exact-match resolution of request parameters to catalog records.

use std::fmt;
use std::str::FromStr;

use crate::models::AnalysisMethod;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Analysis method '{0}' not found")]
    AnalysisMethodNotFound(String),
    #[error("Documentation topic '{0}' not found")]
    DocTopicNotFound(String),
}

/// Find the analysis method whose `id` equals `id`.
///
/// Linear scan; the catalog guarantees ids are unique, so the first match is
/// the only match.
pub fn find_analysis_method<'a>(
    methods: &'a [AnalysisMethod],
    id: &str,
) -> Result<&'a AnalysisMethod, LookupError> {
    methods
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| LookupError::AnalysisMethodNotFound(id.to_string()))
}

/// The fixed documentation pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Overview,
    Installation,
    Schema,
    Citations,
}

impl DocTopic {
    pub const ALL: [DocTopic; 4] = [
        DocTopic::Overview,
        DocTopic::Installation,
        DocTopic::Schema,
        DocTopic::Citations,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            DocTopic::Overview => "overview",
            DocTopic::Installation => "installation",
            DocTopic::Schema => "schema",
            DocTopic::Citations => "citations",
        }
    }
}

impl fmt::Display for DocTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DocTopic {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocTopic::ALL
            .into_iter()
            .find(|topic| topic.slug() == s)
            .ok_or_else(|| LookupError::DocTopicNotFound(s.to_string()))
    }
}
