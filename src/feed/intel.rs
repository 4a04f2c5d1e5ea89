// src/feed/intel.rs
//! Reader for the intelligence endpoints.
//!
//! The service wraps its article list in a one-key envelope; depending on the
//! route that key is `articles`, `analyses` or `intelligence`. Elements share
//! one record shape with a few historical field aliases, resolved here.

use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::config::options::FetchOptions;
use crate::core::analysis::{self, Section};
use crate::core::net;

/// One feed record. Unknown envelope fields (counts, timestamps) and unknown
/// record fields are ignored on decode.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub proptech_analysis: Option<String>,
}

impl Article {
    /// `url` wins over the legacy `link` field.
    pub fn href(&self) -> Option<&str> {
        self.url.as_deref().or(self.link.as_deref())
    }

    /// Raw analysis text: `summary` wins over the legacy `proptech_analysis`.
    pub fn analysis_text(&self) -> Option<&str> {
        self.summary.as_deref().or(self.proptech_analysis.as_deref())
    }

    /// Parsed sections of this record's analysis text.
    pub fn sections(&self) -> Vec<Section> {
        analysis::parse(self.analysis_text())
    }
}

pub struct FeedBundle {
    pub articles: Vec<Article>,
}

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    articles: Option<Vec<Article>>,
    #[serde(default)]
    analyses: Option<Vec<Article>>,
    #[serde(default)]
    intelligence: Option<Vec<Article>>,
}

/// Decode a response body into article records.
/// Envelope keys are tried in order: articles, analyses, intelligence.
pub fn decode(body: &str) -> Result<Vec<Article>, Box<dyn Error>> {
    let env: Envelope = serde_json::from_str(body)?;
    env.articles
        .or(env.analyses)
        .or(env.intelligence)
        .ok_or_else(|| "No article list in response (expected articles/analyses/intelligence)".into())
}

/// GET the configured endpoint and decode the envelope.
pub fn fetch(opts: &FetchOptions) -> Result<FeedBundle, Box<dyn Error>> {
    let body = net::http_get(&opts.host, opts.port, &opts.path)?;
    let articles = decode(&body)?;
    Ok(FeedBundle { articles })
}
