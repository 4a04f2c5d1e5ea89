// src/store.rs
use std::{error::Error, fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::consts::{FEED_FILE, STORE_DIR};
use crate::feed::intel::Article;

/// Canonical in-memory dataset: the last decoded feed.
/// Loaded from cache at startup; updated only by FETCH.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Feed {
    pub articles: Vec<Article>,
}

impl Feed {
    pub fn article_count(&self) -> usize { self.articles.len() }
    pub fn is_empty(&self) -> bool { self.articles.is_empty() }
}

fn feed_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(FEED_FILE)
}

/// Persist the feed under `.store/`. Returns the path written to.
pub fn save_feed(feed: &Feed) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(STORE_DIR)?;
    let p = feed_path();
    fs::write(&p, serde_json::to_string_pretty(feed)?)?;
    Ok(p)
}

/// Load the cached feed, if any.
pub fn load_feed() -> Result<Feed, Box<dyn Error>> {
    let text = fs::read_to_string(feed_path())?;
    Ok(serde_json::from_str(&text)?)
}
