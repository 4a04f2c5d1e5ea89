// src/fetch.rs
use std::error::Error;

use crate::{
    config::options::FetchOptions,
    feed::intel,
    progress::Progress,
    store::{self, Feed},
};

/// Fetch the intel feed into memory and refresh the local cache.
/// Always returns canonical base data; display filtering happens in `view`.
pub fn collect_intel(
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Feed, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log(&format!("Fetching {}:{}{}…", opts.host, opts.port, opts.path));
    }

    let bundle = intel::fetch(opts)?;
    let feed = Feed { articles: bundle.articles };

    // cache, but ignore any IO error (best-effort)
    match store::save_feed(&feed) {
        Ok(p) => logf!("Cache: Saved feed → {}", p.display()),
        Err(e) => loge!("Cache: Save failed: {}", e),
    }

    if let Some(p) = progress.as_deref_mut() {
        p.item_done(feed.article_count());
        p.finish();
    }

    Ok(feed)
}
