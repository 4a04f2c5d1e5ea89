// src/view.rs
//
// Light view layer between the canonical feed and the frontends.
// Derives display/export shapes (flat section rows, plain-text documents,
// selection projection) from `store::Feed`; never mutates it.

use crate::config::consts::NO_SUMMARY;
use crate::feed::intel::Article;
use crate::store::Feed;

pub const SECTION_HEADERS: [&str; 4] = ["Article", "Source", "Section", "Content"];

pub fn section_headers() -> Vec<String> {
    SECTION_HEADERS.iter().map(|h| s!(*h)).collect()
}

/// Borrow the selected articles in panel order. Out-of-range indices are skipped.
pub fn selected<'a>(feed: &'a Feed, ix: &[usize]) -> Vec<&'a Article> {
    ix.iter().filter_map(|&i| feed.articles.get(i)).collect()
}

/// Flatten articles into table/export rows: one row per parsed section,
/// article order then section order. An article without sections still
/// yields one row carrying the no-summary indicator — the document view is
/// never silently empty.
pub fn section_rows(articles: &[&Article]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for a in articles {
        let source = a.source.clone().unwrap_or_default();
        let secs = a.sections();
        if secs.is_empty() {
            rows.push(vec![a.title.clone(), source, s!(), s!(NO_SUMMARY)]);
            continue;
        }
        for sec in secs {
            rows.push(vec![a.title.clone(), source.clone(), sec.label, sec.content]);
        }
    }
    rows
}

/// Render articles as a plain-text document: title, meta line, link, then an
/// aligned label/content block per section (the narrow-layout rendering).
pub fn document_text(articles: &[&Article]) -> String {
    let mut out = String::new();

    for (i, a) in articles.iter().enumerate() {
        if i > 0 { out.push('\n'); }
        out.push_str(&a.title);
        out.push('\n');

        let mut meta = Vec::new();
        if let Some(src) = &a.source { meta.push(format!("Source: {src}")); }
        if let Some(date) = &a.published { meta.push(format!("Published: {date}")); }
        if let Some(by) = &a.author { meta.push(format!("By {by}")); }
        if !meta.is_empty() {
            out.push_str(&meta.join(" | "));
            out.push('\n');
        }
        if let Some(url) = a.href() {
            out.push_str("Link: ");
            out.push_str(url);
            out.push('\n');
        }

        let secs = a.sections();
        if secs.is_empty() {
            out.push_str("  ");
            out.push_str(NO_SUMMARY);
            out.push('\n');
            continue;
        }

        let width = secs.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);
        for sec in &secs {
            out.push_str(&format!("  {:<width$}  {}\n", sec.label, sec.content));
        }
    }

    out
}
