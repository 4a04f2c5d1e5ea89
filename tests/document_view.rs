// tests/document_view.rs
//
// View-layer behavior over a decoded feed: section rows, the no-summary
// indicator, selection projection, and the plain-text document.
//
use propwatch::core::sanitize::normalize_ws;
use propwatch::feed::intel::Article;
use propwatch::store::Feed;
use propwatch::view;

fn article(title: &str, source: Option<&str>, summary: Option<&str>) -> Article {
    Article {
        title: title.into(),
        source: source.map(|s| s.into()),
        summary: summary.map(|s| s.into()),
        ..Default::default()
    }
}

fn sample_feed() -> Feed {
    Feed {
        articles: vec![
            article(
                "Smart locks raise $12M",
                Some("Crunchbase News"),
                Some("**Risk:** High **Opportunity:** Strong"),
            ),
            article("Quiet week for iBuyers", Some("Inman"), None),
            article(
                "Modular builder expands",
                None,
                Some("1. Market: Growing 2. Risk: Low"),
            ),
        ],
    }
}

#[test]
fn section_rows_flatten_in_document_order() {
    let feed = sample_feed();
    let all: Vec<usize> = (0..feed.article_count()).collect();
    let rows = view::section_rows(&view::selected(&feed, &all));

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], vec!["Smart locks raise $12M", "Crunchbase News", "Risk", "High"]);
    assert_eq!(rows[1], vec!["Smart locks raise $12M", "Crunchbase News", "Opportunity", "Strong"]);
    // Fallback-parsed article comes last, in source order
    assert_eq!(rows[3], vec!["Modular builder expands", "", "Market", "Growing"]);
    assert_eq!(rows[4], vec!["Modular builder expands", "", "Risk", "Low"]);
}

#[test]
fn article_without_sections_gets_indicator_row() {
    let feed = sample_feed();
    let rows = view::section_rows(&view::selected(&feed, &[1]));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], vec!["Quiet week for iBuyers", "Inman", "", "No summary available."]);
}

#[test]
fn selection_projects_in_panel_order_and_skips_out_of_range() {
    let feed = sample_feed();

    let picked = view::selected(&feed, &[2, 0, 9]);
    assert_eq!(picked.len(), 2);
    assert_eq!(picked[0].title, "Modular builder expands");
    assert_eq!(picked[1].title, "Smart locks raise $12M");

    assert!(view::selected(&feed, &[]).is_empty());
}

#[test]
fn document_text_renders_sections_and_meta() {
    let feed = sample_feed();
    let text = view::document_text(&view::selected(&feed, &[0]));

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Smart locks raise $12M");
    assert_eq!(lines[1], "Source: Crunchbase News");
    assert_eq!(normalize_ws(lines[2]), "Risk High");
    assert_eq!(normalize_ws(lines[3]), "Opportunity Strong");
}

#[test]
fn document_text_uses_indicator_when_nothing_parsed() {
    let feed = sample_feed();
    let text = view::document_text(&view::selected(&feed, &[1]));

    assert!(text.contains("No summary available."));
}

#[test]
fn document_text_includes_link_when_present() {
    let mut a = article("Linked", None, None);
    a.link = Some("https://example.com/story".into());
    let feed = Feed { articles: vec![a] };

    let text = view::document_text(&view::selected(&feed, &[0]));
    assert!(text.contains("Link: https://example.com/story"));
}
