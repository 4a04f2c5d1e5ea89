// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Turn a feed source name into a safe file stem ("Crunchbase News" → "Crunchbase_News").
/// Falls back to "source" when nothing survives.
pub fn sanitize_source_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("source") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  a\t b\n\nc  "), "a b c");
    }

    #[test]
    fn sanitize_source_filename_variants() {
        assert_eq!(sanitize_source_filename("Crunchbase News"), "Crunchbase_News");
        assert_eq!(sanitize_source_filename("prop/modo!"), "propmodo");
        assert_eq!(sanitize_source_filename("***"), "source");
    }
}
