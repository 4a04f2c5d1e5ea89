// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string (Copy/Export) from base data.
/// - `headers`: column headers (if any)
/// - `rows`: base rows
/// - `include_headers`: whether to emit a header line
/// - `sep`: field separator
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, sep);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("plain"), s!("a,b"), s!("q\"q"), s!("nl\nnl")], ',').unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"a,b\",\"q\"\"q\",\"nl\nnl\"\n"
        );
    }

    #[test]
    fn tsv_ignores_commas() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("a,b"), s!("c")], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\tc\n");
    }

    #[test]
    fn header_line_is_optional() {
        let headers = Some(vec![s!("H1"), s!("H2")]);
        let rows = vec![vec![s!("a"), s!("b")]];
        assert_eq!(to_export_string(&headers, &rows, true, ','), "H1,H2\na,b\n");
        assert_eq!(to_export_string(&headers, &rows, false, ','), "a,b\n");
    }
}
