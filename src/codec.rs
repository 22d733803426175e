//! Text Codec
//!
//! CSV import/export and the numbered plain-text list used for clipboard copy.
//!
//! The CSV dialect is deliberately simple: names are wrapped in double quotes
//! but embedded quotes are not escaped, so names containing `"` do not
//! round-trip. Previously exported files rely on this exact shape.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{RankingError, RankingResult};
use crate::models::Item;

pub const CSV_HEADER: &str = "Pozycja,Wartość";

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

fn row_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"^[0-9]+,"?([^"]*)"?$"#).expect("CSV row pattern is valid"))
}

/// Render the list as CSV with a header row
pub fn to_csv(items: &[Item]) -> String {
    let mut out = String::from(CSV_HEADER);
    for (index, item) in items.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{},\"{}\"", index + 1, item.name));
    }
    out
}

/// Parse CSV text into a fresh list.
///
/// The first line is the header. Rows that don't look like
/// `<number>,<name>` are skipped; if none match the import fails.
pub fn from_csv(text: &str) -> RankingResult<Vec<Item>> {
    let items: Vec<Item> = text
        .split('\n')
        .enumerate()
        .skip(1)
        .filter_map(|(line_no, raw)| {
            let line = raw.trim();
            if line.is_empty() {
                return None;
            }
            let captured = row_pattern().captures(line)?.get(1)?.as_str();
            if captured.is_empty() {
                return None;
            }
            Some(Item::imported(line_no, captured.trim()))
        })
        .collect();

    if items.is_empty() {
        return Err(RankingError::NoValidRows);
    }
    Ok(items)
}

/// `1. name` per line, for pasting elsewhere
pub fn to_numbered_list(items: &[Item]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, item.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Download name for an export made on `date`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", prefix, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::initialize;

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_to_csv() {
        let items = initialize(&["Miłość", "Balans", "Energia"]);
        assert_eq!(
            to_csv(&items),
            "Pozycja,Wartość\n1,\"Miłość\"\n2,\"Balans\"\n3,\"Energia\""
        );
    }

    #[test]
    fn test_csv_roundtrip() {
        let items = initialize(&["Miłość", "Balans", "Energia"]);
        let imported = from_csv(&to_csv(&items)).unwrap();
        assert_eq!(names(&imported), vec!["Miłość", "Balans", "Energia"]);
        let originals: Vec<_> = imported.iter().map(|i| i.original_index).collect();
        assert_eq!(originals, vec![0, 1, 2]);
        assert_eq!(imported[0].id, "imported_1");
    }

    #[test]
    fn test_header_only_fails() {
        assert_eq!(from_csv("Pozycja,Wartość"), Err(RankingError::NoValidRows));
        assert_eq!(from_csv("Pozycja,Wartość\n\n"), Err(RankingError::NoValidRows));
        assert_eq!(from_csv(""), Err(RankingError::NoValidRows));
    }

    #[test]
    fn test_skips_bad_lines_keeps_line_numbers() {
        let text = "Pozycja,Wartość\n1,\"Pasja\"\n\ngarbage\nx,\"Nope\"\n5,Humor\n6,\"\"";
        let items = from_csv(text).unwrap();
        assert_eq!(names(&items), vec!["Pasja", "Humor"]);
        assert_eq!(items[1].id, "imported_5");
        assert_eq!(items[1].original_index, 4);
    }

    #[test]
    fn test_crlf_and_padding() {
        let text = "Pozycja,Wartość\r\n1,\" Odwaga \"\r\n2,\"Pokój\"\r\n";
        let items = from_csv(text).unwrap();
        assert_eq!(names(&items), vec!["Odwaga", "Pokój"]);
    }

    #[test]
    fn test_embedded_quote_rejected() {
        let items = from_csv("h\n1,\"a\"b\"\n2,\"ok\"").unwrap();
        assert_eq!(names(&items), vec!["ok"]);
    }

    #[test]
    fn test_numbered_list() {
        let items = initialize(&["Miłość", "Balans"]);
        assert_eq!(to_numbered_list(&items), "1. Miłość\n2. Balans");
        assert_eq!(to_numbered_list(&[]), "");
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name("eliminacja-wartosci", date), "eliminacja-wartosci-2024-03-09.csv");
    }
}
