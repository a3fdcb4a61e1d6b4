// Presentation: turn products into the text blocks the shell prints.

use std::fmt::Write;

use serde_json::Value;
use tracing::warn;

use crate::model::{normalize, Product, RawRecord};

/// Width of the horizontal rules framing every block.
pub const PAGE_WIDTH: usize = 80;
/// Maximum width of a wrapped description line, indent excluded.
pub const DESCRIPTION_WIDTH: usize = 76;
/// Width of the title column in the catalog table.
pub const TITLE_WIDTH: usize = 75;

const INDENT: &str = "   ";

fn rule() -> String {
    "=".repeat(PAGE_WIDTH)
}

/// Render the detail view of a single product.
pub fn render_product(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "{:^width$}", "PRODUCT DETAILS", width = PAGE_WIDTH);
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out);
    let _ = writeln!(out, "ID: {}", product.id);
    let _ = writeln!(out);
    let _ = writeln!(out, "TITLE:");
    let _ = writeln!(out, "{INDENT}{}", product.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "CATEGORY: {}", product.category);
    let _ = writeln!(out);
    let _ = writeln!(out, "PRICE: €{:.2}", product.price_f64());
    let _ = writeln!(out);
    let _ = writeln!(out, "DESCRIPTION:");
    for line in wrap_words(&product.description, DESCRIPTION_WIDTH) {
        let _ = writeln!(out, "{INDENT}{line}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule());
    out
}

/// Render the listing as an id/title table.
///
/// Each record is normalized on its own; one that fails is logged and left
/// out. The total counts every input record, skipped or not.
pub fn render_catalog(records: &[RawRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "{:<5} {:<width$}", "ID", "TITLE", width = TITLE_WIDTH);
    let _ = writeln!(out, "{}", rule());

    for record in records {
        match normalize(record) {
            Ok(product) => {
                let id = product.id.to_string();
                let title = truncate_title(&product.title);
                let _ = writeln!(out, "{:<5} {:<width$}", id, title, width = TITLE_WIDTH);
            }
            Err(e) => {
                let id = record.get("id").map(Value::to_string);
                warn!(
                    id = id.as_deref().unwrap_or("N/A"),
                    error = %e,
                    "skipping invalid product"
                );
            }
        }
    }

    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "Total products: {}", records.len());
    out
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_WIDTH {
        return title.to_string();
    }
    let mut cut: String = title.chars().take(TITLE_WIDTH - 3).collect();
    cut.push_str("...");
    cut
}

/// Greedily pack whitespace-separated words into lines of at most `width`
/// characters. Words are never split, so a single word longer than `width`
/// gets a line of its own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use proptest::prelude::*;
    use serde_json::{json, Number};

    fn product(description: &str) -> Product {
        Product {
            id: ProductId::Integer(12),
            title: "Sleek Wireless Headphone".into(),
            price: Number::from(45),
            category: "Electronics".into(),
            description: description.into(),
        }
    }

    fn description_lines(rendered: &str) -> Vec<&str> {
        rendered
            .lines()
            .skip_while(|l| *l != "DESCRIPTION:")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn product_block_shows_every_field() {
        let out = render_product(&product("Experience top-notch sound."));
        assert!(out.starts_with(&"=".repeat(80)));
        assert!(out.contains("PRODUCT DETAILS"));
        assert!(out.contains("ID: 12\n"));
        assert!(out.contains("   Sleek Wireless Headphone\n"));
        assert!(out.contains("CATEGORY: Electronics\n"));
        assert!(out.contains("PRICE: €45.00\n"));
        assert_eq!(description_lines(&out), vec!["   Experience top-notch sound."]);
    }

    #[test]
    fn float_price_has_two_decimals() {
        let mut p = product("x");
        p.price = Number::from_f64(19.999).unwrap();
        assert!(render_product(&p).contains("PRICE: €20.00\n"));
    }

    #[test]
    fn long_description_is_wrapped() {
        let text = "word ".repeat(40);
        let out = render_product(&product(&text));
        let lines = description_lines(&out);
        assert!(lines.len() > 1);
        for line in lines {
            let content = line.strip_prefix(INDENT).unwrap();
            assert!(content.chars().count() <= DESCRIPTION_WIDTH);
        }
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let long = "x".repeat(90);
        let lines = wrap_words(&format!("a {long} b"), DESCRIPTION_WIDTH);
        assert_eq!(lines, vec!["a".to_string(), long, "b".to_string()]);
    }

    #[test]
    fn empty_description_renders_no_lines() {
        assert!(wrap_words("  \n\t ", DESCRIPTION_WIDTH).is_empty());
    }

    #[test]
    fn catalog_skips_invalid_rows_but_counts_them() {
        let records = vec![
            json!({"id": 1, "title": "Good", "category": {"name": "X"}, "price": 1, "description": "d"}),
            json!({"id": 2, "title": "Bad"}),
        ];
        let out = render_catalog(&records);
        let rows: Vec<&str> = out
            .lines()
            .filter(|l| !l.starts_with('=') && !l.starts_with("ID ") && !l.starts_with("Total"))
            .collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("1     Good"));
        assert!(!out.contains("Bad"));
        assert!(out.ends_with("Total products: 2\n"));
    }

    #[test]
    fn long_titles_are_truncated() {
        let title = "T".repeat(100);
        let truncated = truncate_title(&title);
        assert_eq!(truncated.chars().count(), TITLE_WIDTH);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_title(&"T".repeat(75)), "T".repeat(75));
    }

    #[test]
    fn table_rows_are_fixed_width() {
        let records = vec![json!({
            "id": 3, "title": "Short", "category": {"name": "X"}, "price": 1, "description": "d"
        })];
        let out = render_catalog(&records);
        let row = out.lines().find(|l| l.starts_with('3')).unwrap();
        assert_eq!(row.chars().count(), 5 + 1 + TITLE_WIDTH);
    }

    proptest! {
        #[test]
        fn wrapping_preserves_words_and_width(
            words in prop::collection::vec("[a-zA-Z0-9.,!?'-]{1,20}", 0..60),
            seps in prop::collection::vec("[ \t\n]{1,3}", 60),
        ) {
            let mut text = String::new();
            for (word, sep) in words.iter().zip(&seps) {
                text.push_str(word);
                text.push_str(sep);
            }
            let out = render_product(&product(&text));
            let lines = description_lines(&out);
            for line in &lines {
                let content = line.strip_prefix(INDENT).unwrap();
                prop_assert!(content.chars().count() <= DESCRIPTION_WIDTH);
            }
            let rebuilt: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
            prop_assert_eq!(rebuilt, words.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
