//! CLI output formatting.
//!
//! Each pipeline result has a `format_*` function (returns `Vec<String>`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Independent Craft Breweries (14)
//! Chain Breweries (2)
//! Independent Craft Breweries Opening Soon (3)
//! Notable Bottle Shops (5)
//! Notable Bars (6)
//! Notable Restaurants (4)
//! Rendered 30 records into 34 section entries
//! ```
//!
//! A record in several categories counts once per section, which is why the
//! entry total can exceed the record count.

use crate::generate::SECTIONS;
use crate::types::Record;

/// Format the post-generation summary: one line per section with its record
/// count, then a totals line.
pub fn format_generate_output(records: &[Record]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut entries = 0;

    for section in SECTIONS {
        let count = records.iter().filter(|r| r.has_tag(section.tag)).count();
        entries += count;
        lines.push(format!("{} ({})", section.title, count));
    }

    lines.push(format!(
        "Rendered {} records into {} section entries",
        records.len(),
        entries
    ));
    lines
}

pub fn print_generate_output(records: &[Record]) {
    for line in format_generate_output(records) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::record;

    #[test]
    fn one_line_per_section_plus_totals() {
        let lines = format_generate_output(&[]);
        assert_eq!(lines.len(), SECTIONS.len() + 1);
        assert_eq!(lines[0], "Independent Craft Breweries (0)");
        assert_eq!(lines.last().unwrap(), "Rendered 0 records into 0 section entries");
    }

    #[test]
    fn counts_follow_tag_membership() {
        let records = vec![
            record("Astro Lab", "astro-lab", &["craft_brewery"]),
            record("Saints Row", "saints-row", &["craft_brewery"]),
            record("Dawson's", "dawsons", &["bottle_shop", "restaurant"]),
        ];
        let lines = format_generate_output(&records);
        assert_eq!(lines[0], "Independent Craft Breweries (2)");
        assert_eq!(lines[3], "Notable Bottle Shops (1)");
        assert_eq!(lines[5], "Notable Restaurants (1)");
    }

    #[test]
    fn multi_tag_records_inflate_entry_total() {
        let records = vec![record("Dawson's", "dawsons", &["bottle_shop", "restaurant"])];
        let lines = format_generate_output(&records);
        assert_eq!(lines.last().unwrap(), "Rendered 1 records into 2 section entries");
    }

    #[test]
    fn unknown_tags_count_nowhere() {
        let records = vec![record("Ghost Kitchen", "ghost", &["food_truck"])];
        let lines = format_generate_output(&records);
        assert_eq!(lines.last().unwrap(), "Rendered 1 records into 0 section entries");
    }
}
