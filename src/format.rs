//! Display formatting for record fields.
//!
//! Small pure string functions used by the record renderer: phone display
//! and operational-status classification. No I/O, no markup — these return
//! plain values the renderer wraps in tags.

/// Badge for a non-"open" operational status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBadge {
    /// CSS class hook: `in_planning`, `closed`, or the generic `status`.
    pub class: &'static str,
    /// Exact status text from the data file.
    pub label: String,
}

/// Format a digit string for display: `(AAA) BBB-CCCD...`.
///
/// The first three digits become the parenthesized area code, the next three
/// the exchange, and everything else trails unseparated. No validation of
/// length or content: short input produces short output (`"3015"` →
/// `"(301) 5-"`), never a panic.
pub fn phone_display(digits: &str) -> String {
    let area = digits.get(..3).unwrap_or(digits);
    let exchange = digits.get(3..6).or_else(|| digits.get(3..)).unwrap_or("");
    let rest = digits.get(6..).unwrap_or("");
    format!("({area}) {exchange}-{rest}")
}

/// Classify an operational status into a display badge.
///
/// An absent status or any capitalization of "open" renders no badge.
/// Otherwise the class comes from a case-insensitive substring check and the
/// label passes through verbatim.
pub fn status_badge(status: Option<&str>) -> Option<StatusBadge> {
    let status = status?;
    let lowered = status.to_lowercase();
    if lowered == "open" {
        return None;
    }
    let class = if lowered.contains("planning") {
        "in_planning"
    } else if lowered.contains("close") {
        "closed"
    } else {
        "status"
    };
    Some(StatusBadge {
        class,
        label: status.to_string(),
    })
}
