//! Compact display form for serialized expression labels.
//!
//! Species labels are serialized lambda expressions like `\v1.\v2.\v1`,
//! which get unwieldy fast. [`shorten`] truncates them deterministically:
//! dot-separated labels keep their leading binder plus a parenthesized
//! count of the remaining segments (a structural-depth hint), everything
//! else is cut to width with a `..` suffix.

/// Default display width used by the reporting layer.
pub const DEFAULT_LABEL_WIDTH: usize = 12;

/// Shortens a label to roughly `max_len` characters. Total and pure:
/// labels already within the width are returned unchanged.
pub fn shorten(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        return label.to_string();
    }
    let segments: Vec<&str> = label.split('.').collect();
    if segments.len() <= 2 {
        let prefix: String = label.chars().take(max_len.saturating_sub(2)).collect();
        return format!("{prefix}..");
    }
    format!("{}..({})", segments[0], segments.len() - 1)
}
