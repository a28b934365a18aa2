//! Small text helpers shared by assembly and source adapters.

use percent_encoding::percent_decode_str;

use crate::constants::csv_source;

/// Uppercase the first character, leaving the rest unchanged.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decode the final path segment of a location for display.
///
/// `+` is treated as an encoded space before percent-decoding, so an encoded
/// `%2B` still comes out as a literal plus.
pub fn decoded_final_segment(location: &str) -> String {
    let segment = location.rsplit('/').next().unwrap_or(location);
    let spaced = segment.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Display title for a CSV location: the decoded final segment minus one
/// trailing `.csv`.
pub fn csv_display_title(location: &str) -> String {
    let title = decoded_final_segment(location);
    match title.strip_suffix(csv_source::CSV_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => title,
    }
}
