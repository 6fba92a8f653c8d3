//! Amount token normalization.

/// Normalize a raw amount token into a signed value.
///
/// Strips the `$` currency symbol and thousands separators, relocating a
/// trailing negative marker (`"45.67-"`) to the front before parsing.
/// Returns 0.0 for anything that does not parse as a number.
pub fn clean_amount(raw: &str) -> f64 {
    let cleaned = raw.replace(['$', ','], "");
    let cleaned = cleaned.trim();

    let signed = match cleaned.strip_suffix('-') {
        Some(rest) => format!("-{rest}"),
        None => cleaned.to_string(),
    };

    signed.parse().unwrap_or(0.0)
}
