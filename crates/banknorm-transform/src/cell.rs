//! Cell-level text cleanup.

use banknorm_model::{CellValue, DecimalConvention};

/// Currency symbols removed from amount text.
const CURRENCY_SYMBOLS: [char; 3] = ['€', '$', '£'];

/// Returns the trimmed text of a cell, or `None` when it is absent.
///
/// Numbers render in their shortest round-trip form, so `10.0` becomes `"10"`.
pub fn cell_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Empty => None,
        CellValue::Text(value) => {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        CellValue::Number(value) => Some(value.to_string()),
    }
}

/// Rewrites amount text into plain `-1234.56` form for the given convention.
///
/// Whitespace (non-breaking spaces included), currency symbols and a leading
/// `+` are removed, thousands separators are dropped and the decimal
/// separator becomes `.`. The result is not validated.
pub fn normalize_amount_text(raw: &str, convention: DecimalConvention) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !CURRENCY_SYMBOLS.contains(c))
        .collect();
    let unsigned = cleaned.strip_prefix('+').unwrap_or(&cleaned);

    let thousands = convention.thousands_separator();
    let decimal = convention.decimal_separator();
    unsigned
        .chars()
        .filter(|c| *c != thousands)
        .map(|c| if c == decimal { '.' } else { c })
        .collect()
}

/// Removes `/`, `\` and `,` from payee text and trims the result.
pub fn sanitize_payee(raw: &str) -> String {
    raw.replace(['/', '\\', ','], "").trim().to_string()
}
