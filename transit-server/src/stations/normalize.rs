//! Search-key normalization for the prefix index.

use unicode_normalization::UnicodeNormalization;

/// Fold a station name (or query) into its search key.
///
/// The input is canonically decomposed, so accented letters split into a
/// base letter plus combining marks; everything outside printable ASCII is
/// then dropped and the rest lower-cased.
///
/// ```
/// use transit_server::stations::normalize;
///
/// assert_eq!(normalize("São Paulo"), "sao paulo");
/// assert_eq!(normalize("ÉVORA"), "evora");
/// ```
pub fn normalize(name: &str) -> String {
    name.nfd()
        .filter(|c| matches!(c, ' '..='~'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents() {
        assert_eq!(normalize("São"), "sao");
        assert_eq!(normalize("Conceição"), "conceicao");
        assert_eq!(normalize("Ñuñoa"), "nunoa");
        assert_eq!(normalize("Zürich Hbf"), "zurich hbf");
    }

    #[test]
    fn lowercases_ascii() {
        assert_eq!(normalize("RIO"), "rio");
        assert_eq!(normalize("Rio"), normalize("rIO"));
    }

    #[test]
    fn drops_non_ascii_without_decomposition() {
        assert_eq!(normalize("東京"), "");
        assert_eq!(normalize("Straße"), "strae");
        assert_eq!(normalize("tab\there"), "tabhere");
    }

    #[test]
    fn keeps_punctuation_and_digits() {
        assert_eq!(normalize("Terminal 2 - Norte"), "terminal 2 - norte");
    }
}
