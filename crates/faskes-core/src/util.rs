//! Shared string helpers used by the dataset loader and the site.

use std::sync::LazyLock;

use regex::Regex;

static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid regex"));

/// Abbreviate a name to the uppercased first letter of each word.
///
/// # Examples
///
/// ```
/// use faskes_core::util::get_initial;
///
/// assert_eq!(get_initial("Jawa Barat"), "JB");
/// assert_eq!(get_initial("DKI Jakarta"), "DJ");
/// ```
#[must_use]
pub fn get_initial(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Build a URL slug from a display name.
///
/// Lowercases the name and collapses every run of characters outside
/// `[a-z0-9]` into a single `-`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    SLUG_SEPARATORS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_initial_takes_first_letter_of_each_word() {
        assert_eq!(get_initial("Jawa Barat"), "JB");
        assert_eq!(get_initial("Kepulauan Bangka Belitung"), "KBB");
        assert_eq!(get_initial("Aceh"), "A");
    }

    #[test]
    fn get_initial_uppercases_and_ignores_extra_whitespace() {
        assert_eq!(get_initial("  nusa   tenggara barat "), "NTB");
        assert_eq!(get_initial(""), "");
        assert_eq!(get_initial("   "), "");
    }

    #[test]
    fn get_initial_is_deterministic() {
        assert_eq!(get_initial("Papua Barat"), get_initial("Papua Barat"));
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Jawa Barat"), "jawa-barat");
        assert_eq!(slugify("DI Yogyakarta"), "di-yogyakarta");
        assert_eq!(
            slugify("  Kepulauan Bangka -- Belitung "),
            "kepulauan-bangka-belitung"
        );
    }

    #[test]
    fn slugify_of_symbols_only_is_empty() {
        assert_eq!(slugify("&&"), "");
    }

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn normalize_text_option_trims_value() {
        assert_eq!(
            normalize_text_option(Some(" out/site ".to_string())),
            Some("out/site".to_string())
        );
    }
}
