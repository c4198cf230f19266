//! Font name sanitizing

use std::sync::OnceLock;

use regex::Regex;

/// Anything that isn't an ASCII word character or a hyphen.
fn unsafe_char() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\-]").expect("static regex is valid"))
}

/// Turn a user-supplied font name into something usable as a file name and
/// a CSS class.
///
/// Surrounding ASCII whitespace (and NUL) is trimmed, then every remaining
/// character outside `[A-Za-z0-9_-]` becomes its own `-`, non-ASCII spaces
/// included. Runs are not collapsed, so `"a  b"` becomes `"a--b"`.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\0');
    unsafe_char().replace_all(trimmed, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strange_name() {
        assert_eq!(normalize_name(" A_stR4nG3  nAm3 Ø&  "), "A_stR4nG3--nAm3---");
    }

    #[test]
    fn test_normalize_keeps_safe_names() {
        assert_eq!(normalize_name("fontcustom"), "fontcustom");
        assert_eq!(normalize_name("my-icons_2"), "my-icons_2");
    }

    #[test]
    fn test_normalize_one_hyphen_per_character() {
        assert_eq!(normalize_name("Custom Name From Config"), "Custom-Name-From-Config");
        assert_eq!(normalize_name("a.\tb"), "a--b");
        assert_eq!(normalize_name("日本"), "--");
    }

    #[test]
    fn test_normalize_only_trims_ascii_whitespace() {
        assert_eq!(normalize_name("\u{00A0}icons\u{3000}"), "-icons-");
        assert_eq!(normalize_name("\0 icons\t\n"), "icons");
    }

    #[test]
    fn test_normalize_is_total() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for name in [" A_stR4nG3  nAm3 Ø&  ", "x y", "--", "émoji 🎉", "\ttab\n"] {
            let once = normalize_name(name);
            assert_eq!(normalize_name(&once), once);
        }
    }
}
