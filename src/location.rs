//! Location fragment
//!
//! The open recipe's id lives in the URL fragment (`#47746`).

use percent_encoding::percent_decode_str;

/// Recipe id carried by a raw fragment, percent-decoded
pub fn recipe_id_from_fragment(fragment: &str) -> String {
    let raw = fragment.trim().trim_start_matches('#');
    percent_decode_str(raw).decode_utf8_lossy().trim().to_string()
}

/// Recipe id in the current page URL; empty when there is none
pub fn current_recipe_id() -> String {
    let fragment = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    recipe_id_from_fragment(&fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fragment() {
        assert_eq!(recipe_id_from_fragment("#47746"), "47746");
        assert_eq!(recipe_id_from_fragment("47746"), "47746");
    }

    #[test]
    fn test_empty_fragment() {
        assert_eq!(recipe_id_from_fragment(""), "");
        assert_eq!(recipe_id_from_fragment("#"), "");
    }

    #[test]
    fn test_percent_encoded_fragment() {
        assert_eq!(recipe_id_from_fragment("#abc%20def"), "abc def");
        assert_eq!(recipe_id_from_fragment("#%E2%9C%93"), "✓");
    }
}
