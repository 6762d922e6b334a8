//! Display helpers

/// Titles in result and like lists are cut to this many characters
pub const TITLE_LIMIT: usize = 17;

/// Shorten a title at a word boundary: `"Pasta with tomato and spinach"` -> `"Pasta with tomato ..."`
pub fn limit_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut length = 0;
    for word in title.split_whitespace() {
        let word_length = word.chars().count();
        if length + word_length > limit {
            break;
        }
        kept.push(word);
        length += word_length;
    }

    if kept.is_empty() {
        let cut: String = title.chars().take(limit).collect();
        return format!("{} ...", cut);
    }
    format!("{} ...", kept.join(" "))
}

/// Count as shown in a shopping list input
pub fn format_count(count: f64) -> String {
    let rounded = (count * 100.0).round() / 100.0;
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_unchanged() {
        assert_eq!(limit_title("Pizza Dip", TITLE_LIMIT), "Pizza Dip");
    }

    #[test]
    fn test_long_title_cut_at_word() {
        assert_eq!(limit_title("Pasta with tomato and spinach", TITLE_LIMIT), "Pasta with tomato ...");
    }

    #[test]
    fn test_single_long_word() {
        assert_eq!(limit_title("Supercalifragilisticexpialidocious", 5), "Super ...");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(4.5), "4.5");
        assert_eq!(format_count(2.0), "2");
        assert_eq!(format_count(1.0 / 3.0), "0.33");
    }
}
