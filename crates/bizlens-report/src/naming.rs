/// Turn a `snake_case` metric key into a title-cased label.
///
/// Underscores become spaces and every letter that follows a non-letter is
/// upper-cased, all others lower-cased: `total_reviews` -> `Total Reviews`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_is_letter = false;
    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_becomes_title_case() {
        assert_eq!(humanize_key("total_reviews"), "Total Reviews");
        assert_eq!(humanize_key("average_rating"), "Average Rating");
        assert_eq!(
            humanize_key("total_search_impressions"),
            "Total Search Impressions"
        );
    }

    #[test]
    fn existing_capitals_are_normalized() {
        assert_eq!(humanize_key("TOTAL_calls"), "Total Calls");
    }

    #[test]
    fn letters_after_digits_start_a_word() {
        assert_eq!(humanize_key("top_3d_views"), "Top 3D Views");
    }

    #[test]
    fn empty_key_stays_empty() {
        assert_eq!(humanize_key(""), "");
    }
}
