//! Text formatting helpers used when presenting employee records.

/// Formats a phone number as `(XXX) XXX-XXXX` when it contains exactly ten digits.
///
/// Anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use employee_directory::domain::text::format_phone_number;
///
/// assert_eq!(format_phone_number("555.123.4567"), "(555) 123-4567");
/// assert_eq!(format_phone_number("+81 965-431-3024"), "+81 965-431-3024");
/// ```
#[must_use]
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

/// Upper-cases the first letter of each space-separated word and lower-cases the rest.
///
/// ```
/// use employee_directory::domain::text::capitalize_words;
///
/// assert_eq!(capitalize_words("sales MANAGER"), "Sales Manager");
/// ```
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates `text` to `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("5551234567", "(555) 123-4567")]
    #[case("(555) 123 4567", "(555) 123-4567")]
    #[case("12345", "12345")]
    #[case("", "")]
    fn phone_numbers(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_phone_number(input), expected);
    }

    #[rstest]
    #[case("research and development", "Research And Development")]
    #[case("", "")]
    #[case("a  b", "A  B")]
    fn capitalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize_words(input), expected);
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_text("héllo world", 5), "héllo...");
        assert_eq!(truncate_text("short", 10), "short");
    }
}
