use num_format::{Locale, ToFormattedString};

/// Group digits the Russian way and append the currency symbol, e.g. `15 990 ₽`
pub fn format_price(amount: u64, currency_symbol: &str) -> String {
    format!("{} {}", amount.to_formatted_string(&Locale::ru), currency_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> String {
        s.chars().filter(char::is_ascii_digit).collect()
    }

    #[test]
    fn test_groups_thousands() {
        let formatted = format_price(15990, "₽");
        assert_eq!(digits(&formatted), "15990");
        assert!(formatted.starts_with("15"));
        assert!(!formatted.starts_with("15990"));
        assert!(formatted.ends_with(" ₽"));
    }

    #[test]
    fn test_small_amounts_are_not_grouped() {
        assert_eq!(format_price(990, "₽"), "990 ₽");
        assert_eq!(format_price(0, "₽"), "0 ₽");
    }

    #[test]
    fn test_millions() {
        let formatted = format_price(1_234_567, "₽");
        assert_eq!(digits(&formatted), "1234567");
        assert_eq!(formatted.chars().filter(|c| !c.is_ascii_digit()).count(), 4);
    }
}
