/// Groups the digits of `value` in threes: `group_thousands(1234567, '.')` is `"1.234.567"`.
pub fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers_untouched() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(7, '.'), "7");
        assert_eq!(group_thousands(999, '.'), "999");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(1234567, '.'), "1.234.567");
        assert_eq!(group_thousands(100000, '.'), "100.000");
        assert_eq!(group_thousands(12345, ','), "12,345");
    }

    #[test]
    fn test_negative_and_extremes() {
        assert_eq!(group_thousands(-1500, '.'), "-1.500");
        assert_eq!(group_thousands(-999, '.'), "-999");
        assert_eq!(group_thousands(i64::MIN, '.'), "-9.223.372.036.854.775.808");
    }
}
