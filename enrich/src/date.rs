//! Normalisation of sale dates to ISO-8601.

use jiff::civil::Date;

/// Reformats `value`, written in the strftime-like `format`, as `YYYY-MM-DD`.
/// `None` if the value does not match the format.
pub fn to_iso(value: &str, format: &str) -> Option<String> {
    Date::strptime(format, value.trim()).ok().map(|d| d.to_string())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("15/01/2020", "%d/%m/%Y", Some("2020-01-15"))]
    #[test_case(" 01/02/2019 ", "%d/%m/%Y", Some("2019-02-01"); "surrounding whitespace")]
    #[test_case("2019-02-01", "%Y-%m-%d", Some("2019-02-01"))]
    #[test_case("31/02/2020", "%d/%m/%Y", None; "nonexistent day")]
    #[test_case("2020-01-15", "%d/%m/%Y", None; "wrong format")]
    #[test_case("", "%d/%m/%Y", None; "empty")]
    fn iso_dates(value: &str, format: &str, expected: Option<&str>) {
        assert_eq!(to_iso(value, format).as_deref(), expected);
    }
}
