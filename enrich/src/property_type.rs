//! Ranking of property types by median sale price (1 = highest).

/// Rank of a property type label, `None` for labels without a rank.
/// Labels are matched case-insensitively, ignoring surrounding whitespace.
pub fn rank(label: &str) -> Option<u8> {
    let rank = match label.trim().to_ascii_lowercase().as_str() {
        "house" => 1,
        "duplex-semi-detached" => 2,
        "villa" => 3,
        "townhouse" => 4,
        "terrace" => 5,
        "apartment" | "flat" | "unit" => 6,
        //ranked by land value
        "acreage" => 7,
        "residential-other" => 8,
        _ => return None,
    };
    Some(rank)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("house", Some(1))]
    #[test_case("duplex-semi-detached", Some(2))]
    #[test_case("Villa", Some(3))]
    #[test_case(" townhouse ", Some(4))]
    #[test_case("terrace", Some(5))]
    #[test_case("apartment", Some(6))]
    #[test_case("flat", Some(6))]
    #[test_case("UNIT", Some(6))]
    #[test_case("acreage", Some(7))]
    #[test_case("residential-other", Some(8))]
    #[test_case("castle", None)]
    #[test_case("", None)]
    fn ranks(label: &str, expected: Option<u8>) {
        assert_eq!(rank(label), expected);
    }
}
