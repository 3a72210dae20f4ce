//! Number formatting for table cells and stat cards.

/// Format with a fixed number of decimals and a thin-space thousands
/// separator in the integer part.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let mut parts = formatted.splitn(2, '.');
    let integer_part = parts.next().unwrap_or("0");
    let decimal_part = parts.next();

    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(' ');
        }
        grouped.push(*c);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", integer_grouped, d),
        None => integer_grouped,
    }
}

pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

pub fn format_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Compact form for stat cards: 1.2M / 34.5K / plain below a thousand.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format_int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn integers_have_no_decimals() {
        assert_eq!(format_int(1234567.0), "1 234 567");
        assert_eq!(format_int(0.0), "0");
        assert_eq!(format_int(-1234.0), "-1 234");
    }

    #[test]
    fn compact_scales_by_magnitude() {
        assert_eq!(format_compact(1_500_000.0), "1.5M");
        assert_eq!(format_compact(34_500.0), "34.5K");
        assert_eq!(format_compact(999.0), "999");
    }
}
