//! Rounding and display helpers shared by the engine and the presentation layer.

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round toward negative infinity at `decimals` places.
pub fn floor_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).floor() / factor
}

/// `1234.5` with 0 decimals -> `"1,235 coins"`.
pub fn format_coins(amount: f64, decimals: u32) -> String {
    format!("{} coins", group_thousands(amount, decimals))
}

/// Signed percentage with two decimals, e.g. `"+4.17%"`.
pub fn format_pct(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{pct:.2}%")
    } else {
        format!("{pct:.2}%")
    }
}

fn group_thousands(amount: f64, decimals: u32) -> String {
    let rendered = format!("{:.*}", decimals as usize, round_to(amount, decimals).abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (rendered, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && round_to(amount, decimals) != 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round_to(110.000_000_000_01, 0), 110.0);
        assert_eq!(round_to(63.666_66, 2), 63.67);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(floor_to(99.99, 0), 99.0);
        assert_eq!(floor_to(12.349, 2), 12.34);
    }

    #[test]
    fn coins_are_grouped() {
        assert_eq!(format_coins(0.0, 0), "0 coins");
        assert_eq!(format_coins(950.0, 0), "950 coins");
        assert_eq!(format_coins(1_234.5, 0), "1,235 coins");
        assert_eq!(format_coins(1_234_567.891, 2), "1,234,567.89 coins");
        assert_eq!(format_coins(-1_500.0, 0), "-1,500 coins");
    }

    #[test]
    fn percentages_carry_sign() {
        assert_eq!(format_pct(4.166_67), "+4.17%");
        assert_eq!(format_pct(-3.0), "-3.00%");
        assert_eq!(format_pct(0.0), "0.00%");
    }
}
