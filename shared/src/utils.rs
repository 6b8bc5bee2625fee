// Number handling shared by the engine and the GUI: separator stripping on the
// way in, rounding and grouped display on the way out.

pub mod number_format {
    use serde::{Deserialize, Serialize};

    /// How digits left of the decimal point are grouped for display.
    #[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
    #[serde(rename_all = "lowercase")]
    pub enum Grouping {
        /// 1,234,567.89
        #[default]
        Thousands,
        /// 12,34,567.89 (lakh/crore)
        Indian,
    }

    /// Trims the text and removes every ',' thousands separator.
    pub fn strip_separators(raw: &str) -> String {
        raw.trim().chars().filter(|&c| c != ',').collect()
    }

    /// Rounds half away from zero to `decimals` places.
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        let scaled = value * factor;
        if !scaled.is_finite() {
            return value;
        }
        scaled.round() / factor
    }

    fn group_digits(digits: &str, grouping: Grouping) -> String {
        let bytes = digits.as_bytes();
        let len = bytes.len();
        if len <= 3 {
            return digits.to_string();
        }

        let mut out = String::with_capacity(len + len / 2);
        for (i, &b) in bytes.iter().enumerate() {
            let from_right = len - i;
            if i > 0 {
                let boundary = match grouping {
                    Grouping::Thousands => from_right % 3 == 0,
                    Grouping::Indian => {
                        from_right == 3 || (from_right > 3 && (from_right - 3) % 2 == 0)
                    }
                };
                if boundary {
                    out.push(',');
                }
            }
            out.push(b as char);
        }
        out
    }

    /// Fixed-decimal rendering with digit group separators.
    pub fn format_grouped(value: f64, decimals: usize, grouping: Grouping) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        // "-0.00" is shown as "0.00"
        let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, grouping));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }

    /// Monetary amount with a currency prefix, e.g. "₹17,623.42".
    pub fn format_currency(value: f64, symbol: &str, grouping: Grouping) -> String {
        let grouped = format_grouped(value, 2, grouping);
        match grouped.strip_prefix('-') {
            Some(rest) => format!("-{}{}", symbol, rest),
            None => format!("{}{}", symbol, grouped),
        }
    }

    /// Percentage with two decimals, e.g. "14.87%".
    pub fn format_percent(value: f64) -> String {
        format!("{}%", format_grouped(value, 2, Grouping::Thousands))
    }

}
