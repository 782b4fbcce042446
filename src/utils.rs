// src/utils.rs
use ethers::types::U256;

use crate::supply::ReadState;

/// Shown whenever a value is absent, still loading, or not yet safe to render.
pub const PLACEHOLDER: &str = "??";

const SUFFIXES: [&str; 4] = ["K", "M", "B", "T"];

/// Drops the fractional part after scaling by `10^decimals`.
pub fn scale_down(value: U256, decimals: u8) -> U256 {
    if decimals == 0 {
        return value;
    }
    value / U256::exp10(decimals as usize)
}

/// English compact notation for a whole number: `123000` -> `123K`,
/// `1234567` -> `1.2M`. Values below 1000 are printed as-is and anything
/// past the trillions keeps the `T` suffix, grouped with commas from five
/// digits on.
pub fn compact(value: U256) -> String {
    let digits = value.to_string();
    let len = digits.len();
    if len < 4 {
        return digits;
    }

    let mut group = ((len - 1) / 3).min(SUFFIXES.len());
    let int_len = len - 3 * group;
    // one integer digit keeps a single decimal place, otherwise round to a whole unit
    let keep = if int_len == 1 { 2 } else { int_len };

    let dropped = len - keep;
    let divisor = U256::exp10(dropped);
    let mut kept = value / divisor;
    let next_digit = (value / U256::exp10(dropped - 1)) % U256::from(10u8);
    if next_digit >= U256::from(5u8) {
        kept += U256::one();
    }

    let rendered = kept.to_string();
    let body = if int_len == 1 {
        if rendered.len() > keep {
            // 9.96 rounds to 10
            rendered[..2].to_string()
        } else {
            let (whole, fraction) = rendered.split_at(1);
            if fraction == "0" {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            }
        }
    } else if rendered.len() > keep && int_len == 3 && group < SUFFIXES.len() {
        // 999.5K becomes 1M
        group += 1;
        "1".to_string()
    } else {
        group_thousands(&rendered)
    };

    format!("{body}{}", SUFFIXES[group - 1])
}

// Separators only kick in from five integer digits: 1234T but 12,345T.
fn group_thousands(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_supply(raw: U256, decimals: u8) -> String {
    compact(scale_down(raw, decimals))
}

pub fn display_value(state: &ReadState, decimals: u8, mounted: bool) -> String {
    match state {
        ReadState::Success(raw) if mounted => format_supply(*raw, decimals),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
