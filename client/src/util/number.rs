//! Display formatting for counts and amounts.

#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

/// `1234567` -> `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Signed percentage change, `+12.5%` / `-2.1%`. Zero counts as a gain.
pub fn signed_percent(delta: f64) -> String {
    if delta >= 0.0 { format!("+{delta}%") } else { format!("{delta}%") }
}
