use chrono::NaiveDate;

/// Whole-dollar currency rendering with thousands separators, e.g. 325000 -> "$3,250".
pub fn format_currency(cents: i64) -> String {
    let negative = cents < 0;
    let dollars = (cents / 100).abs();
    let raw = dollars.to_string();
    let mut grouped = String::new();
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// "Mar 15, 2026" style date rendering.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
