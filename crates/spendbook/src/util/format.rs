use jiff::civil::{Date, Weekday};

/// Format an integer amount with thousands separators.
pub fn format_amount(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if value < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Label for a day-group header: the date plus its weekday.
pub fn day_label(date: Date) -> String {
    format!("{} ({})", date, weekday_short(date.weekday()))
}

fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}
