//! Shared output formatting for holiday listings.

use holidate_core::Holiday;
use tabled::{settings::Style, Table, Tabled};

/// Row for the holidays table.
#[derive(Tabled)]
struct HolidayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Weekday")]
    weekday: String,
    #[tabled(rename = "Template")]
    template: String,
}

impl From<&Holiday> for HolidayRow {
    fn from(h: &Holiday) -> Self {
        Self {
            date: format_date(h),
            weekday: h.date.format("%A").to_string(),
            template: h.template.clone(),
        }
    }
}

/// Print holidays as a table, in the order given.
pub fn print_holidays_table(holidays: &[&Holiday]) {
    if holidays.is_empty() {
        println!("(no holidays configured)");
        return;
    }

    let rows: Vec<HolidayRow> = holidays.iter().map(|h| HolidayRow::from(*h)).collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();

    println!("{}", table);
    println!("-- {} holidays --", rows.len());
}

/// Print holidays as `TEMPLATE -> DATE` lines.
pub fn print_holidays_plain(holidays: &[&Holiday]) {
    for h in holidays {
        println!("{} -> {}", h.template, format_date(h));
    }
}

/// Print holidays as JSON.
pub fn print_holidays_json(holidays: &[&Holiday]) {
    println!("{}", serde_json::to_string_pretty(holidays).unwrap_or_default());
}

fn format_date(h: &Holiday) -> String {
    h.date.format("%Y-%m-%d").to_string()
}
