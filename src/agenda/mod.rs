//! Agenda: appointments and calendar range generation.
//!
//! The month grid reproduces the CRM calendar layout: it opens on the
//! Sunday on or before the 1st and runs day by day until it has passed the
//! end of the month and landed back on a Sunday, so the grid is always
//! whole weeks (35 or 42 cells).

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

pub const WEEKDAYS_SHORT: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Appointment kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Meeting,
    Call,
    Followup,
    Presentation,
    Other,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Meeting => "Reunião",
            EventKind::Call => "Ligação",
            EventKind::Followup => "Follow-up",
            EventKind::Presentation => "Apresentação",
            EventKind::Other => "Outro",
        }
    }
}

/// Calendar appointment, optionally linked to a lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub kind: EventKind,
    pub location: Option<String>,
    pub attendees: Vec<String>,
    pub lead_id: Option<String>,
    pub reminder_minutes: u32,
}

impl Appointment {
    /// "14:00 - 15:00"
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

/// Appointments starting on a given day, in collection order.
pub fn events_on<'a>(events: &'a [Appointment], date: NaiveDate) -> Vec<&'a Appointment> {
    events.iter().filter(|e| e.date == date).collect()
}

/// Which calendar layout is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::Month => "month",
            CalendarView::Week => "week",
            CalendarView::Day => "day",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "month" => Some(CalendarView::Month),
            "week" => Some(CalendarView::Week),
            "day" => Some(CalendarView::Day),
            _ => None,
        }
    }
}

/// Navigation direction for the focus date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    let next = first_of_month(date) + Months::new(1);
    next - Duration::days(1)
}

/// Month grid: whole weeks from the Sunday on or before the 1st through the
/// Saturday on or after the last day of the month.
pub fn month_grid(focus: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(focus);
    let last = last_of_month(focus);
    let mut day = first - Duration::days(first.weekday().num_days_from_sunday() as i64);

    let mut days = Vec::new();
    while day <= last || day.weekday() != Weekday::Sun {
        days.push(day);
        day += Duration::days(1);
    }
    days
}

/// The Sunday-to-Saturday week containing the focus date.
pub fn week_days(focus: NaiveDate) -> Vec<NaiveDate> {
    let start = focus - Duration::days(focus.weekday().num_days_from_sunday() as i64);
    (0..7).map(|i| start + Duration::days(i)).collect()
}

/// Step the focus date by one view unit. Month steps clamp the day to the
/// target month's length (Jan 31 -> Feb 28/29).
pub fn navigate(focus: NaiveDate, view: CalendarView, step: Step) -> NaiveDate {
    match (view, step) {
        (CalendarView::Month, Step::Next) => focus + Months::new(1),
        (CalendarView::Month, Step::Prev) => focus - Months::new(1),
        (CalendarView::Week, Step::Next) => focus + Duration::days(7),
        (CalendarView::Week, Step::Prev) => focus - Duration::days(7),
        (CalendarView::Day, Step::Next) => focus + Duration::days(1),
        (CalendarView::Day, Step::Prev) => focus - Duration::days(1),
    }
}

/// Header text for the current range: "janeiro de 2024" for month and week
/// views, "16 de janeiro de 2024" for the day view.
pub fn range_label(focus: NaiveDate, view: CalendarView) -> String {
    let month = MONTHS_PT[focus.month0() as usize];
    match view {
        CalendarView::Day => format!("{} de {} de {}", focus.day(), month, focus.year()),
        _ => format!("{} de {}", month, focus.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_grid_is_whole_weeks() {
        for (y, m) in [(2024, 1), (2024, 2), (2024, 12), (2023, 2), (2026, 8)] {
            let grid = month_grid(date(y, m, 15));
            assert_eq!(grid.len() % 7, 0, "{}-{} grid not whole weeks", y, m);
            assert_eq!(grid[0].weekday(), Weekday::Sun);
            assert_eq!(grid[grid.len() - 1].weekday(), Weekday::Sat);
        }
    }

    #[test]
    fn test_month_grid_january_2024() {
        // Jan 1 2024 is a Monday, so the grid opens on Sunday Dec 31
        let grid = month_grid(date(2024, 1, 16));
        assert_eq!(grid[0], date(2023, 12, 31));
        assert_eq!(grid[grid.len() - 1], date(2024, 2, 3));
        assert_eq!(grid.len(), 35);
    }

    #[test]
    fn test_month_grid_contains_every_day_of_month() {
        let grid = month_grid(date(2024, 2, 10));
        for d in 1..=29 {
            assert!(grid.contains(&date(2024, 2, d)));
        }
    }

    #[test]
    fn test_month_grid_exact_weeks_month() {
        // September 2024 starts on a Sunday and has 30 days; the grid still
        // closes on a Saturday.
        let grid = month_grid(date(2024, 9, 1));
        assert_eq!(grid[0], date(2024, 9, 1));
        assert_eq!(grid[grid.len() - 1], date(2024, 10, 5));
    }

    #[test]
    fn test_week_days_contains_focus() {
        let week = week_days(date(2024, 1, 17));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], date(2024, 1, 14)); // Sunday
        assert_eq!(week[6], date(2024, 1, 20)); // Saturday
        assert!(week.contains(&date(2024, 1, 17)));
    }

    #[test]
    fn test_navigate_month_clamps_day() {
        let next = navigate(date(2024, 1, 31), CalendarView::Month, Step::Next);
        assert_eq!(next, date(2024, 2, 29));
        let prev = navigate(date(2024, 3, 31), CalendarView::Month, Step::Prev);
        assert_eq!(prev, date(2024, 2, 29));
    }

    #[test]
    fn test_navigate_week_and_day() {
        assert_eq!(
            navigate(date(2024, 1, 16), CalendarView::Week, Step::Next),
            date(2024, 1, 23)
        );
        assert_eq!(
            navigate(date(2024, 1, 16), CalendarView::Day, Step::Prev),
            date(2024, 1, 15)
        );
    }

    #[test]
    fn test_range_label() {
        assert_eq!(
            range_label(date(2024, 1, 16), CalendarView::Month),
            "janeiro de 2024"
        );
        assert_eq!(
            range_label(date(2024, 1, 16), CalendarView::Day),
            "16 de janeiro de 2024"
        );
    }

    #[test]
    fn test_events_on_filters_by_date() {
        let mk = |id: &str, d: NaiveDate| Appointment {
            id: id.to_string(),
            title: format!("Evento {}", id),
            description: String::new(),
            date: d,
            start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            kind: EventKind::Meeting,
            location: None,
            attendees: Vec::new(),
            lead_id: None,
            reminder_minutes: 15,
        };
        let events = vec![
            mk("1", date(2024, 1, 16)),
            mk("2", date(2024, 1, 17)),
            mk("3", date(2024, 1, 16)),
        ];
        let day = events_on(&events, date(2024, 1, 16));
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].id, "1");
        assert_eq!(day[1].id, "3");
    }

    #[test]
    fn test_time_range_format() {
        let e = Appointment {
            id: "1".to_string(),
            title: "Reunião".to_string(),
            description: String::new(),
            date: date(2024, 1, 16),
            start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
            kind: EventKind::Meeting,
            location: None,
            attendees: Vec::new(),
            lead_id: None,
            reminder_minutes: 15,
        };
        assert_eq!(e.time_range(), "14:00 - 15:30");
    }
}
