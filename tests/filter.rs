use calsynth::calendar::{filter, placeholder_date};
use calsynth::model::{CalendarWeek, ContributionCalendar, ContributionDay, RawDay};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn day(s: &str, count: u32) -> ContributionDay {
    ContributionDay::new(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap(), count)
}

#[test]
fn zero_count_entries_are_dropped() {
    let raw = vec![
        RawDay::new("2021-01-01", 3),
        RawDay::new("2021-01-02", 0),
        RawDay::new("2021-01-03", 2),
    ];
    let out = filter(&raw);
    assert_eq!(out.days, vec![day("2021-01-01", 3), day("2021-01-03", 2)]);
    assert!(out.warnings.is_empty());
    assert!(out.days.iter().all(|d| d.count > 0));
}

#[test]
fn output_preserves_calendar_order_across_weeks() {
    let calendar = ContributionCalendar {
        total_contributions: Some(10),
        weeks: vec![
            CalendarWeek {
                contribution_days: vec![
                    RawDay::new("2020-12-27", 1),
                    RawDay::new("2020-12-31", 0),
                    RawDay::new("2021-01-02", 4),
                ],
            },
            CalendarWeek {
                contribution_days: vec![
                    RawDay::new("2021-01-03", 2),
                    RawDay::new("2021-01-09", 3),
                ],
            },
        ],
    };
    let out = filter(calendar.raw_days());
    let dates: Vec<String> = out.days.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(dates, vec!["2020-12-27", "2021-01-02", "2021-01-03", "2021-01-09"]);
}

#[test]
fn malformed_date_is_kept_with_placeholder_and_one_warning() {
    let raw = vec![
        RawDay::new("2021-01-01", 1),
        RawDay::new("01/02/2021", 5),
        RawDay::new("2021-01-03", 2),
    ];
    let out = filter(&raw);

    assert_eq!(out.days.len(), 3);
    assert_eq!(out.days[1], ContributionDay::new(placeholder_date(), 5));
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].index, 1);
    assert_eq!(out.warnings[0].raw, "01/02/2021");
}

#[test]
fn malformed_date_with_zero_count_is_silent() {
    let raw = vec![RawDay::new("not-a-date", 0)];
    let out = filter(&raw);
    assert!(out.days.is_empty());
    assert!(out.warnings.is_empty());
}

#[test]
fn placeholder_is_unix_epoch() {
    assert_eq!(placeholder_date().to_string(), "1970-01-01");
}

#[test]
fn calendar_total_falls_back_to_sum_of_counts() {
    let mut calendar = ContributionCalendar {
        total_contributions: None,
        weeks: vec![CalendarWeek {
            contribution_days: vec![RawDay::new("2021-01-01", 3), RawDay::new("2021-01-03", 2)],
        }],
    };
    assert_eq!(calendar.total(), 5);
    calendar.total_contributions = Some(42);
    assert_eq!(calendar.total(), 42);
}
