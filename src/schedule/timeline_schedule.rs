use crate::common::*;

use crate::enums::event_category::*;
use crate::model::timeline::timeline_event::*;

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimelineError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        TimelineError::Configuration(format!(
            "invalid calendar date {:04}-{:02}-{:02} in the timeline schedule",
            year, month, day
        ))
    })
}

fn span(
    label: &str,
    start: NaiveDate,
    end: NaiveDate,
    category: EventCategory,
) -> TimelineEvent {
    TimelineEvent::new(label.to_string(), start, end, category)
}

#[doc = r#"
    The PhD timeline drawn every week. Edit this list as plans change.

    Conference windows for AAAI, ICML and NeurIPS follow the typical dates of recent
    editions and should be updated once the real dates are announced. Paper submission
    goals are single-day entries.

    # Returns
    * `Result<Vec<TimelineEvent>, TimelineError>` - `Configuration` if a date does not exist
"#]
pub fn build_events() -> Result<Vec<TimelineEvent>, TimelineError> {
    use EventCategory::*;

    Ok(vec![
        span("Internship at Epic", ymd(2025, 8, 7)?, ymd(2025, 12, 31)?, Internship),
        span("Funding (18 months)", ymd(2026, 1, 1)?, ymd(2027, 6, 30)?, Funding),
        span("Unfunded period", ymd(2027, 7, 1)?, ymd(2027, 12, 31)?, Unfunded),
        span("Teaching duties", ymd(2026, 1, 1)?, ymd(2026, 12, 31)?, Teaching),
        span("NeurIPS 2025", ymd(2025, 12, 2)?, ymd(2025, 12, 7)?, Conference),
        span("AAAI 2026", ymd(2026, 1, 20)?, ymd(2026, 1, 27)?, Conference),
        span("ICML 2026", ymd(2026, 7, 13)?, ymd(2026, 7, 19)?, Conference),
        span("NeurIPS 2026", ymd(2026, 12, 1)?, ymd(2026, 12, 7)?, Conference),
        span("AAAI 2027", ymd(2027, 2, 1)?, ymd(2027, 2, 8)?, Conference),
        span("ICML 2027", ymd(2027, 7, 10)?, ymd(2027, 7, 16)?, Conference),
        span("NeurIPS 2027", ymd(2027, 12, 1)?, ymd(2027, 12, 7)?, Conference),
        TimelineEvent::single_day("PIRC submission", ymd(2026, 5, 16)?, Deadline),
        TimelineEvent::single_day("Second paper submission", ymd(2027, 8, 15)?, Deadline),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hardcoded_schedule_is_valid() {
        let events = build_events().unwrap();

        assert_eq!(events.len(), 13);
        for event in &events {
            assert!(event.validate().is_ok(), "{:?}", event);
        }
    }

    #[test]
    fn every_category_is_used() {
        let events = build_events().unwrap();

        for category in EventCategory::ALL {
            assert!(events.iter().any(|event| *event.category() == category));
        }
    }

    #[test]
    fn impossible_date_is_a_configuration_error() {
        assert!(ymd(2026, 2, 30).unwrap_err().is_configuration());
    }
}
