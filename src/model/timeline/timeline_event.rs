use crate::common::*;

use crate::enums::event_category::*;

#[doc = r#"
    One labelled date interval on the timeline.

    `start` and `end` are inclusive; a single-day entry uses the same date for both.
    Construction does not validate the interval, `validate` does, so that a bad entry in
    the hardcoded schedule surfaces as a configuration error of the chart run.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct TimelineEvent {
    label: String,
    start: NaiveDate,
    end: NaiveDate,
    category: EventCategory,
}

impl TimelineEvent {
    pub fn single_day(label: impl Into<String>, day: NaiveDate, category: EventCategory) -> Self {
        TimelineEvent::new(label.into(), day, day, category)
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    #[doc = r#"
        Checks the `start <= end` invariant.

        # Returns
        * `Result<(), TimelineError>` - `Configuration` naming the event when `end` precedes `start`
    "#]
    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.end < self.start {
            return Err(TimelineError::Configuration(format!(
                "event '{}' ends on {} before it starts on {}",
                self.label, self.end, self.start
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_events_are_valid() {
        let event = TimelineEvent::single_day(
            "PIRC submission",
            ymd(2026, 5, 16),
            EventCategory::Deadline,
        );

        assert!(event.is_single_day());
        assert!(event.validate().is_ok());
    }

    #[test]
    fn reversed_interval_is_a_configuration_error() {
        let event = TimelineEvent::new(
            "Backwards".to_string(),
            ymd(2026, 3, 2),
            ymd(2026, 3, 1),
            EventCategory::Teaching,
        );

        let err = event.validate().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("Backwards"));
    }
}
