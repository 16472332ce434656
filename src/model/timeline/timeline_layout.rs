use crate::common::*;

use crate::enums::event_category::*;
use crate::model::timeline::timeline_event::*;
use crate::utils_modules::time_utils::*;

/* Width of a bar for an event that starts and ends on the same day */
pub const MIN_BAR_DAYS: f64 = 1.0;
/* Lower bound of the padding added on both sides of the date axis */
pub const MIN_AXIS_PADDING_DAYS: i64 = 7;
/* Half width of the axis drawn around today when there is nothing to plot */
pub const EMPTY_AXIS_HALF_SPAN_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct TimelineBar {
    label: String,
    category: EventCategory,
    /// 0 is the top row of the chart.
    row: usize,
    start_day: f64,
    /// Exclusive: the bar covers the whole of the event's last day.
    end_day: f64,
}

#[doc = r#"
    Drawable plan of the timeline chart, computed without touching the filesystem.

    Rows are grouped by category and ordered by start date inside a group, ties keeping
    the insertion order. The x axis always contains every bar and the today marker.
"#]
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct TimelineLayout {
    bars: Vec<TimelineBar>,
    axis_start: NaiveDate,
    axis_end: NaiveDate,
    ticks: Vec<NaiveDate>,
    today: NaiveDate,
}

impl TimelineLayout {
    #[doc = r#"
        Validates `events` and lays them out on a shared date axis.

        # Arguments
        * `events` - timeline entries in insertion order
        * `today`  - date of the vertical today marker

        # Returns
        * `Result<TimelineLayout, TimelineError>` - `Configuration` when any event ends before it starts
    "#]
    pub fn plan(events: &[TimelineEvent], today: NaiveDate) -> Result<Self, TimelineError> {
        for event in events {
            event.validate()?;
        }

        let mut ordered: Vec<&TimelineEvent> = events.iter().collect();
        ordered.sort_by_key(|event| (event.category().group_order(), *event.start()));

        let bars: Vec<TimelineBar> = ordered
            .into_iter()
            .enumerate()
            .map(|(row, event)| {
                let start_day: f64 = day_number(*event.start());
                let end_day: f64 = (day_number(*event.end()) + 1.0).max(start_day + MIN_BAR_DAYS);

                TimelineBar {
                    label: event.label().clone(),
                    category: *event.category(),
                    row,
                    start_day,
                    end_day,
                }
            })
            .collect();

        let (axis_start, axis_end) = Self::axis_bounds(events, today);
        let ticks: Vec<NaiveDate> = quarter_ticks(axis_start, axis_end);

        Ok(TimelineLayout {
            bars,
            axis_start,
            axis_end,
            ticks,
            today,
        })
    }

    fn axis_bounds(events: &[TimelineEvent], today: NaiveDate) -> (NaiveDate, NaiveDate) {
        if events.is_empty() {
            return (
                shift_days(today, -EMPTY_AXIS_HALF_SPAN_DAYS),
                shift_days(today, EMPTY_AXIS_HALF_SPAN_DAYS),
            );
        }

        let earliest: NaiveDate = events
            .iter()
            .map(|event| *event.start())
            .fold(today, NaiveDate::min);
        let latest: NaiveDate = events
            .iter()
            .map(|event| *event.end())
            .fold(today, NaiveDate::max);

        let span_days: i64 = (latest - earliest).num_days();
        let padding: i64 = (span_days / 20).max(MIN_AXIS_PADDING_DAYS);

        (shift_days(earliest, -padding), shift_days(latest, padding))
    }

    pub fn row_count(&self) -> usize {
        self.bars.len()
    }

    #[doc = "First x coordinate of the plot"]
    pub fn x_start(&self) -> f64 {
        day_number(self.axis_start)
    }

    #[doc = "Last x coordinate of the plot, covering the whole last axis day"]
    pub fn x_end(&self) -> f64 {
        day_number(self.axis_end) + 1.0
    }

    pub fn today_day(&self) -> f64 {
        day_number(self.today)
    }

    #[doc = "Categories that have at least one bar, in group order"]
    pub fn categories(&self) -> Vec<EventCategory> {
        EventCategory::ALL
            .into_iter()
            .filter(|category| self.bars.iter().any(|bar| bar.category == *category))
            .collect()
    }
}
