use crate::common::*;

#[doc = "Day number used as the chart x coordinate (days since 0001-01-01 CE)"]
pub fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

#[doc = "Inverse of `day_number`; fractional days are truncated"]
pub fn date_from_day_number(day: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(day.floor() as i32)
}

#[doc = "Shifts a date by a signed number of days, saturating at the calendar bounds"]
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(chrono::Duration::days(days))
        .unwrap_or(if days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

#[doc = r#"
    Returns the first day of every quarter (January, April, July, October) that falls
    inside `[from, to]`, in ascending order.

    # Arguments
    * `from` - first date of the axis
    * `to`   - last date of the axis

    # Returns
    * `Vec<NaiveDate>` - tick dates, empty when `to < from`
"#]
pub fn quarter_ticks(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut ticks: Vec<NaiveDate> = Vec::new();

    if to < from {
        return ticks;
    }

    /* First quarter start on or after `from` */
    let mut year: i32 = from.year();
    let mut month: u32 = ((from.month() - 1) / 3) * 3 + 1;

    while let Some(tick) = NaiveDate::from_ymd_opt(year, month, 1) {
        if tick > to {
            break;
        }

        if tick >= from {
            ticks.push(tick);
        }

        month += 3;
        if month > 12 {
            month -= 12;
            year += 1;
        }
    }

    ticks
}

#[doc = "Axis label for a tick, e.g. `Jan 2026`"]
pub fn format_tick_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

#[doc = "Current local calendar date, the default value of the chart's today marker"]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_number_is_reversible() {
        let date = ymd(2025, 12, 31);
        assert_eq!(date_from_day_number(day_number(date)), Some(date));
        assert_eq!(day_number(ymd(2026, 1, 1)) - day_number(date), 1.0);
    }

    #[test]
    fn quarter_ticks_land_on_quarter_starts_inside_range() {
        let ticks = quarter_ticks(ymd(2025, 8, 7), ymd(2026, 7, 1));

        assert_eq!(
            ticks,
            vec![ymd(2025, 10, 1), ymd(2026, 1, 1), ymd(2026, 4, 1), ymd(2026, 7, 1)]
        );
    }

    #[test]
    fn quarter_ticks_include_a_range_starting_on_a_quarter() {
        let ticks = quarter_ticks(ymd(2026, 1, 1), ymd(2026, 2, 1));
        assert_eq!(ticks, vec![ymd(2026, 1, 1)]);
    }

    #[test]
    fn quarter_ticks_of_reversed_range_are_empty() {
        assert!(quarter_ticks(ymd(2026, 2, 1), ymd(2026, 1, 1)).is_empty());
    }

    #[test]
    fn tick_labels_use_short_month_and_year() {
        assert_eq!(format_tick_label(ymd(2026, 4, 1)), "Apr 2026");
    }
}
