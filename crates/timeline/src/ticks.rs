use chrono::{Datelike, NaiveDate};

use crate::scale::{TimeScale, date_from_day_number};

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub date: NaiveDate,
    pub x: f64,
    pub label: String,
}

/// January 1st ticks inside the scale's domain.
///
/// When there are more candidate years than `max_ticks`, only years that are
/// a multiple of the smallest sufficient step are kept.
pub fn year_ticks(scale: &TimeScale, max_ticks: usize) -> Vec<Tick> {
    let (d0, d1) = scale.domain_days();
    let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
    let (Some(first), Some(last)) = (date_from_day_number(lo.ceil()), date_from_day_number(hi.floor())) else {
        return Vec::new();
    };
    if max_ticks == 0 || first > last {
        return Vec::new();
    }

    let start_year = if first.ordinal() == 1 {
        first.year()
    } else {
        first.year() + 1
    };
    let end_year = last.year();
    if start_year > end_year {
        return Vec::new();
    }

    let count = (end_year - start_year + 1) as usize;
    let step = count.div_ceil(max_ticks).max(1) as i32;

    (start_year..=end_year)
        .filter(|year| year.rem_euclid(step) == 0)
        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .map(|date| Tick {
            date,
            x: scale.project(date),
            label: date.format("%Y").to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::year_ticks;
    use crate::scale::TimeScale;
    use chrono::Datelike;
    use foundation::DateRange;
    use pretty_assertions::assert_eq;

    fn scale(start: &str, end: &str) -> TimeScale {
        TimeScale::new(DateRange::parse(start, end).unwrap(), (0.0, 720.0))
    }

    #[test]
    fn ticks_fall_on_year_boundaries_inside_the_domain() {
        let s = scale("2019-06-01", "2022-02-01");
        let labels: Vec<String> = year_ticks(&s, 10).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["2020", "2021", "2022"]);
        for tick in year_ticks(&s, 10) {
            assert!(tick.x >= 0.0 && tick.x <= 720.0);
        }
    }

    #[test]
    fn domain_starting_on_new_year_includes_it() {
        let s = scale("2020-01-01", "2020-12-31");
        let ticks = year_ticks(&s, 10);
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].x, 0.0);
    }

    #[test]
    fn dense_decades_are_thinned() {
        let s = scale("1900-01-01", "2000-01-01");
        let ticks = year_ticks(&s, 10);
        assert!(ticks.len() <= 10);
        // 101 candidate years need a step of 11.
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("1903"));
        assert!(ticks.iter().all(|t| t.date.year() % 11 == 0));
    }

    #[test]
    fn short_domains_have_no_ticks() {
        assert!(year_ticks(&scale("2020-02-01", "2020-03-01"), 10).is_empty());
        assert!(year_ticks(&scale("2000-01-01", "2020-01-01"), 0).is_empty());
    }
}
