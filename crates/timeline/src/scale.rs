use chrono::{Datelike, NaiveDate};
use foundation::DateRange;

/// Days since 0001-01-01 (proleptic Gregorian), the scale's domain unit.
pub fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

pub fn date_from_day_number(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() || days.abs() > i32::MAX as f64 {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(days.round() as i32)
}

/// Linear map from calendar days to horizontal pixels.
///
/// The domain is fractional so that zoomed scales can start mid-day.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: DateRange, range: (f64, f64)) -> Self {
        Self {
            domain: (day_number(domain.start()), day_number(domain.end())),
            range,
        }
    }

    pub fn from_days(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain_days(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn project_days(&self, days: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        // Degenerate domain maps everything onto the middle of the range.
        let t = if span == 0.0 { 0.5 } else { (days - d0) / span };
        r0 + t * (r1 - r0)
    }

    pub fn project(&self, date: NaiveDate) -> f64 {
        self.project_days(day_number(date))
    }

    pub fn invert_days(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (px - r0) / span };
        d0 + t * (d1 - d0)
    }

    pub fn invert(&self, px: f64) -> Option<NaiveDate> {
        date_from_day_number(self.invert_days(px))
    }
}
