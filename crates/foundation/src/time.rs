use chrono::NaiveDate;

/// Wire and picker format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("{field} date {value:?} is not a YYYY-MM-DD date")]
    Unparseable { field: &'static str, value: String },
    #[error("range start {start} is after end {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Inclusive calendar date range, `start <= end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Parses the two values of a start/end picker pair.
    pub fn parse(start: &str, end: &str) -> Result<Self, RangeError> {
        let s = parse_date(start).ok_or_else(|| RangeError::Unparseable {
            field: "start",
            value: start.to_string(),
        })?;
        let e = parse_date(end).ok_or_else(|| RangeError::Unparseable {
            field: "end",
            value: end.to_string(),
        })?;
        Self::new(s, e)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Smallest range covering both `self` and `date`.
    pub fn extended_to(self, date: NaiveDate) -> Self {
        Self {
            start: self.start.min(date),
            end: self.end.max(date),
        }
    }
}
