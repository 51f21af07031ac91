//! Report timestamps and file names.

use std::fmt;

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

pub const REPORT_PREFIX: &str = "vflight";

/// Local wall-clock time a report is stamped with.
///
/// Rendered as `YYYY-M-D-H-Min-S` without zero padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStamp(NaiveDateTime);

impl ReportStamp {
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// `vflight-<stamp>.txt`
    pub fn file_name(&self) -> String {
        format!("{REPORT_PREFIX}-{self}.txt")
    }
}

impl fmt::Display for ReportStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = &self.0;
        write!(
            f,
            "{}-{}-{}-{}-{}-{}",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        )
    }
}
