//! Query-string parameter types.

use chrono::NaiveDate;
use gudang_core::error::CoreError;
use serde::Deserialize;

/// `?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD` for report endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DateRangeParams {
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
}

impl DateRangeParams {
    /// Both bounds are required and must be in order. The range is inclusive.
    pub fn bounds(&self) -> Result<(NaiveDate, NaiveDate), CoreError> {
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Err(CoreError::Validation(
                "Start date and end date are required".into(),
            ));
        };
        if start > end {
            return Err(CoreError::Validation(format!(
                "Start date {start} is after end date {end}"
            )));
        }
        Ok((start, end))
    }
}
