//! Borrowing lifecycle: `dipinjam` (borrowed) -> `dikembalikan` (returned).
//!
//! The transition happens once and is irreversible. There are no partial
//! returns: the full borrowed quantity goes back to stock.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::BusinessDate;

pub const STATUS_BORROWED: &str = "dipinjam";
pub const STATUS_RETURNED: &str = "dikembalikan";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorrowingStatus {
    #[serde(rename = "dipinjam")]
    Borrowed,
    #[serde(rename = "dikembalikan")]
    Returned,
}

impl BorrowingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BorrowingStatus::Borrowed => STATUS_BORROWED,
            BorrowingStatus::Returned => STATUS_RETURNED,
        }
    }

    /// Check that a borrowing in this state may be returned.
    pub fn ensure_returnable(self) -> Result<(), CoreError> {
        match self {
            BorrowingStatus::Borrowed => Ok(()),
            BorrowingStatus::Returned => Err(CoreError::AlreadyReturned),
        }
    }
}

impl FromStr for BorrowingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_BORROWED => Ok(BorrowingStatus::Borrowed),
            STATUS_RETURNED => Ok(BorrowingStatus::Returned),
            other => Err(CoreError::Internal(format!(
                "Unknown borrowing status '{other}'"
            ))),
        }
    }
}

/// A return date is mandatory and cannot precede the borrow date.
pub fn validate_return_date(
    tanggal_pinjam: BusinessDate,
    tanggal_kembali: Option<BusinessDate>,
) -> Result<BusinessDate, CoreError> {
    let returned = tanggal_kembali
        .ok_or_else(|| CoreError::Validation("Return date is required".into()))?;
    if returned < tanggal_pinjam {
        return Err(CoreError::Validation(format!(
            "Return date {returned} is before borrow date {tanggal_pinjam}"
        )));
    }
    Ok(returned)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn borrowed_can_be_returned() {
        assert!(BorrowingStatus::Borrowed.ensure_returnable().is_ok());
    }

    #[test]
    fn returned_cannot_be_returned_again() {
        assert_matches!(
            BorrowingStatus::Returned.ensure_returnable(),
            Err(CoreError::AlreadyReturned)
        );
    }

    #[test]
    fn status_strings_match_storage() {
        assert_eq!(
            STATUS_BORROWED.parse::<BorrowingStatus>().unwrap(),
            BorrowingStatus::Borrowed
        );
        assert_eq!(BorrowingStatus::Returned.as_str(), "dikembalikan");
        assert_matches!(
            "lost".parse::<BorrowingStatus>(),
            Err(CoreError::Internal(_))
        );
    }

    #[test]
    fn return_date_is_required() {
        assert_matches!(
            validate_return_date(date(2026, 3, 1), None),
            Err(CoreError::Validation(msg)) if msg == "Return date is required"
        );
    }

    #[test]
    fn same_day_return_is_accepted() {
        let d = date(2026, 3, 1);
        assert_eq!(validate_return_date(d, Some(d)).unwrap(), d);
    }

    #[test]
    fn return_before_borrow_is_rejected() {
        assert_matches!(
            validate_return_date(date(2026, 3, 2), Some(date(2026, 3, 1))),
            Err(CoreError::Validation(_))
        );
    }
}
