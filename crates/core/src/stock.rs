//! Stock arithmetic shared by the item ledger and the workflows.
//!
//! Quantities are always positive magnitudes; the sign of an adjustment is
//! carried by [`StockDirection`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const DIRECTION_ADD: &str = "add";
pub const DIRECTION_SUBTRACT: &str = "subtract";

/// Which way a ledger adjustment moves `stok_current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockDirection {
    Add,
    Subtract,
}

impl StockDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            StockDirection::Add => DIRECTION_ADD,
            StockDirection::Subtract => DIRECTION_SUBTRACT,
        }
    }
}

impl FromStr for StockDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            DIRECTION_ADD => Ok(StockDirection::Add),
            DIRECTION_SUBTRACT => Ok(StockDirection::Subtract),
            _ => Err(CoreError::Validation(
                "Quantity and valid operation (add/subtract) are required".into(),
            )),
        }
    }
}

/// Reject zero or negative quantities.
pub fn ensure_positive_qty(qty: i32) -> Result<(), CoreError> {
    if qty < 1 {
        return Err(CoreError::Validation(format!(
            "Quantity must be at least 1, got {qty}"
        )));
    }
    Ok(())
}

/// Fail with `InsufficientStock` when `available` cannot cover `qty`.
pub fn ensure_available(available: i32, qty: i32, unit: &str) -> Result<(), CoreError> {
    if available < qty {
        return Err(CoreError::InsufficientStock {
            available,
            unit: unit.to_string(),
        });
    }
    Ok(())
}

/// Compute the stock level after an adjustment.
///
/// Subtracting more than is available fails; the result is never negative.
pub fn apply(
    current: i32,
    qty: i32,
    direction: StockDirection,
    unit: &str,
) -> Result<i32, CoreError> {
    ensure_positive_qty(qty)?;
    match direction {
        StockDirection::Add => current
            .checked_add(qty)
            .ok_or_else(|| CoreError::Validation("Stock level overflow".into())),
        StockDirection::Subtract => {
            ensure_available(current, qty, unit)?;
            Ok(current - qty)
        }
    }
}

/// An item is low on stock when it is at or below its threshold.
pub fn is_low_stock(stok_current: i32, stok_minimal: i32) -> bool {
    stok_current <= stok_minimal
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn low_stock_boundary() {
        assert!(is_low_stock(5, 5));
        assert!(!is_low_stock(6, 5));
        assert!(is_low_stock(0, 0));
        assert!(is_low_stock(4, 5));
    }

    #[test]
    fn add_increases_stock() {
        assert_eq!(apply(10, 20, StockDirection::Add, "pcs").unwrap(), 30);
    }

    #[test]
    fn add_past_integer_range_is_rejected() {
        assert_matches!(
            apply(i32::MAX - 1, 2, StockDirection::Add, "pcs"),
            Err(CoreError::Validation(msg)) if msg == "Stock level overflow"
        );
        assert_eq!(apply(i32::MAX - 2, 2, StockDirection::Add, "pcs").unwrap(), i32::MAX);
    }

    #[test]
    fn subtract_to_zero_is_allowed() {
        assert_eq!(apply(10, 10, StockDirection::Subtract, "pcs").unwrap(), 0);
    }

    #[test]
    fn subtract_beyond_stock_reports_available() {
        let err = apply(0, 1, StockDirection::Subtract, "unit").unwrap_err();
        assert_matches!(
            &err,
            CoreError::InsufficientStock { available: 0, unit } if unit == "unit"
        );
        assert_eq!(err.to_string(), "Insufficient stock. Available: 0 unit");
    }

    #[test]
    fn zero_quantity_is_rejected() {
        assert_matches!(
            apply(10, 0, StockDirection::Add, "pcs"),
            Err(CoreError::Validation(_))
        );
        assert_matches!(ensure_positive_qty(-3), Err(CoreError::Validation(_)));
    }

    #[test]
    fn direction_parsing() {
        assert_eq!("add".parse::<StockDirection>().unwrap(), StockDirection::Add);
        assert_eq!(
            "subtract".parse::<StockDirection>().unwrap(),
            StockDirection::Subtract
        );
        assert!("multiply".parse::<StockDirection>().is_err());
    }
}
