//! Receiving approval: `pending` -> `approved` | `rejected`, exactly once.
//!
//! Only an approval moves stock, and only by the received quantity.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const APPROVAL_PENDING: &str = "pending";
pub const APPROVAL_APPROVED: &str = "approved";
pub const APPROVAL_REJECTED: &str = "rejected";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// The outcome a resolver may choose. `pending` is not a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => APPROVAL_PENDING,
            ApprovalStatus::Approved => APPROVAL_APPROVED,
            ApprovalStatus::Rejected => APPROVAL_REJECTED,
        }
    }

    /// Check that a receiving in this state is still open for a decision.
    pub fn ensure_resolvable(self) -> Result<(), CoreError> {
        match self {
            ApprovalStatus::Pending => Ok(()),
            resolved => Err(CoreError::AlreadyResolved {
                status: resolved.as_str().to_string(),
            }),
        }
    }
}

impl FromStr for ApprovalStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            APPROVAL_PENDING => Ok(ApprovalStatus::Pending),
            APPROVAL_APPROVED => Ok(ApprovalStatus::Approved),
            APPROVAL_REJECTED => Ok(ApprovalStatus::Rejected),
            other => Err(CoreError::Internal(format!(
                "Unknown approval status '{other}'"
            ))),
        }
    }
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        self.status().as_str()
    }

    /// The status a receiving lands in after this decision.
    pub fn status(self) -> ApprovalStatus {
        match self {
            Decision::Approved => ApprovalStatus::Approved,
            Decision::Rejected => ApprovalStatus::Rejected,
        }
    }

    /// Quantity to credit to the item, if any.
    pub fn stock_credit(self, qty: i32) -> Option<i32> {
        match self {
            Decision::Approved => Some(qty),
            Decision::Rejected => None,
        }
    }
}

impl FromStr for Decision {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            APPROVAL_APPROVED => Ok(Decision::Approved),
            APPROVAL_REJECTED => Ok(Decision::Rejected),
            _ => Err(CoreError::Validation(
                "Status must be either approved or rejected".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn pending_is_resolvable() {
        assert!(ApprovalStatus::Pending.ensure_resolvable().is_ok());
    }

    #[test]
    fn resolved_states_are_final() {
        let err = ApprovalStatus::Approved.ensure_resolvable().unwrap_err();
        assert_eq!(err.to_string(), "Receiving already approved");

        assert_matches!(
            ApprovalStatus::Rejected.ensure_resolvable(),
            Err(CoreError::AlreadyResolved { status }) if status == "rejected"
        );
    }

    #[test]
    fn only_approval_credits_stock() {
        assert_eq!(Decision::Approved.stock_credit(20), Some(20));
        assert_eq!(Decision::Rejected.stock_credit(20), None);
    }

    #[test]
    fn pending_is_not_a_decision() {
        assert_matches!(
            "pending".parse::<Decision>(),
            Err(CoreError::Validation(_))
        );
        assert_eq!("approved".parse::<Decision>().unwrap(), Decision::Approved);
        assert_eq!("rejected".parse::<Decision>().unwrap(), Decision::Rejected);
    }

    #[test]
    fn decision_maps_to_status() {
        assert_eq!(Decision::Approved.status(), ApprovalStatus::Approved);
        assert_eq!(Decision::Rejected.as_str(), "rejected");
    }
}
