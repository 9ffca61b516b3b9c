use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Settlement state of a payment milestone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Pending => "PENDING",
        }
    }
}

/// A payment checkpoint tied to a project milestone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub project_id: String,
    /// Whole currency units.
    pub amount: u64,
    pub status: PaymentStatus,
    pub date: NaiveDate,
    pub milestone: String,
}
