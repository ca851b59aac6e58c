//! Financial models for the analytics dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded donation, served by `/api/donations/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    /// Donation identifier.
    pub id: i64,
    /// Name the donor gave, possibly blank for anonymous gifts.
    #[serde(default)]
    pub donor_name: String,
    /// Amount in USD.
    pub usd_amount: f64,
    /// When the donation was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Payload for recording a donation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDonation {
    /// Donor name, possibly blank.
    #[serde(default)]
    pub donor_name: String,
    /// Amount in USD.
    pub usd_amount: f64,
}

/// A recorded expense, served by `/api/expenses/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Expense identifier.
    pub id: i64,
    /// Amount in USD.
    pub usd_amount: f64,
    /// When the expense was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Payload for recording an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    /// Amount in USD.
    pub usd_amount: f64,
}

/// Response of `GET /api/funds/`: total donations minus total expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableFunds {
    /// Current balance in USD.
    pub available_funds: f64,
}
