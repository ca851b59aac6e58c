//! Donations, expenses, and fund summaries.

pub mod model;

pub use model::{AvailableFunds, Donation, Expense, NewDonation, NewExpense};
