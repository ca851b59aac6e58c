//! Volunteer profiles.

pub mod model;

pub use model::{ProfileUpdate, VolunteerProfile};
