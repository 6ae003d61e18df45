//! Expiration and donation-eligibility rules.
//!
//! Every view that shows a countdown, a severity badge or a donation list goes
//! through this module. All functions are pure: the reference instant is
//! always passed in, never read from the system clock.

pub mod classify;
pub mod entities;
pub mod helpers;
pub mod value_objects;

pub use classify::{ClassifiedItem, Classify, classify, eligible_for_donation};
pub use entities::{ExpirationDate, FoodItem, FoodItemRecord, Quantity};
pub use helpers::{
    days_until_expiration, is_donation_eligible, is_expiring_within, severity_tier, start_of_day,
};
pub use value_objects::SeverityTier;
