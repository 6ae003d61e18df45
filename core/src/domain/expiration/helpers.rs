use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::expiration::{
    entities::{FoodItem, Quantity},
    value_objects::SeverityTier,
};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Midnight UTC of `date`, for callers that only have a calendar reference.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Whole days from `reference` to the start of `expiration_date`, rounded up.
///
/// An item expiring later on the reference day yields 0, not a fraction.
/// Negative results mean the item has already expired.
pub fn days_until_expiration(expiration_date: NaiveDate, reference: DateTime<Utc>) -> i64 {
    let remaining = start_of_day(expiration_date) - reference;
    ceil_div(remaining.num_milliseconds(), MILLIS_PER_DAY)
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

/// Unknown countdowns (malformed dates) map to [`SeverityTier::Expired`].
pub fn severity_tier(days: Option<i64>) -> SeverityTier {
    days.map_or(SeverityTier::Expired, SeverityTier::from_days)
}

/// Shared by [`is_donation_eligible`] and classified items so both paths
/// apply the same rule.
pub(crate) fn eligible(days: Option<i64>, quantity: &Quantity) -> bool {
    matches!(days, Some(days) if days >= 0) && quantity.is_present()
}

/// Not expired, and some quantity left.
pub fn is_donation_eligible(item: &FoodItem, reference: DateTime<Utc>) -> bool {
    eligible(item.days_until_expiration(reference), &item.quantity)
}

/// `0 <= days <= window`.
pub fn is_expiring_within(days: Option<i64>, window: i64) -> bool {
    matches!(days, Some(days) if (0..=window).contains(&days))
}

impl FoodItem {
    /// `None` when the expiration date could not be parsed.
    pub fn days_until_expiration(&self, reference: DateTime<Utc>) -> Option<i64> {
        self.expiration_date
            .date()
            .map(|date| days_until_expiration(date, reference))
    }

    pub fn severity_tier(&self, reference: DateTime<Utc>) -> SeverityTier {
        severity_tier(self.days_until_expiration(reference))
    }
}
