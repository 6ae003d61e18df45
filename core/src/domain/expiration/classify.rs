use std::iter::FusedIterator;

use chrono::{DateTime, Utc};

use crate::domain::expiration::{
    entities::FoodItem,
    helpers::{eligible, severity_tier},
    value_objects::SeverityTier,
};

/// An item paired with its derived attributes for one reference instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedItem<'a> {
    pub item: &'a FoodItem,
    pub days_until_expiration: Option<i64>,
    pub severity_tier: SeverityTier,
}

impl ClassifiedItem<'_> {
    pub fn is_donation_eligible(&self) -> bool {
        eligible(self.days_until_expiration, &self.item.quantity)
    }

    pub fn badge_label(&self) -> String {
        SeverityTier::badge_label(self.days_until_expiration)
    }
}

/// Lazy, order-preserving classification of a sequence of items.
///
/// Cloning the iterator restarts nothing it has already yielded; a clone taken
/// before iteration replays the whole sequence.
#[derive(Debug, Clone)]
pub struct Classify<I> {
    items: I,
    reference: DateTime<Utc>,
}

impl<I> Classify<I> {
    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    fn classify_one<'a>(&self, item: &'a FoodItem) -> ClassifiedItem<'a> {
        let days_until_expiration = item.days_until_expiration(self.reference);
        ClassifiedItem {
            item,
            days_until_expiration,
            severity_tier: severity_tier(days_until_expiration),
        }
    }
}

pub fn classify<'a, I>(items: I, reference: DateTime<Utc>) -> Classify<I::IntoIter>
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    Classify {
        items: items.into_iter(),
        reference,
    }
}

/// Items from `items` that may be offered on the donation board.
pub fn eligible_for_donation<'a, I>(
    items: I,
    reference: DateTime<Utc>,
) -> impl Iterator<Item = ClassifiedItem<'a>>
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    classify(items, reference).filter(ClassifiedItem::is_donation_eligible)
}

impl<'a, I> Iterator for Classify<I>
where
    I: Iterator<Item = &'a FoodItem>,
{
    type Item = ClassifiedItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.next()?;
        Some(self.classify_one(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a, I> DoubleEndedIterator for Classify<I>
where
    I: DoubleEndedIterator<Item = &'a FoodItem>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.items.next_back()?;
        Some(self.classify_one(item))
    }
}

impl<'a, I> ExactSizeIterator for Classify<I> where I: ExactSizeIterator<Item = &'a FoodItem> {}

impl<'a, I> FusedIterator for Classify<I> where I: FusedIterator<Item = &'a FoodItem> {}
