//! # Query Pipeline
//!
//! Composable, lazily evaluated query operators over an ordered sequence.
//!
//! A pipeline is a chain of stage values, each owning its upstream stage and
//! its own function. Building the chain runs nothing. Work happens only when a
//! terminal operation (or [`Enumerable::iter`]) consumes it, and every
//! consumption re-reads the [`Source`] as it is at that moment:
//!
//! ```
//! use query_demos::query::{Enumerable, Source};
//!
//! let numbers = Source::from([1, 6, -3, 12]);
//! let negatives = numbers.query().filter(|x| *x < 0).sort_by(|x| *x);
//!
//! numbers.set(0, -33);
//! assert_eq!(negatives.to_vec(), vec![-33, -3]);
//! ```
//!
//! Lazy operations: `filter`, `map`, `take`, `sort_by`, `sort_by_descending`,
//! `group_by`. `sort_by` and `group_by` buffer their whole upstream on the
//! first pull; the others stream one element at a time.
//!
//! Terminal operations force the full chain: counting, summing, averaging,
//! min/max and first/last lookups. Lookups that need an element return
//! [`Error::NotFound`] when there is none; the `*_or_none` variants return
//! `None` instead.

mod grouping;
mod source;
mod stages;

use std::hash::Hash;
use std::iter::Sum;

use crate::error::{Error, Result};

pub use grouping::{GroupBy, GroupIter, Grouping};
pub use source::{Source, SourceIter};
pub use stages::{Direction, Filter, FilterIter, Map, MapIter, SortBy, SortIter, Take, TakeIter};

/// A re-runnable, pull-based sequence.
///
/// Every call to [`iter`](Enumerable::iter) starts a fresh evaluation of the
/// whole upstream chain.
pub trait Enumerable {
    type Item;

    type Iter<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_>;

    //--------------------------------------------------------------------------
    // Lazy stages
    //--------------------------------------------------------------------------

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn map<U, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, transform)
    }

    /// At most `count` leading elements. A shorter upstream just ends early.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Stable ascending sort by a derived key.
    fn sort_by<K, F>(self, key: F) -> SortBy<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        SortBy::new(self, key, Direction::Ascending)
    }

    /// Stable descending sort: equal keys keep their original order.
    fn sort_by_descending<K, F>(self, key: F) -> SortBy<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        SortBy::new(self, key, Direction::Descending)
    }

    fn group_by<K, F>(self, key: F) -> GroupBy<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        GroupBy::new(self, key)
    }

    //--------------------------------------------------------------------------
    // Terminal operations
    //--------------------------------------------------------------------------

    fn to_vec(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }

    fn count(&self) -> usize {
        self.iter().count()
    }

    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.iter().filter(|item| predicate(item)).count()
    }

    /// Adds up the elements with [`Iterator::sum`].
    ///
    /// # Panics
    ///
    /// Panics on overflow in debug builds and wraps in release builds, like
    /// the std implementation. Use [`Enumerable::checked_sum_of`] when the
    /// total may not fit.
    fn sum(&self) -> Self::Item
    where
        Self::Item: Sum,
    {
        self.iter().sum()
    }

    /// Adds up `key` over the elements. Overflow behaves as in [`Enumerable::sum`].
    fn sum_of<N, F>(&self, key: F) -> N
    where
        F: Fn(&Self::Item) -> N,
        N: Sum,
    {
        self.iter().map(|item| key(&item)).sum()
    }

    /// Adds up `key` over the elements, returning [`Error::Overflow`] instead
    /// of panicking when the total leaves the `i64` range.
    fn checked_sum_of<F>(&self, key: F) -> Result<i64>
    where
        F: Fn(&Self::Item) -> i64,
    {
        self.iter()
            .try_fold(0i64, |total, item| total.checked_add(key(&item)))
            .ok_or_else(|| Error::overflow("checked_sum_of"))
    }

    fn average(&self) -> Result<f64>
    where
        Self::Item: Into<f64>,
    {
        let (total, count) = self
            .iter()
            .fold((0.0, 0usize), |(total, count), item| (total + Into::<f64>::into(item), count + 1));

        if count == 0 {
            return Err(Error::not_found("average"));
        }
        Ok(total / count as f64)
    }

    fn average_of<F>(&self, key: F) -> Result<f64>
    where
        F: Fn(&Self::Item) -> f64,
    {
        let (total, count) = self
            .iter()
            .fold((0.0, 0usize), |(total, count), item| (total + key(&item), count + 1));

        if count == 0 {
            return Err(Error::not_found("average"));
        }
        Ok(total / count as f64)
    }

    fn min(&self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        self.iter().min().ok_or_else(|| Error::not_found("min"))
    }

    /// Smallest derived key (not the element that produced it).
    fn min_of<K, F>(&self, key: F) -> Result<K>
    where
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        self.iter()
            .map(|item| key(&item))
            .min()
            .ok_or_else(|| Error::not_found("min"))
    }

    fn max(&self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        self.iter().max().ok_or_else(|| Error::not_found("max"))
    }

    /// Largest derived key (not the element that produced it).
    fn max_of<K, F>(&self, key: F) -> Result<K>
    where
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        self.iter()
            .map(|item| key(&item))
            .max()
            .ok_or_else(|| Error::not_found("max"))
    }

    fn first(&self) -> Result<Self::Item> {
        self.first_or_none().ok_or_else(|| Error::not_found("first"))
    }

    fn first_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.first_or_none_where(predicate)
            .ok_or_else(|| Error::not_found("first"))
    }

    fn first_or_none(&self) -> Option<Self::Item> {
        self.iter().next()
    }

    fn first_or_none_where<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    fn last(&self) -> Result<Self::Item> {
        self.last_or_none().ok_or_else(|| Error::not_found("last"))
    }

    fn last_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.last_or_none_where(predicate)
            .ok_or_else(|| Error::not_found("last"))
    }

    fn last_or_none(&self) -> Option<Self::Item> {
        self.iter().last()
    }

    fn last_or_none_where<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.iter().filter(|item| predicate(item)).last()
    }
}

/// `true` when `|number|` has exactly two decimal digits.
pub fn is_two_digits(number: &i32) -> bool {
    number.unsigned_abs().to_string().len() == 2
}
