//! Lazy pipeline stages.
//!
//! Each stage owns its upstream and its function. Building a stage does no
//! work; calling [`Enumerable::iter`] creates a fresh pull-based iterator that
//! asks the upstream iterator for elements as they are needed.

use tracing::debug;

use super::Enumerable;

//==============================================================================
// Filter
//==============================================================================

pub struct Filter<Q, P> {
    upstream: Q,
    predicate: P,
}

impl<Q, P> Filter<Q, P> {
    pub(super) fn new(upstream: Q, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

pub struct FilterIter<'a, I, P> {
    upstream: I,
    predicate: &'a P,
}

impl<I, P> Iterator for FilterIter<'_, I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.upstream.next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }
}

impl<Q, P> Enumerable for Filter<Q, P>
where
    Q: Enumerable,
    P: Fn(&Q::Item) -> bool,
{
    type Item = Q::Item;
    type Iter<'a>
        = FilterIter<'a, Q::Iter<'a>, P>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        FilterIter {
            upstream: self.upstream.iter(),
            predicate: &self.predicate,
        }
    }
}

//==============================================================================
// Map
//==============================================================================

pub struct Map<Q, F> {
    upstream: Q,
    transform: F,
}

impl<Q, F> Map<Q, F> {
    pub(super) fn new(upstream: Q, transform: F) -> Self {
        Self {
            upstream,
            transform,
        }
    }
}

pub struct MapIter<'a, I, F> {
    upstream: I,
    transform: &'a F,
}

impl<I, F, U> Iterator for MapIter<'_, I, F>
where
    I: Iterator,
    F: Fn(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.upstream.next().map(self.transform)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<Q, F, U> Enumerable for Map<Q, F>
where
    Q: Enumerable,
    F: Fn(Q::Item) -> U,
{
    type Item = U;
    type Iter<'a>
        = MapIter<'a, Q::Iter<'a>, F>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        MapIter {
            upstream: self.upstream.iter(),
            transform: &self.transform,
        }
    }
}

//==============================================================================
// Take
//==============================================================================

pub struct Take<Q> {
    upstream: Q,
    count: usize,
}

impl<Q> Take<Q> {
    pub(super) fn new(upstream: Q, count: usize) -> Self {
        Self { upstream, count }
    }
}

pub struct TakeIter<I> {
    upstream: I,
    remaining: usize,
}

impl<I: Iterator> Iterator for TakeIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        // Stop before pulling, so upstream is never asked for more than needed.
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.upstream.next()
    }
}

impl<Q: Enumerable> Enumerable for Take<Q> {
    type Item = Q::Item;
    type Iter<'a>
        = TakeIter<Q::Iter<'a>>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        TakeIter {
            upstream: self.upstream.iter(),
            remaining: self.count,
        }
    }
}

//==============================================================================
// SortBy
//==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

pub struct SortBy<Q, F> {
    upstream: Q,
    key: F,
    direction: Direction,
}

impl<Q, F> SortBy<Q, F> {
    pub(super) fn new(upstream: Q, key: F, direction: Direction) -> Self {
        Self {
            upstream,
            key,
            direction,
        }
    }
}

/// Buffers the whole upstream on the first pull, then replays it sorted.
pub struct SortIter<'a, I: Iterator, F> {
    pending: Option<I>,
    key: &'a F,
    direction: Direction,
    sorted: std::vec::IntoIter<I::Item>,
}

impl<I, F, K> Iterator for SortIter<'_, I, F>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: Ord,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(upstream) = self.pending.take() {
            let mut keyed: Vec<(K, I::Item)> = upstream.map(|item| ((self.key)(&item), item)).collect();

            // slice::sort_by is stable in both directions
            match self.direction {
                Direction::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
                Direction::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
            }
            debug!(elements = keyed.len(), direction = ?self.direction, "sort_by buffered upstream");

            self.sorted = keyed
                .into_iter()
                .map(|(_, item)| item)
                .collect::<Vec<_>>()
                .into_iter();
        }
        self.sorted.next()
    }
}

impl<Q, F, K> Enumerable for SortBy<Q, F>
where
    Q: Enumerable,
    F: Fn(&Q::Item) -> K,
    K: Ord,
{
    type Item = Q::Item;
    type Iter<'a>
        = SortIter<'a, Q::Iter<'a>, F>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        SortIter {
            pending: Some(self.upstream.iter()),
            key: &self.key,
            direction: self.direction,
            sorted: Vec::new().into_iter(),
        }
    }
}
