use std::hash::Hash;

use indexmap::IndexMap;
use tracing::debug;

use super::Enumerable;

/// One group produced by [`Enumerable::group_by`]: a key and the elements
/// that share it, in their original relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping<K, T> {
    key: K,
    elements: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<'g, K, T> IntoIterator for &'g Grouping<K, T> {
    type Item = &'g T;
    type IntoIter = std::slice::Iter<'g, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

pub struct GroupBy<Q, F> {
    upstream: Q,
    key: F,
}

impl<Q, F> GroupBy<Q, F> {
    pub(super) fn new(upstream: Q, key: F) -> Self {
        Self { upstream, key }
    }
}

/// Buffers the whole upstream on the first pull. Groups come out in order of
/// first occurrence of their key.
pub struct GroupIter<'a, I: Iterator, F, K> {
    pending: Option<I>,
    key: &'a F,
    groups: std::vec::IntoIter<Grouping<K, I::Item>>,
}

impl<I, F, K> Iterator for GroupIter<'_, I, F, K>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: Hash + Eq,
{
    type Item = Grouping<K, I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(upstream) = self.pending.take() {
            let mut buckets: IndexMap<K, Vec<I::Item>> = IndexMap::new();
            for item in upstream {
                buckets.entry((self.key)(&item)).or_default().push(item);
            }
            debug!(groups = buckets.len(), "group_by buffered upstream");

            self.groups = buckets
                .into_iter()
                .map(|(key, elements)| Grouping { key, elements })
                .collect::<Vec<_>>()
                .into_iter();
        }
        self.groups.next()
    }
}

impl<Q, F, K> Enumerable for GroupBy<Q, F>
where
    Q: Enumerable,
    F: Fn(&Q::Item) -> K,
    K: Hash + Eq,
{
    type Item = Grouping<K, Q::Item>;
    type Iter<'a>
        = GroupIter<'a, Q::Iter<'a>, F, K>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        GroupIter {
            pending: Some(self.upstream.iter()),
            key: &self.key,
            groups: Vec::new().into_iter(),
        }
    }
}
