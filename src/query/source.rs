use std::cell::RefCell;
use std::rc::Rc;

use super::Enumerable;

/// Shared, mutable backing storage for queries.
///
/// A pipeline built on a `Source` keeps a handle to the storage rather than a
/// copy of it, so writes made through any handle before the pipeline is
/// consumed show up in the materialized result.
#[derive(Debug)]
pub struct Source<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> Source<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }

    /// Another handle on the same storage, used as the head of a new pipeline.
    pub fn query(&self) -> Self {
        self.clone()
    }

    /// Replaces the element at `index`, returning the old one.
    /// Out-of-bounds writes are ignored and return `None`.
    pub fn set(&self, index: usize, value: T) -> Option<T> {
        let mut items = self.items.borrow_mut();
        items
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    pub fn push(&self, value: T) {
        self.items.borrow_mut().push(value);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl<T: Clone> Source<T> {
    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> From<Vec<T>> for Source<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Source<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(items.into())
    }
}

impl<T> FromIterator<T> for Source<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Pulls one element at a time from the shared storage.
///
/// The storage is borrowed only while a single element is cloned out, never
/// across calls to `next`.
pub struct SourceIter<'a, T> {
    items: &'a RefCell<Vec<T>>,
    position: usize,
}

impl<T: Clone> Iterator for SourceIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.borrow().get(self.position).cloned();
        if item.is_some() {
            self.position += 1;
        }
        item
    }
}

impl<T: Clone> Enumerable for Source<T> {
    type Item = T;
    type Iter<'a>
        = SourceIter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        SourceIter {
            items: self.items.as_ref(),
            position: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_storage() {
        let numbers = Source::from([1, 2, 3]);
        let other = numbers.query();

        other.push(4);
        assert_eq!(numbers.len(), 4);
        assert_eq!(numbers.snapshot(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_set_returns_previous_value() {
        let numbers = Source::from(vec![10, 20]);

        assert_eq!(numbers.set(1, 25), Some(20));
        assert_eq!(numbers.set(5, 99), None);
        assert_eq!(numbers.snapshot(), vec![10, 25]);
    }

    #[test]
    fn test_push_onto_empty() {
        let words: Source<String> = Source::new(Vec::new());
        assert!(words.is_empty());

        words.push("red".to_string());
        words.push("blue".to_string());
        assert_eq!(words.len(), 2);
        assert!(!words.is_empty());
    }

    #[test]
    fn test_iter_sees_writes_between_pulls() {
        let numbers = Source::from([1, 2, 3]);
        let mut iter = numbers.iter();

        assert_eq!(iter.next(), Some(1));
        numbers.set(1, 42);
        numbers.push(4);
        assert_eq!(iter.collect::<Vec<_>>(), vec![42, 3, 4]);
    }

    #[test]
    fn test_from_iterator() {
        let squares: Source<u32> = (1..=4).map(|x| x * x).collect();
        assert_eq!(squares.snapshot(), vec![1, 4, 9, 16]);
    }
}
