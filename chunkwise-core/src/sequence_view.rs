// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Read-only, non-owning view on indexable storage.
//!
//! A [`SequenceView`] never copies the storage it wraps. Length and lookups go
//! to the backing on every call, so when the backing allows mutation through a
//! shared reference (`RefCell`, `RwLock`) the view follows along:
//!
//! ```
//! use chunkwise_core::SequenceView;
//! use std::cell::RefCell;
//!
//! let backing = RefCell::new(vec![1, 2, 3]);
//! let view = SequenceView::new(&backing);
//! assert_eq!(view.len(), 3);
//!
//! backing.borrow_mut().pop();
//! assert_eq!(view.len(), 2);
//! assert_eq!(format!("{view:?}"), "SequenceView([1, 2])");
//! ```

use crate::capability::{Reversible, Tail};
use crate::indexed::Indexed;
use std::fmt;
use std::iter::{FusedIterator, Rev};

/// Non-owning read-only facade over an [`Indexed`] backing.
pub struct SequenceView<'a, S: ?Sized> {
    target: &'a S,
}

impl<'a, S: Indexed + ?Sized> SequenceView<'a, S> {
    /// Wraps `target` without copying it.
    pub const fn new(target: &'a S) -> Self {
        Self { target }
    }

    /// Current length of the backing.
    pub fn len(&self) -> usize {
        self.target.len()
    }

    /// Returns `true` if the backing is currently empty.
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Element at `index`, counted from the front.
    pub fn get(&self, index: usize) -> Option<S::Item> {
        self.target.get_cloned(index)
    }

    /// Element at a signed position; negative positions count from the end,
    /// so `at(-1)` is the last element.
    pub fn at(&self, index: isize) -> Option<S::Item> {
        let position = if index < 0 {
            self.len().checked_sub(index.unsigned_abs())?
        } else {
            index.unsigned_abs()
        };
        self.get(position)
    }

    /// First element, if any.
    pub fn first(&self) -> Option<S::Item> {
        self.get(0)
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<S::Item> {
        self.at(-1)
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.position(value).is_some()
    }

    /// Number of elements equal to `value`.
    pub fn count(&self, value: &S::Item) -> usize
    where
        S::Item: PartialEq,
    {
        self.iter().filter(|item| item == value).count()
    }

    /// Index of the first element equal to `value`.
    pub fn position(&self, value: &S::Item) -> Option<usize>
    where
        S::Item: PartialEq,
    {
        self.iter().position(|item| &item == value)
    }

    /// Iterates over the elements present when iteration starts.
    ///
    /// Elements removed from the backing mid-iteration end the iterator early.
    pub fn iter(&self) -> SequenceViewIter<'a, S> {
        SequenceViewIter {
            target: self.target,
            front: 0,
            back: self.len(),
        }
    }

    /// Copies the current contents out.
    pub fn to_vec(&self) -> Vec<S::Item> {
        self.iter().collect()
    }
}

impl<S: ?Sized> Clone for SequenceView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for SequenceView<'_, S> {}

impl<S> fmt::Debug for SequenceView<'_, S>
where
    S: Indexed + ?Sized,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SequenceView(")?;
        f.debug_list().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

impl<S: Indexed + ?Sized> Indexed for SequenceView<'_, S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.target.len()
    }

    fn get_cloned(&self, index: usize) -> Option<S::Item> {
        self.target.get_cloned(index)
    }
}

impl<S: Indexed + ?Sized> Tail for SequenceView<'_, S> {
    type Item = S::Item;

    fn tail(self) -> Option<S::Item> {
        self.last()
    }
}

impl<'a, S: Indexed + ?Sized> Reversible for SequenceView<'a, S> {
    type Item = S::Item;
    type Reversed = Rev<SequenceViewIter<'a, S>>;

    fn reversed(self) -> Self::Reversed {
        self.iter().rev()
    }
}

impl<'a, S: Indexed + ?Sized> IntoIterator for SequenceView<'a, S> {
    type Item = S::Item;
    type IntoIter = SequenceViewIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: Indexed + ?Sized> IntoIterator for &SequenceView<'a, S> {
    type Item = S::Item;
    type IntoIter = SequenceViewIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`SequenceView`].
pub struct SequenceViewIter<'a, S: ?Sized> {
    target: &'a S,
    front: usize,
    back: usize,
}

impl<S: Indexed + ?Sized> Iterator for SequenceViewIter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.target.get_cloned(self.front);
        if item.is_none() {
            // Backing shrank underneath us.
            self.front = self.back;
        } else {
            self.front += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back - self.front))
    }
}

impl<S: Indexed + ?Sized> DoubleEndedIterator for SequenceViewIter<'_, S> {
    fn next_back(&mut self) -> Option<S::Item> {
        while self.front < self.back {
            self.back -= 1;
            if let Some(item) = self.target.get_cloned(self.back) {
                return Some(item);
            }
        }
        None
    }
}

impl<S: Indexed + ?Sized> FusedIterator for SequenceViewIter<'_, S> {}
