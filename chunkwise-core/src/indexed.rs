// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

/// Finite storage addressable by position.
///
/// Lookups hand out clones so that backings with interior mutability
/// (`RefCell`, `RwLock`) can release their borrow before returning. Every call
/// observes the storage as it is at that moment.
pub trait Indexed {
    /// Element type
    type Item: Clone;

    /// Current number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the storage currently holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clone of the element at `index`, or `None` if out of bounds.
    fn get_cloned(&self, index: usize) -> Option<Self::Item>;
}

impl<T: Clone> Indexed for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get_cloned(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone, const N: usize> Indexed for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get_cloned(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Indexed for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get_cloned(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Indexed for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get_cloned(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<S: Indexed + ?Sized> Indexed for RefCell<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.borrow().len()
    }

    fn get_cloned(&self, index: usize) -> Option<S::Item> {
        self.borrow().get_cloned(index)
    }
}

#[cfg(feature = "parking_lot")]
impl<S: Indexed + ?Sized> Indexed for parking_lot::RwLock<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.read().len()
    }

    fn get_cloned(&self, index: usize) -> Option<S::Item> {
        self.read().get_cloned(index)
    }
}

impl<S: Indexed + ?Sized> Indexed for &S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get_cloned(&self, index: usize) -> Option<S::Item> {
        (**self).get_cloned(index)
    }
}

impl<S: Indexed + ?Sized> Indexed for Box<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get_cloned(&self, index: usize) -> Option<S::Item> {
        (**self).get_cloned(index)
    }
}

impl<S: Indexed + ?Sized> Indexed for Rc<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get_cloned(&self, index: usize) -> Option<S::Item> {
        (**self).get_cloned(index)
    }
}

impl<S: Indexed + ?Sized> Indexed for Arc<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get_cloned(&self, index: usize) -> Option<S::Item> {
        (**self).get_cloned(index)
    }
}
