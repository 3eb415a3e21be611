//! Observable state seam.
//!
//! Clients write their loading/error/collection fields through a
//! [`StateHandle`], so the same operation code can drive a plain cell in
//! headless use and a reactive signal in the browser.

use std::cell::RefCell;
use std::rc::Rc;

pub trait StateHandle<T> {
    fn update(&self, f: impl FnOnce(&mut T));
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

/// Shared `RefCell` state. Clones observe the same value.
#[derive(Default)]
pub struct LocalState<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for LocalState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> LocalState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }
}

impl<T: Clone> LocalState<T> {
    pub fn snapshot(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T> StateHandle<T> for LocalState<T> {
    fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut());
    }

    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }
}
