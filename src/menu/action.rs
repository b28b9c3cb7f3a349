//! What a menu row does once selected.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use super::node::MenuNode;

/// Leaf action type for hosts whose entries are plain closures.
pub type Callback = Rc<dyn Fn()>;

/// Wrap a closure as a [`Callback`].
pub fn callback(f: impl Fn() + 'static) -> Callback {
    Rc::new(f)
}

/// The action stored behind a numbered entry.
pub enum Action<A> {
    /// Host value handed back from `run()` without being invoked
    Leaf(A),
    /// Nested menu entered when selected
    Submenu(MenuNode<A>),
}

impl<A> Action<A> {
    pub fn leaf(value: A) -> Self {
        Action::Leaf(value)
    }

    pub fn submenu(node: &MenuNode<A>) -> Self {
        Action::Submenu(node.clone())
    }

    pub fn is_submenu(&self) -> bool {
        matches!(self, Action::Submenu(_))
    }
}

impl<A: Clone> Clone for Action<A> {
    fn clone(&self) -> Self {
        match self {
            Action::Leaf(value) => Action::Leaf(value.clone()),
            Action::Submenu(node) => Action::Submenu(node.clone()),
        }
    }
}

impl<A> fmt::Debug for Action<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Leaf(_) => f.write_str("Leaf(..)"),
            Action::Submenu(node) => f.debug_tuple("Submenu").field(&node.title()).finish(),
        }
    }
}

/// Result of a completed navigation.
#[derive(Clone, PartialEq, Eq)]
pub enum Outcome<A> {
    /// The user picked a leaf entry
    Leaf(A),
    /// The user chose `q` or input ended
    Quit,
}

impl<A> Outcome<A> {
    pub fn is_quit(&self) -> bool {
        matches!(self, Outcome::Quit)
    }

    pub fn into_leaf(self) -> Option<A> {
        match self {
            Outcome::Leaf(value) => Some(value),
            Outcome::Quit => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&A> {
        match self {
            Outcome::Leaf(value) => Some(value),
            Outcome::Quit => None,
        }
    }
}

impl<A> Outcome<A>
where
    A: Deref,
    A::Target: Fn(),
{
    /// Run the chosen leaf. `Quit` is a no-op.
    pub fn invoke(&self) {
        if let Outcome::Leaf(f) = self {
            (**f)();
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Outcome<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Leaf(value) => f.debug_tuple("Leaf").field(value).finish(),
            Outcome::Quit => f.write_str("Quit"),
        }
    }
}
