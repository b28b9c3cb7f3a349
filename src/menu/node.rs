//! MenuNode: one level of the menu tree.
//!
//! A node owns its numbered entries (and through them, its submenus). The
//! parent link is a weak back-reference set when the node is attached, so
//! dropping the root releases the whole tree.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::error::{EntryProblem, MenuError, MenuResult};

use super::action::Action;
use super::selector::{Builtin, Selector};

/// A numbered row: what it does and how it is labelled.
pub struct Entry<A> {
    pub action: Action<A>,
    pub label: String,
}

impl<A: Clone> Clone for Entry<A> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            label: self.label.clone(),
        }
    }
}

struct Inner<A> {
    title: String,
    prompt: Option<String>,
    entries: BTreeMap<usize, Entry<A>>,
    builtins: BTreeMap<Builtin, &'static str>,
    parent: Option<Weak<RefCell<Inner<A>>>>,
}

/// Where a validated selector leads.
pub(crate) enum Step<A> {
    Leaf(A),
    Enter(MenuNode<A>),
    Back(MenuNode<A>),
    Quit,
}

/// Handle to one menu level. Cloning the handle shares the node.
pub struct MenuNode<A> {
    inner: Rc<RefCell<Inner<A>>>,
}

impl<A> Clone for MenuNode<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A> MenuNode<A> {
    /// Create an empty root menu that uses the default prompt.
    pub fn new(title: impl Into<String>) -> Self {
        let mut builtins = BTreeMap::new();
        builtins.insert(Builtin::Quit, Builtin::Quit.label());

        Self {
            inner: Rc::new(RefCell::new(Inner {
                title: title.into(),
                prompt: None,
                entries: BTreeMap::new(),
                builtins,
                parent: None,
            })),
        }
    }

    /// Create an empty root menu with its own prompt. An empty prompt
    /// falls back to the default.
    pub fn with_prompt(title: impl Into<String>, prompt: impl Into<String>) -> Self {
        let node = Self::new(title);
        let prompt = prompt.into();
        if !prompt.is_empty() {
            node.inner.borrow_mut().prompt = Some(prompt);
        }
        node
    }

    /// Create a menu and add `entries` in order.
    ///
    /// Stops at the first rejected entry; the error's `index` is the
    /// 0-based position of that entry in `entries`.
    pub fn with_entries<L>(
        title: impl Into<String>,
        prompt: Option<&str>,
        entries: impl IntoIterator<Item = (Action<A>, L)>,
    ) -> MenuResult<Self>
    where
        L: Into<String>,
    {
        let node = match prompt {
            Some(p) => Self::with_prompt(title, p),
            None => Self::new(title),
        };
        for (index, (action, label)) in entries.into_iter().enumerate() {
            node.insert(action, label.into(), index)?;
        }
        Ok(node)
    }

    /// Append an entry and return its selector number.
    ///
    /// Numbers are assigned densely from 1 in call order. Attaching a
    /// submenu links it back to this node and gives it a `back` command.
    /// Nothing is changed when the entry is rejected.
    pub fn add_entry(&self, action: Action<A>, label: impl Into<String>) -> MenuResult<usize> {
        let next = self.len() + 1;
        self.insert(action, label.into(), next)
    }

    fn insert(&self, action: Action<A>, label: String, index: usize) -> MenuResult<usize> {
        if let Err(reason) = self.check_entry(&action, &label) {
            return Err(MenuError::InvalidEntry {
                index,
                label,
                reason,
            });
        }

        if let Action::Submenu(child) = &action {
            let mut child_inner = child.inner.borrow_mut();
            child_inner.parent = Some(Rc::downgrade(&self.inner));
            child_inner.builtins.insert(Builtin::Back, Builtin::Back.label());
        }

        let mut inner = self.inner.borrow_mut();
        let selector = inner.entries.len() + 1;
        if let Action::Submenu(child) = &action {
            debug!(
                menu = %inner.title,
                submenu = %child.title(),
                selector,
                "attached submenu"
            );
        }
        inner.entries.insert(selector, Entry { action, label });
        Ok(selector)
    }

    fn check_entry(&self, action: &Action<A>, label: &str) -> Result<(), EntryProblem> {
        if label.trim().is_empty() {
            return Err(EntryProblem::EmptyLabel);
        }
        if label.contains(['\n', '\r']) {
            return Err(EntryProblem::MultilineLabel);
        }
        if let Action::Submenu(child) = action {
            if self.is_self_or_descendant_of(child) {
                return Err(EntryProblem::Cycle);
            }
            if !child.is_root() {
                return Err(EntryProblem::AlreadyAttached);
            }
        }
        Ok(())
    }

    /// True when `other` is this node or one of its ancestors.
    fn is_self_or_descendant_of(&self, other: &MenuNode<A>) -> bool {
        let mut cursor = Some(self.clone());
        while let Some(node) = cursor {
            if node.ptr_eq(other) {
                return true;
            }
            cursor = node.parent();
        }
        false
    }

    /// True when both handles point at the same node.
    pub fn ptr_eq(&self, other: &MenuNode<A>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn title(&self) -> String {
        self.inner.borrow().title.clone()
    }

    /// The node's own prompt, if one was given.
    pub fn prompt(&self) -> Option<String> {
        self.inner.borrow().prompt.clone()
    }

    /// Number of numbered entries.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Labels of the numbered entries, in selector order.
    pub fn labels(&self) -> Vec<String> {
        self.inner
            .borrow()
            .entries
            .values()
            .map(|e| e.label.clone())
            .collect()
    }

    /// The menu this node was attached to, while it is still alive.
    pub fn parent(&self) -> Option<MenuNode<A>> {
        self.inner
            .borrow()
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|inner| MenuNode { inner })
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Whether `b` is offered: the node has the back command and a live parent.
    pub fn has_back(&self) -> bool {
        self.inner.borrow().builtins.contains_key(&Builtin::Back) && !self.is_root()
    }

    /// The merged selector table shared by display and input validation:
    /// numbered entries ascending, then `b` (non-root only), then `q`.
    pub fn selectors(&self) -> Vec<(Selector, String)> {
        let has_back = self.has_back();
        let inner = self.inner.borrow();

        let items = inner
            .entries
            .iter()
            .map(|(n, e)| (Selector::Item(*n), e.label.clone()));
        let builtins = inner
            .builtins
            .iter()
            .filter(|(b, _)| **b != Builtin::Back || has_back)
            .map(|(b, label)| (Selector::Builtin(*b), (*label).to_string()));

        let mut rows: Vec<(Selector, String)> = items.chain(builtins).collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    }

    /// Whether `selector` is currently offered by this node.
    pub fn accepts(&self, selector: Selector) -> bool {
        match selector {
            Selector::Item(n) => self.inner.borrow().entries.contains_key(&n),
            Selector::Builtin(Builtin::Back) => self.has_back(),
            Selector::Builtin(Builtin::Quit) => true,
        }
    }
}

impl<A: Clone> MenuNode<A> {
    /// The action behind a numbered entry, or the parent menu for `b`.
    pub fn entry_action(&self, selector: Selector) -> Option<Action<A>> {
        match selector {
            Selector::Item(n) => self
                .inner
                .borrow()
                .entries
                .get(&n)
                .map(|e| e.action.clone()),
            Selector::Builtin(Builtin::Back) => self.parent().map(Action::Submenu),
            Selector::Builtin(Builtin::Quit) => None,
        }
    }

    /// A copy of the numbered entry at `n`.
    pub fn entry(&self, n: usize) -> Option<Entry<A>> {
        self.inner.borrow().entries.get(&n).cloned()
    }

    pub(crate) fn step(&self, selector: Selector) -> Option<Step<A>> {
        if !self.accepts(selector) {
            return None;
        }
        match selector {
            Selector::Builtin(Builtin::Quit) => Some(Step::Quit),
            Selector::Builtin(Builtin::Back) => self.parent().map(Step::Back),
            Selector::Item(_) => match self.entry_action(selector)? {
                Action::Leaf(value) => Some(Step::Leaf(value)),
                Action::Submenu(child) => Some(Step::Enter(child)),
            },
        }
    }
}

impl<A> fmt::Debug for MenuNode<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MenuNode")
            .field("title", &inner.title)
            .field("prompt", &inner.prompt)
            .field("entries", &inner.entries.len())
            .field("root", &inner.parent.is_none())
            .finish()
    }
}
