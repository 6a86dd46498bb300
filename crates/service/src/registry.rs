use crate::handlers::Handlers;
use std::sync::Arc;

/// A registered handler set. Identity is the `Arc` allocation.
pub type HandlerSet = Arc<dyn Handlers>;

fn same_set(a: &HandlerSet, b: &HandlerSet) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

/// Ordered handler sets; the last one is active.
///
/// A set appears at most once. Re-adding a set moves it to the top, so a
/// host mounted inside another host shadows it until it unmounts.
#[derive(Default)]
pub struct HandlerRegistry {
    sets: Vec<HandlerSet>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, set: HandlerSet) {
        self.sets.retain(|existing| !same_set(existing, &set));
        self.sets.push(set);
    }

    /// Returns whether the set was registered.
    pub fn remove(&mut self, set: &HandlerSet) -> bool {
        let before = self.sets.len();
        self.sets.retain(|existing| !same_set(existing, set));
        self.sets.len() != before
    }

    pub fn active(&self) -> Option<HandlerSet> {
        self.sets.last().cloned()
    }

    pub fn contains(&self, set: &HandlerSet) -> bool {
        self.sets.iter().any(|existing| same_set(existing, set))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }
}
