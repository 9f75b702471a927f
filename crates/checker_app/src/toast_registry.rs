//! Ownership of live toast handles keyed by toast id.
use std::collections::HashMap;

use checker_core::ToastId;

/// Holds whatever a shown toast must keep alive (its element and its close
/// listener) until the toast is hidden. Taking an entry hands that ownership
/// back so the caller decides when it is dropped.
#[derive(Debug)]
pub struct ToastRegistry<H> {
    entries: HashMap<ToastId, H>,
}

impl<H> Default for ToastRegistry<H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<H> ToastRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handle. An older handle under the same id is returned.
    pub fn insert(&mut self, id: ToastId, handle: H) -> Option<H> {
        self.entries.insert(id, handle)
    }

    pub fn take(&mut self, id: ToastId) -> Option<H> {
        self.entries.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn taking_a_toast_releases_its_handle() {
        let listener = Rc::new(());
        let mut registry = ToastRegistry::new();
        registry.insert(1, Rc::clone(&listener));
        assert_eq!(Rc::strong_count(&listener), 2);

        let taken = registry.take(1);
        assert!(registry.is_empty());
        drop(taken);
        assert_eq!(Rc::strong_count(&listener), 1);
    }

    #[test]
    fn handles_do_not_accumulate_across_many_toasts() {
        let listener = Rc::new(());
        let mut registry = ToastRegistry::new();
        for id in 0..100 {
            registry.insert(id, Rc::clone(&listener));
            drop(registry.take(id));
        }
        assert_eq!(registry.len(), 0);
        assert_eq!(Rc::strong_count(&listener), 1);
    }

    #[test]
    fn second_take_finds_nothing() {
        let mut registry = ToastRegistry::new();
        registry.insert(7, "toast-7");
        assert_eq!(registry.take(7), Some("toast-7"));
        assert_eq!(registry.take(7), None);
    }

    #[test]
    fn other_toasts_stay_registered() {
        let mut registry = ToastRegistry::new();
        registry.insert(1, 'a');
        registry.insert(2, 'b');
        registry.take(1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.take(2), Some('b'));
    }
}
