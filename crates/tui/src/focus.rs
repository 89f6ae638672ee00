//! Focus ring for the editor's controls.
//!
//! The capture controller never moves focus itself; it asks its host to move
//! to the next or previous control. `FocusRing` is that host-side state.

/// Ordered ring of focusable control ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRing {
    order: Vec<String>,
    current: usize,
}

impl FocusRing {
    /// Create a ring from ids; the first id starts focused.
    pub fn new(ids: &[&str]) -> Self {
        Self {
            order: ids.iter().map(|s| s.to_string()).collect(),
            current: 0,
        }
    }

    /// Move focus to the next control, wrapping at the end.
    pub fn next(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.order.len();
    }

    /// Move focus to the previous control, wrapping at the start.
    pub fn prev(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.current = self
            .current
            .checked_sub(1)
            .unwrap_or(self.order.len() - 1);
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.current_id() == Some(id)
    }

    pub fn current_id(&self) -> Option<&str> {
        self.order.get(self.current).map(String::as_str)
    }

    /// Focus a control by id. Returns false if the id is not in the ring.
    pub fn set_focus(&mut self, id: &str) -> bool {
        match self.order.iter().position(|x| x == id) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_prev_wrap() {
        let mut ring = FocusRing::new(&["shortcuts", "close"]);
        assert!(ring.is_focused("shortcuts"));

        ring.next();
        assert_eq!(ring.current_id(), Some("close"));
        ring.next();
        assert_eq!(ring.current_id(), Some("shortcuts"));

        ring.prev();
        assert_eq!(ring.current_id(), Some("close"));
    }

    #[test]
    fn test_set_focus() {
        let mut ring = FocusRing::new(&["a", "b", "c"]);
        assert!(ring.set_focus("c"));
        assert!(ring.is_focused("c"));
        assert!(!ring.set_focus("missing"));
        assert!(ring.is_focused("c"));
    }

    #[test]
    fn test_empty_ring() {
        let mut ring = FocusRing::new(&[]);
        ring.next();
        ring.prev();
        assert!(ring.is_empty());
        assert_eq!(ring.current_id(), None);
        assert!(!ring.is_focused(""));
    }
}
