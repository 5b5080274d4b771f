//! Change tracking for optimized display updates.
//!
//! Every value that drives geometry or text on the face is stored in a
//! [`ChangeTracker`]. The refresh path assigns the freshly polled value on
//! every tick and only touches the drawing surface when
//! [`ChangeTracker::is_updated`] says the value actually moved.
//!
//! # Semantics
//!
//! | Event | `is_updated()` afterwards |
//! |-------|---------------------------|
//! | Construction | `true` (initial draw is never skipped) |
//! | `update(v)` with `v != stored` | `true` |
//! | `update(v)` with `v == stored` | `false` |
//!
//! The stored value is replaced on every `update`, equal or not.

/// A value that remembers whether its last assignment changed it.
#[derive(Clone, Copy, Debug)]
pub struct ChangeTracker<T> {
    value: T,
    updated: bool,
}

impl<T: PartialEq> ChangeTracker<T> {
    /// Create a tracker holding `value`, reported as updated.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            updated: true,
        }
    }

    /// Store `value` and record whether it differs from the previous one.
    ///
    /// Returns the new [`is_updated`](Self::is_updated) state.
    pub fn update(
        &mut self,
        value: T,
    ) -> bool {
        self.updated = value != self.value;
        self.value = value;
        self.updated
    }

    /// Whether the most recent [`update`](Self::update) changed the value.
    #[inline]
    pub const fn is_updated(&self) -> bool { self.updated }

    /// Borrow the stored value.
    #[inline]
    pub const fn get(&self) -> &T { &self.value }
}

impl<T: Copy + PartialEq> ChangeTracker<T> {
    /// Copy out the stored value.
    #[inline]
    pub const fn value(&self) -> T { self.value }
}

impl<T: PartialEq + Default> Default for ChangeTracker<T> {
    fn default() -> Self { Self::new(T::default()) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reports_updated() {
        let tracker = ChangeTracker::new(0u8);
        assert!(tracker.is_updated());
        assert_eq!(tracker.value(), 0);
    }

    #[test]
    fn test_equal_update_is_not_a_change() {
        let mut tracker = ChangeTracker::new(55u8);
        assert!(!tracker.update(55));
        assert!(!tracker.is_updated());
    }

    #[test]
    fn test_different_update_is_a_change() {
        let mut tracker = ChangeTracker::new(55u8);
        assert!(tracker.update(54));
        assert_eq!(tracker.value(), 54);
    }

    #[test]
    fn test_consecutive_identical_updates() {
        let mut tracker = ChangeTracker::new(false);
        assert!(tracker.update(true));
        assert!(!tracker.update(true));
        assert!(tracker.update(false));
        assert!(!tracker.update(false));
    }

    #[test]
    fn test_change_is_relative_to_last_stored_value() {
        // A sequence that returns to an earlier value still counts as a change
        let sequence = [1u32, 2, 2, 1, 1, 3, 1];
        let expected = [true, true, false, true, false, true, true];
        let mut tracker = ChangeTracker::new(0u32);
        for (value, want) in sequence.into_iter().zip(expected) {
            assert_eq!(tracker.update(value), want, "update({value})");
        }
    }

    #[test]
    fn test_get_borrows_non_copy_value() {
        let mut tracker = ChangeTracker::new(heapless::String::<8>::new());
        let mut text = heapless::String::<8>::new();
        text.push_str("12:00").unwrap();
        assert!(tracker.update(text.clone()));
        assert_eq!(tracker.get().as_str(), "12:00");
        assert!(!tracker.update(text));
    }

    #[test]
    fn test_default_uses_type_default() {
        let tracker: ChangeTracker<usize> = ChangeTracker::default();
        assert_eq!(tracker.value(), 0);
        assert!(tracker.is_updated());
    }
}
