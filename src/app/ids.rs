//! Caller-side id generation for new items.
//!
//! The store never invents ids. New items created from the add form get a
//! timestamp-derived id: the current Unix time in milliseconds, bumped past the
//! previous id when two are requested within the same millisecond.

use crate::domain::ItemId;

/// Produces strictly increasing, timestamp-derived ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<ItemId>,
}

impl IdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Returns the next id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use listkeeper::app::IdGenerator;
    ///
    /// let mut ids = IdGenerator::new();
    /// let a = ids.next_id();
    /// let b = ids.next_id();
    /// assert!(b > a);
    /// ```
    pub fn next_id(&mut self) -> ItemId {
        self.next_from(chrono::Utc::now().timestamp_millis())
    }

    fn next_from(&mut self, now_millis: ItemId) -> ItemId {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_the_clock() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_from(1_000), 1_000);
        assert_eq!(ids.next_from(2_000), 2_000);
    }

    #[test]
    fn same_millisecond_bumps() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_from(500), 500);
        assert_eq!(ids.next_from(500), 501);
        assert_eq!(ids.next_from(500), 502);
    }

    #[test]
    fn clock_going_backwards_still_increases() {
        let mut ids = IdGenerator::new();
        ids.next_from(900);
        assert_eq!(ids.next_from(100), 901);
    }

    #[test]
    fn real_clock_ids_increase() {
        let mut ids = IdGenerator::new();
        let generated: Vec<_> = (0..50).map(|_| ids.next_id()).collect();
        assert!(generated.windows(2).all(|pair| pair[1] > pair[0]));
    }
}
