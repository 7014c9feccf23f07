//! Examination hall model.
//!
//! Halls are the venues that need an invigilator whenever they are occupied
//! in a session. Each hall has a seating capacity used by the hall selector
//! to gate confirmation.

use serde::{Deserialize, Serialize};

/// Position of a hall in the loaded hall list.
///
/// Halls are named externally; the index keeps two halls apart even when
/// the store hands over duplicate names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HallId(pub usize);

/// An examination hall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hall {
    /// Display name, used as the timetable cell value.
    pub name: String,
    /// Number of candidates the hall seats.
    pub capacity: u32,
}

impl Hall {
    /// Creates a hall.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

/// Total seating of a set of halls.
///
/// Summed in `u64` so large hall lists cannot overflow.
pub fn total_capacity<'a>(halls: impl IntoIterator<Item = &'a Hall>) -> u64 {
    halls.into_iter().map(|h| u64::from(h.capacity)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hall_new() {
        let h = Hall::new("A101", 30);
        assert_eq!(h.name, "A101");
        assert_eq!(h.capacity, 30);
    }

    #[test]
    fn test_total_capacity() {
        let halls = vec![Hall::new("A", 30), Hall::new("B", 20)];
        assert_eq!(total_capacity(&halls), 50);
        assert_eq!(total_capacity(std::iter::empty()), 0);
    }

    #[test]
    fn test_total_capacity_no_overflow() {
        let halls = vec![Hall::new("A", u32::MAX), Hall::new("B", u32::MAX)];
        assert_eq!(total_capacity(&halls), 2 * u64::from(u32::MAX));
    }
}
