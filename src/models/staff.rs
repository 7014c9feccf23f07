//! Staff model.

use serde::{Deserialize, Serialize};

/// Position of a staff member in the eligible roster.
///
/// Duty counters and timetable rows are keyed by this index rather than by
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StaffId(pub usize);

/// A staff member who may be given invigilation duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Display name.
    pub name: String,
}

impl Staff {
    /// Creates a staff member.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Builds a roster from display names.
pub fn roster<I, S>(names: I) -> Vec<Staff>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Staff::new).collect()
}
