//! Examination sessions and the session catalog.
//!
//! A session is one (date, slot) pair. Every examination date has a
//! forenoon and an afternoon slot, each independently marked active or
//! inactive. The catalog holds all of them in date-then-slot order, which is
//! the order the hall selector walks and the order timetable columns follow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-day examination slot.
///
/// Declaration order is the chronological order within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    /// Forenoon.
    #[serde(rename = "FN")]
    Forenoon,
    /// Afternoon.
    #[serde(rename = "AN")]
    Afternoon,
}

impl Slot {
    /// Both slots in chronological order.
    pub const ALL: [Slot; 2] = [Slot::Forenoon, Slot::Afternoon];

    /// Short code used in timetables ("FN" / "AN").
    pub fn code(self) -> &'static str {
        match self {
            Slot::Forenoon => "FN",
            Slot::Afternoon => "AN",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identifies a session: a date and a slot.
///
/// Ordering is date first, then slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionKey {
    /// Examination date.
    pub date: NaiveDate,
    /// Slot within the date.
    pub slot: Slot,
}

impl SessionKey {
    /// Creates a session key.
    pub fn new(date: NaiveDate, slot: Slot) -> Self {
        Self { date, slot }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.slot)
    }
}

/// A session in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Date and slot.
    pub key: SessionKey,
    /// Whether the session needs invigilation.
    pub active: bool,
}

impl Session {
    /// Creates an active session.
    pub fn active(date: NaiveDate, slot: Slot) -> Self {
        Self {
            key: SessionKey::new(date, slot),
            active: true,
        }
    }

    /// Creates an inactive session.
    pub fn inactive(date: NaiveDate, slot: Slot) -> Self {
        Self {
            key: SessionKey::new(date, slot),
            active: false,
        }
    }
}

/// All sessions of an examination period, in date-then-slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCatalog {
    sessions: Vec<Session>,
}

impl SessionCatalog {
    /// Creates a catalog, sorting sessions by date then slot.
    ///
    /// The sort is stable; duplicate keys keep their input order and are
    /// reported by [`crate::validation::validate_input`].
    pub fn new(mut sessions: Vec<Session>) -> Self {
        sessions.sort_by_key(|s| s.key);
        Self { sessions }
    }

    /// Builds a catalog from per-date slot flags.
    ///
    /// Each date yields a forenoon and an afternoon session; the flag marks
    /// whether that session is active.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use u_invigilate::models::SessionCatalog;
    ///
    /// let d = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// let catalog = SessionCatalog::from_days([(d, true, false)]);
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.active_count(), 1);
    /// ```
    pub fn from_days(days: impl IntoIterator<Item = (NaiveDate, bool, bool)>) -> Self {
        let sessions = days
            .into_iter()
            .flat_map(|(date, forenoon, afternoon)| {
                [
                    Session {
                        key: SessionKey::new(date, Slot::Forenoon),
                        active: forenoon,
                    },
                    Session {
                        key: SessionKey::new(date, Slot::Afternoon),
                        active: afternoon,
                    },
                ]
            })
            .collect();
        Self::new(sessions)
    }

    /// Sessions in catalog order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Iterates sessions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }

    /// Session keys in catalog order.
    pub fn keys(&self) -> Vec<SessionKey> {
        self.sessions.iter().map(|s| s.key).collect()
    }

    /// Session at a catalog position.
    pub fn get(&self, index: usize) -> Option<&Session> {
        self.sessions.get(index)
    }

    /// Catalog position of a session key.
    pub fn index_of(&self, key: SessionKey) -> Option<usize> {
        self.sessions.iter().position(|s| s.key == key)
    }

    /// Number of sessions, active or not.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the catalog has no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Number of active sessions.
    pub fn active_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.active).count()
    }

    /// Distinct dates in catalog order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.sessions.iter().map(|s| s.key.date).collect();
        dates.dedup();
        dates
    }
}

/// An active session whose hall set covers the required strength.
///
/// Produced by the hall selector, once per active session, and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedSession {
    /// Date and slot.
    pub key: SessionKey,
    /// Selected hall names, in selection order.
    pub halls: Vec<String>,
    /// Candidates to be seated.
    pub required_strength: u32,
}

impl ConfirmedSession {
    /// Creates a confirmed session.
    pub fn new(key: SessionKey, halls: Vec<String>, required_strength: u32) -> Self {
        Self {
            key,
            halls,
            required_strength,
        }
    }

    /// Number of invigilators this session needs (one per hall).
    pub fn duty_count(&self) -> usize {
        self.halls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_slot_order_and_code() {
        assert!(Slot::Forenoon < Slot::Afternoon);
        assert_eq!(Slot::Forenoon.to_string(), "FN");
        assert_eq!(Slot::Afternoon.code(), "AN");
    }

    #[test]
    fn test_catalog_sorted_date_then_slot() {
        let catalog = SessionCatalog::new(vec![
            Session::active(date(11), Slot::Forenoon),
            Session::active(date(10), Slot::Afternoon),
            Session::inactive(date(10), Slot::Forenoon),
        ]);
        let keys = catalog.keys();
        assert_eq!(keys[0], SessionKey::new(date(10), Slot::Forenoon));
        assert_eq!(keys[1], SessionKey::new(date(10), Slot::Afternoon));
        assert_eq!(keys[2], SessionKey::new(date(11), Slot::Forenoon));
    }

    #[test]
    fn test_from_days() {
        let catalog = SessionCatalog::from_days([(date(12), false, true), (date(10), true, true)]);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.active_count(), 3);
        assert_eq!(catalog.dates(), vec![date(10), date(12)]);

        let first = catalog.get(0).unwrap();
        assert_eq!(first.key.date, date(10));
        assert!(first.active);

        let inactive = catalog.get(2).unwrap();
        assert_eq!(inactive.key, SessionKey::new(date(12), Slot::Forenoon));
        assert!(!inactive.active);
    }

    #[test]
    fn test_index_of() {
        let catalog = SessionCatalog::from_days([(date(10), true, true)]);
        assert_eq!(
            catalog.index_of(SessionKey::new(date(10), Slot::Afternoon)),
            Some(1)
        );
        assert_eq!(
            catalog.index_of(SessionKey::new(date(11), Slot::Afternoon)),
            None
        );
    }

    #[test]
    fn test_session_key_display() {
        let key = SessionKey::new(date(10), Slot::Forenoon);
        assert_eq!(key.to_string(), "2024-01-10 FN");
    }

    #[test]
    fn test_slot_serde_codes() {
        assert_eq!(serde_json::to_string(&Slot::Forenoon).unwrap(), "\"FN\"");
        let slot: Slot = serde_json::from_str("\"AN\"").unwrap();
        assert_eq!(slot, Slot::Afternoon);
    }
}
