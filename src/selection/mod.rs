//! Capacity-gated hall selection.
//!
//! Walks the session catalog one session at a time. For each active session
//! the caller sets the number of candidates to seat and toggles halls; the
//! session is confirmed only once the selected halls seat at least that many.
//! Inactive sessions are skipped without input.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_invigilate::models::{Hall, SessionCatalog};
//! use u_invigilate::selection::HallSelector;
//!
//! let d = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! let catalog = SessionCatalog::from_days([(d, true, false)]);
//! let halls = vec![Hall::new("A", 30), Hall::new("B", 20)];
//!
//! let mut selector = HallSelector::new(&catalog, halls);
//! selector.set_required_strength(40).unwrap();
//! selector.toggle_hall("A").unwrap();
//! assert_eq!(selector.remaining_capacity_needed(), 10);
//! selector.toggle_hall("B").unwrap();
//! selector.confirm().unwrap();
//!
//! assert!(selector.is_complete());
//! let confirmed = selector.finish().unwrap();
//! assert_eq!(confirmed[0].halls, vec!["A", "B"]);
//! ```

use tracing::{debug, info, warn};

use crate::error::{InvigilationError, Result};
use crate::models::{total_capacity, ConfirmedSession, Hall, HallId, Session, SessionCatalog};

/// Session-by-session hall selection state machine.
///
/// Owns a snapshot of the catalog and the hall list for one run. The cursor
/// only moves forward; confirmed sessions are never revisited.
#[derive(Debug, Clone)]
pub struct HallSelector {
    sessions: Vec<Session>,
    halls: Vec<Hall>,
    cursor: usize,
    selection: Vec<HallId>,
    required_strength: u32,
    confirmed: Vec<ConfirmedSession>,
}

impl HallSelector {
    /// Creates a selector positioned at the first active session.
    pub fn new(catalog: &SessionCatalog, halls: Vec<Hall>) -> Self {
        let mut selector = Self {
            sessions: catalog.sessions().to_vec(),
            halls,
            cursor: 0,
            selection: Vec::new(),
            required_strength: 0,
            confirmed: Vec::new(),
        };
        selector.skip_inactive();
        selector
    }

    /// Session under the cursor, or `None` once complete.
    pub fn current_session(&self) -> Option<&Session> {
        self.sessions.get(self.cursor)
    }

    /// Cursor position in the catalog.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether every session has been confirmed or skipped.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.sessions.len()
    }

    /// Loaded halls, in store order.
    pub fn halls(&self) -> &[Hall] {
        &self.halls
    }

    /// Strength target for the current session.
    pub fn required_strength(&self) -> u32 {
        self.required_strength
    }

    /// Sets the strength target for the current session.
    pub fn set_required_strength(&mut self, strength: u32) -> Result<()> {
        self.ensure_open()?;
        self.required_strength = strength;
        Ok(())
    }

    /// Adds or removes a hall from the working selection.
    ///
    /// Returns `true` if the hall is selected after the call.
    pub fn toggle_hall(&mut self, name: &str) -> Result<bool> {
        self.ensure_open()?;
        let id = self
            .halls
            .iter()
            .position(|h| h.name == name)
            .map(HallId)
            .ok_or_else(|| InvigilationError::UnknownHall(name.to_string()))?;

        let selected = if let Some(pos) = self.selection.iter().position(|&h| h == id) {
            self.selection.remove(pos);
            false
        } else {
            self.selection.push(id);
            true
        };
        debug!(hall = name, selected, "toggled hall");
        Ok(selected)
    }

    /// Whether a hall is in the working selection.
    pub fn is_selected(&self, name: &str) -> bool {
        self.selection
            .iter()
            .any(|&id| self.halls[id.0].name == name)
    }

    /// Names of the selected halls, in selection order.
    pub fn selected_halls(&self) -> Vec<&str> {
        self.selection
            .iter()
            .map(|&id| self.halls[id.0].name.as_str())
            .collect()
    }

    /// Seating of the selected halls.
    pub fn selected_capacity(&self) -> u64 {
        total_capacity(self.selection.iter().map(|&id| &self.halls[id.0]))
    }

    /// Seats still missing: `max(0, required − selected capacity)`.
    pub fn remaining_capacity_needed(&self) -> u64 {
        u64::from(self.required_strength).saturating_sub(self.selected_capacity())
    }

    /// Locks in the current session and advances the cursor.
    ///
    /// Fails with [`InvigilationError::CapacityInsufficient`] without
    /// changing any state when the selection seats fewer than required.
    pub fn confirm(&mut self) -> Result<&ConfirmedSession> {
        let session = *self
            .current_session()
            .ok_or(InvigilationError::SelectionFinished)?;

        let selected = self.selected_capacity();
        if selected < u64::from(self.required_strength) {
            warn!(
                session = %session.key,
                selected,
                required = self.required_strength,
                "selected halls do not cover required strength"
            );
            return Err(InvigilationError::CapacityInsufficient {
                session: session.key,
                selected,
                required: self.required_strength,
            });
        }

        let halls: Vec<String> = self
            .selection
            .drain(..)
            .map(|id| self.halls[id.0].name.clone())
            .collect();
        info!(
            session = %session.key,
            halls = halls.len(),
            strength = self.required_strength,
            "session confirmed"
        );
        self.confirmed.push(ConfirmedSession::new(
            session.key,
            halls,
            self.required_strength,
        ));
        self.required_strength = 0;
        self.cursor += 1;
        self.skip_inactive();

        let index = self.confirmed.len() - 1;
        Ok(&self.confirmed[index])
    }

    /// Sessions confirmed so far, in catalog order.
    pub fn confirmed(&self) -> &[ConfirmedSession] {
        &self.confirmed
    }

    /// Active sessions not yet confirmed.
    pub fn remaining_sessions(&self) -> usize {
        self.sessions
            .iter()
            .skip(self.cursor)
            .filter(|s| s.active)
            .count()
    }

    /// Hands over the confirmed sessions once selection is complete.
    pub fn finish(self) -> Result<Vec<ConfirmedSession>> {
        if !self.is_complete() {
            return Err(InvigilationError::SelectionIncomplete {
                remaining: self.remaining_sessions(),
            });
        }
        Ok(self.confirmed)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_complete() {
            Err(InvigilationError::SelectionFinished)
        } else {
            Ok(())
        }
    }

    fn skip_inactive(&mut self) {
        while let Some(session) = self.sessions.get(self.cursor) {
            if session.active {
                break;
            }
            debug!(session = %session.key, "skipping inactive session");
            self.cursor += 1;
        }
    }
}
