//! Timetable (allocation result) model.
//!
//! A timetable is a staff × session matrix. Each cell lists the halls the
//! staff member invigilates in that session; an empty cell means no duty.
//! Rows follow roster order and columns follow catalog order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{SessionKey, Staff, StaffId};

/// Marker written for a cell with no duty.
pub const EMPTY_MARKER: &str = "-";

/// One timetable cell.
///
/// Usually holds zero or one hall. It holds more when the same staff member
/// is the least loaded for several halls of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    halls: Vec<String>,
}

impl Cell {
    /// Whether the cell carries no duty.
    pub fn is_empty(&self) -> bool {
        self.halls.is_empty()
    }

    /// Assigned halls in assignment order.
    pub fn halls(&self) -> &[String] {
        &self.halls
    }

    /// First assigned hall, if any.
    pub fn hall(&self) -> Option<&str> {
        self.halls.first().map(String::as_str)
    }

    /// Whether the cell holds the given hall.
    pub fn contains(&self, hall: &str) -> bool {
        self.halls.iter().any(|h| h == hall)
    }

    /// Text for the cell, using `marker` when empty.
    ///
    /// Several halls are joined with `", "`; read [`Cell::halls`] when hall
    /// names may themselves contain that separator.
    pub fn display_with(&self, marker: &str) -> String {
        if self.halls.is_empty() {
            marker.to_string()
        } else {
            self.halls.join(", ")
        }
    }

    fn push(&mut self, hall: String) {
        self.halls.push(hall);
    }
}

/// Writes the default marker for an empty cell; use [`Timetable::cell_text`]
/// for the timetable's own marker.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(EMPTY_MARKER))
    }
}

/// One staff member's timetable row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRow {
    /// Staff display name.
    pub staff: String,
    /// One cell per catalog session.
    pub cells: Vec<Cell>,
    /// Number of duties (halls) assigned.
    pub duties: u32,
}

/// A staff–hall pairing for one session, flattened out of the matrix.
///
/// `hall` is `None` for a session in which the staff member has no duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyAssignment {
    /// Staff display name.
    pub staff: String,
    /// Date and slot.
    pub session: SessionKey,
    /// Assigned hall.
    pub hall: Option<String>,
}

/// The complete invigilation timetable.
///
/// Name-keyed lookups (`row`, `cell`, `duty_count`, `holders`) resolve to
/// the first staff member with that name; the `*_by_id` variants address a
/// roster position and stay unambiguous when names repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    sessions: Vec<SessionKey>,
    rows: Vec<TimetableRow>,
    #[serde(default = "default_marker")]
    empty_marker: String,
}

fn default_marker() -> String {
    EMPTY_MARKER.to_string()
}

impl Default for Timetable {
    fn default() -> Self {
        Self {
            sessions: Vec::new(),
            rows: Vec::new(),
            empty_marker: default_marker(),
        }
    }
}

impl Timetable {
    /// Creates a timetable with every cell empty.
    pub fn empty(staff: &[Staff], sessions: Vec<SessionKey>) -> Self {
        let rows = staff
            .iter()
            .map(|s| TimetableRow {
                staff: s.name.clone(),
                cells: vec![Cell::default(); sessions.len()],
                duties: 0,
            })
            .collect();
        Self {
            sessions,
            rows,
            empty_marker: default_marker(),
        }
    }

    /// Sets the text written for cells with no duty.
    pub fn with_empty_marker(mut self, marker: impl Into<String>) -> Self {
        self.empty_marker = marker.into();
        self
    }

    /// Text written for cells with no duty.
    pub fn empty_marker(&self) -> &str {
        &self.empty_marker
    }

    /// Cell text using this timetable's empty marker.
    pub fn cell_text(&self, cell: &Cell) -> String {
        cell.display_with(&self.empty_marker)
    }

    /// Records a duty and bumps the staff member's count.
    ///
    /// Out-of-range indices are ignored; the allocator only passes indices
    /// it derived from this timetable.
    pub(crate) fn assign(&mut self, staff: StaffId, column: usize, hall: String) {
        if let Some(row) = self.rows.get_mut(staff.0) {
            if let Some(cell) = row.cells.get_mut(column) {
                cell.push(hall);
                row.duties += 1;
            }
        }
    }

    /// Column keys in catalog order.
    pub fn sessions(&self) -> &[SessionKey] {
        &self.sessions
    }

    /// Rows in roster order.
    pub fn rows(&self) -> &[TimetableRow] {
        &self.rows
    }

    /// Row by roster position.
    pub fn row_by_id(&self, staff: StaffId) -> Option<&TimetableRow> {
        self.rows.get(staff.0)
    }

    /// First row with the given staff name.
    pub fn row(&self, staff: &str) -> Option<&TimetableRow> {
        self.rows.iter().find(|r| r.staff == staff)
    }

    /// Roster positions of every row with the given staff name.
    pub fn ids_named(&self, staff: &str) -> Vec<StaffId> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.staff == staff)
            .map(|(i, _)| StaffId(i))
            .collect()
    }

    /// Column position of a session.
    pub fn column_of(&self, session: SessionKey) -> Option<usize> {
        self.sessions.iter().position(|k| *k == session)
    }

    /// Cell for a staff member and session.
    pub fn cell(&self, staff: &str, session: SessionKey) -> Option<&Cell> {
        let column = self.column_of(session)?;
        self.row(staff)?.cells.get(column)
    }

    /// Cell for a roster position and session.
    pub fn cell_by_id(&self, staff: StaffId, session: SessionKey) -> Option<&Cell> {
        let column = self.column_of(session)?;
        self.row_by_id(staff)?.cells.get(column)
    }

    /// Duties assigned to a staff member.
    pub fn duty_count(&self, staff: &str) -> Option<u32> {
        self.row(staff).map(|r| r.duties)
    }

    /// Duties assigned to a roster position.
    pub fn duty_count_by_id(&self, staff: StaffId) -> Option<u32> {
        self.row_by_id(staff).map(|r| r.duties)
    }

    /// Total duties across all staff.
    pub fn total_duties(&self) -> u32 {
        self.rows.iter().map(|r| r.duties).sum()
    }

    /// Staff names whose cell for `session` holds `hall`.
    pub fn holders(&self, session: SessionKey, hall: &str) -> Vec<&str> {
        let Some(column) = self.column_of(session) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter(|r| r.cells.get(column).is_some_and(|c| c.contains(hall)))
            .map(|r| r.staff.as_str())
            .collect()
    }

    /// Roster positions whose cell for `session` holds `hall`.
    pub fn holder_ids(&self, session: SessionKey, hall: &str) -> Vec<StaffId> {
        let Some(column) = self.column_of(session) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.cells.get(column).is_some_and(|c| c.contains(hall)))
            .map(|(i, _)| StaffId(i))
            .collect()
    }

    /// Flattens the matrix, roster order then catalog order.
    ///
    /// An empty cell yields one assignment with `hall: None`; a cell holding
    /// several halls yields one assignment per hall.
    pub fn assignments(&self) -> Vec<DutyAssignment> {
        let mut out = Vec::new();
        for row in &self.rows {
            for (session, cell) in self.sessions.iter().zip(&row.cells) {
                if cell.is_empty() {
                    out.push(DutyAssignment {
                        staff: row.staff.clone(),
                        session: *session,
                        hall: None,
                    });
                }
                for hall in cell.halls() {
                    out.push(DutyAssignment {
                        staff: row.staff.clone(),
                        session: *session,
                        hall: Some(hall.clone()),
                    });
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{roster, Slot};
    use chrono::NaiveDate;

    fn key(d: u32, slot: Slot) -> SessionKey {
        SessionKey::new(NaiveDate::from_ymd_opt(2024, 1, d).unwrap(), slot)
    }

    fn sample() -> Timetable {
        let staff = roster(["X", "Y"]);
        let mut t = Timetable::empty(
            &staff,
            vec![key(10, Slot::Forenoon), key(10, Slot::Afternoon)],
        );
        t.assign(StaffId(0), 0, "A".into());
        t.assign(StaffId(1), 0, "B".into());
        t.assign(StaffId(1), 1, "A".into());
        t
    }

    #[test]
    fn test_empty_timetable() {
        let t = Timetable::empty(&roster(["X"]), vec![key(10, Slot::Forenoon)]);
        let cell = t.cell("X", key(10, Slot::Forenoon)).unwrap();
        assert!(cell.is_empty());
        assert_eq!(cell.to_string(), EMPTY_MARKER);
        assert_eq!(t.total_duties(), 0);
    }

    #[test]
    fn test_assign_and_lookup() {
        let t = sample();
        assert_eq!(t.cell("X", key(10, Slot::Forenoon)).unwrap().hall(), Some("A"));
        assert!(t.cell("X", key(10, Slot::Afternoon)).unwrap().is_empty());
        assert_eq!(t.duty_count("Y"), Some(2));
        assert_eq!(t.duty_count("nobody"), None);
        assert_eq!(t.total_duties(), 3);
    }

    #[test]
    fn test_holders() {
        let t = sample();
        assert_eq!(t.holders(key(10, Slot::Forenoon), "A"), vec!["X"]);
        assert_eq!(t.holders(key(10, Slot::Afternoon), "A"), vec!["Y"]);
        assert!(t.holders(key(11, Slot::Forenoon), "A").is_empty());
    }

    #[test]
    fn test_multiple_halls_in_one_cell() {
        let mut t = Timetable::empty(&roster(["X"]), vec![key(10, Slot::Forenoon)]);
        t.assign(StaffId(0), 0, "A".into());
        t.assign(StaffId(0), 0, "B".into());
        let cell = t.cell("X", key(10, Slot::Forenoon)).unwrap();
        assert_eq!(cell.halls(), &["A".to_string(), "B".to_string()]);
        assert_eq!(cell.to_string(), "A, B");
        assert_eq!(t.duty_count("X"), Some(2));
    }

    #[test]
    fn test_assign_out_of_range_ignored() {
        let mut t = Timetable::empty(&roster(["X"]), vec![key(10, Slot::Forenoon)]);
        t.assign(StaffId(5), 0, "A".into());
        t.assign(StaffId(0), 9, "A".into());
        assert_eq!(t.total_duties(), 0);
    }

    #[test]
    fn test_assignments_flatten() {
        let t = sample();
        let flat = t.assignments();
        // X: FN=A, AN=empty; Y: FN=B, AN=A
        assert_eq!(flat.len(), 4);
        assert_eq!(flat[0].hall.as_deref(), Some("A"));
        assert_eq!(flat[1].staff, "X");
        assert_eq!(flat[1].hall, None);
        assert_eq!(flat[3].session, key(10, Slot::Afternoon));
    }

    #[test]
    fn test_custom_empty_marker() {
        let t = sample().with_empty_marker("EMPTY");
        assert_eq!(t.empty_marker(), "EMPTY");
        let cell = t.cell("X", key(10, Slot::Afternoon)).unwrap();
        assert_eq!(t.cell_text(cell), "EMPTY");
        let busy = t.cell("Y", key(10, Slot::Afternoon)).unwrap();
        assert_eq!(t.cell_text(busy), "A");
        assert_eq!(Timetable::default().empty_marker(), EMPTY_MARKER);
    }

    #[test]
    fn test_same_name_staff_by_id() {
        let staff = roster(["X", "X"]);
        let k = key(10, Slot::Forenoon);
        let mut t = Timetable::empty(&staff, vec![k]);
        t.assign(StaffId(1), 0, "A".into());

        // name lookup sees only the first X
        assert!(t.cell("X", k).unwrap().is_empty());
        assert_eq!(t.ids_named("X"), vec![StaffId(0), StaffId(1)]);
        assert_eq!(t.cell_by_id(StaffId(1), k).unwrap().hall(), Some("A"));
        assert_eq!(t.duty_count_by_id(StaffId(1)), Some(1));
        assert_eq!(t.duty_count_by_id(StaffId(2)), None);
        assert_eq!(t.holder_ids(k, "A"), vec![StaffId(1)]);
    }

    #[test]
    fn test_marker_defaults_when_missing_in_json() {
        let json = r#"{"sessions":[],"rows":[]}"#;
        let t: Timetable = serde_json::from_str(json).unwrap();
        assert_eq!(t.empty_marker(), EMPTY_MARKER);
    }

    #[test]
    fn test_timetable_serde() {
        let t = sample();
        let json = serde_json::to_string(&t).unwrap();
        let back: Timetable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
