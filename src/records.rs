//! Record-store snapshot.
//!
//! The record store keeps venues, staff, and examination dates. A run
//! starts from a read-only snapshot of those records, decoded from JSON:
//!
//! ```json
//! {
//!   "halls":    [{ "name": "A101", "capacity": 30 }],
//!   "staff":    [{ "name": "R. Kumar" }],
//!   "sessions": [{ "date": "2024-01-10", "FN": true, "AN": false }]
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{InvigilationError, Result};
use crate::models::{Hall, SessionCatalog, Staff};
use crate::validation::validate_input;

/// A venue record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallRecord {
    pub name: String,
    #[serde(default)]
    pub capacity: u32,
}

/// A staff record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub name: String,
}

/// An examination date with its slot flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSessionRecord {
    /// ISO-8601 calendar date (`YYYY-MM-DD`), surrounding blanks allowed.
    pub date: String,
    /// Forenoon slot needs invigilation.
    #[serde(rename = "FN", default)]
    pub forenoon: bool,
    /// Afternoon slot needs invigilation.
    #[serde(rename = "AN", default)]
    pub afternoon: bool,
}

/// Everything a run reads from the record store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    #[serde(default)]
    pub halls: Vec<HallRecord>,
    #[serde(default)]
    pub staff: Vec<StaffRecord>,
    #[serde(default)]
    pub sessions: Vec<DateSessionRecord>,
}

impl RecordSnapshot {
    /// Decodes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Halls in store order.
    pub fn halls(&self) -> Vec<Hall> {
        self.halls
            .iter()
            .map(|h| Hall::new(h.name.clone(), h.capacity))
            .collect()
    }

    /// Staff in store order.
    pub fn staff(&self) -> Vec<Staff> {
        self.staff.iter().map(|s| Staff::new(s.name.clone())).collect()
    }

    /// Session catalog, one forenoon and one afternoon session per date.
    ///
    /// Fails with `InvalidRecord` on the first date that does not parse.
    pub fn catalog(&self) -> Result<SessionCatalog> {
        let days = self
            .sessions
            .iter()
            .map(|r| Ok((parse_date(&r.date)?, r.forenoon, r.afternoon)))
            .collect::<Result<Vec<_>>>()?;
        Ok(SessionCatalog::from_days(days))
    }

    /// Builds halls, staff, and catalog after validating them together.
    pub fn load(&self) -> Result<(Vec<Hall>, Vec<Staff>, SessionCatalog)> {
        let halls = self.halls();
        let staff = self.staff();
        let catalog = self.catalog()?;
        validate_input(&halls, &staff, &catalog).map_err(InvigilationError::Validation)?;
        Ok((halls, staff, catalog))
    }
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| InvigilationError::InvalidRecord(format!("bad date '{s}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SessionKey, Slot};

    const SAMPLE: &str = r#"{
        "halls": [{"name": "A", "capacity": 30}, {"name": "B", "capacity": 20}],
        "staff": [{"name": "X"}, {"name": "Y"}, {"name": "Z"}],
        "sessions": [
            {"date": "2024-01-11", "FN": false, "AN": true},
            {"date": "2024-01-10", "FN": true, "AN": false}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let snap = RecordSnapshot::from_json(SAMPLE).unwrap();
        assert_eq!(snap.halls.len(), 2);
        assert_eq!(snap.staff[2].name, "Z");
        assert!(snap.sessions[0].afternoon);
        assert!(!snap.sessions[0].forenoon);
    }

    #[test]
    fn test_catalog_from_records() {
        let snap = RecordSnapshot::from_json(SAMPLE).unwrap();
        let catalog = snap.catalog().unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.active_count(), 2);

        let d10 = parse_date("2024-01-10").unwrap();
        let first = catalog.get(0).unwrap();
        assert_eq!(first.key, SessionKey::new(d10, Slot::Forenoon));
        assert!(first.active);
    }

    #[test]
    fn test_load_validates() {
        let snap = RecordSnapshot::from_json(SAMPLE).unwrap();
        let (halls, staff, catalog) = snap.load().unwrap();
        assert_eq!(halls[0], Hall::new("A", 30));
        assert_eq!(staff.len(), 3);
        assert_eq!(catalog.len(), 4);

        let mut dup = snap.clone();
        dup.staff.push(StaffRecord { name: "X".into() });
        assert!(matches!(dup.load(), Err(InvigilationError::Validation(_))));
    }

    #[test]
    fn test_missing_flags_default_inactive() {
        let snap = RecordSnapshot::from_json(r#"{"sessions":[{"date":"2024-02-01"}]}"#).unwrap();
        assert_eq!(snap.catalog().unwrap().active_count(), 0);
        assert!(snap.halls.is_empty());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            RecordSnapshot::from_json(r#"{"sessions":[{"date":20240110}]}"#),
            Err(InvigilationError::Json(_))
        ));
    }

    #[test]
    fn test_bad_date_is_invalid_record() {
        let snap =
            RecordSnapshot::from_json(r#"{"sessions":[{"date":"10/01/2024","FN":true}]}"#).unwrap();
        assert!(matches!(snap.catalog(), Err(InvigilationError::InvalidRecord(_))));
        assert!(matches!(snap.load(), Err(InvigilationError::InvalidRecord(_))));
    }

    #[test]
    fn test_padded_date_accepted() {
        let snap =
            RecordSnapshot::from_json(r#"{"sessions":[{"date":" 2024-01-10 ","AN":true}]}"#)
                .unwrap();
        let catalog = snap.catalog().unwrap();
        let d10 = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(catalog.get(1).unwrap().key, SessionKey::new(d10, Slot::Afternoon));
        assert!(catalog.get(1).unwrap().active);
    }

    #[test]
    fn test_parse_date() {
        let d = parse_date(" 2024-01-10 ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert!(matches!(
            parse_date("2024-13-01"),
            Err(InvigilationError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snap = RecordSnapshot::from_json(SAMPLE).unwrap();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"FN\""));
        assert_eq!(RecordSnapshot::from_json(&json).unwrap(), snap);
    }
}
