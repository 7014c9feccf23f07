//! Invigilation duty allocation.
//!
//! Assigns staff to examination halls across a set of (date, slot)
//! sessions so that every occupied hall gets exactly one invigilator and
//! duty load stays as even as possible.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Hall`, `Staff`, `Session`, `SessionCatalog`,
//!   `ConfirmedSession`, `Timetable`
//! - **`records`**: Record-store snapshot decoded from JSON
//! - **`validation`**: Input integrity checks (duplicate names and sessions)
//! - **`selection`**: Capacity-gated hall selector, one session at a time
//! - **`allocation`**: Least-loaded greedy allocator with pluggable tie-break
//! - **`report`**: Timetable laid out as a printable table
//!
//! # Workflow
//!
//! ```
//! use u_invigilate::allocation::{AllocationConfig, DutyAllocator, LoadSummary};
//! use u_invigilate::records::RecordSnapshot;
//! use u_invigilate::report::{ReportOptions, ReportTable};
//! use u_invigilate::selection::HallSelector;
//!
//! let snapshot = RecordSnapshot::from_json(r#"{
//!     "halls": [{"name": "A", "capacity": 30}, {"name": "B", "capacity": 20}],
//!     "staff": [{"name": "X"}, {"name": "Y"}, {"name": "Z"}],
//!     "sessions": [{"date": "2024-01-10", "FN": true, "AN": false}]
//! }"#)?;
//! let (halls, staff, catalog) = snapshot.load()?;
//!
//! let mut selector = HallSelector::new(&catalog, halls);
//! selector.set_required_strength(40)?;
//! selector.toggle_hall("A")?;
//! selector.toggle_hall("B")?;
//! selector.confirm()?;
//! let confirmed = selector.finish()?;
//!
//! let allocator = DutyAllocator::with_config(AllocationConfig::new().with_seed(1));
//! let timetable = allocator.generate(&catalog, &confirmed, &staff)?;
//! assert_eq!(timetable.total_duties(), 2);
//! assert!(LoadSummary::from_timetable(&timetable).is_balanced());
//!
//! let table = ReportTable::from_timetable(&timetable, &ReportOptions::new());
//! assert_eq!(table.rows.len(), 3);
//! # Ok::<(), u_invigilate::InvigilationError>(())
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events; install a subscriber in the host application to
//! see them.

pub mod allocation;
pub mod error;
pub mod models;
pub mod records;
pub mod report;
pub mod selection;
pub mod validation;

pub use error::{InvigilationError, Result};
