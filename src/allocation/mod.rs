//! Duty allocation.
//!
//! Turns the confirmed sessions into a timetable, one invigilator per hall,
//! always handing the next duty to a least-loaded staff member.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_invigilate::allocation::{AllocationConfig, DutyAllocator, DutyCeiling, LoadSummary};
//! use u_invigilate::models::{roster, ConfirmedSession, SessionCatalog};
//!
//! let d = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! let catalog = SessionCatalog::from_days([(d, true, true)]);
//! let confirmed: Vec<ConfirmedSession> = catalog
//!     .iter()
//!     .map(|s| ConfirmedSession::new(s.key, vec!["A".into()], 30))
//!     .collect();
//!
//! let config = AllocationConfig::new()
//!     .with_ceiling(DutyCeiling::AtMost(3))
//!     .with_seed(42);
//! let timetable = DutyAllocator::with_config(config)
//!     .generate(&catalog, &confirmed, &roster(["X", "Y"]))
//!     .unwrap();
//!
//! assert!(LoadSummary::from_timetable(&timetable).is_balanced());
//! ```

mod config;
mod engine;
mod kpi;
mod tiebreak;

pub use config::{AllocationConfig, DutyCeiling};
pub use engine::DutyAllocator;
pub use kpi::LoadSummary;
pub use tiebreak::{FirstTied, RandomTieBreaker, TieBreaker};
