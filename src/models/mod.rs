//! Invigilation domain models.
//!
//! Provides the data types consumed and produced by the hall selector and
//! the duty allocator.
//!
//! # Domain Mappings
//!
//! | u-invigilate | Examination office |
//! |--------------|--------------------|
//! | Hall | Venue / exam room |
//! | Staff | Invigilator |
//! | Session | Date × FN/AN slot |
//! | ConfirmedSession | Session with its halls locked in |
//! | Timetable | Invigilation chart |

mod hall;
mod session;
mod staff;
mod timetable;

pub use hall::{total_capacity, Hall, HallId};
pub use session::{ConfirmedSession, Session, SessionCatalog, SessionKey, Slot};
pub use staff::{roster, Staff, StaffId};
pub use timetable::{Cell, DutyAssignment, Timetable, TimetableRow, EMPTY_MARKER};
