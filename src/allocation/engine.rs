//! Least-loaded greedy duty allocator.
//!
//! # Algorithm
//!
//! 1. Start every eligible staff member at zero duties and every
//!    (staff, session) cell empty, for all catalog sessions.
//! 2. Walk confirmed sessions in catalog order, and each session's halls in
//!    selection order.
//! 3. For each hall, take the staff members with the smallest duty count
//!    (among those still under the ceiling), pick one via the tie-breaker,
//!    record the hall in their cell, and bump their count.
//!
//! Every assignment goes to a currently least-loaded staff member, so duty
//! counts never differ by more than one across the roster. The result is a
//! local fairness guarantee, not a minimum-variance optimum.
//!
//! A staff member already holding a hall in a session stays eligible for
//! another hall of the same session.
//!
//! # Complexity
//! O(h · s) where h = total halls across confirmed sessions, s = staff.

use tracing::{info, warn};

use super::{AllocationConfig, DutyCeiling, RandomTieBreaker, TieBreaker};
use crate::error::{InvigilationError, Result};
use crate::models::{ConfirmedSession, SessionCatalog, Staff, StaffId, Timetable};

/// Assigns one invigilator to every hall of every confirmed session.
///
/// Holds only configuration; each call starts from fresh duty counters.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_invigilate::allocation::{DutyAllocator, FirstTied};
/// use u_invigilate::models::{roster, ConfirmedSession, SessionCatalog, SessionKey, Slot};
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let catalog = SessionCatalog::from_days([(d, true, false)]);
/// let key = SessionKey::new(d, Slot::Forenoon);
/// let confirmed = vec![ConfirmedSession::new(key, vec!["A".into(), "B".into()], 40)];
/// let staff = roster(["X", "Y", "Z"]);
///
/// let timetable = DutyAllocator::new()
///     .allocate(&catalog, &confirmed, &staff, &mut FirstTied)
///     .unwrap();
/// assert_eq!(timetable.holders(key, "A"), vec!["X"]);
/// assert_eq!(timetable.holders(key, "B"), vec!["Y"]);
/// assert!(timetable.cell("Z", key).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DutyAllocator {
    config: AllocationConfig,
}

impl DutyAllocator {
    /// Creates an allocator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator from a configuration.
    pub fn with_config(config: AllocationConfig) -> Self {
        Self { config }
    }

    /// Sets the duty ceiling.
    pub fn with_ceiling(mut self, ceiling: DutyCeiling) -> Self {
        self.config.ceiling = ceiling;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Allocates using the configured seed, or the thread RNG if unseeded.
    pub fn generate(
        &self,
        catalog: &SessionCatalog,
        confirmed: &[ConfirmedSession],
        staff: &[Staff],
    ) -> Result<Timetable> {
        match self.config.seed {
            Some(seed) => {
                self.allocate(catalog, confirmed, staff, &mut RandomTieBreaker::seeded(seed))
            }
            None => self.allocate(
                catalog,
                confirmed,
                staff,
                &mut RandomTieBreaker::from_entropy(),
            ),
        }
    }

    /// Allocates duties, breaking ties with `tie_breaker`.
    ///
    /// # Errors
    /// - [`InvigilationError::NoEligibleStaff`] if `staff` is empty.
    /// - [`InvigilationError::UnknownSession`] if a confirmed session is not
    ///   in `catalog`.
    /// - [`InvigilationError::InsufficientStaff`] if the ceiling cannot
    ///   absorb every hall.
    ///
    /// No timetable is returned on error.
    pub fn allocate<T: TieBreaker + ?Sized>(
        &self,
        catalog: &SessionCatalog,
        confirmed: &[ConfirmedSession],
        staff: &[Staff],
        tie_breaker: &mut T,
    ) -> Result<Timetable> {
        if staff.is_empty() {
            return Err(InvigilationError::NoEligibleStaff);
        }
        self.check_feasibility(confirmed, staff.len())?;

        let mut timetable = Timetable::empty(staff, catalog.keys())
            .with_empty_marker(self.config.empty_marker.clone());
        let mut duties = vec![0u32; staff.len()];
        let mut tied: Vec<StaffId> = Vec::with_capacity(staff.len());

        for session in confirmed {
            let column = catalog
                .index_of(session.key)
                .ok_or(InvigilationError::UnknownSession(session.key))?;

            for hall in &session.halls {
                self.least_loaded(&duties, &mut tied);
                if tied.is_empty() {
                    return Err(self.insufficient(session, staff.len()));
                }
                let chosen = tied[tie_breaker.choose(tied.len()).min(tied.len() - 1)];
                timetable.assign(chosen, column, hall.clone());
                duties[chosen.0] += 1;
            }
        }

        info!(
            sessions = confirmed.len(),
            staff = staff.len(),
            duties = timetable.total_duties(),
            "duties allocated"
        );
        Ok(timetable)
    }

    /// Checks up front that the ceiling leaves room for every hall.
    ///
    /// Walks the confirmed sessions accumulating hall counts and names the
    /// first session at which the total exceeds `ceiling × staff_count`.
    /// Always succeeds when unbounded.
    pub fn check_feasibility(
        &self,
        confirmed: &[ConfirmedSession],
        staff_count: usize,
    ) -> Result<()> {
        let Some(capacity) = self.config.ceiling.total_for(staff_count) else {
            return Ok(());
        };
        let mut required: u64 = 0;
        for session in confirmed {
            required += session.duty_count() as u64;
            if required > capacity {
                return Err(self.insufficient(session, staff_count));
            }
        }
        Ok(())
    }

    /// Collects the staff with the smallest duty count under the ceiling.
    fn least_loaded(&self, duties: &[u32], tied: &mut Vec<StaffId>) {
        tied.clear();
        let ceiling = self.config.ceiling;
        let Some(min) = duties.iter().copied().filter(|&d| ceiling.admits(d)).min() else {
            return;
        };
        tied.extend(
            duties
                .iter()
                .enumerate()
                .filter(|&(_, &d)| d == min)
                .map(|(i, _)| StaffId(i)),
        );
    }

    fn insufficient(&self, session: &ConfirmedSession, staff: usize) -> InvigilationError {
        let ceiling = match self.config.ceiling {
            DutyCeiling::AtMost(max) => max,
            DutyCeiling::Unbounded => u32::MAX,
        };
        warn!(session = %session.key, ceiling, staff, "not enough staff under duty ceiling");
        InvigilationError::InsufficientStaff {
            session: session.key,
            ceiling,
            staff,
        }
    }
}
