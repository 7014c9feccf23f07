//! Duty load metrics.
//!
//! Summarises how evenly a timetable spreads invigilation duty.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total | Sum of duties over all staff |
//! | Min / Max | Smallest and largest per-staff duty count |
//! | Spread | max − min (≤ 1 for a least-loaded allocation) |
//! | Mean | Total / staff count |

use serde::Serialize;

use crate::models::Timetable;

/// Per-staff duty counts and balance figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadSummary {
    /// (staff name, duties) in roster order.
    pub duties_by_staff: Vec<(String, u32)>,
    /// Sum of all duties.
    pub total: u32,
    /// Smallest per-staff count (0 for an empty roster).
    pub min: u32,
    /// Largest per-staff count (0 for an empty roster).
    pub max: u32,
    /// Mean duties per staff member.
    pub mean: f64,
}

impl LoadSummary {
    /// Computes the summary for a timetable.
    pub fn from_timetable(timetable: &Timetable) -> Self {
        let duties_by_staff: Vec<(String, u32)> = timetable
            .rows()
            .iter()
            .map(|r| (r.staff.clone(), r.duties))
            .collect();

        let total: u32 = duties_by_staff.iter().map(|(_, d)| d).sum();
        let min = duties_by_staff.iter().map(|(_, d)| *d).min().unwrap_or(0);
        let max = duties_by_staff.iter().map(|(_, d)| *d).max().unwrap_or(0);
        let mean = if duties_by_staff.is_empty() {
            0.0
        } else {
            f64::from(total) / duties_by_staff.len() as f64
        };

        Self {
            duties_by_staff,
            total,
            min,
            max,
            mean,
        }
    }

    /// max − min.
    pub fn spread(&self) -> u32 {
        self.max - self.min
    }

    /// Whether counts differ by at most one.
    pub fn is_balanced(&self) -> bool {
        self.spread() <= 1
    }
}
