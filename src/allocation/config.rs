//! Allocation configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::EMPTY_MARKER;

/// Upper bound on duties per staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyCeiling {
    /// No limit; pure least-loaded assignment.
    #[default]
    Unbounded,
    /// At most this many duties per staff member.
    AtMost(u32),
}

impl DutyCeiling {
    /// Whether a staff member holding `duties` may take another.
    #[inline]
    pub fn admits(self, duties: u32) -> bool {
        match self {
            DutyCeiling::Unbounded => true,
            DutyCeiling::AtMost(max) => duties < max,
        }
    }

    /// Total duties a roster of `staff` can absorb, if bounded.
    pub fn total_for(self, staff: usize) -> Option<u64> {
        match self {
            DutyCeiling::Unbounded => None,
            DutyCeiling::AtMost(max) => Some(u64::from(max) * staff as u64),
        }
    }
}

/// Settings for one allocation run.
///
/// # Example
///
/// ```
/// use u_invigilate::allocation::{AllocationConfig, DutyCeiling};
///
/// let config = AllocationConfig::default()
///     .with_ceiling(DutyCeiling::AtMost(3))
///     .with_seed(7);
/// assert_eq!(config.empty_marker, "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Per-staff duty ceiling.
    pub ceiling: DutyCeiling,
    /// Seed for the tie-break generator; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Text for cells with no duty.
    pub empty_marker: String,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            ceiling: DutyCeiling::Unbounded,
            seed: None,
            empty_marker: EMPTY_MARKER.to_string(),
        }
    }
}

impl AllocationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duty ceiling.
    pub fn with_ceiling(mut self, ceiling: DutyCeiling) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Fixes the tie-break seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the empty-cell marker.
    pub fn with_empty_marker(mut self, marker: impl Into<String>) -> Self {
        self.empty_marker = marker.into();
        self
    }

    /// Decodes a configuration from JSON; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_admits() {
        assert!(DutyCeiling::Unbounded.admits(u32::MAX));
        assert!(DutyCeiling::AtMost(3).admits(2));
        assert!(!DutyCeiling::AtMost(3).admits(3));
        assert!(!DutyCeiling::AtMost(0).admits(0));
    }

    #[test]
    fn test_ceiling_total() {
        assert_eq!(DutyCeiling::Unbounded.total_for(10), None);
        assert_eq!(DutyCeiling::AtMost(3).total_for(4), Some(12));
    }

    #[test]
    fn test_config_defaults() {
        let c = AllocationConfig::new();
        assert_eq!(c.ceiling, DutyCeiling::Unbounded);
        assert_eq!(c.seed, None);
        assert_eq!(c.empty_marker, "-");
    }

    #[test]
    fn test_config_from_json() {
        let c = AllocationConfig::from_json(r#"{"ceiling":{"at_most":3},"seed":42}"#).unwrap();
        assert_eq!(c.ceiling, DutyCeiling::AtMost(3));
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.empty_marker, "-");

        let c = AllocationConfig::from_json(r#"{"ceiling":"unbounded","empty_marker":"--"}"#)
            .unwrap();
        assert_eq!(c.ceiling, DutyCeiling::Unbounded);
        assert_eq!(c.empty_marker, "--");
    }

    #[test]
    fn test_config_from_bad_json() {
        assert!(AllocationConfig::from_json("{not json").is_err());
    }
}
