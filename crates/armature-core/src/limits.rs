//! Shared joint-limit store with set-once commit semantics.
//!
//! Holds the margin-adjusted motion bounds derived from the robot
//! description: one `(min, max)` band per joint for each of the three
//! limit categories (position, velocity, effort). Each category is
//! committed exactly once per store lifetime; a failed derivation rolls
//! the category back so a retry with a corrected description is possible.
//!
//! Callers hold a single owned instance and pass it explicitly; the
//! borrow checker enforces exclusive access during derivation.

use std::fmt;

// ---------------------------------------------------------------------------
// Margin constants
// ---------------------------------------------------------------------------

/// Half-width of the velocity operating band around the nominal magnitude
/// (rad/s or m/s). Leaves headroom for controller overshoot.
pub const VELOCITY_MARGIN: f64 = 0.50;

/// Half-width of the effort operating band around the nominal magnitude
/// (Nm or N).
pub const EFFORT_MARGIN: f64 = 0.10;

// ---------------------------------------------------------------------------
// LimitCategory
// ---------------------------------------------------------------------------

/// The three independently committed limit categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitCategory {
    /// Asymmetric position bounds, copied verbatim from the description.
    Position,
    /// Velocity band, symmetrized around the nominal magnitude.
    Velocity,
    /// Effort band, symmetrized around the nominal magnitude.
    Effort,
}

impl LimitCategory {
    /// All categories, in derivation order.
    pub const ALL: [Self; 3] = [Self::Position, Self::Velocity, Self::Effort];

    /// Lower-case category name for log messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Velocity => "velocity",
            Self::Effort => "effort",
        }
    }
}

impl fmt::Display for LimitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// LimitStatus
// ---------------------------------------------------------------------------

/// Commit status of one limit category.
///
/// `Unset → Computing → Committed`; `Committed` is terminal. A failed
/// derivation transitions `Computing → Unset`, never `Computing →
/// Committed`, so partial results are never visible as complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LimitStatus {
    /// No bounds derived yet.
    #[default]
    Unset,
    /// A derivation pass is in progress.
    Computing,
    /// Bounds are derived and immutable for the store lifetime.
    Committed,
}

// ---------------------------------------------------------------------------
// LimitBand
// ---------------------------------------------------------------------------

/// Per-joint `(min, max)` bounds for one category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitBand {
    /// Lower bound per joint, indexed by configured joint order.
    pub min: Vec<f64>,
    /// Upper bound per joint, indexed by configured joint order.
    pub max: Vec<f64>,
}

impl LimitBand {
    /// `(min, max)` for joint `i`, or `None` when out of range or unset.
    pub fn get(&self, i: usize) -> Option<(f64, f64)> {
        Some((*self.min.get(i)?, *self.max.get(i)?))
    }
}

// ---------------------------------------------------------------------------
// JointLimitSet
// ---------------------------------------------------------------------------

/// Owned store of derived joint limit bounds, one band per category.
#[derive(Debug, Clone, Default)]
pub struct JointLimitSet {
    position: LimitBand,
    velocity: LimitBand,
    effort: LimitBand,
    position_status: LimitStatus,
    velocity_status: LimitStatus,
    effort_status: LimitStatus,
}

impl JointLimitSet {
    /// Create an empty store; all categories start `Unset`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit status of `category`.
    pub const fn status(&self, category: LimitCategory) -> LimitStatus {
        match category {
            LimitCategory::Position => self.position_status,
            LimitCategory::Velocity => self.velocity_status,
            LimitCategory::Effort => self.effort_status,
        }
    }

    /// Derived bounds for `category`. Empty until committed.
    pub fn band(&self, category: LimitCategory) -> &LimitBand {
        match category {
            LimitCategory::Position => &self.position,
            LimitCategory::Velocity => &self.velocity,
            LimitCategory::Effort => &self.effort,
        }
    }

    /// Start a derivation pass for `category`.
    ///
    /// Transitions `Unset → Computing` and returns `true`. Returns `false`
    /// without any state change when the category is already `Committed`
    /// (the set-once invariant) or a pass is already in flight.
    pub fn begin(&mut self, category: LimitCategory) -> bool {
        let status = self.status_mut(category);
        if *status == LimitStatus::Unset {
            *status = LimitStatus::Computing;
            true
        } else {
            false
        }
    }

    /// Commit fully derived bounds for `category`.
    ///
    /// Only applies from the `Computing` state; returns `false` (and
    /// leaves the store untouched) otherwise, so committed bounds can
    /// never be overwritten.
    pub fn commit(&mut self, category: LimitCategory, min: Vec<f64>, max: Vec<f64>) -> bool {
        if self.status(category) != LimitStatus::Computing {
            return false;
        }
        *self.band_mut(category) = LimitBand { min, max };
        *self.status_mut(category) = LimitStatus::Committed;
        true
    }

    /// Abort an in-flight derivation pass, returning `category` to `Unset`.
    ///
    /// No-op unless the category is `Computing`; a committed category
    /// stays committed.
    pub fn rollback(&mut self, category: LimitCategory) {
        let status = self.status_mut(category);
        if *status == LimitStatus::Computing {
            *status = LimitStatus::Unset;
        }
    }

    fn status_mut(&mut self, category: LimitCategory) -> &mut LimitStatus {
        match category {
            LimitCategory::Position => &mut self.position_status,
            LimitCategory::Velocity => &mut self.velocity_status,
            LimitCategory::Effort => &mut self.effort_status,
        }
    }

    fn band_mut(&mut self, category: LimitCategory) -> &mut LimitBand {
        match category {
            LimitCategory::Position => &mut self.position,
            LimitCategory::Velocity => &mut self.velocity,
            LimitCategory::Effort => &mut self.effort,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
