//! Slot allocator configuration
//!
//! Initial capacity, growth policy and release validation for a pool.

/// Capacity used when none is specified
pub const DEFAULT_CAPACITY: usize = 256;

// ===== GROWTH POLICY =====

/// How much capacity is added when the free list runs out
///
/// Every policy adds at least one slot, so capacity strictly increases
/// even from a capacity of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// `old + max(1, old / 2)` (1.5x)
    #[default]
    Half,
    /// `old + max(1, old)` (2x)
    Double,
    /// `old + max(1, step)`
    Linear(usize),
}

impl GrowthPolicy {
    /// Capacity after one growth step from `old`
    ///
    /// Saturates at `usize::MAX - 1` so the free-list sentinel stays
    /// outside the index range.
    pub fn next_capacity(&self, old: usize) -> usize {
        let increment = match *self {
            GrowthPolicy::Half => old / 2,
            GrowthPolicy::Double => old,
            GrowthPolicy::Linear(step) => step,
        }
        .max(1);
        old.saturating_add(increment).min(usize::MAX - 1)
    }
}

// ===== RELEASE CHECK =====

/// Validation performed by `SlotAllocator::release`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseCheck {
    /// Range check plus the global "nothing to release" check.
    ///
    /// Releasing a slot that is not occupied is not detected and corrupts
    /// the free list.
    #[default]
    CountOnly,
    /// Additionally track a per-slot occupied flag and reject releasing a
    /// free slot with `Error::InvalidState`.
    Occupancy,
}

// ===== CONFIG =====

/// Slot allocator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAllocatorConfig {
    /// Number of slots allocated up front (must be at least 1)
    pub initial_capacity: usize,
    /// Growth applied when acquiring from an exhausted pool
    pub growth: GrowthPolicy,
    /// Validation performed on release
    pub release_check: ReleaseCheck,
    /// Pool name, appended to the log source
    pub label: String,
}

impl Default for SlotAllocatorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth: GrowthPolicy::default(),
            release_check: ReleaseCheck::default(),
            label: "SlotAllocator".to_string(),
        }
    }
}

impl SlotAllocatorConfig {
    /// Default configuration with the given initial capacity
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
