//! DamageRange - Minimum, maximum and average damage of a hit

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Damage spread of a single hit
///
/// Always ordered `min <= avg <= max`; deserialized ranges are reordered
/// through [`DamageRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RangeBounds")]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
    pub avg: u32,
}

#[derive(Deserialize)]
struct RangeBounds {
    min: u32,
    max: u32,
    avg: u32,
}

impl From<RangeBounds> for DamageRange {
    fn from(bounds: RangeBounds) -> Self {
        DamageRange::new(bounds.min, bounds.avg, bounds.max)
    }
}

impl DamageRange {
    /// Build a range, lifting `avg` and `max` so the ordering holds
    pub fn new(min: u32, avg: u32, max: u32) -> Self {
        let avg = avg.max(min);
        let max = max.max(avg);
        DamageRange { min, max, avg }
    }

    /// Attack could not get through defense at all
    pub fn no_damage() -> Self {
        DamageRange {
            min: 1,
            max: 1,
            avg: 1,
        }
    }

    /// Apply a multiplier to each bound, rounding each one
    pub fn scaled(&self, multiplier: f64) -> Self {
        DamageRange::new(
            round_damage(self.min as f64 * multiplier),
            round_damage(self.avg as f64 * multiplier),
            round_damage(self.max as f64 * multiplier),
        )
    }

    /// Map each bound through `f`, keeping the ordering invariant
    pub fn map(&self, mut f: impl FnMut(u32) -> u32) -> Self {
        DamageRange::new(f(self.min), f(self.avg), f(self.max))
    }

    /// Whether `damage` falls inside the range
    pub fn contains(&self, damage: u32) -> bool {
        (self.min..=self.max).contains(&damage)
    }

    pub fn spread(&self) -> u32 {
        self.max.saturating_sub(self.min)
    }

    /// Uniform draw between the bounds, whichever way they are stored
    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        let low = self.min.min(self.max);
        let high = self.min.max(self.max);
        rng.gen_range(low..=high)
    }
}

impl Default for DamageRange {
    fn default() -> Self {
        Self::no_damage()
    }
}

/// Round a damage value to the nearest non-negative integer
pub(crate) fn round_damage(value: f64) -> u32 {
    if value.is_finite() {
        value.round().max(0.0).min(u32::MAX as f64) as u32
    } else {
        0
    }
}
