use std::ops::Sub;
use std::time::Instant;

use num_traits::Zero;

use crate::profile::WaterProfile;
use crate::skyline::{prefix_maxima, smaller, suffix_maxima, Skyline};

/// Computes the water held by a skyline using prefix and suffix maxima.
pub struct TrappedWaterCalculator<'a, T> {
    elevations: &'a [T],
}

impl<'a, T> TrappedWaterCalculator<'a, T>
where
    T: Copy + PartialOrd + Zero + Sub<Output = T>,
{
    pub fn new(skyline: &'a Skyline<T>) -> Self {
        TrappedWaterCalculator {
            elevations: skyline.as_slice(),
        }
    }

    pub fn from_slice(elevations: &'a [T]) -> Self {
        TrappedWaterCalculator { elevations }
    }

    /// Runs in linear time with two auxiliary maxima buffers.
    ///
    /// The water above column `i` is `min(left_max[i], right_max[i]) - elevation[i]`,
    /// floored at zero, and the total is the left-to-right sum of those heights.
    pub fn calculate(&self) -> WaterProfile<T> {
        if self.elevations.is_empty() {
            return WaterProfile::empty();
        }

        let start_time = Instant::now();
        let left_max = prefix_maxima(self.elevations);
        let right_max = suffix_maxima(self.elevations);

        let water_at: Vec<T> = self
            .elevations
            .iter()
            .zip(left_max.iter().zip(&right_max))
            .map(|(&elevation, (&left, &right))| self.water_above(elevation, left, right))
            .collect();

        let profile = WaterProfile::from_water_at(water_at);
        log::debug!(
            "Computed water for {} columns ({} wet) in {:.2?}",
            self.elevations.len(),
            profile.wet_positions(),
            start_time.elapsed()
        );
        profile
    }

    fn water_above(&self, elevation: T, left_max: T, right_max: T) -> T {
        let ceiling = smaller(left_max, right_max);
        if ceiling > elevation {
            ceiling - elevation
        } else {
            T::zero()
        }
    }
}

/// Total trapped volume and per-position water for `elevations`.
///
/// Empty input yields a zero total and an empty profile.
pub fn compute_trapped_water<T>(elevations: &[T]) -> WaterProfile<T>
where
    T: Copy + PartialOrd + Zero + Sub<Output = T>,
{
    TrappedWaterCalculator::from_slice(elevations).calculate()
}
