// Copyright 2025 serein contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Kalman filtering for 3D vectors, one independent filter per axis.

use super::KalmanFilter;
use crate::math::Vec3;

/// Applies Kalman filtering independently to each component of a [`Vec3`].
///
/// The three owned scalar filters never share information: axis
/// independence is a deliberate design choice, not an optimization. A
/// full 3x3-covariance filter would evolve differently on correlated
/// input; this type intentionally does not.
#[derive(Debug, Clone, Copy)]
pub struct VectorKalmanFilter {
    /// Kalman filter for the X component of the vector.
    x: KalmanFilter,
    /// Kalman filter for the Y component of the vector.
    y: KalmanFilter,
    /// Kalman filter for the Z component of the vector.
    z: KalmanFilter,
}

impl VectorKalmanFilter {
    /// Creates a vector filter whose three axes share the same
    /// `(process_noise, sensor_noise, error_covariance)` tuning.
    pub fn new(process_noise: f32, sensor_noise: f32, error_covariance: f32) -> Self {
        Self {
            x: KalmanFilter::new(process_noise, sensor_noise, error_covariance),
            y: KalmanFilter::new(process_noise, sensor_noise, error_covariance),
            z: KalmanFilter::new(process_noise, sensor_noise, error_covariance),
        }
    }

    /// Filters each component of `input` through its own scalar filter
    /// and recomposes the result.
    pub fn filter(&mut self, input: Vec3) -> Vec3 {
        Vec3::new(
            self.x.filter(input.x),
            self.y.filter(input.y),
            self.z.filter(input.z),
        )
    }

    /// Resets every axis to its matching component of `estimation`, all
    /// sharing the single `error_covariance` value.
    pub fn reset(&mut self, estimation: Vec3, error_covariance: f32) {
        self.x.reset(estimation.x, error_covariance);
        self.y.reset(estimation.y, error_covariance);
        self.z.reset(estimation.z, error_covariance);
    }

    /// Returns the current per-axis estimate as a vector.
    #[inline]
    pub fn estimation(&self) -> Vec3 {
        Vec3::new(
            self.x.estimation(),
            self.y.estimation(),
            self.z.estimation(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_moves_each_axis_toward_input() {
        let mut filter = VectorKalmanFilter::new(0.01, 0.1, 1.0);
        let measurement = Vec3::new(10.0, 20.0, 30.0);

        let result = filter.filter(measurement);
        assert!(result.x > 0.0 && result.x < measurement.x);
        assert!(result.y > 0.0 && result.y < measurement.y);
        assert!(result.z > 0.0 && result.z < measurement.z);

        let result2 = filter.filter(measurement);
        assert!(result2.x > result.x);
        assert!(result2.y > result.y);
        assert!(result2.z > result.z);
    }

    #[test]
    fn test_axis_independence() {
        // Filtering a vector must match filtering its components through
        // three freshly-constructed scalar filters, bit for bit.
        let mut vector_filter = VectorKalmanFilter::new(0.01, 0.1, 1.0);
        let mut scalar_x = KalmanFilter::new(0.01, 0.1, 1.0);
        let mut scalar_y = KalmanFilter::new(0.01, 0.1, 1.0);
        let mut scalar_z = KalmanFilter::new(0.01, 0.1, 1.0);

        let inputs = [
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(4.0, 5.0, -6.0),
            Vec3::new(-7.0, 8.0, 9.0),
        ];
        for input in inputs {
            let vector_result = vector_filter.filter(input);
            assert_eq!(vector_result.x, scalar_x.filter(input.x));
            assert_eq!(vector_result.y, scalar_y.filter(input.y));
            assert_eq!(vector_result.z, scalar_z.filter(input.z));
        }
    }

    #[test]
    fn test_reset_broadcasts_per_component() {
        let mut filter = VectorKalmanFilter::new(0.01, 0.1, 1.0);
        filter.filter(Vec3::new(10.0, 15.0, 20.0));
        filter.filter(Vec3::new(10.0, 15.0, 20.0));

        let new_estimation = Vec3::new(5.0, 7.0, 9.0);
        filter.reset(new_estimation, 0.5);
        assert_eq!(filter.estimation(), new_estimation);

        // The next sample is blended from the reset estimate, not the
        // discarded history.
        let result = filter.filter(Vec3::new(0.1, 0.1, 0.1));
        assert!((result.x - new_estimation.x).abs() < (result.x - 10.0).abs());
    }

    #[test]
    fn test_tracks_negative_input() {
        let mut filter = VectorKalmanFilter::new(0.01, 0.1, 1.0);
        let input = Vec3::new(-10.0, -20.0, -30.0);
        let first = filter.filter(input);
        let second = filter.filter(input);
        assert!(second.x < first.x);
        assert!(second.y < first.y);
        assert!(second.z < first.z);
    }
}
