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

//! Kalman-style smoothing for quaternion rotation streams.

use std::collections::VecDeque;

use crate::math::Quaternion;

/// Default blend gain toward the newest sample.
const DEFAULT_GAIN: f32 = 0.25;
/// Default number of rotations remembered.
const DEFAULT_MEMORY: usize = 25;

/// Smooths a stream of rotations against a bounded history.
///
/// This is the running-average pattern lifted onto rotations rather
/// than a correlated-covariance filter: the filter keeps the most
/// recent `memory` quaternions, forms their normalized component-wise
/// mean, and spherically interpolates from the newest sample toward
/// that mean by `1 - gain`. A gain of 1 trusts each new sample
/// entirely; a gain of 0 trusts the history mean.
#[derive(Debug, Clone)]
pub struct QuaternionKalmanFilter {
    /// Blend weight toward the newest sample.
    gain: f32,
    /// Maximum number of rotations remembered.
    capacity: usize,
    /// Retained rotations, oldest first.
    history: VecDeque<Quaternion>,
}

impl QuaternionKalmanFilter {
    /// Creates a filter blending with `gain` over the last `memory`
    /// rotations (clamped to a minimum of 1).
    pub fn new(gain: f32, memory: usize) -> Self {
        let capacity = memory.max(1);
        Self {
            gain,
            capacity,
            history: VecDeque::with_capacity(capacity),
        }
    }

    /// Incorporates `input` and returns the smoothed rotation.
    pub fn filter(&mut self, input: Quaternion) -> Quaternion {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(input);

        let sum = self
            .history
            .iter()
            .fold(Quaternion::new(0.0, 0.0, 0.0, 0.0), |acc, &q| acc + q);
        let mean = (sum * (1.0 / self.history.len() as f32)).normalize();

        Quaternion::slerp(input, mean, 1.0 - self.gain)
    }

    /// Discards the retained rotation history.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Returns the configured memory depth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retrieves the current gain factor.
    #[inline]
    pub fn gain(&self) -> f32 {
        self.gain
    }
}

impl Default for QuaternionKalmanFilter {
    /// Gain 0.25 over a 25-rotation history.
    fn default() -> Self {
        Self::new(DEFAULT_GAIN, DEFAULT_MEMORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec3, FRAC_PI_2};

    fn finite(q: Quaternion) -> bool {
        q.x.is_finite() && q.y.is_finite() && q.z.is_finite() && q.w.is_finite()
    }

    #[test]
    fn test_identity_passes_through() {
        let mut filter = QuaternionKalmanFilter::new(0.3, 5);
        let result = filter.filter(Quaternion::IDENTITY);

        assert!((result.w - 1.0).abs() < 0.1);
        assert!(result.x.abs() < 0.1);
        assert!(result.y.abs() < 0.1);
        assert!(result.z.abs() < 0.1);

        let result2 = filter.filter(Quaternion::IDENTITY);
        assert!((result2.w - 1.0).abs() < 0.1);
    }

    #[test]
    fn test_smooths_toward_history() {
        let mut filter = QuaternionKalmanFilter::new(0.1, 10);
        for _ in 0..10 {
            filter.filter(Quaternion::IDENTITY);
        }

        let turned = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), FRAC_PI_2);
        let result = filter.filter(turned);

        // Low gain: the output stays much closer to the accumulated
        // identity history than to the new sample.
        assert!(result.dot(Quaternion::IDENTITY).abs() > result.dot(turned).abs());
    }

    #[test]
    fn test_high_gain_tracks_new_sample() {
        let mut filter = QuaternionKalmanFilter::new(0.99, 2);
        for _ in 0..2 {
            filter.filter(Quaternion::IDENTITY);
        }

        let turned = Quaternion::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), FRAC_PI_2);
        let result = filter.filter(turned);
        assert!(result.dot(turned).abs() > 0.95);
    }

    #[test]
    fn test_zero_quaternion_stays_finite() {
        let mut filter = QuaternionKalmanFilter::new(0.3, 5);
        let result = filter.filter(Quaternion::new(0.0, 0.0, 0.0, 0.0));
        assert!(finite(result));
    }

    #[test]
    fn test_output_is_unit_for_unit_input() {
        let mut filter = QuaternionKalmanFilter::new(0.5, 8);
        for i in 0..12 {
            let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), 0.05 * i as f32);
            let result = filter.filter(q);
            assert!((result.magnitude() - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_reset_forgets_history() {
        let mut filter = QuaternionKalmanFilter::new(0.5, 5);
        let turned = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), FRAC_PI_2);
        for _ in 0..5 {
            filter.filter(turned);
        }
        filter.reset();

        let mut fresh = QuaternionKalmanFilter::new(0.5, 5);
        let reset_result = filter.filter(Quaternion::IDENTITY);
        let fresh_result = fresh.filter(Quaternion::IDENTITY);
        assert!((reset_result.dot(fresh_result).abs() - 1.0).abs() < 1e-5);
    }
}
