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

//! Running-average smoothing for 3D vectors, one independent filter per axis.

use super::RunningAverageFilter;
use crate::math::Vec3;

/// Applies running-average filtering independently to each component of
/// a [`Vec3`].
///
/// Mirrors the composition of
/// [`VectorKalmanFilter`](super::VectorKalmanFilter): three exclusively
/// owned scalar filters sharing the same capacity and gain, with no
/// cross-axis coupling.
#[derive(Debug, Clone)]
pub struct VectorRunningAverageFilter {
    /// Running average filter for the X component of the vector.
    x: RunningAverageFilter,
    /// Running average filter for the Y component of the vector.
    y: RunningAverageFilter,
    /// Running average filter for the Z component of the vector.
    z: RunningAverageFilter,
    /// Memory depth configured for each component filter.
    capacity: usize,
}

impl VectorRunningAverageFilter {
    /// Creates a vector filter remembering up to `memory` samples per
    /// axis (clamped to a minimum of 1) with the given blending `gain`.
    pub fn new(memory: usize, gain: f32) -> Self {
        let x = RunningAverageFilter::new(memory, gain);
        let capacity = x.capacity();
        Self {
            x,
            y: RunningAverageFilter::new(memory, gain),
            z: RunningAverageFilter::new(memory, gain),
            capacity,
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

    /// Adjusts the gain on all component filters simultaneously.
    pub fn set_gain(&mut self, gain: f32) {
        self.x.set_gain(gain);
        self.y.set_gain(gain);
        self.z.set_gain(gain);
    }

    /// Clears accumulated samples across all component filters.
    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
        self.z.reset();
    }

    /// Returns the configured memory depth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
