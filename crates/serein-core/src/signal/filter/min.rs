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

//! A moving minimum filter over a sliding sample window.

use std::collections::VecDeque;

/// Default window depth for the extrema filters.
pub(super) const DEFAULT_EXTREMA_MEMORY: usize = 40;

/// Tracks the minimum value over a bounded window of recent samples.
///
/// Useful as a rolling baseline estimator: feed it a noisy magnitude and
/// it reports the smallest value seen over the last `capacity` samples.
/// With `ignore_same` enabled, a sample equal to the newest retained one
/// is not re-inserted, so a long run of identical readings does not
/// flush older history out of the window.
#[derive(Debug, Clone)]
pub struct MinFilter {
    /// Size of the sliding window.
    capacity: usize,
    /// Whether to skip consecutive identical values.
    ignore_same: bool,
    /// Retained samples, oldest first.
    window: VecDeque<f32>,
}

impl MinFilter {
    /// Creates a filter with the specified window depth (clamped to a
    /// minimum of 1) and duplicate-handling behavior.
    pub fn new(memory: usize, ignore_same: bool) -> Self {
        let capacity = memory.max(1);
        Self {
            capacity,
            ignore_same,
            window: VecDeque::with_capacity(capacity),
        }
    }

    /// Incorporates `value` and returns the minimum within the window.
    pub fn filter(&mut self, value: f32) -> f32 {
        let duplicate = self.ignore_same && self.window.back() == Some(&value);
        if !duplicate {
            if self.window.len() == self.capacity {
                self.window.pop_front();
            }
            self.window.push_back(value);
        }

        self.window
            .iter()
            .copied()
            .fold(f32::INFINITY, f32::min)
    }

    /// Resets the filter to an empty window.
    pub fn reset(&mut self) {
        self.window.clear();
    }

    /// Returns the configured capacity of the filter.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MinFilter {
    /// A 40-sample window that skips consecutive duplicates.
    fn default() -> Self {
        Self::new(DEFAULT_EXTREMA_MEMORY, true)
    }
}
