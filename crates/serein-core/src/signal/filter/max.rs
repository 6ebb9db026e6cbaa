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

//! A moving maximum filter over a sliding sample window.

use std::collections::VecDeque;

use super::min::DEFAULT_EXTREMA_MEMORY;

/// Tracks the maximum value over a bounded window of recent samples.
///
/// The mirror of [`MinFilter`](super::MinFilter), typically used for
/// peak envelopes.
#[derive(Debug, Clone)]
pub struct MaxFilter {
    /// Size of the sliding window.
    capacity: usize,
    /// Retained samples, oldest first.
    window: VecDeque<f32>,
}

impl MaxFilter {
    /// Creates a filter with the specified window depth, clamped to a
    /// minimum of 1.
    pub fn new(memory: usize) -> Self {
        let capacity = memory.max(1);
        Self {
            capacity,
            window: VecDeque::with_capacity(capacity),
        }
    }

    /// Incorporates `value` and returns the maximum within the window.
    pub fn filter(&mut self, value: f32) -> f32 {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(value);

        self.window
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max)
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

impl Default for MaxFilter {
    /// A 40-sample window.
    fn default() -> Self {
        Self::new(DEFAULT_EXTREMA_MEMORY)
    }
}
