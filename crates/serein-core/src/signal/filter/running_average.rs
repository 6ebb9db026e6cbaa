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

//! A bounded-memory running average filter for smoothing data.

use std::collections::VecDeque;

/// Smooths a sample stream by blending each new value against the mean
/// of a bounded window of recent history.
///
/// `gain` controls immediacy: the output is
/// `gain * value + (1 - gain) * mean(history)`, where the mean covers
/// the samples retained *before* the new value is recorded (zero for a
/// fresh or freshly-reset filter). `capacity` controls stability: at
/// most `capacity` samples are remembered, the oldest evicted first.
///
/// With `capacity == 1` the filter degenerates to exponential blending
/// against the single previous sample. The capacity is clamped to at
/// least 1 at construction, so a zero-length window cannot occur.
#[derive(Debug, Clone)]
pub struct RunningAverageFilter {
    /// The gain factor, controlling smoothing intensity.
    gain: f32,
    /// The most recent samples, oldest first.
    window: VecDeque<f32>,
    /// Maximum number of samples remembered by the filter.
    capacity: usize,
    /// Cached sum of the values currently in the window.
    running_sum: f32,
}

impl RunningAverageFilter {
    /// Creates a filter remembering up to `memory` samples (clamped to a
    /// minimum of 1) with the given blending `gain`.
    pub fn new(memory: usize, gain: f32) -> Self {
        let capacity = memory.max(1);
        Self {
            gain,
            window: VecDeque::with_capacity(capacity),
            capacity,
            running_sum: 0.0,
        }
    }

    /// Incorporates `value` and returns the smoothed output.
    pub fn filter(&mut self, value: f32) -> f32 {
        let history_mean = if self.window.is_empty() {
            0.0
        } else {
            self.running_sum / self.window.len() as f32
        };
        let output = self.gain * value + (1.0 - self.gain) * history_mean;

        if self.window.len() == self.capacity {
            if let Some(oldest) = self.window.pop_front() {
                self.running_sum -= oldest;
            }
        }
        self.window.push_back(value);
        self.running_sum += value;

        output
    }

    /// Changes the blend weight applied to future calls.
    ///
    /// The accumulated history is left untouched.
    #[inline]
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    /// Discards all retained history; the next call starts from an empty
    /// baseline, exactly like a freshly-constructed filter.
    pub fn reset(&mut self) {
        self.window.clear();
        self.running_sum = 0.0;
    }

    /// Returns the configured memory depth of the filter.
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
