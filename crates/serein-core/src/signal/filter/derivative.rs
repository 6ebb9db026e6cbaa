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

//! Estimates the rate of change of a signal, filtered for stability.

use super::{MinFilter, RunningAverageFilter};
use crate::math::saturate;

/// How many samples the smoothing stage remembers.
const SMOOTHING_MEMORY: usize = 10;
/// Blend gain of the smoothing stage.
const SMOOTHING_GAIN: f32 = 0.2;
/// How many samples the baseline stage remembers.
const BASELINE_MEMORY: usize = 40;

/// Measures how quickly a signal is changing, normalized to `[0, 1]`.
///
/// Each call takes the absolute difference against the previous sample,
/// smooths it through an owned [`RunningAverageFilter`], and subtracts a
/// rolling minimum baseline (an owned [`MinFilter`]) so that slow
/// ambient drift reads as zero and genuine activity stands out.
#[derive(Debug, Clone)]
pub struct DerivativeFilter {
    /// Smooths the raw derivative magnitude.
    output: RunningAverageFilter,
    /// Tracks the baseline magnitude for normalization.
    min_filter: MinFilter,
    /// Previous input value, for the finite difference.
    previous_reading: f32,
    /// Most recent filtered derivative value.
    output_value: f32,
}

impl DerivativeFilter {
    /// Creates a derivative filter with the default smoothing and
    /// baseline configuration.
    pub fn new() -> Self {
        Self {
            output: RunningAverageFilter::new(SMOOTHING_MEMORY, SMOOTHING_GAIN),
            min_filter: MinFilter::new(BASELINE_MEMORY, true),
            previous_reading: 0.0,
            output_value: 0.0,
        }
    }

    /// Incorporates `value` and returns the filtered, baseline-corrected
    /// derivative magnitude.
    pub fn filter(&mut self, value: f32) -> f32 {
        let amplitude = (value - self.previous_reading).abs();
        let smoothed = self.output.filter(amplitude);
        let baseline = self.min_filter.filter(smoothed);

        self.output_value = saturate(smoothed - baseline);
        self.previous_reading = value;
        self.output_value
    }

    /// Retrieves the most recent filtered derivative without feeding a
    /// new sample.
    #[inline]
    pub fn output(&self) -> f32 {
        self.output_value
    }
}

impl Default for DerivativeFilter {
    fn default() -> Self {
        Self::new()
    }
}
