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

//! Smooth value transitions using a linear ramp.

/// Default per-call step size.
const DEFAULT_INCREMENT: f32 = 0.05;
/// Default tolerance for considering a transition complete.
const DEFAULT_EPSILON: f32 = 0.01;

/// Slews an internal value toward each target by a fixed increment.
///
/// Unlike the blending filters, the ramp moves at constant speed: each
/// call steps the internal value toward the target by at most
/// `increment`, holding once within `epsilon`. Useful for animation
/// transitions where a bounded rate of change matters more than a
/// statistically optimal estimate.
#[derive(Debug, Clone, Copy)]
pub struct RampFilter {
    /// The step size for each call of the transition.
    increment: f32,
    /// The current filtered value.
    current: f32,
    /// Tolerance for considering the transition complete.
    epsilon: f32,
}

impl RampFilter {
    /// Creates a ramp that completes a unit transition in `frames` calls
    /// (clamped to a minimum of 1), holding once within `epsilon` of the
    /// target.
    pub fn new(frames: usize, epsilon: f32) -> Self {
        Self {
            increment: 1.0 / frames.max(1) as f32,
            current: 0.0,
            epsilon,
        }
    }

    /// Steps the internal value toward `target` and returns it.
    ///
    /// The step is shortened on the final approach, so the value never
    /// overshoots the target.
    pub fn filter(&mut self, target: f32) -> f32 {
        let distance = target - self.current;
        if distance.abs() < self.epsilon {
            return self.current;
        }

        let step = self.increment.min(distance.abs());
        self.current += step.copysign(distance);
        self.current
    }

    /// Sets the increment for each transition step.
    #[inline]
    pub fn set_increment(&mut self, increment: f32) {
        self.increment = increment;
    }

    /// Sets the number of calls for a complete unit transition,
    /// recalculating the increment.
    #[inline]
    pub fn set_frames(&mut self, frames: usize) {
        self.increment = 1.0 / frames.max(1) as f32;
    }
}

impl Default for RampFilter {
    /// A ramp stepping by 0.05 per call with a 0.01 hold tolerance.
    fn default() -> Self {
        Self {
            increment: DEFAULT_INCREMENT,
            current: 0.0,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ramps_up_at_constant_rate() {
        let mut ramp = RampFilter::new(10, 0.001);
        assert_relative_eq!(ramp.filter(1.0), 0.1);
        assert_relative_eq!(ramp.filter(1.0), 0.2);
        assert_relative_eq!(ramp.filter(1.0), 0.3);
    }

    #[test]
    fn test_reaches_target_within_frames() {
        let mut ramp = RampFilter::new(10, 0.001);
        let mut last = 0.0;
        for _ in 0..11 {
            last = ramp.filter(1.0);
        }
        assert_relative_eq!(last, 1.0, epsilon = 1e-4);
        // Holds once arrived.
        assert_relative_eq!(ramp.filter(1.0), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_never_overshoots() {
        let mut ramp = RampFilter::new(3, 0.001);
        let mut previous = 0.0;
        for _ in 0..10 {
            let value = ramp.filter(0.5);
            assert!(value <= 0.5);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_ramps_down_toward_lower_target() {
        let mut ramp = RampFilter::new(4, 0.001);
        for _ in 0..8 {
            ramp.filter(1.0);
        }
        let first_down = ramp.filter(0.0);
        assert!(first_down < 1.0);
        assert_relative_eq!(first_down, 0.75);
    }

    #[test]
    fn test_holds_within_epsilon() {
        let mut ramp = RampFilter::new(10, 0.25);
        // Target is already within tolerance of the starting value.
        assert_relative_eq!(ramp.filter(0.2), 0.0);
    }

    #[test]
    fn test_set_frames_recomputes_increment() {
        let mut ramp = RampFilter::new(10, 0.001);
        ramp.set_frames(4);
        assert_relative_eq!(ramp.filter(1.0), 0.25);

        ramp.set_increment(0.5);
        assert_relative_eq!(ramp.filter(1.0), 0.75);
    }

    #[test]
    fn test_default_configuration() {
        let mut ramp = RampFilter::default();
        assert_relative_eq!(ramp.filter(1.0), 0.05);
    }
}
