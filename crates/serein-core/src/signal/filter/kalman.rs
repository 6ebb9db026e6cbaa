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

//! A one-dimensional Kalman filter for smoothing noisy scalar signals.

/// Recursive estimator for a single noisy scalar value.
///
/// This is the classic scalar Kalman filter with identity dynamics: the
/// underlying true value is assumed constant between updates, with
/// `process_noise` absorbing whatever drift the model cannot see. It is
/// the right tool for smoothing one axis of a sensor reading without a
/// full matrix formulation; for 3D signals, three independent instances
/// are composed by [`VectorKalmanFilter`](super::VectorKalmanFilter).
///
/// The filter is total over the `f32` domain: degenerate tuning is
/// absorbed numerically, never rejected.
#[derive(Debug, Clone, Copy)]
pub struct KalmanFilter {
    /// Process noise variance (Q).
    process_noise: f32,
    /// Sensor noise variance (R).
    sensor_noise: f32,
    /// Current estimated value.
    estimation: f32,
    /// Error covariance of the estimation (P).
    error_covariance: f32,
}

impl KalmanFilter {
    /// Creates a filter with the given tuning.
    ///
    /// * `process_noise` - assumed per-step uncertainty growth of the
    ///   true value (Q).
    /// * `sensor_noise` - assumed measurement uncertainty of each raw
    ///   sample (R).
    /// * `error_covariance` - initial uncertainty of the estimate (P).
    ///
    /// The estimate itself starts at `0.0`.
    pub fn new(process_noise: f32, sensor_noise: f32, error_covariance: f32) -> Self {
        Self {
            process_noise,
            sensor_noise,
            estimation: 0.0,
            error_covariance,
        }
    }

    /// Incorporates one measurement and returns the updated estimate.
    ///
    /// When both covariance terms collapse toward zero the innovation
    /// covariance falls below machine epsilon; the gain is then forced to
    /// zero, meaning "trust the prior estimate entirely", instead of
    /// dividing by a vanishing denominator.
    pub fn filter(&mut self, measurement: f32) -> f32 {
        // Predict: covariance grows by the process noise.
        self.error_covariance += self.process_noise;

        // Innovation covariance: s = p + r
        let denominator = self.error_covariance + self.sensor_noise;

        // Kalman gain: k = p / s, guarded against a collapsed denominator.
        let gain = if denominator > f32::EPSILON {
            self.error_covariance / denominator
        } else {
            0.0
        };

        // Correct the estimate, then shrink its covariance.
        self.estimation += gain * (measurement - self.estimation);
        self.error_covariance *= 1.0 - gain;

        self.estimation
    }

    /// Resets the filter state to a known estimation and covariance.
    ///
    /// The noise tuning (Q, R) is left untouched.
    pub fn reset(&mut self, estimation: f32, error_covariance: f32) {
        self.estimation = estimation;
        self.error_covariance = error_covariance;
    }

    /// Returns the current estimate.
    #[inline]
    pub fn estimation(&self) -> f32 {
        self.estimation
    }

    /// Returns the process noise variance (Q).
    #[inline]
    pub fn process_noise(&self) -> f32 {
        self.process_noise
    }

    /// Returns the sensor noise variance (R).
    #[inline]
    pub fn sensor_noise(&self) -> f32 {
        self.sensor_noise
    }

    /// Returns the current error covariance (P).
    #[inline]
    pub fn error_covariance(&self) -> f32 {
        self.error_covariance
    }

    /// Replaces the process noise variance (Q).
    #[inline]
    pub fn set_process_noise(&mut self, value: f32) {
        self.process_noise = value;
    }

    /// Replaces the sensor noise variance (R).
    #[inline]
    pub fn set_sensor_noise(&mut self, value: f32) {
        self.sensor_noise = value;
    }

    /// Replaces the current error covariance (P).
    #[inline]
    pub fn set_error_covariance(&mut self, value: f32) {
        self.error_covariance = value;
    }
}
