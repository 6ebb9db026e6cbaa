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

// Serein sandbox
// Drives every filter over a synthetic noisy signal and logs the results.

use anyhow::Result;
use serde::Deserialize;

use serein_core::math::{Quaternion, Vec3, TAU};
use serein_core::signal::filter::{
    DerivativeFilter, KalmanFilter, PeakDetection, QuaternionKalmanFilter, RampFilter,
    RunningAverageFilter, VectorKalmanFilter, VectorRunningAverageFilter,
};

/// Filter tuning for a sandbox run, optionally loaded from a JSON file
/// passed as the first CLI argument.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct Tuning {
    /// Kalman process noise (Q).
    process_noise: f32,
    /// Kalman sensor noise (R).
    sensor_noise: f32,
    /// Initial Kalman error covariance (P0).
    error_covariance: f32,
    /// Running-average window depth.
    memory: usize,
    /// Running-average blend gain.
    gain: f32,
    /// Number of simulated update ticks.
    ticks: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            process_noise: 0.01,
            sensor_noise: 0.1,
            error_covariance: 1.0,
            memory: 8,
            gain: 0.2,
            ticks: 128,
        }
    }
}

fn load_tuning() -> Result<Tuning> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            let tuning = serde_json::from_str(&text)?;
            log::info!("Loaded tuning from {path}: {tuning:?}");
            Ok(tuning)
        }
        None => Ok(Tuning::default()),
    }
}

/// Deterministic measurement noise: an alternating offset is enough to
/// exercise the filters without pulling in a random number generator.
fn noise(tick: usize) -> f32 {
    if tick % 2 == 0 {
        0.35
    } else {
        -0.35
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let tuning = load_tuning()?;
    let ticks = tuning.ticks.max(16);
    log::info!("Sandbox: driving filters for {ticks} ticks");

    let mut scalar_kalman = KalmanFilter::new(
        tuning.process_noise,
        tuning.sensor_noise,
        tuning.error_covariance,
    );
    let mut vector_kalman = VectorKalmanFilter::new(
        tuning.process_noise,
        tuning.sensor_noise,
        tuning.error_covariance,
    );
    let mut smoother = RunningAverageFilter::new(tuning.memory, tuning.gain);
    let mut vector_smoother = VectorRunningAverageFilter::new(tuning.memory, tuning.gain);
    let mut rotation_filter = QuaternionKalmanFilter::default();
    let mut ramp = RampFilter::new(ticks / 4, 0.001);
    let mut derivative = DerivativeFilter::new();

    let mut samples = Vec::with_capacity(ticks);

    for tick in 0..ticks {
        let phase = tick as f32 / ticks as f32;

        // One slow sine per run, plus deterministic measurement noise.
        let true_value = 5.0 * (phase * TAU).sin();
        let measured = true_value + noise(tick);
        samples.push(measured);

        let estimated = scalar_kalman.filter(measured);
        let smoothed = smoother.filter(measured);

        let true_position = Vec3::new(true_value, -true_value, 0.5 * true_value);
        let measured_position = true_position + Vec3::splat(noise(tick));
        let estimated_position = vector_kalman.filter(measured_position);
        let smoothed_position = vector_smoother.filter(measured_position);

        let wobble = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.2 * (phase * TAU).sin());
        let steadied = rotation_filter.filter(wobble);

        let fade = ramp.filter(1.0);
        let activity = derivative.filter(measured);

        if tick % 16 == 0 {
            log::info!(
                "tick {tick:3}: raw {measured:7.3} | kalman {estimated:7.3} | average {smoothed:7.3} | fade {fade:5.3} | activity {activity:5.3}"
            );
            log::debug!(
                "tick {tick:3}: position raw {measured_position:?} kalman {estimated_position:?} average {smoothed_position:?} rotation {steadied:?}"
            );
        }
    }

    // Batch pass: find the outliers the streaming filters just smoothed over.
    samples[ticks / 2] += 12.0;
    let mut detector = PeakDetection::new(ticks, 5, 2.0, 0.5);
    let peaks = detector.calculate(&samples);
    let peak_count = peaks.iter().filter(|&&peak| peak).count();
    log::info!(
        "Peak detection flagged {peak_count} of {} samples",
        peaks.len()
    );

    // The sine completes a full cycle, so the true signal ends at zero.
    let final_error = scalar_kalman.estimation().abs();
    let final_position_error = vector_kalman.estimation().length();
    log::info!(
        "Final estimates: scalar error {final_error:.3}, position error {final_position_error:.3}"
    );

    Ok(())
}
