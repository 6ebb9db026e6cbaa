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

//! Batch peak detection over a fixed-size sample buffer.

/// Marks samples that deviate from a lagged rolling mean by more than a
/// configured number of standard deviations.
///
/// This is the classic smoothed z-score detector: a window of `lag`
/// samples trails each candidate, providing the mean and deviation the
/// candidate is judged against. Samples marked as peaks are damped by
/// `influence` in the internal filtered trace so a single spike does
/// not poison the statistics that follow it.
///
/// Unlike the streaming filters in this module, detection runs over a
/// whole buffer at once; the internal traces are recomputed per call.
#[derive(Debug, Clone)]
pub struct PeakDetection {
    /// Number of samples examined per `calculate` call.
    sample_size: usize,
    /// Trailing window length for the rolling statistics.
    lag: usize,
    /// Peak threshold, in standard deviations.
    threshold: f32,
    /// Damping applied to marked samples in the filtered trace.
    influence: f32,
    /// Influence-damped copy of the input.
    filtered_data: Vec<f32>,
    /// Rolling mean, per index.
    averages: Vec<f32>,
    /// Rolling standard deviation, per index.
    deviations: Vec<f32>,
}

impl PeakDetection {
    /// Creates a detector for buffers of `sample_size` samples.
    ///
    /// `sample_size` and `lag` are clamped to a minimum of 1.
    pub fn new(sample_size: usize, lag: usize, threshold: f32, influence: f32) -> Self {
        let sample_size = sample_size.max(1);
        Self {
            sample_size,
            lag: lag.max(1),
            threshold,
            influence,
            filtered_data: vec![0.0; sample_size],
            averages: vec![0.0; sample_size],
            deviations: vec![0.0; sample_size],
        }
    }

    /// Zeroes the internal traces.
    pub fn reset(&mut self) {
        self.filtered_data.fill(0.0);
        self.averages.fill(0.0);
        self.deviations.fill(0.0);
    }

    /// Mean and standard deviation of `data[start..start + length]`,
    /// clamped to the examined range.
    fn window_stats(&self, data: &[f32], start: usize, length: usize) -> (f32, f32) {
        let examined = self.sample_size.min(data.len());
        if examined == 0 {
            return (0.0, 0.0);
        }

        let start = start.min(examined - 1);
        let end = (start + length).min(examined);
        let count = end - start;
        if count == 0 {
            return (0.0, 0.0);
        }

        let window = &data[start..end];
        let average = window.iter().sum::<f32>() / count as f32;
        let variance = window
            .iter()
            .map(|value| {
                let diff = value - average;
                diff * diff
            })
            .sum::<f32>()
            / count as f32;

        (average, variance.sqrt())
    }

    /// Scans `data` and returns one flag per examined sample, `true`
    /// where a peak was detected.
    ///
    /// At most `sample_size` samples are examined; a shorter buffer is
    /// processed as far as it reaches (with a warning, since the
    /// detector was sized for more). Buffers whose maximum never
    /// exceeds `threshold`, or that cannot fit the lag window, yield no
    /// peaks.
    pub fn calculate(&mut self, data: &[f32]) -> Vec<bool> {
        if data.len() < self.sample_size {
            log::warn!(
                "peak detection sized for {} samples ran on {}; truncating",
                self.sample_size,
                data.len()
            );
        }
        let examined = self.sample_size.min(data.len());
        let mut peaks = vec![false; examined];
        if examined == 0 {
            return peaks;
        }

        self.reset();

        let max_data = data[..examined].iter().copied().fold(0.0, f32::max);
        if max_data <= self.threshold || self.lag >= examined {
            return peaks;
        }

        let (average, deviation) = self.window_stats(data, 0, self.lag);
        self.averages[self.lag - 1] = average;
        self.deviations[self.lag - 1] = deviation;

        for i in self.lag..examined - self.lag {
            if (data[i] - self.averages[i - 1]).abs() > self.threshold * self.deviations[i - 1] {
                peaks[i] = data[i] > self.averages[i - 1];
                self.filtered_data[i] =
                    self.influence * data[i] + (1.0 - self.influence) * self.filtered_data[i - 1];
            } else {
                peaks[i] = false;
                self.filtered_data[i] = data[i];
            }

            let (average, deviation) = self.window_stats(data, i - self.lag + 1, self.lag);
            self.averages[i] = average;
            self.deviations[i] = deviation;
        }

        peaks
    }

    /// Returns the buffer size this detector was constructed for.
    #[inline]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_degenerate_configuration() {
        let detector = PeakDetection::new(0, 0, 2.0, 0.5);
        assert_eq!(detector.sample_size(), 1);
    }

    #[test]
    fn test_flat_signal_has_no_peaks() {
        let mut detector = PeakDetection::new(16, 3, 2.0, 0.5);
        let data = [4.0; 16];
        let peaks = detector.calculate(&data);
        assert_eq!(peaks.len(), 16);
        assert!(peaks.iter().all(|&peak| !peak));
    }

    #[test]
    fn test_quiet_signal_below_threshold_short_circuits() {
        let mut detector = PeakDetection::new(16, 3, 2.0, 0.5);
        // Varies, but never rises above the threshold.
        let data: Vec<f32> = (0..16).map(|i| if i % 2 == 0 { 0.5 } else { 1.5 }).collect();
        let peaks = detector.calculate(&data);
        assert!(peaks.iter().all(|&peak| !peak));
    }

    #[test]
    fn test_spike_is_marked() {
        let mut detector = PeakDetection::new(16, 3, 2.0, 0.5);
        let mut data = [1.0; 16];
        data[8] = 10.0;

        let peaks = detector.calculate(&data);
        assert!(peaks[8]);
        for (i, &peak) in peaks.iter().enumerate() {
            if i != 8 {
                assert!(!peak, "unexpected peak at index {i}");
            }
        }
    }

    #[test]
    fn test_short_buffer_is_truncated() {
        let mut detector = PeakDetection::new(32, 3, 2.0, 0.5);
        let data = [1.0; 10];
        let peaks = detector.calculate(&data);
        assert_eq!(peaks.len(), 10);
    }

    #[test]
    fn test_lag_wider_than_buffer_yields_no_peaks() {
        let mut detector = PeakDetection::new(8, 8, 0.1, 0.5);
        let mut data = [1.0; 8];
        data[4] = 50.0;
        let peaks = detector.calculate(&data);
        assert!(peaks.iter().all(|&peak| !peak));
    }
}
