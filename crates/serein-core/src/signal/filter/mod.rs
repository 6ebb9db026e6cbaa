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

//! Recursive filters for smoothing and analyzing noisy sample streams.
//!
//! The Kalman and running-average families come in scalar and per-axis
//! vector flavors; the vector variants are deliberately built from three
//! independent scalar filters (no cross-axis covariance) so that
//! filtering a vector is exactly equivalent to filtering its components
//! separately.

pub mod derivative;
pub mod kalman;
pub mod max;
pub mod min;
pub mod peak_detection;
pub mod quaternion_kalman;
pub mod ramp;
pub mod running_average;
pub mod vector_kalman;
pub mod vector_running_average;

// --- Re-export Principal Types ---

pub use self::derivative::DerivativeFilter;
pub use self::kalman::KalmanFilter;
pub use self::max::MaxFilter;
pub use self::min::MinFilter;
pub use self::peak_detection::PeakDetection;
pub use self::quaternion_kalman::QuaternionKalmanFilter;
pub use self::ramp::RampFilter;
pub use self::running_average::RunningAverageFilter;
pub use self::vector_kalman::VectorKalmanFilter;
pub use self::vector_running_average::VectorRunningAverageFilter;
