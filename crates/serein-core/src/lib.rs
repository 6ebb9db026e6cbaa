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

//! # Serein Core
//!
//! Recursive signal-filtering primitives for real-time pipelines: scalar
//! and per-axis Kalman estimators, bounded-memory running averages,
//! sliding-window extrema, and a handful of small conditioning filters
//! built on top of them.
//!
//! Every filter is a plain value type: construct it with its tuning,
//! feed it one raw sample per tick, read back the smoothed result.

#![warn(missing_docs)]

pub mod math;
pub mod signal;
