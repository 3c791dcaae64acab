// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The lane-allocation engine.
//!
//! A single-pass, deterministic fold over an ordered commit sequence
//! (children before parents) that assigns every commit a column and a color
//! and describes each row's connectors as segments.

pub mod graph;
pub mod lanes;

pub use graph::{layout_commit_rows, LaneState};
pub use lanes::{LaneEntry, Lanes};
