// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: commit records, the strand palette, and row descriptors.

pub mod commit;
pub mod palette;
pub mod row;

pub use commit::{commits_from_json_str, CommitHash, CommitRecord};
pub use palette::{ColorCycle, LaneColor, PALETTE};
pub use row::{RowDescriptor, Segment, SegmentHalf};
