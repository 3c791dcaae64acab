// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::commit::CommitHash;
use super::palette::LaneColor;

/// Restricts a segment to one half of its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentHalf {
    Top,
    Bottom,
}

/// One drawable connector within a single row.
///
/// Equal columns draw a straight vertical (a pass-through or a commit-lane
/// stub); unequal columns draw a curve. `half == None` spans the full row
/// height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    top_column: usize,
    bottom_column: usize,
    color: LaneColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    half: Option<SegmentHalf>,
}

impl Segment {
    pub fn full(top_column: usize, bottom_column: usize, color: LaneColor) -> Self {
        Self { top_column, bottom_column, color, half: None }
    }

    pub fn top_half(top_column: usize, bottom_column: usize, color: LaneColor) -> Self {
        Self { top_column, bottom_column, color, half: Some(SegmentHalf::Top) }
    }

    pub fn bottom_half(top_column: usize, bottom_column: usize, color: LaneColor) -> Self {
        Self { top_column, bottom_column, color, half: Some(SegmentHalf::Bottom) }
    }

    pub fn top_column(&self) -> usize {
        self.top_column
    }

    pub fn bottom_column(&self) -> usize {
        self.bottom_column
    }

    pub fn color(&self) -> LaneColor {
        self.color
    }

    pub fn half(&self) -> Option<SegmentHalf> {
        self.half
    }

    /// True when the segment stays in one column (straight vertical).
    pub fn is_vertical(&self) -> bool {
        self.top_column == self.bottom_column
    }

    fn max_column(&self) -> usize {
        self.top_column.max(self.bottom_column)
    }
}

/// The layout result for one commit: its column, its color, and every
/// connector crossing its row.
///
/// Immutable once produced; owns no references into the lane arena that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDescriptor {
    commit_hash: CommitHash,
    commit_column: usize,
    commit_color: LaneColor,
    segments: Vec<Segment>,
    num_columns: usize,
}

impl RowDescriptor {
    /// Builds a row; `num_columns` is derived from the commit column and
    /// every segment column, so the derived value can never under- or
    /// over-count.
    pub fn new(
        commit_hash: CommitHash,
        commit_column: usize,
        commit_color: LaneColor,
        segments: Vec<Segment>,
    ) -> Self {
        let max_column = segments
            .iter()
            .map(Segment::max_column)
            .fold(commit_column, usize::max);

        Self {
            commit_hash,
            commit_column,
            commit_color,
            segments,
            num_columns: max_column + 1,
        }
    }

    pub fn commit_hash(&self) -> &CommitHash {
        &self.commit_hash
    }

    pub fn commit_column(&self) -> usize {
        self.commit_column
    }

    pub fn commit_color(&self) -> LaneColor {
        self.commit_color
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }
}
