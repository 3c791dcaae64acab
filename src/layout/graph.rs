// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::model::{ColorCycle, CommitRecord, LaneColor, RowDescriptor, Segment};

use super::lanes::{LaneEntry, Lanes};

/// Scratch state for one layout pass: the lane arena plus the palette
/// counter.
///
/// Caller-owned by design — construct one per pass and drop it afterwards.
/// Reusing a `LaneState` across unrelated commit sequences carries lane
/// occupancy and color continuity over, which is almost never wanted.
#[derive(Debug, Clone, Default)]
pub struct LaneState {
    lanes: Lanes,
    colors: ColorCycle,
}

impl LaneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lanes(&self) -> &Lanes {
        &self.lanes
    }

    /// Lays out one commit and advances the lane state past its row.
    ///
    /// Precondition (not checked): every parent of `commit` appears later in
    /// the sequence than `commit` itself, or not at all. Feeding rows out of
    /// order yields undefined column placement, never a panic.
    pub fn row_for(&mut self, commit: &CommitRecord) -> RowDescriptor {
        let matches = self.lanes.awaiting_columns(commit.hash());

        // The lowest matching lane is the commit's own; a commit nothing
        // awaits is a new tip and opens a fresh lane.
        let (commit_column, commit_color, is_tip) = match matches.first() {
            Some(&column) => {
                let color = self
                    .lanes
                    .entry(column)
                    .expect("matched lane is occupied")
                    .color();
                (column, color, false)
            }
            None => {
                let color = self.colors.next_color();
                let entry = LaneEntry::new(commit.hash().clone(), color);
                let column = self.lanes.allocate(entry, None);
                (column, color, true)
            }
        };

        let converging: SmallVec<[usize; 4]> =
            matches.iter().skip(1).copied().collect();

        let top = self.lanes.snapshot();

        for &column in &converging {
            self.lanes.free(column);
        }

        let mut forks: SmallVec<[(usize, LaneColor); 2]> = SmallVec::new();
        let mut merges: SmallVec<[(usize, LaneColor); 2]> = SmallVec::new();

        match commit.parents().split_first() {
            None => {
                // Root: the strand ends on this row.
                self.lanes.free(commit_column);
            }
            Some((first, rest)) => {
                // The first parent continues the commit's own lane and color.
                self.lanes.retarget(commit_column, first.clone());

                for parent in rest {
                    match self.lanes.find_awaiting_excluding(parent, commit_column) {
                        Some(column) => {
                            let color = self
                                .lanes
                                .entry(column)
                                .expect("merge lane is occupied")
                                .color();
                            merges.push((column, color));
                        }
                        None => {
                            let color = self.colors.next_color();
                            let entry = LaneEntry::new(parent.clone(), color);
                            let column = self.lanes.allocate(entry, Some(commit_column));
                            forks.push((column, color));
                        }
                    }
                }
            }
        }

        let mut segments = Vec::new();

        // Pass-throughs: lanes live both above and below this row.
        for (column, top_entry) in top.iter().enumerate() {
            if column == commit_column {
                continue;
            }
            let Some(top_entry) = top_entry else { continue };
            if self.lanes.entry(column).is_some() {
                segments.push(Segment::full(column, column, top_entry.color()));
            }
        }

        // Convergence curves land on the commit marker.
        for &column in &converging {
            let color = top[column]
                .as_ref()
                .expect("converging lane was occupied above this row")
                .color();
            segments.push(Segment::full(column, commit_column, color));
        }

        // Commit-lane stub. A tip has nothing above, a root nothing below; a
        // commit that is both degenerates to the bare marker.
        match (commit.is_root(), is_tip) {
            (false, true) => {
                segments.push(Segment::bottom_half(commit_column, commit_column, commit_color));
            }
            (false, false) => {
                segments.push(Segment::full(commit_column, commit_column, commit_color));
            }
            (true, false) => {
                segments.push(Segment::top_half(commit_column, commit_column, commit_color));
            }
            (true, true) => {}
        }

        // Fork curves depart below the marker into newly opened lanes.
        for &(column, color) in &forks {
            segments.push(Segment::bottom_half(commit_column, column, color));
        }

        // Merge curves flow from pre-existing lanes into the marker.
        for &(column, color) in &merges {
            segments.push(Segment::full(column, commit_column, color));
        }

        RowDescriptor::new(commit.hash().clone(), commit_column, commit_color, segments)
    }
}

/// Deterministic lane layout for a full commit sequence.
///
/// Consumes commits in order (children before parents) and produces exactly
/// one row per commit, in the same order. Two runs over the same sequence
/// yield identical rows: the pass starts from an empty lane arena and a
/// reset color counter, and every step is a deterministic scan.
pub fn layout_commit_rows(commits: &[CommitRecord]) -> Vec<RowDescriptor> {
    let mut state = LaneState::new();
    commits.iter().map(|commit| state.row_for(commit)).collect()
}
