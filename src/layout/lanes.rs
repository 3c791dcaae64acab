// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::model::{CommitHash, LaneColor};

/// A lane slot's live contents: the commit hash this strand is extended
/// toward, and the strand's assigned color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneEntry {
    awaiting: CommitHash,
    color: LaneColor,
}

impl LaneEntry {
    pub fn new(awaiting: CommitHash, color: LaneColor) -> Self {
        Self { awaiting, color }
    }

    pub fn awaiting(&self) -> &CommitHash {
        &self.awaiting
    }

    pub fn color(&self) -> LaneColor {
        self.color
    }
}

/// The lane arena: an ordered, growable array of strand slots.
///
/// Slot index is the visual column. Freeing a slot tombstones it (`None`)
/// rather than removing it, so columns to the right keep their positions;
/// allocation is a leftmost-free scan with append fallback, which is what
/// keeps the total column count minimal. Several slots may await the same
/// hash at once (convergence).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lanes {
    slots: Vec<Option<LaneEntry>>,
}

impl Lanes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn entry(&self, column: usize) -> Option<&LaneEntry> {
        self.slots.get(column).and_then(Option::as_ref)
    }

    /// Copies the current slot states, for pre-/post-row comparison.
    pub fn snapshot(&self) -> Vec<Option<LaneEntry>> {
        self.slots.clone()
    }

    /// Every column currently awaiting `hash`, in ascending order.
    pub fn awaiting_columns(&self, hash: &CommitHash) -> SmallVec<[usize; 4]> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(column, slot)| {
                slot.as_ref()
                    .is_some_and(|entry| entry.awaiting == *hash)
                    .then_some(column)
            })
            .collect()
    }

    /// The lowest column awaiting `hash`, ignoring `excluded`.
    pub fn find_awaiting_excluding(&self, hash: &CommitHash, excluded: usize) -> Option<usize> {
        self.slots.iter().enumerate().find_map(|(column, slot)| {
            if column == excluded {
                return None;
            }
            slot.as_ref()
                .is_some_and(|entry| entry.awaiting == *hash)
                .then_some(column)
        })
    }

    /// Occupies the leftmost free slot (appending one if none is free) and
    /// returns its column. `excluded` is never picked even when free.
    pub fn allocate(&mut self, entry: LaneEntry, excluded: Option<usize>) -> usize {
        let free = self.slots.iter().enumerate().find_map(|(column, slot)| {
            if Some(column) == excluded {
                return None;
            }
            slot.is_none().then_some(column)
        });

        match free {
            Some(column) => {
                self.slots[column] = Some(entry);
                column
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        }
    }

    /// Points an occupied lane at a new hash, keeping its color. This is the
    /// first-parent continuation: the strand never changes column or color.
    pub fn retarget(&mut self, column: usize, awaiting: CommitHash) {
        let entry = self.slots[column].as_mut().expect("retargeted lane is occupied");
        entry.awaiting = awaiting;
    }

    /// Tombstones a slot; the column stays reusable for later allocations.
    pub fn free(&mut self, column: usize) {
        self.slots[column] = None;
    }
}
