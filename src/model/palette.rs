// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Serialize, Serializer};

/// The fixed branch-strand palette.
///
/// Twelve hues chosen to stay distinguishable against both light and dark
/// backgrounds. Lane colors cycle through this array and are never recycled
/// to reflect lane reuse.
pub const PALETTE: [&str; 12] = [
    "#0085d9", "#d9008f", "#00d90a", "#d98500", "#a300d9", "#ff0000", "#00d9cc", "#e138e8",
    "#85d900", "#dc5b23", "#6f24d6", "#ffcc00",
];

/// A palette entry assigned to one branch strand.
///
/// Serializes as its `#rrggbb` hex string, which is also what the renderer
/// and the tile digest consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneColor(u8);

impl LaneColor {
    /// Resolves a palette index; wraps modulo the palette size.
    pub fn from_index(index: usize) -> Self {
        Self((index % PALETTE.len()) as u8)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn hex(&self) -> &'static str {
        PALETTE[self.0 as usize]
    }
}

impl fmt::Display for LaneColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl Serialize for LaneColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// The monotonically increasing color counter.
///
/// Advanced once per newly opened lane; wraps modulo the palette size. Owned
/// by the layout state so independent passes never share color continuity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorCycle {
    next: usize,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the color for the next newly opened lane and advances.
    pub fn next_color(&mut self) -> LaneColor {
        let color = LaneColor::from_index(self.next);
        self.next += 1;
        color
    }

    /// Total lanes opened so far across the whole pass.
    pub fn opened(&self) -> usize {
        self.next
    }
}
