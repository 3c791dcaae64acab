// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tile rendering: pure row-descriptor → SVG image functions.
//!
//! Rendering has no failure modes and no shared state; every tile is a
//! self-contained SVG whose geometry depends only on the row descriptor and
//! the `RenderConfig` tunables.

use serde::{Deserialize, Serialize};

use crate::model::{Segment, SegmentHalf};

pub mod tile;

pub use tile::{render_tile, Tile};

/// Control-point pull for full-height curves, as a fraction of the vertical
/// span. Tighter than the symmetric 0.5 so the bend completes near the row's
/// vertical center and visually meets the commit marker.
pub(crate) const FULL_CURVE_TANGENT: f64 = 0.35;

/// Control-point pull for half-height curves: a symmetric S-curve.
pub(crate) const HALF_CURVE_TANGENT: f64 = 0.5;

/// Extra stroke width for the background outline pass under each segment.
pub(crate) const OUTLINE_EXTRA_WIDTH: f64 = 2.0;

/// Opacity of the background outline pass.
pub(crate) const OUTLINE_OPACITY: &str = "0.75";

/// Stroke width of the thin background ring around the commit marker.
pub(crate) const MARKER_OUTLINE_WIDTH: f64 = 1.0;

/// Tunable renderer parameters.
///
/// All values are independent geometry inputs; `background` doubles as the
/// outline/shadow stroke color and should match the surface the tiles are
/// composited onto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub column_width: u32,
    pub marker_radius: f64,
    pub line_width: f64,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            column_width: 16,
            marker_radius: 3.5,
            line_width: 2.0,
            background: "#1e1e1e".to_owned(),
        }
    }
}

impl RenderConfig {
    /// Parses a host-supplied settings object; absent fields keep defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The fixed horizontal center of a column.
pub(crate) fn column_center(column: usize, column_width: u32) -> f64 {
    (column as f64) * f64::from(column_width) + f64::from(column_width) / 2.0
}

/// Formats a coordinate with at most centi-pixel precision so SVG output is
/// byte-stable across platforms.
pub(crate) fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// The SVG path for one segment within a row of height `row_height`.
pub(crate) fn segment_path(segment: &Segment, row_height: f64, column_width: u32) -> String {
    let (y0, y1) = match segment.half() {
        None => (0.0, row_height),
        Some(SegmentHalf::Top) => (0.0, row_height / 2.0),
        Some(SegmentHalf::Bottom) => (row_height / 2.0, row_height),
    };

    let x0 = column_center(segment.top_column(), column_width);
    let x1 = column_center(segment.bottom_column(), column_width);

    if segment.is_vertical() {
        return format!(
            "M {} {} L {} {}",
            fmt_coord(x0),
            fmt_coord(y0),
            fmt_coord(x1),
            fmt_coord(y1)
        );
    }

    let tangent = if segment.half().is_none() {
        FULL_CURVE_TANGENT
    } else {
        HALF_CURVE_TANGENT
    };
    let pull = (y1 - y0) * tangent;

    format!(
        "M {} {} C {} {}, {} {}, {} {}",
        fmt_coord(x0),
        fmt_coord(y0),
        fmt_coord(x0),
        fmt_coord(y0 + pull),
        fmt_coord(x1),
        fmt_coord(y1 - pull),
        fmt_coord(x1),
        fmt_coord(y1)
    )
}
