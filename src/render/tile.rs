// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::model::RowDescriptor;

use super::{
    column_center, fmt_coord, segment_path, RenderConfig, MARKER_OUTLINE_WIDTH,
    OUTLINE_EXTRA_WIDTH, OUTLINE_OPACITY,
};

/// One rendered row: a standalone SVG image plus its pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    svg: String,
    width: u32,
    height: u32,
}

impl Tile {
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The tile as a `data:` URI, for embedding as an inline graphic.
    pub fn data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(self.svg.as_bytes()))
    }
}

/// Renders one row into a self-contained SVG tile.
///
/// `columns` is the uniform column count shared across the visible range, so
/// every tile in a session has identical width regardless of how many lanes
/// its own row touches. Pure: same inputs, byte-identical output.
pub fn render_tile(
    row: &RowDescriptor,
    row_height: u32,
    columns: usize,
    config: &RenderConfig,
) -> Tile {
    let width = (columns as u32) * config.column_width + config.column_width;
    let height_px = f64::from(row_height);

    let mut svg = String::with_capacity(192 + row.segments().len() * 224);
    let mut int_buf = itoa::Buffer::new();

    svg.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"");
    svg.push_str(int_buf.format(width));
    svg.push_str("\" height=\"");
    svg.push_str(int_buf.format(row_height));
    svg.push_str("\" viewBox=\"0 0 ");
    svg.push_str(int_buf.format(width));
    svg.push(' ');
    svg.push_str(int_buf.format(row_height));
    svg.push_str("\">");

    // Each segment draws twice, back to front: a wider semi-transparent
    // stroke in the background color keeps crossing and adjacent strands
    // visually separated, then the strand color goes on top.
    for segment in row.segments() {
        let path = segment_path(segment, height_px, config.column_width);

        svg.push_str("<path d=\"");
        svg.push_str(&path);
        svg.push_str("\" fill=\"none\" stroke=\"");
        svg.push_str(&config.background);
        svg.push_str("\" stroke-width=\"");
        svg.push_str(&fmt_coord(config.line_width + OUTLINE_EXTRA_WIDTH));
        svg.push_str("\" stroke-opacity=\"");
        svg.push_str(OUTLINE_OPACITY);
        svg.push_str("\"/>");

        svg.push_str("<path d=\"");
        svg.push_str(&path);
        svg.push_str("\" fill=\"none\" stroke=\"");
        svg.push_str(segment.color().hex());
        svg.push_str("\" stroke-width=\"");
        svg.push_str(&fmt_coord(config.line_width));
        svg.push_str("\"/>");
    }

    // The commit marker sits on the row midline, above every segment.
    svg.push_str("<circle cx=\"");
    svg.push_str(&fmt_coord(column_center(row.commit_column(), config.column_width)));
    svg.push_str("\" cy=\"");
    svg.push_str(&fmt_coord(height_px / 2.0));
    svg.push_str("\" r=\"");
    svg.push_str(&fmt_coord(config.marker_radius));
    svg.push_str("\" fill=\"");
    svg.push_str(row.commit_color().hex());
    svg.push_str("\" stroke=\"");
    svg.push_str(&config.background);
    svg.push_str("\" stroke-width=\"");
    svg.push_str(&fmt_coord(MARKER_OUTLINE_WIDTH));
    svg.push_str("\"/></svg>");

    Tile { svg, width, height: row_height }
}
