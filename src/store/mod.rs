// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tile persistence: the content-addressed, file-backed tile cache.

pub mod tile_cache;

pub use tile_cache::{CacheError, CachedTile, TileCache, TileKey, WriteDurability};
