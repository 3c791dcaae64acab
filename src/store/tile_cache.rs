// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rayon::prelude::*;

use crate::model::{RowDescriptor, SegmentHalf};
use crate::render::{render_tile, RenderConfig, Tile};

const TEMP_PREFIX: &str = ".galatea.tmp.";

const FNV64_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV64_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Incremental FNV-1a/64 over the tile's visual content.
///
/// Wide enough that the per-session key space (row geometry tuples) stays
/// collision-free in practice; a colliding digest would silently serve the
/// wrong tile, so 32 bits were not enough headroom.
struct Fnv64(u64);

impl Fnv64 {
    fn new() -> Self {
        Self(FNV64_OFFSET)
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 ^= u64::from(byte);
            self.0 = self.0.wrapping_mul(FNV64_PRIME);
        }
    }

    fn write_usize(&mut self, value: usize) {
        self.write(&(value as u64).to_le_bytes());
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Content digest identifying one tile by what it draws.
///
/// Covers the commit column and color, the row height, the uniform column
/// count, and every segment tuple in order — but not the commit hash, so
/// visually identical rows of distinct commits collide onto one asset, and
/// not the `RenderConfig`, which is why parameter changes require
/// [`TileCache::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey(u64);

impl TileKey {
    pub fn for_row(row: &RowDescriptor, row_height: u32, columns: usize) -> Self {
        let mut fnv = Fnv64::new();
        fnv.write_usize(row.commit_column());
        fnv.write(row.commit_color().hex().as_bytes());
        fnv.write(&row_height.to_le_bytes());
        fnv.write_usize(columns);

        for segment in row.segments() {
            let half = match segment.half() {
                None => 0u8,
                Some(SegmentHalf::Top) => 1,
                Some(SegmentHalf::Bottom) => 2,
            };
            fnv.write(&[half]);
            fnv.write_usize(segment.top_column());
            fnv.write_usize(segment.bottom_column());
            fnv.write(segment.color().hex().as_bytes());
        }

        Self(fnv.finish())
    }

    pub fn digest(&self) -> u64 {
        self.0
    }

    /// The digest-derived tile filename.
    pub fn file_name(&self) -> String {
        format!("{:016x}.svg", self.0)
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug)]
pub enum CacheError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// How hard a tile write tries to reach stable storage.
///
/// Tiles are reproducible from their row descriptors, so losing one to a
/// crash only costs a re-render; `BestEffort` is the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Atomic temp-file-and-rename without per-file fsync.
    #[default]
    BestEffort,

    /// Additionally flushes tile contents before the rename, as far as the
    /// platform and filesystem allow.
    Durable,
}

/// The result of a cache lookup: where the tile lives and whether this call
/// rendered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedTile {
    key: TileKey,
    path: PathBuf,
    freshly_rendered: bool,
}

impl CachedTile {
    pub fn key(&self) -> TileKey {
        self.key
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn freshly_rendered(&self) -> bool {
        self.freshly_rendered
    }
}

/// A content-addressed, file-backed store of rendered tiles.
///
/// Tiles are keyed by visual content ([`TileKey`]), so the many
/// geometrically identical rows of a real history share one file. The store
/// never evicts; [`TileCache::clear`] must run at session start so code or
/// parameter changes take effect. All mutation goes through `&mut self`,
/// which makes the existence-check-then-write unit atomic per key under the
/// reference single-threaded usage.
#[derive(Debug)]
pub struct TileCache {
    root: PathBuf,
    durability: WriteDurability,
    known: BTreeSet<u64>,
}

impl TileCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
            known: BTreeSet::new(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn tile_path(&self, key: &TileKey) -> PathBuf {
        self.root.join(key.file_name())
    }

    /// Removes every cached tile (and any leftover temp file) under the
    /// root. Completes fully before returning, so no later lookup can see a
    /// stale tile rendered under older rules.
    pub fn clear(&mut self) -> Result<(), CacheError> {
        self.known.clear();

        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => {
                return Err(CacheError::Io { path: self.root.clone(), source });
            }
        };

        for entry in entries.filter_map(|entry| entry.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if !file_name.ends_with(".svg") && !file_name.starts_with(TEMP_PREFIX) {
                continue;
            }

            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(source) if source.kind() == io::ErrorKind::NotFound => {}
                Err(source) => return Err(CacheError::Io { path, source }),
            }
        }

        Ok(())
    }

    /// Returns the cached tile for `row`, rendering and persisting it first
    /// on a miss.
    pub fn ensure(
        &mut self,
        row: &RowDescriptor,
        row_height: u32,
        columns: usize,
        config: &RenderConfig,
    ) -> Result<CachedTile, CacheError> {
        let key = TileKey::for_row(row, row_height, columns);
        let path = self.tile_path(&key);

        if self.lookup(&key, &path) {
            return Ok(CachedTile { key, path, freshly_rendered: false });
        }

        let tile = render_tile(row, row_height, columns, config);
        self.persist(&key, &path, tile.svg())?;
        Ok(CachedTile { key, path, freshly_rendered: true })
    }

    /// Batch variant of [`TileCache::ensure`] for a whole visible range.
    ///
    /// Misses are deduplicated and rendered in parallel (rendering is pure),
    /// then persisted sequentially on the calling thread; results come back
    /// in row order.
    pub fn ensure_all(
        &mut self,
        rows: &[RowDescriptor],
        row_height: u32,
        columns: usize,
        config: &RenderConfig,
    ) -> Result<Vec<CachedTile>, CacheError> {
        let keys = rows
            .iter()
            .map(|row| TileKey::for_row(row, row_height, columns))
            .collect::<Vec<_>>();

        let mut queued = BTreeSet::<u64>::new();
        let mut misses = Vec::<(TileKey, &RowDescriptor)>::new();
        for (row, key) in rows.iter().zip(&keys) {
            let path = self.tile_path(key);
            if self.lookup(key, &path) {
                continue;
            }
            if queued.insert(key.digest()) {
                misses.push((*key, row));
            }
        }

        let rendered = misses
            .par_iter()
            .map(|(key, row)| (*key, render_tile(row, row_height, columns, config)))
            .collect::<Vec<(TileKey, Tile)>>();

        for (key, tile) in &rendered {
            let path = self.tile_path(key);
            self.persist(key, &path, tile.svg())?;
        }

        Ok(keys
            .into_iter()
            .map(|key| CachedTile {
                path: self.tile_path(&key),
                freshly_rendered: queued.contains(&key.digest()),
                key,
            })
            .collect())
    }

    fn lookup(&mut self, key: &TileKey, path: &Path) -> bool {
        if self.known.contains(&key.digest()) {
            return true;
        }
        if path.is_file() {
            self.known.insert(key.digest());
            return true;
        }
        false
    }

    fn persist(&mut self, key: &TileKey, path: &Path, svg: &str) -> Result<(), CacheError> {
        write_atomic_tile(&self.root, path, svg.as_bytes(), self.durability)?;
        self.known.insert(key.digest());
        Ok(())
    }
}

// Extracted persistence helpers for `TileCache`.
include!("tile_cache/helpers.rs");
