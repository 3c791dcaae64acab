// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use galatea::model::{CommitHash, CommitRecord, RowDescriptor};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("galatea_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub fn checksum_rows(rows: &[RowDescriptor]) -> u64 {
    let mut acc = 0u64;
    for row in rows {
        acc = acc.wrapping_mul(131).wrapping_add(row.commit_column() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(row.num_columns() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(row.segments().len() as u64);
    }
    acc
}

pub mod history {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct HistoryParams {
        pub commits: usize,
        /// Every nth commit is a merge; `0` disables merges entirely.
        pub merge_every: usize,
        /// Extra merge parents aim at the next multiple of this stride, so
        /// merges inside one window share a parent and exercise both the
        /// fork and the merge path of the engine.
        pub junction: usize,
        /// Merge parents beyond the first extra one (octopus width - 2).
        pub extra_parents: usize,
    }

    impl HistoryParams {
        pub const fn new(
            commits: usize,
            merge_every: usize,
            junction: usize,
            extra_parents: usize,
        ) -> Self {
            Self { commits, merge_every, junction, extra_parents }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        LinearLong,
        BranchyMedium,
        OctopusHeavy,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::LinearLong => "linear_long",
                Self::BranchyMedium => "branchy_medium",
                Self::OctopusHeavy => "octopus_heavy",
            }
        }

        pub const fn params(self) -> HistoryParams {
            match self {
                Self::Small => HistoryParams::new(64, 5, 16, 1),
                Self::LinearLong => HistoryParams::new(4096, 0, 0, 0),
                Self::BranchyMedium => HistoryParams::new(1024, 4, 32, 1),
                Self::OctopusHeavy => HistoryParams::new(512, 8, 16, 3),
            }
        }
    }

    fn hash(index: usize) -> CommitHash {
        CommitHash::new(format!("c{index:06}"))
    }

    /// Deterministic commit-history generator, newest first.
    ///
    /// - Commit `i`'s first parent is `i + 1` (children before parents by
    ///   construction); the last commit is the root.
    /// - Extra merge parents target junction commits further down the
    ///   sequence, producing forks, merges, and convergence rows.
    pub fn commits(params: HistoryParams) -> Vec<CommitRecord> {
        assert!(params.commits >= 1, "commits must be >= 1");

        let mut records = Vec::<CommitRecord>::with_capacity(params.commits);
        for index in 0..params.commits {
            let mut parents = Vec::<CommitHash>::new();
            if index + 1 < params.commits {
                parents.push(hash(index + 1));

                let is_merge = params.merge_every > 0 && index % params.merge_every == 0;
                if is_merge && params.junction > 0 {
                    for k in 0..=params.extra_parents {
                        let junction =
                            ((index / params.junction) + 1 + k) * params.junction;
                        if junction > index + 1 && junction < params.commits {
                            parents.push(hash(junction));
                        }
                    }
                }
            }

            records.push(CommitRecord::new(hash(index), parents));
        }

        records
    }

    pub fn fixture(case: Case) -> Vec<CommitRecord> {
        commits(case.params())
    }
}
