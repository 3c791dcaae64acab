// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use galatea::layout::layout_commit_rows;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `layout.rows`
// - Case IDs (the string after the `/`) must remain stable across refactors
//   so results stay comparable over time (e.g. `small`, `linear_long`,
//   `branchy_medium`, `octopus_heavy`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout.rows");
    for case in [
        fixtures::history::Case::Small,
        fixtures::history::Case::LinearLong,
        fixtures::history::Case::BranchyMedium,
        fixtures::history::Case::OctopusHeavy,
    ] {
        let commits = fixtures::history::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let rows = layout_commit_rows(black_box(&commits));
                black_box(fixtures::checksum_rows(&rows))
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_layout
}
criterion_main!(benches);
