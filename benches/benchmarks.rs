//! Performance benchmarks for filetree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use filetree::test_utils::TestDir;
use filetree::{RenderOptions, ScanConfig, Tree, count_files, flatten, render};

/// `dirs` directories with `files_per_dir` small files each, plus one nested level.
fn create_test_tree(dirs: usize, files_per_dir: usize) -> TestDir {
    let dir = TestDir::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            dir.add_file(&format!("dir_{d}/file_{f}.rs"), "fn main() {}");
        }
        dir.add_file(&format!("dir_{d}/nested/README.md"), "# nested");
    }
    dir
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    let small = create_test_tree(10, 10);
    let large = create_test_tree(50, 40);

    group.bench_function("small_tree_sequential", |b| {
        let tree = Tree::new(small.path()).with_config(ScanConfig {
            parallel_workers: 1,
            ..Default::default()
        });
        b.iter(|| tree.scan().unwrap())
    });

    group.bench_function("small_tree_parallel", |b| {
        let tree = Tree::new(small.path());
        b.iter(|| tree.scan().unwrap())
    });

    group.bench_function("large_tree_sequential", |b| {
        let tree = Tree::new(large.path()).with_config(ScanConfig {
            parallel_workers: 1,
            ..Default::default()
        });
        b.iter(|| tree.scan().unwrap())
    });

    group.bench_function("large_tree_parallel", |b| {
        let tree = Tree::new(large.path());
        b.iter(|| tree.scan().unwrap())
    });

    group.bench_function("large_tree_sorted", |b| {
        let tree = Tree::new(large.path()).with_config(ScanConfig {
            sort_entries: true,
            ..Default::default()
        });
        b.iter(|| tree.scan().unwrap())
    });

    group.finish();
}

fn bench_projections(c: &mut Criterion) {
    let dir = create_test_tree(50, 40);
    let root = Tree::new(dir.path())
        .with_config(ScanConfig::deterministic())
        .scan()
        .unwrap();
    let options = RenderOptions::default();

    let mut group = c.benchmark_group("projections");

    group.bench_function("render", |b| {
        b.iter(|| render(black_box(&root), black_box(&options)))
    });

    group.bench_function("flatten", |b| b.iter(|| flatten(black_box(&root)).len()));

    group.bench_function("count_files", |b| b.iter(|| count_files(black_box(&root))));

    group.finish();
}

criterion_group!(benches, bench_scan, bench_projections);
criterion_main!(benches);
