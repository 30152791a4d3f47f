//! Benchmark for `.osu` file parsing.

use criterion::{Criterion, Throughput};
use mania_rs::beatmap::{default_config, parse_beatmap_with_config};

struct BeatmapFile {
    name: String,
    source: String,
}

fn scan_beatmap_files() -> Vec<BeatmapFile> {
    let dir = "tests/files";

    std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.to_string_lossy().ends_with(".osu"))
        .filter_map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(String::from)?;

            let source = std::fs::read_to_string(&path).expect("Failed to load test file");

            Some(BeatmapFile { name, source })
        })
        .collect()
}

fn bench_parse_beatmap(c: &mut Criterion) {
    let files = scan_beatmap_files();
    let mut group = c.benchmark_group("parse_beatmap");

    for file in files.iter() {
        group.throughput(Throughput::Bytes(file.source.len() as u64));
        group.bench_function(&file.name, |b| {
            b.iter(|| {
                parse_beatmap_with_config(
                    std::hint::black_box(&file.source),
                    std::hint::black_box(default_config()),
                )
            });
        });
    }

    group.finish();
}

fn main() {
    let mut criterion = Criterion::default();
    bench_parse_beatmap(&mut criterion);
}
