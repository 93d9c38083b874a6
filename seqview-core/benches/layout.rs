use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqview_core::{
    compute_alignment_stats, layout_tracks, MapGeometry, MapStyle, NormalizedFeature, Orientation, SortMode, Track,
};

fn generate_tracks(count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| {
            let base = ((i * 7919) % 10_000) as i64 + 1;
            Track::new(format!("hit_{:05}", (i * 31) % count)).with_features(
                (0..4)
                    .map(|j| NormalizedFeature::new(base + j * 50, base + j * 50 + (i as i64 % 97), Orientation::Forward))
                    .collect(),
            )
        })
        .collect()
}

fn generate_alignment(length: usize) -> (String, String) {
    let pattern = b"ATCG-ATCGA";
    let a: String = (0..length).map(|i| pattern[i % pattern.len()] as char).collect();
    let b: String = (0..length).map(|i| pattern[(i + 3) % pattern.len()] as char).collect();
    (a, b)
}

fn bench_layout(c: &mut Criterion) {
    let tracks = generate_tracks(2000);

    c.bench_function("layout_by_name_2k", |b| {
        b.iter(|| black_box(layout_tracks(black_box(tracks.clone()), SortMode::ByName, Some(10))))
    });

    c.bench_function("layout_by_longest_2k", |b| {
        b.iter(|| black_box(layout_tracks(black_box(tracks.clone()), SortMode::ByLongestFeature, None)))
    });

    let layout = layout_tracks(tracks.clone(), SortMode::ByLeftmostStart, None);
    let map = MapGeometry::new(12_000, MapStyle::default()).expect("positive length");
    c.bench_function("map_place_2k", |b| b.iter(|| black_box(map.place(black_box(&layout)))));
}

fn bench_stats(c: &mut Criterion) {
    let (a, b) = generate_alignment(10_000);

    c.bench_function("alignment_stats_10kb", |bench| {
        bench.iter(|| black_box(compute_alignment_stats(black_box(&a), black_box(&b))))
    });
}

criterion_group!(benches, bench_layout, bench_stats);
criterion_main!(benches);
