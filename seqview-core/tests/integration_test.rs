use seqview_core::*;

fn homolog_hsps() -> Vec<(&'static str, Vec<HspRecord>)> {
    vec![
        (
            "NP_000001 kinase",
            vec![
                HspRecord::new(
                    AlignedSegment::new(120, 1, "ATGGCC-TTA"),
                    AlignedSegment::new(1, 1, "ATGGCCATTA"),
                    "|||||| |||",
                )
                .with_scores(48.2, 3e-8),
                HspRecord::new(
                    AlignedSegment::new(900, -1, "GGATCC"),
                    AlignedSegment::new(40, 1, "GGATCA"),
                    "||||| ",
                )
                .with_scores(20.1, 0.02),
            ],
        ),
        (
            "XP_123456 hypothetical",
            vec![HspRecord::new(
                AlignedSegment::new(10, 1, "ACGTACGTACGTACGTACGT"),
                AlignedSegment::new(300, -1, "ACGTACGTACGTACGTACGT"),
                "||||||||||||||||||||",
            )
            .with_scores(80.0, 1e-20)],
        ),
        (
            "NP_999999 ankyrin",
            vec![HspRecord::new(
                AlignedSegment::new(500, 1, "ACG"),
                AlignedSegment::new(1, 1, "ACG"),
                "|||",
            )],
        ),
    ]
}

fn build_tracks() -> (Vec<Track>, Vec<Vec<NormalizedHsp>>) {
    let mut tracks = Vec::new();
    let mut hsps = Vec::new();
    for (title, records) in homolog_hsps() {
        let normalized: Vec<NormalizedHsp> = records
            .iter()
            .map(|r| normalize_hsp(r, "Transcript", title).expect("valid hsp"))
            .collect();
        let track = Track::new(title).with_features(
            normalized
                .iter()
                .enumerate()
                .map(|(i, hsp)| hsp.map_fragment(i))
                .collect(),
        );
        tracks.push(track);
        hsps.push(normalized);
    }
    (tracks, hsps)
}

#[test]
fn test_statistics_regression_examples() {
    let stats = compute_alignment_stats("ACGT", "ACGT").unwrap();
    assert_eq!((stats.identities, stats.gaps), (4, 0));
    assert_eq!((stats.identity_pct, stats.gap_pct), (100.0, 0.0));

    let stats = compute_alignment_stats("A-GT", "ACGT").unwrap();
    assert_eq!(stats.gaps, 1);
    assert_eq!(stats.identities, 3);
}

#[test]
fn test_hits_to_map_pipeline() {
    let (tracks, _) = build_tracks();
    let layout = layout_tracks(tracks, SortMode::ByLongestFeature, None);
    assert_eq!(
        layout.titles(),
        vec!["XP_123456 hypothetical", "NP_000001 kinase", "NP_999999 ankyrin"]
    );

    let map = MapGeometry::new(1000, MapStyle::default()).unwrap();
    let placement = map.place(&layout);
    assert_eq!(placement.rows.len(), 3);

    // Second HSP of the kinase: reverse-strand query, drawn as 895..900
    let kinase = &placement.rows[1];
    assert_eq!(kinase.fragments.len(), 2);
    assert!((kinase.fragments[1].left_pct - 89.4).abs() < 1e-9);
    assert_eq!(kinase.fragments[1].orientation, Orientation::Reverse);
}

#[test]
fn test_pinned_track_with_leftmost_sort() {
    let (tracks, _) = build_tracks();
    let layout = layout_tracks(tracks, SortMode::ByLeftmostStart, Some(2));
    assert_eq!(layout.rows[0].track.title, "NP_999999 ankyrin");
    assert_eq!(layout.rows[1].track.title, "XP_123456 hypothetical");
    assert_eq!(layout.rows[2].track.title, "NP_000001 kinase");
}

#[test]
fn test_inverted_hsp_alignment_panel() {
    let (_, hsps) = build_tracks();
    let hsp = &hsps[0][1];

    assert_eq!(hsp.query.seq, "GGATCC");
    assert_eq!(hsp.hit.seq, "TGATCC");
    assert_eq!(hsp.midline, " |||||");
    assert_eq!(hsp.hit.feature.orientation, Orientation::Reverse);

    let summary = AlignmentSummary::from_hsp(hsp).unwrap();
    assert_eq!(summary.stats.identities, 5);
    assert_eq!(summary.query_label, "Strand: plus");
    assert_eq!(summary.hit_label, "Strand: minus");

    let blocks = pairwise_blocks(hsp, 4);
    assert_eq!((blocks[0].query.start, blocks[0].query.end), (895, 898));
    assert_eq!((blocks[0].hit.start, blocks[0].hit.end), (45, 42));
    assert_eq!((blocks[1].hit.start, blocks[1].hit.end), (41, 40));
}

#[test]
fn test_records_deserialize_from_json() {
    let json = r#"{
        "query": {"start": 10, "frame": 1, "seq": "MKV"},
        "hit": {"start": 99, "end": 91, "frame": -2, "seq": "MKI"},
        "midline": "MK+",
        "score": 33.1,
        "evalue": 0.0001,
        "algorithm": "TBLASTN"
    }"#;
    let record: HspRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.algorithm, Algorithm::Tblastn);
    assert_eq!(record.hit.end, Some(91));

    let hsp = normalize_hsp(&record, "q", "h").unwrap();
    assert_eq!((hsp.hit.feature.start, hsp.hit.feature.end), (91, 99));
    assert_eq!(segment_label(hsp.algorithm, hsp.hit.frame), "Frame: -2");
}

#[test]
fn test_empty_results_make_empty_layout() {
    let layout = layout_tracks(Vec::new(), SortMode::ByName, None);
    assert!(layout.is_empty());
    let placement = MapGeometry::new(500, MapStyle::default()).unwrap().place(&layout);
    assert!(placement.rows.is_empty());
    assert_eq!(placement.ticks.len(), 11);
}
