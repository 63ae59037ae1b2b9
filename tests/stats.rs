mod common;

use common::synthetic_image::{fill_rect, speckled_mask};
use mask_tools::{Connectivity, Plane, StatsCollector, StatsParams};

fn plane(w: usize, h: usize, data: &[u8]) -> Plane<'_, u8> {
    Plane {
        w,
        h,
        stride: w,
        data,
    }
}

fn collector(threshold: f32, connectivity: Connectivity) -> StatsCollector {
    StatsCollector::new(StatsParams {
        threshold,
        connectivity,
        ..Default::default()
    })
    .expect("valid params")
}

#[test]
fn all_background_frame_reports_one_label() {
    let data = vec![0u8; 25];
    let stats = collector(1.0, Connectivity::Eight).collect(plane(5, 5, &data));

    assert_eq!(stats.num_labels, 1);
    assert_eq!(stats.areas, vec![25]);
    assert_eq!(stats.lefts, vec![0]);
    assert_eq!(stats.tops, vec![0]);
    assert_eq!(stats.widths, vec![5]);
    assert_eq!(stats.heights, vec![5]);
    assert_eq!(stats.centroids_x, vec![2.0]);
    assert_eq!(stats.centroids_y, vec![2.0]);
}

#[test]
fn all_foreground_frame_has_an_empty_background_record() {
    let (w, h) = (6usize, 4usize);
    let data = vec![255u8; w * h];
    let stats = collector(1.0, Connectivity::Eight).collect(plane(w, h, &data));

    assert_eq!(stats.num_labels, 2);
    // Label 0: empty background, pinned to a 0x0 box at the origin.
    assert_eq!(stats.areas[0], 0);
    assert_eq!((stats.lefts[0], stats.tops[0]), (0, 0));
    assert_eq!((stats.widths[0], stats.heights[0]), (0, 0));
    assert_eq!((stats.centroids_x[0], stats.centroids_y[0]), (0.0, 0.0));
    // Label 1: the full-frame component.
    assert_eq!(stats.areas[1], (w * h) as u64);
    assert_eq!((stats.lefts[1], stats.tops[1]), (0, 0));
    assert_eq!(stats.widths[1], w as u32);
    assert_eq!(stats.heights[1], h as u32);
}

#[test]
fn center_pixel_scenario() {
    let mut data = vec![0u8; 9];
    data[4] = 255;
    let stats = collector(1.0, Connectivity::Eight).collect(plane(3, 3, &data));

    assert_eq!(stats.num_labels, 2);
    assert_eq!(stats.areas, vec![8, 1]);
    assert_eq!((stats.lefts[1], stats.tops[1]), (1, 1));
    assert_eq!((stats.widths[1], stats.heights[1]), (1, 1));
    assert_eq!((stats.centroids_x[1], stats.centroids_y[1]), (1.0, 1.0));
}

#[test]
fn areas_partition_the_frame() {
    let (w, h) = (50usize, 34usize);
    let data = speckled_mask(w, h, 0xcafebabe);
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        let stats = collector(128.0, connectivity).collect(plane(w, h, &data));
        let total: u64 = stats.areas.iter().sum();
        assert_eq!(
            total,
            (w * h) as u64,
            "every pixel is assigned to exactly one label"
        );
        assert_eq!(stats.areas.len(), stats.num_labels);
        assert_eq!(stats.centroids_x.len(), stats.num_labels);
    }
}

#[test]
fn centroids_can_be_truncated_to_integers() {
    // A 3x2 block at (1, 1): centroid (2.0, 1.5).
    let (w, h) = (8usize, 8usize);
    let mut data = vec![0u8; w * h];
    fill_rect(&mut data, w, 1, 1, 3, 2, 255);

    let real = collector(1.0, Connectivity::Eight).collect(plane(w, h, &data));
    assert_eq!(real.centroids_x[1], 2.0);
    assert_eq!(real.centroids_y[1], 1.5);

    let mut truncating = StatsCollector::new(StatsParams {
        threshold: 1.0,
        integer_centroid: true,
        ..Default::default()
    })
    .expect("valid params");
    let trunc = truncating.collect(plane(w, h, &data));
    assert_eq!(trunc.centroids_x[1], 2.0);
    assert_eq!(trunc.centroids_y[1], 1.0, "1.5 truncates toward zero");
}

#[test]
fn diagonal_pair_statistics_depend_on_connectivity() {
    let mut data = vec![0u8; 4];
    data[0] = 255;
    data[3] = 255;

    let eight = collector(1.0, Connectivity::Eight).collect(plane(2, 2, &data));
    assert_eq!(eight.num_labels, 2);
    assert_eq!(eight.areas, vec![2, 2]);

    let four = collector(1.0, Connectivity::Four).collect(plane(2, 2, &data));
    assert_eq!(four.num_labels, 3);
    assert_eq!(four.areas, vec![2, 1, 1]);
}

#[test]
fn collection_is_deterministic_across_reuse() {
    let (w, h) = (30usize, 30usize);
    let data = speckled_mask(w, h, 0x1234abcd);
    let mut collector = collector(128.0, Connectivity::Eight);
    let first = collector.collect(plane(w, h, &data));
    let second = collector.collect(plane(w, h, &data));
    assert_eq!(first, second);
}

#[test]
fn stats_serialize_to_json() {
    let mut data = vec![0u8; 16];
    data[5] = 255;
    let stats = collector(1.0, Connectivity::Eight).collect(plane(4, 4, &data));
    let json = serde_json::to_value(&stats).expect("serializable");
    assert_eq!(json["num_labels"], 2);
    assert_eq!(json["areas"][1], 1);
}
