//! End-to-end properties of the distribution model and its layouts.

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use approx::assert_relative_eq;
use distviz::prelude::*;
use proptest::prelude::*;

fn distribution_of(values: &[f32]) -> Distribution {
    let mut dist = Distribution::new();
    for &v in values {
        dist.add_sample(v);
    }
    dist
}

#[test]
fn density_is_non_negative_everywhere() {
    let dist = distribution_of(&[0.1, 0.1, 0.45, 0.72, 0.99]);
    for i in 0..=200 {
        let x = i as f32 / 200.0;
        assert!(dist.density(x) >= 0.0, "density({x}) went negative");
    }
}

#[test]
fn every_kernel_carries_the_current_bandwidth() {
    let mut dist = Distribution::new();
    for v in [0.3, 0.6, 0.6, 0.61, 0.9] {
        dist.add_sample(v);
        let bandwidths: Vec<f32> = dist.kernels().map(|k| k.bandwidth).collect();
        let first = bandwidths[0];
        assert!(first > 0.0);
        for b in bandwidths {
            assert_relative_eq!(b, first);
        }
    }
}

#[test]
fn empty_distribution_reads_are_defined() {
    let dist = Distribution::new();
    let scale = LinearScale::unit(640.0).unwrap();

    let summary = dist.summary();
    assert_eq!(summary.n, 0);
    assert!(summary.mean.is_none());
    assert!(summary.quartiles.is_none());
    assert!(summary.ci.is_none());

    assert_eq!(dist.density(0.5), 0.0);
    assert!(dist.dot_plot(&DotPlot::new(), 100.0, &scale).unwrap().bins.is_empty());
    assert!(dist.swarm(&Swarm::new(), &scale, 50.0, (640.0, 100.0)).unwrap().is_empty());
}

#[test]
fn single_sample_degenerate_paths() {
    let dist = distribution_of(&[0.5]);

    // zero spread: sigma falls back to the floor constant, bandwidth stays
    // positive
    let kernel = dist.kernels().next().unwrap();
    let expected = SilvermanBandwidth::new()
        .estimate(&{
            let mut set = SampleSet::new();
            set.push(0.5);
            set
        })
        .unwrap();
    assert_relative_eq!(kernel.bandwidth, expected);
    assert!(kernel.bandwidth > 0.0);

    let summary = dist.summary();
    let q = summary.quartiles.unwrap();
    assert_relative_eq!(q.q1, 0.5);
    assert_relative_eq!(q.median, 0.5);
    assert_relative_eq!(q.q3, 0.5);

    let (lo, hi) = summary.ci.unwrap();
    assert_relative_eq!(lo, hi);
}

#[test]
fn nine_even_samples_bin_like_sturges() {
    let dist = distribution_of(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]);
    let hist = dist.summary().histogram;
    assert_eq!(hist.bin_count, 5);
    assert_relative_eq!(hist.step, 0.2);
    assert_eq!(hist.counts.iter().sum::<usize>(), 9);
}

#[test]
fn dot_plot_runs_are_identical() {
    let dist = distribution_of(&[0.05, 0.07, 0.08, 0.3, 0.31, 0.32, 0.8, 0.81]);
    let scale = LinearScale::unit(500.0).unwrap();
    let a = dist.dot_plot(&DotPlot::new(), 150.0, &scale).unwrap();
    let b = dist.dot_plot(&DotPlot::new(), 150.0, &scale).unwrap();
    assert_eq!(a, b);
}

#[test]
fn dot_plot_bins_grow_as_radius_shrinks() {
    let values: Vec<f32> = (0..60).map(|i| i as f32 / 60.0).collect();
    let scale = LinearScale::unit(500.0).unwrap();
    let mut previous = 0;
    for step in 0..10 {
        let radius = 12.0 - step as f32;
        let bins = distviz::layout::pack(&values, radius, &scale);
        assert!(bins.len() >= previous);
        previous = bins.len();
    }
}

#[test]
fn swarm_separates_identical_values() {
    let radius = 6.0;
    let dist = distribution_of(&[0.5; 9]);
    let scale = LinearScale::unit(600.0).unwrap();
    let points =
        dist.swarm(&Swarm::new().radius(radius), &scale, 150.0, (600.0, 300.0)).unwrap();

    assert_eq!(points.len(), 9);
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let dx = points[j].x - points[i].x;
            let dy = points[j].y - points[i].y;
            let dist_px = (dx * dx + dy * dy).sqrt();
            assert!(
                dist_px >= 2.0 * radius - 0.5,
                "points {i} and {j} still overlap: {dist_px:.2}px apart"
            );
        }
    }
}

#[test]
fn swarm_separation_holds_for_large_clusters() {
    // separation must not degrade as the identical-valued cluster grows
    let radius = 7.0;
    let scale = LinearScale::unit(600.0).unwrap();
    for k in [16, 20, 30] {
        let dist = distribution_of(&vec![0.5; k]);
        let points = dist
            .swarm(&Swarm::new().radius(radius), &scale, 200.0, (600.0, 400.0))
            .unwrap();
        let mut min = f32::INFINITY;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let dx = points[j].x - points[i].x;
                let dy = points[j].y - points[i].y;
                min = min.min((dx * dx + dy * dy).sqrt());
            }
        }
        assert!(
            min >= 2.0 * radius - 0.7,
            "k={k}: min pairwise distance {min:.2}px, expected ~{}px",
            2.0 * radius
        );
    }
}

#[test]
fn band_segments_rebuild_the_extent() {
    let dist = distribution_of(&[0.2, 0.4, 0.6]);
    let bands = dist.bands(&BandEncoder::new().grid_step(0.01)).unwrap();
    for band in &bands {
        assert!(band.level < 5);
        assert!((0.0..=1.0).contains(&band.remainder));
        let (remainder_px, base_px) = band.segment_heights(120.0);
        assert_relative_eq!(remainder_px + base_px, 120.0);
    }
}

proptest! {
    #[test]
    fn prop_density_stays_non_negative(
        values in proptest::collection::vec(0.0_f32..=1.0, 1..40),
        query in 0.0_f32..=1.0,
    ) {
        let dist = distribution_of(&values);
        prop_assert!(dist.density(query) >= 0.0);
    }

    #[test]
    fn prop_bands_stay_in_range(
        values in proptest::collection::vec(0.0_f32..=1.0, 1..20),
    ) {
        let dist = distribution_of(&values);
        let bands = dist.bands(&BandEncoder::new().grid_step(0.05)).unwrap();
        for band in bands {
            prop_assert!(band.level < 5);
            prop_assert!((0.0..=1.0).contains(&band.remainder));
        }
    }

    #[test]
    fn prop_clamped_inserts_stay_in_unit_interval(
        values in proptest::collection::vec(-10.0_f32..10.0, 1..30),
    ) {
        let dist = distribution_of(&values);
        for &v in dist.samples() {
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn prop_swarm_separates_any_cluster_size(
        k in 2_usize..=20,
    ) {
        let dist = distribution_of(&vec![0.5; k]);
        let scale = LinearScale::unit(600.0).unwrap();
        let points = dist.swarm(&Swarm::new(), &scale, 200.0, (600.0, 400.0)).unwrap();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let dx = points[j].x - points[i].x;
                let dy = points[j].y - points[i].y;
                let dist_px = (dx * dx + dy * dy).sqrt();
                prop_assert!(dist_px >= 14.0 - 0.7, "k={k}: {dist_px:.2}px");
            }
        }
    }

    #[test]
    fn prop_dot_plot_conserves_samples(
        values in proptest::collection::vec(0.0_f32..=1.0, 0..50),
    ) {
        let dist = distribution_of(&values);
        let scale = LinearScale::unit(400.0).unwrap();
        let layout = dist.dot_plot(&DotPlot::new(), 200.0, &scale).unwrap();
        let packed: usize = layout.bins.iter().map(|b| b.count).sum();
        prop_assert_eq!(packed, values.len());
    }
}
