// Host-side tests for drawing surface sizing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod surface {
    include!("../src/core/surface.rs");
}

use surface::*;

#[test]
fn backing_store_scales_by_ratio() {
    let m = SurfaceMetrics::measure(1280.0, 720.0, 2.0);
    assert_eq!(m.backing_size(), (2560, 1440));
    assert_eq!(m.transform(), [2.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
    assert_eq!(m.logical_size(), glam::Vec2::new(1280.0, 720.0));
}

#[test]
fn fractional_ratio_floors_backing_size() {
    let m = SurfaceMetrics::measure(1001.0, 333.0, 1.5);
    assert_eq!(m.backing_size(), (1501, 499));
    assert_eq!(m.transform()[0], 1.5);
    assert_eq!(m.transform()[3], 1.5);
}

#[test]
fn resize_is_idempotent() {
    let a = SurfaceMetrics::measure(800.0, 600.0, 3.0);
    let b = SurfaceMetrics::measure(800.0, 600.0, 3.0);
    assert_eq!(a, b);
    assert_eq!(a.backing_size(), b.backing_size());
    assert_eq!(a.transform(), b.transform());
    // The transform is absolute, so applying it after a different size does not compound.
    let other = SurfaceMetrics::measure(400.0, 300.0, 1.0);
    assert_ne!(other.transform(), a.transform());
    assert_eq!(SurfaceMetrics::measure(800.0, 600.0, 3.0).transform(), a.transform());
}

#[test]
fn low_or_invalid_ratio_falls_back_to_one() {
    assert_eq!(SurfaceMetrics::measure(100.0, 100.0, 0.5).ratio, 1.0);
    assert_eq!(SurfaceMetrics::measure(100.0, 100.0, 0.0).ratio, 1.0);
    assert_eq!(SurfaceMetrics::measure(100.0, 100.0, f64::NAN).ratio, 1.0);
}

#[test]
fn degenerate_sizes_collapse_to_zero() {
    let m = SurfaceMetrics::measure(0.0, -5.0, 2.0);
    assert_eq!(m.backing_size(), (0, 0));
    let m = SurfaceMetrics::measure(f64::INFINITY, 10.0, 1.0);
    assert_eq!(m.width, 0.0);
    assert_eq!(m.backing_size(), (0, 10));
}
