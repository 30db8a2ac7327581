// Host-side tests for the pointer signal and page widgets' state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod blob {
        include!("../src/core/blob.rs");
    }
    pub mod toast {
        include!("../src/core/toast.rs");
    }
    pub mod theme {
        include!("../src/core/theme.rs");
    }
}

use crate::core::blob::*;
use crate::core::constants::*;
use crate::core::pointer::*;
use crate::core::theme::*;
use crate::core::toast::*;
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

const VIEWPORT: Vec2 = Vec2::new(1000.0, 600.0);

#[test]
fn pointer_tilt_is_offset_from_center() {
    let mut p = PointerSignal::default();
    p.on_move(Vec2::new(500.0, 300.0), VIEWPORT);
    assert_eq!(p.tilt, Vec2::ZERO);
    assert!(p.inside);

    p.on_move(Vec2::new(1000.0, 0.0), VIEWPORT);
    assert!(p.tilt.abs_diff_eq(Vec2::new(500.0, -300.0) * TILT_SENSITIVITY, 1e-6));
    assert_eq!(p.position, Vec2::new(1000.0, 0.0));
}

#[test]
fn pointer_leave_keeps_last_tilt() {
    let mut p = PointerSignal::default();
    p.on_move(Vec2::new(900.0, 100.0), VIEWPORT);
    let tilt = p.tilt;
    p.on_leave();
    assert!(!p.inside);
    assert_eq!(p.tilt, tilt);
    assert_eq!(tilt_for(Vec2::new(900.0, 100.0), VIEWPORT), tilt);
}

#[test]
fn blob_starts_centered_and_untouched() {
    let mut blob = BlobFollow::centered(VIEWPORT);
    assert_eq!(blob.visible, None);
    assert_eq!(blob.opacity(), None);
    // At the center there is no parallax push.
    assert_eq!(blob.step(VIEWPORT), VIEWPORT * 0.5);
}

#[test]
fn blob_eases_toward_pointer() {
    let mut blob = BlobFollow::centered(VIEWPORT);
    blob.point_to(Vec2::new(600.0, 300.0));
    assert_eq!(blob.visible, Some(true));
    assert_eq!(blob.opacity(), Some("1"));

    let shown = blob.step(VIEWPORT);
    let expected_current = 500.0 + 100.0 * BLOB_EASE;
    assert!((blob.current.x - expected_current).abs() < 1e-4);
    let expected_shown = expected_current + (expected_current - 500.0) * BLOB_PARALLAX[0];
    assert!((shown.x - expected_shown).abs() < 1e-4);
    assert!((shown.y - 300.0).abs() < 1e-4);

    for _ in 0..500 {
        blob.step(VIEWPORT);
    }
    assert!(blob.current.abs_diff_eq(Vec2::new(600.0, 300.0), 1e-2));
}

#[test]
fn blob_hides_on_leave_and_keeps_target() {
    let mut blob = BlobFollow::centered(VIEWPORT);
    blob.point_to(Vec2::new(10.0, 20.0));
    blob.leave();
    assert_eq!(blob.opacity(), Some("0"));
    assert_eq!(blob.target, Vec2::new(10.0, 20.0));
}

#[test]
fn blob_leaves_initial_opacity_alone_until_pointer_moves() {
    let mut blob = BlobFollow::centered(VIEWPORT);
    for _ in 0..3 {
        blob.sync(false, Vec2::ZERO);
        blob.step(VIEWPORT);
    }
    assert_eq!(blob.opacity(), None);
    assert_eq!(blob.target, VIEWPORT * 0.5);

    blob.sync(true, Vec2::new(300.0, 200.0));
    assert_eq!(blob.opacity(), Some("1"));
    blob.sync(false, Vec2::new(300.0, 200.0));
    assert_eq!(blob.opacity(), Some("0"));
}

#[test]
fn blob_transform_css_centers_element() {
    assert_eq!(
        transform_css(Vec2::new(12.5, 40.0)),
        "translate(12.5px, 40px) translate(-50%,-50%)"
    );
}

#[test]
fn toast_last_call_wins() {
    let t0 = Instant::now();
    let mut toast = ToastState::default();
    let first = toast.notify("X", Some(Duration::from_millis(100)), t0);
    let t1 = t0 + Duration::from_millis(10);
    let second = toast.notify("Y", Some(Duration::from_millis(50)), t1);

    assert_eq!(toast.message(), "Y");
    assert!(toast.is_visible(t1 + Duration::from_millis(49)));
    assert!(!toast.is_visible(t1 + Duration::from_millis(50)));
    assert_eq!(toast.hide_at(), Some(t1 + Duration::from_millis(50)));
    // The page's hide timer waits exactly until the stored deadline.
    assert_eq!(toast.hide_delay(t1), Duration::from_millis(50));
    assert_eq!(toast.hide_delay(t1 + Duration::from_millis(20)), Duration::from_millis(30));

    // The first call's timer is stale and must not hide anything.
    assert!(!toast.expire(first));
    assert!(toast.hide_at().is_some());
    assert!(toast.expire(second));
    assert!(toast.hide_at().is_none());
    assert!(!toast.expire(second));
}

#[test]
fn toast_stale_timer_cannot_hide_newer_message() {
    let t0 = Instant::now();
    let mut toast = ToastState::default();
    let first = toast.notify("saved", Some(Duration::from_millis(100)), t0);
    let _second = toast.notify("copied", Some(Duration::from_millis(500)), t0);
    assert!(!toast.expire(first));
    assert!(toast.is_visible(t0 + Duration::from_millis(200)));
}

#[test]
fn toast_default_duration() {
    let t0 = Instant::now();
    let mut toast = ToastState::default();
    toast.notify("hello", None, t0);
    assert_eq!(effective_duration(None), Duration::from_millis(TOAST_DEFAULT_MS));
    assert_eq!(toast.hide_at(), Some(t0 + Duration::from_millis(1400)));
    assert!(!toast.is_visible(t0 + Duration::from_millis(1400)));
    assert!(ToastState::default().hide_at().is_none());
}

#[test]
fn toast_hide_delay_is_zero_past_or_without_deadline() {
    let t0 = Instant::now();
    let mut toast = ToastState::default();
    assert_eq!(toast.hide_delay(t0), Duration::ZERO);
    let generation = toast.notify("hi", Some(Duration::from_millis(80)), t0);
    assert_eq!(toast.hide_delay(t0), Duration::from_millis(80));
    assert_eq!(toast.hide_delay(t0 + Duration::from_millis(200)), Duration::ZERO);
    assert!(toast.expire(generation));
    assert_eq!(toast.hide_delay(t0), Duration::ZERO);
}

#[test]
fn theme_toggle_from_light_preference() {
    let mut theme = ThemeState::from_preference(true);
    assert!(theme.light);
    assert_eq!(theme.aria_pressed(), "true");

    assert!(!theme.toggle());
    assert_eq!(theme.aria_pressed(), "false");

    assert!(theme.toggle());
    assert!(theme.light);
    assert_eq!(theme.aria_pressed(), "true");
}

#[test]
fn theme_defaults_to_dark_without_preference() {
    let theme = ThemeState::from_preference(false);
    assert!(!theme.light);
    assert_eq!(theme, ThemeState::default());
}
