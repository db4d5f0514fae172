//! Tests for region clamping and variant naming

use crate::extractor::{Region, Variant};

#[test]
fn test_region_inside_bounds_is_unchanged() {
    let region = Region::new(10, 10, 50, 50);
    assert!(region.fits_within(100, 100));
    assert_eq!(region.clamp_to(100, 100), region);

    let exact = Region::new(0, 0, 100, 100);
    assert_eq!(exact.clamp_to(100, 100), exact);

    let corner = Region::new(50, 60, 50, 40);
    assert_eq!(corner.clamp_to(100, 100), corner);
}

#[test]
fn test_region_past_edge_is_shifted() {
    let clamped = Region::new(80, 80, 50, 50).clamp_to(100, 100);
    assert_eq!(clamped, Region::new(50, 50, 50, 50));
    assert!(clamped.fits_within(100, 100));
}

#[test]
fn test_region_shifted_on_one_axis_only() {
    let clamped = Region::new(700, 150, 200, 300).clamp_to(800, 600);
    assert_eq!(clamped, Region::new(600, 150, 200, 300));
}

#[test]
fn test_region_larger_than_image_is_shrunk() {
    let clamped = Region::new(30, 40, 250, 500).clamp_to(200, 100);
    assert_eq!(clamped, Region::new(0, 0, 200, 100));
    assert!(!clamped.is_empty());
}

#[test]
fn test_region_origin_beyond_image() {
    let clamped = Region::new(5000, 5000, 10, 10).clamp_to(64, 32);
    assert_eq!(clamped, Region::new(54, 22, 10, 10));
}

#[test]
fn test_clamp_always_fits() {
    let sizes = [(1, 1), (17, 9), (100, 100), (800, 600)];
    let regions = [
        Region::new(0, 0, 0, 0),
        Region::new(3, 4, 5, 6),
        Region::new(99, 99, 2, 2),
        Region::new(600, 100, 200, 300),
        Region::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX),
    ];

    for &(w, h) in &sizes {
        for region in &regions {
            let clamped = region.clamp_to(w, h);
            assert!(clamped.fits_within(w, h), "{:?} in {}x{} -> {:?}", region, w, h, clamped);
            if region.width <= w && region.height <= h {
                assert_eq!(clamped.width, region.width);
                assert_eq!(clamped.height, region.height);
            }
        }
    }
}

#[test]
fn test_region_end_coordinates() {
    let region = Region::new(u32::MAX, 10, 1, 5);
    assert_eq!(region.end_x(), u32::MAX as u64 + 1);
    assert_eq!(region.end_y(), 15);
}

#[test]
fn test_variant_file_names() {
    assert_eq!(Variant::Light.source_file_name("kitchen"), "kitchen.png");
    assert_eq!(Variant::Dark.source_file_name("kitchen"), "kitchen-dark.png");
    assert_eq!(Variant::Light.object_file_name("oil-lamp"), "oil-lamp.png");
    assert_eq!(Variant::Dark.object_file_name("oil-lamp"), "oil-lamp-dark.png");
    assert_eq!(Variant::Dark.to_string(), "dark mode");
}
