//! Tests for cropping objects out of room images

use std::fs;
use std::path::Path;
use image::{ImageFormat, Rgba, RgbaImage};
use tempfile::TempDir;

use crate::config::AssetLayout;
use crate::errors::ExtractError;
use crate::extractor::{Region, RegionExtractor, Variant};

/// Writes a room image whose pixels encode their own coordinates
fn write_room(layout: &AssetLayout, file_name: &str, width: u32, height: u32) {
    fs::create_dir_all(&layout.rooms_root).unwrap();
    let image = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]));
    image.save(layout.rooms_root.join(file_name)).unwrap();
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}

#[test]
fn test_extracts_light_object() {
    let dir = TempDir::new().unwrap();
    let layout = AssetLayout::new(dir.path());
    write_room(&layout, "den.png", 100, 100);

    let extractor = RegionExtractor::new(&layout);
    assert!(extractor.extract("den", "lamp", Region::new(10, 10, 50, 50), Variant::Light));

    let output = layout.objects_root.join("den").join("lamp.png");
    assert_eq!(dimensions(&output), (50, 50));

    let crop = image::open(&output).unwrap().to_rgba8();
    assert_eq!(crop.get_pixel(0, 0), &Rgba([10, 10, 0, 255]));
    assert_eq!(crop.get_pixel(49, 49), &Rgba([59, 59, 0, 255]));
}

#[test]
fn test_clamps_out_of_bounds_region() {
    let dir = TempDir::new().unwrap();
    let layout = AssetLayout::new(dir.path());
    write_room(&layout, "den.png", 100, 100);

    let extractor = RegionExtractor::new(&layout);
    let output = extractor.try_extract("den", "lamp", Region::new(80, 80, 50, 50), Variant::Light).unwrap();

    assert_eq!(dimensions(&output), (50, 50));
    let crop = image::open(&output).unwrap().to_rgba8();
    assert_eq!(crop.get_pixel(0, 0), &Rgba([50, 50, 0, 255]));
}

#[test]
fn test_shrinks_oversized_region() {
    let dir = TempDir::new().unwrap();
    let layout = AssetLayout::new(dir.path());
    write_room(&layout, "den.png", 40, 30);

    let extractor = RegionExtractor::new(&layout);
    let output = extractor.try_extract("den", "rug", Region::new(5, 5, 100, 100), Variant::Light).unwrap();
    assert_eq!(dimensions(&output), (40, 30));
}

#[test]
fn test_dark_variant_naming() {
    let dir = TempDir::new().unwrap();
    let layout = AssetLayout::new(dir.path());
    write_room(&layout, "den-dark.png", 100, 100);

    let extractor = RegionExtractor::new(&layout);
    assert!(extractor.extract("den", "lamp", Region::new(0, 0, 20, 10), Variant::Dark));

    let room_dir = layout.objects_root.join("den");
    assert!(room_dir.join("lamp-dark.png").exists());
    assert!(!room_dir.join("lamp.png").exists());
}

#[test]
fn test_missing_source_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let layout = AssetLayout::new(dir.path());

    let extractor = RegionExtractor::new(&layout);
    assert!(!extractor.extract("attic", "trunk", Region::new(0, 0, 10, 10), Variant::Light));

    match extractor.try_extract("attic", "trunk", Region::new(0, 0, 10, 10), Variant::Light) {
        Err(ExtractError::MissingSourceImage(path)) => assert!(path.ends_with("attic.png")),
        other => panic!("expected missing source, got {:?}", other),
    }
    assert!(!layout.objects_root.join("attic").exists());
}

#[test]
fn test_mislabeled_source_is_decoded_by_content() {
    let dir = TempDir::new().unwrap();
    let layout = AssetLayout::new(dir.path());
    fs::create_dir_all(&layout.rooms_root).unwrap();
    RgbaImage::from_pixel(60, 40, Rgba([200, 100, 50, 255]))
        .save_with_format(layout.rooms_root.join("den.png"), ImageFormat::Bmp)
        .unwrap();

    let extractor = RegionExtractor::new(&layout);
    let output = extractor.try_extract("den", "lamp", Region::new(10, 10, 20, 20), Variant::Light).unwrap();

    assert_eq!(image::ImageFormat::from_path(&output).unwrap(), ImageFormat::Png);
    let crop = image::open(&output).unwrap().to_rgba8();
    assert_eq!(crop.dimensions(), (20, 20));
    assert_eq!(crop.get_pixel(5, 5), &Rgba([200, 100, 50, 255]));
}

#[test]
fn test_corrupt_source_is_recovered() {
    let dir = TempDir::new().unwrap();
    let layout = AssetLayout::new(dir.path());
    fs::create_dir_all(&layout.rooms_root).unwrap();
    fs::write(layout.rooms_root.join("den.png"), b"not a png").unwrap();

    let extractor = RegionExtractor::new(&layout);
    assert!(!extractor.extract("den", "lamp", Region::new(0, 0, 10, 10), Variant::Light));
    assert!(matches!(
        extractor.try_extract("den", "lamp", Region::new(0, 0, 10, 10), Variant::Light),
        Err(ExtractError::ImageError(_))
    ));
}

#[test]
fn test_empty_region_fails() {
    let dir = TempDir::new().unwrap();
    let layout = AssetLayout::new(dir.path());
    write_room(&layout, "den.png", 10, 10);

    let extractor = RegionExtractor::new(&layout);
    assert!(!extractor.extract("den", "nothing", Region::new(2, 2, 0, 5), Variant::Light));
    assert!(!layout.objects_root.join("den").join("nothing.png").exists());
}
