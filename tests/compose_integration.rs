//! End-to-end checks of the public composition API

use std::io::Cursor;
use std::path::{Path, PathBuf};

use banner_compositor::{
    composition::{Composer, FINAL_WIDTH, LOGO_WIDTH, MAX_FONT_SIZE, PADDING},
    config::FontConfig,
    text::{resolve_font, Typeface},
};
use image::{DynamicImage, GenericImageView, ImageOutputFormat, Rgba, RgbaImage};

/// DejaVu Sans Mono, checked in under tests/fixtures (license alongside)
fn fixture_font() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSansMono.ttf")
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    }));
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageOutputFormat::Png).unwrap();
    cursor.into_inner()
}

fn fallback_composer() -> Composer {
    Composer::new(FontConfig {
        path: PathBuf::from("/nonexistent/Poppins-Regular.ttf"),
        ..FontConfig::default()
    })
}

#[test]
fn missing_font_still_produces_png() {
    let bytes = fallback_composer()
        .compose(&png(600, 300), &png(2400, 1600), "Hello\nWorld", 50)
        .unwrap();

    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), FINAL_WIDTH);
}

#[test]
fn output_height_matches_layout_formula() {
    let composer = fallback_composer();
    let config = FontConfig {
        path: PathBuf::from("/nonexistent/Poppins-Regular.ttf"),
        ..FontConfig::default()
    };

    for (logo, main_image, text, size) in [
        ((600, 300), (2400, 1600), "Hello\nWorld", 50),
        ((123, 457), (640, 480), "tall logo", 20),
        ((1000, 50), (3000, 1000), "a\nb\nc\nd\ne", 80),
        ((300, 300), (1200, 1200), "x", 1),
    ] {
        let bytes = composer
            .compose(&png(logo.0, logo.1), &png(main_image.0, main_image.1), text, size)
            .unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();

        let logo_height = (logo.1 as f64 * (LOGO_WIDTH as f64 / logo.0 as f64)) as u32;
        let main_height = (main_image.1 as f64 * (FINAL_WIDTH as f64 / main_image.0 as f64)) as u32;
        let text_height = resolve_font(&config, size).measure(text, config.line_spacing).height;

        assert_eq!(
            decoded.dimensions(),
            (FINAL_WIDTH, logo_height.max(text_height) + 2 * PADDING + main_height),
            "logo {:?}, main {:?}, {:?} at {}",
            logo,
            main_image,
            text,
            size
        );
    }
}

#[test]
fn reference_example_layout() {
    let banner = fallback_composer()
        .render(&png(600, 300), &png(2400, 1600), "Hello\nWorld", 50)
        .unwrap();

    assert_eq!(banner.layout.logo_width, 300);
    assert_eq!(banner.layout.logo_height, 150);
    assert_eq!(banner.layout.main_width, 1200);
    assert_eq!(banner.layout.main_height, 800);

    let decoded = image::load_from_memory(&banner.png).unwrap();
    assert_eq!(decoded.dimensions(), banner.layout.canvas_size());
}

#[test]
fn truetype_caption_is_measured_and_drawn() {
    let config = FontConfig { path: fixture_font(), ..FontConfig::default() };

    let face = resolve_font(&config, 50);
    assert_eq!(face.name(), "truetype");

    let one = face.measure("Hello", config.line_spacing);
    let two = face.measure("Hello\nWorld", config.line_spacing);
    assert!(one.width > 0 && one.height > 0);
    assert!(two.height > one.height);

    let banner = Composer::new(config)
        .render(&png(600, 300), &png(2400, 1600), "Hello\nWorld", 50)
        .unwrap();
    assert_eq!(banner.layout.text_height, two.height);

    let out = image::load_from_memory(&banner.png).unwrap().to_rgb8();
    let (tx, ty) = banner.layout.text_origin();
    let dark = (0..banner.layout.text_width)
        .flat_map(|x| (0..banner.layout.text_height).map(move |y| (x, y)))
        .filter(|&(x, y)| out.get_pixel(tx as u32 + x, ty as u32 + y)[0] < 64)
        .count();
    assert!(dark > 0, "caption left no ink");
}

#[test]
fn truetype_caption_at_largest_size_is_clipped() {
    let config = FontConfig { path: fixture_font(), ..FontConfig::default() };
    let banner = Composer::new(config)
        .render(&png(300, 100), &png(1200, 100), "Wide caption", MAX_FONT_SIZE)
        .unwrap();

    // the caption runs past the right edge; the canvas stays 1200 wide
    assert!(banner.layout.text_width > FINAL_WIDTH);
    let decoded = image::load_from_memory(&banner.png).unwrap();
    assert_eq!(decoded.dimensions(), banner.layout.canvas_size());
}
