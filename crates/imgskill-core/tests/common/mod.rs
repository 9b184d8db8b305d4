use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

/// Encode an RGBA image as PNG. `pixels` is row-major, `width * height` long.
pub fn png_bytes(width: u32, height: u32, pixels: &[[u8; 4]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize);
    let img = RgbaImage::from_fn(width, height, |x, y| Rgba(pixels[(y * width + x) as usize]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).expect("encode png");
    buf.into_inner()
}

/// Encode a uniformly colored RGB image as JPEG.
pub fn jpeg_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Jpeg).expect("encode jpeg");
    buf.into_inner()
}

/// Fully opaque PNG of the given RGB colors.
pub fn opaque_png(width: u32, height: u32, colors: &[[u8; 3]]) -> Vec<u8> {
    let pixels: Vec<[u8; 4]> = colors.iter().map(|c| [c[0], c[1], c[2], 255]).collect();
    png_bytes(width, height, &pixels)
}

pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
