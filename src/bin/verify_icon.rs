use anyhow::{Context, Result};
use image::io::Reader as ImageReader;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/icons/icon128.png".to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .decode()
        .with_context(|| format!("Failed to decode {path}"))?;

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    let corner = rgba_img.get_pixel(0, 0);
    let center = rgba_img.get_pixel(width / 2, height / 2);

    println!("\nCorner pixel (0, 0):");
    println!("  RGBA: [{}, {}, {}, {}]", corner[0], corner[1], corner[2], corner[3]);
    println!("Center pixel ({}, {}):", width / 2, height / 2);
    println!("  RGBA: [{}, {}, {}, {}]", center[0], center[1], center[2], center[3]);

    let mut problems = Vec::new();
    if width != height {
        problems.push("icon is not square");
    }
    if corner[3] != 0 {
        problems.push("corner is not transparent");
    }
    if center[3] != 255 {
        problems.push("center is not opaque");
    }

    if problems.is_empty() {
        println!("\n✓ Icon looks right!");
        Ok(())
    } else {
        anyhow::bail!("⚠ Icon check failed: {}", problems.join(", "))
    }
}
