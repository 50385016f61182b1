use crate::{
    error::{IconError, IconResult},
    manifest::IconManifest,
    paint, png_encoder,
};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Sizes generated when none are requested
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Output directory used when none is requested
pub const DEFAULT_OUTPUT_DIR: &str = "assets/icons";

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub manifest: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            manifest: false,
        }
    }
}

/// What happened to each requested size
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<(u32, PathBuf)>,
    pub failed: Vec<(u32, String)>,
    /// Path of `icons.json` when it was requested and written
    pub manifest: Option<PathBuf>,
    /// Set when the manifest was requested but couldn't be written
    pub manifest_error: Option<String>,
}

impl GenerationReport {
    pub fn attempted(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.manifest_error.is_none()
    }
}

/// `icon16.png` for size 16
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Draws the icon at `size` and returns the encoded PNG bytes
pub fn render_icon(size: u32) -> IconResult<Vec<u8>> {
    let grid = paint::synthesize(size);
    png_encoder::encode_png(size, size, &grid)
}

/// Renders one icon into `out_dir`, creating the directory if needed
pub fn generate_icon(size: u32, out_dir: &Path) -> IconResult<PathBuf> {
    std::fs::create_dir_all(out_dir).map_err(|error| IconError::CreateDir {
        path: out_dir.to_path_buf(),
        error,
    })?;

    let png = render_icon(size)?;
    let output_path = out_dir.join(icon_file_name(size));
    std::fs::write(&output_path, &png).map_err(|error| IconError::Write {
        path: output_path.clone(),
        error,
    })?;
    debug!("Wrote {} bytes to {}", png.len(), output_path.display());

    Ok(output_path)
}

/// Generates every requested size.
///
/// A failure for one size is reported and recorded but never stops the
/// remaining sizes from being attempted.
pub fn generate_icons(args: &Args) -> GenerationReport {
    let mut report = GenerationReport::default();

    for size in unique_sizes(&args.sizes) {
        println!("Generating {size}x{size} icon...");

        match generate_icon(size, &args.output) {
            Ok(path) => {
                println!("✓ Created: {}", path.display());
                report.written.push((size, path));
            }
            Err(e) => {
                eprintln!("✗ Error creating {size}x{size} icon: {e}");
                report.failed.push((size, e.to_string()));
            }
        }
    }

    if args.manifest {
        write_manifest(args, &mut report);
    }

    println!(
        "\nIcon generation complete! ({}/{} icons generated)",
        report.written.len(),
        report.attempted()
    );

    report
}

fn write_manifest(args: &Args, report: &mut GenerationReport) {
    let mut manifest = IconManifest::new();
    for (size, path) in &report.written {
        manifest.add_icon(*size, path);
    }
    if manifest.is_empty() {
        warn!("No icons were written, icons.json will be empty");
    }

    match manifest.write_to_dir(&args.output) {
        Ok(path) => {
            println!("✓ Created: {}", path.display());
            report.manifest = Some(path);
        }
        Err(e) => {
            eprintln!("✗ Error writing icon manifest: {e}");
            report.manifest_error = Some(e.to_string());
        }
    }
}

/// Drops repeated sizes, keeping the first occurrence
fn unique_sizes(sizes: &[u32]) -> Vec<u32> {
    let mut unique = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if unique.contains(&size) {
            warn!("Size {size} requested more than once, generating it once");
        } else {
            unique.push(size);
        }
    }
    unique
}
