//! Procedural pixel synthesis for the speed-control icon
//!
//! The icon is described as an ordered list of [`PaintRule`]s. Every pixel is
//! tested against the rules and takes the colour of the *last* rule that
//! matches, so later rules paint over earlier ones:
//!
//! 1. transparent background
//! 2. blue ring around the disk
//! 3. purple radial gradient filling the disk
//! 4. white play triangle
//! 5. orange speed lines (icons of 32px and up)
//!
//! All geometry is evaluated in `f64` so boundary pixels land exactly where
//! the comparisons put them. Changing a `<` to a `<=` here changes the icon.

use crate::pixel::{Pixel, PixelGrid};
use log::debug;

/// Disk radius as a fraction of the icon size
const RADIUS_FACTOR: f64 = 0.44;
/// Width of the ring drawn just outside the disk, in pixels
const BORDER_WIDTH: f64 = 2.0;
/// Gradient factor beyond which the disk is a flat colour
const GRADIENT_FLAT_FROM: f64 = 0.7;
/// Speed lines are only drawn on icons at least this large
const SPEED_LINE_MIN_SIZE: u32 = 32;
/// Vertical centres of the speed lines as fractions of the icon size
const SPEED_LINE_ROWS: [f64; 3] = [0.3, 0.4, 0.5];
/// Half-height of a speed line in pixels (exclusive)
const SPEED_LINE_HALF_HEIGHT: f64 = 2.0;

pub const BORDER_COLOR: Pixel = Pixel::opaque(90, 103, 216);
pub const GRADIENT_START: Pixel = Pixel::opaque(102, 126, 234);
pub const GRADIENT_END: Pixel = Pixel::opaque(118, 75, 162);
pub const PLAY_COLOR: Pixel = Pixel::opaque(255, 255, 255);
pub const SPEED_LINE_COLOR: Pixel = Pixel::opaque(255, 107, 53);

/// Per-pixel geometry shared by every rule
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    /// Signed offset from the centre column
    pub dx: i64,
    /// Signed offset from the centre row
    pub dy: i64,
    /// Euclidean distance from the centre
    pub distance: f64,
    pub radius: f64,
}

impl Probe {
    pub fn new(x: u32, y: u32, size: u32) -> Self {
        // Integer centre: an even-sized icon is centred on the pixel right of
        // and below the geometric middle.
        let center = i64::from(size / 2);
        let dx = i64::from(x) - center;
        let dy = i64::from(y) - center;
        let distance = ((dx * dx + dy * dy) as f64).sqrt();

        Self {
            x,
            y,
            size,
            dx,
            dy,
            distance,
            radius: f64::from(size) * RADIUS_FACTOR,
        }
    }

    fn size_f(&self) -> f64 {
        f64::from(self.size)
    }

    pub fn in_disk(&self) -> bool {
        self.distance <= self.radius
    }

    /// Normalised distance from the centre, `0.0` at the centre and `1.0` on the rim
    pub fn gradient_factor(&self) -> f64 {
        self.distance / self.radius
    }
}

/// A predicate over a pixel position plus the colour it paints
pub struct PaintRule {
    pub name: &'static str,
    pub applies: fn(&Probe) -> bool,
    pub paint: fn(&Probe) -> Pixel,
}

impl std::fmt::Debug for PaintRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintRule").field("name", &self.name).finish()
    }
}

/// The icon's rules in priority order, lowest first
pub const ICON_RULES: &[PaintRule] = &[
    PaintRule {
        name: "background",
        applies: |_| true,
        paint: |_| Pixel::TRANSPARENT_WHITE,
    },
    PaintRule {
        name: "border",
        applies: |p| p.distance <= p.radius + BORDER_WIDTH,
        paint: |_| BORDER_COLOR,
    },
    PaintRule {
        name: "disk",
        applies: Probe::in_disk,
        paint: disk_gradient,
    },
    PaintRule {
        name: "play-triangle",
        applies: |p| p.in_disk() && in_play_triangle(p),
        paint: |_| PLAY_COLOR,
    },
    PaintRule {
        name: "speed-lines",
        applies: |p| p.in_disk() && on_speed_line(p),
        paint: |_| SPEED_LINE_COLOR,
    },
];

/// Renders the speed-control icon as a `size x size` grid
pub fn synthesize(size: u32) -> PixelGrid {
    debug!(
        "Synthesizing {size}x{size} icon from {} paint rules",
        ICON_RULES.len()
    );
    paint_with(ICON_RULES, size)
}

/// Renders a `size x size` grid where each pixel takes the colour of the last
/// matching rule, or transparent white if none match
pub fn paint_with(rules: &[PaintRule], size: u32) -> PixelGrid {
    PixelGrid::from_fn(size, size, |x, y| {
        let probe = Probe::new(x, y, size);
        rules
            .iter()
            .rev()
            .find(|rule| (rule.applies)(&probe))
            .map_or(Pixel::TRANSPARENT_WHITE, |rule| (rule.paint)(&probe))
    })
}

fn disk_gradient(probe: &Probe) -> Pixel {
    let factor = probe.gradient_factor();
    if factor >= GRADIENT_FLAT_FROM {
        return GRADIENT_END;
    }

    // The raw factor is used against endpoints defined for 0..1, so the inner
    // band stops at ~70% of the way to GRADIENT_END. The icon relies on it.
    Pixel::opaque(
        lerp_channel(GRADIENT_START.r, GRADIENT_END.r, factor),
        lerp_channel(GRADIENT_START.g, GRADIENT_END.g, factor),
        lerp_channel(GRADIENT_START.b, GRADIENT_END.b, factor),
    )
}

/// Linear interpolation truncated toward zero
fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    let start = f64::from(start);
    (start + (f64::from(end) - start) * t) as u8
}

/// Left-loaded wedge pointing right, centred slightly left of the middle
fn in_play_triangle(probe: &Probe) -> bool {
    let size = probe.size_f();
    let dx = probe.dx as f64;
    let dy = probe.dy as f64;

    if dx.abs() >= size * 0.25 || dy.abs() >= size * 0.25 {
        return false;
    }
    if dx <= -size * 0.15 || dx >= size * 0.2 {
        return false;
    }

    let triangle_width = size * 0.3 - dy.abs() * 0.8;
    dx < triangle_width * 0.5
}

fn on_speed_line(probe: &Probe) -> bool {
    if probe.size < SPEED_LINE_MIN_SIZE {
        return false;
    }

    let size = probe.size_f();
    let x = f64::from(probe.x);
    let y = f64::from(probe.y);
    let start = size * 0.7;
    let end = start + size * 0.15;

    x >= start
        && x <= end
        && SPEED_LINE_ROWS
            .iter()
            .any(|row| (y - size * row).abs() < SPEED_LINE_HALF_HEIGHT)
}
