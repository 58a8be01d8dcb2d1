//! Heart geometry: parametric outline, filled mask, stroked overlay.
//!
//! The shape is the classic analytic heart curve
//! `x = 16·sin³t`, `y = 13·cos t − 5·cos 2t − 2·cos 3t − cos 4t`,
//! sampled at a fixed angular step, scaled to the canvas, and y-inverted
//! for top-down pixel coordinates. Coordinates truncate toward zero, so
//! the rasterized outline is symmetric only to within one pixel.

use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use tracing::debug;

/// Canvas size the curve constants were tuned for.
const REFERENCE_SIZE: f64 = 400.0;

/// Gain applied to the raw curve (which spans roughly ±17 units) so the
/// heart fills most of the reference canvas.
const CURVE_GAIN: f64 = 8.0;

/// Sample the heart curve as an open polygon in pixel coordinates.
///
/// Points are emitted in angular order over `0°..360°` (exclusive) and
/// implicitly close back to the first point. Truncation collapses
/// neighboring samples on small canvases; consecutive duplicates are
/// dropped so the result is always a valid open path for polygon filling.
/// Every point lies inside the `size`×`size` canvas. A zero step is
/// treated as 1°.
pub fn heart_outline(size: u32, step_deg: u32) -> Vec<Point<i32>> {
    let step = step_deg.max(1);
    let center = f64::from(size / 2);
    let scale = f64::from(size) / REFERENCE_SIZE * CURVE_GAIN;

    let mut points: Vec<Point<i32>> = Vec::with_capacity((360 / step) as usize);
    let mut angle = 0;
    while angle < 360 {
        let t = f64::from(angle).to_radians();
        let x = 16.0 * t.sin().powi(3);
        let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();

        let px = (center + x * scale) as i32;
        let py = (center - y * scale) as i32;
        let p = Point::new(px, py);
        if points.last() != Some(&p) {
            points.push(p);
        }
        angle += step;
    }
    // The closing edge is implicit; a trailing point equal to the first
    // would make the path degenerate for the polygon filler.
    while points.len() > 1 && points.last() == points.first() {
        points.pop();
    }
    points
}

/// Rasterize the filled heart as an 8-bit mask: 255 inside, 0 outside.
///
/// On canvases too small for the outline to span three distinct pixels
/// the mask comes back empty rather than failing.
pub fn heart_mask(size: u32, step_deg: u32) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    let outline = heart_outline(size, step_deg);
    if outline.len() < 3 {
        debug!(size, points = outline.len(), "Outline degenerate, mask left empty");
        return mask;
    }
    draw_polygon_mut(&mut mask, &outline, Luma([255u8]));
    mask
}

/// Draw the heart outline onto a transparent canvas as a thick stroke.
///
/// Consecutive samples are joined by segments (the last wraps back to
/// the first), each stroked with a round brush. Pixels are written with
/// `color` verbatim rather than blended, so overlapping stamps stay a
/// single uniform coat and the overlay composites cleanly in one pass.
pub fn heart_stroke(size: u32, step_deg: u32, width: u32, color: Rgba<u8>) -> RgbaImage {
    let mut overlay = RgbaImage::new(size, size);
    let outline = heart_outline(size, step_deg);
    if outline.is_empty() {
        return overlay;
    }
    debug!(size, width, points = outline.len(), "Stroking heart outline");
    for i in 0..outline.len() {
        let a = outline[i];
        let b = outline[(i + 1) % outline.len()];
        stroke_segment(&mut overlay, a, b, width, color);
    }
    overlay
}

/// Stamp a round brush along one segment, endpoints included.
fn stroke_segment(
    canvas: &mut RgbaImage,
    a: Point<i32>,
    b: Point<i32>,
    width: u32,
    color: Rgba<u8>,
) {
    let radius = (width / 2) as i32;
    if radius == 0 {
        let start = (a.x as f32, a.y as f32);
        let end = (b.x as f32, b.y as f32);
        draw_line_segment_mut(canvas, start, end, color);
        return;
    }
    let dx = (b.x - a.x) as f32;
    let dy = (b.y - a.y) as f32;
    let length = (dx * dx + dy * dy).sqrt();
    // Spacing of at most one radius keeps consecutive disks overlapping.
    let steps = (length / radius as f32).ceil() as i32 + 1;
    for s in 0..=steps {
        let t = s as f32 / steps as f32;
        let cx = (a.x as f32 + dx * t).round() as i32;
        let cy = (a.y as f32 + dy * t).round() as i32;
        draw_filled_circle_mut(canvas, (cx, cy), radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_stays_inside_canvas() {
        for size in [1, 3, 10, 50, 399, 400, 999] {
            let points = heart_outline(size, 2);
            assert!(!points.is_empty(), "size {size}");
            for p in &points {
                assert!(p.x >= 0 && (p.x as u32) < size, "size {size}, point {p:?}");
                assert!(p.y >= 0 && (p.y as u32) < size, "size {size}, point {p:?}");
            }
        }
    }

    #[test]
    fn outline_traces_known_landmarks() {
        // 90° sampling hits the top dip, both lobe extremes, and the
        // bottom tip, in that angular order.
        let points = heart_outline(400, 90);
        assert_eq!(points.len(), 4);
        let expected = [(200, 160), (328, 168), (200, 336), (72, 168)];
        for (p, (ex, ey)) in points.iter().zip(expected) {
            assert!((p.x - ex).abs() <= 1, "got {p:?}, expected ({ex}, {ey})");
            assert!((p.y - ey).abs() <= 1, "got {p:?}, expected ({ex}, {ey})");
        }
        // Top dip and bottom tip fall on exact integers.
        assert_eq!((points[0].x, points[0].y), (200, 160));
        assert_eq!((points[2].x, points[2].y), (200, 336));
    }

    #[test]
    fn outline_is_symmetric_about_vertical_axis() {
        let size = 400u32;
        let center = (size / 2) as i32;
        let points = heart_outline(size, 2);
        for p in &points {
            let mx = 2 * center - p.x;
            let matched = points
                .iter()
                .any(|q| (q.x - mx).abs() <= 1 && (q.y - p.y).abs() <= 1);
            assert!(matched, "no mirror partner for {p:?}");
        }
    }

    #[test]
    fn outline_has_no_adjacent_duplicates_and_stays_open() {
        for size in [12, 400] {
            let points = heart_outline(size, 2);
            for w in points.windows(2) {
                assert_ne!(w[0], w[1], "size {size}");
            }
            if points.len() > 1 {
                assert_ne!(points.first(), points.last(), "size {size}");
            }
        }
    }

    #[test]
    fn mask_matches_heart_topology() {
        let mask = heart_mask(400, 2);
        assert_eq!(mask.dimensions(), (400, 400));
        // Inside: below the dip, and within each lobe.
        for (x, y) in [(200, 170), (200, 250), (130, 120), (270, 120)] {
            assert_eq!(mask.get_pixel(x, y)[0], 255, "expected inside at ({x}, {y})");
        }
        // Outside: corners and the notch above the dip.
        for (x, y) in [(0, 0), (399, 0), (0, 399), (399, 399), (200, 150)] {
            assert_eq!(mask.get_pixel(x, y)[0], 0, "expected outside at ({x}, {y})");
        }
    }

    #[test]
    fn mask_on_tiny_canvas_does_not_fail() {
        // At 1 px every sample truncates to the same point, so the
        // degenerate outline leaves the mask empty.
        let mask = heart_mask(1, 2);
        assert_eq!(mask.dimensions(), (1, 1));
        assert!(mask.pixels().all(|p| p[0] == 0));

        // A couple of pixels wider the polygon collapses to the whole
        // canvas; it must still rasterize without error.
        let mask = heart_mask(2, 2);
        assert_eq!(mask.dimensions(), (2, 2));
    }

    #[test]
    fn stroke_covers_outline_with_uniform_coat() {
        let color = Rgba([255u8, 20, 147, 180]);
        let overlay = heart_stroke(400, 1, 8, color);
        assert_eq!(overlay.dimensions(), (400, 400));
        for p in heart_outline(400, 1) {
            assert_eq!(overlay.get_pixel(p.x as u32, p.y as u32), &color, "at {p:?}");
        }
        // Replace semantics: every pixel is either untouched or exactly
        // the stroke color, never a self-blend.
        for px in overlay.pixels() {
            assert!(px == &Rgba([0, 0, 0, 0]) || px == &color);
        }
    }

    #[test]
    fn stroke_leaves_corners_transparent() {
        let overlay = heart_stroke(400, 1, 8, Rgba([255, 20, 147, 180]));
        assert_eq!(overlay.get_pixel(0, 0)[3], 0);
        assert_eq!(overlay.get_pixel(399, 399)[3], 0);
    }
}
