//! RGB <-> YCbCr conversion (BT.601-style, not gamma-corrected)

use dctpack_core::consts::MAX_SAMPLE;
use dctpack_core::{PackError, PackResult, PixelBuffer, Plane};

/// Convert one RGB pixel (display range [0, 255]) to YCbCr.
/// Chrominance comes out offset by +128.
pub fn rgb_to_ycbcr(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = -0.1687 * r - 0.3313 * g + 0.5 * b + 128.0;
    let cr = 0.5 * r - 0.4187 * g - 0.0813 * b + 128.0;
    (y, cb, cr)
}

/// Convert one YCbCr pixel back to RGB, clamped to [0, 255].
/// Out-of-range values from rounding or aggressive quantization are
/// clipped, not wrapped.
pub fn ycbcr_to_rgb(y: f64, cb: f64, cr: f64) -> (f64, f64, f64) {
    let r = y + 1.402 * (cr - 128.0);
    let g = y - 0.34414 * (cb - 128.0) - 0.71414 * (cr - 128.0);
    let b = y + 1.772 * (cb - 128.0);
    (
        r.clamp(0.0, MAX_SAMPLE),
        g.clamp(0.0, MAX_SAMPLE),
        b.clamp(0.0, MAX_SAMPLE),
    )
}

/// Split a pixel buffer into Y, Cb, Cr planes
pub fn split_ycbcr(pixels: &PixelBuffer) -> (Plane, Plane, Plane) {
    let rows = pixels.height() as usize;
    let cols = pixels.width() as usize;
    let mut y_plane = Plane::zeros(rows, cols);
    let mut cb_plane = Plane::zeros(rows, cols);
    let mut cr_plane = Plane::zeros(rows, cols);

    for row in 0..rows {
        for col in 0..cols {
            let [r, g, b] = pixels.get(col, row);
            let (y, cb, cr) = rgb_to_ycbcr(r, g, b);
            y_plane.set(row, col, y);
            cb_plane.set(row, col, cb);
            cr_plane.set(row, col, cr);
        }
    }

    (y_plane, cb_plane, cr_plane)
}

/// Merge Y, Cb, Cr planes back into an RGB pixel buffer.
/// The three planes must share one shape.
pub fn merge_ycbcr(y: &Plane, cb: &Plane, cr: &Plane) -> PackResult<PixelBuffer> {
    if y.rows != cb.rows
        || y.cols != cb.cols
        || y.rows != cr.rows
        || y.cols != cr.cols
    {
        return Err(PackError::PlaneShapeMismatch(format!(
            "channel planes disagree: Y {}x{}, Cb {}x{}, Cr {}x{}",
            y.rows, y.cols, cb.rows, cb.cols, cr.rows, cr.cols
        )));
    }

    let mut pixels = PixelBuffer::new(dctpack_core::Dimensions::new(
        y.cols as u32,
        y.rows as u32,
    ))?;

    for row in 0..y.rows {
        for col in 0..y.cols {
            let (r, g, b) = ycbcr_to_rgb(y.get(row, col), cb.get(row, col), cr.get(row, col));
            pixels.set(col, row, [r, g, b]);
        }
    }

    Ok(pixels)
}
