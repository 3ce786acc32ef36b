//! Constants used throughout the codec

/// Side length of a transform block
pub const BLOCK_SIZE: usize = 8;

/// Number of coefficients in one block
pub const BLOCK_AREA: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Number of color channels the codec accepts
pub const NUM_CHANNELS: usize = 3;

/// Offset subtracted from luminance before the block transform and added
/// back after the inverse. Chrominance planes carry this offset already
/// from the color conversion.
pub const CENTER_OFFSET: f64 = 128.0;

/// Upper end of the display sample range
pub const MAX_SAMPLE: f64 = 255.0;

/// Default frequency-band cutoff: coefficients with row or column index
/// at or beyond this are discarded
pub const DEFAULT_BAND_CUTOFF: usize = 5;

/// Valid range for the band cutoff parameter
pub const MIN_BAND_CUTOFF: usize = 1;
pub const MAX_BAND_CUTOFF: usize = 8;

/// Default magnitude threshold below which quantized coefficients are dropped
pub const DEFAULT_THRESHOLD: u16 = 2;
