//! Converts raster images into C source arrays of RGB565 pixel values, for
//! embedding image data directly into firmware or display-driver code.
//!
//! Decoding the image file is left to the caller: anything that can report
//! its dimensions and hand out per-pixel ARGB samples (see
//! [`PixelSource`](source::PixelSource)) can be serialized. The bundled CLI
//! wires the `image` crate into that seam.
//!
//! # Pixel format
//!
//! Every pixel is quantized to a 16-bit RGB565 value:
//!
//! ```plain
//! .- RGB565 --------------------------------------------.
//! | 15 14 13 12 11 | 10  9  8  7  6  5 |  4  3  2  1  0 |
//! |----------------+-------------------+----------------|
//! |      red       |       green       |      blue      |
//! `-----------------------------------------------------`
//! ```
//!
//! Channels are truncated to their target width, never rounded, so output is
//! bit-identical across runs and platforms. Fully transparent pixels (alpha
//! of zero) collapse to the reserved code `0xf81f`
//! ([`TRANSPARENT`](quantize::TRANSPARENT)) instead of a quantized color.
//!
//! # Generated output
//!
//! [`write_array`](serialize::write_array) emits one array declaration per
//! image, pixels in row-major order with one image row per line:
//!
//! ```c
//! const uint16_t rgb_array[6] = {
//!     0xf800, 0x07e0, 0x001f,
//!     0xffff, 0x0000, 0xf81f};
//! ```

pub mod quantize;
pub mod serialize;
pub mod source;

pub use quantize::{argb_to_rgb565, TRANSPARENT};
pub use serialize::{write_array, SerializeError, DEFAULT_ARRAY_NAME};
pub use source::PixelSource;
