use crate::{quantize::argb_to_rgb565, source::PixelSource};
use itertools::Itertools;
use snafu::{ResultExt, Snafu};
use std::io::Write;

/// Array name used when the caller does not provide one.
pub const DEFAULT_ARRAY_NAME: &str = "rgb_array";

#[derive(Debug, Snafu)]
pub enum SerializeError {
    WriteIo { source: std::io::Error },
}

/// Writes the image as a C array declaration of RGB565 values.
///
/// The declaration line `const uint16_t <name>[<width * height>] = {` is
/// followed by one tab-indented line per image row, each a `", "`-separated
/// run of `0x`-prefixed lowercase hex values. The last element is directly
/// followed by `};`, and the file ends with a newline:
///
/// ```c
/// const uint16_t rgb_array[4] = {
///     0xf800, 0x07e0,
///     0x001f, 0xffff};
/// ```
///
/// Rows are streamed to the writer one at a time; if a write fails
/// mid-stream, whatever was already written stays behind as a truncated
/// literal.
pub fn write_array<W: Write>(
    image: &impl PixelSource,
    array_name: &str,
    mut w: W,
) -> Result<(), SerializeError> {
    let pixel_count = u64::from(image.width()) * u64::from(image.height());

    write!(w, "const uint16_t {array_name}[{pixel_count}] = {{").context(WriteIoSnafu)?;

    for y in 0..image.height() {
        if y > 0 {
            write!(w, ",").context(WriteIoSnafu)?;
        }
        write!(w, "\n\t{}", row_literal(image, y)).context(WriteIoSnafu)?;
    }

    writeln!(w, "}};").context(WriteIoSnafu)
}

fn row_literal(image: &impl PixelSource, y: u32) -> String {
    (0..image.width())
        .map(|x| format!("0x{:04x}", argb_to_rgb565(image.pixel_at(x, y))))
        .join(", ")
}
