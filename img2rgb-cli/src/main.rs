use argh::FromArgs;
use image::RgbaImage;
use img2rgb::{write_array, PixelSource, DEFAULT_ARRAY_NAME};
use std::{
    fs::File,
    io::{BufWriter, Write},
};

/// Converts an image into a C source array of RGB565 values.
#[derive(FromArgs)]
struct Cli {
    /// the input image. May be a PNG, JPG, BMP, or TIFF.
    #[argh(positional)]
    input: String,
    /// the generated source file, overwritten if it exists
    #[argh(positional)]
    output: String,
    /// name of the generated array variable (default: rgb_array)
    #[argh(positional)]
    variable_name: Option<String>,
}

/// Decoded image in RGBA memory order, handed out as ARGB samples.
struct DecodedImage(RgbaImage);

impl PixelSource for DecodedImage {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn pixel_at(&self, x: u32, y: u32) -> [u8; 4] {
        let image::Rgba([r, g, b, a]) = *self.0.get_pixel(x, y);
        [a, r, g, b]
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        input,
        output,
        variable_name,
    } = argh::from_env();

    let image = image::io::Reader::open(&input)?
        .with_guessed_format()?
        .decode()?;

    let width = image.width();
    let height = image.height();

    println!("Converting {width}x{height} image");

    let image = DecodedImage(image.into_rgba8());
    let array_name = variable_name.as_deref().unwrap_or(DEFAULT_ARRAY_NAME);

    let mut w = BufWriter::new(File::create(&output)?);
    write_array(&image, array_name, &mut w)?;
    w.flush()?;

    println!(
        "Written `{array_name}[{}]` to `{output}`",
        u64::from(width) * u64::from(height)
    );

    Ok(())
}
