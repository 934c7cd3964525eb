use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use img2rgb::{argb_to_rgb565, write_array, PixelSource, DEFAULT_ARRAY_NAME};

/// Synthetic gradient with a transparent line every 16 rows, so both the
/// sentinel and the packing path get exercised.
struct Gradient {
    width: u32,
    height: u32,
}

impl PixelSource for Gradient {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel_at(&self, x: u32, y: u32) -> [u8; 4] {
        let alpha = if y % 16 == 0 { 0 } else { 255 };
        [alpha, x as u8, y as u8, (x ^ y) as u8]
    }
}

fn quantize(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantize");

    let pixels = (0u32..1 << 16)
        .map(|i| [(i >> 8) as u8, i as u8, (i >> 4) as u8, (i >> 12) as u8])
        .collect::<Vec<_>>();

    group.throughput(Throughput::Elements(pixels.len() as u64));
    group.bench_function("argb_to_rgb565", |b| {
        b.iter(|| {
            pixels
                .iter()
                .map(|&p| argb_to_rgb565(p))
                .fold(0u16, |acc, pixel| acc ^ pixel)
        })
    });
}

fn serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let image = Gradient {
        width: 320,
        height: 240,
    };
    let pixel_count = u64::from(image.width()) * u64::from(image.height());

    group.throughput(Throughput::Elements(pixel_count));
    group.bench_function("write_array 320x240", |b| {
        let mut out = Vec::with_capacity(pixel_count as usize * 8);
        b.iter(|| {
            out.clear();
            write_array(&image, DEFAULT_ARRAY_NAME, &mut out)
        })
    });
}

criterion_group!(benches, quantize, serialize);
criterion_main!(benches);
