use criterion::{criterion_group, criterion_main, Criterion};
use imager::{decode, encode, Image, Pixel};
use std::hint::black_box;

fn generate_image(len: usize) -> Image {
    let pixels = (0..len)
        .map(|i| Pixel::new((i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8))
        .collect();
    Image::new(pixels, len).expect("single row image")
}

fn bench_encode_short(c: &mut Criterion) {
    let image = generate_image(64 * 64);

    c.bench_function("encode_short_64x64", |b| {
        b.iter(|| {
            let mut image = image.copy();
            assert!(encode(black_box(&mut image), "meet me at the old oak tree"));
            image
        })
    });
}

fn bench_encode_full(c: &mut Criterion) {
    let image = generate_image(200 * 200);
    let text = "lorem ipsum ".repeat(3_000);

    c.bench_function("encode_36k_200x200", |b| {
        b.iter(|| {
            let mut image = image.copy();
            assert!(encode(black_box(&mut image), &text));
            image
        })
    });
}

fn bench_decode_full(c: &mut Criterion) {
    let mut image = generate_image(200 * 200);
    let text = "lorem ipsum ".repeat(3_000);
    assert!(encode(&mut image, &text));

    c.bench_function("decode_36k_200x200", |b| {
        b.iter(|| {
            let result = decode(black_box(&image));
            assert!(result.is_some());
            result
        })
    });
}

criterion_group!(
    benches,
    bench_encode_short,
    bench_encode_full,
    bench_decode_full,
);
criterion_main!(benches);
