use color_models::{
    hls_to_rgb, hsv_to_rgb, rgb_to_hls, rgb_to_hsv, rgb_to_yiq, yiq_to_rgb, ColorConverter,
    ColorModel,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_conversions(c: &mut Criterion) {
    let (r, g, b) = (1.0, 0.84, 0.0);

    c.bench_function("rgb_to_yiq", |bench| {
        bench.iter(|| rgb_to_yiq(black_box(r), black_box(g), black_box(b)))
    });
    c.bench_function("yiq_to_rgb", |bench| {
        bench.iter(|| yiq_to_rgb(black_box(0.7956), black_box(0.3648), black_box(-0.2268)))
    });
    c.bench_function("rgb_to_hls", |bench| {
        bench.iter(|| rgb_to_hls(black_box(r), black_box(g), black_box(b)))
    });
    c.bench_function("hls_to_rgb", |bench| {
        bench.iter(|| hls_to_rgb(black_box(0.14), black_box(0.5), black_box(1.0)))
    });
    c.bench_function("rgb_to_hsv", |bench| {
        bench.iter(|| rgb_to_hsv(black_box(r), black_box(g), black_box(b)))
    });
    c.bench_function("hsv_to_rgb", |bench| {
        bench.iter(|| hsv_to_rgb(black_box(0.14), black_box(1.0), black_box(1.0)))
    });
}

fn benchmark_converter(c: &mut Criterion) {
    let converter = ColorConverter::between(ColorModel::Yiq, ColorModel::Hls);
    c.bench_function("converter_yiq_to_hls", |bench| {
        bench.iter(|| converter.convert(black_box([0.7956, 0.3648, -0.2268])))
    });
}

criterion_group!(benches, benchmark_conversions, benchmark_converter);
criterion_main!(benches);
