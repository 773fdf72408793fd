use criterion::{Criterion, black_box, criterion_group, criterion_main};
use imf_core::Image;
use imf_pyr::{LaplacianPyramid, pyr_down};

fn test_image(width: usize, height: usize) -> Image<f32> {
    Image::from_fn(width, height, |x, y| ((x * 3 + y * 5) % 251) as f32)
}

fn bench_pyr_down(c: &mut Criterion) {
    let img = test_image(512, 512);
    let view = img.as_view();

    c.bench_function("pyr_down_512x512", |b| {
        b.iter(|| {
            let out = pyr_down(black_box(&view));
            black_box(out);
        });
    });
}

fn bench_laplacian_roundtrip(c: &mut Criterion) {
    let img = test_image(512, 512);
    let view = img.as_view();

    c.bench_function("laplacian_build_collapse_5_levels_512x512", |b| {
        b.iter(|| {
            let pyr = LaplacianPyramid::build(black_box(&view), 5).expect("build");
            black_box(pyr.collapse().expect("collapse"));
        });
    });
}

criterion_group!(benches, bench_pyr_down, bench_laplacian_roundtrip);
criterion_main!(benches);
