use af_ascii::compositor::Compositor;
use af_core::color::Rgb;
use af_core::config::RenderConfig;
use af_core::frame::{Grid, PixelCell};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn gradient_grid(width: u32, height: u32) -> Grid {
    let cells = (0..width * height)
        .map(|i| {
            let v = (i % 256) as u8;
            PixelCell::from_rgb(Rgb::new(v, 255 - v, v / 2))
        })
        .collect();
    Grid::new(width, height, cells).unwrap_or_else(|| unreachable!())
}

fn bench_compositor(c: &mut Criterion) {
    let grid = gradient_grid(200, 60);

    let plain = Compositor::new(&RenderConfig::default()).unwrap_or_else(|e| panic!("{e}"));
    c.bench_function("render_200x60_plain", |b| {
        b.iter(|| plain.render(black_box(&grid)));
    });

    let colored = Compositor::new(&RenderConfig {
        color_enabled: true,
        ..RenderConfig::default()
    })
    .unwrap_or_else(|e| panic!("{e}"));
    c.bench_function("render_200x60_truecolor", |b| {
        b.iter(|| colored.render(black_box(&grid)));
    });
}

criterion_group!(benches, bench_compositor);
criterion_main!(benches);
