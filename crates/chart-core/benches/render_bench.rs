use anyhow::Result;
use chart_core::{Axis, Chart, Marker, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_xy(n: usize) -> Chart {
    let mut ch = Chart::new();
    let mut data = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64 / n as f64;
        let y = (x * 40.0).sin() * 10.0 + 50.0;
        data.push((x, y));
    }
    ch.x_axis = Axis::new("X", 0.0, 1.0);
    ch.y_axis = Axis::new("Y", 35.0, 65.0);
    ch.grid = true;
    ch.add_series(Series::with_data(data).with_marker(Marker::circle(6.0)));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[100usize, 2_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let ch = build_chart_xy(n);
            let mut opts = RenderOptions::from_figure(10.0, 6.0, 100.0);
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
