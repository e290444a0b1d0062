use signal_drawer::api::{DataSeries, SpectrumWidget, WaveWidget, WidgetStack};
use signal_drawer::core::{DomainRange, PlotConfig, ScaleMapper, ScaleMode};
use signal_drawer::render::{Color, PixelBuffer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

fn bench_log_scale_to_pixel(c: &mut Criterion) {
    let config = PlotConfig::default();
    let range = DomainRange::new(20.0, 20_000.0).expect("valid range");
    let mapper = ScaleMapper::new(&config, range, ScaleMode::log2(), 4096);

    c.bench_function("log_scale_to_pixel", |b| {
        b.iter(|| {
            let _ = mapper.to_pixel(black_box(4_321.123));
        })
    });
}

fn bench_stack_draw_4k(c: &mut Criterion) {
    let config = PlotConfig::default();
    let frequencies: Vec<f64> = (0..4096).map(|i| 20.0 + f64::from(i) * 4.9).collect();
    let amplitudes: Vec<f64> = (0..4096).map(|i| (f64::from(i) * 0.01).sin().abs()).collect();
    let times: Vec<Duration> = (0..4096u64).map(Duration::from_micros).collect();
    let samples: Vec<f64> = (0..4096).map(|i| (f64::from(i) * 0.05).sin()).collect();

    let spectrum = SpectrumWidget::new(config, frequencies, "amplitude")
        .with_series(DataSeries::line(amplitudes, Color::GREEN))
        .expect("valid series");
    let wave = WaveWidget::new(config, &times, "signal")
        .with_series(DataSeries::points(samples, Color::YELLOW))
        .expect("valid series");
    let stack = WidgetStack::new().with_widget(spectrum).with_widget(wave);
    let size = stack.measure();

    c.bench_function("stack_draw_4k", |b| {
        b.iter(|| {
            let mut buffer =
                PixelBuffer::with_size(size.width, size.height, Color::BLACK).expect("buffer");
            stack.draw(black_box(&mut buffer));
        })
    });
}

criterion_group!(benches, bench_log_scale_to_pixel, bench_stack_draw_4k);
criterion_main!(benches);
