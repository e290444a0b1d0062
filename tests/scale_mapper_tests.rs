use signal_drawer::core::{
    DomainRange, LogScaleCalibration, OFF_CANVAS_COLUMN, PlotConfig, ScaleCache, ScaleMapper,
    ScaleMode,
};

fn config() -> PlotConfig {
    PlotConfig::builder()
        .with_plot_width(2000)
        .with_plot_height(300)
        .with_label_space(80)
        .build()
        .expect("valid config")
}

#[test]
fn linear_range_edges_land_on_plot_edges() {
    let range = DomainRange::new(20.0, 20_000.0).expect("range");
    let mapper = ScaleMapper::new(&config(), range, ScaleMode::Linear, 4096);

    assert_eq!(mapper.to_pixel(20.0), 80);
    let right = mapper.to_pixel(20_000.0);
    assert!((right - 2080).abs() <= 1, "right edge was {right}");
}

#[test]
fn pixels_per_unit_follows_the_current_range() {
    let config = config();
    let narrow = DomainRange::new(0.0, 1000.0).expect("range");
    let wide = DomainRange::new(0.0, 4000.0).expect("range");

    let narrow_cache = ScaleCache::compute(&config, narrow, ScaleMode::Linear, 8);
    let wide_cache = ScaleCache::compute(&config, wide, ScaleMode::Linear, 8);

    assert_eq!(narrow_cache.pixels_per_unit, 2.0);
    assert_eq!(wide_cache.pixels_per_unit, 0.5);
    assert_eq!(narrow_cache.widget_width, wide_cache.widget_width);
    assert_eq!(narrow_cache.widget_height, 460);
}

#[test]
fn sentinel_is_exact_for_both_policies() {
    let range = DomainRange::new(100.0, 1000.0).expect("range");
    for mode in [ScaleMode::Linear, ScaleMode::log2()] {
        let mapper = ScaleMapper::new(&config(), range, mode, 512);
        assert_eq!(mapper.to_pixel(99.0), -1000);
        assert_eq!(mapper.to_pixel(1000.5), OFF_CANVAS_COLUMN);
        assert!(!ScaleMapper::is_visible(mapper.to_pixel(-5.0)));
    }
}

#[test]
fn log_policy_warps_the_linear_column() {
    let range = DomainRange::new(0.0, 2000.0).expect("range");
    let mapper = ScaleMapper::new(&config(), range, ScaleMode::log2(), 2048);

    // linear column of 1968 Hz is 1968 + 80 = 2048, log2(2048) = 11
    assert_eq!(mapper.to_pixel(1968.0), 11 * 600 - 2500);
    assert!(mapper.mode().is_logarithmic());
}

#[test]
fn custom_log_calibration_is_honoured() {
    let calibration = LogScaleCalibration {
        scale: 100.0,
        offset: 0.0,
    };
    let range = DomainRange::new(0.0, 2000.0).expect("range");
    let mapper = ScaleMapper::new(&config(), range, ScaleMode::Log2(calibration), 16);

    // linear column of 944 is 1024, log2(1024) = 10
    assert_eq!(mapper.to_pixel(944.0), 1000);
    // log2(16) * 100 + 2 * 80
    assert_eq!(mapper.cache().widget_width, 400 + 160);
}

#[test]
fn log_width_never_goes_below_the_margins() {
    let range = DomainRange::new(0.0, 1.0).expect("range");
    let cache = ScaleCache::compute(&config(), range, ScaleMode::log2(), 1);
    assert_eq!(cache.widget_width, 160);
}
