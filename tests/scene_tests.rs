use signal_drawer::DrawerError;
use signal_drawer::api::{SceneDescription, WidgetDescription};
use signal_drawer::core::ScaleMode;
use signal_drawer::render::{Color, RecordingCanvas};

const SCENE: &str = r#"{
  "config": { "plot_height": 200, "plot_width": 1000, "label_space": 40 },
  "widgets": [
    {
      "kind": "spectrum",
      "title": "Amplitude",
      "frequencies": [100.0, 200.0, 400.0],
      "series": [
        {
          "values": [1.0, 3.0, 2.0],
          "style": "Line",
          "color": { "red": 0, "green": 128, "blue": 0, "alpha": 255 }
        }
      ],
      "marks": [
        { "frequency_hz": 440.0, "color": { "red": 128, "green": 0, "blue": 0, "alpha": 255 } }
      ],
      "start_hz": 50.0,
      "end_hz": 800.0,
      "a4_hz": 432.0
    },
    {
      "kind": "wave",
      "title": "Signal",
      "times_ns": [0, 1000000, 2000000],
      "series": [
        {
          "values": [0.0, 1.0, -1.0],
          "style": "Points",
          "color": { "red": 255, "green": 255, "blue": 0, "alpha": 255 }
        }
      ]
    }
  ]
}"#;

#[test]
fn scene_json_builds_a_stack() {
    let scene = SceneDescription::from_json(SCENE).expect("scene");
    assert_eq!(scene.config.label_space(), 40);
    assert_eq!(scene.config.tick_unit(), 5);

    let stack = scene.build().expect("stack");
    assert_eq!(stack.len(), 2);
    // each widget is 200 + 2 * 40 tall and 1000 + 2 * 40 wide
    assert_eq!(stack.total_height(), 560);
    assert_eq!(stack.total_width(), 1080);

    let mut canvas = RecordingCanvas::new();
    stack.draw(&mut canvas);
    assert!(canvas.find_text("Amplitude").is_some());
    assert!(canvas.find_text("Signal").is_some());
    assert!(canvas.find_text("50.000000Hz").is_some());
    assert!(canvas.find_text("800.000000Hz").is_some());
    assert!(canvas.pixels().any(|(_, color)| color == Color::YELLOW));
    assert!(canvas.pixels().any(|(_, color)| color == Color::RED));
}

#[test]
fn scene_round_trips_through_pretty_json() {
    let scene = SceneDescription::from_json(SCENE).expect("scene");
    let encoded = scene.to_json_pretty().expect("encode");
    let decoded = SceneDescription::from_json(&encoded).expect("decode");
    assert_eq!(decoded, scene);
}

#[test]
fn config_defaults_apply_when_omitted() {
    let scene = SceneDescription::from_json(
        r#"{ "widgets": [ { "kind": "spectrum", "frequencies": [1000.0], "scale_mode": { "Log2": { "scale": 600.0, "offset": 2500.0 } } } ] }"#,
    )
    .expect("scene");
    assert_eq!(scene.config.plot_width(), 2000);

    match &scene.widgets[0] {
        WidgetDescription::Spectrum(spectrum) => {
            assert_eq!(spectrum.scale_mode, ScaleMode::log2());
        }
        WidgetDescription::Wave(_) => panic!("expected a spectrum"),
    }
}

#[test]
fn empty_axes_are_reported_as_errors() {
    let scene =
        SceneDescription::from_json(r#"{ "widgets": [ { "kind": "wave", "times_ns": [] } ] }"#)
            .expect("scene");
    let err = scene.build().expect_err("empty time axis");
    assert!(matches!(err, DrawerError::InvalidData(ref message) if message.contains("widget 0")));
}

#[test]
fn mismatched_series_is_an_error() {
    let scene = SceneDescription::from_json(
        r#"{ "widgets": [ { "kind": "spectrum", "frequencies": [1.0, 2.0],
             "series": [ { "values": [1.0], "style": "Line",
                           "color": { "red": 0, "green": 0, "blue": 0, "alpha": 255 } } ] } ] }"#,
    )
    .expect("scene");
    assert!(scene.build().is_err());
}

#[test]
fn rejected_bound_keeps_the_last_valid_value() {
    let scene = SceneDescription::from_json(
        r#"{ "widgets": [ { "kind": "spectrum", "frequencies": [1.0], "start_hz": 900.0, "end_hz": 100.0 } ] }"#,
    )
    .expect("scene");
    let stack = scene.build().expect("stack");

    // the end is accepted, the start would invert the range
    let mut canvas = RecordingCanvas::new();
    stack.draw(&mut canvas);
    assert!(canvas.find_text("20.000000Hz").is_some());
    assert!(canvas.find_text("100.000000Hz").is_some());
    assert!(canvas.find_text("900.000000Hz").is_none());
}

#[test]
fn invalid_config_is_rejected_while_parsing() {
    let err = SceneDescription::from_json(r#"{ "config": { "plot_width": 0 }, "widgets": [] }"#)
        .expect_err("zero width");
    assert!(matches!(err, DrawerError::InvalidData(_)));
}

#[test]
fn overflowing_layout_is_rejected_while_parsing() {
    let err = SceneDescription::from_json(
        r#"{ "config": { "plot_height": 2147483600, "label_space": 80 }, "widgets": [] }"#,
    )
    .expect_err("height overflows the widget extent");
    assert!(matches!(err, DrawerError::InvalidData(ref message) if message.contains("exceeds")));
}

#[test]
fn zero_label_space_is_rejected_while_parsing() {
    assert!(
        SceneDescription::from_json(r#"{ "config": { "label_space": 0 }, "widgets": [] }"#)
            .is_err()
    );
}

#[test]
fn unknown_widget_kind_is_rejected() {
    assert!(SceneDescription::from_json(r#"{ "widgets": [ { "kind": "sonogram" } ] }"#).is_err());
}
