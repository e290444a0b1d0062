#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    scene_path: PathBuf,
    output_path: PathBuf,
    font_size_px: Option<f64>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use signal_drawer::api::SceneDescription;
    use signal_drawer::render::CairoCanvas;

    let _ = signal_drawer::telemetry::init_default_tracing();
    let args = parse_args()?;

    let raw = std::fs::read_to_string(&args.scene_path).map_err(|err| {
        format!(
            "failed to read scene `{}`: {err}",
            args.scene_path.display()
        )
    })?;
    let scene = SceneDescription::from_json(&raw).map_err(|err| err.to_string())?;
    let stack = scene.build().map_err(|err| err.to_string())?;
    if stack.is_empty() {
        return Err("scene has no widgets".to_owned());
    }

    let canvas = stack
        .render_with(|size| {
            let mut canvas = CairoCanvas::new(size.width, size.height)?;
            if let Some(font_size_px) = args.font_size_px {
                canvas.set_font_size(font_size_px)?;
            }
            Ok(canvas)
        })
        .map_err(|err| err.to_string())?;
    canvas
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    let stats = canvas.stats();
    println!(
        "wrote {} ({} widgets, {} pixels, {} labels)",
        args.output_path.display(),
        stack.len(),
        stats.pixels_drawn,
        stats.texts_drawn
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut positional = Vec::new();
    let mut font_size_px = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--font-size" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --font-size".to_owned())?;
                let parsed = value
                    .parse::<f64>()
                    .map_err(|err| format!("invalid --font-size `{value}`: {err}"))?;
                font_size_px = Some(parsed);
            }
            "--help" | "-h" => {
                return Err(usage());
            }
            _ if arg.starts_with("--") => {
                return Err(format!("unknown argument `{arg}`\n{}", usage()));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let [scene_path, output_path]: [PathBuf; 2] = positional
        .try_into()
        .map_err(|_| usage())?;
    Ok(CliArgs {
        scene_path,
        output_path,
        font_size_px,
    })
}

#[cfg(feature = "cairo-backend")]
fn usage() -> String {
    "usage: render_scene_png [--font-size PX] <scene.json> <output.png>".to_owned()
}
