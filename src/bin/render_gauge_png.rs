#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "gauge.png";

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    config_path: Option<PathBuf>,
    output_path: PathBuf,
    width: u32,
    height: u32,
    value: Option<i64>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = gauge_rs::telemetry::init_default_tracing();
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
    use gauge_rs::api::{GaugeConfig, GaugeEngine, RenderOutcome};
    use gauge_rs::core::Viewport;
    use gauge_rs::render::CairoRenderer;

    let args = parse_args()?;
    let mut config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            GaugeConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => GaugeConfig::default(),
    };
    if let Some(value) = args.value {
        config.current_value = value;
    }
    config.viewport = Some(Viewport::new(args.width, args.height));

    let width = i32::try_from(args.width).map_err(|_| "width is too large".to_owned())?;
    let height = i32::try_from(args.height).map_err(|_| "height is too large".to_owned())?;
    let renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    let mut engine = GaugeEngine::new(renderer, config).map_err(|err| err.to_string())?;

    match engine.render().map_err(|err| err.to_string())? {
        RenderOutcome::Drawn => {}
        outcome => return Err(format!("nothing rendered: {outcome:?}")),
    }

    let renderer = engine.into_renderer();
    renderer
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    let stats = renderer.last_stats();
    println!(
        "wrote {} (arc slices={} texts={} circles={} polygons={})",
        args.output_path.display(),
        stats.arc_slices_drawn,
        stats.texts_drawn,
        stats.circles_drawn,
        stats.polygons_drawn
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut width = 480u32;
    let mut height = 432u32;
    let mut value: Option<i64> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let raw = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(raw));
            }
            "--output" => {
                let raw = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(raw);
            }
            "--width" => width = parse_number(args.next(), "--width")?,
            "--height" => height = parse_number(args.next(), "--height")?,
            "--value" => value = Some(parse_number(args.next(), "--value")?),
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument: {arg}"));
            }
        }
    }

    Ok(CliArgs {
        config_path,
        output_path,
        width,
        height,
        value,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_number<T: std::str::FromStr>(raw: Option<String>, flag: &str) -> Result<T, String> {
    let raw = raw.ok_or_else(|| format!("missing value for {flag}"))?;
    raw.parse::<T>()
        .map_err(|_| format!("invalid value for {flag}: `{raw}`"))
}

#[cfg(feature = "cairo-backend")]
fn print_usage() {
    println!(
        "usage: render_gauge_png [--config <gauge.json>] [--value <n>] \
         [--width <px>] [--height <px>] [--output <file.png>]"
    );
}
