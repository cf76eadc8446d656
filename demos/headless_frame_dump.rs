use gauge_rs::api::{GaugeConfig, GaugeEngine};
use gauge_rs::core::{Padding, Viewport};
use gauge_rs::render::NullRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GaugeConfig::default()
        .with_padding(Padding::uniform(8.0))
        .with_viewport(Viewport::new(640, 400));
    let mut engine = GaugeEngine::new(NullRenderer::default(), config)?;

    for value in [0, 60, 150, 300] {
        engine.set_current_value(value);
        engine.render()?;
        println!("value={value:>3} needle angle={:>7.2}°", engine.needle_angle());
    }

    if let Some(metrics) = engine.layout_metrics() {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    }

    let renderer = engine.into_renderer();
    if let Some(frame) = renderer.last_frame {
        for text in &frame.texts {
            println!("label `{}` at ({:.1}, {:.1})", text.text, text.x, text.y);
        }
        for polygon in &frame.polygons {
            println!("needle vertices: {:?}", polygon.points);
        }
    }

    Ok(())
}
