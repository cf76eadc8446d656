use gauge_rs::api::{GaugeConfig, GaugeEngine};
use gauge_rs::core::Padding;
use gauge_rs::platform_gtk::GtkGaugeAdapter;
use gauge_rs::render::CairoRenderer;
use gtk4 as gtk;
use gtk4::prelude::*;

fn main() {
    let _ = gauge_rs::telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.gauge.demos.gtk_speedometer")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let config = GaugeConfig::default().with_padding(Padding::uniform(16.0));
    let max_value = config.max_value;
    let engine = match CairoRenderer::new(1, 1)
        .and_then(|renderer| GaugeEngine::new(renderer, config))
    {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to initialize gauge engine: {err}");
            return;
        }
    };

    let adapter = std::rc::Rc::new(GtkGaugeAdapter::new(engine));
    if let Err(err) = adapter
        .engine()
        .borrow_mut()
        .renderer_mut()
        .set_clear_color(None)
    {
        eprintln!("failed to configure renderer: {err}");
        return;
    }
    adapter.request_height_for_width(480);

    let slider = gtk::Scale::with_range(gtk::Orientation::Horizontal, 0.0, max_value as f64, 1.0);
    slider.set_hexpand(true);
    slider.connect_value_changed({
        let adapter = std::rc::Rc::clone(&adapter);
        move |slider| adapter.set_current_value(slider.value().round() as i64)
    });

    let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
    root.set_margin_top(12);
    root.set_margin_bottom(12);
    root.set_margin_start(12);
    root.set_margin_end(12);
    root.append(adapter.drawing_area());
    root.append(&slider);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("gauge-rs speedometer")
        .default_width(520)
        .default_height(560)
        .child(&root)
        .build();
    window.present();
}
