use clap::Parser;
use reelmark_app::cli::Cli;

fn main() -> eframe::Result {
    let cli = Cli::parse();
    reelmark_app::logging::init(cli.verbose);

    let (settings, catalog) = match reelmark_app::startup(&cli) {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Reelmark"),
        vsync: true,
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Reelmark",
        options,
        Box::new(|cc| Ok(Box::new(reelmark_app::ViewerApp::new(cc, settings, catalog)))),
    )
}
