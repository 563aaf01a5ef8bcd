use mandelbrot_zoom::{AnimationConfig, AnimationController, PpmFilePresenter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let presenter = PpmFilePresenter::new("output");
    let mut controller = AnimationController::new(presenter, AnimationConfig::default());

    let report = controller.run()?;
    tracing::info!(
        frames = report.frames,
        playback = ?report.playback_duration(),
        "frames written to output/"
    );

    Ok(())
}
