use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::controllers::animation::config::{AnimationConfig, AnimationConfigError};
use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::render_frame::render_frame::{FrameRenderer, FrameRendererError};

#[derive(Debug)]
pub enum AnimationError {
    Config(AnimationConfigError),
    Renderer(FrameRendererError),
    Presenter { index: usize, source: Box<dyn Error> },
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid animation config: {}", err),
            Self::Renderer(err) => write!(f, "renderer error: {}", err),
            Self::Presenter { index, source } => {
                write!(f, "failed to present frame {}: {}", index, source)
            }
        }
    }
}

impl Error for AnimationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Renderer(err) => Some(err),
            Self::Presenter { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<AnimationConfigError> for AnimationError {
    fn from(err: AnimationConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<FrameRendererError> for AnimationError {
    fn from(err: FrameRendererError) -> Self {
        Self::Renderer(err)
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationReport {
    pub frames: usize,
    pub frame_rate: u32,
    pub elapsed: Duration,
}

impl AnimationReport {
    /// Playback length at the configured frame rate.
    #[must_use]
    pub fn playback_duration(&self) -> Duration {
        Duration::from_secs_f64(self.frames as f64 / f64::from(self.frame_rate))
    }
}

/// Renders every viewport along the configured zoom path and hands the
/// frames to a presenter in path order.
pub struct AnimationController<P: FramePresenterPort> {
    presenter: P,
    config: AnimationConfig,
}

impl<P: FramePresenterPort> AnimationController<P> {
    pub fn new(presenter: P, config: AnimationConfig) -> Self {
        Self { presenter, config }
    }

    #[must_use]
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn run(&mut self) -> Result<AnimationReport, AnimationError> {
        let grid = self.config.validate()?;
        let palette = Arc::new(self.config.mandelbrot.build_palette());
        let renderer = FrameRenderer::new(grid, self.config.mandelbrot.max_iterations, palette)?;

        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            frames = self.config.frame_count,
            max_iterations = self.config.mandelbrot.max_iterations,
            "rendering zoom"
        );

        let start = Instant::now();
        let mut frames = 0;

        for (index, viewport) in self.config.path().enumerate() {
            let frame = renderer.render_viewport(viewport)?;

            self.presenter
                .present(index, &frame)
                .map_err(|source| AnimationError::Presenter { index, source })?;
            frames += 1;
        }

        let report = AnimationReport {
            frames,
            frame_rate: self.config.frame_rate,
            elapsed: start.elapsed(),
        };

        tracing::info!(frames = report.frames, elapsed = ?report.elapsed, "zoom finished");

        Ok(report)
    }
}
