use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::controllers::compute::run_engine;
use crate::controllers::normalize_count::normalize_count;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_points::engine_config::EngineConfig;
use crate::core::actions::plot_points::plane::{DEFAULT_PLOT_SIZE, Plane};
use crate::core::actions::plot_points::plot_points::{PlotPointsError, plot_points};
use crate::core::data::batch::GenerationMode;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;

/// Generates a batch and draws it on both planes, then hands the images to a
/// file presenter.
pub struct PlotController<P: FilePresenterPort> {
    presenter: P,
    plots: Vec<(Plane, PixelBuffer)>,
}

impl<P: FilePresenterPort> PlotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            plots: Vec::new(),
        }
    }

    pub fn generate(
        &mut self,
        mode: GenerationMode,
        requested: i64,
        config: &EngineConfig,
    ) -> Result<(), Box<dyn Error>> {
        let count = normalize_count(requested);
        info!(%mode, requested, normalized = count, "plot request");

        let batch = run_engine(mode, count, config)?;
        let pixel_rect = PixelRect::with_size(DEFAULT_PLOT_SIZE, DEFAULT_PLOT_SIZE)?;

        self.plots = Plane::ALL
            .iter()
            .map(|&plane| {
                plot_points(batch.points(), plane, plane.default_view(), pixel_rect)
                    .map(|buffer| (plane, buffer))
            })
            .collect::<Result<Vec<_>, PlotPointsError>>()?;

        Ok(())
    }

    /// Writes one file per plane into `dir` and returns their paths. Writes
    /// nothing if [`generate`](Self::generate) has not succeeded yet.
    pub fn write(&self, dir: impl AsRef<Path>) -> std::io::Result<Vec<PathBuf>> {
        if !self.plots.is_empty() {
            std::fs::create_dir_all(dir.as_ref())?;
        }

        self.plots
            .iter()
            .map(|(plane, buffer)| -> std::io::Result<PathBuf> {
                let filepath = dir
                    .as_ref()
                    .join(format!("{}.{}", plane.name(), self.presenter.extension()));
                self.presenter.present(buffer, &filepath)?;
                Ok(filepath)
            })
            .collect()
    }
}
