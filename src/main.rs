use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use conformal_sampler::{EngineConfig, GenerationMode, PlotController, PpmFilePresenter};

#[derive(Debug, Parser)]
#[command(name = "conformal-sampler", version, about = "Samples points through w = i * (iz / (iz + 1))^(1/4)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a batch and print it as JSON
    Compute {
        #[arg(long, value_enum, default_value_t = Mode::Sequential)]
        mode: Mode,
        /// Points to generate; non-positive means the default, others are clamped
        #[arg(long, default_value_t = 5_000, allow_negative_numbers = true)]
        count: i64,
        #[arg(long)]
        pretty: bool,
    },
    /// Map one point and print the image as JSON
    MapPoint {
        #[arg(long, allow_negative_numbers = true)]
        re: f64,
        #[arg(long, allow_negative_numbers = true)]
        im: f64,
    },
    /// Generate a batch and write z-plane and w-plane scatter plots as PPM
    Plot {
        #[arg(long, value_enum, default_value_t = Mode::Parallel)]
        mode: Mode,
        #[arg(long, default_value_t = 50_000, allow_negative_numbers = true)]
        count: i64,
        #[arg(long, default_value = "output")]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Sequential,
    Parallel,
}

impl From<Mode> for GenerationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => GenerationMode::Sequential,
            Mode::Parallel => GenerationMode::Parallel,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    conformal_sampler::init_tracing()?;

    let cli = Cli::parse();
    let config = EngineConfig::default();

    match cli.command {
        Command::Compute {
            mode,
            count,
            pretty,
        } => {
            let response = conformal_sampler::compute(mode.into(), count, &config)?;
            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{}", json);
        }
        Command::MapPoint { re, im } => {
            let response = conformal_sampler::map_point(re, im)?;
            println!("{}", serde_json::to_string(&response)?);
        }
        Command::Plot {
            mode,
            count,
            out_dir,
        } => {
            let mut controller = PlotController::new(PpmFilePresenter::new());
            controller.generate(mode.into(), count, &config)?;

            for path in controller.write(&out_dir)? {
                info!(path = %path.display(), "saved plot");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_negative_map_point_coordinates() {
        let cli = Cli::try_parse_from(["conformal-sampler", "map-point", "--re", "-1.5", "--im", "-0.25"])
            .unwrap();

        assert!(matches!(
            cli.command,
            Command::MapPoint { re, im } if re == -1.5 && im == -0.25
        ));
    }

    #[test]
    fn test_compute_defaults() {
        let cli = Cli::try_parse_from(["conformal-sampler", "compute"]).unwrap();

        assert!(matches!(
            cli.command,
            Command::Compute {
                mode: Mode::Sequential,
                count: 5_000,
                pretty: false
            }
        ));
    }
}
