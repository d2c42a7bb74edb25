//! `analyze` command: assess a single destination.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfare_core::LatLng;
use wayfare_data::SourceTimeouts;

use crate::sources::{load_analyzer, write_json};
use crate::{
    ARG_LAT, ARG_LNG, ARG_OBSERVATIONS, CliError, ENV_ANALYZE_LAT, ENV_ANALYZE_LNG,
    ENV_ANALYZE_OBSERVATIONS,
};

/// CLI arguments for the `analyze` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Assess the health and safety of one destination using \
                 recorded positioning, surface imagery and weather \
                 observations. Values can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Analyse a single destination"
)]
#[ortho_config(prefix = "WAYFARE")]
pub(crate) struct AnalyzeArgs {
    /// Destination latitude in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Destination longitude in degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// JSON observation file serving positioning, imagery and weather.
    #[arg(long = ARG_OBSERVATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) observations: Option<Utf8PathBuf>,
}

impl AnalyzeArgs {
    pub(crate) fn into_config(self) -> Result<AnalyzeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyzeConfig::try_from(merged)
    }
}

/// Resolved `analyze` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnalyzeConfig {
    pub(crate) location: LatLng,
    pub(crate) observations: Utf8PathBuf,
}

impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = CliError;

    fn try_from(args: AnalyzeArgs) -> Result<Self, Self::Error> {
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_ANALYZE_LAT,
        })?;
        let lng = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_LNG,
            env: ENV_ANALYZE_LNG,
        })?;
        let observations = args.observations.ok_or(CliError::MissingArgument {
            field: ARG_OBSERVATIONS,
            env: ENV_ANALYZE_OBSERVATIONS,
        })?;
        let location = LatLng::new(lat, lng).map_err(|source| CliError::InvalidCoordinate {
            point: "destination",
            source,
        })?;
        Ok(Self {
            location,
            observations,
        })
    }
}

pub(crate) fn run_analyze_with(args: AnalyzeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let analyzer = load_analyzer(&config.observations, &SourceTimeouts::default())?;
    let result = analyzer.analyze(config.location);
    write_json(writer, &result)
}
