//! `route` command: plan a trip between two points.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfare_core::{LatLng, TravelMode};
use wayfare_data::SourceTimeouts;
use wayfare_planner::{PlannerConfig, RoutePlanner, SegmentationConfig};

use crate::sources::{load_analyzer, write_json};
use crate::{
    ARG_FROM_LAT, ARG_FROM_LNG, ARG_OBSERVATIONS, ARG_TO_LAT, ARG_TO_LNG, CliError,
    ENV_ROUTE_FROM_LAT, ENV_ROUTE_FROM_LNG, ENV_ROUTE_OBSERVATIONS, ENV_ROUTE_TO_LAT,
    ENV_ROUTE_TO_LNG,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Analyse both endpoints of a trip, sample waypoints along \
                 the straight line between them and report whether the \
                 route is feasible for the chosen travel mode.",
    about = "Plan a route and assess its risk"
)]
#[ortho_config(prefix = "WAYFARE")]
pub(crate) struct RouteArgs {
    /// Origin latitude in degrees.
    #[arg(long = ARG_FROM_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) from_lat: Option<f64>,
    /// Origin longitude in degrees.
    #[arg(long = ARG_FROM_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) from_lng: Option<f64>,
    /// Destination latitude in degrees.
    #[arg(long = ARG_TO_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) to_lat: Option<f64>,
    /// Destination longitude in degrees.
    #[arg(long = ARG_TO_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) to_lng: Option<f64>,
    /// Travel mode: driving, walking or cycling. Defaults to driving.
    #[arg(long, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<TravelMode>,
    /// JSON observation file serving positioning, imagery and weather.
    #[arg(long = ARG_OBSERVATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) observations: Option<Utf8PathBuf>,
    /// Analyse waypoints in parallel.
    #[arg(
        long,
        value_name = "bool",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) parallel: Option<bool>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    pub(crate) origin: LatLng,
    pub(crate) destination: LatLng,
    pub(crate) mode: TravelMode,
    pub(crate) observations: Utf8PathBuf,
    pub(crate) parallel: bool,
}

impl RouteConfig {
    fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            segmentation: SegmentationConfig {
                parallel: self.parallel,
                ..SegmentationConfig::default()
            },
            ..PlannerConfig::default()
        }
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let from_lat = args.from_lat.ok_or(CliError::MissingArgument {
            field: ARG_FROM_LAT,
            env: ENV_ROUTE_FROM_LAT,
        })?;
        let from_lng = args.from_lng.ok_or(CliError::MissingArgument {
            field: ARG_FROM_LNG,
            env: ENV_ROUTE_FROM_LNG,
        })?;
        let to_lat = args.to_lat.ok_or(CliError::MissingArgument {
            field: ARG_TO_LAT,
            env: ENV_ROUTE_TO_LAT,
        })?;
        let to_lng = args.to_lng.ok_or(CliError::MissingArgument {
            field: ARG_TO_LNG,
            env: ENV_ROUTE_TO_LNG,
        })?;
        let observations = args.observations.ok_or(CliError::MissingArgument {
            field: ARG_OBSERVATIONS,
            env: ENV_ROUTE_OBSERVATIONS,
        })?;
        let origin = LatLng::new(from_lat, from_lng)
            .map_err(|source| CliError::InvalidCoordinate {
                point: "origin",
                source,
            })?;
        let destination = LatLng::new(to_lat, to_lng)
            .map_err(|source| CliError::InvalidCoordinate {
                point: "destination",
                source,
            })?;
        Ok(Self {
            origin,
            destination,
            mode: args.mode.unwrap_or_default(),
            observations,
            parallel: args.parallel.unwrap_or(false),
        })
    }
}

pub(crate) fn run_route_with(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let analyzer = load_analyzer(&config.observations, &SourceTimeouts::default())?;
    let planner = RoutePlanner::with_config(analyzer, config.planner_config());
    let report = planner.plan(config.origin, config.destination, config.mode);
    write_json(writer, &report)
}
