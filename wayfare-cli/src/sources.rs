//! Observation-backed analyzer construction and output helpers shared by the
//! commands.

use std::io::{self, Write};
use std::sync::Arc;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use serde::Serialize;
use wayfare_data::{Deadline, ObservationGrid, SourceTimeouts};
use wayfare_planner::DestinationAnalyzer;

use crate::{ARG_OBSERVATIONS, CliError};

/// A shared observation grid bounded by its per-source budget.
pub(crate) type GridSource = Deadline<Arc<ObservationGrid>>;

/// Analyzer whose three sources are served by one observation grid.
pub(crate) type GridAnalyzer = DestinationAnalyzer<GridSource, GridSource, GridSource>;

/// Load `path` and wire it into an analyzer as every data source.
pub(crate) fn load_analyzer(
    path: &Utf8Path,
    timeouts: &SourceTimeouts,
) -> Result<GridAnalyzer, CliError> {
    require_existing(path, ARG_OBSERVATIONS)?;
    let grid = Arc::new(ObservationGrid::load(path)?);
    if grid.is_empty() {
        log::warn!("observation file {path} holds no samples; every analysis will fall back");
    }
    Ok(DestinationAnalyzer::new(
        Deadline::positioning(Arc::clone(&grid), timeouts),
        Deadline::imagery(Arc::clone(&grid), timeouts),
        Deadline::weather(grid, timeouts),
    ))
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
