//! Test helpers for writing observation files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Two samples roughly 111 km apart along the equator, both benign.
pub(super) const EQUATOR_OBSERVATIONS: &str = r#"{
    "max_distance_km": 60,
    "samples": [
        {
            "lat": 0.0, "lng": 0.0,
            "positioning": { "accuracy_m": 2.0 },
            "surface": { "vegetation_index": 0.75, "water_index": 0.1, "snow_index": 0.05 },
            "weather": { "precip_mm": 0.0, "visibility_km": 10.0, "uv": 3.0, "is_day": true }
        },
        {
            "lat": 0.0, "lng": 1.0,
            "positioning": { "accuracy_m": 2.0 },
            "surface": { "vegetation_index": 0.75, "water_index": 0.1, "snow_index": 0.05 },
            "weather": { "precip_mm": 0.0, "visibility_km": 10.0, "uv": 3.0, "is_day": true }
        }
    ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding an observation file.
#[derive(Debug)]
pub(super) struct ObservationWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    observations: Utf8PathBuf,
}

impl ObservationWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let observations = root.join("observations.json");
        write_utf8(&observations, EQUATOR_OBSERVATIONS.as_bytes());
        Self {
            _dir: dir,
            root,
            observations,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn observations(&self) -> &Utf8Path {
        &self.observations
    }
}
