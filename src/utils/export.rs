//! Artifact file export
//!
//! Writes each audience's artifact, plus the combined artifact when present,
//! as plain-text files named the way downloads are named.

use crate::error::Result;
use crate::synthesis::aggregate::{AggregatedArtifacts, CombinedArtifact};
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp fragment baked into export file names.
pub fn export_stamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M").to_string()
}

/// Writes one file per audience and, when present, the combined file.
/// Returns the written paths in artifact order.
pub fn write_artifacts(dir: &Path, artifacts: &AggregatedArtifacts) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let stamp = export_stamp();
    let mut written = Vec::new();

    for artifact in &artifacts.per_audience {
        let path = dir.join(artifact.file_name(&stamp));
        fs::write(&path, &artifact.content)?;
        written.push(path);
    }

    if let Some(combined) = &artifacts.combined {
        let path = dir.join(CombinedArtifact::file_name(&stamp));
        fs::write(&path, &combined.content)?;
        written.push(path);
    }

    log::info!("Wrote {} artifact file(s) to {}", written.len(), dir.display());
    Ok(written)
}
