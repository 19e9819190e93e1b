//! Export artifact handling: format selection, timestamped filenames, and
//! saving the binary payload locally.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};

/// Grace delay between initiating the save and releasing the file handle,
/// long enough in practice for the write to land before cleanup.
const SAVE_GRACE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Json,
}

impl ExportFormat {
    /// Path segment of the format-specific export endpoint, which doubles
    /// as the artifact file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(ExportFormat::Pdf),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!(
                "unknown export format '{}' (expected pdf, csv or json)",
                other
            )),
        }
    }
}

/// Artifact filename for an export taken at `now`: the ISO-8601 instant
/// with `:` and the sub-second `.` turned into `-`, and the sub-second plus
/// zone suffix cut off. `2024-01-02T03:04:05.678Z` becomes
/// `seo_audit_2024-01-02T03-04-05.pdf`.
pub fn export_filename(format: ExportFormat, now: DateTime<Utc>) -> String {
    let iso = now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
    let cleaned = iso.replace([':', '.'], "-");
    let timestamp = &cleaned[..cleaned.len() - 5];
    format!("seo_audit_{}.{}", timestamp, format.as_str())
}

async fn write_artifact(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let mut file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(bytes)
        .await
        .context("Failed to write artifact")?;
    file.flush().await.context("Failed to flush artifact")?;

    tokio::time::sleep(SAVE_GRACE).await;
    drop(file);
    Ok(())
}

/// Write the artifact under `dir` and hold the handle through the grace
/// delay before letting it drop. Failures keep the export wording the
/// notice channel shows, with the full cause chain appended.
pub async fn save_artifact(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(filename);

    write_artifact(&path, bytes)
        .await
        .map_err(|e| AppError::export(format!("{:#}", e)))?;

    log::info!("Saved export artifact to {}", path.display());
    Ok(path)
}
