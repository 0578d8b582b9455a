//! Mapping persistence with atomic writes

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::JourneyMapping;

/// Permission bits for the mapping file: group-writable, never world-writable
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o660;

/// Sibling temp path used while writing `target`
fn temp_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Create the temp file fresh so it always carries [`OUTPUT_MODE`]
///
/// A leftover temp file from an interrupted run is removed first; reusing it would keep
/// whatever permissions it was created with.
fn create_temp_file(path: &Path) -> io::Result<File> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
        _ => {}
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }
    options.open(path)
}

fn write_json(path: &Path, mapping: &JourneyMapping) -> Result<()> {
    let file = create_temp_file(path)
        .with_context(|| format!("Failed to create temp file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, mapping).context("Failed to serialize journey mapping")?;
    writer.write_all(b"\n")?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all().context("Failed to flush journey mapping")?;
    Ok(())
}

/// Save the mapping to `target`, replacing any previous content atomically
///
/// The JSON is written to `<target>.tmp` and renamed over `target` once complete, so
/// readers never see a half-written file and a shorter mapping never leaves stale bytes
/// from a longer one. Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, or the file cannot be written
/// or renamed. The temp file is removed on failure.
pub fn save_mapping(target: &Path, mapping: &JourneyMapping) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let temp = temp_path(target);
    let result = write_json(&temp, mapping).and_then(|()| {
        fs::rename(&temp, target)
            .with_context(|| format!("Failed to replace {}", target.display()))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result.with_context(|| format!("Failed to write {}", target.display()))
}
