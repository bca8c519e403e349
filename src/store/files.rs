use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the protocol directory - checks for local .protocol first, then falls
/// back to global ~/.protocol
pub fn get_protocol_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_protocol(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".protocol"))
}

/// Find local .protocol directory by walking up the directory tree
fn find_local_protocol(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let protocol_dir = current.join(".protocol");
        if protocol_dir.exists() && protocol_dir.is_dir() {
            return Some(protocol_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the protocol directory exists
pub fn ensure_protocol_dir() -> Result<PathBuf> {
    let dir = get_protocol_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .protocol directory in the current directory
pub fn init_local_protocol() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let protocol_dir = current_dir.join(".protocol");

    if protocol_dir.exists() {
        anyhow::bail!("Protocol directory already exists: {}", protocol_dir.display());
    }

    fs::create_dir_all(&protocol_dir)
        .with_context(|| format!("Failed to create directory: {}", protocol_dir.display()))?;

    Ok(protocol_dir)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return None if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(Some(content))
}
