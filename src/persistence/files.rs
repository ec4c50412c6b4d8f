use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the studi directory - checks for local .studi first, then falls back to global ~/.studi
pub fn get_studi_dir() -> Result<PathBuf> {
    // Check for local .studi directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_studi(&current_dir) {
        return Ok(local_dir);
    }

    // Fall back to global ~/.studi
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".studi"))
}

/// Find local .studi directory by walking up the directory tree
fn find_local_studi(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let studi_dir = current.join(".studi");
        if studi_dir.exists() && studi_dir.is_dir() {
            return Some(studi_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the studi directory exists
pub fn ensure_studi_dir() -> Result<PathBuf> {
    let dir = get_studi_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .studi directory in the current directory
pub fn init_local_studi() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let studi_dir = current_dir.join(".studi");

    if studi_dir.exists() {
        anyhow::bail!("Studi directory already exists: {}", studi_dir.display());
    }

    fs::create_dir_all(&studi_dir)
        .with_context(|| format!("Failed to create directory: {}", studi_dir.display()))?;

    Ok(studi_dir)
}

/// Get path to history.json (the full persisted session history)
pub fn history_file() -> Result<PathBuf> {
    Ok(ensure_studi_dir()?.join("history.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    // Write content
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
