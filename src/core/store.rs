//! Single-key persistence into a flat key=value text file.
//!
//! The store owns exactly one key in the file; every other line keeps its
//! original order and content. Values are written verbatim, so a value
//! containing a newline would corrupt the format.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::constants;

/// Write `key=value` into the store file.
///
/// The first existing `key=` line is replaced in place; otherwise a new
/// line is appended at the end. A file created by this call gets
/// restrictive permissions; pre-existing files are left as they are.
pub fn persist(env_file: &Path, key: &str, value: &str) -> Result<()> {
    let existing = if env_file.exists() {
        Some(
            fs::read_to_string(env_file)
                .with_context(|| format!("read {}", env_file.display()))?,
        )
    } else {
        None
    };

    let content = upsert_line(existing.as_deref().unwrap_or(""), key, value);
    fs::write(env_file, content).with_context(|| format!("write {}", env_file.display()))?;

    if existing.is_none() {
        set_file_mode(env_file, constants::ENV_FILE_MODE)?;
    }
    Ok(())
}

/// Current value of `key` in the store file, if the file and line exist.
pub fn lookup(env_file: &Path, key: &str) -> Result<Option<String>> {
    if !env_file.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(env_file)
        .with_context(|| format!("read {}", env_file.display()))?;
    let prefix = format!("{}=", key);
    Ok(content
        .lines()
        .find_map(|line| line.strip_prefix(&prefix).map(str::to_string)))
}

/// Pure line-level upsert: replace the first `key=` line in place, stop
/// looking after that; append when no line matches. Returns the complete
/// new file content, newline-terminated.
pub fn upsert_line(content: &str, key: &str, value: &str) -> String {
    let prefix = format!("{}=", key);
    let managed = format!("{}={}", key, value);

    let mut lines: Vec<String> = Vec::new();
    let mut replaced = false;
    for line in content.lines() {
        if !replaced && line.starts_with(&prefix) {
            lines.push(managed.clone());
            replaced = true;
        } else {
            lines.push(line.to_string());
        }
    }
    if !replaced {
        lines.push(managed);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn set_file_mode(path: &Path, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        let perm = fs::Permissions::from_mode(mode);
        fs::set_permissions(path, perm)
            .with_context(|| format!("set permissions {:o} on {}", mode, path.display()))?;
    }
    #[cfg(not(unix))]
    {
        let _ = (path, mode);
    }
    Ok(())
}
