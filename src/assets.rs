//! Static asset copying.
//!
//! Copies the configured files and directories from the project root to the
//! output root, verbatim. A missing asset is a warning, not an error — the
//! site is still complete without a `robots.txt`, and failing the build over
//! one would make the config's asset list mandatory instead of aspirational.

use std::fs;
use std::path::Path;

/// Copy one asset entry (file or directory). Returns false if it was absent.
fn copy_asset(src: &Path, dst: &Path) -> std::io::Result<bool> {
    if !src.exists() {
        return Ok(false);
    }
    if src.is_dir() {
        copy_dir_recursive(src, dst)?;
    } else {
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dst)?;
    }
    Ok(true)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Copy every configured asset from `root` into `output`.
///
/// Returns the names of assets that were not found, for warning output.
pub fn copy_assets(
    assets: &[String],
    root: &Path,
    output: &Path,
) -> std::io::Result<Vec<String>> {
    let mut missing = Vec::new();
    for asset in assets {
        let copied = copy_asset(&root.join(asset), &output.join(asset))?;
        if !copied {
            missing.push(asset.clone());
        }
    }
    Ok(missing)
}
