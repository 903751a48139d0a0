// SPDX-License-Identifier: MIT

//! Single-pass batch rename over a directory of images

use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::encode::EncodedImage;
use crate::openai::NameSuggester;
use crate::resolve::resolve_destination;
use crate::slug::{sanitize_to_slug, sanitizes_to_nothing, DEFAULT_MAX_SLUG_LEN};
use crate::{PixnameError, Result};

/// Extensions treated as images (matched case-insensitively)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Options for a batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Model identifier passed to the naming service
    pub model: String,
    /// Print the plan without touching the filesystem
    pub dry_run: bool,
    /// Cap on slug length
    pub max_length: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            dry_run: false,
            max_length: DEFAULT_MAX_SLUG_LEN,
        }
    }
}

/// List image files directly inside `directory`, sorted for deterministic
/// processing order.
///
/// The directory is resolved to an absolute, symlink-free path first; a
/// missing or non-directory path is a configuration error. The listing is
/// taken once; files appearing later are never seen.
pub fn collect_images(directory: &Path) -> Result<Vec<PathBuf>> {
    let directory = directory
        .canonicalize()
        .map_err(|_| PixnameError::Config(format!("Not a directory: {}", directory.display())))?;
    if !directory.is_dir() {
        return Err(PixnameError::Config(format!(
            "Not a directory: {}",
            directory.display()
        )));
    }

    let mut images: Vec<PathBuf> = std::fs::read_dir(&directory)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_image_extension(p))
        .collect();

    images.sort();
    Ok(images)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|i| i.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Rename every image in `directory` using names from `namer`.
///
/// Strictly sequential: one file, one blocking service call at a time.
/// A service or I/O error aborts the whole batch; only an empty suggestion
/// is recovered locally by skipping that file.
pub async fn rename_directory(
    directory: &Path,
    namer: &dyn NameSuggester,
    opts: &BatchOptions,
) -> Result<()> {
    let images = collect_images(directory)?;
    info!("Found {} image(s) in {}", images.len(), directory.display());

    for src in images {
        process_one(&src, namer, opts).await?;
    }

    Ok(())
}

/// Run one file through encode -> suggest -> sanitize -> resolve -> act
async fn process_one(src: &Path, namer: &dyn NameSuggester, opts: &BatchOptions) -> Result<()> {
    let file_name = src
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    debug!("Processing {}", file_name);

    let encoded = EncodedImage::from_path(src)?;

    // Fail fast: one bad service call aborts the batch rather than risking
    // silently mis-named files.
    let suggested = match namer.suggest_name(&encoded, &opts.model).await {
        Ok(text) => text,
        Err(e) => {
            error!("{}: naming service failed: {}", file_name, e);
            return Err(e);
        }
    };

    if sanitizes_to_nothing(&suggested) {
        println!("[skip] {}: empty suggestion", file_name);
        return Ok(());
    }

    let slug = sanitize_to_slug(&suggested, opts.max_length);
    let extension = lowercase_extension(src);
    let parent = src.parent().unwrap_or_else(|| Path::new("."));
    let dest = resolve_destination(parent, &slug, &extension, src);

    if dest == src {
        println!("[keep] {}", file_name);
        return Ok(());
    }

    let dest_name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    if opts.dry_run {
        println!("[plan] {} -> {}", file_name, dest_name);
    } else {
        std::fs::rename(src, &dest)?;
        println!("[renamed] {} -> {}", file_name, dest_name);
    }

    Ok(())
}

/// Source extension with a leading dot, lowercased for the destination
fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}
