// SPDX-License-Identifier: MIT

//! Destination path resolution with collision probing

use std::path::{Path, PathBuf};

/// Pick a destination path for `base_name` + `extension` inside `directory`.
///
/// Returns `source` itself when the desired name already matches it, which
/// the caller reads as "no rename needed". Otherwise probes `{base}-1{ext}`,
/// `{base}-2{ext}`, ... until an unoccupied path turns up. The existence
/// check and the eventual rename are not atomic; single-operator use only.
pub fn resolve_destination(
    directory: &Path,
    base_name: &str,
    extension: &str,
    source: &Path,
) -> PathBuf {
    let mut candidate = directory.join(format!("{}{}", base_name, extension));
    if candidate == source {
        return candidate;
    }

    let mut counter = 1;
    while candidate.exists() {
        candidate = directory.join(format!("{}-{}{}", base_name, counter, extension));
        counter += 1;
    }
    candidate
}
