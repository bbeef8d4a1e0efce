// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Where DICOM Desk keeps `config.json`.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "dicomdesk";

/// The settings folder, created on first use.
///
/// A folder that cannot be created is logged and still returned; saving
/// settings into it then reports the I/O error to the user.
pub fn data_dir() -> PathBuf {
    let dir = settings_root(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    );
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(error = %e, dir = %dir.display(), "cannot create settings folder");
    }
    dir
}

/// `$XDG_DATA_HOME/dicomdesk`, else `$HOME/.local/share/dicomdesk`, else a
/// folder under the system temp dir. Empty variables count as unset.
fn settings_root(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();
    if let Some(xdg) = xdg_data_home.filter(non_empty) {
        return xdg.join(APP_DIR);
    }
    if let Some(home) = home.filter(non_empty) {
        return share_dir(&home).join(APP_DIR);
    }
    std::env::temp_dir().join(APP_DIR)
}

fn share_dir(home: &Path) -> PathBuf {
    home.join(".local").join("share")
}
