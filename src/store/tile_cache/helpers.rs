// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

fn write_atomic_tile(
    root: &Path,
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), CacheError> {
    fs::create_dir_all(root).map_err(|source| CacheError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let Some(parent) = path.parent() else {
        return Err(CacheError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("tile path has no parent"),
        });
    };

    let Some(file_name) = path.file_name() else {
        return Err(CacheError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("tile path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        "{TEMP_PREFIX}{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| CacheError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    if let Err(source) = file.write_all(contents) {
        drop(file);
        let _ = fs::remove_file(&tmp_path);
        return Err(CacheError::Io {
            path: tmp_path,
            source,
        });
    }

    if durability == WriteDurability::Durable {
        // Best effort; exact guarantees are platform/filesystem-dependent.
        let _ = file.sync_all();
    }

    drop(file);

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CacheError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}
