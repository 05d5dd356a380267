use std::{
    fs::{self, Metadata},
    os::unix::fs::MetadataExt,
    path::Path,
};

use log::debug;

use crate::{
    error::ScanError,
    identity::{group_name, owner_name},
    mode::mode_string,
    record::{FileRecord, ModTime},
};

/// Scan `dir`, producing one record per entry plus synthetic `.` and `..`
/// rows. Order is whatever the filesystem hands back; callers sort.
///
/// Any failure to open the directory or stat an entry is fatal to the
/// whole listing.
pub fn scan_dir(dir: &Path) -> Result<Vec<FileRecord>, ScanError> {
    let rd = fs::read_dir(dir).map_err(|source| ScanError::OpenDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();

    // read_dir skips the `.` and `..` namespace entries; a long listing
    // shows them.
    for name in [".", ".."] {
        let meta = fs::metadata(dir.join(name)).map_err(|source| ScanError::Metadata {
            name: name.to_owned(),
            source,
        })?;
        records.push(build_record(name.to_owned(), &meta));
    }

    for entry_res in rd {
        let entry = entry_res.map_err(|source| ScanError::OpenDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();

        // DirEntry::metadata does not follow symlinks, so links keep the
        // `l` type glyph.
        let meta = entry.metadata().map_err(|source| ScanError::Metadata {
            name: name.clone(),
            source,
        })?;
        records.push(build_record(name, &meta));
    }

    debug!("[scan] {} entries under {:?}", records.len(), dir);

    Ok(records)
}

fn build_record(name: String, meta: &Metadata) -> FileRecord {
    FileRecord {
        ino: meta.ino(),
        mode: mode_string(meta.mode()),
        nlink: meta.nlink(),
        owner: owner_name(meta.uid()),
        group: group_name(meta.gid()),
        size: meta.size(),
        mtime: ModTime::from_unix_secs(meta.mtime()),
        name,
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
