use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::Builder;
use tracing::{debug, info};

use crate::error::{InventoryError, Result};

/// Creates the directory holding `path` if it is missing. Only the last level
/// is created; a missing grandparent is an error.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };

    if dir.is_dir() {
        return Ok(());
    }

    let err = |source: io::Error| InventoryError::OutputDirectory {
        path: dir.to_owned(),
        source,
    };
    if dir.exists() {
        return Err(err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "path exists and is not a directory",
        )));
    }

    fs::create_dir(dir).map_err(err)?;
    info!("created directory {}", dir.display());
    Ok(())
}

/// Replaces `path` with `contents` through a temporary file in the same
/// directory, so readers never observe a partial inventory. An existing
/// inventory keeps its mode, and a symlinked one is replaced at its target.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let err = |source: io::Error| InventoryError::OutputWrite {
        path: path.to_owned(),
        source,
    };

    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    let target = if is_link {
        fs::canonicalize(path).map_err(err)?
    } else {
        path.to_owned()
    };
    let existing = fs::metadata(&target).ok().map(|m| m.permissions());

    let dir = target
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // same default as a plainly created file, masked by the umask
        if existing.is_none() {
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
    }
    let mut tmp = builder.tempfile_in(dir).map_err(err)?;
    tmp.write_all(contents.as_bytes()).map_err(err)?;
    tmp.as_file().sync_all().map_err(err)?;

    if let Some(permissions) = existing {
        fs::set_permissions(tmp.path(), permissions).map_err(err)?;
    }

    debug!("renaming {} to {}", tmp.path().display(), target.display());
    tmp.persist(&target).map_err(|e| err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_one_missing_level() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out").join("inventory");
        ensure_parent_dir(&target).unwrap();
        assert!(dir.path().join("out").is_dir());
    }

    #[test]
    fn does_not_create_nested_levels() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("inventory");
        assert!(matches!(
            ensure_parent_dir(&target),
            Err(InventoryError::OutputDirectory { .. })
        ));
        assert!(!dir.path().join("a").exists());
    }

    #[test]
    fn file_in_the_way_of_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("out"), "").unwrap();
        let target = dir.path().join("out").join("inventory");
        assert!(matches!(
            ensure_parent_dir(&target),
            Err(InventoryError::OutputDirectory { .. })
        ));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("inventory");
        fs::write(&target, "stale contents that are longer than the new ones\n").unwrap();
        write_atomic(&target, "[controlplanes]\n").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "[controlplanes]\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn keeps_mode_of_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let target = dir.path().join("inventory");
        fs::write(&target, "old\n").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o600)).unwrap();

        write_atomic(&target, "new\n").unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_not_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let target = dir.path().join("inventory");
        write_atomic(&target, "new\n").unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0);
        assert_ne!(mode & 0o600, 0);
    }

    #[cfg(unix)]
    #[test]
    fn writes_through_symlink() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("inventory.ini");
        let link = dir.path().join("inventory");
        fs::write(&real, "old\n").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_atomic(&link, "new\n").unwrap();
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new\n");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing").join("inventory");
        assert!(matches!(
            write_atomic(&target, "x"),
            Err(InventoryError::OutputWrite { .. })
        ));
    }
}
