//! Writing finished output files.

use std::{
  fs::{self, Permissions},
  io::{ErrorKind, Write},
  path::Path,
};

use log::trace;
use tempfile::NamedTempFile;

use crate::Result;

/// Mode for files that didn't exist before, the usual `rw-r--r--`.
#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
  use std::os::unix::fs::PermissionsExt;
  Some(Permissions::from_mode(0o644))
}
#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
  None
}

/// Replaces the file at `path` with `bytes`, all or nothing.
///
/// The bytes go into a temporary file in the same directory, which is then
/// renamed over the target. Readers see either the old file or the complete
/// new one, and a failure part way leaves the old file as it was.
///
/// An existing target keeps its permissions. A new file gets mode `0o644` on
/// unix.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
  let dir = match path.parent() {
    Some(p) if !p.as_os_str().is_empty() => p,
    _ => Path::new("."),
  };
  let permissions = match fs::metadata(path) {
    Ok(meta) => Some(meta.permissions()),
    Err(e) if e.kind() == ErrorKind::NotFound => new_file_permissions(),
    Err(e) => return Err(e.into()),
  };
  let mut temp = NamedTempFile::new_in(dir)?;
  if let Some(permissions) = permissions {
    temp.as_file().set_permissions(permissions)?;
  }
  temp.write_all(bytes)?;
  temp.as_file().sync_all()?;
  temp.persist(path)?;
  trace!("wrote {} bytes to {}", bytes.len(), path.display());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");
    std::fs::write(&path, b"old contents that are longer").unwrap();
    write_atomic(&path, b"new").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"new");
    // only the target is left behind
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
  }

  #[cfg(unix)]
  #[test]
  fn keeps_permissions_of_existing_file() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("README.md");
    for mode in [0o644, 0o664, 0o600] {
      std::fs::write(&path, b"old").unwrap();
      std::fs::set_permissions(&path, Permissions::from_mode(mode)).unwrap();
      write_atomic(&path, b"new").unwrap();
      assert_eq!(std::fs::read(&path).unwrap(), b"new");
      let after = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
      assert_eq!(after, mode, "{mode:o}");
    }
  }

  #[cfg(unix)]
  #[test]
  fn new_file_is_world_readable() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chapter_tracks.png");
    write_atomic(&path, b"png").unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
  }

  #[test]
  fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("out.bin");
    assert!(write_atomic(&path, b"x").is_err());
    assert!(!path.exists());
  }
}
