use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};

/// Writes `bytes` to `path` through a sibling `.tmp` file that is renamed into place.
///
/// On failure the temporary file is removed and the original error is returned,
/// so `path` is either untouched or holds the complete output.
pub fn save<P: AsRef<Path>>(path: P, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let tmp = temp_path(path)?;
    debug!("Writing {} bytes to {}", bytes.len(), tmp.display());

    let result = write_synced(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if let Err(err) = result {
        error!("Failed to write {}: {}", path.display(), err);
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }

    info!("File saved successfully to {}", path.display());
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let mut name: OsString = path
        .file_name()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} does not name a file", path.display()),
            )
        })?
        .to_owned();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}
