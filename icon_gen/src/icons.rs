use std::io;
use std::path::{Path, PathBuf};

use lib_png::constants::FILE_EXT;
use lib_png::{encode, save, EncodingError, Rgb};
use log::info;
use thiserror::Error;

pub struct IconSpec {
    pub size: u32,
    pub color: Rgb,
}

impl IconSpec {
    pub fn file_name(&self) -> String {
        format!("icon-{}.{}", self.size, FILE_EXT)
    }
}

pub const ICONS: [IconSpec; 2] = [
    IconSpec {
        size: 192,
        color: Rgb::new(233, 170, 196),
    },
    IconSpec {
        size: 512,
        color: Rgb::new(201, 183, 255),
    },
];

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Failed to encode {}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: EncodingError,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes every icon in [`ICONS`] into `out_dir`, stopping at the first failure.
pub fn generate_icons(out_dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    let mut written = Vec::with_capacity(ICONS.len());

    for icon in &ICONS {
        let path = out_dir.join(icon.file_name());
        info!(
            "Generating {} ({}x{}, {:?})",
            path.display(),
            icon.size,
            icon.size,
            icon.color
        );

        let bytes = encode(icon.size, icon.size, icon.color).map_err(|source| {
            IconError::Encoding {
                path: path.clone(),
                source,
            }
        })?;
        save(&path, &bytes).map_err(|source| IconError::Io {
            path: path.clone(),
            source,
        })?;

        written.push(path);
    }

    Ok(written)
}
