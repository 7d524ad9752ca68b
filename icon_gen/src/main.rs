mod icons;

use std::path::Path;

use icons::{generate_icons, IconError};
use log::info;

fn main() -> Result<(), IconError> {
    lib_png::init_logging();

    let written = generate_icons(Path::new("."))?;
    info!("Generated {} icons", written.len());

    Ok(())
}
