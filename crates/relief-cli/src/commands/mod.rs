pub mod plead;
pub mod scan;

use crate::args::{Cli, Command};
use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use relief_core::model::FaceImage;
use std::fs;
use std::path::Path;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Plead(args) => plead::cmd_plead(args).await,
        Command::Scan(args) => scan::cmd_scan(args).await,
    }
}

/// Read an image file and wrap it as the base64 payload the core expects.
pub(crate) fn load_face_image(path: &Path) -> anyhow::Result<FaceImage> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read image {}", path.display()))?;
    Ok(FaceImage::new(STANDARD.encode(bytes)))
}
