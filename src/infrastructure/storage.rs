use std::path::Path;

use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::domain::errors::WriteError;

/// Write `bytes` to `path`, creating or truncating the file.
///
/// The handle is dropped on every exit path. A failed write is not cleaned
/// up, so a truncated file may be left behind.
pub async fn save_image(bytes: &[u8], path: &Path) -> Result<(), WriteError> {
    info!(path = %path.display(), bytes = bytes.len(), "saving image file");

    match write_all(bytes, path).await {
        Ok(()) => {
            info!(path = %path.display(), "saved image file");
            Ok(())
        }
        Err(source) => {
            warn!(path = %path.display(), error = %source, "failed to save image file");
            Err(WriteError {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

async fn write_all(bytes: &[u8], path: &Path) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await
}
