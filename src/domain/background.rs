use std::path::Path;

use async_trait::async_trait;

use super::errors::PlatformError;

/// Applies an image file as the desktop background.
///
/// Implementations ask the OS to update immediately and to persist the
/// setting across sessions.
#[async_trait]
pub trait BackgroundSetter: Send + Sync {
    async fn apply(&self, path: &Path) -> Result<(), PlatformError>;
}
