pub mod background;
pub mod errors;
pub mod metadata;

// Re-exports
pub use background::BackgroundSetter;
pub use errors::{FetchError, PlatformError, WriteError};
pub use metadata::{MediaType, MetadataRecord, resolve_media_url};
