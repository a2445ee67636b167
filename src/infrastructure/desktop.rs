use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::background::BackgroundSetter;
use crate::domain::errors::PlatformError;

/// The setter for the OS this binary was built for.
pub fn platform_setter() -> Arc<dyn BackgroundSetter> {
    #[cfg(windows)]
    {
        Arc::new(WindowsBackground)
    }
    #[cfg(target_os = "macos")]
    {
        Arc::new(MacBackground)
    }
    #[cfg(target_os = "linux")]
    {
        Arc::new(GnomeBackground)
    }
    #[cfg(not(any(windows, target_os = "macos", target_os = "linux")))]
    {
        Arc::new(UnsupportedBackground)
    }
}

fn report(path: &Path, result: Result<(), PlatformError>) -> Result<(), PlatformError> {
    match &result {
        Ok(()) => info!(path = %path.display(), "desktop background set"),
        Err(err) => warn!(path = %path.display(), error = %err, "failed to set desktop background"),
    }
    result
}

/// Leaves the desktop untouched. Used when only saving the image.
pub struct KeepBackground;

#[async_trait]
impl BackgroundSetter for KeepBackground {
    async fn apply(&self, path: &Path) -> Result<(), PlatformError> {
        info!(path = %path.display(), "leaving desktop background unchanged");
        Ok(())
    }
}

pub struct UnsupportedBackground;

#[async_trait]
impl BackgroundSetter for UnsupportedBackground {
    async fn apply(&self, path: &Path) -> Result<(), PlatformError> {
        report(
            path,
            Err(PlatformError::Unsupported {
                os: std::env::consts::OS,
            }),
        )
    }
}

#[cfg(windows)]
pub struct WindowsBackground;

#[cfg(windows)]
#[async_trait]
impl BackgroundSetter for WindowsBackground {
    async fn apply(&self, path: &Path) -> Result<(), PlatformError> {
        use std::os::windows::ffi::OsStrExt;
        use windows_sys::Win32::UI::WindowsAndMessaging::{
            SPI_SETDESKWALLPAPER, SPIF_SENDWININICHANGE, SPIF_UPDATEINIFILE,
            SystemParametersInfoW,
        };

        info!(path = %path.display(), "setting desktop background");
        let mut wide: Vec<u16> = path
            .as_os_str()
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        // SAFETY: `wide` is a NUL-terminated UTF-16 buffer that outlives the call.
        let ok = unsafe {
            SystemParametersInfoW(
                SPI_SETDESKWALLPAPER,
                0,
                wide.as_mut_ptr().cast(),
                SPIF_UPDATEINIFILE | SPIF_SENDWININICHANGE,
            )
        };

        let result = if ok == 0 {
            Err(PlatformError::Rejected {
                path: path.to_path_buf(),
            })
        } else {
            Ok(())
        };
        report(path, result)
    }
}

#[cfg(target_os = "macos")]
pub struct MacBackground;

#[cfg(target_os = "macos")]
#[async_trait]
impl BackgroundSetter for MacBackground {
    async fn apply(&self, path: &Path) -> Result<(), PlatformError> {
        info!(path = %path.display(), "setting desktop background");
        let result = match path.to_str() {
            Some(posix_path) => run_status("osascript", &finder_script_args(posix_path), path).await,
            None => Err(PlatformError::Rejected {
                path: path.to_path_buf(),
            }),
        };
        report(path, result)
    }
}

/// `osascript` arguments that hand the path to Finder as `argv`, so it is
/// never spliced into AppleScript source.
#[cfg(any(target_os = "macos", test))]
fn finder_script_args(posix_path: &str) -> [&str; 7] {
    [
        "-e",
        "on run argv",
        "-e",
        "tell application \"Finder\" to set desktop picture to POSIX file (item 1 of argv)",
        "-e",
        "end run",
        posix_path,
    ]
}

#[cfg(target_os = "linux")]
pub struct GnomeBackground;

#[cfg(target_os = "linux")]
#[async_trait]
impl BackgroundSetter for GnomeBackground {
    async fn apply(&self, path: &Path) -> Result<(), PlatformError> {
        info!(path = %path.display(), "setting desktop background");
        let result = match url::Url::from_file_path(path) {
            Ok(uri) => {
                run_status(
                    "gsettings",
                    &["set", "org.gnome.desktop.background", "picture-uri", uri.as_str()],
                    path,
                )
                .await
            }
            // Only absolute paths have a file:// form.
            Err(()) => Err(PlatformError::Rejected {
                path: path.to_path_buf(),
            }),
        };
        report(path, result)
    }
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
async fn run_status(program: &'static str, args: &[&str], path: &Path) -> Result<(), PlatformError> {
    let status = tokio::process::Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|source| PlatformError::Launch { program, source })?;

    if status.success() {
        Ok(())
    } else {
        Err(PlatformError::Rejected {
            path: path.to_path_buf(),
        })
    }
}
