use std::process::Output;

use wiremock::MockServer;

pub const APOD_PATH: &str = "/planetary/apod";

/// Run the binary against `server`, isolated from any APOD_* settings in
/// the caller's environment.
pub async fn run_apod(server: &MockServer, args: &[&str]) -> Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_apod-desktop"))
        .args(args)
        .env("APOD_API_URL", format!("{}{}", server.uri(), APOD_PATH))
        .env("APOD_API_KEY", "cli-test-key")
        .env("APOD_TIMEOUT_SECS", "5")
        .env_remove("APOD_DATE")
        .env_remove("APOD_OUTPUT_PATH")
        .env("RUST_LOG", "info")
        .output()
        .await
        .expect("failed to run apod-desktop")
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
