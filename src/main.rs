use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Delegate to the CLI framework entry point.
    form_client::run().await
}
