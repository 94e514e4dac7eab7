//! Non-interactive submission.

use anyhow::{Context, Result};
use thoughtbox_core::config;
use thoughtbox_core::logging::{self, LogTarget};
use thoughtbox_core::{Complaint, SubmitController};
use tokio_util::sync::CancellationToken;

/// Posts one complaint and prints the outcome message.
///
/// # Errors
/// Returns an error if a field is empty, the collector URL is invalid, or
/// the submission does not succeed.
pub async fn run(config: &config::Config, complaint: Complaint) -> Result<()> {
    let _guard = logging::init(LogTarget::Stderr)?;

    let controller = SubmitController::from_config(&config.collector)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let outcome = controller
        .submit(&complaint, cancel)
        .await
        .context("submission not sent")?;

    println!("{}", outcome.message());
    if !outcome.is_success() {
        anyhow::bail!("{outcome}");
    }
    Ok(())
}
