//! Interactive form command handler.

use anyhow::{Context, Result};
use thoughtbox_core::config::{self, paths};
use thoughtbox_core::logging::{self, LogTarget};

use crate::modes;

pub async fn run(config: &config::Config) -> Result<()> {
    // The form owns the terminal, so records go to a file.
    let _guard = logging::init(LogTarget::File(paths::logs_dir()))?;

    modes::run_form(config)
        .await
        .context("interactive form failed")?;

    Ok(())
}
