//! Full-screen submission form for Thoughtbox.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::form;
pub use runtime::TuiRuntime;
use thoughtbox_core::SubmitController;
use thoughtbox_core::config::Config;

/// Runs the interactive form until the user quits.
pub async fn run_form(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The form requires a terminal.\n\
             Use `thoughtbox submit --concern .. --cause .. --solution ..` for non-interactive use."
        );
    }

    let controller = SubmitController::from_config(&config.collector)?;
    tracing::info!(url = %controller.client().url(), "starting form");

    let mut runtime = TuiRuntime::new(config, controller)?;
    runtime.run()
}
