//! Runtime execution modes.
//!
//! - `tui`: Full-screen interactive form (optional feature)

#[cfg(feature = "tui")]
pub use thoughtbox_tui::run_form;

#[cfg(not(feature = "tui"))]
pub async fn run_form(_config: &thoughtbox_core::config::Config) -> anyhow::Result<()> {
    anyhow::bail!(
        "TUI support is disabled in this build (feature \"tui\").\n\
         Use `thoughtbox submit` instead."
    );
}
