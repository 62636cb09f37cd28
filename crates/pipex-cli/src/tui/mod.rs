//! Interactive terminal explorer for the stage catalog.
//!
//! A two-pane accordion: the left pane lists every stage with an
//! expansion marker, the right pane shows the expanded stage's details.
//! Keyboard only: arrows (or j/k) move focus, enter/space toggles the
//! focused stage, digits jump straight to a stage id.

mod app;
mod event;
mod view;

use pipex_core::explorer::StageExplorer;

pub use app::ExplorerApp;

/// Entry point for the interactive explorer.
pub fn run_explorer(explorer: StageExplorer) -> anyhow::Result<()> {
    let mut app = ExplorerApp::new(explorer)?;
    app.run()
}
