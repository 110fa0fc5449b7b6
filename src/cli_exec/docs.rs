use parlor::documents::{DocumentPanel, FileSelection, PanelOutcome};

use super::terminal_view::TerminalView;
use super::workspace::Workspace;
use super::*;

fn finish(action: &str, outcome: PanelOutcome) -> Result<()> {
    match outcome {
        PanelOutcome::Completed | PanelOutcome::Skipped | PanelOutcome::Cancelled => Ok(()),
        PanelOutcome::Rejected(_) | PanelOutcome::Failed => {
            anyhow::bail!("{} did not complete", action)
        }
    }
}

pub(super) fn handle_docs_command(ws: &mut Workspace, command: DocsCommands) -> Result<()> {
    let client = ws.client()?;
    match command {
        DocsCommands::List { project } => {
            let project = ws.project(project)?;
            let mut view = TerminalView::new();
            let outcome = DocumentPanel::new(&client, &mut view).refresh(&project);
            finish("document list", outcome)
        }
        DocsCommands::Upload { path, project } => {
            let project = ws.project(project)?;
            let mut view = TerminalView::new();
            let mut selection = FileSelection::of(path);
            let outcome = DocumentPanel::new(&client, &mut view).upload(&project, &mut selection);
            finish("upload", outcome)
        }
        DocsCommands::Delete {
            filename,
            project,
            yes,
        } => {
            let project = ws.project(project)?;
            let mut view = TerminalView::assuming_yes(yes);
            let outcome = DocumentPanel::new(&client, &mut view).delete(&project, &filename);
            if outcome == PanelOutcome::Cancelled {
                println!("Cancelled");
            }
            finish("delete", outcome)
        }
    }
}
