use anyhow::Result;
use clap::CommandFactory;
use std::ffi::OsString;
use std::io::{self, BufRead};

use crate::cli::{Cli, Commands};
use crate::error::VenvError;
use crate::prompt;
use crate::registry::{EnvironmentEntry, Selection, Snapshot};
use crate::session::Session;
use crate::ui;

mod configure;
mod list;
mod remove;
mod switch;

pub fn execute(cli: Cli) -> Result<()> {
    // Loaded once; every command below works from this snapshot of the config
    let session = Session::load()?;
    let mut input = io::stdin().lock();

    if cli.configure {
        return configure::execute(&session, &mut input);
    }

    match cli.command {
        Some(Commands::List) => list::execute(&session),

        Some(Commands::Switch { name }) => switch::execute(&session, name, &mut input),

        Some(Commands::Remove { name, yes }) => remove::execute(&session, name, yes, &mut input),

        None => {
            eprintln!("{}", Cli::command().render_usage());
            anyhow::bail!("No command given. Use 'list', 'switch', 'remove' or '--configure'.");
        }
    }
}

/// List the base directory, failing when there is nothing to choose from
fn non_empty_snapshot(session: &Session) -> Result<Snapshot> {
    let registry = session.registry();
    let snapshot = registry.list()?;
    if snapshot.is_empty() {
        anyhow::bail!(
            "No virtual environments found in {}",
            registry.base().display()
        );
    }
    Ok(snapshot)
}

/// Pick an environment by name or through the numbered menu.
///
/// `Ok(None)` means the user cancelled.
fn choose<R: BufRead>(
    session: &Session,
    name: Option<OsString>,
    action: &str,
    input: &mut R,
) -> Result<Option<EnvironmentEntry>> {
    let snapshot = non_empty_snapshot(session)?;

    if let Some(name) = name {
        return match snapshot.find(&name) {
            Some(entry) => Ok(Some(entry.clone())),
            None => Err(VenvError::EnvironmentNotFound {
                base: session.venv_base().to_path_buf(),
                name: name.to_string_lossy().into_owned(),
            }
            .into()),
        };
    }

    ui::menu(&snapshot);
    let message = format!(
        "Select environment to {action} [1-{}, q to cancel]: ",
        snapshot.len()
    );
    let Some(line) = prompt::ask(input, &message)? else {
        return Ok(None);
    };

    match snapshot.select(&line) {
        Selection::Valid(entry) => Ok(Some(entry)),
        Selection::Cancelled => Ok(None),
        Selection::Invalid(raw) => Err(VenvError::InvalidSelection(raw).into()),
    }
}
