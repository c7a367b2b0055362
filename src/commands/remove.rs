use crate::lifecycle::{self, RemoveOutcome};
use crate::session::Session;
use crate::{prompt, ui};
use anyhow::Result;
use std::ffi::OsString;
use std::io::BufRead;

pub fn execute<R: BufRead>(
    session: &Session,
    name: Option<OsString>,
    yes: bool,
    input: &mut R,
) -> Result<()> {
    let Some(entry) = super::choose(session, name, "remove", input)? else {
        ui::info("Cancelled.");
        return Ok(());
    };

    let path = session.venv_base().join(entry.name());
    let confirmation = if yes {
        "yes".to_string()
    } else {
        let message = format!(
            "Permanently delete {}? Type 'yes' to confirm: ",
            path.display()
        );
        prompt::ask(input, &message)?.unwrap_or_default()
    };

    match lifecycle::remove(session.venv_base(), entry.name(), &confirmation)? {
        RemoveOutcome::Removed => ui::success(
            "Removed",
            format!("environment '{}'", entry.display_name()),
        ),
        RemoveOutcome::Cancelled => ui::info("Cancelled. Nothing was removed."),
    }
    Ok(())
}
