use crate::activation;
use crate::session::Session;
use crate::ui;
use anyhow::Result;
use std::ffi::OsString;
use std::io::BufRead;

pub fn execute<R: BufRead>(session: &Session, name: Option<OsString>, input: &mut R) -> Result<()> {
    let Some(entry) = super::choose(session, name, "activate", input)? else {
        ui::info("Cancelled.");
        return Ok(());
    };

    // The directory may have changed since it was listed
    let target = activation::resolve(session.venv_base(), entry.name(), session.platform())?;

    ui::status(
        "Activate",
        format!(
            "run the following to activate '{}':",
            target.name.to_string_lossy()
        ),
    );
    println!("{}", target.command);
    Ok(())
}
