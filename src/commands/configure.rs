use crate::config::Config;
use crate::lifecycle::is_affirmative;
use crate::session::Session;
use crate::util::paths;
use crate::{prompt, ui};
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::BufRead;
use std::path::Path;

pub fn execute<R: BufRead>(session: &Session, input: &mut R) -> Result<()> {
    let current = session.venv_base();
    let message = format!(
        "Virtual environment directory [{}]: ",
        current.display()
    );
    let answer = prompt::ask(input, &message)?.unwrap_or_default();

    let venv_base = if answer.trim().is_empty() {
        current.to_path_buf()
    } else {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        paths::expand(answer.trim(), &cwd)?
    };

    ensure_directory(&venv_base, input)?;

    Config::new(&venv_base).save(session.config_path())?;
    ui::success(
        "Saved",
        format!(
            "environment directory {} to {}",
            venv_base.display(),
            session.config_path().display()
        ),
    );
    Ok(())
}

/// Offer to create `path` when it is missing
fn ensure_directory<R: BufRead>(path: &Path, input: &mut R) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        anyhow::bail!("{} exists but is not a directory", path.display());
    }

    let message = format!(
        "{} does not exist. Create it? Type 'yes' to confirm: ",
        path.display()
    );
    let answer = prompt::ask(input, &message)?.unwrap_or_default();
    if is_affirmative(&answer) {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        ui::success("Created", path.display());
    } else {
        ui::warn(format!(
            "{} does not exist yet; 'list' will fail until it is created.",
            path.display()
        ));
    }
    Ok(())
}
