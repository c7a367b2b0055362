use crate::session::Session;
use crate::ui;
use anyhow::Result;

pub fn execute(session: &Session) -> Result<()> {
    let snapshot = super::non_empty_snapshot(session)?;
    ui::listing(&snapshot);
    Ok(())
}
