//! Select command - Make an unlocked module active

use std::path::Path;

use crate::errors::Result;
use crate::schemas::ModuleId;

use super::session::Session;
use super::status::print_journey;

pub async fn run(cwd: Option<&Path>, id: ModuleId) -> Result<()> {
    let mut session = Session::open(cwd)?;
    session.journey.select(id)?;
    session.save().await?;

    print_journey(&session.journey);
    Ok(())
}
