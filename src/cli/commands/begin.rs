//! Begin command - Introduce the user and start the first module

use std::path::Path;

use crate::errors::Result;

use super::session::Session;
use super::status::print_journey;

pub async fn run(cwd: Option<&Path>, name: &str) -> Result<()> {
    let mut session = Session::open(cwd)?;
    session.journey.begin(name)?;
    session.save().await?;

    print_journey(&session.journey);
    Ok(())
}
