//! Finish command - Skip straight to the finished phase

use std::path::Path;

use crate::errors::Result;

use super::session::Session;
use super::status::print_journey;

pub async fn run(cwd: Option<&Path>) -> Result<()> {
    let mut session = Session::open(cwd)?;
    session.journey.finish();
    session.save().await?;

    print_journey(&session.journey);
    Ok(())
}
