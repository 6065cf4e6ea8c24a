//! Content command - Show the payload a module would be mounted with

use std::path::Path;

use crate::config::load_config;
use crate::content::provider_for;
use crate::errors::{JourneyError, Result};
use crate::fs::{find_journey_root, resolve_cwd};
use crate::handlers::{mount, MountedHandler};
use crate::registry::ModuleRegistry;
use crate::schemas::{Module, ModuleId};

/// Fetch a module's content and check it mounts on the module's handler
pub async fn run(cwd: Option<&Path>, id: ModuleId, json: bool) -> Result<()> {
    let root = find_journey_root(&resolve_cwd(cwd))?;
    let config = load_config(&root)?;
    let registry = ModuleRegistry::from_config(&config)?;
    let def = registry.get(id).ok_or(JourneyError::UnknownModule(id))?;

    let content = provider_for(&root, &config).content(id)?;

    if json {
        let out = serde_json::to_string_pretty(&content)
            .map_err(|e| JourneyError::InvalidJson(e.to_string()))?;
        mount(&Module::from(def), content)?;
        println!("{}", out);
        return Ok(());
    }

    match mount(&Module::from(def), content)? {
        MountedHandler::Video(video) => {
            let c = video.content();
            println!("{} (video)\n  {}\n  {}", c.title, c.description, c.video_url);
        }
        MountedHandler::Quiz(quiz) => {
            let c = quiz.content();
            println!(
                "{} (quiz, completion: {})\n  {}\n  {}",
                c.title, c.completion_method, c.description, c.iframe_url
            );
        }
        MountedHandler::Comic(comic) => {
            println!("{} (comic, {} pages)", comic.content().title, comic.page_count());
            for page in &comic.content().pages {
                println!("  {}. {} - {}", page.id, page.title, page.image_url);
            }
        }
    }
    Ok(())
}
