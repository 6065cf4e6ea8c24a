//! Payloads for the built-in catalogue

use crate::errors::{JourneyError, Result};
use crate::schemas::{ComicContent, ComicPage, ModuleContent, ModuleId, QuizContent, VideoContent};

use super::ContentProvider;

const QUIZ_URL: &str = "https://view.genially.com/682cd17f7e26505a343ccfa1";

/// Content for the three built-in modules
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinContent;

impl ContentProvider for BuiltinContent {
    fn content(&self, id: ModuleId) -> Result<ModuleContent> {
        match id.0 {
            1 => Ok(ModuleContent::Video(VideoContent {
                title: "Understanding Peace".to_string(),
                description: "Educational video about promoting peace and understanding"
                    .to_string(),
                video_url: "/api/videos/animation-odl.MP4".to_string(),
                filename: "animation-odl.MP4".to_string(),
            })),
            2 => Ok(ModuleContent::Quiz(QuizContent {
                title: "Millionaire Quiz: Peace Knowledge".to_string(),
                description:
                    "Test your understanding with this interactive millionaire-style quiz"
                        .to_string(),
                quiz_type: "genially".to_string(),
                iframe_url: QUIZ_URL.to_string(),
                iframe_html: quiz_iframe(),
                completion_method: "manual".to_string(),
            })),
            3 => Ok(ModuleContent::Comic(ComicContent {
                title: "Visual Journey: The Power of Unity".to_string(),
                pages: vec![
                    page(
                        1,
                        "A New Friend",
                        "Sarah is new to the community and feels nervous about making connections.",
                    ),
                    page(
                        2,
                        "Building Bridges",
                        "The community welcomes Sarah with open arms and understanding.",
                    ),
                    page(
                        3,
                        "Growing Together",
                        "Through shared activities, new friendships begin to bloom.",
                    ),
                    page(
                        4,
                        "Supporting Each Other",
                        "The community comes together to celebrate their diversity.",
                    ),
                ],
            })),
            _ => Err(JourneyError::ContentNotFound(id)),
        }
    }
}

fn quiz_iframe() -> String {
    format!(
        concat!(
            r#"<div style="width: 100%;"><div style="position: relative; padding-bottom: 56.25%; padding-top: 0; height: 0;">"#,
            r#"<iframe title="Millionaire Quiz" frameborder="0" width="1200px" height="675px" "#,
            r#"style="position: absolute; top: 0; left: 0; width: 100%; height: 100%;" src="{}" "#,
            r#"type="text/html" allowscriptaccess="always" allowfullscreen="true" scrolling="yes" allownetworking="all">"#,
            r#"</iframe> </div> </div>"#
        ),
        QUIZ_URL
    )
}

fn page(id: u32, title: &str, description: &str) -> ComicPage {
    ComicPage {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image_url: format!("/api/comics/comic-{}.jpeg", id),
    }
}
