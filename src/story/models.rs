use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::StoryError;

/// Narrative sections every generated story is built from, in display order.
pub const SCENES: [&str; 4] = ["Introduction", "Rising Action", "Climax", "Resolution"];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    #[default]
    Fantasy,
    Adventure,
    Mystery,
    Comedy,
    FairyTale,
}

impl Genre {
    pub const ALL: [Genre; 5] = [
        Genre::Fantasy,
        Genre::Adventure,
        Genre::Mystery,
        Genre::Comedy,
        Genre::FairyTale,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Genre::Fantasy => "Fantasy",
            Genre::Adventure => "Adventure",
            Genre::Mystery => "Mystery",
            Genre::Comedy => "Comedy",
            Genre::FairyTale => "Fairy Tale",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Genre::Fantasy => "🏰",
            Genre::Adventure => "🗺️",
            Genre::Mystery => "🔍",
            Genre::Comedy => "😄",
            Genre::FairyTale => "✨",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Lighthearted,
    Adventurous,
    Magical,
    Educational,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Lighthearted,
        Tone::Adventurous,
        Tone::Magical,
        Tone::Educational,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Lighthearted => "Lighthearted",
            Tone::Adventurous => "Adventurous",
            Tone::Magical => "Magical",
            Tone::Educational => "Educational",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tone::Lighthearted => "😊",
            Tone::Adventurous => "⚡",
            Tone::Magical => "🔮",
            Tone::Educational => "📚",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtStyle {
    #[default]
    Cartoon,
    Watercolor,
    Digital,
    Storybook,
}

impl ArtStyle {
    pub const ALL: [ArtStyle; 4] = [
        ArtStyle::Cartoon,
        ArtStyle::Watercolor,
        ArtStyle::Digital,
        ArtStyle::Storybook,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ArtStyle::Cartoon => "Cartoon",
            ArtStyle::Watercolor => "Watercolor",
            ArtStyle::Digital => "Digital Art",
            ArtStyle::Storybook => "Classic Storybook",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ArtStyle::Cartoon => "🎨",
            ArtStyle::Watercolor => "🖌️",
            ArtStyle::Digital => "💻",
            ArtStyle::Storybook => "📖",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    Preschool,
    Elementary,
    Middle,
    #[default]
    All,
}

impl Audience {
    pub const ALL: [Audience; 4] = [
        Audience::Preschool,
        Audience::Elementary,
        Audience::Middle,
        Audience::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Audience::Preschool => "Preschool (3-5)",
            Audience::Elementary => "Elementary (6-10)",
            Audience::Middle => "Middle Grade (11-13)",
            Audience::All => "All Ages",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Audience::Preschool => "👶",
            Audience::Elementary => "🎒",
            Audience::Middle => "📝",
            Audience::All => "👨‍👩‍👧‍👦",
        }
    }
}

pub struct Character {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

/// The fixed cast the dashboard offers. Selection is by name.
pub const CHARACTERS: [Character; 6] = [
    Character {
        name: "Princess",
        emoji: "👸",
        description: "A brave and kind princess",
    },
    Character {
        name: "Knight",
        emoji: "🛡️",
        description: "A valiant knight on a quest",
    },
    Character {
        name: "Dragon",
        emoji: "🐲",
        description: "A friendly dragon companion",
    },
    Character {
        name: "Wizard",
        emoji: "🧙‍♂️",
        description: "A wise and magical wizard",
    },
    Character {
        name: "Fairy",
        emoji: "🧚‍♀️",
        description: "A magical fairy helper",
    },
    Character {
        name: "Owl",
        emoji: "🦉",
        description: "A wise owl guide",
    },
];

/// Click semantics of the character grid: a second click on a selected
/// character removes it, otherwise it is appended. Order of first selection
/// is preserved.
pub fn toggle_character(selected: &[String], name: &str) -> Vec<String> {
    if selected.iter().any(|n| n == name) {
        selected.iter().filter(|n| *n != name).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(name.to_string());
        next
    }
}

/// One generation job, built fresh from the current selections on every
/// submit. Unset selections fall back to their catalog defaults.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct StoryRequest {
    pub story_idea: String,
    pub genre: Genre,
    pub tone: Tone,
    pub art_style: ArtStyle,
    pub audience: Audience,
    pub characters: Vec<String>,
}

impl StoryRequest {
    pub fn new(
        idea: &str,
        genre: Option<Genre>,
        tone: Option<Tone>,
        art_style: Option<ArtStyle>,
        audience: Option<Audience>,
        characters: &[String],
    ) -> Result<Self, StoryError> {
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(StoryError::EmptyIdea);
        }
        Ok(StoryRequest {
            story_idea: idea.to_string(),
            genre: genre.unwrap_or_default(),
            tone: tone.unwrap_or_default(),
            art_style: art_style.unwrap_or_default(),
            audience: audience.unwrap_or_default(),
            characters: characters.to_vec(),
        })
    }
}

/// What the backend hands back for one generation. `story` maps scene names
/// to text and may additionally carry a "title" entry; `images` maps scene
/// names to relative paths, null when an illustration failed.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
pub struct StoryResult {
    pub success: bool,
    #[serde(default)]
    pub story: HashMap<String, String>,
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl StoryResult {
    pub fn title(&self) -> Option<&str> {
        self.story.get("title").map(String::as_str)
    }

    pub fn scene_text(&self, scene: &str) -> Option<&str> {
        self.story.get(scene).map(String::as_str)
    }

    pub fn image_path(&self, scene: &str) -> Option<&str> {
        self.images
            .get(scene)
            .and_then(|path| path.as_deref())
    }
}

#[derive(Serialize)]
pub struct PdfOptions<'a> {
    pub genre: Genre,
    pub tone: Tone,
    pub art_style: ArtStyle,
    pub audience: Audience,
    pub characters: &'a [String],
    pub story_idea: &'a str,
}

/// Body of the export call: the story as received plus the options it was
/// generated with, so the backend can decorate the document.
#[derive(Serialize)]
pub struct PdfExportRequest<'a> {
    pub story: &'a HashMap<String, String>,
    pub images: &'a HashMap<String, Option<String>>,
    pub options: PdfOptions<'a>,
}

impl<'a> PdfExportRequest<'a> {
    pub fn new(result: &'a StoryResult, request: &'a StoryRequest) -> Self {
        PdfExportRequest {
            story: &result.story,
            images: &result.images,
            options: PdfOptions {
                genre: request.genre,
                tone: request.tone,
                art_style: request.art_style,
                audience: request.audience,
                characters: &request.characters,
                story_idea: &request.story_idea,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_ideas_never_become_requests() {
        for idea in ["", "   ", "\n\t  "] {
            let result = StoryRequest::new(idea, None, None, None, None, &[]);
            assert_eq!(result.unwrap_err(), StoryError::EmptyIdea);
        }
    }

    #[test]
    fn idea_is_trimmed_and_defaults_fill_the_payload() {
        let request =
            StoryRequest::new("  A dragon learns to paint  ", None, None, None, None, &[])
                .unwrap();
        let payload = serde_json::to_value(&request).unwrap();
        assert_eq!(
            payload,
            json!({
                "story_idea": "A dragon learns to paint",
                "genre": "fantasy",
                "tone": "lighthearted",
                "art_style": "cartoon",
                "audience": "all",
                "characters": [],
            })
        );
    }

    #[test]
    fn multi_word_variants_serialize_kebab_case() {
        let request = StoryRequest::new(
            "A lost crown",
            Some(Genre::FairyTale),
            Some(Tone::Magical),
            Some(ArtStyle::Storybook),
            Some(Audience::Preschool),
            &["Princess".to_string()],
        )
        .unwrap();
        let payload = serde_json::to_value(&request).unwrap();
        assert_eq!(payload["genre"], "fairy-tale");
        assert_eq!(payload["tone"], "magical");
        assert_eq!(payload["audience"], "preschool");
        assert_eq!(payload["characters"], json!(["Princess"]));
    }

    #[test]
    fn toggling_twice_removes_a_character() {
        let selected = toggle_character(&[], "Knight");
        assert_eq!(selected, vec!["Knight".to_string()]);
        let selected = toggle_character(&selected, "Knight");
        assert!(selected.is_empty());
    }

    #[test]
    fn toggle_preserves_selection_order() {
        let mut selected = Vec::new();
        for name in ["Owl", "Dragon", "Fairy"] {
            selected = toggle_character(&selected, name);
        }
        selected = toggle_character(&selected, "Dragon");
        assert_eq!(selected, vec!["Owl".to_string(), "Fairy".to_string()]);
    }

    #[test]
    fn result_decodes_scenes_title_and_missing_images() {
        let raw = json!({
            "success": true,
            "story": {
                "title": "The Painting Dragon",
                "Introduction": "Once upon a time...",
                "Resolution": "And they painted happily ever after."
            },
            "images": {
                "Introduction": "/static/intro.png",
                "Resolution": null
            },
            "warning": "2 of 4 illustrations could not be generated",
            "metadata": { "generation_time": "12.31s" }
        });
        let result: StoryResult = serde_json::from_value(raw).unwrap();
        assert!(result.success);
        assert_eq!(result.title(), Some("The Painting Dragon"));
        assert_eq!(result.scene_text("Introduction"), Some("Once upon a time..."));
        assert_eq!(result.scene_text("Climax"), None);
        assert_eq!(result.image_path("Introduction"), Some("/static/intro.png"));
        assert_eq!(result.image_path("Resolution"), None);
        assert!(result.warning.is_some());
    }

    #[test]
    fn export_body_carries_story_images_and_options() {
        let mut result = StoryResult::default();
        result
            .story
            .insert("Introduction".to_string(), "Once...".to_string());
        result
            .images
            .insert("Introduction".to_string(), Some("/static/i.png".to_string()));
        let request = StoryRequest::new(
            "A dragon learns to paint",
            Some(Genre::Comedy),
            None,
            None,
            None,
            &["Dragon".to_string()],
        )
        .unwrap();

        let payload = serde_json::to_value(PdfExportRequest::new(&result, &request)).unwrap();
        assert_eq!(payload["story"]["Introduction"], "Once...");
        assert_eq!(payload["images"]["Introduction"], "/static/i.png");
        assert_eq!(payload["options"]["genre"], "comedy");
        assert_eq!(payload["options"]["art_style"], "cartoon");
        assert_eq!(payload["options"]["story_idea"], "A dragon learns to paint");
        assert_eq!(payload["options"]["characters"], json!(["Dragon"]));
    }
}
