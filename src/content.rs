//! Marketing copy shared by every concept page, kept as data so the ten
//! variants only differ in theme.

use serde::Deserialize;
use thiserror::Error;

const CONTENT_JSON: &str = include_str!("../assets/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content section `{0}` is empty")]
    Empty(&'static str),
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Content {
    pub brand: String,
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub about: About,
    pub story: Vec<String>,
    pub quote: Quote,
    pub benefits: Benefits,
    pub compensation: Compensation,
    pub testimonials: Testimonials,
    pub requirements: Requirements,
    pub newsletter: Newsletter,
    pub apply: Apply,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Hero {
    pub eyebrow: String,
    pub headline: Vec<String>,
    pub subheadline: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub reassurance: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(untagged)]
pub enum Stat {
    /// Counts up from zero when scrolled into view.
    Counter {
        value: u64,
        #[serde(default)]
        suffix: String,
        label: String,
    },
    /// Shown as-is.
    Fixed { display: String, label: String },
}

impl Stat {
    pub fn label(&self) -> &str {
        match self {
            Stat::Counter { label, .. } | Stat::Fixed { label, .. } => label,
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct About {
    pub label: String,
    pub heading: String,
    pub lead: String,
    pub body: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Quote {
    pub text: String,
    pub highlight: String,
    pub author: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Benefits {
    pub label: String,
    pub heading: String,
    pub items: Vec<Benefit>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Compensation {
    pub label: String,
    pub heading: String,
    pub tiers: Vec<Tier>,
    pub perks: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Tier {
    pub level: String,
    pub range: String,
    pub note: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Testimonials {
    pub label: String,
    pub heading: String,
    /// Width over height of every embedded video.
    pub aspect: f64,
    pub videos: Vec<Testimonial>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub location: String,
    pub media_id: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Requirements {
    pub label: String,
    pub heading: String,
    pub items: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Newsletter {
    pub heading: String,
    pub body: String,
    pub placeholder: String,
    pub button: String,
    pub sending: String,
    pub success: String,
    pub success_note: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Apply {
    pub heading: String,
    pub body: String,
    pub button: String,
}

impl Content {
    /// The copy bundled into the binary.
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(CONTENT_JSON)
    }

    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let sections: [(&'static str, bool); 7] = [
            ("hero.headline", self.hero.headline.is_empty()),
            ("story", self.story.is_empty()),
            ("benefits.items", self.benefits.items.is_empty()),
            ("stats", self.stats.is_empty()),
            ("compensation.tiers", self.compensation.tiers.is_empty()),
            ("testimonials.videos", self.testimonials.videos.is_empty()),
            ("requirements.items", self.requirements.items.is_empty()),
        ];
        match sections.iter().find(|(_, empty)| *empty) {
            Some((name, _)) => Err(ContentError::Empty(name)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads() {
        let content = Content::load().expect("bundled content must parse");
        assert_eq!(content.hero.headline.len(), 2);
        assert_eq!(content.benefits.items.len(), 5);
        assert_eq!(content.compensation.tiers.iter().filter(|t| t.featured).count(), 1);
        assert_eq!(content.testimonials.videos.len(), 4);
        assert_eq!(content.story.len(), 4);
        assert!((content.testimonials.aspect - 16.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn stats_distinguish_counters_from_fixed_values() {
        let content = Content::load().unwrap();
        assert_eq!(
            content.stats[0],
            Stat::Counter { value: 100, suffix: "+".into(), label: "EAs on the team".into() }
        );
        assert_eq!(
            content.stats[1],
            Stat::Counter { value: 20, suffix: String::new(), label: "Countries represented".into() }
        );
        assert!(matches!(&content.stats[3], Stat::Fixed { display, .. } if display == "4.9 ★"));
        assert_eq!(content.stats[3].label(), "EA satisfaction");
    }

    #[test]
    fn empty_sections_are_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(CONTENT_JSON).unwrap();
        value["benefits"]["items"] = serde_json::json!([]);
        let err = Content::parse(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Empty("benefits.items")));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Content::parse("{ \"brand\": 3 }"), Err(ContentError::Parse(_))));
    }
}
