//! The ten visual variants of the landing page. Every concept page renders
//! the same copy; a theme decides colours, type and which motion effects run.

use stylist::Style;

use crate::motion::reveal::{RevealPreset, VisibilityMode};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Collection {
    Premium,
    Original,
}

impl Collection {
    pub fn title(self) -> &'static str {
        match self {
            Self::Premium => "Premium Variations",
            Self::Original => "Original Concepts",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub secondary: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Fonts {
    pub display: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeroStyle {
    Static,
    /// Fades, shrinks and sinks while scrolled past.
    Fade,
    /// `Fade` plus a growing blur.
    FadeBlur,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeadlineStyle {
    Plain,
    Characters,
    Words,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BenefitsLayout {
    Grid,
    /// One benefit at a time, picked from a row of tabs.
    Tabs,
}

/// Which motion effects a theme turns on.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MotionStyle {
    pub reveal: RevealPreset,
    pub stagger: f64,
    pub hero: HeroStyle,
    pub headline: HeadlineStyle,
    pub benefits: BenefitsLayout,
    pub magnetic: bool,
    pub tilt: bool,
    pub parallax: bool,
    pub scale_on_scroll: bool,
    pub sticky_story: bool,
    pub progress_bar: bool,
    /// Count stats up when they scroll into view, once or on every entry.
    pub counters: Option<VisibilityMode>,
    pub floating_apply: bool,
    /// Side navigation highlighting the section under the viewport midline.
    pub section_nav: bool,
    pub section_lines: bool,
}

impl MotionStyle {
    const BASE: MotionStyle = MotionStyle {
        reveal: RevealPreset::FadeUp,
        stagger: 0.1,
        hero: HeroStyle::Static,
        headline: HeadlineStyle::Plain,
        benefits: BenefitsLayout::Grid,
        magnetic: false,
        tilt: false,
        parallax: false,
        scale_on_scroll: false,
        sticky_story: false,
        progress_bar: false,
        counters: None,
        floating_apply: false,
        section_nav: false,
        section_lines: false,
    };
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Theme {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub collection: Collection,
    pub palette: Palette,
    pub fonts: Fonts,
    pub motion: MotionStyle,
    /// Replaces the shared hero headline lines.
    pub headline: Option<&'static [&'static str]>,
}

pub const THEMES: [Theme; 10] = [
    Theme {
        slug: "v1",
        name: "Cinematic",
        tagline: "Movie Title Energy",
        collection: Collection::Premium,
        palette: Palette {
            background: "#050505",
            surface: "#111111",
            text: "#ffffff",
            muted: "rgba(255, 255, 255, 0.6)",
            accent: "#14b8a6",
            secondary: "#8b5cf6",
        },
        fonts: Fonts { display: "Manrope", body: "Inter" },
        motion: MotionStyle {
            reveal: RevealPreset::BlurUp,
            hero: HeroStyle::FadeBlur,
            headline: HeadlineStyle::Characters,
            section_lines: true,
            ..MotionStyle::BASE
        },
        headline: None,
    },
    Theme {
        slug: "v2",
        name: "Stripe-Level Polish",
        tagline: "Obsessive Detail",
        collection: Collection::Premium,
        palette: Palette {
            background: "#0a0a0a",
            surface: "#141414",
            text: "#fafafa",
            muted: "rgba(250, 250, 250, 0.6)",
            accent: "#14b8a6",
            secondary: "#8b5cf6",
        },
        fonts: Fonts { display: "Inter", body: "Inter" },
        motion: MotionStyle {
            headline: HeadlineStyle::Words,
            hero: HeroStyle::Fade,
            magnetic: true,
            tilt: true,
            counters: Some(VisibilityMode::Once),
            stagger: 0.08,
            ..MotionStyle::BASE
        },
        headline: None,
    },
    Theme {
        slug: "v3",
        name: "Bold Statement",
        tagline: "Massive Type",
        collection: Collection::Premium,
        palette: Palette {
            background: "#050505",
            surface: "#0f0f0f",
            text: "#ffffff",
            muted: "rgba(255, 255, 255, 0.5)",
            accent: "#14b8a6",
            secondary: "#ffffff",
        },
        fonts: Fonts { display: "Space Grotesk", body: "Inter" },
        motion: MotionStyle {
            reveal: RevealPreset::SlideLeft,
            headline: HeadlineStyle::Words,
            hero: HeroStyle::Fade,
            scale_on_scroll: true,
            ..MotionStyle::BASE
        },
        headline: Some(&["BUILD", "YOUR", "LEGACY"]),
    },
    Theme {
        slug: "v4",
        name: "Living Page",
        tagline: "Scroll-Driven",
        collection: Collection::Premium,
        palette: Palette {
            background: "#030303",
            surface: "#0d0d0d",
            text: "#ffffff",
            muted: "rgba(255, 255, 255, 0.55)",
            accent: "#14b8a6",
            secondary: "#8b5cf6",
        },
        fonts: Fonts { display: "Outfit", body: "Inter" },
        motion: MotionStyle {
            hero: HeroStyle::Fade,
            parallax: true,
            scale_on_scroll: true,
            sticky_story: true,
            progress_bar: true,
            counters: Some(VisibilityMode::Repeat),
            ..MotionStyle::BASE
        },
        headline: None,
    },
    Theme {
        slug: "v5",
        name: "Premium Dark",
        tagline: "Luxury Textures",
        collection: Collection::Premium,
        palette: Palette {
            background: "#0a0a0a",
            surface: "#151515",
            text: "#f5f5f4",
            muted: "rgba(245, 245, 244, 0.55)",
            accent: "#fbbf24",
            secondary: "#14b8a6",
        },
        fonts: Fonts { display: "Cormorant Garamond", body: "Inter" },
        motion: MotionStyle {
            reveal: RevealPreset::BlurUp,
            stagger: 0.15,
            hero: HeroStyle::FadeBlur,
            tilt: true,
            section_lines: true,
            ..MotionStyle::BASE
        },
        headline: None,
    },
    Theme {
        slug: "concept-1",
        name: "Dark Gradient",
        tagline: "Tech Modern",
        collection: Collection::Original,
        palette: Palette {
            background: "#0a0a0a",
            surface: "#141414",
            text: "#ffffff",
            muted: "rgba(255, 255, 255, 0.6)",
            accent: "#14b8a6",
            secondary: "#8b5cf6",
        },
        fonts: Fonts { display: "Manrope", body: "Manrope" },
        motion: MotionStyle {
            hero: HeroStyle::Fade,
            benefits: BenefitsLayout::Tabs,
            counters: Some(VisibilityMode::Once),
            floating_apply: true,
            section_nav: true,
            ..MotionStyle::BASE
        },
        headline: None,
    },
    Theme {
        slug: "concept-2",
        name: "Light Editorial",
        tagline: "Magazine Inspired",
        collection: Collection::Original,
        palette: Palette {
            background: "#FAF9F6",
            surface: "#ffffff",
            text: "#1c1917",
            muted: "#57534e",
            accent: "#9E4B3E",
            secondary: "#57534e",
        },
        fonts: Fonts { display: "Playfair Display", body: "Inter" },
        motion: MotionStyle { reveal: RevealPreset::SlideUp, stagger: 0.12, ..MotionStyle::BASE },
        headline: None,
    },
    Theme {
        slug: "concept-3",
        name: "Bold Geometric",
        tagline: "Swiss Design",
        collection: Collection::Original,
        palette: Palette {
            background: "#0A1628",
            surface: "#12213a",
            text: "#ffffff",
            muted: "rgba(255, 255, 255, 0.65)",
            accent: "#FFD93D",
            secondary: "#ffffff",
        },
        fonts: Fonts { display: "Space Grotesk", body: "Space Grotesk" },
        motion: MotionStyle {
            reveal: RevealPreset::SnapIn,
            stagger: 0.05,
            benefits: BenefitsLayout::Tabs,
            ..MotionStyle::BASE
        },
        headline: None,
    },
    Theme {
        slug: "concept-4",
        name: "Soft Organic",
        tagline: "Nature Inspired",
        collection: Collection::Original,
        palette: Palette {
            background: "#FDF8F3",
            surface: "#ffffff",
            text: "#1f2d27",
            muted: "#5f6b64",
            accent: "#2D5A4A",
            secondary: "#B87A5A",
        },
        fonts: Fonts { display: "DM Serif Display", body: "Outfit" },
        motion: MotionStyle { reveal: RevealPreset::FloatIn, stagger: 0.12, ..MotionStyle::BASE },
        headline: None,
    },
    Theme {
        slug: "concept-5",
        name: "Minimalist Luxury",
        tagline: "High Fashion",
        collection: Collection::Original,
        palette: Palette {
            background: "#ffffff",
            surface: "#fafafa",
            text: "#000000",
            muted: "#6b6b6b",
            accent: "#000000",
            secondary: "#B8860B",
        },
        fonts: Fonts { display: "Cormorant Garamond", body: "Inter" },
        motion: MotionStyle {
            reveal: RevealPreset::Cinematic,
            stagger: 0.2,
            section_lines: true,
            ..MotionStyle::BASE
        },
        headline: None,
    },
];

pub fn find(slug: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.slug == slug)
}

pub fn collection(collection: Collection) -> impl Iterator<Item = &'static Theme> {
    THEMES.iter().filter(move |theme| theme.collection == collection)
}

impl Theme {
    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }

    /// Google Fonts stylesheet for the theme's families.
    pub fn fonts_href(&self) -> String {
        let mut families = vec![self.fonts.display];
        if self.fonts.body != self.fonts.display {
            families.push(self.fonts.body);
        }
        let query: Vec<String> = families
            .iter()
            .map(|family| format!("family={}:wght@300;400;500;600;700;800", family.replace(' ', "+")))
            .collect();
        format!("https://fonts.googleapis.com/css2?{}&display=swap", query.join("&"))
    }

    /// CSS custom properties and base typography scoped to the page root.
    pub fn css(&self) -> String {
        let Palette { background, surface, text, muted, accent, secondary } = self.palette;
        format!(
            r#"
            --bg: {background};
            --surface: {surface};
            --text: {text};
            --muted: {muted};
            --accent: {accent};
            --secondary: {secondary};
            --font-display: '{display}', serif;
            --font-body: '{body}', sans-serif;
            background: var(--bg);
            color: var(--text);
            font-family: var(--font-body);
            min-height: 100vh;

            h1, h2, h3 {{
                font-family: var(--font-display);
            }}

            a.button-primary, button.button-primary {{
                background: var(--accent);
                color: var(--bg);
            }}
            "#,
            display = self.fonts.display,
            body = self.fonts.body,
        )
    }

    pub fn stylesheet(&self) -> Result<Style, stylist::Error> {
        Style::new(self.css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_themes_in_two_collections() {
        assert_eq!(collection(Collection::Premium).count(), 5);
        assert_eq!(collection(Collection::Original).count(), 5);
    }

    #[test]
    fn slugs_are_unique_and_resolvable() {
        for theme in &THEMES {
            assert_eq!(THEMES.iter().filter(|t| t.slug == theme.slug).count(), 1);
            assert_eq!(find(theme.slug), Some(theme));
        }
        assert_eq!(find("concept-6"), None);
        assert_eq!(find(""), None);
    }

    #[test]
    fn stagger_values_are_valid() {
        for theme in &THEMES {
            let config = theme.motion.reveal.config();
            assert!(config.with_stagger(theme.motion.stagger).is_ok(), "{}", theme.slug);
        }
    }

    #[test]
    fn fonts_href_lists_each_family_once() {
        let v1 = find("v1").unwrap();
        assert_eq!(
            v1.fonts_href(),
            "https://fonts.googleapis.com/css2?family=Manrope:wght@300;400;500;600;700;800\
             &family=Inter:wght@300;400;500;600;700;800&display=swap"
        );
        let concept3 = find("concept-3").unwrap();
        assert_eq!(concept3.fonts_href().matches("family=").count(), 1);
        assert!(concept3.fonts_href().contains("Space+Grotesk"));
    }

    #[test]
    fn css_carries_the_palette() {
        let concept2 = find("concept-2").unwrap();
        let css = concept2.css();
        assert!(css.contains("--bg: #FAF9F6;"));
        assert!(css.contains("--accent: #9E4B3E;"));
        assert!(css.contains("--font-display: 'Playfair Display', serif;"));
    }

    #[test]
    fn only_v3_overrides_the_headline() {
        let overridden: Vec<&str> =
            THEMES.iter().filter(|t| t.headline.is_some()).map(|t| t.slug).collect();
        assert_eq!(overridden, vec!["v3"]);
    }

    #[test]
    fn living_page_recounts_on_every_entry() {
        assert_eq!(find("v4").unwrap().motion.counters, Some(VisibilityMode::Repeat));
        assert_eq!(find("concept-1").unwrap().motion.counters, Some(VisibilityMode::Once));
        assert_eq!(find("concept-2").unwrap().motion.counters, None);
    }

    #[test]
    fn only_concept_1_tracks_sections() {
        let tracked: Vec<&str> =
            THEMES.iter().filter(|t| t.motion.section_nav).map(|t| t.slug).collect();
        assert_eq!(tracked, vec!["concept-1"]);
    }
}
