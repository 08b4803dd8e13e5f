//! Askama Templates
//!
//! Template structs for rendering the guide page.

use askama::Template;
use askama_web::WebTemplate;

use crate::{
    BUILD_VERSION,
    content::{self, Badge, CodeListing, PageMeta, Step},
    error::SiteError,
};

/// Format the label shown above a step title, e.g. `STEP 01`.
///
/// `index` is 1-based. Indices below 10 are zero-padded to two digits.
pub fn step_label(index: usize) -> String {
    format!("STEP {index:02}")
}

/// Hero banner at the top of the page.
pub struct Hero {
    pub heading: &'static str,
    pub lede: &'static str,
    pub badges: &'static [Badge],
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            heading: content::HERO_HEADING,
            lede: content::HERO_LEDE,
            badges: &content::BADGES,
        }
    }
}

/// One tutorial step with its display label.
pub struct StepCard {
    pub label: String,
    pub step: &'static Step,
}

impl StepCard {
    pub fn new(index: usize, step: &'static Step) -> Self {
        Self {
            label: step_label(index),
            step,
        }
    }
}

/// A read-only code listing.
pub struct CodePanel {
    pub title: &'static str,
    pub body: &'static str,
}

impl CodePanel {
    pub fn new(listing: &CodeListing) -> Self {
        Self {
            title: listing.title,
            body: listing.source.trim(),
        }
    }
}

/// The guide page: hero, step cards, then code panels.
#[derive(Template, WebTemplate)]
#[template(path = "guide.html")]
pub struct GuidePage {
    pub meta: PageMeta,
    pub hero: Hero,
    pub cards: Vec<StepCard>,
    pub panels: Vec<CodePanel>,
    /// Build version for cache busting static assets.
    pub v: &'static str,
}

impl GuidePage {
    pub fn new() -> Self {
        Self {
            meta: content::PAGE_META,
            hero: Hero::default(),
            cards: content::STEPS
                .iter()
                .enumerate()
                .map(|(i, step)| StepCard::new(i + 1, step))
                .collect(),
            panels: content::LISTINGS.iter().map(CodePanel::new).collect(),
            v: BUILD_VERSION,
        }
    }
}

impl Default for GuidePage {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the full guide page to an HTML string.
pub fn render_guide() -> Result<String, SiteError> {
    Ok(GuidePage::new().render()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_label_padding() {
        assert_eq!(step_label(1), "STEP 01");
        assert_eq!(step_label(7), "STEP 07");
        assert_eq!(step_label(10), "STEP 10");
        assert_eq!(step_label(123), "STEP 123");
    }

    #[test]
    fn test_cards_follow_step_order() {
        let page = GuidePage::new();
        assert_eq!(page.cards.len(), content::STEPS.len());
        for (i, card) in page.cards.iter().enumerate() {
            assert_eq!(card.label, step_label(i + 1));
            assert_eq!(card.step, &content::STEPS[i]);
        }
    }

    #[test]
    fn test_panel_body_is_trimmed_source() {
        let page = GuidePage::new();
        for (panel, listing) in page.panels.iter().zip(content::LISTINGS.iter()) {
            assert_eq!(panel.title, listing.title);
            assert_eq!(panel.body, listing.source.trim());
            assert!(!panel.body.ends_with('\n'));
        }
    }

    #[test]
    fn test_render_has_metadata() {
        let html = render_guide().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<title>Paper Plugin Villager Trade Guide</title>"));
        assert!(html.contains(
            "<meta name=\"description\" content=\"Step-by-step guide to unlock all villager trades on Paper 1.21.1\">"
        ));
    }

    #[test]
    fn test_render_hero() {
        let html = render_guide().unwrap();
        assert!(html.contains("<h1 class=\"hero__heading\">Unlock Every Villager Trade on Paper 1.21.1</h1>"));
        assert!(html.contains("villagers spawn with all trade tiers unlocked, every time."));
        assert!(html.contains("Kotlin &#38; Java Friendly"));
        assert_eq!(html.matches("class=\"badge ").count(), 3);
    }

    #[test]
    fn test_render_step_cards() {
        let html = render_guide().unwrap();
        assert_eq!(html.matches("<article class=\"step-card\">").count(), 7);
        for i in 1..=7 {
            assert_eq!(html.matches(&step_label(i)).count(), 1);
        }
        assert!(!html.contains("STEP 08"));
        let first = html.find("STEP 01").unwrap();
        let last = html.find("STEP 07").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_render_bullet_counts_per_card() {
        let html = render_guide().unwrap();
        let cards: Vec<&str> = html
            .split("<article class=\"step-card\">")
            .skip(1)
            .map(|rest| rest.split("</article>").next().unwrap())
            .collect();
        assert_eq!(cards.len(), content::STEPS.len());
        for (card, step) in cards.iter().zip(content::STEPS) {
            assert_eq!(card.matches("<li class=\"step-card__bullet\">").count(), step.bullets.len());
        }
    }

    #[test]
    fn test_render_bullets_in_order() {
        let html = render_guide().unwrap();
        let a = html.find("Register the command in").unwrap();
        let b = html.find("In your plugin class, register a").unwrap();
        let c = html.find("Loop through").unwrap();
        let d = html.find("Send feedback to the command sender").unwrap();
        assert!(a < b && b < c && c < d);
    }

    #[test]
    fn test_render_panels_in_order() {
        let html = render_guide().unwrap();
        let gradle = html.find("<h3 class=\"code-panel__title\">build.gradle.kts</h3>").unwrap();
        let plugin = html
            .find("<h3 class=\"code-panel__title\">UnlockedVillagersPlugin.java</h3>")
            .unwrap();
        let listener = html
            .find("<h3 class=\"code-panel__title\">VillagerTradesSource.kt</h3>")
            .unwrap();
        assert!(gradle < plugin && plugin < listener);
        assert!(html.rfind("</article>").unwrap() < gradle);
    }

    /// Undo askama's HTML escaping.
    fn unescape(text: &str) -> String {
        text.replace("&#60;", "<")
            .replace("&#62;", ">")
            .replace("&#34;", "\"")
            .replace("&#39;", "'")
            .replace("&#38;", "&")
    }

    #[test]
    fn test_render_panel_text_round_trips_listing() {
        let html = render_guide().unwrap();
        let bodies: Vec<&str> = html
            .split("<code>")
            .skip(1)
            .map(|rest| rest.split("</code>").next().unwrap())
            .collect();
        assert_eq!(bodies.len(), content::LISTINGS.len());
        for (body, listing) in bodies.iter().zip(content::LISTINGS.iter()) {
            assert_eq!(unescape(body), listing.source.trim(), "{}", listing.title);
        }
    }

    #[test]
    fn test_render_panel_text_is_escaped() {
        let html = render_guide().unwrap();
        assert!(html.contains("Map&#60;Villager.Profession, List&#60;MerchantRecipe&#62;&#62;"));
        assert!(!html.contains("Map<Villager.Profession"));
        // Trimmed: code starts right after the opening tag.
        assert!(html.contains("<code>plugins {"));
        assert!(html.contains("<code>object VillagerTradesSource {"));
    }

    #[test]
    fn test_render_links_versioned_stylesheet() {
        let html = render_guide().unwrap();
        assert!(html.contains(&format!("/public/css/guide.css?v={BUILD_VERSION}")));
    }

    #[test]
    fn test_render_is_idempotent() {
        let first = render_guide().unwrap();
        let second = render_guide().unwrap();
        assert_eq!(first, second);
    }
}
