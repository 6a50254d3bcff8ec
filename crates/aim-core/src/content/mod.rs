//! Site content
//!
//! Everything the landing page displays that is data rather than layout:
//! testimonials, feature cards, pricing tiers, navigation and footer link
//! groups. The document ships inside the binary so the server render and
//! the hydrated client always agree on it.

mod preview;
mod pricing;

use serde::{Deserialize, Serialize};

use crate::CoreResult;

pub use preview::{ChartBox, PreviewContent, PreviewMetric, SeriesPoint};
pub use pricing::{BillingCycle, DisplayPrice, Price, PricingPlan};

const EMBEDDED_CONTENT: &str = include_str!("../../content/site.json");

/// One labelled figure on a testimonial, e.g. `efficiency: +45%`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub image_url: String,
    pub quote: String,
    /// Rendered in this order
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub company: String,
    pub title: String,
    pub description: String,
    pub metric: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStat {
    pub icon: String,
    pub value: String,
    pub label: String,
    /// Tailwind text colour for the icon
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaMetric {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationItem {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationCategory {
    pub category: String,
    pub items: Vec<IntegrationItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationFeature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integrations {
    pub categories: Vec<IntegrationCategory>,
    pub features: Vec<IntegrationFeature>,
    pub api_example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownItem {
    pub icon: String,
    pub label: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub link: String,
    #[serde(default)]
    pub dropdown: Vec<DropdownItem>,
}

impl NavItem {
    pub fn has_dropdown(&self) -> bool {
        !self.dropdown.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterGroup {
    pub title: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub groups: Vec<FooterGroup>,
    pub social: Vec<SocialLink>,
}

/// Complete content document for the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub nav: Vec<NavItem>,
    pub hero_stats: Vec<HeroStat>,
    pub features: Vec<Feature>,
    pub preview: PreviewContent,
    pub cta_metrics: Vec<CtaMetric>,
    pub integrations: Integrations,
    pub testimonials: Vec<Testimonial>,
    pub case_studies: Vec<CaseStudy>,
    pub plans: Vec<PricingPlan>,
    pub footer: FooterContent,
}

impl SiteContent {
    /// Content compiled into the crate
    pub fn embedded() -> CoreResult<Self> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        tracing::debug!(
            testimonials = content.testimonials.len(),
            plans = content.plans.len(),
            "Loaded site content"
        );
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Carousel;

    #[test]
    fn test_embedded_content_parses() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.plans.len(), 3);
        assert_eq!(content.features.len(), 4);
        assert_eq!(content.footer.groups.len(), 4);
    }

    #[test]
    fn test_testimonial_stats_keep_order() {
        let content = SiteContent::embedded().unwrap();
        let labels: Vec<&str> = content.testimonials[1]
            .stats
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["uptime", "maintenance", "roi"]);
    }

    #[test]
    fn test_embedded_testimonials_rotate() {
        let content = SiteContent::embedded().unwrap();
        let mut carousel = Carousel::new(content.testimonials).unwrap();
        carousel.next();
        assert_eq!(carousel.current().name, "Michael Rodriguez");
        carousel.previous();
        carousel.previous();
        assert_eq!(carousel.current().name, "Lisa Thompson");
    }

    #[test]
    fn test_nav_dropdowns() {
        let content = SiteContent::embedded().unwrap();
        let with_dropdown: Vec<&str> = content
            .nav
            .iter()
            .filter(|item| item.has_dropdown())
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(with_dropdown, vec!["Products", "Solutions"]);
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        assert!(SiteContent::from_json(r#"{"nav": []}"#).is_err());
    }
}
