//! Replacement rule table
//!
//! The table is fixed data built from an [`AnchorSet`]; it never depends on
//! the configuration document. Order matters: rules run top to bottom on the
//! same in-memory buffer.

use crate::config::{EventConfig, SocialPlatform};
use crate::error::{EventpageError, Result};
use crate::template::anchors::AnchorSet;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Stable rule identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    EventBanner,
    DeckLink,
    CreditsSurvey,
    FeedbackSurvey,
    ProfileImage,
    DemoLink,
    Social(SocialPlatform),
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleId::EventBanner => f.write_str("event-banner"),
            RuleId::DeckLink => f.write_str("deck-link"),
            RuleId::CreditsSurvey => f.write_str("credits-survey"),
            RuleId::FeedbackSurvey => f.write_str("feedback-survey"),
            RuleId::ProfileImage => f.write_str("profile-image"),
            RuleId::DemoLink => f.write_str("demo-link"),
            RuleId::Social(platform) => write!(f, "social-{}", platform),
        }
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How a raw value is embedded in the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Plain text
    Text,
    /// `href="..."`
    Href,
    /// `src="..."`
    Src,
}

impl Frame {
    pub fn wrap(&self, value: &str) -> String {
        match self {
            Frame::Text => value.to_string(),
            Frame::Href => format!("href=\"{}\"", value),
            Frame::Src => format!("src=\"{}\"", value),
        }
    }
}

/// Which part of the config feeds a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Banner,
    DeckPdf,
    CreditsUrl,
    SurveyUrl,
    ProfileImage,
    DemoUrl,
    Social(SocialPlatform),
}

impl ValueSource {
    /// Raw value, or `None` when the backing field is absent
    pub fn resolve(&self, config: &EventConfig) -> Option<String> {
        match self {
            ValueSource::Banner => Some(config.banner()),
            ValueSource::DeckPdf => config.deck_pdf.clone(),
            ValueSource::CreditsUrl => Some(config.credits_url.clone()),
            ValueSource::SurveyUrl => Some(config.survey_url.clone()),
            ValueSource::ProfileImage => config.linkedin_profile_image.clone(),
            ValueSource::DemoUrl => Some(config.demo_url.clone()),
            ValueSource::Social(platform) => config.social_link(*platform).map(str::to_string),
        }
    }
}

/// One (anchor, resolver, required) entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    pub id: RuleId,
    /// Exact literal searched for, already framed
    pub anchor: String,
    pub source: ValueSource,
    pub frame: Frame,
    /// Missing anchor is reported as `notFound` rather than `skipped`
    pub required: bool,
}

impl ReplacementRule {
    fn new(id: RuleId, raw_anchor: &str, source: ValueSource, frame: Frame, required: bool) -> Self {
        Self {
            id,
            anchor: frame.wrap(raw_anchor),
            source,
            frame,
            required,
        }
    }

    /// Framed replacement text, or `None` to skip the rule
    pub fn resolve(&self, config: &EventConfig) -> Option<String> {
        self.source
            .resolve(config)
            .map(|value| self.frame.wrap(&value))
    }
}

/// Ordered, immutable set of replacement rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<ReplacementRule>,
}

impl RuleTable {
    /// Build and validate a table from an anchor set
    ///
    /// # Errors
    ///
    /// `InvalidAnchorSet` if an anchor is empty, a social platform has no
    /// anchor, or two rules share the same anchor.
    pub fn new(anchors: &AnchorSet) -> Result<Self> {
        if let Some(missing) = SocialPlatform::ALL
            .iter()
            .find(|p| anchors.social(**p).is_none())
        {
            return Err(EventpageError::InvalidAnchorSet {
                reason: format!("no anchor for social platform '{}'", missing),
            });
        }

        let table = Self::build(anchors);
        table.validate()?;
        Ok(table)
    }

    /// Table for the production page template
    pub fn production() -> Self {
        Self::build(&AnchorSet::production())
    }

    fn build(anchors: &AnchorSet) -> Self {
        let mut rules = vec![
            ReplacementRule::new(
                RuleId::EventBanner,
                &anchors.event_banner,
                ValueSource::Banner,
                Frame::Text,
                true,
            ),
            ReplacementRule::new(
                RuleId::DeckLink,
                &anchors.deck_pdf,
                ValueSource::DeckPdf,
                Frame::Href,
                true,
            ),
            ReplacementRule::new(
                RuleId::CreditsSurvey,
                &anchors.credits_url,
                ValueSource::CreditsUrl,
                Frame::Href,
                true,
            ),
            ReplacementRule::new(
                RuleId::FeedbackSurvey,
                &anchors.survey_url,
                ValueSource::SurveyUrl,
                Frame::Href,
                true,
            ),
            ReplacementRule::new(
                RuleId::ProfileImage,
                &anchors.profile_image,
                ValueSource::ProfileImage,
                Frame::Src,
                false,
            ),
            ReplacementRule::new(
                RuleId::DemoLink,
                &anchors.demo_url,
                ValueSource::DemoUrl,
                Frame::Href,
                true,
            ),
        ];

        for platform in SocialPlatform::ALL {
            if let Some(anchor) = anchors.social(platform) {
                rules.push(ReplacementRule::new(
                    RuleId::Social(platform),
                    anchor,
                    ValueSource::Social(platform),
                    Frame::Href,
                    false,
                ));
            }
        }

        Self { rules }
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.anchor == rule.frame.wrap("") {
                return Err(EventpageError::InvalidAnchorSet {
                    reason: format!("empty anchor for rule '{}'", rule.id),
                });
            }
            if !seen.insert(rule.anchor.as_str()) {
                return Err(EventpageError::InvalidAnchorSet {
                    reason: format!("duplicate anchor '{}' (rule '{}')", rule.anchor, rule.id),
                });
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReplacementRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: RuleId) -> Option<&ReplacementRule> {
        self.rules.iter().find(|r| r.id == id)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_table_is_valid() {
        let table = RuleTable::new(&AnchorSet::production()).unwrap();
        assert_eq!(table, RuleTable::production());
        assert_eq!(table.len(), 6 + SocialPlatform::ALL.len());
    }

    #[test]
    fn test_rule_order() {
        let ids: Vec<String> = RuleTable::production()
            .iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "event-banner",
                "deck-link",
                "credits-survey",
                "feedback-survey",
                "profile-image",
                "demo-link",
                "social-linkedin",
                "social-twitter",
                "social-github",
                "social-youtube",
                "social-instagram",
            ]
        );
    }

    #[test]
    fn test_anchors_are_framed() {
        let table = RuleTable::production();
        assert_eq!(
            table.get(RuleId::DeckLink).unwrap().anchor,
            "href=\"presentation-deck.pdf\""
        );
        assert!(table
            .get(RuleId::ProfileImage)
            .unwrap()
            .anchor
            .starts_with("src=\"https://media.licdn.com/"));
        assert_eq!(
            table.get(RuleId::EventBanner).unwrap().anchor,
            "AWS Community Day | August 30, 2024 | New York City"
        );
    }

    #[test]
    fn test_duplicate_anchor_rejected() {
        let mut anchors = AnchorSet::production();
        anchors.survey_url = anchors.credits_url.clone();

        let err = RuleTable::new(&anchors).unwrap_err();
        assert!(err.to_string().contains("duplicate anchor"));
    }

    #[test]
    fn test_empty_anchor_rejected() {
        let mut anchors = AnchorSet::production();
        anchors.event_banner.clear();

        let err = RuleTable::new(&anchors).unwrap_err();
        assert!(err.to_string().contains("event-banner"));
    }

    #[test]
    fn test_missing_social_anchor_rejected() {
        let mut anchors = AnchorSet::production();
        anchors.social.remove(&SocialPlatform::Youtube);

        let err = RuleTable::new(&anchors).unwrap_err();
        assert!(err.to_string().contains("youtube"));
    }

    #[test]
    fn test_resolve_absent_field_skips() {
        let mut config = EventConfig::sample();
        config.deck_pdf = None;
        config.social_links.remove(&SocialPlatform::Instagram);

        let table = RuleTable::production();
        assert_eq!(table.get(RuleId::DeckLink).unwrap().resolve(&config), None);
        assert_eq!(
            table
                .get(RuleId::Social(SocialPlatform::Instagram))
                .unwrap()
                .resolve(&config),
            None
        );
        assert_eq!(
            table.get(RuleId::CreditsSurvey).unwrap().resolve(&config),
            Some(format!("href=\"{}\"", config.credits_url))
        );
    }

    #[test]
    fn test_rule_id_serializes_as_string() {
        let json = serde_json::to_string(&RuleId::Social(SocialPlatform::Github)).unwrap();
        assert_eq!(json, "\"social-github\"");
    }
}
