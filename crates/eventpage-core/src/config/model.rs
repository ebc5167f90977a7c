use crate::config::consts::sample;
use crate::error::{EventpageError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Required keys, in the order validation reports them
pub const REQUIRED_FIELDS: [&str; 6] = [
    "event_name",
    "date",
    "city",
    "credits_url",
    "survey_url",
    "demo_url",
];

/// Social platforms the page links to. Any other key in `social_links` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Twitter,
    Github,
    Youtube,
    Instagram,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::Linkedin,
        SocialPlatform::Twitter,
        SocialPlatform::Github,
        SocialPlatform::Youtube,
        SocialPlatform::Instagram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Github => "github",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Instagram => "instagram",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SocialPlatform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(())
    }
}

/// event_config.json schema - 1 イベント分のカスタマイズ内容
///
/// Only constructed through [`EventConfig::parse`] (or the sample), so every
/// required field is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventConfig {
    pub event_name: String,
    pub date: String,
    pub city: String,
    pub credits_url: String,
    pub survey_url: String,
    pub demo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_pdf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_profile_image: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub social_links: BTreeMap<SocialPlatform, String>,
    /// Unknown top-level keys, kept for forward compatibility
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire shape before validation: everything optional so that all missing
/// fields can be collected in one pass
#[derive(Debug, Deserialize)]
struct RawEventConfig {
    #[serde(default, alias = "eventName")]
    event_name: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default, alias = "creditsUrl")]
    credits_url: Option<String>,
    #[serde(default, alias = "surveyUrl")]
    survey_url: Option<String>,
    #[serde(default, alias = "demoUrl")]
    demo_url: Option<String>,
    #[serde(default, alias = "deckPdfUrl")]
    deck_pdf: Option<String>,
    #[serde(default, alias = "linkedinProfileImageUrl")]
    linkedin_profile_image: Option<String>,
    #[serde(default, alias = "socialLinks")]
    social_links: Option<Map<String, Value>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl EventConfig {
    /// Parse and validate a JSON document
    ///
    /// `source` is only used for diagnostics.
    pub fn parse(content: &str, source: &Path) -> Result<Self> {
        let raw: RawEventConfig =
            serde_json::from_str(content).map_err(|e| EventpageError::ConfigParse {
                path: source.to_path_buf(),
                reason: e.to_string(),
            })?;
        raw.validate(source)
    }

    /// The sample document written by `ConfigStore::create_sample`
    pub fn sample() -> Self {
        Self {
            event_name: sample::EVENT_NAME.to_string(),
            date: sample::DATE.to_string(),
            city: sample::CITY.to_string(),
            credits_url: sample::CREDITS_URL.to_string(),
            survey_url: sample::SURVEY_URL.to_string(),
            demo_url: sample::DEMO_URL.to_string(),
            deck_pdf: Some(sample::DEFAULT_DECK_PDF.to_string()),
            linkedin_profile_image: Some(sample::PROFILE_IMAGE_URL.to_string()),
            social_links: sample::SOCIAL_LINKS
                .iter()
                .filter_map(|(key, url)| {
                    key.parse::<SocialPlatform>()
                        .ok()
                        .map(|p| (p, url.to_string()))
                })
                .collect(),
            extra: Map::new(),
        }
    }

    /// Banner text: "<event> | <date> | <city>"
    pub fn banner(&self) -> String {
        format!("{} | {} | {}", self.event_name, self.date, self.city)
    }

    pub fn deck_pdf_or_default(&self) -> &str {
        self.deck_pdf.as_deref().unwrap_or(sample::DEFAULT_DECK_PDF)
    }

    pub fn social_link(&self, platform: SocialPlatform) -> Option<&str> {
        self.social_links.get(&platform).map(String::as_str)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Trim-aware emptiness: whitespace-only counts as missing
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RawEventConfig {
    fn validate(self, source: &Path) -> Result<EventConfig> {
        let required = [
            present(self.event_name),
            present(self.date),
            present(self.city),
            present(self.credits_url),
            present(self.survey_url),
            present(self.demo_url),
        ];

        let missing_fields: Vec<String> = REQUIRED_FIELDS
            .iter()
            .zip(required.iter())
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.to_string())
            .collect();

        if !missing_fields.is_empty() {
            return Err(EventpageError::ConfigValidation { missing_fields });
        }

        let social_links = parse_social_links(self.social_links.unwrap_or_default(), source)?;

        let [event_name, date, city, credits_url, survey_url, demo_url] =
            required.map(Option::unwrap_or_default);

        Ok(EventConfig {
            event_name,
            date,
            city,
            credits_url,
            survey_url,
            demo_url,
            deck_pdf: present(self.deck_pdf),
            linkedin_profile_image: present(self.linkedin_profile_image),
            social_links,
            extra: self.extra,
        })
    }
}

fn parse_social_links(
    raw: Map<String, Value>,
    source: &Path,
) -> Result<BTreeMap<SocialPlatform, String>> {
    let mut links = BTreeMap::new();
    for (key, value) in raw {
        let Ok(platform) = key.parse::<SocialPlatform>() else {
            continue;
        };
        match value {
            Value::String(url) if !url.trim().is_empty() => {
                links.insert(platform, url);
            }
            Value::String(_) | Value::Null => {}
            other => {
                return Err(EventpageError::ConfigParse {
                    path: source.to_path_buf(),
                    reason: format!(
                        "social_links.{} must be a string, found {}",
                        key, other
                    ),
                });
            }
        }
    }
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse(json: &str) -> Result<EventConfig> {
        EventConfig::parse(json, Path::new("event_config.json"))
    }

    #[test]
    fn test_parse_minimal_config() {
        let json = r#"{
            "event_name": "API World 2025",
            "date": "Sep 3, 2025",
            "city": "Santa Clara",
            "credits_url": "https://example.com/credits",
            "survey_url": "https://example.com/survey",
            "demo_url": "https://example.com/demo"
        }"#;
        let config = parse(json).unwrap();
        assert_eq!(config.event_name, "API World 2025");
        assert_eq!(config.deck_pdf, None);
        assert_eq!(config.deck_pdf_or_default(), "presentation-deck.pdf");
        assert!(config.social_links.is_empty());
        assert_eq!(config.banner(), "API World 2025 | Sep 3, 2025 | Santa Clara");
    }

    #[test]
    fn test_parse_camel_case_aliases() {
        let json = r#"{
            "eventName": "E",
            "date": "D",
            "city": "C",
            "creditsUrl": "c",
            "surveyUrl": "s",
            "demoUrl": "d",
            "deckPdfUrl": "deck.pdf",
            "socialLinks": { "github": "https://github.com/me" }
        }"#;
        let config = parse(json).unwrap();
        assert_eq!(config.deck_pdf.as_deref(), Some("deck.pdf"));
        assert_eq!(
            config.social_link(SocialPlatform::Github),
            Some("https://github.com/me")
        );
    }

    #[test]
    fn test_missing_fields_reported_together_in_schema_order() {
        let json = r#"{ "demo_url": "d", "date": "  ", "event_name": "E" }"#;
        let err = parse(json).unwrap_err();
        match err {
            EventpageError::ConfigValidation { missing_fields } => {
                assert_eq!(
                    missing_fields,
                    vec!["date", "city", "credits_url", "survey_url"]
                );
            }
            other => panic!("Expected ConfigValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_null_counts_as_missing() {
        let json = r#"{
            "event_name": null, "date": "D", "city": "C",
            "credits_url": "c", "survey_url": "s", "demo_url": "d"
        }"#;
        match parse(json).unwrap_err() {
            EventpageError::ConfigValidation { missing_fields } => {
                assert_eq!(missing_fields, vec!["event_name"]);
            }
            other => panic!("Expected ConfigValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse("{ not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("event_config.json"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let err = parse(r#"{ "event_name": 42 }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = parse("[1, 2, 3]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_unknown_keys_preserved_and_unknown_socials_ignored() {
        let json = r#"{
            "event_name": "E", "date": "D", "city": "C",
            "credits_url": "c", "survey_url": "s", "demo_url": "d",
            "speaker": "Alice",
            "social_links": {
                "twitter": "https://twitter.com/me",
                "mastodon": "https://example.social/@me",
                "instagram": ""
            }
        }"#;
        let config = parse(json).unwrap();
        assert_eq!(config.extra.get("speaker"), Some(&Value::from("Alice")));
        assert_eq!(config.social_links.len(), 1);
        assert_eq!(config.social_link(SocialPlatform::Instagram), None);
    }

    #[test]
    fn test_non_string_social_link_is_parse_error() {
        let json = r#"{
            "event_name": "E", "date": "D", "city": "C",
            "credits_url": "c", "survey_url": "s", "demo_url": "d",
            "social_links": { "github": 7 }
        }"#;
        let err = parse(json).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("social_links.github"));
    }

    #[test]
    fn test_sample_has_every_platform_and_round_trips() {
        let sample = EventConfig::sample();
        assert_eq!(sample.social_links.len(), SocialPlatform::ALL.len());

        let json = sample.to_json_pretty().unwrap();
        let reparsed = parse(&json).unwrap();
        assert_eq!(reparsed, sample);
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("youtube".parse::<SocialPlatform>(), Ok(SocialPlatform::Youtube));
        assert!("YouTube".parse::<SocialPlatform>().is_err());
    }
}
