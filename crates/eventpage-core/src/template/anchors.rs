//! Anchor contract - default literals shipped in the unmodified page
//!
//! Each value here is text that occurs verbatim in the stock `index.html`.
//! Editing the page so that one of these disappears is reported as
//! `notFound` at substitution time, so bump [`ANCHOR_SET_VERSION`] whenever
//! the page template and this table change together.

use crate::config::SocialPlatform;
use std::collections::BTreeMap;

/// Version of the production anchor table
pub const ANCHOR_SET_VERSION: &str = "2024.08.1";

/// Default values the rule table searches for
///
/// Link and image values are raw URLs/paths; the rule table frames them as
/// `href="..."` / `src="..."` so only attribute occurrences match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorSet {
    pub event_banner: String,
    pub deck_pdf: String,
    pub credits_url: String,
    pub survey_url: String,
    pub profile_image: String,
    pub demo_url: String,
    pub social: BTreeMap<SocialPlatform, String>,
}

impl AnchorSet {
    /// Anchors of the production page template
    pub fn production() -> Self {
        Self {
            event_banner: "AWS Community Day | August 30, 2024 | New York City".to_string(),
            deck_pdf: "presentation-deck.pdf".to_string(),
            credits_url: "https://forms.gle/your-credits-survey-here".to_string(),
            survey_url: "https://forms.gle/your-survey-here".to_string(),
            profile_image: "https://media.licdn.com/dms/image/v2/D4E03AQHQbOe7VxCGpA/profile-displayphoto-shrink_800_800/profile-displayphoto-shrink_800_800/0/1724173071138?e=1730332800&v=beta&t=YourLinkedInImageToken".to_string(),
            demo_url: "https://github.com/your-username/your-demo".to_string(),
            social: BTreeMap::from([
                (
                    SocialPlatform::Linkedin,
                    "https://www.linkedin.com/in/lizfue/".to_string(),
                ),
                (
                    SocialPlatform::Twitter,
                    "https://twitter.com/ElizabethFue12".to_string(),
                ),
                (
                    SocialPlatform::Github,
                    "https://github.com/elizabethfuentes12".to_string(),
                ),
                (
                    SocialPlatform::Youtube,
                    "https://www.youtube.com/channel/UCr0Gnc-t30m4xyrvsQpNp2Q?sub_confirmation=1"
                        .to_string(),
                ),
                (
                    SocialPlatform::Instagram,
                    "https://www.instagram.com/elifue.tech".to_string(),
                ),
            ]),
        }
    }

    pub fn social(&self, platform: SocialPlatform) -> Option<&str> {
        self.social.get(&platform).map(String::as_str)
    }
}

impl Default for AnchorSet {
    fn default() -> Self {
        Self::production()
    }
}
