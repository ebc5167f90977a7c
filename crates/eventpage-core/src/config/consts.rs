//! Constants shared by the CLI and the engine

/// Default file locations, relative to the working directory
pub mod paths {
    /// Configuration document read by `customize`
    pub const DEFAULT_CONFIG_FILE: &str = "event_config.json";

    /// HTML page rewritten in place
    pub const DEFAULT_ARTIFACT_PATH: &str = "website/index.html";
}

/// Values used when a field is absent or when synthesizing a sample document
pub mod sample {
    /// Deck path shown when `deck_pdf` is not configured
    pub const DEFAULT_DECK_PDF: &str = "presentation-deck.pdf";

    pub const EVENT_NAME: &str = "API World + CloudX + DataWeek 2025";
    pub const DATE: &str = "September 03, 2025";
    pub const CITY: &str = "Santa Clara";
    pub const CREDITS_URL: &str = "https://forms.gle/your-credits-survey-here";
    pub const SURVEY_URL: &str = "https://forms.gle/your-survey-here";
    pub const DEMO_URL: &str = "https://github.com/your-username/your-demo";
    pub const PROFILE_IMAGE_URL: &str = "https://media.licdn.com/dms/image/v2/YOUR_LINKEDIN_IMAGE_URL";

    /// (platform key, url) pairs, one per recognized platform
    pub const SOCIAL_LINKS: [(&str, &str); 5] = [
        ("linkedin", "https://www.linkedin.com/in/your-profile/"),
        ("twitter", "https://twitter.com/your-handle"),
        ("github", "https://github.com/your-username"),
        ("youtube", "https://www.youtube.com/@your-channel"),
        ("instagram", "https://www.instagram.com/your-handle"),
    ];
}
