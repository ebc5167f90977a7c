//! TemplateSubstitutor - applies the rule table to an artifact
//!
//! All rules run against one in-memory copy; the artifact on disk is only
//! touched once, by a single atomic replace at the end.

use crate::atomic::atomic_write;
use crate::config::EventConfig;
use crate::error::{EventpageError, Result};
use crate::template::anchors::AnchorSet;
use crate::template::report::{RuleReport, SkipReason, SubstitutionReport};
use crate::template::rules::{ReplacementRule, RuleTable};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct TemplateSubstitutor {
    rules: RuleTable,
}

impl TemplateSubstitutor {
    /// Substitutor for a custom anchor set (e.g. a test fixture page)
    pub fn new(anchors: &AnchorSet) -> Result<Self> {
        Ok(Self {
            rules: RuleTable::new(anchors)?,
        })
    }

    pub fn with_rules(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Apply every rule, in table order, to `content`
    ///
    /// Pure: returns the transformed text and the report without any I/O.
    pub fn substitute(&self, content: &str, config: &EventConfig) -> (String, SubstitutionReport) {
        let mut output = content.to_string();
        let mut report = SubstitutionReport::default();

        for rule in self.rules.iter() {
            let entry = apply_rule(rule, &self.rules, &mut output, config);
            debug!(
                "rule {}: {:?} ({} occurrence(s))",
                entry.rule_id, entry.outcome, entry.occurrence_count
            );
            report.push(entry);
        }

        (output, report)
    }

    /// Customize the artifact at `artifact_path` in place
    ///
    /// # Errors
    ///
    /// - `NotFound` if the artifact does not exist
    /// - `Io` if it cannot be read (including non-UTF-8 content)
    /// - `Write` if the atomic replace fails; the original is left intact
    ///
    /// Rules whose anchor is missing never fail the run; they show up as
    /// `notFound` / `skipped` in the returned report.
    pub fn apply(&self, artifact_path: &Path, config: &EventConfig) -> Result<SubstitutionReport> {
        let content = read_artifact(artifact_path)?;
        let (output, report) = self.substitute(&content, config);

        atomic_write(artifact_path, output.as_bytes())?;

        info!(
            "customized {} for '{}': {} replacement(s), {} anchor(s) not found",
            artifact_path.display(),
            config.event_name,
            report.total_replacements(),
            report.not_found().count()
        );
        Ok(report)
    }

    /// Dry run of [`TemplateSubstitutor::apply`]: reads and reports, writes nothing
    pub fn preview(&self, artifact_path: &Path, config: &EventConfig) -> Result<SubstitutionReport> {
        let content = read_artifact(artifact_path)?;
        let (_, report) = self.substitute(&content, config);
        Ok(report)
    }
}

fn read_artifact(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| EventpageError::from_read(path, e))
}

fn apply_rule(
    rule: &ReplacementRule,
    table: &RuleTable,
    content: &mut String,
    config: &EventConfig,
) -> RuleReport {
    let Some(replacement) = rule.resolve(config) else {
        return RuleReport::skipped(rule.id, &rule.anchor, SkipReason::FieldAbsent);
    };

    let count = content.matches(rule.anchor.as_str()).count();
    if count == 0 {
        if rule.required {
            warn!("anchor for rule '{}' not found: {}", rule.id, rule.anchor);
            return RuleReport::not_found(rule.id, &rule.anchor);
        }
        return RuleReport::skipped(rule.id, &rule.anchor, SkipReason::AnchorAbsent);
    }

    // Any anchor left in the output would be matched again on the next run
    if replacement != rule.anchor {
        if let Some(other) = table
            .iter()
            .find(|r| replacement.contains(r.anchor.as_str()))
        {
            warn!(
                "rule '{}' skipped: replacement contains the anchor of rule '{}'",
                rule.id, other.id
            );
            return RuleReport::skipped(rule.id, &rule.anchor, SkipReason::ReintroducesAnchor);
        }
    }

    *content = content.replace(rule.anchor.as_str(), &replacement);
    RuleReport::applied(rule.id, &rule.anchor, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SocialPlatform;
    use crate::template::report::Outcome;
    use crate::template::rules::RuleId;

    const PAGE: &str = r#"<h2>AWS Community Day | August 30, 2024 | New York City</h2>
<a href="presentation-deck.pdf">Deck</a>
<a href="https://forms.gle/your-credits-survey-here">Credits</a>
<a href="https://forms.gle/your-survey-here">Survey</a>
<a href="https://github.com/your-username/your-demo">Demo</a>
<a href="https://www.instagram.com/elifue.tech">Instagram</a>
<footer>AWS Community Day | August 30, 2024 | New York City</footer>
"#;

    fn config() -> EventConfig {
        let mut config = EventConfig::sample();
        config.event_name = "API World 2025".to_string();
        config.date = "Sep 3, 2025".to_string();
        config.city = "Santa Clara".to_string();
        config.credits_url = "https://example.com/credits".to_string();
        config.survey_url = "https://example.com/survey".to_string();
        config.demo_url = "https://example.com/demo".to_string();
        config.deck_pdf = Some("decks/api-world.pdf".to_string());
        config.social_links.clear();
        config
    }

    #[test]
    fn test_substitute_replaces_all_occurrences() {
        let (output, report) = TemplateSubstitutor::default().substitute(PAGE, &config());

        assert!(!output.contains("AWS Community Day"));
        assert_eq!(
            output.matches("API World 2025 | Sep 3, 2025 | Santa Clara").count(),
            2
        );
        let banner = report.get(RuleId::EventBanner).unwrap();
        assert_eq!(banner.outcome, Outcome::Applied);
        assert_eq!(banner.occurrence_count, 2);
        assert!(output.contains(r#"href="decks/api-world.pdf""#));
    }

    #[test]
    fn test_substitute_missing_required_anchor_is_not_found() {
        let (_, report) = TemplateSubstitutor::default().substitute(PAGE, &config());

        // PAGE has no profile image, and that rule is optional
        let image = report.get(RuleId::ProfileImage).unwrap();
        assert_eq!(image.outcome, Outcome::Skipped);
        assert_eq!(image.skip_reason, Some(SkipReason::AnchorAbsent));

        let (_, report) = TemplateSubstitutor::default().substitute("<html></html>", &config());
        assert_eq!(
            report.get(RuleId::DemoLink).unwrap().outcome,
            Outcome::NotFound
        );
        assert!(!report.is_complete());
    }

    #[test]
    fn test_substitute_absent_social_keeps_default() {
        let (output, report) = TemplateSubstitutor::default().substitute(PAGE, &config());

        assert!(output.contains(r#"href="https://www.instagram.com/elifue.tech""#));
        let entry = report
            .get(RuleId::Social(SocialPlatform::Instagram))
            .unwrap();
        assert_eq!(entry.outcome, Outcome::Skipped);
        assert_eq!(entry.skip_reason, Some(SkipReason::FieldAbsent));
    }

    #[test]
    fn test_substitute_is_idempotent() {
        let substitutor = TemplateSubstitutor::default();
        let (first, _) = substitutor.substitute(PAGE, &config());
        let (second, report) = substitutor.substitute(&first, &config());

        assert_eq!(first, second);
        assert!(!report.changed());
    }

    #[test]
    fn test_replacement_containing_anchor_is_skipped() {
        let mut config = config();
        config.city = "New York City".to_string();
        config.event_name = "AWS Community Day | August 30, 2024 | New York City".to_string();

        let substitutor = TemplateSubstitutor::default();
        let (output, report) = substitutor.substitute(PAGE, &config);
        let banner = report.get(RuleId::EventBanner).unwrap();
        assert_eq!(banner.skip_reason, Some(SkipReason::ReintroducesAnchor));

        let (again, _) = substitutor.substitute(&output, &config);
        assert_eq!(output, again);
    }

    #[test]
    fn test_replacement_containing_earlier_anchor_is_skipped() {
        let mut config = config();
        config.survey_url = "https://forms.gle/your-credits-survey-here".to_string();

        let substitutor = TemplateSubstitutor::default();
        let (first, report) = substitutor.substitute(PAGE, &config);
        let survey = report.get(RuleId::FeedbackSurvey).unwrap();
        assert_eq!(survey.outcome, Outcome::Skipped);
        assert_eq!(survey.skip_reason, Some(SkipReason::ReintroducesAnchor));
        assert!(first.contains(r#"href="https://example.com/credits""#));
        assert!(first.contains(r#"href="https://forms.gle/your-survey-here""#));

        let (second, _) = substitutor.substitute(&first, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_replacement_containing_later_anchor_is_skipped() {
        let mut config = config();
        config.credits_url = "https://forms.gle/your-survey-here".to_string();

        let (output, report) = TemplateSubstitutor::default().substitute(PAGE, &config);
        assert_eq!(
            report.get(RuleId::CreditsSurvey).unwrap().skip_reason,
            Some(SkipReason::ReintroducesAnchor)
        );
        assert_eq!(
            report.get(RuleId::FeedbackSurvey).unwrap().outcome,
            Outcome::Applied
        );
        assert!(output.contains(r#"href="https://forms.gle/your-credits-survey-here""#));
    }

    #[test]
    fn test_rules_run_in_table_order() {
        let (_, report) = TemplateSubstitutor::default().substitute(PAGE, &config());
        let ids: Vec<RuleId> = report.entries().iter().map(|e| e.rule_id).collect();
        let table: Vec<RuleId> = TemplateSubstitutor::default()
            .rules()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, table);
    }
}
