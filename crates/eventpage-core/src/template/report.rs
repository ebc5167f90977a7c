//! SubstitutionReport - per-rule outcome of one substitution run

use crate::template::rules::RuleId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Applied,
    Skipped,
    NotFound,
}

/// Why a rule was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// The config field backing the rule is absent
    FieldAbsent,
    /// Optional rule whose anchor is not in the artifact
    AnchorAbsent,
    /// Replacement contains an anchor of the table; applying it would not be idempotent
    ReintroducesAnchor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleReport {
    pub rule_id: RuleId,
    pub anchor: String,
    pub outcome: Outcome,
    pub occurrence_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<SkipReason>,
}

impl RuleReport {
    pub(crate) fn applied(rule_id: RuleId, anchor: &str, occurrence_count: usize) -> Self {
        Self {
            rule_id,
            anchor: anchor.to_string(),
            outcome: Outcome::Applied,
            occurrence_count,
            skip_reason: None,
        }
    }

    pub(crate) fn skipped(rule_id: RuleId, anchor: &str, reason: SkipReason) -> Self {
        Self {
            rule_id,
            anchor: anchor.to_string(),
            outcome: Outcome::Skipped,
            occurrence_count: 0,
            skip_reason: Some(reason),
        }
    }

    pub(crate) fn not_found(rule_id: RuleId, anchor: &str) -> Self {
        Self {
            rule_id,
            anchor: anchor.to_string(),
            outcome: Outcome::NotFound,
            occurrence_count: 0,
            skip_reason: None,
        }
    }
}

/// Ordered outcomes, one per rule in table order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubstitutionReport {
    entries: Vec<RuleReport>,
}

impl SubstitutionReport {
    pub(crate) fn push(&mut self, entry: RuleReport) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[RuleReport] {
        &self.entries
    }

    pub fn get(&self, rule_id: RuleId) -> Option<&RuleReport> {
        self.entries.iter().find(|e| e.rule_id == rule_id)
    }

    fn with_outcome(&self, outcome: Outcome) -> impl Iterator<Item = &RuleReport> {
        self.entries.iter().filter(move |e| e.outcome == outcome)
    }

    pub fn applied(&self) -> impl Iterator<Item = &RuleReport> {
        self.with_outcome(Outcome::Applied)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &RuleReport> {
        self.with_outcome(Outcome::Skipped)
    }

    pub fn not_found(&self) -> impl Iterator<Item = &RuleReport> {
        self.with_outcome(Outcome::NotFound)
    }

    /// Sum of replaced occurrences across all applied rules
    pub fn total_replacements(&self) -> usize {
        self.applied().map(|e| e.occurrence_count).sum()
    }

    /// True when no required anchor was missing
    ///
    /// A stricter pipeline can escalate `!is_complete()` to a failure.
    pub fn is_complete(&self) -> bool {
        self.not_found().next().is_none()
    }

    /// True when at least one rule replaced something
    pub fn changed(&self) -> bool {
        self.total_replacements() > 0
    }
}
