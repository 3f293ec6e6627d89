//! WHO Medical Eligibility Criteria rule table.
//!
//! Rules are data: a trigger predicate over [`NormalizedAnswers`] plus the
//! effects applied when it fires. The table is grouped by clinical section,
//! one file per section, and is evaluated by a single generic loop in
//! [`crate::engine`].

mod cardiovascular;
mod comorbidities;
mod gynecological;
mod infection;
mod medication;
mod menstrual;
mod personal;
mod pregnancy;
mod prothrombotic;

use crate::answers::AnswerResult;
use crate::normalize::NormalizedAnswers;
use crate::types::{MecScore, Method};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

pub(crate) const MEC2: MecScore = MecScore::BENEFITS_OUTWEIGH_RISKS;
pub(crate) const MEC3: MecScore = MecScore::RISKS_OUTWEIGH_BENEFITS;
pub(crate) const MEC4: MecScore = MecScore::UNACCEPTABLE_RISK;

/// Pill, injectable, patch and ring containing estrogen
pub(crate) const COMBINED: &[Method] = &[
    Method::CombinedPill,
    Method::CombinedInjectable,
    Method::Patch,
    Method::VaginalRing,
];

/// Progestin-only injectables
pub(crate) const PROGESTIN_INJECTABLES: &[Method] = &[Method::Dmpa, Method::NetEn];

/// Progestin-only pill, implant and LNG-IUD, which usually share a category
pub(crate) const LOW_DOSE_PROGESTIN: &[Method] = &[
    Method::ProgestinOnlyPill,
    Method::Implant,
    Method::LngIud,
];

/// Every progestin-only method
pub(crate) const PROGESTIN_ONLY: &[Method] = &[
    Method::ProgestinOnlyPill,
    Method::Dmpa,
    Method::Implant,
    Method::LngIud,
    Method::NetEn,
];

pub(crate) const IUDS: &[Method] = &[Method::CopperIud, Method::LngIud];

/// Clinical section a rule belongs to; organizational only
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    PersonalCharacteristics,
    MenstrualHistory,
    PregnancyHistory,
    CardiovascularRisk,
    ProthromboticConditions,
    GynecologicalHistory,
    ReproductiveTractInfection,
    Comorbidities,
    MedicationHistory,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::PersonalCharacteristics => "Personal characteristics",
            Section::MenstrualHistory => "Menstrual history",
            Section::PregnancyHistory => "Pregnancy history",
            Section::CardiovascularRisk => "Cardiovascular risk",
            Section::ProthromboticConditions => "Prothrombotic conditions",
            Section::GynecologicalHistory => "Gynecological history",
            Section::ReproductiveTractInfection => "Reproductive tract infection",
            Section::Comorbidities => "Comorbidities",
            Section::MedicationHistory => "Medication history",
        }
    }
}

/// Predicate deciding whether a rule fires
pub type Trigger = fn(&NormalizedAnswers<'_>) -> AnswerResult<bool>;

/// Score contribution of a fired rule
#[derive(Clone, Debug, Serialize)]
pub struct Effect {
    pub methods: &'static [Method],
    pub score: MecScore,
    pub reason: &'static str,
}

#[derive(Clone)]
pub struct Rule {
    pub id: &'static str,
    pub section: Section,
    /// Lower evaluates first; only meaningful within a section
    pub priority: u16,
    pub trigger: Trigger,
    pub effects: Vec<Effect>,
}

impl Rule {
    pub fn new(id: &'static str, section: Section, priority: u16, trigger: Trigger) -> Self {
        Self {
            id,
            section,
            priority,
            trigger,
            effects: Vec::new(),
        }
    }

    pub fn effect(
        mut self,
        methods: &'static [Method],
        score: MecScore,
        reason: &'static str,
    ) -> Self {
        self.effects.push(Effect {
            methods,
            score,
            reason,
        });
        self
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("section", &self.section)
            .field("priority", &self.priority)
            .field("effects", &self.effects)
            .finish_non_exhaustive()
    }
}

/// Immutable, priority-ordered collection of rules
#[derive(Clone, Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

/// Cached WHO MEC table - built once and shared by every evaluation
static DEFAULT_RULES: Lazy<RuleTable> = Lazy::new(build_default_rules);

/// Get a reference to the cached default rule table
pub fn get_default_rules() -> &'static RuleTable {
    &DEFAULT_RULES
}

/// Builds the default WHO MEC rule table
///
/// **Note**: For production use, prefer `get_default_rules()` which returns a
/// cached reference.
pub fn build_default_rules() -> RuleTable {
    let mut rules = Vec::new();
    rules.extend(personal::rules());
    rules.extend(menstrual::rules());
    rules.extend(pregnancy::rules());
    rules.extend(cardiovascular::rules());
    rules.extend(prothrombotic::rules());
    rules.extend(gynecological::rules());
    rules.extend(infection::rules());
    rules.extend(comorbidities::rules());
    rules.extend(medication::rules());
    RuleTable::new(rules)
}

impl RuleTable {
    /// Order rules by priority; ties keep their table order
    pub fn new(mut rules: Vec<Rule>) -> Self {
        rules.sort_by_key(|r| r.priority);
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn in_section(&self, section: Section) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.section == section)
    }

    /// Validate the table for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for rule in &self.rules {
            if rule.id.is_empty() {
                errors.push("Rule has empty ID".to_string());
            }
            if !seen.insert(rule.id) {
                errors.push(format!("Duplicate rule ID '{}'", rule.id));
            }
            if rule.effects.is_empty() {
                errors.push(format!("Rule '{}' has no effects", rule.id));
            }
            for effect in &rule.effects {
                if effect.methods.is_empty() {
                    errors.push(format!("Rule '{}' has an effect with no methods", rule.id));
                }
                if effect.score >= MEC2 && effect.reason.trim().is_empty() {
                    errors.push(format!(
                        "Rule '{}' restricts methods without a reason",
                        rule.id
                    ));
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_validates() {
        let table = build_default_rules();
        let errors = table.validate();
        assert!(errors.is_empty(), "Rule table validation errors: {:?}", errors);
    }

    #[test]
    fn test_default_table_covers_every_section() {
        let table = get_default_rules();
        assert!(table.len() >= 90, "only {} rules", table.len());
        for section in [
            Section::PersonalCharacteristics,
            Section::MenstrualHistory,
            Section::PregnancyHistory,
            Section::CardiovascularRisk,
            Section::ProthromboticConditions,
            Section::GynecologicalHistory,
            Section::ReproductiveTractInfection,
            Section::Comorbidities,
            Section::MedicationHistory,
        ] {
            assert!(
                table.in_section(section).next().is_some(),
                "no rules in {:?}",
                section
            );
        }
    }

    #[test]
    fn test_table_sorted_by_priority_stable() {
        let t: Trigger = |_| Ok(true);
        let table = RuleTable::new(vec![
            Rule::new("late", Section::Comorbidities, 20, t).effect(IUDS, MEC2, "x"),
            Rule::new("first-tie", Section::Comorbidities, 10, t).effect(IUDS, MEC2, "x"),
            Rule::new("second-tie", Section::MenstrualHistory, 10, t).effect(IUDS, MEC2, "x"),
        ]);
        let ids: Vec<_> = table.rules().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["first-tie", "second-tie", "late"]);
    }

    #[test]
    fn test_validate_reports_problems() {
        let t: Trigger = |_| Ok(false);
        let table = RuleTable::new(vec![
            Rule::new("dup", Section::Comorbidities, 1, t).effect(IUDS, MEC3, ""),
            Rule::new("dup", Section::Comorbidities, 2, t),
            Rule::new("empty", Section::Comorbidities, 3, t).effect(&[], MEC2, "reason"),
        ]);
        let errors = table.validate();
        assert_eq!(errors.len(), 4, "{:?}", errors);
        assert!(errors.iter().any(|e| e.contains("Duplicate")));
        assert!(errors.iter().any(|e| e.contains("without a reason")));
    }
}
