//! Core domain types for the mecwise decision engine.
//!
//! This module defines the fundamental types shared by the engines:
//! - The 15-method universe and the MEC 1–4 scale
//! - MEC evaluation results
//! - FAB categories and results
//! - Personalization filters and results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Method Universe
// ============================================================================

/// A contraceptive method, serialized by its stable single-letter key
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    #[serde(rename = "a")]
    CombinedPill,
    #[serde(rename = "b")]
    CombinedInjectable,
    #[serde(rename = "c")]
    ProgestinOnlyPill,
    #[serde(rename = "d")]
    Dmpa,
    #[serde(rename = "e")]
    Implant,
    #[serde(rename = "f")]
    CopperIud,
    #[serde(rename = "g")]
    LngIud,
    #[serde(rename = "h")]
    FemaleSterilization,
    #[serde(rename = "i")]
    Patch,
    #[serde(rename = "j")]
    Condom,
    #[serde(rename = "k")]
    VaginalRing,
    #[serde(rename = "l")]
    NetEn,
    #[serde(rename = "m")]
    EmergencyPill,
    #[serde(rename = "n")]
    Lam,
    #[serde(rename = "o")]
    Vasectomy,
}

impl Method {
    /// Every method in canonical key order
    pub const ALL: [Method; 15] = [
        Method::CombinedPill,
        Method::CombinedInjectable,
        Method::ProgestinOnlyPill,
        Method::Dmpa,
        Method::Implant,
        Method::CopperIud,
        Method::LngIud,
        Method::FemaleSterilization,
        Method::Patch,
        Method::Condom,
        Method::VaginalRing,
        Method::NetEn,
        Method::EmergencyPill,
        Method::Lam,
        Method::Vasectomy,
    ];

    /// Both permanent (surgical) methods
    pub const STERILIZATION: [Method; 2] = [Method::FemaleSterilization, Method::Vasectomy];

    /// Stable key used in answer files and results
    pub fn key(self) -> &'static str {
        match self {
            Method::CombinedPill => "a",
            Method::CombinedInjectable => "b",
            Method::ProgestinOnlyPill => "c",
            Method::Dmpa => "d",
            Method::Implant => "e",
            Method::CopperIud => "f",
            Method::LngIud => "g",
            Method::FemaleSterilization => "h",
            Method::Patch => "i",
            Method::Condom => "j",
            Method::VaginalRing => "k",
            Method::NetEn => "l",
            Method::EmergencyPill => "m",
            Method::Lam => "n",
            Method::Vasectomy => "o",
        }
    }

    /// Human-readable method name
    pub fn name(self) -> &'static str {
        match self {
            Method::CombinedPill => "Combined oral contraceptive pill",
            Method::CombinedInjectable => "Combined injectable contraceptive",
            Method::ProgestinOnlyPill => "Progestin-only pill",
            Method::Dmpa => "DMPA injectable",
            Method::Implant => "Contraceptive implant",
            Method::CopperIud => "Copper IUD",
            Method::LngIud => "Levonorgestrel IUD",
            Method::FemaleSterilization => "Female sterilization",
            Method::Patch => "Combined contraceptive patch",
            Method::Condom => "Condom",
            Method::VaginalRing => "Combined vaginal ring",
            Method::NetEn => "NET-EN injectable",
            Method::EmergencyPill => "Emergency contraceptive pill",
            Method::Lam => "Lactational amenorrhea method",
            Method::Vasectomy => "Vasectomy",
        }
    }

    /// Position in [`Method::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_sterilization(self) -> bool {
        Method::STERILIZATION.contains(&self)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Method {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Method::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| crate::Error::UnknownMethod(s.to_string()))
    }
}

// ============================================================================
// MEC Scale
// ============================================================================

/// WHO Medical Eligibility Criteria category, 1 (no restriction) to 4
/// (unacceptable health risk)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MecScore(u8);

impl MecScore {
    pub const NO_RESTRICTION: MecScore = MecScore(1);
    pub const BENEFITS_OUTWEIGH_RISKS: MecScore = MecScore(2);
    pub const RISKS_OUTWEIGH_BENEFITS: MecScore = MecScore(3);
    pub const UNACCEPTABLE_RISK: MecScore = MecScore(4);

    pub fn value(self) -> u8 {
        self.0
    }

    /// Short description of the category
    pub fn describe(self) -> &'static str {
        match self.0 {
            1 => "no restriction",
            2 => "advantages generally outweigh risks",
            3 => "risks usually outweigh advantages",
            _ => "unacceptable health risk",
        }
    }
}

impl TryFrom<u8> for MecScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=4).contains(&value) {
            Ok(MecScore(value))
        } else {
            Err(format!("MEC score must be between 1 and 4, got {value}"))
        }
    }
}

impl From<MecScore> for u8 {
    fn from(score: MecScore) -> u8 {
        score.0
    }
}

impl fmt::Display for MecScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// MEC Results
// ============================================================================

/// Final score for one method, with the reasons behind any restriction
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MecResult {
    pub method_key: Method,
    pub score: MecScore,
    pub reasons: Vec<String>,
}

/// Full output of one MEC evaluation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// One entry per method, in [`Method::ALL`] order
    pub mec_results: Vec<MecResult>,
    /// Methods scoring 1
    pub suggested: Vec<Method>,
    /// Methods scoring 2
    pub greater_benefit: Vec<Method>,
    /// Methods scoring 3 or 4
    pub avoid: Vec<Method>,
}

impl EvaluationResult {
    pub fn result_for(&self, method: Method) -> Option<&MecResult> {
        self.mec_results.iter().find(|r| r.method_key == method)
    }

    /// Score for a method (1 if the method is somehow absent)
    pub fn score_of(&self, method: Method) -> MecScore {
        self.result_for(method)
            .map(|r| r.score)
            .unwrap_or(MecScore::NO_RESTRICTION)
    }
}

// ============================================================================
// FAB Types
// ============================================================================

/// Fertility-awareness category; declaration order is restrictiveness order
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FabCategory {
    /// Accept: no medical reason to deny the method
    A,
    /// Caution: special counseling needed
    C,
    /// Delay: defer use until the condition is evaluated or resolves
    D,
}

impl FabCategory {
    pub fn label(self) -> &'static str {
        match self {
            FabCategory::A => "Accept",
            FabCategory::C => "Caution",
            FabCategory::D => "Delay",
        }
    }
}

/// Result for one FAB sub-method track
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FabMethodResult {
    pub category: FabCategory,
    pub label: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_required: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisoryKind {
    StiRisk,
    HighRiskPregnancy,
    MedicationEvaluation,
}

/// Message that is always surfaced but never changes a category
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FabAdvisory {
    pub kind: AdvisoryKind,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FabEligibilityResult {
    pub not_applicable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_applicable_message: Option<String>,
    pub sym: Option<FabMethodResult>,
    pub cal: Option<FabMethodResult>,
    pub advisories: Vec<FabAdvisory>,
}

// ============================================================================
// Personalization Types
// ============================================================================

/// How often the user is willing to take or renew a method
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Frequency {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "every-3-weeks")]
    EveryThreeWeeks,
    #[serde(rename = "every-3-months")]
    EveryThreeMonths,
    #[serde(rename = "every-3-years")]
    EveryThreeYears,
    #[serde(rename = "every-8-years")]
    EveryEightYears,
}

impl Frequency {
    /// Methods whose dosing schedule matches this frequency
    pub fn allowed_methods(self) -> &'static [Method] {
        match self {
            Frequency::Daily => &[
                Method::CombinedPill,
                Method::ProgestinOnlyPill,
                Method::VaginalRing,
            ],
            Frequency::EveryThreeWeeks => &[Method::Patch, Method::VaginalRing],
            Frequency::EveryThreeMonths => &[Method::Dmpa],
            Frequency::EveryThreeYears => &[Method::Implant],
            Frequency::EveryEightYears => &[Method::CopperIud, Method::LngIud],
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::EveryThreeWeeks => "every 3 weeks",
            Frequency::EveryThreeMonths => "every 3 months",
            Frequency::EveryThreeYears => "every 3 years",
            Frequency::EveryEightYears => "every 8 years",
        }
    }
}

/// Lifestyle preferences applied after medical eligibility
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationFilters {
    #[serde(default)]
    pub wants_future_pregnancy: Option<bool>,
    #[serde(default)]
    pub open_to_surgical_methods: Option<bool>,
    #[serde(default)]
    pub continue_with_long_term: Option<bool>,
    #[serde(default)]
    pub okay_with_irregular_periods: Option<bool>,
    #[serde(default)]
    pub preferred_frequency: Option<Frequency>,
    #[serde(default)]
    pub bmi: Option<f64>,
}

/// Audit entry for a method removed during personalization
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Elimination {
    pub method: Method,
    pub reason: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationResult {
    pub recommended: Vec<Method>,
    pub notices: Vec<String>,
    pub eliminated: Vec<Elimination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_show_permanent_methods: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_keys_match_index_order() {
        for (idx, method) in Method::ALL.iter().enumerate() {
            assert_eq!(method.index(), idx);
            assert_eq!(method.key().as_bytes()[0], b'a' + idx as u8);
        }
    }

    #[test]
    fn test_method_parses_from_key() {
        assert_eq!("k".parse::<Method>().unwrap(), Method::VaginalRing);
        assert_eq!(" H ".parse::<Method>().unwrap(), Method::FemaleSterilization);
        assert!(matches!(
            "z".parse::<Method>(),
            Err(crate::Error::UnknownMethod(_))
        ));
    }

    #[test]
    fn test_method_serializes_as_key() {
        let json = serde_json::to_string(&vec![Method::CombinedPill, Method::Vasectomy]).unwrap();
        assert_eq!(json, r#"["a","o"]"#);
    }

    #[test]
    fn test_mec_score_rejects_out_of_range() {
        assert!(MecScore::try_from(0).is_err());
        assert!(MecScore::try_from(5).is_err());
        assert_eq!(MecScore::try_from(3).unwrap(), MecScore::RISKS_OUTWEIGH_BENEFITS);
        assert!(serde_json::from_str::<MecScore>("7").is_err());
    }

    #[test]
    fn test_fab_category_ordering() {
        assert!(FabCategory::D > FabCategory::C);
        assert!(FabCategory::C > FabCategory::A);
        assert_eq!(
            [FabCategory::C, FabCategory::D, FabCategory::A].into_iter().max(),
            Some(FabCategory::D)
        );
    }

    #[test]
    fn test_filters_deserialize_camel_case() {
        let filters: PersonalizationFilters = serde_json::from_str(
            r#"{"wantsFuturePregnancy": true, "preferredFrequency": "every-3-weeks", "bmi": 28.5}"#,
        )
        .unwrap();
        assert_eq!(filters.wants_future_pregnancy, Some(true));
        assert_eq!(filters.preferred_frequency, Some(Frequency::EveryThreeWeeks));
        assert_eq!(filters.okay_with_irregular_periods, None);
    }
}
