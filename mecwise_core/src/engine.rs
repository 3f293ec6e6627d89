//! MEC rules engine.
//!
//! Evaluation logic:
//! 1. Start every method at score 1 with no reasons
//! 2. Normalize answers (age, BMI, postpartum timing, cycle irregularity)
//! 3. Walk the rule table in priority order; apply each fired rule's effects
//! 4. Resolve per-method conflicts by maximum score (most restrictive wins)
//! 5. Partition methods into suggested / greater benefit / avoid

use crate::answers::AnswerState;
use crate::normalize::normalize;
use crate::rules::{get_default_rules, Effect, RuleTable};
use crate::types::{EvaluationResult, MecResult, MecScore, Method};
use chrono::{NaiveDate, Utc};

/// Evaluate answers against the default WHO MEC table as of today (UTC)
pub fn evaluate(answers: &AnswerState) -> EvaluationResult {
    evaluate_on(answers, Utc::now().date_naive())
}

/// Evaluate answers against the default table for a fixed evaluation date
pub fn evaluate_on(answers: &AnswerState, today: NaiveDate) -> EvaluationResult {
    evaluate_with(get_default_rules(), answers, today)
}

/// Evaluate answers against an arbitrary rule table
///
/// Never fails: a rule whose trigger reports a malformed answer is logged and
/// treated as not fired, and every other rule still runs.
pub fn evaluate_with(table: &RuleTable, answers: &AnswerState, today: NaiveDate) -> EvaluationResult {
    let mut results: Vec<MecResult> = Method::ALL
        .iter()
        .map(|&method| MecResult {
            method_key: method,
            score: MecScore::NO_RESTRICTION,
            reasons: Vec::new(),
        })
        .collect();

    let normalized = normalize(answers, today);
    let mut fired = 0usize;

    for rule in table.rules() {
        match (rule.trigger)(&normalized) {
            Ok(true) => {
                fired += 1;
                tracing::debug!("Rule '{}' ({}) fired", rule.id, rule.section.title());
                for effect in &rule.effects {
                    apply_effect(&mut results, effect);
                }
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(
                    "Rule '{}' ({}) could not be evaluated, skipping: {}",
                    rule.id,
                    rule.section.title(),
                    e
                );
            }
        }
    }

    let result = partition(results);
    tracing::info!(
        "MEC evaluation: {} of {} rules fired; {} suggested, {} greater benefit, {} avoid",
        fired,
        table.len(),
        result.suggested.len(),
        result.greater_benefit.len(),
        result.avoid.len()
    );
    result
}

fn apply_effect(results: &mut [MecResult], effect: &Effect) {
    for method in effect.methods {
        let entry = &mut results[method.index()];
        entry.score = entry.score.max(effect.score);

        // MEC 1 means "no restriction" and never carries a reason
        if effect.score >= MecScore::BENEFITS_OUTWEIGH_RISKS
            && !entry.reasons.iter().any(|r| r == effect.reason)
        {
            entry.reasons.push(effect.reason.to_string());
        }
    }
}

fn partition(mec_results: Vec<MecResult>) -> EvaluationResult {
    let mut suggested = Vec::new();
    let mut greater_benefit = Vec::new();
    let mut avoid = Vec::new();

    for result in &mec_results {
        match result.score.value() {
            1 => suggested.push(result.method_key),
            2 => greater_benefit.push(result.method_key),
            _ => avoid.push(result.method_key),
        }
    }

    EvaluationResult {
        mec_results,
        suggested,
        greater_benefit,
        avoid,
    }
}

/// Methods medically eligible for personalization (score 1 or 2), in key order
pub fn eligible_methods(result: &EvaluationResult) -> Vec<Method> {
    result
        .mec_results
        .iter()
        .filter(|r| r.score <= MecScore::BENEFITS_OUTWEIGH_RISKS)
        .map(|r| r.method_key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerValue;
    use crate::questions as q;
    use crate::rules::{Rule, Section};
    use crate::types::Method::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn run(answers: &AnswerState) -> EvaluationResult {
        crate::logging::init_test();
        evaluate_on(answers, today())
    }

    fn assert_partition(result: &EvaluationResult) {
        assert_eq!(result.mec_results.len(), 15);
        let mut seen = HashSet::new();
        for m in result
            .suggested
            .iter()
            .chain(&result.greater_benefit)
            .chain(&result.avoid)
        {
            assert!(seen.insert(*m), "method {} appears twice", m);
        }
        assert_eq!(seen.len(), 15);
        for r in &result.mec_results {
            if r.score == MecScore::NO_RESTRICTION {
                assert!(r.reasons.is_empty(), "{} scores 1 but has reasons", r.method_key);
            } else {
                assert!(!r.reasons.is_empty(), "{} restricted without reasons", r.method_key);
            }
        }
    }

    #[test]
    fn test_empty_answers_restrict_nothing() {
        let result = run(&AnswerState::new());
        assert_partition(&result);
        assert_eq!(result.suggested, Method::ALL.to_vec());
        assert!(result.greater_benefit.is_empty());
        assert!(result.avoid.is_empty());
    }

    #[test]
    fn test_age_16_dmpa_bone_density() {
        let result = run(&AnswerState::new().with(q::AGE, 16));
        assert_partition(&result);

        let dmpa = result.result_for(Dmpa).unwrap();
        assert_eq!(dmpa.score, MecScore::BENEFITS_OUTWEIGH_RISKS);
        assert!(dmpa.reasons.iter().any(|r| r.contains("bone density")));
    }

    #[test]
    fn test_age_18_iuds_greater_benefit() {
        let result = run(&AnswerState::new().with(q::AGE, 18));
        assert!(result.greater_benefit.contains(&CopperIud));
        assert!(result.greater_benefit.contains(&LngIud));
    }

    #[test]
    fn test_age_30_sterilization_avoid() {
        let result = run(&AnswerState::new().with(q::AGE, 30));
        assert_partition(&result);
        for method in Method::STERILIZATION {
            assert!(result.avoid.contains(&method));
            assert_eq!(result.score_of(method), MecScore::RISKS_OUTWEIGH_BENEFITS);
        }
    }

    #[test]
    fn test_smoker_40_ten_cigarettes() {
        let answers = AnswerState::new()
            .with(q::SMOKING, true)
            .with(q::AGE, 40)
            .with(q::CIGARETTES_PER_DAY, 10);
        let result = run(&answers);
        assert_partition(&result);

        for method in [CombinedPill, CombinedInjectable, Patch] {
            assert!(result.avoid.contains(&method), "{} not avoided", method);
        }
        assert!(result.greater_benefit.contains(&VaginalRing));
    }

    #[test]
    fn test_heavy_smoker_is_unacceptable_risk() {
        let answers = AnswerState::new()
            .with(q::SMOKING, "yes")
            .with(q::AGE, 38)
            .with(q::CIGARETTES_PER_DAY, 20);
        let result = run(&answers);
        assert_eq!(result.score_of(CombinedPill), MecScore::UNACCEPTABLE_RISK);
        assert_eq!(result.score_of(VaginalRing), MecScore::RISKS_OUTWEIGH_BENEFITS);
    }

    #[test]
    fn test_max_wins_across_rules() {
        // Age 40+ alone gives the pill 2; migraine with aura gives 4
        let answers = AnswerState::new()
            .with(q::AGE, 42)
            .with(q::MIGRAINE, "with-aura");
        let result = run(&answers);
        let pill = result.result_for(CombinedPill).unwrap();
        assert_eq!(pill.score, MecScore::UNACCEPTABLE_RISK);
        assert_eq!(pill.reasons.len(), 2);
        assert!(pill.reasons[0].starts_with("Age 40"));
    }

    #[test]
    fn test_adding_conditions_never_lowers_scores() {
        let base = AnswerState::new().with(q::AGE, 36).with(q::DIABETES, true);
        let more = base
            .clone()
            .with(q::SMOKING, true)
            .with(q::BLOOD_PRESSURE, AnswerValue::record([("systolic", 150.0), ("diastolic", 85.0)]));

        let before = run(&base);
        let after = run(&more);
        for method in Method::ALL {
            assert!(after.score_of(method) >= before.score_of(method));
        }
        assert_eq!(after.score_of(CombinedPill), MecScore::RISKS_OUTWEIGH_BENEFITS);
    }

    #[test]
    fn test_reasons_are_deduplicated() {
        let dup = "shared reason";
        let table = RuleTable::new(vec![
            Rule::new("one", Section::Comorbidities, 1, |_| Ok(true)).effect(
                &[Implant],
                MecScore::BENEFITS_OUTWEIGH_RISKS,
                "shared reason",
            ),
            Rule::new("two", Section::Comorbidities, 2, |_| Ok(true)).effect(
                &[Implant],
                MecScore::RISKS_OUTWEIGH_BENEFITS,
                "shared reason",
            ),
        ]);
        let result = evaluate_with(&table, &AnswerState::new(), today());
        let implant = result.result_for(Implant).unwrap();
        assert_eq!(implant.score, MecScore::RISKS_OUTWEIGH_BENEFITS);
        assert_eq!(implant.reasons, vec![dup.to_string()]);
    }

    #[test]
    fn test_score_one_effects_carry_no_reason() {
        let table = RuleTable::new(vec![Rule::new("noop", Section::Comorbidities, 1, |_| {
            Ok(true)
        })
        .effect(&[Condom], MecScore::NO_RESTRICTION, "not recorded")]);
        let result = evaluate_with(&table, &AnswerState::new(), today());
        assert!(result.result_for(Condom).unwrap().reasons.is_empty());
    }

    #[test]
    fn test_malformed_answer_skips_only_that_rule() {
        let answers = AnswerState::new()
            .with(q::SMOKING, AnswerValue::record([("x", 1.0)]))
            .with(q::AGE, 40);
        let result = run(&answers);
        assert_partition(&result);
        // smoking rules are skipped; the age rule still fires
        assert_eq!(result.score_of(CombinedPill), MecScore::BENEFITS_OUTWEIGH_RISKS);
    }

    #[test]
    fn test_missing_bmi_does_not_trigger_obesity() {
        let result = run(&AnswerState::new().with(q::WEIGHT, 120.0));
        assert_eq!(result.score_of(CombinedPill), MecScore::NO_RESTRICTION);
        // weight alone still informs the patch rule
        assert_eq!(result.score_of(Patch), MecScore::BENEFITS_OUTWEIGH_RISKS);
    }

    #[test]
    fn test_obesity_from_computed_bmi() {
        let answers = AnswerState::new().with(q::WEIGHT, 95.0).with(q::HEIGHT, 170.0);
        let result = run(&answers);
        assert_eq!(result.score_of(CombinedPill), MecScore::BENEFITS_OUTWEIGH_RISKS);
        assert_eq!(result.score_of(FemaleSterilization), MecScore::BENEFITS_OUTWEIGH_RISKS);
    }

    #[test]
    fn test_breastfeeding_three_weeks_postpartum() {
        let answers = AnswerState::new()
            .with(q::BREASTFEEDING, "yes")
            .with(q::LAST_DELIVERY_DATE, "2024-05-11");
        let result = run(&answers);
        assert_partition(&result);
        assert_eq!(result.score_of(CombinedPill), MecScore::UNACCEPTABLE_RISK);
        assert_eq!(result.score_of(Dmpa), MecScore::RISKS_OUTWEIGH_BENEFITS);
        assert_eq!(result.score_of(CopperIud), MecScore::RISKS_OUTWEIGH_BENEFITS);
        assert_eq!(result.score_of(Lam), MecScore::NO_RESTRICTION);
    }

    #[test]
    fn test_postpartum_not_breastfeeding_with_vte_risk() {
        let answers = AnswerState::new()
            .with(q::BREASTFEEDING, false)
            .with(q::LAST_DELIVERY_DATE, "2024-05-20")
            .with(q::VTE_RISK_FACTORS, true);
        let result = run(&answers);
        assert_eq!(result.score_of(Patch), MecScore::UNACCEPTABLE_RISK);
        assert_eq!(result.score_of(Lam), MecScore::UNACCEPTABLE_RISK);
    }

    #[test]
    fn test_severe_blood_pressure() {
        let answers = AnswerState::new().with(
            q::BLOOD_PRESSURE,
            AnswerValue::record([("systolic", 165.0), ("diastolic", 95.0)]),
        );
        let result = run(&answers);
        let pill = result.result_for(CombinedPill).unwrap();
        assert_eq!(pill.score, MecScore::UNACCEPTABLE_RISK);
        // the elevated band does not also fire
        assert_eq!(pill.reasons.len(), 1);
        assert_eq!(result.score_of(Dmpa), MecScore::RISKS_OUTWEIGH_BENEFITS);
        assert_eq!(result.score_of(Implant), MecScore::BENEFITS_OUTWEIGH_RISKS);
    }

    #[test]
    fn test_anticonvulsant_combined_injectable_listed_twice() {
        let answers = AnswerState::new().with(q::MEDICATIONS, vec![2.0]);
        let result = run(&answers);
        let cic = result.result_for(CombinedInjectable).unwrap();
        assert_eq!(cic.score, MecScore::RISKS_OUTWEIGH_BENEFITS);
        assert_eq!(cic.reasons.len(), 2);
        assert_eq!(result.score_of(Implant), MecScore::BENEFITS_OUTWEIGH_RISKS);
    }

    #[test]
    fn test_antibiotics_and_antifungals_restrict_nothing() {
        let answers = AnswerState::new().with(
            q::MEDICATIONS,
            vec![
                f64::from(q::medication::BROAD_SPECTRUM_ANTIBIOTIC),
                f64::from(q::medication::ANTIFUNGAL),
            ],
        );
        let result = run(&answers);
        assert_eq!(result.suggested.len(), 15);
        assert_partition(&result);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let answers = AnswerState::new()
            .with(q::AGE, 37)
            .with(q::SMOKING, true)
            .with(q::MIGRAINE, "without-aura")
            .with(q::PID_HISTORY, true);
        let first = serde_json::to_string(&run(&answers)).unwrap();
        let second = serde_json::to_string(&run(&answers)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_eligible_methods_are_scores_one_and_two() {
        let result = run(&AnswerState::new().with(q::AGE, 30));
        let eligible = eligible_methods(&result);
        assert_eq!(eligible.len(), 13);
        assert!(!eligible.contains(&FemaleSterilization));
        assert!(!eligible.contains(&Vasectomy));
    }

    #[test]
    fn test_result_json_shape() {
        let result = run(&AnswerState::new().with(q::AGE, 16));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mecResults"].as_array().unwrap().len(), 15);
        assert_eq!(json["mecResults"][3]["methodKey"], "d");
        assert_eq!(json["mecResults"][3]["score"], 2);
        assert!(json["greaterBenefit"].as_array().unwrap().contains(&"d".into()));
    }
}
