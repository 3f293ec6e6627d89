//! Fertility awareness-based (FAB) method eligibility.
//!
//! Two independent tracks are scored on the Accept/Caution/Delay scale:
//! symptoms-based (SYM) and calendar-based (CAL). Each condition group casts
//! zero or more votes per track and the most restrictive vote wins. STI risk,
//! high-risk pregnancy and medication review only add advisories.

use crate::answers::{AnswerResult, AnswerState};
use crate::questions as q;
use crate::types::{AdvisoryKind, FabAdvisory, FabCategory, FabEligibilityResult, FabMethodResult};

const NOT_APPLICABLE_MESSAGE: &str =
    "Fertility awareness-based methods are not applicable during pregnancy.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Track {
    Sym,
    Cal,
}

#[derive(Debug, Default)]
struct Votes {
    sym: Vec<FabCategory>,
    cal: Vec<FabCategory>,
    advisories: Vec<FabAdvisory>,
}

impl Votes {
    fn both(&mut self, sym: FabCategory, cal: FabCategory) {
        self.sym.push(sym);
        self.cal.push(cal);
    }

    fn advise(&mut self, kind: AdvisoryKind, message: &str) {
        self.advisories.push(FabAdvisory {
            kind,
            message: message.to_string(),
        });
    }
}

type Group = fn(&AnswerState, &mut Votes) -> AnswerResult<()>;

/// Condition groups in evaluation order
const GROUPS: &[(&str, Group)] = &[
    ("postpartum", postpartum),
    ("recent abortion", recent_abortion),
    ("life stage", life_stage),
    ("menstrual and infection status", menstrual_and_infection),
    ("drugs and medical conditions", drugs_and_medical),
    ("STI/HIV risk", sti_risk),
    ("pregnancy risk", pregnancy_risk),
];

/// Evaluate FAB eligibility from the `fab-` prefixed answers
pub fn evaluate_fab(answers: &AnswerState) -> FabEligibilityResult {
    let pregnant = answers.yes(q::FAB_CURRENTLY_PREGNANT).unwrap_or_else(|e| {
        tracing::warn!("Ignoring pregnancy answer: {}", e);
        false
    });

    if pregnant {
        tracing::info!("FAB evaluation: currently pregnant, not applicable");
        return FabEligibilityResult {
            not_applicable: true,
            not_applicable_message: Some(NOT_APPLICABLE_MESSAGE.to_string()),
            sym: None,
            cal: None,
            advisories: Vec::new(),
        };
    }

    let mut votes = Votes::default();
    for (name, group) in GROUPS {
        if let Err(e) = group(answers, &mut votes) {
            // Votes cast before the error stand
            tracing::warn!("FAB group '{}' could not be evaluated, skipping: {}", name, e);
        }
    }

    let sym = resolve(&votes.sym);
    let cal = resolve(&votes.cal);
    tracing::info!("FAB evaluation: SYM {:?}, CAL {:?}", sym, cal);

    FabEligibilityResult {
        not_applicable: false,
        not_applicable_message: None,
        sym: Some(method_result(Track::Sym, sym)),
        cal: Some(method_result(Track::Cal, cal)),
        advisories: votes.advisories,
    }
}

/// Most restrictive vote; no votes means Accept
fn resolve(votes: &[FabCategory]) -> FabCategory {
    votes.iter().copied().max().unwrap_or(FabCategory::A)
}

fn method_result(track: Track, category: FabCategory) -> FabMethodResult {
    FabMethodResult {
        category,
        label: category.label().to_string(),
        explanation: explanation(track, category).to_string(),
        action_required: action_required(category).map(str::to_string),
    }
}

fn explanation(track: Track, category: FabCategory) -> &'static str {
    match (track, category) {
        (Track::Sym, FabCategory::A) => {
            "No medical reason to deny symptoms-based methods; fertility signs can be observed reliably."
        }
        (Track::Sym, FabCategory::C) => {
            "Symptoms-based methods can be used, but current conditions may make fertility signs harder to interpret."
        }
        (Track::Sym, FabCategory::D) => {
            "Fertility signs are currently unreliable; symptoms-based methods should be delayed."
        }
        (Track::Cal, FabCategory::A) => {
            "No medical reason to deny calendar-based methods; cycle lengths are predictable."
        }
        (Track::Cal, FabCategory::C) => {
            "Calendar-based methods can be used, but cycle lengths may be less predictable."
        }
        (Track::Cal, FabCategory::D) => {
            "Cycles are currently too irregular to predict the fertile window; calendar-based methods should be delayed."
        }
    }
}

fn action_required(category: FabCategory) -> Option<&'static str> {
    match category {
        FabCategory::A => None,
        FabCategory::C => {
            Some("Provide special counseling so the method is used correctly under these conditions.")
        }
        FabCategory::D => Some(
            "Delay use until the condition is evaluated or resolves; offer another method in the meantime.",
        ),
    }
}

fn postpartum(a: &AnswerState, v: &mut Votes) -> AnswerResult<()> {
    let weeks = a.number(q::FAB_WEEKS_SINCE_DELIVERY)?;
    let breastfeeding = a.yes(q::FAB_BREASTFEEDING)?;

    // an explicit "no" overrides the other postpartum signals
    if a.no(q::FAB_POSTPARTUM)? {
        return Ok(());
    }
    if !(a.yes(q::FAB_POSTPARTUM)? || weeks.is_some() || breastfeeding) {
        return Ok(());
    }

    use FabCategory::*;
    if breastfeeding {
        let menses_resumed = a.yes(q::FAB_MENSES_RESUMED)?;
        match weeks {
            Some(w) if w < 6.0 => v.both(D, D),
            None => v.both(C, D),
            Some(_) if menses_resumed => v.both(C, C),
            Some(_) => v.both(C, D),
        }
    } else {
        match weeks {
            Some(w) if w < 4.0 => v.both(D, D),
            Some(_) => v.both(A, D),
            None => v.both(C, D),
        }
    }
    Ok(())
}

fn recent_abortion(a: &AnswerState, v: &mut Votes) -> AnswerResult<()> {
    if a.yes(q::FAB_RECENT_ABORTION)? {
        v.both(FabCategory::C, FabCategory::D);
    }
    Ok(())
}

fn life_stage(a: &AnswerState, v: &mut Votes) -> AnswerResult<()> {
    if a.yes(q::FAB_RECENT_MENARCHE)? {
        v.both(FabCategory::C, FabCategory::C);
    }
    if a.yes(q::FAB_PERIMENOPAUSE)? {
        v.both(FabCategory::C, FabCategory::C);
    }
    Ok(())
}

fn menstrual_and_infection(a: &AnswerState, v: &mut Votes) -> AnswerResult<()> {
    if a.yes(q::FAB_IRREGULAR_BLEEDING)? {
        v.both(FabCategory::D, FabCategory::D);
    }
    if a.yes(q::FAB_VAGINAL_DISCHARGE)? {
        // discharge obscures cervical mucus only
        v.sym.push(FabCategory::D);
    }
    Ok(())
}

fn drugs_and_medical(a: &AnswerState, v: &mut Votes) -> AnswerResult<()> {
    if a.yes(q::FAB_CYCLE_ALTERING_DRUGS)? {
        v.both(FabCategory::C, FabCategory::C);
        v.advise(
            AdvisoryKind::MedicationEvaluation,
            "Medications that affect cycle regularity, hormones or fertility signs should be reviewed by a clinician before relying on FAB methods.",
        );
    }
    if a.yes(q::FAB_CHRONIC_TEMPERATURE_DISEASE)? {
        v.sym.push(FabCategory::C);
    }
    if a.yes(q::FAB_ACUTE_TEMPERATURE_DISEASE)? {
        v.sym.push(FabCategory::D);
    }
    Ok(())
}

fn sti_risk(a: &AnswerState, v: &mut Votes) -> AnswerResult<()> {
    if a.yes(q::FAB_STI_RISK)? {
        v.advise(
            AdvisoryKind::StiRisk,
            "FAB methods do not protect against STIs or HIV. Use condoms consistently if at risk.",
        );
    }
    Ok(())
}

fn pregnancy_risk(a: &AnswerState, v: &mut Votes) -> AnswerResult<()> {
    if a.yes(q::FAB_HIGH_RISK_PREGNANCY)? {
        v.advise(
            AdvisoryKind::HighRiskPregnancy,
            "Pregnancy would pose a serious health risk. FAB methods have relatively high typical-use failure rates; consider a more effective method.",
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(result: &FabEligibilityResult) -> (FabCategory, FabCategory) {
        (
            result.sym.as_ref().unwrap().category,
            result.cal.as_ref().unwrap().category,
        )
    }

    #[test]
    fn test_pregnancy_short_circuits() {
        let answers = AnswerState::new()
            .with(q::FAB_CURRENTLY_PREGNANT, "yes")
            .with(q::FAB_IRREGULAR_BLEEDING, "yes")
            .with(q::FAB_STI_RISK, "yes");
        let result = evaluate_fab(&answers);

        assert!(result.not_applicable);
        assert!(result.not_applicable_message.is_some());
        assert!(result.sym.is_none());
        assert!(result.cal.is_none());
        assert!(result.advisories.is_empty());
    }

    #[test]
    fn test_no_answers_accept_both() {
        let result = evaluate_fab(&AnswerState::new());
        assert!(!result.not_applicable);
        assert_eq!(categories(&result), (FabCategory::A, FabCategory::A));
        let sym = result.sym.unwrap();
        assert_eq!(sym.label, "Accept");
        assert!(sym.action_required.is_none());
    }

    #[test]
    fn test_breastfeeding_three_weeks_delays_both() {
        let answers = AnswerState::new()
            .with(q::FAB_BREASTFEEDING, "yes")
            .with(q::FAB_WEEKS_SINCE_DELIVERY, 3);
        let result = evaluate_fab(&answers);
        assert_eq!(categories(&result), (FabCategory::D, FabCategory::D));
        assert!(result.cal.unwrap().action_required.is_some());
    }

    #[test]
    fn test_breastfeeding_branches() {
        let base = AnswerState::new().with(q::FAB_BREASTFEEDING, true);

        let later = base.clone().with(q::FAB_WEEKS_SINCE_DELIVERY, 10);
        assert_eq!(categories(&evaluate_fab(&later)), (FabCategory::C, FabCategory::D));

        let resumed = later.clone().with(q::FAB_MENSES_RESUMED, "yes");
        assert_eq!(categories(&evaluate_fab(&resumed)), (FabCategory::C, FabCategory::C));

        assert_eq!(categories(&evaluate_fab(&base)), (FabCategory::C, FabCategory::D));
    }

    #[test]
    fn test_not_breastfeeding_branches() {
        let base = AnswerState::new()
            .with(q::FAB_POSTPARTUM, "yes")
            .with(q::FAB_BREASTFEEDING, "no");

        let early = base.clone().with(q::FAB_WEEKS_SINCE_DELIVERY, 2);
        assert_eq!(categories(&evaluate_fab(&early)), (FabCategory::D, FabCategory::D));

        let later = base.clone().with(q::FAB_WEEKS_SINCE_DELIVERY, 4);
        assert_eq!(categories(&evaluate_fab(&later)), (FabCategory::A, FabCategory::D));

        assert_eq!(categories(&evaluate_fab(&base)), (FabCategory::C, FabCategory::D));
    }

    #[test]
    fn test_not_breastfeeding_without_postpartum_casts_no_vote() {
        let answers = AnswerState::new().with(q::FAB_BREASTFEEDING, "no");
        assert_eq!(categories(&evaluate_fab(&answers)), (FabCategory::A, FabCategory::A));
    }

    #[test]
    fn test_most_restrictive_vote_wins() {
        let answers = AnswerState::new()
            .with(q::FAB_PERIMENOPAUSE, "yes")
            .with(q::FAB_VAGINAL_DISCHARGE, "yes");
        let result = evaluate_fab(&answers);
        assert_eq!(categories(&result), (FabCategory::D, FabCategory::C));
    }

    #[test]
    fn test_advisories_never_change_categories() {
        let answers = AnswerState::new()
            .with(q::FAB_STI_RISK, "yes")
            .with(q::FAB_HIGH_RISK_PREGNANCY, true);
        let result = evaluate_fab(&answers);
        assert_eq!(categories(&result), (FabCategory::A, FabCategory::A));
        let kinds: Vec<_> = result.advisories.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AdvisoryKind::StiRisk, AdvisoryKind::HighRiskPregnancy]);
    }

    #[test]
    fn test_cycle_altering_drugs_add_medication_advisory() {
        let answers = AnswerState::new().with(q::FAB_CYCLE_ALTERING_DRUGS, "yes");
        let result = evaluate_fab(&answers);
        assert_eq!(categories(&result), (FabCategory::C, FabCategory::C));
        assert_eq!(result.advisories.len(), 1);
        assert_eq!(result.advisories[0].kind, AdvisoryKind::MedicationEvaluation);
    }

    #[test]
    fn test_malformed_group_is_skipped() {
        let answers = AnswerState::new()
            .with(q::FAB_RECENT_ABORTION, vec![1.0])
            .with(q::FAB_PERIMENOPAUSE, "yes");
        let result = evaluate_fab(&answers);
        assert_eq!(categories(&result), (FabCategory::C, FabCategory::C));
    }

    #[test]
    fn test_fab_json_shape() {
        let json = serde_json::to_value(evaluate_fab(&AnswerState::new())).unwrap();
        assert_eq!(json["notApplicable"], false);
        assert!(json.get("notApplicableMessage").is_none());
        assert_eq!(json["sym"]["category"], "A");
        assert_eq!(json["cal"]["label"], "Accept");

        let pregnant = AnswerState::new().with(q::FAB_CURRENTLY_PREGNANT, "yes");
        let json = serde_json::to_value(evaluate_fab(&pregnant)).unwrap();
        assert!(json["sym"].is_null());
        assert!(json["notApplicableMessage"].is_string());
    }

    #[test]
    fn test_breastfeeding_weeks_unknown_stays_cautious_after_menses() {
        let answers = AnswerState::new()
            .with(q::FAB_BREASTFEEDING, "yes")
            .with(q::FAB_MENSES_RESUMED, "yes");
        assert_eq!(categories(&evaluate_fab(&answers)), (FabCategory::C, FabCategory::D));
    }

    #[test]
    fn test_explicit_not_postpartum_casts_no_vote() {
        let answers = AnswerState::new()
            .with(q::FAB_POSTPARTUM, "no")
            .with(q::FAB_WEEKS_SINCE_DELIVERY, 2);
        assert_eq!(categories(&evaluate_fab(&answers)), (FabCategory::A, FabCategory::A));
    }

    #[test]
    fn test_fab_evaluation_is_deterministic() {
        let answers = AnswerState::new()
            .with(q::FAB_POSTPARTUM, "yes")
            .with(q::FAB_BREASTFEEDING, "no")
            .with(q::FAB_WEEKS_SINCE_DELIVERY, 8)
            .with(q::FAB_CYCLE_ALTERING_DRUGS, "yes")
            .with(q::FAB_STI_RISK, "yes");
        let first = serde_json::to_string(&evaluate_fab(&answers)).unwrap();
        let second = serde_json::to_string(&evaluate_fab(&answers)).unwrap();
        assert_eq!(first, second);
    }
}
