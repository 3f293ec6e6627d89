use super::{
    Rule, Section, COMBINED, IUDS, LOW_DOSE_PROGESTIN, MEC2, MEC3, MEC4, PROGESTIN_INJECTABLES,
    PROGESTIN_ONLY,
};
use crate::answers::AnswerResult;
use crate::normalize::NormalizedAnswers;
use crate::questions as q;
use crate::types::Method::{self, *};

const SECTION: Section = Section::CardiovascularRisk;

/// Combined methods except the ring, which carries a lower category for smokers
const COMBINED_EXCEPT_RING: &[Method] = &[CombinedPill, CombinedInjectable, Patch];

const HEAVY_SMOKING_CIGARETTES: f64 = 15.0;

fn smoker_35_plus(s: &NormalizedAnswers<'_>) -> AnswerResult<bool> {
    Ok(s.yes(q::SMOKING)? && s.age_where(|age| age >= 35.0))
}

fn blood_pressure(s: &NormalizedAnswers<'_>) -> AnswerResult<(Option<f64>, Option<f64>)> {
    Ok((
        s.record_number(q::BLOOD_PRESSURE, "systolic")?,
        s.record_number(q::BLOOD_PRESSURE, "diastolic")?,
    ))
}

fn severe_blood_pressure(s: &NormalizedAnswers<'_>) -> AnswerResult<bool> {
    let (systolic, diastolic) = blood_pressure(s)?;
    Ok(systolic.is_some_and(|v| v >= 160.0) || diastolic.is_some_and(|v| v >= 100.0))
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        // Smoking
        Rule::new("smoking-under-35", SECTION, 10, |s| {
            Ok(s.yes(q::SMOKING)? && s.age_where(|age| age < 35.0))
        })
        .effect(
            COMBINED,
            MEC2,
            "Smoking under age 35: increased cardiovascular risk with estrogen",
        ),
        Rule::new("smoking-35-plus-light", SECTION, 20, |s| {
            // An unanswered cigarette count falls into the lighter band
            Ok(smoker_35_plus(s)?
                && s.number(q::CIGARETTES_PER_DAY)?
                    .map_or(true, |n| n < HEAVY_SMOKING_CIGARETTES))
        })
        .effect(
            COMBINED_EXCEPT_RING,
            MEC3,
            "Smoking at age 35 or older (under 15 cigarettes/day): risk of heart attack and stroke",
        )
        .effect(
            &[VaginalRing],
            MEC2,
            "Smoking at age 35 or older: the ring still carries cardiovascular risk",
        ),
        Rule::new("smoking-35-plus-heavy", SECTION, 30, |s| {
            Ok(smoker_35_plus(s)?
                && s.number(q::CIGARETTES_PER_DAY)?
                    .is_some_and(|n| n >= HEAVY_SMOKING_CIGARETTES))
        })
        .effect(
            COMBINED_EXCEPT_RING,
            MEC4,
            "Smoking 15 or more cigarettes/day at age 35 or older: unacceptable cardiovascular risk",
        )
        .effect(
            &[VaginalRing],
            MEC3,
            "Smoking 15 or more cigarettes/day at age 35 or older: risk of heart attack and stroke",
        ),
        Rule::new("multiple-cardiovascular-risk-factors", SECTION, 40, |s| {
            s.yes(q::MULTIPLE_CVD_RISK_FACTORS)
        })
        .effect(
            COMBINED,
            MEC3,
            "Multiple cardiovascular risk factors: combined risk with estrogen is substantial",
        )
        .effect(
            PROGESTIN_INJECTABLES,
            MEC3,
            "Multiple cardiovascular risk factors: injectable progestin may worsen lipid profile",
        )
        .effect(
            LOW_DOSE_PROGESTIN,
            MEC2,
            "Multiple cardiovascular risk factors: use with monitoring",
        ),
        // Hypertension
        Rule::new("hypertension-unmeasured", SECTION, 50, |s| {
            let (systolic, diastolic) = blood_pressure(s)?;
            Ok(s.yes(q::HYPERTENSION_HISTORY)? && systolic.is_none() && diastolic.is_none())
        })
        .effect(
            COMBINED,
            MEC3,
            "History of hypertension without a current blood pressure reading",
        )
        .effect(
            PROGESTIN_INJECTABLES,
            MEC2,
            "History of hypertension: measure blood pressure before injectable progestin",
        ),
        Rule::new("hypertension-controlled", SECTION, 60, |s| {
            s.yes(q::HYPERTENSION_CONTROLLED)
        })
        .effect(
            COMBINED,
            MEC3,
            "Controlled hypertension: estrogen still raises stroke and heart attack risk",
        )
        .effect(
            PROGESTIN_INJECTABLES,
            MEC2,
            "Controlled hypertension: monitor blood pressure on injectable progestin",
        ),
        Rule::new("blood-pressure-elevated", SECTION, 70, |s| {
            let (systolic, diastolic) = blood_pressure(s)?;
            let elevated = systolic.is_some_and(|v| (140.0..160.0).contains(&v))
                || diastolic.is_some_and(|v| (90.0..100.0).contains(&v));
            Ok(elevated && !severe_blood_pressure(s)?)
        })
        .effect(
            COMBINED,
            MEC3,
            "Blood pressure 140-159/90-99 mmHg: estrogen raises cardiovascular risk",
        )
        .effect(
            PROGESTIN_INJECTABLES,
            MEC2,
            "Blood pressure 140-159/90-99 mmHg: monitor on injectable progestin",
        ),
        Rule::new("blood-pressure-severe", SECTION, 80, severe_blood_pressure)
            .effect(
                COMBINED,
                MEC4,
                "Blood pressure 160/100 mmHg or higher: unacceptable cardiovascular risk with estrogen",
            )
            .effect(
                LOW_DOSE_PROGESTIN,
                MEC2,
                "Blood pressure 160/100 mmHg or higher: use with monitoring",
            )
            .effect(
                PROGESTIN_INJECTABLES,
                MEC3,
                "Blood pressure 160/100 mmHg or higher: injectable progestin may worsen vascular risk",
            ),
        Rule::new("hypertension-vascular-disease", SECTION, 90, |s| {
            s.yes(q::HYPERTENSION_VASCULAR)
        })
        .effect(
            COMBINED,
            MEC4,
            "Hypertension with vascular disease: unacceptable cardiovascular risk with estrogen",
        )
        .effect(
            LOW_DOSE_PROGESTIN,
            MEC2,
            "Hypertension with vascular disease: use with monitoring",
        )
        .effect(
            PROGESTIN_INJECTABLES,
            MEC3,
            "Hypertension with vascular disease: injectable progestin may worsen vascular risk",
        ),
        Rule::new("pregnancy-hypertension-history", SECTION, 100, |s| {
            s.yes(q::PREGNANCY_HYPERTENSION)
        })
        .effect(
            COMBINED,
            MEC2,
            "History of high blood pressure during pregnancy",
        ),
        // Heart and vessels
        Rule::new("ischemic-heart-disease", SECTION, 110, |s| {
            s.yes(q::ISCHEMIC_HEART_DISEASE)
        })
        .effect(
            COMBINED,
            MEC4,
            "Ischemic heart disease: unacceptable risk with estrogen",
        )
        .effect(
            LOW_DOSE_PROGESTIN,
            MEC2,
            "Ischemic heart disease: progestin-only methods need monitoring",
        )
        .effect(
            PROGESTIN_INJECTABLES,
            MEC3,
            "Ischemic heart disease: injectable progestin may lower protective HDL",
        )
        .effect(
            &[EmergencyPill],
            MEC2,
            "Ischemic heart disease: emergency pill is usable but warrants caution",
        )
        .effect(
            &[FemaleSterilization],
            MEC3,
            "Ischemic heart disease: sterilization requires a specialized surgical setting",
        ),
        Rule::new("stroke-history", SECTION, 120, |s| s.yes(q::STROKE))
            .effect(COMBINED, MEC4, "History of stroke: unacceptable risk with estrogen")
            .effect(
                LOW_DOSE_PROGESTIN,
                MEC2,
                "History of stroke: progestin-only methods need monitoring",
            )
            .effect(
                PROGESTIN_INJECTABLES,
                MEC3,
                "History of stroke: injectable progestin may worsen vascular risk",
            )
            .effect(
                &[EmergencyPill],
                MEC2,
                "History of stroke: emergency pill is usable but warrants caution",
            ),
        Rule::new("valvular-heart-disease-uncomplicated", SECTION, 130, |s| {
            s.is(q::VALVULAR_HEART_DISEASE, "uncomplicated")
        })
        .effect(
            COMBINED,
            MEC2,
            "Uncomplicated valvular heart disease: small added clot risk with estrogen",
        ),
        Rule::new("valvular-heart-disease-complicated", SECTION, 140, |s| {
            s.is(q::VALVULAR_HEART_DISEASE, "complicated")
        })
        .effect(
            COMBINED,
            MEC4,
            "Complicated valvular heart disease: high risk of arterial thrombosis with estrogen",
        )
        .effect(
            IUDS,
            MEC2,
            "Complicated valvular heart disease: antibiotic prophylaxis advised for IUD insertion",
        )
        .effect(
            &[FemaleSterilization],
            MEC3,
            "Complicated valvular heart disease: sterilization requires a specialized surgical setting",
        ),
        Rule::new("dyslipidemia", SECTION, 150, |s| {
            let ldl = s.record_number(q::LIPID_PANEL, "ldl")?;
            let total = s.record_number(q::LIPID_PANEL, "total")?;
            let hdl = s.record_number(q::LIPID_PANEL, "hdl")?;
            let triglycerides = s.record_number(q::LIPID_PANEL, "triglycerides")?;
            Ok(ldl.is_some_and(|v| v >= 160.0)
                || total.is_some_and(|v| v >= 240.0)
                || hdl.is_some_and(|v| v < 40.0)
                || triglycerides.is_some_and(|v| v >= 200.0))
        })
        .effect(
            COMBINED,
            MEC2,
            "Abnormal lipid panel: estrogen adds to cardiovascular risk",
        )
        .effect(
            PROGESTIN_INJECTABLES,
            MEC2,
            "Abnormal lipid panel: injectable progestin may lower HDL",
        ),
        Rule::new("peripartum-cardiomyopathy", SECTION, 160, |s| {
            s.yes(q::PERIPARTUM_CARDIOMYOPATHY)
        })
        .effect(
            COMBINED,
            MEC4,
            "Peripartum cardiomyopathy: estrogen increases risk of thromboembolism and fluid retention",
        )
        .effect(
            PROGESTIN_ONLY,
            MEC2,
            "Peripartum cardiomyopathy: progestin-only methods need cardiology follow-up",
        )
        .effect(
            &[CopperIud],
            MEC2,
            "Peripartum cardiomyopathy: IUD insertion can trigger a vasovagal reaction",
        )
        .effect(
            &[FemaleSterilization],
            MEC3,
            "Peripartum cardiomyopathy: sterilization requires a specialized surgical setting",
        ),
    ]
}
