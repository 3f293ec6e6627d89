use super::{Rule, Section, COMBINED, IUDS, MEC2, MEC3, PROGESTIN_INJECTABLES};
use crate::questions as q;
use crate::types::Method;

const SECTION: Section = Section::PersonalCharacteristics;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new("age-under-18-injectables", SECTION, 10, |s| {
            Ok(s.age_where(|age| age < 18.0))
        })
        .effect(
            PROGESTIN_INJECTABLES,
            MEC2,
            "Under 18: DMPA and NET-EN can reduce bone density while bone mass is still building",
        ),
        Rule::new("age-under-20-iud", SECTION, 20, |s| Ok(s.age_where(|age| age < 20.0)))
            .effect(IUDS, MEC2, "Under 20: higher risk of IUD expulsion"),
        Rule::new("age-40-plus-combined", SECTION, 30, |s| {
            Ok(s.age_where(|age| age >= 40.0))
        })
        .effect(
            COMBINED,
            MEC2,
            "Age 40 or older: cardiovascular risk rises with estrogen-containing methods",
        ),
        Rule::new("age-over-45-injectables", SECTION, 40, |s| {
            Ok(s.age_where(|age| age > 45.0))
        })
        .effect(
            PROGESTIN_INJECTABLES,
            MEC2,
            "Over 45: DMPA and NET-EN can reduce bone density approaching menopause",
        ),
        Rule::new("age-under-35-sterilization", SECTION, 50, |s| {
            Ok(s.age_where(|age| age < 35.0))
        })
        .effect(
            &Method::STERILIZATION,
            MEC3,
            "Under 35: higher likelihood of regret after permanent sterilization",
        ),
        Rule::new("obesity", SECTION, 60, |s| Ok(s.bmi().is_some_and(|bmi| bmi >= 30.0)))
            .effect(
                COMBINED,
                MEC2,
                "BMI 30 or above: increased risk of blood clots with combined hormonal methods",
            )
            .effect(
                &[Method::FemaleSterilization],
                MEC2,
                "BMI 30 or above: higher surgical and anesthesia risk",
            ),
        Rule::new("obesity-adolescent-injectables", SECTION, 70, |s| {
            Ok(s.bmi().is_some_and(|bmi| bmi >= 30.0) && s.age_where(|age| age < 18.0))
        })
        .effect(
            PROGESTIN_INJECTABLES,
            MEC2,
            "Obese adolescents: DMPA and NET-EN are associated with weight gain",
        ),
        Rule::new("weight-90kg-patch", SECTION, 80, |s| {
            Ok(s.number(q::WEIGHT)?.is_some_and(|kg| kg >= 90.0))
        })
        .effect(
            &[Method::Patch],
            MEC2,
            "Weight 90 kg or more: the patch may be less effective",
        ),
    ]
}
