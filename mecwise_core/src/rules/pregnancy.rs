use super::{
    Rule, Section, COMBINED, IUDS, MEC2, MEC3, MEC4, PROGESTIN_INJECTABLES,
};
use crate::questions as q;
use crate::types::Method::*;

const SECTION: Section = Section::PregnancyHistory;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        // Breastfeeding
        Rule::new("breastfeeding-under-6-weeks", SECTION, 10, |s| {
            Ok(s.yes(q::BREASTFEEDING)? && s.weeks_since_birth().is_some_and(|w| w < 6))
        })
        .effect(
            COMBINED,
            MEC4,
            "Breastfeeding under 6 weeks postpartum: estrogen can reduce milk supply and reach the newborn",
        )
        .effect(
            &[ProgestinOnlyPill, Implant],
            MEC2,
            "Breastfeeding under 6 weeks postpartum: theoretical concern about progestin exposure of the newborn",
        )
        .effect(
            PROGESTIN_INJECTABLES,
            MEC3,
            "Breastfeeding under 6 weeks postpartum: injectable progestin is not advised before 6 weeks",
        ),
        Rule::new("breastfeeding-6-weeks-to-6-months", SECTION, 20, |s| {
            Ok(s.yes(q::BREASTFEEDING)?
                && s.weeks_since_birth().is_some_and(|w| w >= 6)
                && s.months_since_birth().is_some_and(|m| m < 6))
        })
        .effect(
            COMBINED,
            MEC3,
            "Breastfeeding 6 weeks to 6 months postpartum: estrogen can reduce milk supply",
        ),
        Rule::new("breastfeeding-6-months-plus", SECTION, 30, |s| {
            Ok(s.yes(q::BREASTFEEDING)? && s.months_since_birth().is_some_and(|m| m >= 6))
        })
        .effect(
            COMBINED,
            MEC2,
            "Breastfeeding 6 months or more postpartum: estrogen may still affect milk supply",
        ),
        // Not breastfeeding
        Rule::new("postpartum-under-21-days", SECTION, 40, |s| {
            Ok(s.no(q::BREASTFEEDING)? && s.days_where(|d| d < 21))
        })
        .effect(
            COMBINED,
            MEC3,
            "Under 21 days postpartum: high risk of blood clots with estrogen",
        ),
        Rule::new("postpartum-under-21-days-vte-risk", SECTION, 50, |s| {
            Ok(s.no(q::BREASTFEEDING)? && s.days_where(|d| d < 21) && s.yes(q::VTE_RISK_FACTORS)?)
        })
        .effect(
            COMBINED,
            MEC4,
            "Under 21 days postpartum with additional clot risk factors: unacceptable risk with estrogen",
        ),
        Rule::new("postpartum-21-to-42-days", SECTION, 60, |s| {
            Ok(s.no(q::BREASTFEEDING)? && s.days_where(|d| (21..42).contains(&d)))
        })
        .effect(
            COMBINED,
            MEC2,
            "21 to 42 days postpartum: risk of blood clots is still elevated",
        ),
        Rule::new("postpartum-21-to-42-days-vte-risk", SECTION, 70, |s| {
            Ok(s.no(q::BREASTFEEDING)?
                && s.days_where(|d| (21..42).contains(&d))
                && s.yes(q::VTE_RISK_FACTORS)?)
        })
        .effect(
            COMBINED,
            MEC3,
            "21 to 42 days postpartum with additional clot risk factors",
        ),
        // Postpartum IUD insertion and sterilization timing
        Rule::new("lng-iud-under-48-hours-breastfeeding", SECTION, 80, |s| {
            Ok(s.yes(q::BREASTFEEDING)? && s.days_where(|d| d < 2))
        })
        .effect(
            &[LngIud],
            MEC2,
            "Under 48 hours postpartum while breastfeeding: LNG-IUD insertion needs caution",
        ),
        Rule::new("iud-48-hours-to-4-weeks", SECTION, 90, |s| {
            Ok(s.days_where(|d| (2..28).contains(&d)))
        })
        .effect(
            IUDS,
            MEC3,
            "Between 48 hours and 4 weeks postpartum: increased risk of IUD expulsion and perforation",
        ),
        Rule::new("sterilization-7-to-42-days", SECTION, 100, |s| {
            Ok(s.days_where(|d| (7..42).contains(&d)))
        })
        .effect(
            &[FemaleSterilization],
            MEC3,
            "7 to 42 days postpartum: delay sterilization until the uterus has involuted",
        ),
        Rule::new("puerperal-sepsis", SECTION, 110, |s| s.yes(q::PUERPERAL_SEPSIS))
            .effect(IUDS, MEC4, "Puerperal sepsis: IUD insertion may worsen infection")
            .effect(
                &[FemaleSterilization],
                MEC4,
                "Puerperal sepsis: delay sterilization until treated",
            ),
        Rule::new("septic-abortion", SECTION, 120, |s| s.yes(q::SEPTIC_ABORTION))
            .effect(
                IUDS,
                MEC4,
                "Immediately after septic abortion: IUD insertion may worsen infection",
            )
            .effect(
                &[FemaleSterilization],
                MEC4,
                "Septic abortion: delay sterilization until treated",
            ),
        // Obstetric history
        Rule::new("ectopic-pregnancy-history", SECTION, 130, |s| s.yes(q::ECTOPIC_HISTORY))
            .effect(
                &[ProgestinOnlyPill],
                MEC2,
                "History of ectopic pregnancy: progestin-only pill failures are more often ectopic",
            ),
        Rule::new("trophoblastic-disease-elevated-hcg", SECTION, 140, |s| {
            s.is(q::TROPHOBLASTIC_DISEASE, "elevated")
        })
        .effect(
            IUDS,
            MEC4,
            "Gestational trophoblastic disease with persistently elevated hCG: risk of uterine perforation",
        ),
        Rule::new("trophoblastic-disease-decreasing-hcg", SECTION, 150, |s| {
            s.is(q::TROPHOBLASTIC_DISEASE, "decreasing")
        })
        .effect(
            IUDS,
            MEC3,
            "Gestational trophoblastic disease with decreasing hCG: wait for hCG to normalize before IUD insertion",
        ),
        Rule::new("nulliparous", SECTION, 160, |s| {
            Ok(s.number(q::PARITY)?.is_some_and(|births| births == 0.0))
        })
        .effect(IUDS, MEC2, "No previous births: higher risk of IUD expulsion"),
        Rule::new("currently-pregnant", SECTION, 170, |s| s.yes(q::CURRENTLY_PREGNANT))
            .effect(IUDS, MEC4, "Pregnancy: IUD insertion is contraindicated")
            .effect(
                &[FemaleSterilization],
                MEC4,
                "Pregnancy: delay sterilization until after delivery",
            ),
        // Lactational amenorrhea
        Rule::new("lam-not-breastfeeding", SECTION, 180, |s| s.no(q::BREASTFEEDING)).effect(
            &[Lam],
            MEC4,
            "Not breastfeeding: LAM requires exclusive breastfeeding",
        ),
        Rule::new("lam-6-months-plus", SECTION, 190, |s| {
            Ok(s.months_since_birth().is_some_and(|m| m >= 6))
        })
        .effect(
            &[Lam],
            MEC4,
            "Six months or more postpartum: LAM is no longer reliable",
        ),
        Rule::new("lam-menses-returned", SECTION, 200, |s| s.yes(q::MENSES_RETURNED)).effect(
            &[Lam],
            MEC4,
            "Menstruation has returned: LAM is no longer reliable",
        ),
    ]
}
