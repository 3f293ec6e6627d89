use super::{
    Rule, Section, COMBINED, IUDS, LOW_DOSE_PROGESTIN, MEC2, MEC3, MEC4, PROGESTIN_INJECTABLES,
    PROGESTIN_ONLY,
};
use crate::questions as q;
use crate::types::Method::*;

const SECTION: Section = Section::Comorbidities;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        // Endocrine
        Rule::new("diabetes", SECTION, 10, |s| s.yes(q::DIABETES))
            .effect(
                COMBINED,
                MEC2,
                "Diabetes without vascular disease: estrogen may affect glucose control",
            )
            .effect(
                PROGESTIN_ONLY,
                MEC2,
                "Diabetes without vascular disease: progestin may affect glucose control",
            ),
        Rule::new("diabetes-vascular-complications", SECTION, 20, |s| {
            s.yes(q::DIABETES_VASCULAR)
        })
        .effect(
            COMBINED,
            MEC3,
            "Diabetes with vascular complications or over 20 years duration: arterial thrombosis risk",
        )
        .effect(
            PROGESTIN_INJECTABLES,
            MEC3,
            "Diabetes with vascular complications: injectable progestin may worsen vascular risk",
        )
        .effect(
            LOW_DOSE_PROGESTIN,
            MEC2,
            "Diabetes with vascular complications: use with monitoring",
        )
        .effect(
            &[FemaleSterilization],
            MEC3,
            "Diabetes with vascular complications: higher surgical risk",
        ),
        // Neurologic
        Rule::new("migraine-without-aura-under-35", SECTION, 30, |s| {
            Ok(s.is(q::MIGRAINE, "without-aura")? && s.age_where(|age| age < 35.0))
        })
        .effect(
            COMBINED,
            MEC2,
            "Migraine without aura under 35: small added stroke risk with estrogen",
        ),
        Rule::new("migraine-without-aura-35-plus", SECTION, 40, |s| {
            Ok(s.is(q::MIGRAINE, "without-aura")? && s.age_where(|age| age >= 35.0))
        })
        .effect(
            COMBINED,
            MEC3,
            "Migraine without aura at age 35 or older: increased stroke risk with estrogen",
        ),
        Rule::new("migraine-with-aura", SECTION, 50, |s| s.is(q::MIGRAINE, "with-aura"))
            .effect(
                COMBINED,
                MEC4,
                "Migraine with aura: markedly increased stroke risk with estrogen",
            )
            .effect(
                PROGESTIN_ONLY,
                MEC2,
                "Migraine with aura: monitor headache pattern on progestin",
            )
            .effect(
                &[EmergencyPill],
                MEC2,
                "Migraine with aura: emergency pill is usable but warrants caution",
            ),
        // Gastrointestinal and liver
        Rule::new("gallbladder-disease-symptomatic", SECTION, 60, |s| {
            s.is(q::GALLBLADDER_DISEASE, "symptomatic")
        })
        .effect(
            COMBINED,
            MEC3,
            "Symptomatic gallbladder disease: estrogen may worsen gallbladder disease",
        )
        .effect(
            PROGESTIN_ONLY,
            MEC2,
            "Symptomatic gallbladder disease: progestin may worsen gallbladder disease",
        ),
        Rule::new("gallbladder-disease-treated", SECTION, 70, |s| {
            s.is(q::GALLBLADDER_DISEASE, "treated")
        })
        .effect(
            COMBINED,
            MEC2,
            "Treated gallbladder disease: estrogen use needs monitoring",
        ),
        Rule::new("cholestasis-coc-history", SECTION, 80, |s| s.yes(q::CHOLESTASIS_COC))
            .effect(
                COMBINED,
                MEC3,
                "Past cholestasis related to combined hormones: likely to recur",
            )
            .effect(
                PROGESTIN_ONLY,
                MEC2,
                "Past cholestasis related to combined hormones: monitor liver function",
            ),
        Rule::new("cholestasis-pregnancy-history", SECTION, 90, |s| {
            s.yes(q::CHOLESTASIS_PREGNANCY)
        })
        .effect(
            COMBINED,
            MEC2,
            "Past cholestasis of pregnancy: estrogen may trigger cholestasis",
        ),
        Rule::new("acute-viral-hepatitis", SECTION, 100, |s| s.yes(q::ACUTE_HEPATITIS)).effect(
            COMBINED,
            MEC3,
            "Acute or flaring viral hepatitis: do not start estrogen until liver function recovers",
        ),
        Rule::new("cirrhosis-severe", SECTION, 110, |s| s.is(q::CIRRHOSIS, "severe"))
            .effect(
                COMBINED,
                MEC4,
                "Severe decompensated cirrhosis: hormones are poorly metabolized",
            )
            .effect(
                PROGESTIN_ONLY,
                MEC3,
                "Severe decompensated cirrhosis: hormones are poorly metabolized",
            )
            .effect(
                &[EmergencyPill],
                MEC2,
                "Severe liver disease: emergency pill is usable but warrants caution",
            )
            .effect(
                &[FemaleSterilization],
                MEC3,
                "Severe cirrhosis: sterilization requires a specialized surgical setting",
            ),
        Rule::new("liver-tumor-fnh", SECTION, 120, |s| {
            s.is(q::LIVER_TUMOR, "focal-nodular-hyperplasia")
        })
        .effect(
            COMBINED,
            MEC2,
            "Focal nodular hyperplasia of the liver: use with monitoring",
        )
        .effect(
            PROGESTIN_ONLY,
            MEC2,
            "Focal nodular hyperplasia of the liver: use with monitoring",
        ),
        Rule::new("liver-tumor-adenoma-or-malignant", SECTION, 130, |s| {
            Ok(s.is(q::LIVER_TUMOR, "adenoma")? || s.is(q::LIVER_TUMOR, "malignant")?)
        })
        .effect(
            COMBINED,
            MEC4,
            "Hepatocellular adenoma or liver cancer: hormones may stimulate tumor growth",
        )
        .effect(
            PROGESTIN_ONLY,
            MEC3,
            "Hepatocellular adenoma or liver cancer: hormones may stimulate tumor growth",
        ),
        // Blood
        Rule::new("sickle-cell-disease", SECTION, 140, |s| s.yes(q::SICKLE_CELL))
            .effect(
                COMBINED,
                MEC2,
                "Sickle cell disease: theoretical added clot risk with estrogen",
            )
            .effect(
                &[CopperIud],
                MEC2,
                "Sickle cell disease: copper IUD may increase blood loss",
            ),
        Rule::new("thalassemia", SECTION, 150, |s| s.yes(q::THALASSEMIA)).effect(
            &[CopperIud],
            MEC2,
            "Thalassemia: copper IUD may increase blood loss",
        ),
        Rule::new("iron-deficiency-anemia", SECTION, 160, |s| {
            s.yes(q::IRON_DEFICIENCY_ANEMIA)
        })
        .effect(
            &[CopperIud],
            MEC2,
            "Iron-deficiency anemia: copper IUD may increase blood loss",
        )
        .effect(
            &[FemaleSterilization],
            MEC2,
            "Iron-deficiency anemia: correct anemia before surgery",
        ),
        // Surgery and transplant
        Rule::new("bariatric-surgery-malabsorptive", SECTION, 170, |s| {
            s.is(q::BARIATRIC_SURGERY, "malabsorptive")
        })
        .effect(
            &[CombinedPill, ProgestinOnlyPill],
            MEC3,
            "Malabsorptive bariatric surgery: oral contraceptives may not be absorbed reliably",
        ),
        Rule::new("organ-transplant-complicated", SECTION, 180, |s| {
            s.is(q::ORGAN_TRANSPLANT, "complicated")
        })
        .effect(
            COMBINED,
            MEC4,
            "Complicated solid organ transplant: unacceptable risk with estrogen",
        )
        .effect(
            PROGESTIN_ONLY,
            MEC2,
            "Complicated solid organ transplant: use with specialist follow-up",
        )
        .effect(
            IUDS,
            MEC3,
            "Complicated solid organ transplant: IUD insertion increases infection risk",
        ),
        Rule::new("organ-transplant-uncomplicated", SECTION, 190, |s| {
            s.is(q::ORGAN_TRANSPLANT, "uncomplicated")
        })
        .effect(
            COMBINED,
            MEC2,
            "Uncomplicated solid organ transplant: use with specialist follow-up",
        )
        .effect(
            PROGESTIN_ONLY,
            MEC2,
            "Uncomplicated solid organ transplant: use with specialist follow-up",
        )
        .effect(
            &[CopperIud],
            MEC2,
            "Uncomplicated solid organ transplant: monitor for infection after IUD insertion",
        ),
    ]
}
