use super::{
    Rule, Section, COMBINED, LOW_DOSE_PROGESTIN, MEC2, MEC3, MEC4, PROGESTIN_INJECTABLES,
    PROGESTIN_ONLY,
};
use crate::questions as q;
use crate::types::Method::*;

const SECTION: Section = Section::ProthromboticConditions;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new("dvt-pe-history", SECTION, 10, |s| s.yes(q::DVT_PE_HISTORY))
            .effect(
                COMBINED,
                MEC4,
                "History of DVT/PE: estrogen raises the risk of recurrence",
            )
            .effect(
                PROGESTIN_ONLY,
                MEC2,
                "History of DVT/PE: progestin-only methods carry a small theoretical risk",
            ),
        Rule::new("dvt-pe-acute", SECTION, 20, |s| s.yes(q::DVT_PE_ACUTE))
            .effect(COMBINED, MEC4, "Acute DVT/PE: unacceptable risk with estrogen")
            .effect(
                PROGESTIN_ONLY,
                MEC3,
                "Acute DVT/PE: hormonal methods should wait until the episode is treated",
            )
            .effect(
                &[CopperIud],
                MEC2,
                "Acute DVT/PE: copper IUD insertion needs caution during acute treatment",
            )
            .effect(
                &[FemaleSterilization],
                MEC4,
                "Acute DVT/PE: delay sterilization",
            ),
        Rule::new("dvt-pe-anticoagulant-therapy", SECTION, 30, |s| {
            s.yes(q::DVT_PE_ANTICOAGULANT)
        })
        .effect(
            COMBINED,
            MEC4,
            "DVT/PE on anticoagulant therapy: unacceptable risk with estrogen",
        )
        .effect(
            PROGESTIN_ONLY,
            MEC2,
            "DVT/PE on anticoagulant therapy: progestin-only methods need monitoring",
        )
        .effect(
            &[CopperIud],
            MEC2,
            "Anticoagulant therapy: copper IUD may increase menstrual bleeding",
        ),
        Rule::new("dvt-pe-family-history", SECTION, 40, |s| s.yes(q::DVT_FAMILY_HISTORY))
            .effect(
                COMBINED,
                MEC2,
                "First-degree relative with DVT/PE: possible inherited clot risk",
            ),
        Rule::new("major-surgery-prolonged-immobilization", SECTION, 50, |s| {
            s.is(q::MAJOR_SURGERY, "prolonged-immobilization")
        })
        .effect(
            COMBINED,
            MEC4,
            "Major surgery with prolonged immobilization: unacceptable clot risk with estrogen",
        )
        .effect(
            PROGESTIN_ONLY,
            MEC2,
            "Major surgery with prolonged immobilization: small theoretical clot risk",
        )
        .effect(
            &[FemaleSterilization],
            MEC4,
            "Major surgery with prolonged immobilization: delay sterilization",
        ),
        Rule::new("major-surgery-without-immobilization", SECTION, 60, |s| {
            s.is(q::MAJOR_SURGERY, "without-immobilization")
        })
        .effect(
            COMBINED,
            MEC2,
            "Major surgery without prolonged immobilization: slight clot risk with estrogen",
        ),
        Rule::new("thrombogenic-mutation", SECTION, 70, |s| s.yes(q::THROMBOGENIC_MUTATION))
            .effect(
                COMBINED,
                MEC4,
                "Known thrombogenic mutation (e.g. factor V Leiden): unacceptable clot risk with estrogen",
            )
            .effect(
                PROGESTIN_ONLY,
                MEC2,
                "Known thrombogenic mutation: progestin-only methods carry a small theoretical risk",
            ),
        Rule::new("superficial-venous-thrombosis", SECTION, 80, |s| {
            s.yes(q::SUPERFICIAL_THROMBOSIS)
        })
        .effect(
            COMBINED,
            MEC3,
            "Superficial venous thrombosis: estrogen may increase risk of deep clots",
        ),
        Rule::new("lupus-antiphospholipid", SECTION, 90, |s| s.is(q::LUPUS, "antiphospholipid"))
            .effect(
                COMBINED,
                MEC4,
                "Lupus with antiphospholipid antibodies: unacceptable clot risk with estrogen",
            )
            .effect(
                PROGESTIN_ONLY,
                MEC3,
                "Lupus with antiphospholipid antibodies: increased clot risk",
            ),
        Rule::new("lupus-severe-thrombocytopenia", SECTION, 100, |s| {
            s.is(q::LUPUS, "severe-thrombocytopenia")
        })
        .effect(
            COMBINED,
            MEC2,
            "Lupus with severe thrombocytopenia: use with monitoring",
        )
        .effect(
            LOW_DOSE_PROGESTIN,
            MEC2,
            "Lupus with severe thrombocytopenia: use with monitoring",
        )
        .effect(
            PROGESTIN_INJECTABLES,
            MEC3,
            "Lupus with severe thrombocytopenia: risk of bleeding at the injection site",
        )
        .effect(
            &[CopperIud],
            MEC3,
            "Lupus with severe thrombocytopenia: copper IUD may cause heavy bleeding",
        ),
        Rule::new("lupus-immunosuppressive-therapy", SECTION, 110, |s| {
            s.is(q::LUPUS, "immunosuppressive")
        })
        .effect(
            COMBINED,
            MEC2,
            "Lupus on immunosuppressive therapy: use with monitoring",
        )
        .effect(
            PROGESTIN_ONLY,
            MEC2,
            "Lupus on immunosuppressive therapy: use with monitoring",
        )
        .effect(
            &[CopperIud],
            MEC2,
            "Lupus on immunosuppressive therapy: monitor for infection after IUD insertion",
        ),
        Rule::new("lupus-uncomplicated", SECTION, 120, |s| s.is(q::LUPUS, "uncomplicated"))
            .effect(
                COMBINED,
                MEC2,
                "Lupus without antiphospholipid antibodies: use with monitoring",
            ),
    ]
}
