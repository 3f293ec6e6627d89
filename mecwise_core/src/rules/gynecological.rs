use super::{Rule, Section, COMBINED, IUDS, MEC2, MEC3, MEC4, PROGESTIN_INJECTABLES};
use crate::questions as q;
use crate::types::Method::{self, *};

const SECTION: Section = Section::GynecologicalHistory;

/// Every method that delivers a hormone
const HORMONAL: &[Method] = &[
    CombinedPill,
    CombinedInjectable,
    ProgestinOnlyPill,
    Dmpa,
    Implant,
    LngIud,
    Patch,
    VaginalRing,
    NetEn,
];

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new("breast-cancer-current", SECTION, 10, |s| s.is(q::BREAST_CANCER, "current"))
            .effect(
                HORMONAL,
                MEC4,
                "Current breast cancer: hormones can stimulate hormone-sensitive tumors",
            ),
        Rule::new("breast-cancer-past", SECTION, 20, |s| s.is(q::BREAST_CANCER, "past")).effect(
            HORMONAL,
            MEC3,
            "Past breast cancer with no evidence of disease for 5 years: hormones may raise recurrence risk",
        ),
        Rule::new("undiagnosed-breast-mass", SECTION, 30, |s| s.yes(q::BREAST_MASS)).effect(
            HORMONAL,
            MEC2,
            "Undiagnosed breast mass: evaluate as soon as possible",
        ),
        Rule::new("cervical-cancer", SECTION, 40, |s| s.yes(q::CERVICAL_CANCER))
            .effect(
                IUDS,
                MEC4,
                "Cervical cancer awaiting treatment: IUD insertion may increase bleeding and infection",
            )
            .effect(
                COMBINED,
                MEC2,
                "Cervical cancer: theoretical concern that hormones affect disease progression",
            )
            .effect(
                &[Dmpa, Implant, NetEn],
                MEC2,
                "Cervical cancer: theoretical concern that hormones affect disease progression",
            )
            .effect(
                &[FemaleSterilization],
                MEC4,
                "Cervical cancer: delay sterilization until treated",
            ),
        Rule::new("cervical-intraepithelial-neoplasia", SECTION, 50, |s| {
            s.yes(q::CERVICAL_NEOPLASIA)
        })
        .effect(
            COMBINED,
            MEC2,
            "Cervical intraepithelial neoplasia: possible progression with long-term estrogen use",
        )
        .effect(
            PROGESTIN_INJECTABLES,
            MEC2,
            "Cervical intraepithelial neoplasia: possible progression with long-term progestin use",
        )
        .effect(
            &[LngIud],
            MEC2,
            "Cervical intraepithelial neoplasia: theoretical concern with LNG-IUD",
        ),
        Rule::new("endometrial-cancer", SECTION, 60, |s| s.yes(q::ENDOMETRIAL_CANCER))
            .effect(
                IUDS,
                MEC4,
                "Endometrial cancer: IUD insertion may increase bleeding, infection and perforation",
            )
            .effect(
                &[FemaleSterilization],
                MEC4,
                "Endometrial cancer: delay sterilization; treatment usually causes infertility",
            ),
        Rule::new("ovarian-cancer", SECTION, 70, |s| s.yes(q::OVARIAN_CANCER))
            .effect(
                IUDS,
                MEC3,
                "Ovarian cancer: treatment may require removal of the uterus",
            )
            .effect(
                &[FemaleSterilization],
                MEC4,
                "Ovarian cancer: delay sterilization; treatment usually causes infertility",
            ),
        Rule::new("uterine-fibroids-distorting-cavity", SECTION, 80, |s| {
            s.yes(q::UTERINE_FIBROIDS)
        })
        .effect(
            IUDS,
            MEC4,
            "Fibroids distorting the uterine cavity: correct IUD placement is not possible",
        )
        .effect(
            &[FemaleSterilization],
            MEC2,
            "Uterine fibroids: sterilization may be technically difficult",
        ),
        Rule::new("uterine-anatomical-abnormality", SECTION, 90, |s| {
            s.yes(q::UTERINE_ANOMALY)
        })
        .effect(
            IUDS,
            MEC4,
            "Anatomical abnormality distorting the uterine cavity: correct IUD placement is not possible",
        ),
    ]
}
