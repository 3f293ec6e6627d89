use super::{Rule, Section, IUDS, MEC2, MEC3, MEC4};
use crate::questions as q;
use crate::types::Method::*;

const SECTION: Section = Section::ReproductiveTractInfection;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new("pid-current", SECTION, 10, |s| s.yes(q::PID_CURRENT))
            .effect(
                IUDS,
                MEC4,
                "Current pelvic inflammatory disease: IUD insertion may worsen infection",
            )
            .effect(
                &[FemaleSterilization],
                MEC4,
                "Current pelvic inflammatory disease: delay sterilization until treated",
            ),
        Rule::new("pid-history", SECTION, 20, |s| s.yes(q::PID_HISTORY)).effect(
            IUDS,
            MEC2,
            "Past pelvic inflammatory disease: screen for infection before IUD insertion",
        ),
        Rule::new("purulent-cervicitis", SECTION, 30, |s| s.yes(q::PURULENT_CERVICITIS))
            .effect(
                IUDS,
                MEC4,
                "Purulent cervicitis, chlamydia or gonorrhea: IUD insertion may cause pelvic infection",
            )
            .effect(
                &[FemaleSterilization],
                MEC4,
                "Purulent cervicitis, chlamydia or gonorrhea: delay sterilization until treated",
            ),
        Rule::new("other-sti", SECTION, 40, |s| s.yes(q::OTHER_STI)).effect(
            IUDS,
            MEC2,
            "Other sexually transmitted infection: treat before IUD insertion",
        ),
        Rule::new("vaginitis", SECTION, 50, |s| s.yes(q::VAGINITIS)).effect(
            IUDS,
            MEC2,
            "Vaginitis: treat before IUD insertion",
        ),
        Rule::new("high-sti-risk", SECTION, 60, |s| s.yes(q::HIGH_STI_RISK)).effect(
            IUDS,
            MEC3,
            "Very high individual risk of chlamydia or gonorrhea: IUD insertion may cause pelvic infection",
        ),
        Rule::new("high-hiv-risk", SECTION, 70, |s| s.yes(q::HIGH_HIV_RISK)).effect(
            IUDS,
            MEC2,
            "High risk of HIV: use condoms alongside an IUD",
        ),
        Rule::new("hiv-asymptomatic-or-mild", SECTION, 80, |s| {
            s.is(q::HIV_STATUS, "asymptomatic-or-mild")
        })
        .effect(
            IUDS,
            MEC2,
            "Asymptomatic or mild HIV clinical disease: monitor for pelvic infection",
        ),
        Rule::new("hiv-severe-or-advanced", SECTION, 90, |s| {
            s.is(q::HIV_STATUS, "severe-or-advanced")
        })
        .effect(
            IUDS,
            MEC3,
            "Severe or advanced HIV clinical disease: IUD insertion increases infection risk",
        ),
        Rule::new("pelvic-tuberculosis", SECTION, 100, |s| s.yes(q::PELVIC_TUBERCULOSIS))
            .effect(
                IUDS,
                MEC4,
                "Pelvic tuberculosis: IUD insertion may worsen infection",
            )
            .effect(
                &[FemaleSterilization],
                MEC4,
                "Pelvic tuberculosis: delay sterilization until treated",
            ),
    ]
}
