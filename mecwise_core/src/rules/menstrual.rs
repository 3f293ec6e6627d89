use super::{Rule, Section, IUDS, MEC2, MEC3, MEC4};
use crate::questions as q;
use crate::types::Method::{self, *};

const SECTION: Section = Section::MenstrualHistory;

/// Progestin-only methods known for unpredictable bleeding
const BLEEDING_PROFILE: &[Method] = &[ProgestinOnlyPill, Dmpa, Implant, NetEn];

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new("irregular-cycles", SECTION, 10, |s| Ok(s.irregular_cycles())).effect(
            BLEEDING_PROFILE,
            MEC2,
            "Irregular cycles: progestin-only methods may further disrupt bleeding patterns",
        ),
        Rule::new("heavy-or-prolonged-bleeding", SECTION, 20, |s| s.yes(q::HEAVY_BLEEDING))
            .effect(
                BLEEDING_PROFILE,
                MEC2,
                "Heavy or prolonged bleeding: progestin-only methods can cause unpredictable bleeding",
            )
            .effect(
                &[CopperIud],
                MEC2,
                "Heavy or prolonged bleeding: copper IUD can increase menstrual blood loss",
            ),
        Rule::new("unexplained-vaginal-bleeding", SECTION, 30, |s| {
            s.yes(q::UNEXPLAINED_BLEEDING)
        })
        .effect(
            &[CombinedPill, CombinedInjectable, ProgestinOnlyPill, Patch, VaginalRing],
            MEC2,
            "Unexplained vaginal bleeding: evaluate before relying on this method",
        )
        .effect(
            &[Dmpa, Implant, NetEn],
            MEC3,
            "Unexplained vaginal bleeding: method may mask an underlying condition",
        )
        .effect(
            IUDS,
            MEC4,
            "Unexplained vaginal bleeding: IUD insertion must wait until the cause is known",
        )
        .effect(
            &[FemaleSterilization],
            MEC4,
            "Unexplained vaginal bleeding: delay sterilization until evaluated",
        ),
        Rule::new("severe-dysmenorrhea", SECTION, 40, |s| s.yes(q::SEVERE_DYSMENORRHEA)).effect(
            &[CopperIud],
            MEC2,
            "Severe dysmenorrhea: copper IUD may worsen menstrual pain",
        ),
        Rule::new("endometriosis", SECTION, 50, |s| s.yes(q::ENDOMETRIOSIS)).effect(
            &[CopperIud],
            MEC2,
            "Endometriosis: copper IUD may worsen menstrual pain",
        ),
    ]
}
