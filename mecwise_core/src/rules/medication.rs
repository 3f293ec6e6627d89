use super::{Rule, Section, COMBINED, MEC2, MEC3};
use crate::questions::medication as med;
use crate::types::Method::*;

const SECTION: Section = Section::MedicationHistory;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new("rifampicin-or-rifabutin", SECTION, 10, |s| s.takes(med::RIFAMPICIN))
            .effect(
                &[CombinedPill, Patch, VaginalRing, ProgestinOnlyPill],
                MEC3,
                "Rifampicin or rifabutin: enzyme induction lowers hormone levels and effectiveness",
            )
            .effect(
                &[CombinedInjectable, Implant, NetEn],
                MEC2,
                "Rifampicin or rifabutin: may reduce contraceptive effectiveness",
            ),
        // The combined injectable is listed in both effects. Max-wins resolves it
        // to 3; kept pending clinical review of the intended category.
        Rule::new("enzyme-inducing-anticonvulsants", SECTION, 20, |s| {
            s.takes(med::ENZYME_INDUCING_ANTICONVULSANT)
        })
        .effect(
            &[CombinedPill, CombinedInjectable, Patch, VaginalRing, ProgestinOnlyPill],
            MEC3,
            "Enzyme-inducing anticonvulsants: reduced contraceptive effectiveness",
        )
        .effect(
            &[CombinedInjectable, Implant, NetEn],
            MEC2,
            "Enzyme-inducing anticonvulsants: may reduce contraceptive effectiveness",
        ),
        Rule::new("lamotrigine", SECTION, 30, |s| s.takes(med::LAMOTRIGINE)).effect(
            COMBINED,
            MEC3,
            "Lamotrigine: combined hormones lower lamotrigine levels and seizure control",
        ),
        Rule::new("ritonavir-boosted-protease-inhibitors", SECTION, 40, |s| {
            s.takes(med::RITONAVIR_BOOSTED_PI)
        })
        .effect(
            &[CombinedPill, Patch, VaginalRing, ProgestinOnlyPill],
            MEC3,
            "Ritonavir-boosted protease inhibitors: reduced hormone levels",
        )
        .effect(
            &[CombinedInjectable, Implant, NetEn],
            MEC2,
            "Ritonavir-boosted protease inhibitors: may reduce contraceptive effectiveness",
        ),
        Rule::new("nnrti-efavirenz-nevirapine", SECTION, 50, |s| s.takes(med::NNRTI)).effect(
            &[
                CombinedPill,
                CombinedInjectable,
                Patch,
                VaginalRing,
                ProgestinOnlyPill,
                Implant,
                NetEn,
            ],
            MEC2,
            "Efavirenz or nevirapine: may reduce contraceptive effectiveness",
        ),
        Rule::new("st-johns-wort", SECTION, 60, |s| s.takes(med::ST_JOHNS_WORT)).effect(
            &[
                CombinedPill,
                CombinedInjectable,
                Patch,
                VaginalRing,
                ProgestinOnlyPill,
                Implant,
            ],
            MEC2,
            "St John's wort: enzyme induction may reduce contraceptive effectiveness",
        ),
    ]
}
