//! Stable question identifiers used as keys in an [`AnswerState`].
//!
//! [`AnswerState`]: crate::AnswerState

// Personal characteristics
pub const AGE: &str = "age";
pub const WEIGHT: &str = "weight";
pub const HEIGHT: &str = "height";

// Menstrual history
pub const CYCLE_DURATIONS: &str = "cycle-durations";
pub const HEAVY_BLEEDING: &str = "heavy-or-prolonged-bleeding";
pub const UNEXPLAINED_BLEEDING: &str = "unexplained-vaginal-bleeding";
pub const SEVERE_DYSMENORRHEA: &str = "severe-dysmenorrhea";
pub const ENDOMETRIOSIS: &str = "endometriosis";

// Pregnancy history
pub const LAST_DELIVERY_DATE: &str = "last-delivery-date";
pub const BREASTFEEDING: &str = "breastfeeding";
pub const MENSES_RETURNED: &str = "menses-returned";
pub const VTE_RISK_FACTORS: &str = "postpartum-vte-risk-factors";
pub const PUERPERAL_SEPSIS: &str = "puerperal-sepsis";
pub const SEPTIC_ABORTION: &str = "septic-abortion";
pub const ECTOPIC_HISTORY: &str = "ectopic-pregnancy-history";
pub const TROPHOBLASTIC_DISEASE: &str = "gestational-trophoblastic-disease";
pub const PARITY: &str = "parity";
pub const CURRENTLY_PREGNANT: &str = "currently-pregnant";

// Cardiovascular risk
pub const SMOKING: &str = "smoking";
pub const CIGARETTES_PER_DAY: &str = "cigarettes-per-day";
pub const MULTIPLE_CVD_RISK_FACTORS: &str = "multiple-cardiovascular-risk-factors";
pub const HYPERTENSION_HISTORY: &str = "hypertension-history";
pub const HYPERTENSION_CONTROLLED: &str = "hypertension-controlled";
pub const BLOOD_PRESSURE: &str = "blood-pressure";
pub const HYPERTENSION_VASCULAR: &str = "hypertension-vascular-disease";
pub const PREGNANCY_HYPERTENSION: &str = "pregnancy-hypertension-history";
pub const ISCHEMIC_HEART_DISEASE: &str = "ischemic-heart-disease";
pub const STROKE: &str = "stroke-history";
pub const VALVULAR_HEART_DISEASE: &str = "valvular-heart-disease";
pub const LIPID_PANEL: &str = "lipid-panel";
pub const PERIPARTUM_CARDIOMYOPATHY: &str = "peripartum-cardiomyopathy";

// Prothrombotic conditions
pub const DVT_PE_HISTORY: &str = "dvt-pe-history";
pub const DVT_PE_ACUTE: &str = "dvt-pe-acute";
pub const DVT_PE_ANTICOAGULANT: &str = "dvt-pe-anticoagulant-therapy";
pub const DVT_FAMILY_HISTORY: &str = "dvt-family-history";
pub const MAJOR_SURGERY: &str = "major-surgery";
pub const THROMBOGENIC_MUTATION: &str = "thrombogenic-mutation";
pub const SUPERFICIAL_THROMBOSIS: &str = "superficial-venous-thrombosis";
pub const LUPUS: &str = "lupus";

// Gynecological history
pub const BREAST_CANCER: &str = "breast-cancer";
pub const BREAST_MASS: &str = "undiagnosed-breast-mass";
pub const CERVICAL_CANCER: &str = "cervical-cancer";
pub const CERVICAL_NEOPLASIA: &str = "cervical-intraepithelial-neoplasia";
pub const ENDOMETRIAL_CANCER: &str = "endometrial-cancer";
pub const OVARIAN_CANCER: &str = "ovarian-cancer";
pub const UTERINE_FIBROIDS: &str = "uterine-fibroids-distorting-cavity";
pub const UTERINE_ANOMALY: &str = "uterine-anatomical-abnormality";

// Reproductive tract infection
pub const PID_CURRENT: &str = "pid-current";
pub const PID_HISTORY: &str = "pid-history";
pub const PURULENT_CERVICITIS: &str = "purulent-cervicitis";
pub const OTHER_STI: &str = "other-sti";
pub const VAGINITIS: &str = "vaginitis";
pub const HIGH_STI_RISK: &str = "high-sti-risk";
pub const HIGH_HIV_RISK: &str = "high-hiv-risk";
pub const HIV_STATUS: &str = "hiv-status";
pub const PELVIC_TUBERCULOSIS: &str = "pelvic-tuberculosis";

// Comorbidities
pub const DIABETES: &str = "diabetes";
pub const DIABETES_VASCULAR: &str = "diabetes-vascular-complications";
pub const MIGRAINE: &str = "migraine";
pub const GALLBLADDER_DISEASE: &str = "gallbladder-disease";
pub const CHOLESTASIS_COC: &str = "cholestasis-coc-history";
pub const CHOLESTASIS_PREGNANCY: &str = "cholestasis-pregnancy-history";
pub const ACUTE_HEPATITIS: &str = "acute-viral-hepatitis";
pub const CIRRHOSIS: &str = "cirrhosis";
pub const LIVER_TUMOR: &str = "liver-tumor";
pub const SICKLE_CELL: &str = "sickle-cell-disease";
pub const THALASSEMIA: &str = "thalassemia";
pub const IRON_DEFICIENCY_ANEMIA: &str = "iron-deficiency-anemia";
pub const BARIATRIC_SURGERY: &str = "bariatric-surgery";
pub const ORGAN_TRANSPLANT: &str = "solid-organ-transplant";

// Medication history
pub const MEDICATIONS: &str = "medications";

/// Selection codes for the [`MEDICATIONS`] list answer
pub mod medication {
    pub const RIFAMPICIN: u32 = 1;
    pub const ENZYME_INDUCING_ANTICONVULSANT: u32 = 2;
    pub const LAMOTRIGINE: u32 = 3;
    pub const RITONAVIR_BOOSTED_PI: u32 = 4;
    pub const NNRTI: u32 = 5;
    /// MEC 1 for every method; recorded but fires no rule
    pub const BROAD_SPECTRUM_ANTIBIOTIC: u32 = 6;
    /// MEC 1 for every method; recorded but fires no rule
    pub const ANTIFUNGAL: u32 = 7;
    pub const ST_JOHNS_WORT: u32 = 8;
}

// Fertility-awareness questionnaire
pub const FAB_CURRENTLY_PREGNANT: &str = "fab-currently-pregnant";
pub const FAB_POSTPARTUM: &str = "fab-postpartum";
pub const FAB_BREASTFEEDING: &str = "fab-breastfeeding";
pub const FAB_WEEKS_SINCE_DELIVERY: &str = "fab-weeks-since-delivery";
pub const FAB_MENSES_RESUMED: &str = "fab-menses-resumed";
pub const FAB_RECENT_ABORTION: &str = "fab-recent-abortion";
pub const FAB_RECENT_MENARCHE: &str = "fab-recent-menarche";
pub const FAB_PERIMENOPAUSE: &str = "fab-perimenopause";
pub const FAB_IRREGULAR_BLEEDING: &str = "fab-irregular-bleeding";
pub const FAB_VAGINAL_DISCHARGE: &str = "fab-vaginal-discharge";
pub const FAB_CYCLE_ALTERING_DRUGS: &str = "fab-cycle-altering-drugs";
pub const FAB_CHRONIC_TEMPERATURE_DISEASE: &str = "fab-chronic-temperature-disease";
pub const FAB_ACUTE_TEMPERATURE_DISEASE: &str = "fab-acute-temperature-disease";
pub const FAB_STI_RISK: &str = "fab-sti-risk";
pub const FAB_HIGH_RISK_PREGNANCY: &str = "fab-high-risk-pregnancy";
