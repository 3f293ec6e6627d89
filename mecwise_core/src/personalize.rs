//! Personalization filter pipeline.
//!
//! Narrows the medically eligible methods by lifestyle preference. The funnel
//! only ever removes methods (each removal is recorded as an [`Elimination`]),
//! apart from the barrier method that is always offered at the end.

use crate::error::{Error, Result};
use crate::types::{Elimination, Frequency, Method, PersonalizationFilters, PersonalizationResult};
use serde::Deserialize;

/// Methods that keep a predictable bleeding pattern
const REGULAR_PERIOD_METHODS: [Method; 4] = [
    Method::CombinedPill,
    Method::Patch,
    Method::Condom,
    Method::VaginalRing,
];

/// BMI above which the patch loses effectiveness
const PATCH_BMI_LIMIT: f64 = 30.0;

/// Working set plus the audit trail
struct Funnel {
    working: Vec<Method>,
    eliminated: Vec<Elimination>,
    notices: Vec<String>,
}

impl Funnel {
    fn new(eligible: &[Method]) -> Self {
        let mut working: Vec<Method> = Vec::with_capacity(eligible.len());
        for &method in eligible {
            if !working.contains(&method) {
                working.push(method);
            }
        }
        Self {
            working,
            eliminated: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Remove every method for which `drop` returns a reason
    fn eliminate_where<F>(&mut self, mut drop: F)
    where
        F: FnMut(Method) -> Option<String>,
    {
        let mut kept = Vec::with_capacity(self.working.len());
        for method in std::mem::take(&mut self.working) {
            match drop(method) {
                Some(reason) => {
                    tracing::debug!("Eliminated {}: {}", method, reason);
                    self.eliminated.push(Elimination { method, reason });
                }
                None => kept.push(method),
            }
        }
        self.working = kept;
    }

    fn eliminate_all(&mut self, reason: &str) {
        self.eliminate_where(|_| Some(reason.to_string()));
    }

    fn notice(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    fn finish(self, show_permanent: Option<bool>) -> PersonalizationResult {
        PersonalizationResult {
            recommended: self.working,
            notices: self.notices,
            eliminated: self.eliminated,
            should_show_permanent_methods: show_permanent,
        }
    }
}

/// Apply the preference funnel to a list of medically eligible methods
pub fn personalize(
    eligible: &[Method],
    filters: &PersonalizationFilters,
) -> Result<PersonalizationResult> {
    if let Some(bmi) = filters.bmi {
        validate_bmi(bmi)?;
    }

    let mut funnel = Funnel::new(eligible);

    // Stage 1: future pregnancy intent
    match filters.wants_future_pregnancy {
        Some(true) => {
            funnel.eliminate_where(|m| {
                m.is_sterilization().then(|| {
                    format!(
                        "{} is permanent and does not fit a plan for future pregnancy",
                        m.name()
                    )
                })
            });
        }
        Some(false) => {
            if filters.open_to_surgical_methods == Some(true) {
                return Ok(permanent_only(funnel));
            }

            funnel.eliminate_where(|m| {
                m.is_sterilization()
                    .then(|| format!("{} requires a surgical procedure, which was declined", m.name()))
            });

            if filters.continue_with_long_term == Some(false) {
                funnel.eliminate_all("User declined to continue with long-term options");
                funnel.notice(
                    "You chose not to continue with long-term options. \
                     A provider can discuss other approaches with you.",
                );
                tracing::info!("Personalization ended: long-term options declined");
                return Ok(funnel.finish(None));
            }
        }
        None => {}
    }

    // Stage 2: period-regularity tolerance
    if filters.okay_with_irregular_periods == Some(false) {
        funnel.eliminate_where(|m| {
            (!REGULAR_PERIOD_METHODS.contains(&m))
                .then(|| format!("{} may cause irregular or absent periods", m.name()))
        });
    }

    // Stage 3: frequency preference
    if let Some(frequency) = filters.preferred_frequency {
        apply_frequency(&mut funnel, frequency, filters.bmi);
    }

    // Stage 4: barrier protection floor
    if !funnel.working.is_empty() && !funnel.working.contains(&Method::Condom) {
        funnel.working.push(Method::Condom);
    }

    if funnel.working.is_empty() {
        funnel.notice(
            "No method matched every preference. Consider relaxing a preference \
             or discussing options with a provider.",
        );
    }

    tracing::info!(
        "Personalization: {} recommended, {} eliminated",
        funnel.working.len(),
        funnel.eliminated.len()
    );
    Ok(funnel.finish(None))
}

/// Surgical early return: only eligible sterilization methods remain
fn permanent_only(mut funnel: Funnel) -> PersonalizationResult {
    funnel.eliminate_where(|m| {
        (!m.is_sterilization()).then(|| {
            format!(
                "{} is not a permanent method, and a permanent method was preferred",
                m.name()
            )
        })
    });

    if funnel.working.is_empty() {
        funnel.notice(
            "You are open to a permanent method, but no sterilization method is \
             medically eligible for you. Please discuss alternatives with a provider.",
        );
    }

    tracing::info!(
        "Personalization ended: permanent methods, {} recommended",
        funnel.working.len()
    );
    funnel.finish(Some(true))
}

fn apply_frequency(funnel: &mut Funnel, frequency: Frequency, bmi: Option<f64>) {
    if frequency == Frequency::EveryThreeWeeks && bmi.is_some_and(|b| b > PATCH_BMI_LIMIT) {
        funnel.eliminate_all("BMI above 30 reduces the effectiveness of the patch");
        funnel.notice(
            "With a BMI above 30, the contraceptive patch may be less effective. \
             Consider a different frequency.",
        );
        return;
    }

    let allowed = frequency.allowed_methods();
    funnel.eliminate_where(|m| {
        (m != Method::Condom && !allowed.contains(&m)).then(|| {
            format!(
                "{} does not match the preferred frequency ({})",
                m.name(),
                frequency.describe()
            )
        })
    });
}

fn validate_bmi(bmi: f64) -> Result<()> {
    if bmi.is_finite() && (0.0..=100.0).contains(&bmi) {
        Ok(())
    } else {
        Err(Error::InvalidBmi(bmi))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonalizeRequest {
    #[serde(default)]
    filters: PersonalizationFilters,
}

/// Run [`personalize`] on an untyped request
/// `{ "eligibleMethods": [...], "filters": {...} }`
pub fn personalize_json(request: &serde_json::Value) -> Result<PersonalizationResult> {
    let methods = match request.get("eligibleMethods") {
        Some(serde_json::Value::Array(items)) => items,
        Some(other) => {
            return Err(Error::InvalidEligibleMethods(format!(
                "expected an array, found {}",
                json_kind(other)
            )))
        }
        None => {
            return Err(Error::InvalidEligibleMethods(
                "missing eligibleMethods".to_string(),
            ))
        }
    };

    let eligible = methods
        .iter()
        .map(|item| match item {
            serde_json::Value::String(key) => key.parse::<Method>(),
            other => Err(Error::InvalidEligibleMethods(format!(
                "expected method keys, found {}",
                json_kind(other)
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    let request: PersonalizeRequest = serde_json::from_value(request.clone())?;
    personalize(&eligible, &request.filters)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
