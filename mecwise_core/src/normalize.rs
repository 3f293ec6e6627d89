//! Derivation of computed facts from raw answers.
//!
//! Computed facts are never read from caller input. A fact that cannot be
//! derived is left unset, which keeps every rule depending on it from firing.

use crate::answers::{AnswerResult, AnswerState};
use crate::questions as q;
use chrono::{DateTime, NaiveDate};
use serde::Serialize;

/// Plausible cycle length range in days (inclusive)
const MIN_CYCLE_DAYS: f64 = 21.0;
const MAX_CYCLE_DAYS: f64 = 45.0;

/// Spread between shortest and longest cycle above which cycles are irregular
const IRREGULAR_SPREAD_DAYS: f64 = 7.0;

/// Facts derived from the raw answers
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Computed {
    pub age: Option<f64>,
    pub bmi: Option<f64>,
    pub days_since_birth: Option<i64>,
    pub weeks_since_birth: Option<i64>,
    pub months_since_birth: Option<i64>,
    pub irregular_cycles: Option<bool>,
}

/// Raw answers plus their computed facts; the only input rule triggers see
#[derive(Clone, Debug)]
pub struct NormalizedAnswers<'a> {
    pub answers: &'a AnswerState,
    pub computed: Computed,
}

impl<'a> NormalizedAnswers<'a> {
    pub fn age(&self) -> Option<f64> {
        self.computed.age
    }

    pub fn bmi(&self) -> Option<f64> {
        self.computed.bmi
    }

    pub fn days_since_birth(&self) -> Option<i64> {
        self.computed.days_since_birth
    }

    pub fn weeks_since_birth(&self) -> Option<i64> {
        self.computed.weeks_since_birth
    }

    pub fn months_since_birth(&self) -> Option<i64> {
        self.computed.months_since_birth
    }

    pub fn irregular_cycles(&self) -> bool {
        self.computed.irregular_cycles == Some(true)
    }

    /// Age comparison; false when age is unknown
    pub fn age_where(&self, pred: impl FnOnce(f64) -> bool) -> bool {
        self.computed.age.is_some_and(pred)
    }

    /// Postpartum day comparison; false when no delivery date was given
    pub fn days_where(&self, pred: impl FnOnce(i64) -> bool) -> bool {
        self.computed.days_since_birth.is_some_and(pred)
    }

    pub fn yes(&self, question: &str) -> AnswerResult<bool> {
        self.answers.yes(question)
    }

    pub fn no(&self, question: &str) -> AnswerResult<bool> {
        self.answers.no(question)
    }

    pub fn number(&self, question: &str) -> AnswerResult<Option<f64>> {
        self.answers.number(question)
    }

    pub fn is(&self, question: &str, expected: &str) -> AnswerResult<bool> {
        self.answers.is(question, expected)
    }

    pub fn record_number(&self, question: &str, field: &str) -> AnswerResult<Option<f64>> {
        self.answers.record_number(question, field)
    }

    pub fn takes(&self, medication_code: u32) -> AnswerResult<bool> {
        self.answers.contains_code(q::MEDICATIONS, medication_code)
    }
}

/// Derive computed facts for an evaluation on `today`
pub fn normalize(answers: &AnswerState, today: NaiveDate) -> NormalizedAnswers<'_> {
    let age = lenient(answers.number(q::AGE), q::AGE);
    let bmi = compute_bmi(
        lenient(answers.number(q::WEIGHT), q::WEIGHT),
        lenient(answers.number(q::HEIGHT), q::HEIGHT),
    );

    let irregular_cycles = match answers.numbers(q::CYCLE_DURATIONS) {
        Ok(samples) => cycle_irregularity(&samples),
        Err(e) => {
            tracing::debug!("Ignoring cycle durations: {}", e);
            None
        }
    };

    let days_since_birth = delivery_date(answers).and_then(|date| {
        let days = (today - date).num_days();
        if days < 0 {
            tracing::debug!("Delivery date {} is after {}, ignoring", date, today);
            None
        } else {
            Some(days)
        }
    });

    NormalizedAnswers {
        answers,
        computed: Computed {
            age,
            bmi,
            days_since_birth,
            weeks_since_birth: days_since_birth.map(|d| d / 7),
            // Fixed 30-day month; postpartum thresholds are written against it
            months_since_birth: days_since_birth.map(|d| d / 30),
            irregular_cycles,
        },
    }
}

/// `weight_kg / (height_m)^2`, only when both are present and height is positive
pub fn compute_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    match (weight_kg, height_cm) {
        (Some(weight), Some(height)) if height > 0.0 => {
            let meters = height / 100.0;
            Some(weight / (meters * meters))
        }
        _ => None,
    }
}

/// Irregularity flag from cycle lengths; `None` with fewer than two plausible samples
pub fn cycle_irregularity(samples: &[f64]) -> Option<bool> {
    let valid: Vec<f64> = samples
        .iter()
        .copied()
        .filter(|d| *d > 0.0 && (MIN_CYCLE_DAYS..=MAX_CYCLE_DAYS).contains(d))
        .collect();

    if valid.len() < 2 {
        return None;
    }

    let min = valid.iter().copied().fold(f64::INFINITY, f64::min);
    let max = valid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(max - min > IRREGULAR_SPREAD_DAYS)
}

fn lenient(value: AnswerResult<Option<f64>>, question: &str) -> Option<f64> {
    value.unwrap_or_else(|e| {
        tracing::debug!("Ignoring {}: {}", question, e);
        None
    })
}

fn delivery_date(answers: &AnswerState) -> Option<NaiveDate> {
    let raw = match answers.text(q::LAST_DELIVERY_DATE) {
        Ok(Some(raw)) => raw.trim(),
        Ok(None) => return None,
        Err(e) => {
            tracing::debug!("Ignoring delivery date: {}", e);
            return None;
        }
    };

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            tracing::debug!("Unparseable delivery date {:?}", raw);
            None
        })
}
