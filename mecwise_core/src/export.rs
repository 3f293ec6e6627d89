//! CSV export of evaluation results and the rule table.

use crate::rules::RuleTable;
use crate::types::EvaluationResult;
use crate::Result;
use std::io::Write;

/// A row in the MEC results CSV
#[derive(Debug, serde::Serialize)]
struct MecRow<'a> {
    method: &'a str,
    name: &'a str,
    score: u8,
    category: &'a str,
    reasons: String,
}

/// One row per rule effect
#[derive(Debug, serde::Serialize)]
struct RuleRow<'a> {
    rule_id: &'a str,
    section: &'a str,
    priority: u16,
    methods: String,
    score: u8,
    reason: &'a str,
}

/// Write one row per method: `method,name,score,category,reasons`
///
/// Reasons are joined with `"; "`.
pub fn write_mec_csv<W: Write>(result: &EvaluationResult, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    for entry in &result.mec_results {
        writer.serialize(MecRow {
            method: entry.method_key.key(),
            name: entry.method_key.name(),
            score: entry.score.value(),
            category: entry.score.describe(),
            reasons: entry.reasons.join("; "),
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Dump the rule table in evaluation order, one row per effect
pub fn write_rules_csv<W: Write>(table: &RuleTable, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    let mut rows = 0usize;

    for rule in table.rules() {
        for effect in &rule.effects {
            let methods: Vec<&str> = effect.methods.iter().map(|m| m.key()).collect();
            writer.serialize(RuleRow {
                rule_id: rule.id,
                section: rule.section.title(),
                priority: rule.priority,
                methods: methods.join(" "),
                score: effect.score.value(),
                reason: effect.reason,
            })?;
            rows += 1;
        }
    }

    writer.flush()?;
    tracing::debug!("Wrote {} rule effect rows", rows);
    Ok(())
}
