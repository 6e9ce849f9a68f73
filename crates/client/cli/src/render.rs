//! Text and JSON rendering of a round log.
use std::fmt::Write;

use tohit_core::{AttackDeclaration, Report, ReportArg, TargetRef, ToHitResult};

use crate::config::OutputFormat;
use crate::round::RoundLog;

pub fn render(log: &RoundLog, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(log)),
        OutputFormat::Json => serde_json::to_string_pretty(log)
            .map_err(|e| anyhow::anyhow!("Failed to encode round log: {}", e)),
    }
}

fn render_text(log: &RoundLog) -> String {
    let mut out = String::new();
    for unit in &log.units {
        let _ = writeln!(out, "Unit {}", unit.unit);
        for resolution in &unit.resolved {
            let _ = writeln!(out, "  {}", describe(&resolution.declaration));
            write_result(&mut out, &resolution.result);
            if let Some(damage) = resolution.damage {
                let _ = writeln!(out, "    damage on hit: {damage}");
            }
        }
        for refusal in &unit.refused {
            let _ = writeln!(
                out,
                "  {} refused: {}",
                describe(&refusal.declaration),
                refusal.reason
            );
        }
        for dropped in &unit.dropped {
            let _ = writeln!(
                out,
                "  {} dropped: {}",
                describe(&dropped.declaration),
                dropped.reason
            );
        }
        for report in &unit.reports {
            let _ = writeln!(out, "  [{}]", format_report(report));
        }
    }
    if !log.illuminated.is_empty() {
        let lit: Vec<String> = log.illuminated.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "Illuminated: {}", lit.join(", "));
    }
    out
}

fn describe(declaration: &AttackDeclaration) -> String {
    let target = match declaration.target() {
        TargetRef::Entity(id) => id.to_string(),
        TargetRef::Hex(at) => format!("hex {at}"),
        TargetRef::Building(at) => format!("building at {at}"),
        TargetRef::Pod { carrier, pod } => format!("pod {} on {carrier}", pod.0),
    };
    format!("{} -> {target}", declaration.kind())
}

fn write_result(out: &mut String, result: &ToHitResult) {
    let Some(value) = result.as_value() else {
        let _ = writeln!(out, "    {result}");
        return;
    };
    let _ = writeln!(
        out,
        "    to-hit {} ({} table, {} side)",
        value.value, value.hit_table, value.side_table
    );
    let _ = writeln!(out, "    {:>+3}  {}", value.base, value.base_label);
    for modifier in &value.modifiers {
        let _ = writeln!(out, "    {:>+3}  {}", modifier.delta, modifier.label);
    }
}

fn format_report(report: &Report) -> String {
    let args: Vec<String> = report
        .args
        .iter()
        .map(|arg| match arg {
            ReportArg::Entity(id) => id.to_string(),
            ReportArg::Int(value) => value.to_string(),
            ReportArg::Text(text) => text.clone(),
        })
        .collect();
    format!("{} {}: {}", report.code, report.subject, args.join(", "))
}

#[cfg(test)]
mod tests {
    use tohit_core::env::Side;
    use tohit_core::{AttackAction, EntityId, ModifierStack};

    use super::*;
    use crate::round::{Resolution, UnitRound};

    fn log() -> RoundLog {
        let mut stack = ModifierStack::new(5, "base PSR");
        stack.add(2, "target moved 3 hexes");
        RoundLog {
            units: vec![UnitRound {
                unit: EntityId(1),
                refused: Vec::new(),
                resolved: vec![Resolution {
                    declaration: AttackDeclaration::against(
                        EntityId(1),
                        EntityId(2),
                        AttackAction::Punch { arm: Side::Left },
                    ),
                    result: stack.finish(),
                    damage: Some(5),
                }],
                dropped: Vec::new(),
                reports: Vec::new(),
            }],
            illuminated: Vec::new(),
        }
    }

    #[test]
    fn text_lists_the_breakdown() {
        let text = render(&log(), OutputFormat::Text).unwrap();
        assert!(text.contains("punch -> #2"));
        assert!(text.contains("to-hit 7 (NORMAL table, FRONT side)"));
        assert!(text.contains(" +2  target moved 3 hexes"));
        assert!(text.contains("damage on hit: 5"));
    }

    #[test]
    fn json_tags_the_outcome() {
        let json = render(&log(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let result = &value["units"][0]["resolved"][0]["result"];
        assert_eq!(result["outcome"], "value");
        assert_eq!(result["value"], 7);
    }
}
