//! Text and JSON rendering of a build report

use build_core::{Build, DamageBreakdown};
use serde_json::{json, Map, Value};

/// Width of each resistance table column
const COLUMN_WIDTH: usize = 9;

fn header(name: &str) -> String {
    format!("~~~~~~~~~~~~~~~~ {} ~~~~~~~~~~~~~~~~", name)
}

/// Output of a rounding formula, printed as a whole number
pub fn format_rounded(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Always shows a fractional part, e.g. `128.0`
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

fn render_stats(build: &Build, lines: &mut Vec<String>) {
    lines.push(header("STATS"));
    for (attr, value) in build.attributes().entries {
        lines.push(format!("{}: {}", attr.label(), value));
    }
}

fn render_generic(build: &Build, lines: &mut Vec<String>) {
    let generic = build.generic_stats();
    lines.push(header("GENERIC"));
    lines.push(format!("HP: {}", format_rounded(generic.health)));
    lines.push(format!("MP: {}", format_float(generic.mana)));
    lines.push(format!("Health Regen: {}", format_rounded(generic.health_regen)));
    lines.push(format!("Mana Regen: {}", format_rounded(generic.mana_regen)));
    lines.push(format!("MS: {}", generic.movement_speed));
}

fn render_resistances(build: &Build, lines: &mut Vec<String>) {
    let table = build.resistances();
    lines.push(header("RESISTANCES"));

    let names: Vec<String> = table
        .entries
        .iter()
        .map(|(res, _)| format!("{:>width$}", res.label(), width = COLUMN_WIDTH))
        .collect();
    let values: Vec<String> = table
        .entries
        .iter()
        .map(|(_, value)| format!("{:>width$}", value, width = COLUMN_WIDTH))
        .collect();

    lines.push(names.join("|"));
    lines.push(values.join("|"));
}

fn render_additional(build: &Build, lines: &mut Vec<String>) {
    let extra = build.additional_stats();
    lines.push(header("ADDITIONAL"));
    lines.push(format!("Block Chance: {}", format_float(extra.block_chance)));
    lines.push(format!("Block Effectiveness: {}", extra.block_effectiveness));
    lines.push(format!("Armor: {}", format_rounded(extra.armor)));
}

/// Console report: stats, generic, resistances, then the final damage line
pub fn render_text(build: &Build, damage: &DamageBreakdown, additional: bool) -> String {
    let mut lines = Vec::new();
    render_stats(build, &mut lines);
    render_generic(build, &mut lines);
    render_resistances(build, &mut lines);
    if additional {
        render_additional(build, &mut lines);
    }
    lines.push(format!("FINAL_DAMAGE: {}", damage.truncated()));
    lines.join("\n")
}

/// The same report as pretty-printed JSON, with the full damage breakdown
pub fn render_json(
    build: &Build,
    damage: &DamageBreakdown,
    additional: bool,
) -> serde_json::Result<String> {
    let attributes: Map<String, Value> = build
        .attributes()
        .entries
        .into_iter()
        .map(|(attr, value)| (attr.stat_name().to_string(), json!(value)))
        .collect();
    let resistances: Map<String, Value> = build
        .resistances()
        .entries
        .into_iter()
        .map(|(res, value)| (res.stat_name().to_string(), json!(value)))
        .collect();

    let mut report = json!({
        "level": build.level(),
        "attributes": attributes,
        "generic": build.generic_stats(),
        "resistances": resistances,
        "damage": damage,
        "final_damage": damage.truncated(),
    });
    if additional {
        report["additional"] = serde_json::to_value(build.additional_stats())?;
    }

    serde_json::to_string_pretty(&report)
}
