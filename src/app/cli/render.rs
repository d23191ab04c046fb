//! Plain-text rendering of command output.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::app::commands::check::CheckReport;
use crate::app::commands::mapping::MappingRow;
use crate::app::commands::show::ShowTarget;
use crate::domain::VariableSpec;

pub(super) fn check_report(report: &CheckReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "✅ {} is valid ({} groups, {} variables)",
        report.path,
        report.groups.len(),
        report.variable_count
    );
    for group in &report.groups {
        let kind = if group.remote { "remote" } else { "local" };
        let dated = if group.dated { ", dated" } else { "" };
        let _ = writeln!(
            out,
            "  {} [{}{}] {} variable(s): {}",
            group.name, kind, dated, group.variables, group.template
        );
    }
    out
}

pub(super) fn show_target(target: &ShowTarget<'_>) -> String {
    let mut out = String::new();
    match target {
        ShowTarget::Document(document) => {
            for (name, group) in document.groups() {
                write_group(&mut out, name, &group.template, &group.vars);
            }
        }
        ShowTarget::Group { group, template, vars } => write_group(&mut out, group, template, vars),
        ShowTarget::Variable { group, variable, name_on_file, scal } => {
            let _ = writeln!(out, "{}/{}", group, variable);
            let _ = writeln!(out, "  name_on_file: {}", name_on_file);
            let _ = writeln!(out, "  scal: {}", scal);
        }
    }
    out
}

fn write_group(out: &mut String, name: &str, template: &str, vars: &BTreeMap<String, VariableSpec>) {
    let _ = writeln!(out, "{}", name);
    let _ = writeln!(out, "  template: {}", template);
    if vars.is_empty() {
        let _ = writeln!(out, "  vars: (none)");
        return;
    }
    let _ = writeln!(out, "  vars:");
    for (key, spec) in vars {
        if spec.is_unscaled() {
            let _ = writeln!(out, "    {}: {}", key, spec.name_on_file);
        } else {
            let _ = writeln!(out, "    {}: {} (scal {:e})", key, spec.name_on_file, spec.scal);
        }
    }
}

pub(super) fn mapping_rows(rows: &[MappingRow]) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        out.push_str("No mapping entries.\n");
        return out;
    }
    for row in rows {
        let mw = row.mw.map(|mw| format!(", mw {}", mw)).unwrap_or_default();
        let _ = writeln!(
            out,
            "{} (obstype {}) -> {} [{}{}]",
            row.key, row.obstype, row.model_column, row.unit, mw
        );
        for source in &row.sources {
            let _ = writeln!(
                out,
                "  + {}/{} ({} x {})",
                source.group, source.variable, source.name_on_file, source.scal
            );
        }
    }
    out
}
