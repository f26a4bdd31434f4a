//! Report rendering for the terminal and for JSON consumers.

use foodweb_core::{Relation, Result, VoreType};
use foodweb_graph::WebReport;
use serde::Serialize;
use std::io::Write;

/// A report together with the context it was taken in
#[derive(Debug, Serialize)]
pub struct ReportEnvelope<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extinct: Option<&'a str>,
    pub report: &'a WebReport,
}

/// Write one report as a single JSON line
pub fn write_json_report<W: Write>(out: &mut W, envelope: &ReportEnvelope<'_>) -> Result<()> {
    serde_json::to_writer(&mut *out, envelope)?;
    writeln!(out)?;
    Ok(())
}

fn relation_line(relation: &Relation) -> String {
    if relation.prey.is_empty() {
        format!("  {}", relation.name)
    } else {
        format!("  {} eats {}", relation.name, relation.prey.join(", "))
    }
}

fn write_names<W: Write>(out: &mut W, heading: &str, names: &[String]) -> Result<()> {
    writeln!(out, "{}", heading)?;
    for name in names {
        writeln!(out, "  {}", name)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write every section of a report; `prefix` marks re-runs ("UPDATED ")
pub fn write_text_report<W: Write>(out: &mut W, report: &WebReport, prefix: &str) -> Result<()> {
    writeln!(out, "{}Food Web Predators & Prey:", prefix)?;
    for relation in &report.relations {
        writeln!(out, "{}", relation_line(relation))?;
    }
    writeln!(out)?;

    write_names(out, &format!("{}Apex Predators:", prefix), &report.apex_predators)?;
    write_names(out, &format!("{}Producers:", prefix), &report.producers)?;
    write_names(
        out,
        &format!("{}Most Flexible Eaters:", prefix),
        &report.most_flexible_eaters,
    )?;
    write_names(out, &format!("{}Tastiest Food:", prefix), &report.tastiest_food)?;

    writeln!(out, "{}Food Web Heights:", prefix)?;
    match &report.heights {
        Some(heights) => {
            for entry in heights {
                writeln!(out, "  {}: {}", entry.name, entry.height)?;
            }
        }
        None => writeln!(out, "  (undefined: the web contains a predation cycle)")?,
    }
    writeln!(out)?;

    writeln!(out, "{}Vore Types:", prefix)?;
    for vore in VoreType::all() {
        writeln!(out, "  {}:", vore.plural())?;
        for name in report.vore_types.group(vore) {
            writeln!(out, "    {}", name)?;
        }
    }
    writeln!(out)?;

    Ok(())
}
