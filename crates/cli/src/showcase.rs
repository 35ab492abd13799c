//! Sample invocations of every formula with integer, float, and fraction
//! scalars, rendered as text or JSON.

use anyhow::{Context, Result};
use num_rational::Ratio;
use rat_trig::{archimedes, cross, dot, quad, spread, spread_law, triple_quad_formula, Vector2};
use serde::Serialize;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::provenance::Provenance;

type Frac = Ratio<i64>;

/// One `expr = value` line, with the known-correct value where there is one.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Line {
    pub expr: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    pub library_version: &'static str,
    pub sections: Vec<Section>,
}

impl Section {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            lines: Vec::new(),
        }
    }

    fn input(mut self, name: &str, value: impl Display) -> Self {
        self.lines.push(Line {
            expr: name.to_string(),
            value: value.to_string(),
            expected: None,
        });
        self
    }

    fn eval(mut self, expr: String, value: impl Display, expected: &str) -> Self {
        self.lines.push(Line {
            expr,
            value: value.to_string(),
            expected: Some(expected.to_string()),
        });
        self
    }
}

fn vec_str<T: Display>(v: Vector2<T>) -> String {
    format!("[{}, {}]", v[0], v[1])
}

/// Evaluate the sample invocations.
pub fn build() -> Report {
    let sections = vec![
        archimedes_section(),
        vector_section(),
        spread_section(),
        spread_law_section(),
        triple_quad_section(),
        numeric_types_section(),
    ];
    for s in &sections {
        tracing::debug!(section = %s.title, lines = s.lines.len(), "evaluated");
    }
    Report {
        library_version: rat_trig::VERSION,
        sections,
    }
}

fn archimedes_section() -> Section {
    let (q_1, q_2, q_3) = (Frac::new(1, 2), Frac::new(1, 4), Frac::new(1, 6));
    Section::new("Archimedes' formula").eval(
        format!("archimedes({q_1}, {q_2}, {q_3})"),
        archimedes(q_1, q_2, q_3),
        "23/144",
    )
}

fn vector_section() -> Section {
    let v_1 = [1, 2];
    let v_2 = [3, 4];
    Section::new("Vector operations")
        .input("v1", vec_str(v_1))
        .input("v2", vec_str(v_2))
        .eval("cross(v1, v2)".into(), cross(v_1, v_2), "-2")
        .eval("dot(v1, v2)".into(), dot(v_1, v_2), "11")
        .eval("quad(v1)".into(), quad(v_1), "5")
}

fn spread_section() -> Section {
    let v_3 = [Frac::from_integer(1), Frac::from_integer(2)];
    let v_4 = [Frac::from_integer(3), Frac::from_integer(4)];
    Section::new("Spread calculation")
        .input("v3", vec_str(v_3))
        .input("v4", vec_str(v_4))
        .eval("spread(v3, v4)".into(), spread(v_3, v_4), "4/125")
        .eval(
            "spread([1.0, 2.0], [3.0, 4.0])".into(),
            spread([1.0, 2.0], [3.0, 4.0]),
            "0.032",
        )
}

fn spread_law_section() -> Section {
    Section::new("Spread law")
        .eval(
            "spread_law(5.0, 25.0, 20.0)".into(),
            spread_law(5.0, 25.0, 20.0),
            "0.8",
        )
        // integer division truncates 400/500
        .eval("spread_law(5, 25, 20)".into(), spread_law(5, 25, 20), "0")
        .eval("spread_law(1, 1, 4)".into(), spread_law(1, 1, 4), "0")
}

fn triple_quad_section() -> Section {
    let (q_1, q_2, s_3) = (Frac::from_integer(5), Frac::from_integer(25), Frac::new(4, 125));
    Section::new("Triple quad formula").eval(
        format!("triple_quad_formula({q_1}, {q_2}, {s_3})"),
        triple_quad_formula(q_1, q_2, s_3),
        "416",
    )
}

fn numeric_types_section() -> Section {
    let (q_1, q_2, q_3) = (Frac::from_integer(1), Frac::new(1, 2), Frac::from_integer(2));
    Section::new("Working with different numeric types")
        .eval("Integers: archimedes(2, 4, 6)".into(), archimedes(2, 4, 6), "32")
        .eval(
            "Floats: archimedes(2.0, 4.0, 6.0)".into(),
            archimedes(2.0, 4.0, 6.0),
            "32",
        )
        .eval(
            format!("Fractions: archimedes({q_1}, {q_2}, {q_3})"),
            archimedes(q_1, q_2, q_3),
            "7/4",
        )
}

impl Report {
    /// Lines whose value differs from the expected one.
    pub fn mismatches(&self) -> Vec<&Line> {
        self.sections
            .iter()
            .flat_map(|s| &s.lines)
            .filter(|l| l.expected.as_ref().is_some_and(|e| *e != l.value))
            .collect()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::from("=== Rational Trigonometry Examples ===\n\n");
        for (i, section) in self.sections.iter().enumerate() {
            out.push_str(&format!("{}. {}:\n", i + 1, section.title));
            for line in &section.lines {
                out.push_str(&format!("   {} = {}\n", line.expr, line.value));
            }
            out.push('\n');
        }
        out
    }
}

/// Write the JSON report to `path` plus its provenance sidecar. The sidecar
/// records the caller of this function as its callsite.
#[track_caller]
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))?;
    let params = serde_json::json!({ "sections": report.sections.len() });
    let sidecar = Provenance::capture(params)
        .with_output(path)
        .write_next_to(path)?;
    tracing::info!(report = %path.display(), sidecar = %sidecar.display(), "report written");
    Ok(())
}
