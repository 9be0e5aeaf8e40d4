//! Summary report assembly and persistence.
//!
//! Reports are assembled as an ordered list of named sections so each block
//! (input echo, per-jet results, ratios, timing) can be built and checked on
//! its own, then rendered as one fixed-layout UTF-8 text block.

mod error;

pub use error::ReportError;

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use jiff::Zoned;
use uom::si::{
    frequency::hertz,
    length::{meter, millimeter},
    time::microsecond,
    velocity::meter_per_second,
    volume_rate::liter_per_minute,
};

use super::{
    input::{Arrangement, Input, Jet},
    results::{JetResults, Ratios, Results},
};

/// Default directory for persisted reports, relative to the working
/// directory.
pub const DEFAULT_OUTPUT_DIR: &str = "experiment_logs";

const RULE_WIDTH: usize = 40;

/// A timestamped experiment summary ready to render or persist.
///
/// The timestamp is fixed when the report is built; rendering and saving the
/// same report always produce the same text and filename.
#[derive(Debug, Clone)]
pub struct Report {
    experiment_name: String,
    timestamp: Zoned,
    sections: Vec<Section>,
}

#[derive(Debug, Clone)]
struct Section {
    title: String,
    lines: Vec<String>,
}

impl Report {
    /// Returns the experiment name embedded in the report.
    #[must_use]
    pub fn experiment_name(&self) -> &str {
        &self.experiment_name
    }

    /// Returns the wall-clock timestamp the report was built with.
    #[must_use]
    pub fn timestamp(&self) -> &Zoned {
        &self.timestamp
    }

    /// Renders the full report text.
    #[must_use]
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "--- Experiment Setup Report ---");
        let _ = writeln!(
            out,
            "Date & Time: {}",
            self.timestamp.strftime("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(out, "Experiment: {}", self.experiment_name);
        let _ = writeln!(out, "{rule}");

        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}:", section.title);
            for line in &section.lines {
                let _ = writeln!(out, "  {line}");
            }
        }

        let _ = writeln!(out, "{rule}");
        out
    }

    /// Filename for this report, `<experiment_name>_<YYYYMMDD_HHMMSS>.txt`.
    ///
    /// Two reports built in the same second under the same experiment name
    /// collide; this is an accepted limitation, not a uniqueness scheme.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.txt",
            self.experiment_name,
            self.timestamp.strftime("%Y%m%d_%H%M%S")
        )
    }

    /// Writes the report into `output_dir`, creating the directory if
    /// needed, and returns the written path.
    ///
    /// The conventional directory is [`DEFAULT_OUTPUT_DIR`].
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if the directory cannot be created or the
    /// file cannot be written.
    pub fn save_to(&self, output_dir: &Path) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(output_dir).map_err(|source| ReportError::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let path = output_dir.join(self.file_name());
        fs::write(&path, self.render()).map_err(|source| ReportError::WriteFile {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

#[derive(Debug, Default)]
struct ReportBuilder {
    sections: Vec<Section>,
}

impl ReportBuilder {
    fn section(mut self, title: impl Into<String>, lines: Vec<String>) -> Self {
        self.sections.push(Section {
            title: title.into(),
            lines,
        });
        self
    }

    fn build(self, experiment_name: impl Into<String>, timestamp: Zoned) -> Report {
        Report {
            experiment_name: experiment_name.into(),
            timestamp,
            sections: self.sections,
        }
    }
}

/// Assembles the report sections for a solved experiment.
pub(super) fn build(input: &Input, results: &Results, timestamp: Zoned) -> Report {
    let primary_jet = input.arrangement.primary();

    let mut builder = ReportBuilder::default()
        .section("Input Parameters", input_lines(input, primary_jet))
        .section(
            "Primary Jet",
            jet_lines('\u{2080}', primary_jet, &results.primary, None),
        );

    if let (
        Arrangement::Dual {
            secondary: secondary_jet,
            ..
        },
        Some(secondary),
    ) = (&input.arrangement, &results.secondary)
    {
        builder = builder
            .section(
                "Secondary Jet",
                jet_lines(
                    '\u{2081}',
                    secondary_jet,
                    &secondary.flow,
                    Some(secondary_jet.fov_station()),
                ),
            )
            .section("Non-Dimensional Ratios", ratio_lines(&secondary.ratios));
    }

    builder
        .section(
            format!("Timing Parameters (based on {} jet)", results.dominant),
            timing_lines(results),
        )
        .build(input.experiment_name.clone(), timestamp)
}

fn line(label: &str, value: impl Into<String>) -> String {
    format!("{label:<10}= {}", value.into())
}

fn input_lines(input: &Input, primary_jet: &Jet) -> Vec<String> {
    vec![
        line(
            "H_fov",
            format!("{:.4} m", input.imaging.fov_height().get::<meter>()),
        ),
        line("z_fov", format!("{:.2} D0", primary_jet.fov_station())),
        line("Ry", format!("{} px", input.imaging.vertical_resolution())),
        line(
            "ds",
            format!("{:.0} px", input.imaging.particle_displacement()),
        ),
        line(
            "\u{3bd}",
            format!("{:.2e} m\u{b2}/s", input.fluid.kinematic_viscosity().value),
        ),
    ]
}

fn jet_lines(subscript: char, jet: &Jet, flow: &JetResults, station: Option<f64>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(station) = station {
        lines.push(line("x_fov", format!("{station:.2} D1")));
    }
    lines.extend([
        line(
            &format!("Q{subscript}"),
            format!("{:.2} L/min", jet.flow_rate().get::<liter_per_minute>()),
        ),
        line(
            &format!("D{subscript}"),
            format!("{:.2} mm", jet.nozzle_diameter().get::<millimeter>()),
        ),
        line(
            &format!("U{subscript}"),
            format!("{:.4} m/s", flow.exit_velocity.get::<meter_per_second>()),
        ),
        line(
            &format!("U_c{subscript}"),
            format!(
                "{:.4} m/s",
                flow.centerline_velocity.get::<meter_per_second>()
            ),
        ),
        line(&format!("Re{subscript}"), format!("{:.2}", flow.reynolds)),
    ]);
    lines
}

fn ratio_lines(ratios: &Ratios) -> Vec<String> {
    vec![
        line("U\u{2081}/U\u{2080}", format!("{:.3}", ratios.velocity)),
        line("D\u{2080}/D\u{2081}", format!("{:.3}", ratios.diameter)),
        line("L\u{1d62}/D\u{2081}", format!("{:.3}", ratios.spacing)),
        line("H\u{1d62}/D\u{2080}", format!("{:.3}", ratios.offset)),
        format!("\u{3b5} (sqrt(D1/D0 * U0/U1)) = {:.3}", ratios.epsilon),
    ]
}

fn timing_lines(results: &Results) -> Vec<String> {
    vec![
        format!(
            "Reference U_c = {:.4} m/s",
            results.reference_velocity.get::<meter_per_second>()
        ),
        format!(
            "\u{394}t (interframe time) = {:.2} \u{3bc}s",
            results.interframe_time.get::<microsecond>()
        ),
        format!(
            "Frame rate (fps)     = {:.2}",
            results.sampling_rate.get::<hertz>()
        ),
    ]
}
