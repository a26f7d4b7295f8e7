//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod breakdown {
    use std::io::{self, Write};

    use aea_operating::{AnalysisResult, CostBreakdown};
    use serde::Serialize;

    /// One CSV row per cost view.
    #[derive(Debug, Serialize)]
    struct Row<'a> {
        aircraft: &'a str,
        parameter_set: &'a str,
        target_year: i32,
        view: &'a str,
        depreciation: f64,
        interest: f64,
        insurance: f64,
        fuel: f64,
        maintenance: f64,
        crew: f64,
        fees_and_charges: f64,
        total: f64,
    }

    impl<'a> Row<'a> {
        fn new(label: &Label<'a>, target_year: i32, view: &'a str, b: &CostBreakdown) -> Self {
            Self {
                aircraft: label.aircraft,
                parameter_set: label.parameter_set,
                target_year,
                view,
                depreciation: b.depreciation,
                interest: b.interest,
                insurance: b.insurance,
                fuel: b.fuel,
                maintenance: b.maintenance,
                crew: b.crew,
                fees_and_charges: b.fees_and_charges,
                total: b.total,
            }
        }
    }

    /// Identifies the run an exported row belongs to.
    #[derive(Debug, Clone, Copy)]
    pub struct Label<'a> {
        pub aircraft: &'a str,
        pub parameter_set: &'a str,
    }

    /// Write the annual, per-flight, and per-hour views as CSV rows with a header.
    pub fn write_csv<W: Write>(
        writer: W,
        label: &Label<'_>,
        result: &AnalysisResult,
    ) -> io::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let views = [
            ("annual", &result.annual),
            ("per_flight", &result.per_flight),
            ("per_hour", &result.per_hour),
        ];
        for (view, breakdown) in views {
            csv.serialize(Row::new(label, result.target_year, view, breakdown))?;
        }
        csv.flush()
    }
}

pub mod report {
    use std::io::{self, Write};

    use aea_operating::AnalysisResult;
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    #[derive(Serialize)]
    struct Envelope<'a> {
        aircraft: &'a str,
        parameter_set: &'a str,
        #[serde(flatten)]
        result: &'a AnalysisResult,
    }

    /// Write the full analysis, pricing and maintenance detail included, as pretty JSON.
    pub fn write_json<W: Write>(
        mut writer: W,
        aircraft: &str,
        parameter_set: &str,
        result: &AnalysisResult,
    ) -> io::Result<()> {
        let envelope = Envelope {
            aircraft,
            parameter_set,
            result,
        };
        to_writer_pretty(&mut writer, &envelope)?;
        writeln!(writer)?;
        writer.flush()
    }
}

pub mod sensitivity {
    use std::io::{self, Write};

    use aea_sensitivity::SensitivityReport;

    /// Column suffix for a perturbation fraction, e.g. `-10pct`.
    fn fraction_label(fraction: f64) -> String {
        format!("{:+}pct", (fraction * 100.0).round() as i64)
    }

    /// Write the ranking as CSV, one row per coefficient with relative changes per perturbation.
    pub fn write_csv<W: Write>(writer: W, report: &SensitivityReport) -> io::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);

        let fractions: Vec<f64> = report
            .coefficients
            .first()
            .map(|c| c.outcomes.iter().map(|o| o.fraction).collect())
            .unwrap_or_default();

        let mut header = vec![
            "rank".to_string(),
            "coefficient".to_string(),
            "base_value".to_string(),
            "sensitivity".to_string(),
            "sensitivity_std".to_string(),
        ];
        for fraction in &fractions {
            let label = fraction_label(*fraction);
            header.push(format!("cost_{label}"));
            header.push(format!("rel_change_{label}"));
        }
        csv.write_record(&header)?;

        for (rank, entry) in report.coefficients.iter().enumerate() {
            let mut record = vec![
                (rank + 1).to_string(),
                entry.coefficient.to_string(),
                entry.base_value.to_string(),
                format!("{:.6}", entry.score),
                format!("{:.6}", entry.score_std),
            ];
            for outcome in &entry.outcomes {
                record.push(format!("{:.4}", outcome.maintenance_usd));
                record.push(format!("{:.6}", outcome.relative_change_pct));
            }
            csv.write_record(&record)?;
        }
        csv.flush()
    }
}
