//! Batch experiments: every element kind at every configured size, in both directions.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::{debug, info};
use rand::Rng;
use serde::Serialize;
use shellsort::Direction;

use crate::chart::{self, Series};
use crate::config::{ExperimentConfig, RESULTS_FILE_NAME};
use crate::data::{Dataset, ElementKind};
use crate::error::{Error, Result};
use crate::timing;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KindReport {
    pub kind: ElementKind,
    pub title: String,
    pub chart: PathBuf,
    pub series: Series,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExperimentReport {
    pub seed: u64,
    pub string_len: usize,
    pub kinds: Vec<KindReport>,
}

pub fn chart_file_name(kind: ElementKind) -> String {
    format!("shellsort_{}.svg", kind.name())
}

/// Times one element kind across `sizes`.
///
/// One base dataset is generated per size, both directions sort their own copy of it.
pub fn run_kind<R, W>(
    kind: ElementKind,
    sizes: &[usize],
    string_len: usize,
    rng: &mut R,
    out: &mut W,
) -> Result<Series>
where
    R: Rng + ?Sized,
    W: Write,
{
    let mut series = Series::default();

    for &size in sizes {
        debug!("generating {size} {}", kind.name());
        let base = Dataset::generate(kind, rng, size, string_len);

        let ascending_ms = timing::measure_dataset(&base, Direction::Ascending);
        let descending_ms = timing::measure_dataset(&base, Direction::Descending);
        series.push(size, ascending_ms, descending_ms);

        let row = format!(
            "{size:>7} elements -> ascending: {ascending_ms:.2} ms | descending: {descending_ms:.2} ms"
        );
        info!("{}: {row}", kind.name());
        writeln!(out, "{row}")?;
    }

    Ok(series)
}

/// Runs every element kind, renders one chart per kind into `config.out_dir` and writes all
/// timings to `results.json` next to them.
pub fn run<W: Write>(config: &ExperimentConfig, out: &mut W) -> Result<ExperimentReport> {
    info!("Seed: {}", config.seed);
    fs::create_dir_all(&config.out_dir)?;

    let mut rng = config.rng();
    let mut kinds = Vec::with_capacity(ElementKind::ALL.len());

    for kind in ElementKind::ALL {
        writeln!(out, "\n{}", kind.title())?;
        let series = run_kind(kind, &config.sizes, config.string_len, &mut rng, out)?;

        let chart = config.out_dir.join(chart_file_name(kind));
        chart::write_chart(&chart, kind.title(), &series)?;

        kinds.push(KindReport {
            kind,
            title: kind.title().into(),
            chart,
            series,
        });
    }

    let report = ExperimentReport {
        seed: config.seed,
        string_len: config.string_len,
        kinds,
    };
    write_report(config, &report)?;

    writeln!(out, "\nCharts written to {}", config.out_dir.display())?;

    Ok(report)
}

fn write_report(config: &ExperimentConfig, report: &ExperimentReport) -> Result<()> {
    let path = config.out_dir.join(RESULTS_FILE_NAME);
    let mut writer = BufWriter::new(File::create(&path)?);

    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| Error::Json {
        path: path.clone(),
        source,
    })?;
    writer.flush()?;
    info!("results written to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config(out_dir: PathBuf) -> ExperimentConfig {
        ExperimentConfig {
            sizes: vec![10, 100, 500],
            out_dir,
            seed: 1234,
            string_len: 8,
        }
    }

    #[test]
    fn kind_series_has_one_point_per_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut out = Vec::new();
        let series = run_kind(ElementKind::People, &[5, 50], 8, &mut rng, &mut out).unwrap();

        assert_eq!(series.sizes, [5, 50]);
        assert_eq!(series.ascending_ms.len(), 2);
        assert_eq!(series.descending_ms.len(), 2);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().all(|l| l.contains("elements -> ascending:")));
        assert!(out.starts_with("      5 elements"));
    }

    #[test]
    fn full_run_writes_charts_and_results() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path().join("out"));
        let mut out = Vec::new();

        let report = run(&config, &mut out).unwrap();

        assert_eq!(report.seed, 1234);
        assert_eq!(report.kinds.len(), 3);
        for kind_report in &report.kinds {
            assert_eq!(kind_report.series.sizes, config.sizes);
            assert!(kind_report.chart.exists());
        }
        for name in [
            "shellsort_numbers.svg",
            "shellsort_strings.svg",
            "shellsort_people.svg",
        ] {
            assert!(config.out_dir.join(name).exists(), "{name}");
        }

        let json = fs::read_to_string(config.out_dir.join(RESULTS_FILE_NAME)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["seed"], 1234);
        assert_eq!(value["kinds"][2]["kind"], "people");
        assert_eq!(value["kinds"][0]["series"]["sizes"][2], 500);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Shell Sort - Numbers"));
        assert!(out.contains("Shell Sort - Strings"));
        assert!(out.contains("Shell Sort - People (Person.age)"));
    }

    #[test]
    fn empty_sizes_fail_charting() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path().to_path_buf());
        config.sizes.clear();

        let err = run(&config, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptySeries(_)));
    }
}
