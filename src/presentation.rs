// src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use count_mod_ops_engine::options::{OutputFormat, OutputMode};
use count_mod_ops_engine::stats::RunResult;
use std::io::{self, Write};

const DISAGREEMENT_PREVIEW: usize = 10;

pub fn print_results(result: &RunResult, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_results(&mut out, result, config)?;
    out.flush()?;
    Ok(())
}

/// Render `result` in the configured format.
///
/// # Errors
/// Fails when writing to `out` or serialising the result fails.
pub fn write_results<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(result)?)?,
        OutputFormat::Jsonl => write_jsonl(out, result)?,
        OutputFormat::Csv => write_sv(out, result, config, ",")?,
        OutputFormat::Tsv => write_sv(out, result, config, "\t")?,
        OutputFormat::Table => write_table(out, result, config)?,
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> io::Result<()> {
    writeln!(
        out,
        "count_mod_ops v{} · range={}..={}",
        crate::VERSION,
        result.range.lo,
        result.range.hi
    )?;
    writeln!(out)?;

    if matches!(config.output_mode, OutputMode::Full) {
        writeln!(out, "  CANDIDATE  STRATEGY  PRIME     MOD OPS")?;
        writeln!(out, "----------------------------------------")?;
        for row in &result.candidates {
            writeln!(
                out,
                "{:>11}  {:<8}  {:<5}{:>12}",
                row.candidate,
                row.strategy,
                if row.is_prime { "yes" } else { "no" },
                row.mod_ops
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "STRATEGY    CANDIDATES      PRIMES     MOD OPS")?;
    writeln!(out, "----------------------------------------------")?;
    for s in &result.summaries {
        writeln!(
            out,
            "{:<8}{:>14}{:>12}{:>12}",
            s.strategy, s.candidates, s.primes, s.mod_ops
        )?;
    }
    writeln!(out, "---")?;
    writeln!(out, "{:<8}{:>38}", "TOTAL", result.total_mod_ops())?;

    if result.summaries.len() > 1 {
        writeln!(out)?;
        let preview: Vec<String> = result
            .disagreements
            .iter()
            .take(DISAGREEMENT_PREVIEW)
            .map(ToString::to_string)
            .collect();
        let ellipsis = if result.disagreements.len() > DISAGREEMENT_PREVIEW {
            ", ..."
        } else {
            ""
        };
        writeln!(
            out,
            "Disagreements: {} candidates [{}{ellipsis}]",
            result.disagreements.len(),
            preview.join(", ")
        )?;
    }
    Ok(())
}

fn write_jsonl<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    for row in &result.candidates {
        let mut v = serde_json::to_value(row)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "candidate".into());
        }
        writeln!(out, "{v}")?;
    }
    for s in &result.summaries {
        let mut v = serde_json::to_value(s)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "summary".into());
        }
        writeln!(out, "{v}")?;
    }

    let total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "lo": result.range.lo,
        "hi": result.range.hi,
        "mod_ops": result.total_mod_ops(),
        "disagreements": result.disagreements.len(),
    });
    writeln!(out, "{total}")?;
    Ok(())
}

fn write_sv<W: Write>(
    out: &mut W,
    result: &RunResult,
    config: &Config,
    delimiter: &str,
) -> io::Result<()> {
    if matches!(config.output_mode, OutputMode::Full) {
        writeln!(out, "{}", ["candidate", "strategy", "is_prime", "mod_ops"].join(delimiter))?;
        for row in &result.candidates {
            writeln!(
                out,
                "{}{delimiter}{}{delimiter}{}{delimiter}{}",
                row.candidate, row.strategy, row.is_prime, row.mod_ops
            )?;
        }
        if config.total_row {
            writeln!(
                out,
                "TOTAL{delimiter}{delimiter}{delimiter}{}",
                result.total_mod_ops()
            )?;
        }
    } else {
        writeln!(out, "{}", ["strategy", "candidates", "primes", "mod_ops"].join(delimiter))?;
        for s in &result.summaries {
            writeln!(
                out,
                "{}{delimiter}{}{delimiter}{}{delimiter}{}",
                s.strategy, s.candidates, s.primes, s.mod_ops
            )?;
        }
        if config.total_row {
            writeln!(
                out,
                "TOTAL{delimiter}{delimiter}{delimiter}{}",
                result.total_mod_ops()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use count_mod_ops_engine::options::Strategy;

    fn render(config: &Config) -> String {
        let result = count_mod_ops_engine::run(config).unwrap();
        let mut buf = Vec::new();
        write_results(&mut buf, &result, config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_summary_with_total_row() {
        let config = ConfigBuilder::default()
            .lo(1)
            .hi(10)
            .format(OutputFormat::Csv)
            .total_row(true)
            .build()
            .unwrap();
        let out = render(&config);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "strategy,candidates,primes,mod_ops",
                "half,10,7,3",
                "sqrt,10,10,0",
                "TOTAL,,,3",
            ]
        );
    }

    #[test]
    fn test_tsv_full_listing() {
        let config = ConfigBuilder::default()
            .lo(9)
            .hi(9)
            .strategies(vec![Strategy::Half])
            .format(OutputFormat::Tsv)
            .output_mode(OutputMode::Full)
            .build()
            .unwrap();
        let out = render(&config);
        assert_eq!(out, "candidate\tstrategy\tis_prime\tmod_ops\n9\thalf\tfalse\t1\n");
    }

    #[test]
    fn test_jsonl_tags_each_line() {
        let config = ConfigBuilder::default()
            .lo(8)
            .hi(10)
            .format(OutputFormat::Jsonl)
            .output_mode(OutputMode::Full)
            .build()
            .unwrap();
        let out = render(&config);
        let values: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        // 3 candidates x 2 strategies, 2 summaries, 1 total
        assert_eq!(values.len(), 9);
        assert!(values[..6].iter().all(|v| v["type"] == "candidate"));
        assert!(values[6..8].iter().all(|v| v["type"] == "summary"));
        assert_eq!(values[8]["type"], "total");
        assert_eq!(values[8]["mod_ops"], 2);
        assert_eq!(values[8]["disagreements"], 2);
    }

    #[test]
    fn test_table_reports_disagreements() {
        let config = ConfigBuilder::default().lo(1).hi(10).build().unwrap();
        let out = render(&config);
        assert!(out.contains("Disagreements: 3 candidates [6, 9, 10]"));
        assert!(out.contains("TOTAL"));
    }
}
