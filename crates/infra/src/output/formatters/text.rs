// crates/infra/src/output/formatters/text.rs
use std::{io::Write, time::Duration};

use linestat_ports::report::{ConversionSummary, RunSummary, StatisticsSummary, WordCountSummary};
use linestat_shared_kernel::Result;

/// Fixed-structure plain-text report.
pub fn output_text(summary: &RunSummary, out: &mut impl Write) -> Result<()> {
    match summary {
        RunSummary::Statistics(s) => write_statistics(s, out)?,
        RunSummary::Conversion(s) => write_conversion(s, out)?,
        RunSummary::WordCount(s) => write_word_count(s, out)?,
    }
    write_elapsed(summary.elapsed(), out)
}

/// Shortest round-trip form of `value`.
///
/// Ordinary magnitudes keep a fractional part (`5.0`, `4.5`). From `1e16` up and
/// below `1e-4` the exponent form is used (`1e16`), and non-finite values print
/// as `NaN`, `inf` or `-inf`.
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

fn write_statistics(s: &StatisticsSummary, out: &mut impl Write) -> Result<()> {
    let stats = &s.statistics;
    writeln!(out, "File analyzed: {}", s.file.display())?;
    writeln!(out, "Valid data points: {}", stats.count)?;
    writeln!(out)?;
    writeln!(out, "MEAN: {}", format_float(stats.mean))?;
    writeln!(out, "MEDIAN: {}", format_float(stats.median))?;
    writeln!(out, "MODE: {}", format_float(stats.mode))?;
    writeln!(out, "POPULATION VARIANCE: {}", format_float(stats.variance))?;
    writeln!(out, "POPULATION STANDARD DEVIATION: {}", format_float(stats.std_dev))?;
    writeln!(out)?;
    Ok(())
}

fn write_conversion(s: &ConversionSummary, out: &mut impl Write) -> Result<()> {
    writeln!(out, "File analyzed: {}", s.file.display())?;
    writeln!(out)?;
    writeln!(out, "ITEM\tVALUE\tBIN\tHEX")?;
    for row in &s.rows {
        writeln!(out, "{}\t{}\t{}\t{}", row.item, row.value, row.binary, row.hex)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_word_count(s: &WordCountSummary, out: &mut impl Write) -> Result<()> {
    writeln!(out, "File analyzed: {}", s.file.display())?;
    writeln!(out, "Tokens read: {}", s.tokens)?;
    writeln!(out, "Valid words: {}", s.valid_words)?;
    writeln!(out, "Distinct words: {}", s.words.len())?;
    writeln!(out)?;
    writeln!(out, "WORD\tCOUNT")?;
    for entry in &s.words {
        writeln!(out, "{}\t{}", entry.word, entry.count)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_elapsed(elapsed: Duration, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Elapsed time: {:.6} seconds", elapsed.as_secs_f64())?;
    Ok(())
}
