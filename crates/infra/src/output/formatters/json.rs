// crates/infra/src/output/formatters/json.rs
use std::io::Write;

use linestat_ports::report::RunSummary;
use linestat_shared_kernel::Result;
use serde_json::{Value, json};

pub fn output_json(summary: &RunSummary, out: &mut impl Write) -> Result<()> {
    let document = build_json(summary);
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}

fn build_json(summary: &RunSummary) -> Value {
    let mut document = json!({
        "file": summary.file().display().to_string(),
        "elapsed_seconds": summary.elapsed().as_secs_f64(),
    });
    let payload = match summary {
        RunSummary::Statistics(s) => json!({ "statistics": s.statistics }),
        RunSummary::Conversion(s) => json!({ "rows": s.rows }),
        RunSummary::WordCount(s) => json!({
            "tokens": s.tokens,
            "valid_words": s.valid_words,
            "distinct_words": s.words.len(),
            "words": s.words,
        }),
    };
    if let (Some(target), Value::Object(fields)) = (document.as_object_mut(), payload) {
        target.extend(fields);
    }
    document
}
