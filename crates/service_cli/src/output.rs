//! Result rendering
//!
//! The text format is a fixed three-line contract; JSON carries the full
//! `PricingResult` plus the elapsed time.

use pricer_mc::PricingResult;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

#[derive(Serialize)]
struct JsonReport<'a> {
    elapsed_seconds: f64,
    #[serde(flatten)]
    result: &'a PricingResult,
}

/// Render the three-line text report
pub fn render_text(result: &PricingResult, elapsed_secs: f64) -> String {
    format!(
        "Elapsed time: {:.6} seconds\nCall Price:      {:.6}\nPut Price:       {:.6}\n",
        elapsed_secs, result.call_price, result.put_price
    )
}

/// Render the JSON report
pub fn render_json(result: &PricingResult, elapsed_secs: f64) -> Result<String> {
    let report = JsonReport {
        elapsed_seconds: elapsed_secs,
        result,
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}

/// Render in the requested format
pub fn render(format: OutputFormat, result: &PricingResult, elapsed_secs: f64) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, elapsed_secs)),
        OutputFormat::Json => render_json(result, elapsed_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PricingResult {
        PricingResult {
            call_price: 10.4512345678,
            put_price: 5.5712,
            call_std_error: 0.0047,
            put_std_error: 0.0028,
            discount_factor: 0.951229424500714,
            paths_requested: 10_000_000,
            paths_executed: 9_999_996,
            worker_count: 12,
            seed: 1_700_000_000,
        }
    }

    #[test]
    fn test_text_contract() {
        let text = render_text(&sample(), 1.5);

        assert_eq!(
            text,
            "Elapsed time: 1.500000 seconds\n\
             Call Price:      10.451235\n\
             Put Price:       5.571200\n"
        );
    }

    #[test]
    fn test_json_fields() {
        let json = render(OutputFormat::Json, &sample(), 0.25).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["elapsed_seconds"], 0.25);
        assert_eq!(value["paths_executed"], 9_999_996);
        assert_eq!(value["worker_count"], 12);
        assert_eq!(value["seed"], 1_700_000_000u64);
        approx::assert_relative_eq!(
            value["call_price"].as_f64().unwrap(),
            10.4512345678,
            epsilon = 1e-12
        );
    }
}
