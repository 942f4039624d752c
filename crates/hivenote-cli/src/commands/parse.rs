//! Parse command - extract inspection fields from a single OCR line dump.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use hivenote_core::models::config::{HivenoteConfig, OutputFormat};
use hivenote_core::{scan_outcome, InspectionParser, ParsedResult, RuleBasedParser, ScanOutcome};

use super::config::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file with one OCR line per line (use - for stdin)
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Emit the inspection form pre-fill instead of the raw result
    #[arg(long)]
    prefill: bool,

    /// Print how many fields were found
    #[arg(long)]
    show_count: bool,

    /// Year assumed for dates written without one
    #[arg(long)]
    year: Option<i32>,

    /// Skip pest and disease detection in free prose
    #[arg(long)]
    no_prose: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FormatArg {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(year) = args.year {
        config.parser.reference_year = Some(year);
    }
    if args.no_prose {
        config.parser.scan_prose = false;
    }
    config.parser.validate()?;

    let text = read_input(&args.input)?;
    info!("Parsing {} lines from {}", text.lines().count(), args.input);

    let parser = RuleBasedParser::from_config(&config.parser);
    let outcome = scan_outcome(parser.parse_text(&text));

    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let output = render(&outcome, format, args.prefill, &config)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    if args.show_count || config.output.show_count {
        println!(
            "{} {} fields found",
            style("ℹ").blue(),
            outcome.fields_found
        );
    }

    debug!("Total parsing time: {:?}", start.elapsed());

    Ok(())
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let path = PathBuf::from(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(fs::read_to_string(&path)?)
}

/// Render a scan in the requested format.
pub(crate) fn render(
    outcome: &ScanOutcome,
    format: OutputFormat,
    prefill: bool,
    config: &HivenoteConfig,
) -> anyhow::Result<String> {
    if prefill {
        let value = serde_json::to_value(&outcome.prefill)?;
        return match format {
            OutputFormat::Json => to_json(&value, config.output.pretty),
            OutputFormat::Csv => format_pairs_csv(&flatten(&value)),
            OutputFormat::Text => Ok(format_pairs_text(&flatten(&value))),
        };
    }

    match format {
        OutputFormat::Json => to_json(&outcome.parsed, config.output.pretty),
        OutputFormat::Csv => format_csv(&outcome.parsed),
        OutputFormat::Text => Ok(format_text(&outcome.parsed)),
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

fn format_csv(result: &ParsedResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["field", "value", "confidence", "source"])?;

    for (id, field) in &result.fields {
        wtr.write_record([
            id.as_str(),
            &field.value.to_string(),
            &field.confidence.to_string(),
            &field.source,
        ])?;
    }

    if let Some(notes) = &result.notes {
        wtr.write_record(["notes", notes.as_str(), "", ""])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ParsedResult) -> String {
    let mut output = String::new();

    if result.fields.is_empty() {
        output.push_str("No fields recognized\n");
    } else {
        output.push_str("Fields:\n");
        for (id, field) in &result.fields {
            output.push_str(&format!(
                "  {:<20} {} ({})\n",
                id.as_str(),
                field.value,
                field.confidence
            ));
        }
    }

    if let Some(notes) = &result.notes {
        output.push_str("\nNotes:\n");
        for line in notes.lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output
}

/// Flatten nested JSON objects into dotted key/value pairs.
fn flatten(value: &serde_json::Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    flatten_into(value, "", &mut pairs);
    pairs
}

fn flatten_into(value: &serde_json::Value, prefix: &str, pairs: &mut Vec<(String, String)>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(child, &path, pairs);
            }
        }
        serde_json::Value::Array(items) => {
            let joined: Vec<String> = items.iter().map(scalar_text).collect();
            pairs.push((prefix.to_string(), joined.join(", ")));
        }
        other => pairs.push((prefix.to_string(), scalar_text(other))),
    }
}

fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_pairs_csv(pairs: &[(String, String)]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["field", "value"])?;
    for (key, value) in pairs {
        wtr.write_record([key, value])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_pairs_text(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}: {}\n", key, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(lines: &[&str]) -> ScanOutcome {
        scan_outcome(RuleBasedParser::new().with_reference_year(2026).parse(lines))
    }

    #[test]
    fn test_csv_includes_notes_row() {
        let csv = format_csv(&outcome(&["Queen seen: yes", "stray remark"]).parsed).unwrap();

        assert!(csv.starts_with("field,value,confidence,source\n"));
        assert!(csv.contains("queen_seen,true,high,Queen seen: yes\n"));
        assert!(csv.contains("notes,stray remark,,\n"));
    }

    #[test]
    fn test_text_lists_fields() {
        let text = format_text(&outcome(&["Honey: plenty"]).parsed);

        assert!(text.contains("honey_stores"));
        assert!(text.contains("abundant"));
        assert!(!text.contains("Notes:"));
    }

    #[test]
    fn test_text_without_fields() {
        let text = format_text(&outcome(&["nothing useful"]).parsed);

        assert!(text.starts_with("No fields recognized"));
        assert!(text.contains("  nothing useful\n"));
    }

    #[test]
    fn test_flatten_prefill() {
        let value = serde_json::to_value(
            &outcome(&["Temp: 22C", "wax moth and ants"]).prefill,
        )
        .unwrap();
        let pairs = flatten(&value);

        assert!(pairs.contains(&("weather.temp_c".to_string(), "22.0".to_string())));
        assert!(pairs.contains(&(
            "observations.pest_signs".to_string(),
            "wax_moth, ants".to_string()
        )));
        assert!(pairs.contains(&("experience_template".to_string(), "intermediate".to_string())));
    }

    #[test]
    fn test_render_compact_json() {
        let mut config = HivenoteConfig::default();
        config.output.pretty = false;

        let json = render(&outcome(&["Varroa: 3"]), OutputFormat::Json, false, &config).unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains(r#""varroa_count":{"value":3.0"#));
    }
}
