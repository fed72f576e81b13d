use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if args.list && args.show.is_some() {
        return Err("use either --list or --show, not both".to_string());
    }
    if let Some(raw) = args.output_format.as_deref() {
        if crate::output::OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}', expected text, json, xml or html"
            ));
        }
    }
    if args.output_format.is_some() && args.output.is_none() {
        return Err("--output-format requires --out".to_string());
    }
    if let Some(tick_rate) = args.tick_rate {
        if tick_rate > 1000 {
            return Err(format!(
                "invalid --tick-rate '{tick_rate}', expected 0-1000 milliseconds"
            ));
        }
    }
    if let Some(title) = args.show.as_deref() {
        if title.trim().is_empty() {
            return Err("invalid --show, title is empty".to_string());
        }
    }
    Ok(())
}
