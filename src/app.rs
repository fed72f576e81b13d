use std::time::Duration;

use clap::{error::ErrorKind, Parser};

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::output;
use crate::session::{CatalogSource, Options, Session};
use crate::tui;
use crate::view::fx::{Motion, NoMotion, SlideIn};
use crate::view::ViewState;

fn print_banner() {
    const BANNER: &str = r#"
                 __  ____      ___
  ________  _____/ /_/ __/___  / (_)___
 / ___/ _ \/ ___/ __/ /_/ __ \/ / / __ \
/ /__/  __/ /  / /_/ __/ /_/ / / / /_/ /
\___/\___/_/   \__/_/  \____/_/_/\____/
       v0.1.3 - terminal certification portfolio
    "#;
    print!("{}", BANNER);
    println!();
}

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[derive(Clone, Debug)]
struct RunConfig {
    data: Option<String>,
    inline_catalog: Option<Vec<crate::catalog::CertificationRecord>>,
    list: bool,
    show: Option<String>,
    output: Option<String>,
    output_format: Option<String>,
    tick_rate: u64,
    no_motion: bool,
    no_color: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let tick_rate = args.tick_rate.or(cfg.tick_rate).unwrap_or(60);
    if tick_rate > 1000 {
        return Err(format!(
            "invalid tick-rate '{tick_rate}', expected 0-1000 milliseconds"
        ));
    }
    let no_motion = args.no_motion || cfg.no_motion.unwrap_or(false) || tick_rate == 0;

    let data = args
        .data
        .or(cfg.data)
        .map(|p| config::expand_tilde_string(&p));

    let output = args
        .output
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(&p));
    let output_format = args.output_format.or(cfg.output_format);

    Ok(RunConfig {
        data,
        inline_catalog: cfg.certifications,
        list: args.list,
        show: args.show,
        output,
        output_format,
        tick_rate,
        no_motion,
        no_color,
    })
}

fn catalog_source(run: &RunConfig) -> CatalogSource {
    if let Some(path) = run.data.as_ref() {
        CatalogSource::FilePath(path.clone())
    } else if let Some(records) = run.inline_catalog.as_ref() {
        CatalogSource::Inline(records.clone())
    } else {
        CatalogSource::BuiltIn
    }
}

fn catalog_summary(run: &RunConfig, record_count: usize) -> String {
    if let Some(path) = run.data.as_ref() {
        format!("file={} records={}", path, record_count)
    } else if run.inline_catalog.is_some() {
        format!("config records={}", record_count)
    } else {
        format!("built-in records={}", record_count)
    }
}

fn run_export(run: &RunConfig, session: &Session, outfile_path: &str) -> Result<(), String> {
    let output_format = run
        .output_format
        .as_deref()
        .and_then(output::OutputFormat::parse)
        .or_else(|| output::infer_format_from_path(outfile_path))
        .unwrap_or(output::OutputFormat::Text);

    let records = output::build_records(session.records());
    let rendered = match output_format {
        output::OutputFormat::Text => output::render_text(&records),
        output::OutputFormat::Json => output::render_json(&records),
        output::OutputFormat::Xml => output::render_xml(&records),
        output::OutputFormat::Html => output::render_html(&records),
    };

    std::fs::write(outfile_path, rendered)
        .map_err(|e| format!("failed to write output file '{outfile_path}': {e}"))?;

    println!();
    println!(
        ":: Completed :: wrote {} records to {} ::",
        records.len(),
        outfile_path
    );
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    let cfg = match args.config.as_ref() {
        Some(path) => {
            let path = config::expand_tilde(path);
            config::load_config(&path, false)?
        }
        None => match config::default_config_path() {
            Some(path) => {
                config::ensure_default_config_file(&path)?;
                config::load_config(&path, false)?
            }
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;

    let session = Session::new(Options {
        catalog: catalog_source(&run),
        tick_rate_ms: run.tick_rate,
        motion: !run.no_motion,
        no_color: run.no_color,
    })
    .map_err(|e| e.to_string())?;

    if session.options().no_color {
        colored::control::set_override(false);
    }

    print_banner();
    format_kv_line("Catalog", &catalog_summary(&run, session.records().len()));
    format_kv_line(
        "Interface",
        &format!(
            "tick={}ms motion={} color={}",
            session.options().tick_rate_ms,
            format_bool(session.options().motion),
            format_bool(!session.options().no_color)
        ),
    );
    println!();

    if let Some(outfile_path) = run.output.as_ref() {
        return run_export(&run, &session, outfile_path);
    }

    if run.list {
        output::print_list(session.records());
        return Ok(());
    }

    if let Some(title) = run.show.as_ref() {
        let record = output::find_by_title(session.records(), title)
            .ok_or_else(|| format!("no certification titled '{title}'"))?;
        output::print_detail(record);
        return Ok(());
    }

    let motion: Box<dyn Motion> = if session.options().motion {
        Box::new(SlideIn::default())
    } else {
        Box::new(NoMotion)
    };
    let tick_rate = Duration::from_millis(session.options().tick_rate_ms.max(10));
    let mut view = ViewState::new(session.into_records(), motion);
    tui::run(&mut view, tick_rate)?;

    println!(":: Completed :: closed the portfolio view ::");
    Ok(())
}
