use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "certfolio",
    version,
    about = "terminal certification-portfolio viewer",
    long_about = "Certfolio renders a catalog of professional certifications as an interactive card grid with a click-driven detail view.\n\nExamples:\n  certfolio\n  certfolio --data ./certifications.yml\n  certfolio --list\n  certfolio --out report.html\n\nTip: Use --config to persist settings and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.certfolio/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 'd',
        long = "data",
        visible_alias = "catalog",
        value_name = "FILE",
        help_heading = "Input",
        help = "Load the certification catalog from a YAML file instead of the built-ins."
    )]
    pub data: Option<String>,

    #[arg(
        short = 'l',
        long = "ls",
        visible_alias = "list",
        help_heading = "Mode",
        help = "Print the catalog to the console and exit."
    )]
    pub list: bool,

    #[arg(
        short = 's',
        long = "show",
        value_name = "TITLE",
        help_heading = "Mode",
        help = "Print one record's full details and exit (matched by title)."
    )]
    pub show: Option<String>,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the catalog to a file and exit."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format (text, json, xml or html; inferred from the file extension when omitted)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 't',
        long = "tr",
        visible_alias = "tick-rate",
        value_name = "MS",
        help_heading = "Interface",
        help = "Render tick interval in milliseconds (0 disables enter motion)."
    )]
    pub tick_rate: Option<u64>,

    #[arg(
        short = 'm',
        long = "nm",
        visible_alias = "no-motion",
        help_heading = "Interface",
        help = "Disable enter motion for tiles and the detail view."
    )]
    pub no_motion: bool,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,
}
