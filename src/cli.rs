use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name="exonplot",
          version=env!("CARGO_PKG_VERSION"),
          about="Compressed gene-model diagrams from exon-level region annotations",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Gene Model Plotter")]
    Plot(PlotArgs),
    #[clap(about = "Compressed Position Locator")]
    Locate(LocateArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("plot")))]
#[command(arg_required_else_help(true))]
pub struct PlotArgs {
    #[clap(required = true)]
    #[clap(short = 'r')]
    #[clap(long = "regions")]
    #[clap(help = "TSV file with transcript sub-regions (feature, start, stop)")]
    #[clap(value_name = "REGIONS")]
    #[arg(value_parser = check_file_exists)]
    pub regions_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "image")]
    #[clap(help = "Output SVG path")]
    #[clap(value_name = "IMAGE")]
    #[arg(value_parser = check_image_path)]
    pub output_path: String,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "features")]
    #[clap(value_name = "FEATURES")]
    #[clap(help = "Comma-separated feature types to display")]
    #[clap(default_value = "CDS")]
    #[clap(value_delimiter = ',')]
    pub features: Vec<String>,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "padding")]
    #[clap(value_name = "PADDING")]
    #[clap(help = "Width of the pad regions inserted around each feature")]
    #[clap(default_value = "50")]
    pub padding: u32,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "width")]
    #[clap(value_name = "WIDTH")]
    #[clap(help = "Plot width in pixels")]
    #[clap(default_value = "1000")]
    pub width: u32,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("locate")))]
#[command(arg_required_else_help(true))]
pub struct LocateArgs {
    #[clap(required = true)]
    #[clap(short = 'r')]
    #[clap(long = "regions")]
    #[clap(help = "TSV file with transcript sub-regions (feature, start, stop)")]
    #[clap(value_name = "REGIONS")]
    #[arg(value_parser = check_file_exists)]
    pub regions_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'p')]
    #[clap(long = "position")]
    #[clap(help = "Genomic position to map; may be repeated")]
    #[clap(value_name = "POSITION")]
    #[clap(action = ArgAction::Append)]
    pub positions: Vec<u32>,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "features")]
    #[clap(value_name = "FEATURES")]
    #[clap(help = "Comma-separated feature types to display")]
    #[clap(default_value = "CDS")]
    #[clap(value_delimiter = ',')]
    pub features: Vec<String>,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "padding")]
    #[clap(value_name = "PADDING")]
    #[clap(help = "Width of the pad regions inserted around each feature")]
    #[clap(default_value = "50")]
    pub padding: u32,
}

fn check_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = Path::new(s);
    if !path.exists() {
        return Err(format!("File does not exist: {}", path.display()));
    }
    Ok(path.to_path_buf())
}

fn check_image_path(s: &str) -> Result<String, String> {
    let path = Path::new(s);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") => Ok(s.to_string()),
        _ => Err(format!("Output image must have an .svg extension: {}", s)),
    }
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}
