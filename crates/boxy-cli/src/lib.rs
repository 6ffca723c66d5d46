//! # Boxy CLI
//!
//! Command-line front end for the dieline generators. Arguments are parsed into a [`Command`]
//! first and executed separately, so the whole front end can be driven from tests with an
//! in-memory writer.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use boxy_core::units::{format_length, unit_label, MeasurementSystem};
use boxy_dielines::{BoxParameters, BoxStyle, DielineGenerator};
use boxy_export::ExportFormat;
use boxy_settings::{
    apply_overrides, load_parameters, parameters_to_string, parse_override, Config, FileFormat,
};
use tracing::{debug, info};

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

pub const USAGE: &str = r#"boxy - printable dielines for boxes

USAGE:
  boxy styles
  boxy defaults <style> [--format json|toml]
  boxy size <style> [options] [--units mm|in]
  boxy generate <style> [options] [--format svg|dxf|png] [--out PATH]

STYLES:
  folding-lid
  locking-folding-lid
  triangular-prism

OPTIONS:
  --params <file>     Load parameters from a .json or .toml file
  --set <key=value>   Override one parameter (repeatable)
  --config <file>     Use this config file instead of the default location
  -h, --help          Show this help
  -V, --version       Show version and build date
"#;

/// Where box parameters come from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSource {
    pub params_file: Option<PathBuf>,
    pub overrides: Vec<(String, String)>,
}

impl ParameterSource {
    /// Style defaults, then the parameter file, then `--set` overrides.
    pub fn resolve(&self, style: BoxStyle) -> anyhow::Result<BoxParameters> {
        let base = match &self.params_file {
            Some(path) => load_parameters(path, Some(style))
                .with_context(|| format!("failed to load parameters from {}", path.display()))?,
            None => style.default_parameters(),
        };
        apply_overrides(&base, &self.overrides).context("invalid --set override")
    }
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Version,
    Styles,
    Defaults {
        style: BoxStyle,
        format: FileFormat,
    },
    Size {
        style: BoxStyle,
        source: ParameterSource,
        units: Option<MeasurementSystem>,
        config: Option<PathBuf>,
    },
    Generate {
        style: BoxStyle,
        source: ParameterSource,
        format: Option<ExportFormat>,
        out: Option<PathBuf>,
        config: Option<PathBuf>,
    },
}

struct Args {
    args: Vec<String>,
    pos: usize,
}

impl Args {
    fn new(args: Vec<String>) -> Self {
        Self { args, pos: 0 }
    }

    fn next(&mut self) -> Option<String> {
        let arg = self.args.get(self.pos)?.clone();
        self.pos += 1;
        Some(arg)
    }

    fn value(&mut self, flag: &str) -> anyhow::Result<String> {
        self.next()
            .ok_or_else(|| anyhow!("missing value for {flag}"))
    }

    fn style(&mut self) -> anyhow::Result<BoxStyle> {
        let name = self.next().ok_or_else(|| anyhow!("missing box style\n\n{USAGE}"))?;
        Ok(name.parse()?)
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: Vec<String>) -> anyhow::Result<Command> {
    let mut args = Args::new(args);

    let Some(command) = args.next() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-V" | "--version" | "version" => Ok(Command::Version),
        "styles" => {
            no_more(&mut args)?;
            Ok(Command::Styles)
        }
        "defaults" => {
            let style = args.style()?;
            let mut format = FileFormat::Toml;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--format" => format = FileFormat::from_name(&args.value("--format")?)?,
                    other => bail!("unknown option `{other}`\n\n{USAGE}"),
                }
            }
            Ok(Command::Defaults { style, format })
        }
        "size" => {
            let style = args.style()?;
            let mut source = ParameterSource::default();
            let mut units: Option<MeasurementSystem> = None;
            let mut config = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--units" => units = Some(args.value("--units")?.parse()?),
                    "--config" => config = Some(PathBuf::from(args.value("--config")?)),
                    other => parameter_option(&mut args, other, &mut source)?,
                }
            }
            Ok(Command::Size {
                style,
                source,
                units,
                config,
            })
        }
        "generate" => {
            let style = args.style()?;
            let mut source = ParameterSource::default();
            let mut format: Option<ExportFormat> = None;
            let mut out = None;
            let mut config = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--format" => format = Some(args.value("--format")?.parse()?),
                    "--out" | "-o" => out = Some(PathBuf::from(args.value("--out")?)),
                    "--config" => config = Some(PathBuf::from(args.value("--config")?)),
                    other => parameter_option(&mut args, other, &mut source)?,
                }
            }
            Ok(Command::Generate {
                style,
                source,
                format,
                out,
                config,
            })
        }
        other => bail!("unknown command `{other}`\n\n{USAGE}"),
    }
}

fn parameter_option(args: &mut Args, flag: &str, source: &mut ParameterSource) -> anyhow::Result<()> {
    match flag {
        "--params" => source.params_file = Some(PathBuf::from(args.value("--params")?)),
        "--set" => source.overrides.push(parse_override(&args.value("--set")?)?),
        other => bail!("unknown option `{other}`\n\n{USAGE}"),
    }
    Ok(())
}

fn no_more(args: &mut Args) -> anyhow::Result<()> {
    match args.next() {
        Some(extra) => bail!("unexpected argument `{extra}`\n\n{USAGE}"),
        None => Ok(()),
    }
}

/// Format from `--format`, else the output extension, else the configured default.
pub fn resolve_format(
    format: Option<ExportFormat>,
    out: Option<&Path>,
    config: &Config,
) -> anyhow::Result<ExportFormat> {
    if let Some(format) = format {
        return Ok(format);
    }
    match out {
        Some(path) if path.extension().is_some() => Ok(ExportFormat::from_path(path)?),
        _ => Ok(config.export.default_format),
    }
}

/// Explicit `--out`, or `<output_dir>/<file prefix>.<ext>`.
pub fn output_path(
    out: Option<PathBuf>,
    style: BoxStyle,
    format: ExportFormat,
    config: &Config,
) -> PathBuf {
    out.unwrap_or_else(|| {
        config
            .export
            .output_dir
            .join(format!("{}.{}", style.file_prefix(), format.extension()))
    })
}

/// Run a parsed command, writing user-facing output to `out`.
pub fn execute<W: Write>(command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Help => writeln!(out, "{USAGE}")?,
        Command::Version => writeln!(out, "boxy {VERSION} (built {BUILD_DATE})")?,
        Command::Styles => {
            for style in BoxStyle::ALL {
                writeln!(out, "{:<22}{:<28}{}", style.key(), style.file_prefix(), style.name())?;
            }
        }
        Command::Defaults { style, format } => {
            let text = parameters_to_string(&style.default_parameters(), format)?;
            writeln!(out, "{}", text.trim_end())?;
        }
        Command::Size {
            style,
            source,
            units,
            config,
        } => {
            let params = source.resolve(style)?;
            let system = match units {
                Some(system) => system,
                None => load_config(config.as_deref())?.display.measurement_system,
            };
            let size = params
                .bounding_size()
                .with_context(|| format!("cannot size {} box", style))?;
            let label = unit_label(system);
            writeln!(
                out,
                "{} x {} {}",
                format_length(size.width, system),
                format_length(size.height, system),
                label
            )?;
        }
        Command::Generate {
            style,
            source,
            format,
            out: out_path,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let params = source.resolve(style)?;
            let format = resolve_format(format, out_path.as_deref(), &config)?;
            let path = output_path(out_path, style, format, &config);

            let layout = params
                .generate()
                .with_context(|| format!("cannot generate {} box", style))?;
            debug!(
                "{} layout: {} segments, {:.1} x {:.1} mm",
                style,
                layout.segments.len(),
                layout.size.width,
                layout.size.height
            );

            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            boxy_export::export(&layout, format, &path, &config.export_options())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Generated {} pattern", style.name());
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    Config::load_or_default(path).context("failed to load configuration")
}

/// Parse and run, for `main`.
pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let command = parse_args(args)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(command, &mut out)
}
