use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use scalekit::{
    attach_tool, init_logging, log_events, CanvasSize, DisplayHost, DrawCommand,
    ElementId, EventBus, ImageInfo, ImagePlaneMetadata, LengthAxis,
    OverlayGeometry, RecordingSurface, RenderEvent, RenderOutcome, SettingsPersistence,
    SkipReason, SvgSurface, ViewportState,
};
use scalekit_settings::{default_config_path, ConfigFormat};

const CLI_ELEMENT: &str = "cli-viewport";
const CLI_IMAGE_ID: &str = "cli-image";

#[derive(Parser, Debug)]
#[command(name = "scalekit", version, about = "Calibrated scale overlay renderer")]
struct Cli {
    /// Config file (.toml or .json); defaults to the platform config dir
    #[arg(long, global = true, env = "SCALEKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute and draw the overlay for one frame
    Render(RenderArgs),
    /// Manage the config file
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Native row pixel spacing in mm
    #[arg(long)]
    row_spacing: Option<f64>,

    /// Native column pixel spacing in mm
    #[arg(long)]
    column_spacing: Option<f64>,

    /// Imaging-plane row spacing in mm
    #[arg(long)]
    plane_row: Option<f64>,

    /// Imaging-plane column spacing in mm
    #[arg(long)]
    plane_column: Option<f64>,

    /// Report the plane values under the alternate field names
    #[arg(long)]
    plane_alternate: bool,

    /// Viewport zoom (canvas pixels per image pixel)
    #[arg(long, default_value_t = 1.0, value_parser = parse_scale)]
    scale: f64,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Override the configured horizontal ruler length axis
    #[arg(long, value_enum)]
    length_axis: Option<AxisArg>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
enum ConfigSubcommand {
    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config as TOML
    Show,
    /// Print the config file location
    Path,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Svg,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AxisArg {
    Row,
    Column,
}

impl From<AxisArg> for LengthAxis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Row => LengthAxis::RowSpacing,
            AxisArg::Column => LengthAxis::ColumnSpacing,
        }
    }
}

fn parse_scale(value: &str) -> Result<f64, String> {
    let scale: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be a positive number, got {value}"))
    }
}

/// Stand-in viewer: one element that always holds the rendered image.
#[derive(Debug, Default)]
struct CliHost;

impl DisplayHost for CliHost {
    fn has_image(&self, element: &ElementId) -> bool {
        element.as_str() == CLI_ELEMENT
    }

    fn update_image(&mut self, element: &ElementId) {
        tracing::debug!(%element, "redraw requested");
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    drawn: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<SkipReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    geometry: Option<&'a OverlayGeometry>,
    commands: &'a [DrawCommand],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json)?;

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };

    match cli.command {
        Command::Render(args) => render(&config_path, args),
        Command::Config(cmd) => config(&config_path, cmd.command),
    }
}

fn render(config_path: &Path, args: RenderArgs) -> anyhow::Result<()> {
    let mut config = SettingsPersistence::load_or_default(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?
        .config()
        .clone();
    if let Some(axis) = args.length_axis {
        config.overlay.length_axis = axis.into();
    }

    let bus = Arc::new(EventBus::new());
    log_events(&bus);

    let element = ElementId::new(CLI_ELEMENT);
    let mut host = CliHost;
    let mut tool = attach_tool(&config, Some(bus), &mut host, &element);
    // Rendering on request implies the tool is on.
    tool.enable(&mut host, &element);

    let event = RenderEvent {
        element,
        image: ImageInfo {
            image_id: CLI_IMAGE_ID.to_string(),
            row_pixel_spacing: args.row_spacing,
            column_pixel_spacing: args.column_spacing,
        },
        viewport: ViewportState::new(args.scale),
        canvas: CanvasSize::new(args.width, args.height),
    };

    let mut metadata = HashMap::new();
    if args.plane_row.is_some() || args.plane_column.is_some() {
        let plane = if args.plane_alternate {
            ImagePlaneMetadata {
                row_image_pixel_spacing: args.plane_row,
                column_image_pixel_spacing: args.plane_column,
                ..Default::default()
            }
        } else {
            ImagePlaneMetadata {
                row_pixel_spacing: args.plane_row,
                column_pixel_spacing: args.plane_column,
                ..Default::default()
            }
        };
        metadata.insert(CLI_IMAGE_ID.to_string(), plane);
    }

    let style = config.overlay_style();
    let mut recording = RecordingSurface::new();
    let outcome = tool.render(&event, &metadata, &style, &mut recording);
    if let RenderOutcome::Skipped(reason) = &outcome {
        tracing::info!(%reason, "overlay skipped");
    }

    let output = match args.format {
        OutputFormat::Svg => {
            let mut svg = SvgSurface::new(args.width, args.height);
            recording.replay(&mut svg);
            svg.finish()
        }
        OutputFormat::Json => {
            let report = JsonReport {
                drawn: outcome.is_drawn(),
                skipped: match &outcome {
                    RenderOutcome::Skipped(reason) => Some(*reason),
                    RenderOutcome::Drawn(_) => None,
                },
                geometry: outcome.geometry(),
                commands: recording.commands(),
            };
            let mut text = serde_json::to_string_pretty(&report)?;
            text.push('\n');
            text
        }
    };

    match args.output {
        Some(path) => std::fs::write(&path, output)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{output}"),
    }
    Ok(())
}

fn config(config_path: &Path, command: ConfigSubcommand) -> anyhow::Result<()> {
    match command {
        ConfigSubcommand::Init { force } => {
            if SettingsPersistence::init(config_path, force)? {
                println!("Wrote {}", config_path.display());
            } else {
                println!("{} already exists (use --force)", config_path.display());
            }
        }
        ConfigSubcommand::Show => {
            let persistence = SettingsPersistence::load_or_default(config_path)?;
            print!("{}", persistence.config().render(ConfigFormat::Toml)?);
        }
        ConfigSubcommand::Path => println!("{}", config_path.display()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "scalekit",
            "render",
            "--row-spacing",
            "0.5",
            "--column-spacing",
            "0.5",
            "--format",
            "json",
            "--length-axis",
            "column",
        ])
        .unwrap();

        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.row_spacing, Some(0.5));
                assert_eq!(args.width, 800);
                assert!(matches!(args.format, OutputFormat::Json));
                assert_eq!(LengthAxis::from(args.length_axis.unwrap()), LengthAxis::ColumnSpacing);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_invalid_scale() {
        for scale in ["0", "-1", "NaN", "inf"] {
            let result = Cli::try_parse_from(["scalekit", "render", "--scale", scale]);
            assert!(result.is_err(), "scale {scale} accepted");
        }
        let cli = Cli::try_parse_from(["scalekit", "render", "--scale", "2.5"]).unwrap();
        match cli.command {
            Command::Render(args) => assert_eq!(args.scale, 2.5),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_config_init() {
        let cli = Cli::try_parse_from(["scalekit", "--config", "x.toml", "config", "init", "--force"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand {
                command: ConfigSubcommand::Init { force: true }
            })
        ));
    }

    #[test]
    fn test_render_writes_svg() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("overlay.svg");
        let args = RenderArgs {
            row_spacing: Some(0.5),
            column_spacing: Some(0.5),
            plane_row: None,
            plane_column: None,
            plane_alternate: false,
            scale: 1.0,
            width: 800,
            height: 600,
            length_axis: None,
            format: OutputFormat::Svg,
            output: Some(out.clone()),
        };

        render(&dir.path().join("missing.toml"), args).unwrap();

        let svg = std::fs::read_to_string(out).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("5 cm"));
    }
}
