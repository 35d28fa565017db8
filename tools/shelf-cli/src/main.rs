//! shelf-cli - wire shelf generator front end
//!
//! Builds shelf scenes from parameter JSON, exports them as STL or OBJ and
//! runs the free-text parameter extractor.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use config::GeneratorConfig;
use shelf_geometry::{build_with, MaterialTag, SceneGraph};
use shelf_mesh::{export, export_filename, export_obj, ExportError, ExportOptions, StlFormat};
use shelf_params::{extract_from_response, from_json_str, ShelfParameters};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shelf-cli")]
#[command(about = "Wire shelf generator")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the scene and print it as JSON
    Build {
        #[command(flatten)]
        params: ParamsArgs,

        #[command(flatten)]
        tessellation: TessellationArgs,

        /// Write the scene JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a summary instead of the full scene
        #[arg(long)]
        summary: bool,
    },

    /// Export the scene as a mesh file
    Export {
        #[command(flatten)]
        params: ParamsArgs,

        #[command(flatten)]
        tessellation: TessellationArgs,

        /// Output file (default: shelf_<w>x<l>x<h>_<n>shelves.stl)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Mesh format
        #[arg(short, long, value_enum, default_value_t = Format::Stl)]
        format: Format,
    },

    /// Extract parameters from free text or a chat reply
    Extract {
        /// Text to scan
        text: String,

        /// Current parameters JSON to merge onto
        #[arg(short, long)]
        current: Option<PathBuf>,
    },

    /// Report missing fields and out-of-range values
    Check {
        #[command(flatten)]
        params: ParamsArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Binary STL
    Stl,
    /// ASCII STL
    AsciiStl,
    /// Wavefront OBJ
    Obj,
}

/// Parameter source plus per-field overrides.
#[derive(Args, Debug, Default)]
struct ParamsArgs {
    /// Parameters JSON file (`-` for stdin)
    input: Option<PathBuf>,

    /// Width in inches
    #[arg(long)]
    width: Option<f64>,

    /// Length (depth) in inches
    #[arg(long)]
    length: Option<f64>,

    /// Post height in inches
    #[arg(long)]
    height: Option<f64>,

    /// Number of shelves
    #[arg(long)]
    shelves: Option<u32>,
}

impl ParamsArgs {
    fn load(&self) -> Result<ShelfParameters> {
        let mut params = match &self.input {
            Some(path) => parse_params(&read_input(path)?)?,
            None => ShelfParameters::default(),
        };
        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(length) = self.length {
            params.length = length;
        }
        if let Some(height) = self.height {
            params.post_height = height;
        }
        if let Some(shelves) = self.shelves {
            params.number_of_shelves = shelves;
        }
        Ok(params)
    }
}

#[derive(Args, Debug, Default)]
struct TessellationArgs {
    /// Radial segments for posts
    #[arg(long)]
    post_segments: Option<u32>,

    /// Segments for caster wheels
    #[arg(long)]
    sphere_segments: Option<u32>,
}

impl TessellationArgs {
    fn config(&self) -> Result<GeneratorConfig> {
        let base = GeneratorConfig::default();
        let config = GeneratorConfig::new(
            base.tolerance,
            self.post_segments.unwrap_or(base.post_segments),
            base.brace_segments,
            base.caster_segments,
            self.sphere_segments.unwrap_or(base.sphere_segments),
        )?;
        Ok(config)
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn parse_params(text: &str) -> Result<ShelfParameters> {
    from_json_str(text).context("Failed to parse parameters")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build {
            params,
            tessellation,
            output,
            summary,
        } => {
            let params = params.load()?;
            let scene = build_scene(&params, &tessellation)?;
            if summary {
                println!("{}", summarize(&scene));
                return Ok(());
            }
            let json = serde_json::to_string_pretty(&scene)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote {}", path.display());
                }
                None => println!("{json}"),
            }
        }

        Commands::Export {
            params,
            tessellation,
            output,
            format,
        } => {
            let params = params.load()?;
            let scene = build_scene(&params, &tessellation)?;
            let path = output.unwrap_or_else(|| default_output(&params, format));
            export_scene(&scene, format, &path)?;
        }

        Commands::Extract { text, current } => {
            let current = match current {
                Some(path) => parse_params(&read_input(&path)?)?,
                None => ShelfParameters::default(),
            };
            let next = extract_from_response(&text, &current);
            println!("{}", serde_json::to_string_pretty(&next)?);
            for field in next.missing_required() {
                info!("Still missing: {field}");
            }
        }

        Commands::Check { params } => {
            let params = params.load()?;
            let missing = params.missing_required();
            let issues = params.validate();
            for field in &missing {
                println!("error: missing {field}");
            }
            for issue in &issues {
                println!("warning: {issue}");
            }
            if !missing.is_empty() {
                bail!("{} required field(s) missing", missing.len());
            }
            if issues.is_empty() {
                println!("ok");
            }
        }
    }

    Ok(())
}

fn build_scene(params: &ShelfParameters, tessellation: &TessellationArgs) -> Result<SceneGraph> {
    let config = tessellation.config()?;
    for issue in params.validate() {
        warn!("{issue}");
    }
    Ok(build_with(params, &config))
}

fn default_output(params: &ShelfParameters, format: Format) -> PathBuf {
    let name = export_filename(params);
    match format {
        Format::Obj => PathBuf::from(name).with_extension("obj"),
        Format::Stl | Format::AsciiStl => PathBuf::from(name),
    }
}

fn export_scene(scene: &SceneGraph, format: Format, path: &Path) -> Result<()> {
    let stl_format = match format {
        Format::Stl => StlFormat::Binary,
        Format::AsciiStl => StlFormat::Ascii,
        Format::Obj => {
            let obj = export_obj(scene, "wire_shelf").map_err(nothing_to_export)?;
            std::fs::write(path, obj)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
            return Ok(());
        }
    };

    let options = ExportOptions {
        format: stl_format,
        ..ExportOptions::default()
    };
    let stl = export(scene, &options).map_err(nothing_to_export)?;
    stl.write_to_path(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(
        "Wrote {} ({} triangles, {} bytes)",
        path.display(),
        stl.triangle_count,
        stl.bytes.len()
    );
    Ok(())
}

fn nothing_to_export(err: ExportError) -> anyhow::Error {
    if err.is_nothing_to_export() {
        anyhow::anyhow!("Nothing to export: width, length, height and number of shelves are all required")
    } else {
        err.into()
    }
}

fn summarize(scene: &SceneGraph) -> String {
    let mut lines = vec![format!("primitives: {}", scene.len())];
    for tag in [
        MaterialTag::Post,
        MaterialTag::Wire,
        MaterialTag::Solid,
        MaterialTag::Panel,
        MaterialTag::Caster,
    ] {
        lines.push(format!("  {:?}: {}", tag, scene.count_by_material(tag)));
    }
    lines.push(format!("shelf levels: {}", scene.shelf_levels().len()));
    lines.push(format!("brace tiers: {}", scene.brace_tiers().len()));
    if let Some((min, max)) = scene.bounding_box() {
        let size = max - min;
        lines.push(format!(
            "bounds: {:.2} x {:.2} x {:.2}",
            size.x, size.y, size.z
        ));
    }
    lines.join("\n")
}
