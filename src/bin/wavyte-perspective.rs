use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wavyte_perspective::{
    Canvas, FilterSettings, PerspectiveFilter, Point, TransformMatrix, TransformParameters,
};

#[derive(Parser, Debug)]
#[command(name = "wavyte-perspective", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the composed projection x model matrix, row-major.
    Matrix(TransformArgs),
    /// Print where the source corners and center land in normalized device coordinates.
    Project(TransformArgs),
}

#[derive(Parser, Debug)]
struct TransformArgs {
    /// Filter settings JSON (flat object of numeric values, e.g. {"rot_y": 30}).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Override a single setting, as KEY=VALUE. May be repeated.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Source width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Source height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Matrix(args) => cmd_matrix(args),
        Command::Project(args) => cmd_project(args),
    }
}

fn load_settings(path: Option<&Path>, overrides: &[String]) -> anyhow::Result<FilterSettings> {
    let mut settings = FilterSettings::new();
    PerspectiveFilter::defaults(&mut settings);

    if let Some(path) = path {
        let user = FilterSettings::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?;
        settings.apply(&user);
    }

    for kv in overrides {
        let (key, value) = kv
            .split_once('=')
            .with_context(|| format!("override '{kv}' is not KEY=VALUE"))?;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("override '{kv}' has a non-numeric value"))?;
        settings.set_double(key.trim(), value);
    }
    Ok(settings)
}

fn build(args: &TransformArgs) -> anyhow::Result<(Canvas, TransformMatrix)> {
    let settings = load_settings(args.settings.as_deref(), &args.overrides)?;
    let params = TransformParameters::from_settings(&settings)?;
    let canvas = Canvas::new(args.width, args.height)?;
    let matrix = TransformMatrix::build(&params, canvas)?;
    tracing::debug!(?params, ?canvas, "built transform");
    Ok((canvas, matrix))
}

fn cmd_matrix(args: TransformArgs) -> anyhow::Result<()> {
    let (_, matrix) = build(&args)?;
    let rows = matrix.rows();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in rows {
        println!(
            "{:>14.6} {:>14.6} {:>14.6} {:>14.6}",
            row[0], row[1], row[2], row[3]
        );
    }
    Ok(())
}

fn cmd_project(args: TransformArgs) -> anyhow::Result<()> {
    let (canvas, matrix) = build(&args)?;
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let probes = [
        ("top_left", Point::new(0.0, 0.0)),
        ("top_right", Point::new(w, 0.0)),
        ("bottom_left", Point::new(0.0, h)),
        ("bottom_right", Point::new(w, h)),
        ("center", Point::new(w / 2.0, h / 2.0)),
    ];

    let projected: Vec<_> = probes
        .iter()
        .map(|(name, p)| (*name, *p, matrix.project_point(*p)))
        .collect();

    if args.json {
        let out: serde_json::Map<String, serde_json::Value> = projected
            .iter()
            .map(|(name, _, ndc)| {
                let v = match ndc {
                    Some(q) => serde_json::json!([q.x, q.y]),
                    None => serde_json::Value::Null,
                };
                ((*name).to_string(), v)
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (name, p, ndc) in projected {
        match ndc {
            Some(q) => println!(
                "{name:<13} ({:>7.1}, {:>7.1}) -> ({:>9.5}, {:>9.5})",
                p.x, p.y, q.x, q.y
            ),
            None => println!("{name:<13} ({:>7.1}, {:>7.1}) -> behind camera", p.x, p.y),
        }
    }
    Ok(())
}
