use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use storyboard::{Cue, Quality, RenderConfig, Timeline};

#[derive(Parser, Debug)]
#[command(name = "storyboard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in storyboards.
    List,
    /// Record a storyboard and write its timeline as JSON.
    Dump(DumpArgs),
    /// Print the beat table of a storyboard.
    Summary(SceneArgs),
    /// Check every storyboard's tables and recorded timeline.
    Check,
    /// Print the frame count and the `\animategraphics` line for slide embedding.
    Beamer(BeamerArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Storyboard name (see `list`).
    #[arg(long)]
    scene: String,

    /// Render config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Quality preset; overrides the config file.
    #[arg(long)]
    quality: Option<Quality>,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BeamerArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// File name prefix of the PNG frame sequence.
    #[arg(long)]
    prefix: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("storyboard=warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Dump(args) => cmd_dump(args),
        Command::Summary(args) => cmd_summary(args),
        Command::Check => cmd_check(),
        Command::Beamer(args) => cmd_beamer(args),
    }
}

fn load_config(path: Option<&Path>, quality: Option<Quality>) -> anyhow::Result<RenderConfig> {
    let Some(p) = path else {
        return Ok(quality.map(RenderConfig::with_quality).unwrap_or_default());
    };
    let mut config =
        RenderConfig::load(p).with_context(|| format!("load render config '{}'", p.display()))?;
    if let Some(q) = quality {
        config.quality = q;
    }
    Ok(config)
}

fn record(args: &SceneArgs) -> anyhow::Result<Timeline> {
    let config = load_config(args.config.as_deref(), args.quality)?;
    let entry = storyboard::find(&args.scene)?;
    let timeline = entry
        .build(&config)
        .with_context(|| format!("record storyboard '{}'", entry.name))?;
    Ok(timeline)
}

fn cmd_list() -> anyhow::Result<()> {
    let config = RenderConfig::default();
    for entry in storyboard::catalog() {
        let timeline = entry
            .build(&config)
            .with_context(|| format!("record storyboard '{}'", entry.name))?;
        println!(
            "{:<16} {:>7.2}s  {}",
            entry.name,
            timeline.duration(),
            entry.title
        );
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let timeline = record(&args.scene)?;
    let json = timeline.to_json_pretty()?;
    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write timeline '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_summary(args: SceneArgs) -> anyhow::Result<()> {
    let timeline = record(&args)?;
    println!(
        "{}: {:.2}s, {} beats, {} objects, {}x{} canvas, {} frames at {} fps",
        timeline.name,
        timeline.duration(),
        timeline.beat_count(),
        timeline.mobjects.len(),
        timeline.canvas.width,
        timeline.canvas.height,
        timeline.frame_count(timeline.fps),
        timeline.fps.as_f64()
    );
    for (idx, cue) in timeline.cues.iter().enumerate() {
        match cue {
            Cue::Add { at, targets } => {
                println!("{idx:>4} {at:>8.2}s {:>6} add {} objects", "", targets.len())
            }
            Cue::Play(beat) => {
                let frames = timeline.fps.range_for(beat.start, beat.run_time);
                println!(
                    "{idx:>4} {:>8.2}s {:>5.2}s play {:<40} frames {}..{} ({})",
                    beat.start,
                    beat.run_time,
                    beat.verb_names().join(", "),
                    frames.start.0,
                    frames.end.0,
                    frames.len_frames()
                )
            }
            Cue::Wait { start, duration } => {
                println!("{idx:>4} {start:>8.2}s {duration:>5.2}s wait")
            }
        }
    }
    Ok(())
}

fn cmd_check() -> anyhow::Result<()> {
    storyboard::storyboards::check_tables().context("storyboard tables")?;
    let config = RenderConfig::default();
    for entry in storyboard::catalog() {
        let timeline = entry
            .build(&config)
            .with_context(|| format!("record storyboard '{}'", entry.name))?;
        timeline
            .validate()
            .with_context(|| format!("validate timeline '{}'", entry.name))?;
        let fp = storyboard::fingerprint(&timeline)?;
        println!("ok {:<16} {fp}", entry.name);
    }
    Ok(())
}

fn cmd_beamer(args: BeamerArgs) -> anyhow::Result<()> {
    let timeline = record(&args.scene)?;
    let frames = timeline.frame_count(timeline.fps);
    if frames == 0 {
        anyhow::bail!("storyboard '{}' has no frames", timeline.name);
    }
    let prefix = args
        .prefix
        .unwrap_or_else(|| format!("{}/frame_", timeline.name));
    println!("{frames} frames");
    println!(
        "\\animategraphics[loop,autoplay,width=\\linewidth]{{{}}}{{{prefix}}}{{0}}{{{}}}",
        timeline.fps.as_f64(),
        frames - 1
    );
    Ok(())
}
