use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use storyframe::{
    AccentColor, FrameworkClassifier as _, KeywordFrameworkClassifier, KeywordTopicClassifier,
    Quality, StoryframeConfig, TopicCategory, TopicClassifier as _,
};

#[derive(Parser, Debug)]
#[command(name = "storyframe", version)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Pipeline configuration JSON; missing sections keep their defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assign style, composition and camera move to every image position.
    Sequence(SequenceArgs),
    /// Sequence a scene list and build an image prompt for each scene.
    Prompts(PromptsArgs),
    /// Align scenes to narration timestamps and write the render manifest.
    Sync(SyncArgs),
    /// Classify a story's topic and analytical framework.
    Classify(ClassifyArgs),
}

#[derive(Args, Debug)]
struct SequenceArgs {
    /// Number of image positions.
    #[arg(long)]
    images: usize,

    /// Video length in seconds; act breakpoints are rescaled to it.
    #[arg(long)]
    seconds: Option<f64>,

    /// Seed for a reproducible sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PromptsArgs {
    /// Scene list JSON.
    #[arg(long)]
    scenes: PathBuf,

    /// Accent color, verbatim.
    #[arg(long, conflicts_with_all = ["topic", "topic_text"])]
    accent: Option<String>,

    /// Topic category label (e.g. `warfare`, `old_money`).
    #[arg(long, conflicts_with = "topic_text")]
    topic: Option<String>,

    /// Free text to classify into a topic category.
    #[arg(long)]
    topic_text: Option<String>,

    /// Seed for a reproducible sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SyncArgs {
    /// Scene list JSON with narration excerpts.
    #[arg(long)]
    scenes: PathBuf,

    /// Word timestamps JSON.
    #[arg(long)]
    words: PathBuf,

    /// Narration audio file referenced by the manifest.
    #[arg(long)]
    audio: PathBuf,

    /// Directory holding the generated images.
    #[arg(long)]
    images_dir: PathBuf,

    /// Video identifier.
    #[arg(long)]
    video_id: String,

    /// Seed used when scenes still need sequencing.
    #[arg(long)]
    seed: Option<u64>,

    /// Output render config path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Title, hook or summary to classify.
    #[arg(long)]
    text: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => StoryframeConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => StoryframeConfig::default(),
    };

    match cli.cmd {
        Command::Sequence(args) => cmd_sequence(args, config),
        Command::Prompts(args) => cmd_prompts(args, config),
        Command::Sync(args) => cmd_sync(args, config),
        Command::Classify(args) => cmd_classify(args),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_sequence(args: SequenceArgs, mut config: StoryframeConfig) -> anyhow::Result<()> {
    if let Some(seconds) = args.seconds {
        config.sequencer.act_timestamps = config.sequencer.act_timestamps.scaled_to(seconds)?;
    }
    let out = storyframe::assign_styles(args.images, &config.sequencer, args.seed)?;

    let stats = storyframe::summarize(&out);
    eprintln!(
        "{} images: dossier {} / schema {} / echo {} ({} clusters), longest runs {}/{}/{}",
        stats.total,
        stats.dossier,
        stats.schema,
        stats.echo,
        stats.echo_clusters,
        stats.longest_dossier_run,
        stats.longest_schema_run,
        stats.longest_echo_run
    );
    eprintln!("fingerprint {}", storyframe::fingerprint_sequence(&out));

    emit_json(&out, args.out.as_deref())
}

fn cmd_prompts(args: PromptsArgs, config: StoryframeConfig) -> anyhow::Result<()> {
    let scenes = storyframe::load_scenes_from_path(&args.scenes)?;

    let category = match (&args.topic, &args.topic_text) {
        (Some(label), _) => Some(
            TopicCategory::parse(label)
                .with_context(|| format!("unknown topic category '{label}'"))?,
        ),
        (None, Some(text)) => KeywordTopicClassifier::default().classify(text),
        (None, None) => None,
    };
    let accent: AccentColor = storyframe::resolve_accent_color(args.accent.as_deref(), category);
    tracing::info!(accent = %accent, ?category, "accent color resolved");

    let prompts = storyframe::generate_prompts(&scenes, &accent, &config.sequencer, args.seed)?;
    emit_json(&prompts, args.out.as_deref())
}

fn cmd_sync(args: SyncArgs, config: StoryframeConfig) -> anyhow::Result<()> {
    let mut scenes = storyframe::load_scenes_from_path(&args.scenes)?;
    let words_file = std::fs::File::open(&args.words)
        .with_context(|| format!("open word timestamps '{}'", args.words.display()))?;
    let words = storyframe::load_words(std::io::BufReader::new(words_file))?;

    if !scenes.is_empty() && !scenes.iter().all(|s| s.is_sequenced()) {
        let plan = storyframe::assign_styles(scenes.len(), &config.sequencer, args.seed)?;
        for (scene, a) in scenes.iter_mut().zip(&plan) {
            scene.fill_from(a);
        }
    }

    let aligned = storyframe::align_scenes(&scenes, &words, &config.align)?;
    let report = storyframe::validate_alignment(&aligned);
    eprintln!(
        "alignment {:?}: {} scenes, avg score {:.3}, {} overlaps, {} gaps, {:.2}s",
        report.quality,
        report.total_scenes,
        report.avg_alignment_score,
        report.overlaps,
        report.large_gaps,
        report.total_duration
    );
    for issue in &report.issues {
        eprintln!("  - {issue}");
    }
    if report.quality == Quality::Failed {
        tracing::warn!("no scene matched the transcript; all timings are interpolated");
    }

    let render = storyframe::build_render_config(
        &args.video_id,
        &args.audio,
        &args.images_dir,
        &aligned,
        &config,
    )?;
    render.write_json(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let topic = KeywordTopicClassifier::default().classify(&args.text);
    let framework = KeywordFrameworkClassifier.classify(&args.text);
    let accent = storyframe::resolve_accent_color(None, topic);

    let out = serde_json::json!({
        "topic": topic,
        "accent_color": accent,
        "framework": framework,
    });
    emit_json(&out, None)
}

fn emit_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = std::fs::File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            let mut w = std::io::BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, value)
                .with_context(|| format!("write '{}'", path.display()))?;
            w.flush()
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, value).context("write stdout")?;
            writeln!(stdout).context("write stdout")?;
        }
    }
    Ok(())
}
