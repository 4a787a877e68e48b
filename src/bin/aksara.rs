use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use aksara::{
    AppConfig, AttemptResult, Catalog, CatalogKind, Classifier as _, EncodedImage, OrphanPolicy,
    Point, ReferenceGlyph, SessionStats, ShareCard, StrokeCanvas, Transliterator, validate_name,
};

#[derive(Parser, Debug)]
#[command(name = "aksara", version, about = "Batak script practice tools")]
struct Cli {
    /// JSON configuration file (`AKSARA_*` environment variables override it).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog symbols and their reference glyphs.
    Catalog {
        /// Include the diacritic marks.
        #[arg(long)]
        extended: bool,
    },
    /// Validate a name and show how it is written.
    CheckName(CheckNameArgs),
    /// Replay recorded strokes into a canvas and export it as PNG.
    Draw(DrawArgs),
    /// Send a drawing to the configured classifier.
    Classify(ClassifyArgs),
    /// Render a challenge score card as JPEG.
    ShareChallenge(ShareChallengeArgs),
}

#[derive(Parser, Debug)]
struct CheckNameArgs {
    name: String,

    /// Use the extended catalog (vowel and killer diacritics).
    #[arg(long)]
    extended: bool,

    /// Fail on consonants that cannot start a syllable instead of writing them dead.
    #[arg(long)]
    reject_orphans: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct DrawArgs {
    /// JSON array of strokes, each an array of `[x, y]` surface points.
    #[arg(long)]
    strokes: PathBuf,

    /// Output PNG (strokes only).
    #[arg(long)]
    out: PathBuf,

    /// Reference glyph shown behind the strokes in the preview.
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Output PNG of the displayed view (strokes with the reference overlay).
    #[arg(long)]
    preview: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// PNG or JPEG drawing.
    #[arg(long)]
    image: PathBuf,

    /// Expected label; prints a scored attempt instead of the raw prediction.
    #[arg(long)]
    expected: Option<String>,
}

#[derive(Parser, Debug)]
struct ShareChallengeArgs {
    #[arg(long)]
    correct: u32,

    #[arg(long)]
    total: u32,

    /// Seconds played.
    #[arg(long, default_value_t = 60)]
    seconds: u32,

    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;
    match cli.cmd {
        Command::Catalog { extended } => cmd_catalog(&cfg, extended),
        Command::CheckName(args) => cmd_check_name(&cfg, args),
        Command::Draw(args) => cmd_draw(&cfg, args),
        Command::Classify(args) => cmd_classify(&cfg, args),
        Command::ShareChallenge(args) => cmd_share_challenge(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("AKSARA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_catalog(cfg: &AppConfig, extended: bool) -> anyhow::Result<()> {
    let kind = if extended {
        CatalogKind::Extended
    } else {
        CatalogKind::Base
    };
    for c in Catalog::of(kind).iter() {
        println!(
            "{:<4} {:<10} {}",
            c.label,
            format!("{:?}", c.kind).to_lowercase(),
            c.resolve_reference(&cfg.assets_root).display()
        );
    }
    Ok(())
}

fn cmd_check_name(cfg: &AppConfig, args: CheckNameArgs) -> anyhow::Result<()> {
    let catalog = if args.extended {
        CatalogKind::Extended
    } else {
        CatalogKind::Base
    };
    let orphans = if args.reject_orphans {
        OrphanPolicy::Reject
    } else {
        OrphanPolicy::DeadConsonant
    };
    let t = Transliterator::new(catalog, orphans);
    let report = validate_name(&args.name, &t, cfg.session.max_syllables);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (rule, passed) in report.checklist() {
            println!("[{}] {rule}", if passed { "x" } else { " " });
        }
    }

    let Ok(plan) = report.into_transliteration() else {
        anyhow::bail!("'{}' cannot be written yet", args.name);
    };
    if !args.json {
        println!();
        for s in &plan.syllables {
            let mark = s.mapping.diacritic.unwrap_or("");
            let dead = if s.dead { " (dead)" } else { "" };
            println!("{:<4} -> {}{}{dead}", s.text, s.symbol(), mark);
        }
    }
    Ok(())
}

fn cmd_draw(cfg: &AppConfig, args: DrawArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.strokes)
        .with_context(|| format!("read strokes '{}'", args.strokes.display()))?;
    let strokes: Vec<Vec<[f64; 2]>> =
        serde_json::from_str(&text).with_context(|| "parse strokes JSON")?;

    let mut canvas = StrokeCanvas::new();
    canvas.initialize(cfg.canvas.options())?;
    for stroke in &strokes {
        let mut points = stroke.iter().map(|&[x, y]| Point::new(x, y));
        let Some(first) = points.next() else {
            continue;
        };
        canvas.begin_stroke(first);
        for p in points {
            canvas.extend_stroke(p);
        }
        canvas.end_stroke();
    }

    if let Some(path) = &args.reference {
        let glyph = ReferenceGlyph::load(path)?;
        canvas.show_reference(&glyph, cfg.canvas.reference_opacity)?;
    }

    let png = canvas
        .export_image()
        .context("canvas produced no image")?;
    write_file(&args.out, &png.bytes)?;
    eprintln!(
        "wrote {} ({} strokes, empty: {})",
        args.out.display(),
        canvas.stroke_count(),
        canvas.is_empty()
    );

    if let Some(path) = &args.preview {
        let view = canvas.preview().context("canvas produced no preview")?;
        let (w, h) = view.dimensions();
        let encoded = EncodedImage::png_from_rgba(w, h, view.into_raw())?;
        write_file(path, &encoded.bytes)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_classify(cfg: &AppConfig, args: ClassifyArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("read image '{}'", args.image.display()))?;
    let image = EncodedImage::from_encoded(bytes)?;
    let classifier = aksara::RemoteClassifier::new(&cfg.classifier)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let outcome = rt.block_on(classifier.classify(&image));

    match args.expected {
        Some(expected) => {
            let attempt = AttemptResult::from_outcome(&expected, &outcome);
            println!("{}", serde_json::to_string_pretty(&attempt)?);
        }
        None => {
            let attempt = AttemptResult::from_outcome("", &outcome);
            let json = serde_json::json!({
                "label": attempt.predicted_label,
                "confidence": attempt.confidence,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

fn cmd_share_challenge(args: ShareChallengeArgs) -> anyhow::Result<()> {
    if args.correct > args.total {
        anyhow::bail!("--correct cannot exceed --total");
    }
    let stats = SessionStats {
        correct_count: args.correct,
        total_count: args.total,
        elapsed_seconds: args.seconds,
    };
    let card = ShareCard::challenge(&stats, args.seconds);
    let jpeg = card.to_jpeg()?;
    write_file(&args.out, &jpeg.bytes)?;
    eprintln!("wrote {}", args.out.display());
    println!("{}", card.share_text());
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}
