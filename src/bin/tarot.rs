use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use tarot::{
    App, CardId, Dictionary, FilePreferenceStore, Language, LanguageContext,
    MemoryPreferenceStore, PanelView, PreferenceStore, Scene, SceneConfig, Viewport,
};

#[derive(Parser, Debug)]
#[command(name = "tarot", version)]
struct Cli {
    /// Scene config JSON (seed, deal timing, decay rates).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language preference file.
    #[arg(long, global = true, default_value = "tarot-prefs.json")]
    prefs: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint every card face and write them as PNGs.
    Textures(TexturesArgs),
    /// Run the scene headless and print one JSON line per frame.
    Simulate(SimulateArgs),
    /// Print the overlay panel of a section.
    Panel(PanelArgs),
    /// Show or change the stored language preference.
    Lang(LangArgs),
}

#[derive(Args, Debug)]
struct TexturesArgs {
    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Seed; overrides the config.
    #[arg(long)]
    seed: Option<u64>,

    /// Label language; defaults to the stored preference, then the locale.
    #[arg(long)]
    lang: Option<Language>,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Number of frames.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Cards to click, spread evenly over the run.
    #[arg(long = "select")]
    select: Vec<CardId>,

    /// Seed; overrides the config.
    #[arg(long)]
    seed: Option<u64>,

    /// Label language.
    #[arg(long)]
    lang: Option<Language>,
}

#[derive(Args, Debug)]
struct PanelArgs {
    /// Section to open.
    #[arg(long)]
    section: CardId,

    /// Panel language.
    #[arg(long)]
    lang: Option<Language>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
#[group(multiple = false)]
struct LangArgs {
    /// Store this language.
    #[arg(long)]
    set: Option<Language>,

    /// Store the other language.
    #[arg(long)]
    toggle: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => SceneConfig::from_json_file(path)
            .with_context(|| format!("load scene config '{}'", path.display()))?,
        None => SceneConfig::default(),
    };

    match cli.cmd {
        Command::Textures(args) => cmd_textures(&cli.prefs, config, args),
        Command::Simulate(args) => cmd_simulate(&cli.prefs, config, args),
        Command::Panel(args) => cmd_panel(&cli.prefs, args),
        Command::Lang(args) => cmd_lang(&cli.prefs, args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn host_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|k| std::env::var(k).ok())
        .find(|v| !v.is_empty())
}

fn language_context(
    prefs: &Path,
    forced: Option<Language>,
) -> anyhow::Result<LanguageContext> {
    let dictionary = Dictionary::embedded().context("load embedded translations")?;
    let store: Box<dyn PreferenceStore> = match forced {
        // A forced language must not overwrite the user's stored choice.
        Some(lang) => {
            let mut mem = MemoryPreferenceStore::new();
            mem.set(tarot::LANGUAGE_KEY, lang.code())?;
            Box::new(mem)
        }
        None => Box::new(FilePreferenceStore::new(prefs)),
    };
    Ok(LanguageContext::init(store, host_locale().as_deref(), dictionary))
}

fn cmd_textures(prefs: &Path, mut config: SceneConfig, args: TexturesArgs) -> anyhow::Result<()> {
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.headless = false;
    let ctx = language_context(prefs, args.lang)?;
    let seed = config.resolve_seed();
    let scene = Scene::mount(seed, ctx.t(), config.scene_opts()).context("mount scene")?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    for card in scene.cards() {
        let textures = card
            .textures
            .as_ref()
            .context("scene mounted without textures")?;
        for (face, tex) in [("front", &textures.front), ("back", &textures.back)] {
            let path = args.out.join(format!("{}_{face}.png", card.def.id));
            tex.save_png(&path)
                .with_context(|| format!("write png '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
    }
    eprintln!("seed {seed}");
    Ok(())
}

fn cmd_simulate(prefs: &Path, mut config: SceneConfig, args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "--fps must be a positive number"
    );
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.headless = true;
    let viewport = Viewport::new(args.width, args.height)?;
    let ctx = language_context(prefs, args.lang)?;
    let mut app = App::new(&config, ctx).context("mount scene")?;

    let clicks = click_schedule(&args.select, args.frames);
    let dt = 1.0 / args.fps;
    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    for frame in 0..args.frames {
        for (_, id) in clicks.iter().filter(|(at, _)| *at == frame) {
            app.click(*id);
        }
        let f = app.tick(if frame == 0 { 0.0 } else { dt }, viewport);
        serde_json::to_writer(&mut out, &f.scene).context("serialize frame")?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Frame index of each click, spread evenly over the run.
fn click_schedule(select: &[CardId], frames: u64) -> Vec<(u64, CardId)> {
    let slots = select.len() as u64 + 1;
    select
        .iter()
        .enumerate()
        .map(|(i, id)| ((i as u64 + 1) * frames / slots, *id))
        .collect()
}

fn cmd_panel(prefs: &Path, args: PanelArgs) -> anyhow::Result<()> {
    let ctx = language_context(prefs, args.lang)?;
    let view = PanelView::project(Some(args.section), ctx.t());
    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &view).context("serialize panel")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", view.render_text())?;
    }
    Ok(())
}

fn cmd_lang(prefs: &Path, args: LangArgs) -> anyhow::Result<()> {
    let mut ctx = language_context(prefs, None)?;
    if let Some(lang) = args.set {
        ctx.set_language(lang)
            .with_context(|| format!("store language in '{}'", prefs.display()))?;
    } else if args.toggle {
        ctx.toggle()
            .with_context(|| format!("store language in '{}'", prefs.display()))?;
    }
    println!("{}", ctx.language());
    Ok(())
}
