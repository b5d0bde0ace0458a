use clap::{Args, Parser, Subcommand, ValueEnum};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use tategaki::app::services::import::import_text_file;
use tategaki::{
    AppError, EditorController, EditorSettings, FileStore, PageMetrics, SettingsPatch,
    SnapshotStore, TemplateKey, WritingMode, paginate,
};

#[derive(Parser)]
#[command(name = "tategaki", version, about = "Lay out manuscripts onto vertical or horizontal pages")]
struct Cli {
    /// State file to use instead of the platform data directory
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Paginate a text file, or the stored document when no file is given
    Paginate {
        file: Option<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Print the page grid for the stored settings plus any overrides
    Metrics {
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Import a .txt file into the stored document
    Import { file: PathBuf },
    /// Replace the stored document with a template
    Template { key: String },
    /// List available templates
    Templates,
    /// Print the stored document's pages
    Show,
    /// Store layout settings for the document
    Set {
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Vertical,
    Horizontal,
}

impl From<ModeArg> for WritingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Vertical => WritingMode::Vertical,
            ModeArg::Horizontal => WritingMode::Horizontal,
        }
    }
}

#[derive(Args, Default)]
struct LayoutArgs {
    /// Writing mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Font size in pixels
    #[arg(long)]
    font_size: Option<f64>,
    /// Line height as a multiple of the font size
    #[arg(long)]
    line_height: Option<f64>,
    /// Paper width in millimeters
    #[arg(long)]
    paper_width: Option<f64>,
    /// Paper height in millimeters
    #[arg(long)]
    paper_height: Option<f64>,
    /// All four margins in millimeters
    #[arg(long)]
    margin: Option<f64>,
}

impl LayoutArgs {
    fn to_patch(&self) -> SettingsPatch {
        let mut patch = match self.margin {
            Some(margin) => SettingsPatch::margins(margin),
            None => SettingsPatch::default(),
        };
        patch.writing_mode = self.mode.map(WritingMode::from);
        patch.font_size = self.font_size;
        patch.line_height = self.line_height;
        patch.paper_width = self.paper_width;
        patch.paper_height = self.paper_height;
        patch
    }

    fn resolve(&self, base: &EditorSettings) -> EditorSettings {
        let mut settings = base.clone();
        settings.apply_patch(&self.to_patch());
        settings
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let store = match cli.state {
        Some(path) => FileStore::new(path),
        None => FileStore::default_location(),
    };

    match cli.command {
        CliCommand::Paginate { file, layout } => {
            let stored = store.load_or_default();
            let settings = layout.resolve(&stored.settings);
            let content = match file {
                Some(path) => import_text_file(&path)?,
                None => stored.content,
            };
            print_pages(&paginate(&content, &settings));
        }
        CliCommand::Metrics { layout } => {
            let settings = layout.resolve(&store.load_or_default().settings);
            let metrics = PageMetrics::resolve(&settings);
            println!("writing mode:     {:?}", settings.writing_mode);
            println!("chars per line:   {}", metrics.chars_per_line);
            println!("lines per page:   {}", metrics.lines_per_page);
            println!("chars per page:   {}", metrics.chars_per_page());
        }
        CliCommand::Import { file } => {
            let mut controller = EditorController::restore(store);
            controller.import_file(&file, Instant::now())?;
            controller.flush()?;
            println!("Imported {} ({} pages)", file.display(), controller.pages().len());
        }
        CliCommand::Template { key } => {
            let key = TemplateKey::parse(&key)
                .ok_or_else(|| AppError::Template(format!("unknown template: {}", key)))?;
            let mut controller = EditorController::restore(store);
            controller.load_template(key, Instant::now());
            controller.flush()?;
            println!("Loaded template {}", key.template().label);
        }
        CliCommand::Templates => {
            for key in TemplateKey::all() {
                let template = key.template();
                println!("{:<16} {}  {}", key.as_str(), template.label, template.description);
            }
        }
        CliCommand::Show => {
            let controller = EditorController::restore(store);
            print_pages(&controller.pages());
        }
        CliCommand::Set { layout } => {
            let mut controller = EditorController::restore(store);
            if controller.update_settings(layout.to_patch(), Instant::now()) {
                controller.flush()?;
            }
            let metrics = controller.metrics();
            println!(
                "{:?}: {} chars x {} lines per page",
                controller.settings().writing_mode,
                metrics.chars_per_line,
                metrics.lines_per_page
            );
        }
    }

    Ok(())
}

fn print_pages(pages: &[String]) {
    let total = pages.len();
    for (i, page) in pages.iter().enumerate() {
        println!("--- page {}/{} ---", i + 1, total);
        println!("{}", page);
    }
}
