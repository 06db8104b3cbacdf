use std::{
    io::{self, Stdout},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    process::ExitCode,
};

use archive::{
    constants::{DEFAULT_ARCHIVE_PATH, DEFAULT_ART_DIR},
    find_by_date, most_recent, ArchiveError, ArtStore, FileArchive, PostArchive, QueryError,
};
use clap::{Parser, Subcommand};
use player::{pick, DisplayMode, PresentError, Presenter, DEFAULT_WORDS_PER_PAGE};
use renderer::RenderConfig;
use structures::Post;

mod publish;
mod terminal;

use crate::publish::{publish, Published, PublishError};
use crate::terminal::TerminalControls;

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];
const TEXT_EXTENSIONS: [&str; 1] = ["txt"];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Line-delimited post archive
    #[arg(long, global = true, env = "MICROBLOG_ARCHIVE", default_value = DEFAULT_ARCHIVE_PATH)]
    archive: PathBuf,
    /// Where color art files are kept
    #[arg(long, global = true, env = "MICROBLOG_ART_DIR", default_value = DEFAULT_ART_DIR)]
    art_dir: PathBuf,
    /// Words shown before waiting for Enter
    #[arg(long, global = true, default_value_t = DEFAULT_WORDS_PER_PAGE)]
    words_per_page: NonZeroUsize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Publish an image, a text file, or both
    Post {
        /// .jpg, .jpeg, .png or .bmp
        #[arg(long, value_parser = image_file, required_unless_present = "text")]
        image: Option<PathBuf>,
        /// .txt
        #[arg(long, value_parser = text_file, required_unless_present = "image")]
        text: Option<PathBuf>,
    },
    /// Number the posts, optionally only those of one day
    List {
        /// YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show one post by its number in `list`
    Show {
        number: usize,
        #[arg(short, long)]
        date: Option<String>,
        /// A (ASCII), N (ANSI) or T (text only)
        #[arg(short, long, default_value = "T")]
        mode: DisplayMode,
    },
    /// Show posts one after another, pausing every few posts
    Replay {
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long, default_value = "T")]
        mode: DisplayMode,
    },
    /// Show the most recent post
    Recent {
        #[arg(short, long, default_value = "T")]
        mode: DisplayMode,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Publish(#[from] PublishError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error(transparent)]
    Present(#[from] PresentError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut archive = FileArchive::open(&cli.archive);

    match cli.command {
        Commands::Post { image, text } => {
            let store = ArtStore::new(&cli.art_dir);
            let published = publish(
                &mut archive,
                &store,
                &RenderConfig::default(),
                image.as_deref(),
                text.as_deref(),
            )?;
            print_published(&published);
        }
        Commands::List { date } => {
            let posts = archive.load()?;
            let listing = select(&posts, date.as_deref());
            if listing.is_empty() {
                println!("{}", nothing_found(date.as_deref()));
                return Ok(());
            }
            presenter(cli.words_per_page).index(listing)?;
        }
        Commands::Show { number, date, mode } => {
            let posts = archive.load()?;
            let listing = select(&posts, date.as_deref());
            if listing.is_empty() {
                println!("{}", nothing_found(date.as_deref()));
                return Ok(());
            }
            let post = pick(&listing, number)?;
            let mut presenter = presenter(cli.words_per_page);
            presenter.header(post)?;
            presenter.display(post, mode)?;
        }
        Commands::Replay { date, mode } => {
            let posts = archive.load()?;
            let listing = select(&posts, date.as_deref());
            if listing.is_empty() {
                println!("{}", nothing_found(date.as_deref()));
                return Ok(());
            }
            let summary = presenter(cli.words_per_page).replay(listing, mode)?;
            log::info!(
                "replayed {} posts ({} without art, {} skipped)",
                summary.shown + summary.art_unavailable,
                summary.art_unavailable,
                summary.skipped
            );
        }
        Commands::Recent { mode } => {
            let posts = archive.load()?;
            let post = match most_recent(&posts) {
                Ok(post) => post,
                Err(QueryError::EmptyCollection) => {
                    println!("{}", nothing_found(None));
                    return Ok(());
                }
            };
            let mut presenter = presenter(cli.words_per_page);
            presenter.header(post)?;
            presenter.display(post, mode)?;
        }
    }

    Ok(())
}

fn presenter(
    words_per_page: NonZeroUsize,
) -> Presenter<Stdout, TerminalControls<io::StdinLock<'static>, Stdout>> {
    Presenter::new(
        io::stdout(),
        TerminalControls::new(io::stdin().lock(), io::stdout()),
    )
    .with_words_per_page(words_per_page)
}

fn select<'a>(posts: &'a [Post], date: Option<&str>) -> Vec<&'a Post> {
    match date {
        Some(date) => find_by_date(posts, date),
        None => posts.iter().collect(),
    }
}

fn nothing_found(date: Option<&str>) -> &'static str {
    match date {
        Some(_) => "No posts found for this date.",
        None => "No posts available.",
    }
}

fn print_published(published: &Published) {
    for post in &published.posts {
        log::info!("archived {} post {}", post.kind(), post.timestamp);
    }
    if let Some(art) = &published.character_art {
        println!("\n--- ASCII Art ---\n");
        println!("{}", art);
    }
    if let Some(path) = &published.color_art_path {
        println!("\nANSI Art saved at: {}", path.display());
    }
    if !published.text.is_empty() {
        println!("\nText from the blog post:");
        println!("{}", published.text);
    }
}

fn image_file(s: &str) -> Result<PathBuf, String> {
    existing_file_with_extension(s, &IMAGE_EXTENSIONS)
}

fn text_file(s: &str) -> Result<PathBuf, String> {
    existing_file_with_extension(s, &TEXT_EXTENSIONS)
}

fn existing_file_with_extension(s: &str, extensions: &[&str]) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if !path.is_file() {
        return Err(format!("{} does not exist", s));
    }
    if !has_extension(&path, extensions) {
        return Err(format!("supported types: .{}", extensions.join(", .")));
    }
    Ok(path)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .map_or(false, |ext| extensions.contains(&ext.as_str()))
}
