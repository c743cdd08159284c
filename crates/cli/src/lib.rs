use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use folio_excerpt::ExcerptBuilder;
use folio_pagination::{compute_window, PageLabel};
use folio_theme::{Listing, Theme, ThemeSettings};
use std::io;
use std::path::PathBuf;

use crate::flags::LinkStyle;

mod flags;
mod input;

/// Print `text` and a newline; a reader that went away early is not an error
fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.write_all(b"\n"))
        .and_then(|()| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            log::debug!("stdout closed by reader");
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Render post excerpts, pagination and listing pages", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the excerpt of a post body (HTML from a file or stdin)
    Excerpt(ExcerptArgs),

    /// Print the pagination window for a page
    Pages(PagesArgs),

    /// Render a listing page (or a single post) as HTML
    Render(RenderArgs),
}

#[derive(Args)]
struct ExcerptArgs {
    /// Character budget
    #[arg(long, default_value_t = folio_excerpt::DEFAULT_BUDGET)]
    budget: usize,

    /// Post body file (stdin when omitted)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PagesArgs {
    /// Current page (1-indexed)
    #[arg(long)]
    current: usize,

    /// Last page of the query
    #[arg(long)]
    max: usize,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RenderArgs {
    /// JSON post page (`{"posts": [...], "current_page": N, "max_page": M}`) or post list
    #[arg(long)]
    posts: PathBuf,

    /// Theme settings (JSON or TOML)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Page to render when `--posts` is a full post list
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Render with the home page layout
    #[arg(long)]
    home: bool,

    /// Promoted category listing (JSON), repeatable
    #[arg(long)]
    promoted: Vec<PathBuf>,

    /// Render the first post as a single post instead of a listing
    #[arg(long, conflicts_with_all = ["home", "promoted"])]
    single: bool,

    /// Listing URL used for page links
    #[arg(long, default_value = "/")]
    base_url: String,

    /// Page link format
    #[arg(long, value_enum, default_value_t = LinkStyle::Query)]
    links: LinkStyle,

    /// URL prefix of the theme assets
    #[arg(long, default_value = "")]
    asset_base: String,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stderr clean when stdout carries JSON
    let json_output = match &cli.command {
        Commands::Excerpt(args) => args.json,
        Commands::Pages(args) => args.json,
        Commands::Render(_) => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Excerpt(args) => run_excerpt(args)?,
        Commands::Pages(args) => run_pages(args)?,
        Commands::Render(args) => run_render(args)?,
    }

    Ok(())
}

fn run_excerpt(args: ExcerptArgs) -> Result<()> {
    let builder = ExcerptBuilder::new(args.budget).context("Invalid --budget")?;
    let content = input::read_text(args.file.as_deref())?;
    let result = builder.build(&content);

    if args.json {
        print_stdout(&serde_json::to_string_pretty(&result)?)?;
    } else {
        print_stdout(&result.text)?;
    }
    Ok(())
}

fn run_pages(args: PagesArgs) -> Result<()> {
    if args.max <= 1 {
        log::info!("Single page listing, no pagination to show");
        return Ok(());
    }
    let labels = compute_window(args.current, args.max).context("Invalid page range")?;

    if args.json {
        print_stdout(&serde_json::to_string(&labels)?)?;
    } else {
        let line = labels
            .iter()
            .map(|label| match label {
                PageLabel::Page(page) if *page == args.current => format!("[{page}]"),
                PageLabel::Page(page) => page.to_string(),
                PageLabel::Ellipsis => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        print_stdout(&line)?;
    }
    Ok(())
}

fn run_render(args: RenderArgs) -> Result<()> {
    let settings = match &args.settings {
        Some(path) => ThemeSettings::from_path(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => ThemeSettings::default(),
    };
    let theme = Theme::init(settings)
        .context("Invalid theme settings")?
        .with_asset_base(args.asset_base.as_str());

    let page = input::load_page(&args.posts, theme.settings().posts_per_page, args.page)?;
    let mut ctx = theme.context();

    if args.single {
        let post = page
            .posts
            .first()
            .context("No post to render in --single mode")?;
        print_stdout(&ctx.render_single(post))?;
        return Ok(());
    }

    let promoted = args
        .promoted
        .iter()
        .map(|path| input::load_promoted(path))
        .collect::<Result<Vec<_>>>()?;
    let linker = args.links.linker(&args.base_url);

    let mut listing = Listing::new(&page, linker.as_ref()).home(args.home);
    for category in &promoted {
        listing = listing.promoted(category);
    }

    let rendered = ctx.render_listing(&listing)?;
    if rendered.posts_shown == 0 {
        log::warn!("No posts to render on page {}", page.current_page);
    } else {
        log::info!(
            "Rendered {} posts (page {}/{})",
            rendered.posts_shown,
            page.current_page,
            page.max_page.max(1)
        );
    }
    print_stdout(&rendered.html)?;
    Ok(())
}
