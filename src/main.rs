use clap::{Parser, Subcommand};
use inkpress::articles::BuildMode;
use inkpress::{build, config, output, scaffold};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{}+{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(about = "Static blog generator with offline-first PWA output")]
#[command(long_about = "\
Static blog generator with offline-first PWA output

Markdown articles with YAML frontmatter go in; a deployable static site
comes out: HTML pages, sitemap and RSS feeds, a web app manifest, and a
versioned service worker for offline reading.

Project structure:

  site.toml                        # Site config (optional, gen-config prints a stock one)
  content/
  ├── my-first-article.md          # One article per file, named by slug
  └── another-article.md
  css/, img/, robots.txt, ...      # Static assets listed in site.toml → copied to output

Article frontmatter:

  ---
  slug: \"my-first-article\"
  title: \"Example Blog | My First Article | Blog Post\"
  headline: \"My First Article\"
  description: \"What this article is about\"
  date: \"2023-06-15\"
  draft: true                      # excluded unless --drafts is passed
  ---

Run 'inkpress gen-config' to print a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project root (site.toml and static assets)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Article source directory
    #[arg(long, default_value = "content", global = true)]
    content: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Shared flag for commands that read the article collection.
#[derive(clap::Args, Clone)]
struct DraftArgs {
    /// Include draft-flagged articles
    #[arg(long)]
    drafts: bool,
}

impl DraftArgs {
    fn mode(&self) -> BuildMode {
        if self.drafts {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Build the full site: pages, feeds, and PWA artifacts
    Build(DraftArgs),
    /// Validate content and config without writing output
    Check(DraftArgs),
    /// Scaffold a new article from a title
    New {
        /// Article title (free text; becomes the slugified filename)
        title: Vec<String>,
    },
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(draft_args) => {
            let config = config::load_config(&cli.root)?;
            let summary = build::build(
                &cli.root,
                &cli.content,
                &cli.output,
                &config,
                draft_args.mode(),
            )?;
            output::print_build_output(&summary);
            println!("Site generated at {}", cli.output.display());
        }
        Command::Check(draft_args) => {
            let config = config::load_config(&cli.root)?;
            let articles = build::check(&cli.content, &config, draft_args.mode())?;
            output::print_check_output(&articles);
            println!("Content is valid");
        }
        Command::New { title } => {
            if title.is_empty() {
                eprintln!("Usage: inkpress new \"My Article Title\"");
                std::process::exit(1);
            }
            let config = config::load_config(&cli.root)?;
            let title = title.join(" ");
            let path = scaffold::create_article(&cli.content, &title, &config)?;
            println!("Created new article: {}", path.display());
            println!();
            println!("Next steps:");
            println!("1. Edit the frontmatter (description, keywords, image, sections)");
            println!("2. Write your article in Markdown");
            println!("3. Set draft: false when ready to publish");
            println!("4. Run 'inkpress build --drafts' to preview with drafts");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
