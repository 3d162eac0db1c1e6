use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::Style;
use mdpage::{ContentLoader, PageServerLoad, PostPage, RequestEvent};

fn parse_path(arg: &str) -> Result<PathBuf, std::io::Error> {
    let path = PathBuf::from(arg);
    match path.try_exists() {
        Ok(true) => Ok(path),
        Ok(false) => Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Path not found".to_string(),
        )),
        Err(e) => Err(e),
    }
}

#[derive(Parser, Debug)]
#[command(author, about, version)]
struct Cli {
    /// The project root the post path is resolved against
    #[arg(short, long, default_value = ".")]
    #[clap(value_parser = parse_path)]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the page data the template receives, as JSON
    Data {},
    /// Print the post text under a header
    Render {},
}

async fn run(args: Cli) -> Result<()> {
    let loader = ContentLoader::new(args.root);
    let path = loader.document_path();
    let page = PostPage::new(loader);

    let data = page
        .load(&RequestEvent::new("/"))
        .await
        .with_context(|| format!("failed to load {}", path.display()))?;

    match args.command {
        Commands::Data {} => {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Commands::Render {} => {
            let header = Style::new().bold().dim();
            let title = format!(" {} ", path.display());
            println!("{}", header.apply_to(format!("{title:-^80}")));
            print!("{}", data.md_text);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mdpage=info".parse()?),
        )
        .init();

    let args = Cli::parse();
    tracing::info!("Root: {}", args.root.display());

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::new().red().bold().apply_to("error:"));
        std::process::exit(1);
    }
    Ok(())
}
