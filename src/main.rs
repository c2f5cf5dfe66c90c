//! Blogdeck CLI
//!
//! Terminal front-end for the blog backend:
//! - List, show, create, edit and delete posts
//! - Open any front-end location (`/blogs-details?id=3`)
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use blogdeck::api::HttpBlogClient;
use blogdeck::config::{generate_default_config, Config, Loaded};
use blogdeck::driver;
use blogdeck::model::{ImageUpload, PostId};
use blogdeck::route::Route;
use blogdeck::term;
use blogdeck::view::{
    DeleteOutcome, DetailState, DetailView, FieldUpdate, FormError, FormView, ListView,
    NoPreviews, SubmitOutcome,
};

#[derive(Parser)]
#[command(name = "blogdeck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Write and manage posts on a REST blog backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: searched in the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all posts, newest first
    List,

    /// Show one post
    Show {
        /// Post id
        id: String,
    },

    /// Create a post
    New {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        message: String,
        /// Cover image file (jpeg, png or gif)
        #[arg(long)]
        cover: Option<PathBuf>,
    },

    /// Edit a post; fields not given keep their stored values
    Edit {
        /// Post id
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        message: Option<String>,
        /// Replacement cover image file
        #[arg(long)]
        cover: Option<PathBuf>,
    },

    /// Delete a post
    Delete {
        /// Post id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Render a front-end location, e.g. "/blogs-details?id=3"
    Open {
        route: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Loaded {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::load_default(),
    };

    blogdeck::logging::init(&loaded.config.logging)?;
    loaded.report();

    let mut config = loaded.config;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let client = HttpBlogClient::from_config(&config.api)?;
    let base_url = config.api.base_url.clone();

    match cli.command {
        Commands::List => show_list(&client, &base_url).await,

        Commands::Show { id } => show_detail(&client, &base_url, Some(PostId::new(id))).await,

        Commands::New {
            title,
            message,
            cover,
        } => {
            let mut form = new_form(&base_url, None);
            form.update(FieldUpdate::Title(title));
            form.update(FieldUpdate::Message(message));
            if let Some(path) = cover {
                form.update(FieldUpdate::CoverImage(read_cover(&path)?));
            }
            report_submit(driver::submit_form(&mut form, &client).await)
        }

        Commands::Edit {
            id,
            title,
            message,
            cover,
        } => {
            let mut form = new_form(&base_url, Some(PostId::new(id)));
            driver::load_form(&mut form, &client).await;
            if let Some(banner) = form.banner().filter(|n| n.is_error()) {
                bail!("{}", banner.text);
            }

            if let Some(title) = title {
                form.update(FieldUpdate::Title(title));
            }
            if let Some(message) = message {
                form.update(FieldUpdate::Message(message));
            }
            if let Some(path) = cover {
                form.update(FieldUpdate::CoverImage(read_cover(&path)?));
            }
            report_submit(driver::submit_form(&mut form, &client).await)
        }

        Commands::Delete { id, yes } => {
            let mut list = ListView::new(base_url);
            driver::load_list(&mut list, &client).await;
            if let Some(banner) = list.banner() {
                bail!("{}", banner.text);
            }

            list.request_delete(PostId::new(id.as_str()));
            let Some(dialog) = list.dialog() else {
                bail!("No blog with id {}", id);
            };
            println!("{}", term::render_confirm(dialog));

            if !yes && !confirm()? {
                list.cancel_delete();
                println!("Cancelled");
                return Ok(());
            }

            match driver::confirm_delete(&mut list, &client).await {
                Some(DeleteOutcome::Removed(notice)) => {
                    println!("{}", term::render_notice(&notice));
                    Ok(())
                }
                Some(DeleteOutcome::Failed(notice)) => bail!("{}", notice.text),
                Some(DeleteOutcome::Stale) | None => bail!("Delete was not sent"),
            }
        }

        Commands::Open { route } => match Route::parse(&route) {
            Route::List => show_list(&client, &base_url).await,
            Route::Detail { id } => show_detail(&client, &base_url, id).await,
            Route::Form { id } => {
                let mut form = new_form(&base_url, id);
                driver::load_form(&mut form, &client).await;
                print!("{}", term::render_form(&form));
                Ok(())
            }
            Route::NotFound { path } => {
                println!("{}", term::render_not_found(&path));
                Ok(())
            }
        },

        Commands::Config { .. } => Ok(()),
    }
}

fn new_form(base_url: &str, id: Option<PostId>) -> FormView<ImageUpload> {
    FormView::new(base_url, id, Box::new(NoPreviews))
}

fn read_cover(path: &std::path::Path) -> anyhow::Result<ImageUpload> {
    let image = ImageUpload::from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if !image.is_accepted_type() {
        bail!(
            "Unsupported cover image type {} (use jpeg, png or gif)",
            image.content_type
        );
    }
    Ok(image)
}

async fn show_list(client: &HttpBlogClient, base_url: &str) -> anyhow::Result<()> {
    let mut list = ListView::new(base_url);
    driver::load_list(&mut list, client).await;
    if let Some(banner) = list.banner().filter(|n| n.is_error()) {
        bail!("{}", banner.text);
    }
    print!("{}", term::render_list(&list));
    Ok(())
}

async fn show_detail(
    client: &HttpBlogClient,
    base_url: &str,
    id: Option<PostId>,
) -> anyhow::Result<()> {
    let mut detail = DetailView::new(base_url, id);
    driver::load_detail(&mut detail, client).await;
    if let DetailState::Failed(message) = detail.state() {
        bail!("{}", message);
    }
    print!("{}", term::render_detail(&detail));
    Ok(())
}

fn report_submit(result: Result<SubmitOutcome, FormError>) -> anyhow::Result<()> {
    match result? {
        SubmitOutcome::Saved {
            notice,
            navigate_to,
        } => {
            println!("{}", term::render_notice(&notice));
            println!("Next: {}", navigate_to.href());
            Ok(())
        }
        SubmitOutcome::Failed(notice) => bail!("{}", notice.text),
        SubmitOutcome::Stale => bail!("Response arrived after the form was closed"),
    }
}

fn confirm() -> anyhow::Result<bool> {
    print!("Delete? [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
