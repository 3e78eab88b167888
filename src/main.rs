//! Newswire - read news from the backend API on the command line
//!
//! Loads configuration from the environment, applies CLI overrides, and
//! dispatches one backend read per invocation. Repeated reads within the
//! cache TTL are served from memory.

use std::process::ExitCode;

use clap::Parser;
use futures::future::try_join;

use newswire::cli::{Cli, Command};
use newswire::client::ApiClient;
use newswire::config::Config;
use newswire::data::{Article, ArticleSummary, Category};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.apply_to(Config::from_env()?);
    let client = ApiClient::new(config)?;

    match &cli.command {
        Command::Headlines { category, limit } => {
            // Categories resolve slugs to display names; fetch both at once.
            let (articles, categories) = try_join(
                client.latest_articles(category.as_deref(), *limit),
                client.categories(),
            )
            .await?;
            print_listing(&articles, &categories);
        }
        Command::Article { slug } => {
            let article = client.article_by_slug(slug).await?;
            print_article(&article);
        }
        Command::Categories => {
            let categories = client.categories().await?;
            for category in &categories {
                match &category.description {
                    Some(description) => {
                        println!("{} ({}): {}", category.name, category.slug, description)
                    }
                    None => println!("{} ({})", category.name, category.slug),
                }
            }
        }
        Command::Search { query, limit } => {
            let results = client.search_articles(query, *limit).await?;
            if results.is_empty() {
                println!("No articles matched '{query}'.");
            } else {
                print_listing(&results, &[]);
            }
        }
    }

    Ok(())
}

fn print_listing(articles: &[ArticleSummary], categories: &[Category]) {
    for article in articles {
        let category_name = categories
            .iter()
            .find(|category| category.slug == article.category)
            .map(|category| category.name.as_str())
            .unwrap_or(article.category.as_str());

        println!(
            "{}  [{}]  {}",
            article.published_at.format("%Y-%m-%d %H:%M"),
            category_name,
            article.title
        );
        println!("    {}", article.summary);
        println!("    read with: newswire article {}", article.slug);
    }
}

fn print_article(article: &Article) {
    println!("{}", article.title);
    match &article.author {
        Some(author) => println!(
            "by {} | {} | {}",
            author,
            article.category,
            article.published_at.format("%Y-%m-%d %H:%M")
        ),
        None => println!(
            "{} | {}",
            article.category,
            article.published_at.format("%Y-%m-%d %H:%M")
        ),
    }
    println!();
    println!("{}", article.body);
}
