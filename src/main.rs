use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use apod::{ApodClient, Fetched, HdImage};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Fetch NASA's Astronomy Picture Of the Day
#[derive(Parser, Debug)]
struct Args {
    /// Day of the picture in `YYYY-MM-DD` format, today if omitted
    #[clap(long, conflicts_with = "download")]
    date: Option<NaiveDate>,

    /// Ask for the high definition url as well
    #[clap(long)]
    hd: bool,

    /// Save today's high definition image to this file or directory
    #[clap(long)]
    download: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    init_logging();

    let args = Args::parse();
    let client = ApodClient::new();

    match args.download {
        Some(path) => download(&client, &path).await,
        None => show(&client, args.date, args.hd).await,
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_env("APOD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt)
        .with(env_filter)
        .init();
}

async fn show(client: &ApodClient, date: Option<NaiveDate>, hd: bool) -> Result<()> {
    let Fetched { apod, archive_url } = client.fetch(date, hd).await?;

    println!("{} ({})", apod.title, apod.date);

    if let Some(copyright) = apod.copyright.as_deref().filter(|c| !c.is_empty()) {
        println!("Copyright: {}", copyright.trim());
    }

    println!("Url: {}", apod.url);

    if let Some(hd_url) = &apod.hd_url {
        println!("HD url: {hd_url}");
    }

    println!("Archive: {archive_url}");
    println!();
    println!("{}", apod.explanation);

    Ok(())
}

async fn download(client: &ApodClient, path: &Path) -> Result<()> {
    println!("Getting image");

    let HdImage {
        date,
        explanation,
        image,
        content_type,
        archive_url,
    } = client.fetch_hd().await?;

    let path = if path.is_dir() {
        path.join(format!("apod-{date}.{}", extension(content_type.as_deref())?))
    } else {
        path.to_path_buf()
    };

    tokio::fs::write(&path, &image)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Saved {} bytes to {}", image.len(), path.display());
    println!("Archive: {archive_url}");
    println!();
    println!("{explanation}");

    Ok(())
}

fn extension(content_type: Option<&str>) -> Result<&'static str> {
    let ext = match content_type {
        Some("image/jpeg") => "jpg",
        Some("image/png") => "png",
        Some("image/gif") => "gif",
        Some(content_type) => bail!("Unsupported media type: `{content_type}`"),
        None => bail!("Missing content-type header"),
    };

    Ok(ext)
}
