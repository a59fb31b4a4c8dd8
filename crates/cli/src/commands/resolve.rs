use crate::di::FaviconServices;
use anyhow::Context;
use favicon_domain::{FaviconImage, FaviconRequest};
use image::{ImageFormat, RgbaImage};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

#[derive(Serialize)]
struct ResolveReport<'a> {
    primary: &'a str,
    secondary: Option<&'a str>,
    resolved: bool,
    width: Option<u32>,
    height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    written_to: Option<&'a str>,
}

pub async fn run_resolve(
    services: &FaviconServices,
    primary: &str,
    secondary: Option<&str>,
    out: Option<&str>,
) -> anyhow::Result<bool> {
    let request = FaviconRequest::from_labels(Some(primary), secondary);
    let image = services.resolve_favicon.execute(&request).await;

    let written_to = match (&image, out) {
        (Some(image), Some(path)) => {
            write_png(image, Path::new(path))?;
            Some(path)
        }
        _ => None,
    };

    let stats = services.host_resolver.cache().stats();
    debug!(
        entries = stats.entries,
        hits = stats.hits,
        misses = stats.misses,
        "Icon cache"
    );

    let report = ResolveReport {
        primary,
        secondary,
        resolved: image.is_some(),
        width: image.as_ref().map(FaviconImage::width),
        height: image.as_ref().map(FaviconImage::height),
        written_to,
    };
    println!("{}", serde_json::to_string(&report)?);

    Ok(image.is_some())
}

fn write_png(image: &FaviconImage, path: &Path) -> anyhow::Result<()> {
    let buffer = RgbaImage::from_raw(image.width(), image.height(), image.rgba().to_vec())
        .context("Icon pixel buffer does not match its dimensions")?;
    buffer
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
