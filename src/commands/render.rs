//! Render the page once and write it to the output file

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::Site;

/// Render to the configured output path
pub async fn run(site: &Site) -> Result<PathBuf> {
    let output = site.output_path.clone();
    run_to(site, &output).await?;
    Ok(output)
}

/// Render to an explicit output path, creating parent directories
pub async fn run_to(site: &Site, output: &Path) -> Result<()> {
    let start = std::time::Instant::now();

    let html = site.render_page().await?;

    if let Some(parent) = output.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output, html)
        .await
        .with_context(|| format!("Failed to write {:?}", output))?;

    tracing::info!("Rendered {:?} in {:?}", output, start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_render_writes_output() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(
            dir.path().join("index.html"),
            r#"<html><head><meta name="keywords" content="old"></head><body></body></html>"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("content/site-settings.md"),
            "---\nkeywords: [\"a\", \"b\"]\n---\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let output = run(&site).await.unwrap();

        assert_eq!(output, dir.path().join("public/index.html"));
        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains(r#"content="a,b""#));
    }

    #[tokio::test]
    async fn test_render_without_content_keeps_template() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("index.html"),
            "<html><head><title>Untouched</title></head><body></body></html>",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let output = dir.path().join("out/nested/page.html");
        run_to(&site, &output).await.unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains("<title>Untouched</title>"));
    }
}
