//! File-system side of a site build: clearing the output, copying static
//! assets and writing one page per markdown file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use marksite_config::Config;
use marksite_engine::render_page;

/// Runs a full build and returns the number of pages written.
pub(crate) fn build(config: &Config) -> Result<usize> {
    reset_dir(&config.output_dir)?;

    if config.static_dir.is_dir() {
        let copied = copy_tree(&config.static_dir, &config.output_dir)?;
        log::info!(
            "Copied {copied} static files from {}",
            config.static_dir.display()
        );
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            config.static_dir.display()
        );
    }

    let template = fs::read_to_string(&config.template_path)
        .with_context(|| format!("reading template {}", config.template_path.display()))?;
    generate_pages(config, &template)
}

/// Removes `dir` if present and recreates it empty.
pub(crate) fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("clearing {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))
}

/// Recursively copies every file under `src` into `dest`, creating
/// directories as needed. Returns the number of files copied.
pub(crate) fn copy_tree(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        bail!("source {} must be a directory", src.display());
    }
    fs::create_dir_all(dest).with_context(|| format!("creating {}", dest.display()))?;

    let mut copied = 0;
    for entry in fs::read_dir(src).with_context(|| format!("reading {}", src.display()))? {
        let path = entry?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if path.is_dir() {
            copied += copy_tree(&path, &target)?;
        } else if path.is_file() {
            fs::copy(&path, &target).with_context(|| {
                format!("copying {} to {}", path.display(), target.display())
            })?;
            log::info!("Copied {}", target.display());
            copied += 1;
        }
    }
    Ok(copied)
}

/// Lists every `.md` file under `dir`, sorted.
pub(crate) fn scan_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    scan_directory_recursive(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }
    Ok(())
}

/// Where the page for `source` lands: same relative path, `.html` extension.
pub(crate) fn page_destination(
    source: &Path,
    content_dir: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let relative = source.strip_prefix(content_dir).with_context(|| {
        format!("{} is outside {}", source.display(), content_dir.display())
    })?;
    Ok(output_dir.join(relative).with_extension("html"))
}

fn generate_pages(config: &Config, template: &str) -> Result<usize> {
    if !config.content_dir.is_dir() {
        bail!(
            "content directory {} not found",
            config.content_dir.display()
        );
    }
    let sources = scan_markdown_files(&config.content_dir)?;
    if sources.is_empty() {
        bail!(
            "content directory {} has no markdown files",
            config.content_dir.display()
        );
    }

    for source in &sources {
        let dest = page_destination(source, &config.content_dir, &config.output_dir)?;
        log::info!("Generating {} from {}", dest.display(), source.display());

        let markdown = fs::read_to_string(source)
            .with_context(|| format!("reading {}", source.display()))?;
        let page = render_page(&markdown, template, &config.wrapper_tag, &config.base_path)
            .with_context(|| format!("rendering {}", source.display()))?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, page).with_context(|| format!("writing {}", dest.display()))?;
    }
    Ok(sources.len())
}
