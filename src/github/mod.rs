use crate::utils::files::ensure_directory;
use crate::utils::http::{download_bytes, get_user_agent};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

pub mod extract;

use extract::extract_image_tasks;

/// A single issue returned by the listing endpoint
#[derive(Debug, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// Build the issue-listing endpoint URL for a repository
pub fn issues_url(owner: &str, repo: &str) -> String {
    format!("https://api.github.com/repos/{}/{}/issues", owner, repo)
}

/// Fetch open issues with token authentication.
///
/// A non-2xx status is fatal here, unlike the per-image downloads later.
pub async fn fetch_issues(
    client: &reqwest::Client,
    api_url: &str,
    token: &str,
) -> io::Result<Vec<Issue>> {
    let response = client
        .get(api_url)
        .header("Authorization", format!("token {}", token))
        .header("Accept", "application/vnd.github.v3+json")
        .header("User-Agent", get_user_agent())
        .send()
        .await
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to send request: {}", e),
            )
        })?;

    if !response.status().is_success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            "Failed to fetch issues. Check your credentials and repo name.",
        ));
    }

    let issues: Vec<Issue> = response.json().await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to parse issue list: {}", e),
        )
    })?;

    Ok(issues)
}

/// Scan issues starting at `start_issue` and collect one download task per
/// extracted image link
pub fn collect_image_tasks(issues: &[Issue], start_issue: u64) -> Vec<extract::ImageTask> {
    let mut tasks = Vec::new();

    for issue in issues {
        if issue.number < start_issue {
            println!(
                "Skipping issue #{} (before starting issue {})",
                issue.number, start_issue
            );
            continue;
        }

        let body = issue.body.as_deref().unwrap_or("");

        println!("\n{}", "=".repeat(40));
        println!("Issue #{}: {}", issue.number, issue.title);
        println!("{}", "=".repeat(40));
        println!("{}", body);

        tasks.extend(extract_image_tasks(body));
    }

    tasks
}

/// Fetch the issue list, extract image tasks, and download each image into
/// `output_dir` as `{x}_{y}_{difficulty}.jpg`
pub async fn fetch_and_download(
    api_url: &str,
    token: &str,
    start_issue: u64,
    output_dir: &str,
) -> io::Result<()> {
    let client = reqwest::Client::new();

    let issues = fetch_issues(&client, api_url, token).await?;
    let tasks = collect_image_tasks(&issues, start_issue);

    if tasks.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "No valid images found in any issue.",
        ));
    }

    println!("\nFound {} images. Downloading...", tasks.len());
    download_images(&client, &tasks, Path::new(output_dir)).await
}

/// Download each task's image into `output_dir`, one blocking request at a
/// time. Individual failures are reported and skipped; identical prefixes
/// overwrite the same destination file.
pub async fn download_images(
    client: &reqwest::Client,
    tasks: &[extract::ImageTask],
    output_dir: &Path,
) -> io::Result<()> {
    ensure_directory(output_dir)?;

    let pb = ProgressBar::new(tasks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut failed_downloads = 0;
    for task in tasks {
        // GitHub attachments carry no extension, so .jpg is forced
        let file_path = output_dir.join(format!("{}.jpg", task.prefix));

        match download_bytes(client, &task.url).await {
            Ok(bytes) => {
                fs::write(&file_path, &bytes)?;
                pb.println(format!("Downloaded: {}", file_path.display()));
            }
            Err(e) => {
                failed_downloads += 1;
                pb.println(format!("Failed to download: {} ({})", task.url, e));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Download complete!");

    if failed_downloads > 0 {
        eprintln!("Warning: {} downloads failed", failed_downloads);
    }

    Ok(())
}
