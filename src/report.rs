use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use chrono_humanize::HumanTime;
use git2::{Error as GitError, Repository};
use url::Url;

const README_NAMES: &[&str] = &[
    "README.md",
    "README.markdown",
    "README.rst",
    "README.txt",
    "README",
    "readme.md",
];
const README_PREVIEW_LINES: usize = 5;
const COMMITS_SHOWN: usize = 3;

pub fn print_summary(name: &str, url: &Url, path: &Path, repo: &Repository) {
    println!();
    println!("Cloned {}", name);
    println!("  from {}", url);
    println!("  into {}", path.display());

    if let Some(preview) = readme_preview(path) {
        println!();
        for line in &preview.lines {
            println!("  {}", line);
        }
        if preview.truncated {
            println!("  ...");
        }
    }

    // an empty history is fine, the clone already succeeded
    if let Ok(commits) = recent_commits(repo, COMMITS_SHOWN) {
        if !commits.is_empty() {
            println!();
            println!("Recent commits:");
            for commit in commits {
                println!("  {}", commit);
            }
        }
    }
}

pub struct ReadmePreview {
    pub lines: Vec<String>,
    pub truncated: bool,
}

pub fn readme_preview(dir: &Path) -> Option<ReadmePreview> {
    let path = README_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())?;

    let raw = fs::read_to_string(path).ok()?;

    let lines = raw
        .lines()
        .take(README_PREVIEW_LINES)
        .map(String::from)
        .collect();
    let truncated = raw.lines().count() > README_PREVIEW_LINES;

    Some(ReadmePreview { lines, truncated })
}

pub fn recent_commits(repo: &Repository, limit: usize) -> Result<Vec<String>, GitError> {
    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;

    let mut entries = Vec::with_capacity(limit);

    for oid in revwalk.take(limit) {
        let oid = oid?;
        let commit = repo.find_commit(oid)?;

        let id = oid.to_string();
        let summary = commit.summary().unwrap_or("").to_string();

        match Utc.timestamp_opt(commit.time().seconds(), 0).single() {
            Some(when) => entries.push(format!(
                "{} {} ({})",
                &id[..7],
                summary,
                HumanTime::from(when)
            )),
            None => entries.push(format!("{} {}", &id[..7], summary)),
        }
    }

    Ok(entries)
}
