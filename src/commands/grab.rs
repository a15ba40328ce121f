use std::env;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Error;
use crate::git;
use crate::github::{Client, Repo};
use crate::matcher;
use crate::prompt::Prompter;
use crate::report;
use crate::resolver;

const HINTED_NAMES: usize = 10;

pub struct Grab;

impl Grab {
    pub async fn handle(
        keyword: &str,
        config: &mut Config,
        prompter: &mut dyn Prompter,
    ) -> Result<(), Error> {
        let client = Client::new(&config.github)?;
        let repos = client.list_repos().await?;
        let repos = config.filters.apply(repos);

        let names: Vec<&str> = repos.iter().map(|repo| repo.name.as_str()).collect();
        let matched = matcher::match_keyword(keyword, &names);

        if matched.is_empty() {
            println!("No repositories match \"{}\".", keyword);
            if !names.is_empty() {
                println!("Available repositories:");
                for name in names.iter().take(HINTED_NAMES) {
                    println!("  {}", name);
                }
            }

            return Err(Error::NoMatches(keyword.to_string()));
        }

        let matched: Vec<&Repo> = matched.into_iter().map(|index| &repos[index]).collect();
        let repo = resolver::resolve(keyword, &matched, prompter)?;

        let destination = destination(config, repo);
        if destination.exists() {
            let answer = prompter.ask(&format!(
                "{} already exists. Enter it instead of cloning? [Y/n] ",
                destination.display()
            ))?;
            let answer = answer.trim();

            if answer.is_empty() || answer.eq_ignore_ascii_case("y") {
                let destination = destination.canonicalize()?;
                env::set_current_dir(&destination)?;
                println!("Using the existing clone at {}", destination.display());
                return Ok(());
            }

            return Err(Error::DirectoryExists(destination));
        }

        let url = repo.clone_url(&config.github.username);
        let cloned = git::clone_repo(&url, &destination)?;

        // resolve before changing directory, the configured root may be relative
        let destination = destination.canonicalize()?;
        env::set_current_dir(&destination)?;

        config.push_recent(&repo.name);
        if let Err(err) = config.save() {
            eprintln!("warning: can't update the recent list: {}", err);
        }

        report::print_summary(&repo.name, &url, &destination, &cloned);
        Ok(())
    }
}

fn destination(config: &Config, repo: &Repo) -> PathBuf {
    let root = if config.clone.default_path.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&config.clone.default_path)
    };

    root.join(&repo.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> Repo {
        Repo {
            name: name.to_string(),
            private: false,
            fork: false,
            language: None,
        }
    }

    #[test]
    fn destination_defaults_to_the_working_directory() {
        let config = Config::default();
        assert_eq!(
            destination(&config, &repo("webapp")),
            PathBuf::from("./webapp")
        );
    }

    #[test]
    fn destination_honors_the_configured_root() {
        let mut config = Config::default();
        config.clone.default_path = "/tmp/src".to_string();

        assert_eq!(
            destination(&config, &repo("webapp")),
            PathBuf::from("/tmp/src/webapp")
        );
    }
}
