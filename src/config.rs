use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::github::Repo;
use crate::prompt::Prompter;

const RECENT_LIMIT: usize = 10;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    path: PathBuf,

    pub github: GithubConfig,
    pub clone: CloneConfig,
    pub favorites: Vec<String>,
    pub recent: Vec<String>,
    pub filters: Filters,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub username: String,
    // empty token means anonymous access, public repositories only
    pub token: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CloneConfig {
    pub default_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    pub show_private: bool,
    pub show_public: bool,
    pub languages: Vec<String>,
    pub exclude_forks: bool,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            show_private: true,
            show_public: true,
            languages: Vec::new(),
            exclude_forks: false,
        }
    }
}

impl Filters {
    pub fn apply(&self, repos: Vec<Repo>) -> Vec<Repo> {
        repos.into_iter().filter(|repo| self.keeps(repo)).collect()
    }

    fn keeps(&self, repo: &Repo) -> bool {
        if repo.private && !self.show_private {
            return false;
        }

        if !repo.private && !self.show_public {
            return false;
        }

        if self.exclude_forks && repo.fork {
            return false;
        }

        if self.languages.is_empty() {
            return true;
        }

        match &repo.language {
            Some(language) => self
                .languages
                .iter()
                .any(|wanted| wanted.eq_ignore_ascii_case(language)),
            None => false,
        }
    }
}

impl Config {
    pub fn default_location() -> PathBuf {
        dirs::config_dir()
            .unwrap()
            .join("gitgrab")
            .join("config.json")
    }

    pub fn load_or_init(prompter: &mut dyn Prompter) -> Result<Config, Error> {
        Self::load_or_init_at(Self::default_location(), prompter)
    }

    pub fn load_or_init_at(path: PathBuf, prompter: &mut dyn Prompter) -> Result<Config, Error> {
        if path.exists() {
            Self::load(path)
        } else {
            Self::init(path, prompter)
        }
    }

    pub fn reconfigure(prompter: &mut dyn Prompter) -> Result<Config, Error> {
        Self::reconfigure_at(Self::default_location(), prompter)
    }

    pub fn reconfigure_at(path: PathBuf, prompter: &mut dyn Prompter) -> Result<Config, Error> {
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            let mut config = Config::default();
            config.path = path;
            config
        };

        config.github = prompt_identity(prompter)?;
        config.save()?;

        Ok(config)
    }

    fn load(path: PathBuf) -> Result<Config, Error> {
        let raw = fs::read_to_string(&path)?;
        let mut config: Config = serde_json::from_str(&raw)?;
        config.path = path;

        Ok(config)
    }

    fn init(path: PathBuf, prompter: &mut dyn Prompter) -> Result<Config, Error> {
        println!("No configuration found at {}.", path.display());

        let mut config = Config::default();
        config.path = path;
        config.github = prompt_identity(prompter)?;
        config.save()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        write_owner_only(&self.path, &serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn push_recent(&mut self, name: &str) {
        self.recent.retain(|existing| existing != name);
        self.recent.insert(0, name.to_string());
        self.recent.truncate(RECENT_LIMIT);
    }
}

fn prompt_identity(prompter: &mut dyn Prompter) -> Result<GithubConfig, Error> {
    let username = prompter.ask("GitHub username: ")?;
    let username = username.trim().to_string();

    if username.is_empty() {
        return Err(Error::ConfigMissing);
    }

    let token = prompter.ask_secret("GitHub token (empty for public repositories only): ")?;

    Ok(GithubConfig {
        username,
        token: token.trim().to_string(),
    })
}

#[cfg(unix)]
fn write_owner_only(path: &Path, contents: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents.as_bytes())?;

    // the mode above only applies on creation
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn write_owner_only(path: &Path, contents: &str) -> std::io::Result<()> {
    fs::write(path, contents)
}
