use std::error::Error as StdError;
use std::io::Error as IoError;
use std::path::PathBuf;

use git2::Error as GitError;
use reqwest::Error as HttpError;

#[derive(Debug)]
pub enum Error {
    ConfigMissing,
    InvalidConfig(serde_json::Error),

    AuthFailure,
    AccountNotFound(String),
    NetworkFailure(Option<HttpError>),

    NoMatches(String),
    InvalidSelection(String),

    DirectoryExists(PathBuf),
    CloneFailure(String),

    Git(GitError),
    Io(IoError),
    FailedToExecuteGit(IoError),
}

impl From<GitError> for Error {
    fn from(err: GitError) -> Error {
        Error::Git(err)
    }
}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Error {
        Error::NetworkFailure(Some(err))
    }
}

impl From<IoError> for Error {
    fn from(err: IoError) -> Error {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::InvalidConfig(err)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        use Error::*;

        match self {
            InvalidConfig(err) => Some(err),
            NetworkFailure(Some(err)) => Some(err),
            Git(err) => Some(err),
            Io(err) => Some(err),
            FailedToExecuteGit(err) => Some(err),
            _ => None,
        }
    }
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            ConfigMissing => write!(f, "a GitHub username is required"),
            InvalidConfig(err) => write!(f, "can't read the configuration file: {}", err),

            AuthFailure => write!(f, "token is invalid"),
            AccountNotFound(account) => write!(f, "GitHub account \"{}\" not found", account),
            NetworkFailure(Some(err)) => write!(f, "{}", err),
            NetworkFailure(None) => write!(f, "can't parse the GitHub response"),

            NoMatches(keyword) => write!(f, "no repositories match \"{}\"", keyword),
            InvalidSelection(input) => write!(f, "\"{}\" is not a valid selection", input),

            DirectoryExists(path) => write!(f, "{} already exists", path.display()),
            CloneFailure(reason) => write!(f, "clone failed: {}", reason),

            Git(err) => write!(f, "{}", err),
            Io(err) => write!(f, "{}", err),
            FailedToExecuteGit(err) => write!(f, "failed to execute git: {}", err),
        }
    }
}
