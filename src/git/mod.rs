use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus};

use git2::{Error as GitError, Repository};
use url::Url;

use crate::error::Error;

pub fn get_repo(path: &Path) -> Result<Repository, GitError> {
    Repository::open(path)
}

pub fn clone_repo(url: &Url, path: &Path) -> Result<Repository, Error> {
    let status = exec_git_cmd([OsStr::new("clone"), OsStr::new(url.as_str()), path.as_os_str()])?;

    if !status.success() {
        let reason = match status.code() {
            Some(code) => format!("git clone exited with code {}", code),
            None => "git clone was terminated".to_string(),
        };

        return Err(Error::CloneFailure(reason));
    }

    get_repo(path).map_err(Error::Git)
}

pub fn exec_git_cmd<A, I>(args: I) -> Result<ExitStatus, Error>
where
    A: AsRef<OsStr>,
    I: IntoIterator<Item = A>,
{
    Command::new("git")
        .args(args)
        .spawn()
        .map_err(Error::FailedToExecuteGit)?
        .wait()
        .map_err(Error::FailedToExecuteGit)
}
