use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use url::Url;

use super::Repo;
use crate::config::GithubConfig;
use crate::error::Error;

const API_BASE: &str = "https://api.github.com";

pub struct Client {
    inner: reqwest::Client,
    username: String,
    token: Option<String>,
}

impl Client {
    pub fn new(github: &GithubConfig) -> Result<Client, Error> {
        let inner = reqwest::Client::builder().user_agent("gitgrab").build()?;

        let token = if github.token.is_empty() {
            None
        } else {
            Some(github.token.clone())
        };

        Ok(Client {
            inner,
            username: github.username.clone(),
            token,
        })
    }

    /// One page of up to 100 repositories; deeper pagination is not
    /// supported.
    pub async fn list_repos(&self) -> Result<Vec<Repo>, Error> {
        let mut request = self.inner.get(self.repos_url());

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let body = request.send().await?.text().await?;
        parse_index(&body, &self.username)
    }

    fn repos_url(&self) -> Url {
        let mut url = Url::parse(API_BASE).unwrap();

        {
            let mut segments = url.path_segments_mut().unwrap();

            match &self.token {
                Some(_) => {
                    segments.push("user");
                    segments.push("repos");
                }
                None => {
                    segments.push("users");
                    segments.push(&self.username);
                    segments.push("repos");
                }
            }
        }

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("per_page", "100");
            pairs.append_pair("sort", "name");

            if self.token.is_some() {
                pairs.append_pair("affiliation", "owner");
            }
        }

        url
    }
}

#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

fn parse_index(body: &str, account: &str) -> Result<Vec<Repo>, Error> {
    if let Ok(repos) = serde_json::from_str::<Vec<Repo>>(body) {
        return Ok(repos);
    }

    match serde_json::from_str::<ApiMessage>(body) {
        Ok(reply) if reply.message.contains("Bad credentials") => Err(Error::AuthFailure),
        Ok(reply) if reply.message.contains("Not Found") => {
            Err(Error::AccountNotFound(account.to_string()))
        }
        _ => Err(Error::NetworkFailure(None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: &str) -> Client {
        Client::new(&GithubConfig {
            username: "someone".to_string(),
            token: token.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn authenticated_index_url() {
        assert_eq!(
            client("t0ken").repos_url().as_str(),
            "https://api.github.com/user/repos?per_page=100&sort=name&affiliation=owner"
        );
    }

    #[test]
    fn anonymous_index_url() {
        assert_eq!(
            client("").repos_url().as_str(),
            "https://api.github.com/users/someone/repos?per_page=100&sort=name"
        );
    }

    #[test]
    fn parses_a_repository_list() {
        let body = r#"[{"name": "api-client"}, {"name": "api-server", "private": true}]"#;

        let repos = parse_index(body, "someone").unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "api-client");
        assert!(repos[1].private);
    }

    #[test]
    fn bad_credentials_reply() {
        let body = r#"{"message": "Bad credentials", "documentation_url": "https://docs.github.com"}"#;
        assert!(matches!(parse_index(body, "someone"), Err(Error::AuthFailure)));
    }

    #[test]
    fn unknown_account_reply() {
        let body = r#"{"message": "Not Found"}"#;
        let result = parse_index(body, "ghost");
        assert!(matches!(result, Err(Error::AccountNotFound(account)) if account == "ghost"));
    }

    #[test]
    fn garbage_reply_is_a_network_failure() {
        for body in ["<html>503</html>", "", "{\"message\": \"API rate limit exceeded\"}"] {
            assert!(
                matches!(parse_index(body, "someone"), Err(Error::NetworkFailure(None))),
                "body {:?} was not a network failure",
                body
            );
        }
    }
}
