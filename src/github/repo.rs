use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub language: Option<String>,
}

impl Repo {
    pub fn clone_url(&self, owner: &str) -> Url {
        let mut url = Url::parse("https://github.com").unwrap();

        {
            let mut segments = url.path_segments_mut().unwrap();
            segments.push(owner);
            segments.push(&format!("{}.git", self.name));
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_url_is_derived_from_owner_and_name() {
        let repo = Repo {
            name: "email_automation".to_string(),
            private: false,
            fork: false,
            language: None,
        };

        assert_eq!(
            repo.clone_url("someone").as_str(),
            "https://github.com/someone/email_automation.git"
        );
    }

    #[test]
    fn deserializes_an_index_entry() {
        let raw = r#"{
            "name": "webapp",
            "private": true,
            "fork": false,
            "language": "Python",
            "html_url": "https://github.com/someone/webapp"
        }"#;

        let repo: Repo = serde_json::from_str(raw).unwrap();
        assert_eq!(repo.name, "webapp");
        assert!(repo.private);
        assert!(!repo.fork);
        assert_eq!(repo.language.as_deref(), Some("Python"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let repo: Repo = serde_json::from_str(r#"{"name": "webapp"}"#).unwrap();
        assert!(!repo.private);
        assert!(!repo.fork);
        assert!(repo.language.is_none());
    }
}
