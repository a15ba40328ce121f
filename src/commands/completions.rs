// A fixed vocabulary of common keyword hints; completion is never derived
// from the live repository index.
const KEYWORD_HINTS: &[&str] = &[
    "api", "automation", "backup", "bot", "cli", "css", "data", "demo", "docker", "game", "go",
    "html", "js", "ml", "parser", "python", "rust", "scraper", "script", "server", "web",
];

pub struct Completions;

impl Completions {
    pub fn handle(shell: &str) {
        if let Some(script) = completion_script(shell) {
            println!("{}", script);
        }
    }
}

fn completion_script(shell: &str) -> Option<String> {
    let hints = KEYWORD_HINTS.join(" ");

    match shell {
        "bash" => Some(format!("complete -W \"{}\" gitgrab", hints)),
        "zsh" => Some(format!(
            "#compdef gitgrab\n_arguments '1:keyword:({})'",
            hints
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_carries_the_hint_vocabulary() {
        let script = completion_script("bash").unwrap();

        assert!(script.starts_with("complete -W"));
        assert!(script.contains("python"));
        assert!(script.ends_with("gitgrab"));
    }

    #[test]
    fn zsh_script_carries_the_hint_vocabulary() {
        let script = completion_script("zsh").unwrap();

        assert!(script.starts_with("#compdef gitgrab"));
        assert!(script.contains("rust"));
    }

    #[test]
    fn unknown_shell_yields_nothing() {
        assert!(completion_script("fish").is_none());
    }
}
