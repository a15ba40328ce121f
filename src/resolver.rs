use crate::error::Error;
use crate::github::Repo;
use crate::prompt::Prompter;

/// Reduces a match set to one repository. A unique match is taken without
/// any interaction; an ambiguous set costs the user exactly one question,
/// and a single invalid answer aborts the operation.
pub fn resolve<'a>(
    keyword: &str,
    matches: &[&'a Repo],
    prompter: &mut dyn Prompter,
) -> Result<&'a Repo, Error> {
    match matches {
        [] => Err(Error::NoMatches(keyword.to_string())),
        [single] => Ok(*single),
        _ => {
            println!("Several repositories match \"{}\":", keyword);
            for (index, repo) in matches.iter().enumerate() {
                println!("{:>3}. {}", index + 1, repo.name);
            }

            let answer = prompter.ask("Pick one [1]: ")?;
            let answer = answer.trim();

            if answer.is_empty() {
                return Ok(matches[0]);
            }

            let choice: usize = answer
                .parse()
                .map_err(|_| Error::InvalidSelection(answer.to_string()))?;

            if choice < 1 || choice > matches.len() {
                return Err(Error::InvalidSelection(answer.to_string()));
            }

            Ok(matches[choice - 1])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Scripted;

    fn repo(name: &str) -> Repo {
        Repo {
            name: name.to_string(),
            private: false,
            fork: false,
            language: None,
        }
    }

    #[test]
    fn empty_match_set_fails() {
        let mut prompter = Scripted::new(&[]);
        let result = resolve("zzz", &[], &mut prompter);
        assert!(matches!(result, Err(Error::NoMatches(_))));
    }

    #[test]
    fn unique_match_never_prompts() {
        let only = repo("email_automation_private");

        // Scripted panics when consulted, so success proves no question was asked
        let mut prompter = Scripted::new(&[]);
        let resolved = resolve("email", &[&only], &mut prompter).unwrap();

        assert_eq!(resolved.name, "email_automation_private");
    }

    #[test]
    fn empty_answer_selects_the_first_match() {
        let first = repo("api-client");
        let second = repo("api-server");

        let mut prompter = Scripted::new(&[""]);
        let resolved = resolve("api", &[&first, &second], &mut prompter).unwrap();

        assert_eq!(resolved.name, "api-client");
    }

    #[test]
    fn explicit_answer_is_one_indexed() {
        let first = repo("api-client");
        let second = repo("api-server");

        let mut prompter = Scripted::new(&["2"]);
        let resolved = resolve("api", &[&first, &second], &mut prompter).unwrap();

        assert_eq!(resolved.name, "api-server");
    }

    #[test]
    fn answers_outside_bounds_are_rejected() {
        for answer in ["0", "3", "seven", "-1"] {
            let first = repo("api-client");
            let second = repo("api-server");

            let mut prompter = Scripted::new(&[answer]);
            let result = resolve("api", &[&first, &second], &mut prompter);

            assert!(
                matches!(result, Err(Error::InvalidSelection(_))),
                "answer {:?} was not rejected",
                answer
            );
        }
    }
}
