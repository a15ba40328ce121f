/// Matches a keyword against repository names, returning positions in
/// index order. The whole keyword is tried as a substring first; only when
/// that finds nothing is the keyword split on `_`/`-` and retried token by
/// token.
pub fn match_keyword(keyword: &str, names: &[&str]) -> Vec<usize> {
    let keyword = keyword.to_lowercase();

    let exact: Vec<usize> = names
        .iter()
        .enumerate()
        .filter(|(_, name)| name.to_lowercase().contains(&keyword))
        .map(|(index, _)| index)
        .collect();

    if !exact.is_empty() {
        return exact;
    }

    let tokens: Vec<&str> = keyword
        .split(|chr| chr == '_' || chr == '-')
        .filter(|token| !token.is_empty())
        .collect();

    names
        .iter()
        .enumerate()
        .filter(|(_, name)| {
            let name = name.to_lowercase();
            tokens.iter().any(|token| name.contains(*token))
        })
        .map(|(index, _)| index)
        .collect()
}
