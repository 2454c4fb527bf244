/// `sheet-atlas` → `Sheet Atlas`. Only the first character of each token is
/// touched; the rest is kept as written.
pub fn format_project_name(name: &str) -> String {
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_lowercase_becomes_title_case() {
        assert_eq!(format_project_name("sheet-atlas"), "Sheet Atlas");
        assert_eq!(format_project_name("government-feed"), "Government Feed");
        assert_eq!(format_project_name("a-b-c"), "A B C");
    }

    #[test]
    fn single_token_and_existing_capitals() {
        assert_eq!(format_project_name("dotfiles"), "Dotfiles");
        assert_eq!(format_project_name("rustDemo-API"), "RustDemo API");
    }

    #[test]
    fn empty_tokens_are_kept_as_blanks() {
        assert_eq!(format_project_name("a--b"), "A  B");
        assert_eq!(format_project_name(""), "");
    }

    #[test]
    fn output_has_no_hyphens_for_hyphenated_input() {
        for name in ["x-y", "long-project-name-here", "one-2-three"] {
            let formatted = format_project_name(name);
            assert!(!formatted.contains('-'), "{formatted}");
            assert!(formatted
                .split(' ')
                .all(|token| token.chars().next().is_some_and(|c| !c.is_lowercase())));
        }
    }

    #[test]
    fn non_ascii_first_letter_is_uppercased() {
        assert_eq!(format_project_name("élan-vital"), "Élan Vital");
    }
}
