#[cfg(test)]
mod tests {
    use mingyuan::prompts;

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        let default_text = prompts::resolve_prompt("DEFAULT");

        assert_eq!(prompts::resolve_prompt("nonsense"), default_text);
        assert_eq!(prompts::resolve_prompt(""), default_text);
        assert_eq!(prompts::resolve_prompt("MAJOR"), default_text);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(prompts::resolve("career-planning").key, "CAREER_PLANNING");
        assert_eq!(prompts::resolve("Career_Planning").key, "CAREER_PLANNING");
        assert_eq!(prompts::resolve("  subject_selection ").key, "SUBJECT_SELECTION");
    }

    #[test]
    fn test_registry_lists_all_scenarios() {
        let keys: Vec<&str> = prompts::templates().iter().map(|t| t.key).collect();
        assert_eq!(
            keys,
            vec![
                "DEFAULT",
                "MAJOR_RECOMMENDATION",
                "UNIVERSITY_COMPARISON",
                "CAREER_PLANNING",
                "SUBJECT_SELECTION"
            ]
        );
    }
}
