use proptest::prelude::*;
use tddmon::FilePattern;

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, ..ProptestConfig::default() })]

    #[test]
    fn literal_glob_matches_only_itself(name in "[a-zA-Z0-9_.+()$^{}|-]{1,16}", suffix in "[a-z]{1,3}") {
        let pattern = FilePattern::glob(&name).unwrap();
        prop_assert!(pattern.is_match(&name));
        let longer = format!("{}{}", name, suffix);
        prop_assert!(!pattern.is_match(&longer));
    }

    #[test]
    fn star_extension_matches_any_stem(stem in "[a-zA-Z0-9_ .-]{0,16}") {
        let pattern = FilePattern::glob("*.py").unwrap();
        let py = format!("{}.py", stem);
        let pyc = format!("{}.pyc", stem);
        prop_assert!(pattern.is_match(&py));
        prop_assert!(!pattern.is_match(&pyc));
    }

    #[test]
    fn default_test_regex_is_anchored(stem in "[a-z0-9_]{0,12}", prefix in "[a-z]{1,4}") {
        let pattern = FilePattern::regex(r"test_.*\.py").unwrap();
        let name = format!("test_{}.py", stem);
        let prefixed = format!("{}{}", prefix, name);
        let backup = format!("{}.bak", name);
        prop_assert!(pattern.is_match(&name));
        prop_assert!(!pattern.is_match(&prefixed));
        prop_assert!(!pattern.is_match(&backup));
    }
}
