use proptest::prelude::*;
use tddmon::file_name_to_module;

fn segment() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}"
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, ..ProptestConfig::default() })]

    #[test]
    fn nested_file_maps_to_dotted_path(
        root in prop::collection::vec(segment(), 0..3),
        dirs in prop::collection::vec(segment(), 0..4),
        stem in segment(),
    ) {
        let base = format!("/{}", root.join("/"));
        let mut parts = root.clone();
        parts.extend(dirs.iter().cloned());
        let file = format!("/{}/{}.py", parts.join("/"), stem);

        let mut expected = dirs.clone();
        expected.push(stem);
        prop_assert_eq!(file_name_to_module(&base, &file), expected.join("."));
    }

    #[test]
    fn separator_style_does_not_matter(
        dirs in prop::collection::vec(segment(), 1..4),
        stem in segment(),
    ) {
        let unix = format!("./{}/{}.py", dirs.join("/"), stem);
        let windows = format!(".\\{}\\{}.py", dirs.join("\\"), stem);
        prop_assert_eq!(file_name_to_module("", &unix), file_name_to_module("", &windows));
    }

    #[test]
    fn result_never_has_empty_components(path in "[a-z./\\\\]{0,24}") {
        let module = file_name_to_module("", &path);
        prop_assert!(!module.starts_with('.'));
        prop_assert!(!module.ends_with('.'));
        prop_assert!(!module.contains(".."));
    }
}
