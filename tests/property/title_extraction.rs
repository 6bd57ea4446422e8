//! Property-based tests for title extraction

use archmd::tree::title::{extract_title, fallback_title, find_heading};
use proptest::prelude::*;

proptest! {
    /// Extraction is pure: same input, same output
    #[test]
    fn title_extraction_is_pure(content in ".{0,200}", dir in "[a-z]{1,12}") {
        prop_assert_eq!(extract_title(&content, &dir), extract_title(&content, &dir));
    }

    /// Content without any top-level heading falls back to the directory name
    #[test]
    fn no_heading_falls_back_to_dir_name(
        lines in proptest::collection::vec("[a-zA-Z0-9 ,.]{0,40}", 0..10),
        dir in "[a-zA-Z0-9_-]{1,16}",
    ) {
        let content = lines.join("\n");
        prop_assert_eq!(extract_title(&content, &dir), dir);
    }

    /// A leading heading always wins and comes back trimmed
    #[test]
    fn leading_heading_is_title(
        text in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,30}[a-zA-Z0-9]",
        pad in " {1,4}",
        body in "[a-z \n]{0,100}",
    ) {
        let content = format!("#{}{}{}\n{}", pad, text, pad, body);
        let heading = find_heading(&content).unwrap();
        prop_assert_eq!(heading.text, text);
        prop_assert!(heading.leading);
    }

    /// Fallback titles never contain path separators
    #[test]
    fn fallback_has_no_separators(name in "[a-z/\\\\]{0,20}") {
        let title = fallback_title(&name);
        prop_assert!(!title.contains('/'));
        prop_assert!(!title.contains('\\'));
    }
}
