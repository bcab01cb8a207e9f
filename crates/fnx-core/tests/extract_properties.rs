//! Property-style tests for the extraction contract.

use fnx_core::extract::extract_filename;

#[test]
fn plain_segment_is_returned_unchanged() {
    // Non-empty sources with no `/` and no `?` come back as-is.
    for s in ["c.png", "archive.tar.gz", "README", "name with spaces", "üñï.txt"] {
        assert_eq!(extract_filename(s).unwrap(), s);
    }
}

#[test]
fn query_component_never_affects_the_result() {
    for (s, q) in [
        ("a/b/c.png", "x=1"),
        ("c.png", ""),
        ("path/to/file.deb", "token=abc&expires=99"),
    ] {
        let with_query = format!("{}?{}", s, q);
        assert_eq!(
            extract_filename(&with_query).unwrap(),
            extract_filename(s).unwrap()
        );
    }
}

#[test]
fn repeated_calls_agree() {
    let first = extract_filename("a/b/c.png?x=1");
    for _ in 0..3 {
        assert_eq!(extract_filename("a/b/c.png?x=1"), first);
    }
    let failing = extract_filename("a/b/");
    for _ in 0..3 {
        assert_eq!(extract_filename("a/b/"), failing);
    }
}
