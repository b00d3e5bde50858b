use glob_resolver::{PathDescriptor, Patterns};

// ---------------------------------------------------------------------------
// Decomposition
// ---------------------------------------------------------------------------

#[test]
fn splits_nested_path() {
    let d = PathDescriptor::new("./test", "some-dir/a.js");

    assert_eq!(d.parent_dir(), "some-dir");
    assert_eq!(d.base(), "a.js");
    assert_eq!(d.name(), "a");
    assert_eq!(d.ext(), ".js");
    assert_eq!(d.relative_path(), "some-dir/a.js");
    assert_eq!(d.full_path(), "./test/some-dir/a.js");
}

#[test]
fn top_level_file_has_dot_parent() {
    let d = PathDescriptor::new("/srv", "README.md");

    assert_eq!(d.parent_dir(), ".");
    assert_eq!(d.base(), "README.md");
    assert_eq!(d.full_path(), "/srv/README.md");
}

#[test]
fn only_last_dot_starts_extension() {
    let d = PathDescriptor::new("r", "config/prod.tenant.json");

    assert_eq!(d.name(), "prod.tenant");
    assert_eq!(d.ext(), ".json");
}

#[test]
fn no_extension() {
    let d = PathDescriptor::new("r", "bin/Makefile");

    assert_eq!(d.name(), "Makefile");
    assert_eq!(d.ext(), "");
}

#[test]
fn leading_dot_is_not_an_extension() {
    let d = PathDescriptor::new("r", ".gitignore");

    assert_eq!(d.base(), ".gitignore");
    assert_eq!(d.name(), ".gitignore");
    assert_eq!(d.ext(), "");
}

#[test]
fn hidden_file_with_extension() {
    let d = PathDescriptor::new("r", ".config/.eslintrc.json");

    assert_eq!(d.parent_dir(), ".config");
    assert_eq!(d.name(), ".eslintrc");
    assert_eq!(d.ext(), ".json");
}

#[test]
fn trailing_dot_is_an_empty_extension() {
    let d = PathDescriptor::new("r", "notes.");

    assert_eq!(d.name(), "notes");
    assert_eq!(d.ext(), ".");
}

#[test]
fn double_dot_segment_has_no_extension() {
    let d = PathDescriptor::new("r", "a/..");

    assert_eq!(d.base(), "..");
    assert_eq!(d.name(), "..");
    assert_eq!(d.ext(), "");
}

#[test]
fn parent_and_base_rebuild_relative_path() {
    for rel in ["a/b/c.txt", "x.rs", "deep/er/.env", "../up/file.tar.gz"] {
        let d = PathDescriptor::new("root", rel);
        let rebuilt = if d.parent_dir() == "." {
            d.base().to_string()
        } else {
            format!("{}/{}", d.parent_dir(), d.base())
        };
        assert_eq!(rebuilt, rel);
        assert_eq!(format!("{}{}", d.name(), d.ext()), d.base());
    }
}

// ---------------------------------------------------------------------------
// full_path
// ---------------------------------------------------------------------------

#[test]
fn full_path_adds_single_separator() {
    let plain = PathDescriptor::new("/data", "x/y.txt");
    let slashed = PathDescriptor::new("/data/", "x/y.txt");

    assert_eq!(plain.full_path(), "/data/x/y.txt");
    assert_eq!(slashed.full_path(), "/data/x/y.txt");
    assert!(plain.full_path().ends_with(plain.relative_path()));
}

#[test]
fn filesystem_root() {
    let d = PathDescriptor::new("/", "etc/hosts");

    assert_eq!(d.full_path(), "/etc/hosts");
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

#[test]
fn single_pattern_becomes_one_element_sequence() {
    let single = Patterns::from("**/*.js");
    let seq = Patterns::from(vec!["**/*.js"]);

    assert_eq!(single, seq);
    assert_eq!(single.len(), 1);
    assert_eq!(single.iter().collect::<Vec<_>>(), vec!["**/*.js"]);
}

#[test]
fn sequence_keeps_caller_order() {
    let patterns = Patterns::from(["b/*", "a/*", "b/*"]);

    assert_eq!(patterns.iter().collect::<Vec<_>>(), vec!["b/*", "a/*", "b/*"]);
}

#[test]
fn empty_sequence() {
    let patterns = Patterns::from(Vec::<String>::new());

    assert!(patterns.is_empty());
}
