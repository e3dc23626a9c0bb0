use std::path::Path;
use storyline_pipeline::{ContentSource, FileSource, SourceError, StoryQuery};

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

// ── FileSource ───────────────────────────────────────────────────

#[test]
fn reads_nested_story_path() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "blogs/first.json", "{\"story\":{}}");
    let source = FileSource::new(dir.path());

    let bytes = source.get_story("blogs/first", &[]).unwrap();
    assert_eq!(bytes, b"{\"story\":{}}");
    assert_eq!(source.get_story("/blogs/first/", &[]).unwrap(), bytes);
}

#[test]
fn missing_story_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path());
    assert!(matches!(
        source.get_story("home", &[]),
        Err(SourceError::NotFound(p)) if p == "home"
    ));
    assert!(matches!(source.get_links(), Err(SourceError::NotFound(_))));
}

#[test]
fn rejects_paths_leaving_the_root() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("site"));
    for path in ["../secret", "blogs/../../x", "", "/"] {
        assert!(
            matches!(source.get_story(path, &[]), Err(SourceError::InvalidPath(_))),
            "accepted {path:?}"
        );
    }
}

#[test]
fn reads_stories_and_links_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "stories.json", "{\"stories\":[]}");
    write(dir.path(), "links.json", "{\"links\":{}}");
    let source = FileSource::new(dir.path());

    let query = StoryQuery::starting_with("blogs/");
    assert_eq!(source.get_stories(&query).unwrap(), b"{\"stories\":[]}");
    assert_eq!(source.get_links().unwrap(), b"{\"links\":{}}");
}

// ── StoryQuery ───────────────────────────────────────────────────

#[test]
fn query_params_include_filters() {
    let mut query = StoryQuery::starting_with("blogs/").exclude_startpages();
    query.resolve_relations = vec!["a.b".into(), "c.d".into()];
    assert_eq!(
        query.to_params(),
        vec![
            ("version", "published".to_string()),
            ("starts_with", "blogs/".to_string()),
            ("is_startpage", "false".to_string()),
            ("resolve_relations", "a.b,c.d".to_string()),
        ]
    );
}

#[test]
fn default_query_only_asks_for_published() {
    assert_eq!(
        StoryQuery::default().to_params(),
        vec![("version", "published".to_string())]
    );
}
