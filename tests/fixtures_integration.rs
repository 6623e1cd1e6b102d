//! Rendering fixtures
//!
//! Each file under `tests/fixtures` holds a component name, its options,
//! optional field errors for the render context, and the expected markup.

use std::fs;
use std::path::{Path, PathBuf};

use ccs_frontend_helpers::test_utils::normalize_html;
use ccs_frontend_helpers::{render, RenderContext};
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Fixture {
    component: String,
    #[serde(default)]
    errors: IndexMap<String, String>,
    options: serde_json::Value,
    html: String,
}

fn fixture_paths() -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
}

fn load(path: &Path) -> Fixture {
    let source = fs::read_to_string(path).unwrap();
    serde_json::from_str(&source)
        .unwrap_or_else(|err| panic!("invalid fixture {}: {}", path.display(), err))
}

#[test]
fn test_fixtures_render_expected_markup() {
    let paths = fixture_paths();
    assert!(!paths.is_empty(), "no fixtures found");

    for path in paths {
        let fixture = load(&path);
        let context = fixture
            .errors
            .iter()
            .fold(RenderContext::new(), |context, (attribute, message)| {
                context.with_field_error(attribute.as_str(), message.as_str())
            });

        let html = render(&fixture.component, &context, fixture.options)
            .unwrap_or_else(|err| panic!("{} failed: {}", path.display(), err));

        pretty_assertions::assert_eq!(
            normalize_html(&html),
            normalize_html(&fixture.html),
            "fixture {}",
            path.display()
        );
    }
}
