//! Tests for the search command

use serde_json::json;
use simula::commands::search;
use simula::Error;

#[test]
fn test_search_prints_arrow_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("the_well_brain.json");
    std::fs::write(
        &path,
        json!({
            "links": [
                {"source": "Shock Wave", "target": "pressure jump", "id": "causes"},
                {"source": "viscosity", "target": "shock wave"},
                {"source": "friction", "target": "grip"}
            ]
        })
        .to_string(),
    )
    .unwrap();

    let lines = search::run("SHOCK", &path).unwrap();

    assert_eq!(
        lines,
        vec![
            "Shock Wave --[causes]--> pressure jump".to_string(),
            "viscosity --[related_to]--> shock wave".to_string(),
        ]
    );
}

#[test]
fn test_search_without_hits_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brain.json");
    std::fs::write(
        &path,
        json!([{"subject": "a", "predicate": "p", "object": "b"}]).to_string(),
    )
    .unwrap();

    assert!(search::run("quantum", &path).unwrap().is_empty());
}

#[test]
fn test_search_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = search::run("x", dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::FileNotFound(_)));
}
