//! End-to-end tests for `iconshelf check`.

mod fixtures;
use fixtures::*;

#[test]
fn test_check_passes_after_build() {
    let project = TestProject::with_sample_package();
    project.build();

    let output = project.run(&["check"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "check should pass. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("All catalog copies match"));
}

#[test]
fn test_check_detects_modified_mirror() {
    let project = TestProject::with_sample_package();
    project.build();
    project.write("public/data/icons.json", "[]");

    let output = project.run(&["check"]);
    assert_eq!(
        output.status.code(),
        Some(1),
        "diverged mirror should exit with code 1"
    );
    assert!(stdout(&output).contains("differs"));
    assert!(stderr(&output).contains("Catalog copies do not match"));
}

#[test]
fn test_check_json_reports_missing_mirror() {
    let project = TestProject::with_sample_package();
    project.build();
    std::fs::remove_file(project.path("public/data/icons.json")).unwrap();

    let output = project.run(&["check", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let result = stdout_json(&output);
    assert_eq!(result["mirrors"][0]["status"], "missing");
    assert!(result["catalog"]
        .as_str()
        .unwrap()
        .ends_with("icons.json"));
}

#[test]
fn test_check_does_not_write() {
    let project = TestProject::with_sample_package();
    project.build();
    project.write("public/data/icons.json", "[]");

    project.run(&["check"]);
    assert_eq!(project.read("public/data/icons.json"), "[]");
}

#[test]
fn test_check_without_catalog_is_io_error() {
    let project = TestProject::empty();
    let output = project.run(&["check"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read canonical catalog"));
}

#[test]
fn test_check_with_no_mirrors_passes() {
    let project = TestProject::with_sample_package();
    project.write("iconshelf.toml", "[paths]\nmirrors = []\n");
    project.build();

    let output = project.run(&["check", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["mirrors"], serde_json::json!([]));
}
