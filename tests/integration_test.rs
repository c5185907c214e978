/// Integration tests for the application layer
mod test_utilities;

use deptree::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_utilities::mocks::*;

fn id(name: &str) -> PackageId {
    PackageId::new(name).unwrap()
}

fn mapping(graph: &DependencyGraph) -> Vec<(String, Vec<String>)> {
    graph
        .adjacency()
        .iter()
        .map(|(k, v)| (k.to_string(), v.iter().map(|d| d.to_string()).collect()))
        .collect()
}

fn expected(entries: &[(&str, Vec<&str>)]) -> Vec<(String, Vec<String>)> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.iter().map(|d| d.to_string()).collect()))
        .collect()
}

fn fixture_file(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("graph.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_resolve_acyclic_fixture() {
    let dir = TempDir::new().unwrap();
    let path = fixture_file(&dir, r#"{"A": ["B", "C"], "B": ["C"], "C": []}"#);

    let use_case = ResolveDependenciesUseCase::new(
        FixtureDependencySource::load(path),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(ResolveRequest::new(id("A"), 3)).unwrap();

    assert_eq!(
        mapping(&response.graph),
        expected(&[("A", vec!["B", "C"]), ("B", vec!["C"]), ("C", vec![])])
    );
    assert!(response.cycles.is_empty());
}

#[test]
fn test_resolve_cyclic_fixture() {
    let dir = TempDir::new().unwrap();
    let path = fixture_file(&dir, r#"{"A": ["B"], "B": ["A"]}"#);

    let use_case = ResolveDependenciesUseCase::new(
        FixtureDependencySource::load(path),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(ResolveRequest::new(id("A"), 5)).unwrap();

    assert_eq!(
        mapping(&response.graph),
        expected(&[("A", vec!["B"]), ("B", vec!["A"])])
    );
    assert_eq!(response.cycles.len(), 1);
    assert_eq!(
        response.cycles[0].packages(),
        &[id("A"), id("B"), id("A")][..]
    );
}

#[test]
fn test_resolve_fixture_with_long_dependency_name() {
    let dir = TempDir::new().unwrap();
    let long_name = "x".repeat(300);
    let path = fixture_file(
        &dir,
        &format!(r#"{{"A": ["B", "{}"], "B": ["C"]}}"#, long_name),
    );

    let use_case = ResolveDependenciesUseCase::new(
        FixtureDependencySource::load(path),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(ResolveRequest::new(id("A"), 3)).unwrap();

    assert_eq!(
        response.graph.dependencies_of("A"),
        Some(&[id("B"), id(&long_name)][..])
    );
    assert_eq!(response.graph.dependencies_of("B"), Some(&[id("C")][..]));
    assert!(response.graph.is_expanded(&long_name));
    assert!(response.graph.unresolved().is_empty());
    assert!(response.cycles.is_empty());
}

#[test]
fn test_each_package_fetched_once() {
    let source = MockDependencySource::new()
        .with_dependencies("A", &["B", "C"])
        .with_dependencies("B", &["C", "D"])
        .with_dependencies("C", &["D"])
        .with_dependencies("D", &["A"]);

    let use_case = ResolveDependenciesUseCase::new(source.clone(), MockProgressReporter::new());
    use_case.execute(ResolveRequest::new(id("A"), 10)).unwrap();

    assert_eq!(source.calls(), vec!["A", "B", "C", "D"]);
    for package in ["A", "B", "C", "D"] {
        assert_eq!(source.call_count(package), 1);
    }
}

#[test]
fn test_depth_bound_keeps_frontier_as_values() {
    let source = MockDependencySource::new()
        .with_dependencies("A", &["B", "C"])
        .with_dependencies("B", &["D"]);

    let use_case = ResolveDependenciesUseCase::new(source.clone(), MockProgressReporter::new());
    let response = use_case.execute(ResolveRequest::new(id("A"), 1)).unwrap();

    assert_eq!(mapping(&response.graph), expected(&[("A", vec!["B", "C"])]));
    assert_eq!(source.calls(), vec!["A"]);
}

#[test]
fn test_no_key_deeper_than_bound() {
    let source = MockDependencySource::new()
        .with_dependencies("A", &["B"])
        .with_dependencies("B", &["C"])
        .with_dependencies("C", &["D"])
        .with_dependencies("D", &["E"]);

    let use_case = ResolveDependenciesUseCase::new(source, MockProgressReporter::new());
    let response = use_case.execute(ResolveRequest::new(id("A"), 3)).unwrap();

    for package in response.graph.adjacency().keys() {
        assert!(response.graph.depth_of(package.as_str()).unwrap() <= 2);
    }
    assert!(!response.graph.is_expanded("D"));
    assert_eq!(response.graph.dependencies_of("C"), Some(&[id("D")][..]));
}

#[test]
fn test_failed_lookup_does_not_stop_traversal() {
    let source = MockDependencySource::new()
        .with_dependencies("A", &["B", "X", "C"])
        .with_dependencies("B", &["D"])
        .with_dependencies("C", &["E"])
        .with_failure("X");

    let reporter = MockProgressReporter::new();
    let use_case = ResolveDependenciesUseCase::new(source, reporter.clone());
    let response = use_case.execute(ResolveRequest::new(id("A"), 3)).unwrap();

    assert_eq!(
        mapping(&response.graph),
        expected(&[
            ("A", vec!["B", "X", "C"]),
            ("B", vec!["D"]),
            ("X", vec![]),
            ("C", vec!["E"]),
            ("D", vec![]),
            ("E", vec![]),
        ])
    );
    assert_eq!(response.graph.unresolved(), &[id("X")][..]);

    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("X"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    let path = fixture_file(
        &dir,
        r#"{"root": ["zeta", "alpha", "mid"], "zeta": ["alpha"], "alpha": ["mid"], "mid": ["root"]}"#,
    );

    let run = || {
        let use_case = ResolveDependenciesUseCase::new(
            FixtureDependencySource::load(&path),
            MockProgressReporter::new(),
        );
        use_case.execute(ResolveRequest::new(id("root"), 4)).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.graph, second.graph);
    assert_eq!(first.cycles, second.cycles);
}

#[test]
fn test_missing_fixture_yields_unresolved_root() {
    let use_case = ResolveDependenciesUseCase::new(
        FixtureDependencySource::load("/nonexistent/deptree/graph.json"),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(ResolveRequest::new(id("A"), 3)).unwrap();

    assert_eq!(mapping(&response.graph), expected(&[("A", vec![])]));
    assert_eq!(response.graph.unresolved(), &[id("A")][..]);
    assert!(response.cycles.is_empty());
}

#[test]
fn test_progress_messages_reported() {
    let source = MockDependencySource::new().with_dependencies("A", &["B"]);
    let reporter = MockProgressReporter::new();

    let use_case = ResolveDependenciesUseCase::new(source, reporter.clone());
    use_case.execute(ResolveRequest::new(id("A"), 2)).unwrap();

    let messages = reporter.get_messages();
    assert!(messages[0].contains("Resolving dependencies of A"));
    assert!(messages.contains(&"Progress: 1/2 - A".to_string()));
    assert!(messages.contains(&"Progress: 2/2 - B".to_string()));
    assert!(messages
        .iter()
        .any(|m| m.starts_with("Completed: ") && m.contains("2 package(s) expanded")));
}

#[test]
fn test_formatters_render_resolved_graph() {
    let source = MockDependencySource::new()
        .with_dependencies("A", &["B", "C"])
        .with_dependencies("B", &["C"]);

    let use_case = ResolveDependenciesUseCase::new(source, MockProgressReporter::new());
    let response = use_case.execute(ResolveRequest::new(id("A"), 3)).unwrap();

    let list = ListFormatter::new().format(&response).unwrap();
    assert_eq!(list, "A -> B, C\nB -> C\nC -> (none)\n");

    let tree = TreeFormatter::new().format(&response).unwrap();
    assert_eq!(tree, "A\n  B\n    C (*)\n  C\n");

    let json: serde_json::Value =
        serde_json::from_str(&JsonFormatter::new().format(&response).unwrap()).unwrap();
    assert_eq!(json["root"], "A");
    assert_eq!(json["cycles"], serde_json::json!([]));
}
