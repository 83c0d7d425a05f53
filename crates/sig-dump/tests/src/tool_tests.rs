use std::path::Path;

use super::*;
use crate::compilation_db::{FixedCompilationDatabase, JsonCompilationDatabase};

fn fixture(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name).to_string_lossy().into_owned()
}

/// `sh -c <script>` stands in for clang; the adjusted arguments become
/// positional parameters the script ignores.
fn shell_frontend(script: String) -> FrontendArgs {
    FrontendArgs {
        clang: "sh".to_owned(),
        extra_args_before: vec!["-c".to_owned(), script],
        extra_args: Vec::new(),
    }
}

fn fixed_database() -> CompilationDatabase {
    CompilationDatabase::Fixed(FixedCompilationDatabase::new(env!("CARGO_MANIFEST_DIR"), Vec::new()))
}

#[test]
fn exit_code_precedence() {
    assert_eq!(ToolStatus::default().exit_code(), 0);
    let skipped = ToolStatus {
        skipped: 1,
        ..ToolStatus::default()
    };
    assert_eq!(skipped.exit_code(), 2);
    let failed = ToolStatus {
        failed: 1,
        skipped: 3,
        ..ToolStatus::default()
    };
    assert_eq!(failed.exit_code(), 1);
}

#[cfg(unix)]
#[tokio::test]
async fn scans_every_definition_in_dump() {
    let tool = SignatureTool::new(
        fixed_database(),
        vec![PathBuf::from("a.cpp")],
        shell_frontend(format!("cat '{}'", fixture("scenarios.json"))),
    );
    let mut lines = Vec::new();
    let mut callback = |found: &crate::matcher::FunctionMatch<'_>| lines.push(found.qualified_name());
    let status = tool.run(&mut callback).await;

    assert_eq!(
        status,
        ToolStatus {
            commands: 1,
            failed: 0,
            skipped: 0,
            matched: 3,
        }
    );
    assert_eq!(lines, vec!["ns::A::bar", "ns::A::decl", "foo"]);
}

#[cfg(unix)]
#[tokio::test]
async fn failed_translation_unit_still_scans_partial_ast() {
    let script = format!("cat '{}'; echo 'a.cpp:12:1: error: unknown type name' >&2; exit 1", fixture("scenarios.json"));
    let tool = SignatureTool::new(fixed_database(), vec![PathBuf::from("a.cpp")], shell_frontend(script));
    let mut count = 0;
    let mut callback = |_: &crate::matcher::FunctionMatch<'_>| count += 1;
    let status = tool.run(&mut callback).await;

    assert_eq!(status.failed, 1);
    assert_eq!(status.matched, 3);
    assert_eq!(status.exit_code(), 1);
    assert_eq!(count, 3);
}

#[cfg(unix)]
#[tokio::test]
async fn reported_errors_fail_translation_unit_despite_exit_zero() {
    let script = format!("cat '{}'; echo 'a.cpp:4:2: error: no member named x' >&2", fixture("scenarios.json"));
    let tool = SignatureTool::new(fixed_database(), vec![PathBuf::from("a.cpp")], shell_frontend(script));
    let mut count = 0;
    let mut callback = |_: &crate::matcher::FunctionMatch<'_>| count += 1;
    let status = tool.run(&mut callback).await;

    assert_eq!(status.failed, 1);
    assert_eq!(status.matched, 3);
    assert_eq!(count, 3);
}

#[cfg(unix)]
#[tokio::test]
async fn garbage_output_fails_translation_unit() {
    let tool = SignatureTool::new(
        fixed_database(),
        vec![PathBuf::from("a.cpp")],
        shell_frontend("echo 'not json'".to_owned()),
    );
    let mut count = 0;
    let mut callback = |_: &crate::matcher::FunctionMatch<'_>| count += 1;
    let status = tool.run(&mut callback).await;
    assert_eq!(status.failed, 1);
    assert_eq!(status.matched, 0);
    assert_eq!(count, 0);
}

#[tokio::test]
async fn missing_frontend_fails_every_command() {
    let frontend = FrontendArgs {
        clang: "sig-dump-no-such-clang-binary".to_owned(),
        ..FrontendArgs::default()
    };
    let tool = SignatureTool::new(fixed_database(), vec![PathBuf::from("a.cpp"), PathBuf::from("b.cpp")], frontend);
    let mut callback = |_: &crate::matcher::FunctionMatch<'_>| {};
    let status = tool.run(&mut callback).await;
    assert_eq!(status.commands, 2);
    assert_eq!(status.failed, 2);
}

#[tokio::test]
async fn source_without_command_is_skipped() {
    let database =
        JsonCompilationDatabase::from_json_str("[]", Path::new("/build/compile_commands.json")).expect("empty database");
    let tool = SignatureTool::new(
        CompilationDatabase::Json(database),
        vec![PathBuf::from("/src/a.cpp")],
        FrontendArgs::default(),
    );
    let mut callback = |_: &crate::matcher::FunctionMatch<'_>| {};
    let status = tool.run(&mut callback).await;
    assert_eq!(status.skipped, 1);
    assert_eq!(status.commands, 0);
    assert_eq!(status.exit_code(), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn scan_writes_filtered_lines() {
    let options = ScanOptions {
        sources: vec![PathBuf::from("a.cpp")],
        files: vec!["a.cpp".to_owned()],
        clang: Some("sh".to_owned()),
        extra_args_before: vec!["-c".to_owned(), format!("cat '{}'", fixture("scenarios.json"))],
        fixed_args: Some(Vec::new()),
        ..ScanOptions::default()
    };
    let mut out = Vec::new();
    let status = scan(&options, &Settings::default(), &mut out).await.expect("scan runs");

    assert_eq!(status.exit_code(), 0);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "a.cpp:ns::A::bar() const:3\na.cpp:ns::A::decl(int):6\na.cpp:foo(int, double):10\n"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn scan_filter_excludes_other_files() {
    let options = ScanOptions {
        sources: vec![PathBuf::from("a.cpp")],
        files: vec!["b.cpp".to_owned()],
        clang: Some("sh".to_owned()),
        extra_args_before: vec!["-c".to_owned(), format!("cat '{}'", fixture("scenarios.json"))],
        fixed_args: Some(Vec::new()),
        ..ScanOptions::default()
    };
    let mut out = Vec::new();
    let status = scan(&options, &Settings::default(), &mut out).await.expect("scan runs");
    assert_eq!(status.matched, 3);
    assert!(out.is_empty());
}

#[tokio::test]
async fn scan_reports_malformed_database_before_running() {
    let dir = tempfile::tempdir().unwrap();
    let options = ScanOptions {
        sources: vec![PathBuf::from("a.cpp")],
        build_path: Some(dir.path().join("missing")),
        ..ScanOptions::default()
    };
    std::fs::write(dir.path().join(crate::compilation_db::JSON_DATABASE_FILENAME), "{ not json").unwrap();
    let mut out = Vec::new();
    let err = scan(&options, &Settings::default(), &mut out).await.unwrap_err();
    assert!(err.to_string().starts_with("Error while trying to load a compilation database:"));
    assert!(out.is_empty());
}
