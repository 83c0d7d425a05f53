use std::path::PathBuf;

use super::*;

fn command(args: &[&str]) -> CompileCommand {
    CompileCommand {
        directory: PathBuf::from("/build"),
        filename: PathBuf::from("a.cpp"),
        arguments: args.iter().map(|a| (*a).to_owned()).collect(),
    }
}

fn frontend() -> FrontendArgs {
    FrontendArgs {
        clang: "clang++".to_owned(),
        ..FrontendArgs::default()
    }
}

fn tail() -> Vec<String> {
    AST_DUMP_ARGS.iter().map(|a| (*a).to_owned()).collect()
}

#[test]
fn replaces_compiler_and_forces_ast_dump() {
    let adjusted = adjust_arguments(&command(&["/usr/bin/g++", "-std=c++17", "-c", "a.cpp", "-o", "a.o"]), &frontend());
    let mut expected = vec!["clang++".to_owned(), "-std=c++17".to_owned(), "a.cpp".to_owned()];
    expected.extend(tail());
    assert_eq!(adjusted, expected);
}

#[test]
fn strips_dependency_and_joined_output_flags() {
    let adjusted = adjust_arguments(
        &command(&["cc", "-MD", "-MF", "deps.d", "-MT", "a.o", "-MMD", "-oa.o", "-Iinc", "a.cpp"]),
        &frontend(),
    );
    assert_eq!(&adjusted[..3], ["clang++", "-Iinc", "a.cpp"]);
    assert_eq!(adjusted.len(), 3 + AST_DUMP_ARGS.len());
}

#[test]
fn keeps_objc_flags_that_start_with_o() {
    let adjusted = adjust_arguments(&command(&["cc", "-objcmt-migrate-literals", "a.cpp"]), &frontend());
    assert!(adjusted.contains(&"-objcmt-migrate-literals".to_owned()));
}

#[test]
fn does_not_duplicate_syntax_only() {
    let adjusted = adjust_arguments(&command(&["cc", "-fsyntax-only", "-fcolor-diagnostics", "a.cpp"]), &frontend());
    assert_eq!(adjusted.iter().filter(|a| *a == "-fsyntax-only").count(), 1);
    assert!(!adjusted.contains(&"-fcolor-diagnostics".to_owned()));
}

#[test]
fn splices_extra_arguments_at_both_ends() {
    let frontend = FrontendArgs {
        clang: "/opt/clang++".to_owned(),
        extra_args_before: vec!["--target=aarch64-linux-gnu".to_owned()],
        extra_args: vec!["-DEXTRA".to_owned(), "-w".to_owned()],
    };
    let adjusted = adjust_arguments(&command(&["c++", "a.cpp"]), &frontend);
    assert_eq!(adjusted[0], "/opt/clang++");
    assert_eq!(adjusted[1], "--target=aarch64-linux-gnu");
    assert_eq!(adjusted[2], "a.cpp");
    assert_eq!(&adjusted[adjusted.len() - 2..], ["-DEXTRA", "-w"]);
}
