use crate::compilation_db::CompileCommand;

/// Appended to every command so clang only parses and dumps the AST.
pub const AST_DUMP_ARGS: &[&str] = &["-fsyntax-only", "-fno-color-diagnostics", "-Xclang", "-ast-dump=json"];

/// Flags that take the next argument as their value and produce output files.
const OUTPUT_FLAGS_WITH_VALUE: &[&str] = &["-o", "-MF", "-MT", "-MQ"];

/// Dependency-file flags without a value.
const DEPENDENCY_FLAGS: &[&str] = &["-M", "-MM", "-MD", "-MMD", "-MG", "-MP"];

/// Flags selecting a compile mode other than syntax-only, or colouring.
const MODE_FLAGS: &[&str] = &["-c", "-S", "-E", "-fsyntax-only", "-fcolor-diagnostics", "-fno-color-diagnostics"];

/// Front-end invocation settings shared by every command.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontendArgs {
    pub clang: String,
    pub extra_args_before: Vec<String>,
    pub extra_args: Vec<String>,
}

/// Turn a database command into the argument vector actually run.
///
/// `argv[0]` becomes the configured clang, output and dependency-file flags
/// are dropped, the compile mode is forced to syntax-only with a JSON AST
/// dump, and the extra arguments are spliced in at both ends.
pub fn adjust_arguments(
    command: &CompileCommand,
    frontend: &FrontendArgs,
) -> Vec<String> {
    let mut out = Vec::with_capacity(command.arguments.len() + frontend.extra_args.len() + AST_DUMP_ARGS.len() + 4);
    out.push(frontend.clang.clone());
    out.extend(frontend.extra_args_before.iter().cloned());

    let mut args = command.arguments.iter().skip(1);
    while let Some(arg) = args.next() {
        let arg = arg.as_str();
        if OUTPUT_FLAGS_WITH_VALUE.contains(&arg) {
            args.next();
            continue;
        }
        if is_joined_output_flag(arg) || DEPENDENCY_FLAGS.contains(&arg) || MODE_FLAGS.contains(&arg) {
            continue;
        }
        out.push(arg.to_owned());
    }

    out.extend(AST_DUMP_ARGS.iter().map(|a| (*a).to_owned()));
    out.extend(frontend.extra_args.iter().cloned());
    out
}

/// `-ofoo.o`, `-MFdeps.d` and friends.
fn is_joined_output_flag(arg: &str) -> bool {
    OUTPUT_FLAGS_WITH_VALUE.iter().any(|flag| arg.len() > flag.len() && arg.starts_with(flag))
        && !arg.starts_with("-objc")
}

#[cfg(test)]
#[path = "../../tests/src/frontend/adjust_tests.rs"]
mod tests;
