use super::*;

#[test]
fn normalize_joins_relative_paths() {
    assert_eq!(normalize_against(Path::new("/build"), Path::new("../src/a.cpp")), PathBuf::from("/src/a.cpp"));
    assert_eq!(normalize_against(Path::new("/build"), Path::new("./x/./y.cpp")), PathBuf::from("/build/x/y.cpp"));
}

#[test]
fn normalize_keeps_absolute_paths() {
    assert_eq!(normalize_against(Path::new("/build"), Path::new("/src/../lib/b.cc")), PathBuf::from("/lib/b.cc"));
}

#[test]
fn absolute_resolves_against_cwd() {
    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(absolute(Path::new("a.cpp")), cwd.join("a.cpp"));
}

#[test]
fn shared_prefix() {
    assert_eq!(shared_prefix_len(Path::new("/p/src/a.cpp"), Path::new("/p/src/b.cpp")), 3);
    assert_eq!(shared_prefix_len(Path::new("/p/src/a.cpp"), Path::new("/q/a.cpp")), 1);
}

#[test]
fn header_and_c_detection() {
    assert!(is_header(Path::new("x/foo.hpp")));
    assert!(is_header(Path::new("foo.h")));
    assert!(!is_header(Path::new("foo.cpp")));
    assert!(is_c_source(Path::new("foo.c")));
    assert!(!is_c_source(Path::new("foo.cc")));
}
