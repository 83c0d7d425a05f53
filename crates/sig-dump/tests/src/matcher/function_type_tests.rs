use super::*;

#[test]
fn plain_const_method() {
    assert!(has_const_qualifier("void () const"));
    assert!(has_const_qualifier("int (int, double) const"));
}

#[test]
fn non_const_types() {
    assert!(!has_const_qualifier("void ()"));
    assert!(!has_const_qualifier("int (int, double)"));
    assert!(!has_const_qualifier("void () noexcept"));
}

#[test]
fn const_parameters_do_not_count() {
    assert!(!has_const_qualifier("void (const S &)"));
    assert!(!has_const_qualifier("const char *(const char *)"));
}

#[test]
fn pointer_return_types() {
    assert!(has_const_qualifier("const char *(const char *) const"));
    assert!(has_const_qualifier("S &(int) const"));
}

#[test]
fn ref_qualified_and_noexcept() {
    assert!(has_const_qualifier("void () const &"));
    assert!(has_const_qualifier("int () const noexcept"));
    assert!(has_const_qualifier("void () const noexcept(true)"));
}

#[test]
fn trailing_return_type_is_ignored() {
    assert!(has_const_qualifier("auto () const -> int"));
    assert!(!has_const_qualifier("auto () -> const int"));
}

#[test]
fn template_return_types() {
    assert!(has_const_qualifier("std::vector<int (*)(int)> (int) const"));
    assert!(!has_const_qualifier("std::function<void () const> (int)"));
}

#[test]
fn decltype_return_type() {
    assert!(has_const_qualifier("decltype(auto) (int) const"));
}

#[test]
fn malformed_types() {
    assert!(!has_const_qualifier(""));
    assert!(!has_const_qualifier("int"));
    assert!(!has_const_qualifier("void (int"));
}

#[test]
fn function_pointer_return_types() {
    assert!(has_const_qualifier("int (*() const)(double)"));
    assert!(has_const_qualifier("int (*(int) const noexcept)(const char *)"));
    assert!(!has_const_qualifier("int (*(int))(const char *)"));
    assert!(!has_const_qualifier("void (*())(const S &)"));
}

#[test]
fn array_reference_return_type() {
    assert!(has_const_qualifier("int (&() const)[3]"));
    assert!(!has_const_qualifier("const int (&())[3]"));
}
