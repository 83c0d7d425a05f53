use super::*;

fn def(
    name: &str,
    params: &[&str],
    is_const: bool,
) -> FunctionDefinition {
    FunctionDefinition {
        file: "src/a.cpp".to_owned(),
        qualified_name: name.to_owned(),
        param_types: params.iter().map(|p| (*p).to_owned()).collect(),
        is_const,
        line: 10,
    }
}

#[test]
fn formats_free_function() {
    assert_eq!(def("foo", &["int", "double"], false).to_string(), "src/a.cpp:foo(int, double):10");
}

#[test]
fn empty_parameter_list_renders_parens() {
    let line = def("ns::A::bar", &[], false).to_string();
    assert_eq!(line, "src/a.cpp:ns::A::bar():10");
}

#[test]
fn const_suffix_follows_parameters() {
    assert_eq!(def("ns::A::bar", &[], true).signature(), "ns::A::bar() const");
    assert_eq!(
        def("ns::A::get", &["const std::string &"], true).to_string(),
        "src/a.cpp:ns::A::get(const std::string &) const:10"
    );
}

#[test]
fn file_path_may_contain_colons() {
    let mut d = def("f", &[], false);
    d.file = "C:/work/a.cpp".to_owned();
    assert_eq!(d.to_string(), "C:/work/a.cpp:f():10");
}

fn definitions(json: &str) -> Vec<FunctionDefinition> {
    let root: crate::matcher::Node = serde_json::from_str(json).expect("valid AST");
    let mut defs = Vec::new();
    crate::matcher::find_function_definitions(&root, &mut |found: &FunctionMatch<'_>| {
        defs.extend(FunctionDefinition::from_match(found));
    });
    defs
}

#[cfg(target_pointer_width = "64")]
#[test]
fn line_numbers_are_not_truncated() {
    let defs = definitions(
        r#"{"id":"0x1","kind":"TranslationUnitDecl","loc":{},"range":{"begin":{},"end":{}},"inner":[
          {"id":"0x10","kind":"FunctionDecl","loc":{"offset":5,"file":"big.cpp","line":4294967297,"col":6,"tokLen":1},"range":{"begin":{"offset":0,"col":1,"tokLen":4},"end":{"offset":10,"col":11,"tokLen":1}},"name":"f","type":{"qualType":"void ()"},"inner":[
            {"id":"0x11","kind":"CompoundStmt","range":{"begin":{"offset":9,"col":10,"tokLen":1},"end":{"offset":10,"col":11,"tokLen":1}}}
          ]}
        ]}"#,
    );
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].to_string(), "big.cpp:f():4294967297");
}

#[test]
fn match_without_location_is_dropped() {
    let defs = definitions(
        r#"{"id":"0x1","kind":"TranslationUnitDecl","loc":{},"range":{"begin":{},"end":{}},"inner":[
          {"id":"0x10","kind":"FunctionDecl","loc":{},"range":{"begin":{},"end":{}},"name":"f","type":{"qualType":"void ()"},"inner":[
            {"id":"0x11","kind":"CompoundStmt","range":{"begin":{},"end":{}}}
          ]}
        ]}"#,
    );
    assert!(defs.is_empty());
}
