/// Check whether a function type string carries a trailing `const`
/// qualifier, e.g. `"int (int) const"` or `"auto () const -> int"`.
///
/// The parameter list is the first top-level `(` that neither follows an
/// identifier (`decltype(...)` and the like) nor opens a declarator group
/// such as the `(*` of `int (*() const)(double)`. The qualifiers run from its
/// closing `)` to the next parenthesis or trailing `->`.
pub fn has_const_qualifier(qual_type: &str) -> bool {
    let Some(rest) = qualifiers_after_params(qual_type) else {
        return false;
    };
    let end = rest.find(['(', ')']).unwrap_or(rest.len());
    let rest = &rest[..end];
    let rest = match rest.find("->") {
        Some(arrow) => &rest[..arrow],
        None => rest,
    };
    rest.split_whitespace().any(|tok| tok == "const")
}

fn qualifiers_after_params(qual_type: &str) -> Option<&str> {
    let bytes = qual_type.as_bytes();
    let mut angle = 0usize;
    let mut open = None;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'<' => angle += 1,
            b'>' => angle = angle.saturating_sub(1),
            b'(' if angle == 0
                && (i == 0 || !is_ident_byte(bytes[i - 1]))
                && !matches!(bytes.get(i + 1), Some(b'*' | b'&' | b'^')) =>
            {
                open = Some(i);
                break;
            },
            _ => {},
        }
    }

    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open?) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&qual_type[i + 1..]);
                }
            },
            _ => {},
        }
    }
    None
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
#[path = "../../tests/src/matcher/function_type_tests.rs"]
mod tests;
