#![deny(missing_docs)]

//! # Test Suite Inspection
//!
//! Parses a Python test file with tree-sitter and collects, per `test_*` function,
//! its docstring plus every `assert` test expression and `print(...)` call.

use crate::behavior::{BehaviorNote, NO_EXPECTED_OUTPUT, NO_TEST_DESCRIPTION};
use crate::error::{AppError, AppResult};
use std::fs;
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Name prefix marking a function as a test.
pub const TEST_PREFIX: &str = "test_";

/// Python syntax node kinds the extractor acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyntaxKind {
    FunctionDefinition,
    AssertStatement,
    Call,
    ExpressionStatement,
    StringLiteral,
    ConcatenatedString,
    Comment,
    Other,
}

impl SyntaxKind {
    fn of(node: &Node<'_>) -> Self {
        match node.kind() {
            "function_definition" => Self::FunctionDefinition,
            "assert_statement" => Self::AssertStatement,
            "call" => Self::Call,
            "expression_statement" => Self::ExpressionStatement,
            "string" => Self::StringLiteral,
            "concatenated_string" => Self::ConcatenatedString,
            "comment" => Self::Comment,
            _ => Self::Other,
        }
    }
}

/// Reads and inspects a Python test file.
pub fn extract_behaviors(path: &Path) -> AppResult<Vec<BehaviorNote>> {
    let source = fs::read_to_string(path).map_err(|e| {
        AppError::Parse(format!("Failed to read test file {}: {}", path.display(), e))
    })?;
    extract_behaviors_from_source(&source, &path.display().to_string())
}

/// Inspects Python source text. `origin` names the source in error messages.
///
/// Any syntax error makes the whole file unusable and is reported as [`AppError::Parse`].
pub fn extract_behaviors_from_source(source: &str, origin: &str) -> AppResult<Vec<BehaviorNote>> {
    let tree = parse_python(source, origin)?;
    let bytes = source.as_bytes();

    let notes: Vec<BehaviorNote> = preorder(tree.root_node())
        .into_iter()
        .filter(|node| SyntaxKind::of(node) == SyntaxKind::FunctionDefinition)
        .filter_map(|func| {
            let name = func.child_by_field_name("name")?.utf8_text(bytes).ok()?;
            name.starts_with(TEST_PREFIX)
                .then(|| build_note(name, func, bytes))
        })
        .collect();

    tracing::debug!(origin, tests = notes.len(), "Extracted behavior notes");
    Ok(notes)
}

fn parse_python(source: &str, origin: &str) -> AppResult<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| AppError::General(format!("Failed to load Python grammar: {}", e)))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| AppError::Parse(format!("Failed to parse `{}`", origin)))?;

    let root = tree.root_node();
    if root.has_error() {
        let line = preorder(root)
            .into_iter()
            .find(|n| n.is_error() || n.is_missing())
            .map(|n| n.start_position().row + 1)
            .unwrap_or(1);
        return Err(AppError::Parse(format!(
            "Syntax error in `{}` near line {}",
            origin, line
        )));
    }
    Ok(tree)
}

fn build_note(name: &str, func: Node<'_>, bytes: &[u8]) -> BehaviorNote {
    let body = func.child_by_field_name("body");

    let description = body
        .and_then(|b| docstring(b, bytes))
        .unwrap_or_else(|| NO_TEST_DESCRIPTION.to_string());

    let mut expected_outcomes: Vec<String> = body
        .map(preorder)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|node| outcome(node, bytes))
        .collect();
    if expected_outcomes.is_empty() {
        expected_outcomes.push(NO_EXPECTED_OUTPUT.to_string());
    }

    BehaviorNote {
        function_name: name.to_string(),
        description,
        expected_outcomes,
    }
}

/// Serializes an assertion or a `print(...)` call; `None` for anything else.
fn outcome(node: Node<'_>, bytes: &[u8]) -> Option<String> {
    match SyntaxKind::of(&node) {
        SyntaxKind::AssertStatement => {
            let test = code_children(node).into_iter().next()?;
            Some(format!("assert {}", normalized_text(test, bytes)?))
        }
        SyntaxKind::Call => {
            let function = node.child_by_field_name("function")?;
            (function.kind() == "identifier" && function.utf8_text(bytes).ok()? == "print")
                .then(|| normalized_text(node, bytes))
                .flatten()
        }
        _ => None,
    }
}

fn docstring(body: Node<'_>, bytes: &[u8]) -> Option<String> {
    let first = code_children(body).into_iter().next()?;
    if SyntaxKind::of(&first) != SyntaxKind::ExpressionStatement {
        return None;
    }
    let children = code_children(first);
    let [literal] = children.as_slice() else {
        return None;
    };

    let value = match SyntaxKind::of(literal) {
        SyntaxKind::StringLiteral => string_value(literal.utf8_text(bytes).ok()?),
        // `"a" "b"` is one docstring, unless any part is an f-string or bytes.
        SyntaxKind::ConcatenatedString => code_children(*literal)
            .into_iter()
            .map(|part| string_value(part.utf8_text(bytes).ok()?))
            .collect::<Option<String>>(),
        _ => None,
    }?;
    Some(clean_docstring(&value))
}

/// Evaluates a Python string literal: strips prefix and quotes, then decodes
/// escapes unless the literal is raw. Byte strings and f-strings yield `None`.
fn string_value(literal: &str) -> Option<String> {
    let body = literal.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let prefix = literal[..literal.len() - body.len()].to_ascii_lowercase();
    if prefix.contains(['b', 'f', 't']) {
        return None;
    }

    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if body.len() >= 2 * quote.len() && body.starts_with(quote) && body.ends_with(quote) {
            let inner = &body[quote.len()..body.len() - quote.len()];
            return Some(if prefix.contains('r') {
                inner.to_string()
            } else {
                decode_escapes(inner)
            });
        }
    }
    None
}

/// Decodes the escape sequences of a non-raw Python `str` literal.
///
/// Unknown escapes keep their backslash, as in Python. `\N{...}` is kept
/// verbatim since it needs the Unicode name table.
fn decode_escapes(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };
        match next {
            '\n' => {}
            '\\' | '\'' | '"' => out.push(next),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'v' => out.push('\u{0B}'),
            '0'..='7' => {
                let mut digits = String::from(next);
                while digits.len() < 3 {
                    match chars.peek() {
                        Some(&d) if ('0'..='7').contains(&d) => {
                            digits.push(d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                match u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('\\');
                        out.push_str(&digits);
                    }
                }
            }
            'x' | 'u' | 'U' => {
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let mut digits = String::with_capacity(width);
                while digits.len() < width {
                    match chars.peek() {
                        Some(&d) if d.is_ascii_hexdigit() => {
                            digits.push(d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                let decoded = (digits.len() == width)
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('\\');
                        out.push(next);
                        out.push_str(&digits);
                    }
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    out
}

/// Removes the common indentation of a docstring, like Python's `inspect.cleandoc`.
///
/// Tabs expand to 8-column stops. Only leading and trailing empty lines are
/// dropped; other lines keep their trailing whitespace.
pub(crate) fn clean_docstring(raw: &str) -> String {
    let expanded: Vec<String> = raw.split('\n').map(expand_tabs).collect();

    let margin = expanded
        .iter()
        .skip(1)
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut lines: Vec<&str> = Vec::with_capacity(expanded.len());
    for (i, line) in expanded.iter().enumerate() {
        if i == 0 {
            lines.push(line.trim_start());
        } else {
            // Whitespace-only lines shorter than the margin become empty.
            let cut = margin.min(line.len());
            lines.push(line.get(cut..).unwrap_or_else(|| line.trim_start()));
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let start = lines.iter().take_while(|l| l.is_empty()).count();
    lines[start..].join("\n")
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = 8 - column % 8;
            out.push_str(&" ".repeat(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}

fn normalized_text(node: Node<'_>, bytes: &[u8]) -> Option<String> {
    let text = node.utf8_text(bytes).ok()?;
    Some(text.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Named children, without comments.
fn code_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node
        .named_children(&mut cursor)
        .filter(|child| SyntaxKind::of(child) != SyntaxKind::Comment)
        .collect();
    children
}

/// All nodes below (and including) `root`, in source order.
fn preorder(root: Node<'_>) -> Vec<Node<'_>> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(node);
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(source: &str) -> Vec<BehaviorNote> {
        extract_behaviors_from_source(source, "test_api.py").unwrap()
    }

    #[test]
    fn test_single_line_function() {
        let notes = extract("def test_x(): \"\"\"desc\"\"\"; assert 1==1\n");
        assert_eq!(
            notes,
            vec![BehaviorNote {
                function_name: "test_x".into(),
                description: "desc".into(),
                expected_outcomes: vec!["assert 1==1".into()],
            }]
        );
    }

    #[test]
    fn test_docstring_is_dedented() {
        let source = r#"
def test_add_pet():
    """
    Test the addition of a new pet to the store.

    Expected outcome: The added pet's name should be "Fluffy".
    """
    response = requests.post(url, json=pet_data)
    print(response.text)
    assert response.status_code == 200
    assert response.json()["name"] == "Fluffy"
    print("Add Pet Test Passed!")
"#;
        let notes = extract(source);
        assert_eq!(notes.len(), 1);
        assert_eq!(
            notes[0].description,
            "Test the addition of a new pet to the store.\n\nExpected outcome: The added pet's name should be \"Fluffy\"."
        );
        assert_eq!(
            notes[0].expected_outcomes,
            vec![
                "print(response.text)",
                "assert response.status_code == 200",
                "assert response.json()[\"name\"] == \"Fluffy\"",
                "print(\"Add Pet Test Passed!\")",
            ]
        );
    }

    #[test]
    fn test_defaults_without_docstring_or_outcomes() {
        let source = "def test_nothing(pet_id):\n    url = f\"{BASE_URL}/pet/{pet_id}\"\n    requests.delete(url)\n";
        let notes = extract(source);
        assert_eq!(notes[0].description, "No description provided.");
        assert_eq!(notes[0].expected_outcomes, vec!["No explicit output provided."]);
    }

    #[test]
    fn test_non_test_functions_are_ignored() {
        let source = r#"
import requests

def helper():
    assert True

def tester():
    pass

def test_kept():
    assert helper() is None
"#;
        let notes = extract(source);
        let names: Vec<&str> = notes.iter().map(|n| n.function_name.as_str()).collect();
        assert_eq!(names, vec!["test_kept"]);
    }

    #[test]
    fn test_nested_and_class_tests_are_found_in_order() {
        let source = r#"
class TestStore:
    def test_inventory(self):
        'Inventory lookup.'
        assert self.inventory

def test_order():
    if True:
        assert order["status"] == "placed", "order not placed"
    for attempt in range(3):
        print(attempt)
"#;
        let notes = extract(source);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].function_name, "test_inventory");
        assert_eq!(notes[0].description, "Inventory lookup.");
        assert_eq!(notes[0].expected_outcomes, vec!["assert self.inventory"]);
        assert_eq!(notes[1].function_name, "test_order");
        assert_eq!(
            notes[1].expected_outcomes,
            vec!["assert order[\"status\"] == \"placed\"", "print(attempt)"]
        );
    }

    #[test]
    fn test_fstring_and_bytes_are_not_docstrings() {
        let source = "def test_f():\n    f\"\"\"not {a} doc\"\"\"\n    assert a\n\ndef test_b():\n    b'bytes'\n";
        let notes = extract(source);
        assert_eq!(notes[0].description, "No description provided.");
        assert_eq!(notes[1].description, "No description provided.");
    }

    #[test]
    fn test_method_print_is_not_output() {
        let source = "def test_log():\n    logger.print('x')\n    pprint(x)\n";
        let notes = extract(source);
        assert_eq!(notes[0].expected_outcomes, vec!["No explicit output provided."]);
    }

    #[test]
    fn test_multiline_assert_is_normalized() {
        let source = "def test_multi():\n    assert (\n        a ==\n        b\n    )\n";
        let notes = extract(source);
        assert_eq!(notes[0].expected_outcomes, vec!["assert ( a == b )"]);
    }

    #[test]
    fn test_syntax_error_is_fatal() {
        let err = extract_behaviors_from_source("def test_broken(:\n    assert\n", "bad.py")
            .unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        assert!(format!("{}", err).contains("bad.py"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = extract_behaviors(Path::new("/no/such/test_api.py")).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_clean_docstring() {
        assert_eq!(clean_docstring("desc"), "desc");
        assert_eq!(clean_docstring("\n    a\n      b\n    "), "a\n  b");
        assert_eq!(clean_docstring("  first\n  second"), "first\nsecond");
    }

    #[test]
    fn test_clean_docstring_keeps_inner_trailing_spaces() {
        assert_eq!(clean_docstring("a  \n    b  \n"), "a  \nb  ");
        assert_eq!(clean_docstring("x\n\ty\n\t  z"), "x\ny\n  z");
    }

    #[test]
    fn test_string_value_variants() {
        assert_eq!(string_value("'''x'''").as_deref(), Some("x"));
        assert_eq!(string_value(r#"r"x\d""#).as_deref(), Some(r"x\d"));
        assert_eq!(string_value(r#""""#).as_deref(), Some(""));
        assert_eq!(string_value("rb'x'"), None);
        assert_eq!(string_value(r"'tab\there'").as_deref(), Some("tab\there"));
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(decode_escapes(r"a\nb"), "a\nb");
        assert_eq!(decode_escapes(r"\'q\' \\ \x41é\101"), "'q' \\ AéA");
        assert_eq!(decode_escapes("line\\\ncontinued"), "linecontinued");
        assert_eq!(decode_escapes(r"\d \xZZ"), r"\d \xZZ");
        assert_eq!(decode_escapes(r"\N{DASH}"), r"\N{DASH}");
    }

    #[test]
    fn test_concatenated_docstring_is_joined() {
        let source = r#"
def test_join():
    "Fetch " 'inventory.'
    assert inv

def test_mixed():
    'a' f'{b}'
"#;
        let notes = extract(source);
        assert_eq!(notes[0].description, "Fetch inventory.");
        assert_eq!(notes[1].description, "No description provided.");
    }

    #[test]
    fn test_escaped_docstring_is_decoded() {
        let source = r#"
def test_esc():
    """Returns \"ok\"\tdone."""
"#;
        let notes = extract(source);
        // Tabs expand like any other docstring tab.
        assert_eq!(notes[0].description, "Returns \"ok\"    done.");
    }
}
