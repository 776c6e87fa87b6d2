//! Emission tests over parsed source.
//!
//! Each test parses a snippet and checks the exact text produced under a
//! particular set of options.

use scribe_ast::Statement;
use scribe_emitter::{platform_newline, CodeDisplay, EmitOptions, HexLetterCase};
use scribe_tests::{reformat, round_trip};

fn options() -> EmitOptions {
    EmitOptions::default().with_newline("\n")
}

fn emit(source: &str, options: &EmitOptions) -> String {
    reformat(source, options).unwrap_or_else(|err| panic!("{:?}: {}", source, err))
}

fn parse_single(source: &str) -> Statement {
    let source_file = scribe_parser::parse_source(source).unwrap();
    assert_eq!(source_file.statements.len(), 1);
    source_file.statements.into_vec().remove(0)
}

// ============================================================================
// Separators and spacing
// ============================================================================

#[test]
fn test_array_literal_comma_spacing() {
    assert_eq!(emit("x = [y,z,'str'];", &options()), "x = [y, z, 'str'];\n");
    assert_eq!(emit("x = [y, z, 'str'];", &options().with_space_after_comma(false)), "x = [y,z,'str'];\n");
}

#[test]
fn test_operator_spacing_keeps_signs_apart() {
    let compact = options().with_space_around_operators(false);
    assert_eq!(emit("x = a - -b + +c;", &compact), "x=a- -b+ +c;\n");
    assert_eq!(emit("x = a++ + ++b;", &compact), "x=a++ + ++b;\n");
    assert_eq!(emit("x = a in b;", &compact), "x=a in b;\n");
}

#[test]
fn test_parentheses_come_from_the_tree() {
    assert_eq!(emit("x = (a + b) * c;", &options()), "x = (a + b) * c;\n");
    assert_eq!(emit("x = a + b * c;", &options()), "x = a + b * c;\n");
}

#[test]
fn test_parenthesis_and_keyword_spacing() {
    let roomy = options().with_space_within_parentheses(true).with_space_after_keyword(false);
    assert_eq!(emit("while (f(a, b)) { g(); }", &roomy), "while( f( a, b ) ) {\n  g();\n}\n");
}

#[test]
fn test_brace_spacing() {
    let source = "import {a,b as c} from 'm'; o = {a: 1};";
    assert_eq!(emit(source, &options()), "import { a, b as c } from 'm';\no = { a: 1 };\n");
    assert_eq!(
        emit(source, &options().with_space_within_braces(false).with_space_after_colon(false)),
        "import {a, b as c} from 'm';\no = {a:1};\n"
    );
}

// ============================================================================
// Blocks and layout
// ============================================================================

#[test]
fn test_class_layout() {
    let source = "class A extends B implements I { private x: number = 1; \
                  constructor(public a: string) { super(); } get v() { return this.x; } }";
    let expected = "\
class A extends B implements I {
  private x: number = 1;
  constructor(public a: string) {
    super();
  }
  get v() {
    return this.x;
  }
}
";
    assert_eq!(emit(source, &options()), expected);
}

#[test]
fn test_brace_on_new_line() {
    let source = "function f(a, b) { return a + b; }";
    assert_eq!(
        emit(source, &options().with_brace_on_new_line(true)),
        "function f(a, b)\n{\n  return a + b;\n}\n"
    );
}

#[test]
fn test_simple_blocks_on_one_line() {
    let source = "if (a) { return; } else { b(); c(); }";
    assert_eq!(
        emit(source, &options().with_simple_block_on_new_line(false)),
        "if (a) { return; } else {\n  b();\n  c();\n}\n"
    );
    assert_eq!(emit(source, &options()), "if (a) {\n  return;\n} else {\n  b();\n  c();\n}\n");
}

#[test]
fn test_indentation_and_newline_options() {
    let source = "function f() { if (a) b(); }";
    let options = EmitOptions::default().with_indentation_prefix("\t").with_newline("\r\n");
    assert_eq!(emit(source, &options), "function f() {\r\n\tif (a) b();\r\n}\r\n");
}

#[test]
fn test_default_newline_is_platform_newline() {
    let text = emit("a; b;", &EmitOptions::default());
    assert_eq!(text, format!("a;{0}b;{0}", platform_newline()));
}

#[test]
fn test_interface_and_enum_bodies() {
    let source = "interface P { x: number, y?: string }\nenum E { A, B = 2, }";
    assert_eq!(
        emit(source, &options()),
        "interface P {\n  x: number;\n  y?: string;\n}\nenum E {\n  A,\n  B = 2\n}\n"
    );
}

#[test]
fn test_object_literal_with_method_spans_lines() {
    let source = "o = { a: 1, m() { return 1; } };";
    assert_eq!(emit(source, &options()), "o = {\n  a: 1,\n  m() {\n    return 1;\n  }\n};\n");
}

#[test]
fn test_switch_layout() {
    let source = "switch (x) { case 1: a(); break; default: }";
    assert_eq!(
        emit(source, &options()),
        "switch (x) {\n  case 1:\n    a();\n    break;\n  default:\n}\n"
    );
}

#[test]
fn test_try_layout() {
    let source = "try { a(); } catch (e) { b(); } finally { c(); }";
    assert_eq!(
        emit(source, &options().with_brace_on_new_line(true)),
        "try\n{\n  a();\n}\ncatch (e)\n{\n  b();\n}\nfinally\n{\n  c();\n}\n"
    );
}

// ============================================================================
// Literals and names
// ============================================================================

#[test]
fn test_hex_letter_case() {
    assert_eq!(emit("x = 0xff;", &options()), "x = 0xFF;\n");
    assert_eq!(emit("x = 0XFF;", &options().with_hex_letter_case(HexLetterCase::Lower)), "x = 0xff;\n");
}

#[test]
fn test_numbers_are_normalized() {
    assert_eq!(emit("x = .5 + 1.5e3 + 0b11 + 0O7;", &options()), "x = 0.5 + 1500 + 0b11 + 0o7;\n");
    assert_eq!(emit("x = 1e21 + 1e-7;", &options()), "x = 1e21 + 1e-7;\n");
    assert_eq!(emit("x = 1 .toString();", &options()), "x = 1 .toString();\n");
}

#[test]
fn test_strings_keep_their_quotes() {
    assert_eq!(emit("x = '\\x41\\u0042' + \"it's\";", &options()), "x = 'AB' + \"it's\";\n");
    assert_eq!(emit("x = 'a\\\nb';", &options()), "x = 'ab';\n");
    assert_eq!(emit("x = 'it\\'s\\ttab';", &options()), "x = 'it\\'s\\ttab';\n");
}

#[test]
fn test_escaped_keyword_identifier_stays_escaped() {
    let text = round_trip("var \\u0069f = 1;", &options()).unwrap();
    assert_eq!(text, "var \\u0069f = 1;\n");
    assert_eq!(emit("x = a.\\u0069f;", &options()), "x = a.if;\n");
}

// ============================================================================
// Options from JSON and single-line display
// ============================================================================

#[test]
fn test_options_from_json() {
    let options = EmitOptions::from_json(r#"{ "spaceAroundOperators": false, "newline": "\n" }"#).unwrap();
    assert_eq!(emit("x = a + b;", &options), "x=a+b;\n");
}

#[test]
fn test_code_display() {
    let statement = parse_single("class A { m() { return 1; } }");
    assert_eq!(statement.code_display(), "class A { m() { return 1; } }");
    let statement = parse_single("if (a)\n  b();\nelse\n  c();");
    assert_eq!(statement.code_display(), "if (a) b(); else c();");
}

#[test]
fn test_emission_is_deterministic() {
    let source = "function f<T>(x: T[]): T | undefined { for (const y of x) { if (y) return y; } return undefined; }";
    let options = options();
    let first = emit(source, &options);
    for _ in 0..3 {
        assert_eq!(emit(source, &options), first);
    }
}
