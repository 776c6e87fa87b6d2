//! Parser integration tests.
//!
//! Verifies that the parser builds the expected tree shapes from TypeScript
//! source and rejects malformed input with the right diagnostics.

use scribe_ast::*;
use scribe_core::text::SourceLocation;
use scribe_diagnostics::{messages, SyntaxError};
use scribe_parser::{parse, parse_source, Parser, TokenStream};
use scribe_scanner::tokenize;

/// Helper: parse source text and return its top-level statements.
fn parse_statements(source: &str) -> Vec<Statement> {
    match parse_source(source) {
        Ok(source_file) => source_file.statements.into_vec(),
        Err(err) => panic!("failed to parse {:?}: {}", source, err),
    }
}

fn parse_single(source: &str) -> Statement {
    let mut statements = parse_statements(source);
    assert_eq!(statements.len(), 1, "source: {}", source);
    statements.remove(0)
}

fn parse_error(source: &str) -> SyntaxError {
    parse_source(source).expect_err(source)
}

fn expr(source: &str) -> Expression {
    scribe_parser::parse_expression(tokenize(source).unwrap()).unwrap_or_else(|err| panic!("{:?}: {}", source, err))
}

fn type_node(source: &str) -> TypeNode {
    scribe_parser::parse_type(tokenize(source).unwrap()).unwrap_or_else(|err| panic!("{:?}: {}", source, err))
}

fn declaration(statement: &Statement) -> &Declaration {
    match statement {
        Statement::Declaration(declaration) => declaration,
        other => panic!("expected a declaration, got {:?}", other),
    }
}

fn expression_statement(statement: &Statement) -> &Expression {
    match statement {
        Statement::Expression(statement) => &statement.expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

/// Helper: assert that parsing produces the expected number of top-level statements.
fn assert_statement_count(source: &str, expected: usize) {
    assert_eq!(parse_statements(source).len(), expected, "source: {}", source);
}

fn assert_error(source: &str, expected: &scribe_diagnostics::DiagnosticMessage) {
    let err = parse_error(source);
    assert_eq!(err.code, expected.code, "source: {}, error: {}", source, err);
}

// ============================================================================
// Entry points
// ============================================================================

#[test]
fn test_parse_empty_input() {
    assert_statement_count("", 0);
    assert_statement_count("  // only a comment\n", 0);
    assert!(parse(Vec::new()).unwrap().statements.is_empty());
}

#[test]
fn test_parse_statement_entry() {
    let statement = scribe_parser::parse_statement(tokenize("if (a) b; else c;").unwrap()).unwrap();
    let Statement::If(statement) = statement else { panic!("expected if") };
    assert!(statement.else_statement.is_some());
}

#[test]
fn test_entry_points_require_end_of_input() {
    let err = scribe_parser::parse_expression(tokenize("a b").unwrap()).unwrap_err();
    assert_eq!(err.code, messages::UNEXPECTED_TOKEN_0.code);
    assert_eq!(err.message, "Unexpected token 'b'.");
    assert_eq!(err.location, SourceLocation::new(1, 3));

    assert!(scribe_parser::parse_type(tokenize("string number").unwrap()).is_err());
}

#[test]
fn test_parse_binding_target_directly() {
    let mut reader = TokenStream::new(tokenize("{ a, b: [c] }").unwrap());
    let target = Parser::new(&mut reader).parse_binding_target().unwrap();
    let BindingTarget::Object(pattern) = target else { panic!("expected object pattern") };
    assert_eq!(pattern.properties.len(), 2);
    assert!(reader.is_at_end());
}

// ============================================================================
// Variable Declarations
// ============================================================================

#[test]
fn test_parse_variable_declarations() {
    assert_statement_count("const x = 42;", 1);
    assert_statement_count("let y = 'hello';", 1);
    assert_statement_count("var z = true;", 1);
    assert_statement_count("const a = 1; let b = 2; var c = 3;", 3);
    assert_statement_count("var a = 1, b, c: string = 'x';", 1);
}

#[test]
fn test_var_is_variable_statement_and_let_is_declaration() {
    assert!(matches!(parse_single("var x = 1;"), Statement::Variable(_)));
    let statement = parse_single("let x: number = 1;");
    let Declaration::Lexical(list) = declaration(&statement) else { panic!("expected lexical declaration") };
    assert_eq!(list.kind(), VariableKind::Let);
    assert!(list.declarations()[0].type_annotation.is_some());
}

#[test]
fn test_let_as_identifier() {
    let statement = parse_single("let = 1;");
    assert!(matches!(expression_statement(&statement), Expression::Assignment(_)));
}

#[test]
fn test_object_binding_pattern() {
    let Statement::Variable(list) = parse_single("var { x, y = 0, [z]: w } = o;") else {
        panic!("expected variable statement")
    };
    let declaration = &list.declarations()[0];
    assert!(declaration.initializer.is_some());
    let BindingTarget::Object(pattern) = &declaration.target else { panic!("expected object pattern") };
    assert_eq!(pattern.properties.len(), 3);
    assert!(matches!(&pattern.properties[0], BindingProperty::SingleName(binding) if binding.initializer.is_none()));
    assert!(matches!(&pattern.properties[1], BindingProperty::SingleName(binding) if binding.initializer.is_some()));
    assert!(matches!(
        &pattern.properties[2],
        BindingProperty::Property(PropertyBinding { name: PropertyName::Computed(_), .. })
    ));
}

#[test]
fn test_array_binding_pattern() {
    let statement = parse_single("let [a, , ...rest] = arr;");
    let Declaration::Lexical(list) = declaration(&statement) else { panic!("expected lexical declaration") };
    let BindingTarget::Array(pattern) = &list.declarations()[0].target else { panic!("expected array pattern") };
    assert_eq!(pattern.elements.len(), 2);
    assert!(pattern.elements[0].is_some());
    assert!(pattern.elements[1].is_none());
    assert!(pattern.rest.is_some());
}

#[test]
fn test_nested_binding_patterns() {
    assert_statement_count("const { a: { b }, c: [d = 1] } = e;", 1);
    assert_statement_count("function f({ a, b: [c] }, [d] = []) {}", 1);
    assert_statement_count("try {} catch ({ message }) {}", 1);
}

// ============================================================================
// Function Declarations
// ============================================================================

#[test]
fn test_parse_function_declaration() {
    let statement = parse_single("function add(a: number, b?: number, ...rest: any[]): number { return a; }");
    let Declaration::Function(function) = declaration(&statement) else { panic!("expected function") };
    assert_eq!(function.name().unwrap().name(), "add");
    let parameters = &function.signature().parameters;
    assert_eq!(parameters.parameters.len(), 2);
    assert!(parameters.parameters[1].is_optional());
    assert!(parameters.rest.is_some());
    assert!(function.signature().return_type.is_some());
    assert_eq!(function.body().unwrap().statements.len(), 1);
}

#[test]
fn test_function_overload_without_body() {
    let statements = parse_statements("function f(a: string): void;\nfunction f(a: any) {}");
    let Declaration::Function(overload) = declaration(&statements[0]) else { panic!("expected function") };
    assert!(overload.body().is_none());
}

#[test]
fn test_generic_function_and_type_predicate() {
    let statement = parse_single("function isString<T>(x: T): x is string { return true; }");
    let Declaration::Function(function) = declaration(&statement) else { panic!("expected function") };
    assert_eq!(function.signature().type_parameters.len(), 1);
    assert!(matches!(function.signature().return_type, Some(TypeNode::Predicate(_))));
}

#[test]
fn test_rest_parameter_must_be_last() {
    assert_error("function f(...a, b) {}", &messages::REST_PARAMETER_MUST_BE_LAST);
}

#[test]
fn test_optional_parameter_with_initializer_rejected() {
    assert_error("function f(a? = 1) {}", &messages::INVALID_NODE_0);
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_binary_precedence() {
    let Expression::Binary(add) = expr("1 + 2 * 3") else { panic!("expected binary") };
    assert_eq!(add.operator, BinaryOperator::Add);
    assert!(matches!(&add.right, Expression::Binary(mul) if mul.operator == BinaryOperator::Multiply));
}

#[test]
fn test_left_associative_subtraction() {
    let Expression::Binary(outer) = expr("a - b - c") else { panic!("expected binary") };
    assert!(matches!(&outer.left, Expression::Binary(_)));
    assert!(matches!(&outer.right, Expression::Identifier(_)));
}

#[test]
fn test_right_associative_exponent() {
    let Expression::Binary(outer) = expr("2 ** 3 ** 2") else { panic!("expected binary") };
    assert!(matches!(&outer.left, Expression::Number(_)));
    assert!(matches!(&outer.right, Expression::Binary(inner) if inner.operator == BinaryOperator::Exponent));
}

#[test]
fn test_logical_operators() {
    let Expression::Binary(or) = expr("a && b || c && d") else { panic!("expected binary") };
    assert_eq!(or.operator, BinaryOperator::LogicalOr);
    assert!(matches!(&or.left, Expression::Binary(and) if and.operator == BinaryOperator::LogicalAnd));
}

#[test]
fn test_assignment_is_right_associative() {
    let Expression::Assignment(outer) = expr("a = b = c") else { panic!("expected assignment") };
    assert!(matches!(outer.value(), Expression::Assignment(_)));
    assert!(matches!(expr("a += 1"), Expression::Assignment(a) if a.operator() == AssignmentOperator::AddAssign));
}

#[test]
fn test_destructuring_assignment_targets() {
    assert!(matches!(expr("[a, b] = [b, a]"), Expression::Assignment(_)));
    assert!(matches!(expr("(a) = 1"), Expression::Assignment(_)));
    let Expression::Parenthesized(inner) = expr("({ a = 1 } = o)") else { panic!("expected parenthesized") };
    let Expression::Assignment(assignment) = &inner.expression else { panic!("expected assignment") };
    let Expression::Object(object) = assignment.target() else { panic!("expected object") };
    assert!(matches!(object.properties[0], PropertyDefinition::CoverInitialized(_)));
}

#[test]
fn test_invalid_assignment_targets() {
    let err = parse_error("1 = 2;");
    assert_eq!(err.code, messages::INVALID_LEFT_HAND_SIDE_0.code);
    assert_eq!(err.message, "Invalid left-hand side in assignment.");
    assert_eq!(err.location, SourceLocation::new(1, 3));

    assert_error("a + b += 1;", &messages::INVALID_LEFT_HAND_SIDE_0);
    assert_eq!(parse_error("++1;").message, "Invalid left-hand side in prefix operation.");
    assert_eq!(parse_error("1++;").message, "Invalid left-hand side in postfix operation.");
}

#[test]
fn test_conditional_and_comma() {
    assert!(matches!(expr("a ? b : c"), Expression::Conditional(_)));
    let Expression::Comma(comma) = expr("a, b, c") else { panic!("expected comma") };
    assert_eq!(comma.expressions().len(), 3);
}

#[test]
fn test_unary_and_update_expressions() {
    assert!(matches!(expr("-a"), Expression::Unary(u) if u.operator() == UnaryOperator::Minus));
    assert!(matches!(expr("typeof a"), Expression::Unary(u) if u.operator() == UnaryOperator::TypeOf));
    assert!(matches!(expr("!!a"), Expression::Unary(u) if matches!(u.operand(), Expression::Unary(_))));
    assert!(matches!(expr("a++"), Expression::Unary(u) if u.operator() == UnaryOperator::PostIncrement));
    assert!(matches!(expr("--a.b"), Expression::Unary(u) if u.operator() == UnaryOperator::PreDecrement));
}

#[test]
fn test_simple_arrow_function() {
    let Expression::Arrow(arrow) = expr("x => x + 1") else { panic!("expected arrow") };
    assert!(matches!(arrow.parameters, ArrowParameters::Identifier(_)));
    assert!(matches!(arrow.body, ArrowBody::Expression(_)));
}

#[test]
fn test_parenthesized_arrow_function() {
    let Expression::Arrow(arrow) = expr("(a, b) => { return a; }") else { panic!("expected arrow") };
    let ArrowParameters::Signature(signature) = &arrow.parameters else { panic!("expected signature") };
    assert_eq!(signature.parameters.parameters.len(), 2);
    assert!(matches!(arrow.body, ArrowBody::Block(_)));

    assert!(matches!(expr("(): void => {}"), Expression::Arrow(_)));
    assert!(matches!(expr("(a: number = 1, ...r) => a"), Expression::Arrow(_)));
}

#[test]
fn test_generic_arrow_function() {
    let Expression::Arrow(arrow) = expr("<T>(x: T) => x") else { panic!("expected arrow") };
    let ArrowParameters::Signature(signature) = &arrow.parameters else { panic!("expected signature") };
    assert_eq!(signature.type_parameters.len(), 1);
}

#[test]
fn test_parenthesized_expression_is_not_arrow() {
    let Expression::Binary(binary) = expr("(a + b) * c") else { panic!("expected binary") };
    assert!(matches!(&binary.left, Expression::Parenthesized(_)));
    assert!(matches!(expr("a ? (b) : c"), Expression::Conditional(_)));
}

#[test]
fn test_arrow_needs_arrow_on_same_line() {
    assert!(parse_source("(a)\n=> a").is_err());
}

#[test]
fn test_type_assertion_and_as() {
    assert!(matches!(expr("<any>x"), Expression::TypeAssertion(_)));
    let Expression::As(outer) = expr("y as any as T") else { panic!("expected as") };
    assert!(matches!(&outer.expression, Expression::As(_)));
}

#[test]
fn test_generic_call() {
    let Expression::Call(call) = expr("f<number>(x)") else { panic!("expected call") };
    assert_eq!(call.kind(), CallKind::Call);
    assert_eq!(call.type_arguments().len(), 1);
    assert_eq!(call.arguments().unwrap().arguments.len(), 1);

    let Expression::Call(call) = expr("f<A<B>>(x)") else { panic!("expected call") };
    let TypeNode::Reference(reference) = &call.type_arguments()[0] else { panic!("expected reference") };
    assert_eq!(reference.type_arguments.len(), 1);
}

#[test]
fn test_less_than_comparison_is_not_generic_call() {
    let Expression::Binary(outer) = expr("a < b > c") else { panic!("expected binary") };
    assert_eq!(outer.operator, BinaryOperator::GreaterThan);
    assert!(matches!(&outer.left, Expression::Binary(inner) if inner.operator == BinaryOperator::LessThan));
}

#[test]
fn test_new_expressions() {
    let Expression::Call(call) = expr("new Foo<T>(1, 2)") else { panic!("expected new") };
    assert_eq!(call.kind(), CallKind::New);
    assert_eq!(call.type_arguments().len(), 1);
    assert_eq!(call.arguments().unwrap().arguments.len(), 2);

    let Expression::Call(call) = expr("new Foo") else { panic!("expected new") };
    assert!(call.arguments().is_none());

    let Expression::Call(call) = expr("new a.b.C()") else { panic!("expected new") };
    assert!(matches!(call.callee(), Some(Expression::Member(_))));

    assert!(matches!(expr("new.target"), Expression::NewTarget));
    assert!(matches!(expr("new Foo().bar()"), Expression::Call(c) if c.kind() == CallKind::Call));
}

#[test]
fn test_member_and_call_chain() {
    let Expression::Call(call) = expr("a.b[c](d, ...e)") else { panic!("expected call") };
    let Some(Expression::Member(member)) = call.callee() else { panic!("expected member") };
    assert!(matches!(member.access, MemberAccess::Bracket(_)));
    assert!(matches!(&member.target, MemberTarget::Expression(Expression::Member(_))));
    assert!(call.arguments().unwrap().arguments[1].spread);

    assert!(matches!(expr("a.default.if"), Expression::Member(_)));
}

#[test]
fn test_super_expressions() {
    let Expression::Member(member) = expr("super.x") else { panic!("expected member") };
    assert!(matches!(member.target, MemberTarget::Super));
    assert!(matches!(expr("super[0]"), Expression::Member(_)));
    assert!(matches!(expr("super(1)"), Expression::Call(c) if c.kind() == CallKind::Super));
    assert!(matches!(expr("super.m()"), Expression::Call(c) if c.kind() == CallKind::Call));
}

#[test]
fn test_array_literal_holes_and_spread() {
    let Expression::Array(array) = expr("[a,,b]") else { panic!("expected array") };
    assert_eq!(array.elements.len(), 3);
    assert!(array.elements[0].is_some() && array.elements[1].is_none() && array.elements[2].is_some());

    let Expression::Array(array) = expr("[...a, b,]") else { panic!("expected array") };
    assert_eq!(array.elements.len(), 2);
    assert!(array.elements[0].as_ref().unwrap().spread);

    let Expression::Array(array) = expr("[,]") else { panic!("expected array") };
    assert_eq!(array.elements.len(), 1);
}

#[test]
fn test_object_literal_members() {
    let Expression::Object(object) = expr("{ a: 1, b, c() {}, get d() { return 1; }, set d(v) {}, 'e': 2, [f]: 3, 4: x, }")
    else {
        panic!("expected object")
    };
    let properties = &object.properties;
    assert_eq!(properties.len(), 8);
    assert!(matches!(properties[0], PropertyDefinition::Assignment(_)));
    assert!(matches!(properties[1], PropertyDefinition::Shorthand(_)));
    assert!(matches!(properties[2], PropertyDefinition::Method(_)));
    assert!(matches!(properties[3], PropertyDefinition::Getter(_)));
    assert!(matches!(properties[4], PropertyDefinition::Setter(_)));
    assert!(matches!(&properties[5], PropertyDefinition::Assignment(p) if matches!(p.name, PropertyName::String(_))));
    assert!(matches!(&properties[6], PropertyDefinition::Assignment(p) if matches!(p.name, PropertyName::Computed(_))));
    assert!(matches!(&properties[7], PropertyDefinition::Assignment(p) if matches!(p.name, PropertyName::Number(_))));
}

#[test]
fn test_get_and_set_as_property_names() {
    let Expression::Object(object) = expr("{ get: 1, set }") else { panic!("expected object") };
    assert!(matches!(object.properties[0], PropertyDefinition::Assignment(_)));
    assert!(matches!(object.properties[1], PropertyDefinition::Shorthand(_)));
}

#[test]
fn test_object_literal_errors() {
    let err = parse_error("x = { 'e' };");
    assert_eq!(err.code, messages::_0_EXPECTED_FOUND_1.code);
    assert_eq!(err.message, "':' expected, found '}'.");
    assert_error("x = { if };", &messages::_0_EXPECTED_FOUND_1);
}

#[test]
fn test_function_and_class_expressions() {
    assert!(matches!(expr("function named() {}"), Expression::Function(f) if f.name().is_some()));
    let Expression::Class(class) = expr("class extends Base {}") else { panic!("expected class") };
    assert!(class.name().is_none());
    assert!(class.extends().is_some());
}

#[test]
fn test_regular_expression_not_supported() {
    let err = parse_error("x = /a/;");
    assert_eq!(err.code, messages::_0_IS_NOT_SUPPORTED.code);
    assert_eq!(err.message, "'regular expression literal' is not supported yet.");
}

// ============================================================================
// Automatic semicolon insertion
// ============================================================================

#[test]
fn test_semicolons_inserted_at_line_breaks() {
    assert_statement_count("let a = 1\nlet b = 2", 2);
    assert_statement_count("a()\nb()", 2);
    assert_statement_count("{ a() }", 1);
}

#[test]
fn test_call_continues_across_line_break() {
    let statement = parse_single("let x = a\n(b)");
    let Declaration::Lexical(list) = declaration(&statement) else { panic!("expected lexical declaration") };
    assert!(matches!(list.declarations()[0].initializer, Some(Expression::Call(_))));
}

#[test]
fn test_missing_semicolon_on_same_line() {
    let err = parse_error("let x = 1 let y = 2");
    assert_eq!(err.message, "';' expected, found 'let'.");
    assert_eq!(err.location, SourceLocation::new(1, 11));
}

#[test]
fn test_return_without_value_before_line_break() {
    let statement = parse_single("function f() { return\n1 }");
    let Declaration::Function(function) = declaration(&statement) else { panic!("expected function") };
    let body = function.body().unwrap();
    assert_eq!(body.statements.len(), 2);
    assert!(matches!(&body.statements[0], Statement::Return(r) if r.expression.is_none()));
}

#[test]
fn test_postfix_operator_after_line_break() {
    let statements = parse_statements("a\n++b");
    assert_eq!(statements.len(), 2);
    assert!(matches!(expression_statement(&statements[0]), Expression::Identifier(_)));
    assert!(matches!(
        expression_statement(&statements[1]),
        Expression::Unary(u) if u.operator() == UnaryOperator::PreIncrement
    ));
}

#[test]
fn test_throw_requires_expression_on_same_line() {
    let err = parse_error("throw\nx;");
    assert_eq!(err.code, messages::LINE_BREAK_NOT_PERMITTED_AFTER_0.code);
    assert_eq!(err.message, "Line break not permitted after 'throw'.");
}

#[test]
fn test_break_label_not_taken_across_line_break() {
    let statement = parse_single("outer: for (;;) { break\nouter; }");
    let Statement::Labeled(labeled) = statement else { panic!("expected labeled") };
    let Statement::For(for_statement) = &labeled.body else { panic!("expected for") };
    let Statement::Block(block) = &for_statement.body else { panic!("expected block") };
    assert_eq!(block.statements.len(), 2);
    assert!(matches!(&block.statements[0], Statement::Break(b) if b.label.is_none()));
}

// ============================================================================
// Control flow
// ============================================================================

#[test]
fn test_if_else() {
    let Statement::If(statement) = parse_single("if (a) { b(); } else if (c) d(); else e();") else {
        panic!("expected if")
    };
    assert!(matches!(statement.else_statement, Some(Statement::If(_))));
}

#[test]
fn test_loops() {
    assert!(matches!(parse_single("while (i < 10) i++;"), Statement::While(_)));
    assert_statement_count("do x++; while (x < 3) y();", 2);
    assert!(matches!(parse_single("do { } while (false);"), Statement::Do(_)));
}

#[test]
fn test_classic_for_statement() {
    let Statement::For(statement) = parse_single("for (let i = 0; i < n; i++) {}") else { panic!("expected for") };
    assert!(matches!(statement.initializer, Some(ForInitializer::Variables(_))));
    assert!(statement.condition.is_some());
    assert!(statement.incrementor.is_some());

    let Statement::For(statement) = parse_single("for (;;) {}") else { panic!("expected for") };
    assert!(statement.initializer.is_none() && statement.condition.is_none() && statement.incrementor.is_none());

    assert!(matches!(parse_single("for (var i = (0 in o); i;) {}"), Statement::For(_)));
    assert!(matches!(parse_single("for (i = 0; i < 1; i++) ;"), Statement::For(_)));
}

#[test]
fn test_for_in_and_for_of() {
    let Statement::ForIn(statement) = parse_single("for (var k in o) {}") else { panic!("expected for-in") };
    assert!(matches!(
        statement.binding,
        ForBinding::Variable(VariableKind::Var, BindingTarget::Identifier(_))
    ));

    let Statement::ForOf(statement) = parse_single("for (const x of xs);") else { panic!("expected for-of") };
    assert!(matches!(statement.binding, ForBinding::Variable(VariableKind::Const, _)));
    assert!(matches!(statement.body, Statement::Empty));

    let Statement::ForIn(statement) = parse_single("for (x.y in o) {}") else { panic!("expected for-in") };
    assert!(matches!(statement.binding, ForBinding::Expression(_)));

    assert!(matches!(parse_single("for (let [k, v] of entries) {}"), Statement::ForOf(_)));
}

#[test]
fn test_for_each_errors() {
    let err = parse_error("for (var a, b in o) {}");
    assert_eq!(err.code, messages::ONLY_ONE_VARIABLE_IN_FOR_0.code);
    assert!(err.message.contains("for...in"));
    assert_error("for (var a = 1 of o) {}", &messages::ONLY_ONE_VARIABLE_IN_FOR_0);
    assert_error("for (1 in o) {}", &messages::INVALID_LEFT_HAND_SIDE_0);
}

#[test]
fn test_switch_statement() {
    let Statement::Switch(statement) = parse_single("switch (x) { case 1: a(); break; case 2: default: b(); }") else {
        panic!("expected switch")
    };
    let clauses = statement.clauses();
    assert_eq!(clauses.len(), 3);
    assert_eq!(clauses[0].statements.len(), 2);
    assert!(clauses[1].statements.is_empty());
    assert!(clauses[2].test.is_none());

    assert_error("switch (x) { default: default: }", &messages::INVALID_NODE_0);
    assert_error("switch (x) { y; }", &messages::_0_EXPECTED_FOUND_1);
}

#[test]
fn test_try_statement() {
    let Statement::Try(statement) = parse_single("try { a(); } catch (e) { } finally { }") else {
        panic!("expected try")
    };
    assert!(statement.catch_clause().is_some());
    assert!(statement.finally_block().is_some());
    assert!(matches!(parse_single("try {} finally {}"), Statement::Try(_)));
    assert_error("try {}", &messages::TRY_NEEDS_CATCH_OR_FINALLY);
}

#[test]
fn test_simple_statements() {
    assert!(matches!(parse_single(";"), Statement::Empty));
    assert!(matches!(parse_single("debugger;"), Statement::Debugger));
    assert!(matches!(parse_single("with (o) x;"), Statement::With(_)));
    assert!(matches!(parse_single("throw new Error('x');"), Statement::Throw(_)));
    let Statement::Labeled(labeled) = parse_single("outer: for (;;) { continue outer; }") else {
        panic!("expected labeled")
    };
    assert_eq!(labeled.label.name(), "outer");
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_parse_class_members() {
    let source = "
class A<T> extends B<T> implements I, J {
    private x: number = 1;
    static y;
    constructor(public a: string) { super(); }
    get v() { return this.x; }
    set v(n) {}
    m?(): void;
    [key: string]: any;
}";
    let statement = parse_single(source);
    let Declaration::Class(class) = declaration(&statement) else { panic!("expected class") };
    assert_eq!(class.type_parameters().len(), 1);
    assert_eq!(class.extends().unwrap().type_arguments.len(), 1);
    assert_eq!(class.implements().len(), 2);

    let elements = class.elements();
    assert_eq!(elements.len(), 7);
    assert!(matches!(&elements[0], ClassElement::Property(p) if p.modifiers == ModifierFlags::PRIVATE && p.initializer.is_some()));
    assert!(matches!(&elements[1], ClassElement::Property(p) if p.modifiers == ModifierFlags::STATIC));
    let ClassElement::Constructor(constructor) = &elements[2] else { panic!("expected constructor") };
    assert_eq!(constructor.parameters.parameters[0].modifiers(), ModifierFlags::PUBLIC);
    assert!(matches!(elements[3], ClassElement::GetAccessor(_)));
    assert!(matches!(elements[4], ClassElement::SetAccessor(_)));
    assert!(matches!(&elements[5], ClassElement::Method(m) if m.optional && m.body.is_none()));
    let ClassElement::Index(index) = &elements[6] else { panic!("expected index signature") };
    assert_eq!(index.parameter_type(), PredefinedType::String);
}

#[test]
fn test_abstract_class() {
    let statement = parse_single("abstract class A { abstract m(): void; protected static readonly k = 1; }");
    let Declaration::Class(class) = declaration(&statement) else { panic!("expected class") };
    assert!(class.is_abstract());
    assert!(matches!(&class.elements()[0], ClassElement::Method(m) if m.modifiers == ModifierFlags::ABSTRACT));
    assert!(matches!(
        &class.elements()[1],
        ClassElement::Property(p) if p.modifiers == ModifierFlags::PROTECTED | ModifierFlags::STATIC | ModifierFlags::READONLY
    ));
}

#[test]
fn test_modifier_keywords_as_member_names() {
    let statement = parse_single("class C { static() {} get() {} public; }");
    let Declaration::Class(class) = declaration(&statement) else { panic!("expected class") };
    assert_eq!(class.elements().len(), 3);
    assert!(matches!(&class.elements()[0], ClassElement::Method(m) if m.modifiers.is_empty()));
    assert!(matches!(&class.elements()[2], ClassElement::Property(p) if p.modifiers.is_empty()));
}

#[test]
fn test_index_signature_parameter_type() {
    let err = parse_error("interface I { [k: boolean]: any }");
    assert_eq!(err.code, messages::INDEX_SIGNATURE_PARAMETER_TYPE.code);
    assert_eq!(err.location, SourceLocation::new(1, 19));
}

#[test]
fn test_unterminated_class_body() {
    let err = parse_error("class A { x: number;");
    assert_eq!(err.message, "'}' expected, found 'end of input'.");
}

// ============================================================================
// Interfaces, type aliases, enums and namespaces
// ============================================================================

#[test]
fn test_interface_members() {
    let source = "
interface I<T> extends A, B<T> {
    a: string;
    b?(x: number): void,
    (): I;
    new (s: string): I;
    [k: number]: T
}";
    let statement = parse_single(source);
    let Declaration::Interface(interface) = declaration(&statement) else { panic!("expected interface") };
    assert_eq!(interface.type_parameters.len(), 1);
    assert_eq!(interface.extends.len(), 2);
    let members = &interface.members;
    assert_eq!(members.len(), 5);
    assert!(matches!(members[0], TypeMember::Property(_)));
    assert!(matches!(&members[1], TypeMember::Method(m) if m.optional));
    assert!(matches!(members[2], TypeMember::Call(_)));
    assert!(matches!(members[3], TypeMember::Construct(_)));
    assert!(matches!(members[4], TypeMember::Index(_)));
}

#[test]
fn test_type_alias() {
    let statement = parse_single("type Pair<T> = [T, T];");
    let Declaration::TypeAlias(alias) = declaration(&statement) else { panic!("expected type alias") };
    assert_eq!(alias.name.name(), "Pair");
    assert!(matches!(alias.type_node, TypeNode::Tuple(_)));
}

#[test]
fn test_contextual_keywords_as_identifiers() {
    assert_statement_count("type = 1; interface\nI; namespace.x = 2; declare(1);", 5);
    assert!(matches!(parse_single("module.exports = x;"), Statement::Expression(_)));
}

#[test]
fn test_enum_declaration() {
    let statement = parse_single("const enum E { A, B = 2, 'C' }");
    let Declaration::Enum(enumeration) = declaration(&statement) else { panic!("expected enum") };
    assert!(enumeration.is_const);
    assert_eq!(enumeration.members.len(), 3);
    assert!(enumeration.members[1].initializer().is_some());

    let statement = parse_single("enum F { A, }");
    let Declaration::Enum(enumeration) = declaration(&statement) else { panic!("expected enum") };
    assert!(!enumeration.is_const);
    assert_eq!(enumeration.members.len(), 1);

    assert_error("enum G { [x] }", &messages::INVALID_NODE_0);
}

#[test]
fn test_namespace_declarations() {
    let statement = parse_single("namespace A.B { export const x = 1; }");
    let Declaration::Namespace(namespace) = declaration(&statement) else { panic!("expected namespace") };
    assert!(matches!(&namespace.name, ModuleName::Entity(name) if name.parts().len() == 2));
    assert_eq!(namespace.body.len(), 1);

    let statement = parse_single("module \"m\" {}");
    let Declaration::Namespace(module) = declaration(&statement) else { panic!("expected module") };
    assert!(matches!(module.name, ModuleName::String(_)));
}

#[test]
fn test_ambient_declarations() {
    let statement = parse_single("declare var x: number;");
    let Declaration::Ambient(ambient) = declaration(&statement) else { panic!("expected ambient") };
    assert!(matches!(ambient.declaration(), Statement::Variable(_)));

    assert_statement_count(
        "declare module \"m\" { export function f(): void; }\ndeclare class C { m(): void; }\ndeclare const enum E { A }",
        3,
    );
    assert_error("declare import 'm';", &messages::INVALID_NODE_0);
}

// ============================================================================
// Modules
// ============================================================================

#[test]
fn test_import_declarations() {
    let statements = parse_statements(
        "import 'side-effect';
         import x from 'm';
         import * as ns from 'm';
         import { a, b as c } from 'm';
         import d, { e } from 'm';
         import fs = require('fs');
         import A = B.C;",
    );
    assert_eq!(statements.len(), 7);
    assert!(matches!(declaration(&statements[0]), Declaration::Import(i) if i.clause.is_none()));
    let Declaration::Import(import) = declaration(&statements[1]) else { panic!("expected import") };
    let clause = import.clause.as_ref().unwrap();
    assert!(clause.default().is_some() && clause.bindings().is_none());
    let Declaration::Import(import) = declaration(&statements[2]) else { panic!("expected import") };
    assert!(matches!(import.clause.as_ref().unwrap().bindings(), Some(ImportBindings::Namespace(_))));
    let Declaration::Import(import) = declaration(&statements[3]) else { panic!("expected import") };
    let Some(ImportBindings::Named(specifiers)) = import.clause.as_ref().unwrap().bindings() else {
        panic!("expected named imports")
    };
    assert_eq!(specifiers.len(), 2);
    assert_eq!(specifiers[1].alias.as_ref().unwrap().name(), "c");
    let Declaration::Import(import) = declaration(&statements[4]) else { panic!("expected import") };
    assert!(import.clause.as_ref().unwrap().default().is_some());
    assert!(matches!(
        declaration(&statements[5]),
        Declaration::ImportAlias(ImportAliasDeclaration { reference: ModuleReference::Require(_), .. })
    ));
    assert!(matches!(
        declaration(&statements[6]),
        Declaration::ImportAlias(ImportAliasDeclaration { reference: ModuleReference::Entity(_), .. })
    ));
}

#[test]
fn test_export_declarations() {
    let statements = parse_statements(
        "export = x;
         export default class {}
         export default function () {}
         export default 1 + 2;
         export * from 'm';
         export { a as b };
         export { c } from 'm';
         export const x = 1;
         export import y = z;
         export declare function f(): void;",
    );
    assert_eq!(statements.len(), 10);
    let exports: Vec<&ExportDeclaration> = statements
        .iter()
        .map(|statement| match declaration(statement) {
            Declaration::Export(export) => export,
            other => panic!("expected export, got {:?}", other),
        })
        .collect();
    assert!(matches!(exports[0], ExportDeclaration::Assignment(_)));
    assert!(matches!(exports[1], ExportDeclaration::Default(ExportDefault::Class(c)) if c.name().is_none()));
    assert!(matches!(exports[2], ExportDeclaration::Default(ExportDefault::Function(_))));
    assert!(matches!(exports[3], ExportDeclaration::Default(ExportDefault::Expression(_))));
    assert!(matches!(exports[4], ExportDeclaration::All(_)));
    assert!(matches!(exports[5], ExportDeclaration::Named(n) if n.module.is_none()));
    assert!(matches!(exports[6], ExportDeclaration::Named(n) if n.module.is_some()));
    assert!(matches!(exports[7], ExportDeclaration::Declaration(_)));
    assert!(matches!(exports[8], ExportDeclaration::Declaration(_)));
    assert!(matches!(exports[9], ExportDeclaration::Declaration(_)));
}

#[test]
fn test_export_requires_declaration() {
    let err = parse_error("export 1;");
    assert_eq!(err.code, messages::DECLARATION_EXPECTED_FOUND_0.code);
    assert_eq!(err.message, "Declaration expected, found '1'.");
}

// ============================================================================
// Types
// ============================================================================

#[test]
fn test_function_and_constructor_types() {
    let TypeNode::Function(function) = type_node("(a: number) => string") else { panic!("expected function type") };
    assert!(matches!(function.return_type, TypeNode::Predefined(PredefinedType::String)));
    let TypeNode::Function(function) = type_node("<T>(x: T) => T") else { panic!("expected function type") };
    assert_eq!(function.type_parameters.len(), 1);
    assert!(matches!(type_node("new () => Foo"), TypeNode::Constructor(_)));
    assert!(matches!(type_node("() => void"), TypeNode::Function(_)));
}

#[test]
fn test_union_intersection_and_array_types() {
    let TypeNode::Union(union) = type_node("string | number[]") else { panic!("expected union") };
    assert_eq!(union.types().len(), 2);
    assert!(matches!(union.types()[1], TypeNode::Array(_)));

    let TypeNode::Union(union) = type_node("A & B | C") else { panic!("expected union") };
    assert!(matches!(union.types()[0], TypeNode::Intersection(_)));

    assert!(matches!(type_node("(string | number)[]"), TypeNode::Array(_)));
    assert!(matches!(type_node("(string)"), TypeNode::Parenthesized(_)));
    assert!(matches!(type_node("number[][]"), TypeNode::Array(a) if matches!(a.element_type, TypeNode::Array(_))));
}

#[test]
fn test_primary_types() {
    assert!(matches!(type_node("void"), TypeNode::Predefined(PredefinedType::Void)));
    assert!(matches!(type_node("this"), TypeNode::This));
    assert!(matches!(type_node("typeof x.y"), TypeNode::Query(_)));
    assert!(matches!(type_node("[string, number]"), TypeNode::Tuple(t) if t.elements().len() == 2));
    assert!(matches!(type_node("{ a: string; b(): void }"), TypeNode::Object(o) if o.members.len() == 2));
    assert!(matches!(type_node("'a'"), TypeNode::Literal(LiteralType::String(_))));
    assert!(matches!(type_node("1"), TypeNode::Literal(LiteralType::Number(_))));
    assert!(matches!(type_node("true"), TypeNode::Literal(LiteralType::Boolean(true))));
    let TypeNode::Reference(reference) = type_node("A.B<C>") else { panic!("expected reference") };
    assert_eq!(reference.name.parts().len(), 2);
    assert_eq!(reference.type_arguments.len(), 1);
}

#[test]
fn test_nested_type_arguments_split_shift_tokens() {
    let TypeNode::Reference(reference) = type_node("Array<Array<number>>") else { panic!("expected reference") };
    assert!(matches!(&reference.type_arguments[0], TypeNode::Reference(inner) if inner.type_arguments.len() == 1));

    let statement = parse_single("let y: Array<Array<number>>= z;");
    let Declaration::Lexical(list) = declaration(&statement) else { panic!("expected lexical declaration") };
    assert!(list.declarations()[0].initializer.is_some());
    assert_statement_count("let x: A<B<C<D>>> = y;", 1);
}

#[test]
fn test_type_errors() {
    let err = scribe_parser::parse_type(tokenize("| x").unwrap()).unwrap_err();
    assert_eq!(err.code, messages::TYPE_EXPECTED_FOUND_0.code);
    assert_eq!(err.message, "Type expected, found '|'.");
}

// ============================================================================
// Error reporting
// ============================================================================

#[test]
fn test_error_locations() {
    let err = parse_error("let = ;");
    assert_eq!(err.code, messages::EXPRESSION_EXPECTED_FOUND_0.code);
    assert_eq!(err.message, "Expression expected, found ';'.");
    assert_eq!(err.location, SourceLocation::new(1, 7));

    let err = parse_error("function f() {");
    assert_eq!(err.message, "'}' expected, found 'end of input'.");
    assert!(err.is_grammatical());
}

#[test]
fn test_lexical_errors_propagate() {
    let err = parse_error("let s = 'abc");
    assert!(err.is_lexical());
    assert_eq!(err.code, messages::UNTERMINATED_STRING_LITERAL.code);
}

#[test]
fn test_reserved_word_is_not_identifier() {
    let err = parse_error("var if = 1;");
    assert_eq!(err.code, messages::IDENTIFIER_EXPECTED_FOUND_0.code);
    assert_eq!(err.message, "Identifier expected, found 'if'.");
}

// ============================================================================
// Nesting depth
// ============================================================================

fn with_large_stack(f: impl FnOnce() + Send + 'static) {
    std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn test_moderate_nesting_is_accepted() {
    with_large_stack(|| {
        let source = format!("x = {}1{};", "(".repeat(40), ")".repeat(40));
        assert_statement_count(&source, 1);
        let source = format!("x = {}{};", "[".repeat(50), "]".repeat(50));
        assert_statement_count(&source, 1);
    });
}

#[test]
fn test_deep_nesting_is_rejected() {
    with_large_stack(|| {
        for source in [
            format!("x = {}1{};", "(".repeat(1000), ")".repeat(1000)),
            format!("{}{}", "{".repeat(1000), "}".repeat(1000)),
            format!("x = {}a;", "!".repeat(1000)),
            format!("type T = {}string{};", "(".repeat(1000), ")".repeat(1000)),
            format!("x = {}X;", "new ".repeat(100_000)),
            format!("x = {}x;", "x + ".repeat(100_000)),
            format!("x = a{};", ".b".repeat(1000)),
            format!("x = f{};", "()".repeat(1000)),
            format!("let t: string{};", "[]".repeat(1000)),
        ] {
            let err = parse_error(&source);
            assert_eq!(err.code, messages::MAXIMUM_NESTING_DEPTH_EXCEEDED.code);
            assert_eq!(err.message, "Maximum nesting depth of 200 exceeded.");
        }
    });
}

#[test]
fn test_long_chains_within_limit_are_accepted() {
    let source = format!("x = a{};", " + a".repeat(100));
    assert_statement_count(&source, 1);
    let source = format!("x = a{}.c;", ".b()".repeat(50));
    assert_statement_count(&source, 1);
    let source = format!("x = {}X;", "new ".repeat(50));
    assert_statement_count(&source, 1);
}

#[test]
fn test_nested_parenthesized_assignments_parse_quickly() {
    let mut source = String::from("0");
    for level in 0..30 {
        source = format!("(a{} = {})", level, source);
    }
    let source = format!("x = {};", source);
    let start = std::time::Instant::now();
    assert_statement_count(&source, 1);
    assert!(start.elapsed() < std::time::Duration::from_secs(2), "took {:?}", start.elapsed());
}

#[test]
fn test_arrow_heads_with_nested_initializers() {
    let Statement::Expression(statement) = parse_single("f = (a = (b = 1), c = (d) => d): number => a;") else {
        panic!("expected an expression statement");
    };
    let Expression::Assignment(assignment) = &statement.expression else {
        panic!("expected an assignment");
    };
    assert!(matches!(assignment.value(), Expression::Arrow(_)));
    assert!(matches!(expr("(a, b)"), Expression::Parenthesized(_)));
    assert!(matches!(expr("c ? (a) : b"), Expression::Conditional(_)));
    assert!(matches!(expr("<T>(x)"), Expression::TypeAssertion(_)));
    assert!(matches!(expr("<T>(x: T) => x"), Expression::Arrow(_)));
}

#[test]
fn test_decorators_are_not_parsed() {
    assert_eq!(scribe_scanner::tokenize("@").unwrap()[0].kind, SyntaxKind::AtToken);
    let err = parse_error("@sealed class A {}");
    assert_eq!(err.code, messages::EXPRESSION_EXPECTED_FOUND_0.code);
    assert_eq!(err.location, SourceLocation::new(1, 1));
}
