//! Node factory: one constructor per node kind.
//!
//! The factory is stateless. Constructors for nodes with invariants beyond
//! "required children are present" validate them and return a [`NodeError`]
//! on violation; the rest are infallible.

use crate::modifiers::ModifierFlags;
use crate::node::*;

/// A node invariant was violated at construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NodeError {
    #[error("identifier must not be empty")]
    EmptyIdentifier,
    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),
    #[error("{value} is not a valid {kind} literal value")]
    InvalidNumericLiteral { value: f64, kind: NumericLiteralKind },
    #[error("{node} requires at least {min} element(s), found {found}")]
    TooFewElements { node: &'static str, min: usize, found: usize },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("invalid operand for '{0}'")]
    InvalidUpdateOperand(&'static str),
    #[error("try statement requires a catch or finally clause")]
    MissingCatchOrFinally,
    #[error("switch statement has more than one default clause")]
    DuplicateDefaultClause,
    #[error("parameter cannot be both optional and initialized")]
    OptionalParameterWithInitializer,
    #[error("'{0}' cannot be applied to this statement")]
    InvalidModifiedStatement(&'static str),
    #[error("'{0}' declarations cannot be used here")]
    InvalidVariableKind(&'static str),
    #[error("import clause must bind a default or named import")]
    EmptyImportClause,
    #[error("index signature parameter type must be 'string' or 'number'")]
    InvalidIndexSignatureParameterType,
    #[error("enum member names cannot be computed")]
    ComputedEnumMemberName,
    #[error("invalid regular expression: {0}")]
    InvalidRegularExpression(&'static str),
}

pub type NodeResult<T> = Result<T, NodeError>;

fn require_len<T>(node: &'static str, items: &[T], min: usize) -> NodeResult<()> {
    if items.len() < min {
        return Err(NodeError::TooFewElements { node, min, found: items.len() });
    }
    Ok(())
}

// ============================================================================
// Names and Literals
// ============================================================================

pub fn identifier(name: impl Into<String>) -> NodeResult<Identifier> {
    let name = name.into();
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(NodeError::EmptyIdentifier),
        Some(first) if !Identifier::is_start_char(first) => {
            return Err(NodeError::InvalidIdentifier(name));
        }
        Some(_) => {}
    }
    if !chars.all(Identifier::is_part_char) {
        return Err(NodeError::InvalidIdentifier(name));
    }
    Ok(Identifier { name })
}

pub fn entity_name(parts: Vec<Identifier>) -> NodeResult<EntityName> {
    require_len("entity name", &parts, 1)?;
    Ok(EntityName { parts: parts.into_boxed_slice() })
}

/// A numeric literal. The value must be non-negative and finite; binary, octal
/// and hex literals must also be integers no greater than [`MAX_SAFE_INTEGER`].
pub fn numeric_literal(value: f64, kind: NumericLiteralKind) -> NodeResult<NumericLiteral> {
    let valid = value.is_finite()
        && !value.is_sign_negative()
        && value <= kind.max_value()
        && (kind == NumericLiteralKind::Decimal || value.fract() == 0.0);
    if !valid {
        return Err(NodeError::InvalidNumericLiteral { value, kind });
    }
    Ok(NumericLiteral { value, kind })
}

pub fn string_literal(value: impl Into<String>, quote: QuoteKind) -> StringLiteral {
    StringLiteral { value: value.into(), quote }
}

pub fn boolean_literal(value: bool) -> BooleanLiteral {
    BooleanLiteral { value }
}

/// A regular expression literal. The body must be non-empty, must not start
/// with `*`, and must be free of line terminators and unescaped `/` outside a
/// character class; flags are drawn from `gimuy` without repeats.
pub fn regular_expression_literal(
    pattern: impl Into<String>,
    flags: impl Into<String>,
) -> NodeResult<RegularExpressionLiteral> {
    let pattern = pattern.into();
    let flags = flags.into();
    if pattern.is_empty() || pattern.starts_with('*') {
        return Err(NodeError::InvalidRegularExpression("body must be non-empty and not start with '*'"));
    }
    let mut in_class = false;
    let mut escaped = false;
    for ch in pattern.chars() {
        if scribe_core::text::is_line_terminator(ch) {
            return Err(NodeError::InvalidRegularExpression("body contains a line terminator"));
        }
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => {
                return Err(NodeError::InvalidRegularExpression("body contains an unescaped '/'"));
            }
            _ => {}
        }
    }
    if escaped {
        return Err(NodeError::InvalidRegularExpression("body ends with a lone '\\'"));
    }
    let mut seen = String::new();
    for flag in flags.chars() {
        if !"gimuy".contains(flag) || seen.contains(flag) {
            return Err(NodeError::InvalidRegularExpression("unknown or repeated flag"));
        }
        seen.push(flag);
    }
    Ok(RegularExpressionLiteral { pattern, flags })
}

pub fn template_literal(head: impl Into<String>, spans: Vec<TemplateSpan>) -> TemplateLiteral {
    TemplateLiteral { head: head.into(), spans: spans.into_boxed_slice() }
}

pub fn template_span(expression: Expression, literal: impl Into<String>) -> TemplateSpan {
    TemplateSpan { expression, literal: literal.into() }
}

// ============================================================================
// Expressions
// ============================================================================

pub fn this_expression() -> Expression {
    Expression::This
}

pub fn null_literal() -> Expression {
    Expression::Null
}

pub fn new_target() -> Expression {
    Expression::NewTarget
}

pub fn array_element(expression: Expression) -> ArrayElement {
    ArrayElement { expression, spread: false }
}

pub fn spread_element(expression: Expression) -> ArrayElement {
    ArrayElement { expression, spread: true }
}

pub fn array_literal(elements: Vec<Option<ArrayElement>>) -> ArrayLiteral {
    ArrayLiteral { elements: elements.into_boxed_slice() }
}

pub fn object_literal(properties: Vec<PropertyDefinition>) -> ObjectLiteral {
    ObjectLiteral { properties: properties.into_boxed_slice() }
}

pub fn shorthand_property(name: Identifier) -> PropertyDefinition {
    PropertyDefinition::Shorthand(name)
}

pub fn cover_initialized_name(name: Identifier, initializer: Expression) -> PropertyDefinition {
    PropertyDefinition::CoverInitialized(CoverInitializedName { name, initializer })
}

pub fn property_assignment(name: PropertyName, value: Expression) -> PropertyDefinition {
    PropertyDefinition::Assignment(PropertyAssignment { name, value })
}

/// A method in an object literal, which always has a body.
pub fn object_method(name: PropertyName, signature: CallSignature, body: Block) -> PropertyDefinition {
    PropertyDefinition::Method(MethodDefinition {
        modifiers: ModifierFlags::NONE,
        name,
        optional: false,
        signature,
        body: Some(body),
    })
}

pub fn get_accessor(
    modifiers: ModifierFlags,
    name: PropertyName,
    return_type: Option<TypeNode>,
    body: Block,
) -> GetAccessor {
    GetAccessor { modifiers, name, return_type, body }
}

pub fn set_accessor(modifiers: ModifierFlags, name: PropertyName, parameter: Parameter, body: Block) -> SetAccessor {
    SetAccessor { modifiers, name, parameter, body }
}

pub fn computed_property_name(expression: Expression) -> PropertyName {
    PropertyName::Computed(Box::new(expression))
}

pub fn parenthesized_expression(expression: Expression) -> ParenthesizedExpression {
    ParenthesizedExpression { expression }
}

pub fn function_expression(name: Option<Identifier>, signature: CallSignature, body: Block) -> Function {
    Function { name, signature, body: Some(body) }
}

/// A function declaration; a missing body declares an overload.
pub fn function_declaration(name: Identifier, signature: CallSignature, body: Option<Block>) -> Function {
    Function { name: Some(name), signature, body }
}

/// A function exported as `export default function [name]() {}`.
pub fn default_function(name: Option<Identifier>, signature: CallSignature, body: Block) -> Function {
    Function { name, signature, body: Some(body) }
}

pub fn class_expression(
    name: Option<Identifier>,
    type_parameters: Vec<TypeParameter>,
    extends: Option<HeritageExpression>,
    implements: Vec<TypeReference>,
    elements: Vec<ClassElement>,
) -> Class {
    Class {
        is_abstract: false,
        name,
        type_parameters: type_parameters.into_boxed_slice(),
        extends,
        implements: implements.into_boxed_slice(),
        elements: elements.into_boxed_slice(),
    }
}

pub fn class_declaration(
    is_abstract: bool,
    name: Identifier,
    type_parameters: Vec<TypeParameter>,
    extends: Option<HeritageExpression>,
    implements: Vec<TypeReference>,
    elements: Vec<ClassElement>,
) -> Class {
    Class {
        is_abstract,
        ..class_expression(Some(name), type_parameters, extends, implements, elements)
    }
}

/// A class exported as `export default class [name] {}`.
pub fn default_class(
    is_abstract: bool,
    name: Option<Identifier>,
    type_parameters: Vec<TypeParameter>,
    extends: Option<HeritageExpression>,
    implements: Vec<TypeReference>,
    elements: Vec<ClassElement>,
) -> Class {
    Class {
        is_abstract,
        ..class_expression(name, type_parameters, extends, implements, elements)
    }
}

pub fn heritage_expression(expression: Expression, type_arguments: Vec<TypeNode>) -> HeritageExpression {
    HeritageExpression { expression, type_arguments: type_arguments.into_boxed_slice() }
}

/// `target.name`
pub fn member_dot(target: Expression, name: Identifier) -> MemberExpression {
    MemberExpression { target: MemberTarget::Expression(target), access: MemberAccess::Dot(name) }
}

/// `target[index]`
pub fn member_bracket(target: Expression, index: Expression) -> MemberExpression {
    MemberExpression { target: MemberTarget::Expression(target), access: MemberAccess::Bracket(index) }
}

/// `super.name`
pub fn super_dot(name: Identifier) -> MemberExpression {
    MemberExpression { target: MemberTarget::Super, access: MemberAccess::Dot(name) }
}

/// `super[index]`
pub fn super_bracket(index: Expression) -> MemberExpression {
    MemberExpression { target: MemberTarget::Super, access: MemberAccess::Bracket(index) }
}

pub fn argument(expression: Expression) -> Argument {
    Argument { expression, spread: false }
}

pub fn spread_argument(expression: Expression) -> Argument {
    Argument { expression, spread: true }
}

pub fn argument_list(arguments: Vec<Argument>) -> ArgumentList {
    ArgumentList { arguments: arguments.into_boxed_slice() }
}

pub fn call_expression(callee: Expression, type_arguments: Vec<TypeNode>, arguments: ArgumentList) -> CallExpression {
    CallExpression {
        kind: CallKind::Call,
        callee: Some(callee),
        type_arguments: type_arguments.into_boxed_slice(),
        arguments: Some(arguments),
    }
}

/// `new callee<T>(args)`; `arguments` is `None` for `new callee`.
pub fn new_expression(
    callee: Expression,
    type_arguments: Vec<TypeNode>,
    arguments: Option<ArgumentList>,
) -> CallExpression {
    CallExpression {
        kind: CallKind::New,
        callee: Some(callee),
        type_arguments: type_arguments.into_boxed_slice(),
        arguments,
    }
}

pub fn super_call(arguments: ArgumentList) -> CallExpression {
    CallExpression {
        kind: CallKind::Super,
        callee: None,
        type_arguments: Box::default(),
        arguments: Some(arguments),
    }
}

/// A prefix or postfix unary expression. `++`/`--` require a simple assignment target.
pub fn unary_expression(operator: UnaryOperator, operand: Expression) -> NodeResult<UnaryExpression> {
    if operator.is_update() && !operand.is_simple_assignment_target() {
        return Err(NodeError::InvalidUpdateOperand(operator.text()));
    }
    Ok(UnaryExpression { operator, operand })
}

pub fn type_assertion(type_node: TypeNode, expression: Expression) -> TypeAssertion {
    TypeAssertion { type_node, expression }
}

pub fn as_expression(expression: Expression, type_node: TypeNode) -> AsExpression {
    AsExpression { expression, type_node }
}

pub fn binary_expression(left: Expression, operator: BinaryOperator, right: Expression) -> BinaryExpression {
    BinaryExpression { left, operator, right }
}

pub fn conditional_expression(condition: Expression, when_true: Expression, when_false: Expression) -> ConditionalExpression {
    ConditionalExpression { condition, when_true, when_false }
}

/// An assignment. `=` accepts destructuring targets; compound operators need a
/// simple assignment target.
pub fn assignment_expression(
    target: Expression,
    operator: AssignmentOperator,
    value: Expression,
) -> NodeResult<AssignmentExpression> {
    let valid = if operator == AssignmentOperator::Assign {
        target.is_assignment_target()
    } else {
        target.is_simple_assignment_target()
    };
    if !valid {
        return Err(NodeError::InvalidAssignmentTarget);
    }
    Ok(AssignmentExpression { target, operator, value })
}

pub fn arrow_function(parameters: ArrowParameters, body: ArrowBody) -> ArrowFunction {
    ArrowFunction { parameters, body }
}

pub fn comma_expression(expressions: Vec<Expression>) -> NodeResult<CommaExpression> {
    require_len("comma expression", &expressions, 2)?;
    Ok(CommaExpression { expressions: expressions.into_boxed_slice() })
}

// ============================================================================
// Statements
// ============================================================================

pub fn source_file(statements: Vec<Statement>) -> SourceFile {
    SourceFile { statements: statements.into_boxed_slice() }
}

pub fn block(statements: Vec<Statement>) -> Block {
    Block { statements: statements.into_boxed_slice() }
}

pub fn variable_declaration(
    target: BindingTarget,
    type_annotation: Option<TypeNode>,
    initializer: Option<Expression>,
) -> VariableDeclaration {
    VariableDeclaration { target, type_annotation, initializer }
}

pub fn variable_declaration_list(
    kind: VariableKind,
    declarations: Vec<VariableDeclaration>,
) -> NodeResult<VariableDeclarationList> {
    require_len("variable declaration list", &declarations, 1)?;
    Ok(VariableDeclarationList { kind, declarations: declarations.into_boxed_slice() })
}

/// A `var` statement.
pub fn variable_statement(list: VariableDeclarationList) -> NodeResult<Statement> {
    if list.kind != VariableKind::Var {
        return Err(NodeError::InvalidVariableKind(list.kind.text()));
    }
    Ok(Statement::Variable(list))
}

/// A `let` or `const` declaration.
pub fn lexical_declaration(list: VariableDeclarationList) -> NodeResult<Declaration> {
    if list.kind == VariableKind::Var {
        return Err(NodeError::InvalidVariableKind(list.kind.text()));
    }
    Ok(Declaration::Lexical(list))
}

pub fn empty_statement() -> Statement {
    Statement::Empty
}

pub fn debugger_statement() -> Statement {
    Statement::Debugger
}

pub fn expression_statement(expression: Expression) -> ExpressionStatement {
    ExpressionStatement { expression }
}

pub fn if_statement(condition: Expression, then_statement: Statement, else_statement: Option<Statement>) -> IfStatement {
    IfStatement { condition, then_statement, else_statement }
}

pub fn do_statement(body: Statement, condition: Expression) -> DoStatement {
    DoStatement { body, condition }
}

pub fn while_statement(condition: Expression, body: Statement) -> WhileStatement {
    WhileStatement { condition, body }
}

pub fn for_statement(
    initializer: Option<ForInitializer>,
    condition: Option<Expression>,
    incrementor: Option<Expression>,
    body: Statement,
) -> ForStatement {
    ForStatement { initializer, condition, incrementor, body }
}

pub fn for_in_statement(binding: ForBinding, expression: Expression, body: Statement) -> Statement {
    Statement::ForIn(Box::new(ForEachStatement { binding, expression, body }))
}

pub fn for_of_statement(binding: ForBinding, expression: Expression, body: Statement) -> Statement {
    Statement::ForOf(Box::new(ForEachStatement { binding, expression, body }))
}

pub fn continue_statement(label: Option<Identifier>) -> ContinueStatement {
    ContinueStatement { label }
}

pub fn break_statement(label: Option<Identifier>) -> BreakStatement {
    BreakStatement { label }
}

pub fn return_statement(expression: Option<Expression>) -> ReturnStatement {
    ReturnStatement { expression }
}

pub fn with_statement(object: Expression, body: Statement) -> WithStatement {
    WithStatement { object, body }
}

pub fn switch_statement(discriminant: Expression, clauses: Vec<CaseClause>) -> NodeResult<SwitchStatement> {
    if clauses.iter().filter(|clause| clause.test.is_none()).count() > 1 {
        return Err(NodeError::DuplicateDefaultClause);
    }
    Ok(SwitchStatement { discriminant, clauses: clauses.into_boxed_slice() })
}

pub fn case_clause(test: Expression, statements: Vec<Statement>) -> CaseClause {
    CaseClause { test: Some(test), statements: statements.into_boxed_slice() }
}

pub fn default_clause(statements: Vec<Statement>) -> CaseClause {
    CaseClause { test: None, statements: statements.into_boxed_slice() }
}

pub fn labeled_statement(label: Identifier, body: Statement) -> LabeledStatement {
    LabeledStatement { label, body }
}

pub fn throw_statement(expression: Expression) -> ThrowStatement {
    ThrowStatement { expression }
}

pub fn try_statement(
    block: Block,
    catch_clause: Option<CatchClause>,
    finally_block: Option<Block>,
) -> NodeResult<TryStatement> {
    if catch_clause.is_none() && finally_block.is_none() {
        return Err(NodeError::MissingCatchOrFinally);
    }
    Ok(TryStatement { block, catch_clause, finally_block })
}

pub fn catch_clause(parameter: BindingTarget, body: Block) -> CatchClause {
    CatchClause { parameter, body }
}

// ============================================================================
// Declarations
// ============================================================================

pub fn interface_declaration(
    name: Identifier,
    type_parameters: Vec<TypeParameter>,
    extends: Vec<TypeReference>,
    members: Vec<TypeMember>,
) -> InterfaceDeclaration {
    InterfaceDeclaration {
        name,
        type_parameters: type_parameters.into_boxed_slice(),
        extends: extends.into_boxed_slice(),
        members: members.into_boxed_slice(),
    }
}

pub fn type_alias_declaration(
    name: Identifier,
    type_parameters: Vec<TypeParameter>,
    type_node: TypeNode,
) -> TypeAliasDeclaration {
    TypeAliasDeclaration { name, type_parameters: type_parameters.into_boxed_slice(), type_node }
}

pub fn enum_declaration(is_const: bool, name: Identifier, members: Vec<EnumMember>) -> EnumDeclaration {
    EnumDeclaration { is_const, name, members: members.into_boxed_slice() }
}

pub fn enum_member(name: PropertyName, initializer: Option<Expression>) -> NodeResult<EnumMember> {
    if matches!(name, PropertyName::Computed(_)) {
        return Err(NodeError::ComputedEnumMemberName);
    }
    Ok(EnumMember { name, initializer })
}

pub fn namespace_declaration(name: ModuleName, body: Vec<Statement>) -> NamespaceDeclaration {
    NamespaceDeclaration { name, body: body.into_boxed_slice() }
}

/// Whether `statement` may follow `declare` or `export`.
fn is_modifiable_statement(statement: &Statement) -> bool {
    match statement {
        Statement::Variable(_) => true,
        Statement::Declaration(declaration) => !matches!(
            **declaration,
            Declaration::Ambient(_) | Declaration::Import(_) | Declaration::Export(_)
        ),
        _ => false,
    }
}

/// `declare <statement>`, where the statement is a variable statement or a
/// declaration other than an import, export or another ambient declaration.
pub fn ambient_declaration(declaration: Statement) -> NodeResult<AmbientDeclaration> {
    if !is_modifiable_statement(&declaration) {
        return Err(NodeError::InvalidModifiedStatement("declare"));
    }
    Ok(AmbientDeclaration { declaration: Box::new(declaration) })
}

pub fn import_declaration(clause: Option<ImportClause>, module: StringLiteral) -> ImportDeclaration {
    ImportDeclaration { clause, module }
}

pub fn import_clause(default: Option<Identifier>, bindings: Option<ImportBindings>) -> NodeResult<ImportClause> {
    if default.is_none() && bindings.is_none() {
        return Err(NodeError::EmptyImportClause);
    }
    Ok(ImportClause { default, bindings })
}

pub fn named_specifier(name: Identifier, alias: Option<Identifier>) -> NamedSpecifier {
    NamedSpecifier { name, alias }
}

pub fn import_alias_declaration(name: Identifier, reference: ModuleReference) -> ImportAliasDeclaration {
    ImportAliasDeclaration { name, reference }
}

/// `export <statement>`; the statement may also be an ambient declaration or
/// an import alias.
pub fn exported_declaration(declaration: Statement) -> NodeResult<ExportDeclaration> {
    let valid = is_modifiable_statement(&declaration)
        || matches!(
            &declaration,
            Statement::Declaration(inner)
                if matches!(**inner, Declaration::Ambient(_) | Declaration::ImportAlias(_))
        );
    if !valid {
        return Err(NodeError::InvalidModifiedStatement("export"));
    }
    Ok(ExportDeclaration::Declaration(ExportedDeclaration { declaration: Box::new(declaration) }))
}

pub fn export_default(default: ExportDefault) -> ExportDeclaration {
    ExportDeclaration::Default(default)
}

pub fn export_named(specifiers: Vec<NamedSpecifier>, module: Option<StringLiteral>) -> ExportDeclaration {
    ExportDeclaration::Named(NamedExports { specifiers: specifiers.into_boxed_slice(), module })
}

pub fn export_all(module: StringLiteral) -> ExportDeclaration {
    ExportDeclaration::All(module)
}

pub fn export_assignment(expression: Expression) -> ExportDeclaration {
    ExportDeclaration::Assignment(expression)
}

// ============================================================================
// Class Elements
// ============================================================================

pub fn property_member(
    modifiers: ModifierFlags,
    name: PropertyName,
    optional: bool,
    type_annotation: Option<TypeNode>,
    initializer: Option<Expression>,
) -> PropertyMember {
    PropertyMember { modifiers, name, optional, type_annotation, initializer }
}

pub fn method_definition(
    modifiers: ModifierFlags,
    name: PropertyName,
    optional: bool,
    signature: CallSignature,
    body: Option<Block>,
) -> MethodDefinition {
    MethodDefinition { modifiers, name, optional, signature, body }
}

pub fn constructor_member(modifiers: ModifierFlags, parameters: ParameterList, body: Option<Block>) -> ConstructorMember {
    ConstructorMember { modifiers, parameters, body }
}

pub fn index_signature(
    parameter_name: Identifier,
    parameter_type: TypeNode,
    type_annotation: TypeNode,
) -> NodeResult<IndexSignature> {
    let parameter_type = match parameter_type {
        TypeNode::Predefined(predefined @ (PredefinedType::String | PredefinedType::Number)) => predefined,
        _ => return Err(NodeError::InvalidIndexSignatureParameterType),
    };
    Ok(IndexSignature { parameter_name, parameter_type, type_annotation })
}

// ============================================================================
// Types
// ============================================================================

pub fn predefined_type(predefined: PredefinedType) -> TypeNode {
    TypeNode::Predefined(predefined)
}

pub fn type_reference(name: EntityName, type_arguments: Vec<TypeNode>) -> TypeReference {
    TypeReference { name, type_arguments: type_arguments.into_boxed_slice() }
}

pub fn parenthesized_type(type_node: TypeNode) -> TypeNode {
    TypeNode::Parenthesized(Box::new(ParenthesizedType { type_node }))
}

pub fn array_type(element_type: TypeNode) -> TypeNode {
    TypeNode::Array(Box::new(ArrayType { element_type }))
}

pub fn tuple_type(elements: Vec<TypeNode>) -> NodeResult<TupleType> {
    require_len("tuple type", &elements, 1)?;
    Ok(TupleType { elements: elements.into_boxed_slice() })
}

pub fn union_type(types: Vec<TypeNode>) -> NodeResult<UnionType> {
    require_len("union type", &types, 2)?;
    Ok(UnionType { types: types.into_boxed_slice() })
}

pub fn intersection_type(types: Vec<TypeNode>) -> NodeResult<IntersectionType> {
    require_len("intersection type", &types, 2)?;
    Ok(IntersectionType { types: types.into_boxed_slice() })
}

pub fn function_type(type_parameters: Vec<TypeParameter>, parameters: ParameterList, return_type: TypeNode) -> TypeNode {
    TypeNode::Function(Box::new(FunctionType {
        type_parameters: type_parameters.into_boxed_slice(),
        parameters,
        return_type,
    }))
}

pub fn constructor_type(type_parameters: Vec<TypeParameter>, parameters: ParameterList, return_type: TypeNode) -> TypeNode {
    TypeNode::Constructor(Box::new(FunctionType {
        type_parameters: type_parameters.into_boxed_slice(),
        parameters,
        return_type,
    }))
}

pub fn type_query(name: EntityName) -> TypeQuery {
    TypeQuery { name }
}

pub fn this_type() -> TypeNode {
    TypeNode::This
}

pub fn object_type(members: Vec<TypeMember>) -> ObjectType {
    ObjectType { members: members.into_boxed_slice() }
}

pub fn type_predicate(parameter: Identifier, type_node: TypeNode) -> TypePredicate {
    TypePredicate { parameter, type_node }
}

pub fn property_signature(name: PropertyName, optional: bool, type_annotation: Option<TypeNode>) -> TypeMember {
    TypeMember::Property(PropertySignature { name, optional, type_annotation })
}

pub fn method_signature(name: PropertyName, optional: bool, signature: CallSignature) -> TypeMember {
    TypeMember::Method(MethodSignature { name, optional, signature })
}

// ============================================================================
// Signatures, Parameters and Bindings
// ============================================================================

pub fn type_parameter(name: Identifier, constraint: Option<TypeNode>) -> TypeParameter {
    TypeParameter { name, constraint }
}

pub fn call_signature(
    type_parameters: Vec<TypeParameter>,
    parameters: ParameterList,
    return_type: Option<TypeNode>,
) -> CallSignature {
    CallSignature { type_parameters: type_parameters.into_boxed_slice(), parameters, return_type }
}

pub fn parameter_list(parameters: Vec<Parameter>, rest: Option<RestParameter>) -> ParameterList {
    ParameterList { parameters: parameters.into_boxed_slice(), rest }
}

pub fn parameter(
    modifiers: ModifierFlags,
    target: BindingTarget,
    optional: bool,
    type_annotation: Option<TypeNode>,
    initializer: Option<Expression>,
) -> NodeResult<Parameter> {
    if optional && initializer.is_some() {
        return Err(NodeError::OptionalParameterWithInitializer);
    }
    Ok(Parameter { modifiers, target, optional, type_annotation, initializer })
}

/// A plain `name` or `name: T` parameter.
pub fn simple_parameter(name: Identifier, type_annotation: Option<TypeNode>) -> Parameter {
    Parameter {
        modifiers: ModifierFlags::NONE,
        target: BindingTarget::Identifier(name),
        optional: false,
        type_annotation,
        initializer: None,
    }
}

pub fn rest_parameter(name: Identifier, type_annotation: Option<TypeNode>) -> RestParameter {
    RestParameter { name, type_annotation }
}

pub fn object_binding_pattern(properties: Vec<BindingProperty>) -> ObjectBindingPattern {
    ObjectBindingPattern { properties: properties.into_boxed_slice() }
}

pub fn single_name_binding(name: Identifier, initializer: Option<Expression>) -> BindingProperty {
    BindingProperty::SingleName(SingleNameBinding { name, initializer })
}

pub fn property_binding(name: PropertyName, element: BindingElement) -> BindingProperty {
    BindingProperty::Property(PropertyBinding { name, element })
}

pub fn binding_element(target: BindingTarget, initializer: Option<Expression>) -> BindingElement {
    BindingElement { target, initializer }
}

pub fn array_binding_pattern(elements: Vec<Option<BindingElement>>, rest: Option<BindingTarget>) -> ArrayBindingPattern {
    ArrayBindingPattern { elements: elements.into_boxed_slice(), rest: rest.map(Box::new) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Identifier {
        identifier(name).unwrap()
    }

    #[test]
    fn test_identifier_validation() {
        assert_eq!(ident("jar").name(), "jar");
        assert_eq!(ident("$_x1").name(), "$_x1");
        assert_eq!(ident("ünïcödé").name(), "ünïcödé");
        assert_eq!(identifier(""), Err(NodeError::EmptyIdentifier));
        assert!(matches!(identifier("1abc"), Err(NodeError::InvalidIdentifier(_))));
        assert!(matches!(identifier("a-b"), Err(NodeError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_numeric_literal_bounds() {
        assert!(numeric_literal(MAX_SAFE_INTEGER, NumericLiteralKind::Hex).is_ok());
        assert!(numeric_literal(MAX_SAFE_INTEGER + 1.0, NumericLiteralKind::Hex).is_err());
        assert!(numeric_literal(MAX_SAFE_INTEGER + 1.0, NumericLiteralKind::Decimal).is_ok());
        assert!(numeric_literal(1.5, NumericLiteralKind::Binary).is_err());
        assert!(numeric_literal(-1.0, NumericLiteralKind::Decimal).is_err());
        assert!(numeric_literal(-0.0, NumericLiteralKind::Decimal).is_err());
        assert!(numeric_literal(-0.0, NumericLiteralKind::Hex).is_err());
        assert!(numeric_literal(0.0, NumericLiteralKind::Decimal).is_ok());
        assert!(numeric_literal(f64::INFINITY, NumericLiteralKind::Decimal).is_err());
        assert!(numeric_literal(f64::NAN, NumericLiteralKind::Decimal).is_err());
    }

    #[test]
    fn test_list_minimums() {
        let one = vec![Expression::This];
        assert_eq!(
            comma_expression(one).unwrap_err(),
            NodeError::TooFewElements { node: "comma expression", min: 2, found: 1 }
        );
        assert!(union_type(vec![predefined_type(PredefinedType::Any)]).is_err());
        assert!(tuple_type(vec![]).is_err());
        assert!(variable_declaration_list(VariableKind::Let, vec![]).is_err());
        assert!(entity_name(vec![]).is_err());
    }

    #[test]
    fn test_try_requires_handler() {
        assert_eq!(try_statement(block(vec![]), None, None).unwrap_err(), NodeError::MissingCatchOrFinally);
        assert!(try_statement(block(vec![]), None, Some(block(vec![]))).is_ok());
    }

    #[test]
    fn test_assignment_targets() {
        let value = Expression::Null;
        assert!(assignment_expression(ident("x").into(), AssignmentOperator::Assign, value.clone()).is_ok());
        let pattern: Expression = array_literal(vec![]).into();
        assert!(assignment_expression(pattern.clone(), AssignmentOperator::Assign, value.clone()).is_ok());
        assert!(assignment_expression(pattern, AssignmentOperator::AddAssign, value.clone()).is_err());
        assert!(assignment_expression(Expression::This, AssignmentOperator::Assign, value).is_err());
        assert!(unary_expression(UnaryOperator::PostIncrement, Expression::Null).is_err());
        assert!(unary_expression(UnaryOperator::Minus, Expression::Null).is_ok());
    }

    #[test]
    fn test_modified_statements() {
        let list = variable_declaration_list(
            VariableKind::Var,
            vec![variable_declaration(ident("x").into(), None, None)],
        )
        .unwrap();
        let var = variable_statement(list).unwrap();
        let ambient = ambient_declaration(var.clone()).unwrap();
        assert!(ambient_declaration(Statement::Debugger).is_err());
        assert!(ambient_declaration(Declaration::Ambient(ambient.clone()).into()).is_err());
        assert!(exported_declaration(Declaration::Ambient(ambient).into()).is_ok());
        assert!(exported_declaration(Statement::Empty).is_err());
    }

    #[test]
    fn test_parameter_and_index_signature() {
        let any = predefined_type(PredefinedType::Any);
        assert_eq!(
            parameter(ModifierFlags::NONE, ident("x").into(), true, None, Some(Expression::Null)).unwrap_err(),
            NodeError::OptionalParameterWithInitializer
        );
        assert!(index_signature(ident("k"), predefined_type(PredefinedType::String), any.clone()).is_ok());
        assert!(index_signature(ident("k"), any.clone(), any).is_err());
    }

    #[test]
    fn test_regular_expression_literal() {
        let regex = regular_expression_literal("a[/]b\\/", "gi").unwrap();
        assert_eq!(regex.pattern(), "a[/]b\\/");
        assert!(regular_expression_literal("", "").is_err());
        assert!(regular_expression_literal("a/b", "").is_err());
        assert!(regular_expression_literal("ab", "gg").is_err());
        assert!(regular_expression_literal("ab", "x").is_err());
    }

    #[test]
    fn test_with_updates_leave_original_untouched() {
        let signature = call_signature(vec![], parameter_list(vec![], None), None);
        let original = function_declaration(ident("f"), signature, None);
        let updated = original.with_body(block(vec![Statement::Empty]));
        assert!(original.body().is_none());
        assert_eq!(updated.body().map(|b| b.statements.len()), Some(1));
        assert_eq!(updated.name(), original.name());
    }
}
