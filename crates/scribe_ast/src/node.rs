//! Syntax tree node definitions.
//!
//! Nodes are plain owned values: a node exclusively owns its children, lists are
//! fixed-size boxed slices, and nothing is mutated after construction. Nodes whose
//! invariants go beyond "required children are present" keep their fields private
//! and are built through [`crate::factory`]; the rest expose public fields.

use crate::modifiers::ModifierFlags;
use unicode_xid::UnicodeXID;

// ============================================================================
// Source File
// ============================================================================

/// The root of a parsed translation unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceFile {
    pub statements: Box<[Statement]>,
}

// ============================================================================
// Names and Literals
// ============================================================================

/// An identifier with its decoded text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub(crate) name: String,
}

impl Identifier {
    /// The decoded identifier text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `ch` may begin an identifier.
    pub fn is_start_char(ch: char) -> bool {
        ch == '$' || ch == '_' || ch.is_ascii_alphabetic() || (!ch.is_ascii() && UnicodeXID::is_xid_start(ch))
    }

    /// Whether `ch` may continue an identifier.
    pub fn is_part_char(ch: char) -> bool {
        ch == '$'
            || ch == '_'
            || ch.is_ascii_alphanumeric()
            || ch == '\u{200C}'
            || ch == '\u{200D}'
            || (!ch.is_ascii() && UnicodeXID::is_xid_continue(ch))
    }
}

/// A dotted name such as `A.B.C`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName {
    pub(crate) parts: Box<[Identifier]>,
}

impl EntityName {
    pub fn parts(&self) -> &[Identifier] {
        &self.parts
    }

    /// The rightmost name.
    pub fn last(&self) -> &Identifier {
        &self.parts[self.parts.len() - 1]
    }
}

/// How a numeric literal was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericLiteralKind {
    Decimal,
    Binary,
    Octal,
    Hex,
}

impl NumericLiteralKind {
    /// The radix digits are written in.
    pub fn radix(self) -> u32 {
        match self {
            NumericLiteralKind::Decimal => 10,
            NumericLiteralKind::Binary => 2,
            NumericLiteralKind::Octal => 8,
            NumericLiteralKind::Hex => 16,
        }
    }

    /// The largest value a literal of this kind may carry.
    pub fn max_value(self) -> f64 {
        match self {
            NumericLiteralKind::Decimal => f64::MAX,
            _ => MAX_SAFE_INTEGER,
        }
    }
}

impl std::fmt::Display for NumericLiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericLiteralKind::Decimal => write!(f, "decimal"),
            NumericLiteralKind::Binary => write!(f, "binary"),
            NumericLiteralKind::Octal => write!(f, "octal"),
            NumericLiteralKind::Hex => write!(f, "hexadecimal"),
        }
    }
}

/// 2^53 - 1, the largest integer every consumer can represent exactly.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A non-negative numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericLiteral {
    pub(crate) value: f64,
    pub(crate) kind: NumericLiteralKind,
}

impl NumericLiteral {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn kind(&self) -> NumericLiteralKind {
        self.kind
    }
}

/// The quote character a string literal is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuoteKind {
    #[default]
    Single,
    Double,
}

impl QuoteKind {
    pub fn as_char(self) -> char {
        match self {
            QuoteKind::Single => '\'',
            QuoteKind::Double => '"',
        }
    }
}

/// A string literal holding its cooked (unescaped) value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringLiteral {
    pub value: String,
    pub quote: QuoteKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BooleanLiteral {
    pub value: bool,
}

/// A regular expression literal, `/pattern/flags`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegularExpressionLiteral {
    pub(crate) pattern: String,
    pub(crate) flags: String,
}

impl RegularExpressionLiteral {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }
}

/// A template literal: cooked head text followed by substitution spans.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLiteral {
    pub head: String,
    pub spans: Box<[TemplateSpan]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSpan {
    pub expression: Expression,
    /// Cooked text following the substitution.
    pub literal: String,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    This,
    Identifier(Identifier),
    Null,
    Boolean(BooleanLiteral),
    Number(NumericLiteral),
    String(StringLiteral),
    RegularExpression(RegularExpressionLiteral),
    Template(Box<TemplateLiteral>),
    Array(ArrayLiteral),
    Object(ObjectLiteral),
    Parenthesized(Box<ParenthesizedExpression>),
    Function(Box<Function>),
    Class(Box<Class>),
    Member(Box<MemberExpression>),
    Call(Box<CallExpression>),
    NewTarget,
    Unary(Box<UnaryExpression>),
    TypeAssertion(Box<TypeAssertion>),
    As(Box<AsExpression>),
    Binary(Box<BinaryExpression>),
    Conditional(Box<ConditionalExpression>),
    Assignment(Box<AssignmentExpression>),
    Arrow(Box<ArrowFunction>),
    Comma(CommaExpression),
}

impl Expression {
    /// Whether this expression may appear on the left of a simple assignment.
    pub fn is_assignment_target(&self) -> bool {
        match self {
            Expression::Identifier(_) | Expression::Member(_) => true,
            Expression::Array(_) | Expression::Object(_) => true,
            Expression::Parenthesized(inner) => inner.expression.is_simple_assignment_target(),
            _ => false,
        }
    }

    /// Whether this expression may be the operand of `++`/`--` or a compound assignment.
    pub fn is_simple_assignment_target(&self) -> bool {
        match self {
            Expression::Identifier(_) | Expression::Member(_) => true,
            Expression::Parenthesized(inner) => inner.expression.is_simple_assignment_target(),
            _ => false,
        }
    }
}

/// An element of an array literal; `None` in the owning list is a hole.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayElement {
    pub expression: Expression,
    pub spread: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayLiteral {
    pub elements: Box<[Option<ArrayElement>]>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectLiteral {
    pub properties: Box<[PropertyDefinition]>,
}

/// A member of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyDefinition {
    /// `{ x }`
    Shorthand(Identifier),
    /// `{ x = 1 }`, only valid as an assignment pattern.
    CoverInitialized(CoverInitializedName),
    /// `{ name: value }`
    Assignment(PropertyAssignment),
    /// `{ name(params) { body } }`
    Method(MethodDefinition),
    Getter(GetAccessor),
    Setter(SetAccessor),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverInitializedName {
    pub name: Identifier,
    pub initializer: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAssignment {
    pub name: PropertyName,
    pub value: Expression,
}

/// The name of a property in an object literal, class, interface or enum.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyName {
    Identifier(Identifier),
    String(StringLiteral),
    Number(NumericLiteral),
    Computed(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenthesizedExpression {
    pub expression: Expression,
}

/// A function expression or declaration.
///
/// Declarations always carry a name and may omit the body (an overload);
/// expressions always carry a body and may omit the name.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub(crate) name: Option<Identifier>,
    pub(crate) signature: CallSignature,
    pub(crate) body: Option<Block>,
}

impl Function {
    pub fn name(&self) -> Option<&Identifier> {
        self.name.as_ref()
    }

    pub fn signature(&self) -> &CallSignature {
        &self.signature
    }

    pub fn body(&self) -> Option<&Block> {
        self.body.as_ref()
    }

    pub fn with_name(&self, name: Identifier) -> Self {
        Self { name: Some(name), ..self.clone() }
    }

    pub fn with_signature(&self, signature: CallSignature) -> Self {
        Self { signature, ..self.clone() }
    }

    pub fn with_body(&self, body: Block) -> Self {
        Self { body: Some(body), ..self.clone() }
    }
}

/// A class expression or declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub(crate) is_abstract: bool,
    pub(crate) name: Option<Identifier>,
    pub(crate) type_parameters: Box<[TypeParameter]>,
    pub(crate) extends: Option<HeritageExpression>,
    pub(crate) implements: Box<[TypeReference]>,
    pub(crate) elements: Box<[ClassElement]>,
}

impl Class {
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn name(&self) -> Option<&Identifier> {
        self.name.as_ref()
    }

    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.type_parameters
    }

    pub fn extends(&self) -> Option<&HeritageExpression> {
        self.extends.as_ref()
    }

    pub fn implements(&self) -> &[TypeReference] {
        &self.implements
    }

    pub fn elements(&self) -> &[ClassElement] {
        &self.elements
    }

    pub fn with_name(&self, name: Identifier) -> Self {
        Self { name: Some(name), ..self.clone() }
    }

    pub fn with_extends(&self, extends: Option<HeritageExpression>) -> Self {
        Self { extends, ..self.clone() }
    }

    pub fn with_elements(&self, elements: Vec<ClassElement>) -> Self {
        Self { elements: elements.into_boxed_slice(), ..self.clone() }
    }
}

/// The `extends` target of a class: an expression with optional type arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct HeritageExpression {
    pub expression: Expression,
    pub type_arguments: Box<[TypeNode]>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassElement {
    Property(PropertyMember),
    Method(MethodDefinition),
    GetAccessor(GetAccessor),
    SetAccessor(SetAccessor),
    Constructor(ConstructorMember),
    Index(IndexSignature),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMember {
    pub modifiers: ModifierFlags,
    pub name: PropertyName,
    pub optional: bool,
    pub type_annotation: Option<TypeNode>,
    pub initializer: Option<Expression>,
}

/// A method in a class or object literal. Object literal methods always have a body.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDefinition {
    pub modifiers: ModifierFlags,
    pub name: PropertyName,
    pub optional: bool,
    pub signature: CallSignature,
    pub body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetAccessor {
    pub modifiers: ModifierFlags,
    pub name: PropertyName,
    pub return_type: Option<TypeNode>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetAccessor {
    pub modifiers: ModifierFlags,
    pub name: PropertyName,
    pub parameter: Parameter,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorMember {
    pub modifiers: ModifierFlags,
    pub parameters: ParameterList,
    pub body: Option<Block>,
}

/// `[key: string]: T` in a class or object type.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSignature {
    pub(crate) parameter_name: Identifier,
    pub(crate) parameter_type: PredefinedType,
    pub(crate) type_annotation: TypeNode,
}

impl IndexSignature {
    pub fn parameter_name(&self) -> &Identifier {
        &self.parameter_name
    }

    /// Either `string` or `number`.
    pub fn parameter_type(&self) -> PredefinedType {
        self.parameter_type
    }

    pub fn type_annotation(&self) -> &TypeNode {
        &self.type_annotation
    }
}

/// `super` or an expression, as the object of a member access.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberTarget {
    Super,
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberAccess {
    /// `.name`; the name may be any identifier name, including reserved words.
    Dot(Identifier),
    /// `[expression]`
    Bracket(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub target: MemberTarget,
    pub access: MemberAccess,
}

/// The production a [`CallExpression`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    Call,
    New,
    Super,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub expression: Expression,
    pub spread: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentList {
    pub arguments: Box<[Argument]>,
}

/// A plain call, a `new` call or a `super(...)` call.
///
/// Super calls have no callee; `new` calls may omit their argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub(crate) kind: CallKind,
    pub(crate) callee: Option<Expression>,
    pub(crate) type_arguments: Box<[TypeNode]>,
    pub(crate) arguments: Option<ArgumentList>,
}

impl CallExpression {
    pub fn kind(&self) -> CallKind {
        self.kind
    }

    /// The called expression, absent for `super(...)`.
    pub fn callee(&self) -> Option<&Expression> {
        self.callee.as_ref()
    }

    pub fn type_arguments(&self) -> &[TypeNode] {
        &self.type_arguments
    }

    /// The argument list, absent only for `new X` written without parentheses.
    pub fn arguments(&self) -> Option<&ArgumentList> {
        self.arguments.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
    BitwiseNot,
    LogicalNot,
    Delete,
    Void,
    TypeOf,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

impl UnaryOperator {
    pub fn text(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::BitwiseNot => "~",
            UnaryOperator::LogicalNot => "!",
            UnaryOperator::Delete => "delete",
            UnaryOperator::Void => "void",
            UnaryOperator::TypeOf => "typeof",
            UnaryOperator::PreIncrement | UnaryOperator::PostIncrement => "++",
            UnaryOperator::PreDecrement | UnaryOperator::PostDecrement => "--",
        }
    }

    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOperator::PostIncrement | UnaryOperator::PostDecrement)
    }

    pub fn is_update(self) -> bool {
        matches!(
            self,
            UnaryOperator::PreIncrement
                | UnaryOperator::PreDecrement
                | UnaryOperator::PostIncrement
                | UnaryOperator::PostDecrement
        )
    }

    /// Whether the operator is a word that needs a space before its operand.
    pub fn is_keyword(self) -> bool {
        matches!(self, UnaryOperator::Delete | UnaryOperator::Void | UnaryOperator::TypeOf)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub(crate) operator: UnaryOperator,
    pub(crate) operand: Expression,
}

impl UnaryExpression {
    pub fn operator(&self) -> UnaryOperator {
        self.operator
    }

    pub fn operand(&self) -> &Expression {
        &self.operand
    }
}

/// `<T>expression`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAssertion {
    pub type_node: TypeNode,
    pub expression: Expression,
}

/// `expression as T`
#[derive(Debug, Clone, PartialEq)]
pub struct AsExpression {
    pub expression: Expression,
    pub type_node: TypeNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Exponent,
    Multiply,
    Divide,
    Remainder,
    Add,
    Subtract,
    LeftShift,
    SignedRightShift,
    UnsignedRightShift,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    InstanceOf,
    In,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    BitwiseAnd,
    BitwiseXor,
    BitwiseOr,
    LogicalAnd,
    LogicalOr,
}

impl BinaryOperator {
    pub fn text(self) -> &'static str {
        match self {
            BinaryOperator::Exponent => "**",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::SignedRightShift => ">>",
            BinaryOperator::UnsignedRightShift => ">>>",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::InstanceOf => "instanceof",
            BinaryOperator::In => "in",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::StrictEqual => "===",
            BinaryOperator::StrictNotEqual => "!==",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
        }
    }

    /// Whether the operator is a word that always needs surrounding spaces.
    pub fn is_keyword(self) -> bool {
        matches!(self, BinaryOperator::InstanceOf | BinaryOperator::In)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Expression,
    pub operator: BinaryOperator,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub condition: Expression,
    pub when_true: Expression,
    pub when_false: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    ExponentAssign,
    DivideAssign,
    RemainderAssign,
    LeftShiftAssign,
    SignedRightShiftAssign,
    UnsignedRightShiftAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
}

impl AssignmentOperator {
    pub fn text(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubtractAssign => "-=",
            AssignmentOperator::MultiplyAssign => "*=",
            AssignmentOperator::ExponentAssign => "**=",
            AssignmentOperator::DivideAssign => "/=",
            AssignmentOperator::RemainderAssign => "%=",
            AssignmentOperator::LeftShiftAssign => "<<=",
            AssignmentOperator::SignedRightShiftAssign => ">>=",
            AssignmentOperator::UnsignedRightShiftAssign => ">>>=",
            AssignmentOperator::BitwiseAndAssign => "&=",
            AssignmentOperator::BitwiseOrAssign => "|=",
            AssignmentOperator::BitwiseXorAssign => "^=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub(crate) target: Expression,
    pub(crate) operator: AssignmentOperator,
    pub(crate) value: Expression,
}

impl AssignmentExpression {
    pub fn target(&self) -> &Expression {
        &self.target
    }

    pub fn operator(&self) -> AssignmentOperator {
        self.operator
    }

    pub fn value(&self) -> &Expression {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrowParameters {
    /// `x => ...`
    Identifier(Identifier),
    /// `(x, y): T => ...` and `<T>(x: T) => ...`
    Signature(CallSignature),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrowBody {
    Expression(Expression),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunction {
    pub parameters: ArrowParameters,
    pub body: ArrowBody,
}

/// Two or more expressions separated by commas.
#[derive(Debug, Clone, PartialEq)]
pub struct CommaExpression {
    pub(crate) expressions: Box<[Expression]>,
}

impl CommaExpression {
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(Block),
    Variable(VariableDeclarationList),
    Empty,
    Expression(ExpressionStatement),
    If(Box<IfStatement>),
    Do(Box<DoStatement>),
    While(Box<WhileStatement>),
    For(Box<ForStatement>),
    ForIn(Box<ForEachStatement>),
    ForOf(Box<ForEachStatement>),
    Continue(ContinueStatement),
    Break(BreakStatement),
    Return(ReturnStatement),
    With(Box<WithStatement>),
    Switch(Box<SwitchStatement>),
    Labeled(Box<LabeledStatement>),
    Throw(ThrowStatement),
    Try(Box<TryStatement>),
    Debugger,
    Declaration(Box<Declaration>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Box<[Statement]>,
}

impl Block {
    pub fn with_statements(&self, statements: Vec<Statement>) -> Self {
        Self { statements: statements.into_boxed_slice() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn text(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

/// One or more declarations sharing a `var`, `let` or `const` keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarationList {
    pub(crate) kind: VariableKind,
    pub(crate) declarations: Box<[VariableDeclaration]>,
}

impl VariableDeclarationList {
    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn declarations(&self) -> &[VariableDeclaration] {
        &self.declarations
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub target: BindingTarget,
    pub type_annotation: Option<TypeNode>,
    pub initializer: Option<Expression>,
}

impl VariableDeclaration {
    pub fn with_type_annotation(&self, type_annotation: Option<TypeNode>) -> Self {
        Self { type_annotation, ..self.clone() }
    }

    pub fn with_initializer(&self, initializer: Option<Expression>) -> Self {
        Self { initializer, ..self.clone() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_statement: Statement,
    pub else_statement: Option<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoStatement {
    pub body: Statement,
    pub condition: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInitializer {
    Variables(VariableDeclarationList),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub initializer: Option<ForInitializer>,
    pub condition: Option<Expression>,
    pub incrementor: Option<Expression>,
    pub body: Statement,
}

/// The left side of a `for...in` or `for...of` head.
#[derive(Debug, Clone, PartialEq)]
pub enum ForBinding {
    Variable(VariableKind, BindingTarget),
    Expression(Expression),
}

/// `for (binding in expression) body` or `for (binding of expression) body`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForEachStatement {
    pub binding: ForBinding,
    pub expression: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContinueStatement {
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BreakStatement {
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReturnStatement {
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithStatement {
    pub object: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub(crate) discriminant: Expression,
    pub(crate) clauses: Box<[CaseClause]>,
}

impl SwitchStatement {
    pub fn discriminant(&self) -> &Expression {
        &self.discriminant
    }

    pub fn clauses(&self) -> &[CaseClause] {
        &self.clauses
    }
}

/// A `case test:` clause, or the `default:` clause when `test` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub test: Option<Expression>,
    pub statements: Box<[Statement]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStatement {
    pub label: Identifier,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    pub(crate) block: Block,
    pub(crate) catch_clause: Option<CatchClause>,
    pub(crate) finally_block: Option<Block>,
}

impl TryStatement {
    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn catch_clause(&self) -> Option<&CatchClause> {
        self.catch_clause.as_ref()
    }

    pub fn finally_block(&self) -> Option<&Block> {
        self.finally_block.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub parameter: BindingTarget,
    pub body: Block,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `let` and `const` declarations.
    Lexical(VariableDeclarationList),
    Function(Function),
    Class(Class),
    Interface(InterfaceDeclaration),
    TypeAlias(TypeAliasDeclaration),
    Enum(EnumDeclaration),
    Namespace(NamespaceDeclaration),
    Ambient(AmbientDeclaration),
    Import(ImportDeclaration),
    ImportAlias(ImportAliasDeclaration),
    Export(ExportDeclaration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDeclaration {
    pub name: Identifier,
    pub type_parameters: Box<[TypeParameter]>,
    pub extends: Box<[TypeReference]>,
    pub members: Box<[TypeMember]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDeclaration {
    pub name: Identifier,
    pub type_parameters: Box<[TypeParameter]>,
    pub type_node: TypeNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDeclaration {
    pub is_const: bool,
    pub name: Identifier,
    pub members: Box<[EnumMember]>,
}

/// An enum member; its name is never computed.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub(crate) name: PropertyName,
    pub(crate) initializer: Option<Expression>,
}

impl EnumMember {
    pub fn name(&self) -> &PropertyName {
        &self.name
    }

    pub fn initializer(&self) -> Option<&Expression> {
        self.initializer.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleName {
    /// `namespace A.B.C { }`
    Entity(EntityName),
    /// `module "name" { }`
    String(StringLiteral),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDeclaration {
    pub name: ModuleName,
    pub body: Box<[Statement]>,
}

/// `declare` applied to a variable statement or a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientDeclaration {
    pub(crate) declaration: Box<Statement>,
}

impl AmbientDeclaration {
    pub fn declaration(&self) -> &Statement {
        &self.declaration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDeclaration {
    /// Absent for a side-effect import, `import "m";`.
    pub clause: Option<ImportClause>,
    pub module: StringLiteral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportClause {
    pub(crate) default: Option<Identifier>,
    pub(crate) bindings: Option<ImportBindings>,
}

impl ImportClause {
    pub fn default(&self) -> Option<&Identifier> {
        self.default.as_ref()
    }

    pub fn bindings(&self) -> Option<&ImportBindings> {
        self.bindings.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportBindings {
    /// `* as name`
    Namespace(Identifier),
    /// `{ a, b as c }`
    Named(Box<[NamedSpecifier]>),
}

/// `name` or `name as alias` in an import or export list.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSpecifier {
    pub name: Identifier,
    pub alias: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleReference {
    Entity(EntityName),
    Require(StringLiteral),
}

/// `import name = A.B;` or `import name = require("m");`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportAliasDeclaration {
    pub name: Identifier,
    pub reference: ModuleReference,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportDeclaration {
    /// `export <statement>`
    Declaration(ExportedDeclaration),
    /// `export default ...`
    Default(ExportDefault),
    /// `export { a, b as c } [from "m"];`
    Named(NamedExports),
    /// `export * from "m";`
    All(StringLiteral),
    /// `export = expression;`
    Assignment(Expression),
}

/// A variable statement or declaration marked with `export`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDeclaration {
    pub(crate) declaration: Box<Statement>,
}

impl ExportedDeclaration {
    pub fn declaration(&self) -> &Statement {
        &self.declaration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportDefault {
    Function(Function),
    Class(Class),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedExports {
    pub specifiers: Box<[NamedSpecifier]>,
    pub module: Option<StringLiteral>,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    Predefined(PredefinedType),
    Reference(TypeReference),
    Parenthesized(Box<ParenthesizedType>),
    Array(Box<ArrayType>),
    Tuple(TupleType),
    Union(UnionType),
    Intersection(IntersectionType),
    Function(Box<FunctionType>),
    Constructor(Box<FunctionType>),
    Query(TypeQuery),
    This,
    Object(ObjectType),
    Literal(LiteralType),
    Predicate(Box<TypePredicate>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredefinedType {
    Any,
    Number,
    Boolean,
    String,
    Symbol,
    Void,
    Null,
    Undefined,
    Never,
    Object,
}

impl PredefinedType {
    pub fn text(self) -> &'static str {
        match self {
            PredefinedType::Any => "any",
            PredefinedType::Number => "number",
            PredefinedType::Boolean => "boolean",
            PredefinedType::String => "string",
            PredefinedType::Symbol => "symbol",
            PredefinedType::Void => "void",
            PredefinedType::Null => "null",
            PredefinedType::Undefined => "undefined",
            PredefinedType::Never => "never",
            PredefinedType::Object => "object",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeReference {
    pub name: EntityName,
    pub type_arguments: Box<[TypeNode]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenthesizedType {
    pub type_node: TypeNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub element_type: TypeNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TupleType {
    pub(crate) elements: Box<[TypeNode]>,
}

impl TupleType {
    pub fn elements(&self) -> &[TypeNode] {
        &self.elements
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub(crate) types: Box<[TypeNode]>,
}

impl UnionType {
    pub fn types(&self) -> &[TypeNode] {
        &self.types
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionType {
    pub(crate) types: Box<[TypeNode]>,
}

impl IntersectionType {
    pub fn types(&self) -> &[TypeNode] {
        &self.types
    }
}

/// A function type `(x: T) => U` or, with `new`, a constructor type.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub type_parameters: Box<[TypeParameter]>,
    pub parameters: ParameterList,
    pub return_type: TypeNode,
}

/// `typeof A.B`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeQuery {
    pub name: EntityName,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectType {
    pub members: Box<[TypeMember]>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralType {
    String(StringLiteral),
    Number(NumericLiteral),
    Boolean(bool),
}

/// `x is T`, written as a return type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypePredicate {
    pub parameter: Identifier,
    pub type_node: TypeNode,
}

/// A member of an interface body or object type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeMember {
    Property(PropertySignature),
    Method(MethodSignature),
    Call(CallSignature),
    Construct(CallSignature),
    Index(IndexSignature),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    pub name: PropertyName,
    pub optional: bool,
    pub type_annotation: Option<TypeNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodSignature {
    pub name: PropertyName,
    pub optional: bool,
    pub signature: CallSignature,
}

// ============================================================================
// Signatures, Parameters and Bindings
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameter {
    pub name: Identifier,
    pub constraint: Option<TypeNode>,
}

/// Type parameters, parameters and an optional return type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallSignature {
    pub type_parameters: Box<[TypeParameter]>,
    pub parameters: ParameterList,
    pub return_type: Option<TypeNode>,
}

impl CallSignature {
    pub fn with_type_parameters(&self, type_parameters: Vec<TypeParameter>) -> Self {
        Self { type_parameters: type_parameters.into_boxed_slice(), ..self.clone() }
    }

    pub fn with_parameters(&self, parameters: ParameterList) -> Self {
        Self { parameters, ..self.clone() }
    }

    pub fn with_return_type(&self, return_type: Option<TypeNode>) -> Self {
        Self { return_type, ..self.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterList {
    pub parameters: Box<[Parameter]>,
    pub rest: Option<RestParameter>,
}

impl ParameterList {
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() && self.rest.is_none()
    }
}

/// A parameter; never both optional and initialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub(crate) modifiers: ModifierFlags,
    pub(crate) target: BindingTarget,
    pub(crate) optional: bool,
    pub(crate) type_annotation: Option<TypeNode>,
    pub(crate) initializer: Option<Expression>,
}

impl Parameter {
    /// Accessibility and `readonly` modifiers of a constructor parameter property.
    pub fn modifiers(&self) -> ModifierFlags {
        self.modifiers
    }

    pub fn target(&self) -> &BindingTarget {
        &self.target
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn type_annotation(&self) -> Option<&TypeNode> {
        self.type_annotation.as_ref()
    }

    pub fn initializer(&self) -> Option<&Expression> {
        self.initializer.as_ref()
    }

    pub fn with_type_annotation(&self, type_annotation: Option<TypeNode>) -> Self {
        Self { type_annotation, ..self.clone() }
    }

    pub fn with_modifiers(&self, modifiers: ModifierFlags) -> Self {
        Self { modifiers, ..self.clone() }
    }
}

/// `...name: T`
#[derive(Debug, Clone, PartialEq)]
pub struct RestParameter {
    pub name: Identifier,
    pub type_annotation: Option<TypeNode>,
}

/// The name side of a declaration: a plain identifier or a destructuring pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingTarget {
    Identifier(Identifier),
    Object(ObjectBindingPattern),
    Array(ArrayBindingPattern),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectBindingPattern {
    pub properties: Box<[BindingProperty]>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BindingProperty {
    /// `x` or `x = default`
    SingleName(SingleNameBinding),
    /// `key: element`, including computed keys
    Property(PropertyBinding),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingleNameBinding {
    pub name: Identifier,
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyBinding {
    pub name: PropertyName,
    pub element: BindingElement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BindingElement {
    pub target: BindingTarget,
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayBindingPattern {
    /// `None` marks an elision.
    pub elements: Box<[Option<BindingElement>]>,
    pub rest: Option<Box<BindingTarget>>,
}

// ============================================================================
// Conversions into node families
// ============================================================================

macro_rules! impl_from {
    ($family:ident :: $variant:ident (Box<$ty:ty>)) => {
        impl From<$ty> for $family {
            fn from(node: $ty) -> Self {
                $family::$variant(Box::new(node))
            }
        }
    };
    ($family:ident :: $variant:ident ($ty:ty)) => {
        impl From<$ty> for $family {
            fn from(node: $ty) -> Self {
                $family::$variant(node)
            }
        }
    };
}

impl_from!(Expression::Identifier(Identifier));
impl_from!(Expression::Boolean(BooleanLiteral));
impl_from!(Expression::Number(NumericLiteral));
impl_from!(Expression::String(StringLiteral));
impl_from!(Expression::RegularExpression(RegularExpressionLiteral));
impl_from!(Expression::Template(Box<TemplateLiteral>));
impl_from!(Expression::Array(ArrayLiteral));
impl_from!(Expression::Object(ObjectLiteral));
impl_from!(Expression::Parenthesized(Box<ParenthesizedExpression>));
impl_from!(Expression::Member(Box<MemberExpression>));
impl_from!(Expression::Call(Box<CallExpression>));
impl_from!(Expression::Unary(Box<UnaryExpression>));
impl_from!(Expression::TypeAssertion(Box<TypeAssertion>));
impl_from!(Expression::As(Box<AsExpression>));
impl_from!(Expression::Binary(Box<BinaryExpression>));
impl_from!(Expression::Conditional(Box<ConditionalExpression>));
impl_from!(Expression::Assignment(Box<AssignmentExpression>));
impl_from!(Expression::Arrow(Box<ArrowFunction>));
impl_from!(Expression::Comma(CommaExpression));

impl_from!(Statement::Block(Block));
impl_from!(Statement::Expression(ExpressionStatement));
impl_from!(Statement::If(Box<IfStatement>));
impl_from!(Statement::Do(Box<DoStatement>));
impl_from!(Statement::While(Box<WhileStatement>));
impl_from!(Statement::For(Box<ForStatement>));
impl_from!(Statement::Continue(ContinueStatement));
impl_from!(Statement::Break(BreakStatement));
impl_from!(Statement::Return(ReturnStatement));
impl_from!(Statement::With(Box<WithStatement>));
impl_from!(Statement::Switch(Box<SwitchStatement>));
impl_from!(Statement::Labeled(Box<LabeledStatement>));
impl_from!(Statement::Throw(ThrowStatement));
impl_from!(Statement::Try(Box<TryStatement>));
impl_from!(Statement::Declaration(Box<Declaration>));

impl_from!(Declaration::Interface(InterfaceDeclaration));
impl_from!(Declaration::TypeAlias(TypeAliasDeclaration));
impl_from!(Declaration::Enum(EnumDeclaration));
impl_from!(Declaration::Namespace(NamespaceDeclaration));
impl_from!(Declaration::Ambient(AmbientDeclaration));
impl_from!(Declaration::Import(ImportDeclaration));
impl_from!(Declaration::ImportAlias(ImportAliasDeclaration));
impl_from!(Declaration::Export(ExportDeclaration));

impl_from!(TypeNode::Predefined(PredefinedType));
impl_from!(TypeNode::Reference(TypeReference));
impl_from!(TypeNode::Parenthesized(Box<ParenthesizedType>));
impl_from!(TypeNode::Array(Box<ArrayType>));
impl_from!(TypeNode::Tuple(TupleType));
impl_from!(TypeNode::Union(UnionType));
impl_from!(TypeNode::Intersection(IntersectionType));
impl_from!(TypeNode::Query(TypeQuery));
impl_from!(TypeNode::Object(ObjectType));
impl_from!(TypeNode::Literal(LiteralType));
impl_from!(TypeNode::Predicate(Box<TypePredicate>));

impl From<Identifier> for BindingTarget {
    fn from(name: Identifier) -> Self {
        BindingTarget::Identifier(name)
    }
}

impl From<Identifier> for PropertyName {
    fn from(name: Identifier) -> Self {
        PropertyName::Identifier(name)
    }
}

impl From<Identifier> for EntityName {
    fn from(name: Identifier) -> Self {
        EntityName { parts: Box::new([name]) }
    }
}
