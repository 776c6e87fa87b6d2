//! The TypeScript parser implementation.
//!
//! A recursive descent parser with one method per grammar production. It
//! reads from a [`TokenStream`] and builds nodes through the factory, so a
//! node is only ever constructed from children that have already been parsed.
//! Ambiguous prefixes (arrow function heads, generic calls, function types)
//! are tried speculatively inside [`TokenStream::read_with_saved_state`].

use scribe_ast::factory::{self, NodeError, NodeResult};
use scribe_ast::node::*;
use scribe_ast::syntax_kind::SyntaxKind;
use scribe_ast::ModifierFlags;
use scribe_core::text::SourceLocation;
use scribe_diagnostics::{messages, DiagnosticMessage, Result, SyntaxError};
use scribe_scanner::{Token, TokenValue};

use crate::precedence::{
    assignment_operator, binary_operator, binary_operator_precedence, prefix_operator, OperatorPrecedence,
};
use crate::token_stream::TokenStream;
use crate::utilities::*;

/// Maximum recursion depth to prevent stack overflow on deeply nested input.
pub const MAX_RECURSION_DEPTH: u32 = 200;

/// The parts shared by class declarations and class expressions.
struct ClassTail {
    type_parameters: Vec<TypeParameter>,
    extends: Option<HeritageExpression>,
    implements: Vec<TypeReference>,
    elements: Vec<ClassElement>,
}

enum Accessor {
    Get(GetAccessor),
    Set(SetAccessor),
}

/// The parser turns tokens into syntax tree nodes.
pub struct Parser<'r> {
    reader: &'r mut TokenStream,
    /// Tracks recursion depth to prevent stack overflow on deeply nested input.
    recursion_depth: u32,
    /// Cleared while parsing the head of a `for` statement, where `in` ends
    /// the expression instead of continuing it.
    allow_in: bool,
}

impl<'r> Parser<'r> {
    pub fn new(reader: &'r mut TokenStream) -> Self {
        Self {
            reader,
            recursion_depth: 0,
            allow_in: true,
        }
    }

    /// Parse statements until the end of input.
    pub fn parse_source_file(&mut self) -> Result<SourceFile> {
        let mut statements = Vec::new();
        while !self.reader.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        Ok(factory::source_file(statements))
    }

    /// Fail unless every token has been consumed.
    pub fn expect_end(&mut self) -> Result<()> {
        if self.reader.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected(&messages::UNEXPECTED_TOKEN_0))
        }
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn current_token(&self) -> SyntaxKind {
        self.reader.peek().kind
    }

    #[inline]
    fn lookahead(&self, n: usize) -> SyntaxKind {
        self.reader.peek_n(n).kind
    }

    #[inline]
    fn has_preceding_line_break(&self) -> bool {
        self.reader.peek().preceded_by_line_break
    }

    fn expect_token(&mut self, kind: SyntaxKind) -> Result<Token> {
        self.reader.read_expected(kind)
    }

    fn optional_token(&mut self, kind: SyntaxKind) -> bool {
        self.reader.skip_if(kind)
    }

    /// Consume a `;`, or accept its absence before `}`, at the end of input
    /// or after a line break.
    fn parse_expected_semicolon(&mut self) -> Result<()> {
        if self.optional_token(SyntaxKind::SemicolonToken) {
            return Ok(());
        }
        let next = self.reader.peek();
        if next.kind == SyntaxKind::CloseBraceToken || next.is_eof() || next.preceded_by_line_break {
            return Ok(());
        }
        self.expect_token(SyntaxKind::SemicolonToken).map(drop)
    }

    fn error(&self, message: &DiagnosticMessage, args: &[&str]) -> SyntaxError {
        SyntaxError::new(message, args, self.reader.location())
    }

    /// An error whose only argument describes the next token.
    fn unexpected(&self, message: &DiagnosticMessage) -> SyntaxError {
        let found = self.reader.peek().describe();
        self.error(message, &[&found])
    }

    /// Convert a factory failure into a located syntax error.
    fn check<T>(&self, result: NodeResult<T>) -> Result<T> {
        self.check_at(result, self.reader.location())
    }

    fn check_at<T>(&self, result: NodeResult<T>, location: SourceLocation) -> Result<T> {
        result.map_err(|err| node_error(&err, location))
    }

    fn enter<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.chain(|p| {
            p.deepen()?;
            f(p)
        })
    }

    /// Count one more level of nesting. Loops that wrap the node built so far,
    /// as in `a + b + c`, `a.b.c` or `T[][]`, call this once per wrap.
    fn deepen(&mut self) -> Result<()> {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            return Err(self.error(&messages::MAXIMUM_NESTING_DEPTH_EXCEEDED, &[&MAX_RECURSION_DEPTH.to_string()]));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    /// Run `f`, then give back any depth it took through [`Self::deepen`].
    fn chain<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let depth = self.recursion_depth;
        let result = f(self);
        self.recursion_depth = depth;
        result
    }

    fn with_allow_in<T>(&mut self, allow_in: bool, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let saved = std::mem::replace(&mut self.allow_in, allow_in);
        let result = f(self);
        self.allow_in = saved;
        result
    }

    /// Try a production; on failure the reader is rolled back and `None` returned.
    fn speculate<T>(&mut self, f: impl FnOnce(&mut Parser<'_>) -> Result<T>) -> Option<T> {
        let recursion_depth = self.recursion_depth;
        let allow_in = self.allow_in;
        self.reader
            .read_with_saved_state(
                |reader| f(&mut Parser { reader, recursion_depth, allow_in }),
                Result::is_ok,
            )
            .ok()
    }

    // ========================================================================
    // Names and literals
    // ========================================================================

    fn parse_identifier(&mut self) -> Result<Identifier> {
        if !self.current_token().is_identifier() {
            return Err(self.unexpected(&messages::IDENTIFIER_EXPECTED_FOUND_0));
        }
        let token = self.reader.read();
        self.make_identifier(&token)
    }

    /// An identifier, reserved words included.
    fn parse_identifier_name(&mut self) -> Result<Identifier> {
        if !self.current_token().is_identifier_name() {
            return Err(self.unexpected(&messages::IDENTIFIER_EXPECTED_FOUND_0));
        }
        let token = self.reader.read();
        self.make_identifier(&token)
    }

    fn make_identifier(&self, token: &Token) -> Result<Identifier> {
        self.check_at(factory::identifier(token.identifier_text()), token.location)
    }

    fn make_numeric_literal(&self, token: &Token) -> Result<NumericLiteral> {
        let (value, kind) = match token.value {
            Some(TokenValue::Number { value, kind }) => (value, kind),
            _ => match token.text.parse::<f64>() {
                Ok(value) => (value, NumericLiteralKind::Decimal),
                Err(_) => {
                    return Err(SyntaxError::new(&messages::INVALID_NODE_0, &[&token.text], token.location));
                }
            },
        };
        self.check_at(factory::numeric_literal(value, kind), token.location)
    }

    fn make_string_literal(token: &Token) -> StringLiteral {
        let quote = if token.text.starts_with('"') { QuoteKind::Double } else { QuoteKind::Single };
        let value = match &token.value {
            Some(TokenValue::String(value)) => value.clone(),
            _ => token.text.trim_matches(|c| c == '\'' || c == '"').to_string(),
        };
        factory::string_literal(value, quote)
    }

    fn parse_string_literal(&mut self) -> Result<StringLiteral> {
        let token = self.expect_token(SyntaxKind::StringLiteral)?;
        Ok(Self::make_string_literal(&token))
    }

    /// `A.B.C`
    fn parse_entity_name(&mut self) -> Result<EntityName> {
        let mut parts = vec![self.parse_identifier()?];
        while self.optional_token(SyntaxKind::DotToken) {
            parts.push(self.parse_identifier_name()?);
        }
        self.check(factory::entity_name(parts))
    }

    fn parse_property_name(&mut self) -> Result<PropertyName> {
        match self.current_token() {
            SyntaxKind::StringLiteral => {
                let token = self.reader.read();
                Ok(PropertyName::String(Self::make_string_literal(&token)))
            }
            SyntaxKind::NumericLiteral => {
                let token = self.reader.read();
                Ok(PropertyName::Number(self.make_numeric_literal(&token)?))
            }
            SyntaxKind::OpenBracketToken => {
                self.reader.skip();
                let expression = self.with_allow_in(true, Self::parse_assignment_expression)?;
                self.expect_token(SyntaxKind::CloseBracketToken)?;
                Ok(factory::computed_property_name(expression))
            }
            kind if kind.is_identifier_name() => Ok(PropertyName::Identifier(self.parse_identifier_name()?)),
            _ => Err(self.unexpected(&messages::PROPERTY_NAME_EXPECTED_FOUND_0)),
        }
    }

    // ========================================================================
    // Statement parsing
    // ========================================================================

    fn parse_statement_list(&mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        while !matches!(self.current_token(), SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    pub fn parse_statement(&mut self) -> Result<Statement> {
        self.enter(Self::parse_statement_worker)
    }

    fn parse_statement_worker(&mut self) -> Result<Statement> {
        let next = self.lookahead(1);
        let next_on_same_line = !self.reader.peek_n(1).preceded_by_line_break;
        match self.current_token() {
            SyntaxKind::OpenBraceToken => Ok(self.parse_block()?.into()),
            SyntaxKind::SemicolonToken => {
                self.reader.skip();
                Ok(factory::empty_statement())
            }
            SyntaxKind::VarKeyword => {
                let list = self.parse_variable_declaration_list()?;
                self.parse_expected_semicolon()?;
                self.check(factory::variable_statement(list))
            }
            SyntaxKind::LetKeyword
                if next.is_identifier() || matches!(next, SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken) =>
            {
                self.parse_lexical_declaration()
            }
            SyntaxKind::ConstKeyword if next == SyntaxKind::EnumKeyword => {
                self.reader.skip();
                Ok(Declaration::from(self.parse_enum_declaration(true)?).into())
            }
            SyntaxKind::ConstKeyword => self.parse_lexical_declaration(),
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(),
            SyntaxKind::ClassKeyword => self.parse_class_declaration(false),
            SyntaxKind::AbstractKeyword if next == SyntaxKind::ClassKeyword && next_on_same_line => {
                self.reader.skip();
                self.parse_class_declaration(true)
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::DoKeyword => self.parse_do_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::ContinueKeyword => {
                self.reader.skip();
                let label = self.parse_optional_label()?;
                self.parse_expected_semicolon()?;
                Ok(factory::continue_statement(label).into())
            }
            SyntaxKind::BreakKeyword => {
                self.reader.skip();
                let label = self.parse_optional_label()?;
                self.parse_expected_semicolon()?;
                Ok(factory::break_statement(label).into())
            }
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::WithKeyword => {
                self.reader.skip();
                let object = self.parse_parenthesized_head()?;
                let body = self.parse_statement()?;
                Ok(factory::with_statement(object, body).into())
            }
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::TryKeyword => self.parse_try_statement(),
            SyntaxKind::DebuggerKeyword => {
                self.reader.skip();
                self.parse_expected_semicolon()?;
                Ok(factory::debugger_statement())
            }
            SyntaxKind::InterfaceKeyword if next.is_identifier() && next_on_same_line => {
                Ok(Declaration::from(self.parse_interface_declaration()?).into())
            }
            SyntaxKind::TypeKeyword if next.is_identifier() && next_on_same_line => {
                Ok(Declaration::from(self.parse_type_alias_declaration()?).into())
            }
            SyntaxKind::EnumKeyword => Ok(Declaration::from(self.parse_enum_declaration(false)?).into()),
            SyntaxKind::NamespaceKeyword if next.is_identifier() && next_on_same_line => {
                Ok(Declaration::from(self.parse_namespace_declaration()?).into())
            }
            SyntaxKind::ModuleKeyword
                if (next.is_identifier() || next == SyntaxKind::StringLiteral) && next_on_same_line =>
            {
                Ok(Declaration::from(self.parse_namespace_declaration()?).into())
            }
            SyntaxKind::DeclareKeyword if is_declaration_keyword(next) && next_on_same_line => {
                self.parse_ambient_declaration()
            }
            SyntaxKind::ImportKeyword => self.parse_import_declaration(),
            SyntaxKind::ExportKeyword => self.parse_export_declaration(),
            kind if kind.is_identifier() && next == SyntaxKind::ColonToken => {
                let label = self.parse_identifier()?;
                self.reader.skip();
                let body = self.parse_statement()?;
                Ok(factory::labeled_statement(label, body).into())
            }
            _ => {
                let expression = self.parse_expression()?;
                self.parse_expected_semicolon()?;
                Ok(factory::expression_statement(expression).into())
            }
        }
    }

    fn parse_block(&mut self) -> Result<Block> {
        self.expect_token(SyntaxKind::OpenBraceToken)?;
        let statements = self.parse_statement_list()?;
        self.expect_token(SyntaxKind::CloseBraceToken)?;
        Ok(factory::block(statements))
    }

    fn parse_function_body(&mut self) -> Result<Block> {
        self.with_allow_in(true, Self::parse_block)
    }

    /// `( expression )` after `if`, `while`, `with` and `switch`.
    fn parse_parenthesized_head(&mut self) -> Result<Expression> {
        self.expect_token(SyntaxKind::OpenParenToken)?;
        let expression = self.with_allow_in(true, Self::parse_expression)?;
        self.expect_token(SyntaxKind::CloseParenToken)?;
        Ok(expression)
    }

    fn parse_optional_label(&mut self) -> Result<Option<Identifier>> {
        if self.current_token().is_identifier() && !self.has_preceding_line_break() {
            Ok(Some(self.parse_identifier()?))
        } else {
            Ok(None)
        }
    }

    /// `var`/`let`/`const` followed by one or more declarations.
    fn parse_variable_declaration_list(&mut self) -> Result<VariableDeclarationList> {
        let kind = match self.current_token() {
            SyntaxKind::VarKeyword => VariableKind::Var,
            SyntaxKind::LetKeyword => VariableKind::Let,
            SyntaxKind::ConstKeyword => VariableKind::Const,
            _ => return Err(self.unexpected(&messages::DECLARATION_EXPECTED_FOUND_0)),
        };
        self.reader.skip();
        let mut declarations = vec![self.parse_variable_declaration()?];
        while self.optional_token(SyntaxKind::CommaToken) {
            declarations.push(self.parse_variable_declaration()?);
        }
        self.check(factory::variable_declaration_list(kind, declarations))
    }

    fn parse_variable_declaration(&mut self) -> Result<VariableDeclaration> {
        let target = self.parse_binding_target()?;
        let type_annotation = self.parse_type_annotation()?;
        let initializer = self.parse_initializer()?;
        Ok(factory::variable_declaration(target, type_annotation, initializer))
    }

    /// An optional `= expression`.
    fn parse_initializer(&mut self) -> Result<Option<Expression>> {
        if self.optional_token(SyntaxKind::EqualsToken) {
            Ok(Some(self.parse_assignment_expression()?))
        } else {
            Ok(None)
        }
    }

    fn parse_lexical_declaration(&mut self) -> Result<Statement> {
        let list = self.parse_variable_declaration_list()?;
        self.parse_expected_semicolon()?;
        Ok(self.check(factory::lexical_declaration(list))?.into())
    }

    fn parse_if_statement(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::IfKeyword)?;
        let condition = self.parse_parenthesized_head()?;
        let then_statement = self.parse_statement()?;
        let else_statement = if self.optional_token(SyntaxKind::ElseKeyword) {
            Some(self.parse_statement()?)
        } else {
            None
        };
        Ok(factory::if_statement(condition, then_statement, else_statement).into())
    }

    fn parse_do_statement(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::DoKeyword)?;
        let body = self.parse_statement()?;
        self.expect_token(SyntaxKind::WhileKeyword)?;
        let condition = self.parse_parenthesized_head()?;
        // A `;` after `do ... while (x)` is optional even on the same line.
        self.optional_token(SyntaxKind::SemicolonToken);
        Ok(factory::do_statement(body, condition).into())
    }

    fn parse_while_statement(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::WhileKeyword)?;
        let condition = self.parse_parenthesized_head()?;
        let body = self.parse_statement()?;
        Ok(factory::while_statement(condition, body).into())
    }

    /// `for (init; cond; incr)`, `for (x in y)` and `for (x of y)`, told apart
    /// by the token that follows the initializer.
    fn parse_for_statement(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::ForKeyword)?;
        self.expect_token(SyntaxKind::OpenParenToken)?;

        let initializer = match self.current_token() {
            SyntaxKind::SemicolonToken => None,
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => Some(ForInitializer::Variables(
                self.with_allow_in(false, Self::parse_variable_declaration_list)?,
            )),
            _ => Some(ForInitializer::Expression(self.with_allow_in(false, Self::parse_expression)?)),
        };

        let each_kind = self.current_token();
        if let (Some(initializer), SyntaxKind::InKeyword | SyntaxKind::OfKeyword) = (&initializer, each_kind) {
            let keyword = if each_kind == SyntaxKind::InKeyword { "in" } else { "of" };
            let binding = match initializer {
                ForInitializer::Variables(list) => {
                    let [declaration] = list.declarations() else {
                        return Err(self.error(&messages::ONLY_ONE_VARIABLE_IN_FOR_0, &[keyword]));
                    };
                    if declaration.initializer.is_some() || declaration.type_annotation.is_some() {
                        return Err(self.error(&messages::ONLY_ONE_VARIABLE_IN_FOR_0, &[keyword]));
                    }
                    ForBinding::Variable(list.kind(), declaration.target.clone())
                }
                ForInitializer::Expression(expression) => {
                    if !expression.is_assignment_target() {
                        let context = format!("for...{} statement", keyword);
                        return Err(self.error(&messages::INVALID_LEFT_HAND_SIDE_0, &[&context]));
                    }
                    ForBinding::Expression(expression.clone())
                }
            };
            self.reader.skip();
            let expression = if each_kind == SyntaxKind::InKeyword {
                self.parse_expression()?
            } else {
                self.parse_assignment_expression()?
            };
            self.expect_token(SyntaxKind::CloseParenToken)?;
            let body = self.parse_statement()?;
            return Ok(if each_kind == SyntaxKind::InKeyword {
                factory::for_in_statement(binding, expression, body)
            } else {
                factory::for_of_statement(binding, expression, body)
            });
        }

        self.expect_token(SyntaxKind::SemicolonToken)?;
        let condition = if self.current_token() != SyntaxKind::SemicolonToken {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect_token(SyntaxKind::SemicolonToken)?;
        let incrementor = if self.current_token() != SyntaxKind::CloseParenToken {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect_token(SyntaxKind::CloseParenToken)?;
        let body = self.parse_statement()?;
        Ok(factory::for_statement(initializer, condition, incrementor, body).into())
    }

    fn parse_return_statement(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::ReturnKeyword)?;
        let next = self.reader.peek();
        let expression = if matches!(next.kind, SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken)
            || next.is_eof()
            || next.preceded_by_line_break
        {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.parse_expected_semicolon()?;
        Ok(factory::return_statement(expression).into())
    }

    fn parse_throw_statement(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::ThrowKeyword)?;
        if self.has_preceding_line_break() {
            return Err(self.error(&messages::LINE_BREAK_NOT_PERMITTED_AFTER_0, &["throw"]));
        }
        let expression = self.parse_expression()?;
        self.parse_expected_semicolon()?;
        Ok(factory::throw_statement(expression).into())
    }

    fn parse_switch_statement(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::SwitchKeyword)?;
        let discriminant = self.parse_parenthesized_head()?;
        self.expect_token(SyntaxKind::OpenBraceToken)?;
        let mut clauses = Vec::new();
        while !self.optional_token(SyntaxKind::CloseBraceToken) {
            let test = match self.current_token() {
                SyntaxKind::CaseKeyword => {
                    self.reader.skip();
                    Some(self.parse_expression()?)
                }
                SyntaxKind::DefaultKeyword => {
                    self.reader.skip();
                    None
                }
                _ => {
                    let found = self.reader.peek().describe();
                    return Err(self.error(&messages::_0_EXPECTED_FOUND_1, &["case", &found]));
                }
            };
            self.expect_token(SyntaxKind::ColonToken)?;
            let mut statements = Vec::new();
            while !matches!(
                self.current_token(),
                SyntaxKind::CaseKeyword
                    | SyntaxKind::DefaultKeyword
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::EndOfFileToken
            ) {
                statements.push(self.parse_statement()?);
            }
            clauses.push(match test {
                Some(test) => factory::case_clause(test, statements),
                None => factory::default_clause(statements),
            });
        }
        Ok(self.check(factory::switch_statement(discriminant, clauses))?.into())
    }

    fn parse_try_statement(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::TryKeyword)?;
        let block = self.parse_block()?;
        let catch_clause = if self.optional_token(SyntaxKind::CatchKeyword) {
            self.expect_token(SyntaxKind::OpenParenToken)?;
            let parameter = self.parse_binding_target()?;
            self.expect_token(SyntaxKind::CloseParenToken)?;
            let body = self.parse_block()?;
            Some(factory::catch_clause(parameter, body))
        } else {
            None
        };
        let finally_block = if self.optional_token(SyntaxKind::FinallyKeyword) {
            Some(self.parse_block()?)
        } else {
            None
        };
        if catch_clause.is_none() && finally_block.is_none() {
            return Err(self.error(&messages::TRY_NEEDS_CATCH_OR_FINALLY, &[]));
        }
        Ok(self.check(factory::try_statement(block, catch_clause, finally_block))?.into())
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn parse_function_declaration(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::FunctionKeyword)?;
        let name = self.parse_identifier()?;
        let signature = self.parse_call_signature()?;
        let body = if self.current_token() == SyntaxKind::OpenBraceToken {
            Some(self.parse_function_body()?)
        } else {
            self.parse_expected_semicolon()?;
            None
        };
        Ok(Declaration::Function(factory::function_declaration(name, signature, body)).into())
    }

    fn parse_class_declaration(&mut self, is_abstract: bool) -> Result<Statement> {
        self.expect_token(SyntaxKind::ClassKeyword)?;
        let name = self.parse_identifier()?;
        let tail = self.parse_class_tail()?;
        let class = factory::class_declaration(
            is_abstract,
            name,
            tail.type_parameters,
            tail.extends,
            tail.implements,
            tail.elements,
        );
        Ok(Declaration::Class(class).into())
    }

    /// A class name is optional in expressions and default exports.
    fn parse_optional_class_name(&mut self) -> Result<Option<Identifier>> {
        let kind = self.current_token();
        if kind.is_identifier() && kind != SyntaxKind::ImplementsKeyword {
            Ok(Some(self.parse_identifier()?))
        } else {
            Ok(None)
        }
    }

    fn parse_class_tail(&mut self) -> Result<ClassTail> {
        let type_parameters = self.parse_optional_type_parameters()?;
        let extends = if self.optional_token(SyntaxKind::ExtendsKeyword) {
            let expression = self.parse_primary_expression()?;
            let expression = self.parse_member_expression_rest(expression, false)?;
            let type_arguments = if self.current_token() == SyntaxKind::LessThanToken {
                self.parse_type_arguments()?
            } else {
                Vec::new()
            };
            Some(factory::heritage_expression(expression, type_arguments))
        } else {
            None
        };
        let implements = if self.optional_token(SyntaxKind::ImplementsKeyword) {
            self.parse_type_reference_list()?
        } else {
            Vec::new()
        };

        self.expect_token(SyntaxKind::OpenBraceToken)?;
        let mut elements = Vec::new();
        while !self.optional_token(SyntaxKind::CloseBraceToken) {
            if self.optional_token(SyntaxKind::SemicolonToken) {
                continue;
            }
            if self.reader.is_at_end() {
                self.expect_token(SyntaxKind::CloseBraceToken)?;
            }
            elements.push(self.parse_class_element()?);
        }
        Ok(ClassTail { type_parameters, extends, implements, elements })
    }

    fn parse_type_reference_list(&mut self) -> Result<Vec<TypeReference>> {
        let mut references = vec![self.parse_type_reference()?];
        while self.optional_token(SyntaxKind::CommaToken) {
            references.push(self.parse_type_reference()?);
        }
        Ok(references)
    }

    fn parse_modifiers(&mut self) -> ModifierFlags {
        let mut modifiers = ModifierFlags::NONE;
        while let Some(flag) = ModifierFlags::from_kind(self.current_token()) {
            if !can_follow_modifier(self.lookahead(1)) {
                break;
            }
            self.reader.skip();
            modifiers |= flag;
        }
        modifiers
    }

    fn parse_class_element(&mut self) -> Result<ClassElement> {
        let modifiers = self.parse_modifiers();
        let kind = self.current_token();
        let next = self.lookahead(1);

        if kind == SyntaxKind::ConstructorKeyword && next == SyntaxKind::OpenParenToken {
            self.reader.skip();
            let parameters = self.parse_parameter_list()?;
            let body = self.parse_optional_body()?;
            return Ok(ClassElement::Constructor(factory::constructor_member(modifiers, parameters, body)));
        }
        if matches!(kind, SyntaxKind::GetKeyword | SyntaxKind::SetKeyword) && is_property_name_start(next) {
            return Ok(match self.parse_accessor(modifiers)? {
                Accessor::Get(getter) => ClassElement::GetAccessor(getter),
                Accessor::Set(setter) => ClassElement::SetAccessor(setter),
            });
        }
        if self.is_index_signature() {
            let signature = self.parse_index_signature()?;
            self.parse_expected_semicolon()?;
            return Ok(ClassElement::Index(signature));
        }

        let name = self.parse_property_name()?;
        let optional = self.optional_token(SyntaxKind::QuestionToken);
        if matches!(self.current_token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken) {
            let signature = self.parse_call_signature()?;
            let body = self.parse_optional_body()?;
            return Ok(ClassElement::Method(factory::method_definition(modifiers, name, optional, signature, body)));
        }
        let type_annotation = self.parse_type_annotation()?;
        let initializer = self.with_allow_in(true, Self::parse_initializer)?;
        self.parse_expected_semicolon()?;
        Ok(ClassElement::Property(factory::property_member(
            modifiers,
            name,
            optional,
            type_annotation,
            initializer,
        )))
    }

    /// A `{ ... }` body, or `;` for an overload or abstract member.
    fn parse_optional_body(&mut self) -> Result<Option<Block>> {
        if self.current_token() == SyntaxKind::OpenBraceToken {
            Ok(Some(self.parse_function_body()?))
        } else {
            self.parse_expected_semicolon()?;
            Ok(None)
        }
    }

    /// `get name() {}` or `set name(value) {}`.
    fn parse_accessor(&mut self, modifiers: ModifierFlags) -> Result<Accessor> {
        let is_getter = self.current_token() == SyntaxKind::GetKeyword;
        self.reader.skip();
        let name = self.parse_property_name()?;
        self.expect_token(SyntaxKind::OpenParenToken)?;
        if is_getter {
            self.expect_token(SyntaxKind::CloseParenToken)?;
            let return_type = self.parse_type_annotation()?;
            let body = self.parse_function_body()?;
            Ok(Accessor::Get(factory::get_accessor(modifiers, name, return_type, body)))
        } else {
            let parameter = self.parse_parameter()?;
            self.expect_token(SyntaxKind::CloseParenToken)?;
            let body = self.parse_function_body()?;
            Ok(Accessor::Set(factory::set_accessor(modifiers, name, parameter, body)))
        }
    }

    fn is_index_signature(&self) -> bool {
        self.current_token() == SyntaxKind::OpenBracketToken
            && self.lookahead(1).is_identifier()
            && self.lookahead(2) == SyntaxKind::ColonToken
    }

    /// `[key: string]: T`
    fn parse_index_signature(&mut self) -> Result<IndexSignature> {
        self.expect_token(SyntaxKind::OpenBracketToken)?;
        let parameter_name = self.parse_identifier()?;
        self.expect_token(SyntaxKind::ColonToken)?;
        let location = self.reader.location();
        let parameter_type = self.parse_type()?;
        self.expect_token(SyntaxKind::CloseBracketToken)?;
        self.expect_token(SyntaxKind::ColonToken)?;
        let type_annotation = self.parse_type()?;
        factory::index_signature(parameter_name, parameter_type, type_annotation).map_err(|err| match err {
            NodeError::InvalidIndexSignatureParameterType => {
                SyntaxError::new(&messages::INDEX_SIGNATURE_PARAMETER_TYPE, &[], location)
            }
            other => node_error(&other, location),
        })
    }

    fn parse_interface_declaration(&mut self) -> Result<InterfaceDeclaration> {
        self.expect_token(SyntaxKind::InterfaceKeyword)?;
        let name = self.parse_identifier()?;
        let type_parameters = self.parse_optional_type_parameters()?;
        let extends = if self.optional_token(SyntaxKind::ExtendsKeyword) {
            self.parse_type_reference_list()?
        } else {
            Vec::new()
        };
        let members = self.parse_type_member_block()?;
        Ok(factory::interface_declaration(name, type_parameters, extends, members))
    }

    fn parse_type_alias_declaration(&mut self) -> Result<TypeAliasDeclaration> {
        self.expect_token(SyntaxKind::TypeKeyword)?;
        let name = self.parse_identifier()?;
        let type_parameters = self.parse_optional_type_parameters()?;
        self.expect_token(SyntaxKind::EqualsToken)?;
        let type_node = self.parse_type()?;
        self.parse_expected_semicolon()?;
        Ok(factory::type_alias_declaration(name, type_parameters, type_node))
    }

    /// `enum E { A, B = 1 }`; a leading `const` has already been consumed.
    fn parse_enum_declaration(&mut self, is_const: bool) -> Result<EnumDeclaration> {
        self.expect_token(SyntaxKind::EnumKeyword)?;
        let name = self.parse_identifier()?;
        self.expect_token(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while self.current_token() != SyntaxKind::CloseBraceToken {
            let location = self.reader.location();
            let member_name = self.parse_property_name()?;
            let initializer = self.with_allow_in(true, Self::parse_initializer)?;
            members.push(self.check_at(factory::enum_member(member_name, initializer), location)?);
            if self.current_token() != SyntaxKind::CloseBraceToken {
                self.expect_token(SyntaxKind::CommaToken)?;
            }
        }
        self.expect_token(SyntaxKind::CloseBraceToken)?;
        Ok(factory::enum_declaration(is_const, name, members))
    }

    /// `namespace A.B { }` or `module "name" { }`.
    fn parse_namespace_declaration(&mut self) -> Result<NamespaceDeclaration> {
        self.reader.skip();
        let name = if self.current_token() == SyntaxKind::StringLiteral {
            ModuleName::String(self.parse_string_literal()?)
        } else {
            ModuleName::Entity(self.parse_entity_name()?)
        };
        let body = self.parse_block()?;
        Ok(factory::namespace_declaration(name, body.statements.into_vec()))
    }

    fn parse_ambient_declaration(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::DeclareKeyword)?;
        let location = self.reader.location();
        let declaration = self.parse_statement()?;
        let ambient = self.check_at(factory::ambient_declaration(declaration), location)?;
        Ok(Declaration::from(ambient).into())
    }

    fn parse_import_declaration(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::ImportKeyword)?;

        if self.current_token() == SyntaxKind::StringLiteral {
            let module = self.parse_string_literal()?;
            self.parse_expected_semicolon()?;
            return Ok(Declaration::from(factory::import_declaration(None, module)).into());
        }

        if self.current_token().is_identifier() && self.lookahead(1) == SyntaxKind::EqualsToken {
            let alias = self.parse_import_alias()?;
            return Ok(Declaration::from(alias).into());
        }

        let location = self.reader.location();
        let default = if self.current_token().is_identifier() {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let bindings = if default.is_none() || self.optional_token(SyntaxKind::CommaToken) {
            match self.current_token() {
                SyntaxKind::AsteriskToken => {
                    self.reader.skip();
                    self.expect_token(SyntaxKind::AsKeyword)?;
                    Some(ImportBindings::Namespace(self.parse_identifier()?))
                }
                SyntaxKind::OpenBraceToken => {
                    Some(ImportBindings::Named(self.parse_named_specifiers()?.into_boxed_slice()))
                }
                _ => {
                    let found = self.reader.peek().describe();
                    return Err(self.error(&messages::_0_EXPECTED_FOUND_1, &["{", &found]));
                }
            }
        } else {
            None
        };
        let clause = self.check_at(factory::import_clause(default, bindings), location)?;
        self.expect_token(SyntaxKind::FromKeyword)?;
        let module = self.parse_string_literal()?;
        self.parse_expected_semicolon()?;
        Ok(Declaration::from(factory::import_declaration(Some(clause), module)).into())
    }

    /// `x = require("m")` or `x = A.B`, after `import`.
    fn parse_import_alias(&mut self) -> Result<ImportAliasDeclaration> {
        let name = self.parse_identifier()?;
        self.expect_token(SyntaxKind::EqualsToken)?;
        let reference = if self.current_token() == SyntaxKind::RequireKeyword
            && self.lookahead(1) == SyntaxKind::OpenParenToken
        {
            self.reader.read_n(2);
            let module = self.parse_string_literal()?;
            self.expect_token(SyntaxKind::CloseParenToken)?;
            ModuleReference::Require(module)
        } else {
            ModuleReference::Entity(self.parse_entity_name()?)
        };
        self.parse_expected_semicolon()?;
        Ok(factory::import_alias_declaration(name, reference))
    }

    /// `{ a, b as c }`
    fn parse_named_specifiers(&mut self) -> Result<Vec<NamedSpecifier>> {
        self.expect_token(SyntaxKind::OpenBraceToken)?;
        let mut specifiers = Vec::new();
        while self.current_token() != SyntaxKind::CloseBraceToken {
            let name = self.parse_identifier_name()?;
            let alias = if self.optional_token(SyntaxKind::AsKeyword) {
                Some(self.parse_identifier_name()?)
            } else {
                None
            };
            specifiers.push(factory::named_specifier(name, alias));
            if self.current_token() != SyntaxKind::CloseBraceToken {
                self.expect_token(SyntaxKind::CommaToken)?;
            }
        }
        self.expect_token(SyntaxKind::CloseBraceToken)?;
        Ok(specifiers)
    }

    fn parse_export_declaration(&mut self) -> Result<Statement> {
        self.expect_token(SyntaxKind::ExportKeyword)?;
        let export = match self.current_token() {
            SyntaxKind::EqualsToken => {
                self.reader.skip();
                let expression = self.parse_assignment_expression()?;
                self.parse_expected_semicolon()?;
                factory::export_assignment(expression)
            }
            SyntaxKind::DefaultKeyword => {
                self.reader.skip();
                factory::export_default(self.parse_export_default()?)
            }
            SyntaxKind::AsteriskToken => {
                self.reader.skip();
                self.expect_token(SyntaxKind::FromKeyword)?;
                let module = self.parse_string_literal()?;
                self.parse_expected_semicolon()?;
                factory::export_all(module)
            }
            SyntaxKind::OpenBraceToken => {
                let specifiers = self.parse_named_specifiers()?;
                let module = if self.optional_token(SyntaxKind::FromKeyword) {
                    Some(self.parse_string_literal()?)
                } else {
                    None
                };
                self.parse_expected_semicolon()?;
                factory::export_named(specifiers, module)
            }
            SyntaxKind::ImportKeyword => {
                self.reader.skip();
                let alias = self.parse_import_alias()?;
                self.check(factory::exported_declaration(Declaration::from(alias).into()))?
            }
            kind if is_declaration_keyword(kind) => {
                let location = self.reader.location();
                let declaration = self.parse_statement()?;
                self.check_at(factory::exported_declaration(declaration), location)?
            }
            _ => return Err(self.unexpected(&messages::DECLARATION_EXPECTED_FOUND_0)),
        };
        Ok(Declaration::from(export).into())
    }

    fn parse_export_default(&mut self) -> Result<ExportDefault> {
        match self.current_token() {
            SyntaxKind::FunctionKeyword => {
                self.reader.skip();
                let name = if self.current_token().is_identifier() {
                    Some(self.parse_identifier()?)
                } else {
                    None
                };
                let signature = self.parse_call_signature()?;
                let body = self.parse_function_body()?;
                Ok(ExportDefault::Function(factory::default_function(name, signature, body)))
            }
            SyntaxKind::ClassKeyword => self.parse_default_class(false),
            SyntaxKind::AbstractKeyword if self.lookahead(1) == SyntaxKind::ClassKeyword => {
                self.reader.skip();
                self.parse_default_class(true)
            }
            _ => {
                let expression = self.parse_assignment_expression()?;
                self.parse_expected_semicolon()?;
                Ok(ExportDefault::Expression(expression))
            }
        }
    }

    fn parse_default_class(&mut self, is_abstract: bool) -> Result<ExportDefault> {
        self.expect_token(SyntaxKind::ClassKeyword)?;
        let name = self.parse_optional_class_name()?;
        let tail = self.parse_class_tail()?;
        Ok(ExportDefault::Class(factory::default_class(
            is_abstract,
            name,
            tail.type_parameters,
            tail.extends,
            tail.implements,
            tail.elements,
        )))
    }

    // ========================================================================
    // Parameters, signatures and binding patterns
    // ========================================================================

    /// `<T, U extends V>(a: T, ...rest): R`, with optional type parameters
    /// and return type.
    fn parse_call_signature(&mut self) -> Result<CallSignature> {
        let type_parameters = self.parse_optional_type_parameters()?;
        let parameters = self.parse_parameter_list()?;
        let return_type = if self.optional_token(SyntaxKind::ColonToken) {
            Some(self.parse_return_type()?)
        } else {
            None
        };
        Ok(factory::call_signature(type_parameters, parameters, return_type))
    }

    fn parse_parameter_list(&mut self) -> Result<ParameterList> {
        self.expect_token(SyntaxKind::OpenParenToken)?;
        let mut parameters = Vec::new();
        let mut rest = None;
        while self.current_token() != SyntaxKind::CloseParenToken {
            if self.optional_token(SyntaxKind::DotDotDotToken) {
                let name = self.parse_identifier()?;
                let type_annotation = self.parse_type_annotation()?;
                rest = Some(factory::rest_parameter(name, type_annotation));
                if self.current_token() != SyntaxKind::CloseParenToken {
                    return Err(self.error(&messages::REST_PARAMETER_MUST_BE_LAST, &[]));
                }
                break;
            }
            parameters.push(self.parse_parameter()?);
            if self.current_token() != SyntaxKind::CloseParenToken {
                self.expect_token(SyntaxKind::CommaToken)?;
            }
        }
        self.expect_token(SyntaxKind::CloseParenToken)?;
        Ok(factory::parameter_list(parameters, rest))
    }

    fn parse_parameter(&mut self) -> Result<Parameter> {
        let location = self.reader.location();
        let mut modifiers = ModifierFlags::NONE;
        while let Some(flag) = ModifierFlags::from_kind(self.current_token()) {
            if !ModifierFlags::PARAMETER_PROPERTY_MODIFIER.contains(flag)
                || !can_follow_parameter_modifier(self.lookahead(1))
            {
                break;
            }
            self.reader.skip();
            modifiers |= flag;
        }
        let target = self.parse_binding_target()?;
        let optional = self.optional_token(SyntaxKind::QuestionToken);
        let type_annotation = self.parse_type_annotation()?;
        let initializer = self.with_allow_in(true, Self::parse_initializer)?;
        self.check_at(factory::parameter(modifiers, target, optional, type_annotation, initializer), location)
    }

    /// An identifier, or an object or array destructuring pattern.
    pub fn parse_binding_target(&mut self) -> Result<BindingTarget> {
        match self.current_token() {
            SyntaxKind::OpenBraceToken => Ok(BindingTarget::Object(self.parse_object_binding_pattern()?)),
            SyntaxKind::OpenBracketToken => Ok(BindingTarget::Array(self.parse_array_binding_pattern()?)),
            _ => Ok(BindingTarget::Identifier(self.parse_identifier()?)),
        }
    }

    /// `{ a, b = 1, c: d, [e]: f = 2 }`. A bare identifier not followed by
    /// `:` binds itself; anything else is a property name, `:` and an element.
    fn parse_object_binding_pattern(&mut self) -> Result<ObjectBindingPattern> {
        self.enter(|p| {
            p.expect_token(SyntaxKind::OpenBraceToken)?;
            let mut properties = Vec::new();
            while p.current_token() != SyntaxKind::CloseBraceToken {
                if p.current_token().is_identifier() && p.lookahead(1) != SyntaxKind::ColonToken {
                    let name = p.parse_identifier()?;
                    let initializer = p.with_allow_in(true, Self::parse_initializer)?;
                    properties.push(factory::single_name_binding(name, initializer));
                } else {
                    let name = p.parse_property_name()?;
                    p.expect_token(SyntaxKind::ColonToken)?;
                    let element = p.parse_binding_element()?;
                    properties.push(factory::property_binding(name, element));
                }
                if p.current_token() != SyntaxKind::CloseBraceToken {
                    p.expect_token(SyntaxKind::CommaToken)?;
                }
            }
            p.expect_token(SyntaxKind::CloseBraceToken)?;
            Ok(factory::object_binding_pattern(properties))
        })
    }

    /// `[a, , b = 1, ...rest]`
    fn parse_array_binding_pattern(&mut self) -> Result<ArrayBindingPattern> {
        self.enter(|p| {
            p.expect_token(SyntaxKind::OpenBracketToken)?;
            let mut elements = Vec::new();
            let mut rest = None;
            loop {
                match p.current_token() {
                    SyntaxKind::CloseBracketToken => break,
                    SyntaxKind::CommaToken => {
                        p.reader.skip();
                        elements.push(None);
                    }
                    SyntaxKind::DotDotDotToken => {
                        p.reader.skip();
                        rest = Some(p.parse_binding_target()?);
                        break;
                    }
                    _ => {
                        elements.push(Some(p.parse_binding_element()?));
                        if p.current_token() != SyntaxKind::CloseBracketToken {
                            p.expect_token(SyntaxKind::CommaToken)?;
                        }
                    }
                }
            }
            p.expect_token(SyntaxKind::CloseBracketToken)?;
            Ok(factory::array_binding_pattern(elements, rest))
        })
    }

    fn parse_binding_element(&mut self) -> Result<BindingElement> {
        let target = self.parse_binding_target()?;
        let initializer = self.with_allow_in(true, Self::parse_initializer)?;
        Ok(factory::binding_element(target, initializer))
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// An optional `: Type`.
    fn parse_type_annotation(&mut self) -> Result<Option<TypeNode>> {
        if self.optional_token(SyntaxKind::ColonToken) {
            Ok(Some(self.parse_type()?))
        } else {
            Ok(None)
        }
    }

    /// A return type, which may be a `x is T` type predicate.
    fn parse_return_type(&mut self) -> Result<TypeNode> {
        if self.current_token().is_identifier()
            && self.lookahead(1) == SyntaxKind::IsKeyword
            && !self.reader.peek_n(1).preceded_by_line_break
        {
            let parameter = self.parse_identifier()?;
            self.reader.skip();
            let type_node = self.parse_type()?;
            return Ok(factory::type_predicate(parameter, type_node).into());
        }
        self.parse_type()
    }

    fn parse_optional_type_parameters(&mut self) -> Result<Vec<TypeParameter>> {
        if self.current_token() != SyntaxKind::LessThanToken {
            return Ok(Vec::new());
        }
        self.reader.skip();
        let mut parameters = Vec::new();
        loop {
            let name = self.parse_identifier()?;
            let constraint = if self.optional_token(SyntaxKind::ExtendsKeyword) {
                Some(self.parse_type()?)
            } else {
                None
            };
            parameters.push(factory::type_parameter(name, constraint));
            if !self.optional_token(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.reader.read_greater_than()?;
        Ok(parameters)
    }

    /// `<A, B>`
    fn parse_type_arguments(&mut self) -> Result<Vec<TypeNode>> {
        self.expect_token(SyntaxKind::LessThanToken)?;
        let mut arguments = vec![self.parse_type()?];
        while self.optional_token(SyntaxKind::CommaToken) {
            arguments.push(self.parse_type()?);
        }
        self.reader.read_greater_than()?;
        Ok(arguments)
    }

    fn parse_type_reference(&mut self) -> Result<TypeReference> {
        let name = self.parse_entity_name()?;
        let type_arguments = if self.current_token() == SyntaxKind::LessThanToken && !self.has_preceding_line_break() {
            self.parse_type_arguments()?
        } else {
            Vec::new()
        };
        Ok(factory::type_reference(name, type_arguments))
    }

    pub fn parse_type(&mut self) -> Result<TypeNode> {
        self.enter(Self::parse_type_worker)
    }

    fn parse_type_worker(&mut self) -> Result<TypeNode> {
        match self.current_token() {
            SyntaxKind::LessThanToken => return self.parse_function_type(false),
            SyntaxKind::NewKeyword => {
                self.reader.skip();
                return self.parse_function_type(true);
            }
            SyntaxKind::OpenParenToken => {
                if let Some((parameters, return_type)) = self.speculate(|p| {
                    let parameters = p.parse_parameter_list()?;
                    p.expect_token(SyntaxKind::EqualsGreaterThanToken)?;
                    Ok((parameters, p.parse_return_type()?))
                }) {
                    return Ok(factory::function_type(Vec::new(), parameters, return_type));
                }
            }
            _ => {}
        }
        self.parse_union_type()
    }

    /// `<T>(a: T) => R`, or the same after `new`.
    fn parse_function_type(&mut self, is_constructor: bool) -> Result<TypeNode> {
        let type_parameters = self.parse_optional_type_parameters()?;
        let parameters = self.parse_parameter_list()?;
        self.expect_token(SyntaxKind::EqualsGreaterThanToken)?;
        let return_type = self.parse_return_type()?;
        Ok(if is_constructor {
            factory::constructor_type(type_parameters, parameters, return_type)
        } else {
            factory::function_type(type_parameters, parameters, return_type)
        })
    }

    fn parse_union_type(&mut self) -> Result<TypeNode> {
        let first = self.parse_intersection_type()?;
        if self.current_token() != SyntaxKind::BarToken {
            return Ok(first);
        }
        let mut types = vec![first];
        while self.optional_token(SyntaxKind::BarToken) {
            types.push(self.parse_intersection_type()?);
        }
        Ok(self.check(factory::union_type(types))?.into())
    }

    fn parse_intersection_type(&mut self) -> Result<TypeNode> {
        let first = self.parse_array_type()?;
        if self.current_token() != SyntaxKind::AmpersandToken {
            return Ok(first);
        }
        let mut types = vec![first];
        while self.optional_token(SyntaxKind::AmpersandToken) {
            types.push(self.parse_array_type()?);
        }
        Ok(self.check(factory::intersection_type(types))?.into())
    }

    /// A primary type followed by any number of `[]`.
    fn parse_array_type(&mut self) -> Result<TypeNode> {
        self.chain(|p| {
            let mut type_node = p.parse_primary_type()?;
            while !p.has_preceding_line_break()
                && p.reader.is_next(&[SyntaxKind::OpenBracketToken, SyntaxKind::CloseBracketToken])
            {
                p.deepen()?;
                p.reader.read_n(2);
                type_node = factory::array_type(type_node);
            }
            Ok(type_node)
        })
    }

    fn parse_primary_type(&mut self) -> Result<TypeNode> {
        let kind = self.current_token();
        if let Some(predefined) = predefined_type(kind) {
            if self.lookahead(1) != SyntaxKind::DotToken {
                self.reader.skip();
                return Ok(factory::predefined_type(predefined));
            }
        }
        match kind {
            SyntaxKind::ThisKeyword => {
                self.reader.skip();
                Ok(factory::this_type())
            }
            SyntaxKind::TypeOfKeyword => {
                self.reader.skip();
                Ok(factory::type_query(self.parse_entity_name()?).into())
            }
            SyntaxKind::OpenBraceToken => {
                let members = self.parse_type_member_block()?;
                Ok(factory::object_type(members).into())
            }
            SyntaxKind::OpenBracketToken => {
                self.reader.skip();
                let mut elements = vec![self.parse_type()?];
                while self.optional_token(SyntaxKind::CommaToken) {
                    elements.push(self.parse_type()?);
                }
                self.expect_token(SyntaxKind::CloseBracketToken)?;
                Ok(self.check(factory::tuple_type(elements))?.into())
            }
            SyntaxKind::OpenParenToken => {
                self.reader.skip();
                let inner = self.parse_type()?;
                self.expect_token(SyntaxKind::CloseParenToken)?;
                Ok(factory::parenthesized_type(inner))
            }
            SyntaxKind::StringLiteral => {
                let token = self.reader.read();
                Ok(LiteralType::String(Self::make_string_literal(&token)).into())
            }
            SyntaxKind::NumericLiteral => {
                let token = self.reader.read();
                Ok(LiteralType::Number(self.make_numeric_literal(&token)?).into())
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                self.reader.skip();
                Ok(LiteralType::Boolean(kind == SyntaxKind::TrueKeyword).into())
            }
            kind if kind.is_identifier() => Ok(self.parse_type_reference()?.into()),
            _ => Err(self.unexpected(&messages::TYPE_EXPECTED_FOUND_0)),
        }
    }

    /// `{ member; member, ... }` in interfaces and object types.
    fn parse_type_member_block(&mut self) -> Result<Vec<TypeMember>> {
        self.expect_token(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while self.current_token() != SyntaxKind::CloseBraceToken {
            members.push(self.parse_type_member()?);
            if !self.optional_token(SyntaxKind::SemicolonToken) && !self.optional_token(SyntaxKind::CommaToken) {
                let next = self.reader.peek();
                if next.kind != SyntaxKind::CloseBraceToken && !next.preceded_by_line_break {
                    self.expect_token(SyntaxKind::SemicolonToken)?;
                }
            }
        }
        self.expect_token(SyntaxKind::CloseBraceToken)?;
        Ok(members)
    }

    fn parse_type_member(&mut self) -> Result<TypeMember> {
        match self.current_token() {
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                Ok(TypeMember::Call(self.parse_call_signature()?))
            }
            SyntaxKind::NewKeyword
                if matches!(self.lookahead(1), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken) =>
            {
                self.reader.skip();
                Ok(TypeMember::Construct(self.parse_call_signature()?))
            }
            _ if self.is_index_signature() => Ok(TypeMember::Index(self.parse_index_signature()?)),
            _ => {
                let name = self.parse_property_name()?;
                let optional = self.optional_token(SyntaxKind::QuestionToken);
                if matches!(self.current_token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken) {
                    let signature = self.parse_call_signature()?;
                    Ok(factory::method_signature(name, optional, signature))
                } else {
                    let type_annotation = self.parse_type_annotation()?;
                    Ok(factory::property_signature(name, optional, type_annotation))
                }
            }
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// A comma-separated expression.
    pub fn parse_expression(&mut self) -> Result<Expression> {
        let first = self.parse_assignment_expression()?;
        if self.current_token() != SyntaxKind::CommaToken {
            return Ok(first);
        }
        let mut expressions = vec![first];
        while self.optional_token(SyntaxKind::CommaToken) {
            expressions.push(self.parse_assignment_expression()?);
        }
        Ok(self.check(factory::comma_expression(expressions))?.into())
    }

    pub fn parse_assignment_expression(&mut self) -> Result<Expression> {
        self.enter(Self::parse_assignment_expression_worker)
    }

    fn parse_assignment_expression_worker(&mut self) -> Result<Expression> {
        if let Some(arrow) = self.try_parse_arrow_function()? {
            return Ok(arrow.into());
        }

        let target = self.parse_conditional_expression()?;
        let Some(operator) = assignment_operator(self.current_token()) else {
            return Ok(target);
        };
        let valid = if operator == AssignmentOperator::Assign {
            target.is_assignment_target()
        } else {
            target.is_simple_assignment_target()
        };
        if !valid {
            return Err(self.error(&messages::INVALID_LEFT_HAND_SIDE_0, &["assignment"]));
        }
        self.reader.skip();
        let value = self.parse_assignment_expression()?;
        Ok(self.check(factory::assignment_expression(target, operator, value))?.into())
    }

    /// `x => ...`, `(a, b) => ...` and `<T>(a: T) => ...`. Parenthesized heads
    /// share a prefix with parenthesized expressions and type assertions, so
    /// they are parsed speculatively up to the `=>`.
    fn try_parse_arrow_function(&mut self) -> Result<Option<ArrowFunction>> {
        let parameters = match self.current_token() {
            kind if kind.is_identifier()
                && self.lookahead(1) == SyntaxKind::EqualsGreaterThanToken
                && !self.reader.peek_n(1).preceded_by_line_break =>
            {
                let name = self.parse_identifier()?;
                ArrowParameters::Identifier(name)
            }
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken if self.is_arrow_function_head() => {
                let head = self.speculate(|p| {
                    let signature = p.parse_call_signature()?;
                    if p.current_token() != SyntaxKind::EqualsGreaterThanToken || p.has_preceding_line_break() {
                        return Err(p.unexpected(&messages::UNEXPECTED_TOKEN_0));
                    }
                    Ok(signature)
                });
                match head {
                    Some(signature) => ArrowParameters::Signature(signature),
                    None => return Ok(None),
                }
            }
            _ => return Ok(None),
        };
        self.expect_token(SyntaxKind::EqualsGreaterThanToken)?;
        let body = if self.current_token() == SyntaxKind::OpenBraceToken {
            ArrowBody::Block(self.parse_function_body()?)
        } else {
            ArrowBody::Expression(self.parse_assignment_expression()?)
        };
        Ok(Some(factory::arrow_function(parameters, body)))
    }

    /// Token scan run before speculating on a `(` or `<`: after optional type
    /// parameters, the balanced parameter list must be followed by `=>` or by
    /// a return type that reaches `=>`. Keeps speculation off nested
    /// parenthesized expressions, which would otherwise be parsed twice per level.
    fn is_arrow_function_head(&self) -> bool {
        let mut offset = 0;
        if self.lookahead(0) == SyntaxKind::LessThanToken {
            let mut depth = 0;
            loop {
                let closed = match self.lookahead(offset) {
                    SyntaxKind::LessThanToken => {
                        depth += 1;
                        0
                    }
                    SyntaxKind::GreaterThanToken => 1,
                    SyntaxKind::GreaterThanGreaterThanToken => 2,
                    SyntaxKind::GreaterThanGreaterThanGreaterThanToken => 3,
                    SyntaxKind::SemicolonToken | SyntaxKind::EndOfFileToken => return false,
                    _ => 0,
                };
                offset += 1;
                if closed > 0 {
                    if closed > depth {
                        return false;
                    }
                    depth -= closed;
                    if depth == 0 {
                        break;
                    }
                }
            }
            if self.lookahead(offset) != SyntaxKind::OpenParenToken {
                return false;
            }
        }
        let mut depth = 0;
        loop {
            match self.lookahead(offset) {
                SyntaxKind::OpenParenToken | SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseParenToken | SyntaxKind::CloseBracketToken | SyntaxKind::CloseBraceToken => {
                    if depth <= 1 {
                        break;
                    }
                    depth -= 1;
                }
                SyntaxKind::EndOfFileToken => return false,
                _ => {}
            }
            offset += 1;
        }
        match self.lookahead(offset + 1) {
            SyntaxKind::EqualsGreaterThanToken => true,
            SyntaxKind::ColonToken => self.return_type_reaches_arrow(offset + 2),
            _ => false,
        }
    }

    fn return_type_reaches_arrow(&self, mut offset: usize) -> bool {
        let mut depth = 0usize;
        loop {
            match self.lookahead(offset) {
                SyntaxKind::EqualsGreaterThanToken if depth == 0 => return true,
                SyntaxKind::OpenParenToken | SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseParenToken | SyntaxKind::CloseBracketToken | SyntaxKind::CloseBraceToken => {
                    if depth == 0 {
                        return false;
                    }
                    depth -= 1;
                }
                SyntaxKind::SemicolonToken if depth == 0 => return false,
                SyntaxKind::EndOfFileToken => return false,
                _ => {}
            }
            offset += 1;
        }
    }

    fn parse_conditional_expression(&mut self) -> Result<Expression> {
        let condition = self.parse_binary_expression(OperatorPrecedence::Lowest)?;
        if !self.optional_token(SyntaxKind::QuestionToken) {
            return Ok(condition);
        }
        let when_true = self.with_allow_in(true, Self::parse_assignment_expression)?;
        self.expect_token(SyntaxKind::ColonToken)?;
        let when_false = self.parse_assignment_expression()?;
        Ok(factory::conditional_expression(condition, when_true, when_false).into())
    }

    /// Binary operators tighter than `precedence`, by precedence climbing.
    /// `**` is right-associative; every other operator is left-associative.
    fn parse_binary_expression(&mut self, precedence: OperatorPrecedence) -> Result<Expression> {
        self.chain(|p| p.parse_binary_chain(precedence))
    }

    fn parse_binary_chain(&mut self, precedence: OperatorPrecedence) -> Result<Expression> {
        let mut left = self.parse_unary_expression()?;
        loop {
            let kind = self.current_token();
            let Some(new_precedence) = binary_operator_precedence(kind) else {
                break;
            };
            let binds = if kind == SyntaxKind::AsteriskAsteriskToken {
                new_precedence >= precedence
            } else {
                new_precedence > precedence
            };
            if !binds || (kind == SyntaxKind::InKeyword && !self.allow_in) {
                break;
            }
            self.deepen()?;
            if kind == SyntaxKind::AsKeyword {
                if self.has_preceding_line_break() {
                    break;
                }
                self.reader.skip();
                let type_node = self.parse_type()?;
                left = factory::as_expression(left, type_node).into();
                continue;
            }
            let Some(operator) = binary_operator(kind) else {
                break;
            };
            self.reader.skip();
            let right = self.parse_binary_expression(new_precedence)?;
            left = factory::binary_expression(left, operator, right).into();
        }
        Ok(left)
    }

    fn parse_unary_expression(&mut self) -> Result<Expression> {
        self.enter(Self::parse_unary_expression_worker)
    }

    fn parse_unary_expression_worker(&mut self) -> Result<Expression> {
        let kind = self.current_token();
        if let Some(operator) = prefix_operator(kind) {
            self.reader.skip();
            let operand = self.parse_unary_expression()?;
            return Ok(self.check(factory::unary_expression(operator, operand))?.into());
        }
        match kind {
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken => {
                self.reader.skip();
                let operand = self.parse_unary_expression()?;
                if !operand.is_simple_assignment_target() {
                    return Err(self.error(&messages::INVALID_LEFT_HAND_SIDE_0, &["prefix operation"]));
                }
                let operator = if kind == SyntaxKind::PlusPlusToken {
                    UnaryOperator::PreIncrement
                } else {
                    UnaryOperator::PreDecrement
                };
                Ok(self.check(factory::unary_expression(operator, operand))?.into())
            }
            SyntaxKind::LessThanToken => {
                self.reader.skip();
                let type_node = self.parse_type()?;
                self.reader.read_greater_than()?;
                let expression = self.parse_unary_expression()?;
                Ok(factory::type_assertion(type_node, expression).into())
            }
            _ => self.parse_postfix_expression(),
        }
    }

    fn parse_postfix_expression(&mut self) -> Result<Expression> {
        let expression = self.parse_left_hand_side_expression()?;
        let kind = self.current_token();
        if !matches!(kind, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken) || self.has_preceding_line_break() {
            return Ok(expression);
        }
        if !expression.is_simple_assignment_target() {
            return Err(self.error(&messages::INVALID_LEFT_HAND_SIDE_0, &["postfix operation"]));
        }
        self.reader.skip();
        let operator = if kind == SyntaxKind::PlusPlusToken {
            UnaryOperator::PostIncrement
        } else {
            UnaryOperator::PostDecrement
        };
        Ok(self.check(factory::unary_expression(operator, expression))?.into())
    }

    fn parse_left_hand_side_expression(&mut self) -> Result<Expression> {
        let expression = match self.current_token() {
            SyntaxKind::NewKeyword => self.parse_new_expression()?,
            SyntaxKind::SuperKeyword => self.parse_super_expression()?,
            _ => self.parse_primary_expression()?,
        };
        self.parse_member_expression_rest(expression, true)
    }

    /// Property accesses, and calls when `allow_calls` is set, following `expression`.
    fn parse_member_expression_rest(&mut self, expression: Expression, allow_calls: bool) -> Result<Expression> {
        self.chain(|p| p.parse_member_chain(expression, allow_calls))
    }

    fn parse_member_chain(&mut self, mut expression: Expression, allow_calls: bool) -> Result<Expression> {
        loop {
            match self.current_token() {
                SyntaxKind::DotToken => {
                    self.deepen()?;
                    self.reader.skip();
                    let name = self.parse_identifier_name()?;
                    expression = factory::member_dot(expression, name).into();
                }
                SyntaxKind::OpenBracketToken => {
                    self.deepen()?;
                    self.reader.skip();
                    let index = self.with_allow_in(true, Self::parse_expression)?;
                    self.expect_token(SyntaxKind::CloseBracketToken)?;
                    expression = factory::member_bracket(expression, index).into();
                }
                SyntaxKind::OpenParenToken if allow_calls => {
                    self.deepen()?;
                    let arguments = self.parse_argument_list()?;
                    expression = factory::call_expression(expression, Vec::new(), arguments).into();
                }
                SyntaxKind::LessThanToken if allow_calls => {
                    // `f<T>(x)` is a generic call only when the type arguments parse and
                    // an argument list follows; otherwise `<` is a comparison.
                    let Some(type_arguments) = self.speculate(|p| {
                        let type_arguments = p.parse_type_arguments()?;
                        p.expect_token(SyntaxKind::OpenParenToken)?;
                        Ok(type_arguments)
                    }) else {
                        break;
                    };
                    self.deepen()?;
                    let arguments = self.parse_argument_list_rest()?;
                    expression = factory::call_expression(expression, type_arguments, arguments).into();
                }
                _ => break,
            }
        }
        Ok(expression)
    }

    fn parse_argument_list(&mut self) -> Result<ArgumentList> {
        self.expect_token(SyntaxKind::OpenParenToken)?;
        self.parse_argument_list_rest()
    }

    /// Arguments after the opening `(`.
    fn parse_argument_list_rest(&mut self) -> Result<ArgumentList> {
        self.with_allow_in(true, |p| {
            let mut arguments = Vec::new();
            while p.current_token() != SyntaxKind::CloseParenToken {
                let argument = if p.optional_token(SyntaxKind::DotDotDotToken) {
                    factory::spread_argument(p.parse_assignment_expression()?)
                } else {
                    factory::argument(p.parse_assignment_expression()?)
                };
                arguments.push(argument);
                if p.current_token() != SyntaxKind::CloseParenToken {
                    p.expect_token(SyntaxKind::CommaToken)?;
                }
            }
            p.expect_token(SyntaxKind::CloseParenToken)?;
            Ok(factory::argument_list(arguments))
        })
    }

    /// `new X<T>(args)`, `new X` or `new.target`.
    fn parse_new_expression(&mut self) -> Result<Expression> {
        self.expect_token(SyntaxKind::NewKeyword)?;
        if self.optional_token(SyntaxKind::DotToken) {
            let location = self.reader.location();
            let name = self.parse_identifier_name()?;
            if name.name() != "target" {
                return Err(SyntaxError::new(&messages::_0_EXPECTED_FOUND_1, &["target", name.name()], location));
            }
            return Ok(factory::new_target());
        }
        let callee = match self.current_token() {
            SyntaxKind::NewKeyword => self.enter(Self::parse_new_expression)?,
            SyntaxKind::SuperKeyword => self.parse_super_expression()?,
            _ => self.parse_primary_expression()?,
        };
        let callee = self.parse_member_expression_rest(callee, false)?;
        let type_arguments = if self.current_token() == SyntaxKind::LessThanToken {
            self.speculate(|p| p.parse_type_arguments()).unwrap_or_default()
        } else {
            Vec::new()
        };
        let arguments = if self.current_token() == SyntaxKind::OpenParenToken {
            Some(self.parse_argument_list()?)
        } else {
            None
        };
        Ok(factory::new_expression(callee, type_arguments, arguments).into())
    }

    /// `super(args)`, `super.name` or `super[index]`.
    fn parse_super_expression(&mut self) -> Result<Expression> {
        self.expect_token(SyntaxKind::SuperKeyword)?;
        match self.current_token() {
            SyntaxKind::OpenParenToken => Ok(factory::super_call(self.parse_argument_list()?).into()),
            SyntaxKind::DotToken => {
                self.reader.skip();
                Ok(factory::super_dot(self.parse_identifier_name()?).into())
            }
            SyntaxKind::OpenBracketToken => {
                self.reader.skip();
                let index = self.with_allow_in(true, Self::parse_expression)?;
                self.expect_token(SyntaxKind::CloseBracketToken)?;
                Ok(factory::super_bracket(index).into())
            }
            _ => {
                let found = self.reader.peek().describe();
                Err(self.error(&messages::_0_EXPECTED_FOUND_1, &["(", &found]))
            }
        }
    }

    fn parse_primary_expression(&mut self) -> Result<Expression> {
        let kind = self.current_token();
        match kind {
            SyntaxKind::ThisKeyword => {
                self.reader.skip();
                Ok(factory::this_expression())
            }
            SyntaxKind::NullKeyword => {
                self.reader.skip();
                Ok(factory::null_literal())
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                self.reader.skip();
                Ok(factory::boolean_literal(kind == SyntaxKind::TrueKeyword).into())
            }
            SyntaxKind::NumericLiteral => {
                let token = self.reader.read();
                Ok(self.make_numeric_literal(&token)?.into())
            }
            SyntaxKind::StringLiteral => {
                let token = self.reader.read();
                Ok(Self::make_string_literal(&token).into())
            }
            SyntaxKind::OpenParenToken => {
                self.reader.skip();
                let expression = self.with_allow_in(true, Self::parse_expression)?;
                self.expect_token(SyntaxKind::CloseParenToken)?;
                Ok(factory::parenthesized_expression(expression).into())
            }
            SyntaxKind::OpenBracketToken => Ok(self.parse_array_literal()?.into()),
            SyntaxKind::OpenBraceToken => Ok(self.parse_object_literal()?.into()),
            SyntaxKind::FunctionKeyword => {
                self.reader.skip();
                let name = if self.current_token().is_identifier() {
                    Some(self.parse_identifier()?)
                } else {
                    None
                };
                let signature = self.parse_call_signature()?;
                let body = self.parse_function_body()?;
                Ok(Expression::Function(Box::new(factory::function_expression(name, signature, body))))
            }
            SyntaxKind::ClassKeyword => {
                self.reader.skip();
                let name = self.parse_optional_class_name()?;
                let tail = self.parse_class_tail()?;
                let class = factory::class_expression(
                    name,
                    tail.type_parameters,
                    tail.extends,
                    tail.implements,
                    tail.elements,
                );
                Ok(Expression::Class(Box::new(class)))
            }
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                Err(self.error(&messages::_0_IS_NOT_SUPPORTED, &["regular expression literal"]))
            }
            kind if kind.is_identifier() => Ok(self.parse_identifier()?.into()),
            _ => Err(self.unexpected(&messages::EXPRESSION_EXPECTED_FOUND_0)),
        }
    }

    /// `[a, , ...b]`; a `,` with no element before it is a hole.
    fn parse_array_literal(&mut self) -> Result<ArrayLiteral> {
        self.expect_token(SyntaxKind::OpenBracketToken)?;
        self.with_allow_in(true, |p| {
            let mut elements = Vec::new();
            loop {
                match p.current_token() {
                    SyntaxKind::CloseBracketToken => break,
                    SyntaxKind::CommaToken => {
                        p.reader.skip();
                        elements.push(None);
                    }
                    _ => {
                        let element = if p.optional_token(SyntaxKind::DotDotDotToken) {
                            factory::spread_element(p.parse_assignment_expression()?)
                        } else {
                            factory::array_element(p.parse_assignment_expression()?)
                        };
                        elements.push(Some(element));
                        if p.current_token() != SyntaxKind::CloseBracketToken {
                            p.expect_token(SyntaxKind::CommaToken)?;
                        }
                    }
                }
            }
            p.expect_token(SyntaxKind::CloseBracketToken)?;
            Ok(factory::array_literal(elements))
        })
    }

    fn parse_object_literal(&mut self) -> Result<ObjectLiteral> {
        self.expect_token(SyntaxKind::OpenBraceToken)?;
        self.with_allow_in(true, |p| {
            let mut properties = Vec::new();
            while p.current_token() != SyntaxKind::CloseBraceToken {
                properties.push(p.parse_property_definition()?);
                if p.current_token() != SyntaxKind::CloseBraceToken {
                    p.expect_token(SyntaxKind::CommaToken)?;
                }
            }
            p.expect_token(SyntaxKind::CloseBraceToken)?;
            Ok(factory::object_literal(properties))
        })
    }

    /// One object literal member. After the property name the next token
    /// decides the form: `:` a property, `(` or `<` a method, `=` a
    /// cover-initialized name, anything else a shorthand reference.
    fn parse_property_definition(&mut self) -> Result<PropertyDefinition> {
        let kind = self.current_token();
        if matches!(kind, SyntaxKind::GetKeyword | SyntaxKind::SetKeyword) && is_property_name_start(self.lookahead(1)) {
            return Ok(match self.parse_accessor(ModifierFlags::NONE)? {
                Accessor::Get(getter) => PropertyDefinition::Getter(getter),
                Accessor::Set(setter) => PropertyDefinition::Setter(setter),
            });
        }

        let name = self.parse_property_name()?;
        match self.current_token() {
            SyntaxKind::ColonToken => {
                self.reader.skip();
                let value = self.parse_assignment_expression()?;
                Ok(factory::property_assignment(name, value))
            }
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                let signature = self.parse_call_signature()?;
                let body = self.parse_function_body()?;
                Ok(factory::object_method(name, signature, body))
            }
            next => match name {
                PropertyName::Identifier(identifier) if kind.is_identifier() => {
                    if next == SyntaxKind::EqualsToken {
                        self.reader.skip();
                        let initializer = self.parse_assignment_expression()?;
                        Ok(factory::cover_initialized_name(identifier, initializer))
                    } else {
                        Ok(factory::shorthand_property(identifier))
                    }
                }
                _ => {
                    let found = self.reader.peek().describe();
                    Err(self.error(&messages::_0_EXPECTED_FOUND_1, &[":", &found]))
                }
            },
        }
    }
}

/// A factory rejection reported as a grammatical error.
fn node_error(err: &NodeError, location: SourceLocation) -> SyntaxError {
    SyntaxError::new(&messages::INVALID_NODE_0, &[&err.to_string()], location)
}
