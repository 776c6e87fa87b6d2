//! The emitter: a [`Visitor`] that writes each node back as source text.
//!
//! Output is a pure function of the tree and the options. Parentheses are
//! written only where the tree holds a parenthesized node; the emitter never
//! reorders or regroups anything.

use scribe_ast::node::*;
use scribe_ast::{AstNode, ModifierFlags, SyntaxKind, Visitor};

use crate::options::{EmitOptions, HexLetterCase};
use crate::writer::IndentedWriter;

/// Writes nodes as formatted text under an [`EmitOptions`].
pub struct Emitter<'o> {
    writer: IndentedWriter<'o>,
    options: &'o EmitOptions,
}

impl<'o> Emitter<'o> {
    pub fn new(options: &'o EmitOptions) -> Self {
        Self { writer: IndentedWriter::new(options), options }
    }

    /// Emit `node` after whatever has been emitted so far.
    pub fn emit<N: AstNode + ?Sized>(&mut self, node: &N) {
        node.accept(self);
    }

    pub fn into_string(self) -> String {
        self.writer.into_string()
    }

    // ========================================================================
    // Writing primitives
    // ========================================================================

    fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    fn space(&mut self) {
        self.writer.write_space();
    }

    fn newline(&mut self) {
        self.writer.write_line();
    }

    fn comma(&mut self) {
        self.write(",");
        if self.options.space_after_comma {
            self.space();
        }
    }

    fn colon(&mut self) {
        self.write(":");
        if self.options.space_after_colon {
            self.space();
        }
    }

    fn operator(&mut self, text: &str) {
        if self.options.space_around_operators {
            self.space();
            self.write(text);
            self.space();
        } else {
            self.write(text);
        }
    }

    /// `in`, `instanceof`, `as`, `of`: always spaced.
    fn word_operator(&mut self, text: &str) {
        self.space();
        self.write(text);
        self.space();
    }

    /// A keyword followed by a parenthesized head, as in `if (`.
    fn keyword_head(&mut self, keyword: &str) {
        self.write(keyword);
        if self.options.space_after_keyword {
            self.space();
        }
    }

    fn parenthesized(&mut self, is_empty: bool, body: impl FnOnce(&mut Self)) {
        self.write("(");
        if is_empty {
            self.write(")");
            return;
        }
        let pad = self.options.space_within_parentheses;
        if pad {
            self.space();
        }
        body(self);
        if pad {
            self.space();
        }
        self.write(")");
    }

    /// Braces kept on one line: object literals, patterns, import lists.
    fn braced_inline(&mut self, is_empty: bool, body: impl FnOnce(&mut Self)) {
        self.write("{");
        if is_empty {
            self.write("}");
            return;
        }
        let pad = self.options.space_within_braces;
        if pad {
            self.space();
        }
        body(self);
        if pad {
            self.space();
        }
        self.write("}");
    }

    fn list<T>(&mut self, items: &[T], mut emit_item: impl FnMut(&mut Self, &T)) {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.comma();
            }
            emit_item(self, item);
        }
    }

    fn open_brace(&mut self) {
        if !self.writer.is_at_line_start() {
            if self.options.brace_on_new_line {
                self.newline();
            } else {
                self.space();
            }
        }
        self.write("{");
    }

    /// A brace-delimited body with one item per line.
    fn body(&mut self, len: usize, mut emit_item: impl FnMut(&mut Self, usize)) {
        self.open_brace();
        self.writer.indent();
        for index in 0..len {
            self.newline();
            emit_item(self, index);
        }
        self.writer.dedent();
        self.newline();
        self.write("}");
    }

    /// Position for a keyword that continues a statement after its body:
    /// `else`, `while` of a `do`, `catch` and `finally`.
    fn continuation(&mut self, after_block: bool) {
        if after_block && !self.options.brace_on_new_line {
            self.space();
        } else {
            self.newline();
        }
    }

    fn emit_modifiers(&mut self, modifiers: ModifierFlags) {
        for keyword in modifiers.keywords() {
            self.write(keyword);
            self.space();
        }
    }

    fn emit_type_annotation(&mut self, type_annotation: Option<&TypeNode>) {
        if let Some(type_node) = type_annotation {
            self.colon();
            type_node.accept(self);
        }
    }

    fn emit_initializer(&mut self, initializer: Option<&Expression>) {
        if let Some(expression) = initializer {
            self.operator("=");
            expression.accept(self);
        }
    }

    // ========================================================================
    // Names and literals
    // ========================================================================

    /// An identifier in a position that admits reserved words: after `.`, as
    /// a property name, or in an import/export list.
    fn emit_identifier_name(&mut self, name: &Identifier) {
        self.write(name.name());
    }

    fn emit_property_name(&mut self, name: &PropertyName) {
        match name {
            PropertyName::Identifier(identifier) => self.emit_identifier_name(identifier),
            PropertyName::String(literal) => self.visit_string_literal(literal),
            PropertyName::Number(literal) => self.visit_numeric_literal(literal),
            PropertyName::Computed(expression) => self.visit_computed_property_name(expression),
        }
    }

    fn emit_named_specifiers(&mut self, specifiers: &[NamedSpecifier]) {
        self.braced_inline(specifiers.is_empty(), |e| {
            e.list(specifiers, |e, specifier| {
                e.emit_identifier_name(&specifier.name);
                if let Some(alias) = &specifier.alias {
                    e.write(" as ");
                    e.emit_identifier_name(alias);
                }
            });
        });
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn emit_block(&mut self, block: &Block) {
        if !self.options.simple_block_on_new_line && is_simple_block(block) {
            if !self.writer.is_at_line_start() {
                self.space();
            }
            match block.statements.first() {
                None => self.write("{}"),
                Some(statement) => {
                    self.write("{");
                    self.space();
                    statement.accept(self);
                    self.space();
                    self.write("}");
                }
            }
            return;
        }
        self.body(block.statements.len(), |e, index| block.statements[index].accept(e));
    }

    /// The body of `if`, `while`, `for`, `with` and labels.
    fn emit_embedded_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Block(block) => self.emit_block(block),
            _ => {
                self.space();
                statement.accept(self);
            }
        }
    }

    fn emit_variable_list(&mut self, list: &VariableDeclarationList) {
        self.write(list.kind().text());
        self.space();
        self.list(list.declarations(), |e, declaration| e.visit_variable_declaration(declaration));
    }

    fn emit_for_each(&mut self, node: &ForEachStatement, keyword: &str) {
        self.keyword_head("for");
        self.parenthesized(false, |e| {
            match &node.binding {
                ForBinding::Variable(kind, target) => {
                    e.write(kind.text());
                    e.space();
                    target.accept(e);
                }
                ForBinding::Expression(expression) => expression.accept(e),
            }
            e.word_operator(keyword);
            node.expression.accept(e);
        });
        self.emit_embedded_statement(&node.body);
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn emit_function(&mut self, node: &Function) {
        self.write("function");
        match node.name() {
            Some(name) => {
                self.space();
                self.visit_identifier(name);
            }
            None if self.options.space_after_function_keyword => self.space(),
            None => {}
        }
        self.visit_call_signature(node.signature());
        match node.body() {
            Some(body) => self.emit_block(body),
            None => self.write(";"),
        }
    }

    fn emit_class(&mut self, node: &Class) {
        if node.is_abstract() {
            self.write("abstract ");
        }
        self.write("class");
        if let Some(name) = node.name() {
            self.space();
            self.visit_identifier(name);
        }
        self.emit_type_parameters(node.type_parameters());
        if let Some(extends) = node.extends() {
            self.write(" extends ");
            self.visit_heritage_expression(extends);
        }
        if !node.implements().is_empty() {
            self.write(" implements ");
            self.list(node.implements(), |e, reference| e.visit_type_reference(reference));
        }
        let elements = node.elements();
        self.body(elements.len(), |e, index| e.emit_class_element(&elements[index]));
    }

    fn emit_class_element(&mut self, element: &ClassElement) {
        match element {
            ClassElement::Index(signature) => {
                self.visit_index_signature(signature);
                self.write(";");
            }
            _ => element.accept(self),
        }
    }

    // ========================================================================
    // Types and signatures
    // ========================================================================

    fn emit_type_parameters(&mut self, type_parameters: &[TypeParameter]) {
        if type_parameters.is_empty() {
            return;
        }
        self.write("<");
        self.list(type_parameters, |e, type_parameter| e.visit_type_parameter(type_parameter));
        self.write(">");
    }

    fn emit_type_arguments(&mut self, type_arguments: &[TypeNode]) {
        if type_arguments.is_empty() {
            return;
        }
        self.write("<");
        self.list(type_arguments, |e, type_node| type_node.accept(e));
        self.write(">");
    }

    fn emit_type_list(&mut self, types: &[TypeNode], separator: &str) {
        for (index, type_node) in types.iter().enumerate() {
            if index > 0 {
                self.operator(separator);
            }
            type_node.accept(self);
        }
    }

    fn emit_function_type(&mut self, node: &FunctionType) {
        self.emit_type_parameters(&node.type_parameters);
        self.visit_parameter_list(&node.parameters);
        self.operator("=>");
        node.return_type.accept(self);
    }

    fn emit_accessor_head(&mut self, modifiers: ModifierFlags, keyword: &str, name: &PropertyName) {
        self.emit_modifiers(modifiers);
        self.write(keyword);
        self.space();
        self.emit_property_name(name);
    }

    fn emit_call(&mut self, node: &CallExpression) {
        self.emit_type_arguments(node.type_arguments());
        if let Some(arguments) = node.arguments() {
            self.visit_argument_list(arguments);
        }
    }
}

impl Visitor for Emitter<'_> {
    fn visit_source_file(&mut self, node: &SourceFile) {
        for statement in node.statements.iter() {
            statement.accept(self);
            self.newline();
        }
    }

    // ========================================================================
    // Names and literals
    // ========================================================================

    fn visit_identifier(&mut self, node: &Identifier) {
        let name = node.name();
        let is_reserved = SyntaxKind::from_keyword(name).is_some_and(SyntaxKind::is_reserved_word);
        match name.chars().next() {
            Some(first) if is_reserved => {
                let escaped = format!("\\u{:04x}{}", first as u32, &name[first.len_utf8()..]);
                self.write(&escaped);
            }
            _ => self.write(name),
        }
    }

    fn visit_entity_name(&mut self, node: &EntityName) {
        for (index, part) in node.parts().iter().enumerate() {
            if index == 0 {
                self.visit_identifier(part);
            } else {
                self.write(".");
                self.emit_identifier_name(part);
            }
        }
    }

    fn visit_this_expression(&mut self) {
        self.write("this");
    }

    fn visit_null_literal(&mut self) {
        self.write("null");
    }

    fn visit_boolean_literal(&mut self, node: &BooleanLiteral) {
        self.write(if node.value { "true" } else { "false" });
    }

    fn visit_numeric_literal(&mut self, node: &NumericLiteral) {
        let text = numeric_literal_text(node, self.options.hex_letter_case);
        self.write(&text);
    }

    fn visit_string_literal(&mut self, node: &StringLiteral) {
        let text = string_literal_text(node);
        self.write(&text);
    }

    fn visit_regular_expression_literal(&mut self, node: &RegularExpressionLiteral) {
        let text = format!("/{}/{}", node.pattern(), node.flags());
        self.write(&text);
    }

    fn visit_template_literal(&mut self, node: &TemplateLiteral) {
        let mut text = String::from("`");
        push_template_text(&mut text, &node.head);
        for span in node.spans.iter() {
            text.push_str("${");
            self.write(&text);
            span.expression.accept(self);
            text = String::from("}");
            push_template_text(&mut text, &span.literal);
        }
        text.push('`');
        self.write(&text);
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn visit_array_literal(&mut self, node: &ArrayLiteral) {
        self.write("[");
        for (index, element) in node.elements.iter().enumerate() {
            if index > 0 {
                self.comma();
            }
            if let Some(element) = element {
                if element.spread {
                    self.write("...");
                }
                element.expression.accept(self);
            }
        }
        // A trailing hole needs its own comma.
        if matches!(node.elements.last(), Some(None)) {
            self.write(",");
        }
        self.write("]");
    }

    fn visit_object_literal(&mut self, node: &ObjectLiteral) {
        let properties = &node.properties;
        let multi_line = properties.iter().any(|property| {
            matches!(
                property,
                PropertyDefinition::Method(_) | PropertyDefinition::Getter(_) | PropertyDefinition::Setter(_)
            )
        });
        if !multi_line {
            self.braced_inline(properties.is_empty(), |e| {
                e.list(properties, |e, property| property.accept(e));
            });
            return;
        }
        self.write("{");
        self.writer.indent();
        for (index, property) in properties.iter().enumerate() {
            self.newline();
            property.accept(self);
            if index + 1 < properties.len() {
                self.write(",");
            }
        }
        self.writer.dedent();
        self.newline();
        self.write("}");
    }

    fn visit_shorthand_property(&mut self, node: &Identifier) {
        self.visit_identifier(node);
    }

    fn visit_cover_initialized_name(&mut self, node: &CoverInitializedName) {
        self.visit_identifier(&node.name);
        self.emit_initializer(Some(&node.initializer));
    }

    fn visit_property_assignment(&mut self, node: &PropertyAssignment) {
        self.emit_property_name(&node.name);
        self.colon();
        node.value.accept(self);
    }

    fn visit_computed_property_name(&mut self, node: &Expression) {
        self.write("[");
        node.accept(self);
        self.write("]");
    }

    fn visit_parenthesized_expression(&mut self, node: &ParenthesizedExpression) {
        self.write("(");
        node.expression.accept(self);
        self.write(")");
    }

    fn visit_function_expression(&mut self, node: &Function) {
        self.emit_function(node);
    }

    fn visit_class_expression(&mut self, node: &Class) {
        self.emit_class(node);
    }

    fn visit_member_dot(&mut self, node: &MemberExpression) {
        if let MemberTarget::Expression(target) = &node.target {
            target.accept(self);
            // `1.x` would scan as the number `1.` followed by `x`.
            if let Expression::Number(literal) = target {
                if !numeric_literal_text(literal, self.options.hex_letter_case).contains(['.', 'x', 'b', 'o']) {
                    self.space();
                }
            }
        }
        if let MemberAccess::Dot(name) = &node.access {
            self.write(".");
            self.emit_identifier_name(name);
        }
    }

    fn visit_member_bracket(&mut self, node: &MemberExpression) {
        if let MemberTarget::Expression(target) = &node.target {
            target.accept(self);
        }
        if let MemberAccess::Bracket(index) = &node.access {
            self.write("[");
            index.accept(self);
            self.write("]");
        }
    }

    fn visit_super_dot(&mut self, node: &MemberExpression) {
        self.write("super");
        if let MemberAccess::Dot(name) = &node.access {
            self.write(".");
            self.emit_identifier_name(name);
        }
    }

    fn visit_super_bracket(&mut self, node: &MemberExpression) {
        self.write("super");
        if let MemberAccess::Bracket(index) = &node.access {
            self.write("[");
            index.accept(self);
            self.write("]");
        }
    }

    fn visit_call_expression(&mut self, node: &CallExpression) {
        if let Some(callee) = node.callee() {
            callee.accept(self);
        }
        self.emit_call(node);
    }

    fn visit_new_call_expression(&mut self, node: &CallExpression) {
        self.write("new ");
        if let Some(callee) = node.callee() {
            callee.accept(self);
        }
        self.emit_call(node);
    }

    fn visit_super_call_expression(&mut self, node: &CallExpression) {
        self.write("super");
        self.emit_call(node);
    }

    fn visit_argument_list(&mut self, node: &ArgumentList) {
        self.parenthesized(node.arguments.is_empty(), |e| {
            e.list(&node.arguments, |e, argument| {
                if argument.spread {
                    e.write("...");
                }
                argument.expression.accept(e);
            });
        });
    }

    fn visit_new_target(&mut self) {
        self.write("new.target");
    }

    fn visit_unary_expression(&mut self, node: &UnaryExpression) {
        let operator = node.operator();
        if operator.is_postfix() {
            node.operand().accept(self);
            self.write(operator.text());
            return;
        }
        self.write(operator.text());
        if operator.is_keyword() {
            self.space();
        }
        node.operand().accept(self);
    }

    fn visit_type_assertion(&mut self, node: &TypeAssertion) {
        self.write("<");
        node.type_node.accept(self);
        self.write(">");
        node.expression.accept(self);
    }

    fn visit_as_expression(&mut self, node: &AsExpression) {
        node.expression.accept(self);
        self.word_operator("as");
        node.type_node.accept(self);
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpression) {
        node.left.accept(self);
        if node.operator.is_keyword() {
            self.word_operator(node.operator.text());
        } else {
            self.operator(node.operator.text());
        }
        node.right.accept(self);
    }

    fn visit_conditional_expression(&mut self, node: &ConditionalExpression) {
        node.condition.accept(self);
        self.operator("?");
        node.when_true.accept(self);
        self.operator(":");
        node.when_false.accept(self);
    }

    fn visit_assignment_expression(&mut self, node: &AssignmentExpression) {
        node.target().accept(self);
        self.operator(node.operator().text());
        node.value().accept(self);
    }

    fn visit_arrow_function(&mut self, node: &ArrowFunction) {
        match &node.parameters {
            ArrowParameters::Identifier(name) => self.visit_identifier(name),
            ArrowParameters::Signature(signature) => self.visit_call_signature(signature),
        }
        match &node.body {
            ArrowBody::Expression(expression) => {
                self.operator("=>");
                expression.accept(self);
            }
            ArrowBody::Block(block) => {
                if self.options.space_around_operators {
                    self.space();
                }
                self.write("=>");
                self.emit_block(block);
            }
        }
    }

    fn visit_comma_expression(&mut self, node: &CommaExpression) {
        self.list(node.expressions(), |e, expression| expression.accept(e));
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn visit_block(&mut self, node: &Block) {
        self.emit_block(node);
    }

    fn visit_variable_statement(&mut self, node: &VariableDeclarationList) {
        self.emit_variable_list(node);
        self.write(";");
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration) {
        node.target.accept(self);
        self.emit_type_annotation(node.type_annotation.as_ref());
        self.emit_initializer(node.initializer.as_ref());
    }

    fn visit_empty_statement(&mut self) {
        self.write(";");
    }

    fn visit_expression_statement(&mut self, node: &ExpressionStatement) {
        node.expression.accept(self);
        self.write(";");
    }

    fn visit_if_statement(&mut self, node: &IfStatement) {
        self.keyword_head("if");
        self.parenthesized(false, |e| node.condition.accept(e));
        self.emit_embedded_statement(&node.then_statement);
        if let Some(else_statement) = &node.else_statement {
            self.continuation(is_block(&node.then_statement));
            self.write("else");
            match else_statement {
                Statement::If(_) => {
                    self.space();
                    else_statement.accept(self);
                }
                _ => self.emit_embedded_statement(else_statement),
            }
        }
    }

    fn visit_do_statement(&mut self, node: &DoStatement) {
        self.write("do");
        self.emit_embedded_statement(&node.body);
        self.continuation(is_block(&node.body));
        self.keyword_head("while");
        self.parenthesized(false, |e| node.condition.accept(e));
        self.write(";");
    }

    fn visit_while_statement(&mut self, node: &WhileStatement) {
        self.keyword_head("while");
        self.parenthesized(false, |e| node.condition.accept(e));
        self.emit_embedded_statement(&node.body);
    }

    fn visit_for_statement(&mut self, node: &ForStatement) {
        self.keyword_head("for");
        self.parenthesized(false, |e| {
            match &node.initializer {
                Some(ForInitializer::Variables(list)) => e.emit_variable_list(list),
                Some(ForInitializer::Expression(expression)) => expression.accept(e),
                None => {}
            }
            e.write(";");
            if let Some(condition) = &node.condition {
                e.space();
                condition.accept(e);
            }
            e.write(";");
            if let Some(incrementor) = &node.incrementor {
                e.space();
                incrementor.accept(e);
            }
        });
        self.emit_embedded_statement(&node.body);
    }

    fn visit_for_in_statement(&mut self, node: &ForEachStatement) {
        self.emit_for_each(node, "in");
    }

    fn visit_for_of_statement(&mut self, node: &ForEachStatement) {
        self.emit_for_each(node, "of");
    }

    fn visit_continue_statement(&mut self, node: &ContinueStatement) {
        self.write("continue");
        if let Some(label) = &node.label {
            self.space();
            self.visit_identifier(label);
        }
        self.write(";");
    }

    fn visit_break_statement(&mut self, node: &BreakStatement) {
        self.write("break");
        if let Some(label) = &node.label {
            self.space();
            self.visit_identifier(label);
        }
        self.write(";");
    }

    fn visit_return_statement(&mut self, node: &ReturnStatement) {
        self.write("return");
        if let Some(expression) = &node.expression {
            self.space();
            expression.accept(self);
        }
        self.write(";");
    }

    fn visit_with_statement(&mut self, node: &WithStatement) {
        self.keyword_head("with");
        self.parenthesized(false, |e| node.object.accept(e));
        self.emit_embedded_statement(&node.body);
    }

    fn visit_switch_statement(&mut self, node: &SwitchStatement) {
        self.keyword_head("switch");
        self.parenthesized(false, |e| node.discriminant().accept(e));
        let clauses = node.clauses();
        self.body(clauses.len(), |e, index| e.visit_case_clause(&clauses[index]));
    }

    fn visit_case_clause(&mut self, node: &CaseClause) {
        match &node.test {
            Some(test) => {
                self.write("case ");
                test.accept(self);
                self.write(":");
            }
            None => self.write("default:"),
        }
        self.writer.indent();
        for statement in node.statements.iter() {
            self.newline();
            statement.accept(self);
        }
        self.writer.dedent();
    }

    fn visit_labeled_statement(&mut self, node: &LabeledStatement) {
        self.visit_identifier(&node.label);
        self.write(":");
        self.emit_embedded_statement(&node.body);
    }

    fn visit_throw_statement(&mut self, node: &ThrowStatement) {
        self.write("throw ");
        node.expression.accept(self);
        self.write(";");
    }

    fn visit_try_statement(&mut self, node: &TryStatement) {
        self.write("try");
        self.emit_block(node.block());
        if let Some(catch_clause) = node.catch_clause() {
            self.continuation(true);
            self.visit_catch_clause(catch_clause);
        }
        if let Some(finally_block) = node.finally_block() {
            self.continuation(true);
            self.write("finally");
            self.emit_block(finally_block);
        }
    }

    fn visit_catch_clause(&mut self, node: &CatchClause) {
        self.keyword_head("catch");
        self.parenthesized(false, |e| node.parameter.accept(e));
        self.emit_block(&node.body);
    }

    fn visit_debugger_statement(&mut self) {
        self.write("debugger;");
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn visit_lexical_declaration(&mut self, node: &VariableDeclarationList) {
        self.emit_variable_list(node);
        self.write(";");
    }

    fn visit_function_declaration(&mut self, node: &Function) {
        self.emit_function(node);
    }

    fn visit_class_declaration(&mut self, node: &Class) {
        self.emit_class(node);
    }

    fn visit_heritage_expression(&mut self, node: &HeritageExpression) {
        node.expression.accept(self);
        self.emit_type_arguments(&node.type_arguments);
    }

    fn visit_interface_declaration(&mut self, node: &InterfaceDeclaration) {
        self.write("interface ");
        self.visit_identifier(&node.name);
        self.emit_type_parameters(&node.type_parameters);
        if !node.extends.is_empty() {
            self.write(" extends ");
            self.list(&node.extends, |e, reference| e.visit_type_reference(reference));
        }
        let members = &node.members;
        self.body(members.len(), |e, index| {
            members[index].accept(e);
            e.write(";");
        });
    }

    fn visit_type_alias_declaration(&mut self, node: &TypeAliasDeclaration) {
        self.write("type ");
        self.visit_identifier(&node.name);
        self.emit_type_parameters(&node.type_parameters);
        self.operator("=");
        node.type_node.accept(self);
        self.write(";");
    }

    fn visit_enum_declaration(&mut self, node: &EnumDeclaration) {
        if node.is_const {
            self.write("const ");
        }
        self.write("enum ");
        self.visit_identifier(&node.name);
        let members = &node.members;
        self.body(members.len(), |e, index| {
            e.visit_enum_member(&members[index]);
            if index + 1 < members.len() {
                e.write(",");
            }
        });
    }

    fn visit_enum_member(&mut self, node: &EnumMember) {
        self.emit_property_name(node.name());
        self.emit_initializer(node.initializer());
    }

    fn visit_namespace_declaration(&mut self, node: &NamespaceDeclaration) {
        match &node.name {
            ModuleName::Entity(name) => {
                self.write("namespace ");
                self.visit_entity_name(name);
            }
            ModuleName::String(name) => {
                self.write("module ");
                self.visit_string_literal(name);
            }
        }
        let statements = &node.body;
        self.body(statements.len(), |e, index| statements[index].accept(e));
    }

    fn visit_ambient_declaration(&mut self, node: &AmbientDeclaration) {
        self.write("declare ");
        node.declaration().accept(self);
    }

    fn visit_import_declaration(&mut self, node: &ImportDeclaration) {
        self.write("import ");
        if let Some(clause) = &node.clause {
            if let Some(default) = clause.default() {
                self.visit_identifier(default);
                if clause.bindings().is_some() {
                    self.comma();
                }
            }
            match clause.bindings() {
                Some(ImportBindings::Namespace(name)) => {
                    self.write("* as ");
                    self.visit_identifier(name);
                }
                Some(ImportBindings::Named(specifiers)) => self.emit_named_specifiers(specifiers),
                None => {}
            }
            self.write(" from ");
        }
        self.visit_string_literal(&node.module);
        self.write(";");
    }

    fn visit_import_alias_declaration(&mut self, node: &ImportAliasDeclaration) {
        self.write("import ");
        self.visit_identifier(&node.name);
        self.operator("=");
        match &node.reference {
            ModuleReference::Entity(name) => self.visit_entity_name(name),
            ModuleReference::Require(module) => {
                self.write("require(");
                self.visit_string_literal(module);
                self.write(")");
            }
        }
        self.write(";");
    }

    fn visit_exported_declaration(&mut self, node: &ExportedDeclaration) {
        self.write("export ");
        node.declaration().accept(self);
    }

    fn visit_export_default(&mut self, node: &ExportDefault) {
        self.write("export default ");
        match node {
            ExportDefault::Function(function) => self.emit_function(function),
            ExportDefault::Class(class) => self.emit_class(class),
            ExportDefault::Expression(expression) => {
                expression.accept(self);
                self.write(";");
            }
        }
    }

    fn visit_named_exports(&mut self, node: &NamedExports) {
        self.write("export ");
        self.emit_named_specifiers(&node.specifiers);
        if let Some(module) = &node.module {
            self.write(" from ");
            self.visit_string_literal(module);
        }
        self.write(";");
    }

    fn visit_export_all(&mut self, node: &StringLiteral) {
        self.write("export * from ");
        self.visit_string_literal(node);
        self.write(";");
    }

    fn visit_export_assignment(&mut self, node: &Expression) {
        self.write("export");
        self.operator("=");
        node.accept(self);
        self.write(";");
    }

    // ========================================================================
    // Class elements
    // ========================================================================

    fn visit_property_member(&mut self, node: &PropertyMember) {
        self.emit_modifiers(node.modifiers);
        self.emit_property_name(&node.name);
        if node.optional {
            self.write("?");
        }
        self.emit_type_annotation(node.type_annotation.as_ref());
        self.emit_initializer(node.initializer.as_ref());
        self.write(";");
    }

    fn visit_method_definition(&mut self, node: &MethodDefinition) {
        self.emit_modifiers(node.modifiers);
        self.emit_property_name(&node.name);
        if node.optional {
            self.write("?");
        }
        self.visit_call_signature(&node.signature);
        match &node.body {
            Some(body) => self.emit_block(body),
            None => self.write(";"),
        }
    }

    fn visit_get_accessor(&mut self, node: &GetAccessor) {
        self.emit_accessor_head(node.modifiers, "get", &node.name);
        self.parenthesized(true, |_| {});
        self.emit_type_annotation(node.return_type.as_ref());
        self.emit_block(&node.body);
    }

    fn visit_set_accessor(&mut self, node: &SetAccessor) {
        self.emit_accessor_head(node.modifiers, "set", &node.name);
        self.parenthesized(false, |e| e.visit_parameter(&node.parameter));
        self.emit_block(&node.body);
    }

    fn visit_constructor(&mut self, node: &ConstructorMember) {
        self.emit_modifiers(node.modifiers);
        self.write("constructor");
        self.visit_parameter_list(&node.parameters);
        match &node.body {
            Some(body) => self.emit_block(body),
            None => self.write(";"),
        }
    }

    fn visit_index_signature(&mut self, node: &IndexSignature) {
        self.write("[");
        self.visit_identifier(node.parameter_name());
        self.colon();
        self.write(node.parameter_type().text());
        self.write("]");
        self.colon();
        node.type_annotation().accept(self);
    }

    // ========================================================================
    // Types
    // ========================================================================

    fn visit_predefined_type(&mut self, node: PredefinedType) {
        self.write(node.text());
    }

    fn visit_type_reference(&mut self, node: &TypeReference) {
        self.visit_entity_name(&node.name);
        self.emit_type_arguments(&node.type_arguments);
    }

    fn visit_parenthesized_type(&mut self, node: &ParenthesizedType) {
        self.write("(");
        node.type_node.accept(self);
        self.write(")");
    }

    fn visit_array_type(&mut self, node: &ArrayType) {
        node.element_type.accept(self);
        self.write("[]");
    }

    fn visit_tuple_type(&mut self, node: &TupleType) {
        self.write("[");
        self.list(node.elements(), |e, element| element.accept(e));
        self.write("]");
    }

    fn visit_union_type(&mut self, node: &UnionType) {
        self.emit_type_list(node.types(), "|");
    }

    fn visit_intersection_type(&mut self, node: &IntersectionType) {
        self.emit_type_list(node.types(), "&");
    }

    fn visit_function_type(&mut self, node: &FunctionType) {
        self.emit_function_type(node);
    }

    fn visit_constructor_type(&mut self, node: &FunctionType) {
        self.write("new ");
        self.emit_function_type(node);
    }

    fn visit_type_query(&mut self, node: &TypeQuery) {
        self.write("typeof ");
        self.visit_entity_name(&node.name);
    }

    fn visit_this_type(&mut self) {
        self.write("this");
    }

    fn visit_object_type(&mut self, node: &ObjectType) {
        let members = &node.members;
        self.braced_inline(members.is_empty(), |e| {
            for (index, member) in members.iter().enumerate() {
                if index > 0 {
                    e.write(";");
                    e.space();
                }
                member.accept(e);
            }
        });
    }

    fn visit_literal_type(&mut self, node: &LiteralType) {
        match node {
            LiteralType::String(literal) => self.visit_string_literal(literal),
            LiteralType::Number(literal) => self.visit_numeric_literal(literal),
            LiteralType::Boolean(value) => self.write(if *value { "true" } else { "false" }),
        }
    }

    fn visit_type_predicate(&mut self, node: &TypePredicate) {
        self.visit_identifier(&node.parameter);
        self.word_operator("is");
        node.type_node.accept(self);
    }

    fn visit_property_signature(&mut self, node: &PropertySignature) {
        self.emit_property_name(&node.name);
        if node.optional {
            self.write("?");
        }
        self.emit_type_annotation(node.type_annotation.as_ref());
    }

    fn visit_method_signature(&mut self, node: &MethodSignature) {
        self.emit_property_name(&node.name);
        if node.optional {
            self.write("?");
        }
        self.visit_call_signature(&node.signature);
    }

    fn visit_call_member(&mut self, node: &CallSignature) {
        self.visit_call_signature(node);
    }

    fn visit_construct_member(&mut self, node: &CallSignature) {
        self.keyword_head("new");
        self.visit_call_signature(node);
    }

    // ========================================================================
    // Signatures, parameters and bindings
    // ========================================================================

    fn visit_type_parameter(&mut self, node: &TypeParameter) {
        self.visit_identifier(&node.name);
        if let Some(constraint) = &node.constraint {
            self.write(" extends ");
            constraint.accept(self);
        }
    }

    fn visit_call_signature(&mut self, node: &CallSignature) {
        self.emit_type_parameters(&node.type_parameters);
        self.visit_parameter_list(&node.parameters);
        self.emit_type_annotation(node.return_type.as_ref());
    }

    fn visit_parameter_list(&mut self, node: &ParameterList) {
        self.parenthesized(node.is_empty(), |e| {
            e.list(&node.parameters, |e, parameter| e.visit_parameter(parameter));
            if let Some(rest) = &node.rest {
                if !node.parameters.is_empty() {
                    e.comma();
                }
                e.visit_rest_parameter(rest);
            }
        });
    }

    fn visit_parameter(&mut self, node: &Parameter) {
        self.emit_modifiers(node.modifiers());
        node.target().accept(self);
        if node.is_optional() {
            self.write("?");
        }
        self.emit_type_annotation(node.type_annotation());
        self.emit_initializer(node.initializer());
    }

    fn visit_rest_parameter(&mut self, node: &RestParameter) {
        self.write("...");
        self.visit_identifier(&node.name);
        self.emit_type_annotation(node.type_annotation.as_ref());
    }

    fn visit_object_binding_pattern(&mut self, node: &ObjectBindingPattern) {
        let properties = &node.properties;
        self.braced_inline(properties.is_empty(), |e| {
            e.list(properties, |e, property| property.accept(e));
        });
    }

    fn visit_single_name_binding(&mut self, node: &SingleNameBinding) {
        self.visit_identifier(&node.name);
        self.emit_initializer(node.initializer.as_ref());
    }

    fn visit_property_binding(&mut self, node: &PropertyBinding) {
        self.emit_property_name(&node.name);
        self.colon();
        self.visit_binding_element(&node.element);
    }

    fn visit_binding_element(&mut self, node: &BindingElement) {
        node.target.accept(self);
        self.emit_initializer(node.initializer.as_ref());
    }

    fn visit_array_binding_pattern(&mut self, node: &ArrayBindingPattern) {
        self.write("[");
        for (index, element) in node.elements.iter().enumerate() {
            if index > 0 {
                self.comma();
            }
            if let Some(element) = element {
                self.visit_binding_element(element);
            }
        }
        match &node.rest {
            Some(rest) => {
                if !node.elements.is_empty() {
                    self.comma();
                }
                self.write("...");
                rest.accept(self);
            }
            None if matches!(node.elements.last(), Some(None)) => self.write(","),
            None => {}
        }
        self.write("]");
    }
}

fn is_block(statement: &Statement) -> bool {
    matches!(statement, Statement::Block(_))
}

/// A block that may be written on one line: at most one statement, and that
/// statement has no body of its own.
fn is_simple_block(block: &Block) -> bool {
    match &*block.statements {
        [] => true,
        [statement] => match statement {
            Statement::Variable(_)
            | Statement::Empty
            | Statement::Expression(_)
            | Statement::Continue(_)
            | Statement::Break(_)
            | Statement::Return(_)
            | Statement::Throw(_)
            | Statement::Debugger => true,
            Statement::Declaration(declaration) => matches!(**declaration, Declaration::Lexical(_)),
            _ => false,
        },
        _ => false,
    }
}

// ============================================================================
// Literal text
// ============================================================================

/// Source text for a numeric literal in the radix it was written in.
/// Decimal values use the shortest text that reads back as the same value.
pub fn numeric_literal_text(literal: &NumericLiteral, hex_letter_case: HexLetterCase) -> String {
    let value = literal.value();
    match literal.kind() {
        NumericLiteralKind::Decimal => decimal_text(value),
        NumericLiteralKind::Binary => format!("0b{:b}", value as u64),
        NumericLiteralKind::Octal => format!("0o{:o}", value as u64),
        NumericLiteralKind::Hex => match hex_letter_case {
            HexLetterCase::Upper => format!("0x{:X}", value as u64),
            HexLetterCase::Lower => format!("0x{:x}", value as u64),
        },
    }
}

fn decimal_text(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if (1e-6..1e21).contains(&value) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}

/// Source text for a string literal, quoted with its own quote character.
pub fn string_literal_text(literal: &StringLiteral) -> String {
    let quote = literal.quote.as_char();
    let mut text = String::with_capacity(literal.value.len() + 2);
    text.push(quote);
    let mut chars = literal.value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => text.push_str("\\\\"),
            '\n' => text.push_str("\\n"),
            '\r' => text.push_str("\\r"),
            '\t' => text.push_str("\\t"),
            '\u{8}' => text.push_str("\\b"),
            '\u{b}' => text.push_str("\\v"),
            '\u{c}' => text.push_str("\\f"),
            // `\0` followed by a digit would read as a legacy octal escape.
            '\0' if chars.peek().is_some_and(|next| next.is_ascii_digit()) => text.push_str("\\x00"),
            '\0' => text.push_str("\\0"),
            '\u{2028}' | '\u{2029}' => text.push_str(&format!("\\u{:04X}", ch as u32)),
            c if c == quote => {
                text.push('\\');
                text.push(c);
            }
            c if c < ' ' || c == '\u{7f}' => text.push_str(&format!("\\x{:02X}", c as u32)),
            c => text.push(c),
        }
    }
    text.push(quote);
    text
}

fn push_template_text(text: &mut String, cooked: &str) {
    let mut chars = cooked.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => text.push_str("\\\\"),
            '`' => text.push_str("\\`"),
            '\r' => text.push_str("\\r"),
            '$' if chars.peek() == Some(&'{') => text.push_str("\\$"),
            c => text.push(c),
        }
    }
}
