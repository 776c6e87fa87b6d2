//! Visitor trait for traversing the syntax tree.
//!
//! Every concrete node kind has one `visit_*` method. [`AstNode::accept`] calls
//! exactly one of them; the default implementations walk into children, so a
//! visitor only overrides the kinds it cares about.

use crate::node::*;

/// A node that dispatches to its [`Visitor`] method.
pub trait AstNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V);
}

/// A visitor over the syntax tree. Default implementations walk into children.
#[allow(unused_variables)]
pub trait Visitor {
    fn visit_source_file(&mut self, node: &SourceFile) {
        for statement in node.statements.iter() {
            statement.accept(self);
        }
    }

    // ========================================================================
    // Names and literals
    // ========================================================================

    fn visit_identifier(&mut self, node: &Identifier) {}

    fn visit_entity_name(&mut self, node: &EntityName) {
        for part in node.parts() {
            self.visit_identifier(part);
        }
    }

    fn visit_this_expression(&mut self) {}

    fn visit_null_literal(&mut self) {}

    fn visit_boolean_literal(&mut self, node: &BooleanLiteral) {}

    fn visit_numeric_literal(&mut self, node: &NumericLiteral) {}

    fn visit_string_literal(&mut self, node: &StringLiteral) {}

    fn visit_regular_expression_literal(&mut self, node: &RegularExpressionLiteral) {}

    fn visit_template_literal(&mut self, node: &TemplateLiteral) {
        for span in node.spans.iter() {
            span.expression.accept(self);
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn visit_array_literal(&mut self, node: &ArrayLiteral) {
        for element in node.elements.iter().flatten() {
            element.expression.accept(self);
        }
    }

    fn visit_object_literal(&mut self, node: &ObjectLiteral) {
        for property in node.properties.iter() {
            property.accept(self);
        }
    }

    fn visit_shorthand_property(&mut self, node: &Identifier) {
        self.visit_identifier(node);
    }

    fn visit_cover_initialized_name(&mut self, node: &CoverInitializedName) {
        self.visit_identifier(&node.name);
        node.initializer.accept(self);
    }

    fn visit_property_assignment(&mut self, node: &PropertyAssignment) {
        node.name.accept(self);
        node.value.accept(self);
    }

    fn visit_computed_property_name(&mut self, node: &Expression) {
        node.accept(self);
    }

    fn visit_parenthesized_expression(&mut self, node: &ParenthesizedExpression) {
        node.expression.accept(self);
    }

    fn visit_function_expression(&mut self, node: &Function) {
        walk_function(self, node);
    }

    fn visit_class_expression(&mut self, node: &Class) {
        walk_class(self, node);
    }

    fn visit_member_dot(&mut self, node: &MemberExpression) {
        walk_member(self, node);
    }

    fn visit_member_bracket(&mut self, node: &MemberExpression) {
        walk_member(self, node);
    }

    fn visit_super_dot(&mut self, node: &MemberExpression) {
        walk_member(self, node);
    }

    fn visit_super_bracket(&mut self, node: &MemberExpression) {
        walk_member(self, node);
    }

    fn visit_call_expression(&mut self, node: &CallExpression) {
        walk_call(self, node);
    }

    fn visit_new_call_expression(&mut self, node: &CallExpression) {
        walk_call(self, node);
    }

    fn visit_super_call_expression(&mut self, node: &CallExpression) {
        walk_call(self, node);
    }

    fn visit_argument_list(&mut self, node: &ArgumentList) {
        for argument in node.arguments.iter() {
            argument.expression.accept(self);
        }
    }

    fn visit_new_target(&mut self) {}

    fn visit_unary_expression(&mut self, node: &UnaryExpression) {
        node.operand().accept(self);
    }

    fn visit_type_assertion(&mut self, node: &TypeAssertion) {
        node.type_node.accept(self);
        node.expression.accept(self);
    }

    fn visit_as_expression(&mut self, node: &AsExpression) {
        node.expression.accept(self);
        node.type_node.accept(self);
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpression) {
        node.left.accept(self);
        node.right.accept(self);
    }

    fn visit_conditional_expression(&mut self, node: &ConditionalExpression) {
        node.condition.accept(self);
        node.when_true.accept(self);
        node.when_false.accept(self);
    }

    fn visit_assignment_expression(&mut self, node: &AssignmentExpression) {
        node.target().accept(self);
        node.value().accept(self);
    }

    fn visit_arrow_function(&mut self, node: &ArrowFunction) {
        match &node.parameters {
            ArrowParameters::Identifier(name) => self.visit_identifier(name),
            ArrowParameters::Signature(signature) => self.visit_call_signature(signature),
        }
        match &node.body {
            ArrowBody::Expression(expression) => expression.accept(self),
            ArrowBody::Block(block) => self.visit_block(block),
        }
    }

    fn visit_comma_expression(&mut self, node: &CommaExpression) {
        for expression in node.expressions() {
            expression.accept(self);
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn visit_block(&mut self, node: &Block) {
        for statement in node.statements.iter() {
            statement.accept(self);
        }
    }

    fn visit_variable_statement(&mut self, node: &VariableDeclarationList) {
        for declaration in node.declarations() {
            self.visit_variable_declaration(declaration);
        }
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration) {
        node.target.accept(self);
        if let Some(type_annotation) = &node.type_annotation {
            type_annotation.accept(self);
        }
        if let Some(initializer) = &node.initializer {
            initializer.accept(self);
        }
    }

    fn visit_empty_statement(&mut self) {}

    fn visit_expression_statement(&mut self, node: &ExpressionStatement) {
        node.expression.accept(self);
    }

    fn visit_if_statement(&mut self, node: &IfStatement) {
        node.condition.accept(self);
        node.then_statement.accept(self);
        if let Some(else_statement) = &node.else_statement {
            else_statement.accept(self);
        }
    }

    fn visit_do_statement(&mut self, node: &DoStatement) {
        node.body.accept(self);
        node.condition.accept(self);
    }

    fn visit_while_statement(&mut self, node: &WhileStatement) {
        node.condition.accept(self);
        node.body.accept(self);
    }

    fn visit_for_statement(&mut self, node: &ForStatement) {
        match &node.initializer {
            Some(ForInitializer::Variables(list)) => {
                for declaration in list.declarations() {
                    self.visit_variable_declaration(declaration);
                }
            }
            Some(ForInitializer::Expression(expression)) => expression.accept(self),
            None => {}
        }
        if let Some(condition) = &node.condition {
            condition.accept(self);
        }
        if let Some(incrementor) = &node.incrementor {
            incrementor.accept(self);
        }
        node.body.accept(self);
    }

    fn visit_for_in_statement(&mut self, node: &ForEachStatement) {
        walk_for_each(self, node);
    }

    fn visit_for_of_statement(&mut self, node: &ForEachStatement) {
        walk_for_each(self, node);
    }

    fn visit_continue_statement(&mut self, node: &ContinueStatement) {}

    fn visit_break_statement(&mut self, node: &BreakStatement) {}

    fn visit_return_statement(&mut self, node: &ReturnStatement) {
        if let Some(expression) = &node.expression {
            expression.accept(self);
        }
    }

    fn visit_with_statement(&mut self, node: &WithStatement) {
        node.object.accept(self);
        node.body.accept(self);
    }

    fn visit_switch_statement(&mut self, node: &SwitchStatement) {
        node.discriminant().accept(self);
        for clause in node.clauses() {
            self.visit_case_clause(clause);
        }
    }

    fn visit_case_clause(&mut self, node: &CaseClause) {
        if let Some(test) = &node.test {
            test.accept(self);
        }
        for statement in node.statements.iter() {
            statement.accept(self);
        }
    }

    fn visit_labeled_statement(&mut self, node: &LabeledStatement) {
        node.body.accept(self);
    }

    fn visit_throw_statement(&mut self, node: &ThrowStatement) {
        node.expression.accept(self);
    }

    fn visit_try_statement(&mut self, node: &TryStatement) {
        self.visit_block(node.block());
        if let Some(catch_clause) = node.catch_clause() {
            self.visit_catch_clause(catch_clause);
        }
        if let Some(finally_block) = node.finally_block() {
            self.visit_block(finally_block);
        }
    }

    fn visit_catch_clause(&mut self, node: &CatchClause) {
        node.parameter.accept(self);
        self.visit_block(&node.body);
    }

    fn visit_debugger_statement(&mut self) {}

    // ========================================================================
    // Declarations
    // ========================================================================

    fn visit_lexical_declaration(&mut self, node: &VariableDeclarationList) {
        for declaration in node.declarations() {
            self.visit_variable_declaration(declaration);
        }
    }

    fn visit_function_declaration(&mut self, node: &Function) {
        walk_function(self, node);
    }

    fn visit_class_declaration(&mut self, node: &Class) {
        walk_class(self, node);
    }

    fn visit_heritage_expression(&mut self, node: &HeritageExpression) {
        node.expression.accept(self);
        for type_argument in node.type_arguments.iter() {
            type_argument.accept(self);
        }
    }

    fn visit_interface_declaration(&mut self, node: &InterfaceDeclaration) {
        for type_parameter in node.type_parameters.iter() {
            self.visit_type_parameter(type_parameter);
        }
        for base in node.extends.iter() {
            self.visit_type_reference(base);
        }
        for member in node.members.iter() {
            member.accept(self);
        }
    }

    fn visit_type_alias_declaration(&mut self, node: &TypeAliasDeclaration) {
        for type_parameter in node.type_parameters.iter() {
            self.visit_type_parameter(type_parameter);
        }
        node.type_node.accept(self);
    }

    fn visit_enum_declaration(&mut self, node: &EnumDeclaration) {
        for member in node.members.iter() {
            self.visit_enum_member(member);
        }
    }

    fn visit_enum_member(&mut self, node: &EnumMember) {
        node.name().accept(self);
        if let Some(initializer) = node.initializer() {
            initializer.accept(self);
        }
    }

    fn visit_namespace_declaration(&mut self, node: &NamespaceDeclaration) {
        for statement in node.body.iter() {
            statement.accept(self);
        }
    }

    fn visit_ambient_declaration(&mut self, node: &AmbientDeclaration) {
        node.declaration().accept(self);
    }

    fn visit_import_declaration(&mut self, node: &ImportDeclaration) {}

    fn visit_import_alias_declaration(&mut self, node: &ImportAliasDeclaration) {}

    fn visit_exported_declaration(&mut self, node: &ExportedDeclaration) {
        node.declaration().accept(self);
    }

    fn visit_export_default(&mut self, node: &ExportDefault) {
        match node {
            ExportDefault::Function(function) => walk_function(self, function),
            ExportDefault::Class(class) => walk_class(self, class),
            ExportDefault::Expression(expression) => expression.accept(self),
        }
    }

    fn visit_named_exports(&mut self, node: &NamedExports) {}

    fn visit_export_all(&mut self, node: &StringLiteral) {}

    fn visit_export_assignment(&mut self, node: &Expression) {
        node.accept(self);
    }

    // ========================================================================
    // Class elements
    // ========================================================================

    fn visit_property_member(&mut self, node: &PropertyMember) {
        node.name.accept(self);
        if let Some(type_annotation) = &node.type_annotation {
            type_annotation.accept(self);
        }
        if let Some(initializer) = &node.initializer {
            initializer.accept(self);
        }
    }

    fn visit_method_definition(&mut self, node: &MethodDefinition) {
        node.name.accept(self);
        self.visit_call_signature(&node.signature);
        if let Some(body) = &node.body {
            self.visit_block(body);
        }
    }

    fn visit_get_accessor(&mut self, node: &GetAccessor) {
        node.name.accept(self);
        if let Some(return_type) = &node.return_type {
            return_type.accept(self);
        }
        self.visit_block(&node.body);
    }

    fn visit_set_accessor(&mut self, node: &SetAccessor) {
        node.name.accept(self);
        self.visit_parameter(&node.parameter);
        self.visit_block(&node.body);
    }

    fn visit_constructor(&mut self, node: &ConstructorMember) {
        self.visit_parameter_list(&node.parameters);
        if let Some(body) = &node.body {
            self.visit_block(body);
        }
    }

    fn visit_index_signature(&mut self, node: &IndexSignature) {
        node.type_annotation().accept(self);
    }

    // ========================================================================
    // Types
    // ========================================================================

    fn visit_predefined_type(&mut self, node: PredefinedType) {}

    fn visit_type_reference(&mut self, node: &TypeReference) {
        for type_argument in node.type_arguments.iter() {
            type_argument.accept(self);
        }
    }

    fn visit_parenthesized_type(&mut self, node: &ParenthesizedType) {
        node.type_node.accept(self);
    }

    fn visit_array_type(&mut self, node: &ArrayType) {
        node.element_type.accept(self);
    }

    fn visit_tuple_type(&mut self, node: &TupleType) {
        for element in node.elements() {
            element.accept(self);
        }
    }

    fn visit_union_type(&mut self, node: &UnionType) {
        for member in node.types() {
            member.accept(self);
        }
    }

    fn visit_intersection_type(&mut self, node: &IntersectionType) {
        for member in node.types() {
            member.accept(self);
        }
    }

    fn visit_function_type(&mut self, node: &FunctionType) {
        walk_function_type(self, node);
    }

    fn visit_constructor_type(&mut self, node: &FunctionType) {
        walk_function_type(self, node);
    }

    fn visit_type_query(&mut self, node: &TypeQuery) {}

    fn visit_this_type(&mut self) {}

    fn visit_object_type(&mut self, node: &ObjectType) {
        for member in node.members.iter() {
            member.accept(self);
        }
    }

    fn visit_literal_type(&mut self, node: &LiteralType) {}

    fn visit_type_predicate(&mut self, node: &TypePredicate) {
        node.type_node.accept(self);
    }

    fn visit_property_signature(&mut self, node: &PropertySignature) {
        node.name.accept(self);
        if let Some(type_annotation) = &node.type_annotation {
            type_annotation.accept(self);
        }
    }

    fn visit_method_signature(&mut self, node: &MethodSignature) {
        node.name.accept(self);
        self.visit_call_signature(&node.signature);
    }

    fn visit_call_member(&mut self, node: &CallSignature) {
        self.visit_call_signature(node);
    }

    fn visit_construct_member(&mut self, node: &CallSignature) {
        self.visit_call_signature(node);
    }

    // ========================================================================
    // Signatures, parameters and bindings
    // ========================================================================

    fn visit_type_parameter(&mut self, node: &TypeParameter) {
        if let Some(constraint) = &node.constraint {
            constraint.accept(self);
        }
    }

    fn visit_call_signature(&mut self, node: &CallSignature) {
        for type_parameter in node.type_parameters.iter() {
            self.visit_type_parameter(type_parameter);
        }
        self.visit_parameter_list(&node.parameters);
        if let Some(return_type) = &node.return_type {
            return_type.accept(self);
        }
    }

    fn visit_parameter_list(&mut self, node: &ParameterList) {
        for parameter in node.parameters.iter() {
            self.visit_parameter(parameter);
        }
        if let Some(rest) = &node.rest {
            self.visit_rest_parameter(rest);
        }
    }

    fn visit_parameter(&mut self, node: &Parameter) {
        node.target().accept(self);
        if let Some(type_annotation) = node.type_annotation() {
            type_annotation.accept(self);
        }
        if let Some(initializer) = node.initializer() {
            initializer.accept(self);
        }
    }

    fn visit_rest_parameter(&mut self, node: &RestParameter) {
        self.visit_identifier(&node.name);
        if let Some(type_annotation) = &node.type_annotation {
            type_annotation.accept(self);
        }
    }

    fn visit_object_binding_pattern(&mut self, node: &ObjectBindingPattern) {
        for property in node.properties.iter() {
            property.accept(self);
        }
    }

    fn visit_single_name_binding(&mut self, node: &SingleNameBinding) {
        self.visit_identifier(&node.name);
        if let Some(initializer) = &node.initializer {
            initializer.accept(self);
        }
    }

    fn visit_property_binding(&mut self, node: &PropertyBinding) {
        node.name.accept(self);
        self.visit_binding_element(&node.element);
    }

    fn visit_binding_element(&mut self, node: &BindingElement) {
        node.target.accept(self);
        if let Some(initializer) = &node.initializer {
            initializer.accept(self);
        }
    }

    fn visit_array_binding_pattern(&mut self, node: &ArrayBindingPattern) {
        for element in node.elements.iter().flatten() {
            self.visit_binding_element(element);
        }
        if let Some(rest) = &node.rest {
            rest.accept(self);
        }
    }
}

// ============================================================================
// Shared walks
// ============================================================================

fn walk_function<V: Visitor + ?Sized>(visitor: &mut V, node: &Function) {
    visitor.visit_call_signature(node.signature());
    if let Some(body) = node.body() {
        visitor.visit_block(body);
    }
}

fn walk_class<V: Visitor + ?Sized>(visitor: &mut V, node: &Class) {
    for type_parameter in node.type_parameters() {
        visitor.visit_type_parameter(type_parameter);
    }
    if let Some(extends) = node.extends() {
        visitor.visit_heritage_expression(extends);
    }
    for implemented in node.implements() {
        visitor.visit_type_reference(implemented);
    }
    for element in node.elements() {
        element.accept(visitor);
    }
}

fn walk_member<V: Visitor + ?Sized>(visitor: &mut V, node: &MemberExpression) {
    if let MemberTarget::Expression(target) = &node.target {
        target.accept(visitor);
    }
    if let MemberAccess::Bracket(index) = &node.access {
        index.accept(visitor);
    }
}

fn walk_call<V: Visitor + ?Sized>(visitor: &mut V, node: &CallExpression) {
    if let Some(callee) = node.callee() {
        callee.accept(visitor);
    }
    for type_argument in node.type_arguments() {
        type_argument.accept(visitor);
    }
    if let Some(arguments) = node.arguments() {
        visitor.visit_argument_list(arguments);
    }
}

fn walk_for_each<V: Visitor + ?Sized>(visitor: &mut V, node: &ForEachStatement) {
    match &node.binding {
        ForBinding::Variable(_, target) => target.accept(visitor),
        ForBinding::Expression(expression) => expression.accept(visitor),
    }
    node.expression.accept(visitor);
    node.body.accept(visitor);
}

fn walk_function_type<V: Visitor + ?Sized>(visitor: &mut V, node: &FunctionType) {
    for type_parameter in node.type_parameters.iter() {
        visitor.visit_type_parameter(type_parameter);
    }
    visitor.visit_parameter_list(&node.parameters);
    node.return_type.accept(visitor);
}

// ============================================================================
// Dispatch
// ============================================================================

impl AstNode for Expression {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Expression::This => visitor.visit_this_expression(),
            Expression::Identifier(n) => visitor.visit_identifier(n),
            Expression::Null => visitor.visit_null_literal(),
            Expression::Boolean(n) => visitor.visit_boolean_literal(n),
            Expression::Number(n) => visitor.visit_numeric_literal(n),
            Expression::String(n) => visitor.visit_string_literal(n),
            Expression::RegularExpression(n) => visitor.visit_regular_expression_literal(n),
            Expression::Template(n) => visitor.visit_template_literal(n),
            Expression::Array(n) => visitor.visit_array_literal(n),
            Expression::Object(n) => visitor.visit_object_literal(n),
            Expression::Parenthesized(n) => visitor.visit_parenthesized_expression(n),
            Expression::Function(n) => visitor.visit_function_expression(n),
            Expression::Class(n) => visitor.visit_class_expression(n),
            Expression::Member(n) => n.accept(visitor),
            Expression::Call(n) => n.accept(visitor),
            Expression::NewTarget => visitor.visit_new_target(),
            Expression::Unary(n) => visitor.visit_unary_expression(n),
            Expression::TypeAssertion(n) => visitor.visit_type_assertion(n),
            Expression::As(n) => visitor.visit_as_expression(n),
            Expression::Binary(n) => visitor.visit_binary_expression(n),
            Expression::Conditional(n) => visitor.visit_conditional_expression(n),
            Expression::Assignment(n) => visitor.visit_assignment_expression(n),
            Expression::Arrow(n) => visitor.visit_arrow_function(n),
            Expression::Comma(n) => visitor.visit_comma_expression(n),
        }
    }
}

impl AstNode for MemberExpression {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match (&self.target, &self.access) {
            (MemberTarget::Expression(_), MemberAccess::Dot(_)) => visitor.visit_member_dot(self),
            (MemberTarget::Expression(_), MemberAccess::Bracket(_)) => visitor.visit_member_bracket(self),
            (MemberTarget::Super, MemberAccess::Dot(_)) => visitor.visit_super_dot(self),
            (MemberTarget::Super, MemberAccess::Bracket(_)) => visitor.visit_super_bracket(self),
        }
    }
}

impl AstNode for CallExpression {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self.kind() {
            CallKind::Call => visitor.visit_call_expression(self),
            CallKind::New => visitor.visit_new_call_expression(self),
            CallKind::Super => visitor.visit_super_call_expression(self),
        }
    }
}

impl AstNode for PropertyDefinition {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            PropertyDefinition::Shorthand(n) => visitor.visit_shorthand_property(n),
            PropertyDefinition::CoverInitialized(n) => visitor.visit_cover_initialized_name(n),
            PropertyDefinition::Assignment(n) => visitor.visit_property_assignment(n),
            PropertyDefinition::Method(n) => visitor.visit_method_definition(n),
            PropertyDefinition::Getter(n) => visitor.visit_get_accessor(n),
            PropertyDefinition::Setter(n) => visitor.visit_set_accessor(n),
        }
    }
}

impl AstNode for PropertyName {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            PropertyName::Identifier(n) => visitor.visit_identifier(n),
            PropertyName::String(n) => visitor.visit_string_literal(n),
            PropertyName::Number(n) => visitor.visit_numeric_literal(n),
            PropertyName::Computed(n) => visitor.visit_computed_property_name(n),
        }
    }
}

impl AstNode for Statement {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Statement::Block(n) => visitor.visit_block(n),
            Statement::Variable(n) => visitor.visit_variable_statement(n),
            Statement::Empty => visitor.visit_empty_statement(),
            Statement::Expression(n) => visitor.visit_expression_statement(n),
            Statement::If(n) => visitor.visit_if_statement(n),
            Statement::Do(n) => visitor.visit_do_statement(n),
            Statement::While(n) => visitor.visit_while_statement(n),
            Statement::For(n) => visitor.visit_for_statement(n),
            Statement::ForIn(n) => visitor.visit_for_in_statement(n),
            Statement::ForOf(n) => visitor.visit_for_of_statement(n),
            Statement::Continue(n) => visitor.visit_continue_statement(n),
            Statement::Break(n) => visitor.visit_break_statement(n),
            Statement::Return(n) => visitor.visit_return_statement(n),
            Statement::With(n) => visitor.visit_with_statement(n),
            Statement::Switch(n) => visitor.visit_switch_statement(n),
            Statement::Labeled(n) => visitor.visit_labeled_statement(n),
            Statement::Throw(n) => visitor.visit_throw_statement(n),
            Statement::Try(n) => visitor.visit_try_statement(n),
            Statement::Debugger => visitor.visit_debugger_statement(),
            Statement::Declaration(n) => n.accept(visitor),
        }
    }
}

impl AstNode for Declaration {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Declaration::Lexical(n) => visitor.visit_lexical_declaration(n),
            Declaration::Function(n) => visitor.visit_function_declaration(n),
            Declaration::Class(n) => visitor.visit_class_declaration(n),
            Declaration::Interface(n) => visitor.visit_interface_declaration(n),
            Declaration::TypeAlias(n) => visitor.visit_type_alias_declaration(n),
            Declaration::Enum(n) => visitor.visit_enum_declaration(n),
            Declaration::Namespace(n) => visitor.visit_namespace_declaration(n),
            Declaration::Ambient(n) => visitor.visit_ambient_declaration(n),
            Declaration::Import(n) => visitor.visit_import_declaration(n),
            Declaration::ImportAlias(n) => visitor.visit_import_alias_declaration(n),
            Declaration::Export(n) => n.accept(visitor),
        }
    }
}

impl AstNode for ExportDeclaration {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            ExportDeclaration::Declaration(n) => visitor.visit_exported_declaration(n),
            ExportDeclaration::Default(n) => visitor.visit_export_default(n),
            ExportDeclaration::Named(n) => visitor.visit_named_exports(n),
            ExportDeclaration::All(n) => visitor.visit_export_all(n),
            ExportDeclaration::Assignment(n) => visitor.visit_export_assignment(n),
        }
    }
}

impl AstNode for ClassElement {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            ClassElement::Property(n) => visitor.visit_property_member(n),
            ClassElement::Method(n) => visitor.visit_method_definition(n),
            ClassElement::GetAccessor(n) => visitor.visit_get_accessor(n),
            ClassElement::SetAccessor(n) => visitor.visit_set_accessor(n),
            ClassElement::Constructor(n) => visitor.visit_constructor(n),
            ClassElement::Index(n) => visitor.visit_index_signature(n),
        }
    }
}

impl AstNode for TypeNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            TypeNode::Predefined(n) => visitor.visit_predefined_type(*n),
            TypeNode::Reference(n) => visitor.visit_type_reference(n),
            TypeNode::Parenthesized(n) => visitor.visit_parenthesized_type(n),
            TypeNode::Array(n) => visitor.visit_array_type(n),
            TypeNode::Tuple(n) => visitor.visit_tuple_type(n),
            TypeNode::Union(n) => visitor.visit_union_type(n),
            TypeNode::Intersection(n) => visitor.visit_intersection_type(n),
            TypeNode::Function(n) => visitor.visit_function_type(n),
            TypeNode::Constructor(n) => visitor.visit_constructor_type(n),
            TypeNode::Query(n) => visitor.visit_type_query(n),
            TypeNode::This => visitor.visit_this_type(),
            TypeNode::Object(n) => visitor.visit_object_type(n),
            TypeNode::Literal(n) => visitor.visit_literal_type(n),
            TypeNode::Predicate(n) => visitor.visit_type_predicate(n),
        }
    }
}

impl AstNode for TypeMember {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            TypeMember::Property(n) => visitor.visit_property_signature(n),
            TypeMember::Method(n) => visitor.visit_method_signature(n),
            TypeMember::Call(n) => visitor.visit_call_member(n),
            TypeMember::Construct(n) => visitor.visit_construct_member(n),
            TypeMember::Index(n) => visitor.visit_index_signature(n),
        }
    }
}

impl AstNode for BindingTarget {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            BindingTarget::Identifier(n) => visitor.visit_identifier(n),
            BindingTarget::Object(n) => visitor.visit_object_binding_pattern(n),
            BindingTarget::Array(n) => visitor.visit_array_binding_pattern(n),
        }
    }
}

impl AstNode for BindingProperty {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            BindingProperty::SingleName(n) => visitor.visit_single_name_binding(n),
            BindingProperty::Property(n) => visitor.visit_property_binding(n),
        }
    }
}

macro_rules! impl_ast_node {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl AstNode for $ty {
                fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
                    visitor.$method(self);
                }
            }
        )*
    };
}

impl_ast_node!(
    SourceFile => visit_source_file,
    Identifier => visit_identifier,
    EntityName => visit_entity_name,
    NumericLiteral => visit_numeric_literal,
    StringLiteral => visit_string_literal,
    ArgumentList => visit_argument_list,
    Block => visit_block,
    VariableDeclaration => visit_variable_declaration,
    CaseClause => visit_case_clause,
    CatchClause => visit_catch_clause,
    EnumMember => visit_enum_member,
    HeritageExpression => visit_heritage_expression,
    TypeReference => visit_type_reference,
    TypeParameter => visit_type_parameter,
    CallSignature => visit_call_signature,
    ParameterList => visit_parameter_list,
    Parameter => visit_parameter,
    RestParameter => visit_rest_parameter,
    BindingElement => visit_binding_element,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;

    /// Collects identifier names in visiting order.
    #[derive(Default)]
    struct NameCollector {
        names: Vec<String>,
        super_calls: usize,
        new_calls: usize,
    }

    impl Visitor for NameCollector {
        fn visit_identifier(&mut self, node: &Identifier) {
            self.names.push(node.name().to_string());
        }

        fn visit_super_call_expression(&mut self, node: &CallExpression) {
            self.super_calls += 1;
            walk_call(self, node);
        }

        fn visit_new_call_expression(&mut self, node: &CallExpression) {
            self.new_calls += 1;
            walk_call(self, node);
        }
    }

    fn ident(name: &str) -> Identifier {
        factory::identifier(name).unwrap()
    }

    #[test]
    fn test_default_walk_visits_children_in_order() {
        let sum = factory::binary_expression(ident("a").into(), BinaryOperator::Add, ident("b").into());
        let call = factory::call_expression(
            ident("f").into(),
            vec![],
            factory::argument_list(vec![factory::argument(sum.into())]),
        );
        let mut collector = NameCollector::default();
        Expression::from(call).accept(&mut collector);
        assert_eq!(collector.names, vec!["f", "a", "b"]);
    }

    #[test]
    fn test_call_kinds_dispatch_to_distinct_methods() {
        let args = factory::argument_list(vec![]);
        let super_call: Expression = factory::super_call(args.clone()).into();
        let new_call: Expression = factory::new_expression(ident("C").into(), vec![], None).into();
        let mut collector = NameCollector::default();
        super_call.accept(&mut collector);
        new_call.accept(&mut collector);
        assert_eq!(collector.super_calls, 1);
        assert_eq!(collector.new_calls, 1);
        assert_eq!(collector.names, vec!["C"]);
    }

    #[test]
    fn test_binding_patterns_are_walked() {
        let pattern = factory::object_binding_pattern(vec![
            factory::single_name_binding(ident("x"), None),
            factory::property_binding(
                factory::computed_property_name(ident("k").into()),
                factory::binding_element(ident("y").into(), None),
            ),
        ]);
        let mut collector = NameCollector::default();
        BindingTarget::Object(pattern).accept(&mut collector);
        assert_eq!(collector.names, vec!["x", "k", "y"]);
    }
}
