//! Parser utility functions.

use scribe_ast::syntax_kind::SyntaxKind;
use scribe_ast::PredefinedType;

/// Check if a token kind can start a property name.
pub fn is_property_name_start(kind: SyntaxKind) -> bool {
    kind.is_identifier_name()
        || matches!(
            kind,
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::OpenBracketToken
        )
}

/// Check if a modifier keyword followed by `next` acts as a modifier rather
/// than as a member name.
pub fn can_follow_modifier(next: SyntaxKind) -> bool {
    is_property_name_start(next)
}

/// Check if a parameter modifier followed by `next` acts as a modifier rather
/// than as the parameter name.
pub fn can_follow_parameter_modifier(next: SyntaxKind) -> bool {
    next.is_identifier() || matches!(next, SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken)
}

/// Check if a token kind can start a declaration that `export` or `declare`
/// may be applied to.
pub fn is_declaration_keyword(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::VarKeyword
            | SyntaxKind::LetKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::AbstractKeyword
            | SyntaxKind::InterfaceKeyword
            | SyntaxKind::TypeKeyword
            | SyntaxKind::EnumKeyword
            | SyntaxKind::NamespaceKeyword
            | SyntaxKind::ModuleKeyword
            | SyntaxKind::DeclareKeyword
            | SyntaxKind::ImportKeyword
    )
}

/// The predefined type a keyword names in type position.
pub fn predefined_type(kind: SyntaxKind) -> Option<PredefinedType> {
    let predefined = match kind {
        SyntaxKind::AnyKeyword => PredefinedType::Any,
        SyntaxKind::NumberKeyword => PredefinedType::Number,
        SyntaxKind::BooleanKeyword => PredefinedType::Boolean,
        SyntaxKind::StringKeyword => PredefinedType::String,
        SyntaxKind::SymbolKeyword => PredefinedType::Symbol,
        SyntaxKind::VoidKeyword => PredefinedType::Void,
        SyntaxKind::NullKeyword => PredefinedType::Null,
        SyntaxKind::UndefinedKeyword => PredefinedType::Undefined,
        SyntaxKind::NeverKeyword => PredefinedType::Never,
        SyntaxKind::ObjectKeyword => PredefinedType::Object,
        _ => return None,
    };
    Some(predefined)
}
