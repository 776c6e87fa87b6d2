//! Operator precedence for binary operators, and token-to-operator mapping.

use scribe_ast::syntax_kind::SyntaxKind;
use scribe_ast::{AssignmentOperator, BinaryOperator, UnaryOperator};

/// Binary operator precedence levels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    Lowest = 0,
    LogicalOr = 1,
    LogicalAnd = 2,
    BitwiseOr = 3,
    BitwiseXor = 4,
    BitwiseAnd = 5,
    Equality = 6,
    Relational = 7,
    Shift = 8,
    Additive = 9,
    Multiplicative = 10,
    Exponentiation = 11,
}

/// Get the binary operator precedence for a given token kind. `as` counts
/// as a relational operator.
pub fn binary_operator_precedence(kind: SyntaxKind) -> Option<OperatorPrecedence> {
    let precedence = match kind {
        SyntaxKind::BarBarToken => OperatorPrecedence::LogicalOr,
        SyntaxKind::AmpersandAmpersandToken => OperatorPrecedence::LogicalAnd,
        SyntaxKind::BarToken => OperatorPrecedence::BitwiseOr,
        SyntaxKind::CaretToken => OperatorPrecedence::BitwiseXor,
        SyntaxKind::AmpersandToken => OperatorPrecedence::BitwiseAnd,
        SyntaxKind::EqualsEqualsToken
        | SyntaxKind::ExclamationEqualsToken
        | SyntaxKind::EqualsEqualsEqualsToken
        | SyntaxKind::ExclamationEqualsEqualsToken => OperatorPrecedence::Equality,
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken
        | SyntaxKind::InstanceOfKeyword
        | SyntaxKind::InKeyword
        | SyntaxKind::AsKeyword => OperatorPrecedence::Relational,
        SyntaxKind::LessThanLessThanToken
        | SyntaxKind::GreaterThanGreaterThanToken
        | SyntaxKind::GreaterThanGreaterThanGreaterThanToken => OperatorPrecedence::Shift,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => OperatorPrecedence::Additive,
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => {
            OperatorPrecedence::Multiplicative
        }
        SyntaxKind::AsteriskAsteriskToken => OperatorPrecedence::Exponentiation,
        _ => return None,
    };
    Some(precedence)
}

pub fn binary_operator(kind: SyntaxKind) -> Option<BinaryOperator> {
    let operator = match kind {
        SyntaxKind::AsteriskAsteriskToken => BinaryOperator::Exponent,
        SyntaxKind::AsteriskToken => BinaryOperator::Multiply,
        SyntaxKind::SlashToken => BinaryOperator::Divide,
        SyntaxKind::PercentToken => BinaryOperator::Remainder,
        SyntaxKind::PlusToken => BinaryOperator::Add,
        SyntaxKind::MinusToken => BinaryOperator::Subtract,
        SyntaxKind::LessThanLessThanToken => BinaryOperator::LeftShift,
        SyntaxKind::GreaterThanGreaterThanToken => BinaryOperator::SignedRightShift,
        SyntaxKind::GreaterThanGreaterThanGreaterThanToken => BinaryOperator::UnsignedRightShift,
        SyntaxKind::LessThanToken => BinaryOperator::LessThan,
        SyntaxKind::GreaterThanToken => BinaryOperator::GreaterThan,
        SyntaxKind::LessThanEqualsToken => BinaryOperator::LessThanOrEqual,
        SyntaxKind::GreaterThanEqualsToken => BinaryOperator::GreaterThanOrEqual,
        SyntaxKind::InstanceOfKeyword => BinaryOperator::InstanceOf,
        SyntaxKind::InKeyword => BinaryOperator::In,
        SyntaxKind::EqualsEqualsToken => BinaryOperator::Equal,
        SyntaxKind::ExclamationEqualsToken => BinaryOperator::NotEqual,
        SyntaxKind::EqualsEqualsEqualsToken => BinaryOperator::StrictEqual,
        SyntaxKind::ExclamationEqualsEqualsToken => BinaryOperator::StrictNotEqual,
        SyntaxKind::AmpersandToken => BinaryOperator::BitwiseAnd,
        SyntaxKind::CaretToken => BinaryOperator::BitwiseXor,
        SyntaxKind::BarToken => BinaryOperator::BitwiseOr,
        SyntaxKind::AmpersandAmpersandToken => BinaryOperator::LogicalAnd,
        SyntaxKind::BarBarToken => BinaryOperator::LogicalOr,
        _ => return None,
    };
    Some(operator)
}

pub fn assignment_operator(kind: SyntaxKind) -> Option<AssignmentOperator> {
    let operator = match kind {
        SyntaxKind::EqualsToken => AssignmentOperator::Assign,
        SyntaxKind::PlusEqualsToken => AssignmentOperator::AddAssign,
        SyntaxKind::MinusEqualsToken => AssignmentOperator::SubtractAssign,
        SyntaxKind::AsteriskEqualsToken => AssignmentOperator::MultiplyAssign,
        SyntaxKind::AsteriskAsteriskEqualsToken => AssignmentOperator::ExponentAssign,
        SyntaxKind::SlashEqualsToken => AssignmentOperator::DivideAssign,
        SyntaxKind::PercentEqualsToken => AssignmentOperator::RemainderAssign,
        SyntaxKind::LessThanLessThanEqualsToken => AssignmentOperator::LeftShiftAssign,
        SyntaxKind::GreaterThanGreaterThanEqualsToken => AssignmentOperator::SignedRightShiftAssign,
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => AssignmentOperator::UnsignedRightShiftAssign,
        SyntaxKind::AmpersandEqualsToken => AssignmentOperator::BitwiseAndAssign,
        SyntaxKind::BarEqualsToken => AssignmentOperator::BitwiseOrAssign,
        SyntaxKind::CaretEqualsToken => AssignmentOperator::BitwiseXorAssign,
        _ => return None,
    };
    Some(operator)
}

/// Prefix operators, other than `++` and `--`.
pub fn prefix_operator(kind: SyntaxKind) -> Option<UnaryOperator> {
    let operator = match kind {
        SyntaxKind::PlusToken => UnaryOperator::Plus,
        SyntaxKind::MinusToken => UnaryOperator::Minus,
        SyntaxKind::TildeToken => UnaryOperator::BitwiseNot,
        SyntaxKind::ExclamationToken => UnaryOperator::LogicalNot,
        SyntaxKind::DeleteKeyword => UnaryOperator::Delete,
        SyntaxKind::VoidKeyword => UnaryOperator::Void,
        SyntaxKind::TypeOfKeyword => UnaryOperator::TypeOf,
        _ => return None,
    };
    Some(operator)
}
