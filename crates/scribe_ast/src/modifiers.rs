//! Modifier flags carried by class members and constructor parameters.

use crate::syntax_kind::SyntaxKind;

bitflags::bitflags! {
    /// Modifiers written before a class member or a parameter property.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u8 {
        const NONE      = 0;
        const PUBLIC    = 1 << 0;
        const PRIVATE   = 1 << 1;
        const PROTECTED = 1 << 2;
        const STATIC    = 1 << 3;
        const ABSTRACT  = 1 << 4;
        const READONLY  = 1 << 5;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const PARAMETER_PROPERTY_MODIFIER = Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits();
    }
}

impl ModifierFlags {
    /// The flag a modifier keyword sets, if it is one.
    pub fn from_kind(kind: SyntaxKind) -> Option<ModifierFlags> {
        match kind {
            SyntaxKind::PublicKeyword => Some(ModifierFlags::PUBLIC),
            SyntaxKind::PrivateKeyword => Some(ModifierFlags::PRIVATE),
            SyntaxKind::ProtectedKeyword => Some(ModifierFlags::PROTECTED),
            SyntaxKind::StaticKeyword => Some(ModifierFlags::STATIC),
            SyntaxKind::AbstractKeyword => Some(ModifierFlags::ABSTRACT),
            SyntaxKind::ReadonlyKeyword => Some(ModifierFlags::READONLY),
            _ => None,
        }
    }

    /// The keywords for the set flags, in canonical source order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        const ORDER: [(ModifierFlags, &str); 6] = [
            (ModifierFlags::PUBLIC, "public"),
            (ModifierFlags::PRIVATE, "private"),
            (ModifierFlags::PROTECTED, "protected"),
            (ModifierFlags::STATIC, "static"),
            (ModifierFlags::ABSTRACT, "abstract"),
            (ModifierFlags::READONLY, "readonly"),
        ];
        ORDER
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, text)| text)
    }
}
