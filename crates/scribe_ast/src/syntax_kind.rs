//! SyntaxKind enum - the lexical category of every token.
//!
//! Tree nodes are typed enums (see [`crate::node`]), so this enum only tags
//! tokens: literals, identifiers, punctuators and keywords.

/// The lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    EndOfFileToken = 0,

    // Literals
    NumericLiteral,
    StringLiteral,

    // Identifiers
    Identifier,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    AtToken,

    // Assignments
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,

    // Reserved words
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,

    // Strict mode reserved words
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    StaticKeyword,
    YieldKeyword,

    // Contextual keywords
    AbstractKeyword,
    AsKeyword,
    AnyKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BooleanKeyword,
    ConstructorKeyword,
    DeclareKeyword,
    GetKeyword,
    IsKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    NeverKeyword,
    ReadonlyKeyword,
    RequireKeyword,
    NumberKeyword,
    ObjectKeyword,
    SetKeyword,
    StringKeyword,
    SymbolKeyword,
    TypeKeyword,
    UndefinedKeyword,
    FromKeyword,
    GlobalKeyword,
    OfKeyword,
}

// Marker constants for SyntaxKind ranges.
impl SyntaxKind {
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::PlusEqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_RESERVED_WORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_RESERVED_WORD: SyntaxKind = SyntaxKind::WithKeyword;
    pub const FIRST_FUTURE_RESERVED_WORD: SyntaxKind = SyntaxKind::ImplementsKeyword;
    pub const LAST_FUTURE_RESERVED_WORD: SyntaxKind = SyntaxKind::YieldKeyword;
    pub const FIRST_CONTEXTUAL_KEYWORD: SyntaxKind = SyntaxKind::AbstractKeyword;
    pub const LAST_CONTEXTUAL_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;

    #[inline]
    fn in_range(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        let v = self as u16;
        v >= first as u16 && v <= last as u16
    }

    /// Whether this kind represents any keyword (reserved or contextual).
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.in_range(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    /// Whether this kind is a word that can never be used as an identifier.
    #[inline]
    pub fn is_reserved_word(self) -> bool {
        self.in_range(Self::FIRST_RESERVED_WORD, Self::LAST_RESERVED_WORD)
    }

    /// Whether this kind is reserved only in strict mode code.
    #[inline]
    pub fn is_future_reserved_word(self) -> bool {
        self.in_range(Self::FIRST_FUTURE_RESERVED_WORD, Self::LAST_FUTURE_RESERVED_WORD)
    }

    /// Whether this kind is a keyword only in certain grammatical positions.
    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        self.in_range(Self::FIRST_CONTEXTUAL_KEYWORD, Self::LAST_CONTEXTUAL_KEYWORD)
    }

    /// Whether a token of this kind can name a binding.
    #[inline]
    pub fn is_identifier(self) -> bool {
        self == SyntaxKind::Identifier || (self.is_keyword() && !self.is_reserved_word())
    }

    /// Whether a token of this kind can appear after `.` or as a property name.
    #[inline]
    pub fn is_identifier_name(self) -> bool {
        self == SyntaxKind::Identifier || self.is_keyword()
    }

    /// Whether this kind represents a punctuation token.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        self.in_range(Self::FIRST_PUNCTUATION, Self::LAST_PUNCTUATION)
    }

    /// Whether this kind represents a literal token.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::NumericLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
                | SyntaxKind::NullKeyword
        )
    }

    /// Whether this kind represents an assignment operator.
    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self.in_range(Self::FIRST_ASSIGNMENT, Self::LAST_ASSIGNMENT)
    }

    /// Whether this kind represents a compound assignment operator.
    #[inline]
    pub fn is_compound_assignment(self) -> bool {
        self.in_range(Self::FIRST_COMPOUND_ASSIGNMENT, Self::LAST_ASSIGNMENT)
    }

    /// Whether this kind represents a class member or parameter modifier keyword.
    #[inline]
    pub fn is_modifier_kind(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::StaticKeyword
        )
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::BreakKeyword => Some("break"),
            SyntaxKind::CaseKeyword => Some("case"),
            SyntaxKind::CatchKeyword => Some("catch"),
            SyntaxKind::ClassKeyword => Some("class"),
            SyntaxKind::ConstKeyword => Some("const"),
            SyntaxKind::ContinueKeyword => Some("continue"),
            SyntaxKind::DebuggerKeyword => Some("debugger"),
            SyntaxKind::DefaultKeyword => Some("default"),
            SyntaxKind::DeleteKeyword => Some("delete"),
            SyntaxKind::DoKeyword => Some("do"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::EnumKeyword => Some("enum"),
            SyntaxKind::ExportKeyword => Some("export"),
            SyntaxKind::ExtendsKeyword => Some("extends"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::FinallyKeyword => Some("finally"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::FunctionKeyword => Some("function"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::ImportKeyword => Some("import"),
            SyntaxKind::InKeyword => Some("in"),
            SyntaxKind::InstanceOfKeyword => Some("instanceof"),
            SyntaxKind::NewKeyword => Some("new"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::SuperKeyword => Some("super"),
            SyntaxKind::SwitchKeyword => Some("switch"),
            SyntaxKind::ThisKeyword => Some("this"),
            SyntaxKind::ThrowKeyword => Some("throw"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::TryKeyword => Some("try"),
            SyntaxKind::TypeOfKeyword => Some("typeof"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::VoidKeyword => Some("void"),
            SyntaxKind::WhileKeyword => Some("while"),
            SyntaxKind::WithKeyword => Some("with"),
            SyntaxKind::ImplementsKeyword => Some("implements"),
            SyntaxKind::InterfaceKeyword => Some("interface"),
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::PackageKeyword => Some("package"),
            SyntaxKind::PrivateKeyword => Some("private"),
            SyntaxKind::ProtectedKeyword => Some("protected"),
            SyntaxKind::PublicKeyword => Some("public"),
            SyntaxKind::StaticKeyword => Some("static"),
            SyntaxKind::YieldKeyword => Some("yield"),
            SyntaxKind::AbstractKeyword => Some("abstract"),
            SyntaxKind::AsKeyword => Some("as"),
            SyntaxKind::AnyKeyword => Some("any"),
            SyntaxKind::AsyncKeyword => Some("async"),
            SyntaxKind::AwaitKeyword => Some("await"),
            SyntaxKind::BooleanKeyword => Some("boolean"),
            SyntaxKind::ConstructorKeyword => Some("constructor"),
            SyntaxKind::DeclareKeyword => Some("declare"),
            SyntaxKind::GetKeyword => Some("get"),
            SyntaxKind::IsKeyword => Some("is"),
            SyntaxKind::ModuleKeyword => Some("module"),
            SyntaxKind::NamespaceKeyword => Some("namespace"),
            SyntaxKind::NeverKeyword => Some("never"),
            SyntaxKind::ReadonlyKeyword => Some("readonly"),
            SyntaxKind::RequireKeyword => Some("require"),
            SyntaxKind::NumberKeyword => Some("number"),
            SyntaxKind::ObjectKeyword => Some("object"),
            SyntaxKind::SetKeyword => Some("set"),
            SyntaxKind::StringKeyword => Some("string"),
            SyntaxKind::SymbolKeyword => Some("symbol"),
            SyntaxKind::TypeKeyword => Some("type"),
            SyntaxKind::UndefinedKeyword => Some("undefined"),
            SyntaxKind::FromKeyword => Some("from"),
            SyntaxKind::GlobalKeyword => Some("global"),
            SyntaxKind::OfKeyword => Some("of"),
            _ => None,
        }
    }

    /// Look up a keyword by its text.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "break" => Some(SyntaxKind::BreakKeyword),
            "case" => Some(SyntaxKind::CaseKeyword),
            "catch" => Some(SyntaxKind::CatchKeyword),
            "class" => Some(SyntaxKind::ClassKeyword),
            "const" => Some(SyntaxKind::ConstKeyword),
            "continue" => Some(SyntaxKind::ContinueKeyword),
            "debugger" => Some(SyntaxKind::DebuggerKeyword),
            "default" => Some(SyntaxKind::DefaultKeyword),
            "delete" => Some(SyntaxKind::DeleteKeyword),
            "do" => Some(SyntaxKind::DoKeyword),
            "else" => Some(SyntaxKind::ElseKeyword),
            "enum" => Some(SyntaxKind::EnumKeyword),
            "export" => Some(SyntaxKind::ExportKeyword),
            "extends" => Some(SyntaxKind::ExtendsKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            "finally" => Some(SyntaxKind::FinallyKeyword),
            "for" => Some(SyntaxKind::ForKeyword),
            "function" => Some(SyntaxKind::FunctionKeyword),
            "if" => Some(SyntaxKind::IfKeyword),
            "import" => Some(SyntaxKind::ImportKeyword),
            "in" => Some(SyntaxKind::InKeyword),
            "instanceof" => Some(SyntaxKind::InstanceOfKeyword),
            "new" => Some(SyntaxKind::NewKeyword),
            "null" => Some(SyntaxKind::NullKeyword),
            "return" => Some(SyntaxKind::ReturnKeyword),
            "super" => Some(SyntaxKind::SuperKeyword),
            "switch" => Some(SyntaxKind::SwitchKeyword),
            "this" => Some(SyntaxKind::ThisKeyword),
            "throw" => Some(SyntaxKind::ThrowKeyword),
            "true" => Some(SyntaxKind::TrueKeyword),
            "try" => Some(SyntaxKind::TryKeyword),
            "typeof" => Some(SyntaxKind::TypeOfKeyword),
            "var" => Some(SyntaxKind::VarKeyword),
            "void" => Some(SyntaxKind::VoidKeyword),
            "while" => Some(SyntaxKind::WhileKeyword),
            "with" => Some(SyntaxKind::WithKeyword),
            "implements" => Some(SyntaxKind::ImplementsKeyword),
            "interface" => Some(SyntaxKind::InterfaceKeyword),
            "let" => Some(SyntaxKind::LetKeyword),
            "package" => Some(SyntaxKind::PackageKeyword),
            "private" => Some(SyntaxKind::PrivateKeyword),
            "protected" => Some(SyntaxKind::ProtectedKeyword),
            "public" => Some(SyntaxKind::PublicKeyword),
            "static" => Some(SyntaxKind::StaticKeyword),
            "yield" => Some(SyntaxKind::YieldKeyword),
            "abstract" => Some(SyntaxKind::AbstractKeyword),
            "as" => Some(SyntaxKind::AsKeyword),
            "any" => Some(SyntaxKind::AnyKeyword),
            "async" => Some(SyntaxKind::AsyncKeyword),
            "await" => Some(SyntaxKind::AwaitKeyword),
            "boolean" => Some(SyntaxKind::BooleanKeyword),
            "constructor" => Some(SyntaxKind::ConstructorKeyword),
            "declare" => Some(SyntaxKind::DeclareKeyword),
            "get" => Some(SyntaxKind::GetKeyword),
            "is" => Some(SyntaxKind::IsKeyword),
            "module" => Some(SyntaxKind::ModuleKeyword),
            "namespace" => Some(SyntaxKind::NamespaceKeyword),
            "never" => Some(SyntaxKind::NeverKeyword),
            "readonly" => Some(SyntaxKind::ReadonlyKeyword),
            "require" => Some(SyntaxKind::RequireKeyword),
            "number" => Some(SyntaxKind::NumberKeyword),
            "object" => Some(SyntaxKind::ObjectKeyword),
            "set" => Some(SyntaxKind::SetKeyword),
            "string" => Some(SyntaxKind::StringKeyword),
            "symbol" => Some(SyntaxKind::SymbolKeyword),
            "type" => Some(SyntaxKind::TypeKeyword),
            "undefined" => Some(SyntaxKind::UndefinedKeyword),
            "from" => Some(SyntaxKind::FromKeyword),
            "global" => Some(SyntaxKind::GlobalKeyword),
            "of" => Some(SyntaxKind::OfKeyword),
            _ => None,
        }
    }

    /// Get the text of a punctuation token.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::DotDotDotToken => Some("..."),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::LessThanToken => Some("<"),
            SyntaxKind::GreaterThanToken => Some(">"),
            SyntaxKind::LessThanEqualsToken => Some("<="),
            SyntaxKind::GreaterThanEqualsToken => Some(">="),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::ExclamationEqualsToken => Some("!="),
            SyntaxKind::EqualsEqualsEqualsToken => Some("==="),
            SyntaxKind::ExclamationEqualsEqualsToken => Some("!=="),
            SyntaxKind::EqualsGreaterThanToken => Some("=>"),
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::AsteriskToken => Some("*"),
            SyntaxKind::AsteriskAsteriskToken => Some("**"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::PercentToken => Some("%"),
            SyntaxKind::PlusPlusToken => Some("++"),
            SyntaxKind::MinusMinusToken => Some("--"),
            SyntaxKind::LessThanLessThanToken => Some("<<"),
            SyntaxKind::GreaterThanGreaterThanToken => Some(">>"),
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => Some(">>>"),
            SyntaxKind::AmpersandToken => Some("&"),
            SyntaxKind::BarToken => Some("|"),
            SyntaxKind::CaretToken => Some("^"),
            SyntaxKind::ExclamationToken => Some("!"),
            SyntaxKind::TildeToken => Some("~"),
            SyntaxKind::AmpersandAmpersandToken => Some("&&"),
            SyntaxKind::BarBarToken => Some("||"),
            SyntaxKind::QuestionToken => Some("?"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::AtToken => Some("@"),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::PlusEqualsToken => Some("+="),
            SyntaxKind::MinusEqualsToken => Some("-="),
            SyntaxKind::AsteriskEqualsToken => Some("*="),
            SyntaxKind::AsteriskAsteriskEqualsToken => Some("**="),
            SyntaxKind::SlashEqualsToken => Some("/="),
            SyntaxKind::PercentEqualsToken => Some("%="),
            SyntaxKind::LessThanLessThanEqualsToken => Some("<<="),
            SyntaxKind::GreaterThanGreaterThanEqualsToken => Some(">>="),
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => Some(">>>="),
            SyntaxKind::AmpersandEqualsToken => Some("&="),
            SyntaxKind::BarEqualsToken => Some("|="),
            SyntaxKind::CaretEqualsToken => Some("^="),
            _ => None,
        }
    }

    /// Look up a punctuator by its exact text.
    pub fn from_punctuation(text: &str) -> Option<SyntaxKind> {
        let kind = match text {
            ">>>=" => SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken,
            "..." => SyntaxKind::DotDotDotToken,
            "===" => SyntaxKind::EqualsEqualsEqualsToken,
            "!==" => SyntaxKind::ExclamationEqualsEqualsToken,
            "**=" => SyntaxKind::AsteriskAsteriskEqualsToken,
            "<<=" => SyntaxKind::LessThanLessThanEqualsToken,
            ">>=" => SyntaxKind::GreaterThanGreaterThanEqualsToken,
            ">>>" => SyntaxKind::GreaterThanGreaterThanGreaterThanToken,
            "=>" => SyntaxKind::EqualsGreaterThanToken,
            "==" => SyntaxKind::EqualsEqualsToken,
            "!=" => SyntaxKind::ExclamationEqualsToken,
            "<=" => SyntaxKind::LessThanEqualsToken,
            ">=" => SyntaxKind::GreaterThanEqualsToken,
            "&&" => SyntaxKind::AmpersandAmpersandToken,
            "||" => SyntaxKind::BarBarToken,
            "++" => SyntaxKind::PlusPlusToken,
            "--" => SyntaxKind::MinusMinusToken,
            "+=" => SyntaxKind::PlusEqualsToken,
            "-=" => SyntaxKind::MinusEqualsToken,
            "*=" => SyntaxKind::AsteriskEqualsToken,
            "/=" => SyntaxKind::SlashEqualsToken,
            "%=" => SyntaxKind::PercentEqualsToken,
            "&=" => SyntaxKind::AmpersandEqualsToken,
            "|=" => SyntaxKind::BarEqualsToken,
            "^=" => SyntaxKind::CaretEqualsToken,
            "<<" => SyntaxKind::LessThanLessThanToken,
            ">>" => SyntaxKind::GreaterThanGreaterThanToken,
            "**" => SyntaxKind::AsteriskAsteriskToken,
            "{" => SyntaxKind::OpenBraceToken,
            "}" => SyntaxKind::CloseBraceToken,
            "(" => SyntaxKind::OpenParenToken,
            ")" => SyntaxKind::CloseParenToken,
            "[" => SyntaxKind::OpenBracketToken,
            "]" => SyntaxKind::CloseBracketToken,
            "." => SyntaxKind::DotToken,
            ";" => SyntaxKind::SemicolonToken,
            "," => SyntaxKind::CommaToken,
            "<" => SyntaxKind::LessThanToken,
            ">" => SyntaxKind::GreaterThanToken,
            "+" => SyntaxKind::PlusToken,
            "-" => SyntaxKind::MinusToken,
            "*" => SyntaxKind::AsteriskToken,
            "/" => SyntaxKind::SlashToken,
            "%" => SyntaxKind::PercentToken,
            "&" => SyntaxKind::AmpersandToken,
            "|" => SyntaxKind::BarToken,
            "^" => SyntaxKind::CaretToken,
            "!" => SyntaxKind::ExclamationToken,
            "~" => SyntaxKind::TildeToken,
            "?" => SyntaxKind::QuestionToken,
            ":" => SyntaxKind::ColonToken,
            "=" => SyntaxKind::EqualsToken,
            "@" => SyntaxKind::AtToken,
            _ => return None,
        };
        Some(kind)
    }

    /// The fixed source text of a keyword or punctuator.
    pub fn text(self) -> Option<&'static str> {
        self.keyword_text().or_else(|| self.punctuation_text())
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxKind::EndOfFileToken => write!(f, "end of input"),
            SyntaxKind::NumericLiteral => write!(f, "numeric literal"),
            SyntaxKind::StringLiteral => write!(f, "string literal"),
            SyntaxKind::Identifier => write!(f, "identifier"),
            _ => match self.text() {
                Some(text) => write!(f, "{}", text),
                None => write!(f, "{:?}", self),
            },
        }
    }
}
