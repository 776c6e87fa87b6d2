//! Formatting options for the emitter.
//!
//! Every field is an independent switch. The JSON form uses camelCase keys and
//! any key left out takes its default, so `{}` is the conventional style.

use serde::{Deserialize, Serialize};

/// Letter case for the digits of hexadecimal literals. The `0x` prefix is
/// always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HexLetterCase {
    #[default]
    Upper,
    Lower,
}

/// Emitter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmitOptions {
    /// Line terminator written between lines.
    pub newline: String,
    /// Written once per indentation level at the start of a line.
    pub indentation_prefix: String,
    /// Put the `{` of blocks and declaration bodies on its own line.
    pub brace_on_new_line: bool,
    /// When `false`, a block holding at most one simple statement stays on one
    /// line: `{ return x; }`.
    pub simple_block_on_new_line: bool,
    /// `x: number` rather than `x:number`.
    pub space_after_colon: bool,
    /// `[a, b]` rather than `[a,b]`.
    pub space_after_comma: bool,
    /// `a + b` rather than `a+b`. Word operators are always spaced.
    pub space_around_operators: bool,
    /// `f( a )` for argument lists, parameter lists and statement heads.
    pub space_within_parentheses: bool,
    /// `if (` rather than `if(`.
    pub space_after_keyword: bool,
    /// `{ a }` rather than `{a}` for single-line braces.
    pub space_within_braces: bool,
    /// `function ()` rather than `function()` for anonymous functions.
    pub space_after_function_keyword: bool,
    pub hex_letter_case: HexLetterCase,
}

/// The line terminator of the host platform.
pub fn platform_newline() -> &'static str {
    if cfg!(windows) {
        "\r\n"
    } else {
        "\n"
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            newline: platform_newline().to_string(),
            indentation_prefix: "  ".to_string(),
            brace_on_new_line: false,
            simple_block_on_new_line: true,
            space_after_colon: true,
            space_after_comma: true,
            space_around_operators: true,
            space_within_parentheses: false,
            space_after_keyword: true,
            space_within_braces: true,
            space_after_function_keyword: false,
            hex_letter_case: HexLetterCase::Upper,
        }
    }
}

impl EmitOptions {
    /// Options that render any node on a single line, used by
    /// [`crate::CodeDisplay`].
    pub fn single_line() -> Self {
        Self { newline: " ".to_string(), indentation_prefix: String::new(), ..Self::default() }
    }

    /// Parse options from JSON text.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    pub fn with_indentation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.indentation_prefix = prefix.into();
        self
    }

    pub fn with_brace_on_new_line(mut self, value: bool) -> Self {
        self.brace_on_new_line = value;
        self
    }

    pub fn with_simple_block_on_new_line(mut self, value: bool) -> Self {
        self.simple_block_on_new_line = value;
        self
    }

    pub fn with_space_after_colon(mut self, value: bool) -> Self {
        self.space_after_colon = value;
        self
    }

    pub fn with_space_after_comma(mut self, value: bool) -> Self {
        self.space_after_comma = value;
        self
    }

    pub fn with_space_around_operators(mut self, value: bool) -> Self {
        self.space_around_operators = value;
        self
    }

    pub fn with_space_within_parentheses(mut self, value: bool) -> Self {
        self.space_within_parentheses = value;
        self
    }

    pub fn with_space_after_keyword(mut self, value: bool) -> Self {
        self.space_after_keyword = value;
        self
    }

    pub fn with_space_within_braces(mut self, value: bool) -> Self {
        self.space_within_braces = value;
        self
    }

    pub fn with_space_after_function_keyword(mut self, value: bool) -> Self {
        self.space_after_function_keyword = value;
        self
    }

    pub fn with_hex_letter_case(mut self, case: HexLetterCase) -> Self {
        self.hex_letter_case = case;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EmitOptions::default();
        assert_eq!(options.indentation_prefix, "  ");
        assert_eq!(options.newline, platform_newline());
        assert!(options.simple_block_on_new_line);
        assert!(!options.brace_on_new_line);
        assert!(!options.space_within_parentheses);
        assert_eq!(options.hex_letter_case, HexLetterCase::Upper);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(EmitOptions::from_json("{}").unwrap(), EmitOptions::default());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let options = EmitOptions::from_json(
            r#"{ "spaceAfterComma": false, "hexLetterCase": "lower", "indentationPrefix": "\t" }"#,
        )
        .unwrap();
        assert!(!options.space_after_comma);
        assert_eq!(options.hex_letter_case, HexLetterCase::Lower);
        assert_eq!(options.indentation_prefix, "\t");
        assert!(options.space_after_colon);

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["spaceAfterComma"], serde_json::Value::Bool(false));
        assert_eq!(json["hexLetterCase"], "lower");
    }

    #[test]
    fn test_unknown_hex_case_is_rejected() {
        assert!(EmitOptions::from_json(r#"{ "hexLetterCase": "mixed" }"#).is_err());
    }

    #[test]
    fn test_builders_return_modified_copies() {
        let base = EmitOptions::default();
        let compact = base.clone().with_space_after_comma(false).with_newline("\n");
        assert!(base.space_after_comma);
        assert!(!compact.space_after_comma);
        assert_eq!(compact.newline, "\n");
    }
}
