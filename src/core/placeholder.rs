// src/core/placeholder.rs

use std::fmt;

/// A substitution marker recognised in an args template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{cmd}`: the invoked command name.
    Cmd,
    /// `{args}`: the trailing arguments, verbatim.
    Args,
    /// `{shell_args}`: the trailing arguments, each shell-quoted.
    ShellArgs,
}

impl Placeholder {
    /// Every placeholder.
    pub const ALL: [Self; 3] = [Self::Cmd, Self::Args, Self::ShellArgs];

    /// The literal spelling of the placeholder in a template.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cmd => "{cmd}",
            Self::Args => "{args}",
            Self::ShellArgs => "{shell_args}",
        }
    }

    /// `{args}` and `{shell_args}` both consume the trailing arguments.
    pub fn is_any_args(self) -> bool {
        match self {
            Self::Args | Self::ShellArgs => true,
            Self::Cmd => false,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single token of an args template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgToken {
    /// Passed through unchanged.
    Literal(String),
    /// Substituted at dispatch time.
    Placeholder(Placeholder),
}

impl ArgToken {
    /// Whether this is `{args}` or `{shell_args}`.
    pub fn is_any_args(&self) -> bool {
        matches!(self, Self::Placeholder(p) if p.is_any_args())
    }
}

impl fmt::Display for ArgToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.write_str(s),
            Self::Placeholder(p) => p.fmt(f),
        }
    }
}

impl From<Placeholder> for ArgToken {
    fn from(placeholder: Placeholder) -> Self {
        Self::Placeholder(placeholder)
    }
}

/// Parses one raw template token. Only an exact match of a placeholder
/// spelling is a placeholder; anything else (including `{other}` or
/// `x{args}`) stays a literal.
pub fn parse_token(raw: &str) -> ArgToken {
    Placeholder::ALL
        .into_iter()
        .find(|p| p.as_str() == raw)
        .map_or_else(|| ArgToken::Literal(raw.to_string()), ArgToken::Placeholder)
}

/// Parses a whole raw template, token by token.
pub fn parse_template<S: AsRef<str>>(raw: &[S]) -> Vec<ArgToken> {
    raw.iter().map(|s| parse_token(s.as_ref())).collect()
}
