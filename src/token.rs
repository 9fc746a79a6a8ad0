use std::fmt;
use strum_macros::{Display, EnumIter};

use crate::variable::DeclaredType;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }
}

/// Simpler printing format for tokens.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "{}", self.text),
        }
    }
}

/// Every lexical category the language knows about.
/// The display names are the ones used by the token listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TokenKind {
    #[strum(to_string = "T_INT")]
    Int,
    #[strum(to_string = "T_FLOAT")]
    Float,
    #[strum(to_string = "T_DOUBLE")]
    Double,
    #[strum(to_string = "T_STRING")]
    String,
    #[strum(to_string = "T_BOOL")]
    Bool,
    #[strum(to_string = "T_CHAR")]
    Char,
    #[strum(to_string = "T_ID")]
    Identifier,
    #[strum(to_string = "T_NUM")]
    Number,
    #[strum(to_string = "T_IF")]
    If,
    #[strum(to_string = "T_ELSE")]
    Else,
    #[strum(to_string = "T_RETURN")]
    Return,
    #[strum(to_string = "T_ASSIGN")]
    Assign,
    #[strum(to_string = "T_PLUS")]
    Plus,
    #[strum(to_string = "T_MINUS")]
    Minus,
    #[strum(to_string = "T_MUL")]
    Star,
    #[strum(to_string = "T_DIV")]
    Slash,
    #[strum(to_string = "T_LPAREN")]
    LeftParen,
    #[strum(to_string = "T_RPAREN")]
    RightParen,
    #[strum(to_string = "T_LBRACE")]
    LeftBrace,
    #[strum(to_string = "T_RBRACE")]
    RightBrace,
    #[strum(to_string = "T_SEMICOLON")]
    Semicolon,
    #[strum(to_string = "T_SENTENCE")]
    Sentence,
    #[strum(to_string = "T_GT")]
    Greater,
    #[strum(to_string = "T_LT")]
    Less,
    #[strum(to_string = "T_EQ")]
    EqualEqual,
    #[strum(to_string = "T_NEQ")]
    NotEqual,
    #[strum(to_string = "T_AND")]
    And,
    #[strum(to_string = "T_OR")]
    Or,
    #[strum(to_string = "T_WHILE")]
    While,
    #[strum(to_string = "T_FOR")]
    For,
    #[strum(to_string = "T_EOF")]
    Eof,
}

impl TokenKind {
    /// Classify a scanned word. Keywords are case-sensitive.
    pub fn from_word(word: &str) -> Self {
        match word {
            "int" => Self::Int,
            "float" => Self::Float,
            "double" => Self::Double,
            "string" => Self::String,
            "bool" => Self::Bool,
            "char" => Self::Char,
            "if" => Self::If,
            "else" => Self::Else,
            "return" => Self::Return,
            "while" => Self::While,
            "for" => Self::For,
            _ => Self::Identifier,
        }
    }

    /// Kind of an operator or delimiter lexeme, `None` for anything else.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let kind = match symbol {
            "=" => Self::Assign,
            "+" => Self::Plus,
            "-" => Self::Minus,
            "*" => Self::Star,
            "/" => Self::Slash,
            ">" => Self::Greater,
            "<" => Self::Less,
            "==" => Self::EqualEqual,
            "!=" => Self::NotEqual,
            "&&" => Self::And,
            "||" => Self::Or,
            "(" => Self::LeftParen,
            ")" => Self::RightParen,
            "{" => Self::LeftBrace,
            "}" => Self::RightBrace,
            ";" => Self::Semicolon,
            _ => return None,
        };
        Some(kind)
    }

    /// The declared type a type keyword introduces.
    pub fn declared_type(&self) -> Option<DeclaredType> {
        match self {
            Self::Int => Some(DeclaredType::Int),
            Self::Float => Some(DeclaredType::Float),
            Self::Double => Some(DeclaredType::Double),
            Self::String => Some(DeclaredType::String),
            Self::Bool => Some(DeclaredType::Bool),
            Self::Char => Some(DeclaredType::Char),
            _ => None,
        }
    }
}
