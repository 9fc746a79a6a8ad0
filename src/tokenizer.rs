use lazy_static::lazy_static;
use regex::Regex;
use snafu::OptionExt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::error::{CompileError, CompileResult, LexicalSnafu};
use crate::token::{Token, TokenKind};

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"^(//[^\n]*|/\*(?s:.*?)\*/)").unwrap();
    static ref UNCLOSED_COMMENT: Regex = Regex::new(r"^/\*").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"^[ \t\n\r\x0B\x0C]+").unwrap();
    static ref WORD: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9]*").unwrap();
    static ref NUMBER: Regex = Regex::new(r"^[0-9]+").unwrap();
    static ref SENTENCE: Regex = Regex::new(r#"^"[^"]*""#).unwrap();
    static ref UNCLOSED_SENTENCE: Regex = Regex::new(r#"^""#).unwrap();
    static ref OPERATOR: Regex = Regex::new(r"^(==|!=|&&|\|\||[=+\-*/<>])").unwrap();
    static ref DELIMITER: Regex = Regex::new(r"^[(){};]").unwrap();
}

/// The order of these variants matters!
/// Comment must be before operators, otherwise // will be interpreted
/// as 2 divisions instead of a comment. A closed form must also precede
/// its unclosed counterpart.
#[derive(Debug, Clone, Copy, PartialEq, EnumIter)]
enum Lexeme {
    Comment,
    UnclosedComment,
    WhiteSpace,
    Word,
    Number,
    Sentence,
    UnclosedSentence,
    Operator,
    Delimiter,
}

impl Lexeme {
    /// Get regex pattern for the specific Lexeme.
    fn pattern(&self) -> &'static Regex {
        match self {
            Self::Comment => &*COMMENT,
            Self::UnclosedComment => &*UNCLOSED_COMMENT,
            Self::WhiteSpace => &*WHITESPACE,
            Self::Word => &*WORD,
            Self::Number => &*NUMBER,
            Self::Sentence => &*SENTENCE,
            Self::UnclosedSentence => &*UNCLOSED_SENTENCE,
            Self::Operator => &*OPERATOR,
            Self::Delimiter => &*DELIMITER,
        }
    }
}

/// Split `source_code` into tokens, terminated by a single `Eof` token.
pub fn tokenize(source_code: &str) -> CompileResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut position: usize = 0;
    let mut line: usize = 1;

    'scan: while position < source_code.len() {
        let rest = &source_code[position..];
        for variant in Lexeme::iter() {
            let Some(re_match) = variant.pattern().find(rest) else {
                continue;
            };
            let text = re_match.as_str();
            match variant {
                Lexeme::Comment | Lexeme::WhiteSpace => {}
                Lexeme::UnclosedComment => {
                    return LexicalSnafu {
                        line,
                        message: "unterminated comment",
                    }
                    .fail();
                }
                Lexeme::UnclosedSentence => {
                    return LexicalSnafu {
                        line,
                        message: "unterminated string",
                    }
                    .fail();
                }
                Lexeme::Word => tokens.push(Token::new(TokenKind::from_word(text), text, line)),
                Lexeme::Number => tokens.push(Token::new(TokenKind::Number, text, line)),
                Lexeme::Sentence => {
                    let contents = &text[1..text.len() - 1];
                    tokens.push(Token::new(TokenKind::Sentence, contents, line));
                }
                Lexeme::Operator | Lexeme::Delimiter => {
                    let kind = TokenKind::from_symbol(text).context(LexicalSnafu {
                        line,
                        message: format!("unexpected character: {text}"),
                    })?;
                    tokens.push(Token::new(kind, text, line));
                }
            }
            line += text.matches('\n').count();
            position += re_match.end();
            continue 'scan;
        }
        return Err(unexpected_character(rest, line));
    }

    tokens.push(Token::eof(line));
    Ok(tokens)
}

/// `&`, `|` and `!` only exist as the first half of a two-character operator.
fn unexpected_character(rest: &str, line: usize) -> CompileError {
    let character = rest.chars().next().unwrap_or('\0');
    let message = match character {
        '&' | '|' | '!' => format!("unexpected character '{character}'"),
        _ => format!("unexpected character: {character}"),
    };
    LexicalSnafu { line, message }.build()
}
