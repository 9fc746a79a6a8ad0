//! Recursive-descent parser doing syntax-directed translation.
//!
//! There is no tree: every production checks names against the symbol table
//! and emits its three-address instructions the moment it is recognized.
//! Expression parsers return the name holding their value, which is either a
//! literal, a variable or the temporary of the last instruction emitted.

use crate::error::{CompileResult, SemanticSnafu, SyntaxSnafu};
use crate::ir::{BinaryOp, Instruction};
use crate::ir_generator::IRGenerator;
use crate::token::{Token, TokenKind};
use crate::variable::{DeclaredType, SymbolTable};
use snafu::ResultExt;
use std::iter::Peekable;
use std::slice::Iter;

/// Parse a whole program, returning the filled symbol table and the emitted
/// instructions.
pub fn parse(tokens: &[Token]) -> CompileResult<(SymbolTable, Vec<Instruction>)> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()?;
    Ok(parser.into_parts())
}

/// One compilation's worth of parser state.
pub struct Parser<'a> {
    iter: Peekable<Iter<'a, Token>>,
    symbols: SymbolTable,
    generator: IRGenerator,
    scope_level: usize,
    last_line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            iter: tokens.iter().peekable(),
            symbols: SymbolTable::new(),
            generator: IRGenerator::new(),
            scope_level: 0,
            last_line: 1,
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn instructions(&self) -> &[Instruction] {
        self.generator.instructions()
    }

    pub fn into_parts(self) -> (SymbolTable, Vec<Instruction>) {
        (self.symbols, self.generator.into_instructions())
    }

    /// `program := statement*`
    pub fn parse_program(&mut self) -> CompileResult<()> {
        while self.peek_kind() != TokenKind::Eof {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn parse_statement(&mut self) -> CompileResult<()> {
        let kind = self.peek_kind();
        if let Some(declared_type) = kind.declared_type() {
            return self.parse_declaration(declared_type);
        }
        match kind {
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::LeftBrace => self.parse_block(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            _ => SyntaxSnafu {
                line: self.line(),
                message: format!("unexpected token {}", self.describe()),
            }
            .fail(),
        }
    }

    /// `block := '{' statement* '}'`, the scope level stays where it is.
    fn parse_block(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::LeftBrace)?;
        while !matches!(self.peek_kind(), TokenKind::RightBrace | TokenKind::Eof) {
            self.parse_statement()?;
        }
        self.expect(TokenKind::RightBrace)?;
        Ok(())
    }

    fn parse_declaration(&mut self, declared_type: DeclaredType) -> CompileResult<()> {
        self.advance();
        let Some(token) = self.current().filter(|t| t.kind == TokenKind::Identifier) else {
            return SyntaxSnafu {
                line: self.line(),
                message: "expected identifier after type",
            }
            .fail();
        };
        self.advance();
        self.symbols
            .insert(&token.text, declared_type, self.scope_level)
            .context(SemanticSnafu { line: token.line })?;
        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    /// String literals are accepted on the right-hand side but produce no
    /// instruction.
    fn parse_assignment(&mut self) -> CompileResult<()> {
        let target = self.expect(TokenKind::Identifier)?;
        self.symbols
            .get(&target.text)
            .context(SemanticSnafu { line: target.line })?;

        self.expect(TokenKind::Assign)?;
        if self.peek_kind() == TokenKind::Sentence {
            self.advance();
            self.expect(TokenKind::Semicolon)?;
        } else {
            let value = self.parse_expression()?;
            self.expect(TokenKind::Semicolon)?;
            self.generator
                .emit(Instruction::copy(value, target.text.as_str()));
        }

        self.symbols.mark_initialized(&target.text);
        Ok(())
    }

    // The condition is evaluated for its instructions only; both branches are
    // emitted inline with no jumps between them.
    fn parse_if_statement(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LeftParen)?;
        self.parse_expression()?;
        self.expect(TokenKind::RightParen)?;
        self.parse_statement()?;
        if self.peek_kind() == TokenKind::Else {
            self.advance();
            self.parse_statement()?;
        }
        Ok(())
    }

    fn parse_while(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::LeftParen)?;
        self.parse_expression()?;
        self.expect(TokenKind::RightParen)?;
        self.parse_statement()
    }

    /// `for '(' statement expression ';' statement ')' statement`
    ///
    /// Init and step are full statements, so an assignment step carries its
    /// own `;` before the closing parenthesis.
    fn parse_for(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::For)?;
        self.expect(TokenKind::LeftParen)?;
        self.parse_statement()?;
        self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        self.parse_statement()?;
        self.expect(TokenKind::RightParen)?;
        self.parse_statement()
    }

    fn parse_return_statement(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::Return)?;
        self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    /// `expression := term (op term)*` where every non-multiplicative operator
    /// shares one precedence level.
    fn parse_expression(&mut self) -> CompileResult<String> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.peek_operator().filter(|op| !op.is_multiplicative()) {
            self.advance();
            let right = self.parse_term()?;
            left = self.emit_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> CompileResult<String> {
        let mut left = self.parse_factor()?;
        while let Some(op) = self.peek_operator().filter(BinaryOp::is_multiplicative) {
            self.advance();
            let right = self.parse_factor()?;
            left = self.emit_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> CompileResult<String> {
        match self.current() {
            Some(token) if token.kind == TokenKind::Number => {
                self.advance();
                Ok(token.text.clone())
            }
            Some(token) if token.kind == TokenKind::Identifier => {
                self.advance();
                self.symbols
                    .get(&token.text)
                    .context(SemanticSnafu { line: token.line })?;
                Ok(token.text.clone())
            }
            Some(token) if token.kind == TokenKind::LeftParen => {
                self.advance();
                let value = self.parse_expression()?;
                self.expect(TokenKind::RightParen)?;
                Ok(value)
            }
            _ => SyntaxSnafu {
                line: self.line(),
                message: format!("expected number or identifier, found {}", self.describe()),
            }
            .fail(),
        }
    }

    fn emit_binary(&mut self, op: BinaryOp, left: String, right: String) -> String {
        let temp = self.generator.new_temp();
        self.generator
            .emit(Instruction::binary(op, left, right, temp.clone()));
        temp
    }

    fn current(&mut self) -> Option<&'a Token> {
        self.iter.peek().copied()
    }

    fn peek_kind(&mut self) -> TokenKind {
        self.current().map_or(TokenKind::Eof, |token| token.kind)
    }

    /// Operator under the cursor. String literals may spell an operator, so
    /// they are excluded.
    fn peek_operator(&mut self) -> Option<BinaryOp> {
        let token = self
            .current()
            .filter(|token| token.kind != TokenKind::Sentence)?;
        token.text.parse().ok()
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.iter.next();
        if let Some(token) = token {
            self.last_line = token.line;
        }
        token
    }

    fn expect(&mut self, expected: TokenKind) -> CompileResult<&'a Token> {
        match self.current() {
            Some(token) if token.kind == expected => {
                self.advance();
                Ok(token)
            }
            _ => SyntaxSnafu {
                line: self.line(),
                message: format!("expected {expected}, found {}", self.describe()),
            }
            .fail(),
        }
    }

    fn line(&mut self) -> usize {
        let last_line = self.last_line;
        self.current().map_or(last_line, |token| token.line)
    }

    fn describe(&mut self) -> String {
        self.current()
            .map_or_else(|| "end of input".to_string(), |token| token.to_string())
    }
}
