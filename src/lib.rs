pub mod assembly_generator;
pub mod error;
pub mod ir;
pub mod ir_generator;
pub mod parser;
pub mod token;
pub mod tokenizer;
pub mod variable;

pub use error::{CompileError, CompileResult};

use ir::Instruction;
use token::Token;
use tokenizer::tokenize;
use variable::SymbolTable;

/// Everything one run of the pipeline produces.
#[derive(Debug)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub instructions: Vec<Instruction>,
    pub assembly: Vec<String>,
}

/// Tokenize, parse and lower `source_code`, stopping at the first error.
pub fn compile(source_code: &str) -> CompileResult<Compilation> {
    let tokens = tokenize(source_code)?;
    let (symbols, instructions) = parser::parse(&tokens)?;
    let assembly = assembly_generator::lower(&instructions);
    Ok(Compilation {
        tokens,
        symbols,
        instructions,
        assembly,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile() {
        let compilation = compile("int x; x = 5; int y; y = x + 2;").unwrap();
        assert_eq!(compilation.tokens.len(), 17);
        assert_eq!(compilation.symbols.len(), 2);
        assert_eq!(
            compilation.assembly,
            vec![
                "mov dword [x], 5",
                "mov eax, [x]",
                "add eax, [2]",
                "mov [t0], eax",
                "mov eax, [t0]",
                "mov [y], eax",
            ]
        );
    }

    #[test]
    fn test_sessions_are_independent() {
        let first = compile("int a; a = a + 1;").unwrap();
        let second = compile("int a; a = a + 1;").unwrap();
        assert_eq!(first.instructions, second.instructions);
        assert_eq!(second.instructions[0].to_string(), "t0 = a + 1");
    }

    #[test]
    fn test_compile_error() {
        assert!(matches!(
            compile("int a;\na = 1 @ 2;"),
            Err(CompileError::Lexical { line: 2, .. })
        ));
    }
}
