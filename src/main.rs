use std::env;
use std::fs;

use tac_compiler::{compile, Compilation};

fn main() {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        2 => run(&args[1]),
        _ => {
            usage(&args);
            std::process::exit(1);
        }
    }
}

fn run(path: &str) {
    let Ok(source_code) = fs::read_to_string(path) else {
        println!("Error: Cannot open file {path}");
        std::process::exit(1);
    };

    match compile(&source_code) {
        Ok(compilation) => {
            if cfg!(debug_assertions) {
                eprintln!(
                    "[debug] {} tokens, {} symbols, {} instructions, {} assembly lines",
                    compilation.tokens.len(),
                    compilation.symbols.len(),
                    compilation.instructions.len(),
                    compilation.assembly.len()
                );
            }
            print_compilation(&compilation);
        }
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}

fn print_compilation(compilation: &Compilation) {
    println!("Tokens:");
    for token in &compilation.tokens {
        println!("Type: {}, Value: {}", token.kind, token.text);
    }
    println!("Parsing completed successfully! No Syntax Error");

    print!("{}", compilation.symbols);

    println!("Three-Address Code:");
    for instruction in &compilation.instructions {
        println!("{instruction}");
    }

    println!("\nGenerated Assembly Code:");
    for line in &compilation.assembly {
        println!("{line}");
    }
}

fn usage(args: &[String]) {
    let program = args.first().map(String::as_str).unwrap_or("tacc");
    println!("Usage: {program} <source-file>");
}
