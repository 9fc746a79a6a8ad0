//! Lowering of three-address code into a single-accumulator assembly listing.
//!
//! Every operand, literals included, is addressed as a named memory slot;
//! the only exception is a copy of a literal, which becomes a move-immediate.
//! `eax` is the accumulator, `ebx` and `edx` are scratch for division.

use crate::ir::{BinaryOp, Instruction};

const ACCUMULATOR: &str = "eax";

/// Lower `instructions` in order, one group of lines per instruction.
pub fn lower(instructions: &[Instruction]) -> Vec<String> {
    let mut lines = Vec::new();
    for instruction in instructions {
        lower_instruction(instruction, &mut lines);
    }
    lines
}

fn lower_instruction(instruction: &Instruction, lines: &mut Vec<String>) {
    match instruction {
        Instruction::Copy { source, dest } => {
            if is_number(source) {
                lines.push(format!("mov dword [{dest}], {source}"));
            } else {
                lines.push(load(source));
                lines.push(store(dest));
            }
        }
        Instruction::Binary {
            op,
            left,
            right,
            dest,
        } => {
            let apply = match op {
                BinaryOp::Add => vec![format!("add {ACCUMULATOR}, [{right}]")],
                BinaryOp::Sub => vec![format!("sub {ACCUMULATOR}, [{right}]")],
                BinaryOp::Mul => vec![format!("imul {ACCUMULATOR}, [{right}]")],
                BinaryOp::Div => vec![
                    "mov edx, 0".to_string(),
                    format!("mov ebx, [{right}]"),
                    "idiv ebx".to_string(),
                ],
                // Comparisons and logical operators have no lowering.
                _ => return,
            };
            lines.push(load(left));
            lines.extend(apply);
            lines.push(store(dest));
        }
        Instruction::Return { value } => {
            lines.push(load(value));
            lines.push("ret".to_string());
        }
        Instruction::CondJump { cond, label } => {
            lines.push(format!("cmp [{cond}], 0"));
            lines.push(format!("jne {label}"));
        }
        Instruction::Label { name } => lines.push(format!("{name}:")),
        Instruction::Jump { label } => lines.push(format!("jmp {label}")),
    }
}

fn load(name: &str) -> String {
    format!("mov {ACCUMULATOR}, [{name}]")
}

fn store(name: &str) -> String {
    format!("mov [{name}], {ACCUMULATOR}")
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
