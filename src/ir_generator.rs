use crate::ir::Instruction;

/// Sink for three-address instructions plus the source of fresh temporaries.
/// Temporaries are numbered from zero and never reused.
#[derive(Debug, Default)]
pub struct IRGenerator {
    temp_number: usize,
    instructions: Vec<Instruction>,
}

impl IRGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_temp(&mut self) -> String {
        let name = format!("t{}", self.temp_number);
        self.temp_number += 1;
        name
    }

    pub fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }
}
