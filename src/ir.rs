use std::fmt;
use strum_macros::{Display, EnumString};

/// Operators a binary three-address instruction can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum BinaryOp {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Sub,
    #[strum(to_string = "*")]
    Mul,
    #[strum(to_string = "/")]
    Div,
    #[strum(to_string = ">")]
    Greater,
    #[strum(to_string = "<")]
    Less,
    #[strum(to_string = "==")]
    Equal,
    #[strum(to_string = "!=")]
    NotEqual,
    #[strum(to_string = "&&")]
    And,
    #[strum(to_string = "||")]
    Or,
}

impl BinaryOp {
    /// `*` and `/`, the only operators that bind tighter than the rest.
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

/// A three-address instruction.
///
/// The parser only ever produces `Copy` and `Binary`. The remaining variants
/// are understood by the assembly generator so that control flow can be fed
/// to it directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// `dest = source`
    Copy {
        source: String,
        dest: String,
    },
    /// `dest = left op right`
    Binary {
        op: BinaryOp,
        left: String,
        right: String,
        dest: String,
    },
    Return { value: String },
    CondJump {
        cond: String,
        label: String,
    },
    Jump { label: String },
    Label { name: String },
}

impl Instruction {
    pub fn copy(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self::Copy {
            source: source.into(),
            dest: dest.into(),
        }
    }

    pub fn binary(
        op: BinaryOp,
        left: impl Into<String>,
        right: impl Into<String>,
        dest: impl Into<String>,
    ) -> Self {
        Self::Binary {
            op,
            left: left.into(),
            right: right.into(),
            dest: dest.into(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Copy { source, dest } => write!(f, "{dest} = {source}"),
            Self::Binary {
                op,
                left,
                right,
                dest,
            } => write!(f, "{dest} = {left} {op} {right}"),
            Self::Return { value } => write!(f, "return {value}"),
            Self::CondJump { cond, label } => write!(f, "if {cond} goto {label}"),
            Self::Jump { label } => write!(f, "goto {label}"),
            Self::Label { name } => write!(f, "{name}:"),
        }
    }
}
