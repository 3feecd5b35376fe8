use serde::{Deserialize, Serialize};

/// Kinds of identity data a tool can consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataTypeInput {
    FirstName,
    LastName,
}

impl std::fmt::Display for DataTypeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataTypeInput::FirstName => write!(f, "first_name"),
            DataTypeInput::LastName => write!(f, "last_name"),
        }
    }
}

/// Kinds of data a tool can attach to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataTypeOutput {
    Account,
}

impl std::fmt::Display for DataTypeOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataTypeOutput::Account => write!(f, "account"),
        }
    }
}
