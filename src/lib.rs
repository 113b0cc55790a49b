//! Art Space library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the Previous/Next buttons look when stepping would be a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPolicy {
    /// Buttons always look pressable; at a boundary they are simply inert.
    #[default]
    Inert,
    /// The button that cannot move is greyed out (still inert when pressed).
    Dim,
}

impl ButtonPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonPolicy::Inert => "inert",
            ButtonPolicy::Dim => "dim",
        }
    }
}
