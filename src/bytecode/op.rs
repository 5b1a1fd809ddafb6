use serde::{Deserialize, Serialize};

use crate::streams::StreamHandle;

// =============================================================================
// OP - Primitive VM instructions the shim emits
// =============================================================================

/// The VM register library calls pass their operand through.
pub const ARG_SLOT: u8 = 1;

/// One primitive VM instruction with its operands.
///
/// This is the full vocabulary the stdio shim emits. Instructions are
/// appended per call-site in strict program order and never mutated after
/// emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Op {
    // operand loads
    /// Load a string constant into a register. The text lives inline in the
    /// instruction stream; the shim never builds code by string splicing.
    LoadStr { slot: u8, text: String },

    /// Load an integer constant into a register.
    LoadInt { slot: u8, value: i64 },

    /// Load a runtime value from its named source into a register.
    LoadArg { slot: u8, source: String },

    // printing
    /// Print the string a register points at, to the current stream.
    PrintStr { slot: u8 },

    /// Print a register's value as a single character.
    PrintChar { slot: u8 },

    /// Print a register's numeric value, formatted by the VM's runtime
    /// number-formatting routine. Only emitted when the value is not known
    /// at compile time.
    PrintNum { slot: u8 },

    // stream selection
    /// Redirect subsequent prints to the given stream handle.
    SetStream { handle: StreamHandle },
}
