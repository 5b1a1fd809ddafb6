use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::bytecode::lower_error::LowerError;

// =============================================================================
// STREAMS - Well-known VM stream handles
// =============================================================================

/// Opaque VM-level I/O destination index.
///
/// Handle values follow the classic descriptor layout: stdin 0, stdout 1,
/// stderr 2. No other handles exist; file streams are not part of the VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamHandle(pub u8);

pub const STDIN: StreamHandle = StreamHandle(0);
pub const STDOUT: StreamHandle = StreamHandle(1);
pub const STDERR: StreamHandle = StreamHandle(2);

/// Process-wide stream name table, populated once and read-only after.
///
/// Calls without an explicit stream target stdout; the table only comes into
/// play for the `f*` variants.
pub struct StreamTable {
    entries: [(&'static str, StreamHandle); 3],
}

impl StreamTable {
    fn new() -> Self {
        Self {
            entries: [("stdin", STDIN), ("stdout", STDOUT), ("stderr", STDERR)],
        }
    }

    /// The process-wide table, initialized on first use.
    pub fn get() -> &'static StreamTable {
        static TABLE: OnceLock<StreamTable> = OnceLock::new();
        TABLE.get_or_init(StreamTable::new)
    }

    /// Look up a well-known stream name.
    ///
    /// An unknown name means the front end passed something outside the fixed
    /// vocabulary. That is a caller bug, but it is reported as a diagnostic
    /// like every other lowering failure rather than panicking.
    pub fn resolve(&self, name: &str) -> Result<StreamHandle, LowerError> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, handle)| *handle)
            .ok_or_else(|| LowerError::unknown_stream(name))
    }
}

/// Resolve a stream name against the process-wide table.
pub fn resolve_stream(name: &str) -> Result<StreamHandle, LowerError> {
    StreamTable::get().resolve(name)
}
