use serde::{Deserialize, Serialize};

use crate::bytecode::Op;

/// The lowered output of a compilation unit: every successfully lowered
/// call-site's instructions, in call-site order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoweredProgram {
    pub ops: Vec<Op>,
}

impl LoweredProgram {
    /// Compact byte encoding, for handing off to the linker stage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}
