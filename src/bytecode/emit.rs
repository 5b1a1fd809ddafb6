use crate::bytecode::{LoweredProgram, Op};

/// Owner of the shared output instruction stream.
///
/// The stream is append-only and has a single writer: call-sites are lowered
/// one at a time, each into its own scratch buffer, and only a fully lowered
/// call-site is committed. A failed call-site never reaches `commit`, so the
/// stream only ever holds complete call-site sequences and two call-sites
/// never interleave.
pub struct Emitter {
    ops: Vec<Op>,
}

impl Emitter {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Append one call-site's instructions as a unit.
    pub fn commit(&mut self, ops: Vec<Op>) {
        self.ops.extend(ops);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn finish(self) -> LoweredProgram {
        LoweredProgram { ops: self.ops }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::ARG_SLOT;

    #[test]
    fn test_commit_preserves_order() {
        let mut emitter = Emitter::new();

        emitter.commit(vec![
            Op::LoadStr {
                slot: ARG_SLOT,
                text: "a".to_string(),
            },
            Op::PrintStr { slot: ARG_SLOT },
        ]);
        emitter.commit(vec![
            Op::LoadInt {
                slot: ARG_SLOT,
                value: 65,
            },
            Op::PrintChar { slot: ARG_SLOT },
        ]);

        let program = emitter.finish();
        assert_eq!(program.ops.len(), 4);
        assert!(matches!(program.ops[0], Op::LoadStr { .. }));
        assert!(matches!(program.ops[3], Op::PrintChar { .. }));
    }

    #[test]
    fn test_empty_emitter() {
        let emitter = Emitter::new();

        assert!(emitter.is_empty());
        assert_eq!(emitter.len(), 0);
        assert!(emitter.finish().ops.is_empty());
    }
}
