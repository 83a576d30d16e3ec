use crate::error::UmError;

const PROGRAM_ADDRESS: u32 = 0;

/// Owning store of segments, addressed by 32-bit identifier.
///
/// Segment 0 is always mapped and holds the currently executing program.
/// Other identifiers are handed out by [`Memory::allocate`] and returned to
/// a LIFO free pool by [`Memory::deallocate`]; reusing the top of that
/// stack (rather than always growing the spine) is what keeps long-running
/// programs from exhausting the identifier space.
#[derive(Debug)]
pub struct Memory {
    spine: Vec<Vec<u32>>,
    pool: Vec<u32>,
}

impl Memory {
    // create a new Memory, comprising a pool of reusable IDs
    // and a spine of UM segments, populated with the instructions
    // as segment 0
    pub fn new(instructions: Vec<u32>) -> Memory {
        Memory { spine: vec![instructions], pool: vec![] }
    }

    // allocate and initialize (as all 0s) a memory segment.
    // returns the segment ID. Reuses a previously unmapped ID before
    // growing the spine, per the mandatory LIFO reuse policy.
    pub fn allocate(&mut self, size: u32) -> Result<u32, UmError> {
        let mut segment = Vec::new();
        segment
            .try_reserve_exact(size as usize)
            .map_err(|source| UmError::AllocationFailed { words: size, source })?;
        segment.resize(size as usize, 0);

        match self.pool.pop() {
            None => {
                self.spine.push(segment);
                Ok((self.spine.len() - 1) as u32)
            }
            Some(id) => {
                assert!(
                    (id as usize) < self.spine.len(),
                    "invalid id in free pool"
                );
                // Dropping the old Vec here releases its backing storage.
                self.spine[id as usize] = segment;
                Ok(id)
            }
        }
    }

    // deallocate the memory at the given id. The id becomes invalid for any
    // further access until allocate() reissues it.
    pub fn deallocate(&mut self, id: u32) {
        assert!((id as usize) < self.spine.len(), "invalid id {}, cannot deallocate", id);
        debug_assert_ne!(id, PROGRAM_ADDRESS, "segment 0 must never be unmapped");
        self.pool.push(id);
    }

    // supply contents of the memory at the given address if
    // initialized, panics otherwise.
    pub fn load(&self, seg_id: u32, address: u32) -> u32 {
        self.spine[seg_id as usize][address as usize]
    }

    // get the instruction word corresponding to the given program counter
    // if it doesn't exist, then this panics
    pub fn get_instruction(&self, pc: u32) -> u32 {
        // segment 0 always exists and PROGRAM_ADDRESS is always == 0.
        self.spine[PROGRAM_ADDRESS as usize][pc as usize]
    }

    // write a value into the given address of the given segment.
    pub fn store(&mut self, seg_id: u32, address: u32, value: u32) {
        self.spine[seg_id as usize][address as usize] = value;
    }

    // number of words in segment 0, the valid range for PC.
    pub fn program_len(&self) -> usize {
        self.spine[PROGRAM_ADDRESS as usize].len()
    }

    // replace the program with an independent deep copy of the segment at
    // the given id. A no-op when the id is already segment 0.
    pub fn load_segment(&mut self, seg_id: u32) {
        if seg_id == PROGRAM_ADDRESS {
            return;
        }
        let program = self.spine[seg_id as usize].clone();
        self.spine[PROGRAM_ADDRESS as usize] = program;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_reuses_freed_ids_lifo() {
        let mut mem = Memory::new(vec![]);
        let a = mem.allocate(1).unwrap();
        let b = mem.allocate(1).unwrap();
        let c = mem.allocate(1).unwrap();
        mem.deallocate(a);
        mem.deallocate(b);
        mem.deallocate(c);

        // LIFO: the most recently freed id (c) comes back first.
        assert_eq!(mem.allocate(1).unwrap(), c);
        assert_eq!(mem.allocate(1).unwrap(), b);
        assert_eq!(mem.allocate(1).unwrap(), a);
    }

    #[test]
    fn map_never_returns_zero() {
        let mut mem = Memory::new(vec![]);
        for _ in 0..8 {
            assert_ne!(mem.allocate(1).unwrap(), 0);
        }
    }

    #[test]
    fn bounded_growth_after_map_unmap_cycles() {
        let mut mem = Memory::new(vec![]);
        let mut live = Vec::new();
        for _ in 0..100 {
            live.push(mem.allocate(4).unwrap());
        }
        for id in live.drain(..) {
            mem.deallocate(id);
        }
        let spine_len_before = mem.spine.len();
        // Reallocating the same count must not grow the spine further.
        for _ in 0..100 {
            mem.allocate(4).unwrap();
        }
        assert_eq!(mem.spine.len(), spine_len_before);
    }

    #[test]
    fn store_then_load_round_trips() {
        let mut mem = Memory::new(vec![]);
        let id = mem.allocate(4).unwrap();
        mem.store(id, 2, 0xABCD);
        assert_eq!(mem.load(id, 2), 0xABCD);
    }

    #[test]
    fn load_segment_is_a_deep_copy() {
        let mut mem = Memory::new(vec![1, 2, 3]);
        let id = mem.allocate(3).unwrap();
        mem.store(id, 0, 0xFF);
        mem.load_segment(id);
        assert_eq!(mem.get_instruction(0), 0xFF);

        // Writing through the source afterwards must not affect segment 0.
        mem.store(id, 0, 0x00);
        assert_eq!(mem.get_instruction(0), 0xFF);
    }

    #[test]
    fn load_segment_is_noop_for_zero() {
        let mut mem = Memory::new(vec![9, 9, 9]);
        mem.load_segment(0);
        assert_eq!(mem.get_instruction(0), 9);
    }
}
