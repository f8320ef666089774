//! Random Number Generator
//!
//! A PCG32 generator (64 bit state, XSH-RR output). The stream
//! selector makes it possible to give every tile of an image its own
//! independent sequence, which keeps renders reproducible regardless
//! of how many threads are used.

use hexf::*;

// pbrt
use crate::core::pbrt::Float;

pub const FLOAT_ONE_MINUS_EPSILON: Float = hexf32!("0x1.fffffep-1");
pub const PCG32_DEFAULT_STATE: u64 = 0x853c_49e6_748f_ea9b;
pub const PCG32_DEFAULT_STREAM: u64 = 0xda3e_39cb_94b9_5bdb;
pub const PCG32_MULT: u64 = 0x5851_f42d_4c95_7f2d;

/// Random number generator
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rng {
    state: u64,
    inc: u64,
}

impl Default for Rng {
    fn default() -> Self {
        Rng::new()
    }
}

impl Rng {
    pub fn new() -> Self {
        Rng {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }
    /// Seed with an initial state and a stream (sequence) index.
    pub fn new_with(init_state: u64, init_seq: u64) -> Self {
        let mut rng = Rng { state: 0, inc: 0 };
        rng.seed(init_state, init_seq);
        rng
    }
    pub fn seed(&mut self, init_state: u64, init_seq: u64) {
        self.state = 0_u64;
        self.inc = init_seq.wrapping_shl(1) | 1;
        self.uniform_uint32();
        self.state = self.state.wrapping_add(init_state);
        self.uniform_uint32();
    }
    pub fn set_sequence(&mut self, initseq: u64) {
        self.seed(PCG32_DEFAULT_STATE, initseq);
    }
    pub fn uniform_uint32(&mut self) -> u32 {
        let oldstate: u64 = self.state;
        self.state = oldstate.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);
        let xorshifted: u32 = ((oldstate.wrapping_shr(18) ^ oldstate).wrapping_shr(27)) as u32;
        let rot: u32 = oldstate.wrapping_shr(59) as u32;
        xorshifted.rotate_right(rot)
    }
    /// Uniformly distributed value in [0, 1).
    pub fn uniform_float(&mut self) -> Float {
        (self.uniform_uint32() as Float * hexf32!("0x1.0p-32") as Float)
            .min(FLOAT_ONE_MINUS_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sequence() {
        let mut rng = Rng::new_with(42, 54);
        assert_eq!(rng.state, 1_753_877_967_969_059_832);
        assert_eq!(rng.inc, 109);
        let expected: [u32; 6] = [
            2_707_161_783,
            2_068_313_097,
            3_122_475_824,
            2_211_639_955,
            3_215_226_955,
            3_421_331_566,
        ];
        for value in expected.iter() {
            assert_eq!(rng.uniform_uint32(), *value);
        }
    }

    #[test]
    fn floats_stay_in_unit_interval() {
        let mut rng = Rng::new_with(42, 54);
        for _ in 0..10_000 {
            let f = rng.uniform_float();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn streams_are_independent() {
        let mut a = Rng::new_with(42, 0);
        let mut b = Rng::new_with(42, 1);
        let same = (0..16)
            .filter(|_| a.uniform_uint32() == b.uniform_uint32())
            .count();
        assert!(same < 16);
        let mut c = Rng::new();
        c.set_sequence(1);
        assert_eq!(c, {
            let mut d = Rng::new();
            d.seed(PCG32_DEFAULT_STATE, 1);
            d
        });
    }
}
