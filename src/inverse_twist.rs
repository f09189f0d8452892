//! Inverse twist: the closed-form inverse of [`crate::twist`].
//!
//! MT-19937 was never designed to be run backwards, so this is the one
//! genuinely hard piece of the generator. The derivation:
//!
//! The forward twist writes each `key[i]` as
//! `key[i+M] ^ (y_i >> 1) ^ (A if y_i is odd else 0)`, where
//! `y_i = (key[i] & UPPER) | (key[i+1] & LOWER)` is taken from the
//! *pre-twist* state (indices mod `N`, `M = 397`). Two things make `y_i`
//! recoverable from post-twist data:
//!
//! - Only the parity of `y_i` feeds into the XOR with `A`, so XOR-ing the
//!   post-twist `key[i]` with the (still pre-twist, see below) word at
//!   `key[i+M]` and checking bit 31 recovers whether `y_i` was odd, and
//!   undoing that XOR and shifting left by one reconstructs `y_i` itself
//!   up to its lost top bit.
//! - `y_i`'s top bit is pre-twist `key[i]`'s top bit, and `y_i`'s low 31
//!   bits are pre-twist `key[i+1]`'s low 31 bits. So recovering `y_i`
//!   recovers one bit of `key[i]` and 31 bits of `key[i+1]` at once.
//!
//! The reason `key[i+M]` (taken mod `N`) is still the pre-twist value when
//! this step runs: the forward loop only ever overwrites position `i` at
//! step `i`, and the sweep below runs from `i = N-1` down to `0`, i.e. in
//! the exact reverse of the order the forward loop *wrote* positions — so
//! by the time step `i` reads `key[i+M mod N]`, the forward loop has not
//! yet (in this reverse reconstruction) overwritten it with its own
//! pre-twist value. Concretely: positions `i+M` for `i` in the high range
//! (`N-2` down to `N-M`) alias to `i+M-N`, a position already *visited* by
//! this reverse sweep, but visited positions in this sweep hold
//! *reconstructed pre-twist* values, not post-twist ones, by construction.
//!
//! One bit (the very top bit of pre-twist `key[N-1]`, equivalently the top
//! bit of `y_{N-1}`, equivalently the top bit of pre-twist `key[0]`) has no
//! other source and is bootstrapped in a first pass over `i = N-1`, then
//! the main sweep runs high range then low range, and a final pass over
//! `i = N-1` again pours the last 31 recovered bits into `key[0]`.
//!
//! The very first forward twist ever applied to a seed is not itself the
//! image of a twist, so rolling an inverse twist back across it cannot
//! recover `key[0]` from key data alone: the caller patches it from the
//! retained seed whenever `n_twists` reaches zero as a result of the call
//! (see [`State::inverse_twist`] and [`crate::generator`]).

use crate::state::{State, KEY_LENGTH};

const MID_OFFSET: usize = 397;
const MATRIX_A: u32 = 0x9908b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

#[inline]
fn recover(t: u32) -> (bool, u32) {
    let odd = (t & UPPER_MASK) == UPPER_MASK;
    let t = t ^ (if odd { MATRIX_A } else { 0 });
    (odd, (t << 1) | (odd as u32))
}

impl State {
    /// Reconstructs the pre-twist `key` from the post-twist `key`,
    /// bit-exact: `inverse_twist(twist(s)) == s` on `key`.
    ///
    /// Decrements `n_twists`. Does not apply the seed-boundary patch
    /// itself — the caller does that when `n_twists` reaches zero, per
    /// spec.md §4.3's boundary patch.
    pub(crate) fn inverse_twist(&mut self) {
        let key = &mut self.key;

        // Bootstrap: recover the top bit of pre-twist key[N-1] (== top
        // bit of y_{N-1} == top bit of pre-twist key[0]).
        let t = key[KEY_LENGTH - 1] ^ key[MID_OFFSET - 1];
        key[KEY_LENGTH - 1] = (t << 1) & UPPER_MASK;

        // Main sweep, high range: i from N-2 down to N-M inclusive, where
        // (i+M) mod N == i+M-N. (The original C reference this crate is
        // grounded on splits this boundary one index too early — its
        // second loop starts at i == N-M using the low-range formula,
        // which reads one element short of where (i+M) actually wraps;
        // the boundary used here follows the closed-form derivation
        // above and the twist/inverse-twist identity test below.)
        let mut i = KEY_LENGTH - 2;
        while i >= KEY_LENGTH - MID_OFFSET {
            let t = key[i] ^ key[i + MID_OFFSET - KEY_LENGTH];
            let (_, t) = recover(t);
            key[i] = t & UPPER_MASK;
            key[i + 1] |= t & LOWER_MASK;
            i -= 1;
        }

        // Main sweep, low range: i+M is a position not yet touched by
        // this sweep and so still holds the post-twist (== pre-twist,
        // untouched by the forward loop at this index) value.
        loop {
            let t = key[i] ^ key[i + MID_OFFSET];
            let (_, t) = recover(t);
            key[i] = t & UPPER_MASK;
            key[i + 1] |= t & LOWER_MASK;
            if i == 0 {
                break;
            }
            i -= 1;
        }

        // Finalization: pour the last 31 recovered bits into key[0].
        let t = key[KEY_LENGTH - 1] ^ key[MID_OFFSET - 1];
        let (_, t) = recover(t);
        key[0] |= t & LOWER_MASK;

        self.n_twists -= 1;
    }

    /// Applies [`Self::inverse_twist`] and, if this call rolled
    /// `n_twists` to zero, restores `key[0]` to the original seed (the
    /// boundary the inverse twist cannot reconstruct on its own).
    pub(crate) fn inverse_twist_with_seed_patch(&mut self) {
        self.inverse_twist();
        if self.n_twists == 0 {
            self.key[0] = self.seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_twist_undoes_twist() {
        for seed in [0u32, 1, 42, 5489, u32::MAX] {
            let mut s = State::new(seed);
            let before = s.key;
            s.twist();
            s.inverse_twist();
            assert_eq!(s.key, before, "seed {seed}");
            assert_eq!(s.n_twists, 0);
        }
    }

    #[test]
    fn twist_undoes_inverse_twist_after_first_twist() {
        let mut s = State::new(7);
        s.twist();
        s.twist();
        let before = s.key;
        s.inverse_twist();
        s.twist();
        assert_eq!(s.key, before);
    }

    #[test]
    fn seed_boundary_patch_restores_exact_seeded_key0() {
        let mut s = State::new(123);
        let seeded_key0 = s.key[0];
        s.twist();
        s.inverse_twist_with_seed_patch();
        assert_eq!(s.key[0], seeded_key0);
        assert_eq!(s.n_twists, 0);
    }
}
