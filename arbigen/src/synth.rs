//! Size-scaled integer synthesis from a single random word.
//!
//! This is the bit-level core of default generation: one opaque random word
//! in, one integer of the target width and signedness out. The number of
//! active magnitude bits scales linearly with the size budget, which
//! guarantees that at [`REFERENCE_SIZE`] the type's maximum magnitude is
//! reachable while small sizes stay near zero.

use crate::config::REFERENCE_SIZE;

/// The native random word every scalar synthesis consumes exactly once.
pub type Word = u64;

/// Bit width of the native random word.
pub const WORD_BITS: u32 = Word::BITS;

/// An integer type that can be synthesized from a random word.
///
/// Implemented for every built-in integer type whose magnitude fits in the
/// native word. Downstream code normally goes through
/// [`Arbitrary`](crate::arbitrary::Arbitrary) instead of using this directly.
pub trait SynthInt: Copy {
    /// Number of magnitude bits. Excludes the sign bit for signed types, so
    /// `i64::DIGITS == 63` while `u64::DIGITS == 64`.
    const DIGITS: u32;

    /// Whether the top bit of the native word acts as a sign coin-flip.
    const SIGNED: bool;

    /// The zero value of the type.
    fn zero() -> Self;

    /// Narrow a masked magnitude (guaranteed to fit in `DIGITS` bits) into
    /// the target type.
    fn from_magnitude(bits: Word) -> Self;

    /// Flip the sign. Only ever called when `SIGNED` is true, and only on
    /// magnitudes within the representable positive range, so this never
    /// overflows.
    fn negate(self) -> Self;
}

macro_rules! impl_synth_signed {
    ($($t:ty),*) => {
        $(
            impl SynthInt for $t {
                const DIGITS: u32 = <$t>::BITS - 1;
                const SIGNED: bool = true;

                fn zero() -> Self {
                    0
                }

                fn from_magnitude(bits: Word) -> Self {
                    bits as $t
                }

                fn negate(self) -> Self {
                    -self
                }
            }
        )*
    };
}

macro_rules! impl_synth_unsigned {
    ($($t:ty),*) => {
        $(
            impl SynthInt for $t {
                const DIGITS: u32 = <$t>::BITS;
                const SIGNED: bool = false;

                fn zero() -> Self {
                    0
                }

                fn from_magnitude(bits: Word) -> Self {
                    bits as $t
                }

                fn negate(self) -> Self {
                    self
                }
            }
        )*
    };
}

impl_synth_signed!(i8, i16, i32, i64, isize);
impl_synth_unsigned!(u8, u16, u32, u64, usize);

/// Mask keeping exactly the low `n_bits` bits of a native word.
///
/// Built as the complement of `(Word::MAX - 1) << (n_bits - 1)`: the shifted
/// value has every bit at or above `n_bits` set and nothing below, so its
/// complement keeps the low `n_bits` bits regardless of the native width.
/// Valid for `n_bits` in `1..=WORD_BITS`; at `WORD_BITS` the shift pushes
/// everything out and the mask is all ones.
pub fn magnitude_mask(n_bits: u32) -> Word {
    debug_assert!((1..=WORD_BITS).contains(&n_bits));
    !((Word::MAX - 1) << (n_bits - 1))
}

/// Synthesize one integer of type `T` from one random word under a size
/// budget.
///
/// The size is capped at [`REFERENCE_SIZE`] and scales the number of active
/// magnitude bits linearly: size 0 always yields zero, size
/// `REFERENCE_SIZE` activates all `T::DIGITS` bits so the maximum magnitude
/// is reachable. For signed types the topmost bit of the *native* word is
/// the sign coin-flip; it is disjoint from the magnitude bits (which never
/// exceed `DIGITS <= WORD_BITS - 1` for signed types), so sign and magnitude
/// come from independent bit positions of the same word and no second draw
/// is needed.
///
/// Total over its whole input domain: every `(size, word)` pair produces a
/// value, never an error.
pub fn synth_int<T: SynthInt>(size: usize, word: Word) -> T {
    let size = size.min(REFERENCE_SIZE);
    let n_bits = ((size * T::DIGITS as usize) / REFERENCE_SIZE) as u32;
    if n_bits == 0 {
        return T::zero();
    }

    let x = T::from_magnitude(word & magnitude_mask(n_bits));
    if T::SIGNED && (word >> (WORD_BITS - 1)) != 0 {
        x.negate()
    } else {
        x
    }
}
