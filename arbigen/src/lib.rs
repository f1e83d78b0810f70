//! # Arbigen - Default Random Value Generation for Property Testing
//!
//! Arbigen answers "what does a default random value of type `T` look like?"
//! for a property-based testing engine. A type resolves to its canonical
//! generator through the [`Arbitrary`] trait; integers are synthesized from
//! single random words with a bit count that scales linearly with the
//! ambient size budget, so small sizes stay tame while the full
//! representable range is reachable at [`REFERENCE_SIZE`].
//!
//! ## Quick Start
//!
//! ```rust
//! use arbigen::{Arbitrary, Generator, GeneratorConfig, create_seeded_rng};
//!
//! let mut rng = create_seeded_rng(42);
//! let config = GeneratorConfig::default();
//!
//! let number = i32::arbitrary().generate(&mut rng, &config);
//! let flag = bool::arbitrary().generate(&mut rng, &config);
//! let words: Vec<u8> = Vec::<u8>::arbitrary().generate(&mut rng, &config);
//! assert!(words.len() <= config.effective_size());
//! # let _ = (number, flag);
//! ```
//!
//! ## Known limitation
//!
//! Floating-point default generation is not implemented: `f32::arbitrary()`
//! and `f64::arbitrary()` always yield zero (see
//! [`arbitrary::FloatGen`]).

// Public modules
pub mod arbitrary;
pub mod combinator;
pub mod config;
pub mod generator;
pub mod rng;
pub mod synth;

// Re-export the main public API
pub use arbitrary::{Arbitrary, BoolGen, CharGen, FloatGen, IntGen};
pub use combinator::{
    Collection, OneOf, Ranged, Resize, collection, non_zero, one_of, ranged, resize, sequence_of,
};
pub use config::{GeneratorConfig, REFERENCE_SIZE};
pub use generator::{BoxedGenerator, Filter, Generator, Map, evaluate};
pub use rng::{DefaultRngProvider, RngProvider, create_rng, create_seeded_rng};
pub use synth::{SynthInt, WORD_BITS, Word, magnitude_mask, synth_int};
