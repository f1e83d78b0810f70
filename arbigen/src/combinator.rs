//! Combinators for adjusting, alternating, bounding and sequencing
//! generators.

use std::marker::PhantomData;

use num_traits::Zero;
use rand::Rng;
use rand::distributions::uniform::SampleUniform;

use crate::arbitrary::Arbitrary;
use crate::config::GeneratorConfig;
use crate::generator::{BoxedGenerator, Filter, Generator};

/// A generator identical to its inner one but evaluated under a different
/// size budget.
pub struct Resize<G> {
    size: usize,
    generator: G,
}

impl<T, G: Generator<T>> Generator<T> for Resize<G> {
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GeneratorConfig) -> T {
        self.generator.generate(rng, &config.with_size(self.size))
    }
}

/// Evaluate `generator` as if the ambient size budget were `size`.
pub fn resize<T, G: Generator<T>>(size: usize, generator: G) -> Resize<G> {
    Resize { size, generator }
}

/// A generator that picks uniformly among the strategies of its choices.
pub struct OneOf<T> {
    choices: Vec<BoxedGenerator<T>>,
}

impl<T> Generator<T> for OneOf<T> {
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GeneratorConfig) -> T {
        let index = rng.gen_range(0..self.choices.len());
        self.choices[index].generate(rng, config)
    }
}

/// Alternate uniformly among the given generators' strategies.
pub fn one_of<T>(choices: Vec<BoxedGenerator<T>>) -> OneOf<T> {
    if choices.is_empty() {
        panic!("one_of cannot be created with an empty choice list");
    }
    OneOf { choices }
}

/// A generator bounded to an inclusive numeric range.
#[derive(Debug, Clone)]
pub struct Ranged<T> {
    low: T,
    high: T,
}

impl<T> Generator<T> for Ranged<T>
where
    T: SampleUniform + PartialOrd + Copy,
{
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GeneratorConfig) -> T {
        rng.gen_range(self.low..=self.high)
    }
}

/// Generate values in the inclusive range `low..=high`.
pub fn ranged<T>(low: T, high: T) -> Ranged<T>
where
    T: SampleUniform + PartialOrd + Copy,
{
    Ranged { low, high }
}

/// The default generator for `T`, excluding its zero value.
pub fn non_zero<T>() -> Filter<T::Gen, fn(&T) -> bool>
where
    T: Arbitrary + Zero,
{
    let not_zero: fn(&T) -> bool = |value| !value.is_zero();
    T::arbitrary().filter(not_zero)
}

/// A generator producing a variable-length homogeneous collection, each
/// element drawn independently from the element generator.
pub struct Collection<C, T, G> {
    element: G,
    _phantom: PhantomData<fn() -> (C, T)>,
}

impl<C, T, G> Generator<C> for Collection<C, T, G>
where
    C: FromIterator<T>,
    G: Generator<T>,
{
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GeneratorConfig) -> C {
        // Length scales with the ambient size; the empty collection is a
        // valid output at every size.
        let length = rng.gen_range(0..=config.effective_size());
        (0..length)
            .map(|_| self.element.generate(rng, config))
            .collect()
    }
}

/// Materialize any container that collects from an iterator of elements.
pub fn collection<C, T, G>(element: G) -> Collection<C, T, G>
where
    C: FromIterator<T>,
    G: Generator<T>,
{
    Collection {
        element,
        _phantom: PhantomData,
    }
}

/// Generate a `Vec` whose elements are produced by `element`.
pub fn sequence_of<T, G>(element: G) -> Collection<Vec<T>, T, G>
where
    G: Generator<T>,
{
    collection(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REFERENCE_SIZE;
    use crate::rng::create_seeded_rng;

    #[test]
    fn test_resize_overrides_ambient_size() {
        // At size 0 integer synthesis always yields zero; a resize to the
        // reference size must escape that.
        let generator = resize(REFERENCE_SIZE, u32::arbitrary());
        let mut rng = create_seeded_rng(10);
        let config = GeneratorConfig::new(0);

        assert_eq!(u32::arbitrary().generate(&mut rng, &config), 0);
        let mut saw_nonzero = false;
        for _ in 0..100 {
            if generator.generate(&mut rng, &config) != 0 {
                saw_nonzero = true;
                break;
            }
        }
        assert!(saw_nonzero);
    }

    #[test]
    fn test_one_of_picks_among_all_choices() {
        let generator = one_of(vec![
            BoxedGenerator::new(ranged(0u8, 9)),
            BoxedGenerator::new(ranged(100u8, 109)),
        ]);
        let mut rng = create_seeded_rng(11);
        let config = GeneratorConfig::default();

        let mut low = false;
        let mut high = false;
        for _ in 0..200 {
            match generator.generate(&mut rng, &config) {
                0..=9 => low = true,
                100..=109 => high = true,
                other => panic!("value {} outside both choices", other),
            }
        }
        assert!(low && high);
    }

    #[test]
    #[should_panic(expected = "empty choice list")]
    fn test_one_of_rejects_empty_choices() {
        one_of::<u8>(Vec::new());
    }

    #[test]
    fn test_ranged_stays_inclusive() {
        let generator = ranged(-3i32, 3);
        let mut rng = create_seeded_rng(12);
        let config = GeneratorConfig::default();

        for _ in 0..200 {
            let value = generator.generate(&mut rng, &config);
            assert!((-3..=3).contains(&value));
        }
    }

    #[test]
    fn test_non_zero_never_yields_zero() {
        let generator = non_zero::<i16>();
        let mut rng = create_seeded_rng(13);
        let config = GeneratorConfig::default();

        for _ in 0..200 {
            assert_ne!(generator.generate(&mut rng, &config), 0);
        }
    }

    #[test]
    fn test_sequence_length_tracks_size() {
        let generator = sequence_of(u8::arbitrary());
        let mut rng = create_seeded_rng(14);

        for size in [0, 1, 5, REFERENCE_SIZE] {
            let config = GeneratorConfig::new(size);
            for _ in 0..20 {
                let values: Vec<u8> = generator.generate(&mut rng, &config);
                assert!(values.len() <= size);
            }
        }
    }

    #[test]
    fn test_collection_builds_strings() {
        let generator = collection::<String, _, _>(ranged(1u8, 0x7f).map(char::from));
        let mut rng = create_seeded_rng(15);
        let config = GeneratorConfig::default();

        for _ in 0..50 {
            let text: String = generator.generate(&mut rng, &config);
            assert!(text.chars().all(|c| ('\u{1}'..='\u{7f}').contains(&c)));
        }
    }
}
