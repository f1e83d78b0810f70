//! Core generator trait and type-erased composition support.

use std::marker::PhantomData;

use crate::config::GeneratorConfig;

/// A stateless producer of values of one fixed type.
///
/// Generators are immutable value descriptors: all size and randomness
/// context is passed in per invocation, never stored, so any generator is
/// safe to share and re-evaluate. Composition (`map`, `filter`, the
/// combinators in [`crate::combinator`]) builds new descriptors without
/// side effects.
pub trait Generator<T> {
    /// Generate one value of type `T` using the provided RNG and the ambient
    /// configuration.
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GeneratorConfig) -> T;

    /// A generator producing this generator's values passed through `f`.
    fn map<U, F>(self, f: F) -> Map<T, Self, F>
    where
        Self: Sized,
        F: Fn(T) -> U,
    {
        Map {
            generator: self,
            mapper: f,
            _phantom: PhantomData,
        }
    }

    /// A generator retrying this generator until `predicate` holds.
    ///
    /// Panics after 1000 failed attempts rather than looping forever.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&T) -> bool,
    {
        Filter {
            generator: self,
            predicate,
        }
    }
}

/// Force a generator to produce one concrete value now.
pub fn evaluate<T, G>(generator: &G, rng: &mut dyn rand::RngCore, config: &GeneratorConfig) -> T
where
    G: Generator<T> + ?Sized,
{
    generator.generate(rng, config)
}

/// A generator that maps values from one type to another.
pub struct Map<T, G, F> {
    generator: G,
    mapper: F,
    _phantom: PhantomData<fn(T) -> T>,
}

impl<T, U, G, F> Generator<U> for Map<T, G, F>
where
    G: Generator<T>,
    F: Fn(T) -> U,
{
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GeneratorConfig) -> U {
        (self.mapper)(self.generator.generate(rng, config))
    }
}

/// A generator that retries an inner generator until a predicate holds.
pub struct Filter<G, F> {
    generator: G,
    predicate: F,
}

impl<T, G, F> Generator<T> for Filter<G, F>
where
    G: Generator<T>,
    F: Fn(&T) -> bool,
{
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GeneratorConfig) -> T {
        // Bounded retry to avoid spinning on an unsatisfiable predicate.
        for _ in 0..1000 {
            let value = self.generator.generate(rng, config);
            if (self.predicate)(&value) {
                return value;
            }
        }
        panic!("filter generator failed to produce a matching value after 1000 attempts");
    }
}

/// A wrapper that stores a generator in a type-erased way, so generators of
/// the same value type but different concrete shapes can be collected
/// together (see [`crate::combinator::one_of`]).
pub struct BoxedGenerator<T> {
    inner: Box<dyn Generator<T> + Send + Sync>,
}

impl<T> BoxedGenerator<T> {
    /// Box any generator of `T`.
    pub fn new<G>(generator: G) -> Self
    where
        G: Generator<T> + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(generator),
        }
    }
}

impl<T> Generator<T> for BoxedGenerator<T> {
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GeneratorConfig) -> T {
        self.inner.generate(rng, config)
    }
}
