//! Faker-style sample data generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::record::Record;
use super::words::{ADJECTIVES, LOREM, MATERIALS, PRODUCTS};

/// Shortest and longest generated sentence, in words.
const SENTENCE_WORDS: (usize, usize) = (3, 10);

/// Price range in cents (1.00 to 1000.00).
const PRICE_CENTS: (u32, u32) = (100, 100_000);

/// Kind of value requested from a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ProductName,
    Sentence,
    Price,
}

/// Source of fresh sample values. Every call yields a new value.
pub trait Generator {
    fn generate(&mut self, category: Category) -> String;

    /// Generate one complete record.
    fn record(&mut self) -> Record {
        Record {
            name: self.generate(Category::ProductName),
            description: self.generate(Category::Sentence),
            price: self.generate(Category::Price),
        }
    }

    /// Generate `count` records in order.
    fn records(&mut self, count: usize) -> Vec<Record> {
        (0..count).map(|_| self.record()).collect()
    }
}

/// Commerce and lorem generator backed by a `StdRng`.
pub struct FakeGenerator {
    rng: StdRng,
}

impl FakeGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn pick(&mut self, words: &[&'static str]) -> &'static str {
        words[self.rng.gen_range(0..words.len())]
    }

    fn product_name(&mut self) -> String {
        let adjective = self.pick(ADJECTIVES);
        let material = self.pick(MATERIALS);
        let product = self.pick(PRODUCTS);
        format!("{} {} {}", adjective, material, product)
    }

    fn sentence(&mut self) -> String {
        let count = self.rng.gen_range(SENTENCE_WORDS.0..=SENTENCE_WORDS.1);
        let words: Vec<&str> = (0..count).map(|_| self.pick(LOREM)).collect();
        let sentence = words.join(" ");

        let mut chars = sentence.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => String::from("."),
        }
    }

    fn price(&mut self) -> String {
        let cents = self.rng.gen_range(PRICE_CENTS.0..=PRICE_CENTS.1);
        format!("{}.{:02}", cents / 100, cents % 100)
    }
}

impl Default for FakeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for FakeGenerator {
    fn generate(&mut self, category: Category) -> String {
        match category {
            Category::ProductName => self.product_name(),
            Category::Sentence => self.sentence(),
            Category::Price => self.price(),
        }
    }
}
