//! Term-frequency and document-frequency counters.
use hashbrown::{HashMap, HashSet};
use std::hash::Hash;

/// Document-frequency counter over a small corpus.
#[derive(Default)]
pub struct Idf<T> {
    counter: HashMap<T, usize>,
    dedup: HashSet<T>,
    num_docs: usize,
}

impl<T> Idf<T>
where
    T: Hash + Eq + Copy,
{
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self {
            counter: HashMap::new(),
            dedup: HashSet::new(),
            num_docs: 0,
        }
    }

    /// Adds a document given as its terms (duplicates count once).
    pub fn add<I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.dedup.clear();
        for term in terms {
            if self.dedup.insert(term) {
                self.counter
                    .entry(term)
                    .and_modify(|c| *c += 1)
                    .or_insert(1);
            }
        }
        self.num_docs += 1;
    }

    /// Gets the number of added documents.
    pub const fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Gets the number of documents containing `term`.
    pub fn df(&self, term: T) -> usize {
        self.counter.get(&term).copied().unwrap_or(0)
    }

    /// Gets the natural-log inverse document frequency `1 + ln(n / df)`.
    ///
    /// Returns `0` for a term no document contains.
    pub fn idf(&self, term: T) -> f64 {
        let m = self.df(term);
        if m == 0 {
            return 0.;
        }
        let n = self.num_docs as f64;
        (n / m as f64).ln() + 1.
    }
}

/// Raw term-frequency counter for a single document.
#[derive(Default)]
pub struct Tf<T> {
    counter: HashMap<T, usize>,
}

impl<T> Tf<T>
where
    T: Hash + Eq + Copy,
{
    /// Counts the terms of a document.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut counter = HashMap::new();
        for term in terms {
            counter.entry(term).and_modify(|c| *c += 1).or_insert(1);
        }
        Self { counter }
    }

    /// Gets the raw count of `term`.
    pub fn tf(&self, term: T) -> usize {
        self.counter.get(&term).copied().unwrap_or(0)
    }

    /// Iterates over the distinct terms (in arbitrary order).
    pub fn terms(&self) -> impl Iterator<Item = T> + '_ {
        self.counter.keys().copied()
    }

    /// Gets the number of distinct terms.
    pub fn len(&self) -> usize {
        self.counter.len()
    }

    /// Checks if no term was counted.
    pub fn is_empty(&self) -> bool {
        self.counter.is_empty()
    }
}
