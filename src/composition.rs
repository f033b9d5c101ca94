use crate::atom::Atom;
use crate::error::CError;
use std::collections::{btree_map::Iter, BTreeMap};

/// Multiset of atoms: how many of each element a molecule (or a whole
/// reaction side) contains.
///
/// Keys are references into an [`ElementTable`](crate::element::ElementTable)
/// and are kept sorted by atomic number, so equality and hashing only depend
/// on the atoms and their counts, never on the order they were added in.
/// Counts are always positive; absent atoms count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Composition<'t>(BTreeMap<&'t Atom, u64>);

impl<'t> Composition<'t> {
    pub fn new() -> Self {
        Composition(BTreeMap::new())
    }

    /// Add `count` atoms of `atom`. Adding zero atoms is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CError::CountOverflow`] if the total no longer fits in a `u64`;
    /// the composition is left unchanged.
    pub fn add(&mut self, atom: &'t Atom, count: u64) -> Result<(), CError> {
        if count == 0 {
            return Ok(());
        }
        let total = self
            .count(atom)
            .checked_add(count)
            .ok_or_else(|| CError::CountOverflow(atom.symbol().to_string()))?;
        self.0.insert(atom, total);
        Ok(())
    }

    /// Add every atom of `other`, each count multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`CError::CountOverflow`] if a scaled or summed count does not
    /// fit in a `u64`.
    pub fn add_scaled(&mut self, other: &Composition<'t>, factor: u64) -> Result<(), CError> {
        for (&atom, &count) in other {
            let scaled = count
                .checked_mul(factor)
                .ok_or_else(|| CError::CountOverflow(atom.symbol().to_string()))?;
            self.add(atom, scaled)?;
        }
        Ok(())
    }

    /// Number of `atom` in this composition, zero when absent.
    pub fn count(&self, atom: &Atom) -> u64 {
        self.0.get(atom).copied().unwrap_or(0)
    }

    /// Number of atoms with the given symbol, zero when absent.
    pub fn count_symbol(&self, symbol: &str) -> u64 {
        self.0
            .iter()
            .find(|(atom, _)| atom.symbol() == symbol)
            .map_or(0, |(_, &count)| count)
    }

    /// Number of distinct elements
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of atoms of any element. Widened so that it cannot overflow.
    pub fn total_atoms(&self) -> u128 {
        self.0.values().map(|&count| u128::from(count)).sum()
    }

    /// Sum of `count * standard weight` over every atom.
    pub fn weight(&self) -> f64 {
        self.0
            .iter()
            .map(|(atom, &count)| atom.standard_weight() * count as f64)
            .sum()
    }

    pub fn iter(&self) -> Iter<'_, &'t Atom, u64> {
        self.0.iter()
    }
}

impl<'a, 't> IntoIterator for &'a Composition<'t> {
    type Item = (&'a &'t Atom, &'a u64);
    type IntoIter = Iter<'a, &'t Atom, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
