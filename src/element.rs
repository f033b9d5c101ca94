// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::atom::Atom;
use crate::error::CError;
use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Number of elements known to the table.
pub const ELEMENT_COUNT: usize = 118;

/// `(symbol, atomic number, standard atomic weight)` for every known element.
#[rustfmt::skip]
const ELEMENT_DATA: [(&str, u8, f64); ELEMENT_COUNT] = [
    ("H", 1, 1.0), ("He", 2, 4.0), ("Li", 3, 6.94), ("Be", 4, 9.01),
    ("B", 5, 10.81), ("C", 6, 12.0), ("N", 7, 14.0), ("O", 8, 16.0),
    ("F", 9, 19.0), ("Ne", 10, 20.18), ("Na", 11, 23.0), ("Mg", 12, 24.3),
    ("Al", 13, 26.98), ("Si", 14, 28.09), ("P", 15, 31.0), ("S", 16, 32.0),
    ("Cl", 17, 35.5), ("Ar", 18, 39.95), ("K", 19, 39.0), ("Ca", 20, 40.0),
    ("Sc", 21, 44.96), ("Ti", 22, 47.87), ("V", 23, 50.94), ("Cr", 24, 52.0),
    ("Mn", 25, 54.94), ("Fe", 26, 56.0), ("Co", 27, 59.0), ("Ni", 28, 58.69),
    ("Cu", 29, 63.55), ("Zn", 30, 65.0), ("Ga", 31, 69.72), ("Ge", 32, 72.63),
    ("As", 33, 74.92), ("Se", 34, 78.96), ("Br", 35, 79.9), ("Kr", 36, 83.79),
    ("Rb", 37, 85.47), ("Sr", 38, 87.62), ("Y", 39, 88.91), ("Zr", 40, 91.22),
    ("Nb", 41, 92.91), ("Mo", 42, 96.0), ("Tc", 43, 98.0), ("Ru", 44, 101.07),
    ("Rh", 45, 102.91), ("Pd", 46, 106.42), ("Ag", 47, 107.87), ("Cd", 48, 112.41),
    ("In", 49, 114.82), ("Sn", 50, 118.71), ("Sb", 51, 121.76), ("Te", 52, 127.6),
    ("I", 53, 127.0), ("Xe", 54, 131.29), ("Cs", 55, 132.91), ("Ba", 56, 137.33),
    ("La", 57, 138.91), ("Ce", 58, 140.12), ("Pr", 59, 140.91), ("Nd", 60, 144.24),
    ("Pm", 61, 145.0), ("Sm", 62, 150.36), ("Eu", 63, 151.96), ("Gd", 64, 157.25),
    ("Tb", 65, 158.93), ("Dy", 66, 162.5), ("Ho", 67, 164.93), ("Er", 68, 167.3),
    ("Tm", 69, 168.93), ("Yb", 70, 173.05), ("Lu", 71, 174.97), ("Hf", 72, 178.49),
    ("Ta", 73, 180.95), ("W", 74, 183.84), ("Re", 75, 186.21), ("Os", 76, 190.23),
    ("Ir", 77, 192.22), ("Pt", 78, 195.08), ("Au", 79, 197.0), ("Hg", 80, 200.59),
    ("Tl", 81, 204.38), ("Pb", 82, 207.2), ("Bi", 83, 208.98), ("Po", 84, 209.0),
    ("At", 85, 210.0), ("Rn", 86, 222.0), ("Fr", 87, 223.0), ("Ra", 88, 226.0),
    ("Ac", 89, 227.0), ("Th", 90, 232.04), ("Pa", 91, 231.04), ("U", 92, 238.03),
    ("Np", 93, 237.0), ("Pu", 94, 244.0), ("Am", 95, 243.0), ("Cm", 96, 247.0),
    ("Bk", 97, 247.0), ("Cf", 98, 251.0), ("Es", 99, 252.0), ("Fm", 100, 257.0),
    ("Md", 101, 258.0), ("No", 102, 259.0), ("Lr", 103, 262.0), ("Rf", 104, 267.0),
    ("Db", 105, 268.0), ("Sg", 106, 271.0), ("Bh", 107, 272.0), ("Hs", 108, 270.0),
    ("Mt", 109, 276.0), ("Ds", 110, 281.0), ("Rg", 111, 280.0), ("Cn", 112, 285.0),
    ("Nh", 113, 284.0), ("Fl", 114, 289.0), ("Mc", 115, 288.0), ("Lv", 116, 293.0),
    ("Ts", 117, 294.0), ("Og", 118, 294.0),
];

static ELEMENT_TABLE: OnceLock<ElementTable> = OnceLock::new();

/// Read-only registry of the chemical elements, keyed by symbol.
///
/// Every [`Atom`] lives here for as long as the table does; the rest of the
/// crate only holds references into it. Most callers want the process-wide
/// instance from [`ElementTable::global`], but a table can also be built and
/// passed around explicitly.
#[derive(Debug)]
pub struct ElementTable {
    /// Atoms ordered by atomic number
    atoms: Vec<Atom>,
    /// Index into `atoms` for each symbol
    by_symbol: HashMap<&'static str, usize>,
}

impl ElementTable {
    pub fn new() -> Self {
        let mut atoms = Vec::with_capacity(ELEMENT_COUNT);
        let mut by_symbol = HashMap::with_capacity(ELEMENT_COUNT);

        for (index, &(symbol, atomic_number, weight)) in ELEMENT_DATA.iter().enumerate() {
            atoms.push(Atom::new(symbol, atomic_number, weight));
            by_symbol.insert(symbol, index);
        }
        debug!("built element table with {} elements", atoms.len());

        ElementTable { atoms, by_symbol }
    }

    /// The shared table, built on first use.
    pub fn global() -> &'static ElementTable {
        ELEMENT_TABLE.get_or_init(ElementTable::new)
    }

    /// Find the atom for `symbol`. Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`CError::UnknownElement`] if no element has this symbol.
    pub fn lookup(&self, symbol: &str) -> Result<&Atom, CError> {
        self.by_symbol
            .get(symbol)
            .map(|&index| &self.atoms[index])
            .ok_or_else(|| CError::UnknownElement(symbol.to_string()))
    }

    pub fn by_atomic_number(&self, atomic_number: u8) -> Option<&Atom> {
        let index = usize::from(atomic_number).checked_sub(1)?;
        self.atoms.get(index)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Atom> {
        self.atoms.iter()
    }
}

impl Default for ElementTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ElementTable {
    type Item = &'a Atom;
    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

/// Look `symbol` up in the process-wide table.
pub fn lookup(symbol: &str) -> Result<&'static Atom, CError> {
    ElementTable::global().lookup(symbol)
}
