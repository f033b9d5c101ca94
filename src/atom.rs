// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::orbital::{electron_configuration, Subshell};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A chemical element as stored in the [`ElementTable`](crate::element::ElementTable).
///
/// Atoms are only built by the table and handed out by reference. Two atoms
/// are equal when symbol, atomic number and standard weight all match; the
/// electron configuration is derived from the atomic number and does not take
/// part in comparisons.
#[derive(Debug, Clone)]
pub struct Atom {
    symbol: &'static str,
    atomic_number: u8,
    standard_weight: f64,
    electron_configuration: Vec<Subshell>,
}

impl Atom {
    pub(crate) fn new(symbol: &'static str, atomic_number: u8, standard_weight: f64) -> Self {
        Self {
            symbol,
            atomic_number,
            standard_weight,
            electron_configuration: electron_configuration(u32::from(atomic_number)),
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn atomic_number(&self) -> u8 {
        self.atomic_number
    }

    /// Standard atomic weight, in atomic mass units
    pub fn standard_weight(&self) -> f64 {
        self.standard_weight
    }

    pub fn electron_configuration(&self) -> &[Subshell] {
        &self.electron_configuration
    }

    /// Configuration in the usual compact notation, e.g. `1s2 2s2 2p4`.
    pub fn electron_configuration_string(&self) -> String {
        self.electron_configuration
            .iter()
            .map(Subshell::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
            && self.atomic_number == other.atomic_number
            && self.standard_weight.to_bits() == other.standard_weight.to_bits()
    }
}
impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
        self.atomic_number.hash(state);
        self.standard_weight.to_bits().hash(state);
    }
}

impl PartialOrd for Atom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Atoms sort by atomic number.
impl Ord for Atom {
    fn cmp(&self, other: &Self) -> Ordering {
        self.atomic_number
            .cmp(&other.atomic_number)
            .then_with(|| self.symbol.cmp(other.symbol))
            .then_with(|| self.standard_weight.total_cmp(&other.standard_weight))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:?}, {})",
            self.symbol, self.standard_weight, self.atomic_number
        )
    }
}
