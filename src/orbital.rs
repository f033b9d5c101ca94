use log::warn;
use phf::phf_map;
use std::fmt;

/// Maximum number of electrons each subshell kind can hold.
static SUBSHELL_CAPACITY: phf::Map<char, u32> = phf_map! {
    's' => 2,
    'p' => 6,
    'd' => 10,
    'f' => 14,
};

/// Madelung (Klechkowski) fill order, from 1s up to 7p.
const FILL_ORDER: [(u8, char); 19] = [
    (1, 's'),
    (2, 's'),
    (2, 'p'),
    (3, 's'),
    (3, 'p'),
    (4, 's'),
    (3, 'd'),
    (4, 'p'),
    (5, 's'),
    (4, 'd'),
    (5, 'p'),
    (6, 's'),
    (4, 'f'),
    (5, 'd'),
    (6, 'p'),
    (7, 's'),
    (5, 'f'),
    (6, 'd'),
    (7, 'p'),
];

/// Occupancy of one subshell, e.g. `3d6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subshell {
    shell: u8,
    letter: char,
    electrons: u32,
}

impl Subshell {
    /// Principal quantum number `n`
    pub fn shell(&self) -> u8 {
        self.shell
    }

    /// Subshell letter (`s`, `p`, `d` or `f`)
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Electrons placed in this subshell
    pub fn electrons(&self) -> u32 {
        self.electrons
    }

    /// Records only come from [`electron_configuration`], so `letter` is
    /// always one of the keys of the capacity map.
    pub fn capacity(&self) -> u32 {
        SUBSHELL_CAPACITY[&self.letter]
    }

    pub fn is_full(&self) -> bool {
        self.electrons == self.capacity()
    }
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.shell, self.letter, self.electrons)
    }
}

/// Total number of electrons the fill order can place.
pub fn max_electrons() -> u32 {
    FILL_ORDER
        .iter()
        .map(|(_, letter)| SUBSHELL_CAPACITY[letter])
        .sum()
}

/// Build the ground-state electron configuration for `electrons` electrons.
///
/// Subshells are filled following [`FILL_ORDER`], each one taking at most its
/// capacity. Filling stops once every electron is placed, so `0` gives an
/// empty configuration.
///
/// Counts above [`max_electrons`] exhaust the fill order: the returned
/// configuration stops at `7p6` and the surplus is left unplaced.
pub fn electron_configuration(electrons: u32) -> Vec<Subshell> {
    let mut configuration = Vec::new();
    let mut remaining = electrons;

    for &(shell, letter) in &FILL_ORDER {
        if remaining == 0 {
            break;
        }
        let occupied = remaining.min(SUBSHELL_CAPACITY[&letter]);
        configuration.push(Subshell {
            shell,
            letter,
            electrons: occupied,
        });
        remaining -= occupied;
    }

    if remaining > 0 {
        warn!("{remaining} electrons left unplaced: fill order stops at 7p ({electrons} requested)");
    }

    configuration
}
