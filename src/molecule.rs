use crate::composition::Composition;
use crate::element::ElementTable;
use crate::error::CError;
use crate::formula::FormulaParser;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A molecule built from its formula.
///
/// Two molecules are equal when they contain the same atoms in the same
/// amounts, whatever the formula text: `CH3COOH` and `C2H4O2` compare equal.
#[derive(Debug, Clone)]
pub struct Molecule<'t> {
    formula: String,
    composition: Composition<'t>,
    molar_weight: f64,
}

impl Molecule<'static> {
    /// Parse `formula` against the process-wide [`ElementTable`].
    ///
    /// # Errors
    ///
    /// Fails like [`FormulaParser::parse`].
    pub fn new(formula: &str) -> Result<Self, CError> {
        Self::with_table(formula, ElementTable::global())
    }
}

impl<'t> Molecule<'t> {
    /// Parse `formula` against an explicit `table`.
    ///
    /// # Errors
    ///
    /// Fails like [`FormulaParser::parse`].
    pub fn with_table(formula: &str, table: &'t ElementTable) -> Result<Self, CError> {
        let composition = FormulaParser::new(table).parse(formula)?;
        Ok(Self::from_composition(formula, composition))
    }

    fn from_composition(formula: &str, composition: Composition<'t>) -> Self {
        let molar_weight = composition.weight();
        Molecule {
            formula: formula.to_string(),
            composition,
            molar_weight,
        }
    }

    /// The formula exactly as it was given
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn composition(&self) -> &Composition<'t> {
        &self.composition
    }

    /// Molar weight in g/mol
    pub fn molar_weight(&self) -> f64 {
        self.molar_weight
    }
}

impl PartialEq for Molecule<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.composition == other.composition
    }
}
impl Eq for Molecule<'_> {}

impl Hash for Molecule<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.composition.hash(state);
    }
}

impl FromStr for Molecule<'static> {
    type Err = CError;

    fn from_str(formula: &str) -> Result<Self, Self::Err> {
        Molecule::new(formula)
    }
}

impl fmt::Display for Molecule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Molecule {} (weight: {:?})",
            self.formula, self.molar_weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::collections::HashSet;

    #[test]
    fn water() {
        let water = Molecule::new("H2O").unwrap();
        assert_eq!(water.formula(), "H2O");
        assert_eq!(water.composition().count_symbol("H"), 2);
        assert_eq!(water.composition().count_symbol("O"), 1);
        assert_approx_eq!(water.molar_weight(), 18.0);
    }

    #[test]
    fn weight_follows_composition() {
        let acetic_acid = Molecule::new("CH3COOH").unwrap();
        assert_approx_eq!(acetic_acid.molar_weight(), 2.0 * 12.0 + 4.0 * 1.0 + 2.0 * 16.0);

        let salt: Molecule = "NaCl".parse().unwrap();
        assert_approx_eq!(salt.molar_weight(), 58.5);
    }

    #[test]
    fn equality_ignores_formula_text() {
        let water = Molecule::new("H2O").unwrap();
        let reordered = Molecule::new("OH2").unwrap();
        let split = Molecule::new("HOH").unwrap();
        assert_eq!(water, reordered);
        assert_eq!(water, split);
        assert_ne!(water.formula(), split.formula());

        assert_eq!(
            Molecule::new("CH3COOH").unwrap(),
            Molecule::new("C2H4O2").unwrap()
        );
        assert_ne!(water, Molecule::new("H2O2").unwrap());
    }

    #[test]
    fn usable_as_set_key() {
        let set: HashSet<Molecule> = ["H2O", "OH2", "HOH", "CO2"]
            .iter()
            .map(|formula| Molecule::new(formula).unwrap())
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn errors_bubble_up() {
        assert_eq!(
            Molecule::new("Xx2").unwrap_err(),
            CError::UnknownElement("Xx".to_string())
        );
        assert!(matches!(
            Molecule::new("H2O?"),
            Err(CError::MalformedFormula { .. })
        ));
    }

    #[test]
    fn empty_molecule() {
        let nothing = Molecule::new("").unwrap();
        assert!(nothing.composition().is_empty());
        assert_approx_eq!(nothing.molar_weight(), 0.0);
    }

    #[test]
    fn display() {
        let water = Molecule::new("H2O").unwrap();
        assert_eq!(water.to_string(), "Molecule H2O (weight: 18.0)");
    }
}
