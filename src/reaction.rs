use crate::composition::Composition;
use crate::error::CError;
use crate::molecule::Molecule;

/// Total atom counts of one side of a reaction, every molecule weighted by
/// its stoichiometric coefficient.
///
/// # Errors
///
/// Returns [`CError::CountOverflow`] if a total does not fit in a `u64`.
pub fn side_composition<'t>(side: &[(Molecule<'t>, u64)]) -> Result<Composition<'t>, CError> {
    let mut total = Composition::new();
    for (molecule, coefficient) in side {
        total.add_scaled(molecule.composition(), *coefficient)?;
    }
    Ok(total)
}

/// Check that `reactants` and `products` hold the same atoms in the same
/// amounts.
///
/// Coefficients are taken as given; nothing is inferred. Empty sides are
/// allowed and contain no atoms, so two empty sides are balanced.
///
/// # Errors
///
/// Returns [`CError::CountOverflow`] if either side holds more atoms of one
/// element than a `u64` can count; no verdict is given in that case.
pub fn is_balanced(
    reactants: &[(Molecule<'_>, u64)],
    products: &[(Molecule<'_>, u64)],
) -> Result<bool, CError> {
    Ok(side_composition(reactants)? == side_composition(products)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side(terms: &[(&str, u64)]) -> Vec<(Molecule<'static>, u64)> {
        terms
            .iter()
            .map(|&(formula, coefficient)| (Molecule::new(formula).unwrap(), coefficient))
            .collect()
    }

    #[test]
    fn water_synthesis() {
        let reactants = side(&[("H2", 2), ("O2", 1)]);
        let products = side(&[("H2O", 2)]);
        assert!(is_balanced(&reactants, &products).unwrap());

        let totals = side_composition(&reactants).unwrap();
        assert_eq!(totals.count_symbol("H"), 4);
        assert_eq!(totals.count_symbol("O"), 2);
    }

    #[test]
    fn missing_oxygen() {
        let reactants = side(&[("H2", 1), ("O2", 1)]);
        let products = side(&[("H2O", 1)]);
        assert!(!is_balanced(&reactants, &products).unwrap());
    }

    #[test]
    fn combustion_of_methane() {
        let reactants = side(&[("CH4", 1), ("O2", 2)]);
        let products = side(&[("CO2", 1), ("H2O", 2)]);
        assert!(is_balanced(&reactants, &products).unwrap());
        assert!(is_balanced(&products, &reactants).unwrap());
    }

    #[test]
    fn element_only_on_one_side() {
        let reactants = side(&[("NaCl", 1)]);
        let products = side(&[("Na", 1)]);
        assert!(!is_balanced(&reactants, &products).unwrap());
    }

    #[test]
    fn side_against_itself() {
        let reactants = side(&[("C6H12O6", 1), ("O2", 6)]);
        assert!(is_balanced(&reactants, &reactants.clone()).unwrap());
    }

    #[test]
    fn empty_sides() {
        assert!(is_balanced(&[], &[]).unwrap());
        assert!(!is_balanced(&side(&[("H2", 1)]), &[]).unwrap());
    }

    #[test]
    fn zero_coefficient_contributes_nothing() {
        let reactants = side(&[("H2", 1), ("He", 0)]);
        let products = side(&[("H2", 1)]);
        assert!(is_balanced(&reactants, &products).unwrap());
    }

    #[test]
    fn huge_counts_are_not_clamped() {
        let reactants = side(&[("H18446744073709551615", 2)]);
        let products = side(&[("H18446744073709551615", 3)]);
        assert_eq!(
            is_balanced(&reactants, &products),
            Err(CError::CountOverflow("H".to_string()))
        );

        let split = side(&[("H9223372036854775807", 2), ("H", 1)]);
        let whole = side(&[("H18446744073709551615", 1)]);
        assert!(is_balanced(&split, &whole).unwrap());
        assert!(is_balanced(&whole, &whole).unwrap());
    }
}
