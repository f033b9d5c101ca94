use crate::composition::Composition;
use crate::element::ElementTable;
use crate::error::CError;
use log::{debug, trace};

/// Splits a chemical formula such as `CH3COOH` into atom counts.
///
/// A formula is a sequence of tokens, each made of one uppercase letter, an
/// optional lowercase letter and an optional run of digits (`Na`, `H2`,
/// `Cl12`). A missing count means one atom. Repeated elements add up, so
/// `CH3COOH` has two carbons. Anything else (parentheses, charges, spaces,
/// leading digits) is rejected instead of being skipped.
pub struct FormulaParser<'t> {
    table: &'t ElementTable,
}

impl<'t> FormulaParser<'t> {
    pub fn new(table: &'t ElementTable) -> Self {
        FormulaParser { table }
    }

    /// # Errors
    ///
    /// - [`CError::UnknownElement`] if a token names no known element
    /// - [`CError::MalformedFormula`] if some characters do not form a token
    /// - [`CError::InvalidCount`] if a count is zero or does not fit in a `u64`
    /// - [`CError::CountOverflow`] if repeated tokens add up past `u64::MAX`
    pub fn parse(&self, formula: &str) -> Result<Composition<'t>, CError> {
        let mut composition = Composition::new();
        let mut scanner = Scanner::new(formula);

        while let Some((symbol, digits)) = scanner.next_token()? {
            let atom = self.table.lookup(symbol)?;
            let count = match digits {
                "" => 1,
                digits => digits
                    .parse::<u64>()
                    .ok()
                    .filter(|&count| count > 0)
                    .ok_or_else(|| CError::InvalidCount {
                        symbol: symbol.to_string(),
                        count: digits.to_string(),
                    })?,
            };
            trace!("{formula}: {count} x {symbol}");
            composition.add(atom, count)?;
        }

        debug!(
            "parsed `{formula}` into {} elements ({} atoms)",
            composition.len(),
            composition.total_atoms()
        );
        Ok(composition)
    }
}

/// Byte cursor over a formula, yielding `(symbol, digits)` tokens.
struct Scanner<'a> {
    formula: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(formula: &'a str) -> Self {
        Scanner { formula, pos: 0 }
    }

    /// Advance past every byte matching `accept`, at most `limit` of them.
    fn take_while(&mut self, limit: usize, accept: impl Fn(u8) -> bool) -> &'a str {
        let bytes = self.formula.as_bytes();
        let start = self.pos;
        while self.pos < bytes.len() && self.pos - start < limit && accept(bytes[self.pos]) {
            self.pos += 1;
        }
        &self.formula[start..self.pos]
    }

    /// Next token, `None` once the whole formula has been consumed.
    fn next_token(&mut self) -> Result<Option<(&'a str, &'a str)>, CError> {
        if self.pos == self.formula.len() {
            return Ok(None);
        }

        let start = self.pos;
        if self.take_while(1, |b| b.is_ascii_uppercase()).is_empty() {
            return Err(CError::MalformedFormula {
                formula: self.formula.to_string(),
                remainder: self.formula[start..].to_string(),
            });
        }
        self.take_while(1, |b| b.is_ascii_lowercase());
        let symbol = &self.formula[start..self.pos];
        let digits = self.take_while(usize::MAX, |b| b.is_ascii_digit());

        Ok(Some((symbol, digits)))
    }
}
