pub mod atom;
pub mod composition;
pub mod element;
pub mod error;
pub mod formula;
pub mod kinetics;
pub mod molecule;
pub mod orbital;
pub mod plot;
pub mod reaction;

pub use atom::Atom;
pub use composition::Composition;
pub use element::{lookup, ElementTable};
pub use error::CError;
pub use formula::FormulaParser;
pub use molecule::Molecule;
pub use reaction::is_balanced;
