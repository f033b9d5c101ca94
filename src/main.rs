use std::process::ExitCode;

use chempkg::molecule::Molecule;

fn main() -> ExitCode {
    let formulas: Vec<String> = std::env::args().skip(1).collect();
    if formulas.is_empty() {
        eprintln!("usage: chempkg <formula>...");
        return ExitCode::FAILURE;
    }

    let mut status = ExitCode::SUCCESS;
    for formula in &formulas {
        match Molecule::new(formula) {
            Ok(molecule) => {
                println!("{formula}: {:.3} g/mol", molecule.molar_weight());
                for (atom, count) in molecule.composition() {
                    println!(
                        "  {:<2} x{count:<4} {}",
                        atom.symbol(),
                        atom.electron_configuration_string()
                    );
                }
            }
            Err(e) => {
                eprintln!("{formula}: {e}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
