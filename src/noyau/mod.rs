//! Noyau de la calculatrice pixel
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées (toutes deviennent "Error" à l’écran)
//! - format.rs   : budget 7 / 12 caractères + nombre -> texte
//! - jetons.rs   : glyphes, liste blanche, tokenisation
//! - rpn.rs      : shunting-yard + évaluation f64
//! - eval.rs     : stratégies générale / binaire
//! - machine.rs  : machine d’état (touches -> transitions)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod machine;
pub mod rpn;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::Strategie;
pub use machine::{Calculatrice, Operateur, Touche};
