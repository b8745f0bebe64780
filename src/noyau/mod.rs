//! Noyau RPN
//!
//! Organisation interne :
//! - erreur.rs     : les deux erreurs remontées à l’appelant
//! - jetons.rs     : tokenisation + table de priorité
//! - validation.rs : aucun caractère ignoré par la tokenisation
//! - rpn.rs        : shunting-yard (infixe -> postfixe)
//! - postfixe.rs   : évaluation de la RPN sur une pile f64
//! - eval.rs       : pipeline complet

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod postfixe;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvalError;
pub use eval::{evaluate, evaluate_detaille, Demarche};
