//! Noyau — erreurs
//!
//! Taxonomie fermée : deux cas seulement remontent à l’appelant.
//! Les messages sont fixes (pas de localisation).

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Un caractère n’est ni un espace, ni un chiffre, ni un des sept symboles.
    #[error("Expression contains invalid characters")]
    InvalidCharacters,

    /// Parenthésage déséquilibré, ou RPN sans la bonne quantité d’opérandes.
    #[error("Expression is invalid")]
    InvalidExpression,
}
