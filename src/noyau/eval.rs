//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> validation -> RPN -> pile f64
//!
//! Chaque appel possède ses jetons et ses piles : aucun état partagé,
//! donc appels concurrents sans synchronisation.

use log::{debug, trace};

use super::erreur::EvalError;
use super::jetons::{format_tokens, tokenize, Tok};
use super::postfixe::eval_postfix;
use super::rpn::to_postfix;
use super::validation::valide_caracteres;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression arithmétique.
///
/// ```
/// use calculatrice_rpn::noyau::{evaluate, EvalError};
///
/// assert_eq!(evaluate("(1 - 2) * 3"), Ok(-3.0));
/// assert_eq!(evaluate("1 - 2 + a"), Err(EvalError::InvalidCharacters));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    pipeline(expression).map(|(valeur, _jetons, _rpn)| valeur)
}

/// Même pipeline que [`evaluate`], avec la démarche (jetons + RPN) pour l’UI.
pub fn evaluate_detaille(expression: &str) -> Result<(f64, Demarche), EvalError> {
    let (valeur, jetons, rpn) = pipeline(expression)?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };

    Ok((valeur, d))
}

/// Pipeline commun : rend aussi les jetons et la RPN, sans les formater.
fn pipeline(expression: &str) -> Result<(f64, Vec<Tok>, Vec<Tok>), EvalError> {
    debug!("évaluation de {expression:?}");

    // 1) Jetons
    let jetons = tokenize(expression);
    trace!("jetons: {jetons:?}");

    // 2) Validation
    valide_caracteres(expression, &jetons)?;

    // 3) RPN
    let rpn = to_postfix(&jetons)?;
    trace!("rpn: {rpn:?}");

    // 4) Pile
    let valeur = eval_postfix(&rpn).map_err(|e| {
        debug!("rpn mal formée pour {expression:?}");
        e
    })?;
    debug!("{expression:?} = {valeur}");

    Ok((valeur, jetons, rpn))
}
