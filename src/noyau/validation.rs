// src/noyau/validation.rs
//
// Contrôle grossier mais exact : chaque caractère non blanc de l’entrée doit
// se retrouver dans la forme texte d’un jeton. Un caractère sauté par la
// tokenisation compte à gauche mais pas à droite.
//
// Les longueurs seules ne suffisent pas : un littéral arrondi à la puissance
// de dix suivante s’écrit avec un chiffre de plus (99999999999999999999 ->
// 100000000000000000000) et masquerait un caractère inconnu. On vérifie donc
// aussi chaque caractère.

use log::debug;

use super::erreur::EvalError;
use super::jetons::{Operateur, Tok};

pub fn valide_caracteres(expression: &str, jetons: &[Tok]) -> Result<(), EvalError> {
    let inconnu = |c: &char| {
        !c.is_whitespace() && !c.is_ascii_digit() && Operateur::depuis_symbole(*c).is_none()
    };
    if let Some(c) = expression.chars().find(inconnu) {
        debug!("caractère invalide : {c:?}");
        return Err(EvalError::InvalidCharacters);
    }

    let attendu = expression.chars().filter(|c| !c.is_whitespace()).count();
    let lu: usize = jetons.iter().map(|t| t.to_string().chars().count()).sum();

    if attendu != lu {
        debug!("caractères invalides : {attendu} attendus, {lu} lus dans les jetons");
        return Err(EvalError::InvalidCharacters);
    }
    Ok(())
}
