// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfixe)
//
// Règles:
// - Num : sortie directe
// - '(' : empilé sans condition
// - ')' : dépile vers la sortie jusqu’à '(' (jetée) ; pile vide avant => invalide
// - autre opérateur : dépile tant que priorité(sommet) >= priorité(op), puis empile
//   (égalité => on dépile : tout est associatif à gauche, '^' compris)
// - fin : une parenthèse restée sur la pile => invalide

use log::debug;

use super::erreur::EvalError;
use super::jetons::{Operateur, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Op(-), Num(2), Op(*), Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Op(*), Op(-)]
pub fn to_postfix(tokens: &[Tok]) -> Result<Vec<Tok>, EvalError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Operateur> = Vec::new();

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(Operateur::ParenOpen) => ops.push(Operateur::ParenOpen),

            Tok::Op(Operateur::ParenClose) => loop {
                match ops.pop() {
                    Some(Operateur::ParenOpen) => break,
                    Some(top) => out.push(Tok::Op(top)),
                    None => {
                        debug!("')' sans '(' correspondante");
                        return Err(EvalError::InvalidExpression);
                    }
                }
            },

            Tok::Op(op) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Tok::Op(top));
                    ops.pop();
                }
                ops.push(op);
            }
        }
    }

    if ops
        .iter()
        .any(|op| matches!(op, Operateur::ParenOpen | Operateur::ParenClose))
    {
        debug!("parenthèses non fermées");
        return Err(EvalError::InvalidExpression);
    }

    // vide la pile ops
    out.extend(ops.into_iter().rev().map(Tok::Op));

    Ok(out)
}
