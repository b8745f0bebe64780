// src/noyau/postfixe.rs
//
// Évaluation d’une RPN sur une pile de f64.
// - Num : empile
// - opérateur : dépile a (droite) puis b (gauche), empile b op a
// - division par zéro : valeur IEEE (inf / NaN), pas d’erreur
// - pile insuffisante, vide ou non réduite à une valeur à la fin : invalide

use super::erreur::EvalError;
use super::jetons::{Operateur, Tok};

pub fn eval_postfix(rpn: &[Tok]) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Tok::Num(v) => st.push(v),

            Tok::Op(op) => {
                let a = st.pop().ok_or(EvalError::InvalidExpression)?;
                let b = st.pop().ok_or(EvalError::InvalidExpression)?;

                let v = match op {
                    Operateur::Add => b + a,
                    Operateur::Subtract => b - a,
                    Operateur::Multiply => b * a,
                    Operateur::Divide => b / a,
                    Operateur::Power => b.powf(a),
                    Operateur::ParenOpen | Operateur::ParenClose => {
                        return Err(EvalError::InvalidExpression)
                    }
                };
                st.push(v);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::InvalidExpression),
    }
}
