// src/noyau/jetons.rs

use std::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Les sept symboles reconnus. Ensemble fermé : ajouter un opérateur
/// oblige à compléter chaque `match` ci-dessous.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Add,
    Subtract,
    Multiply,
    Divide,
    ParenOpen,
    ParenClose,
    Power,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Add => '+',
            Operateur::Subtract => '-',
            Operateur::Multiply => '*',
            Operateur::Divide => '/',
            Operateur::ParenOpen => '(',
            Operateur::ParenClose => ')',
            Operateur::Power => '^',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Add),
            '-' => Some(Operateur::Subtract),
            '*' => Some(Operateur::Multiply),
            '/' => Some(Operateur::Divide),
            '(' => Some(Operateur::ParenOpen),
            ')' => Some(Operateur::ParenClose),
            '^' => Some(Operateur::Power),
            _ => None,
        }
    }

    /// Table de priorité, totale sur les sept symboles.
    /// `)` a une priorité uniquement pour les comparaisons ; il n’est jamais empilé.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::ParenOpen => 0,
            Operateur::Add | Operateur::Subtract | Operateur::ParenClose => 1,
            Operateur::Multiply | Operateur::Divide => 2,
            Operateur::Power => 3,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    /// Toujours fini.
    Num(f64),
    Op(Operateur),
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Op(op) => write!(f, "{op}"),
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers positifs (suite de chiffres, lecture gloutonne)
/// - opérateurs + - * / ^
/// - parenthèses ( )
///
/// Tout autre caractère est sauté sans jeton (espaces, lettres, ...).
/// C’est la validation qui détecte ensuite les caractères ignorés.
/// Pas de signe : "-3" donne [Op(Subtract), Num(3)].
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if let Some(op) = Operateur::depuis_symbole(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let int_str: String = chars[start..i].iter().collect();

            // Littéral hors de portée d’un f64 fini : aucun jeton,
            // la validation le signalera comme caractères invalides.
            if let Some(v) = litteral_fini(&int_str) {
                out.push(Tok::Num(v));
            }
            continue;
        }

        i += 1;
    }

    out
}

fn litteral_fini(chiffres: &str) -> Option<f64> {
    BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .and_then(|n| n.to_f64())
        .filter(|v| v.is_finite())
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
