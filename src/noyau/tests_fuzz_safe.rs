//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés : expression bien formée => jamais d’erreur,
//!   même entrée => même bits, espaces entre jetons sans effet

use std::time::{Duration, Instant};

use super::{evaluate, EvalError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Une expression = suite de morceaux (un morceau = un jeton).
/// Les chiffres d’un nombre restent dans le même morceau.
fn gen_atom(rng: &mut Rng, out: &mut Vec<String>) {
    // 0..=99, sans zéro de tête
    out.push(format!("{}", rng.pick(100)));
}

fn gen_expr(rng: &mut Rng, depth: usize, out: &mut Vec<String>) {
    if depth == 0 || rng.pick(4) == 0 {
        gen_atom(rng, out);
        return;
    }

    let op = match rng.pick(5) {
        0 => "+",
        1 => "-",
        2 => "*",
        3 => "/",
        _ => "^",
    };

    let parens = rng.coin();
    if parens {
        out.push("(".to_string());
    }
    gen_expr(rng, depth - 1, out);
    out.push(op.to_string());
    gen_expr(rng, depth - 1, out);
    if parens {
        out.push(")".to_string());
    }
}

fn colle(morceaux: &[String]) -> String {
    morceaux.concat()
}

fn espace(rng: &mut Rng, morceaux: &[String]) -> String {
    let mut s = String::new();
    for m in morceaux {
        for _ in 0..rng.pick(3) {
            s.push(if rng.coin() { ' ' } else { '\t' });
        }
        s.push_str(m);
    }
    s.push(' ');
    s
}

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_formee_jamais_en_erreur() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let mut morceaux = Vec::new();
        gen_expr(&mut rng, 5, &mut morceaux);
        let expr = espace(&mut rng, &morceaux);

        // fini, infini ou NaN : tout est accepté, mais jamais d’erreur
        eval_ok(&expr);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        budget(t0, max);

        let mut morceaux = Vec::new();
        gen_expr(&mut rng, 4, &mut morceaux);
        let expr = colle(&morceaux);

        // comparaison bit à bit : NaN == NaN ici
        let a = eval_ok(&expr).to_bits();
        for _ in 0..3 {
            assert_eq!(eval_ok(&expr).to_bits(), a, "expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_espaces_sans_effet() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..150 {
        budget(t0, max);

        let mut morceaux = Vec::new();
        gen_expr(&mut rng, 4, &mut morceaux);

        let compact = colle(&morceaux);
        let aere = espace(&mut rng, &morceaux);

        assert_eq!(
            eval_ok(&compact).to_bits(),
            eval_ok(&aere).to_bits(),
            "compact={compact:?} aere={aere:?}"
        );
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let alphabet: Vec<char> = "0123456789+-*/^() ax.".chars().collect();
    let mut rng = Rng::new(0xDEAD_u64);

    let mut seen_ok = 0usize;
    let mut seen_chars = 0usize;
    let mut seen_expr = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let s: String = (0..len)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        match evaluate(&s) {
            Ok(_) => seen_ok += 1,
            Err(EvalError::InvalidCharacters) => seen_chars += 1,
            Err(EvalError::InvalidExpression) => seen_expr += 1,
        }
    }

    // On veut voir les deux erreurs, sinon le fuzz ne “balaye” rien.
    assert!(seen_chars > 0, "aucun caractère invalide vu");
    assert!(seen_expr > 0, "aucune expression invalide vue");
    assert_eq!(seen_ok + seen_chars + seen_expr, 400);
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = somme_balancee("1", 800);
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 800.0);
}
