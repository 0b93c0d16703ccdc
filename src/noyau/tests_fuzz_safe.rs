//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - chaque expression générée porte sa valeur de référence (calculée à la génération)
//! - seule erreur attendue : division par zéro

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_traits::Zero;

use super::erreur::ErreurEval;
use super::eval::{eval_expression, evaluer};
use super::options::{ModeChiffres, Options};

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Expression entièrement parenthésée + valeur attendue (None = division par zéro).
struct Genere {
    texte: String,
    valeur: Option<BigInt>,
}

fn gen_atom(rng: &mut Rng, max: u32) -> Genere {
    let n = rng.pick(max);
    Genere {
        texte: n.to_string(),
        valeur: Some(BigInt::from(n)),
    }
}

fn combine(a: Genere, sym: &str, b: Genere) -> Genere {
    let texte = format!("({}{sym}{})", a.texte, b.texte);
    let valeur = match (a.valeur, b.valeur) {
        (Some(x), Some(y)) => match sym {
            "+" => Some(x + y),
            "-" => Some(x - y),
            "*" => Some(x * y),
            "/" if y.is_zero() => None,
            "/" => Some(x / y),
            "%" if y.is_zero() => None,
            "%" => Some(x % y),
            _ => unreachable!(),
        },
        _ => None,
    };
    Genere { texte, valeur }
}

fn gen_expr(rng: &mut Rng, depth: usize, max: u32) -> Genere {
    if depth == 0 {
        return gen_atom(rng, max);
    }

    match rng.pick(7) {
        0 => gen_atom(rng, max),
        1 => combine(gen_expr(rng, depth - 1, max), "+", gen_expr(rng, depth - 1, max)),
        2 => combine(gen_expr(rng, depth - 1, max), "-", gen_expr(rng, depth - 1, max)),
        3 => combine(gen_expr(rng, depth - 1, max), "*", gen_expr(rng, depth - 1, max)),
        4 => combine(gen_expr(rng, depth - 1, max), "/", gen_expr(rng, depth - 1, max)),
        5 => combine(gen_expr(rng, depth - 1, max), "%", gen_expr(rng, depth - 1, max)),
        _ => {
            // exposant littéral borné (pas de négatif, pas d'explosion)
            let base = gen_expr(rng, depth - 1, max);
            let n = rng.pick(4);
            let valeur = base.valeur.map(|b| b.pow(n));
            Genere {
                texte: format!("({}^{n})", base.texte),
                valeur,
            }
        }
    }
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
fn fuzz_safe_reference_multi_chiffres() {
    let t0 = Instant::now();
    let max = Duration::from_secs(10);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let g = gen_expr(&mut rng, 5, 100);

        match (evaluer(&g.texte), g.valeur) {
            (Ok(v), Some(attendu)) => {
                assert_eq!(v, attendu, "expr={:?}", g.texte);
                seen_ok += 1;
            }
            (Err(ErreurEval::DivisionParZero), None) => seen_err += 1,
            (obtenu, attendu) => {
                panic!("expr={:?} obtenu={obtenu:?} attendu={attendu:?}", g.texte)
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_reference_chiffre_unique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(10);

    let unique = Options::default().avec_chiffres(ModeChiffres::Unique);
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..120 {
        budget(t0, max);

        // atomes 0..=9 : les deux modes doivent coïncider
        let g = gen_expr(&mut rng, 4, 10);

        let obtenu = eval_expression(&g.texte, &unique).map(|(v, _d)| v);
        match g.valeur {
            Some(attendu) => assert_eq!(obtenu, Ok(attendu), "expr={:?}", g.texte),
            None => assert_eq!(obtenu, Err(ErreurEval::DivisionParZero), "expr={:?}", g.texte),
        }
        assert_eq!(obtenu, evaluer(&g.texte), "expr={:?}", g.texte);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..50 {
        let ga = gen_expr(&mut a, 4, 50);
        let gb = gen_expr(&mut b, 4, 50);
        assert_eq!(ga.texte, gb.texte);
        assert_eq!(evaluer(&ga.texte), evaluer(&gb.texte));
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(10);

    let expr = somme_balancee("7", 1000);
    budget(t0, max);

    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, BigInt::from(7000));
}

#[test]
fn fuzz_safe_chaine_gauche() {
    // 1+1+...+1 : arbre en peigne (profondeur = nombre de termes)
    let expr = ["1"; 100_000].join("+");
    assert_eq!(evaluer(&expr), Ok(BigInt::from(100_000)));

    let (_v, d) = eval_expression(&expr, &Options::default()).unwrap();
    assert!(d.arbre.starts_with("((((1 + 1) + 1) + 1)"));
}

#[test]
fn fuzz_safe_chaine_droite() {
    // 2^1^1^...^1 : associativité droite, peigne à droite
    let expr = format!("2{}", "^1".repeat(99_999));
    assert_eq!(evaluer(&expr), Ok(BigInt::from(2)));

    // 100000-1-1-...-1 : associativité gauche, sinon le signe alternerait
    let expr = format!("100000{}", "-1".repeat(99_999));
    assert_eq!(evaluer(&expr), Ok(BigInt::from(1)));
}
