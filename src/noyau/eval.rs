//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> Arbre<Tok> -> évaluation postfixe -> entier
//!
//! Chaque étape est pure ; les piles de travail vivent le temps d'un appel.

use num_bigint::BigInt;

use super::arbre::{evaluate, from_rpn};
use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize};
use super::options::Options;
use super::rpn::to_rpn;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

/// API publique : évalue une expression et retourne l'entier + la démarche
/// (jetons, RPN, arbre parenthésé).
pub fn eval_expression(
    expr_str: &str,
    options: &Options,
) -> Result<(BigInt, DemarcheNoyau), ErreurEval> {
    // 1) Jetons
    let jetons = tokenize(expr_str, options.chiffres)?;
    tracing::debug!(n = jetons.len(), "jetons");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Arbre
    let arbre = from_rpn(&rpn)?;
    tracing::debug!(noeuds = arbre.taille(), profondeur = arbre.profondeur(), "arbre construit");

    // 4) Valeur
    let valeur = evaluate(&arbre)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        arbre: arbre.to_string(),
    };

    Ok((valeur, d))
}

/// Raccourci : options par défaut, sans démarche.
pub fn evaluer(expr_str: &str) -> Result<BigInt, ErreurEval> {
    eval_expression(expr_str, &Options::default()).map(|(valeur, _d)| valeur)
}
