//! Noyau entier (arbre d'expression)
//!
//! Organisation interne :
//! - jetons.rs  : opérateurs, jetons, tokenisation
//! - rpn.rs     : shunting-yard (infixe -> RPN)
//! - arbre.rs   : arbre binaire + construction depuis RPN + évaluation
//! - eval.rs    : pipeline complet
//! - erreur.rs  : erreurs typées
//! - options.rs : paramètres (lecture des chiffres)

pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod options;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{eval_expression, evaluer, DemarcheNoyau};
pub use options::{ModeChiffres, Options};
