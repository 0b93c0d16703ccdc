// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// Aucune condition n'est “avalée” en 0 : tout remonte à l'appelant.

use num_bigint::BigInt;
use thiserror::Error;

use super::jetons::Operateur;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Suite de chiffres illisible comme entier.
    #[error("nombre invalide: '{0}'")]
    OperandeMalforme(String),

    /// ')' sans '(' correspondante, ou '(' jamais fermée.
    #[error("parenthèses non équilibrées")]
    ParenthesesDesequilibrees,

    /// Opérateur atteint avec moins de deux opérandes (ou entrée vide).
    #[error("opérandes insuffisants")]
    OperandesInsuffisants,

    /// Plusieurs sous-arbres restent après construction (ex: "1 2" sans opérateur).
    #[error("opérandes en trop (opérateur manquant)")]
    OperandesExcedentaires,

    #[error("division par zéro")]
    DivisionParZero,

    /// Jamais produite par `evaluate` : `%` et `^` sont implémentés
    /// (voir DESIGN.md, « Modulo / Power »). Gardée pour les appelants
    /// qui filtrent sur la taxonomie complète.
    #[error("opérateur non supporté: '{0}'")]
    OperateurNonSupporte(Operateur),

    /// Exposant négatif ou trop grand pour u32.
    #[error("exposant invalide: {0}")]
    ExposantInvalide(BigInt),

    /// Garde-fou sur la taille d'une puissance.
    #[error("résultat trop grand")]
    ResultatTropGrand,
}
