//! src/app/etat.rs
//!
//! État console (sans rendu, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche)
//! et offrir des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_arbre::noyau::{DemarcheNoyau, Options};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // entier en texte
    pub erreur: String,   // message d’erreur (si parsing/éval échoue)

    // --- démarche (jetons / RPN / arbre) ---
    pub demarche: DemarcheNoyau,

    // --- paramètres ---
    pub options: Options,
    pub montrer_demarche: bool,
}

impl AppCalc {
    pub fn new(options: Options, montrer_demarche: bool) -> Self {
        Self {
            options,
            montrer_demarche,
            ..Self::default()
        }
    }

    /// Effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = DemarcheNoyau::default();
    }

    /// Placer une erreur : le résultat et la démarche ne sont plus fiables.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.clear_resultats();
        self.erreur = msg.into();
    }

    /// Déposer un résultat complet.
    pub fn set_resultats(&mut self, resultat: impl Into<String>, demarche: DemarcheNoyau) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
    }

    pub fn en_erreur(&self) -> bool {
        !self.erreur.is_empty()
    }
}
