// src/app.rs
//
// Calculatrice Arbre — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Relier l’état au noyau (une évaluation par entrée)
// - Boucle console : arguments OU lignes de stdin

pub mod etat;
pub mod vue;

use std::io::{BufRead, Write};

use anyhow::Context;
use calculatrice_arbre::noyau;

pub use etat::AppCalc;

impl AppCalc {
    /// Évalue `entree` via le noyau et dépose résultat ou erreur dans l’état.
    pub fn eval_via_noyau(&mut self, entree: &str) {
        self.entree = entree.to_string();

        match noyau::eval_expression(&self.entree, &self.options) {
            Ok((valeur, d)) => self.set_resultats(valeur.to_string(), d),
            Err(e) => {
                tracing::debug!(entree = %self.entree, erreur = %e, "évaluation refusée");
                self.set_erreur(e.to_string());
            }
        }
    }

    /// Évalue chaque expression et écrit son rendu.
    /// Retourne le nombre d’expressions en erreur.
    pub fn executer<I, S>(&mut self, expressions: I, out: &mut impl Write) -> anyhow::Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut echecs = 0usize;
        for expr in expressions {
            self.eval_via_noyau(expr.as_ref());
            if self.en_erreur() {
                echecs += 1;
            }
            self.rendre(out).context("écriture du résultat")?;
        }
        Ok(echecs)
    }

    /// Mode interactif : une expression par ligne (lignes vides ignorées).
    pub fn executer_lignes(
        &mut self,
        entree: impl BufRead,
        out: &mut impl Write,
    ) -> anyhow::Result<usize> {
        let mut echecs = 0usize;
        for ligne in entree.lines() {
            let ligne = ligne.context("lecture de l’entrée standard")?;
            if ligne.trim().is_empty() {
                continue;
            }
            echecs += self.executer([ligne], out)?;
            out.flush().context("écriture du résultat")?;
        }
        Ok(echecs)
    }
}
