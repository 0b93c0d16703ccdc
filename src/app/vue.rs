// src/app/vue.rs
//
// Vue console : rendu texte de l’état.
// - résultat sur stdout, une ligne par expression
// - erreur préfixée par "erreur:"
// - démarche (optionnelle) indentée sous le résultat

use std::io::{self, Write};

use super::etat::AppCalc;

impl AppCalc {
    /// Écrit l’état courant (résultat ou erreur, puis démarche).
    pub fn rendre(&self, out: &mut impl Write) -> io::Result<()> {
        if self.en_erreur() {
            writeln!(out, "erreur: {}", self.erreur)?;
            return Ok(());
        }

        writeln!(out, "{}", self.resultat)?;

        if self.montrer_demarche {
            Self::champ_demarche(out, "Jetons", &self.demarche.jetons)?;
            Self::champ_demarche(out, "RPN", &self.demarche.rpn)?;
            Self::champ_demarche(out, "Arbre", &self.demarche.arbre)?;
        }
        Ok(())
    }

    fn champ_demarche(out: &mut impl Write, titre: &str, contenu: &str) -> io::Result<()> {
        writeln!(out, "  {titre:<7}: {contenu}")
    }
}
