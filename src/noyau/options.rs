// src/noyau/options.rs
//
// Paramètres du pipeline (aucun état global).

/// Lecture des chiffres par le tokenizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeChiffres {
    /// Un chiffre = un opérande ("12" => 1, 2).
    Unique,
    /// Suite maximale de chiffres = un opérande ("12" => 12).
    #[default]
    Multiple,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub chiffres: ModeChiffres,
}

impl Options {
    pub fn avec_chiffres(mut self, chiffres: ModeChiffres) -> Self {
        self.chiffres = chiffres;
        self
    }
}
