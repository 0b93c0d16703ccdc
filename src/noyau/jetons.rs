// src/noyau/jetons.rs
//
// Modèle de jetons + tokenisation.
// - Operateur : + - / * % ^ avec précédence et associativité
// - Tok       : ( ) opérateur opérande
// - ConstructeurInfixe : suite de jetons construite par ajouts successifs

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;

use super::erreur::ErreurEval;
use super::options::ModeChiffres;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Add,
    Sub,
    Div,
    Mul,
    Mod,
    Pow,
}

impl Operateur {
    pub const TOUS: [Operateur; 6] = [
        Operateur::Add,
        Operateur::Sub,
        Operateur::Div,
        Operateur::Mul,
        Operateur::Mod,
        Operateur::Pow,
    ];

    /// Symbole -> opérateur (None si inconnu).
    pub fn from_symbol(s: &str) -> Option<Operateur> {
        match s {
            "+" => Some(Operateur::Add),
            "-" => Some(Operateur::Sub),
            "/" => Some(Operateur::Div),
            "*" => Some(Operateur::Mul),
            "%" => Some(Operateur::Mod),
            "^" => Some(Operateur::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operateur::Add => "+",
            Operateur::Sub => "-",
            Operateur::Div => "/",
            Operateur::Mul => "*",
            Operateur::Mod => "%",
            Operateur::Pow => "^",
        }
    }

    /// Plus grand = lie plus fort.
    pub fn precedence(self) -> i32 {
        match self {
            Operateur::Add | Operateur::Sub => 0,
            Operateur::Div | Operateur::Mul | Operateur::Mod => 5,
            Operateur::Pow => 10,
        }
    }

    pub fn associativite(self) -> Associativite {
        match self {
            Operateur::Pow => Associativite::Droite,
            _ => Associativite::Gauche,
        }
    }

    /// Compare les précédences : `is_le()` / `is_lt()` donnent les deux tests du shunting-yard.
    pub fn cmp_precedence(self, other: Operateur) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    LPar,
    RPar,
    Op(Operateur),
    Num(BigInt),
}

impl Tok {
    /// Relit la forme imprimée d'un jeton (inverse de Display).
    pub fn parse(s: &str) -> Option<Tok> {
        match s {
            "(" => Some(Tok::LPar),
            ")" => Some(Tok::RPar),
            _ => {
                if let Some(op) = Operateur::from_symbol(s) {
                    return Some(Tok::Op(op));
                }
                if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                    return BigInt::parse_bytes(s.as_bytes(), 10).map(Tok::Num);
                }
                None
            }
        }
    }

    pub fn operateur(&self) -> Option<Operateur> {
        match self {
            Tok::Op(op) => Some(*op),
            _ => None,
        }
    }

    pub fn is_lpar(&self) -> bool {
        matches!(self, Tok::LPar)
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::Num(n) => write!(f, "{n}"),
        }
    }
}

/// Suite infixe construite par ajouts (ordre d'insertion = seul ordre utile).
#[derive(Clone, Debug, Default)]
pub struct ConstructeurInfixe {
    expression: Vec<Tok>,
}

impl ConstructeurInfixe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_operator(&mut self, op: Operateur) -> &mut Self {
        self.expression.push(Tok::Op(op));
        self
    }

    pub fn add_operand(&mut self, n: impl Into<BigInt>) -> &mut Self {
        self.expression.push(Tok::Num(n.into()));
        self
    }

    pub fn add_open_bracket(&mut self) -> &mut Self {
        self.expression.push(Tok::LPar);
        self
    }

    pub fn add_close_bracket(&mut self) -> &mut Self {
        self.expression.push(Tok::RPar);
        self
    }

    pub fn build(self) -> Vec<Tok> {
        self.expression
    }
}

/// Tokenize une chaîne en jetons.
/// - espaces retirés avant tout
/// - caractère non classable : ignoré
/// - chiffres : un par jeton (Unique) ou suite maximale (Multiple)
pub fn tokenize(s: &str, mode: ModeChiffres) -> Result<Vec<Tok>, ErreurEval> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut b = ConstructeurInfixe::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if let Some(op) = Operateur::from_symbol(c.encode_utf8(&mut [0; 4])) {
            b.add_operator(op);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            i += 1;
            if mode == ModeChiffres::Multiple {
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let run: String = chars[start..i].iter().collect();
            let n = BigInt::parse_bytes(run.as_bytes(), 10)
                .ok_or_else(|| ErreurEval::OperandeMalforme(run.clone()))?;
            b.add_operand(n);
            continue;
        }

        match c {
            '(' => {
                b.add_open_bracket();
            }
            ')' => {
                b.add_close_bracket();
            }
            _ => tracing::trace!(caractere = %c, position = i, "caractère ignoré"),
        }
        i += 1;
    }

    Ok(b.build())
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
