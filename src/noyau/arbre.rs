// src/noyau/arbre.rs
//
// Arbre binaire d'expression.
// - from_rpn : RPN -> Arbre<Tok> (pile de sous-arbres)
// - evaluate : parcours postfixe + pile de valeurs propre à l'appel
//
// IMPORTANT:
// - chaque Noeud possède ses deux enfants (pas de partage, pas de cycle)
// - aucune pile globale : deux évaluations concurrentes ne partagent rien
// - aucun parcours récursif (taille, profondeur, affichage, égalité, évaluation, drop) :
//   une chaîne 1+1+...+1 donne un arbre aussi haut que long, la pile d'appels n'y survivrait pas

use std::fmt;
use std::mem;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use super::erreur::ErreurEval;
use super::jetons::{Operateur, Tok};

/// Garde-fou : taille maximale (en bits) d'un résultat de puissance.
const MAX_BITS_PUISSANCE: u64 = 1 << 20;

#[derive(Debug)]
pub enum Arbre<T> {
    Vide,
    Noeud(Box<Arbre<T>>, T, Box<Arbre<T>>),
}

/// Parcours postfixe explicite : Entrer descend, Sortir traite le noeud.
#[derive(Copy, Clone)]
enum Marque<'a> {
    Entrer(&'a Arbre<Tok>),
    Sortir(&'a Tok),
}

impl<T> Arbre<T> {
    pub fn feuille(valeur: T) -> Self {
        Arbre::Noeud(Box::new(Arbre::Vide), valeur, Box::new(Arbre::Vide))
    }

    pub fn noeud(gauche: Arbre<T>, valeur: T, droite: Arbre<T>) -> Self {
        Arbre::Noeud(Box::new(gauche), valeur, Box::new(droite))
    }

    pub fn est_vide(&self) -> bool {
        matches!(self, Arbre::Vide)
    }

    /// Nombre de noeuds.
    pub fn taille(&self) -> usize {
        let mut pile: Vec<&Arbre<T>> = vec![self];
        let mut n = 0usize;
        while let Some(a) = pile.pop() {
            if let Arbre::Noeud(g, _, d) = a {
                n += 1;
                pile.push(&**g);
                pile.push(&**d);
            }
        }
        n
    }

    /// Hauteur (0 pour l'arbre vide, 1 pour une feuille).
    pub fn profondeur(&self) -> usize {
        let mut pile: Vec<(&Arbre<T>, usize)> = vec![(self, 1)];
        let mut max = 0usize;
        while let Some((a, niveau)) = pile.pop() {
            if let Arbre::Noeud(g, _, d) = a {
                max = max.max(niveau);
                pile.push((&**g, niveau + 1));
                pile.push((&**d, niveau + 1));
            }
        }
        max
    }
}

/// Drop itératif : on détache les enfants avant de libérer chaque noeud.
impl<T> Drop for Arbre<T> {
    fn drop(&mut self) {
        let mut pile: Vec<Arbre<T>> = Vec::new();
        if let Arbre::Noeud(g, _, d) = self {
            pile.push(mem::replace(&mut **g, Arbre::Vide));
            pile.push(mem::replace(&mut **d, Arbre::Vide));
        }
        while let Some(mut a) = pile.pop() {
            if let Arbre::Noeud(g, _, d) = &mut a {
                pile.push(mem::replace(&mut **g, Arbre::Vide));
                pile.push(mem::replace(&mut **d, Arbre::Vide));
            }
            // `a` n'a plus que des enfants vides ici
        }
    }
}

impl<T: PartialEq> PartialEq for Arbre<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pile: Vec<(&Arbre<T>, &Arbre<T>)> = vec![(self, other)];
        while let Some(paire) = pile.pop() {
            match paire {
                (Arbre::Vide, Arbre::Vide) => {}
                (Arbre::Noeud(g1, v1, d1), Arbre::Noeud(g2, v2, d2)) => {
                    if v1 != v2 {
                        return false;
                    }
                    pile.push((&**g1, &**g2));
                    pile.push((&**d1, &**d2));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for Arbre<T> {}

/// Affichage infixe entièrement parenthésé : ((5 * 6) / 2).
impl<T: fmt::Display> fmt::Display for Arbre<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Etape<'a, T> {
            Entrer(&'a Arbre<T>),
            Operateur(&'a T),
            Fermer,
        }

        let mut pile: Vec<Etape<'_, T>> = vec![Etape::Entrer(self)];
        while let Some(etape) = pile.pop() {
            match etape {
                Etape::Entrer(Arbre::Vide) => {}
                Etape::Entrer(Arbre::Noeud(g, v, d)) => {
                    if g.est_vide() && d.est_vide() {
                        write!(f, "{v}")?;
                    } else {
                        f.write_str("(")?;
                        pile.push(Etape::Fermer);
                        pile.push(Etape::Entrer(&**d));
                        pile.push(Etape::Operateur(v));
                        pile.push(Etape::Entrer(&**g));
                    }
                }
                Etape::Operateur(v) => write!(f, " {v} ")?,
                Etape::Fermer => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

/// Construit l'arbre à partir d'une RPN.
///
/// - opérande  => feuille empilée
/// - opérateur => dépile droite puis gauche, empile Noeud(gauche, op, droite)
/// - RPN vide  => Arbre::Vide
pub fn from_rpn(rpn: &[Tok]) -> Result<Arbre<Tok>, ErreurEval> {
    let mut pile: Vec<Arbre<Tok>> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(_) => pile.push(Arbre::feuille(tok)),

            Tok::Op(_) => {
                let droite = pile.pop().ok_or(ErreurEval::OperandesInsuffisants)?;
                let gauche = pile.pop().ok_or(ErreurEval::OperandesInsuffisants)?;
                pile.push(Arbre::noeud(gauche, tok, droite));
            }

            // une parenthèse en RPN vient d'une entrée mal fermée
            Tok::LPar | Tok::RPar => return Err(ErreurEval::ParenthesesDesequilibrees),
        }
    }

    if pile.len() > 1 {
        return Err(ErreurEval::OperandesExcedentaires);
    }
    Ok(pile.pop().unwrap_or(Arbre::Vide))
}

/// Évalue l'arbre (parcours postfixe : gauche, droite, noeud).
pub fn evaluate(arbre: &Arbre<Tok>) -> Result<BigInt, ErreurEval> {
    let mut pile: Vec<Marque<'_>> = vec![Marque::Entrer(arbre)];
    let mut valeurs: Vec<BigInt> = Vec::new();

    while let Some(m) = pile.pop() {
        match m {
            Marque::Entrer(Arbre::Vide) => {}
            Marque::Entrer(Arbre::Noeud(gauche, valeur, droite)) => {
                pile.push(Marque::Sortir(valeur));
                pile.push(Marque::Entrer(&**droite));
                pile.push(Marque::Entrer(&**gauche));
            }
            Marque::Sortir(valeur) => match valeur {
                Tok::Num(n) => valeurs.push(n.clone()),
                Tok::Op(op) => {
                    let b = valeurs.pop().ok_or(ErreurEval::OperandesInsuffisants)?;
                    let a = valeurs.pop().ok_or(ErreurEval::OperandesInsuffisants)?;
                    valeurs.push(applique(*op, a, b)?);
                }
                Tok::LPar | Tok::RPar => return Err(ErreurEval::ParenthesesDesequilibrees),
            },
        }
    }

    valeurs.pop().ok_or(ErreurEval::OperandesInsuffisants)
}

/// a op b (division et modulo tronqués vers zéro, comme BigInt).
fn applique(op: Operateur, a: BigInt, b: BigInt) -> Result<BigInt, ErreurEval> {
    match op {
        Operateur::Add => Ok(a + b),
        Operateur::Sub => Ok(a - b),
        Operateur::Mul => Ok(a * b),
        Operateur::Div | Operateur::Mod if b.is_zero() => Err(ErreurEval::DivisionParZero),
        Operateur::Div => Ok(a / b),
        Operateur::Mod => Ok(a % b),
        Operateur::Pow => puissance(a, b),
    }
}

fn puissance(base: BigInt, exposant: BigInt) -> Result<BigInt, ErreurEval> {
    let n = exposant
        .to_u32()
        .ok_or_else(|| ErreurEval::ExposantInvalide(exposant.clone()))?;

    // base^n a au moins (bits - 1) * n + 1 bits ; 0, 1 et -1 restent bornés
    let bits = base.bits();
    if bits > 1 && (bits - 1).saturating_mul(u64::from(n)) >= MAX_BITS_PUISSANCE {
        return Err(ErreurEval::ResultatTropGrand);
    }
    Ok(base.pow(n))
}
