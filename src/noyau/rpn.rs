// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> RPN (postfix).
//
// Règles:
// - opérande          => sortie directe
// - '('               => pile
// - ')'               => dépile vers la sortie jusqu'à '(' (jetée)
// - opérateur op      => dépile les opérateurs du haut tant que
//                          (op gauche && prec(op) <= prec(haut))
//                       || (op droite && prec(op) <  prec(haut))
//                        puis empile op
// - fin               => vide la pile
//
// Le '<' strict pour l'associativité droite fait que 2^3^2 = 2^(3^2).

use super::erreur::ErreurEval;
use super::jetons::{Associativite, Operateur, Tok};

fn doit_depiler(op: Operateur, haut: Operateur) -> bool {
    let ord = op.cmp_precedence(haut);
    match op.associativite() {
        Associativite::Gauche => ord.is_le(),
        Associativite::Droite => ord.is_lt(),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [LPar, 5, *, 6, RPar, /, 2]
///   rpn:    [5, 6, *, 2, /]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu'à '(' ; pile vide avant => ')' orpheline
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if top.is_lpar() {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(ErreurEval::ParenthesesDesequilibrees);
                }
            }

            Tok::Op(op) => {
                // on inspecte le haut sans dépiler; un non-opérateur (ex: '(') bloque
                while let Some(haut) = ops.last().and_then(Tok::operateur) {
                    if !doit_depiler(op, haut) {
                        break;
                    }
                    out.push(Tok::Op(haut));
                    ops.pop();
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if top.is_lpar() {
            return Err(ErreurEval::ParenthesesDesequilibrees);
        }
        out.push(top);
    }

    tracing::debug!(entree = tokens.len(), sortie = out.len(), "shunting-yard terminé");
    Ok(out)
}
