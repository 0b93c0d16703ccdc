//! Calculatrice Arbre — évaluateur d'expressions entières.
//!
//! infixe -> jetons -> RPN (shunting-yard) -> arbre binaire -> entier
//!
//! ```
//! use calculatrice_arbre::noyau::evaluer;
//! use num_bigint::BigInt;
//!
//! assert_eq!(evaluer("((5*6)/2)+(6/2)"), Ok(BigInt::from(18)));
//! ```

pub mod noyau;
