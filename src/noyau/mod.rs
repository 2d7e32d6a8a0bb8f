//! Noyau flottant — moteur d'évaluation calculatrice
//!
//! Organisation interne :
//! - canon.rs      : glyphes -> forme canonique + équilibrage + pré-contrôle /0
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : AST f64 + marche d'évaluation pure
//! - trig.rs       : unité d'angle (DEG/RAD) + trig paramétrée
//! - format.rs     : classification NaN/±∞ + affichage 12 chiffres
//! - eval.rs       : pipeline complet
//! - erreurs.rs    : taxonomie fermée (cinq libellés contractuels)
//! - saisie.rs     : machine à états du pavé (aperçu, validation)
//! - historique.rs : validations + registre mémoire

pub mod canon;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;
pub mod saisie;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::{eval_affichage, eval_expression};
pub use saisie::{Fonction, Session, Touche};
pub use trig::UniteAngle;
