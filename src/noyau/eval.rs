//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> tokenize -> RPN -> Expr -> marche f64 -> classer -> formater
//!
//! Remarque : l'unité d'angle est un paramètre du pipeline, pas un état
//! caché — la même saisie peut donner deux valeurs selon DEG/RAD.

use tracing::trace;

use super::canon::normaliser;
use super::erreurs::ErreurCalc;
use super::format::{classer, formater};
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};
use super::trig::UniteAngle;

/// Garde-fou : longueur maximale d'une saisie évaluable (anti-abus).
const LONGUEUR_MAX: usize = 4096;

/// API publique : évalue une saisie calculatrice et retourne la valeur finie.
///
/// Toute faute ressort comme UNE des cinq `ErreurCalc` — jamais de panique,
/// jamais d'exécution de la saisie comme code.
pub fn eval_expression(saisie: &str, unite: UniteAngle) -> Result<f64, ErreurCalc> {
    let s = saisie.trim();
    if s.is_empty() {
        return Err(ErreurCalc::FormatInvalide);
    }
    if s.chars().count() > LONGUEUR_MAX {
        return Err(ErreurCalc::ErreurGenerale);
    }

    // 1) Forme canonique (+ pré-contrôle "/0" littéral)
    let canon = normaliser(s)?;

    // 2) Jetons
    let jetons = tokenize(&canon)?;

    // 3) RPN puis AST
    let rpn = to_rpn(&jetons)?;
    let expr = from_rpn(&rpn)?;

    // 4) Marche pure + classification (NaN / ±∞)
    let brut = expr.evaluer(unite);
    trace!(%canon, brut, ?unite, "pipeline");

    classer(brut)
}

/// Pipeline complet jusqu'à la chaîne affichable (12 chiffres significatifs).
pub fn eval_affichage(saisie: &str, unite: UniteAngle) -> Result<String, ErreurCalc> {
    eval_expression(saisie, unite).map(formater)
}
