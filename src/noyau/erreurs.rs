// src/noyau/erreurs.rs
//
// Taxonomie FERMÉE des erreurs d'évaluation.
// Les libellés sont contractuels côté UI (comparaison de chaînes) :
// exactement ces cinq-là, pas un de plus, pas de reformulation.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Syntaxe bancale après normalisation : jeton inattendu, structure
    /// invalide, fonction sans argument…
    #[error("Invalid format")]
    FormatInvalide,

    /// Résultat NaN (ex: √ d'un négatif, 0×∞).
    #[error("Invalid input")]
    EntreeInvalide,

    /// Dénominateur littéral nul, détecté AVANT évaluation.
    #[error("Can't divide by zero")]
    DivisionParZero,

    /// Résultat ±∞ : débordement flottant (inclut les zéros calculés
    /// au dénominateur, que le pré-contrôle ne voit pas).
    #[error("Value too large")]
    Depassement,

    /// Toute autre faute non classée ailleurs (garde-fous du pipeline).
    #[error("Error")]
    ErreurGenerale,
}
