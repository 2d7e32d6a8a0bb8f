// src/noyau/trig.rs
//
// Unité d'angle + trig paramétrée pour sin/cos/tan
// ------------------------------------------------
// Le facteur de conversion est appliqué à l'ARGUMENT avant la primitive :
// degrés => π/180, radians => 1.

use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UniteAngle {
    /// Mode de démarrage (convention calculatrice de poche).
    #[default]
    Degres,
    Radians,
}

impl UniteAngle {
    /// Facteur appliqué à l'argument des fonctions trigonométriques.
    pub fn facteur(self) -> f64 {
        match self {
            UniteAngle::Degres => PI / 180.0,
            UniteAngle::Radians => 1.0,
        }
    }

    /// L'autre unité (bouton DEG/RAD).
    pub fn bascule(self) -> UniteAngle {
        match self {
            UniteAngle::Degres => UniteAngle::Radians,
            UniteAngle::Radians => UniteAngle::Degres,
        }
    }

    /// Libellé court pour l'indicateur UI.
    pub fn libelle(self) -> &'static str {
        match self {
            UniteAngle::Degres => "DEG",
            UniteAngle::Radians => "RAD",
        }
    }
}

pub fn sin_u(x: f64, unite: UniteAngle) -> f64 {
    (x * unite.facteur()).sin()
}

pub fn cos_u(x: f64, unite: UniteAngle) -> f64 {
    (x * unite.facteur()).cos()
}

pub fn tan_u(x: f64, unite: UniteAngle) -> f64 {
    (x * unite.facteur()).tan()
}
