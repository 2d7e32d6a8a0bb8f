// src/noyau/expr.rs
//
// AST flottant (f64).
// - Nombre : littéral décimal
// - Pi / Euler : constantes
// - fonctions unaires : Sqrt, Log10, Ln, Sin, Cos, Tan
// - binaires : Add, Sub, Mul, Div, Pow
//
// IMPORTANT (SAFE):
// - evaluer() est une marche PURE : aucun effet de bord, la saisie ne
//   devient jamais du code exécuté.
// - Les cas limites (÷ zéro calculé, √ de négatif) produisent ±∞/NaN
//   et sont classés APRÈS coup par format::classer.

use std::f64::consts;

use super::trig::{cos_u, sin_u, tan_u, UniteAngle};

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Pi,
    Euler,

    Sqrt(Box<Expr>),
    Log10(Box<Expr>),
    Ln(Box<Expr>),

    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évalue l'arbre sous l'unité d'angle donnée.
    ///
    /// L'unité paramétrise seulement sin/cos/tan : le facteur de conversion
    /// s'applique à l'argument avant la primitive (trig.rs).
    pub fn evaluer(&self, unite: UniteAngle) -> f64 {
        use Expr::*;

        match self {
            Nombre(v) => *v,
            Pi => consts::PI,
            Euler => consts::E,

            Sqrt(x) => x.evaluer(unite).sqrt(),
            Log10(x) => x.evaluer(unite).log10(),
            Ln(x) => x.evaluer(unite).ln(),

            Sin(x) => sin_u(x.evaluer(unite), unite),
            Cos(x) => cos_u(x.evaluer(unite), unite),
            Tan(x) => tan_u(x.evaluer(unite), unite),

            Add(a, b) => a.evaluer(unite) + b.evaluer(unite),
            Sub(a, b) => a.evaluer(unite) - b.evaluer(unite),
            Mul(a, b) => a.evaluer(unite) * b.evaluer(unite),
            Div(a, b) => a.evaluer(unite) / b.evaluer(unite),
            Pow(a, b) => a.evaluer(unite).powf(b.evaluer(unite)),
        }
    }
}
