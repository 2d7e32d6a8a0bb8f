//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés observables du moteur sans faire chauffer
//! la machine.
//!
//! Notes importantes (aligné avec l'état actuel du noyau) :
//! - Le pré-contrôle de division par zéro est SYNTAXIQUE : "1÷0" est refusé
//!   avant évaluation, "1÷(1-1)" passe et ressort en ±∞ ("Value too large").
//!   Les deux côtés sont épinglés ici.
//! - L'aperçu n'existe que si la saisie contient un opérateur ou une
//!   fonction ; un opérande nu n'en a jamais.
//! - L'unité d'angle ne touche que sin/cos/tan (facteur sur l'argument).

use super::erreurs::ErreurCalc;
use super::eval::{eval_affichage, eval_expression};
use super::format::formater;
use super::saisie::{Fonction, Session, Touche};
use super::trig::UniteAngle;

fn eval_ok(expr: &str, unite: UniteAngle) -> f64 {
    eval_expression(expr, unite).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, unite: UniteAngle, attendu: f64) {
    let obtenu = eval_ok(expr, unite);
    if (obtenu - attendu).abs() > 1e-9 {
        panic!("expr={expr:?} obtenu={obtenu} attendu={attendu}");
    }
}

fn assert_erreur(expr: &str, attendue: ErreurCalc) {
    assert_eq!(
        eval_expression(expr, UniteAngle::Degres),
        Err(attendue),
        "expr={expr:?}"
    );
}

/* ------------------------ Unité d'angle ------------------------ */

#[test]
fn sci_sin_90_selon_unite() {
    assert_proche("sin(90)", UniteAngle::Degres, 1.0);
    assert_proche("sin(90)", UniteAngle::Radians, 0.8939966636);
}

#[test]
fn sci_angles_remarquables_en_degres() {
    assert_proche("sin(30)", UniteAngle::Degres, 0.5);
    assert_proche("cos(60)", UniteAngle::Degres, 0.5);
    assert_proche("tan(45)", UniteAngle::Degres, 1.0);
    assert_proche("sin(0)", UniteAngle::Degres, 0.0);
}

#[test]
fn sci_radians_pi() {
    assert_proche("sin(π)", UniteAngle::Radians, 0.0);
    assert_proche("cos(π)", UniteAngle::Radians, -1.0);
    assert_proche("sin(π÷2)", UniteAngle::Radians, 1.0);
}

#[test]
fn sci_unite_sans_effet_hors_trig() {
    // log/ln/√ et l'arithmétique ignorent l'unité
    for expr in ["log(100)", "ln(e)", "√(2)", "2^10", "1÷3"] {
        assert_eq!(
            eval_affichage(expr, UniteAngle::Degres),
            eval_affichage(expr, UniteAngle::Radians),
            "expr={expr:?}"
        );
    }
}

/* ------------------------ Division par zéro : les deux côtés ------------------------ */

#[test]
fn sci_zero_litteral_refuse_avant_evaluation() {
    assert_erreur("1÷0", ErreurCalc::DivisionParZero);
    assert_erreur("5÷0.0", ErreurCalc::DivisionParZero);
    assert_erreur("sin(1÷0)", ErreurCalc::DivisionParZero);
}

#[test]
fn sci_zero_calcule_ressort_en_depassement() {
    assert_erreur("1÷(1-1)", ErreurCalc::Depassement);
    assert_erreur("1÷(0.5-0.5)", ErreurCalc::Depassement);
}

#[test]
fn sci_zero_zero_nan() {
    // 0/0 calculé : NaN => « Invalid input »
    assert_erreur("(1-1)÷(1-1)", ErreurCalc::EntreeInvalide);
}

/* ------------------------ Formatage : bornes et idempotence ------------------------ */

#[test]
fn sci_magnitude_sous_seuil_donne_zero() {
    // sin(π) en radians ≈ 1.22e-16 : écrasé à "0", pas de notation savante
    assert_eq!(eval_affichage("sin(π)", UniteAngle::Radians).unwrap(), "0");
    assert_eq!(eval_affichage("1÷10^13", UniteAngle::Degres).unwrap(), "0");
}

#[test]
fn sci_format_idempotent_sous_reparse() {
    for expr in ["1÷3", "√(2)", "2^0.5", "0.1+0.2", "10÷4"] {
        let affiche = eval_affichage(expr, UniteAngle::Degres).unwrap();
        let reparse: f64 = affiche.parse().unwrap();
        assert_eq!(formater(reparse), affiche, "expr={expr:?}");
    }
}

#[test]
fn sci_format_sans_bruit_flottant() {
    assert_eq!(eval_affichage("0.1+0.2", UniteAngle::Degres).unwrap(), "0.3");
    assert_eq!(
        eval_affichage("√(2)×√(2)", UniteAngle::Degres).unwrap(),
        "2"
    );
}

/* ------------------------ Machine à états : propriétés croisées ------------------------ */

#[test]
fn sci_apercu_absent_sans_operateur() {
    let mut session = Session::new();
    for t in [
        Touche::Chiffre(3),
        Touche::Point,
        Touche::Chiffre(1),
        Touche::Chiffre(4),
    ] {
        session.appuyer(t);
        assert_eq!(session.apercu(), None, "saisie={}", session.texte_affichage());
    }
}

#[test]
fn sci_collapse_operateurs_consecutifs() {
    let mut session = Session::new();
    session.appuyer(Touche::Chiffre(9));
    session.appuyer(Touche::Operateur('+'));
    session.appuyer(Touche::Operateur('-'));
    assert_eq!(session.texte_affichage(), "9-");
    assert!(!session.texte_affichage().contains("+-"));
}

#[test]
fn sci_retour_arriere_tous_prefixes() {
    for (f, prefixe) in [
        (Fonction::Sin, "sin("),
        (Fonction::Cos, "cos("),
        (Fonction::Tan, "tan("),
        (Fonction::Log, "log("),
        (Fonction::Ln, "ln("),
        (Fonction::Racine, "√("),
    ] {
        let mut session = Session::new();
        session.appuyer(Touche::Fonction(f));
        assert_eq!(session.texte_affichage(), prefixe);
        session.appuyer(Touche::Retour);
        assert_eq!(session.texte_affichage(), "0", "prefixe={prefixe:?}");
    }
}

#[test]
fn sci_validation_et_rejeu_historique() {
    let mut session = Session::new();

    // 2+3 = 5, puis 5×2 = 10 en repartant du résultat affiché
    session.appuyer(Touche::Chiffre(2));
    session.appuyer(Touche::Operateur('+'));
    session.appuyer(Touche::Chiffre(3));
    session.appuyer(Touche::Egal);
    assert_eq!(session.texte_affichage(), "5");

    session.appuyer(Touche::Operateur('×'));
    session.appuyer(Touche::Chiffre(2));
    session.appuyer(Touche::Egal);
    assert_eq!(session.texte_affichage(), "10");

    let historique = session.historique();
    assert_eq!(historique.len(), 2);
    assert_eq!(historique[0].expression, "2+3");
    assert_eq!(historique[1].expression, "5×2");
    assert!(historique[0].horodatage < historique[1].horodatage);
}

#[test]
fn sci_memoire_round_trip() {
    let mut session = Session::new();
    session.appuyer(Touche::Chiffre(7));
    session.appuyer(Touche::MemoirePlus);
    let apres_plus = session.memoire();

    session.appuyer(Touche::MemoireMoins);
    assert_eq!(session.memoire(), apres_plus - 7.0);
    assert_eq!(session.memoire(), 0.0);
}

#[test]
fn sci_memoire_sur_saisie_vide_ou_invalide() {
    let mut session = Session::new();
    // vide : M+ cumule 0
    session.appuyer(Touche::MemoirePlus);
    assert_eq!(session.memoire(), 0.0);

    // non évaluable ("5+") : M+ cumule 0, pas d'état d'erreur
    session.appuyer(Touche::Chiffre(5));
    session.appuyer(Touche::Operateur('+'));
    session.appuyer(Touche::MemoirePlus);
    assert_eq!(session.memoire(), 0.0);
    assert!(!session.en_erreur());
}
