//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline et la machine à états sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - séquences et chaînes bornées
//! - budget temps global
//! - invariants clés :
//!   * jamais de panique, toute faute ressort en `ErreurCalc`
//!   * l'affichage n'est jamais vide
//!   * un aperçu n'existe que si la saisie contient opérateur/fonction
//!   * l'historique ne grandit que sur validation réussie
//!   * même saisie + même unité => même issue

use std::time::{Duration, Instant};

use super::eval::eval_affichage;
use super::saisie::{Fonction, Session, Touche};
use super::trig::UniteAngle;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération bornée ------------------------ */

fn touche_aleatoire(rng: &mut Rng) -> Touche {
    match rng.pick(18) {
        0..=5 => Touche::Chiffre((rng.pick(10)) as u8),
        6 => Touche::Point,
        7 | 8 => {
            let ops = ['+', '-', '×', '÷', '%', '^'];
            Touche::Operateur(ops[rng.pick(6) as usize])
        }
        9 => Touche::Constante(if rng.pick(2) == 0 { 'π' } else { 'e' }),
        10 => {
            let fs = [
                Fonction::Sin,
                Fonction::Cos,
                Fonction::Tan,
                Fonction::Log,
                Fonction::Ln,
                Fonction::Racine,
            ];
            Touche::Fonction(fs[rng.pick(6) as usize])
        }
        11 => Touche::ParFermante,
        12 => Touche::Signe,
        13 => Touche::Retour,
        14 => Touche::Egal,
        15 => Touche::BasculeAngle,
        16 => Touche::MemoirePlus,
        _ => Touche::MemoireRappel,
    }
}

fn chaine_aleatoire(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: [char; 24] = [
        '0', '1', '2', '7', '9', '.', '+', '-', '×', '÷', '%', '^', '(', ')', 'π', 'e', 's', 'i',
        'n', 'l', 'o', 'g', '√', '#',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn contient_operateur_ou_fonction(texte: &str) -> bool {
    texte
        .chars()
        .any(|c| matches!(c, '+' | '-' | '×' | '÷' | '%' | '^' | '('))
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_pipeline_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xCA1C);

    for _ in 0..600 {
        let longueur = 1 + rng.pick(40) as usize;
        let saisie = chaine_aleatoire(&mut rng, longueur);

        // l'issue est soit une chaîne, soit UNE des cinq erreurs — jamais
        // une panique ; on vérifie aussi le déterminisme
        let a = eval_affichage(&saisie, UniteAngle::Degres);
        let b = eval_affichage(&saisie, UniteAngle::Degres);
        assert_eq!(a, b, "saisie={saisie:?}");

        if let Ok(affiche) = a {
            assert!(!affiche.is_empty(), "saisie={saisie:?}");
            // re-formatage stable : la sortie re-parse en flottant fini
            let v: f64 = affiche.parse().unwrap_or_else(|_| {
                panic!("sortie non numérique {affiche:?} pour {saisie:?}")
            });
            assert!(v.is_finite(), "saisie={saisie:?}");
        }

        budget(t0, max);
    }
}

#[test]
fn fuzz_pave_invariants_machine() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xF00D);

    for _ in 0..120 {
        let mut session = Session::new();
        let mut valide_reussies = 0usize;

        for _ in 0..200 {
            let avant_historique = session.historique().len();
            let touche = touche_aleatoire(&mut rng);
            session.appuyer(touche);

            // l'affichage n'est jamais vide
            let affichage = session.texte_affichage();
            assert!(!affichage.is_empty());

            // l'historique ne grandit que sur "=", d'au plus une entrée
            let apres_historique = session.historique().len();
            if apres_historique > avant_historique {
                assert_eq!(apres_historique, avant_historique + 1);
                assert_eq!(touche, Touche::Egal);
                valide_reussies += 1;
            }

            // aperçu interdit sur un opérande nu
            if let Some(_apercu) = session.apercu() {
                assert!(
                    contient_operateur_ou_fonction(&affichage),
                    "apercu sur opérande nu: {affichage:?}"
                );
                assert!(!session.en_erreur());
            }

            budget(t0, max);
        }

        assert_eq!(session.historique().len(), valide_reussies);
    }
}

#[test]
fn fuzz_determinisme_machine() {
    let mut a = Session::new();
    let mut b = Session::new();
    let mut rng_a = Rng::new(42);
    let mut rng_b = Rng::new(42);

    for _ in 0..500 {
        a.appuyer(touche_aleatoire(&mut rng_a));
        b.appuyer(touche_aleatoire(&mut rng_b));
        assert_eq!(a.texte_affichage(), b.texte_affichage());
        assert_eq!(a.apercu(), b.apercu());
        assert_eq!(a.memoire(), b.memoire());
    }
}
