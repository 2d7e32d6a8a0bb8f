// src/noyau/saisie.rs
//
// Machine à états de la saisie au pavé.
// ------------------------------------
// États : Vide | Saisie(texte) | Erreur(sorte).
// Conventions calculatrice :
// - taper après une erreur efface d'abord l'erreur ("=" reste inerte) ;
// - un opérateur binaire ne peut pas ouvrir une expression (sauf le moins) ;
// - deux opérateurs de suite : le dernier gagne ;
// - le retour arrière retire un jeton LOGIQUE (préfixe fonction entier).
//
// Contrats :
// - `Saisie` ne contient jamais une chaîne vide (on repasse par Vide).
// - Seule la validation ("=") écrit dans l'historique.
// - Vider mémoire/historique ne touche jamais la saisie.

use tracing::debug;

use super::erreurs::ErreurCalc;
use super::eval::{eval_affichage, eval_expression};
use super::format::formater;
use super::historique::{EntreeHistorique, Memoire};
use super::trig::UniteAngle;

/// Opérateurs binaires du pavé (glyphes calculatrice).
const OPERATEURS: [char; 6] = ['+', '-', '×', '÷', '%', '^'];

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Etat {
    #[default]
    Vide,
    Saisie(String),
    Erreur(ErreurCalc),
}

/// Fonctions du pavé ; chacune insère son préfixe "nom(".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Racine,
}

impl Fonction {
    /// Texte inséré dans la saisie (parenthèse ouvrante comprise).
    pub fn prefixe(self) -> &'static str {
        match self {
            Fonction::Sin => "sin(",
            Fonction::Cos => "cos(",
            Fonction::Tan => "tan(",
            Fonction::Log => "log(",
            Fonction::Ln => "ln(",
            Fonction::Racine => "√(",
        }
    }

    /// Préfixes retirés d'un bloc par le retour arrière.
    pub const TOUS_PREFIXES: [&'static str; 6] = ["sin(", "cos(", "tan(", "log(", "ln(", "√("];
}

/// Touches du pavé reconnues par le moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8), // 0..=9
    Point,
    Operateur(char), // + - × ÷ % ^
    Constante(char), // π ou e
    Fonction(Fonction),
    ParOuvrante,
    ParFermante,
    Signe, // ±
    Retour,
    Efface,
    Egal,
    BasculeAngle,
    MemoirePlus,
    MemoireMoins,
    MemoireRappel,
    MemoireEfface,
}

/// Session calculatrice : saisie + aperçu + unité + mémoire + historique.
///
/// Propriété clé : une seule expression « vivante » à la fois, et la seule
/// transition qui produit une entrée d'historique est la validation réussie.
#[derive(Clone, Debug, Default)]
pub struct Session {
    etat: Etat,
    apercu: Option<String>,
    unite: UniteAngle,
    memoire: Memoire,
    historique: Vec<EntreeHistorique>,
    horloge: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lectures ------------------------ */

    /// Texte affiché : la saisie en cours, le libellé d'erreur, ou "0".
    pub fn texte_affichage(&self) -> String {
        match &self.etat {
            Etat::Vide => "0".to_string(),
            Etat::Saisie(t) => t.clone(),
            Etat::Erreur(e) => e.to_string(),
        }
    }

    /// Aperçu non engageant de la saisie en cours (None si indisponible).
    pub fn apercu(&self) -> Option<&str> {
        self.apercu.as_deref()
    }

    pub fn etat(&self) -> &Etat {
        &self.etat
    }

    pub fn en_erreur(&self) -> bool {
        matches!(self.etat, Etat::Erreur(_))
    }

    pub fn unite(&self) -> UniteAngle {
        self.unite
    }

    pub fn memoire(&self) -> f64 {
        self.memoire.rappel()
    }

    pub fn memoire_occupee(&self) -> bool {
        self.memoire.occupee()
    }

    pub fn historique(&self) -> &[EntreeHistorique] {
        &self.historique
    }

    /// Vide l'historique d'un coup ; la saisie en cours n'est pas touchée.
    pub fn vider_historique(&mut self) {
        self.historique.clear();
    }

    /* ------------------------ Transition principale ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        // Taper après une erreur repart d'une saisie vierge ("=" reste inerte).
        if self.en_erreur() {
            if touche == Touche::Egal {
                return;
            }
            self.etat = Etat::Vide;
        }

        match touche {
            Touche::Chiffre(c) => self.inserer(char::from(b'0' + c.min(9))),
            Touche::Point => self.inserer('.'),
            Touche::Constante(c) => self.inserer(c),
            Touche::ParOuvrante => self.inserer('('),
            Touche::ParFermante => self.inserer(')'),
            Touche::Fonction(f) => self.inserer_texte(f.prefixe()),
            Touche::Operateur(op) => self.inserer_operateur(op),
            Touche::Signe => self.basculer_signe(),
            Touche::Retour => self.retour_arriere(),
            Touche::Efface => self.etat = Etat::Vide,
            Touche::Egal => {
                self.valider();
                return; // valider() recalcule déjà l'aperçu
            }
            Touche::BasculeAngle => self.unite = self.unite.bascule(),
            Touche::MemoirePlus => {
                let v = self.valeur_courante();
                self.memoire.ajouter(v);
            }
            Touche::MemoireMoins => {
                let v = self.valeur_courante();
                self.memoire.retirer(v);
            }
            Touche::MemoireRappel => {
                let rappel = formater(self.memoire.rappel());
                self.inserer_texte(&rappel);
            }
            Touche::MemoireEfface => self.memoire.effacer(),
        }

        self.recalculer_apercu();
    }

    /* ------------------------ Actions internes ------------------------ */

    fn inserer(&mut self, c: char) {
        let mut tampon = [0u8; 4];
        self.inserer_texte(c.encode_utf8(&mut tampon));
    }

    fn inserer_texte(&mut self, texte: &str) {
        if texte.is_empty() {
            return;
        }
        match &mut self.etat {
            Etat::Saisie(t) => t.push_str(texte),
            _ => self.etat = Etat::Saisie(texte.to_string()),
        }
    }

    /// Un opérateur binaire ne peut pas ouvrir une expression (sauf '-',
    /// moins unaire) ; sur un opérateur déjà en fin de saisie, le dernier
    /// tapé remplace le précédent.
    fn inserer_operateur(&mut self, op: char) {
        let Etat::Saisie(texte) = &mut self.etat else {
            // Vide (l'erreur est déjà remise à Vide en amont) :
            // seul le moins unaire peut ouvrir une expression.
            if op == '-' {
                self.etat = Etat::Saisie("-".to_string());
            }
            return;
        };

        if let Some(dernier) = texte.chars().last() {
            if OPERATEURS.contains(&dernier) {
                texte.pop();
            }
        }
        texte.push(op);

        // remplacer le "-" d'ouverture par un opérateur binaire pur
        // laisserait une saisie qui ne peut pas démarrer
        if texte.chars().all(|c| OPERATEURS.contains(&c)) && !texte.starts_with('-') {
            self.etat = Etat::Vide;
        }
    }

    /// ± : agit sur le texte brut, pas sur la valeur évaluée.
    fn basculer_signe(&mut self) {
        match &mut self.etat {
            Etat::Vide => self.etat = Etat::Saisie("-".to_string()),
            Etat::Saisie(t) => {
                if let Some(reste) = t.strip_prefix('-') {
                    if reste.is_empty() {
                        self.etat = Etat::Vide;
                    } else {
                        *t = reste.to_string();
                    }
                } else {
                    t.insert(0, '-');
                }
            }
            Etat::Erreur(_) => {}
        }
    }

    /// Retour arrière "intelligent" : un préfixe fonction en fin de saisie
    /// ("sin(", "ln(", "√(", …) part d'un bloc, sinon un seul caractère.
    fn retour_arriere(&mut self) {
        let Etat::Saisie(t) = &mut self.etat else {
            return;
        };

        let mut retire = false;
        for prefixe in Fonction::TOUS_PREFIXES {
            if t.ends_with(prefixe) {
                t.truncate(t.len() - prefixe.len());
                retire = true;
                break;
            }
        }
        if !retire {
            t.pop();
        }

        if t.is_empty() {
            self.etat = Etat::Vide;
        }
    }

    /// "=" : validation. Succès => une entrée d'historique + la saisie
    /// devient le résultat formaté. Échec => état d'erreur, historique
    /// intact.
    fn valider(&mut self) {
        let texte = match &self.etat {
            Etat::Saisie(t) => t.clone(),
            _ => return, // vide : rien à valider (l'erreur est filtrée en amont)
        };

        match eval_affichage(&texte, self.unite) {
            Ok(resultat) => {
                debug!(expression = %texte, resultat = %resultat, "validation");
                self.horloge += 1;
                self.historique.push(EntreeHistorique {
                    expression: texte,
                    resultat: resultat.clone(),
                    horodatage: self.horloge,
                });
                self.etat = Etat::Saisie(resultat);
            }
            Err(erreur) => {
                debug!(expression = %texte, %erreur, "validation en erreur");
                self.etat = Etat::Erreur(erreur);
            }
        }

        self.recalculer_apercu();
    }

    /// Valeur évaluée de la saisie en cours, pour M+ / M-.
    /// Vide ou non évaluable => 0 (l'opération mémoire reste totale).
    fn valeur_courante(&self) -> f64 {
        match &self.etat {
            Etat::Saisie(t) => eval_expression(t, self.unite).unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /* ------------------------ Aperçu ------------------------ */

    /// Un simple opérande (nombre nu, constante seule) n'a pas d'aperçu ;
    /// il faut au moins un opérateur ou une fonction dans la saisie.
    fn merite_apercu(texte: &str) -> bool {
        texte
            .chars()
            .any(|c| matches!(c, '+' | '-' | '×' | '÷' | '%' | '^' | '('))
    }

    /// Recalcule l'aperçu non engageant. Un aperçu qui tombe en erreur est
    /// SUPPRIMÉ (absent), jamais affiché comme une erreur.
    fn recalculer_apercu(&mut self) {
        self.apercu = match &self.etat {
            Etat::Saisie(t) if Self::merite_apercu(t) => eval_affichage(t, self.unite).ok(),
            _ => None,
        };
    }
}
