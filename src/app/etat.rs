//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la Session du noyau + les quelques réglages d'affichage.
//! Toute la logique calculatrice (saisie, aperçu, historique, mémoire) vit
//! dans le noyau ; ici on ne fait que relayer des touches.

use crate::noyau::{Session, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub session: Session,

    // --- UX ---
    /// Panneau historique déplié ?
    pub montrer_historique: bool,
}

impl AppCalc {
    /// Relai unique vers le noyau : toutes les touches passent ici.
    pub fn appuyer(&mut self, touche: Touche) {
        self.session.appuyer(touche);
    }

    /// ESC / bouton C : efface la saisie seulement
    /// (historique et mémoire ne bougent pas).
    pub fn effacer_saisie(&mut self) {
        self.session.appuyer(Touche::Efface);
    }
}
