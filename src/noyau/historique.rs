// src/noyau/historique.rs
//
// Historique des validations + registre mémoire M.

/// Une validation réussie ("=") : jamais modifiée après création.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
    /// Compteur de session monotone (façon époque), pas une horloge murale.
    pub horodatage: u64,
}

/// Registre mémoire : un seul accumulateur flottant.
///
/// M+ / M- cumulent, MR lit, MC remet à zéro. Aucune de ces opérations
/// ne touche la saisie ni l'historique.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Memoire {
    valeur: f64,
}

impl Memoire {
    pub fn ajouter(&mut self, v: f64) {
        self.valeur += v;
    }

    pub fn retirer(&mut self, v: f64) {
        self.valeur -= v;
    }

    pub fn rappel(&self) -> f64 {
        self.valeur
    }

    pub fn effacer(&mut self) {
        self.valeur = 0.0;
    }

    /// Indicateur UI : vrai dès qu'une valeur est retenue.
    pub fn occupee(&self) -> bool {
        self.valeur != 0.0
    }
}
