// src/noyau/format.rs

use super::erreurs::ErreurCalc;

/* ------------------------ Classification ------------------------ */

/// Seuil sous lequel une grandeur est un zéro d'arrondi.
pub const EPSILON_ZERO: f64 = 1e-12;

/// Chiffres significatifs conservés à l'affichage.
pub const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Magnitude à partir de laquelle on passe en écriture exponentielle
/// (le développement décimal deviendrait illisible).
const SEUIL_EXPOSANT: f64 = 1e21;

/// Classe un résultat brut d'évaluation : seules les valeurs finies passent.
///
/// - NaN  => « Invalid input »  (ex: √ d'un négatif, 0×∞)
/// - ±∞   => « Value too large » (débordement, zéro calculé au dénominateur)
pub fn classer(brut: f64) -> Result<f64, ErreurCalc> {
    if brut.is_nan() {
        return Err(ErreurCalc::EntreeInvalide);
    }
    if brut.is_infinite() {
        return Err(ErreurCalc::Depassement);
    }
    Ok(brut)
}

/* ------------------------ Affichage décimal ------------------------ */

/// Formate une valeur finie en chaîne décimale :
/// - |v| < 1e-12 => "0"
/// - arrondi à 12 chiffres significatifs
/// - écriture la plus courte qui re-parse sur la même valeur
///   (pas de bruit flottant, pas de zéros de fin dans la fraction)
/// - exposant seulement à partir de 1e21
///
/// Déterministe et sans effet de bord : même valeur, même chaîne.
pub fn formater(valeur: f64) -> String {
    if valeur.abs() < EPSILON_ZERO {
        return "0".to_string();
    }

    let arrondie = arrondir_significatif(valeur);

    if arrondie.abs() >= SEUIL_EXPOSANT {
        return format_exposant(arrondie);
    }

    // Display f64 = plus courte écriture décimale qui retombe sur la même
    // valeur ; après l'arrondi à 12 chiffres, elle n'en dépasse jamais 12.
    format!("{arrondie}")
}

/// Arrondit à CHIFFRES_SIGNIFICATIFS via l'écriture scientifique.
fn arrondir_significatif(v: f64) -> f64 {
    let sci = format!("{v:.prec$e}", prec = CHIFFRES_SIGNIFICATIFS - 1);
    sci.parse::<f64>().unwrap_or(v)
}

/// "1.07150860719e301" — mantisse nettoyée de ses zéros de fin.
fn format_exposant(v: f64) -> String {
    let sci = format!("{v:.prec$e}", prec = CHIFFRES_SIGNIFICATIFS - 1);
    match sci.split_once('e') {
        Some((mantisse, exposant)) => {
            let mantisse = mantisse.trim_end_matches('0').trim_end_matches('.');
            format!("{mantisse}e{exposant}")
        }
        None => sci,
    }
}
