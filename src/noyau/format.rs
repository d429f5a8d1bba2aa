// src/noyau/format.rs
//
// Politique d'affichage du résultat final (f64), dans l'ordre :
// 1. NaN                         => sentinelle "Error"
// 2. |v| ≥ 1e12 ou 0 < |v| < 1e-6 => scientifique, 6 décimales de mantisse
//    (±inf passe ici : quirk assumé de la propagation division-par-zéro)
// 3. partie fractionnaire nulle   => entier sans point décimal
// 4. sinon                        => décimal le plus court (Display f64),
//    sans zéros de fin ni point final

/// Sentinelle renvoyée pour toute évaluation en échec.
pub const SENTINELLE: &str = "Error";

const SEUIL_SCIENTIFIQUE_HAUT: f64 = 1e12;
const SEUIL_SCIENTIFIQUE_BAS: f64 = 1e-6;

/// Rend la valeur finale en texte affichable.
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return SENTINELLE.to_string();
    }

    let abs = v.abs();
    if abs >= SEUIL_SCIENTIFIQUE_HAUT || (abs > 0.0 && abs < SEUIL_SCIENTIFIQUE_BAS) {
        return format!("{v:.6e}");
    }

    // |v| < 1e12 ici, donc un entier tient toujours dans i64
    if v.fract() == 0.0 {
        return format!("{}", v as i64);
    }

    // Display f64 : décimal le plus court qui ré-analyse à l'identique,
    // jamais de notation scientifique, jamais de zéros de fin
    format!("{v}")
}
