//! Tests aux frontières : seuils de formatage, factorielle 20/21,
//! imbrication profonde, totalité (numéral ou sentinelle, jamais de panique).

use super::{evaluer, evaluer_valeur};

fn ok(s: &str) -> String {
    let r = evaluer(s);
    assert_ne!(r, "Error", "évaluation inattendue en erreur pour {s:?}");
    r
}

/* ------------------------ Frontières de formatage ------------------------ */

#[test]
fn resultat_exactement_1e12_scientifique() {
    // 1e6 * 1e6 = 1e12 pile sur le seuil
    assert_eq!(ok("1000000*1000000"), "1.000000e12");
}

#[test]
fn resultat_sous_le_seuil_entier() {
    assert_eq!(ok("999900000000+0"), "999900000000");
}

#[test]
fn petit_resultat_scientifique() {
    // 1/10^7 < 1e-6
    assert_eq!(ok("1/10000000"), "1.000000e-7");
}

#[test]
fn zero_jamais_scientifique() {
    assert_eq!(ok("0.0000001*0"), "0");
}

/* ------------------------ Factorielle 20 / 21 ------------------------ */

#[test]
fn factorielle_20_chemin_exact() {
    // 20! = 2432902008176640000, affiché en scientifique (≥ 1e12)
    assert_eq!(ok("20!"), "2.432902e18");
    assert_eq!(evaluer_valeur("20!").unwrap(), 2432902008176640000.0);
}

#[test]
fn factorielle_21_chemin_approche() {
    let vrai = 51090942171709440000.0_f64;
    let v = evaluer_valeur("21!").unwrap();
    let rel = ((v - vrai) / vrai).abs();
    assert!(rel < 1e-6, "21! hors tolérance: {v} (erreur relative {rel})");
}

/* ------------------------ Imbrication / profondeur ------------------------ */

#[test]
fn racines_imbriquees() {
    // √(√(√(256))) = 2
    assert_eq!(ok("√(√(√(256)))"), "2");
}

#[test]
fn parentheses_profondes() {
    let mut s = String::new();
    for _ in 0..64 {
        s.push('(');
    }
    s.push('7');
    for _ in 0..64 {
        s.push(')');
    }
    assert_eq!(ok(&s), "7");
}

/* ------------------------ Totalité ------------------------ */

#[test]
fn jamais_d_erreur_remontee() {
    // entrées dégénérées : toujours un texte, souvent la sentinelle
    for s in [
        "", "+", "-", "!", "(", ")", "√", "√(", "..", "1..2", "^2", "2^", "()", "√()",
        "1+(", "))((",
    ] {
        let r = evaluer(s);
        assert!(!r.is_empty(), "sortie vide pour {s:?}");
    }
}

#[test]
fn puissance_negative_fractionnaire_nan() {
    // (-8)^0.5 => NaN => sentinelle (au formatage, pas en erreur typée)
    assert!(evaluer_valeur("(0-8)^0.5").unwrap().is_nan());
    assert_eq!(evaluer("(0-8)^0.5"), "Error");
}

#[test]
fn infini_affiche_tel_quel() {
    // quirk assumé : 1/0 n'est pas une erreur, l'infini atteint l'affichage
    assert_eq!(evaluer("1/0"), "inf");
    assert_eq!(evaluer("-1/0"), "-inf");
}
