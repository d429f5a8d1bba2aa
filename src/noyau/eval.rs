//! Noyau — évaluation (pipeline réel)
//!
//! tokenize (mult implicite incluse) -> RPN -> Expr -> éval f64 -> format
//!
//! Remarque : la division par zéro n'est pas interceptée — ±inf/NaN se
//! propagent jusqu'au formatage, comme dans le widget d'origine.

use std::f64::consts::{E, PI};

use super::erreur::ErreurNoyau;
use super::expr::Expr;
use super::format::{format_resultat, SENTINELLE};
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};

/// API publique : évalue une expression brute et retourne le texte affichable.
/// Toute erreur (syntaxe, domaine, numéral) devient la sentinelle "Error" —
/// jamais de panique, jamais d'erreur remontée à l'appelant.
pub fn evaluer(expr_str: &str) -> String {
    match evaluer_valeur(expr_str) {
        Ok(v) => format_resultat(v),
        Err(_) => SENTINELLE.to_string(),
    }
}

/// Pipeline complet jusqu'à la valeur f64, avec erreurs typées.
/// (La vue s'en sert pour afficher le détail de l'erreur sous le résultat.)
pub fn evaluer_valeur(expr_str: &str) -> Result<f64, ErreurNoyau> {
    let jetons = tokenize(expr_str)?;
    let rpn = to_rpn(&jetons)?;
    let arbre = from_rpn(&rpn)?;
    eval_arbre(&arbre)
}

/// Évaluation récursive de l'arbre.
/// Récursion bornée par la profondeur d'imbrication de l'entrée.
fn eval_arbre(e: &Expr) -> Result<f64, ErreurNoyau> {
    use Expr::*;

    Ok(match e {
        Num(v) => *v,

        Neg(x) => -eval_arbre(x)?,

        Sqrt(x) => {
            let v = eval_arbre(x)?;
            if v < 0.0 {
                return Err(ErreurNoyau::domaine("racine carrée d'un nombre négatif"));
            }
            v.sqrt()
        }

        Fact(x) => factorielle(eval_arbre(x)?)?,

        Add(a, b) => eval_arbre(a)? + eval_arbre(b)?,
        Sub(a, b) => eval_arbre(a)? - eval_arbre(b)?,
        Mul(a, b) => eval_arbre(a)? * eval_arbre(b)?,
        Div(a, b) => eval_arbre(a)? / eval_arbre(b)?,
        Pow(a, b) => eval_arbre(a)?.powf(eval_arbre(b)?),
    })
}

/// Factorielle :
/// - n entier, 0 ≤ n ≤ 20 : produit exact (chaque n! ≤ 20! est représentable
///   exactement en f64)
/// - n > 20 : approximation de Stirling avec terme correctif
///   (1 + 1/(12n) + 1/(288n²))
/// - négatif, non entier ou non fini : erreur de domaine
fn factorielle(x: f64) -> Result<f64, ErreurNoyau> {
    if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
        return Err(ErreurNoyau::domaine(
            "factorielle d'un nombre négatif ou non entier",
        ));
    }

    let k = x as u64;
    if k <= 20 {
        let mut res: u64 = 1;
        for i in 2..=k {
            res *= i;
        }
        return Ok(res as f64);
    }

    let n = k as f64;
    Ok((2.0 * PI * n).sqrt() * (n / E).powf(n) * (1.0 + 1.0 / (12.0 * n) + 1.0 / (288.0 * n * n)))
}
