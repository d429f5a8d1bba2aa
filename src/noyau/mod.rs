//! Noyau d'évaluation Tritium
//!
//! Organisation interne :
//! - erreur.rs  : taxonomie d'erreurs (Syntaxe / Domaine / Numerique)
//! - jetons.rs  : tokenisation + normalisation des glyphes + mult implicite
//! - expr.rs    : AST (f64)
//! - rpn.rs     : shunting-yard + construction Expr
//! - eval.rs    : pipeline complet + évaluation de l'arbre
//! - format.rs  : politique d'affichage (entier / décimal / scientifique)

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_limites;

#[cfg(test)]
mod tests_fuzz;

// API publique minimale
pub use erreur::ErreurNoyau;
pub use eval::{evaluer, evaluer_valeur};
