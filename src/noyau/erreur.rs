// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du noyau.
// - Syntaxe   : délimiteur non apparié, caractère/mot inconnu
// - Domaine   : racine d'un négatif, factorielle d'un négatif ou non-entier
// - Numerique : numéral vide ou mal formé là où un nombre était attendu
//
// NOTE : la division par zéro n'est PAS une erreur — ±inf/NaN se propagent
// jusqu'au formatage (quirk assumé du comportement d'origine).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    #[error("erreur de syntaxe: {0}")]
    Syntaxe(String),

    #[error("erreur de domaine: {0}")]
    Domaine(String),

    #[error("nombre invalide: {0}")]
    Numerique(String),
}

impl ErreurNoyau {
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        Self::Syntaxe(msg.into())
    }

    pub fn domaine(msg: impl Into<String>) -> Self {
        Self::Domaine(msg.into())
    }

    pub fn numerique(msg: impl Into<String>) -> Self {
        Self::Numerique(msg.into())
    }
}
