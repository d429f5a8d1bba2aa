//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état du widget (entrée, résultat, thème) et offrir les
//! actions des boutons (saisie, DEL, AC, Ans, =) sans logique d'affichage.
//!
//! Contrats :
//! - `resultat` contient toujours un texte affichable ("0" au départ,
//!   numéral ou sentinelle ensuite).
//! - "=" ne fait rien sur entrée vide (même politique que le widget
//!   d'origine : l'appelant évite d'évaluer du vide).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau;
use crate::noyau::format::SENTINELLE;

/// Résultat affiché au démarrage et après AC.
const RESULTAT_DEFAUT: &str = "0";

/// Les deux variantes de présentation du widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Claire,
    Sombre,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // numéral formaté ou sentinelle "Error"
    pub erreur: String,   // détail de la dernière erreur (vide sinon)

    // --- présentation ---
    pub theme: Theme,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: RESULTAT_DEFAUT.to_string(),
            erreur: String::new(),
            theme: Theme::Sombre,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Touche de saisie : ajoute le texte du bouton à l'entrée.
    pub fn appuyer(&mut self, touche: &str) {
        self.entree.push_str(touche);
    }

    /// DEL : retire le dernier symbole (le motif "√(" part d'un bloc).
    pub fn effacer_dernier(&mut self) {
        if self.entree.ends_with("√(") {
            self.entree.pop();
            self.entree.pop();
            return;
        }
        self.entree.pop();
    }

    /// AC : remise à zéro totale (entrée + résultat + erreur).
    pub fn tout_effacer(&mut self) {
        self.entree.clear();
        self.resultat = RESULTAT_DEFAUT.to_string();
        self.erreur.clear();
    }

    /// Ans : rappelle le résultat précédent à la fin de l'entrée.
    /// Seul un numéral fini est rappelé : ni la sentinelle, ni "inf"/"-inf"
    /// (affichables mais pas re-tokenisables).
    pub fn rappeler_resultat(&mut self) {
        match self.resultat.parse::<f64>() {
            Ok(v) if v.is_finite() => self.entree.push_str(&self.resultat),
            _ => {}
        }
    }

    /// "=" : évalue l'entrée (si non vide), dépose le résultat, vide l'entrée.
    pub fn egal(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            return;
        }

        self.erreur.clear();
        self.resultat = noyau::evaluer(s);

        // sur sentinelle : rejoue le pipeline typé pour le détail
        // (NaN atteint la sentinelle sans erreur typée => pas de détail)
        if self.resultat == SENTINELLE {
            if let Err(e) = noyau::evaluer_valeur(s) {
                self.erreur = e.to_string();
            }
        }

        self.entree.clear();
    }

    /// Bascule clair/sombre.
    pub fn basculer_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Claire => Theme::Sombre,
            Theme::Sombre => Theme::Claire,
        };
    }
}
