// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour les deux variantes clair/sombre
// - Écran deux lignes (entrée + résultat), comme le widget d'origine
// - Pavé : chiffres, . , + - × ÷ ^ ! ( ) √( , DEL, AC, Ans, =
// - Tactile : gros boutons
//
// Les deux thèmes passent par le MÊME noyau (une seule logique
// d'évaluation, pas de duplication par variante).

use eframe::egui;

use super::etat::{AppCalc, Theme};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “widget”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_entete(ui);

        ui.add_space(4.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Tritium");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let libelle = match self.theme {
                    Theme::Claire => "☀ clair",
                    Theme::Sombre => "🌙 sombre",
                };
                if ui.button(libelle).on_hover_text("Basculer le thème").clicked() {
                    self.basculer_theme();
                }
            });
        });
    }

    /// Écran deux lignes : entrée en haut, résultat en bas (à droite).
    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let entree = if self.entree.is_empty() { "0" } else { self.entree.as_str() };
                    ui.monospace(entree);
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.heading(egui::RichText::new(&self.resultat).monospace());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_tritium")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "AC", "Tout effacer", Action::ToutEffacer);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Del);
                self.bouton_action(ui, "Ans", "Rappelle le résultat précédent", Action::Ans);
                self.bouton_insert(ui, "÷", "÷");
                ui.end_row();

                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_insert(ui, "×", "×");
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "-", "-");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "+", "+");
                ui.end_row();

                self.bouton_insert(ui, "√", "√(");
                self.bouton_insert(ui, "^", "^");
                self.bouton_insert(ui, "!", "!");
                self.bouton_insert(ui, "(", "(");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                self.bouton_insert(ui, ")", ")");
                self.bouton_action(ui, "=", "Évalue l'entrée", Action::Egal);
                ui.end_row();
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 36.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ToutEffacer => self.tout_effacer(),
                Action::Del => self.effacer_dernier(),
                Action::Ans => self.rappeler_resultat(),
                Action::Egal => self.egal(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(to_insert);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ToutEffacer,
    Del,
    Ans,
    Egal,
}
