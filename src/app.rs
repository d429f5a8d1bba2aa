// src/app.rs
//
// Calculatrice Tritium — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le thème (clair/sombre) est appliqué ici, à chaque frame : les deux
//   variantes de présentation partagent le même état et le même noyau.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Theme;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(match self.theme {
            Theme::Claire => egui::Visuals::light(),
            Theme::Sombre => egui::Visuals::dark(),
        });

        // Raccourcis clavier minimaux (safe natif + web) :
        // ESC = AC ; Enter = "=" ; Backspace = DEL.
        let (esc, enter, backspace) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });
        if esc {
            self.tout_effacer();
        }
        if enter {
            self.egal();
        }
        if backspace {
            self.effacer_dernier();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
