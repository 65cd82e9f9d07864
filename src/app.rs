// src/app.rs
//
// Calculatrice pixel — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Impulsion de débordement : on expire ce qui est échu, puis on demande
        // une image à la prochaine échéance (sinon egui dort jusqu’au prochain clic).
        let maintenant = ctx.input(|i| i.time);
        if let Some(delai) = self.tic(maintenant) {
            ctx.request_repaint_after(Duration::from_secs_f64(delai));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
