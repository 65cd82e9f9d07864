// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Look “pixel” : monospace partout, palette courte, gros boutons
// - Pavé 4 colonnes : C +/- % ÷ / 7 8 9 × / 4 5 6 - / 1 2 3 + / 0 . =
//
// Note :
// - Pas de clavier : seules les touches à l’écran produisent des transitions.

use eframe::egui::{self, Color32, RichText};

use super::etat::AppCalc;
use crate::noyau::{Operateur, Touche};

const COTE: f32 = 64.0;
const ESPACE: f32 = 6.0;
const LARGEUR_PAVE: f32 = 4.0 * COTE + 3.0 * ESPACE;

const FOND_ECRAN: Color32 = Color32::from_rgb(0x9b, 0xbc, 0x0f);
const FOND_DEBORDEMENT: Color32 = Color32::from_rgb(0xe0, 0x8a, 0x2c);
const ENCRE: Color32 = Color32::from_rgb(0x0f, 0x38, 0x0f);
const ENCRE_PALE: Color32 = Color32::from_rgb(0x30, 0x62, 0x30);
const ENCRE_ERREUR: Color32 = Color32::from_rgb(0xc0, 0x20, 0x20);

#[derive(Clone, Copy, Debug)]
enum Genre {
    Chiffre,
    Fonction,
    Operateur,
    Egal,
}

impl Genre {
    fn fond(self) -> Color32 {
        match self {
            Genre::Chiffre => Color32::from_rgb(0x50, 0x50, 0x5a),
            Genre::Fonction => Color32::from_rgb(0x8a, 0x8a, 0x96),
            Genre::Operateur => Color32::from_rgb(0xf0, 0x8c, 0x28),
            Genre::Egal => Color32::from_rgb(0xe8, 0x5a, 0x8c),
        }
    }
}

/// (libellé, touche, genre, largeur en cases)
type Bouton = (&'static str, Touche, Genre, u8);

const RANGEES: [&[Bouton]; 5] = [
    &[
        ("C", Touche::Effacer, Genre::Fonction, 1),
        ("+/-", Touche::Signe, Genre::Fonction, 1),
        ("%", Touche::Pourcent, Genre::Fonction, 1),
        ("÷", Touche::Operateur(Operateur::Divise), Genre::Operateur, 1),
    ],
    &[
        ("7", Touche::Chiffre(7), Genre::Chiffre, 1),
        ("8", Touche::Chiffre(8), Genre::Chiffre, 1),
        ("9", Touche::Chiffre(9), Genre::Chiffre, 1),
        ("×", Touche::Operateur(Operateur::Fois), Genre::Operateur, 1),
    ],
    &[
        ("4", Touche::Chiffre(4), Genre::Chiffre, 1),
        ("5", Touche::Chiffre(5), Genre::Chiffre, 1),
        ("6", Touche::Chiffre(6), Genre::Chiffre, 1),
        ("-", Touche::Operateur(Operateur::Moins), Genre::Operateur, 1),
    ],
    &[
        ("1", Touche::Chiffre(1), Genre::Chiffre, 1),
        ("2", Touche::Chiffre(2), Genre::Chiffre, 1),
        ("3", Touche::Chiffre(3), Genre::Chiffre, 1),
        ("+", Touche::Operateur(Operateur::Plus), Genre::Operateur, 1),
    ],
    &[
        ("0", Touche::Chiffre(0), Genre::Chiffre, 2),
        (".", Touche::Point, Genre::Chiffre, 1),
        ("=", Touche::Egal, Genre::Egal, 1),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let maintenant = ui.input(|i| i.time);

        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        ui.vertical_centered(|ui| {
            ui.set_max_width(LARGEUR_PAVE);

            ui.heading(RichText::new("PIXEL CALCULATOR").monospace().strong());
            if let Some(mention) = self.mention_strategie() {
                ui.label(RichText::new(mention).monospace().small().color(ENCRE_PALE));
            }
            ui.add_space(8.0);

            self.ui_ecran(ui);

            ui.add_space(10.0);

            self.ui_pave(ui, maintenant);
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let fond = if self.affiche_debordement() {
            FOND_DEBORDEMENT
        } else {
            FOND_ECRAN
        };

        egui::Frame::group(ui.style()).fill(fond).show(ui, |ui| {
            ui.set_min_width(LARGEUR_PAVE);
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                // ligne du haut : toujours la même hauteur, même masquée
                let expression = self.ligne_expression().unwrap_or_default();
                ui.label(
                    RichText::new(expression)
                        .monospace()
                        .size(16.0)
                        .color(ENCRE_PALE),
                );

                let encre = if self.affiche_erreur() {
                    ENCRE_ERREUR
                } else {
                    ENCRE
                };
                ui.label(
                    RichText::new(self.ligne_entree())
                        .monospace()
                        .size(40.0)
                        .color(encre),
                );
            });
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        for rangee in RANGEES {
            ui.horizontal(|ui| {
                for &(libelle, touche, genre, cases) in rangee {
                    let largeur = f32::from(cases) * COTE + f32::from(cases - 1) * ESPACE;
                    let bouton = egui::Button::new(
                        RichText::new(libelle)
                            .monospace()
                            .size(22.0)
                            .color(Color32::WHITE),
                    )
                    .fill(genre.fond());

                    if ui.add_sized([largeur, COTE], bouton).clicked() {
                        self.appuyer(touche, maintenant);
                    }
                }
            });
        }
    }
}
