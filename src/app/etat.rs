//! src/app/etat.rs
//!
//! État UI : la calculatrice du noyau + les réglages.
//!
//! Contrats :
//! - Aucune transition ici : tout passe par `Calculatrice::appuyer`.
//! - La vue ne lit que des textes déjà coupés à la largeur de l’écran.

use crate::config::Reglages;
use crate::noyau::format::texte_affiche;
use crate::noyau::machine::ERREUR;
use crate::noyau::{Calculatrice, Strategie, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,
    pub reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            calc: reglages.calculatrice(),
            reglages,
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn appuyer(&mut self, touche: Touche, maintenant: f64) {
        self.calc.appuyer(touche, maintenant);
    }

    /// À chaque image : fait expirer les impulsions de débordement.
    /// Retourne le délai (secondes) avant la prochaine échéance, s’il y en a une.
    pub fn tic(&mut self, maintenant: f64) -> Option<f64> {
        self.calc.tic(maintenant);
        self.calc
            .prochaine_echeance()
            .map(|echeance| (echeance - maintenant).max(0.0))
    }

    /* ------------------------ Lecture pour la vue ------------------------ */

    /// Ligne du haut (None si l’expression est masquée).
    pub fn ligne_expression(&self) -> Option<String> {
        self.calc
            .montre_expression
            .then(|| texte_affiche(&self.calc.expression))
    }

    /// Ligne principale.
    pub fn ligne_entree(&self) -> String {
        texte_affiche(&self.calc.entree)
    }

    /// Classe "error" : seulement la sentinelle "Error" (pas "NaN" ni "Infinity").
    pub fn affiche_erreur(&self) -> bool {
        self.calc.entree == ERREUR
    }

    pub fn affiche_debordement(&self) -> bool {
        self.calc.debordement
    }

    /// Mention de l’évaluateur, seulement quand il diffère du défaut.
    pub fn mention_strategie(&self) -> Option<&'static str> {
        match self.reglages.strategie {
            Strategie::Generale => None,
            Strategie::Binaire => Some("a op b"),
        }
    }
}
