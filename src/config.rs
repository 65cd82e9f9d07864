// src/config.rs
//
// Réglages de l’application.
// - natif : ligne de commande (clap) + variables d’environnement
// - web   : valeurs par défaut

use crate::noyau::machine::DUREE_IMPULSION;
use crate::noyau::{Calculatrice, Strategie};

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    /// Stratégie de la touche "=".
    pub strategie: Strategie,

    /// Durée de l’impulsion de débordement (secondes).
    pub duree_impulsion: f64,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            strategie: Strategie::Generale,
            duree_impulsion: DUREE_IMPULSION,
        }
    }
}

impl Reglages {
    /// Calculatrice neuve configurée.
    pub fn calculatrice(&self) -> Calculatrice {
        let mut calc = Calculatrice::new(self.strategie);
        calc.duree_impulsion = self.duree_impulsion;
        calc
    }
}

/// Ligne de commande (natif seulement).
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "calculatrice-pixel", about = "PIXEL CALCULATOR")]
pub struct Arguments {
    /// Évaluateur de la touche "=" (generale : expression complète ; binaire : "a op b")
    #[arg(long, value_enum, env = "CALC_STRATEGIE", default_value_t = Strategie::Generale)]
    pub strategie: Strategie,

    /// Filtre de journalisation (syntaxe EnvFilter, ex: "calculatrice_pixel=debug")
    #[arg(long = "log", env = "RUST_LOG", default_value = "warn")]
    pub filtre_log: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl From<&Arguments> for Reglages {
    fn from(args: &Arguments) -> Self {
        Self {
            strategie: args.strategie,
            ..Self::default()
        }
    }
}
