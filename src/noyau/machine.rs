//! src/noyau/machine.rs
//!
//! Machine d’état de la calculatrice.
//!
//! États : Normal / Erreur (entrée = "Error", "Infinity" ou "NaN").
//! - Erreur s’entre par une évaluation invalide / non finie, ou un pourcentage illisible.
//! - Erreur se quitte par C, ou par une nouvelle saisie de chiffre / point.
//! - Toutes les autres touches sont sans effet en Erreur.
//!
//! Chaque touche est une transition synchrone. Le seul effet différé est l’impulsion de
//! débordement (point refusé) : une échéance datée, consommée par `tic`.

use tracing::debug;

use super::eval::{eval_expression, Strategie};
use super::format::{fenetre_expression, format_entree, nombre_vers_texte_brut, LARGEUR_ENTREE};

/// Sentinelle d’erreur affichée.
pub const ERREUR: &str = "Error";

/// Toutes les sentinelles (bloquent la saisie numérique jusqu’à C ou un chiffre).
pub const SENTINELLES: [&str; 3] = [ERREUR, "Infinity", "NaN"];

/// Durée par défaut de l’impulsion de débordement (secondes).
pub const DUREE_IMPULSION: f64 = 0.5;

pub fn est_sentinelle(s: &str) -> bool {
    SENTINELLES.contains(&s)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Glyphe d’affichage (c’est lui qui entre dans l’expression).
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }
}

/// Une touche du pavé (un événement d’activation par bouton).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Effacer,
    Signe,
    Pourcent,
    Operateur(Operateur),
    /// 0..=9
    Chiffre(u8),
    Point,
    Egal,
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    // --- affichage ---
    pub entree: String,
    pub expression: String,
    pub montre_expression: bool,
    pub debordement: bool,

    // --- paramètres ---
    pub strategie: Strategie,
    pub duree_impulsion: f64,

    // échéances des impulsions de débordement en cours (horloge de l’appelant, secondes)
    impulsions: Vec<f64>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(Strategie::default())
    }
}

impl Calculatrice {
    pub fn new(strategie: Strategie) -> Self {
        Self {
            entree: "0".to_string(),
            expression: String::new(),
            montre_expression: false,
            debordement: false,
            strategie,
            duree_impulsion: DUREE_IMPULSION,
            impulsions: Vec::new(),
        }
    }

    pub fn est_erreur(&self) -> bool {
        est_sentinelle(&self.entree)
    }

    /// Prochaine échéance d’impulsion (pour planifier un rafraîchissement).
    pub fn prochaine_echeance(&self) -> Option<f64> {
        self.impulsions.iter().copied().reduce(f64::min)
    }

    /// Point d’entrée unique : une touche, à l’instant `maintenant` (secondes).
    pub fn appuyer(&mut self, touche: Touche, maintenant: f64) {
        match touche {
            Touche::Effacer => self.effacer(),
            Touche::Signe => self.basculer_signe(),
            Touche::Pourcent => self.pourcent(),
            Touche::Operateur(op) => self.saisir_operateur(op),
            Touche::Chiffre(d) => self.saisir_chiffre(d),
            Touche::Point => self.saisir_point(maintenant),
            Touche::Egal => self.evaluer(),
        }
        debug!(
            ?touche,
            entree = %self.entree,
            expression = %self.expression,
            debordement = self.debordement,
            "transition"
        );
    }

    /// Fait expirer les impulsions échues : chacune remet le débordement à false.
    pub fn tic(&mut self, maintenant: f64) {
        let avant = self.impulsions.len();
        self.impulsions.retain(|&echeance| echeance > maintenant);
        if self.impulsions.len() != avant {
            self.debordement = false;
        }
    }

    /* ------------------------ Transitions ------------------------ */

    /// C : remise à zéro totale, toujours possible.
    pub fn effacer(&mut self) {
        self.entree = "0".to_string();
        self.expression.clear();
        self.montre_expression = false;
        self.debordement = false;
        self.impulsions.clear();
    }

    pub fn saisir_chiffre(&mut self, chiffre: u8) {
        let d = char::from(b'0' + chiffre.min(9));

        if self.est_erreur() {
            self.repartir_de(d.to_string());
            return;
        }

        if self.entree == "0" {
            self.entree = d.to_string();
            self.debordement = self.entree.chars().count() >= LARGEUR_ENTREE;
            return;
        }

        let brut = format!("{}{d}", self.entree);
        self.entree = format_entree(&brut);
        self.debordement = brut.chars().count() > LARGEUR_ENTREE;
    }

    pub fn saisir_point(&mut self, maintenant: f64) {
        if self.est_erreur() {
            self.repartir_de("0.".to_string());
            return;
        }
        if self.entree.contains('.') {
            return;
        }

        // plus de place : point refusé, le débordement clignote
        if self.entree.chars().count() >= LARGEUR_ENTREE {
            self.debordement = true;
            self.impulsions.push(maintenant + self.duree_impulsion);
            return;
        }

        self.entree.push('.');
        self.debordement = self.entree.chars().count() >= LARGEUR_ENTREE;
    }

    pub fn saisir_operateur(&mut self, op: Operateur) {
        if self.est_erreur() || self.entree.is_empty() || self.entree.ends_with('.') {
            return;
        }

        let precedent = if self.montre_expression {
            self.expression.as_str()
        } else {
            ""
        };
        self.expression = fenetre_expression(&format!("{precedent}{}{}", self.entree, op.glyphe()));
        self.entree = "0".to_string();
        self.montre_expression = true;
        self.debordement = false;
    }

    /// "=" : évalue préfixe + entrée selon la stratégie.
    pub fn evaluer(&mut self) {
        if self.est_erreur() {
            return;
        }

        let complete = format!("{}{}", self.expression, self.entree);
        if complete.is_empty() {
            self.effacer();
            return;
        }

        match eval_expression(self.strategie, &complete) {
            Ok(texte) => {
                self.entree = format_entree(&texte);
                self.debordement = texte.chars().count() > LARGEUR_ENTREE;
            }
            Err(e) => {
                debug!(expression = %complete, erreur = %e, "évaluation refusée");
                self.entree = ERREUR.to_string();
                self.debordement = false;
            }
        }
        self.expression.clear();
        self.montre_expression = false;
    }

    /// +/- : ajoute ou retire le signe de tête.
    pub fn basculer_signe(&mut self) {
        if self.entree == "0" || self.est_erreur() {
            return;
        }

        let brut = match self.entree.strip_prefix('-') {
            Some(reste) => reste.to_string(),
            None => format!("-{}", self.entree),
        };
        self.entree = format_entree(&brut);
        self.debordement = brut.chars().count() > LARGEUR_ENTREE;
    }

    /// % : divise l’entrée par 100.
    /// Texte brut : pas de virgule fixe ici, 0.00001 % affiche "1e-7".
    pub fn pourcent(&mut self) {
        if self.entree == "0" || self.est_erreur() {
            return;
        }

        match self.entree.parse::<f64>() {
            Ok(v) if (v / 100.0).is_finite() => {
                let texte = nombre_vers_texte_brut(v / 100.0);
                self.entree = format_entree(&texte);
                self.debordement = texte.chars().count() > LARGEUR_ENTREE;
            }
            _ => {
                debug!(entree = %self.entree, "pourcentage illisible");
                self.entree = ERREUR.to_string();
                self.debordement = false;
            }
        }
    }

    /* ------------------------ Interne ------------------------ */

    /// Sortie de l’état Erreur : nouvelle entrée, expression oubliée.
    fn repartir_de(&mut self, brut: String) {
        self.entree = format_entree(&brut);
        self.expression.clear();
        self.debordement = self.entree.chars().count() >= LARGEUR_ENTREE;
    }
}
