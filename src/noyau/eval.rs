//! Noyau — évaluation (deux stratégies)
//!
//! Générale (canonique) :
//!   glyphes -> liste blanche -> jetons -> RPN -> f64 -> fini ? -> texte
//!
//! Binaire (minimale) :
//!   glyphes -> motif "a op b" -> f64 -> texte ; a/0 donne "NaN" tel quel
//!
//! Aucune évaluation dynamique de code : seule la grammaire restreinte est acceptée.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::format::nombre_vers_texte;
use super::jetons::{format_tokens, normalise_glyphes, tokenize, verifie_liste_blanche};
use super::rpn::{evalue_rpn, to_rpn};

/// Stratégie d’évaluation de la touche "=".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategie {
    /// Expression complète : précédence, parenthèses, signes unaires.
    /// Division par zéro => "Error".
    #[default]
    Generale,

    /// Un seul opérateur entre deux opérandes.
    /// Division par zéro => "NaN".
    Binaire,
}

/// API publique : évalue l’expression complète (préfixe + entrée) selon la stratégie.
///
/// Retourne le texte brut du résultat (avant troncature à 7 caractères).
pub fn eval_expression(strategie: Strategie, expr_str: &str) -> ResultatCalcul<String> {
    match strategie {
        Strategie::Generale => eval_generale(expr_str).map(nombre_vers_texte),
        Strategie::Binaire => eval_binaire(expr_str),
    }
}

/// Évaluateur général : le résultat doit être fini.
pub fn eval_generale(expr_str: &str) -> ResultatCalcul<f64> {
    let s = normalise_glyphes(expr_str);

    // 1) Liste blanche
    verifie_liste_blanche(&s)?;

    // 2) Jetons
    let jetons = tokenize(&s)?;
    trace!(jetons = %format_tokens(&jetons), "jetons");

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(rpn = %format_tokens(&rpn), "rpn");

    // 4) Valeur
    let v = evalue_rpn(&rpn)?;
    if !v.is_finite() {
        return Err(ErreurCalcul::ResultatNonFini(v));
    }
    Ok(v)
}

fn motif_binaire() -> &'static Regex {
    static MOTIF: OnceLock<Regex> = OnceLock::new();
    MOTIF.get_or_init(|| {
        Regex::new(r"^(-?\d+(?:\.\d+)?)([+\-*/])(-?\d+(?:\.\d+)?)$").expect("motif binaire")
    })
}

/// Évaluateur minimal : exactement "a op b".
pub fn eval_binaire(expr_str: &str) -> ResultatCalcul<String> {
    let s = normalise_glyphes(expr_str);

    let caps = motif_binaire()
        .captures(&s)
        .ok_or_else(|| ErreurCalcul::MotifBinaire(s.clone()))?;

    let operande = |i: usize| -> ResultatCalcul<f64> {
        let txt = caps.get(i).map_or("", |m| m.as_str());
        txt.parse::<f64>()
            .map_err(|_| ErreurCalcul::NombreInvalide(txt.to_string()))
    };
    let a = operande(1)?;
    let b = operande(3)?;
    let op = caps.get(2).map_or("", |m| m.as_str());

    let v = match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        _ => {
            if b == 0.0 {
                return Ok("NaN".to_string());
            }
            a / b
        }
    };
    trace!(a, op, b, v, "binaire");

    Ok(nombre_vers_texte(v))
}
