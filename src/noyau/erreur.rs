// src/noyau/erreur.rs
//
// Erreurs du noyau.
// À la frontière de la machine d’état, toutes deviennent la sentinelle "Error".

use thiserror::Error;

pub type ResultatCalcul<T> = Result<T, ErreurCalcul>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurCalcul {
    /// Caractère hors liste blanche (chiffres, + - * / . ( )).
    #[error("caractère interdit: '{0}'")]
    CaractereInterdit(char),

    /// Littéral mal formé (ex: "1.2.3", ".").
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseOrpheline,

    /// NaN ou ±∞.
    #[error("résultat non fini: {0}")]
    ResultatNonFini(f64),

    /// Évaluateur minimal : l’entrée n’est pas "a op b".
    #[error("motif binaire non reconnu: {0:?}")]
    MotifBinaire(String),
}
