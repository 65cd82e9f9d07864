// src/noyau/jetons.rs

use super::erreur::{ErreurCalcul, ResultatCalcul};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,

    // Produit uniquement par to_rpn (moins unaire), jamais par tokenize.
    Neg,
}

/// Remplace les glyphes d’affichage par leurs opérateurs (× -> *, ÷ -> /)
/// et retire les espaces.
pub fn normalise_glyphes(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            other => other,
        })
        .collect()
}

/// Liste blanche : `[0-9+\-*/.()]+`.
/// Une chaîne vide est refusée (rien à évaluer).
pub fn verifie_liste_blanche(s: &str) -> ResultatCalcul<()> {
    if s.is_empty() {
        return Err(ErreurCalcul::ExpressionInvalide);
    }
    match s
        .chars()
        .find(|c| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')')))
    {
        Some(c) => Err(ErreurCalcul::CaractereInterdit(c)),
        None => Ok(()),
    }
}

/// Tokenize une chaîne déjà normalisée.
/// Supporte:
/// - décimaux (ex: 12, 3.5, 5., .5)
/// - opérateurs + - * /
/// - parenthèses ( )
pub fn tokenize(s: &str) -> ResultatCalcul<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : suite de chiffres avec au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            if lit.matches('.').count() > 1 {
                return Err(ErreurCalcul::NombreInvalide(lit));
            }
            let v = lit
                .parse::<f64>()
                .map_err(|_| ErreurCalcul::NombreInvalide(lit.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalcul::CaractereInterdit(c));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Neg => "neg".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
