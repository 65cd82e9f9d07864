// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - Précédence : + - (1) < * / (2) < moins unaire (3)
// - Binaires associatifs à gauche
// - Moins unaire : si '-' arrive quand on n’attend PAS une valeur => Tok::Neg (préfixe)
// - Plus unaire : ignoré ("+3" == "3")

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> ResultatCalcul<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter les signes unaires.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurCalcul::ParentheseOrpheline);
                }
                prev_was_value = true;
            }

            // signes unaires : préfixes, on n’éjecte rien
            Tok::Minus if !prev_was_value => ops.push(Tok::Neg),
            Tok::Plus if !prev_was_value => {}

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurCalcul::ExpressionInvalide),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN.
/// Arithmétique IEEE-754 brute : 1/0 donne ∞, 0/0 donne NaN (l’appelant décide).
pub fn evalue_rpn(rpn: &[Tok]) -> ResultatCalcul<f64> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;

                st.push(match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                });
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::ExpressionInvalide),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::ExpressionInvalide),
    }
}
