// src/noyau/format.rs
//
// Budget d’affichage :
// - entrée    : 7 caractères (troncature, JAMAIS d’arrondi)
// - expression: 12 derniers caractères (fenêtre glissante)

/// Largeur de l’entrée (écran principal).
pub const LARGEUR_ENTREE: usize = 7;

/// Largeur de l’expression en attente (fenêtre glissante).
pub const LARGEUR_EXPRESSION: usize = 12;

/// Seuils au-delà desquels un nombre s’écrirait en notation scientifique.
const SEUIL_GRAND: f64 = 1e21;
const SEUIL_PETIT: f64 = 1e-6;

/* ------------------------ Helpers caractères ------------------------ */

fn premiers(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fn derniers(s: &str, n: usize) -> String {
    let total = s.chars().count();
    s.chars().skip(total.saturating_sub(n)).collect()
}

/* ------------------------ Entrée (7 caractères) ------------------------ */

/// Ramène une chaîne numérique à au plus 7 caractères.
///
/// - Espaces retirés.
/// - Avec un point et trop longue : au plus 6 caractères pour la partie entière, le reste
///   pour la partie décimale. Si rien ne reste pour les décimales, on garde les 7 premiers
///   caractères de la partie entière (le point disparaît).
/// - Sinon : les 7 premiers caractères.
///
/// Troncature volontaire : "0.6666666" devient "0.66666", pas "0.66667".
pub fn format_entree(valeur: &str) -> String {
    let s: String = valeur.chars().filter(|c| !c.is_whitespace()).collect();

    if s.contains('.') && s.chars().count() > LARGEUR_ENTREE {
        let mut parts = s.split('.');
        let entier = parts.next().unwrap_or("");
        let decimal = parts.next().unwrap_or("");

        let max_entier = entier.chars().count().min(LARGEUR_ENTREE - 1);
        let max_decimal = LARGEUR_ENTREE - max_entier - 1;

        if max_decimal > 0 {
            return format!(
                "{}.{}",
                premiers(entier, max_entier),
                premiers(decimal, max_decimal)
            );
        }
        return premiers(entier, LARGEUR_ENTREE);
    }

    premiers(&s, LARGEUR_ENTREE)
}

/// Fenêtre glissante : garde les 12 derniers caractères.
pub fn fenetre_expression(s: &str) -> String {
    derniers(s, LARGEUR_EXPRESSION)
}

/// Coupe pour l’écran (expression ou entrée) : 7 premiers caractères.
pub fn texte_affiche(s: &str) -> String {
    premiers(s, LARGEUR_ENTREE)
}

/* ------------------------ Nombre -> texte ------------------------ */

/// Retire les zéros finaux après un point (et le point s’il devient pendant).
/// "2.500" -> "2.5" ; "4.000" -> "4" ; "100" -> "100" (pas de point, rien à faire).
pub fn retire_zeros_finaux(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    let sans_zeros = s.trim_end_matches('0');
    if sans_zeros.len() == s.len() {
        return s.to_string();
    }
    sans_zeros.strip_suffix('.').unwrap_or(sans_zeros).to_string()
}

/// Texte d’un résultat numérique.
///
/// - NaN / ±∞ : "NaN", "Infinity", "-Infinity" (sentinelles)
/// - -0 : "0"
/// - très grand / très petit : virgule fixe à 6 décimales, zéros finaux retirés
/// - sinon : forme décimale la plus courte, zéros finaux retirés
pub fn nombre_vers_texte(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        let signe = if v > 0.0 { "" } else { "-" };
        return format!("{signe}Infinity");
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let abs = v.abs();
    let brut = if abs >= SEUIL_GRAND || abs < SEUIL_PETIT {
        format!("{v:.6}")
    } else {
        format!("{v}")
    };
    retire_zeros_finaux(&brut)
}

/// Texte brut d’un nombre, sans conversion en virgule fixe.
///
/// Forme la plus courte ; notation exponentielle hors de [1e-6, 1e21[
/// ("1e-7", "2.5e-8", "1e+21").
pub fn nombre_vers_texte_brut(v: f64) -> String {
    if !v.is_finite() || v == 0.0 {
        return nombre_vers_texte(v);
    }

    let abs = v.abs();
    if abs >= SEUIL_GRAND || abs < SEUIL_PETIT {
        let txt = format!("{v:e}");
        return match txt.split_once('e') {
            Some((mantisse, exposant)) if !exposant.starts_with('-') => {
                format!("{mantisse}e+{exposant}")
            }
            _ => txt,
        };
    }
    format!("{v}")
}
