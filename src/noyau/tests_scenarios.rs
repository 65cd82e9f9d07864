//! Tests de scénarios : propriétés observables de la calculatrice, touche par touche.
//!
//! - formatage 7 caractères (identité, point unique)
//! - opérateurs sans effet sur opérande incomplet
//! - C depuis n’importe quel état
//! - scénarios "=" (opérande seul, addition, division par zéro)
//! - fenêtre glissante de 12 caractères
//! - bascule de signe

use super::eval::Strategie;
use super::format::format_entree;
use super::machine::{Calculatrice, Operateur, Touche, ERREUR};

fn etat(entree: &str, expression: &str, montre: bool) -> Calculatrice {
    let mut c = Calculatrice::default();
    c.entree = entree.to_string();
    c.expression = expression.to_string();
    c.montre_expression = montre;
    c
}

fn tape(c: &mut Calculatrice, touches: &[Touche]) {
    for t in touches {
        c.appuyer(*t, 0.0);
    }
}

fn assert_efface(c: &Calculatrice) {
    assert_eq!(c.entree, "0");
    assert_eq!(c.expression, "");
    assert!(!c.montre_expression);
    assert!(!c.debordement);
}

/* ------------------------ Formatage ------------------------ */

#[test]
fn scn_format_identite_entiers_courts() {
    for n in [0u64, 1, 42, 999, 10_000, 123_456, 9_999_999] {
        let s = n.to_string();
        assert_eq!(format_entree(&s), s);
        let neg = format!("-{n}");
        if neg.len() <= 7 {
            assert_eq!(format_entree(&neg), neg);
        }
    }
}

#[test]
fn scn_format_decimaux_longs_point_unique() {
    // partie entière < 6 : le point survit, une seule fois, et on tient en 7
    for s in [
        "3.14159265358",
        "0.30000000000000004",
        "12345.6789",
        "-1234.56789",
        "1.2.3.4.5.6",
        "99.000000001",
    ] {
        let f = format_entree(s);
        assert!(f.chars().count() <= 7, "{s:?} -> {f:?}");
        assert_eq!(f.matches('.').count(), 1, "{s:?} -> {f:?}");
    }
}

#[test]
fn scn_format_longueur_toujours_bornee() {
    for s in ["123456.789", "12345678.9", "-0.000000001", "1234567890"] {
        assert!(format_entree(s).chars().count() <= 7, "{s:?}");
    }
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn scn_operateur_sans_effet_sur_operande_incomplet() {
    for entree in ["", "5.", "-12.", "0."] {
        for op in [
            Operateur::Plus,
            Operateur::Moins,
            Operateur::Fois,
            Operateur::Divise,
        ] {
            let mut c = etat(entree, "7+", true);
            c.appuyer(Touche::Operateur(op), 0.0);
            assert_eq!(c.entree, entree);
            assert_eq!(c.expression, "7+");
            assert!(c.montre_expression);
        }
    }
}

#[test]
fn scn_fenetre_glissante_douze() {
    // préfixe de 11 caractères + "9" + "+" = 13 caractères : le premier tombe
    let mut c = etat("9", "12345678901", true);
    c.appuyer(Touche::Operateur(Operateur::Plus), 0.0);
    assert_eq!(c.expression, "23456789019+");
    assert_eq!(c.expression.chars().count(), 12);
}

#[test]
fn scn_fenetre_glissante_glyphes_multioctets() {
    // 11 + 2 = 13 caractères (mais bien plus d’octets) : on compte en caractères
    let mut c = etat("4", "11×2×3×4×5×", true);
    c.appuyer(Touche::Operateur(Operateur::Divise), 0.0);
    assert_eq!(c.expression, "1×2×3×4×5×4÷");
}

/* ------------------------ C ------------------------ */

#[test]
fn scn_effacer_depuis_tout_etat() {
    let depart = [
        etat("0", "", false),
        etat("123", "4+", true),
        etat(ERREUR, "", false),
        etat("NaN", "", false),
        etat("1234567", "99×", true),
    ];
    for mut c in depart {
        c.debordement = true;
        c.appuyer(Touche::Effacer, 0.0);
        assert_efface(&c);
    }
}

#[test]
fn scn_effacer_annule_impulsion() {
    let mut c = etat("1234567", "", false);
    c.appuyer(Touche::Point, 1.0);
    c.appuyer(Touche::Effacer, 1.1);
    assert_eq!(c.prochaine_echeance(), None);
    assert_efface(&c);
}

/* ------------------------ "=" ------------------------ */

#[test]
fn scn_operande_seul() {
    let mut c = Calculatrice::default();
    tape(&mut c, &[Touche::Chiffre(5), Touche::Egal]);
    assert_eq!(c.entree, "5");
}

#[test]
fn scn_six_plus_trois() {
    let mut c = etat("6", "", false);
    tape(
        &mut c,
        &[
            Touche::Operateur(Operateur::Plus),
            Touche::Chiffre(3),
            Touche::Egal,
        ],
    );
    assert_eq!(c.entree, "9");
    assert!(!c.montre_expression);
}

#[test]
fn scn_division_par_zero_selon_strategie() {
    let touches = [
        Touche::Operateur(Operateur::Divise),
        Touche::Chiffre(0),
        Touche::Egal,
    ];

    let mut g = etat("1", "", false);
    tape(&mut g, &touches);
    assert_eq!(g.entree, ERREUR);
    assert!(!g.debordement);
    assert_eq!(g.expression, "");

    let mut b = etat("1", "", false);
    b.strategie = Strategie::Binaire;
    tape(&mut b, &touches);
    assert_eq!(b.entree, "NaN");
}

#[test]
fn scn_expression_vide_remet_a_zero() {
    let mut c = etat("", "", true);
    c.appuyer(Touche::Egal, 0.0);
    assert_efface(&c);
}

#[test]
fn scn_prefixe_tronque_devient_erreur() {
    // la fenêtre a coupé au milieu : l’expression commence par un opérateur
    let mut c = etat("2", "×3+", true);
    c.appuyer(Touche::Egal, 0.0);
    assert_eq!(c.entree, ERREUR);
}

#[test]
fn scn_operande_negatif_apres_operateur() {
    // "6--5" : le second "-" est lu comme moins unaire (6 - (-5)), pas comme une
    // erreur de syntaxe.
    let mut c = etat("6", "", false);
    tape(
        &mut c,
        &[
            Touche::Operateur(Operateur::Moins),
            Touche::Chiffre(5),
            Touche::Signe,
            Touche::Egal,
        ],
    );
    assert_eq!(c.entree, "11");
}

/* ------------------------ +/- ------------------------ */

#[test]
fn scn_bascule_signe() {
    let mut c = etat("0", "", false);
    c.appuyer(Touche::Signe, 0.0);
    assert_eq!(c.entree, "0");

    let mut c = etat("5", "", false);
    c.appuyer(Touche::Signe, 0.0);
    assert_eq!(c.entree, "-5");
    c.appuyer(Touche::Signe, 0.0);
    assert_eq!(c.entree, "5");
}

#[test]
fn scn_bascule_signe_budget() {
    let mut c = etat("1234567", "", false);
    c.appuyer(Touche::Signe, 0.0);
    assert_eq!(c.entree, "-123456");
    assert!(c.debordement);
}
