//! Tests fuzz safe : séquences de touches aléatoires, invariants d’affichage.
//!
//! But : marteler la machine d’état sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche

use std::time::{Duration, Instant};

use super::eval::Strategie;
use super::machine::{est_sentinelle, Calculatrice, Operateur, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres majoritaires, sinon les séquences restent triviales
    match rng.pick(20) {
        0..=9 => Touche::Chiffre(rng.pick(10) as u8),
        10 | 11 => Touche::Point,
        12 => Touche::Operateur(Operateur::Plus),
        13 => Touche::Operateur(Operateur::Moins),
        14 => Touche::Operateur(Operateur::Fois),
        15 => Touche::Operateur(Operateur::Divise),
        16 => Touche::Signe,
        17 => Touche::Pourcent,
        18 => Touche::Egal,
        _ => {
            // C rare : on veut des états profonds
            if rng.pick(4) == 0 {
                Touche::Effacer
            } else {
                Touche::Egal
            }
        }
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(c: &Calculatrice, historique: &[Touche]) {
    if !est_sentinelle(&c.entree) {
        assert!(
            c.entree.chars().count() <= 7,
            "entrée trop longue: {:?} après {historique:?}",
            c.entree
        );
        assert!(
            c.entree.matches('.').count() <= 1,
            "plusieurs points: {:?} après {historique:?}",
            c.entree
        );
    }
    assert!(
        c.expression.chars().count() <= 12,
        "expression trop longue: {:?} après {historique:?}",
        c.expression
    );
    if !c.montre_expression {
        assert!(
            c.expression.is_empty(),
            "expression cachée mais non vide: {:?}",
            c.expression
        );
    }
}

fn campagne(strategie: Strategie, seed: u64) -> (usize, usize) {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(seed);
    let mut erreurs = 0usize;
    let mut resultats = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut c = Calculatrice::new(strategie);
        let mut historique = Vec::new();
        let mut temps = 0.0;

        for _ in 0..40 {
            let t = gen_touche(&mut rng);
            historique.push(t);
            temps += 0.1;

            c.tic(temps);
            c.appuyer(t, temps);
            check_invariants(&c, &historique);

            if t == Touche::Egal {
                if c.est_erreur() {
                    erreurs += 1;
                } else {
                    resultats += 1;
                }
            }
        }
    }

    (erreurs, resultats)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_generale() {
    let (erreurs, resultats) = campagne(Strategie::Generale, 0xC0FFEE_u64);

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(resultats > 10, "trop peu de résultats: {resultats}");
    assert!(erreurs > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_invariants_binaire() {
    let (_erreurs, resultats) = campagne(Strategie::Binaire, 0xBADC0DE_u64);
    assert!(resultats > 10, "trop peu de résultats: {resultats}");
}

#[test]
fn fuzz_safe_determinisme() {
    let rejoue = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut c = Calculatrice::default();
        for _ in 0..300 {
            c.appuyer(gen_touche(&mut rng), 0.0);
        }
        (c.entree, c.expression, c.montre_expression)
    };

    assert_eq!(rejoue(42), rejoue(42));
}

#[test]
fn fuzz_safe_effacer_absorbe_tout() {
    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..50 {
        let mut c = Calculatrice::default();
        for _ in 0..25 {
            c.appuyer(gen_touche(&mut rng), 0.0);
        }
        c.appuyer(Touche::Effacer, 0.0);
        assert_eq!(c.entree, "0");
        assert_eq!(c.expression, "");
        assert!(!c.montre_expression);
        assert!(!c.debordement);
    }
}
