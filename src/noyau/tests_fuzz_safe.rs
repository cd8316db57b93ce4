//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'évaluateur et le générateur sans brûler la machine.
//! - RNG déterministe (graine fixe)
//! - budget temps global
//! - l'évaluateur ne panique JAMAIS : toute entrée tordue donne une erreur
//!   du noyau, jamais autre chose

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::erreurs::ErreurNoyau;
use super::eval::evaluer_expression;
use super::fraction::Fraction;
use super::generation::Generateur;

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(depart: Instant, max: Duration) {
    if depart.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Soupe de jetons ------------------------ */

const MOTS: [&str; 14] = [
    "0", "3", "12", "1/2", "2/3", "5/6", "2'1/4", "7'3/8", "+", "-", "*", "/", "(", ")",
];

fn soupe(rng: &mut ChaCha8Rng) -> String {
    let longueur = rng.gen_range(1..=9);
    let mut mots = Vec::with_capacity(longueur);
    for _ in 0..longueur {
        mots.push(MOTS[rng.gen_range(0..MOTS.len())]);
    }
    mots.join(" ")
}

fn erreur_attendue(e: &ErreurNoyau) -> bool {
    // tout sauf l'épuisement du générateur, qui n'a rien à faire ici
    !matches!(e, ErreurNoyau::TentativesEpuisees)
}

#[test]
fn evaluateur_jamais_en_panique() {
    let depart = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(0xCAFE);

    for _ in 0..5_000 {
        budget(depart, Duration::from_secs(20));

        let texte = soupe(&mut rng);
        match evaluer_expression(&texte) {
            Ok(_) => {}
            Err(e) => assert!(erreur_attendue(&e), "{texte:?} -> {e}"),
        }
    }
}

#[test]
fn evaluateur_deterministe() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xBEEF);
    for _ in 0..500 {
        let texte = soupe(&mut rng);
        assert_eq!(evaluer_expression(&texte), evaluer_expression(&texte));
    }
}

/* ------------------------ Générateur martelé ------------------------ */

#[test]
fn generateur_tient_ses_contraintes_sur_plusieurs_graines() {
    let depart = Instant::now();

    for graine in 0..8u64 {
        let portee = 5 + 9 * graine as i64; // 5, 14, 23, …
        let borne = Fraction::entiere(portee);
        let mut generateur = Generateur::avec_graine(portee, graine);

        for _ in 0..25 {
            budget(depart, Duration::from_secs(30));

            let (expression, valeur) = generateur
                .nouvelle_expression()
                .unwrap_or_else(|e| panic!("graine {graine}: {e}"));

            assert!(!valeur.est_negative(), "{expression} = {valeur}");
            assert!(valeur < borne, "{expression} = {valeur} (portée {portee})");
            assert_eq!(
                evaluer_expression(&expression.texte()).as_ref(),
                Ok(&valeur)
            );
        }
    }
}

#[test]
fn generateurs_independants_ne_partagent_rien() {
    // deux générateurs, graines différentes : chacun son jeu de doublons,
    // aucune interférence (l'un peut émettre une forme déjà vue par l'autre)
    let mut g1 = Generateur::avec_graine(10, 1);
    let mut g2 = Generateur::avec_graine(10, 2);

    let mut formes1 = Vec::new();
    for _ in 0..15 {
        formes1.push(g1.nouvelle_expression().unwrap().0.texte());
    }
    for _ in 0..15 {
        // il suffit que g2 ne tombe pas en épuisement à cause de g1
        g2.nouvelle_expression().unwrap();
    }
    assert_eq!(formes1.len(), 15);
}
