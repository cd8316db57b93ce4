//! Tests de bout en bout : génération -> format fichier -> relecture ->
//! correction. Le circuit complet, sur tirages reproductibles.

use super::correction::{corriger, formater_bilan};
use super::eval::evaluer_expression;
use super::fraction::Fraction;
use super::generation::Generateur;

/// Lignes « N. texte = » / « N. valeur », exactement comme les fichiers.
fn lignes_exercices(portee: i64, graine: u64, quantite: usize) -> (Vec<String>, Vec<String>) {
    let mut generateur = Generateur::avec_graine(portee, graine);
    let mut exercices = Vec::with_capacity(quantite);
    let mut reponses = Vec::with_capacity(quantite);

    for i in 0..quantite {
        let (expression, valeur) = generateur
            .nouvelle_expression()
            .unwrap_or_else(|e| panic!("génération {i}: {e}"));
        exercices.push(format!("{}. {expression} =", i + 1));
        reponses.push(format!("{}. {valeur}", i + 1));
    }
    (exercices, reponses)
}

#[test]
fn corriger_son_propre_corrige_tout_juste() {
    let (exercices, reponses) = lignes_exercices(100, 4242, 30);
    let bilan = corriger(&exercices, &reponses);

    assert_eq!(bilan.correctes.len(), 30);
    assert!(bilan.fautes.is_empty());
    assert_eq!(
        formater_bilan(&bilan),
        format!(
            "Correct: 30 ({})\nWrong: 0\n",
            (1..=30).map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
        )
    );
}

#[test]
fn corrige_decale_ligne_a_ligne() {
    // réponses décalées d'un cran : on vérifie ligne à ligne plutôt que de
    // parier sur « tout faux » (deux exercices peuvent partager une valeur)
    let (exercices, reponses) = lignes_exercices(50, 7, 12);
    let decalees: Vec<String> = reponses.iter().cycle().skip(1).take(12).cloned().collect();

    let bilan = corriger(&exercices, &decalees);
    for (i, (exercice, reponse)) in exercices.iter().zip(&decalees).enumerate() {
        let texte = exercice.split_once(". ").map(|(_, t)| t).unwrap_or(exercice);
        let attendue = evaluer_expression(texte).unwrap();
        let fournie: Fraction = reponse
            .split_once(". ")
            .map(|(_, v)| v)
            .unwrap_or(reponse)
            .parse()
            .unwrap();
        let juste = (attendue.valeur_f64() - fournie.valeur_f64()).abs() < 1e-6;
        if juste {
            assert!(bilan.correctes.contains(&(i + 1)));
        } else {
            assert!(bilan.fautes.contains(&(i + 1)));
        }
    }
}

#[test]
fn relecture_du_format_fichier() {
    // chaque valeur écrite doit se relire telle quelle (aller-retour strict)
    let (_, reponses) = lignes_exercices(60, 123, 25);
    for ligne in &reponses {
        let (_, texte) = ligne.split_once(". ").unwrap();
        let valeur: Fraction = texte.parse().unwrap();
        assert_eq!(valeur.to_string(), texte);
    }
}

#[test]
fn les_exercices_respectent_la_grammaire() {
    let (exercices, _) = lignes_exercices(80, 31, 25);
    for ligne in &exercices {
        assert!(ligne.ends_with(" ="), "{ligne:?}");
        let (indice, texte) = ligne.split_once(". ").unwrap();
        assert!(indice.chars().all(|c| c.is_ascii_digit()));
        // le texte sans indice doit s'évaluer sans erreur
        evaluer_expression(texte).unwrap_or_else(|e| panic!("{ligne:?}: {e}"));
    }
}

#[test]
fn jamais_plus_de_trois_operateurs() {
    let mut generateur = Generateur::avec_graine(100, 77);
    for _ in 0..40 {
        let (expression, _) = generateur.nouvelle_expression().unwrap();
        assert!((1..=4).contains(&expression.operandes.len()));
        assert_eq!(expression.operateurs.len() + 1, expression.operandes.len());
    }
}
