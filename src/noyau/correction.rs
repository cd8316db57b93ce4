// src/noyau/correction.rs
//
// Correction : chaque exercice soumis est RÉ-ÉVALUÉ (même évaluateur que la
// génération) puis comparé à la réponse fournie. Une ligne illisible ou
// incalculable est simplement comptée fausse ; le lot ne s'interrompt jamais.

use super::eval::evaluer_expression;
use super::fraction::Fraction;

/// Tolérance de comparaison sur l'oracle flottant.
const TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub correctes: Vec<usize>,
    pub fautes: Vec<usize>,
}

/// Corrige les paires (ligne d'exercice, ligne de réponse), indices 1-based.
/// Les lignes excédentaires d'un des deux fichiers sont ignorées.
pub fn corriger(exercices: &[String], reponses: &[String]) -> Bilan {
    let mut bilan = Bilan::default();

    for (i, (exercice, reponse)) in exercices.iter().zip(reponses).enumerate() {
        let indice = i + 1;
        if ligne_correcte(exercice, reponse) {
            bilan.correctes.push(indice);
        } else {
            bilan.fautes.push(indice);
        }
    }

    bilan
}

fn ligne_correcte(exercice: &str, reponse: &str) -> bool {
    let Ok(attendue) = evaluer_expression(depouiller(exercice)) else {
        return false;
    };
    let Ok(fournie) = depouiller(reponse).parse::<Fraction>() else {
        return false;
    };
    (attendue.valeur_f64() - fournie.valeur_f64()).abs() < TOLERANCE
}

/// Retire l'indice « N. » en tête et le « = » final d'une ligne.
fn depouiller(ligne: &str) -> &str {
    let sans_indice = match ligne.find(". ") {
        Some(p) if !ligne[..p].is_empty() && ligne[..p].chars().all(|c| c.is_ascii_digit()) => {
            &ligne[p + 2..]
        }
        _ => ligne,
    };
    sans_indice.trim().trim_end_matches('=').trim_end()
}

/* ------------------------ Sortie (contrat du fichier Grade) ------------------------ */

/// Deux lignes : « Correct: n (i, j, …) » puis « Wrong: n (…) »,
/// « Correct: 0 » / « Wrong: 0 » pour un lot vide.
pub fn formater_bilan(bilan: &Bilan) -> String {
    format!(
        "{}\n{}\n",
        ligne_bilan("Correct", &bilan.correctes),
        ligne_bilan("Wrong", &bilan.fautes)
    )
}

fn ligne_bilan(etiquette: &str, indices: &[usize]) -> String {
    if indices.is_empty() {
        return format!("{etiquette}: 0");
    }
    let liste = indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{etiquette}: {} ({liste})", indices.len())
}

/* ------------------------ Tests ------------------------ */
