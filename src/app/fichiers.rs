// src/app/fichiers.rs
//
// Lecture/écriture des trois fichiers du contrat :
// - Exercises.txt : « <i>. <texte> = »
// - Answers.txt   : « <i>. <valeur> »
// - Grade.txt     : deux lignes Correct/Wrong
//
// Glue fine : aucun calcul ici, le noyau fournit textes et bilans.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::noyau::correction::{formater_bilan, Bilan};
use crate::noyau::expression::Expression;
use crate::noyau::fraction::Fraction;

pub fn ecrire_exercices(
    chemin_exercices: &Path,
    chemin_reponses: &Path,
    exercices: &[(Expression, Fraction)],
) -> anyhow::Result<()> {
    let mut texte_exercices = String::new();
    let mut texte_reponses = String::new();

    for (i, (expression, valeur)) in exercices.iter().enumerate() {
        let indice = i + 1;
        let _ = writeln!(texte_exercices, "{indice}. {expression} =");
        let _ = writeln!(texte_reponses, "{indice}. {valeur}");
    }

    fs::write(chemin_exercices, texte_exercices)
        .with_context(|| format!("écriture impossible: {}", chemin_exercices.display()))?;
    fs::write(chemin_reponses, texte_reponses)
        .with_context(|| format!("écriture impossible: {}", chemin_reponses.display()))?;
    Ok(())
}

/// Lignes non vides d'un fichier texte.
pub fn lire_lignes(chemin: &Path) -> anyhow::Result<Vec<String>> {
    let contenu = fs::read_to_string(chemin)
        .with_context(|| format!("lecture impossible: {}", chemin.display()))?;
    Ok(contenu
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}

pub fn ecrire_bilan(chemin: &Path, bilan: &Bilan) -> anyhow::Result<()> {
    fs::write(chemin, formater_bilan(bilan))
        .with_context(|| format!("écriture impossible: {}", chemin.display()))
}
