// src/app.rs
//
// Modes applicatifs (glue au-dessus du noyau) :
// - generer  : tirage de N exercices + écriture exercices/corrigé
// - corriger : relecture des fichiers + bilan Correct/Wrong
//
// IMPORTANT (structure projet) : aucun calcul ici, le noyau porte toute
// l'arithmétique ; ce module n'assemble que fichiers et journaux.

pub mod fichiers;

use std::path::Path;

use anyhow::Context;

use crate::noyau::correction;
use crate::noyau::generation::Generateur;

pub fn generer(
    quantite: usize,
    portee: i64,
    graine: Option<u64>,
    chemin_exercices: &Path,
    chemin_reponses: &Path,
) -> anyhow::Result<()> {
    let mut generateur = match graine {
        Some(g) => Generateur::avec_graine(portee, g),
        None => Generateur::new(portee),
    };

    let mut exercices = Vec::with_capacity(quantite);
    for i in 0..quantite {
        let exercice = generateur
            .nouvelle_expression()
            .with_context(|| format!("génération de l'exercice {} sur {quantite}", i + 1))?;
        exercices.push(exercice);
    }

    fichiers::ecrire_exercices(chemin_exercices, chemin_reponses, &exercices)?;
    log::info!(
        "{quantite} exercices (portée {portee}) écrits dans {} / {}",
        chemin_exercices.display(),
        chemin_reponses.display()
    );
    Ok(())
}

pub fn corriger(
    chemin_exercices: &Path,
    chemin_reponses: &Path,
    chemin_bilan: &Path,
) -> anyhow::Result<()> {
    let exercices = fichiers::lire_lignes(chemin_exercices)?;
    let reponses = fichiers::lire_lignes(chemin_reponses)?;

    let bilan = correction::corriger(&exercices, &reponses);
    fichiers::ecrire_bilan(chemin_bilan, &bilan)?;

    log::info!(
        "bilan écrit dans {} : {} correcte(s), {} faute(s)",
        chemin_bilan.display(),
        bilan.correctes.len(),
        bilan.fautes.len()
    );
    Ok(())
}
