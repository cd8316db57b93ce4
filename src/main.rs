// src/main.rs
//
// Exerciseur Q-pur — point d'entrée CLI
// -------------------------------------
// Deux modes, calqués sur les options historiques -n/-r et -e/-a :
// - generer  : N exercices dans la portée demandée + corrigé
// - corriger : confronte un fichier de réponses aux exercices
//
// IMPORTANT (structure projet) :
// - toute l'arithmétique vit dans src/noyau/
// - ici : options, validation, dispatch — rien d'autre

use std::path::PathBuf;

use anyhow::ensure;
use clap::{Parser, Subcommand};

mod app;
mod noyau;

#[derive(Parser, Debug)]
#[command(name = "exerciseur-qpur", version, about = "Exercices d'arithmétique élémentaire en ℚ pur : génération et correction")]
struct Cli {
    #[command(subcommand)]
    commande: Commande,
}

#[derive(Subcommand, Debug)]
enum Commande {
    /// Génère des exercices et leur corrigé
    Generer {
        /// Nombre d'exercices (1 à 10000)
        #[arg(short = 'n', long, default_value_t = 10)]
        quantite: usize,

        /// Portée : borne exclusive des valeurs générées (> 0)
        #[arg(short = 'r', long)]
        portee: i64,

        /// Graine du tirage (tirages reproductibles)
        #[arg(long)]
        graine: Option<u64>,

        /// Fichier des exercices
        #[arg(long, default_value = "Exercises.txt")]
        exercices: PathBuf,

        /// Fichier du corrigé
        #[arg(long, default_value = "Answers.txt")]
        reponses: PathBuf,
    },

    /// Corrige un fichier de réponses
    Corriger {
        /// Fichier des exercices
        #[arg(short = 'e', long)]
        exercices: PathBuf,

        /// Fichier des réponses à corriger
        #[arg(short = 'a', long)]
        reponses: PathBuf,

        /// Fichier du bilan
        #[arg(long, default_value = "Grade.txt")]
        bilan: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().commande {
        Commande::Generer {
            quantite,
            portee,
            graine,
            exercices,
            reponses,
        } => {
            ensure!(
                (1..=10_000).contains(&quantite),
                "le nombre d'exercices doit être entre 1 et 10000 (reçu {quantite})"
            );
            ensure!(portee > 0, "la portée doit être un entier > 0 (reçu {portee})");
            app::generer(quantite, portee, graine, &exercices, &reponses)
        }

        Commande::Corriger {
            exercices,
            reponses,
            bilan,
        } => app::corriger(&exercices, &reponses, &bilan),
    }
}
