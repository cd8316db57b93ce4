// src/noyau/erreurs.rs
//
// Erreurs du noyau. Une seule énumération : tout ce qui peut échouer
// pendant la construction, l'évaluation ou la génération.
//
// Côté génération : ces erreurs sont TOUJOURS rattrapées localement
// (un pas candidat invalide => on retente). Côté correction : une erreur
// sur une ligne marque la ligne fausse, jamais plus.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurNoyau {
    #[error("dénominateur nul")]
    DenominateurNul,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("jeton invalide: '{0}'")]
    JetonInvalide(String),

    #[error("parenthèses non équilibrées")]
    ParenthesesNonEquilibrees,

    #[error("expression malformée")]
    ExpressionMalformee,

    #[error("tentatives épuisées: impossible de générer un exercice inédit")]
    TentativesEpuisees,
}
