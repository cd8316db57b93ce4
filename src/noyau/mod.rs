//! Noyau exact de l'exerciseur (ℚ pur)
//!
//! Organisation interne :
//! - fraction.rs   : rationnel exact + forme scolaire (N, N/D, I'N/D)
//! - jetons.rs     : opérateurs (type fermé) + tokenisation
//! - expression.rs : suite plate opérandes/opérateurs
//! - eval.rs       : parenthèses puis deux passes (× ÷, puis + −)
//! - canon.rs      : clefs canoniques (doublons par commutativité/associativité)
//! - generation.rs : tirage contraint d'exercices, dédoublonnage
//! - correction.rs : ré-évaluation + comparaison des réponses

pub mod canon;
pub mod correction;
pub mod erreurs;
pub mod eval;
pub mod expression;
pub mod fraction;
pub mod generation;
pub mod jetons;

#[cfg(test)]
mod tests_arithmetiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurNoyau;
pub use eval::evaluer_expression;
