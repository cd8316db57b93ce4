// src/noyau/expression.rs
//
// Suite plate : opérandes entrelacées d'opérateurs binaires, lus de gauche
// à droite. Invariant : operateurs.len() == operandes.len() - 1.
//
// Le texte produit est exactement celui du fichier d'exercices, sans le
// « = » final (ajouté par l'écriture du fichier).

use std::fmt;

use super::fraction::Fraction;
use super::jetons::Op;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    pub operandes: Vec<Fraction>,
    pub operateurs: Vec<Op>,
}

impl Expression {
    pub fn texte(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_assert_eq!(self.operateurs.len() + 1, self.operandes.len());

        write!(f, "{}", self.operandes[0])?;
        for (op, operande) in self.operateurs.iter().zip(self.operandes.iter().skip(1)) {
            write!(f, " {op} {operande}")?;
        }
        Ok(())
    }
}
