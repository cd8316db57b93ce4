// src/noyau/canon.rs
//
// Forme canonique : clef textuelle de dédoublonnage. Deux exercices qui ne
// diffèrent que par commutation des opérandes de + / ×, ou par ré-association
// d'une chaîne de deux opérateurs commutatifs identiques, partagent la même
// clef et ne doivent pas être émis tous les deux.
//
// Limite assumée : chaînes mixtes (+ avec −, × avec ÷) et expressions à
// trois opérateurs ou plus sont canonisées telles quelles.

use super::expression::Expression;
use super::jetons::Op;

/// Clef canonique d'une expression.
/// - un opérateur commutatif  : petite opérande d'abord ;
/// - deux opérateurs commutatifs identiques : trois opérandes triées par valeur ;
/// - tout le reste : texte tel quel.
pub fn forme_canonique(expression: &Expression) -> String {
    match expression.operateurs.as_slice() {
        [op] if op.est_commutatif() => {
            let (a, b) = (&expression.operandes[0], &expression.operandes[1]);
            if b < a {
                Expression {
                    operandes: vec![b.clone(), a.clone()],
                    operateurs: expression.operateurs.clone(),
                }
                .texte()
            } else {
                expression.texte()
            }
        }

        [op1, op2] if op1 == op2 && op1.est_commutatif() => {
            let mut triees = expression.operandes.clone();
            triees.sort();
            Expression {
                operandes: triees,
                operateurs: expression.operateurs.clone(),
            }
            .texte()
        }

        _ => expression.texte(),
    }
}

/// Toutes les clefs sous lesquelles l'expression doit être connue.
/// Pour deux opérateurs commutatifs identiques, la variante ré-associée
/// « b op c op a » est canonisée elle aussi : doublon si L'UNE OU L'AUTRE
/// a déjà été vue, et les deux sont enregistrées à l'acceptation.
pub fn variantes_canoniques(expression: &Expression) -> Vec<String> {
    if let [op1, op2] = expression.operateurs.as_slice() {
        if op1 == op2 && op1.est_commutatif() {
            let reassociee = Expression {
                operandes: vec![
                    expression.operandes[1].clone(),
                    expression.operandes[2].clone(),
                    expression.operandes[0].clone(),
                ],
                operateurs: expression.operateurs.clone(),
            };
            let mut clefs = vec![forme_canonique(expression), forme_canonique(&reassociee)];
            clefs.dedup();
            return clefs;
        }
    }
    vec![forme_canonique(expression)]
}
