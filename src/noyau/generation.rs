// src/noyau/generation.rs
//
// Générateur d'exercices : tirage contraint, validation par RÉ-ÉVALUATION
// COMPLÈTE du candidat via l'évaluateur partagé (un seul chemin de calcul,
// le même que la correction), dédoublonnage par formes canoniques.
//
// Contraintes d'étape (pédagogiques) :
// - résultat intermédiaire toujours ≥ 0 ;
// - + et × : résultat strictement sous la portée ;
// - ÷ : quotient strictement entre 0 et 1 (vraie fraction).
//
// Terminaison garantie : le retirage sur doublon est borné
// (TENTATIVES_EXPRESSION_MAX), l'épuisement est une erreur explicite.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::canon::variantes_canoniques;
use super::erreurs::ErreurNoyau;
use super::eval::evaluer_expression;
use super::expression::Expression;
use super::fraction::Fraction;
use super::jetons::Op;

/// Retirages d'expression complète avant d'abandonner (portée trop petite
/// pour la quantité demandée, par exemple).
pub const TENTATIVES_EXPRESSION_MAX: usize = 1_000;

/// Tirages d'un couple opérateur/opérande avant de tronquer l'exercice.
const TENTATIVES_ETAPE_MAX: usize = 10;

/// Dénominateurs scolaires, utilisés dès que la portée dépasse 10.
const DENOMINATEURS_USUELS: [i64; 7] = [2, 3, 4, 5, 6, 8, 10];

pub struct Generateur {
    portee: i64,
    rng: ChaCha8Rng,
    deja_vues: HashSet<String>,
}

impl Generateur {
    /// `portee` : borne exclusive des grandeurs générées (> 0).
    pub fn new(portee: i64) -> Generateur {
        Generateur {
            portee: portee.max(1),
            rng: ChaCha8Rng::from_entropy(),
            deja_vues: HashSet::new(),
        }
    }

    /// Même générateur, graine fixée (tests / tirages reproductibles).
    pub fn avec_graine(portee: i64, graine: u64) -> Generateur {
        Generateur {
            portee: portee.max(1),
            rng: ChaCha8Rng::seed_from_u64(graine),
            deja_vues: HashSet::new(),
        }
    }

    /// Produit un exercice inédit et sa valeur exacte.
    pub fn nouvelle_expression(&mut self) -> Result<(Expression, Fraction), ErreurNoyau> {
        for _ in 0..TENTATIVES_EXPRESSION_MAX {
            let (expression, valeur) = self.candidate();

            let variantes = variantes_canoniques(&expression);
            if variantes.iter().any(|v| self.deja_vues.contains(v)) {
                log::debug!("doublon rejeté: {expression}");
                continue;
            }
            for v in variantes {
                self.deja_vues.insert(v);
            }
            return Ok((expression, valeur));
        }
        Err(ErreurNoyau::TentativesEpuisees)
    }

    /* ------------------------ construction d'un candidat ------------------------ */

    fn candidate(&mut self) -> (Expression, Fraction) {
        let operateurs_prevus = self.rng.gen_range(1..=3);

        let premier = self.nombre_aleatoire();
        let mut expression = Expression {
            operandes: vec![premier.clone()],
            operateurs: Vec::new(),
        };
        let mut resultat = premier;

        for _ in 0..operateurs_prevus {
            let mut accepte = false;

            for _ in 0..TENTATIVES_ETAPE_MAX {
                let op = self.operateur_aleatoire(resultat.est_entiere());
                let suivante = if op.est_multiplicatif() {
                    self.entier_aleatoire()
                } else {
                    self.nombre_aleatoire()
                };

                let mut essai = expression.clone();
                essai.operateurs.push(op);
                essai.operandes.push(suivante);

                // ré-évaluation complète : une erreur (division par zéro…)
                // invalide simplement ce pas
                let Ok(valeur) = evaluer_expression(&essai.texte()) else {
                    continue;
                };
                if !self.etape_valide(op, &valeur) {
                    continue;
                }

                expression = essai;
                resultat = valeur;
                accepte = true;
                break;
            }

            if !accepte {
                // exercice plus court que prévu : acceptable, jamais une erreur
                break;
            }
        }

        (expression, resultat)
    }

    fn etape_valide(&self, op: Op, valeur: &Fraction) -> bool {
        if valeur.est_negative() {
            return false;
        }
        match op {
            Op::Plus | Op::Fois => *valeur < Fraction::entiere(self.portee),
            Op::Moins => true,
            Op::Division => !valeur.est_nulle() && *valeur < Fraction::entiere(1),
        }
    }

    /* ------------------------ tirages élémentaires ------------------------ */

    fn entier_aleatoire(&mut self) -> Fraction {
        Fraction::entiere(self.rng.gen_range(0..self.portee))
    }

    fn fraction_aleatoire(&mut self) -> Fraction {
        let denominateur = if self.portee > 10 {
            DENOMINATEURS_USUELS[self.rng.gen_range(0..DENOMINATEURS_USUELS.len())]
        } else {
            self.rng.gen_range(2..=self.portee.max(2))
        };
        let numerateur = self.rng.gen_range(1..denominateur);

        // partie entière petite pour garder le calcul simple
        let plafond = (self.portee / 2).clamp(1, 5);
        let entier = self.rng.gen_range(0..plafond);

        Fraction::mixte(entier, numerateur, denominateur).expect("dénominateur ≥ 2")
    }

    /// Entier ou mixte, pondéré vers l'entier (60 %).
    fn nombre_aleatoire(&mut self) -> Fraction {
        if self.rng.gen_range(0..100) < 60 {
            self.entier_aleatoire()
        } else {
            self.fraction_aleatoire()
        }
    }

    /// Pondération conditionnée : résultat entier => plutôt + / −,
    /// résultat fractionnaire => plutôt ×. Heuristique de portée, pas
    /// une exigence de correction.
    fn operateur_aleatoire(&mut self, resultat_entier: bool) -> Op {
        let table: [Op; 5] = if resultat_entier {
            [Op::Plus, Op::Plus, Op::Moins, Op::Fois, Op::Division]
        } else {
            [Op::Plus, Op::Moins, Op::Fois, Op::Fois, Op::Division]
        };
        table[self.rng.gen_range(0..table.len())]
    }
}

/* ------------------------ Tests ------------------------ */
