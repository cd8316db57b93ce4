// src/noyau/jetons.rs
//
// Jetons du format de fichier : nombres, opérateurs, parenthèses.
// Le « = » final d'une ligne d'exercice est un simple marqueur, ignoré ici.
//
// Les quatre opérateurs forment un type fermé : chacun porte sa propre
// évaluation (appliquer), son symbole et ses prédicats. Aucun `match` sur
// des caractères ailleurs dans le noyau.

use std::fmt;

use super::erreurs::ErreurNoyau;
use super::fraction::Fraction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Division,
}

impl Op {
    pub fn appliquer(&self, gauche: &Fraction, droite: &Fraction) -> Result<Fraction, ErreurNoyau> {
        match self {
            Op::Plus => Ok(gauche.ajouter(droite)),
            Op::Moins => Ok(gauche.soustraire(droite)),
            Op::Fois => Ok(gauche.multiplier(droite)),
            Op::Division => gauche.diviser(droite),
        }
    }

    pub fn symbole(&self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Division => '/',
        }
    }

    /// Commutatif au sens du dédoublonnage : + et ×.
    pub fn est_commutatif(&self) -> bool {
        matches!(self, Op::Plus | Op::Fois)
    }

    /// Passe prioritaire de l'évaluateur : × et ÷.
    pub fn est_multiplicatif(&self) -> bool {
        matches!(self, Op::Fois | Op::Division)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    Nombre(Fraction),
    Operateur(Op),
    ParOuvrante,
    ParFermante,
}

/// Découpe une ligne (déjà sans indice « N. ») en jetons.
/// Les mots sont séparés par des blancs ; tout ce qui n'est ni opérateur,
/// ni parenthèse, ni « = » doit être un nombre de la grammaire.
pub fn tokenize(texte: &str) -> Result<Vec<Jeton>, ErreurNoyau> {
    let mut jetons = Vec::new();

    for mot in texte.split_whitespace() {
        if mot == "=" {
            continue;
        }
        jetons.push(match mot {
            "(" => Jeton::ParOuvrante,
            ")" => Jeton::ParFermante,
            "+" => Jeton::Operateur(Op::Plus),
            "-" => Jeton::Operateur(Op::Moins),
            "*" => Jeton::Operateur(Op::Fois),
            "/" => Jeton::Operateur(Op::Division),
            nombre => Jeton::Nombre(nombre.parse()?),
        });
    }

    Ok(jetons)
}
