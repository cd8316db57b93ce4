// src/noyau/fraction.rs
//
// Rationnel exact (sans flottants) sous sa forme scolaire :
// - entier          -> "N"
// - fraction propre -> "N/D"
// - nombre mixte    -> "I'N/D"   (apostrophe entre partie entière et fraction)
//
// Invariants portés par BigRational : dénominateur strictement positif,
// numérateur/dénominateur premiers entre eux. La découpe en forme mixte
// est une affaire d'affichage, jamais de stockage.
//
// Le f64 ne sert QUE d'oracle d'inégalité pour la tolérance de correction
// (|a-b| < 1e-6) ; toute l'arithmétique interne reste exacte.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreurs::ErreurNoyau;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fraction(BigRational);

impl Fraction {
    pub fn zero() -> Fraction {
        Fraction(BigRational::zero())
    }

    pub fn entiere(n: i64) -> Fraction {
        Fraction(BigRational::from_integer(BigInt::from(n)))
    }

    /// Construit num/den. Le signe du dénominateur remonte au numérateur,
    /// la réduction par le PGCD est immédiate.
    pub fn nouvelle(num: BigInt, den: BigInt) -> Result<Fraction, ErreurNoyau> {
        if den.is_zero() {
            return Err(ErreurNoyau::DenominateurNul);
        }
        Ok(Fraction(BigRational::new(num, den)))
    }

    /// Nombre mixte entier + num/den. Lecture conventionnelle du signe :
    /// un entier négatif porte le signe sur la valeur entière ("-2'1/3" = -(2+1/3)).
    pub fn mixte(entier: i64, num: i64, den: i64) -> Result<Fraction, ErreurNoyau> {
        if den == 0 {
            return Err(ErreurNoyau::DenominateurNul);
        }
        let base = BigRational::from_integer(BigInt::from(entier));
        let propre = BigRational::new(BigInt::from(num), BigInt::from(den));
        Ok(Fraction(if base.is_negative() {
            base - propre
        } else {
            base + propre
        }))
    }

    pub fn ajouter(&self, autre: &Fraction) -> Fraction {
        Fraction(&self.0 + &autre.0)
    }

    pub fn soustraire(&self, autre: &Fraction) -> Fraction {
        Fraction(&self.0 - &autre.0)
    }

    pub fn multiplier(&self, autre: &Fraction) -> Fraction {
        Fraction(&self.0 * &autre.0)
    }

    pub fn diviser(&self, autre: &Fraction) -> Result<Fraction, ErreurNoyau> {
        if autre.0.is_zero() {
            return Err(ErreurNoyau::DivisionParZero);
        }
        Ok(Fraction(&self.0 / &autre.0))
    }

    pub fn est_nulle(&self) -> bool {
        self.0.is_zero()
    }

    pub fn est_entiere(&self) -> bool {
        self.0.denom().is_one()
    }

    pub fn est_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Oracle flottant (tolérance de correction uniquement).
    pub fn valeur_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

/* ------------------------ Affichage (grammaire du fichier) ------------------------ */

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.0;

        if r.denom().is_one() {
            return write!(f, "{}", r.numer());
        }

        let signe = if r.is_negative() { "-" } else { "" };
        let abs = r.abs();
        let entier = abs.to_integer();
        let reste = &abs - BigRational::from_integer(entier.clone());

        if entier.is_zero() {
            write!(f, "{signe}{}/{}", reste.numer(), reste.denom())
        } else {
            write!(f, "{signe}{entier}'{}/{}", reste.numer(), reste.denom())
        }
    }
}

/* ------------------------ Décodage (grammaire du fichier) ------------------------ */

fn entier_depuis(txt: &str, origine: &str) -> Result<BigInt, ErreurNoyau> {
    txt.parse::<BigInt>()
        .map_err(|_| ErreurNoyau::JetonInvalide(origine.to_string()))
}

impl FromStr for Fraction {
    type Err = ErreurNoyau;

    /// Détecte la forme présente en cherchant « ' » puis « / ».
    fn from_str(s: &str) -> Result<Fraction, ErreurNoyau> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ErreurNoyau::JetonInvalide(s.to_string()));
        }

        match (s.find('\''), s.find('/')) {
            // entier simple
            (None, None) => Ok(Fraction(BigRational::from_integer(entier_depuis(s, s)?))),

            // fraction N/D
            (None, Some(barre)) => {
                let num = entier_depuis(&s[..barre], s)?;
                let den = entier_depuis(&s[barre + 1..], s)?;
                Fraction::nouvelle(num, den)
            }

            // nombre mixte I'N/D
            (Some(apostrophe), Some(barre)) if apostrophe < barre => {
                let entier = entier_depuis(&s[..apostrophe], s)?;
                let num = entier_depuis(&s[apostrophe + 1..barre], s)?;
                let den = entier_depuis(&s[barre + 1..], s)?;
                if den.is_zero() {
                    return Err(ErreurNoyau::DenominateurNul);
                }
                if num.is_negative() || den.is_negative() {
                    // la partie fractionnaire d'un mixte est toujours positive
                    return Err(ErreurNoyau::JetonInvalide(s.to_string()));
                }
                let base = BigRational::from_integer(entier);
                let propre = BigRational::new(num, den);
                Ok(Fraction(if base.is_negative() {
                    base - propre
                } else {
                    base + propre
                }))
            }

            _ => Err(ErreurNoyau::JetonInvalide(s.to_string())),
        }
    }
}

/* ------------------------ Tests ------------------------ */
