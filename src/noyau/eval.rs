// src/noyau/eval.rs
//
// Évaluateur partagé (génération ET correction passent ici — même chemin,
// mêmes résultats pour un même texte).
//
// Trois étapes, sans arbre :
// 1) parenthèses : chaque sous-suite équilibrée est évaluée récursivement
//    et remplacée par son résultat ;
// 2) passe × ÷  : de gauche à droite, chaque triple « a op b » est replié
//    sur place (pas de priorité entre × et ÷ eux-mêmes) ;
// 3) passe + −  : pli gauche-droite sur un accumulateur.

use super::erreurs::ErreurNoyau;
use super::fraction::Fraction;
use super::jetons::{tokenize, Jeton};

/// Point d'entrée : texte (avec ou sans « = » final) -> valeur exacte.
pub fn evaluer_expression(texte: &str) -> Result<Fraction, ErreurNoyau> {
    evaluer_jetons(&tokenize(texte)?)
}

pub fn evaluer_jetons(jetons: &[Jeton]) -> Result<Fraction, ErreurNoyau> {
    let plat = resoudre_parentheses(jetons)?;
    let reste = passe_multiplicative(plat)?;
    passe_additive(reste)
}

/* ------------------------ 1) Parenthèses ------------------------ */

fn resoudre_parentheses(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurNoyau> {
    let mut plat = Vec::with_capacity(jetons.len());
    let mut i = 0;

    while i < jetons.len() {
        match &jetons[i] {
            Jeton::ParOuvrante => {
                let mut profondeur = 1usize;
                let mut j = i + 1;
                while j < jetons.len() && profondeur > 0 {
                    match jetons[j] {
                        Jeton::ParOuvrante => profondeur += 1,
                        Jeton::ParFermante => profondeur -= 1,
                        _ => {}
                    }
                    j += 1;
                }
                if profondeur != 0 {
                    return Err(ErreurNoyau::ParenthesesNonEquilibrees);
                }
                // jetons[i+1 .. j-1] est la sous-suite sans ses parenthèses
                let sous_resultat = evaluer_jetons(&jetons[i + 1..j - 1])?;
                plat.push(Jeton::Nombre(sous_resultat));
                i = j;
            }
            Jeton::ParFermante => return Err(ErreurNoyau::ParenthesesNonEquilibrees),
            autre => {
                plat.push(autre.clone());
                i += 1;
            }
        }
    }

    Ok(plat)
}

/* ------------------------ 2) Passe × ÷ ------------------------ */

fn passe_multiplicative(mut jetons: Vec<Jeton>) -> Result<Vec<Jeton>, ErreurNoyau> {
    let mut i = 0;
    while i < jetons.len() {
        let Some(&Jeton::Operateur(op)) = jetons.get(i) else {
            i += 1;
            continue;
        };
        if !op.est_multiplicatif() {
            i += 1;
            continue;
        }

        let (gauche, droite) = voisins(&jetons, i)?;
        let resultat = op.appliquer(&gauche, &droite)?;
        jetons.splice(i - 1..=i + 1, [Jeton::Nombre(resultat)]);
        i -= 1;
        // i pointe sur le résultat ; le prochain tour examine le jeton suivant
    }
    Ok(jetons)
}

/// Opérandes immédiates à gauche et à droite d'un opérateur en position i.
fn voisins(jetons: &[Jeton], i: usize) -> Result<(Fraction, Fraction), ErreurNoyau> {
    if i == 0 || i + 1 >= jetons.len() {
        return Err(ErreurNoyau::ExpressionMalformee);
    }
    match (&jetons[i - 1], &jetons[i + 1]) {
        (Jeton::Nombre(g), Jeton::Nombre(d)) => Ok((g.clone(), d.clone())),
        _ => Err(ErreurNoyau::ExpressionMalformee),
    }
}

/* ------------------------ 3) Passe + − ------------------------ */

fn passe_additive(jetons: Vec<Jeton>) -> Result<Fraction, ErreurNoyau> {
    let mut suite = jetons.into_iter();

    let Some(Jeton::Nombre(premier)) = suite.next() else {
        return Err(ErreurNoyau::ExpressionMalformee);
    };
    let mut accumulateur = premier;

    loop {
        match suite.next() {
            None => return Ok(accumulateur),
            Some(Jeton::Operateur(op)) if !op.est_multiplicatif() => {
                let Some(Jeton::Nombre(suivant)) = suite.next() else {
                    return Err(ErreurNoyau::ExpressionMalformee);
                };
                accumulateur = op.appliquer(&accumulateur, &suivant)?;
            }
            Some(_) => return Err(ErreurNoyau::ExpressionMalformee),
        }
    }
}

/* ------------------------ Tests ------------------------ */
