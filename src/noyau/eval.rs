//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> arbre (descente récursive) -> évaluation f64 -> forme canonique
//!
//! Remarque : la finitude n’est vérifiée que sur la valeur finale.
//! Un infini intermédiaire peut donc redevenir fini (arbre 1/(1/0) = 0).

use log::debug;

use super::arbre::{parse, Expr};
use super::erreur::ErreurCalcul;
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize, Operateur};

/// API publique : évalue une expression terminée et retourne sa forme canonique.
pub fn evaluer_expression(expr_str: &str) -> Result<String, ErreurCalcul> {
    if expr_str.is_empty() {
        return Err(ErreurCalcul::malformee("entrée vide"));
    }

    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    debug!("jetons: {}", format_tokens(&jetons));

    // 2) Arbre
    let arbre = parse(&jetons)?;
    debug!("arbre: {arbre}");

    // 3) Valeur (contrôle de finitude au sommet seulement)
    let v = evalue(&arbre);
    if !v.is_finite() {
        return Err(ErreurCalcul::ErreurMathematique);
    }

    // 4) Forme canonique
    Ok(format_nombre(v))
}

/// Évaluation récursive en double précision, sans contrôle.
pub fn evalue(expr: &Expr) -> f64 {
    match expr {
        Expr::Litteral(v) => *v,
        Expr::Binaire(op, a, b) => {
            let a = evalue(a);
            let b = evalue(b);
            match op {
                Operateur::Plus => a + b,
                Operateur::Moins => a - b,
                Operateur::Fois => a * b,
                Operateur::Divise => a / b,
            }
        }
    }
}
