//! Noyau de la calculatrice de saisie
//!
//! Organisation interne :
//! - saisie.rs  : machine d’état (événements clavier -> texte + résultat)
//! - jetons.rs  : tokenisation (nombres f64, opérateurs, moins unaire)
//! - arbre.rs   : arbre d’expression + parseur à descente récursive
//! - eval.rs    : évaluation f64 + pipeline complet
//! - format.rs  : forme canonique d’affichage
//! - erreur.rs  : ExpressionMalformee / ErreurMathematique

pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod saisie;

#[cfg(test)]
mod tests_saisie;


// API publique minimale
pub use saisie::{Evaluation, Saisie};
