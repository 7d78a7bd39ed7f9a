// src/noyau/erreur.rs

/// Les deux seules erreurs du pipeline d’évaluation.
///
/// Aucune n’est fatale : `Saisie::evaluate` les replie en résultat `Error`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErreurCalcul {
    /// Texte impossible à découper ou à analyser.
    #[error("expression malformée : {0}")]
    ExpressionMalformee(String),

    /// Valeur finale non finie (division par zéro, NaN…).
    #[error("erreur mathématique : résultat non fini")]
    ErreurMathematique,
}

impl ErreurCalcul {
    pub(crate) fn malformee(msg: impl Into<String>) -> Self {
        ErreurCalcul::ExpressionMalformee(msg.into())
    }
}
