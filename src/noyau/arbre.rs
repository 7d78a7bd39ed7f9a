// src/noyau/arbre.rs
//
// Arbre d’expression + parseur (descente récursive)
//
// Grammaire (du moins au plus prioritaire) :
//   expr  := terme (('+' | '-') terme)*
//   terme := unaire (('*' | '/') unaire)*
//   unaire := '-' unaire | NOMBRE
//
// Associativité gauche à chaque niveau.
// Moins unaire : comme pour la RPN, on l’écrit 0 - x (pas de noeud dédié).

use std::fmt;

use super::erreur::ErreurCalcul;
use super::jetons::{Operateur, Tok};

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Litteral(f64),
    Binaire(Operateur, Box<Expr>, Box<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Litteral(v) => write!(f, "{v}"),
            Expr::Binaire(op, a, b) => write!(f, "({a}{op}{b})"),
        }
    }
}

/// Construit l’arbre à partir des jetons. Tout jeton restant est une erreur.
pub fn parse(tokens: &[Tok]) -> Result<Expr, ErreurCalcul> {
    let mut p = Parseur { tokens, pos: 0 };
    let e = p.expr()?;

    if p.pos != tokens.len() {
        return Err(ErreurCalcul::malformee(format!(
            "jeton inattendu en position {}",
            p.pos
        )));
    }
    Ok(e)
}

struct Parseur<'a> {
    tokens: &'a [Tok],
    pos: usize,
}

impl Parseur<'_> {
    fn regarde_op(&self) -> Option<Operateur> {
        match self.tokens.get(self.pos) {
            Some(Tok::Op(op)) => Some(*op),
            _ => None,
        }
    }

    fn expr(&mut self) -> Result<Expr, ErreurCalcul> {
        let mut gauche = self.terme()?;

        while let Some(op @ (Operateur::Plus | Operateur::Moins)) = self.regarde_op() {
            self.pos += 1;
            let droite = self.terme()?;
            gauche = Expr::Binaire(op, Box::new(gauche), Box::new(droite));
        }

        Ok(gauche)
    }

    fn terme(&mut self) -> Result<Expr, ErreurCalcul> {
        let mut gauche = self.unaire()?;

        while let Some(op @ (Operateur::Fois | Operateur::Divise)) = self.regarde_op() {
            self.pos += 1;
            let droite = self.unaire()?;
            gauche = Expr::Binaire(op, Box::new(gauche), Box::new(droite));
        }

        Ok(gauche)
    }

    fn unaire(&mut self) -> Result<Expr, ErreurCalcul> {
        match self.tokens.get(self.pos) {
            Some(Tok::Op(Operateur::Moins)) => {
                self.pos += 1;
                let x = self.unaire()?;
                Ok(Expr::Binaire(
                    Operateur::Moins,
                    Box::new(Expr::Litteral(0.0)),
                    Box::new(x),
                ))
            }
            Some(Tok::Num(v)) => {
                self.pos += 1;
                Ok(Expr::Litteral(*v))
            }
            Some(Tok::Op(op)) => Err(ErreurCalcul::malformee(format!(
                "opérateur '{op}' sans opérande"
            ))),
            None => Err(ErreurCalcul::malformee("expression incomplète")),
        }
    }
}
