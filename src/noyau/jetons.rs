// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurCalcul;

/// Les quatre opérateurs binaires du clavier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }
}

/// Vrai pour `+ - * /`.
pub fn est_operateur(c: char) -> bool {
    Operateur::depuis_char(c).is_some()
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
}

/// Tokenize une expression terminée (ni `=`, ni opérateur final).
///
/// - nombres : suite maximale de chiffres et de points (`12`, `3.5`, `5.`)
/// - moins unaire : un `-` en tête, ou juste après un opérateur, et suivi
///   d’un chiffre/point est collé au nombre (`-3`, `2*-3`)
/// - opérateurs `+ - * /` ailleurs
///
/// Deux opérateurs adjacents hors contexte unaire => erreur.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let chars: Vec<char> = s.chars().collect();
    let mut out: Vec<Tok> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // “valeur attendue” : début de texte ou juste après un opérateur
        let attend_valeur = matches!(out.last(), None | Some(Tok::Op(_)));

        if c.is_ascii_digit() || c == '.' {
            let (tok, fin) = lire_nombre(&chars, i, i)?;
            out.push(tok);
            i = fin;
            continue;
        }

        if let Some(op) = Operateur::depuis_char(c) {
            let suivant_numerique = chars
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == '.');

            if op == Operateur::Moins && attend_valeur && suivant_numerique {
                let (tok, fin) = lire_nombre(&chars, i, i + 1)?;
                out.push(tok);
                i = fin;
                continue;
            }

            if let Some(Tok::Op(prec)) = out.last() {
                // le seul second opérateur toléré est un '-' unaire (laissé au parseur)
                if op != Operateur::Moins {
                    return Err(ErreurCalcul::malformee(format!(
                        "opérateurs adjacents: '{prec}{op}'"
                    )));
                }
            }

            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        return Err(ErreurCalcul::malformee(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Lit un nombre à partir de `debut` (signe éventuel inclus) ; les chiffres
/// commencent à `chiffres`. Retourne le jeton et l’index de fin.
fn lire_nombre(chars: &[char], debut: usize, chiffres: usize) -> Result<(Tok, usize), ErreurCalcul> {
    let mut fin = chiffres;
    while fin < chars.len() && (chars[fin].is_ascii_digit() || chars[fin] == '.') {
        fin += 1;
    }

    let brut: String = chars[debut..fin].iter().collect();
    let v = brut
        .parse::<f64>()
        .map_err(|_| ErreurCalcul::malformee(format!("nombre invalide: '{brut}'")))?;

    Ok((Tok::Num(v), fin))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
