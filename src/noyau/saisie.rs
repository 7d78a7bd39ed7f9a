//! src/noyau/saisie.rs
//!
//! Machine d’état de saisie (une ligne d’expression).
//!
//! Rôle : appliquer les événements du clavier (chiffre, opérateur, point, x², ⌫, C, =)
//! en gardant le texte toujours syntaxiquement plausible.
//!
//! Contrats :
//! - Une transition invalide est absorbée (no-op), jamais une erreur.
//! - Au plus un `=` dans le texte, toujours suivi du résultat ou de `Error`.
//! - Un nombre contient au plus un `.`.

use log::{debug, trace, warn};

use super::erreur::ErreurCalcul;
use super::eval::evaluer_expression;
use super::format::format_nombre;
use super::jetons::{est_operateur, Operateur};

/// Marqueur de résultat en échec (affiché tel quel).
pub const MARQUEUR_ERREUR: &str = "Error";

/// Issue d’un appui sur `=`.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// Rien à évaluer (texte vide, opérateur final, ou résultat déjà affiché).
    Ignoree,
    Reussie(String),
    /// Signal “évaluation échouée” destiné à la vue (notification).
    Echouee(ErreurCalcul),
}

/// Que faire d’une évaluation affichée quand une nouvelle saisie arrive.
#[derive(Clone, Copy, Debug)]
enum Reprise {
    /// Chiffre / point : on repart de zéro.
    Neuf,
    /// Opérateur / x² : on repart du résultat (sauf `Error`).
    Chainage,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Saisie {
    texte: String,
    resultat: String,
}

impl Saisie {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    /// Texte brut (sans espaces), `=résultat` inclus le cas échéant.
    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn result_text(&self) -> &str {
        &self.resultat
    }

    /// Rendu d’affichage : opérateurs binaires et `=` entourés d’espaces,
    /// signe `-` collé à son nombre, `"0"` si vide.
    pub fn display_text(&self) -> String {
        if self.texte.is_empty() {
            return "0".to_string();
        }

        let mut out = String::with_capacity(self.texte.len() * 2);
        let mut prec: Option<char> = None;

        for c in self.texte.chars() {
            if c == '=' {
                out.push_str(" = ");
            } else if est_operateur(c) && !est_signe(c, prec) {
                out.push(' ');
                out.push(c);
                out.push(' ');
            } else {
                out.push(c);
            }
            prec = Some(c);
        }

        out
    }

    /* ------------------------ Événements ------------------------ */

    /// C : texte + résultat vidés.
    pub fn clear(&mut self) {
        self.texte.clear();
        self.resultat.clear();
    }

    pub fn append_digit(&mut self, d: char) {
        if !d.is_ascii_digit() {
            trace!("chiffre ignoré: {d:?}");
            return;
        }
        self.reprend_apres_evaluation(Reprise::Neuf);
        self.texte.push(d);
    }

    pub fn append_dot(&mut self) {
        self.reprend_apres_evaluation(Reprise::Neuf);

        let morceau = self.texte.rsplit(est_operateur).next().unwrap_or("");
        if morceau.contains('.') {
            trace!("point ignoré: déjà présent dans {morceau:?}");
            return;
        }

        if self.texte.is_empty() || self.finit_par_operateur() {
            self.texte.push_str("0.");
        } else {
            self.texte.push('.');
        }
    }

    pub fn append_operator(&mut self, op: char) {
        let Some(op) = Operateur::depuis_char(op) else {
            trace!("opérateur ignoré: {op:?}");
            return;
        };

        self.reprend_apres_evaluation(Reprise::Chainage);

        // texte vide : seul le moins unaire peut ouvrir l’expression
        if self.texte.is_empty() {
            if op == Operateur::Moins {
                self.texte.push('-');
            }
            return;
        }

        let dernier = self.texte.chars().last();
        match dernier {
            // changement d’avis sur l’opérateur en attente
            Some(c) if est_operateur(c) => {
                self.texte.pop();
                self.texte.push(op.symbole());
            }
            Some(c) if c.is_ascii_digit() || c == ')' => self.texte.push(op.symbole()),
            _ => trace!("opérateur '{op}' ignoré après {:?}", self.texte),
        }
    }

    /// ⌫ : retire le dernier caractère.
    /// Sur une évaluation affichée, retire tout le suffixe `=résultat`.
    pub fn backspace(&mut self) {
        if self.evaluation_affichee() {
            if let Some(i) = self.texte.find('=') {
                self.texte.truncate(i);
            }
            self.resultat.clear();
            return;
        }
        self.texte.pop();
    }

    /// x² : remplace le nombre final par son carré (forme canonique).
    pub fn square_current(&mut self) {
        self.reprend_apres_evaluation(Reprise::Chainage);

        if self.texte.is_empty() || self.finit_par_operateur() {
            return;
        }

        let Some(debut) = debut_nombre_final(&self.texte) else {
            trace!("x² ignoré: pas de nombre final dans {:?}", self.texte);
            return;
        };

        let Ok(v) = self.texte[debut..].parse::<f64>() else {
            return;
        };

        let carre = v * v;
        if !carre.is_finite() {
            trace!("x² ignoré: carré non fini de {v}");
            return;
        }

        self.texte.truncate(debut);
        self.texte.push_str(&format_nombre(carre));
    }

    /// `=` : évalue le texte ; le résultat (ou `Error`) est ajouté après un `=`.
    pub fn evaluate(&mut self) -> Evaluation {
        if self.texte.is_empty() || self.finit_par_operateur() || self.texte.contains('=') {
            return Evaluation::Ignoree;
        }

        match evaluer_expression(&self.texte) {
            Ok(r) => {
                debug!("{} = {r}", self.texte);
                self.texte.push('=');
                self.texte.push_str(&r);
                self.resultat = r.clone();
                Evaluation::Reussie(r)
            }
            Err(e) => {
                warn!("évaluation échouée pour {:?}: {e}", self.texte);
                self.texte.push('=');
                self.texte.push_str(MARQUEUR_ERREUR);
                self.resultat = MARQUEUR_ERREUR.to_string();
                Evaluation::Echouee(e)
            }
        }
    }

    /* ------------------------ Garde partagée ------------------------ */

    fn evaluation_affichee(&self) -> bool {
        !self.resultat.is_empty() && self.texte.contains('=')
    }

    /// Une évaluation affichée vaut état de départ pour la saisie suivante.
    fn reprend_apres_evaluation(&mut self, reprise: Reprise) {
        if !self.evaluation_affichee() {
            return;
        }

        match reprise {
            Reprise::Neuf => self.clear(),
            Reprise::Chainage => {
                if self.resultat != MARQUEUR_ERREUR {
                    self.texte = std::mem::take(&mut self.resultat);
                }
            }
        }
    }

    fn finit_par_operateur(&self) -> bool {
        self.texte.chars().last().is_some_and(est_operateur)
    }
}

/// `-` en tête, après un opérateur ou après `=` : c’est un signe.
fn est_signe(c: char, prec: Option<char>) -> bool {
    c == '-' && prec.is_none_or(|p| est_operateur(p) || p == '=')
}

/// Index du nombre final de forme `-?chiffres(.chiffres)?`.
/// Le `-` n’en fait partie que s’il est un signe.
fn debut_nombre_final(texte: &str) -> Option<usize> {
    let octets = texte.as_bytes();
    let mut debut = octets.len();
    while debut > 0 && (octets[debut - 1].is_ascii_digit() || octets[debut - 1] == b'.') {
        debut -= 1;
    }

    let corps = &texte[debut..];
    if !forme_nombre(corps) {
        return None;
    }

    if debut > 0 && octets[debut - 1] == b'-' {
        let avant = texte[..debut - 1].chars().last();
        if est_signe('-', avant) {
            debut -= 1;
        }
    }

    Some(debut)
}

/// `chiffres(.chiffres)?`
fn forme_nombre(s: &str) -> bool {
    let mut parties = s.split('.');
    let entier = parties.next().unwrap_or("");
    let frac = parties.next();

    let chiffres = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());

    parties.next().is_none() && chiffres(entier) && frac.is_none_or(chiffres)
}
