//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder LA saisie de la session (une seule, jamais partagée)
//! et la notification transitoire “évaluation échouée”.
//!
//! Contrats :
//! - Aucune logique de saisie ici : tout passe par `noyau::Saisie`.
//! - Le temps est fourni par l’appelant (horloge egui, portable natif + web).

use log::info;

use crate::noyau::{Evaluation, Saisie};

/// Durée d’affichage de la notification d’erreur (secondes).
pub const DUREE_NOTIFICATION_S: f64 = 2.5;

/// Touches du pavé (boutons ou clavier physique).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(char),
    Carre,
    Retour,
    Efface,
    Egal,
}

impl Touche {
    /// Traduction d’un caractère tapé au clavier.
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' | ',' => Some(Touche::Point),
            '+' | '-' | '*' | '/' => Some(Touche::Operateur(c)),
            '=' => Some(Touche::Egal),
            's' | 'S' => Some(Touche::Carre),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub jusqua: f64,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub saisie: Saisie,
    pub notification: Option<Notification>,
}

impl AppCalc {
    /// Applique une touche ; `maintenant` = horloge UI en secondes.
    pub fn appuie(&mut self, touche: Touche, maintenant: f64) {
        match touche {
            Touche::Chiffre(d) => self.saisie.append_digit(d),
            Touche::Point => self.saisie.append_dot(),
            Touche::Operateur(op) => self.saisie.append_operator(op),
            Touche::Carre => self.saisie.square_current(),
            Touche::Retour => self.saisie.backspace(),
            Touche::Efface => {
                self.saisie.clear();
                self.notification = None;
            }
            Touche::Egal => {
                if let Evaluation::Echouee(e) = self.saisie.evaluate() {
                    info!("notification: {e}");
                    self.notification = Some(Notification {
                        message: format!("Erreur de calcul ({e})"),
                        jusqua: maintenant + DUREE_NOTIFICATION_S,
                    });
                }
            }
        }
    }

    /// Message à afficher, s’il n’a pas expiré.
    pub fn notification_active(&self, maintenant: f64) -> Option<&str> {
        self.notification
            .as_ref()
            .filter(|n| maintenant < n.jusqua)
            .map(|n| n.message.as_str())
    }
}
