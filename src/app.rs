// src/app.rs
//
// Calculatrice : module App (racine)
// ---------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, une seule fenêtre = une seule saisie) :
// - 0-9 . , + - * / = s : touches du pavé
// - Enter = évaluer, Backspace = ⌫, Escape = C

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

/// Événements clavier de la frame -> touches du pavé (dans l’ordre reçu).
fn touches_clavier(i: &egui::InputState) -> Vec<Touche> {
    let mut out = Vec::new();

    for ev in &i.events {
        match ev {
            egui::Event::Text(s) => out.extend(s.chars().filter_map(Touche::depuis_char)),
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Touche::Egal),
                egui::Key::Backspace => out.push(Touche::Retour),
                egui::Key::Escape => out.push(Touche::Efface),
                _ => {}
            },
            _ => {}
        }
    }

    out
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (touches, maintenant) = ctx.input(|i| (touches_clavier(i), i.time));
        for t in touches {
            self.appuie(t, maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
