// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Écran : expression espacée (display_text) + ligne résultat
// - Pavé 4 colonnes, gros boutons (tactile)
// - Notification transitoire si “=” échoue
//
// Note :
// - La vue ne modifie JAMAIS le texte elle-même : tout passe par AppCalc::appuie.

use std::time::Duration;

use eframe::egui;

use super::etat::{AppCalc, Touche};

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let maintenant = ui.input(|i| i.time);

        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui, maintenant);

        self.ui_notification(ui, maintenant);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(self.saisie.display_text())
                            .monospace()
                            .size(26.0),
                    );

                    // ligne résultat (vide tant qu’aucune évaluation)
                    let resultat = self.saisie.result_text();
                    let ligne = if resultat.is_empty() {
                        String::new()
                    } else {
                        format!("= {resultat}")
                    };
                    ui.label(egui::RichText::new(ligne).monospace().size(16.0).weak());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Touche::Efface, maintenant);
                self.bouton(ui, "⌫", Touche::Retour, maintenant);
                self.bouton(ui, "x²", Touche::Carre, maintenant);
                self.bouton(ui, "/", Touche::Operateur('/'), maintenant);
                ui.end_row();

                for rang in [['7', '8', '9', '*'], ['4', '5', '6', '-'], ['1', '2', '3', '+']] {
                    for c in &rang[..3] {
                        self.bouton(ui, &c.to_string(), Touche::Chiffre(*c), maintenant);
                    }
                    self.bouton(ui, &rang[3].to_string(), Touche::Operateur(rang[3]), maintenant);
                    ui.end_row();
                }

                self.bouton(ui, "0", Touche::Chiffre('0'), maintenant);
                self.bouton(ui, ".", Touche::Point, maintenant);
                self.bouton(ui, "=", Touche::Egal, maintenant);
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_notification(&self, ui: &mut egui::Ui, maintenant: f64) {
        let Some(msg) = self.notification_active(maintenant) else {
            return;
        };

        ui.add_space(6.0);
        ui.colored_label(ui.visuals().error_fg_color, msg);

        // repeindre à l’expiration pour effacer le message
        if let Some(n) = &self.notification {
            let reste = (n.jusqua - maintenant).max(0.0);
            ui.ctx().request_repaint_after(Duration::from_secs_f64(reste));
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche, maintenant: f64) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.appuie(touche, maintenant);
        }
    }
}
