// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter valide, Backspace retire un jeton logique
// - Tactile : gros boutons, tout passe par des Touche du noyau
//
// Note :
// - La vue ne contient AUCUNE logique calculatrice : elle envoie des
//   touches et affiche l'état de la Session.

use eframe::egui;

use crate::noyau::{Fonction, Touche};

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        // --- Clavier : Enter valide, Backspace retire un jeton ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter {
            self.appuyer(Touche::Egal);
        }
        let backspace = ui.input(|i| i.key_pressed(egui::Key::Backspace));
        if backspace {
            self.appuyer(Touche::Retour);
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Calculatrice Sci");

                    // indicateurs : unité d'angle + mémoire occupée
                    let unite = self.session.unite();
                    if ui
                        .button(unite.libelle())
                        .on_hover_text("Bascule degrés / radians")
                        .clicked()
                    {
                        self.appuyer(Touche::BasculeAngle);
                    }
                    if self.session.memoire_occupee() {
                        ui.monospace("M");
                    }
                });
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_fonctions(ui);
                ui.add_space(6.0);
                self.ui_memoire(ui);
                ui.add_space(6.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    /* ------------------------ Affichage + aperçu ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let texte = self.session.texte_affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                if self.session.en_erreur() {
                    ui.colored_label(ui.visuals().error_fg_color, &texte);
                } else {
                    ui.monospace(&texte);
                }

                // Aperçu non engageant (absent sur opérande nu ou en erreur)
                match self.session.apercu() {
                    Some(apercu) => {
                        ui.weak(format!("= {apercu}"));
                    }
                    None => {
                        ui.weak(" ");
                    }
                }
            });
    }

    /* ------------------------ Rangées de boutons ------------------------ */

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.bouton_touche(ui, "sin", Touche::Fonction(Fonction::Sin));
            self.bouton_touche(ui, "cos", Touche::Fonction(Fonction::Cos));
            self.bouton_touche(ui, "tan", Touche::Fonction(Fonction::Tan));
            self.bouton_touche(ui, "log", Touche::Fonction(Fonction::Log));
            self.bouton_touche(ui, "ln", Touche::Fonction(Fonction::Ln));
            self.bouton_touche(ui, "√", Touche::Fonction(Fonction::Racine));

            ui.separator();

            self.bouton_touche(ui, "π", Touche::Constante('π'));
            self.bouton_touche(ui, "e", Touche::Constante('e'));
            self.bouton_touche(ui, "(", Touche::ParOuvrante);
            self.bouton_touche(ui, ")", Touche::ParFermante);
            self.bouton_touche(ui, "^", Touche::Operateur('^'));
            self.bouton_touche(ui, "%", Touche::Operateur('%'));
        });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton_touche(ui, "MC", Touche::MemoireEfface);
            self.bouton_touche(ui, "MR", Touche::MemoireRappel);
            self.bouton_touche(ui, "M-", Touche::MemoireMoins);
            self.bouton_touche(ui, "M+", Touche::MemoirePlus);
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calc_sci")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, "C", Touche::Efface);
                self.bouton_touche(ui, "DEL", Touche::Retour);
                self.bouton_touche(ui, "±", Touche::Signe);
                self.bouton_touche(ui, "÷", Touche::Operateur('÷'));
                ui.end_row();

                self.bouton_touche(ui, "7", Touche::Chiffre(7));
                self.bouton_touche(ui, "8", Touche::Chiffre(8));
                self.bouton_touche(ui, "9", Touche::Chiffre(9));
                self.bouton_touche(ui, "×", Touche::Operateur('×'));
                ui.end_row();

                self.bouton_touche(ui, "4", Touche::Chiffre(4));
                self.bouton_touche(ui, "5", Touche::Chiffre(5));
                self.bouton_touche(ui, "6", Touche::Chiffre(6));
                self.bouton_touche(ui, "-", Touche::Operateur('-'));
                ui.end_row();

                self.bouton_touche(ui, "1", Touche::Chiffre(1));
                self.bouton_touche(ui, "2", Touche::Chiffre(2));
                self.bouton_touche(ui, "3", Touche::Chiffre(3));
                self.bouton_touche(ui, "+", Touche::Operateur('+'));
                ui.end_row();

                self.bouton_touche(ui, "0", Touche::Chiffre(0));
                self.bouton_touche(ui, ".", Touche::Point);
                ui.label("");
                self.bouton_touche(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    /* ------------------------ Historique ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.session.historique().is_empty() {
                    ui.weak("aucune validation");
                } else {
                    for entree in self.session.historique() {
                        ui.monospace(format!("{} = {}", entree.expression, entree.resultat));
                    }
                }

                ui.add_space(4.0);
                if ui
                    .button("Vider")
                    .on_hover_text("Efface tout l'historique (la saisie reste)")
                    .clicked()
                {
                    self.session.vider_historique();
                }
            });
    }

    /* ------------------------ Helper bouton ------------------------ */

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
