// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Pavé 5×4 : ⌫ ± % ÷ / 1 2 3 × / 4 5 6 - / 7 8 9 + / C 0 , =
// - Écran aligné à droite (défilement horizontal si le nombre déborde)
// - Clavier : chiffres, + - * / %, "," ou ".", Enter, Backspace, Échap
//
// Note :
// - Les chiffres arrivent par Event::Text (pas par Key::NumX) : pas de double saisie.

use eframe::egui;
use egui::{Color32, RichText};

use super::etat::AppCalc;
use crate::noyau::{Operateur, Separateur, Touche};

const FOND_FONCTION: Color32 = Color32::from_rgb(0x5C, 0x5C, 0x5F);
const FOND_CHIFFRE: Color32 = Color32::from_rgb(0x2A, 0x2A, 0x2C);
const FOND_OPERATEUR: Color32 = Color32::from_rgb(0xFF, 0x9F, 0x0A);

const TAILLE_TOUCHE: f32 = 72.0;

const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::Retour,
        Touche::Signe,
        Touche::Operateur(Operateur::Reste),
        Touche::Operateur(Operateur::Divise),
    ],
    [
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Fois),
    ],
    [
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Moins),
    ],
    [
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Plus),
    ],
    [
        Touche::Effacer,
        Touche::Chiffre(0),
        Touche::Decimale,
        Touche::Egal,
    ],
];

fn fond(touche: Touche) -> Color32 {
    match touche {
        Touche::Retour | Touche::Signe | Touche::Operateur(Operateur::Reste) => FOND_FONCTION,
        Touche::Operateur(_) | Touche::Egal => FOND_OPERATEUR,
        Touche::Chiffre(_) | Touche::Decimale | Touche::Effacer => FOND_CHIFFRE,
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();

                self.ui_historique(ui);
            });
    }

    /// Touches reçues du clavier physique pendant cette frame.
    pub fn lire_clavier(&mut self, ctx: &egui::Context) {
        let sep = self.separateur();
        let touches: Vec<Touche> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => touche_depuis_texte(t, sep),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => touche_depuis_cle(*key),
                    _ => None,
                })
                .collect()
        });

        for touche in touches {
            self.presser(touche);
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let couleur = if self.en_erreur() {
            ui.visuals().error_fg_color
        } else {
            Color32::WHITE
        };

        egui::Frame::group(ui.style())
            .fill(Color32::BLACK)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let operation = self.operation().unwrap_or_default();
                    ui.label(RichText::new(operation).size(20.0).color(Color32::GRAY));

                    egui::ScrollArea::horizontal()
                        .id_salt("ecran")
                        .stick_to_right(true)
                        .show(ui, |ui| {
                            ui.label(RichText::new(self.ecran()).size(56.0).color(couleur));
                        });
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for touche in rangee {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let libelle = RichText::new(touche.symbole(self.separateur()))
            .size(30.0)
            .color(Color32::WHITE);

        let resp = ui.add_sized(
            [TAILLE_TOUCHE, TAILLE_TOUCHE],
            egui::Button::new(libelle).fill(fond(touche)),
        );
        if resp.clicked() {
            self.presser(touche);
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.monospace("vide");
                    return;
                }

                for ligne in self.historique.iter().rev() {
                    ui.monospace(ligne.as_str());
                }

                ui.add_space(4.0);
                if ui.button("Effacer l’historique").clicked() {
                    self.effacer_historique();
                }
            });
    }
}

/// Texte tapé -> touche. Accepte les variantes clavier ("*", "/", "." ou ",").
pub fn touche_depuis_texte(texte: &str, sep: Separateur) -> Option<Touche> {
    match texte {
        "*" | "x" | "X" => Some(Touche::Operateur(Operateur::Fois)),
        "/" => Some(Touche::Operateur(Operateur::Divise)),
        "," | "." => Some(Touche::Decimale),
        "c" => Some(Touche::Effacer),
        _ => Touche::decoder(texte, sep),
    }
}

fn touche_depuis_cle(key: egui::Key) -> Option<Touche> {
    match key {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Backspace => Some(Touche::Retour),
        egui::Key::Escape | egui::Key::Delete => Some(Touche::Effacer),
        _ => None,
    }
}
