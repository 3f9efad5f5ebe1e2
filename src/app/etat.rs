//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur (une instance par fenêtre, aucun état global),
//! lui transmettre les touches, et garder un petit historique des calculs.
//!
//! Contrats :
//! - Aucune arithmétique ici (tout passe par le noyau).
//! - Défense en profondeur : historique borné.

use crate::noyau::{Moteur, Reglages, Separateur, Touche};

/// Garde-fou : nombre de lignes d’historique conservées.
const HISTORIQUE_MAX: usize = 50;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    moteur: Moteur,

    // "5 + 3 = 8", du plus ancien au plus récent
    pub historique: Vec<String>,
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            moteur: Moteur::new(reglages),
            historique: Vec::new(),
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Transmet une touche au moteur ; un "=" qui résout une opération est noté.
    pub fn presser(&mut self, touche: Touche) {
        let operation = self.moteur.operation();
        let operande = self.moteur.affichage().to_string();

        self.moteur.appliquer(touche);

        if touche != Touche::Egal || self.moteur.erreur().is_some() {
            return;
        }
        if let Some(op) = operation {
            let ligne = format!("{op} {operande} = {}", self.moteur.affichage());
            self.noter(ligne);
        }
    }

    /// Variante “jeton” (même contrat que `Moteur::saisir`).
    pub fn saisir(&mut self, symbole: &str) {
        if let Some(touche) = Touche::decoder(symbole, self.separateur()) {
            self.presser(touche);
        }
    }

    pub fn effacer_historique(&mut self) {
        self.historique.clear();
    }

    fn noter(&mut self, ligne: String) {
        self.historique.push(ligne);
        if self.historique.len() > HISTORIQUE_MAX {
            let surplus = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..surplus);
        }
    }

    /* ------------------------ Lectures pour la vue ------------------------ */

    pub fn ecran(&self) -> String {
        self.moteur.ecran()
    }

    pub fn operation(&self) -> Option<String> {
        self.moteur.operation()
    }

    pub fn en_erreur(&self) -> bool {
        self.moteur.erreur().is_some()
    }

    pub fn separateur(&self) -> Separateur {
        self.moteur.reglages().separateur
    }
}
