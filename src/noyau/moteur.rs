//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice : transforme un flux de touches en affichage.
//!
//! Contrats :
//! - `affichage` jamais vide, toujours `-?[0-9]+(SEP[0-9]*)?` ("0" par défaut).
//! - Au plus UNE opération en attente ; un nouvel opérateur résout l’ancienne
//!   d’abord (évaluation gauche -> droite, sans priorité).
//! - "C" réinitialise tout l’état d’un bloc (les réglages restent).
//! - Division par zéro : état d’erreur explicite, jamais de panique.

use num_rational::BigRational;
use num_traits::Zero;
use tracing::{debug, error, trace, warn};

use super::decimal::{formater, lire_affichage};
use super::erreur::ErreurCalcul;
use super::reglages::Reglages;
use super::touche::{Operateur, Touche};

const ZERO: &str = "0";

#[derive(Clone, Debug)]
pub struct Moteur {
    affichage: String,
    accumulateur: BigRational,
    en_attente: Option<Operateur>,
    nouvelle_saisie: bool,
    erreur: Option<ErreurCalcul>,
    reglages: Reglages,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl Moteur {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            affichage: ZERO.to_string(),
            accumulateur: BigRational::zero(),
            en_attente: None,
            nouvelle_saisie: false,
            erreur: None,
            reglages,
        }
    }

    /* ------------------------ Entrées ------------------------ */

    /// Point d’entrée "jeton" : décode puis applique. Jeton inconnu = aucun effet.
    /// Retourne l’affichage courant.
    pub fn saisir(&mut self, symbole: &str) -> &str {
        match Touche::decoder(symbole, self.reglages.separateur) {
            Some(touche) => self.appliquer(touche),
            None => trace!(symbole, "jeton inconnu ignoré"),
        }
        &self.affichage
    }

    pub fn appliquer(&mut self, touche: Touche) {
        debug!(?touche, affichage = %self.affichage, "touche");

        match touche {
            Touche::Chiffre(n) => self.saisir_chiffre(n),
            Touche::Decimale => self.saisir_decimale(),

            _ if self.garde_zero(touche) => trace!(?touche, "ignorée sur affichage nul"),

            Touche::Effacer => self.effacer(),
            Touche::Retour => self.retour(),
            Touche::Signe => self.basculer_signe(),
            Touche::Operateur(op) => self.saisir_operateur(op),
            Touche::Egal => self.egal(),
        }
    }

    /* ------------------------ Lectures ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Ce que l’écran montre : le message d’erreur s’il y en a une, sinon l’affichage.
    pub fn ecran(&self) -> String {
        match &self.erreur {
            Some(e) => format!("Erreur : {e}"),
            None => self.affichage.clone(),
        }
    }

    /// Ligne d’opération en cours, ex. "12 ×". `None` si rien n’est en attente.
    pub fn operation(&self) -> Option<String> {
        self.en_attente.map(|op| {
            format!(
                "{} {}",
                formater(&self.accumulateur, self.reglages.separateur),
                op.symbole()
            )
        })
    }

    pub fn accumulateur(&self) -> &BigRational {
        &self.accumulateur
    }

    pub fn en_attente(&self) -> Option<Operateur> {
        self.en_attente
    }

    pub fn nouvelle_saisie(&self) -> bool {
        self.nouvelle_saisie
    }

    pub fn erreur(&self) -> Option<&ErreurCalcul> {
        self.erreur.as_ref()
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    /* ------------------------ Saisie du nombre ------------------------ */

    fn saisir_chiffre(&mut self, n: u8) {
        let Some(c) = char::from_digit(u32::from(n), 10) else {
            trace!(n, "chiffre hors 0..=9 ignoré");
            return;
        };

        if self.nouvelle_saisie {
            // le résultat affiché n’est pas prolongé : on repart d’un nombre neuf
            self.affichage = c.to_string();
            self.nouvelle_saisie = false;
            self.erreur = None;
            return;
        }

        if self.affichage == ZERO {
            self.affichage = c.to_string();
        } else if self.affichage == "-0" {
            self.affichage = format!("-{c}");
        } else {
            self.affichage.push(c);
        }
    }

    fn saisir_decimale(&mut self) {
        if self.nouvelle_saisie {
            self.affichage = ZERO.to_string();
            self.nouvelle_saisie = false;
            self.erreur = None;
        }

        let sep = self.reglages.separateur.caractere();
        if !self.affichage.contains(sep) {
            self.affichage.push(sep);
        }
    }

    /* ------------------------ Commandes ------------------------ */

    /// Sur "0" rien n’a été saisi : seules "C" et "=" (qui ferme une opération
    /// en attente, ex. "5 ÷ 0 =") passent.
    fn garde_zero(&self, touche: Touche) -> bool {
        if self.affichage != ZERO {
            return false;
        }
        match touche {
            Touche::Effacer => false,
            Touche::Egal => self.en_attente.is_none(),
            _ => true,
        }
    }

    fn effacer(&mut self) {
        self.affichage = ZERO.to_string();
        self.accumulateur = BigRational::zero();
        self.en_attente = None;
        self.nouvelle_saisie = false;
        self.erreur = None;
    }

    fn retour(&mut self) {
        self.affichage.pop();
        if self.affichage.is_empty() || self.affichage == "-" {
            self.affichage = ZERO.to_string();
        }
    }

    fn basculer_signe(&mut self) {
        if self.affichage.starts_with('-') {
            self.affichage.remove(0);
        } else {
            self.affichage.insert(0, '-');
        }
    }

    fn saisir_operateur(&mut self, op: Operateur) {
        if self.en_attente.is_some() && self.terminer().is_err() {
            return;
        }

        let valeur = match self.lire() {
            Ok(v) => v,
            Err(e) => {
                self.entrer_en_erreur(e);
                return;
            }
        };

        self.accumulateur = valeur;
        self.en_attente = Some(op);
        self.affichage = ZERO.to_string();
        self.nouvelle_saisie = false;
    }

    fn egal(&mut self) {
        if let Err(e) = self.terminer() {
            debug!(%e, "égal interrompu");
        }
        self.nouvelle_saisie = true;
    }

    /* ------------------------ Résolution ------------------------ */

    fn lire(&self) -> Result<BigRational, ErreurCalcul> {
        lire_affichage(&self.affichage, self.reglages.separateur)
    }

    /// Applique l’opération en attente : accumulateur op affichage.
    /// En cas d’échec, le moteur est déjà passé en état d’erreur.
    fn terminer(&mut self) -> Result<(), ErreurCalcul> {
        let Some(op) = self.en_attente.take() else {
            return Ok(());
        };

        let echelle = self.reglages.echelle_division();
        let resultat = self
            .lire()
            .and_then(|b| op.appliquer(&self.accumulateur, &b, echelle));

        match resultat {
            Ok(v) => {
                self.affichage = formater(&v, self.reglages.separateur);
                self.accumulateur = v;
                Ok(())
            }
            Err(e) => {
                self.entrer_en_erreur(e.clone());
                Err(e)
            }
        }
    }

    /// État d’erreur : tout est remis à zéro sauf l’erreur elle-même ;
    /// la prochaine saisie repart d’un nombre neuf.
    fn entrer_en_erreur(&mut self, e: ErreurCalcul) {
        match &e {
            ErreurCalcul::DivisionParZero => warn!(acc = %self.accumulateur, "division par zéro"),
            ErreurCalcul::AffichageInvalide(txt) => error!(affichage = %txt, "invariant d’affichage violé"),
        }

        self.effacer();
        self.nouvelle_saisie = true;
        self.erreur = Some(e);
    }
}
