//! src/noyau/reglages.rs
//!
//! Réglages du moteur : séparateur décimal + échelle de la division.
//!
//! Contrats :
//! - Fixés à la construction du moteur (survivent à "C").
//! - Défense en profondeur : l’échelle est bornée.

/// Échelle par défaut de la division (chiffres après le séparateur, arrondi demi-haut).
pub const ECHELLE_DEFAUT: u32 = 10;

/// Garde-fou : au-delà, l’affichage devient illisible de toute façon.
pub const ECHELLE_MAX: u32 = 64;

/// Convention d’affichage du séparateur décimal (une seule à la fois).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
pub enum Separateur {
    /// "3,5" (défaut, comme le pavé d’origine)
    #[default]
    Virgule,
    /// "3.5"
    Point,
}

impl Separateur {
    pub fn caractere(self) -> char {
        match self {
            Self::Virgule => ',',
            Self::Point => '.',
        }
    }

    /// Jeton d’entrée (et libellé du bouton) correspondant.
    pub fn symbole(self) -> &'static str {
        match self {
            Self::Virgule => ",",
            Self::Point => ".",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub separateur: Separateur,
    echelle_division: u32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            separateur: Separateur::default(),
            echelle_division: ECHELLE_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn new(separateur: Separateur, echelle_division: u32) -> Self {
        let mut r = Self {
            separateur,
            ..Self::default()
        };
        r.set_echelle_division(echelle_division);
        r
    }

    pub fn echelle_division(&self) -> u32 {
        self.echelle_division
    }

    /// Garde-fou : limite l’échelle (évite des affichages démesurés).
    pub fn set_echelle_division(&mut self, echelle: u32) {
        self.echelle_division = echelle.min(ECHELLE_MAX);
    }
}
