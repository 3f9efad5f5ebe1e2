// src/noyau/touche.rs
//
// Touches du pavé : décodées une seule fois à la frontière (jeton -> Touche),
// puis traitées par match exhaustif dans le moteur.

use num_rational::BigRational;

use super::decimal::{diviser, reste};
use super::erreur::ErreurCalcul;
use super::reglages::Separateur;

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Opération binaire en attente (une seule à la fois).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    /// "%" : reste de la division (PAS un pourcentage).
    Reste,
}

impl Operateur {
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Reste,
    ];

    pub fn symbole(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Moins => "-",
            Self::Fois => "×",
            Self::Divise => "÷",
            Self::Reste => "%",
        }
    }

    /// a (accumulateur) op b (opérande saisi).
    /// `echelle` : chiffres conservés par la division.
    pub fn appliquer(
        self,
        a: &BigRational,
        b: &BigRational,
        echelle: u32,
    ) -> Result<BigRational, ErreurCalcul> {
        match self {
            Self::Plus => Ok(a + b),
            Self::Moins => Ok(a - b),
            Self::Fois => Ok(a * b),
            Self::Divise => diviser(a, b, echelle),
            Self::Reste => reste(a, b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9
    Chiffre(u8),
    /// Séparateur décimal (selon les réglages)
    Decimale,
    Operateur(Operateur),
    Egal,
    /// ⌫
    Retour,
    /// C
    Effacer,
    /// ±
    Signe,
}

impl Touche {
    /// Jeton -> Touche. `None` si le jeton n’appartient pas au pavé.
    ///
    /// Le séparateur accepté est celui des réglages ("," par défaut) :
    /// avec la virgule, "." est un jeton inconnu.
    pub fn decoder(symbole: &str, sep: Separateur) -> Option<Touche> {
        if symbole == sep.symbole() {
            return Some(Self::Decimale);
        }

        if let Some(op) = Operateur::TOUS.into_iter().find(|op| op.symbole() == symbole) {
            return Some(Self::Operateur(op));
        }

        let touche = match symbole {
            "=" => Self::Egal,
            "⌫" => Self::Retour,
            "C" => Self::Effacer,
            "±" => Self::Signe,
            _ => {
                let n = CHIFFRES.iter().position(|c| *c == symbole)?;
                Self::Chiffre(n as u8)
            }
        };
        Some(touche)
    }

    /// Touche -> jeton (libellé du bouton). Inverse de `decoder`.
    pub fn symbole(self, sep: Separateur) -> &'static str {
        match self {
            Self::Chiffre(n) => CHIFFRES.get(n as usize).copied().unwrap_or("?"),
            Self::Decimale => sep.symbole(),
            Self::Operateur(op) => op.symbole(),
            Self::Egal => "=",
            Self::Retour => "⌫",
            Self::Effacer => "C",
            Self::Signe => "±",
        }
    }
}
