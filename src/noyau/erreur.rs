// src/noyau/erreur.rs

use thiserror::Error;

/// Échecs du moteur. Tous récupérables par "C".
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// ÷ ou % avec un opérande droit nul.
    #[error("division par zéro")]
    DivisionParZero,

    /// L’affichage ne respecte plus la grammaire `-?[0-9]+(SEP[0-9]*)?`.
    /// Violation d’invariant interne (bug), jamais une faute de l’utilisateur.
    #[error("affichage illisible : {0:?}")]
    AffichageInvalide(String),
}
