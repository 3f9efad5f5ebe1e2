//! Noyau de la calculatrice à pavé
//!
//! Organisation interne :
//! - touche.rs    : touches du pavé (jeton -> Touche) + opérateurs
//! - decimal.rs   : lecture/affichage décimal exact, division arrondie, reste
//! - moteur.rs    : machine à états (affichage, accumulateur, opération en attente)
//! - reglages.rs  : séparateur décimal + échelle de division
//! - erreur.rs    : erreurs typées

pub mod decimal;
pub mod erreur;
pub mod moteur;
pub mod reglages;
pub mod touche;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreur::ErreurCalcul;
pub use moteur::Moteur;
pub use reglages::{Reglages, Separateur, ECHELLE_DEFAUT, ECHELLE_MAX};
pub use touche::{Operateur, Touche};
