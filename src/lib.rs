//! Calculatrice à pavé
//!
//! - `noyau` : moteur pur (touches -> affichage), arithmétique décimale exacte
//! - `app`   : vue egui (natif + web) qui possède un moteur et lui transmet les touches
//!
//! ```
//! use calculatrice_pave::noyau::Moteur;
//!
//! let mut m = Moteur::default();
//! for j in ["3", "+", "4", "×", "2", "="] {
//!     m.saisir(j);
//! }
//! assert_eq!(m.affichage(), "14");
//! ```

pub mod app;
pub mod noyau;
