//! Tests de propriétés : le comportement attendu du pavé, séquence par séquence.
//!
//! Chaque test part d’un moteur neuf (pas d’état partagé entre tests).

use num_traits::Zero;

use super::{ErreurCalcul, Moteur, Reglages, Separateur};

fn taper(m: &mut Moteur, jetons: &[&str]) -> String {
    for j in jetons {
        m.saisir(j);
    }
    m.affichage().to_string()
}

fn resultat(jetons: &[&str]) -> String {
    taper(&mut Moteur::default(), jetons)
}

fn assert_seq(jetons: &[&str], attendu: &str) {
    assert_eq!(resultat(jetons), attendu, "jetons={jetons:?}");
}

fn assert_remis_a_zero(m: &Moteur) {
    assert_eq!(m.affichage(), "0");
    assert!(m.accumulateur().is_zero());
    assert_eq!(m.en_attente(), None);
    assert!(!m.nouvelle_saisie());
    assert_eq!(m.erreur(), None);
}

/* ------------------------ Effacer ------------------------ */

#[test]
fn prop_effacer_idempotent_depuis_tout_etat() {
    let sequences: &[&[&str]] = &[
        &[],
        &["1", "2", "3"],
        &["9", "+"],
        &["9", "+", "4"],
        &["5", "+", "3", "="],
        &["5", "÷", "0", "="],
        &[",", "±"],
        &["7", "÷", "2", "=", "⌫"],
    ];

    for seq in sequences {
        let mut m = Moteur::default();
        taper(&mut m, seq);
        taper(&mut m, &["C"]);
        assert_remis_a_zero(&m);
        taper(&mut m, &["C"]);
        assert_remis_a_zero(&m);
    }
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn prop_suite_de_chiffres() {
    assert_seq(&["C", "1", "2", "3"], "123");
}

#[test]
fn prop_separateur_unique() {
    assert_seq(&[",", ","], "0,");
    assert_seq(&["3", ",", "1", ",", "4"], "3,14");
}

#[test]
fn prop_retour_plancher() {
    let mut m = Moteur::default();
    taper(&mut m, &["8"]);
    for _ in 0..5 {
        taper(&mut m, &["⌫"]);
        assert_eq!(m.affichage(), "0");
    }
    assert_seq(&["4", "5", "6", "⌫", "⌫", "⌫", "⌫"], "0");
}

#[test]
fn prop_signe_aller_retour() {
    for seq in [&["4", "2"][..], &["0", ",", "5"][..], &["1", "±"][..]] {
        let mut m = Moteur::default();
        let avant = taper(&mut m, seq);
        let apres = taper(&mut m, &["±", "±"]);
        assert_eq!(avant, apres, "seq={seq:?}");
    }
}

#[test]
fn prop_jeton_inconnu_sans_effet() {
    let mut m = Moteur::default();
    taper(&mut m, &["1", "+", "2"]);
    let avant = (m.affichage().to_string(), m.en_attente(), m.nouvelle_saisie());

    taper(&mut m, &["x", "*", "/", ".", "AC", "", "12"]);
    let apres = (m.affichage().to_string(), m.en_attente(), m.nouvelle_saisie());
    assert_eq!(avant, apres);
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn prop_evaluation_gauche_droite() {
    // (3+4)×2, pas 3+(4×2)
    assert_seq(&["3", "+", "4", "×", "2", "="], "14");
    assert_seq(&["2", "+", "3", "+", "4", "="], "9");
    assert_seq(&["1", "0", "-", "4", "-", "3", "="], "3");
}

#[test]
fn prop_arithmetique_simple() {
    assert_seq(&["5", "+", "3", "="], "8");
    assert_seq(&["7", "÷", "2", "="], "3,5");
    assert_seq(&["9", "%", "4", "="], "1");
    assert_seq(&["6", "×", "7", "="], "42");
    assert_seq(&["3", "-", "5", "="], "-2");
}

#[test]
fn prop_decimales_exactes() {
    assert_seq(&["0", ",", "1", "+", "0", ",", "2", "="], "0,3");
    assert_seq(&["1", ",", "5", "×", "2", "="], "3");
    assert_seq(&["2", ",", "5", "0", "+", "1", "="], "3,5");
}

#[test]
fn prop_division_arrondie() {
    assert_seq(&["2", "÷", "3", "="], "0,6666666667");
    assert_seq(&["2", "±", "÷", "3", "="], "-0,6666666667");
    assert_seq(&["1", "÷", "8", "="], "0,125");
}

#[test]
fn prop_reste_signe_du_dividende() {
    assert_seq(&["7", "±", "%", "2", "="], "-1");
    assert_seq(&["7", ",", "5", "%", "2", "="], "1,5");
}

#[test]
fn prop_nouvelle_saisie_apres_egal() {
    assert_seq(&["5", "+", "3", "=", "2"], "2");
}

#[test]
fn prop_operateur_garde_sur_zero() {
    let mut m = Moteur::default();
    taper(&mut m, &["C", "+"]);
    assert_remis_a_zero(&m);
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn prop_division_par_zero_etat_erreur() {
    let mut m = Moteur::default();
    taper(&mut m, &["5", "÷", "0", "="]);

    assert_eq!(m.erreur(), Some(&ErreurCalcul::DivisionParZero));
    assert_eq!(m.affichage(), "0");
    assert!(m.ecran().contains("division par zéro"));

    assert_eq!(taper(&mut m, &["7"]), "7");
    assert_eq!(m.erreur(), None);
}

#[test]
fn prop_reste_par_zero_etat_erreur() {
    let mut m = Moteur::default();
    taper(&mut m, &["9", "%", "0", "="]);
    assert_eq!(m.erreur(), Some(&ErreurCalcul::DivisionParZero));
}

/* ------------------------ Réglages ------------------------ */

#[test]
fn prop_instances_independantes() {
    let mut a = Moteur::default();
    let mut b = Moteur::new(Reglages::new(Separateur::Point, 2));

    taper(&mut a, &["1", "+"]);
    taper(&mut b, &["2", "÷", "3", "="]);

    assert_eq!(a.operation().as_deref(), Some("1 +"));
    assert_eq!(b.affichage(), "0.67");
}
