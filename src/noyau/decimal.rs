// src/noyau/decimal.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::erreur::ErreurCalcul;
use super::reglages::Separateur;

/// Repli si un dénominateur n’est pas de la forme 2^a·5^b (ne devrait pas arriver).
const ECHELLE_REPLI: u32 = 20;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/* ------------------------ Lecture (affichage -> rationnel) ------------------------ */

/// Lit un affichage `-?[0-9]+(SEP[0-9]*)?` en rationnel exact.
/// Un séparateur final ("12,") est accepté : il vaut "12".
pub fn lire_affichage(texte: &str, sep: Separateur) -> Result<BigRational, ErreurCalcul> {
    let invalide = || ErreurCalcul::AffichageInvalide(texte.to_string());

    let (neg, corps) = match texte.strip_prefix('-') {
        Some(sans_signe) => (true, sans_signe),
        None => (false, texte),
    };

    let (entier, frac) = corps.split_once(sep.caractere()).unwrap_or((corps, ""));

    let chiffres_ok = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if entier.is_empty() || !chiffres_ok(entier) || !chiffres_ok(frac) {
        return Err(invalide());
    }

    let n: BigInt = format!("{entier}{frac}").parse().map_err(|_| invalide())?;
    let r = BigRational::new(n, pow10(frac.len() as u32));

    Ok(if neg { -r } else { r })
}

/* ------------------------ Arithmétique décimale ------------------------ */

/// Arrondi à `echelle` chiffres après la virgule, demi-haut (les égalités s’éloignent de zéro).
pub fn arrondir(r: &BigRational, echelle: u32) -> BigRational {
    let facteur = BigRational::from_integer(pow10(echelle));
    let scaled = r * &facteur;

    let demi = BigRational::new(BigInt::one(), BigInt::from(2));
    let abs = (scaled.abs() + demi).floor();

    let arrondi = if scaled.is_negative() { -abs } else { abs };
    arrondi / facteur
}

/// a ÷ b, arrondi à `echelle` chiffres (évite les développements infinis).
pub fn diviser(a: &BigRational, b: &BigRational, echelle: u32) -> Result<BigRational, ErreurCalcul> {
    if b.is_zero() {
        return Err(ErreurCalcul::DivisionParZero);
    }
    Ok(arrondir(&(a / b), echelle))
}

/// Reste de a par b (quotient tronqué vers zéro : le signe suit a).
pub fn reste(a: &BigRational, b: &BigRational) -> Result<BigRational, ErreurCalcul> {
    if b.is_zero() {
        return Err(ErreurCalcul::DivisionParZero);
    }
    let q = (a / b).trunc();
    Ok(a - b * q)
}

/* ------------------------ Affichage (rationnel -> texte) ------------------------ */

/// Plus petit k tel que r·10^k soit entier, si le dénominateur s’y prête.
fn echelle_exacte(denom: &BigInt) -> Option<u32> {
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut d = denom.clone();
    let mut n2 = 0u32;
    let mut n5 = 0u32;

    while (&d % &deux).is_zero() {
        d /= &deux;
        n2 += 1;
    }
    while (&d % &cinq).is_zero() {
        d /= &cinq;
        n5 += 1;
    }

    d.is_one().then_some(n2.max(n5))
}

/// Forme décimale minimale : pas de zéros finals, pas de séparateur si entier.
pub fn formater(r: &BigRational, sep: Separateur) -> String {
    if r.is_integer() {
        return r.to_integer().to_string();
    }

    let (r, echelle) = match echelle_exacte(r.denom()) {
        Some(k) => (r.clone(), k),
        None => (arrondir(r, ECHELLE_REPLI), ECHELLE_REPLI),
    };

    let scaled = (r.numer() * pow10(echelle)) / r.denom();
    let neg = scaled.is_negative();

    let mut txt = scaled.abs().to_str_radix(10);
    let echelle = echelle as usize;
    while txt.len() <= echelle {
        txt.insert(0, '0');
    }

    let (entier, frac) = txt.split_at(txt.len() - echelle);
    let frac = frac.trim_end_matches('0');

    let signe = if neg { "-" } else { "" };
    if frac.is_empty() {
        format!("{signe}{entier}")
    } else {
        format!("{signe}{entier}{}{frac}", sep.caractere())
    }
}
