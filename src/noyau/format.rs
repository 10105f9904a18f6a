// src/noyau/format.rs

use num_bigint::BigInt;
use num_complex::Complex64;
use num_traits::{FromPrimitive, One, Signed, Zero};
use tracing::trace;

use super::erreur::{ErreurLatex, Resultat};
use super::proche::{proche, proche_zero};
use super::rationnel::approx_rationnelle;

/* ------------------------ Termes connus ------------------------ */

/// Magnitudes irrationnelles reconnues, dans l’ordre de recherche.
/// (aucune paire n’est assez proche pour entrer en collision sous la tolérance)
pub const TERMES_CONNUS: [(f64, &str); 5] = [
    (std::f64::consts::FRAC_1_SQRT_2, "\\tfrac{1}{\\sqrt{2}}"),
    (0.577_350_269_189_625_8, "\\tfrac{1}{\\sqrt{3}}"),
    (0.816_496_580_927_726, "\\sqrt{\\tfrac{2}{3}}"),
    (0.866_025_403_784_438_6, "\\sqrt{\\tfrac{3}{4}}"),
    (0.353_553_390_593_273_8, "\\tfrac{1}{\\sqrt{8}}"),
];

/// |p| + q doit rester sous ce seuil pour qu’une fraction soit jugée “simple”.
pub const SOMME_MAX_FRACTION: u32 = 20;

/* ------------------------ Règles (ordre = priorité) ------------------------ */

/// Forme candidate pour une valeur réelle. Exactement une est retenue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regle {
    Entier,
    TermeConnu,
    Fraction,
    Decimal,
}

const ORDRE_REGLES: [Regle; 4] = [
    Regle::Entier,
    Regle::TermeConnu,
    Regle::Fraction,
    Regle::Decimal,
];

impl Regle {
    /// None si la règle ne s’applique pas à `val`.
    fn essayer(self, val: f64, precision: usize) -> Option<String> {
        match self {
            Regle::Entier => format_entier(val),
            Regle::TermeConnu => format_terme_connu(val),
            Regle::Fraction => format_fraction(val),
            Regle::Decimal => Some(format_decimal(val, precision)),
        }
    }
}

/// Première règle qui s’applique (Decimal s’applique toujours).
pub fn choisir_regle(val: f64, precision: usize) -> (Regle, String) {
    ORDRE_REGLES
        .iter()
        .find_map(|&regle| regle.essayer(val, precision).map(|s| (regle, s)))
        .unwrap_or_else(|| (Regle::Decimal, format_decimal(val, precision)))
}

/// Rendu LaTeX d’un réel fini.
pub fn format_reel(val: f64, precision: usize) -> String {
    let (regle, latex) = choisir_regle(val, precision);
    trace!(val, ?regle, %latex, "règle retenue");
    latex
}

/* ------------------------ Rendus élémentaires ------------------------ */

/// Partie fractionnaire (modulo 1, dans [0, 1)) proche de 0 ou de 1.
fn format_entier(val: f64) -> Option<String> {
    let reste = val.rem_euclid(1.0);
    if !(proche_zero(reste) || proche(reste, 1.0)) {
        return None;
    }
    // BigInt : pas de troncature au-delà de i64
    let n = BigInt::from_f64(val.round())?;
    Some(n.to_string())
}

fn format_terme_connu(val: f64) -> Option<String> {
    let abs = val.abs();
    TERMES_CONNUS
        .iter()
        .find(|(magnitude, _)| proche(abs, *magnitude))
        .map(|(_, latex)| {
            if val > 0.0 {
                (*latex).to_string()
            } else {
                format!("-{latex}")
            }
        })
}

/// p/q -> \tfrac{p}{q} (signe devant) si |p| + q < SOMME_MAX_FRACTION.
fn format_fraction(val: f64) -> Option<String> {
    let r = approx_rationnelle(val)?;
    let p = r.numer().abs();
    let q = r.denom();

    // 0/1 n’est pas une “fraction” : on laisse la lecture décimale trancher
    if p.is_zero() {
        return None;
    }
    if &p + q >= BigInt::from(SOMME_MAX_FRACTION) {
        return None;
    }

    let signe = if val < 0.0 { "-" } else { "" };
    if q.is_one() {
        return Some(format!("{signe}{p}"));
    }
    Some(format!("{signe}\\tfrac{{{p}}}{{{q}}}"))
}

/// Décimal à `precision` chiffres, zéros de queue retirés (après la virgule seulement).
pub fn format_decimal(val: f64, precision: usize) -> String {
    let mut s = format!("{val:.precision$}");
    if s.contains('.') {
        let garde = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(garde);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/* ------------------------ Scalaire complexe ------------------------ */

/// Représentation LaTeX d’un complexe.
///
/// - `a + bi` avec chaque partie en entier / terme connu / fraction / décimal
/// - si |re| ≈ |im| (non nuls), le module commun est factorisé : `f(1 + i)`
/// - coefficient imaginaire 1 omis (`i`, `-i`)
///
/// Erreur seulement si une partie n’est pas finie.
pub fn format_scalar(z: Complex64, precision: usize) -> Resultat<String> {
    if !z.re.is_finite() || !z.im.is_finite() {
        return Err(ErreurLatex::NonFini { re: z.re, im: z.im });
    }

    let mut r = z.re;
    let mut i = z.im;

    // facteur commun : 0.707 + 0.707i -> \tfrac{1}{\sqrt{2}}(1 + i)
    let mut facteur = None;
    if proche(r.abs(), i.abs()) && !proche_zero(r) {
        let f = r.abs();
        r /= f;
        i /= f;
        facteur = Some(f);
    }

    let facteur_txt = facteur.map(|f| format_reel(f, precision));
    let reel_txt = format_reel(r, precision);

    // signe lu sur la partie imaginaire d’origine (-0.0 ne compte pas comme négatif)
    let (signe, mut imag_txt) = if i > 0.0 {
        ('+', format_reel(i, precision))
    } else {
        ('-', format_reel(-i, precision))
    };

    if imag_txt == "1" {
        imag_txt.clear();
    }
    if imag_txt == "0" {
        return Ok(reel_txt);
    }
    if reel_txt == "0" {
        return Ok(if signe == '-' {
            format!("-{imag_txt}i")
        } else {
            format!("{imag_txt}i")
        });
    }

    let corps = format!("{reel_txt} {signe} {imag_txt}i");
    Ok(match facteur_txt {
        Some(f) => format!("{f}({corps})"),
        None => corps,
    })
}
