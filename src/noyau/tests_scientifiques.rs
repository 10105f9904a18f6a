//! Tests scientifiques (campagne) : propriétés attendues du rendu LaTeX.
//!
//! - entiers -> eux-mêmes
//! - 1/√2 reconnu, signe conservé
//! - imaginaires purs, facteur commun, fractions, repli décimal
//! - enveloppe vecteur / matrice (séparateurs comptés)
//! - déterminisme

use num_complex::Complex64;
use pretty_assertions::assert_eq;

use super::{format_array, format_container, format_scalar, ErreurLatex, Options, Tableau};

fn scal(re: f64, im: f64) -> String {
    format_scalar(Complex64::new(re, im), 5)
        .unwrap_or_else(|e| panic!("format_scalar({re}, {im}) err={e}"))
}

/* ------------------------ Scalaires ------------------------ */

#[test]
fn sci_entiers_identiques() {
    for n in -50..=50 {
        assert_eq!(scal(f64::from(n), 0.0), n.to_string(), "n={n}");
    }
    assert_eq!(scal(123_456_789.0, 0.0), "123456789");
}

#[test]
fn sci_un_sur_racine_deux() {
    let h = std::f64::consts::FRAC_1_SQRT_2;
    for v in [h, h + 1e-7, h - 1e-7] {
        assert_eq!(scal(v, 0.0), "\\tfrac{1}{\\sqrt{2}}", "v={v}");
        assert_eq!(scal(-v, 0.0), "-\\tfrac{1}{\\sqrt{2}}", "v={v}");
    }
}

#[test]
fn sci_zero() {
    assert_eq!(scal(0.0, 0.0), "0");
}

#[test]
fn sci_imaginaires() {
    assert_eq!(scal(0.0, 3.0), "3i");
    assert_eq!(scal(0.0, 1.0), "i");
    assert_eq!(scal(0.0, -1.0), "-i");
}

#[test]
fn sci_facteur_commun() {
    let s = scal(0.707_106_781_186_547_6, 0.707_106_781_186_547_6);
    assert_eq!(s, "\\tfrac{1}{\\sqrt{2}}(1 + i)");
    // un seul jeton 1/√2
    assert_eq!(s.matches("\\sqrt{2}").count(), 1);
}

#[test]
fn sci_fraction_tiers() {
    assert_eq!(scal(0.333_333_3, 0.0), "\\tfrac{1}{3}");
}

#[test]
fn sci_repli_decimal() {
    assert_eq!(scal(0.123_456, 0.0), "0.12346");
    // zéro de tête conservé
    assert!(scal(0.012_345_6, 0.0).starts_with("0.0"));
    assert_eq!(scal(-0.123_456, 0.0), "-0.12346");
}

#[test]
fn sci_non_fini() {
    let e = format_scalar(Complex64::new(f64::NAN, f64::NAN), 5).unwrap_err();
    assert!(matches!(e, ErreurLatex::NonFini { .. }));
}

/* ------------------------ Conteneurs ------------------------ */

#[test]
fn sci_vecteur_vide() {
    let s = format_container(&Tableau::Vecteur(Vec::new()), &Options::default()).unwrap();
    assert_eq!(s, "$$\n\\begin{bmatrix}\n\\end{bmatrix}\n$$\n");
    assert!(!s.contains("\\\\"));
}

#[test]
fn sci_rang_3_et_non_numerique() {
    let o = Options::default();
    assert_eq!(
        format_array("[[[0]]]", &o),
        Err(ErreurLatex::RangNonSupporte(3))
    );
    assert!(matches!(
        format_array("[[1, x], [2, 3]]", &o),
        Err(ErreurLatex::EntreeInvalide(_))
    ));
}

#[test]
fn sci_separateurs_2x2() {
    let t = Tableau::matrice([[1.0, 2.0], [3.0, 4.0]]);
    let s = format_container(&t, &Options::default()).unwrap();

    assert_eq!(s.matches(" \\\\\n").count(), 1);
    let corps: Vec<&str> = s
        .lines()
        .filter(|l| l.contains('&'))
        .collect();
    assert_eq!(corps.len(), 2);
    for ligne in corps {
        assert_eq!(ligne.matches(" & ").count(), 1);
        assert!(!ligne.trim_end_matches(" \\\\").ends_with('&'));
    }
    assert!(s.starts_with("$$\n"));
    assert!(s.ends_with("\\end{bmatrix}\n$$\n"));
}

#[test]
fn sci_pretext_verbatim() {
    let o = Options::default().avec_pretext("\\rho_{AB} = ");
    let s = format_container(&Tableau::vecteur([1.0]), &o).unwrap();
    assert!(s.starts_with("$$\n\\rho_{AB} = \\begin{bmatrix}\n"));
}

#[test]
fn sci_determinisme() {
    let t = Tableau::Matrice(vec![
        vec![Complex64::new(0.5, 0.5), Complex64::new(0.1234567, -2.0)],
        vec![Complex64::new(-0.0, 1.0), Complex64::new(0.866_025_4, 0.0)],
    ]);
    let o = Options::default();
    let a = format_container(&t, &o).unwrap();
    let b = format_container(&t, &o).unwrap();
    assert_eq!(a, b);
}

#[test]
fn sci_hadamard() {
    let h = std::f64::consts::FRAC_1_SQRT_2;
    let t = Tableau::matrice([[h, h], [h, -h]]);
    let s = format_container(&t, &Options::default().avec_pretext("H = ")).unwrap();
    assert_eq!(
        s,
        "$$\nH = \\begin{bmatrix}\n\\tfrac{1}{\\sqrt{2}} & \\tfrac{1}{\\sqrt{2}} \\\\\n\\tfrac{1}{\\sqrt{2}} & -\\tfrac{1}{\\sqrt{2}}\n\\end{bmatrix}\n$$\n"
    );
}
