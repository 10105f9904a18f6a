// src/noyau/rationnel.rs
//
// Meilleure approximation rationnelle à dénominateur borné.
// Calcul EXACT sur la valeur binaire du flottant (BigRational), puis fractions
// continues : on garde la réduite (ou la semi-réduite) la plus proche.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Dénominateur maximal par défaut.
pub const DENOM_MAX: u64 = 1_000_000;

/// Approximation rationnelle de `val` (fini) avec dénominateur <= DENOM_MAX.
/// None si `val` n’est pas fini.
pub fn approx_rationnelle(val: f64) -> Option<BigRational> {
    let exact = BigRational::from_float(val)?;
    Some(limit_denominator(&exact, &BigInt::from(DENOM_MAX)))
}

/// Plus proche fraction p/q de `r` avec 1 <= q <= `max_denom`.
/// En cas d’égalité des distances, la réduite (borne haute de l’arbre) gagne.
pub fn limit_denominator(r: &BigRational, max_denom: &BigInt) -> BigRational {
    if r.denom() <= max_denom {
        return r.clone();
    }

    // symétrique : on travaille sur |r| puis on remet le signe
    let neg = r.is_negative();
    let abs_r = r.abs();

    // (p0/q0, p1/q1) : deux dernières réduites
    let mut p0 = BigInt::zero();
    let mut q0 = BigInt::one();
    let mut p1 = BigInt::one();
    let mut q1 = BigInt::zero();

    let mut n = abs_r.numer().clone();
    let mut d = abs_r.denom().clone();

    loop {
        // n, d > 0 : la division entière est un plancher
        let a = &n / &d;
        let q2 = &q0 + &a * &q1;
        if &q2 > max_denom {
            break;
        }

        let p2 = &p0 + &a * &p1;
        p0 = std::mem::replace(&mut p1, p2);
        q0 = std::mem::replace(&mut q1, q2);

        let reste = &n - &a * &d;
        n = std::mem::replace(&mut d, reste);
        if d.is_zero() {
            // développement fini (ne devrait pas arriver : denom > max)
            break;
        }
    }

    // semi-réduite : plus grand k tel que q0 + k*q1 <= max
    let k = (max_denom - &q0) / &q1;
    let borne1 = BigRational::new(&p0 + &k * &p1, &q0 + &k * &q1);
    let borne2 = BigRational::new(p1, q1);

    let ecart1 = (&borne1 - &abs_r).abs();
    let ecart2 = (&borne2 - &abs_r).abs();

    let choisi = if ecart2 <= ecart1 { borne2 } else { borne1 };
    if neg {
        -choisi
    } else {
        choisi
    }
}
