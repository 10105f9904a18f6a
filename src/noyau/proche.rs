// src/noyau/proche.rs
//
// Comparaison à tolérance (une seule tolérance partagée par tout le noyau :
// facteur commun, entiers, termes connus).

/// Tolérance relative (appliquée à |b|).
pub const RTOL: f64 = 1e-5;

/// Tolérance absolue.
pub const ATOL: f64 = 1e-8;

/// |a - b| <= ATOL + RTOL * |b|
///
/// Attention : non symétrique (la partie relative dépend de `b`, la référence).
#[inline]
pub fn proche(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

/// Raccourci : `a` est-il (presque) nul ?
#[inline]
pub fn proche_zero(a: f64) -> bool {
    proche(a, 0.0)
}
