//! src/noyau/options.rs
//!
//! Réglages d’appel (précision décimale + étiquette).
//!
//! Contrats :
//! - Aucune logique de formatage ici.
//! - Défense en profondeur : la précision est bornée.

/// Précision par défaut (chiffres après la virgule, repli décimal seulement).
pub const PRECISION_DEFAUT: usize = 5;

/// Garde-fou : on borne la précision (anti-abus).
pub const PRECISION_MAX: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Chiffres après la virgule pour les valeurs sans forme reconnue.
    pub precision: usize,

    /// Texte LaTeX placé tel quel avant `\begin{bmatrix}` (ex: `"A = "`).
    pub pretext: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            precision: PRECISION_DEFAUT,
            pretext: String::new(),
        }
    }
}

impl Options {
    /// Précision bornée à `PRECISION_MAX`.
    pub fn avec_precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(PRECISION_MAX);
        self
    }

    pub fn avec_pretext(mut self, pretext: impl Into<String>) -> Self {
        self.pretext = pretext.into();
        self
    }
}
