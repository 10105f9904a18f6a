// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau LaTeX.
///
/// Le formateur scalaire n’échoue que sur une valeur non finie ; les deux
/// autres variantes viennent de la lecture des données (avant tout formatage).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurLatex {
    /// Données non interprétables comme une grille numérique.
    #[error("entrée invalide : {0} (attendu : tableau numérique, ou convertible en tableau numérique)")]
    EntreeInvalide(String),

    /// Grille numérique de rang autre que 1 ou 2.
    #[error("rang {0} non supporté : seuls les vecteurs (rang 1) et matrices (rang 2) sont convertis")]
    RangNonSupporte(usize),

    /// NaN ou ±∞ dans une des parties.
    #[error("valeur non finie ({re} + {im}i) : impossible à formater")]
    NonFini { re: f64, im: f64 },
}

pub type Resultat<T> = Result<T, ErreurLatex>;
