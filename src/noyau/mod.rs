//! Noyau LaTeX (scalaires, vecteurs, matrices complexes)
//!
//! Organisation interne :
//! - proche.rs    : comparaison à tolérance (une seule tolérance partagée)
//! - rationnel.rs : meilleure fraction à dénominateur borné (exact, BigRational)
//! - format.rs    : un complexe -> LaTeX (entier, √ connue, fraction, décimal)
//! - tableau.rs   : vecteur / matrice -> bmatrix
//! - jetons.rs    : tokenisation des données textuelles
//! - lecture.rs   : jetons -> grille de rang 1 ou 2
//! - options.rs   : précision + pretext
//! - erreur.rs    : erreurs du noyau

pub mod erreur;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod options;
pub mod proche;
pub mod rationnel;
pub mod tableau;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::{ErreurLatex, Resultat};
pub use format::format_scalar;
pub use lecture::lire_tableau;
pub use options::Options;
pub use tableau::{
    affiche_container, format_array, format_container, format_matrix, format_vector, Tableau,
};
