//! tableau_latex — nombres complexes, vecteurs et matrices en LaTeX `bmatrix`.
//!
//! Les valeurs sont reconnues sous forme close quand c’est possible
//! (entiers, petites fractions, `\tfrac{1}{\sqrt{2}}`...), sinon en décimal.
//!
//! ```
//! use tableau_latex::{format_container, Options, Tableau};
//!
//! let h = std::f64::consts::FRAC_1_SQRT_2;
//! let etat = Tableau::vecteur([h, h]);
//! let latex = format_container(&etat, &Options::default()).unwrap();
//! assert!(latex.contains("\\tfrac{1}{\\sqrt{2}}"));
//! ```

pub mod noyau;

pub use num_complex::Complex64;

pub use noyau::{
    affiche_container, format_array, format_container, format_matrix, format_scalar,
    format_vector, lire_tableau, ErreurLatex, Options, Resultat, Tableau,
};
