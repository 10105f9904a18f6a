// src/noyau/tableau.rs
//
// Assemblage vecteur / matrice -> bmatrix.
// Enveloppe fixe :
//   $$\n <pretext> \begin{bmatrix}\n <corps> \end{bmatrix}\n $$\n
// - lignes séparées par " \\\n" (jamais après la dernière)
// - colonnes séparées par " & " (jamais après la dernière)

use num_complex::Complex64;
use tracing::debug;

use super::erreur::Resultat;
use super::format::format_scalar;
use super::lecture::lire_tableau;
use super::options::Options;

const SEP_LIGNE: &str = " \\\\\n";
const SEP_COLONNE: &str = " & ";

/// Grille numérique de rang 1 ou 2.
#[derive(Clone, Debug, PartialEq)]
pub enum Tableau {
    Vecteur(Vec<Complex64>),
    /// Lignes de même longueur (supposé, non vérifié ici).
    Matrice(Vec<Vec<Complex64>>),
}

impl Tableau {
    /// Vecteur à partir de valeurs convertibles en `Complex64`
    /// (`f64`, `Complex64`). Les entiers passent par `f64::from`.
    pub fn vecteur<T, I>(valeurs: I) -> Self
    where
        T: Into<Complex64>,
        I: IntoIterator<Item = T>,
    {
        Tableau::Vecteur(valeurs.into_iter().map(Into::into).collect())
    }

    /// Matrice ligne par ligne, mêmes conversions que [`Tableau::vecteur`].
    /// Les longueurs de lignes ne sont pas vérifiées.
    pub fn matrice<T, L, I>(lignes: I) -> Self
    where
        T: Into<Complex64>,
        L: IntoIterator<Item = T>,
        I: IntoIterator<Item = L>,
    {
        Tableau::Matrice(
            lignes
                .into_iter()
                .map(|l| l.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    pub fn rang(&self) -> usize {
        match self {
            Tableau::Vecteur(_) => 1,
            Tableau::Matrice(_) => 2,
        }
    }
}

/* ------------------------ Enveloppe ------------------------ */

fn envelopper(corps: &str, pretext: &str) -> String {
    let mut out = String::with_capacity(corps.len() + pretext.len() + 40);
    out.push_str("$$\n");
    out.push_str(pretext);
    out.push_str("\\begin{bmatrix}\n");
    if !corps.is_empty() {
        out.push_str(corps);
        out.push('\n');
    }
    out.push_str("\\end{bmatrix}\n$$\n");
    out
}

/* ------------------------ Rang 1 / rang 2 ------------------------ */

/// Vecteur : une valeur par ligne.
pub fn format_vector(valeurs: &[Complex64], options: &Options) -> Resultat<String> {
    let lignes = valeurs
        .iter()
        .map(|&z| format_scalar(z, options.precision))
        .collect::<Resultat<Vec<_>>>()?;
    Ok(envelopper(&lignes.join(SEP_LIGNE), &options.pretext))
}

/// Matrice : colonnes " & ", lignes " \\".
/// Zéro colonne (toutes les lignes vides) : corps vide, comme le vecteur vide.
pub fn format_matrix(lignes: &[Vec<Complex64>], options: &Options) -> Resultat<String> {
    if lignes.iter().all(Vec::is_empty) {
        return Ok(envelopper("", &options.pretext));
    }

    let mut rendues = Vec::with_capacity(lignes.len());
    for ligne in lignes {
        let cellules = ligne
            .iter()
            .map(|&z| format_scalar(z, options.precision))
            .collect::<Resultat<Vec<_>>>()?;
        rendues.push(cellules.join(SEP_COLONNE));
    }
    Ok(envelopper(&rendues.join(SEP_LIGNE), &options.pretext))
}

/// Point d’entrée polymorphe (rang 1 ou 2).
pub fn format_container(tableau: &Tableau, options: &Options) -> Resultat<String> {
    match tableau {
        Tableau::Vecteur(v) => {
            debug!(len = v.len(), precision = options.precision, "format vecteur");
            format_vector(v, options)
        }
        Tableau::Matrice(m) => {
            debug!(
                lignes = m.len(),
                colonnes = m.first().map_or(0, Vec::len),
                precision = options.precision,
                "format matrice"
            );
            format_matrix(m, options)
        }
    }
}

/// Mode “affichage” : le texte part vers `sortie` (surface de rendu de l’appelant),
/// rien n’est retourné.
pub fn affiche_container<F>(tableau: &Tableau, options: &Options, sortie: F) -> Resultat<()>
where
    F: FnOnce(&str),
{
    let latex = format_container(tableau, options)?;
    sortie(&latex);
    Ok(())
}

/// Données textuelles quelconques -> LaTeX (lecture puis formatage).
pub fn format_array(texte: &str, options: &Options) -> Resultat<String> {
    let tableau = lire_tableau(texte)?;
    format_container(&tableau, options)
}
