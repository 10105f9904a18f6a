// src/noyau/lecture.rs
//
// Lecture de données textuelles -> Tableau (rang 1 ou 2).
// C’est ici (et seulement ici) que naissent EntreeInvalide et RangNonSupporte :
// aucune mise en forme n’est tentée avant que la grille soit validée.

use std::str::FromStr;

use num_complex::Complex64;
use tracing::debug;

use super::erreur::{ErreurLatex, Resultat};
use super::jetons::{format_tokens, tokenize, Tok};
use super::tableau::Tableau;

/// Garde-fou : profondeur d’imbrication maximale acceptée par la lecture.
const MAX_PROFONDEUR: usize = 64;

/// Arbre brut (avant vérification de forme).
#[derive(Clone, Debug, PartialEq)]
pub enum Noeud {
    Scalaire(Complex64),
    Liste(Vec<Noeud>),
}

fn invalide(msg: impl Into<String>) -> ErreurLatex {
    ErreurLatex::EntreeInvalide(msg.into())
}

/* ------------------------ Jetons -> arbre ------------------------ */

/// Construction itérative (pile de listes ouvertes), sans récursion.
pub fn lire_noeud(texte: &str) -> Resultat<Noeud> {
    let jetons = tokenize(texte)?;
    tracing::trace!(jetons = %format_tokens(&jetons), "jetons lus");

    let mut pile: Vec<Vec<Noeud>> = Vec::new();
    let mut racine: Option<Noeud> = None;
    // vrai juste après '[' ou ','
    let mut attend_valeur = true;

    for tok in jetons {
        if racine.is_some() {
            return Err(invalide("contenu après la fin du tableau"));
        }

        let noeud = match tok {
            Tok::LCrochet => {
                if !attend_valeur {
                    return Err(invalide("virgule manquante avant '['"));
                }
                if pile.len() >= MAX_PROFONDEUR {
                    return Err(invalide(format!(
                        "imbrication trop profonde (> {MAX_PROFONDEUR})"
                    )));
                }
                pile.push(Vec::new());
                attend_valeur = true;
                continue;
            }
            Tok::Virgule => {
                if attend_valeur || pile.is_empty() {
                    return Err(invalide("virgule inattendue"));
                }
                attend_valeur = true;
                continue;
            }
            Tok::Nombre(z) => {
                if !attend_valeur {
                    return Err(invalide("virgule manquante entre deux valeurs"));
                }
                Noeud::Scalaire(z)
            }
            Tok::RCrochet => {
                let items = pile.pop().ok_or_else(|| invalide("']' sans '[' ouvrant"))?;
                Noeud::Liste(items)
            }
        };

        attend_valeur = false;
        match pile.last_mut() {
            Some(ouverte) => ouverte.push(noeud),
            None => racine = Some(noeud),
        }
    }

    if !pile.is_empty() {
        return Err(invalide("'[' non fermé"));
    }
    racine.ok_or_else(|| invalide("entrée vide"))
}

/* ------------------------ Forme (type numpy) ------------------------ */

/// Forme d’une grille uniforme : [] pour un scalaire, [n] pour un vecteur, [l, c]...
/// Erreur si lignes de longueurs différentes, ou mélange scalaires / listes.
pub fn forme(noeud: &Noeud) -> Resultat<Vec<usize>> {
    match noeud {
        Noeud::Scalaire(_) => Ok(Vec::new()),
        Noeud::Liste(items) => {
            let mut sous_forme: Option<Vec<usize>> = None;
            for item in items {
                let f = forme(item)?;
                if let Some(attendue) = &sous_forme {
                    if *attendue != f {
                        return Err(invalide(format!(
                            "grille non uniforme : formes {attendue:?} et {f:?} mélangées"
                        )));
                    }
                } else {
                    sous_forme = Some(f);
                }
            }
            let mut out = vec![items.len()];
            out.extend(sous_forme.unwrap_or_default());
            Ok(out)
        }
    }
}

/* ------------------------ Arbre -> Tableau ------------------------ */

impl TryFrom<Noeud> for Tableau {
    type Error = ErreurLatex;

    fn try_from(noeud: Noeud) -> Resultat<Self> {
        let f = forme(&noeud)?;
        debug!(rang = f.len(), forme = ?f, "grille lue");

        match (f.len(), noeud) {
            (1, Noeud::Liste(items)) => Ok(Tableau::Vecteur(scalaires(items)?)),
            (2, Noeud::Liste(lignes)) => Ok(Tableau::Matrice(
                lignes
                    .into_iter()
                    .map(|ligne| match ligne {
                        Noeud::Liste(items) => scalaires(items),
                        Noeud::Scalaire(_) => Err(invalide("ligne attendue, scalaire trouvé")),
                    })
                    .collect::<Resultat<Vec<_>>>()?,
            )),
            (rang, _) => Err(ErreurLatex::RangNonSupporte(rang)),
        }
    }
}

/// Liste de feuilles -> valeurs ; une sous-liste ici est une erreur.
fn scalaires(items: Vec<Noeud>) -> Resultat<Vec<Complex64>> {
    items
        .into_iter()
        .map(|n| match n {
            Noeud::Scalaire(z) => Ok(z),
            Noeud::Liste(_) => Err(invalide("scalaire attendu, liste trouvée")),
        })
        .collect()
}

/// Texte -> Tableau : lecture, forme, rang.
pub fn lire_tableau(texte: &str) -> Resultat<Tableau> {
    Tableau::try_from(lire_noeud(texte)?)
}

impl FromStr for Tableau {
    type Err = ErreurLatex;

    fn from_str(s: &str) -> Resultat<Self> {
        lire_tableau(s)
    }
}
