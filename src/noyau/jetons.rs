// src/noyau/jetons.rs

use std::str::FromStr;

use num_complex::Complex64;

use super::erreur::{ErreurLatex, Resultat};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Nombre(Complex64),

    LCrochet, // [
    RCrochet, // ]
    Virgule,
}

/// Tokenize une chaîne de tableau en jetons.
/// Supporte:
/// - crochets [ ] (listes imbriquées)
/// - virgules
/// - nombres complexes : 2, -0.5, 1e-3, 0.5+0.5i, 3i, -i (j accepté pour i)
/// - inf / nan (lus ici, rejetés au formatage)
/// - espaces partout (y compris dans un complexe : "1 + 2i")
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '[' => {
                out.push(Tok::LCrochet);
                i += 1;
                continue;
            }
            ']' => {
                out.push(Tok::RCrochet);
                i += 1;
                continue;
            }
            ',' => {
                out.push(Tok::Virgule);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Littéral numérique : tout jusqu’au prochain séparateur
        if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') {
            let start = i;
            while i < chars.len() && !matches!(chars[i], '[' | ']' | ',') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Tok::Nombre(lire_complexe(&texte)?));
            continue;
        }

        return Err(ErreurLatex::EntreeInvalide(format!(
            "caractère inattendu: '{c}'"
        )));
    }

    Ok(out)
}

/// Lit un complexe : "1 + 2i", "-i", "3j", "inf"...
pub fn lire_complexe(texte: &str) -> Resultat<Complex64> {
    let invalide =
        || ErreurLatex::EntreeInvalide(format!("valeur non numérique: '{}'", texte.trim()));

    // espaces admis seulement autour d’un signe : "1 + 2i" oui, "1 2" non
    let morceaux: Vec<&str> = texte.split_whitespace().collect();
    for paire in morceaux.windows(2) {
        let signe = |c: char| c == '+' || c == '-';
        let autour_signe = paire[0].ends_with(signe) || paire[1].starts_with(signe);
        if !autour_signe {
            return Err(ErreurLatex::EntreeInvalide(format!(
                "virgule manquante entre '{}' et '{}'",
                paire[0], paire[1]
            )));
        }
    }

    let compact = morceaux.concat().to_lowercase();
    if compact.is_empty() {
        return Err(invalide());
    }

    // réel pur (y compris inf / nan)
    if let Ok(x) = compact.parse::<f64>() {
        return Ok(Complex64::new(x, 0.0));
    }

    // coefficient implicite : "i" -> "1i", "2-i" -> "2-1i"
    let mut norm = compact.replace('j', "i");
    if norm.ends_with('i') {
        let avant = norm[..norm.len() - 1].chars().last();
        if matches!(avant, None | Some('+') | Some('-')) {
            norm.insert(norm.len() - 1, '1');
        }
    }

    Complex64::from_str(&norm).map_err(|_| invalide())
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Nombre(z) => format!("{z}"),
            Tok::LCrochet => "[".to_string(),
            Tok::RCrochet => "]".to_string(),
            Tok::Virgule => ",".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
