// src/main.rs
//
// tableau-latex — point d’entrée CLI
// ----------------------------------
// But:
// - lire un tableau (argument ou stdin) : "[[1, 0.5+0.5i], [-i, 0]]"
// - écrire le LaTeX (bmatrix entre $$) sur stdout
// - erreurs sur stderr, code de sortie 1
//
// Le terminal joue ici le rôle de la surface d’affichage (mode affiche_container).

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tableau_latex::noyau::options::PRECISION_DEFAUT;
use tableau_latex::{affiche_container, lire_tableau, ErreurLatex, Options};

/// Tableau numérique (rang 1 ou 2) -> LaTeX bmatrix
#[derive(Parser, Debug)]
#[command(name = "tableau-latex")]
#[command(version)]
#[command(about = "Convertit un vecteur ou une matrice de complexes en LaTeX (bmatrix)")]
struct Cli {
    /// Données, ex: "[[1, 0], [0, -i]]" (lues sur stdin si absent)
    donnees: Option<String>,

    /// Chiffres après la virgule pour les valeurs sans forme reconnue
    #[arg(short, long, default_value_t = PRECISION_DEFAUT)]
    precision: usize,

    /// Étiquette LaTeX placée avant la matrice, ex: "A = "
    #[arg(long, default_value = "")]
    pretext: String,

    /// Verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/* ------------------------ Traces ------------------------ */

fn installer_traces(verbose: u8) {
    let filtre = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filtre)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/* ------------------------ Exécution ------------------------ */

fn lire_entree(donnees: Option<String>) -> Result<String, ErreurLatex> {
    match donnees {
        Some(d) => Ok(d),
        None => {
            let mut tampon = String::new();
            io::stdin()
                .read_to_string(&mut tampon)
                .map_err(|e| ErreurLatex::EntreeInvalide(format!("lecture stdin: {e}")))?;
            Ok(tampon)
        }
    }
}

fn executer(cli: Cli) -> Result<(), ErreurLatex> {
    let options = Options::default()
        .avec_precision(cli.precision)
        .avec_pretext(cli.pretext);

    let texte = lire_entree(cli.donnees)?;
    let tableau = lire_tableau(&texte)?;
    tracing::info!(rang = tableau.rang(), "tableau lu");

    affiche_container(&tableau, &options, |latex| print!("{latex}"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    installer_traces(cli.verbose);

    match executer(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(erreur = %e, "conversion impossible");
            eprintln!("erreur: {e}");
            ExitCode::FAILURE
        }
    }
}
