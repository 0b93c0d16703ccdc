// src/main.rs
//
// Calculatrice Arbre — point d’entrée console
// -------------------------------------------
// - EXPRESSION... : évalue chaque argument, un résultat par ligne
// - sans argument : lit stdin, une expression par ligne
// - RUST_LOG      : niveau de journalisation (stderr)

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use calculatrice_arbre::noyau::{ModeChiffres, Options};

mod app;

use app::AppCalc;

/// Évalue des expressions entières (+ - * / % ^ et parenthèses).
#[derive(Parser, Debug)]
#[command(name = "calculatrice-arbre", version)]
struct Args {
    /// Expressions à évaluer (stdin si absent).
    expressions: Vec<String>,

    /// Un chiffre = un opérande ("12" n’est pas douze).
    #[arg(long)]
    chiffre_unique: bool,

    /// Affiche jetons, RPN et arbre sous chaque résultat.
    #[arg(long)]
    demarche: bool,
}

impl Args {
    fn options(&self) -> Options {
        let chiffres = if self.chiffre_unique {
            ModeChiffres::Unique
        } else {
            ModeChiffres::Multiple
        };
        Options::default().avec_chiffres(chiffres)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut app = AppCalc::new(args.options(), args.demarche);
    let mut out = io::stdout().lock();

    let echecs = if args.expressions.is_empty() {
        app.executer_lignes(io::stdin().lock(), &mut out)?
    } else {
        app.executer(&args.expressions, &mut out)?
    };

    tracing::debug!(echecs, "terminé");
    Ok(if echecs == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
