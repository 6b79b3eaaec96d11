use super::{
    output::output_ops,
    report::Report,
    session_loader::{read_session_config, session_config_or_default},
    AppError,
};
use crate::model::assessment::{assessment_ops, ValidationPolicy};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::Path;
use umia_core::model::session::{default_session_config, Session, DEFAULT_ENTITY_COUNT};

/// Command line tool for assessing the impacts of urban mobility scenarios on a set of personas
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct UmiaApp {
    #[command(subcommand)]
    pub op: UmiaOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum UmiaOperation {
    /// run an assessment and print its report
    Run {
        /// TOML or JSON session file, the built-in session when omitted
        #[arg(long)]
        session_file: Option<String>,
        /// directory for the CSV result tables and summary.json
        #[arg(long)]
        output_directory: Option<String>,
        /// replaces the population size of the session
        #[arg(long)]
        population: Option<u64>,
        /// replace invalid cell inputs with zero values and report them, and
        /// likelihoods and weights that do not sum to 100, as warnings
        #[arg(long)]
        lenient: bool,
    },
    /// check a session file and list every problem found
    Validate {
        #[arg(long)]
        session_file: String,
    },
    /// write the built-in session as a TOML template
    Defaults {
        #[arg(long, default_value_t = DEFAULT_ENTITY_COUNT)]
        scenarios: usize,
        #[arg(long, default_value_t = DEFAULT_ENTITY_COUNT)]
        personas: usize,
        /// printed to stdout when omitted
        #[arg(long)]
        output_file: Option<String>,
    },
}

impl UmiaOperation {
    pub fn run(self) -> Result<(), AppError> {
        match self {
            UmiaOperation::Run {
                session_file,
                output_directory,
                population,
                lenient,
            } => {
                let config = session_config_or_default(session_file.as_deref(), population)?;
                let policy = if lenient {
                    ValidationPolicy::Lenient
                } else {
                    ValidationPolicy::Strict
                };
                let (session, assessment) = assessment_ops::assess(config, policy)?;
                println!("{}", Report::new(&session, &assessment));
                if let Some(directory) = output_directory {
                    output_ops::write_outputs(Path::new(&directory), &session, &assessment)?;
                }
                Ok(())
            }
            UmiaOperation::Validate { session_file } => {
                let config = read_session_config(&session_file, None)?;
                let (session, mut violations) = Session::try_from_lenient(config)?;
                violations.extend(session.invariant_violations());
                if violations.is_empty() {
                    println!("{session_file} is a valid session");
                } else {
                    println!("{session_file} is readable but fails {} checks:", violations.len());
                    for violation in violations.iter() {
                        println!("  {violation}");
                    }
                }
                Ok(())
            }
            UmiaOperation::Defaults {
                scenarios,
                personas,
                output_file,
            } => {
                let config = default_session_config(scenarios, personas)?;
                let contents = toml::to_string_pretty(&config)?;
                match output_file {
                    Some(path) => {
                        std::fs::write(&path, contents)?;
                        log::info!("wrote default session to {path}");
                    }
                    None => println!("{contents}"),
                }
                Ok(())
            }
        }
    }
}
