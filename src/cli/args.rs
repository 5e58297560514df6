//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::CommandFamily;

#[derive(Parser)]
#[command(name = "sansuf")]
#[command(about = "SANS reduction user file parser - inspect legacy instrument configuration files")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List parsed settings
    #[command(visible_alias = "ls")]
    List {
        /// User file to parse
        file: PathBuf,
        /// Only show settings of one command family
        #[arg(short = 'f', long)]
        family: Option<FamilyArg>,
        /// Emit the settings as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check a user file and report malformed lines
    Check {
        /// User file to check
        file: PathBuf,
    },

    /// Show every occurrence of one setting key
    Show {
        /// User file to parse
        file: PathBuf,
        /// Setting key name, e.g. limits_q or mask_files
        key: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FamilyArg {
    Back,
    Det,
    #[value(alias = "l")]
    Limits,
    Mask,
    Sample,
    Set,
    Trans,
    Tubecalib,
    #[value(alias = "qresol")]
    Qresolution,
    Fit,
    Gravity,
    Mon,
    Print,
}

impl From<FamilyArg> for CommandFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Back => CommandFamily::Back,
            FamilyArg::Det => CommandFamily::Det,
            FamilyArg::Limits => CommandFamily::Limits,
            FamilyArg::Mask => CommandFamily::Mask,
            FamilyArg::Sample => CommandFamily::Sample,
            FamilyArg::Set => CommandFamily::Set,
            FamilyArg::Trans => CommandFamily::Trans,
            FamilyArg::Tubecalib => CommandFamily::TubeCalib,
            FamilyArg::Qresolution => CommandFamily::QResolution,
            FamilyArg::Fit => CommandFamily::Fit,
            FamilyArg::Gravity => CommandFamily::Gravity,
            FamilyArg::Mon => CommandFamily::Mon,
            FamilyArg::Print => CommandFamily::Print,
        }
    }
}
