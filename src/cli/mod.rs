mod commands;

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches, Parser};
use config::ConfigError;
use colored::Colorize;
use strum::IntoEnumIterator;

use crate::cli::commands::{cmd_extract, cmd_info};
use crate::config::Settings;
use crate::services::ExtractArgs;
use crate::types::ObjectType;

pub use commands::ExitOnErr;

#[derive(Parser, Debug, Default)]
#[command(
    name = "ddlgen",
    version,
    about = "A program to get Oracle database DDL",
    long_about = format!(
r#"{} - {}
Writes each object's DDL to <SCHEMA>_<TYPE>_<NAME>.sql in DIRNAME.
Each object flag takes a comma separated list of names, or ALL."#,
"DDLGEN".green().bold(),
"Extract Oracle object DDL into per-object files.",
))]
pub struct Cli {
    /// table name | TABLE1,..,TABLEn
    #[arg(long)]
    pub tables: Option<String>,

    /// dblink name | DBL1,...,DBLn
    #[arg(long)]
    pub dblinks: Option<String>,

    /// package name | PKG1,...,PKGn
    #[arg(long)]
    pub pkgs: Option<String>,

    /// procedure name | PROC1,...,PROCn
    #[arg(long)]
    pub procs: Option<String>,

    /// func name | FUNC1,...,FUNCn
    #[arg(long)]
    pub funcs: Option<String>,

    /// sequence name | SEQ1,...,SEQn
    #[arg(long)]
    pub seqs: Option<String>,

    /// trigger name | TRG1,...,TRGn
    #[arg(long)]
    pub trigs: Option<String>,

    /// view name | VW1,...,VWn
    #[arg(long)]
    pub views: Option<String>,

    /// synonym name | SYN1,...,SYNn
    #[arg(long)]
    pub syns: Option<String>,

    /// index name | IX1,...,IXn
    #[arg(long)]
    pub idxs: Option<String>,

    /// Show a list of supported objects and exit
    #[arg(long)]
    pub info: bool,

    /// username/password@tnsalias
    #[arg(required_unless_present = "info")]
    pub dburl: Option<String>,

    /// Location to deposit DDL files. Filename will be generated from the schema,
    /// object type and object name and be placed in DIRNAME.
    #[arg(value_name = "DIRNAME", required_unless_present = "info")]
    pub output_path: Option<String>,

    /// Object flags in the order they appeared on the command line.
    #[arg(skip)]
    pub flag_order: Vec<ObjectType>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::try_parse_from_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let mut cli = Self::from_arg_matches(&matches)?;

        let mut seen: Vec<(usize, ObjectType)> = ObjectType::iter()
            .filter_map(|t| matches.index_of(t.cli_flag()).map(|i| (i, t)))
            .collect();
        seen.sort_by_key(|(i, _)| *i);
        cli.flag_order = seen.into_iter().map(|(_, t)| t).collect();

        Ok(cli)
    }

    pub fn flag_value(&self, object_type: ObjectType) -> Option<&str> {
        match object_type {
            ObjectType::Table => self.tables.as_deref(),
            ObjectType::DbLink => self.dblinks.as_deref(),
            ObjectType::Package => self.pkgs.as_deref(),
            ObjectType::Procedure => self.procs.as_deref(),
            ObjectType::Function => self.funcs.as_deref(),
            ObjectType::Sequence => self.seqs.as_deref(),
            ObjectType::Trigger => self.trigs.as_deref(),
            ObjectType::View => self.views.as_deref(),
            ObjectType::Synonym => self.syns.as_deref(),
            ObjectType::Index => self.idxs.as_deref(),
        }
    }

    /// Supplied object flags, in command line order. Flags not recorded in
    /// `flag_order` follow in declaration order.
    pub fn object_flags(&self) -> Vec<(ObjectType, String)> {
        let mut flags: Vec<(ObjectType, String)> = ObjectType::iter()
            .filter_map(|t| self.flag_value(t).map(|v| (t, v.to_string())))
            .collect();
        flags.sort_by_key(|(t, _)| {
            self.flag_order
                .iter()
                .position(|o| o == t)
                .unwrap_or(usize::MAX)
        });
        flags
    }

    pub fn extract_args(&self) -> ExtractArgs {
        ExtractArgs {
            object_flags: self.object_flags(),
            dburl: self.dburl.clone().unwrap_or_default(),
            output_path: self.output_path.clone().unwrap_or_default(),
        }
    }

    /// `--info` runs on defaults so a broken environment cannot stop it.
    pub fn load_settings(&self) -> Result<Settings, ConfigError> {
        if self.info {
            return Ok(Settings::default());
        }
        Settings::new()
    }

    pub fn execute(&self) {
        if self.info {
            cmd_info::execute();
            return;
        }
        cmd_extract::execute(&self.extract_args());
    }
}
