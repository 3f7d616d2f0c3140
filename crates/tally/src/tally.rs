//! Main Tally struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::{self, AnswerContext};
use crate::config::{RoleHint, TallyConfig};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::query::{Intent, Interpretation, QueryInterpreter};
use crate::schema::TableProfile;
use crate::table::{NoDataAvailable, Table, TableCombiner};

/// Answer given when no table holds any rows.
pub const NO_DATA_MESSAGE: &str = "I don't have access to any data right now. \
Please make sure a table with at least one row is loaded, then ask again.";

/// One answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Intent that produced the text; `None` when there was no data.
    pub intent: Option<Intent>,
    /// Columns the question referenced.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    /// Sources that contributed rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    /// Formatted answer.
    pub text: String,
}

impl Answer {
    fn no_data() -> Self {
        Self {
            intent: None,
            columns: Vec::new(),
            sources: Vec::new(),
            text: NO_DATA_MESSAGE.to_string(),
        }
    }
}

/// The question answering engine.
#[derive(Debug, Clone)]
pub struct Tally {
    config: TallyConfig,
    parser: Parser,
    combiner: TableCombiner,
    interpreter: QueryInterpreter,
}

impl Tally {
    /// Create a new Tally instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(TallyConfig::default())
    }

    /// Create a Tally instance with custom configuration.
    pub fn with_config(config: TallyConfig) -> Self {
        let combiner = TableCombiner::new(&config.primary_label, &config.secondary_label);
        let interpreter = QueryInterpreter::new(config.status_values.clone());

        Self {
            config,
            parser: Parser::new(),
            combiner,
            interpreter,
        }
    }

    /// Use a custom parser configuration for file loading.
    pub fn with_parser_config(mut self, parser: ParserConfig) -> Self {
        self.parser = Parser::with_config(parser);
        self
    }

    pub fn config(&self) -> &TallyConfig {
        &self.config
    }

    /// Load and type a delimited file.
    pub fn load_table(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let (data, source) = self.parser.parse_file(path)?;
        let table = Table::from_data_table(&data);
        info!(
            file = %source.file,
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded table"
        );
        Ok((table, source))
    }

    /// Interpret a question without answering it.
    pub fn interpret(&self, table: &Table, query: &str) -> Interpretation {
        self.interpreter.interpret(query, table)
    }

    /// Answer a question over the primary and optional secondary table.
    ///
    /// Never fails: missing data yields [`NO_DATA_MESSAGE`] and every
    /// handler has a fallback for absent column classes.
    pub fn respond(
        &self,
        primary: Option<&Table>,
        secondary: Option<&Table>,
        query: &str,
        role: Option<RoleHint>,
    ) -> Answer {
        let combined = match self.combiner.combine(primary, secondary) {
            Ok(combined) => combined,
            Err(NoDataAvailable) => {
                debug!("no data available for query");
                return Answer::no_data();
            }
        };

        let interpretation = self.interpreter.interpret(query, &combined.table);
        let ctx = AnswerContext {
            table: &combined.table,
            interpretation: &interpretation,
            sources: &combined.sources,
            provenance: &combined.provenance,
            config: &self.config,
            role: role.unwrap_or_default(),
        };
        let text = analysis::answer(&ctx);

        Answer {
            intent: Some(interpretation.intent),
            columns: interpretation.columns,
            sources: combined.sources,
            text,
        }
    }

    /// Profile the combined table.
    pub fn describe(
        &self,
        primary: Option<&Table>,
        secondary: Option<&Table>,
    ) -> std::result::Result<TableProfile, NoDataAvailable> {
        self.combiner
            .combine(primary, secondary)
            .map(|combined| combined.profile())
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}
