// src/tools/cli_tool.rs
//! A tool backed by one `stellar` subcommand.
//!
//! Every CLI tool is a declaration: its grammar, its parameters and how its
//! output is rendered. [`CliTool::run`] pushes any of them through the same
//! validate, translate, execute, render pipeline.

use serde_json::Value;
use tracing::debug;

use crate::cli::args::{self, CommandLine, FlagTable, Params, Trailing, Word};
use crate::cli::error::ArgError;
use crate::cli::executor::CliExecutor;
use crate::tools::error::ToolError;
use crate::tools::params::{input_schema, Param};
use crate::tools::render::Render;

pub type Check = fn(&Params) -> Result<(), ArgError>;

#[derive(Debug, Clone)]
pub struct CliTool {
    name: &'static str,
    description: &'static str,
    words: &'static [Word<'static>],
    params: Vec<Param>,
    accepted: Vec<&'static str>,
    required: &'static [&'static str],
    one_of: Vec<&'static [&'static str]>,
    flags: &'static [(&'static str, &'static str)],
    trailing: Trailing<'static>,
    render: Render,
    check: Option<Check>,
    action: Option<&'static str>,
}

impl CliTool {
    pub fn new(
        name: &'static str,
        description: &'static str,
        words: &'static [Word<'static>],
    ) -> Self {
        Self {
            name,
            description,
            words,
            params: Vec::new(),
            accepted: Vec::new(),
            required: &[],
            one_of: Vec::new(),
            flags: &[],
            trailing: Trailing::None,
            render: Render::Text,
            check: None,
            action: None,
        }
    }

    /// Declares parameters. A name declared twice keeps its first
    /// description.
    pub fn params(mut self, params: &[Param]) -> Self {
        for param in params {
            if !self.accepted.contains(&param.name) {
                self.accepted.push(param.name);
                self.params.push(*param);
            }
        }
        self
    }

    pub fn required(mut self, keys: &'static [&'static str]) -> Self {
        self.required = keys;
        self
    }

    /// At least one of `keys` must be present.
    pub fn one_of(mut self, keys: &'static [&'static str]) -> Self {
        self.one_of.push(keys);
        self
    }

    pub fn flags(mut self, overrides: &'static [(&'static str, &'static str)]) -> Self {
        self.flags = overrides;
        self
    }

    pub fn trailing(mut self, trailing: Trailing<'static>) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn render(mut self, render: Render) -> Self {
        self.render = render;
        self
    }

    pub fn check(mut self, check: Check) -> Self {
        self.check = Some(check);
        self
    }

    /// Verb phrase used in failure text, e.g. `deploying contract` gives
    /// `Error deploying contract: <reason>`.
    pub fn action(mut self, action: &'static str) -> Self {
        self.action = Some(action);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn input_schema(&self) -> Value {
        input_schema(&self.params, self.required)
    }

    pub fn command_line(&self) -> CommandLine<'_> {
        CommandLine {
            words: self.words,
            flags: FlagTable::new(self.flags),
            trailing: self.trailing,
            accepted: Some(self.accepted.as_slice()),
        }
    }

    pub fn validate(&self, params: &Params) -> Result<(), ArgError> {
        args::require(params, self.required)?;
        for group in &self.one_of {
            args::require_one_of(params, group)?;
        }
        self.command_line().check_choices(params)?;
        if let Some(check) = self.check {
            check(params)?;
        }
        Ok(())
    }

    /// Validated argument vector for a raw `arguments` object.
    pub fn build(&self, arguments: &Value) -> Result<(Params, Vec<String>), ArgError> {
        let params = Params::from_json(arguments)?;
        self.validate(&params)?;
        let argv = self.command_line().translate(&params);
        Ok((params, argv))
    }

    pub async fn run(&self, executor: &CliExecutor, arguments: &Value) -> Result<String, ToolError> {
        let (params, argv) = self.build(arguments)?;
        debug!("{} -> {:?}", self.name, argv);
        let output = executor.execute(&argv).await?;
        Ok(self.render.render(&params, &output))
    }

    pub fn failure_text(&self, err: &ToolError) -> String {
        match self.action {
            Some(action) => format!("Error {}: {}", action, err),
            None => format!("Error: {}", err),
        }
    }
}
