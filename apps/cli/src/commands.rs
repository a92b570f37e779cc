use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use moji_validator::prelude::*;
use serde::Serialize;

use crate::cli::{CheckArgs, PoliciesArgs};
use crate::config::{AppConfig, OutputFormat};
use crate::exit_codes;

/// Shown for text that passes its policy.
pub const VALID_MARK: &str = "😄";

#[derive(Debug, Serialize, PartialEq, Eq)]
struct CheckReport<'a> {
    policy: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct PolicyListing {
    name: &'static str,
    rules: Vec<String>,
}

impl<'a> CheckReport<'a> {
    fn new(policy: &'a str, outcome: &ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Valid(_) => Self {
                policy,
                status: "valid",
                code: None,
                message: None,
            },
            ValidationOutcome::Invalid(error) => Self {
                policy,
                status: "invalid",
                code: Some(error.code()),
                message: Some(error.message()),
            },
        }
    }
}

pub fn check(args: CheckArgs, config: &AppConfig, out: &mut impl Write) -> Result<u8> {
    let policy = args.policy.as_deref().unwrap_or(&config.default_policy);
    let text = match args.text {
        Some(text) => text,
        None => read_line(io::stdin().lock())?,
    };

    let outcome = moji_validator::validate(policy, &text)?;
    tracing::info!(policy, valid = outcome.is_valid(), "checked");

    let format = if args.json { OutputFormat::Json } else { config.output };
    match format {
        OutputFormat::Text => match &outcome {
            ValidationOutcome::Valid(_) => writeln!(out, "{VALID_MARK}")?,
            ValidationOutcome::Invalid(error) => writeln!(out, "{error}")?,
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &CheckReport::new(policy, &outcome))?;
            writeln!(out)?;
        }
    }

    Ok(if outcome.is_valid() {
        exit_codes::VALID
    } else {
        exit_codes::INVALID
    })
}

pub fn policies(args: &PoliciesArgs, config: &AppConfig, out: &mut impl Write) -> Result<u8> {
    let registry = PolicyRegistry::global();
    let listings = registry
        .names()
        .map(|name| {
            let policy = registry.get(name)?;
            Ok(PolicyListing {
                name,
                rules: policy.rule_labels().into_iter().map(Into::into).collect(),
            })
        })
        .collect::<Result<Vec<_>, RegistryError>>()?;

    if args.json || config.output == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &listings)?;
        writeln!(out)?;
    } else {
        for listing in &listings {
            writeln!(out, "{}: {}", listing.name, listing.rules.join(", "))?;
        }
    }
    Ok(exit_codes::VALID)
}

/// Reads one line, dropping only its line terminator.
fn read_line(mut input: impl BufRead) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read text from stdin")?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
