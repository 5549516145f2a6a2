//! Signatures command handler

use crate::cli::{OutputFormat, SignaturesArgs};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use argproto_core::PrototypeRegistry;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SignatureList<'a> {
    name: &'a str,
    signatures: Vec<String>,
}

/// Handle the signatures command
pub fn handle_signatures(
    args: SignaturesArgs,
    registry: &PrototypeRegistry,
    output: &mut OutputWriter,
) -> Result<()> {
    let names: Vec<&str> = match &args.name {
        Some(name) if registry.contains(name) => vec![name.as_str()],
        Some(name) => return Err(Error::FunctionNotFound { name: name.clone() }),
        None => registry.names().collect(),
    };

    let lists: Vec<SignatureList<'_>> = names
        .into_iter()
        .map(|name| SignatureList {
            name,
            signatures: registry.signatures_for(name).unwrap_or_default(),
        })
        .collect();

    if output.format() != OutputFormat::Human {
        return output.data(&lists);
    }

    for list in &lists {
        output.section(list.name)?;
        for signature in &list.signatures {
            output.writeln(signature)?;
        }
    }
    Ok(())
}
