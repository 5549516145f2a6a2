//! Check command handler

use super::parse_json_flag;
use crate::cli::CheckArgs;
use crate::error::{Error, Result};
use crate::output::{CallReport, OutputWriter};
use argproto_core::PrototypeRegistry;
use serde_json::{Map, Value};
use tracing::info;

/// Handle the check command
///
/// A rejected call prints its diagnostic and fails with a validation error.
/// Unknown names fail the same way `signatures` does.
pub fn handle_check(
    args: CheckArgs,
    registry: &PrototypeRegistry,
    output: &mut OutputWriter,
) -> Result<()> {
    if !registry.contains(&args.name) {
        return Err(Error::FunctionNotFound { name: args.name });
    }

    let call_args: Vec<Value> = parse_json_flag("--args", &args.args)?;
    let call_kwargs: Map<String, Value> = parse_json_flag("--kwargs", &args.kwargs)?;

    output.info(&format!("Resolving call to '{}'", args.name))?;

    match registry.resolve(&args.name, &call_args, &call_kwargs) {
        Ok(resolved) => {
            info!(function = %args.name, target = resolved.function.name(), "Call resolved");
            let mut report = CallReport::new(&args.name, &resolved);
            if args.invoke {
                report = report.with_result(resolved.invoke());
            }

            output.success("✓ Call accepted")?;
            output.call_report(&report)
        }
        Err(error) => {
            output.error("✗ Call rejected")?;
            output.validation_error(&error)?;
            Err(error.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::demo;
    use crate::output::testing::writer;
    use serde_json::json;

    fn check(name: &str, args: &str, kwargs: &str, invoke: bool) -> CheckArgs {
        CheckArgs {
            name: name.to_string(),
            args: args.to_string(),
            kwargs: kwargs.to_string(),
            invoke,
        }
    }

    #[test]
    fn test_accepted_call_report() {
        let (mut out, buffer) = writer(OutputFormat::Human);
        handle_check(check("bar", r#"["x"]"#, "{}", false), &demo::registry(), &mut out).unwrap();

        let text = buffer.contents();
        assert!(text.contains("✓ Call accepted"));
        assert!(text.contains("Function: bar_single_arg_no_kwargs"));
        assert!(text.contains("Args:     [\"x\"]"));
        assert!(!text.contains("Result:"));
    }

    #[test]
    fn test_invoke_reports_result() {
        let (mut out, buffer) = writer(OutputFormat::Json);
        handle_check(check("foobar", "[]", "{}", true), &demo::registry(), &mut out).unwrap();

        let report: Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(report["function"], "foobar_no_args_optional_kwarg1");
        assert_eq!(report["kwargs"], json!({"kwarg1": "foo"}));
        assert_eq!(report["result"], "foo");
    }

    #[test]
    fn test_rejected_call_prints_diagnostic() {
        let (mut out, buffer) = writer(OutputFormat::Human);
        let err = handle_check(check("barfoo", "[]", "{}", false), &demo::registry(), &mut out)
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        let text = buffer.contents();
        assert!(text.starts_with("INFO: Resolving call to 'barfoo'\nERROR: ✗ Call rejected\n"));
        assert!(text.contains("  No prototype of 'barfoo' matched the call (1 candidate tried)"));
    }

    #[test]
    fn test_unknown_function() {
        let (mut out, buffer) = writer(OutputFormat::Human);
        let err =
            handle_check(check("nope", "[]", "{}", false), &demo::registry(), &mut out).unwrap_err();

        assert!(matches!(err, Error::FunctionNotFound { ref name } if name == "nope"));
        assert_eq!(err.exit_code(), 7);
        assert_eq!(buffer.contents(), "");
    }

    #[test]
    fn test_malformed_args_flag() {
        let (mut out, _) = writer(OutputFormat::Human);
        let err = handle_check(check("bar", "[1,", "{}", false), &demo::registry(), &mut out)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgs(_)));
    }
}
