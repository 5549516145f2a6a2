//! Batch command handler

use super::read_document;
use crate::cli::BatchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{CallReport, OutputWriter};
use argproto_core::{resolve_batch, Call, PrototypeRegistry};

/// Handle the batch command
///
/// Flags override the `[batch]` section of the configuration.
pub fn handle_batch(
    args: BatchArgs,
    config: &Config,
    registry: &PrototypeRegistry,
    output: &mut OutputWriter,
) -> Result<()> {
    let calls: Vec<Call> = read_document(&args.file)?;

    let mut batch_config = config.batch.clone();
    if args.fail_fast {
        batch_config = batch_config.with_fail_fast();
    }
    if let Some(max_errors) = args.max_errors {
        batch_config = batch_config.with_max_errors(max_errors);
    }

    output.info(&format!(
        "Resolving {} call(s) from {}",
        calls.len(),
        args.file.display()
    ))?;

    match resolve_batch(registry, &calls, &batch_config) {
        Ok(resolved) => {
            let reports: Vec<CallReport> = calls
                .iter()
                .zip(&resolved)
                .map(|(call, resolved)| CallReport::new(&call.name, resolved))
                .collect();

            output.success(&format!("✓ All {} call(s) accepted", reports.len()))?;
            output.data(&reports)
        }
        Err(errors) => {
            output.validation_errors(&errors)?;
            Err(errors.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::demo;
    use crate::error::Error;
    use crate::output::testing::writer;
    use serde_json::Value;
    use std::path::Path;
    use tempfile::TempDir;

    const FAILING_CALLS: &str =
        r#"[{"name": "nope"}, {"name": "foo", "args": [1]}, {"name": "barfoo"}]"#;

    fn write_calls(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("calls.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn batch(file: &Path, fail_fast: bool, max_errors: Option<usize>) -> BatchArgs {
        BatchArgs {
            file: file.to_path_buf(),
            fail_fast,
            max_errors,
        }
    }

    fn failures(args: BatchArgs, config: &Config) -> usize {
        let (mut out, _) = writer(OutputFormat::Json);
        match handle_batch(args, config, &demo::registry(), &mut out) {
            Err(Error::Batch(errors)) => errors.len(),
            other => panic!("expected a batch rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_reports_follow_call_order() {
        let dir = TempDir::new().unwrap();
        let path = write_calls(
            &dir,
            r#"[
                {"name": "bar", "args": ["x"]},
                {"name": "baz", "kwargs": {"kwarg1": "y"}},
                {"name": "foo"}
            ]"#,
        );

        let (mut out, buffer) = writer(OutputFormat::Json);
        handle_batch(batch(&path, false, None), &Config::default(), &demo::registry(), &mut out)
            .unwrap();

        let reports: Value = serde_json::from_str(&buffer.contents()).unwrap();
        let functions: Vec<&str> = reports
            .as_array()
            .unwrap()
            .iter()
            .map(|report| report["function"].as_str().unwrap())
            .collect();
        assert_eq!(
            functions,
            vec![
                "bar_single_arg_no_kwargs",
                "baz_no_args_required_kwarg1",
                "foo_no_args_no_kwargs"
            ]
        );
        assert_eq!(reports[1]["name"], "baz");
        assert_eq!(reports[1]["kwargs"]["kwarg1"], "y");
    }

    #[test]
    fn test_collects_every_failure_by_default() {
        let dir = TempDir::new().unwrap();
        let path = write_calls(&dir, FAILING_CALLS);
        assert_eq!(failures(batch(&path, false, None), &Config::default()), 3);
    }

    #[test]
    fn test_flags_override_config() {
        let dir = TempDir::new().unwrap();
        let path = write_calls(&dir, FAILING_CALLS);

        let config = Config::default();
        assert_eq!(failures(batch(&path, true, None), &config), 1);
        assert_eq!(failures(batch(&path, false, Some(2)), &config), 2);

        let mut config = Config::default();
        config.batch.max_errors = 1;
        assert_eq!(failures(batch(&path, false, None), &config), 1);
        assert_eq!(failures(batch(&path, false, Some(0)), &config), 3);
    }

    #[test]
    fn test_failures_are_written_before_returning() {
        let dir = TempDir::new().unwrap();
        let path = write_calls(&dir, FAILING_CALLS);

        let (mut out, buffer) = writer(OutputFormat::Human);
        let args = batch(&path, false, None);
        let err = handle_batch(args, &Config::default(), &demo::registry(), &mut out).unwrap_err();

        assert_eq!(err.exit_code(), 2);
        let text = buffer.contents();
        assert!(text.contains("3 call(s) rejected"));
        assert!(text.contains("  Call #0 to 'nope' failed:"));
        assert!(text.contains("  Unknown function 'nope'"));
    }

    #[test]
    fn test_missing_calls_file() {
        let (mut out, _) = writer(OutputFormat::Json);
        let args = batch(Path::new("/nonexistent/calls.json"), false, None);
        let err = handle_batch(args, &Config::default(), &demo::registry(), &mut out).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
