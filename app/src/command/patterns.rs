use datespan_config::Config;
use tracing::debug;

/// Strategy for printing the effective pattern table.
///
/// Prints the table after config overrides have been applied, compiling it
/// first so a broken override is reported instead of printed.
#[derive(Debug, Clone, Copy)]
pub struct PatternsStrategy;

impl super::CommandStrategy for PatternsStrategy {
    type Input = Config;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let compiled = input.extractor.patterns.compile()?;
        debug!(
            "Pattern table compiled with {} simple case(s)",
            compiled.simple_cases.len()
        );

        println!("{}", serde_json::to_string_pretty(&input.extractor.patterns)?);
        Ok(())
    }
}
