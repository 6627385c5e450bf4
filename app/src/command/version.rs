/// Strategy for displaying version information.
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy;

impl super::CommandStrategy for VersionStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        println!(
            "datespan {} ({} extractor)",
            env!("CARGO_PKG_VERSION"),
            datespan_core::EXTRACTOR_NAME
        );
        Ok(())
    }
}
