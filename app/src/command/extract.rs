use chrono::{Local, NaiveDate, NaiveDateTime};
use datespan_config::Config;
use datespan_core::RecognizedEntity;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    pub config: Config,
    /// Text to scan; stdin is read when `None`
    pub text: Option<String>,
    /// Reference time for relative dates; now when `None`
    pub reference: Option<NaiveDateTime>,
    /// Scan each line separately (in parallel)
    pub lines: bool,
    pub json: bool,
}

/// Strategy for executing the Extract command.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

#[derive(Debug, Serialize)]
struct LineResult<'a> {
    line: usize,
    periods: &'a [RecognizedEntity],
}

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let extractor = input.config.build_extractor()?;
        let settings = extractor.config().settings();
        debug!(
            "Accepting years {}..={} with relative markers {:?}",
            settings.min_year, settings.max_year, settings.relative_markers
        );
        let reference = input
            .reference
            .unwrap_or_else(|| Local::now().naive_local());

        let text = match input.text {
            Some(text) => text,
            None => {
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                buf
            }
        };
        debug!("Read {} byte(s) of input", text.len());

        if input.lines {
            let lines: Vec<&str> = text.lines().collect();
            let results = extractor.extract_batch(&lines, reference);
            info!("Scanned {} line(s)", lines.len());

            if input.json {
                let rows: Vec<LineResult<'_>> = results
                    .iter()
                    .enumerate()
                    .map(|(i, periods)| LineResult {
                        line: i + 1,
                        periods,
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (i, periods) in results.iter().enumerate() {
                    for entity in periods {
                        println!("{}\t{}", i + 1, format_entity(entity));
                    }
                }
            }
            return Ok(());
        }

        let periods = extractor.extract(&text, reference);
        info!("Found {} date period(s)", periods.len());

        if input.json {
            println!("{}", serde_json::to_string_pretty(&periods)?);
        } else {
            for entity in &periods {
                println!("{}", format_entity(entity));
            }
        }

        Ok(())
    }
}

fn format_entity(entity: &RecognizedEntity) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        entity.start,
        entity.end(),
        entity.kind,
        entity.text
    )
}

/// Parse a reference time given as a date or a date-time.
pub fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| format!("invalid reference time '{value}', expected YYYY-MM-DD[THH:MM:SS]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use datespan_core::{EntityKind, Span};

    #[test]
    fn test_parse_reference() {
        let expected = NaiveDate::from_ymd_opt(2026, 10, 18).and_then(|d| d.and_hms_opt(9, 30, 0));
        assert_eq!(parse_reference("2026-10-18T09:30:00").ok(), expected);
        assert_eq!(parse_reference("2026-10-18 09:30:00").ok(), expected);

        let midnight = NaiveDate::from_ymd_opt(2026, 10, 18).and_then(|d| d.and_hms_opt(0, 0, 0));
        assert_eq!(parse_reference(" 2026-10-18 ").ok(), midnight);

        assert!(parse_reference("18/10/2026").is_err());
    }

    #[test]
    fn test_format_entity() {
        let entity = RecognizedEntity::from_span("the 2nd century", Span::new(4, 15), EntityKind::DatePeriod);
        assert_eq!(
            entity.map(|e| format_entity(&e)),
            Some("4\t15\tdaterange\t2nd century".to_string())
        );
    }
}
