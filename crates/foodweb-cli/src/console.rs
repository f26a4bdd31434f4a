//! Interactive session: read the web from a token stream, report, apply an
//! extinction, report again.

use crate::render::{write_json_report, write_text_report, ReportEnvelope};
use foodweb_core::{CliConfig, Error, OutputFormat, Result};
use foodweb_graph::{FoodWeb, WebReport};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const RULE: &str = "--------------------------------";

/// Whitespace-separated tokens pulled lazily from a line reader
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token, failing at end of input
    pub fn expect_token(&mut self, what: &str) -> Result<String> {
        self.next_token()?
            .ok_or_else(|| Error::Parse(format!("unexpected end of input, expected {}", what)))
    }

    /// Next token as a non-negative integer
    pub fn expect_number(&mut self, what: &str) -> Result<usize> {
        let token = self.expect_token(what)?;
        parse_number(&token, what)
    }
}

fn parse_number(token: &str, what: &str) -> Result<usize> {
    let value: i64 = token
        .parse()
        .map_err(|_| Error::Parse(format!("{} must be an integer, got {:?}", what, token)))?;
    usize::try_from(value)
        .map_err(|_| Error::Parse(format!("{} must not be negative, got {}", what, value)))
}

/// One run of the console program over `input`, writing to `output`
pub struct Session<'a, R, W> {
    input: TokenReader<R>,
    output: W,
    config: &'a CliConfig,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, config: &'a CliConfig) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            config,
        }
    }

    fn text(&self) -> bool {
        self.config.output == OutputFormat::Text
    }

    /// Prompts only make sense between text reports
    fn prompt(&mut self, message: &str) -> Result<()> {
        if self.config.prompts && self.text() {
            writeln!(self.output, "{}", message)?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn line(&mut self, message: &str) -> Result<()> {
        if self.text() {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    /// Read organism names and predation pairs into a new web
    pub fn read_web(&mut self) -> Result<FoodWeb> {
        self.prompt("Welcome to the Food Web Application")?;
        self.prompt(RULE)?;
        self.prompt("Enter number of organisms:")?;
        let num_organisms = self.input.expect_number("number of organisms")?;

        self.prompt(&format!("Enter names for {} organisms:", num_organisms))?;
        // The count is untrusted input; grow as names actually arrive
        let mut names = Vec::new();
        for _ in 0..num_organisms {
            names.push(self.input.expect_token("organism name")?);
        }
        let mut web = FoodWeb::new(names);

        self.prompt("Enter number of predator/prey relations:")?;
        let num_relations = self.input.expect_number("number of relations")?;

        self.prompt(&format!(
            "Enter the pair of indices for the {} predator/prey relations",
            num_relations
        ))?;
        self.prompt("the format is [predator index] [prey index]:")?;
        for _ in 0..num_relations {
            let predator = self.input.expect_number("predator index")?;
            let prey = self.input.expect_number("prey index")?;
            web.add_predation(predator, prey)?;
        }

        info!(
            "Read food web: {} organisms, {} relations",
            web.len(),
            num_relations
        );
        Ok(web)
    }

    fn report(&mut self, web: &FoodWeb, title: &str, extinct: Option<&str>) -> Result<()> {
        let report = WebReport::analyze(web);
        match self.config.output {
            OutputFormat::Text => {
                let prefix = if extinct.is_some() { "UPDATED " } else { "" };
                write_text_report(&mut self.output, &report, prefix)
            }
            OutputFormat::Json => write_json_report(
                &mut self.output,
                &ReportEnvelope {
                    title,
                    extinct,
                    report: &report,
                },
            ),
        }
    }

    /// Run the whole program: build, report, extinction, updated report
    pub fn run(mut self) -> Result<()> {
        let mut web = self.read_web()?;
        self.line(RULE)?;
        self.report(&web, "initial", None)?;

        self.line(RULE)?;
        self.prompt("Enter extinct species index:")?;
        let Some(token) = self.input.next_token()? else {
            debug!("No extinction index given, stopping after first report");
            return Ok(());
        };
        let index = parse_number(&token, "extinct species index")?;

        let extinct = web.remove_organism(index)?;
        info!("Species extinction: {}", extinct.name);
        self.line(&format!("Species Extinction: {}", extinct.name))?;
        self.line(RULE)?;
        self.line("")?;

        self.report(&web, "updated", Some(extinct.name.as_str()))?;
        self.line(RULE)?;
        self.output.flush()?;
        Ok(())
    }
}

/// Convenience wrapper over [`Session`]
pub fn run<R: BufRead, W: Write>(input: R, output: W, config: &CliConfig) -> Result<()> {
    Session::new(input, output, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "3\nGrass Rabbit Fox\n2\n1 0\n2 1\n0\n";

    fn run_with(input: &str, config: &CliConfig) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run(input.as_bytes(), &mut out, config);
        (result, String::from_utf8(out).unwrap())
    }

    fn quiet() -> CliConfig {
        CliConfig {
            prompts: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_token_reader_spans_lines() {
        let mut reader = TokenReader::new("  3 Grass\n\n Rabbit\t-2\n".as_bytes());
        assert_eq!(reader.expect_number("count").unwrap(), 3);
        assert_eq!(reader.expect_token("name").unwrap(), "Grass");
        assert_eq!(reader.expect_token("name").unwrap(), "Rabbit");
        assert!(matches!(reader.expect_number("index"), Err(Error::Parse(_))));
        assert!(reader.next_token().unwrap().is_none());
        assert!(matches!(reader.expect_token("name"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_non_numeric_count() {
        let (result, _) = run_with("three\n", &quiet());
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_huge_count_without_names() {
        let (result, _) = run_with("9223372036854775807\nGrass\n", &quiet());
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_full_session_text() {
        let (result, text) = run_with(SCENARIO, &CliConfig::default());
        result.unwrap();

        assert!(text.starts_with("Welcome to the Food Web Application\n"));
        assert!(text.contains("Enter names for 3 organisms:\n"));
        assert!(text.contains("Food Web Heights:\n  Grass: 0\n  Rabbit: 1\n  Fox: 2\n"));
        assert!(text.contains("Species Extinction: Grass\n"));
        assert!(text.contains("UPDATED Food Web Predators & Prey:\n  Rabbit\n  Fox eats Rabbit\n"));
        assert!(text.contains("UPDATED Producers:\n  Rabbit\n"));
        assert!(text.contains("  Herbivores:\n    Fox\n  Omnivores:\n  Carnivores:\n"));
        assert!(text.ends_with(&format!("{}\n", RULE)));
    }

    #[test]
    fn test_quiet_session_has_no_prompts() {
        let (result, text) = run_with(SCENARIO, &quiet());
        result.unwrap();

        assert!(!text.contains("Enter"));
        assert!(text.starts_with(&format!("{}\nFood Web Predators & Prey:\n", RULE)));
    }

    #[test]
    fn test_missing_extinction_stops_after_first_report() {
        let (result, text) = run_with("2\nGrass Cow\n1\n1 0\n", &quiet());
        result.unwrap();

        assert!(text.contains("Vore Types:"));
        assert!(!text.contains("UPDATED"));
    }

    #[test]
    fn test_invalid_predation_pair() {
        let (result, _) = run_with("2\nGrass Cow\n1\n1 2\n0\n", &quiet());
        assert!(matches!(result, Err(Error::InvalidIndex { index: 2, len: 2 })));
    }

    #[test]
    fn test_invalid_extinction_index() {
        let (result, text) = run_with("2\nGrass Cow\n1\n1 0\n5\n", &quiet());
        assert!(matches!(result, Err(Error::InvalidIndex { index: 5, len: 2 })));
        assert!(!text.contains("Species Extinction"));
    }

    #[test]
    fn test_json_session() {
        let config = CliConfig {
            output: OutputFormat::Json,
            ..Default::default()
        };
        let (result, text) = run_with(SCENARIO, &config);
        result.unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let initial: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(initial["title"], "initial");
        assert!(initial.get("extinct").is_none());
        assert_eq!(initial["report"]["apex_predators"][0], "Fox");

        let updated: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(updated["extinct"], "Grass");
        assert_eq!(updated["report"]["vore_types"]["herbivores"][0], "Fox");
    }

    #[test]
    fn test_empty_web_session() {
        let (result, text) = run_with("0\n0\n", &quiet());
        result.unwrap();
        assert!(text.contains("Apex Predators:\n\n"));
    }
}
