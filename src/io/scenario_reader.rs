use crate::debate::{ArgumentStrength, CounterArgumentType};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

const NAME_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref ORIGINAL_LINE_PATTERN: Regex = Regex::new(r"^\s*original\([^)]+\).\s*$").unwrap();
    static ref ORIGINAL_LINE_NAME_PATTERN: Regex =
        Regex::new(&format!(r"^\s*original\(({})\).\s*$", NAME_AND_SPACE_PATTERN)).unwrap();
    static ref COUNTER_LINE_PATTERN: Regex =
        Regex::new(r"^\s*counter\([^,]+,[^,]+,[^)]+\).\s*$").unwrap();
    static ref COUNTER_LINE_FIELDS_PATTERN: Regex = Regex::new(&format!(
        r"^\s*counter\(({}),({}),({})\).\s*$",
        NAME_AND_SPACE_PATTERN, NAME_AND_SPACE_PATTERN, NAME_AND_SPACE_PATTERN,
    ))
    .unwrap();
}

/// A counter-argument declaration read from a debate scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioCounter {
    /// The label of the counter-argument.
    pub label: String,
    /// The declared type of the counter-argument.
    pub counter_type: CounterArgumentType,
    /// The declared strength of the counter-argument.
    pub strength: ArgumentStrength,
}

/// A debate scenario: an original argument and the counter-arguments raised against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebateScenario {
    /// The label of the original argument.
    pub original: String,
    /// The counter-arguments, in declaration order.
    pub counters: Vec<ScenarioCounter>,
}

impl DebateScenario {
    /// Returns the counter labels and types, as expected by the attack graph builder.
    pub fn counter_pairs(&self) -> Vec<(String, CounterArgumentType)> {
        self.counters
            .iter()
            .map(|c| (c.label.clone(), c.counter_type))
            .collect()
    }

    /// Returns the declared strengths of the counters, as expected by the heuristic mode.
    pub fn counter_strengths(&self) -> Vec<ArgumentStrength> {
        self.counters.iter().map(|c| c.strength).collect()
    }
}

/// A warning handler, given the line number of the warning and its message.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A reader for debate scenario files.
///
/// A scenario declares a single original argument followed by any number of
/// counter-arguments, each carrying a type and a strength:
///
/// ```text
/// original(o).
/// counter(c0,direct_refutation,strong).
/// counter(c1,alternative_explanation,weak).
/// ```
///
/// Types and strengths use the snake-case names of
/// [`CounterArgumentType`] and [`ArgumentStrength`].
///
/// # Example
///
/// ```
/// # use riposte::io::ScenarioReader;
/// let scenario = ScenarioReader::default()
///     .read(&mut "original(o).\ncounter(c,direct_refutation,strong).\n".as_bytes())
///     .unwrap();
/// assert_eq!("o", scenario.original);
/// assert_eq!(1, scenario.counters.len());
/// ```
#[derive(Default)]
pub struct ScenarioReader {
    warning_handlers: Vec<WarningHandler>,
}

impl ScenarioReader {
    /// Adds a warning handler, called for each non-fatal oddity found while reading.
    pub fn add_warning_handler(&mut self, handler: WarningHandler) {
        self.warning_handlers.push(handler);
    }

    /// Reads a debate scenario.
    ///
    /// An error is returned on syntax errors, on undefined type or strength
    /// names, when no original argument is declared, or when a
    /// counter-argument is declared before the original one.
    pub fn read(&self, reader: &mut dyn Read) -> Result<DebateScenario> {
        let mut original: Option<String> = None;
        let mut counters = Vec::new();
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = &line.with_context(context)?;
            if l.trim().is_empty() {
                continue;
            }
            if let Some(name) = self.try_read_original_line(l, i).with_context(context)? {
                if original.is_some() {
                    return Err(anyhow!("found a second original argument declaration"))
                        .with_context(context);
                }
                if !counters.is_empty() {
                    return Err(anyhow!(
                        "found the original argument declaration after a counter-argument"
                    ))
                    .with_context(context);
                }
                original = Some(name);
                continue;
            }
            if let Some(counter) = self.try_read_counter_line(l, i).with_context(context)? {
                if original.is_none() {
                    return Err(anyhow!(
                        "found a counter-argument before the original argument declaration"
                    ))
                    .with_context(context);
                }
                counters.push(counter);
                continue;
            }
            return Err(anyhow!(r#"syntax error in line "{}""#, l)).with_context(context);
        }
        match original {
            Some(original) => Ok(DebateScenario { original, counters }),
            None => Err(anyhow!("missing original argument declaration")),
        }
    }

    fn try_read_original_line(&self, l: &str, line_index: usize) -> Result<Option<String>> {
        if !ORIGINAL_LINE_PATTERN.is_match(l) {
            return Ok(None);
        }
        match ORIGINAL_LINE_NAME_PATTERN.captures(l) {
            Some(c) => Ok(Some(self.captured_name(&c, 1, line_index))),
            None => Err(anyhow!("invalid argument name in {}", l.trim())),
        }
    }

    fn try_read_counter_line(&self, l: &str, line_index: usize) -> Result<Option<ScenarioCounter>> {
        if !COUNTER_LINE_PATTERN.is_match(l) {
            return Ok(None);
        }
        let captures = match COUNTER_LINE_FIELDS_PATTERN.captures(l) {
            Some(c) => c,
            None => return Err(anyhow!("invalid counter-argument fields in {}", l.trim())),
        };
        let label = self.captured_name(&captures, 1, line_index);
        let str_type = captures.get(2).unwrap().as_str().trim();
        let counter_type = CounterArgumentType::from_str(str_type)
            .map_err(|_| anyhow!(r#"undefined counter-argument type "{}""#, str_type))?;
        let str_strength = captures.get(3).unwrap().as_str().trim();
        let strength = ArgumentStrength::from_str(str_strength)
            .map_err(|_| anyhow!(r#"undefined argument strength "{}""#, str_strength))?;
        Ok(Some(ScenarioCounter {
            label,
            counter_type,
            strength,
        }))
    }

    fn captured_name(&self, c: &Captures, i: usize, line_index: usize) -> String {
        let str_name = c.get(i).unwrap().as_str();
        let trimmed = str_name.trim();
        if trimmed.len() != str_name.len() {
            for h in &self.warning_handlers {
                (h)(
                    1 + line_index,
                    "argument names beginning or ending by spaces may be ambiguous".to_string(),
                );
            }
        }
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn read_str(s: &str) -> Result<DebateScenario> {
        ScenarioReader::default().read(&mut s.as_bytes())
    }

    #[test]
    fn test_read_ok() {
        let scenario = read_str(
            r#"
            original(o).
            counter(c0,direct_refutation,strong).
            counter(c1,alternative_explanation,weak).
            "#,
        )
        .unwrap();
        assert_eq!("o", scenario.original);
        assert_eq!(
            vec![
                ScenarioCounter {
                    label: "c0".to_string(),
                    counter_type: CounterArgumentType::DirectRefutation,
                    strength: ArgumentStrength::Strong,
                },
                ScenarioCounter {
                    label: "c1".to_string(),
                    counter_type: CounterArgumentType::AlternativeExplanation,
                    strength: ArgumentStrength::Weak,
                },
            ],
            scenario.counters
        );
        assert_eq!(
            vec![
                ("c0".to_string(), CounterArgumentType::DirectRefutation),
                ("c1".to_string(), CounterArgumentType::AlternativeExplanation),
            ],
            scenario.counter_pairs()
        );
        assert_eq!(
            vec![ArgumentStrength::Strong, ArgumentStrength::Weak],
            scenario.counter_strengths()
        );
    }

    #[test]
    fn test_read_original_alone() {
        let scenario = read_str("original(o).\n").unwrap();
        assert_eq!("o", scenario.original);
        assert!(scenario.counters.is_empty());
    }

    #[test]
    fn test_read_empty_input() {
        assert!(read_str("").is_err());
    }

    #[test]
    fn test_read_missing_original() {
        assert!(read_str("counter(c,direct_refutation,strong).\n").is_err());
    }

    #[test]
    fn test_read_counter_before_original() {
        assert!(read_str("counter(c,direct_refutation,strong).\noriginal(o).\n").is_err());
    }

    #[test]
    fn test_read_second_original() {
        assert!(read_str("original(o).\noriginal(p).\n").is_err());
    }

    #[test]
    fn test_read_syntax_error() {
        assert!(read_str("original(o).\nfoo(c).\n").is_err());
    }

    #[test]
    fn test_read_undefined_counter_type() {
        assert!(read_str("original(o).\ncounter(c,ad_hominem,strong).\n").is_err());
    }

    #[test]
    fn test_read_undefined_strength() {
        assert!(read_str("original(o).\ncounter(c,direct_refutation,overwhelming).\n").is_err());
    }

    #[test]
    fn test_warning_on_spaces_around_names() {
        let warnings = Rc::new(RefCell::new(Vec::new()));
        let warnings_for_handler = Rc::clone(&warnings);
        let mut reader = ScenarioReader::default();
        reader.add_warning_handler(Box::new(move |line, msg| {
            warnings_for_handler.borrow_mut().push((line, msg));
        }));
        let scenario = reader.read(&mut "original( o ).\n".as_bytes()).unwrap();
        assert_eq!("o", scenario.original);
        assert_eq!(1, warnings.borrow().len());
        assert_eq!(1, warnings.borrow()[0].0);
    }
}
