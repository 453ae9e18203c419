//! Argument-discussion bot and argument analyzer (`arg`, `analyze`).
//!
//! The bot picks a response style at random and then one canned template
//! for that style. The random source comes from the [`Session`], so a
//! seeded session replays the same conversation.

use std::collections::HashMap;

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::interpreter::{Command, CommandOutput, CommandRegistry, Session};
use super::style::Line;
use crate::error::{ArgosError, Result};

/// Register `arg` and `analyze` into a registry.
pub fn register_argument_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(ArgCmd {
        table: ResponseTable::standard(),
    }));
    reg.register(Box::new(AnalyzeCmd));
}

/// Tone of a bot reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Neutral,
    Supportive,
    Critical,
    Socratic,
}

impl Style {
    pub const ALL: [Style; 4] = [
        Style::Neutral,
        Style::Supportive,
        Style::Critical,
        Style::Socratic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::Neutral => "neutral",
            Style::Supportive => "supportive",
            Style::Critical => "critical",
            Style::Socratic => "socratic",
        }
    }
}

/// Placeholder replaced by the discussion topic.
const TOPIC: &str = "{topic}";

/// A bot reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub style: Style,
    pub text: String,
}

/// Canned reply templates keyed by style.
#[derive(Debug, Clone, Default)]
pub struct ResponseTable {
    templates: HashMap<Style, Vec<&'static str>>,
}

impl ResponseTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds templates for a style. `{topic}` in a template is replaced by
    /// the topic text.
    pub fn with_templates(mut self, style: Style, templates: &[&'static str]) -> Self {
        self.templates
            .entry(style)
            .or_default()
            .extend_from_slice(templates);
        self
    }

    /// The built-in table: three templates for each of the four styles.
    pub fn standard() -> Self {
        Self::new()
            .with_templates(
                Style::Neutral,
                &[
                    "The topic \"{topic}\" presents several valid perspectives worth considering.",
                    "There are reasonable arguments on multiple sides of \"{topic}\".",
                    "\"{topic}\" is a complex issue with no simple answers.",
                ],
            )
            .with_templates(
                Style::Supportive,
                &[
                    "I agree with your focus on \"{topic}\" - it's an important issue.",
                    "You're absolutely right to bring up \"{topic}\" - more people should discuss this.",
                    "\"{topic}\" is indeed a critical matter that deserves attention.",
                ],
            )
            .with_templates(
                Style::Critical,
                &[
                    "Your emphasis on \"{topic}\" might overlook some important factors.",
                    "While \"{topic}\" is relevant, it may not be the most pressing concern.",
                    "There are strong counterarguments to common views about \"{topic}\".",
                ],
            )
            .with_templates(
                Style::Socratic,
                &[
                    "What makes \"{topic}\" particularly important in your view?",
                    "How might someone with a different perspective view \"{topic}\"?",
                    "What evidence would change your mind about \"{topic}\"?",
                ],
            )
    }

    /// Templates registered for a style.
    pub fn templates(&self, style: Style) -> &[&'static str] {
        self.templates.get(&style).map_or(&[], Vec::as_slice)
    }

    /// Picks a style uniformly, then a template of that style.
    pub fn respond<R: Rng + ?Sized>(&self, topic: &str, rng: &mut R) -> Result<Response> {
        let style = *Style::ALL
            .choose(rng)
            .ok_or_else(|| ArgosError::NoResponses("any".to_string()))?;
        let template = self
            .templates(style)
            .choose(rng)
            .ok_or_else(|| ArgosError::NoResponses(style.name().to_string()))?;
        Ok(Response {
            style,
            text: template.replace(TOPIC, topic),
        })
    }
}

// ---------------------------------------------------------------------------
// arg
// ---------------------------------------------------------------------------

struct ArgCmd {
    table: ResponseTable,
}

impl Command for ArgCmd {
    fn name(&self) -> &str {
        "arg"
    }
    fn description(&self) -> &str {
        "Start an argument discussion"
    }
    fn usage(&self) -> &str {
        "arg <topic>"
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        let topic = args.join(" ");
        if topic.is_empty() {
            return Err(ArgosError::Usage(self.usage().to_string()));
        }

        let response = self.table.respond(&topic, session.rng())?;
        Ok(CommandOutput::Text(vec![
            Line::note(format!("Starting argument discussion about: {topic}")),
            Line::info(format!("Bot response style: {}", response.style.name())),
            Line::note(response.text),
        ]))
    }
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

/// Surface features of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentAnalysis {
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Contains a question mark.
    pub has_question: bool,
    /// Only uppercase letters, whitespace and punctuation, and more than
    /// three words.
    pub is_emphatic: bool,
    /// More than fifteen words.
    pub is_complex: bool,
}

impl ArgumentAnalysis {
    pub fn of(text: &str) -> Self {
        let word_count = text.split_whitespace().count();
        let shouted = text
            .chars()
            .all(|c| c.is_uppercase() || c.is_whitespace() || c.is_ascii_punctuation());
        Self {
            word_count,
            has_question: text.contains('?'),
            is_emphatic: shouted && word_count > 3,
            is_complex: word_count > 15,
        }
    }

    /// Fewer than five words.
    pub fn is_brief(&self) -> bool {
        self.word_count < 5
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

struct AnalyzeCmd;
impl Command for AnalyzeCmd {
    fn name(&self) -> &str {
        "analyze"
    }
    fn description(&self) -> &str {
        "Analyze an argument"
    }
    fn usage(&self) -> &str {
        "analyze <argument>"
    }
    fn execute(&self, args: &[&str], _session: &mut Session) -> Result<CommandOutput> {
        let argument = args.join(" ");
        if argument.is_empty() {
            return Err(ArgosError::Usage(self.usage().to_string()));
        }

        let a = ArgumentAnalysis::of(&argument);
        let mut lines = vec![
            Line::info(format!("Analyzing argument: \"{argument}\"")),
            Line::plain(format!("- Word count: {}", a.word_count)),
            Line::plain(format!("- Is question: {}", yes_no(a.has_question))),
            Line::plain(format!("- Emphatic tone: {}", yes_no(a.is_emphatic))),
            Line::plain(format!("- Complex argument: {}", yes_no(a.is_complex))),
        ];
        if a.is_brief() {
            lines.push(Line::note(
                "Note: Argument seems quite brief. Consider expanding your points.",
            ));
        }
        if a.is_emphatic {
            lines.push(Line::note(
                "Note: ALL CAPS can be perceived as shouting. Consider more measured language.",
            ));
        }
        Ok(CommandOutput::Text(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn setup(seed: u64) -> (CommandRegistry, Session) {
        let mut reg = CommandRegistry::new();
        register_argument_commands(&mut reg);
        (reg, Session::new(Box::new(SmallRng::seed_from_u64(seed)), 10))
    }

    fn texts(output: CommandOutput) -> Vec<String> {
        match output {
            CommandOutput::Text(lines) => lines.into_iter().map(|l| l.text).collect(),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn standard_table_shape() {
        let table = ResponseTable::standard();
        for style in Style::ALL {
            let templates = table.templates(style);
            assert_eq!(templates.len(), 3);
            assert!(templates.iter().all(|t| t.contains(TOPIC)));
        }
    }

    #[test]
    fn respond_uses_topic_and_matching_style() {
        let table = ResponseTable::standard();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let r = table.respond("taxes", &mut rng).unwrap();
            assert!(r.text.contains("\"taxes\""));
            let expected: Vec<String> = table
                .templates(r.style)
                .iter()
                .map(|t| t.replace(TOPIC, "taxes"))
                .collect();
            assert!(expected.contains(&r.text));
        }
    }

    #[test]
    fn respond_is_deterministic_for_a_seed() {
        let table = ResponseTable::standard();
        let a = table
            .respond("x", &mut SmallRng::seed_from_u64(9))
            .unwrap();
        let b = table
            .respond("x", &mut SmallRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn respond_with_missing_style_errors() {
        // Only one style has templates; some seed will hit an empty one
        let table = ResponseTable::new().with_templates(Style::Neutral, &["n {topic}"]);
        let mut rng = SmallRng::seed_from_u64(3);
        let results: Vec<_> = (0..32).map(|_| table.respond("t", &mut rng)).collect();
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(ArgosError::NoResponses(_)))));
        assert!(results
            .iter()
            .flatten()
            .all(|r| r.style == Style::Neutral && r.text == "n t"));
    }

    #[test]
    fn arg_command_output() {
        let (reg, mut s) = setup(5);
        let lines = texts(reg.execute("arg remote work", &mut s).unwrap());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Starting argument discussion about: remote work");
        assert!(lines[1].starts_with("Bot response style: "));
        assert!(lines[2].contains("\"remote work\""));
    }

    #[test]
    fn arg_requires_topic() {
        let (reg, mut s) = setup(5);
        let err = reg.execute("arg", &mut s).unwrap_err();
        assert_eq!(err.to_string(), "Usage: arg <topic>");
    }

    #[test]
    fn analysis_of_shouted_question() {
        let a = ArgumentAnalysis::of("WHAT IS GOING ON???");
        assert_eq!(a.word_count, 4);
        assert!(a.has_question);
        assert!(a.is_emphatic);
        assert!(!a.is_complex);
        assert!(a.is_brief());
    }

    #[test]
    fn analysis_edge_cases() {
        // Three shouted words are not enough to count as emphatic
        assert!(!ArgumentAnalysis::of("STOP THIS NOW").is_emphatic);
        // Lowercase letters break the all-caps check
        assert!(!ArgumentAnalysis::of("WHAT is GOING ON").is_emphatic);
        let long = "word ".repeat(16);
        let a = ArgumentAnalysis::of(&long);
        assert_eq!(a.word_count, 16);
        assert!(a.is_complex);
        assert!(!a.is_brief());
    }

    #[test]
    fn analyze_command_output() {
        let (reg, mut s) = setup(1);
        let lines = texts(
            reg.execute(r#"analyze "WHAT IS GOING ON???""#, &mut s)
                .unwrap(),
        );
        assert_eq!(lines[0], "Analyzing argument: \"WHAT IS GOING ON???\"");
        assert!(lines.contains(&"- Word count: 4".to_string()));
        assert!(lines.contains(&"- Is question: Yes".to_string()));
        assert!(lines.contains(&"- Emphatic tone: Yes".to_string()));
        assert!(lines.contains(&"- Complex argument: No".to_string()));
        assert!(lines.iter().any(|l| l.contains("ALL CAPS")));
        assert!(lines.iter().any(|l| l.contains("quite brief")));
    }

    #[test]
    fn analyze_requires_text() {
        let (reg, mut s) = setup(1);
        let err = reg.execute("analyze", &mut s).unwrap_err();
        assert!(matches!(err, ArgosError::Usage(_)));
    }
}
