//! Line-oriented front end
//!
//! Every stdin line is either a `:command` or text to type into the editor.
//! A leading `::` types a literal `:`.

use crate::messages::{ActionMsg, AppMsg, DocumentMsg, Msg, SuggestMsg, ValidationMsg};
use crate::model::{AppModel, EditingSurface};

pub const HELP: &str = "\
Type text to append it to the editor. Commands:
  :check               check spelling of every word
  :sentiment           analyze the sentiment of the text
  :entities            extract named entities
  :speak               read the selection (or the text) aloud
  :translate           translate the selection (secondary click)
  :lemma WORD          find the root of WORD
  :phonetics WORD      check WORD against phonotactic rules
  :select INDEX LEN    select LEN characters at INDEX
  :accept N            append suggestion N
  :dismiss             hide the suggestion list
  :autocomplete on|off toggle autocomplete
  :insert INDEX TEXT   insert TEXT at INDEX
  :delete INDEX LEN    delete LEN characters at INDEX
  :clear               empty the editor
  :example             load the sample text
  :save                export the text to a file
  :show                print the editor state
  :help                print this help
  :quit                exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Check,
    Sentiment,
    Entities,
    Speak,
    Translate,
    Lemma(String),
    Phonetics(String),
    Select { index: usize, length: usize },
    /// Zero-based position in the suggestion list
    Accept(usize),
    Dismiss,
    Autocomplete(bool),
    Insert { index: usize, text: String },
    Delete { index: usize, len: usize },
    Clear,
    Example,
    Save,
    Show,
    Help,
    Quit,
    /// Plain text to append
    Text(String),
}

impl PromptCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        if let Some(literal) = line.strip_prefix("::") {
            return Ok(Self::Text(format!(":{}", literal)));
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Self::Text(line.to_string()));
        };

        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        let cmd = match name {
            "check" => Self::Check,
            "sentiment" => Self::Sentiment,
            "entities" => Self::Entities,
            "speak" => Self::Speak,
            "translate" => Self::Translate,
            "lemma" => Self::Lemma(rest.to_string()),
            "phonetics" => Self::Phonetics(rest.to_string()),
            "select" => {
                let (index, length) = two_numbers(rest, "select")?;
                Self::Select { index, length }
            }
            "accept" => {
                let n: usize = number(rest, "accept")?;
                if n == 0 {
                    return Err("Suggestions are numbered from 1".to_string());
                }
                Self::Accept(n - 1)
            }
            "dismiss" => Self::Dismiss,
            "autocomplete" => match rest {
                "on" => Self::Autocomplete(true),
                "off" => Self::Autocomplete(false),
                _ => return Err("Usage: :autocomplete on|off".to_string()),
            },
            "insert" => {
                let (index, text) = rest
                    .split_once(' ')
                    .ok_or_else(|| "Usage: :insert INDEX TEXT".to_string())?;
                Self::Insert {
                    index: number(index, "insert")?,
                    text: text.to_string(),
                }
            }
            "delete" => {
                let (index, len) = two_numbers(rest, "delete")?;
                Self::Delete { index, len }
            }
            "clear" => Self::Clear,
            "example" => Self::Example,
            "save" => Self::Save,
            "show" => Self::Show,
            "help" => Self::Help,
            "quit" | "q" => Self::Quit,
            other => return Err(format!("Unknown command :{} (try :help)", other)),
        };
        Ok(cmd)
    }

    /// The message this command feeds into the update loop
    ///
    /// `Show`, `Help` and `Quit` belong to the front end and map to none.
    pub fn to_msg(&self, model: &AppModel) -> Option<Msg> {
        let msg = match self {
            Self::Check => Msg::Validation(ValidationMsg::Run),
            Self::Sentiment => Msg::Action(ActionMsg::AnalyzeSentiment),
            Self::Entities => Msg::Action(ActionMsg::ExtractEntities),
            Self::Speak => Msg::Action(ActionMsg::Speak),
            Self::Translate => Msg::Action(ActionMsg::ContextMenu),
            Self::Lemma(word) => Msg::Action(ActionMsg::Lemmatize(word.clone())),
            Self::Phonetics(word) => Msg::Action(ActionMsg::ValidatePhonetics(word.clone())),
            Self::Select { index, length } => Msg::select(*index, *length),
            Self::Accept(position) => Msg::Suggest(SuggestMsg::Accept(*position)),
            Self::Dismiss => Msg::Suggest(SuggestMsg::Dismiss),
            Self::Autocomplete(enabled) => Msg::Suggest(SuggestMsg::SetEnabled(*enabled)),
            Self::Insert { index, text } => Msg::Document(DocumentMsg::Insert {
                index: *index,
                text: text.clone(),
            }),
            Self::Delete { index, len } => Msg::Document(DocumentMsg::Delete {
                index: *index,
                len: *len,
            }),
            Self::Clear => Msg::Document(DocumentMsg::Clear),
            Self::Example => Msg::Document(DocumentMsg::LoadExample),
            Self::Save => Msg::App(AppMsg::Export),
            Self::Text(text) => {
                // Each line typed after the first starts a new line
                if model.document.is_empty() {
                    Msg::append(text.clone())
                } else {
                    Msg::append(format!("\n{}", text))
                }
            }
            Self::Show | Self::Help | Self::Quit => return None,
        };
        Some(msg)
    }
}

fn number(s: &str, command: &str) -> Result<usize, String> {
    s.trim()
        .parse()
        .map_err(|_| format!(":{} expects a number, got {:?}", command, s.trim()))
}

fn two_numbers(s: &str, command: &str) -> Result<(usize, usize), String> {
    let mut parts = s.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Ok((number(a, command)?, number(b, command)?)),
        _ => Err(format!("Usage: :{} INDEX LEN", command)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssistConfig;

    #[test]
    fn test_plain_line_is_text() {
        assert_eq!(
            PromptCommand::parse("Salama e!"),
            Ok(PromptCommand::Text("Salama e!".to_string()))
        );
    }

    #[test]
    fn test_double_colon_types_literal_colon() {
        assert_eq!(
            PromptCommand::parse("::check"),
            Ok(PromptCommand::Text(":check".to_string()))
        );
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!(
            PromptCommand::parse(":lemma  mpianatra "),
            Ok(PromptCommand::Lemma("mpianatra".to_string()))
        );
        assert_eq!(
            PromptCommand::parse(":select 3 4"),
            Ok(PromptCommand::Select {
                index: 3,
                length: 4
            })
        );
        assert_eq!(
            PromptCommand::parse(":insert 0 tonga soa"),
            Ok(PromptCommand::Insert {
                index: 0,
                text: "tonga soa".to_string()
            })
        );
        assert_eq!(
            PromptCommand::parse(":autocomplete off"),
            Ok(PromptCommand::Autocomplete(false))
        );
    }

    #[test]
    fn test_accept_is_one_based() {
        assert_eq!(PromptCommand::parse(":accept 1"), Ok(PromptCommand::Accept(0)));
        assert!(PromptCommand::parse(":accept 0").is_err());
    }

    #[test]
    fn test_malformed_commands_are_errors() {
        assert!(PromptCommand::parse(":select 3").is_err());
        assert!(PromptCommand::parse(":delete a b").is_err());
        assert!(PromptCommand::parse(":autocomplete maybe").is_err());
        assert!(PromptCommand::parse(":frobnicate").is_err());
    }

    #[test]
    fn test_text_starts_new_line_after_first() {
        let cmd = PromptCommand::Text("aho".to_string());

        let empty = AppModel::new(AssistConfig::default());
        assert!(matches!(
            cmd.to_msg(&empty),
            Some(Msg::Document(DocumentMsg::Append(ref t))) if t == "aho"
        ));

        let filled = AppModel::with_text(AssistConfig::default(), "Salama");
        assert!(matches!(
            cmd.to_msg(&filled),
            Some(Msg::Document(DocumentMsg::Append(ref t))) if t == "\naho"
        ));
    }

    #[test]
    fn test_front_end_commands_have_no_message() {
        let model = AppModel::new(AssistConfig::default());
        assert!(PromptCommand::Quit.to_msg(&model).is_none());
        assert!(PromptCommand::Show.to_msg(&model).is_none());
    }
}
