//! Rule-based language model
//!
//! Tokens and lemmas come from [`TextProcessor`]. Entities are found with
//! surface patterns over each sentence's tokens:
//!
//! - runs of capitalized words, optionally joined by `of`, `and`, `&`, `de`
//! - a currency symbol followed by a number (`MONEY`)
//! - a number followed by `%` or `percent` (`PERCENT`)
//! - month and weekday names, four-digit years (`DATE`)
//! - any other number (`CARDINAL`)
//!
//! Capitalized runs are labeled from context: an honorific before the run
//! gives `PERSON`, an organisation word inside it gives `ORG`, a known place or a
//! locative preposition before the run gives `GPE`. Remaining runs of two or
//! three plain words are `PERSON` unless a determiner ("The") opened them,
//! everything else `MISC`. A month name opening a sentence is a date only
//! when a number follows it ("May I ..." is not).

use crate::nlp::{Language, TextProcessor};
use crate::types::{Doc, EntityLabel, EntitySpan, Token, TokenKind};

use super::LanguageModel;

const HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "miss", "dr", "prof", "sir", "dame", "lord", "lady", "president",
    "senator", "judge", "king", "queen",
];

const ORG_SUFFIXES: &[&str] = &[
    "inc", "corp", "corporation", "ltd", "llc", "plc", "co", "company", "university", "institute",
    "bank", "group", "foundation", "association", "agency", "council", "ministry", "department",
    "committee", "organization", "organisation", "party", "school", "college", "club",
];

const PLACES: &[&str] = &[
    "africa", "america", "asia", "australia", "berlin", "brazil", "canada", "china", "england",
    "europe", "france", "germany", "india", "italy", "japan", "london", "mexico", "moscow",
    "paris", "russia", "spain", "tokyo", "california", "texas", "beijing", "scotland", "ireland",
];

const LOCATIVES: &[&str] = &["in", "at", "from", "to", "near", "across", "throughout"];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

const CONNECTORS: &[&str] = &["of", "and", "&", "de"];

const CURRENCIES: &[&str] = &["$", "€", "£", "¥"];

const MAGNITUDES: &[&str] = &["thousand", "million", "billion", "trillion"];

/// Language model built from the crate's own text processing
#[derive(Debug)]
pub struct RuleBasedModel {
    name: String,
    processor: TextProcessor,
}

impl RuleBasedModel {
    pub fn new(name: impl Into<String>, language: Language) -> Self {
        Self {
            name: name.into(),
            processor: TextProcessor::new(language),
        }
    }
}

impl LanguageModel for RuleBasedModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(&self, text: &str) -> Doc {
        let mut doc = self.processor.process(text);
        let mut entities = Vec::new();
        for sentence in &doc.sentences {
            tag_sentence(text, doc.sentence_tokens(sentence), &mut entities);
        }
        doc.entities = entities;
        doc
    }
}

fn lower(token: &Token) -> String {
    token.text.to_lowercase()
}

fn is_in(token: &Token, list: &[&str]) -> bool {
    list.contains(&lower(token).as_str())
}

fn is_capitalized(token: &Token) -> bool {
    token.kind == TokenKind::Word && token.text.chars().next().is_some_and(char::is_uppercase)
}

fn is_year(token: &Token) -> bool {
    token.kind == TokenKind::Number
        && token.text.len() == 4
        && token
            .text
            .parse::<u32>()
            .is_ok_and(|y| (1000..=2099).contains(&y))
}

/// Closest word before `idx`, skipping periods ("Dr. Smith")
fn previous_word(tokens: &[Token], idx: usize) -> Option<&Token> {
    tokens[..idx].iter().rev().find(|t| t.text != ".")
}

fn span(text: &str, tokens: &[Token], label: EntityLabel) -> EntitySpan {
    let start = tokens[0].start;
    let end = tokens[tokens.len() - 1].end;
    EntitySpan {
        text: text[start..end].to_string(),
        label,
        start,
        end,
    }
}

fn tag_sentence(text: &str, tokens: &[Token], out: &mut Vec<EntitySpan>) {
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        let next = tokens.get(i + 1);

        // $5 million
        if token.kind == TokenKind::Symbol
            && is_in(token, CURRENCIES)
            && next.is_some_and(|n| n.kind == TokenKind::Number)
        {
            let mut end = i + 2;
            if tokens.get(end).is_some_and(|t| is_in(t, MAGNITUDES)) {
                end += 1;
            }
            out.push(span(text, &tokens[i..end], EntityLabel::Money));
            i = end;
            continue;
        }

        if token.kind == TokenKind::Number {
            let percent = next.is_some_and(|n| n.text == "%" || lower(n) == "percent");
            if percent {
                out.push(span(text, &tokens[i..i + 2], EntityLabel::Percent));
                i += 2;
            } else {
                let label = if is_year(token) {
                    EntityLabel::Date
                } else {
                    EntityLabel::Cardinal
                };
                out.push(span(text, &tokens[i..i + 1], label));
                i += 1;
            }
            continue;
        }

        if !is_capitalized(token) {
            i += 1;
            continue;
        }

        // "May I ..." opening a sentence is a verb, not a month
        if i == 0 && is_in(token, MONTHS) && !next.is_some_and(|n| n.kind == TokenKind::Number) {
            i += 1;
            continue;
        }

        // March 3, Friday
        if is_in(token, MONTHS) || is_in(token, WEEKDAYS) {
            let mut end = i + 1;
            if tokens.get(end).is_some_and(|t| t.kind == TokenKind::Number) {
                end += 1;
            }
            out.push(span(text, &tokens[i..end], EntityLabel::Date));
            i = end;
            continue;
        }

        let run_end = capitalized_run_end(tokens, i);
        if let Some(entity) = label_run(text, tokens, i, run_end) {
            out.push(entity);
        }
        i = run_end;
    }
}

/// End (exclusive) of the capitalized run starting at `start`
fn capitalized_run_end(tokens: &[Token], start: usize) -> usize {
    let mut end = start + 1;
    while end < tokens.len() {
        if is_capitalized(&tokens[end]) && !is_in(&tokens[end], HONORIFICS) {
            end += 1;
        } else if is_in(&tokens[end], CONNECTORS)
            && tokens.get(end + 1).is_some_and(is_capitalized)
        {
            end += 2;
        } else {
            break;
        }
    }
    end
}

fn label_run(text: &str, tokens: &[Token], start: usize, end: usize) -> Option<EntitySpan> {
    // Leading honorifics and stopwords ("The", "Dr") are context, not entity
    let mut first = start;
    let mut honorific = previous_word(tokens, start).is_some_and(|t| is_in(t, HONORIFICS));
    let mut determiner = false;
    while first < end && (tokens[first].is_stopword || is_in(&tokens[first], HONORIFICS)) {
        if is_in(&tokens[first], HONORIFICS) {
            honorific = true;
        } else {
            determiner = true;
        }
        first += 1;
    }
    if first == end {
        return None;
    }

    let run = &tokens[first..end];
    // A lone capitalized word opening a sentence is ordinary capitalization
    if start == 0 && first == start && run.len() == 1 {
        return None;
    }

    let label = if honorific {
        EntityLabel::Person
    } else if run.iter().any(|t| is_in(t, ORG_SUFFIXES)) {
        EntityLabel::Org
    } else if run.iter().any(|t| is_in(t, PLACES))
        || (first > 0 && is_in(&tokens[first - 1], LOCATIVES))
    {
        EntityLabel::Gpe
    } else if !determiner && (2..=3).contains(&run.len()) && run.iter().all(is_capitalized) {
        EntityLabel::Person
    } else {
        EntityLabel::Misc
    };

    Some(span(text, run, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(text: &str) -> Vec<(String, EntityLabel)> {
        RuleBasedModel::new("test", Language::English)
            .analyze(text)
            .entities
            .into_iter()
            .map(|e| (e.text, e.label))
            .collect()
    }

    #[test]
    fn test_mixed_entities() {
        let found = entities(
            "Yesterday Dr. Jane Smith met executives of Acme Corp in Paris. \
             The deal was worth $5 million, up 12% since 2021.",
        );
        let expected = vec![
            ("Jane Smith".to_string(), EntityLabel::Person),
            ("Acme Corp".to_string(), EntityLabel::Org),
            ("Paris".to_string(), EntityLabel::Gpe),
            ("$5 million".to_string(), EntityLabel::Money),
            ("12%".to_string(), EntityLabel::Percent),
            ("2021".to_string(), EntityLabel::Date),
        ];
        assert_eq!(found, expected);
    }

    #[test]
    fn test_sentence_initial_word_ignored() {
        assert!(entities("Cats are mammals.").is_empty());
    }

    #[test]
    fn test_sentence_initial_modal_is_not_a_date() {
        assert!(entities("May I come in? Sure.").is_empty());
        assert_eq!(
            entities("May 5 was busy."),
            vec![("May 5".to_string(), EntityLabel::Date)]
        );
    }

    #[test]
    fn test_determiner_run_is_not_a_person() {
        let found = entities("The United Nations met in Geneva.");
        assert_eq!(found[0], ("United Nations".to_string(), EntityLabel::Misc));
    }

    #[test]
    fn test_connector_inside_run() {
        let found = entities("She studied at the Bank of England.");
        assert_eq!(found, vec![("Bank of England".to_string(), EntityLabel::Org)]);
    }

    #[test]
    fn test_dates_and_cardinals() {
        let found = entities("They met on Friday and again in March 3 with 40 people.");
        assert_eq!(
            found,
            vec![
                ("Friday".to_string(), EntityLabel::Date),
                ("March 3".to_string(), EntityLabel::Date),
                ("40".to_string(), EntityLabel::Cardinal),
            ]
        );
    }

    #[test]
    fn test_offsets_match_source() {
        let text = "Reports reached London quickly.";
        let doc = RuleBasedModel::new("test", Language::English).analyze(text);

        assert_eq!(doc.entities.len(), 1);
        let entity = &doc.entities[0];
        assert_eq!(&text[entity.start..entity.end], "London");
        assert_eq!(entity.label, EntityLabel::Gpe);
    }

    #[test]
    fn test_model_name_and_tokens() {
        let model = RuleBasedModel::new("en_core_web_sm", Language::English);
        assert_eq!(model.name(), "en_core_web_sm");

        let doc = model.analyze("Running dogs.");
        assert_eq!(doc.tokens[0].lemma, "run");
    }
}
