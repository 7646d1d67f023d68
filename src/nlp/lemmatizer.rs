//! Lemmatization
//!
//! English irregular forms are resolved from a fixed table; everything else
//! is reduced with the Snowball stemmer for the configured language.

use rust_stemmers::Stemmer;

use super::Language;

pub struct Lemmatizer {
    language: Language,
    stemmer: Stemmer,
}

impl std::fmt::Debug for Lemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lemmatizer")
            .field("language", &self.language)
            .finish()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl Lemmatizer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            stemmer: Stemmer::create(language.stem_algorithm()),
        }
    }

    /// Normalized base form of a word
    pub fn lemma(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if self.language == Language::English {
            if let Some(base) = english_irregular(&lower) {
                return base.to_string();
            }
        }
        if !lower.chars().any(char::is_alphabetic) {
            return lower;
        }
        self.stemmer.stem(&lower).into_owned()
    }
}

fn english_irregular(word: &str) -> Option<&'static str> {
    let base = match word {
        "am" | "is" | "are" | "was" | "were" | "been" | "being" => "be",
        "has" | "had" | "having" => "have",
        "does" | "did" | "done" => "do",
        "goes" | "went" | "gone" => "go",
        "ran" => "run",
        "saw" | "seen" => "see",
        "took" | "taken" => "take",
        "made" => "make",
        "said" => "say",
        "got" | "gotten" => "get",
        "gave" | "given" => "give",
        "came" => "come",
        "knew" | "known" => "know",
        "thought" => "think",
        "told" => "tell",
        "found" => "find",
        "became" => "become",
        "felt" => "feel",
        "brought" => "bring",
        "began" | "begun" => "begin",
        "kept" => "keep",
        "held" => "hold",
        "wrote" | "written" => "write",
        "stood" => "stand",
        "heard" => "hear",
        "meant" => "mean",
        "met" => "meet",
        "children" => "child",
        "men" => "man",
        "women" => "woman",
        "people" => "person",
        "mice" => "mouse",
        "feet" => "foot",
        "teeth" => "tooth",
        "geese" => "goose",
        "better" | "best" => "good",
        "worse" | "worst" => "bad",
        _ => return None,
    };
    Some(base)
}
