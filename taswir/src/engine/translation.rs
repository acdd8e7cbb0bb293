//! Phrase-table translation.

use crate::core::{Language, Translation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Translation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    /// Text to translate.
    #[serde(default)]
    pub text: String,
    /// Source language.
    #[serde(default = "default_source")]
    pub source_language: Language,
    /// Target language.
    #[serde(default = "default_target")]
    pub target_language: Language,
}

const fn default_source() -> Language {
    Language::En
}

const fn default_target() -> Language {
    Language::Es
}

impl Default for TranslationRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            source_language: default_source(),
            target_language: default_target(),
        }
    }
}

impl TranslationRequest {
    /// Creates a request between two languages.
    #[must_use]
    pub fn new(text: impl Into<String>, source: Language, target: Language) -> Self {
        Self {
            text: text.into(),
            source_language: source,
            target_language: target,
        }
    }

    /// The request the swap button produces: languages exchanged and the
    /// previous translation moved into the input.
    #[must_use]
    pub fn swapped(&self, translated: &str) -> Self {
        Self {
            text: translated.to_string(),
            source_language: self.target_language,
            target_language: self.source_language,
        }
    }
}

type Phrases = &'static [(&'static str, &'static str)];

const EN_ES: Phrases = &[
    ("Hello", "Hola"),
    ("Good morning", "Buenos días"),
    ("How are you?", "¿Cómo estás?"),
    ("Thank you", "Gracias"),
    ("Goodbye", "Adiós"),
    ("Welcome", "Bienvenido"),
    ("What is your name?", "¿Cómo te llamas?"),
    ("My name is", "Me llamo"),
    ("I don't understand", "No entiendo"),
    ("Please", "Por favor"),
];

const EN_FR: Phrases = &[
    ("Hello", "Bonjour"),
    ("Good morning", "Bon matin"),
    ("How are you?", "Comment allez-vous?"),
    ("Thank you", "Merci"),
    ("Goodbye", "Au revoir"),
    ("Welcome", "Bienvenue"),
    ("What is your name?", "Comment vous appelez-vous?"),
    ("My name is", "Je m'appelle"),
    ("I don't understand", "Je ne comprends pas"),
    ("Please", "S'il vous plaît"),
];

const EN_DE: Phrases = &[
    ("Hello", "Hallo"),
    ("Good morning", "Guten Morgen"),
    ("How are you?", "Wie geht es dir?"),
    ("Thank you", "Danke"),
    ("Goodbye", "Auf Wiedersehen"),
    ("Welcome", "Willkommen"),
    ("What is your name?", "Wie heißt du?"),
    ("My name is", "Ich heiße"),
    ("I don't understand", "Ich verstehe nicht"),
    ("Please", "Bitte"),
];

const ES_EN: Phrases = &[
    ("Hola", "Hello"),
    ("Buenos días", "Good morning"),
    ("¿Cómo estás?", "How are you?"),
    ("Gracias", "Thank you"),
    ("Adiós", "Goodbye"),
    ("Bienvenido", "Welcome"),
    ("¿Cómo te llamas?", "What is your name?"),
    ("Me llamo", "My name is"),
    ("No entiendo", "I don't understand"),
    ("Por favor", "Please"),
];

const FR_EN: Phrases = &[
    ("Bonjour", "Hello"),
    ("Bon matin", "Good morning"),
    ("Comment allez-vous?", "How are you?"),
    ("Merci", "Thank you"),
    ("Au revoir", "Goodbye"),
    ("Bienvenue", "Welcome"),
    ("Comment vous appelez-vous?", "What is your name?"),
    ("Je m'appelle", "My name is"),
    ("Je ne comprends pas", "I don't understand"),
    ("S'il vous plaît", "Please"),
];

const DE_EN: Phrases = &[
    ("Hallo", "Hello"),
    ("Guten Morgen", "Good morning"),
    ("Wie geht es dir?", "How are you?"),
    ("Danke", "Thank you"),
    ("Auf Wiedersehen", "Goodbye"),
    ("Willkommen", "Welcome"),
    ("Wie heißt du?", "What is your name?"),
    ("Ich heiße", "My name is"),
    ("Ich verstehe nicht", "I don't understand"),
    ("Bitte", "Please"),
];

/// The phrase table for a language pair, if one exists.
#[must_use]
pub fn phrase_table(source: Language, target: Language) -> Option<Phrases> {
    match (source, target) {
        (Language::En, Language::Es) => Some(EN_ES),
        (Language::En, Language::Fr) => Some(EN_FR),
        (Language::En, Language::De) => Some(EN_DE),
        (Language::Es, Language::En) => Some(ES_EN),
        (Language::Fr, Language::En) => Some(FR_EN),
        (Language::De, Language::En) => Some(DE_EN),
        _ => None,
    }
}

fn lookup(phrases: Phrases, key: &str) -> Option<&'static str> {
    phrases
        .iter()
        .find(|(from, _)| from.to_lowercase() == key.to_lowercase())
        .map(|(_, to)| *to)
}

/// The placeholder used when no phrase or word matched.
#[must_use]
pub fn placeholder(text: &str, source: Language, target: Language) -> String {
    format!("[Mock translation of \"{text}\" from {source} to {target}]")
}

/// Translates by whole phrase, then word by word, then placeholder.
#[must_use]
pub fn translate(request: &TranslationRequest) -> Translation {
    let source = request.source_language;
    let target = request.target_language;
    let text = request.text.as_str();

    let translated = phrase_table(source, target).and_then(|phrases| {
        if let Some(hit) = lookup(phrases, text.trim()) {
            return Some(hit.to_string());
        }
        let words: Vec<&str> = text
            .split(' ')
            .map(|word| lookup(phrases, word).unwrap_or(word))
            .collect();
        let joined = words.join(" ");
        (joined != text).then_some(joined)
    });

    let from_table = translated.is_some();
    debug!(
        source = source.code(),
        target = target.code(),
        from_table,
        "Translation resolved"
    );

    Translation {
        source_language: source,
        target_language: target,
        source_text: request.text.clone(),
        translated_text: translated.unwrap_or_else(|| placeholder(text, source, target)),
        from_table,
    }
}
