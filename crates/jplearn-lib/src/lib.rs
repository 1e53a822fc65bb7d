#![allow(clippy::match_like_matches_macro)]

#[macro_use]
pub mod reporter;

pub mod inflection;
pub use self::inflection::{conjugate, forms, ConjugationResult, Conjugator, FormType, Variants};

mod concat;

pub mod kana;

mod word;
pub use self::word::{Override, WordClass, WordEntry};

mod furigana;
pub use self::furigana::{Furigana, FuriganaGroup};

mod highlight;
pub use self::highlight::highlight;

pub mod wordlist;
pub use self::wordlist::{Library, LoadError, WordList};

pub mod particles;
pub use self::particles::Particle;

mod builtin;

pub mod exercise;
pub use self::exercise::Exercise;

mod deck;
pub use self::deck::Deck;

pub mod progress;
pub use self::progress::Progress;

pub mod config;
pub use self::config::{Config, Language, Marker};

mod dirs;
pub use self::dirs::Dirs;
