//! Rule tables for each word class.
//!
//! Every table calls back once per form it covers. A form which is missing
//! from a table is not valid for that word class.

use crate::inflection::godan::Godan;
use crate::inflection::FormType;

use FormType::*;

/// Group 2 (る) verbs, called with the ending attached to the stem.
pub(super) fn ichidan(mut r: impl FnMut(&'static str, FormType)) {
    r("る", Present);
    r("た", Past);
    r("ない", Negative);
    r("なかった", NegativePast);
    r("ます", Polite);
    r("ました", PolitePast);
    r("ません", PoliteNegative);
    r("ませんでした", PoliteNegativePast);
    r("て", Te);
    r("よう", Volitional);
    r("られる", Potential);
    r("られる", Passive);
    r("させる", Causative);
    r("ろ", Imperative);
    r("れば", Conditional);
    r("たら", Tara);
    r("たい", Tai);
    r("る", Attributive);
}

/// Group 1 (う) verbs, called with the row kana and the ending.
pub(super) fn godan(g: &'static Godan, mut r: impl FnMut(&'static str, &'static str, FormType)) {
    r("", g.u, Present);
    r("", g.past, Past);
    r(g.a, "ない", Negative);
    r(g.a, "なかった", NegativePast);
    r(g.i, "ます", Polite);
    r(g.i, "ました", PolitePast);
    r(g.i, "ません", PoliteNegative);
    r(g.i, "ませんでした", PoliteNegativePast);
    r("", g.te, Te);
    r(g.o, "う", Volitional);
    r(g.e, "る", Potential);
    r(g.a, "れる", Passive);
    r(g.a, "せる", Causative);
    r("", g.e, Imperative);
    r(g.e, "ば", Conditional);
    r("", g.tara, Tara);
    r(g.i, "たい", Tai);
    r("", g.u, Attributive);
}

/// する and its compounds, called with the replacement for する.
pub(super) fn suru(mut r: impl FnMut(&'static str, &'static str, FormType)) {
    r("す", "る", Present);
    r("し", "た", Past);
    r("し", "ない", Negative);
    r("し", "なかった", NegativePast);
    r("し", "ます", Polite);
    r("し", "ました", PolitePast);
    r("し", "ません", PoliteNegative);
    r("し", "ませんでした", PoliteNegativePast);
    r("し", "て", Te);
    r("し", "よう", Volitional);
    r("", "できる", Potential);
    r("さ", "れる", Passive);
    r("さ", "せる", Causative);
    r("し", "ろ", Imperative);
    r("す", "れば", Conditional);
    r("し", "たら", Tara);
    r("し", "たい", Tai);
    r("す", "る", Attributive);
}

/// 来る and its compounds, called with the kana reading of 来 and the
/// ending.
pub(super) fn kuru(mut r: impl FnMut(&'static str, &'static str, FormType)) {
    r("く", "る", Present);
    r("き", "た", Past);
    r("こ", "ない", Negative);
    r("こ", "なかった", NegativePast);
    r("き", "ます", Polite);
    r("き", "ました", PolitePast);
    r("き", "ません", PoliteNegative);
    r("き", "ませんでした", PoliteNegativePast);
    r("き", "て", Te);
    r("こ", "よう", Volitional);
    r("こ", "られる", Potential);
    r("こ", "られる", Passive);
    r("こ", "させる", Causative);
    r("こ", "い", Imperative);
    r("く", "れば", Conditional);
    r("き", "たら", Tara);
    r("き", "たい", Tai);
    r("く", "る", Attributive);
}

/// い adjectives, called with the ending attached to the stem.
pub(super) fn adjective_i(mut r: impl FnMut(&'static str, FormType)) {
    r("い", Present);
    r("かった", Past);
    r("くない", Negative);
    r("くなかった", NegativePast);
    r("いです", Polite);
    r("かったです", PolitePast);
    r("くないです", PoliteNegative);
    r("くなかったです", PoliteNegativePast);
    r("くて", Te);
    r("ければ", Conditional);
    r("かったら", Tara);
    r("い", Attributive);
    r("く", Adverbial);
}

/// Copula attachment for な adjectives and nouns.
///
/// `attributive` is the particle used before a noun and `adverbial` the
/// particle turning the word into an adverb, if any.
pub(super) fn copula(
    attributive: &'static str,
    adverbial: Option<&'static str>,
    mut r: impl FnMut(&'static str, FormType),
) {
    r("", Present);
    r("だった", Past);
    r("ではない", Negative);
    r("ではなかった", NegativePast);
    r("です", Polite);
    r("でした", PolitePast);
    r("ではありません", PoliteNegative);
    r("ではありませんでした", PoliteNegativePast);
    r("で", Te);
    r("なら", Conditional);
    r("だったら", Tara);
    r(attributive, Attributive);

    if let Some(adverbial) = adverbial {
        r(adverbial, Adverbial);
    }
}
