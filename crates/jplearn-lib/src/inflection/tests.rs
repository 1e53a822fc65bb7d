use super::*;

use crate::word::WordClass::*;

use FormType::*;

macro_rules! test_case {
    ($class:expr, $text:expr, $reading:expr, $($form:ident => $expected:expr, $expected_reading:expr),* $(,)?) => {{
        let entry = WordEntry::new($text, $reading, "", $class);

        $(
            let result = conjugate(&entry, $form);
            assert_eq!(
                (result.form.as_str(), result.reading.as_str()),
                ($expected, $expected_reading),
                "{} / {:?}",
                $text,
                $form
            );
        )*
    }};
}

#[test]
fn group1_past_by_terminal_mora() {
    test_case!(Group1Verb, "書く", "かく", Past => "書いた", "かいた");
    test_case!(Group1Verb, "泳ぐ", "およぐ", Past => "泳いだ", "およいだ");
    test_case!(Group1Verb, "読む", "よむ", Past => "読んだ", "よんだ");
    test_case!(Group1Verb, "遊ぶ", "あそぶ", Past => "遊んだ", "あそんだ");
    test_case!(Group1Verb, "死ぬ", "しぬ", Past => "死んだ", "しんだ");
    test_case!(Group1Verb, "話す", "はなす", Past => "話した", "はなした");
    test_case!(Group1Verb, "待つ", "まつ", Past => "待った", "まった");
    test_case!(Group1Verb, "帰る", "かえる", Past => "帰った", "かえった");
    test_case!(Group1Verb, "買う", "かう", Past => "買った", "かった");
}

#[test]
fn group1_ku_past_is_stem_plus_ita() {
    for (text, reading) in [("書く", "かく"), ("聞く", "きく"), ("歩く", "あるく")] {
        let entry = WordEntry::new(text, reading, "", Group1Verb);
        assert_eq!(conjugate(&entry, Past).form, format!("{}いた", entry.stem()));
    }
}

#[test]
fn group1_mu_bu_nu_past_ends_in_nda() {
    for (text, reading) in [("飲む", "のむ"), ("呼ぶ", "よぶ"), ("死ぬ", "しぬ")] {
        let entry = WordEntry::new(text, reading, "", Group1Verb);
        assert!(conjugate(&entry, Past).form.ends_with("んだ"));
    }
}

#[test]
fn group1_forms() {
    test_case! {
        Group1Verb, "書く", "かく",
        Negative => "書かない", "かかない",
        NegativePast => "書かなかった", "かかなかった",
        Polite => "書きます", "かきます",
        PolitePast => "書きました", "かきました",
        PoliteNegative => "書きません", "かきません",
        PoliteNegativePast => "書きませんでした", "かきませんでした",
        Te => "書いて", "かいて",
        Volitional => "書こう", "かこう",
        Potential => "書ける", "かける",
        Passive => "書かれる", "かかれる",
        Causative => "書かせる", "かかせる",
        Imperative => "書け", "かけ",
        Conditional => "書けば", "かけば",
        Tara => "書いたら", "かいたら",
        Tai => "書きたい", "かきたい",
    };

    test_case! {
        Group1Verb, "買う", "かう",
        Negative => "買わない", "かわない",
        Passive => "買われる", "かわれる",
    };
}

#[test]
fn group1_exceptions() {
    test_case! {
        Group1Verb, "行く", "いく",
        Past => "行った", "いった",
        Te => "行って", "いって",
        Negative => "行かない", "いかない",
    };

    test_case! {
        Group1Verb, "持って行く", "もっていく",
        Past => "持って行った", "もっていった",
    };

    test_case! {
        Group1Verb, "ある", "ある",
        Negative => "ない", "ない",
        NegativePast => "なかった", "なかった",
        Past => "あった", "あった",
    };
}

#[test]
fn group2() {
    test_case! {
        Group2Verb, "食べる", "たべる",
        Past => "食べた", "たべた",
        Negative => "食べない", "たべない",
        NegativePast => "食べなかった", "たべなかった",
        Polite => "食べます", "たべます",
        PolitePast => "食べました", "たべました",
        Potential => "食べられる", "たべられる",
        Imperative => "食べろ", "たべろ",
    };

    test_case!(Group2Verb, "いる", "", Negative => "いない", "いない");
}

#[test]
fn group3_suru() {
    test_case! {
        Group3Verb, "する", "",
        Past => "した", "した",
        NegativePast => "しなかった", "しなかった",
        Potential => "できる", "できる",
    };

    test_case! {
        Group3Verb, "勉強する", "べんきょうする",
        Polite => "勉強します", "べんきょうします",
        NegativePast => "勉強しなかった", "べんきょうしなかった",
    };
}

#[test]
fn group3_suru_kanji() {
    test_case! {
        Group3Verb, "勉強為る", "べんきょうする",
        Past => "勉強為た", "べんきょうした",
        NegativePast => "勉強為なかった", "べんきょうしなかった",
        Conditional => "勉強為れば", "べんきょうすれば",
        Causative => "勉強為せる", "べんきょうさせる",
        Potential => "勉強できる", "べんきょうできる",
    };

    test_case! {
        Group3Verb, "為る", "する",
        Polite => "為ます", "します",
        Te => "為て", "して",
    };
}

#[test]
fn group3_kuru() {
    test_case! {
        Group3Verb, "来る", "くる",
        Past => "来た", "きた",
        Negative => "来ない", "こない",
        Polite => "来ます", "きます",
        Conditional => "来れば", "くれば",
        Imperative => "来い", "こい",
    };

    test_case! {
        Group3Verb, "くる", "",
        Negative => "こない", "こない",
    };

    test_case! {
        Group3Verb, "持って来る", "もってくる",
        Te => "持って来て", "もってきて",
    };
}

#[test]
fn group3_mismatched_reading_falls_back() {
    // The reading doesn't end in する, so nothing can be derived.
    test_case!(Group3Verb, "愛する", "あい", Past => "愛する", "あい");
}

#[test]
fn i_adjective() {
    test_case! {
        IAdjective, "高い", "たかい",
        Past => "高かった", "たかかった",
        Negative => "高くない", "たかくない",
        NegativePast => "高くなかった", "たかくなかった",
        Polite => "高いです", "たかいです",
        PolitePast => "高かったです", "たかかったです",
        Te => "高くて", "たかくて",
        Adverbial => "高く", "たかく",
    };

    for text in ["高い", "安い", "おいしい"] {
        let entry = WordEntry::new(text, "", "", IAdjective);
        let stem = entry.stem();
        assert_eq!(conjugate(&entry, Polite).form, format!("{stem}いです"));
        assert_eq!(conjugate(&entry, PolitePast).form, format!("{stem}かったです"));
    }
}

#[test]
fn i_adjective_ii() {
    test_case! {
        IAdjective, "いい", "",
        Polite => "いいです", "いいです",
        Past => "よかった", "よかった",
        Negative => "よくない", "よくない",
    };

    test_case! {
        IAdjective, "良い", "いい",
        Past => "良かった", "よかった",
        Attributive => "良い", "いい",
    };

    test_case! {
        IAdjective, "かっこいい", "",
        NegativePast => "かっこよくなかった", "かっこよくなかった",
    };
}

#[test]
fn kawaii_is_regular() {
    test_case!(IAdjective, "かわいい", "", Past => "かわいかった", "かわいかった");
}

#[test]
fn i_adjective_without_i_falls_back() {
    test_case!(IAdjective, "静か", "しずか", Past => "静か", "しずか");
}

#[test]
fn copula() {
    test_case! {
        NaAdjective, "静か", "しずか",
        Past => "静かだった", "しずかだった",
        Negative => "静かではない", "しずかではない",
        Polite => "静かです", "しずかです",
        Attributive => "静かな", "しずかな",
        Adverbial => "静かに", "しずかに",
    };

    test_case! {
        Noun, "学生", "がくせい",
        PolitePast => "学生でした", "がくせいでした",
        NegativePast => "学生ではなかった", "がくせいではなかった",
        Attributive => "学生の", "がくせいの",
    };
}

#[test]
fn unknown_combinations_fall_back_to_dictionary_form() {
    let entry = WordEntry::new("学生", "がくせい", "student", Noun);
    let result = conjugate(&entry, Potential);
    assert_eq!(result.form, "学生");
    assert_eq!(result.reading, "がくせい");
    assert_eq!(result.translation, "student");

    let entry = WordEntry::new("高い", "たかい", "", IAdjective);
    assert_eq!(conjugate(&entry, Volitional).form, "高い");
}

#[test]
fn present_is_dictionary_form() {
    for class in WordClass::ALL {
        let entry = WordEntry::fallback(*class);
        assert_eq!(conjugate(&entry, Present).form, entry.surface_form);
    }

    let odd = WordEntry::new("xyz", "", "", Group1Verb);
    assert_eq!(conjugate(&odd, Present).form, "xyz");
}

#[test]
fn conjugation_is_idempotent() {
    let entry = WordEntry::new("来る", "くる", "to come", Group3Verb);

    for form in FormType::ALL {
        assert_eq!(conjugate(&entry, *form), conjugate(&entry, *form));
    }
}

#[test]
fn every_valid_form_is_non_empty_and_covered() {
    for class in WordClass::ALL {
        let entry = WordEntry::fallback(*class);
        let all = Conjugator::default().conjugate_all(&entry);
        let valid = forms(*class);

        assert_eq!(all.len(), valid.len());

        for (form, result) in all {
            assert!(valid.contains(form));
            assert!(!result.form.is_empty(), "{class} / {form}");
            assert!(!result.reading.is_empty(), "{class} / {form}");
        }
    }
}

#[test]
fn overrides_take_precedence() {
    let mut entry = WordEntry::new("行く", "いく", "", Group1Verb);
    entry.overrides.insert(
        Past,
        crate::word::Override {
            form: "行った".to_owned(),
            reading: None,
        },
    );
    entry.overrides.insert(
        Negative,
        crate::word::Override {
            form: "行かぬ".to_owned(),
            reading: Some("いかぬ".to_owned()),
        },
    );

    let past = conjugate(&entry, Past);
    assert_eq!((past.form.as_str(), past.reading.as_str()), ("行った", "いった"));

    let negative = conjugate(&entry, Negative);
    assert_eq!(negative.reading, "いかぬ");
}

#[test]
fn pairs_and_descriptions() {
    let entry = WordEntry::new("学生", "がくせい", "student", Noun);
    let pair = Conjugator::new(Language::English).conjugate_pair(&entry, Past);
    assert_eq!(pair.casual.form, "学生だった");
    assert_eq!(pair.casual.translation, "student (past)");
    assert_eq!(pair.polite.map(|p| p.form).as_deref(), Some("学生でした"));

    let pair = conjugate_pair_korean(&entry, Te);
    assert!(pair.polite.is_none());
    assert_eq!(pair.casual.translation, "student (て형 (연결형))");
}

fn conjugate_pair_korean(entry: &WordEntry, form: FormType) -> Variants {
    Conjugator::new(Language::Korean).conjugate_pair(entry, form)
}

#[test]
fn parse_forms() {
    assert_eq!(FormType::parse("negative-present"), Some(Negative));
    assert_eq!(FormType::parse("pastNegative"), Some(NegativePast));
    assert_eq!(FormType::parse("Polite Past"), Some(PolitePast));
    assert_eq!(FormType::parse("masu"), Some(Polite));
    assert_eq!(FormType::parse("bogus"), None);

    for form in FormType::ALL {
        assert_eq!(FormType::parse(form.label()), Some(*form));
    }
}
