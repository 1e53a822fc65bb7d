//! Built-in starter material, used when no word lists have been configured.

use crate::particles::Particle;
use crate::word::{WordClass, WordEntry};

use WordClass::*;

/// Starter words covering every class.
pub fn words() -> Vec<WordEntry> {
    let w = |text: &str, reading: &str, meaning: &str, class: WordClass| {
        WordEntry::new(text, reading, meaning, class)
    };

    vec![
        WordEntry::fallback(Group1Verb),
        w("飲む", "のむ", "to drink", Group1Verb).with_example("毎朝コーヒーを[飲みます]。"),
        w("話す", "はなす", "to speak", Group1Verb).with_example("先生と[話した]。"),
        w("待つ", "まつ", "to wait", Group1Verb).with_example("駅で友達を[待って]います。"),
        w("帰る", "かえる", "to return home", Group1Verb).with_example("昨日は早く家に[帰った]。"),
        w("行く", "いく", "to go", Group1Verb).with_example("明日学校に[行きます]。"),
        w("泳ぐ", "およぐ", "to swim", Group1Verb).with_example("海で[泳いだ]。"),
        w("遊ぶ", "あそぶ", "to play", Group1Verb).with_example("公園で[遊ばない]。"),
        w("買う", "かう", "to buy", Group1Verb).with_example("本を[買いました]。"),
        WordEntry::fallback(Group2Verb),
        w("見る", "みる", "to see", Group2Verb).with_example("映画を[見ませんでした]。"),
        w("起きる", "おきる", "to wake up", Group2Verb).with_example("七時に[起きた]。"),
        w("寝る", "ねる", "to sleep", Group2Verb).with_example("早く[寝なかった]。"),
        WordEntry::fallback(Group3Verb),
        w("来る", "くる", "to come", Group3Verb).with_example("友達が[来ない]。"),
        w("勉強する", "べんきょうする", "to study", Group3Verb)
            .with_example("図書館で[勉強しました]。"),
        WordEntry::fallback(IAdjective),
        w("新しい", "あたらしい", "new", IAdjective).with_example("この車は[新しくない]。"),
        w("寒い", "さむい", "cold", IAdjective).with_example("昨日は[寒かった]。"),
        w("いい", "", "good", IAdjective).with_example("天気が[よかった]。"),
        WordEntry::fallback(NaAdjective),
        w("元気", "げんき", "healthy, energetic", NaAdjective).with_example("祖母は[元気でした]。"),
        w("好き", "すき", "liked", NaAdjective).with_example("猫が[好きではない]。"),
        WordEntry::fallback(Noun),
        w("先生", "せんせい", "teacher", Noun).with_example("田中さんは[先生だった]。"),
        w("雨", "あめ", "rain", Noun).with_example("昨日は[雨だった]。"),
    ]
}

/// The particles every learner starts with.
pub fn particles() -> Vec<Particle> {
    vec![
        Particle::new("は", "わ", "topic", "문장의 주제를 나타냄 (~은/는)")
            .with_example("私[は]学生です。")
            .with_example("今日[は]暑いです。"),
        Particle::new("が", "", "subject", "주어를 나타내거나 새로운 정보를 강조함 (~이/가)")
            .with_example("猫[が]います。")
            .with_example("誰[が]来ましたか。"),
        Particle::new("を", "お", "direct object", "동작의 대상을 나타냄 (~을/를)")
            .with_example("水[を]飲みます。")
            .with_example("本[を]読みました。"),
        Particle::new("に", "", "target, time, location of existence", "시간, 도착점, 존재 장소 (~에, ~에게)")
            .with_example("七時[に]起きます。")
            .with_example("友達[に]手紙を書きました。"),
        Particle::new("で", "", "place of action, means", "동작의 장소나 수단 (~에서, ~로)")
            .with_example("図書館[で]勉強します。")
            .with_example("バス[で]行きます。"),
        Particle::new("へ", "え", "direction", "이동의 방향 (~로, ~에)")
            .with_example("日本[へ]行きます。"),
        Particle::new("と", "", "together with, quotation", "함께 하는 상대나 나열 (~와/과)")
            .with_example("友達[と]映画を見ました。")
            .with_example("パン[と]牛乳を買いました。"),
        Particle::new("も", "", "also", "추가, 역시 (~도)")
            .with_example("私[も]学生です。"),
        Particle::new("の", "", "possession, modification", "소유나 수식 (~의)")
            .with_example("これは私[の]本です。"),
        Particle::new("から", "", "starting point, reason", "시작점이나 이유 (~부터, ~때문에)")
            .with_example("九時[から]働きます。")
            .with_example("寒い[から]家にいます。"),
        Particle::new("まで", "", "end point", "끝나는 지점 (~까지)")
            .with_example("五時[まで]働きます。"),
        Particle::new("や", "", "non-exhaustive listing", "대표적인 것을 나열 (~이랑, ~나)")
            .with_example("りんご[や]みかんを買いました。"),
    ]
}

#[test]
fn every_class_is_covered() {
    let words = words();

    for class in WordClass::ALL {
        assert!(words.iter().any(|w| w.word_class == *class), "{class}");
    }
}

#[test]
fn every_particle_has_a_blank() {
    for particle in particles() {
        assert!(!particle.examples.is_empty(), "{}", particle.particle);

        for example in &particle.examples {
            let (_, blank, _) = crate::particles::split_blank(example).unwrap();
            assert_eq!(blank, particle.particle);
        }
    }
}
