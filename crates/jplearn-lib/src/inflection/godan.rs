/// The kana row used to inflect a group 1 verb ending in a given mora.
#[derive(Debug, Clone, Copy)]
pub(super) struct Godan {
    pub(super) a: &'static str,
    pub(super) i: &'static str,
    pub(super) u: &'static str,
    pub(super) e: &'static str,
    pub(super) o: &'static str,
    pub(super) te: &'static str,
    pub(super) past: &'static str,
    pub(super) tara: &'static str,
}

macro_rules! row {
    ($name:ident, $a:literal $i:literal $u:literal $e:literal $o:literal, $te:literal, $past:literal, $tara:literal) => {
        pub(super) static $name: &Godan = &Godan {
            a: $a,
            i: $i,
            u: $u,
            e: $e,
            o: $o,
            te: $te,
            past: $past,
            tara: $tara,
        };
    };
}

// Negative and passive of う verbs use わ rather than あ.
row!(U, "わ" "い" "う" "え" "お", "って", "った", "ったら");
row!(TSU, "た" "ち" "つ" "て" "と", "って", "った", "ったら");
row!(RU, "ら" "り" "る" "れ" "ろ", "って", "った", "ったら");
row!(KU, "か" "き" "く" "け" "こ", "いて", "いた", "いたら");
row!(GU, "が" "ぎ" "ぐ" "げ" "ご", "いで", "いだ", "いだら");
row!(MU, "ま" "み" "む" "め" "も", "んで", "んだ", "んだら");
row!(BU, "ば" "び" "ぶ" "べ" "ぼ", "んで", "んだ", "んだら");
row!(NU, "な" "に" "ぬ" "ね" "の", "んで", "んだ", "んだら");
row!(SU, "さ" "し" "す" "せ" "そ", "して", "した", "したら");
row!(IKU, "か" "き" "く" "け" "こ", "って", "った", "ったら");

/// Look up the row for a group 1 verb.
///
/// `text` and `reading` are the full dictionary form and its reading, used to
/// single out 行く and its compounds.
pub(super) fn lookup(text: &str, reading: &str, last: char) -> Option<&'static Godan> {
    let row = match last {
        'う' => U,
        'つ' => TSU,
        'る' => RU,
        'く' if is_iku(text, reading) => IKU,
        'く' => KU,
        'ぐ' => GU,
        'む' => MU,
        'ぶ' => BU,
        'ぬ' => NU,
        'す' => SU,
        _ => return None,
    };

    Some(row)
}

fn is_iku(text: &str, reading: &str) -> bool {
    if !(reading.ends_with("いく") || reading.ends_with("ゆく")) {
        return false;
    }

    text.ends_with("行く") || text.ends_with("逝く") || text == reading
}
