//! Static substitution tables used by the normalizer
//!
//! Every replacement is already in its terminal form: replacement tokens are
//! never themselves slang keys, so one substitution pass is a fixed point.

use ahash::AHashMap;
use std::sync::LazyLock;

/// Leetspeak stand-ins, applied character by character
pub const LEET_TABLE: &[(char, char)] = &[
    ('0', 'o'),
    ('1', 'i'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('7', 't'),
    ('8', 'b'),
    ('@', 'a'),
];

/// Informal Indonesian -> canonical term. An empty replacement drops the token.
pub const SLANG_TABLE: &[(&str, &str)] = &[
    // pronouns
    ("gw", "saya"),
    ("gue", "saya"),
    ("gua", "saya"),
    ("aku", "saya"),
    ("ak", "saya"),
    ("w", "saya"),
    ("sy", "saya"),
    ("lu", "kamu"),
    ("lo", "kamu"),
    ("elu", "kamu"),
    ("elo", "kamu"),
    ("u", "kamu"),
    ("km", "kamu"),
    ("kmu", "kamu"),
    // question words
    ("gmn", "bagaimana"),
    ("gmna", "bagaimana"),
    ("gimana", "bagaimana"),
    ("bgmn", "bagaimana"),
    ("bgmna", "bagaimana"),
    ("knp", "kenapa"),
    ("knpa", "kenapa"),
    ("napa", "kenapa"),
    ("ngapa", "kenapa"),
    ("ngapain", "sedang apa"),
    ("apaan", "apa"),
    ("apasih", "apa"),
    ("ap", "apa"),
    ("dmn", "dimana"),
    ("dmna", "dimana"),
    ("mna", "mana"),
    ("kpn", "kapan"),
    ("brp", "berapa"),
    ("brpa", "berapa"),
    ("brapa", "berapa"),
    ("ygmana", "yang mana"),
    ("kemana", "ke mana"),
    ("kmana", "ke mana"),
    ("kmn", "ke mana"),
    // negation
    ("gmw", "tidak mau"),
    ("gak", "tidak"),
    ("ga", "tidak"),
    ("g", "tidak"),
    ("gk", "tidak"),
    ("nggak", "tidak"),
    ("ngga", "tidak"),
    ("enggak", "tidak"),
    ("engga", "tidak"),
    ("tdk", "tidak"),
    ("gpp", "tidak apa apa"),
    ("gapapa", "tidak apa apa"),
    // function words
    ("yg", "yang"),
    ("yng", "yang"),
    ("kyg", "yang"),
    ("utk", "untuk"),
    ("tuk", "untuk"),
    ("bwt", "buat"),
    ("bt", "buat"),
    ("dgn", "dengan"),
    ("dg", "dengan"),
    ("sm", "sama"),
    ("sma", "sama"),
    ("org", "orang"),
    ("ornag", "orang"),
    ("orng", "orang"),
    ("jg", "juga"),
    ("jga", "juga"),
    ("jd", "jadi"),
    ("jdi", "jadi"),
    ("udh", "sudah"),
    ("udah", "sudah"),
    ("sdh", "sudah"),
    ("uda", "sudah"),
    ("dah", "sudah"),
    ("blm", "belum"),
    ("blom", "belum"),
    ("blum", "belum"),
    ("tp", "tapi"),
    ("tpi", "tapi"),
    ("ttg", "tentang"),
    ("bgt", "sangat"),
    ("bngt", "sangat"),
    ("bngtt", "sangat"),
    ("banget", "sangat"),
    ("bener", "benar"),
    ("bnr", "benar"),
    ("emg", "memang"),
    ("emang", "memang"),
    ("emng", "memang"),
    ("hrs", "harus"),
    ("hrus", "harus"),
    ("bs", "bisa"),
    ("bsa", "bisa"),
    ("aja", "saja"),
    ("aj", "saja"),
    ("doang", "saja"),
    ("doank", "saja"),
    ("lg", "lagi"),
    ("lgi", "lagi"),
    ("kyk", "seperti"),
    ("kek", "seperti"),
    ("kayak", "seperti"),
    ("spt", "seperti"),
    ("sprti", "seperti"),
    ("klo", "kalau"),
    ("kalo", "kalau"),
    ("kl", "kalau"),
    ("klau", "kalau"),
    ("mksd", "maksud"),
    ("mksud", "maksud"),
    ("mksdnya", "maksudnya"),
    ("dr", "dari"),
    ("dri", "dari"),
    ("pd", "pada"),
    ("pda", "pada"),
    ("spy", "supaya"),
    ("biar", "supaya"),
    ("krn", "karena"),
    ("krna", "karena"),
    ("soalnya", "karena"),
    ("coz", "karena"),
    ("cuz", "karena"),
    ("cos", "karena"),
    ("pdhl", "padahal"),
    ("pdhal", "padahal"),
    ("sbg", "sebagai"),
    ("sbgai", "sebagai"),
    ("mnrt", "menurut"),
    ("bgtu", "begitu"),
    ("gtu", "begitu"),
    ("gitu", "begitu"),
    ("bgni", "begini"),
    ("gni", "begini"),
    ("gini", "begini"),
    ("btw", "ngomong ngomong"),
    ("fyi", "untuk informasi"),
    ("info", "informasi"),
    // quantities and time
    ("bnyk", "banyak"),
    ("byk", "banyak"),
    ("sdikit", "sedikit"),
    ("sdkit", "sedikit"),
    ("dkit", "sedikit"),
    ("dikit", "sedikit"),
    ("bbrp", "beberapa"),
    ("skrg", "sekarang"),
    ("skr", "sekarang"),
    ("skg", "sekarang"),
    ("skrang", "sekarang"),
    ("bsk", "besok"),
    ("kmrn", "kemarin"),
    ("kmrin", "kemarin"),
    ("td", "tadi"),
    ("tdi", "tadi"),
    ("dl", "dulu"),
    ("dlu", "dulu"),
    ("ntr", "nanti"),
    ("ntar", "nanti"),
    ("nnti", "nanti"),
    ("tar", "nanti"),
    ("wkt", "waktu"),
    ("wktu", "waktu"),
    ("trs", "terus"),
    ("trus", "terus"),
    ("trz", "terus"),
    ("msh", "masih"),
    ("msih", "masih"),
    ("masi", "masih"),
    ("smpe", "sampai"),
    ("smp", "sampai"),
    ("sampe", "sampai"),
    ("ampe", "sampai"),
    ("trnyata", "ternyata"),
    ("sbnernya", "sebenarnya"),
    ("sbnrnya", "sebenarnya"),
    ("sbnarnya", "sebenarnya"),
    ("sbnrny", "sebenarnya"),
    ("bnran", "beneran"),
    ("bneran", "beneran"),
    ("srius", "serius"),
    ("srs", "serius"),
    // verbs and requests
    ("abis", "habis"),
    ("abs", "habis"),
    ("hbs", "habis"),
    ("pake", "pakai"),
    ("pk", "pakai"),
    ("pke", "pakai"),
    ("pkai", "pakai"),
    ("hrg", "harga"),
    ("hrga", "harga"),
    ("dpt", "dapat"),
    ("dpat", "dapat"),
    ("dapet", "dapat"),
    ("jgn", "jangan"),
    ("jngn", "jangan"),
    ("jng", "jangan"),
    ("cb", "coba"),
    ("cba", "coba"),
    ("tlg", "tolong"),
    ("tlng", "tolong"),
    ("pls", "tolong"),
    ("please", "tolong"),
    ("pliss", "tolong"),
    ("plis", "tolong"),
    ("mo", "mau"),
    ("mw", "mau"),
    ("pengen", "ingin"),
    ("pgn", "ingin"),
    ("pngen", "ingin"),
    ("pengin", "ingin"),
    ("pingin", "ingin"),
    ("pgnn", "ingin"),
    // thanks and acknowledgement
    ("thx", "terima kasih"),
    ("thanks", "terima kasih"),
    ("thank", "terima kasih"),
    ("tq", "terima kasih"),
    ("makasih", "terima kasih"),
    ("makasi", "terima kasih"),
    ("mksh", "terima kasih"),
    ("mkasih", "terima kasih"),
    ("mksih", "terima kasih"),
    ("trims", "terima kasih"),
    ("trimakasih", "terima kasih"),
    ("trmksh", "terima kasih"),
    ("ok", "oke"),
    ("okay", "oke"),
    ("okey", "oke"),
    ("oks", "oke"),
    ("okee", "oke"),
    ("siap", "oke"),
    ("sip", "oke"),
    ("mantap", "bagus"),
    ("mantep", "bagus"),
    ("mantab", "bagus"),
    ("keren", "bagus"),
    ("cakep", "bagus"),
    // laughter and filler
    ("wkwk", ""),
    ("wkwkwk", ""),
    ("haha", ""),
    ("hahaha", ""),
    ("hihi", ""),
    ("hehe", ""),
    ("xixi", ""),
    ("kwkw", ""),
    ("lol", ""),
    ("lmao", ""),
    // greetings and farewells
    ("hi", "halo"),
    ("hii", "halo"),
    ("hey", "halo"),
    ("hei", "halo"),
    ("hai", "halo"),
    ("haii", "halo"),
    ("hello", "halo"),
    ("helo", "halo"),
    ("p", "halo"),
    ("pp", "halo"),
    ("assalamualaikum", "halo"),
    ("assalamu", "halo"),
    ("asslm", "halo"),
    ("aslm", "halo"),
    ("slm", "halo"),
    ("pagii", "pagi"),
    ("malem", "malam"),
    ("mlm", "malam"),
    ("bye", "sampai jumpa"),
    ("byee", "sampai jumpa"),
    ("dadah", "sampai jumpa"),
    ("dadaa", "sampai jumpa"),
    ("dad", "sampai jumpa"),
];

pub static LEET: LazyLock<AHashMap<char, char>> =
    LazyLock::new(|| LEET_TABLE.iter().copied().collect());

pub static SLANG: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| SLANG_TABLE.iter().copied().collect());
