// unicode/property_data.rs - Compiled-in Unicode name tables.
//
// Unicode 15.0 block and script names. Property names are sorted by byte
// value for binary search; blocks and scripts feed normalized hash sets.

use super::PropertyClass;

/// General categories, POSIX names and `java*` predicates, sorted.
pub(super) static PROPERTY_NAMES: &[(&str, PropertyClass)] = &[
    ("ASCII", PropertyClass::Posix),
    ("Alnum", PropertyClass::Posix),
    ("Alpha", PropertyClass::Posix),
    ("Blank", PropertyClass::Posix),
    ("C", PropertyClass::GeneralCategory),
    ("Cc", PropertyClass::GeneralCategory),
    ("Cf", PropertyClass::GeneralCategory),
    ("Cn", PropertyClass::GeneralCategory),
    ("Cntrl", PropertyClass::Posix),
    ("Co", PropertyClass::GeneralCategory),
    ("Cs", PropertyClass::GeneralCategory),
    ("Digit", PropertyClass::Posix),
    ("Graph", PropertyClass::Posix),
    ("L", PropertyClass::GeneralCategory),
    ("L1", PropertyClass::GeneralCategory),
    ("LC", PropertyClass::GeneralCategory),
    ("LD", PropertyClass::GeneralCategory),
    ("Ll", PropertyClass::GeneralCategory),
    ("Lm", PropertyClass::GeneralCategory),
    ("Lo", PropertyClass::GeneralCategory),
    ("Lower", PropertyClass::Posix),
    ("Lt", PropertyClass::GeneralCategory),
    ("Lu", PropertyClass::GeneralCategory),
    ("M", PropertyClass::GeneralCategory),
    ("Mc", PropertyClass::GeneralCategory),
    ("Me", PropertyClass::GeneralCategory),
    ("Mn", PropertyClass::GeneralCategory),
    ("N", PropertyClass::GeneralCategory),
    ("Nd", PropertyClass::GeneralCategory),
    ("Nl", PropertyClass::GeneralCategory),
    ("No", PropertyClass::GeneralCategory),
    ("P", PropertyClass::GeneralCategory),
    ("Pc", PropertyClass::GeneralCategory),
    ("Pd", PropertyClass::GeneralCategory),
    ("Pe", PropertyClass::GeneralCategory),
    ("Pf", PropertyClass::GeneralCategory),
    ("Pi", PropertyClass::GeneralCategory),
    ("Po", PropertyClass::GeneralCategory),
    ("Print", PropertyClass::Posix),
    ("Ps", PropertyClass::GeneralCategory),
    ("Punct", PropertyClass::Posix),
    ("S", PropertyClass::GeneralCategory),
    ("Sc", PropertyClass::GeneralCategory),
    ("Sk", PropertyClass::GeneralCategory),
    ("Sm", PropertyClass::GeneralCategory),
    ("So", PropertyClass::GeneralCategory),
    ("Space", PropertyClass::Posix),
    ("Upper", PropertyClass::Posix),
    ("XDigit", PropertyClass::Posix),
    ("Z", PropertyClass::GeneralCategory),
    ("Zl", PropertyClass::GeneralCategory),
    ("Zp", PropertyClass::GeneralCategory),
    ("Zs", PropertyClass::GeneralCategory),
    ("all", PropertyClass::GeneralCategory),
    ("javaAlphabetic", PropertyClass::JavaPredicate),
    ("javaDefined", PropertyClass::JavaPredicate),
    ("javaDigit", PropertyClass::JavaPredicate),
    ("javaISOControl", PropertyClass::JavaPredicate),
    ("javaIdentifierIgnorable", PropertyClass::JavaPredicate),
    ("javaIdeographic", PropertyClass::JavaPredicate),
    ("javaJavaIdentifierPart", PropertyClass::JavaPredicate),
    ("javaJavaIdentifierStart", PropertyClass::JavaPredicate),
    ("javaLetter", PropertyClass::JavaPredicate),
    ("javaLetterOrDigit", PropertyClass::JavaPredicate),
    ("javaLowerCase", PropertyClass::JavaPredicate),
    ("javaMirrored", PropertyClass::JavaPredicate),
    ("javaSpaceChar", PropertyClass::JavaPredicate),
    ("javaTitleCase", PropertyClass::JavaPredicate),
    ("javaUnicodeIdentifierPart", PropertyClass::JavaPredicate),
    ("javaUnicodeIdentifierStart", PropertyClass::JavaPredicate),
    ("javaUpperCase", PropertyClass::JavaPredicate),
    ("javaWhitespace", PropertyClass::JavaPredicate),
];

/// Binary properties accepted after `Is`, normalized (uppercase, no separators).
pub(super) static BINARY_PROPERTIES: &[&str] = &[
    "ALPHABETIC", "ASSIGNED", "CONTROL", "DIGIT",
    "EMOJI", "EMOJICOMPONENT", "EMOJIMODIFIER", "EMOJIMODIFIERBASE",
    "EMOJIPRESENTATION", "EXTENDEDPICTOGRAPHIC", "HEXDIGIT", "IDEOGRAPHIC",
    "JOINCONTROL", "LETTER", "LOWERCASE", "NONCHARACTERCODEPOINT",
    "PUNCTUATION", "TITLECASE", "UPPERCASE", "WHITESPACE",
];

/// Canonical block names, followed by legacy aliases.
pub(super) static UNICODE_BLOCKS: &[&str] = &[
    "Basic Latin",
    "Latin-1 Supplement",
    "Latin Extended-A",
    "Latin Extended-B",
    "IPA Extensions",
    "Spacing Modifier Letters",
    "Combining Diacritical Marks",
    "Greek and Coptic",
    "Cyrillic",
    "Cyrillic Supplement",
    "Armenian",
    "Hebrew",
    "Arabic",
    "Syriac",
    "Arabic Supplement",
    "Thaana",
    "NKo",
    "Samaritan",
    "Mandaic",
    "Syriac Supplement",
    "Arabic Extended-B",
    "Arabic Extended-A",
    "Devanagari",
    "Bengali",
    "Gurmukhi",
    "Gujarati",
    "Oriya",
    "Tamil",
    "Telugu",
    "Kannada",
    "Malayalam",
    "Sinhala",
    "Thai",
    "Lao",
    "Tibetan",
    "Myanmar",
    "Georgian",
    "Hangul Jamo",
    "Ethiopic",
    "Ethiopic Supplement",
    "Cherokee",
    "Unified Canadian Aboriginal Syllabics",
    "Ogham",
    "Runic",
    "Tagalog",
    "Hanunoo",
    "Buhid",
    "Tagbanwa",
    "Khmer",
    "Mongolian",
    "Unified Canadian Aboriginal Syllabics Extended",
    "Limbu",
    "Tai Le",
    "New Tai Lue",
    "Khmer Symbols",
    "Buginese",
    "Tai Tham",
    "Combining Diacritical Marks Extended",
    "Balinese",
    "Sundanese",
    "Batak",
    "Lepcha",
    "Ol Chiki",
    "Cyrillic Extended-C",
    "Georgian Extended",
    "Sundanese Supplement",
    "Vedic Extensions",
    "Phonetic Extensions",
    "Phonetic Extensions Supplement",
    "Combining Diacritical Marks Supplement",
    "Latin Extended Additional",
    "Greek Extended",
    "General Punctuation",
    "Superscripts and Subscripts",
    "Currency Symbols",
    "Combining Diacritical Marks for Symbols",
    "Letterlike Symbols",
    "Number Forms",
    "Arrows",
    "Mathematical Operators",
    "Miscellaneous Technical",
    "Control Pictures",
    "Optical Character Recognition",
    "Enclosed Alphanumerics",
    "Box Drawing",
    "Block Elements",
    "Geometric Shapes",
    "Miscellaneous Symbols",
    "Dingbats",
    "Miscellaneous Mathematical Symbols-A",
    "Supplemental Arrows-A",
    "Braille Patterns",
    "Supplemental Arrows-B",
    "Miscellaneous Mathematical Symbols-B",
    "Supplemental Mathematical Operators",
    "Miscellaneous Symbols and Arrows",
    "Glagolitic",
    "Latin Extended-C",
    "Coptic",
    "Georgian Supplement",
    "Tifinagh",
    "Ethiopic Extended",
    "Cyrillic Extended-A",
    "Supplemental Punctuation",
    "CJK Radicals Supplement",
    "Kangxi Radicals",
    "Ideographic Description Characters",
    "CJK Symbols and Punctuation",
    "Hiragana",
    "Katakana",
    "Bopomofo",
    "Hangul Compatibility Jamo",
    "Kanbun",
    "Bopomofo Extended",
    "CJK Strokes",
    "Katakana Phonetic Extensions",
    "Enclosed CJK Letters and Months",
    "CJK Compatibility",
    "CJK Unified Ideographs Extension A",
    "Yijing Hexagram Symbols",
    "CJK Unified Ideographs",
    "Yi Syllables",
    "Yi Radicals",
    "Lisu",
    "Vai",
    "Cyrillic Extended-B",
    "Bamum",
    "Modifier Tone Letters",
    "Latin Extended-D",
    "Syloti Nagri",
    "Common Indic Number Forms",
    "Phags-pa",
    "Saurashtra",
    "Devanagari Extended",
    "Kayah Li",
    "Rejang",
    "Hangul Jamo Extended-A",
    "Javanese",
    "Myanmar Extended-B",
    "Cham",
    "Myanmar Extended-A",
    "Tai Viet",
    "Meetei Mayek Extensions",
    "Ethiopic Extended-A",
    "Latin Extended-E",
    "Cherokee Supplement",
    "Meetei Mayek",
    "Hangul Syllables",
    "Hangul Jamo Extended-B",
    "High Surrogates",
    "High Private Use Surrogates",
    "Low Surrogates",
    "Private Use Area",
    "CJK Compatibility Ideographs",
    "Alphabetic Presentation Forms",
    "Arabic Presentation Forms-A",
    "Variation Selectors",
    "Vertical Forms",
    "Combining Half Marks",
    "CJK Compatibility Forms",
    "Small Form Variants",
    "Arabic Presentation Forms-B",
    "Halfwidth and Fullwidth Forms",
    "Specials",
    "Linear B Syllabary",
    "Linear B Ideograms",
    "Aegean Numbers",
    "Ancient Greek Numbers",
    "Ancient Symbols",
    "Phaistos Disc",
    "Lycian",
    "Carian",
    "Coptic Epact Numbers",
    "Old Italic",
    "Gothic",
    "Old Permic",
    "Ugaritic",
    "Old Persian",
    "Deseret",
    "Shavian",
    "Osmanya",
    "Osage",
    "Elbasan",
    "Caucasian Albanian",
    "Vithkuqi",
    "Linear A",
    "Latin Extended-F",
    "Cypriot Syllabary",
    "Imperial Aramaic",
    "Palmyrene",
    "Nabataean",
    "Hatran",
    "Phoenician",
    "Lydian",
    "Meroitic Hieroglyphs",
    "Meroitic Cursive",
    "Kharoshthi",
    "Old South Arabian",
    "Old North Arabian",
    "Manichaean",
    "Avestan",
    "Inscriptional Parthian",
    "Inscriptional Pahlavi",
    "Psalter Pahlavi",
    "Old Turkic",
    "Old Hungarian",
    "Hanifi Rohingya",
    "Rumi Numeral Symbols",
    "Yezidi",
    "Arabic Extended-C",
    "Old Sogdian",
    "Sogdian",
    "Old Uyghur",
    "Chorasmian",
    "Elymaic",
    "Brahmi",
    "Kaithi",
    "Sora Sompeng",
    "Chakma",
    "Mahajani",
    "Sharada",
    "Sinhala Archaic Numbers",
    "Khojki",
    "Multani",
    "Khudawadi",
    "Grantha",
    "Newa",
    "Tirhuta",
    "Siddham",
    "Modi",
    "Mongolian Supplement",
    "Takri",
    "Ahom",
    "Dogra",
    "Warang Citi",
    "Dives Akuru",
    "Nandinagari",
    "Zanabazar Square",
    "Soyombo",
    "Unified Canadian Aboriginal Syllabics Extended-A",
    "Pau Cin Hau",
    "Devanagari Extended-A",
    "Bhaiksuki",
    "Marchen",
    "Masaram Gondi",
    "Gunjala Gondi",
    "Makasar",
    "Kawi",
    "Lisu Supplement",
    "Tamil Supplement",
    "Cuneiform",
    "Cuneiform Numbers and Punctuation",
    "Early Dynastic Cuneiform",
    "Cypro-Minoan",
    "Egyptian Hieroglyphs",
    "Egyptian Hieroglyph Format Controls",
    "Anatolian Hieroglyphs",
    "Bamum Supplement",
    "Mro",
    "Tangsa",
    "Bassa Vah",
    "Pahawh Hmong",
    "Medefaidrin",
    "Miao",
    "Ideographic Symbols and Punctuation",
    "Tangut",
    "Tangut Components",
    "Khitan Small Script",
    "Tangut Supplement",
    "Kana Extended-B",
    "Kana Supplement",
    "Kana Extended-A",
    "Small Kana Extension",
    "Nushu",
    "Duployan",
    "Shorthand Format Controls",
    "Znamenny Musical Notation",
    "Byzantine Musical Symbols",
    "Musical Symbols",
    "Ancient Greek Musical Notation",
    "Kaktovik Numerals",
    "Mayan Numerals",
    "Tai Xuan Jing Symbols",
    "Counting Rod Numerals",
    "Mathematical Alphanumeric Symbols",
    "Sutton SignWriting",
    "Latin Extended-G",
    "Glagolitic Supplement",
    "Cyrillic Extended-D",
    "Nyiakeng Puachue Hmong",
    "Toto",
    "Wancho",
    "Nag Mundari",
    "Ethiopic Extended-B",
    "Mende Kikakui",
    "Adlam",
    "Indic Siyaq Numbers",
    "Ottoman Siyaq Numbers",
    "Arabic Mathematical Alphabetic Symbols",
    "Mahjong Tiles",
    "Domino Tiles",
    "Playing Cards",
    "Enclosed Alphanumeric Supplement",
    "Enclosed Ideographic Supplement",
    "Miscellaneous Symbols and Pictographs",
    "Emoticons",
    "Ornamental Dingbats",
    "Transport and Map Symbols",
    "Alchemical Symbols",
    "Geometric Shapes Extended",
    "Supplemental Arrows-C",
    "Supplemental Symbols and Pictographs",
    "Chess Symbols",
    "Symbols and Pictographs Extended-A",
    "Symbols for Legacy Computing",
    "CJK Unified Ideographs Extension B",
    "CJK Unified Ideographs Extension C",
    "CJK Unified Ideographs Extension D",
    "CJK Unified Ideographs Extension E",
    "CJK Unified Ideographs Extension F",
    "CJK Compatibility Ideographs Supplement",
    "CJK Unified Ideographs Extension G",
    "CJK Unified Ideographs Extension H",
    "Tags",
    "Variation Selectors Supplement",
    "Supplementary Private Use Area-A",
    "Supplementary Private Use Area-B",
    "Greek",
    "Cyrillic Supplementary",
    "Combining Marks for Symbols",
    "Surrogates Area",
];

/// Script name and its ISO 15924 code.
pub(super) static UNICODE_SCRIPTS: &[(&str, &str)] = &[
    ("COMMON", "Zyyy"),
    ("LATIN", "Latn"),
    ("GREEK", "Grek"),
    ("CYRILLIC", "Cyrl"),
    ("ARMENIAN", "Armn"),
    ("HEBREW", "Hebr"),
    ("ARABIC", "Arab"),
    ("SYRIAC", "Syrc"),
    ("THAANA", "Thaa"),
    ("DEVANAGARI", "Deva"),
    ("BENGALI", "Beng"),
    ("GURMUKHI", "Guru"),
    ("GUJARATI", "Gujr"),
    ("ORIYA", "Orya"),
    ("TAMIL", "Taml"),
    ("TELUGU", "Telu"),
    ("KANNADA", "Knda"),
    ("MALAYALAM", "Mlym"),
    ("SINHALA", "Sinh"),
    ("THAI", "Thai"),
    ("LAO", "Laoo"),
    ("TIBETAN", "Tibt"),
    ("MYANMAR", "Mymr"),
    ("GEORGIAN", "Geor"),
    ("HANGUL", "Hang"),
    ("ETHIOPIC", "Ethi"),
    ("CHEROKEE", "Cher"),
    ("CANADIAN_ABORIGINAL", "Cans"),
    ("OGHAM", "Ogam"),
    ("RUNIC", "Runr"),
    ("KHMER", "Khmr"),
    ("MONGOLIAN", "Mong"),
    ("HIRAGANA", "Hira"),
    ("KATAKANA", "Kana"),
    ("BOPOMOFO", "Bopo"),
    ("HAN", "Hani"),
    ("YI", "Yiii"),
    ("OLD_ITALIC", "Ital"),
    ("GOTHIC", "Goth"),
    ("DESERET", "Dsrt"),
    ("INHERITED", "Zinh"),
    ("TAGALOG", "Tglg"),
    ("HANUNOO", "Hano"),
    ("BUHID", "Buhd"),
    ("TAGBANWA", "Tagb"),
    ("LIMBU", "Limb"),
    ("TAI_LE", "Tale"),
    ("LINEAR_B", "Linb"),
    ("UGARITIC", "Ugar"),
    ("SHAVIAN", "Shaw"),
    ("OSMANYA", "Osma"),
    ("CYPRIOT", "Cprt"),
    ("BRAILLE", "Brai"),
    ("BUGINESE", "Bugi"),
    ("COPTIC", "Copt"),
    ("NEW_TAI_LUE", "Talu"),
    ("GLAGOLITIC", "Glag"),
    ("TIFINAGH", "Tfng"),
    ("SYLOTI_NAGRI", "Sylo"),
    ("OLD_PERSIAN", "Xpeo"),
    ("KHAROSHTHI", "Khar"),
    ("BALINESE", "Bali"),
    ("CUNEIFORM", "Xsux"),
    ("PHOENICIAN", "Phnx"),
    ("PHAGS_PA", "Phag"),
    ("NKO", "Nkoo"),
    ("SUNDANESE", "Sund"),
    ("BATAK", "Batk"),
    ("LEPCHA", "Lepc"),
    ("OL_CHIKI", "Olck"),
    ("VAI", "Vaii"),
    ("SAURASHTRA", "Saur"),
    ("KAYAH_LI", "Kali"),
    ("REJANG", "Rjng"),
    ("LYCIAN", "Lyci"),
    ("CARIAN", "Cari"),
    ("LYDIAN", "Lydi"),
    ("CHAM", "Cham"),
    ("TAI_THAM", "Lana"),
    ("TAI_VIET", "Tavt"),
    ("AVESTAN", "Avst"),
    ("EGYPTIAN_HIEROGLYPHS", "Egyp"),
    ("SAMARITAN", "Samr"),
    ("MANDAIC", "Mand"),
    ("LISU", "Lisu"),
    ("BAMUM", "Bamu"),
    ("JAVANESE", "Java"),
    ("MEETEI_MAYEK", "Mtei"),
    ("IMPERIAL_ARAMAIC", "Armi"),
    ("OLD_SOUTH_ARABIAN", "Sarb"),
    ("INSCRIPTIONAL_PARTHIAN", "Prti"),
    ("INSCRIPTIONAL_PAHLAVI", "Phli"),
    ("OLD_TURKIC", "Orkh"),
    ("BRAHMI", "Brah"),
    ("KAITHI", "Kthi"),
    ("MEROITIC_HIEROGLYPHS", "Mero"),
    ("MEROITIC_CURSIVE", "Merc"),
    ("SORA_SOMPENG", "Sora"),
    ("CHAKMA", "Cakm"),
    ("SHARADA", "Shrd"),
    ("TAKRI", "Takr"),
    ("MIAO", "Plrd"),
    ("CAUCASIAN_ALBANIAN", "Aghb"),
    ("BASSA_VAH", "Bass"),
    ("DUPLOYAN", "Dupl"),
    ("ELBASAN", "Elba"),
    ("GRANTHA", "Gran"),
    ("PAHAWH_HMONG", "Hmng"),
    ("KHOJKI", "Khoj"),
    ("LINEAR_A", "Lina"),
    ("MAHAJANI", "Mahj"),
    ("MANICHAEAN", "Mani"),
    ("MENDE_KIKAKUI", "Mend"),
    ("MODI", "Modi"),
    ("MRO", "Mroo"),
    ("OLD_NORTH_ARABIAN", "Narb"),
    ("NABATAEAN", "Nbat"),
    ("PALMYRENE", "Palm"),
    ("PAU_CIN_HAU", "Pauc"),
    ("OLD_PERMIC", "Perm"),
    ("PSALTER_PAHLAVI", "Phlp"),
    ("SIDDHAM", "Sidd"),
    ("KHUDAWADI", "Sind"),
    ("TIRHUTA", "Tirh"),
    ("WARANG_CITI", "Wara"),
    ("AHOM", "Ahom"),
    ("ANATOLIAN_HIEROGLYPHS", "Hluw"),
    ("HATRAN", "Hatr"),
    ("MULTANI", "Mult"),
    ("OLD_HUNGARIAN", "Hung"),
    ("SIGNWRITING", "Sgnw"),
    ("ADLAM", "Adlm"),
    ("BHAIKSUKI", "Bhks"),
    ("MARCHEN", "Marc"),
    ("NEWA", "Newa"),
    ("OSAGE", "Osge"),
    ("TANGUT", "Tang"),
    ("MASARAM_GONDI", "Gonm"),
    ("NUSHU", "Nshu"),
    ("SOYOMBO", "Soyo"),
    ("ZANABAZAR_SQUARE", "Zanb"),
    ("HANIFI_ROHINGYA", "Rohg"),
    ("OLD_SOGDIAN", "Sogo"),
    ("SOGDIAN", "Sogd"),
    ("DOGRA", "Dogr"),
    ("GUNJALA_GONDI", "Gong"),
    ("MAKASAR", "Maka"),
    ("MEDEFAIDRIN", "Medf"),
    ("ELYMAIC", "Elym"),
    ("NANDINAGARI", "Nand"),
    ("NYIAKENG_PUACHUE_HMONG", "Hmnp"),
    ("WANCHO", "Wcho"),
    ("YEZIDI", "Yezi"),
    ("CHORASMIAN", "Chrs"),
    ("DIVES_AKURU", "Diak"),
    ("KHITAN_SMALL_SCRIPT", "Kits"),
    ("VITHKUQI", "Vith"),
    ("OLD_UYGHUR", "Ougr"),
    ("CYPRO_MINOAN", "Cpmn"),
    ("TANGSA", "Tnsa"),
    ("TOTO", "Toto"),
    ("KAWI", "Kawi"),
    ("NAG_MUNDARI", "Nagm"),
    ("UNKNOWN", "Zzzz"),
];

/// POSIX bracket expression names, `[:name:]`.
pub(super) static POSIX_BRACKETS: &[&str] = &[
    "alnum", "alpha", "blank", "cntrl", "digit", "graph", "lower", "print", "punct", "space",
    "upper", "xdigit", "ascii", "word",
];
