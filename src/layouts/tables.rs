//! Declarative key tables for every catalogued layout.
//!
//! Each entry is `(character, scan code, finger)`. When a character is listed
//! twice in one table the later entry wins. Caps tables are not listed here:
//! they are derived from the base table at construction time.

use crate::core_types::{Finger, KeyCode, FINGER_COUNT};

pub type KeyEntry = (char, KeyCode, Finger);

/// Data-only description of one layout.
#[derive(Debug)]
pub struct LayoutSpec {
    pub base: &'static [KeyEntry],
    pub shift: &'static [KeyEntry],
    pub alt: &'static [KeyEntry],
    /// Home scan code per finger, indexed by `Finger::index()`.
    pub home: [KeyCode; FINGER_COUNT],
}

const LP: Finger = Finger::LeftPinky;
const LR: Finger = Finger::LeftRing;
const LM: Finger = Finger::LeftMiddle;
const LI: Finger = Finger::LeftIndex;
const RI: Finger = Finger::RightIndex;
const RM: Finger = Finger::RightMiddle;
const RR: Finger = Finger::RightRing;
const RP: Finger = Finger::RightPinky;
const RT: Finger = Finger::RightThumb;

//                     LP  LR  LM  LI  RI  RM  RR  RP  LT  RT
const HOME_CLASSIC: [KeyCode; FINGER_COUNT] = [30, 31, 32, 33, 36, 37, 38, 39, 42, 57];
const HOME_SHIFTED: [KeyCode; FINGER_COUNT] = [30, 31, 32, 33, 23, 36, 38, 39, 42, 57];

/// Number-row symbols shared by ЙЦУКЕН and Зубачев.
const CLASSIC_NUMBER_SHIFT: [KeyEntry; 12] = [
    ('!', 2, LP), ('"', 3, LR), ('№', 4, LM), (';', 5, LI), ('%', 6, RI), (':', 7, RM),
    ('?', 8, RR), ('*', 9, RP), ('(', 10, RP), (')', 11, RP), ('_', 12, RP), ('+', 13, RP),
];

// ЙЦУКЕН

const YTSUKEN_BASE: &[KeyEntry] = &[
    ('й', 16, LP), ('ц', 17, LR), ('у', 18, LM), ('к', 19, LI), ('е', 20, LI), ('н', 21, RI),
    ('г', 22, RI), ('ш', 23, RM), ('щ', 24, RR), ('з', 25, RP), ('х', 26, RP), ('ъ', 27, RP),
    ('ф', 30, LP), ('ы', 31, LR), ('в', 32, LM), ('а', 33, LI), ('п', 34, LI), ('р', 35, RI),
    ('о', 36, RI), ('л', 37, RM), ('д', 38, RR), ('ж', 39, RP), ('э', 40, RP),
    ('я', 44, LP), ('ч', 45, LR), ('с', 46, LM), ('м', 47, LI), ('и', 48, RI), ('т', 49, RI),
    ('ь', 50, RI), ('б', 51, RM), ('ю', 52, RR),
    ('ё', 41, LP), (' ', 57, RT),
];

const YTSUKEN_SHIFT: &[KeyEntry] = &[
    CLASSIC_NUMBER_SHIFT[0], CLASSIC_NUMBER_SHIFT[1], CLASSIC_NUMBER_SHIFT[2],
    CLASSIC_NUMBER_SHIFT[3], CLASSIC_NUMBER_SHIFT[4], CLASSIC_NUMBER_SHIFT[5],
    CLASSIC_NUMBER_SHIFT[6], CLASSIC_NUMBER_SHIFT[7], CLASSIC_NUMBER_SHIFT[8],
    CLASSIC_NUMBER_SHIFT[9], CLASSIC_NUMBER_SHIFT[10], CLASSIC_NUMBER_SHIFT[11],
    ('/', 43, RP), (',', 53, RP),
];

pub const YTSUKEN: LayoutSpec = LayoutSpec {
    base: YTSUKEN_BASE,
    shift: YTSUKEN_SHIFT,
    alt: &[],
    home: HOME_CLASSIC,
};

// Вызов: rare letters moved to an Alt layer.

const VYZOV_BASE: &[KeyEntry] = &[
    ('б', 16, LP), ('ы', 17, LR), ('о', 18, LM), ('у', 19, LI), ('ь', 20, LI), ('ё', 21, RI),
    ('^', 22, RI), ('д', 23, RI), ('я', 24, RM), ('г', 25, RM), ('ж', 26, RM),
    ('ч', 30, LP), ('и', 31, LR), ('е', 32, LM), ('а', 33, LI), (',', 34, LI), ('н', 36, RI),
    ('т', 37, RM), ('с', 38, RR), ('в', 39, RP), ('з', 40, RR),
    ('х', 45, LR), ('й', 46, LM), ('к', 47, LI), ('_', 48, LI), ('/', 49, RP),
    ('р', 50, RI), ('м', 51, RR), ('ф', 52, RP), ('п', 53, RP),
    (' ', 57, RT), ('₽', 41, RT),
];

const VYZOV_SHIFT: &[KeyEntry] = &[
    ('ё', 2, LP), ('[', 3, LR), ('{', 4, LM), ('}', 5, LI), ('(', 6, RI), ('=', 7, RM),
    ('*', 8, RR), (')', 9, RP), ('+', 10, RP), (']', 11, RP), ('!', 12, RP),
    (';', 34, LI), (':', 35, RI), ('\'', 20, LI), ('-', 48, LI), ('?', 49, RP),
    ('@', 27, RR), ('$', 41, RT),
];

const VYZOV_ALT: &[KeyEntry] = &[
    ('ц', 30, LR), ('щ', 36, RI), ('ъ', 37, RM), ('№', 39, RP), ('э', 32, LM),
];

pub const VYZOV: LayoutSpec = LayoutSpec {
    base: VYZOV_BASE,
    shift: VYZOV_SHIFT,
    alt: VYZOV_ALT,
    home: HOME_CLASSIC,
};

// Русфон: phonetic layout.

const RUSPHONE_BASE: &[KeyEntry] = &[
    ('я', 16, LP), ('в', 17, LR), ('е', 18, LM), ('р', 19, LI), ('т', 20, LI), ('ы', 21, LI),
    ('у', 22, LI), ('и', 23, RI), ('о', 24, RI), ('п', 25, RI), ('ш', 26, RI), ('щ', 27, RI),
    ('а', 30, LP), ('с', 31, LR), ('д', 32, LM), ('ф', 33, LI), ('г', 34, LI), ('х', 35, RM),
    ('й', 36, RM), ('к', 37, RM), ('л', 38, RR), (';', 39, RR), ('\'', 40, RR),
    ('з', 44, LP), ('ь', 45, LR), ('ц', 46, LM), ('ж', 47, LI), ('б', 48, RP), ('н', 49, RP),
    ('м', 50, RP), (',', 51, RP), ('.', 52, RP), ('/', 53, RP),
    ('э', 43, RI), ('ю', 41, RP), (' ', 57, RT),
];

const RUSPHONE_SHIFT: &[KeyEntry] = &[
    ('!', 2, LP), ('@', 3, LR), ('ё', 4, LM), ('Ё', 5, LI), ('ъ', 6, RI), ('Ъ', 7, RM),
    ('&', 8, RR), ('*', 9, RP), ('(', 10, RP), (')', 11, RP), ('_', 12, RP), ('ч', 13, RP),
    (':', 39, RR), ('"', 40, RR), ('<', 51, RP), ('>', 52, RP), ('?', 53, RP),
];

pub const RUSPHONE: LayoutSpec = LayoutSpec {
    base: RUSPHONE_BASE,
    shift: RUSPHONE_SHIFT,
    alt: &[],
    home: HOME_SHIFTED,
};

// Зубачев

const ZUBACHEV_BASE: &[KeyEntry] = &[
    ('ф', 16, LP), ('ы', 17, LR), ('а', 18, LM), ('я', 19, LI), (',', 20, LI), ('й', 21, LI),
    ('м', 22, LI), ('р', 23, RI), ('п', 24, RI), ('х', 25, RI), ('ц', 26, RI), ('щ', 27, RI),
    ('г', 30, LP), ('и', 31, LR), ('у', 32, LM), ('о', 33, LI), ('у', 34, LI), ('л', 35, RM),
    ('т', 36, RM), ('с', 37, RM), ('н', 38, RR), ('з', 39, RR), ('ж', 40, RR),
    ('ш', 44, LP), ('ь', 45, LR), ('ю', 46, LM), ('.', 47, LI), ('э', 48, RP), ('б', 49, RP),
    ('д', 50, RP), ('в', 51, RP), ('к', 52, RP), ('ч', 53, RP),
    ('\\', 43, RI), ('ё', 41, RP), (' ', 57, RT),
];

const ZUBACHEV_SHIFT: &[KeyEntry] = &[
    CLASSIC_NUMBER_SHIFT[0], CLASSIC_NUMBER_SHIFT[1], CLASSIC_NUMBER_SHIFT[2],
    CLASSIC_NUMBER_SHIFT[3], CLASSIC_NUMBER_SHIFT[4], CLASSIC_NUMBER_SHIFT[5],
    CLASSIC_NUMBER_SHIFT[6], CLASSIC_NUMBER_SHIFT[7], CLASSIC_NUMBER_SHIFT[8],
    CLASSIC_NUMBER_SHIFT[9], CLASSIC_NUMBER_SHIFT[10], CLASSIC_NUMBER_SHIFT[11],
    ('/', 43, RI), ('ъ', 45, LR), ('ь', 47, LI),
];

pub const ZUBACHEV: LayoutSpec = LayoutSpec {
    base: ZUBACHEV_BASE,
    shift: ZUBACHEV_SHIFT,
    alt: &[],
    home: HOME_SHIFTED,
};

// Скоропись and Диктор share their letter block.

const SKOROPIS_BASE: &[KeyEntry] = &[
    ('ц', 16, LP), ('ь', 17, LR), ('я', 18, LM), (',', 19, LI), ('.', 20, LI), ('з', 21, LI),
    ('в', 22, LI), ('к', 23, RI), ('д', 24, RI), ('ч', 25, RI), ('ш', 26, RI), ('щ', 27, RI),
    ('у', 30, LP), ('и', 31, LR), ('е', 32, LM), ('о', 33, LI), ('а', 34, LI), ('л', 35, RM),
    ('н', 36, RM), ('т', 37, RM), ('с', 38, RR), ('р', 39, RR), ('й', 40, RR),
    ('ф', 44, LP), ('э', 45, LR), ('х', 46, LM), ('ы', 47, LI), ('ю', 48, RP), ('б', 49, RP),
    ('м', 50, RP), ('п', 51, RP), ('г', 52, RP), ('ж', 53, RP),
    ('"', 43, RI), ('*', 41, RP), (' ', 57, RT),
];

const SKOROPIS_SHIFT: &[KeyEntry] = &[
    ('.', 2, LP), ('ё', 3, LR), ('ъ', 4, LM), ('?', 5, LI), ('!', 6, RI),
    ('-', 8, RR), ('\'', 9, RP), ('(', 10, RP), (')', 11, RP), ('_', 12, RP), ('«', 13, RP),
];

pub const SKOROPIS: LayoutSpec = LayoutSpec {
    base: SKOROPIS_BASE,
    shift: SKOROPIS_SHIFT,
    alt: &[],
    home: HOME_SHIFTED,
};

const DIKTOR_BASE: &[KeyEntry] = &[
    ('ц', 16, LP), ('ь', 17, LR), ('я', 18, LM), (',', 19, LI), ('.', 20, LI), ('з', 21, LI),
    ('в', 22, LI), ('к', 23, RI), ('д', 24, RI), ('ч', 25, RI), ('ш', 26, RI), ('щ', 27, RI),
    ('у', 30, LP), ('и', 31, LR), ('е', 32, LM), ('о', 33, LI), ('а', 34, LI), ('л', 35, RM),
    ('н', 36, RM), ('т', 37, RM), ('с', 38, RR), ('р', 39, RR), ('й', 40, RR),
    ('ф', 44, LP), ('э', 45, LR), ('х', 46, LM), ('ы', 47, LI), ('ю', 48, RP), ('б', 49, RP),
    ('м', 50, RP), ('п', 51, RP), ('г', 52, RP), ('ж', 53, RP),
    (' ', 57, RT), ('ё', 41, RP),
];

const DIKTOR_SHIFT: &[KeyEntry] = &[
    ('ь', 3, LR), ('№', 4, LM), ('%', 5, LI), (':', 6, RI), (';', 7, RM),
    ('-', 8, RR), ('"', 9, RP), ('(', 10, RP), (')', 11, RP), ('_', 12, RP), ('+', 13, RP),
    ('ъ', 17, LR), ('?', 19, LI), ('!', 20, LI),
];

pub const DIKTOR: LayoutSpec = LayoutSpec {
    base: DIKTOR_BASE,
    shift: DIKTOR_SHIFT,
    alt: &[],
    home: HOME_SHIFTED,
};

// Ант

const ANT_BASE: &[KeyEntry] = &[
    ('г', 16, LP), ('п', 17, LR), ('р', 18, LM), ('д', 19, LI), ('м', 20, LI), ('ы', 21, LI),
    ('и', 22, LI), ('я', 23, RI), ('у', 24, RI), ('х', 25, RI), ('ц', 26, RI), ('ж', 27, RI),
    ('в', 30, LP), ('н', 31, LR), ('с', 32, LM), ('т', 33, LI), ('л', 34, LI), ('ь', 35, RM),
    ('о', 36, RM), ('е', 37, RM), ('а', 38, RR), ('к', 39, RR), ('з', 40, RR),
    ('щ', 44, LP), ('й', 45, LR), ('ш', 46, LM), ('ь', 47, LI), (',', 48, RP), ('.', 49, RP),
    ('ю', 50, RP), ('э', 51, RP), ('ё', 52, RP), ('ф', 53, RP),
    ('ч', 43, RI), ('\\', 41, RP), (' ', 57, RT),
];

const ANT_SHIFT: &[KeyEntry] = &[
    ('!', 2, LP), ('?', 3, LR), ('\'', 4, LM), ('"', 5, LI), ('=', 6, RI), ('+', 7, RM),
    ('-', 8, RR), ('*', 9, RP), ('/', 10, RP), ('%', 11, RP), ('«', 12, RP), ('»', 13, RP),
    (';', 48, RP), (':', 49, RP),
];

pub const ANT: LayoutSpec = LayoutSpec {
    base: ANT_BASE,
    shift: ANT_SHIFT,
    alt: &[],
    home: HOME_SHIFTED,
};
