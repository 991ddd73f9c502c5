//! King Wen sequence lookup.
//!
//! Maps an (upper, lower) trigram pair to the traditional hexagram ordinal
//! 1..=64 and ordinals to their canonical names.

use crate::trigram::Trigram;

/// Ordinals by `KING_WEN[upper][lower]`, both indexed by packed trigram bits.
///
/// Row and column order: 坤 震 坎 兑 艮 离 巽 乾.
pub const KING_WEN: [[u8; 8]; 8] = [
    // lower: 坤  震  坎  兑  艮  离  巽  乾
    [2, 24, 7, 19, 15, 36, 46, 11],   // upper 坤
    [16, 51, 40, 54, 62, 55, 32, 34], // upper 震
    [8, 3, 29, 60, 39, 63, 48, 5],    // upper 坎
    [45, 17, 47, 58, 31, 49, 28, 43], // upper 兑
    [23, 27, 4, 41, 52, 22, 18, 26],  // upper 艮
    [35, 21, 64, 38, 56, 30, 50, 14], // upper 离
    [20, 42, 59, 61, 53, 37, 57, 9],  // upper 巽
    [12, 25, 6, 10, 33, 13, 44, 1],   // upper 乾
];

/// Canonical names; `HEXAGRAM_NAMES[n - 1]` is the name of ordinal `n`.
pub const HEXAGRAM_NAMES: [&str; 64] = [
    "乾", "坤", "屯", "蒙", "需", "讼", "师", "比", "小畜", "履", "泰", "否", "同人", "大有", "谦", "豫",
    "随", "蛊", "临", "观", "噬嗑", "贲", "剥", "复", "无妄", "大畜", "颐", "大过", "坎", "离", "咸",
    "恒", "遁", "大壮", "晋", "明夷", "家人", "睽", "蹇", "解", "损", "益", "夬", "姤", "萃", "升", "困",
    "井", "革", "鼎", "震", "艮", "渐", "归妹", "丰", "旅", "巽", "兑", "涣", "节", "中孚", "小过",
    "既济", "未济",
];

/// Lowest valid ordinal.
pub const FIRST: u8 = 1;

/// Highest valid ordinal.
pub const LAST: u8 = 64;

/// Whether `ordinal` lies in `1..=64`.
pub fn is_valid(ordinal: i64) -> bool {
    (i64::from(FIRST)..=i64::from(LAST)).contains(&ordinal)
}

/// Look up the ordinal for a trigram pair.
pub fn ordinal(upper: Trigram, lower: Trigram) -> u8 {
    KING_WEN[upper.index()][lower.index()]
}

/// Canonical name of an ordinal, or `None` outside `1..=64`.
pub fn name(ordinal: u8) -> Option<&'static str> {
    if !(FIRST..=LAST).contains(&ordinal) {
        return None;
    }
    HEXAGRAM_NAMES.get(usize::from(ordinal - 1)).copied()
}

/// Inverse lookup: the (upper, lower) trigrams of an ordinal.
pub fn trigrams(ordinal: u8) -> Option<(Trigram, Trigram)> {
    for upper in Trigram::all() {
        for lower in Trigram::all() {
            if self::ordinal(*upper, *lower) == ordinal {
                return Some((*upper, *lower));
            }
        }
    }
    None
}

/// Ordinal for a canonical name. Surrounding whitespace and a trailing `卦`
/// are ignored.
pub fn ordinal_for_name(name: &str) -> Option<u8> {
    let trimmed = name.trim();
    let bare = trimmed.strip_suffix('卦').unwrap_or(trimmed);
    HEXAGRAM_NAMES
        .iter()
        .position(|n| *n == bare)
        .and_then(|i| u8::try_from(i + 1).ok())
}
