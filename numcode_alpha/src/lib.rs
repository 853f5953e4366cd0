//! 固定拉丁表：1 -> 'a' … 26 -> 'z'。
//!
//! 与 core 分离的原因：core 只认 `Alphabet` 接缝，不内置具体表；
//! 换映射（其他字母表、其他编码方案）只需要换这个 crate。
//! 表是纯函数，没有全局可变单例，构造后只读。

use numcode_core::translator::Alphabet;

/// 固定 a-z 表。
#[derive(Debug, Clone, Copy, Default)]
pub struct LatinAlphabet;

impl LatinAlphabet {
    pub fn new() -> Self {
        Self
    }
}

impl Alphabet for LatinAlphabet {
    fn letter(&self, value: u8) -> Option<char> {
        if (1..=26).contains(&value) {
            Some(char::from(b'a' + value - 1))
        } else {
            None
        }
    }
}
