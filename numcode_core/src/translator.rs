//! `translator`：把有效切分翻译为字母消息。
//!
//! 表本身由 `Alphabet` 实现提供；core 不内置具体字母表，
//! 固定的拉丁表（1→'a' … 26→'z'）在 `numcode_alpha` crate 里。
//! 在 validator 接受的域上查表是全函数，翻译阶段不会失败。

use crate::model::Partition;

/// Alphabet：组值 -> 字母贡献。
///
/// 约定：
/// - [1,26] 内返回对应字母
/// - 0 返回 None 表示零宽贡献（配合 `ZeroPolicy::EmptyContribution`）
/// - 域外值返回 None；经过校验的切分不会带域外值
pub trait Alphabet: Send + Sync {
    fn letter(&self, value: u8) -> Option<char>;
}

/// Translator：把一个切分转成消息。
pub trait Translator: Send + Sync {
    fn translate(&self, partition: &Partition) -> String;
}

/// 查表翻译器：逐组查 `Alphabet` 并按序拼接。
pub struct AlphabetTranslator<'a, A> {
    /// 字母表引用（查表发生在这里）
    pub alphabet: &'a A,
}

impl<A: Alphabet> Translator for AlphabetTranslator<'_, A> {
    fn translate(&self, partition: &Partition) -> String {
        let mut message = String::with_capacity(partition.groups.len());
        for group in &partition.groups {
            if let Some(ch) = self.alphabet.letter(group.value()) {
                message.push(ch);
            }
        }
        message
    }
}
