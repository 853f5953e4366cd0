//! `engine`：编排 segmenter -> validator -> translator。
//!
//! 对外入口：
//! - `decode_all`：校验边界输入，物化全部消息（单一入口，替代
//!   读入/校验/解码/翻译/打印的多步散装流程）
//! - `decode_iter`：惰性入口，逐个产出消息（大输入的增量消费）
//! - `partition_count`：只计数不物化（O(n) DP）
//!
//! 数据严格从左到右流动：数字序列 -> 切分集合 -> 有效切分 -> 消息；
//! 各分支之间没有共享可变状态，字母表构造后只读。

use crate::error::DecodeError;
use crate::model::DigitSeq;
use crate::segmenter::{self, Partitions, Segmenter, SuffixSegmenter};
use crate::translator::{Alphabet, AlphabetTranslator, Translator};
use crate::validator::{Validator, ZeroPolicy};

/// 默认输入长度上限：结果规模按 Fibonacci 增长，必须在边界上约束。
pub const DEFAULT_INPUT_CAP: usize = 64;

/// 输入长度硬上限：P(185) 是最后一个不超出 u128 的切分总数。
pub const MAX_INPUT_CAP: usize = 185;

/// 解码引擎：持有字母表与策略开关，本身无可变状态。
pub struct Engine<A> {
    /// 字母表（固定表或测试替身）
    alphabet: A,
    /// 0 值组策略（默认严格拒绝）
    zero_policy: ZeroPolicy,
    /// 输入长度上限
    input_cap: usize,
}

impl<A: Alphabet> Engine<A> {
    pub fn new(alphabet: A) -> Self {
        Self {
            alphabet,
            zero_policy: ZeroPolicy::default(),
            input_cap: DEFAULT_INPUT_CAP,
        }
    }

    /// 设置 0 值组策略。
    pub fn zero_policy(mut self, policy: ZeroPolicy) -> Self {
        self.zero_policy = policy;
        self
    }

    /// 设置输入长度上限；0 回退到默认值，超过 `MAX_INPUT_CAP` 的值
    /// 钳到硬上限（计数在那之后超出 u128）。
    pub fn input_cap(mut self, cap: usize) -> Self {
        self.input_cap = match cap {
            0 => DEFAULT_INPUT_CAP,
            c => c.min(MAX_INPUT_CAP),
        };
        self
    }

    /// 单一入口：返回全部可能消息（不去重；切分本身由构造保证唯一）。
    pub fn decode_all(&self, digits: &str) -> Result<Vec<String>, DecodeError> {
        let seq: DigitSeq = self.parse(digits)?;
        let validator = Validator::new(self.zero_policy);
        let translator = AlphabetTranslator {
            alphabet: &self.alphabet,
        };
        let out: Vec<String> = SuffixSegmenter::new()
            .enumerate(&seq)
            .iter()
            .filter(|p| validator.is_valid(p))
            .map(|p| translator.translate(p))
            .collect();
        Ok(out)
    }

    /// 惰性入口：逐个产出消息，产出顺序与 `decode_all` 一致。
    pub fn decode_iter(&self, digits: &str) -> Result<Decodings<'_, A>, DecodeError> {
        let seq: DigitSeq = self.parse(digits)?;
        Ok(Decodings {
            partitions: Partitions::new(&seq),
            validator: Validator::new(self.zero_policy),
            alphabet: &self.alphabet,
        })
    }

    /// 切分总数（含无效切分）：只依赖长度，不依赖数字取值。
    pub fn partition_count(&self, digits: &str) -> Result<u128, DecodeError> {
        let seq: DigitSeq = self.parse(digits)?;
        Ok(segmenter::partition_count(seq.len()))
    }

    fn parse(&self, digits: &str) -> Result<DigitSeq, DecodeError> {
        let seq = DigitSeq::parse(digits)?;
        if seq.len() > self.input_cap {
            return Err(DecodeError::InputTooLong {
                len: seq.len(),
                cap: self.input_cap,
            });
        }
        Ok(seq)
    }
}

/// `decode_iter` 的消息迭代器：跳过无效切分，只产出消息。
pub struct Decodings<'a, A> {
    partitions: Partitions,
    validator: Validator,
    alphabet: &'a A,
}

impl<A: Alphabet> Iterator for Decodings<'_, A> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let translator = AlphabetTranslator {
            alphabet: self.alphabet,
        };
        loop {
            let p = self.partitions.next()?;
            if self.validator.is_valid(&p) {
                return Some(translator.translate(&p));
            }
        }
    }
}
