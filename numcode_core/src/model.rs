//! 数据模型：`DigitSeq`（合法输入） / `Group`（数字组） / `Partition`（切分）。
//!
//! 约定：
//! - `DigitSeq` 只能通过 `parse` 构造，构造即保证逐位 0-9 且长度 ≥ 1
//! - `Partition` 的核心不变量：按序拼接全部组的底层数字 == 原输入
//! - 所有中间值都由核心创建并拥有，不回借调用方内存

use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;

/// 一个数字组：1 个或 2 个相邻数字作为一个编码单元。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// 单个数字（0-9）
    Single(u8),
    /// 相邻两个数字配对（十位在前）
    Pair(u8, u8),
}

impl Group {
    /// 组的十进制数值：Single 为 0-9，Pair 为 00-99。
    pub fn value(self) -> u8 {
        match self {
            Group::Single(d) => d,
            Group::Pair(hi, lo) => hi * 10 + lo,
        }
    }

    /// 覆盖的原始数字个数（1 或 2）。
    pub fn width(self) -> usize {
        match self {
            Group::Single(_) => 1,
            Group::Pair(_, _) => 2,
        }
    }

    /// 按序追加底层数字（用于核对切分不变量）。
    pub fn extend_digits(self, out: &mut Vec<u8>) {
        match self {
            Group::Single(d) => out.push(d),
            Group::Pair(hi, lo) => {
                out.push(hi);
                out.push(lo);
            }
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Group::Single(d) => write!(f, "{d}"),
            Group::Pair(hi, lo) => write!(f, "{hi}{lo}"),
        }
    }
}

/// 一次完整切分：有序的组序列，恰好无缝、无重叠地覆盖整个输入。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition {
    pub groups: Vec<Group>,
}

impl Partition {
    /// 按序还原全部底层数字；与原输入逐位相等是切分的核心不变量。
    pub fn digits(&self) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::with_capacity(self.width());
        for g in &self.groups {
            g.extend_digits(&mut out);
        }
        out
    }

    /// 覆盖的原始数字总数。
    pub fn width(&self) -> usize {
        self.groups.iter().map(|g| g.width()).sum()
    }
}

/// 经过边界校验的数字序列：逐位 0-9，长度 ≥ 1，整个流程的不可变输入。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSeq(Vec<u8>);

impl DigitSeq {
    /// 边界校验入口：空串与非数字字符在这里被拒绝，之后不再检查。
    pub fn parse(s: &str) -> Result<Self, DecodeError> {
        if s.is_empty() {
            return Err(DecodeError::EmptyInput);
        }
        let mut digits: Vec<u8> = Vec::with_capacity(s.len());
        for (index, ch) in s.char_indices() {
            if ch.is_ascii_digit() {
                digits.push(ch as u8 - b'0');
            } else {
                return Err(DecodeError::InvalidDigit { ch, index });
            }
        }
        Ok(Self(digits))
    }

    /// 数字位视图（0-9 的值，不是 ASCII 字节）。
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 构造保证长度 ≥ 1，这里恒为 false；为惯用法补全。
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for DigitSeq {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, DecodeError> {
        Self::parse(s)
    }
}
