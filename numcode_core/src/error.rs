//! `error`：边界校验错误。
//!
//! 约定：
//! - 校验只发生一次，在进入核心之前；出错时不做任何解码工作，也不返回部分结果
//! - 通过校验之后，枚举/校验/翻译在合法输入上都是全函数，不会再失败
//! - “切分无效” 不是错误，是过滤决策（静默丢弃，见 `validator`）

use thiserror::Error;

/// 输入边界错误：调用方完全可恢复（重新输入或拒绝请求）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// 输入为空（数字序列长度必须 ≥ 1）
    #[error("empty input: a digit sequence must contain at least one digit")]
    EmptyInput,
    /// 输入中出现 '0'-'9' 以外的字符
    #[error("invalid character {ch:?} at byte {index}: only '0'-'9' accepted")]
    InvalidDigit { ch: char, index: usize },
    /// 输入超过长度上限（结果规模按 Fibonacci 增长，必须在边界约束）
    #[error("input of {len} digits exceeds the cap of {cap}")]
    InputTooLong { len: usize, cap: usize },
}
