//! `segmenter`：把数字序列切分为宽度 1/2 的数字组（group）。
//!
//! 与“逐位配对再查重”的走法不同，这里对后缀起点做结构递归：
//! - `partitions(n)` = 单一空切分（没有剩余要覆盖）
//! - `partitions(i)` = { [i 单独成组] + p } ∪ { [i,i+1 配对] + p }，
//!   配对分支仅当 i+1 < n 时存在
//!
//! 每个切分恰好生成一次、天然无重复，不需要任何 “已见过” 检查。
//! 切分总数只依赖长度：P(n) = P(n-1) + P(n-2)，P(0)=P(1)=1（Fibonacci 增长，
//! 这是问题本身的规模，不是实现缺陷）。

use crate::model::{DigitSeq, Group, Partition};

/// Segmenter：枚举一个数字序列的全部切分。
pub trait Segmenter: Send + Sync {
    fn enumerate(&self, digits: &DigitSeq) -> Vec<Partition>;
}

/// 后缀递归切分器（默认实现）。
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixSegmenter;

impl SuffixSegmenter {
    pub fn new() -> Self {
        Self
    }

    fn enumerate_from(digits: &[u8], i: usize, prefix: &mut Vec<Group>, out: &mut Vec<Partition>) {
        if i == digits.len() {
            out.push(Partition {
                groups: prefix.clone(),
            });
            return;
        }
        prefix.push(Group::Single(digits[i]));
        Self::enumerate_from(digits, i + 1, prefix, out);
        prefix.pop();

        if i + 1 < digits.len() {
            prefix.push(Group::Pair(digits[i], digits[i + 1]));
            Self::enumerate_from(digits, i + 2, prefix, out);
            prefix.pop();
        }
    }
}

impl Segmenter for SuffixSegmenter {
    fn enumerate(&self, digits: &DigitSeq) -> Vec<Partition> {
        let mut out: Vec<Partition> = Vec::new();
        let mut prefix: Vec<Group> = Vec::new();
        Self::enumerate_from(digits.digits(), 0, &mut prefix, &mut out);
        out
    }
}

/// 切分总数：P(n) = P(n-1) + P(n-2)，与数字取值无关。
///
/// 迭代 DP，O(n) 时间 O(1) 空间。P(185) 是最后一个落在 u128 内的计数，
/// 再往上饱和到 `u128::MAX`，不回绕也不 panic（`engine` 的长度上限
/// 钳在 185，正常路径不会触发饱和）。
pub fn partition_count(n: usize) -> u128 {
    let mut a: u128 = 1; // P(0)
    let mut b: u128 = 1; // P(1)
    for _ in 1..n {
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    if n == 0 { a } else { b }
}

/// 惰性切分迭代器：逐个产出切分，不一次性物化全部结果。
///
/// 大输入下的增量消费入口（`Engine::decode_iter` 基于它）；
/// 产出顺序与 `SuffixSegmenter::enumerate` 完全一致。
pub struct Partitions {
    digits: Vec<u8>,
    /// 显式 DFS 栈：(后缀起点, 到达该起点已选的组序列)
    stack: Vec<(usize, Vec<Group>)>,
}

impl Partitions {
    pub fn new(digits: &DigitSeq) -> Self {
        Self {
            digits: digits.digits().to_vec(),
            stack: vec![(0, Vec::new())],
        }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        while let Some((i, groups)) = self.stack.pop() {
            if i == self.digits.len() {
                return Some(Partition { groups });
            }
            // 先压配对分支、后压单数字分支，弹出顺序即与递归枚举一致
            if i + 1 < self.digits.len() {
                let mut with_pair = groups.clone();
                with_pair.push(Group::Pair(self.digits[i], self.digits[i + 1]));
                self.stack.push((i + 2, with_pair));
            }
            let mut with_single = groups;
            with_single.push(Group::Single(self.digits[i]));
            self.stack.push((i + 1, with_single));
        }
        None
    }
}
