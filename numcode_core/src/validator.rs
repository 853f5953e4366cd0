//! `validator`：对单个切分做纯校验（无状态，切分之间彼此独立）。
//!
//! 有效性规则：每个组的数值都落在 [1,26]。
//! 原始行为里 [1,26] 规则与 “0/00 翻译为空” 是一对矛盾（校验永远不会
//! 真正命中 0，因为字符串在构造时已剥掉前导零）；这里用 `ZeroPolicy`
//! 把选择显式化，默认取严格读法。

use crate::model::{Group, Partition};

/// 0 值组的处理策略。
///
/// 两种行为都有测试钉死（见 `engine` 与 `numcode_alpha` 的用例）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroPolicy {
    /// 严格读法：任何 0 值组（"0"、"00"）以及前导零配对（"05"）都使切分无效
    #[default]
    Reject,
    /// 沿用原表行为："0"/"00" 是合法的零宽贡献，不产出字母；
    /// 数值非零的前导零配对（"05"）仍然无效
    EmptyContribution,
}

/// Validator：判定一个切分是否整体有效。
///
/// 无效不是错误，而是过滤决策；无效切分被静默丢弃，从不上抛。
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    zero_policy: ZeroPolicy,
}

impl Validator {
    pub fn new(zero_policy: ZeroPolicy) -> Self {
        Self { zero_policy }
    }

    /// 有效 iff 每个组都可接受。
    pub fn is_valid(&self, partition: &Partition) -> bool {
        partition.groups.iter().all(|&g| self.accepts(g))
    }

    /// 单个组的判定。
    pub fn accepts(&self, group: Group) -> bool {
        let value = group.value();
        match self.zero_policy {
            ZeroPolicy::Reject => {
                // "05" 的数值虽然落在 [1,26]，但不是相邻数字的合法读法
                if matches!(group, Group::Pair(0, _)) {
                    return false;
                }
                (1..=26).contains(&value)
            }
            ZeroPolicy::EmptyContribution => {
                if value == 0 {
                    return true;
                }
                if matches!(group, Group::Pair(0, _)) {
                    return false;
                }
                (1..=26).contains(&value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> Validator {
        Validator::new(ZeroPolicy::Reject)
    }

    fn lenient() -> Validator {
        Validator::new(ZeroPolicy::EmptyContribution)
    }

    #[test]
    fn in_range_groups_are_accepted() {
        for v in 1..=9 {
            assert!(strict().accepts(Group::Single(v)));
        }
        assert!(strict().accepts(Group::Pair(1, 0))); // 10
        assert!(strict().accepts(Group::Pair(2, 6))); // 26
    }

    #[test]
    fn values_above_26_are_rejected() {
        assert!(!strict().accepts(Group::Pair(2, 7))); // 27
        assert!(!strict().accepts(Group::Pair(9, 9))); // 99
        assert!(!lenient().accepts(Group::Pair(3, 0))); // 30
    }

    #[test]
    fn strict_policy_rejects_all_zero_forms() {
        assert!(!strict().accepts(Group::Single(0)));
        assert!(!strict().accepts(Group::Pair(0, 0)));
        assert!(!strict().accepts(Group::Pair(0, 5)));
    }

    #[test]
    fn lenient_policy_keeps_zero_as_zero_width() {
        assert!(lenient().accepts(Group::Single(0)));
        assert!(lenient().accepts(Group::Pair(0, 0)));
        // 前导零但数值非零：两种策略下都不是合法读法
        assert!(!lenient().accepts(Group::Pair(0, 5)));
    }

    #[test]
    fn a_partition_is_only_as_valid_as_its_worst_group() {
        let good = Partition {
            groups: vec![Group::Single(3), Group::Pair(1, 2)],
        };
        let bad = Partition {
            groups: vec![Group::Single(3), Group::Pair(2, 7)],
        };
        assert!(strict().is_valid(&good));
        assert!(!strict().is_valid(&bad));
    }
}
