//! 端到端验收：固定拉丁表 + 引擎的整条流水线。

use numcode_alpha::LatinAlphabet;
use numcode_core::engine::Engine;
use numcode_core::error::DecodeError;
use numcode_core::validator::ZeroPolicy;

fn engine() -> Engine<LatinAlphabet> {
    Engine::new(LatinAlphabet::new())
}

#[test]
fn decode_1234_yields_the_three_valid_readings() {
    let msgs = engine().decode_all("1234").unwrap();
    assert_eq!(msgs.len(), 3);
    for expected in ["abcd", "lcd", "awd"] {
        assert!(msgs.iter().any(|m| m == expected), "missing {expected}");
    }
    // 1|2|34 含组 34（> 26），严格规则下不产出 "abx"
    assert!(!msgs.iter().any(|m| m == "abx"));
}

#[test]
fn decode_11111_yields_exactly_eight_a_k_messages() {
    let msgs = engine().decode_all("11111").unwrap();
    assert_eq!(msgs.len(), 8);
    for m in &msgs {
        assert!(m.chars().all(|c| c == 'a' || c == 'k'));
    }
}

#[test]
fn decode_9_yields_i() {
    assert_eq!(engine().decode_all("9").unwrap(), vec!["i".to_string()]);
}

#[test]
fn invalid_inputs_error_out_before_decoding() {
    assert_eq!(engine().decode_all(""), Err(DecodeError::EmptyInput));
    assert_eq!(
        engine().decode_all("12a3"),
        Err(DecodeError::InvalidDigit { ch: 'a', index: 2 })
    );
}

#[test]
fn zero_policy_is_pinned_both_ways_for_30() {
    // 默认（严格）：无解
    assert!(engine().decode_all("30").unwrap().is_empty());
    // 零宽策略：唯一读法 "3"+"0" -> "c"
    let msgs = engine()
        .zero_policy(ZeroPolicy::EmptyContribution)
        .decode_all("30")
        .unwrap();
    assert_eq!(msgs, vec!["c".to_string()]);
}

#[test]
fn message_length_equals_groups_minus_zero_width_groups() {
    // "2005" 零宽策略：20|0|5 -> "te"（3 组，1 个 0 值组，长度 2）
    let msgs = engine()
        .zero_policy(ZeroPolicy::EmptyContribution)
        .decode_all("2005")
        .unwrap();
    assert!(msgs.iter().any(|m| m == "te"), "got {msgs:?}");
}

#[test]
fn lazy_iteration_streams_the_same_messages() {
    let e = engine();
    let eager = e.decode_all("2626").unwrap();
    let lazy: Vec<String> = e.decode_iter("2626").unwrap().collect();
    assert_eq!(eager, lazy);
}
