//! `numcode_core`：纯逻辑层（无 I/O），数字串 -> 全部可能字母消息。
//!
//! 设计目标：
//! - **核心可复用**：CLI/服务端/测试都复用同一套解码逻辑
//! - **分层清晰**：engine -> segmenter（切分） -> validator（校验） -> translator（翻译）-> 输出消息
//! - **易演进**：字母表（`Alphabet`）与校验策略（`ZeroPolicy`）都是可替换的接缝
pub mod engine;
pub mod error;
pub mod model;
pub mod segmenter;
pub mod translator;
pub mod validator;
