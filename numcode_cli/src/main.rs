use std::{
    env,
    io::{self, Write},
    process,
};

use numcode_alpha::LatinAlphabet;
use numcode_core::engine::Engine;
use numcode_core::validator::ZeroPolicy;

/// CLI 只做薄封装：读一行数字串，调用 `decode_all`，一行一条消息输出。
/// 核心（校验/切分/翻译）全部在 `numcode_core`。
#[derive(Debug)]
struct CliOptions {
    /// "0"/"00" 按零宽贡献处理（默认严格拒绝）
    zero_empty: bool,
    /// 只输出切分总数，不物化消息
    count_only: bool,
    /// 输入长度上限（None 用引擎默认值）
    cap: Option<usize>,
    /// 位置参数：给了就单次解码并退出，否则进入 REPL
    digits: Option<String>,
}

fn main() -> io::Result<()> {
    let opts = parse_args();

    let mut engine = Engine::new(LatinAlphabet::new());
    if opts.zero_empty {
        engine = engine.zero_policy(ZeroPolicy::EmptyContribution);
    }
    if let Some(cap) = opts.cap {
        engine = engine.input_cap(cap);
    }

    match opts.digits {
        Some(digits) => one_shot(&engine, &digits, opts.count_only),
        None => repl(&engine, opts.count_only),
    }
}

fn parse_args() -> CliOptions {
    match parse_args_from(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(1)
        }
    }
}

fn parse_args_from(mut args: impl Iterator<Item = String>) -> Result<CliOptions, String> {
    let mut opts = CliOptions {
        zero_empty: false,
        count_only: false,
        cap: None,
        digits: None,
    };
    while let Some(a) = args.next() {
        match a.as_str() {
            "--zero-empty" => opts.zero_empty = true,
            "--count" => opts.count_only = true,
            "--cap" => {
                let Some(n) = args.next().and_then(|v| v.parse::<usize>().ok()) else {
                    return Err("--cap 需要一个正整数参数".to_string());
                };
                opts.cap = Some(n);
            }
            "--help" | "-h" => print_help(),
            // 写错的选项按未知选项拒绝，而不是落到位置参数再报 “非数字字符”
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("未知选项：{other}（--help 查看用法）"));
            }
            _ => opts.digits = Some(a),
        }
    }
    Ok(opts)
}

fn print_help() -> ! {
    println!(
        "用法：numcode_cli [--zero-empty] [--count] [--cap <n>] [digits]\n\
         给出 digits 位置参数则单次解码后退出（输入非法时退出码 1）；\n\
         否则进入交互模式：按行输入数字串，一行一条消息输出，:q 退出。\n\
         --zero-empty  \"0\"/\"00\" 按零宽贡献处理（默认严格拒绝 0 值组）\n\
         --count       只输出切分总数（含无效切分），不物化消息\n\
         --cap <n>     输入长度上限（默认 64，硬上限 185）"
    );
    process::exit(0);
}

fn one_shot(engine: &Engine<LatinAlphabet>, digits: &str, count_only: bool) -> io::Result<()> {
    let mut out = io::stdout();
    if count_only {
        match engine.partition_count(digits) {
            Ok(n) => writeln!(out, "{n}")?,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
        return Ok(());
    }
    match engine.decode_all(digits) {
        Ok(msgs) => print_messages(&mut out, digits, &msgs),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1)
        }
    }
}

fn repl(engine: &Engine<LatinAlphabet>, count_only: bool) -> io::Result<()> {
    let mut out = io::stdout();
    let mut line = String::new();
    writeln!(out, "numcode REPL | 1->a … 26->z，相邻数字可单可双")?;
    writeln!(out, "输入数字串后回车。输入 :q 退出。")?;
    (&mut out).flush()?;

    loop {
        (&mut line).clear();
        print!("digits> ");
        out.flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == ":q" || input == ":quit" || input == ":exit" {
            break;
        }

        if count_only {
            match engine.partition_count(input) {
                Ok(n) => writeln!(out, "{n}")?,
                Err(e) => writeln!(out, "({e})")?,
            }
            continue;
        }

        match engine.decode_all(input) {
            Ok(msgs) => print_messages(&mut out, input, &msgs)?,
            // 输入非法不退出 REPL，报告后继续
            Err(e) => writeln!(out, "({e})")?,
        }
    }

    Ok(())
}

fn print_messages(out: &mut impl Write, digits: &str, msgs: &[String]) -> io::Result<()> {
    if msgs.is_empty() {
        writeln!(out, "{digits}: 无有效解码")?;
        return Ok(());
    }
    for m in msgs {
        writeln!(out, "{m}")?;
    }
    writeln!(out, "({} 条)", msgs.len())?;
    Ok(())
}
