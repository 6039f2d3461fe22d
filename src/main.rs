use std::io::{self, Write};
use std::time::Instant;

use clap::Parser;

use rsubbrute::input::Opts;
use rsubbrute::{logger, ScanConfig, ScanEngine};

#[tokio::main]
async fn main() {
    let opts = Opts::parse();
    logger::init_logger(opts.silent);

    if let Err(e) = run_scan(opts).await {
        eprintln!("错误: {}", e);
        std::process::exit(1);
    }
}

/// 执行完整的扫描流程：枚举、确认、探测
async fn run_scan(opts: Opts) -> Result<(), Box<dyn std::error::Error>> {
    let config = ScanConfig {
        domain: opts.domain.clone(),
        wordlist: Some(opts.wordlist.clone()),
        concurrency: opts.concurrency,
        show_ip: opts.show_ip,
        silent: opts.silent,
        probe_timeout_secs: opts.probe_timeout,
    };
    let engine = ScanEngine::new(config)?;

    if !opts.silent {
        println!("开始爆破子域名: {}", opts.domain);
        println!("使用字典: {}", opts.wordlist);
        println!("并发数: {}", opts.concurrency);
        println!("------------------------");
    }

    let start = Instant::now();
    let resolved = engine.run_enumeration().await?;

    if !opts.silent {
        println!("------------------------");
        println!(
            "扫描完成，共发现 {} 个有效子域名，耗时 {:.2} 秒",
            engine.resolved_count(),
            start.elapsed().as_secs_f64()
        );
    }

    if !confirm_probe()? {
        return Ok(());
    }

    if !opts.silent {
        println!("\n[HTTP探测] 开始对有效子域名进行 HTTP/HTTPS 探测...");
    }

    let findings = engine.run_probe(resolved).await;

    if !opts.silent {
        println!("探测完成，共 {} 个可访问子域名", findings.len());
    }

    Ok(())
}

/// 询问操作员是否进入探测阶段
///
/// 标准输入关闭（非交互环境）时视为否定回答。
fn confirm_probe() -> Result<bool, io::Error> {
    print!("\n是否对发现的子域名进行 HTTP/HTTPS 可访问性探测？(yes/no): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// 只有yes或y（不区分大小写）才进入探测阶段
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("y"));
        assert!(is_affirmative("YES\n"));
        assert!(is_affirmative("  Y  "));

        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yep"));
    }
}
