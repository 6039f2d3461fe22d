use clap::{ArgAction, Parser};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "rsubbrute")]
#[command(version = "0.1")]
#[command(about = "A tool for brute-forcing subdomains with HTTP/HTTPS probing", long_about = None, arg_required_else_help = true)]
pub struct Opts {
    /// need scan domain
    #[arg(short, long)]
    pub domain: String,

    /// dic path
    #[arg(short, long)]
    pub wordlist: String,

    /// 并发请求数量
    #[arg(short, long, default_value_t = 50)]
    pub concurrency: usize,

    /// 显示子域名对应的IP地址
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub show_ip: bool,

    /// 只输出域名本身
    #[arg(short, long, default_value_t = false)]
    pub silent: bool,

    /// HTTP探测超时（秒）
    #[arg(long, default_value_t = 5)]
    pub probe_timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Opts::try_parse_from([
            "rsubbrute",
            "--domain",
            "example.com",
            "--wordlist",
            "dict.txt",
        ])
        .unwrap();

        assert_eq!(opts.domain, "example.com");
        assert_eq!(opts.wordlist, "dict.txt");
        assert_eq!(opts.concurrency, 50);
        assert!(opts.show_ip);
        assert!(!opts.silent);
        assert_eq!(opts.probe_timeout, 5);
    }

    #[test]
    fn test_show_ip_can_be_disabled() {
        let opts = Opts::try_parse_from([
            "rsubbrute",
            "-d",
            "example.com",
            "-w",
            "dict.txt",
            "--show-ip",
            "false",
        ])
        .unwrap();
        assert!(!opts.show_ip);
    }

    #[test]
    fn test_domain_is_required() {
        let result = Opts::try_parse_from(["rsubbrute", "--wordlist", "dict.txt"]);
        assert!(result.is_err());
    }
}
