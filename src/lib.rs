//! # rsubbrute
//!
//! 一个基于字典的子域名暴破工具库，附带HTTP/HTTPS可访问性探测。
//!
//! ## 特性
//!
//! - **有界并发**: 固定数量的工作者从有界队列消费候选词，并发上限精确可控
//! - **两阶段流水线**: DNS枚举产出结果快照，再按需对快照做HTTP/HTTPS探测
//! - **重定向捕获**: 探测不跟随重定向，记录第一个重定向响应的目标
//! - **可注入传输层**: DNS解析和HTTP请求都走接口，便于在测试中替换
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use rsubbrute::brute_force_subdomains;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let results = brute_force_subdomains("example.com", "dict.txt").await?;
//!
//!     println!("发现 {} 个子域名", results.len());
//!     for host in results.iter().take(5) {
//!         println!("  {} -> {}", host.domain, host.ips.join(", "));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## 两阶段使用
//!
//! ```rust,no_run
//! use rsubbrute::{ScanConfig, ScanEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScanConfig {
//!         domain: "example.com".to_string(),
//!         wordlist: Some("dict.txt".to_string()),
//!         concurrency: 50,
//!         ..Default::default()
//!     };
//!
//!     let engine = ScanEngine::new(config)?;
//!     let resolved = engine.run_enumeration().await?;
//!     println!("共发现 {} 个有效子域名", resolved.len());
//!
//!     // 调用方决定是否进入探测阶段
//!     let findings = engine.run_probe(resolved).await;
//!     println!("其中 {} 个可访问", findings.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

// 内部模块
pub mod api;
pub mod brute;
pub mod error;
pub mod input;
pub mod logger;
pub mod model;
pub mod probe;
pub mod resolver;
pub mod state;
pub mod wordlist;

// 重新导出主要的公共API
pub use api::{brute_force_subdomains, ScanConfig, ScanEngine};

// 导出其他有用的类型
pub use brute::EnumerationPool;
pub use error::ScanError;
pub use model::{ProbeFinding, ProbeStatus, ResolvedHost};
pub use probe::{probe_domain, FetchedResponse, HttpFetcher, ProbePool, ReqwestFetcher};
pub use resolver::{DomainLookup, SystemResolver};
pub use state::ScanState;
pub use wordlist::Wordlist;
