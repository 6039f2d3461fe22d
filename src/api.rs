use std::sync::Arc;
use std::time::Duration;

use crate::brute::EnumerationPool;
use crate::error::ScanError;
use crate::model::{ProbeFinding, ResolvedHost};
use crate::probe::{HttpFetcher, ProbePool, ReqwestFetcher, DEFAULT_PROBE_TIMEOUT_SECS};
use crate::resolver::{DomainLookup, SystemResolver};
use crate::state::ScanState;
use crate::wordlist::Wordlist;

/// 子域名扫描配置
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// 目标主域名
    pub domain: String,
    /// 字典文件路径
    pub wordlist: Option<String>,
    /// 两个阶段共用的并发上限
    pub concurrency: usize,
    /// 是否显示子域名对应的IP地址
    pub show_ip: bool,
    /// 是否静默模式
    pub silent: bool,
    /// 每次HTTP/HTTPS请求的超时（秒）
    pub probe_timeout_secs: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            domain: String::new(),
            wordlist: None,
            concurrency: 50,
            show_ip: true,
            silent: false,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
        }
    }
}

/// 子域名扫描引擎
///
/// 枚举和探测是两个独立的阶段：`run_enumeration` 返回完整的
/// 解析结果快照，调用方决定是否把快照交给 `run_probe`。
/// 交互确认留在二进制入口，引擎本身不做任何终端交互。
pub struct ScanEngine {
    config: ScanConfig,
    state: ScanState,
    resolver: Arc<dyn DomainLookup>,
    fetcher: Arc<dyn HttpFetcher>,
}

impl ScanEngine {
    /// 创建使用系统DNS和reqwest客户端的扫描引擎
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        let fetcher = Arc::new(ReqwestFetcher::new(Duration::from_secs(
            config.probe_timeout_secs,
        ))?);
        Self::with_components(config, Arc::new(SystemResolver::new()), fetcher)
    }

    /// 使用自定义解析器和HTTP客户端创建扫描引擎
    pub fn with_components(
        config: ScanConfig,
        resolver: Arc<dyn DomainLookup>,
        fetcher: Arc<dyn HttpFetcher>,
    ) -> Result<Self, ScanError> {
        if config.domain.is_empty() {
            return Err(ScanError::Config(
                "必须指定目标域名".to_string(),
            ));
        }
        if config.concurrency == 0 {
            return Err(ScanError::Config("并发数量必须大于0".to_string()));
        }

        Ok(ScanEngine {
            config,
            state: ScanState::new(),
            resolver,
            fetcher,
        })
    }

    /// 执行枚举阶段，从配置的字典文件读取候选
    ///
    /// 返回时所有工作者已退出，结果集不会再变化。
    pub async fn run_enumeration(&self) -> Result<Vec<ResolvedHost>, ScanError> {
        let path = self
            .config
            .wordlist
            .as_ref()
            .ok_or_else(|| ScanError::Config("必须指定字典文件路径".to_string()))?;
        let candidates = Wordlist::open(path)?;
        Ok(self.run_enumeration_with(candidates).await)
    }

    /// 执行枚举阶段，候选由调用方提供
    pub async fn run_enumeration_with<I>(&self, candidates: I) -> Vec<ResolvedHost>
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: Send + 'static,
    {
        // 引擎可以复用，每次枚举从干净的状态开始
        self.state.clear();

        let pool = EnumerationPool::new(
            self.resolver.clone(),
            self.state.clone(),
            self.config.concurrency,
            self.config.show_ip,
            self.config.silent,
        );
        pool.run(&self.config.domain, candidates).await;

        self.state.resolved_hosts()
    }

    /// 执行探测阶段
    ///
    /// 快照为空时直接返回，不发起任何请求。
    pub async fn run_probe(&self, snapshot: Vec<ResolvedHost>) -> Vec<ProbeFinding> {
        if snapshot.is_empty() {
            return Vec::new();
        }

        let pool = ProbePool::new(
            self.fetcher.clone(),
            self.state.clone(),
            self.config.concurrency,
            self.config.silent,
        );
        pool.run(snapshot).await;

        self.state.probe_findings()
    }

    /// 枚举阶段成功解析的数量
    pub fn resolved_count(&self) -> usize {
        self.state.resolved_count()
    }
}

/// 便捷的子域名暴破函数，只执行枚举阶段
pub async fn brute_force_subdomains(
    domain: &str,
    wordlist: &str,
) -> Result<Vec<ResolvedHost>, ScanError> {
    let config = ScanConfig {
        domain: domain.to_string(),
        wordlist: Some(wordlist.to_string()),
        ..Default::default()
    };

    let engine = ScanEngine::new(config)?;
    engine.run_enumeration().await
}
