use std::time::Duration;

use async_trait::async_trait;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

use crate::error::ScanError;

/// 单次DNS查询的超时时间
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(1);

/// 域名解析接口
///
/// 工作池通过该接口发起查询，测试中可以替换为桩实现。
#[async_trait]
pub trait DomainLookup: Send + Sync {
    /// 解析完整域名，成功时返回至少一个IP地址
    async fn lookup(&self, fqdn: &str) -> Result<Vec<String>, ScanError>;
}

/// 基于系统配置的DNS解析器
pub struct SystemResolver {
    resolver: TokioAsyncResolver,
    timeout: Duration,
}

impl SystemResolver {
    /// 创建使用系统默认DNS配置的解析器
    pub fn new() -> Self {
        let resolver =
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());
        SystemResolver {
            resolver,
            timeout: LOOKUP_TIMEOUT,
        }
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DomainLookup for SystemResolver {
    async fn lookup(&self, fqdn: &str) -> Result<Vec<String>, ScanError> {
        // 超时和解析失败同等对待，不重试
        match tokio::time::timeout(self.timeout, self.resolver.lookup_ip(fqdn)).await {
            Ok(Ok(response)) => {
                let ips: Vec<String> = response.iter().map(|ip| ip.to_string()).collect();
                if ips.is_empty() {
                    return Err(ScanError::Resolution {
                        domain: fqdn.to_string(),
                        reason: "没有返回任何记录".to_string(),
                    });
                }
                Ok(ips)
            }
            Ok(Err(e)) => Err(ScanError::Resolution {
                domain: fqdn.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Err(ScanError::Resolution {
                domain: fqdn.to_string(),
                reason: "查询超时".to_string(),
            }),
        }
    }
}
