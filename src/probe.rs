use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use colored::Colorize;
use reqwest::{redirect, Client};
use tokio::sync::Semaphore;

use crate::error::ScanError;
use crate::model::{ProbeFinding, ProbeStatus, ResolvedHost};
use crate::state::ScanState;

/// 每次HTTP/HTTPS请求的默认超时时间（秒）
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// 单次HTTP请求的精简响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
    /// 响应状态码
    pub status: u16,
    /// Location头的值
    pub location: Option<String>,
}

/// HTTP传输接口
///
/// 探测逻辑通过该接口发起请求，测试中可以替换为桩实现。
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// 发起一次GET请求，不跟随重定向
    async fn fetch(&self, url: &str) -> Result<FetchedResponse, ScanError>;
}

/// 基于reqwest的HTTP探测客户端
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// 创建探测客户端
    ///
    /// 禁用重定向跟随，第一个重定向响应原样返回；
    /// 接受无效证书，证书校验不在探测范围内。
    pub fn new(timeout: Duration) -> Result<Self, ScanError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| ScanError::Config(format!("HTTP客户端初始化失败: {}", e)))?;

        Ok(ReqwestFetcher { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResponse, ScanError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScanError::Probe {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        Ok(FetchedResponse { status, location })
    }
}

/// 对单个域名独立发起HTTPS和HTTP探测
///
/// 任一协议连接失败只意味着该协议没有状态码，不影响另一个协议。
/// 重定向目标的提取顺序：HTTPS返回301/302时取其Location；
/// HTTP也返回301/302时其Location覆盖前者，以HTTP为准。
pub async fn probe_domain(fetcher: &dyn HttpFetcher, domain: &str) -> ProbeStatus {
    let https_resp = fetcher.fetch(&format!("https://{}", domain)).await.ok();
    let http_resp = fetcher.fetch(&format!("http://{}", domain)).await.ok();

    let mut redirect_url = None;
    if let Some(ref resp) = https_resp {
        if resp.status == 301 || resp.status == 302 {
            redirect_url = resp.location.clone();
        }
    }
    if let Some(ref resp) = http_resp {
        if resp.status == 301 || resp.status == 302 {
            // HTTP的Location无条件覆盖HTTPS的结果
            redirect_url = resp.location.clone();
        }
    }

    ProbeStatus {
        http_status: http_resp.map(|r| r.status),
        https_status: https_resp.map(|r| r.status),
        redirect_url,
    }
}

/// HTTP/HTTPS可访问性探测池
///
/// 对固定的解析结果快照做有界并发探测，并发额度通过信号量
/// 的获取/释放控制，许可在探测结束后无条件归还。
pub struct ProbePool {
    fetcher: Arc<dyn HttpFetcher>,
    state: ScanState,
    concurrency: usize,
    silent: bool,
}

impl ProbePool {
    /// 创建探测池，`concurrency` 必须大于0
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        state: ScanState,
        concurrency: usize,
        silent: bool,
    ) -> Self {
        ProbePool {
            fetcher,
            state,
            concurrency,
            silent,
        }
    }

    /// 探测快照中的每个主机恰好一次，阻塞到全部完成
    ///
    /// 快照在进入本阶段时已经固定，之后对DNS结果集的任何改动
    /// 对本阶段不可见。单个主机的探测失败被静默跳过。
    pub async fn run(&self, snapshot: Vec<ResolvedHost>) {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));

        let mut tasks = Vec::with_capacity(snapshot.len());
        for host in snapshot {
            let permit_sem = semaphore.clone();
            let fetcher = self.fetcher.clone();
            let state = self.state.clone();
            let silent = self.silent;

            tasks.push(tokio::spawn(async move {
                let _permit = permit_sem.acquire_owned().await.unwrap();

                let status = probe_domain(fetcher.as_ref(), &host.domain).await;
                if !status.is_accessible() {
                    return;
                }

                if silent {
                    println!("{}", host.domain);
                } else {
                    let mut line = format!(
                        "{} {} -> [{}]",
                        "[accessible]".green(),
                        host.domain,
                        status.status_summary()
                    );
                    if let Some(ref url) = status.redirect_url {
                        line.push_str(&format!(" (redirect: {})", url));
                    }
                    println!("{}", line);
                }

                state.add_probe_finding(ProbeFinding {
                    host,
                    http_status: status.http_status,
                    https_status: status.https_status,
                    redirect_url: status.redirect_url,
                });
            }));
        }

        for task in tasks {
            let _ = task.await;
        }
    }
}
