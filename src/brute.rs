use std::sync::Arc;

use colored::Colorize;
use tokio::sync::{mpsc, Mutex};

use crate::model::ResolvedHost;
use crate::resolver::DomainLookup;
use crate::state::ScanState;

/// 子域名枚举工作池
///
/// 固定数量的工作者从容量有限的队列中取出候选词，与目标域名
/// 拼接后交给解析器查询。队列容量等于并发数，生产者在源耗尽后
/// 关闭队列，队列关闭且取空是工作者退出的唯一信号。
pub struct EnumerationPool {
    resolver: Arc<dyn DomainLookup>,
    state: ScanState,
    concurrency: usize,
    show_ip: bool,
    silent: bool,
}

impl EnumerationPool {
    /// 创建枚举工作池，`concurrency` 必须大于0
    pub fn new(
        resolver: Arc<dyn DomainLookup>,
        state: ScanState,
        concurrency: usize,
        show_ip: bool,
        silent: bool,
    ) -> Self {
        EnumerationPool {
            resolver,
            state,
            concurrency,
            show_ip,
            silent,
        }
    }

    /// 执行枚举，阻塞到所有候选处理完毕、全部工作者退出为止
    ///
    /// 返回后DNS结果集不会再被修改。单个候选的解析失败被静默
    /// 跳过，不影响其他候选。
    pub async fn run<I>(&self, target_domain: &str, candidates: I)
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: Send + 'static,
    {
        let (task_send, task_recv) = mpsc::channel::<String>(self.concurrency);
        let task_recv = Arc::new(Mutex::new(task_recv));

        let mut workers = Vec::with_capacity(self.concurrency);
        for _ in 0..self.concurrency {
            let task_recv = task_recv.clone();
            let resolver = self.resolver.clone();
            let state = self.state.clone();
            let target_domain = target_domain.to_string();
            let show_ip = self.show_ip;
            let silent = self.silent;

            workers.push(tokio::spawn(async move {
                loop {
                    // 锁的作用域只覆盖取任务本身
                    let sub = { task_recv.lock().await.recv().await };
                    let sub = match sub {
                        Some(sub) => sub,
                        // 队列已关闭且取空
                        None => break,
                    };

                    let full_domain = format!("{}.{}", sub, target_domain);
                    match resolver.lookup(&full_domain).await {
                        Ok(ips) => {
                            let host = ResolvedHost {
                                domain: full_domain.clone(),
                                ips: ips.clone(),
                            };
                            state.add_resolved_host(host);

                            if silent {
                                println!("{}", full_domain);
                            } else if show_ip {
                                println!("{} {} -> {}", "[+]".green(), full_domain, ips.join(", "));
                            } else {
                                println!("{} {}", "[+]".green(), full_domain);
                            }
                        }
                        Err(_e) => {
                            // 解析失败直接跳过
                            // log::debug!("[-] {} 解析失败: {}", full_domain, _e);
                        }
                    }
                }
            }));
        }

        // 生产者把字典候选送入有界队列，发送在队列满时阻塞，
        // 迭代结束后丢弃发送端即关闭队列
        let candidates = candidates.into_iter();
        let producer = tokio::task::spawn_blocking(move || {
            for sub in candidates {
                if task_send.blocking_send(sub).is_err() {
                    break;
                }
            }
        });

        let _ = producer.await;
        for worker in workers {
            let _ = worker.await;
        }
    }
}
