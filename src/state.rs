//! 线程安全的扫描状态管理模块
//!
//! 用显式的状态对象取代全局可变变量，状态通过引用传入各个
//! 工作池。所有锁都只覆盖单次追加或读取，绝不跨网络调用持有。

use std::sync::{Arc, Mutex};

use crate::model::{ProbeFinding, ResolvedHost};

/// DNS结果集与进度计数器
///
/// 两者由同一把锁保护，读取方观察到的集合长度和计数始终一致。
/// 集合长度是权威数据，计数器只用于进度输出。
#[derive(Debug, Default)]
struct ResolvedInner {
    hosts: Vec<ResolvedHost>,
    found: usize,
}

/// 扫描状态管理器
///
/// 枚举阶段的工作者共享DNS结果集，探测阶段的工作者共享
/// 发现集，两个集合在各自阶段内只增不删。
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    resolved: Arc<Mutex<ResolvedInner>>,
    findings: Arc<Mutex<Vec<ProbeFinding>>>,
}

impl ScanState {
    /// 创建新的状态管理器
    pub fn new() -> Self {
        ScanState::default()
    }

    /// 追加一条解析结果并递增计数器，返回当前计数
    ///
    /// 追加和计数在同一个临界区内完成。
    pub fn add_resolved_host(&self, host: ResolvedHost) -> usize {
        let mut inner = self.resolved.lock().unwrap();
        inner.hosts.push(host);
        inner.found += 1;
        inner.found
    }

    /// 获取DNS结果集的只读快照
    pub fn resolved_hosts(&self) -> Vec<ResolvedHost> {
        self.resolved.lock().unwrap().hosts.clone()
    }

    /// 成功解析的数量
    pub fn resolved_count(&self) -> usize {
        self.resolved.lock().unwrap().found
    }

    /// 追加一条探测发现
    pub fn add_probe_finding(&self, finding: ProbeFinding) {
        self.findings.lock().unwrap().push(finding);
    }

    /// 获取发现集的只读快照
    pub fn probe_findings(&self) -> Vec<ProbeFinding> {
        self.findings.lock().unwrap().clone()
    }

    /// 清空所有状态，用于引擎复用
    pub fn clear(&self) {
        {
            let mut inner = self.resolved.lock().unwrap();
            inner.hosts.clear();
            inner.found = 0;
        }
        self.findings.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_thread_safety() {
        let state = Arc::new(ScanState::new());
        let mut handles = vec![];

        // 启动多个线程同时追加结果
        for i in 0..10 {
            let state_clone = state.clone();
            let handle = thread::spawn(move || {
                let host = ResolvedHost {
                    domain: format!("test{}.example.com", i),
                    ips: vec![format!("192.168.1.{}", i)],
                };
                state_clone.add_resolved_host(host);
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        // 集合长度和计数器必须一致
        assert_eq!(state.resolved_hosts().len(), 10);
        assert_eq!(state.resolved_count(), 10);
    }

    #[test]
    fn test_count_matches_set_length() {
        let state = ScanState::new();
        let count = state.add_resolved_host(ResolvedHost {
            domain: "www.example.com".to_string(),
            ips: vec!["1.2.3.4".to_string()],
        });
        assert_eq!(count, 1);
        assert_eq!(state.resolved_hosts().len(), count);
    }

    #[test]
    fn test_state_isolation() {
        let state1 = ScanState::new();
        let state2 = ScanState::new();

        state1.add_resolved_host(ResolvedHost {
            domain: "a.example.com".to_string(),
            ips: vec!["192.168.1.1".to_string()],
        });
        state2.add_resolved_host(ResolvedHost {
            domain: "b.example.com".to_string(),
            ips: vec!["192.168.1.2".to_string()],
        });

        assert_eq!(state1.resolved_hosts().len(), 1);
        assert_eq!(state2.resolved_hosts().len(), 1);
        assert_ne!(
            state1.resolved_hosts()[0].domain,
            state2.resolved_hosts()[0].domain
        );
    }

    #[test]
    fn test_findings_and_clear() {
        let state = ScanState::new();
        let host = ResolvedHost {
            domain: "www.example.com".to_string(),
            ips: vec!["1.2.3.4".to_string()],
        };
        state.add_resolved_host(host.clone());
        state.add_probe_finding(ProbeFinding {
            host,
            http_status: Some(200),
            https_status: None,
            redirect_url: None,
        });

        assert_eq!(state.probe_findings().len(), 1);

        state.clear();
        assert_eq!(state.resolved_count(), 0);
        assert!(state.resolved_hosts().is_empty());
        assert!(state.probe_findings().is_empty());
    }
}
