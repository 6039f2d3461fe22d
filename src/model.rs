/// 解析成功的子域名
///
/// 创建后不再修改，只会被追加进结果集一次。
#[derive(Debug)]
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedHost {
    /// 完整域名
    pub domain: String,
    /// 解析到的IP地址列表，顺序由底层解析器决定
    pub ips: Vec<String>,
}

/// 单次HTTP/HTTPS探测的原始结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeStatus {
    /// HTTP状态码，请求失败时为None
    pub http_status: Option<u16>,
    /// HTTPS状态码，请求失败时为None
    pub https_status: Option<u16>,
    /// 捕获到的重定向目标
    pub redirect_url: Option<String>,
}

impl ProbeStatus {
    /// 任一协议返回 [200,400) 范围状态码即视为可访问
    pub fn is_accessible(&self) -> bool {
        let in_range = |s: Option<u16>| matches!(s, Some(code) if (200..400).contains(&code));
        in_range(self.http_status) || in_range(self.https_status)
    }

    /// 生成 "HTTP: 200, HTTPS: 301" 形式的状态摘要
    pub fn status_summary(&self) -> String {
        let mut info = Vec::new();
        if let Some(status) = self.http_status {
            info.push(format!("HTTP: {}", status));
        }
        if let Some(status) = self.https_status {
            info.push(format!("HTTPS: {}", status));
        }
        info.join(", ")
    }
}

/// 可访问子域名的完整探测记录
///
/// 显式持有对应的解析结果，创建后不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFinding {
    /// 对应的DNS解析结果
    pub host: ResolvedHost,
    /// HTTP状态码
    pub http_status: Option<u16>,
    /// HTTPS状态码
    pub https_status: Option<u16>,
    /// 重定向目标URL
    pub redirect_url: Option<String>,
}
