use thiserror::Error;

/// 扫描过程中的错误分类
///
/// 只有配置错误和字典文件打开失败会终止整个扫描，
/// 其余错误都在单个任务内部被吸收。
#[derive(Error, Debug)]
pub enum ScanError {
    /// 配置缺失或非法，致命
    #[error("配置错误: {0}")]
    Config(String),

    /// 字典文件无法打开，致命
    #[error("无法打开字典文件 {path}: {source}")]
    SourceOpen {
        /// 字典文件路径
        path: String,
        /// 底层IO错误
        source: std::io::Error,
    },

    /// 字典文件读取中途失败，非致命
    #[error("读取字典文件时出错: {0}")]
    SourceRead(std::io::Error),

    /// 单个域名解析失败或超时，静默跳过
    #[error("无法解析域名 {domain}: {reason}")]
    Resolution {
        /// 查询的完整域名
        domain: String,
        /// 失败原因
        reason: String,
    },

    /// 单次HTTP/HTTPS请求失败，只影响该协议的状态
    #[error("请求失败 {url}: {reason}")]
    Probe {
        /// 请求的URL
        url: String,
        /// 失败原因
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScanError::Config("必须使用--domain选项指定目标域名".to_string());
        assert!(err.to_string().contains("配置错误"));

        let err = ScanError::Resolution {
            domain: "www.example.com".to_string(),
            reason: "查询超时".to_string(),
        };
        assert!(err.to_string().contains("www.example.com"));
    }
}
