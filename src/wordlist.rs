use std::fs::File;
use std::io::{self, BufRead};

use log::warn;

use crate::error::ScanError;

/// 字典候选源
///
/// 按行惰性读取字典文件，空行和纯空白行被静默跳过。
/// 打开失败是致命错误；读取中途失败只记录警告并停止生产，
/// 已经进入队列的候选继续被处理。
pub struct Wordlist {
    lines: io::Lines<io::BufReader<File>>,
}

impl Wordlist {
    /// 打开字典文件
    pub fn open(path: &str) -> Result<Self, ScanError> {
        let file = File::open(path).map_err(|source| ScanError::SourceOpen {
            path: path.to_string(),
            source,
        })?;
        Ok(Wordlist {
            lines: io::BufReader::new(file).lines(),
        })
    }
}

impl Iterator for Wordlist {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    let candidate = line.trim();
                    if !candidate.is_empty() {
                        return Some(candidate.to_string());
                    }
                }
                Err(e) => {
                    warn!("{}", ScanError::SourceRead(e));
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp_wordlist(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rsubbrute_{}_{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_skips_blank_lines() {
        let path = write_temp_wordlist("blanks.txt", "www\n\n  \nmail\n\tftp\t\n");
        let candidates: Vec<String> = Wordlist::open(path.to_str().unwrap())
            .unwrap()
            .collect();
        assert_eq!(candidates, vec!["www", "mail", "ftp"]);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_empty_file() {
        let path = write_temp_wordlist("empty.txt", "");
        let candidates: Vec<String> = Wordlist::open(path.to_str().unwrap())
            .unwrap()
            .collect();
        assert!(candidates.is_empty());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_open_missing_file() {
        let result = Wordlist::open("/nonexistent/rsubbrute_missing.txt");
        assert!(matches!(result, Err(ScanError::SourceOpen { .. })));
    }
}
