//! URL 查询串工具
//!
//! 纯函数，不依赖 DOM，便于在本地目标上直接测试。

/// RFC 3986 的非保留字符
fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~')
}

/// 对单个查询参数值做百分号编码
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

/// 解码百分号编码的查询参数值，非法序列返回 `None`
pub fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = bytes.get(i + 1..i + 3)?;
                let hex = std::str::from_utf8(hex).ok()?;
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}

/// 由键值对拼出查询串；空列表返回空串，否则以 `?` 开头
pub fn query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", joined)
}

/// 从 `a=1&b=2` 形式的查询串中取出指定键的解码值
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        if k == key { percent_decode(v) } else { None }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_ascii_and_utf8() {
        assert_eq!(percent_encode("temp"), "temp");
        assert_eq!(percent_encode("a b&c"), "a%20b%26c");
        assert_eq!(percent_encode("温度"), "%E6%B8%A9%E5%BA%A6");
    }

    #[test]
    fn decode_round_trip() {
        for s in ["temp", "a b&c", "温度", "/admin/roots"] {
            assert_eq!(percent_decode(&percent_encode(s)).as_deref(), Some(s));
        }
        assert_eq!(percent_decode("%ZZ"), None);
        assert_eq!(percent_decode("%E6"), None); // 不完整的 UTF-8 序列
    }

    #[test]
    fn paginated_listing_query() {
        let q = query_string(&[
            ("page", "2".to_string()),
            ("page_size", "20".to_string()),
            ("q", "temp".to_string()),
        ]);
        assert_eq!(q, "?page=2&page_size=20&q=temp");
        assert_eq!(query_string(&[]), "");
    }

    #[test]
    fn extracts_query_param() {
        let q = "redirect=%2Fadmin%2Froots&x=1";
        assert_eq!(query_param(q, "redirect").as_deref(), Some("/admin/roots"));
        assert_eq!(query_param(q, "x").as_deref(), Some("1"));
        assert_eq!(query_param(q, "missing"), None);
    }
}
