//! 数据传输记录
//!
//! 与后端 JSON 接口一一对应的纯数据类型。服务端是唯一权威数据源，
//! 客户端只持有临时副本用于展示；时间戳保持 RFC 3339 字符串，
//! 客户端不对其做任何计算。

use serde::{Deserialize, Serialize};

/// 管理员角色标识
pub const ROLE_ADMIN: &str = "admin";

// ---------------------------------------------------------------------------
// 身份认证
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AuthPayload {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// 词根
// ---------------------------------------------------------------------------

/// 标准词根：构成字段英文名的原子单位
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WordRoot {
    pub id: i32,
    pub cn_name: String,
    pub en_abbr: String,
    pub en_full_name: Option<String>,
    pub associated_terms: Option<String>,
    pub remark: Option<String>,
    pub created_at: Option<String>,
    /// 相似度检索时由服务端附带
    #[serde(default)]
    pub score: Option<f32>,
}

/// 新建/更新词根的请求体
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewWordRoot {
    pub cn_name: String,
    pub en_abbr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en_full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// 语义相似词根：id 由向量库返回，是字符串而非数据库主键
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimilarRoot {
    pub id: String,
    pub cn_name: String,
    pub en_abbr: String,
    pub score: f32,
}

// ---------------------------------------------------------------------------
// 标准字段
// ---------------------------------------------------------------------------

/// 标准字段：由若干词根组合而成的命名数据项
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StandardField {
    pub id: i32,
    pub field_cn_name: String,
    pub field_en_name: String,
    pub composition_ids: Vec<i32>,
    pub data_type: Option<String>,
    #[serde(default)]
    pub associated_terms: Option<String>,
    pub is_standard: bool,
    pub created_at: Option<String>,
    #[serde(default)]
    pub score: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewStandardField {
    pub field_cn_name: String,
    pub field_en_name: String,
    pub composition_ids: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

/// 智能建议结果：组合出的英文名、未命中的分词与命中的词根 id
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuggestResponse {
    pub suggested_en: String,
    pub missing_words: Vec<String>,
    pub matched_ids: Vec<i32>,
}

/// 分页信封，词根列表接口使用
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
}

// ---------------------------------------------------------------------------
// 用户与待办
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserAccount {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleUpdate {
    pub role: String,
}

/// 用户提交的"新增术语"申请，由管理员处理
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: i32,
    pub task_type: String,
    pub payload: TaskPayload,
    pub is_read: bool,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    #[serde(default)]
    pub field_cn_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub field_cn_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TaskCount {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_envelope_shape() {
        let json = r#"{
            "items": [
                {"id": 1, "cn_name": "温度", "en_abbr": "TEMP",
                 "en_full_name": "temperature", "associated_terms": null,
                 "remark": null, "created_at": "2024-01-01T00:00:00Z"}
            ],
            "total": 42
        }"#;
        let page: Paginated<WordRoot> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 42);
        assert_eq!(page.items[0].en_abbr, "TEMP");
        assert_eq!(page.items[0].score, None);
    }

    #[test]
    fn suggest_response_shape() {
        let json = r#"{"suggested_en": "CUST_TEMP", "missing_words": ["环境"], "matched_ids": [3, 7]}"#;
        let res: SuggestResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.suggested_en, "CUST_TEMP");
        assert_eq!(res.missing_words, vec!["环境"]);
        assert_eq!(res.matched_ids, vec![3, 7]);
    }

    #[test]
    fn new_root_omits_empty_optionals() {
        let root = NewWordRoot {
            cn_name: "温度".into(),
            en_abbr: "TEMP".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["cn_name"], "温度");
        assert!(json.get("en_full_name").is_none());
        assert!(json.get("remark").is_none());
    }

    #[test]
    fn task_payload_tolerates_missing_field() {
        let json = r#"{"id": 5, "task_type": "FIELD_REQUEST", "payload": {},
                       "is_read": false, "created_at": null}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(!task.is_read);
        assert_eq!(task.payload.field_cn_name, "");
    }

    #[test]
    fn task_count_shape() {
        let count: TaskCount = serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert_eq!(count.count, 3);
    }
}
