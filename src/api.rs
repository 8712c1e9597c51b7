//! 数据字典后端 API 目录
//!
//! 每个后端能力对应一个类型化的薄方法，方法本身只声明
//! method/path/参数形状，派发、凭据注入与错误处理都在
//! [`HttpClient`](crate::web::http::HttpClient) 中。
//! 没有重试、批调度或缓存：每个调用都是一次性的请求。

use crate::session::SessionContext;
use crate::store::MessageStore;
use crate::types::*;
use crate::web::http::{HttpClient, HttpError};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DictionaryApi {
    http: HttpClient,
}

impl DictionaryApi {
    pub fn new(session: SessionContext, messages: MessageStore) -> Self {
        Self {
            http: HttpClient::new(session, messages),
        }
    }

    // --- 身份认证 ---

    pub async fn login(&self, payload: &AuthPayload) -> Result<AuthResponse, HttpError> {
        self.http.post_json("/auth/login", payload).await
    }

    pub async fn signup(&self, payload: &AuthPayload) -> Result<(), HttpError> {
        self.http.post("/auth/signup", payload).await
    }

    // --- 公共查询 ---

    pub async fn search_fields(&self, q: &str) -> Result<Vec<StandardField>, HttpError> {
        self.http
            .get_json("/public/search", &[("q", q.to_string())])
            .await
    }

    /// 精确检索落空时的语义相似检索
    pub async fn similar_roots(&self, q: &str) -> Result<Vec<SimilarRoot>, HttpError> {
        self.http
            .get_json("/public/similar-roots", &[("q", q.to_string())])
            .await
    }

    /// 提交"新增术语"申请
    pub async fn submit_task(&self, field_cn_name: &str) -> Result<(), HttpError> {
        let payload = NewTask {
            field_cn_name: field_cn_name.to_string(),
        };
        self.http.post("/public/tasks", &payload).await
    }

    // --- 词根管理 ---

    /// 分页列出词根；q 为空时不携带该参数
    pub async fn list_roots(
        &self,
        page: u32,
        page_size: u32,
        q: &str,
    ) -> Result<Paginated<WordRoot>, HttpError> {
        let mut query = vec![
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        if !q.is_empty() {
            query.push(("q", q.to_string()));
        }
        self.http.get_json("/admin/roots", &query).await
    }

    pub async fn create_root(&self, payload: &NewWordRoot) -> Result<WordRoot, HttpError> {
        self.http.post_json("/admin/roots", payload).await
    }

    pub async fn batch_create_roots(&self, payload: &[NewWordRoot]) -> Result<(), HttpError> {
        self.http.post("/admin/roots/batch", &payload).await
    }

    pub async fn update_root(&self, id: i32, payload: &NewWordRoot) -> Result<(), HttpError> {
        self.http.put(&format!("/admin/roots/{}", id), payload).await
    }

    pub async fn delete_root(&self, id: i32) -> Result<(), HttpError> {
        self.http.delete(&format!("/admin/roots/{}", id)).await
    }

    /// 清空全部词根（破坏性操作，调用方需先确认）
    pub async fn clear_roots(&self) -> Result<(), HttpError> {
        self.http.delete("/admin/roots/clear").await
    }

    // --- 标准字段管理 ---

    pub async fn list_fields(&self) -> Result<Vec<StandardField>, HttpError> {
        self.http.get_json("/admin/fields", &[]).await
    }

    /// 字段的组成词根明细
    pub async fn field_details(&self, id: i32) -> Result<Vec<WordRoot>, HttpError> {
        self.http.get_json(&format!("/admin/fields/{}", id), &[]).await
    }

    pub async fn create_field(&self, payload: &NewStandardField) -> Result<(), HttpError> {
        self.http.post("/admin/fields", payload).await
    }

    pub async fn update_field(&self, id: i32, payload: &NewStandardField) -> Result<(), HttpError> {
        self.http.put(&format!("/admin/fields/{}", id), payload).await
    }

    pub async fn delete_field(&self, id: i32) -> Result<(), HttpError> {
        self.http.delete(&format!("/admin/fields/{}", id)).await
    }

    /// 清空全部字段（破坏性操作，调用方需先确认）
    pub async fn clear_fields(&self) -> Result<(), HttpError> {
        self.http.delete("/admin/fields/clear").await
    }

    // --- 智能建议 ---

    pub async fn suggest(&self, q: &str) -> Result<SuggestResponse, HttpError> {
        self.http
            .get_json("/admin/suggest", &[("q", q.to_string())])
            .await
    }

    // --- 用户管理 ---

    pub async fn list_users(&self) -> Result<Vec<UserAccount>, HttpError> {
        self.http.get_json("/admin/users", &[]).await
    }

    pub async fn create_user(&self, payload: &NewUser) -> Result<(), HttpError> {
        self.http.post("/admin/users", payload).await
    }

    pub async fn update_user_role(&self, id: i32, role: &str) -> Result<(), HttpError> {
        let payload = RoleUpdate {
            role: role.to_string(),
        };
        self.http.put(&format!("/admin/users/{}", id), &payload).await
    }

    pub async fn delete_user(&self, id: i32) -> Result<(), HttpError> {
        self.http.delete(&format!("/admin/users/{}", id)).await
    }

    // --- 任务管理 ---

    pub async fn list_tasks(&self) -> Result<Vec<Task>, HttpError> {
        self.http.get_json("/admin/tasks", &[]).await
    }

    pub async fn complete_task(&self, id: i32) -> Result<(), HttpError> {
        self.http.put_empty(&format!("/admin/tasks/{}", id)).await
    }

    pub async fn task_count(&self) -> Result<TaskCount, HttpError> {
        self.http.get_json("/admin/tasks/count", &[]).await
    }
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> DictionaryApi {
    use_context::<DictionaryApi>().expect("DictionaryApi should be provided")
}
