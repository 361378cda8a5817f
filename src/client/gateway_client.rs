//! HTTP client for the persistence gateway

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use taskflow_core::{
    denormalize_employee, denormalize_task, denormalize_task_partial, employee_stats,
    normalize_employee, normalize_employees, normalize_task, normalize_tasks, summarize, Employee,
    EmployeeDraft, EmployeeStats, StoredEmployee, StoredTask, Task, TaskDraft, TaskSummary,
    TaskUpdate,
};

use super::{ClientError, ClientResult};

/// Employees and tasks read together, in presentation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub employees: Vec<Employee>,
    pub tasks: Vec<Task>,
}

impl Snapshot {
    /// Dashboard totals over all tasks
    pub fn summary(&self) -> TaskSummary {
        summarize(&self.tasks)
    }

    /// Progress of one employee
    pub fn employee_stats(&self, employee_id: &str) -> EmployeeStats {
        employee_stats(&self.tasks, employee_id)
    }
}

/// Client for the gateway REST contract
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a client for the gateway at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client over an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `/tasks/{id}` with the id percent-encoded as one path segment
    fn task_url(&self, id: &str) -> ClientResult<Url> {
        let mut url = Url::parse(&self.url("/tasks")).map_err(|e| {
            ClientError::Transport(format!("invalid base URL {}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Transport(format!("base URL {} cannot hold a path", self.base_url))
            })?
            .push(id);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Value> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Map the status to a client error, or decode the JSON body
    async fn handle_response(response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = error_message(&text).unwrap_or_else(|| status.to_string());
            return Err(match status {
                StatusCode::BAD_REQUEST => ClientError::Validation(message),
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                _ => ClientError::Transport(format!("{}: {}", status, message)),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // ========== Employees ==========

    /// Fetch all employees
    pub async fn fetch_employees(&self) -> ClientResult<Vec<Employee>> {
        tracing::debug!(base_url = %self.base_url, "Fetching employees");
        let body = self.send(self.client.get(self.url("/employees"))).await?;
        Ok(normalize_employees(&body))
    }

    /// Create an employee and return it as stored
    pub async fn create_employee(&self, draft: &EmployeeDraft) -> ClientResult<Employee> {
        let payload = denormalize_employee(draft);
        let body = self
            .send(self.client.post(self.url("/employees")).json(&payload))
            .await?;
        let stored: StoredEmployee = decode(body)?;
        Ok(normalize_employee(&stored))
    }

    // ========== Tasks ==========

    /// Fetch all tasks
    pub async fn fetch_tasks(&self) -> ClientResult<Vec<Task>> {
        tracing::debug!(base_url = %self.base_url, "Fetching tasks");
        let body = self.send(self.client.get(self.url("/tasks"))).await?;
        Ok(normalize_tasks(&body))
    }

    /// Create a task and return it as stored
    pub async fn create_task(&self, draft: &TaskDraft) -> ClientResult<Task> {
        let payload = denormalize_task(draft);
        let body = self
            .send(self.client.post(self.url("/tasks")).json(&payload))
            .await?;
        let stored: StoredTask = decode(body)?;
        Ok(normalize_task(&stored))
    }

    /// Apply a partial update; empty fields are left unchanged
    pub async fn update_task(&self, id: &str, updates: &TaskUpdate) -> ClientResult<Task> {
        let payload = denormalize_task_partial(updates);
        let body = self
            .send(self.client.put(self.task_url(id)?).json(&payload))
            .await?;
        let stored: StoredTask = decode(body)?;
        Ok(normalize_task(&stored))
    }

    /// Delete a task
    pub async fn delete_task(&self, id: &str) -> ClientResult<()> {
        self.send(self.client.delete(self.task_url(id)?)).await?;
        Ok(())
    }

    // ========== Snapshot ==========

    /// Fetch employees and tasks concurrently; the first failure wins
    pub async fn fetch_snapshot(&self) -> ClientResult<Snapshot> {
        let (employees, tasks) = tokio::try_join!(self.fetch_employees(), self.fetch_tasks())?;
        Ok(Snapshot { employees, tasks })
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> ClientResult<T> {
    Ok(serde_json::from_value(body)?)
}

/// `error` field of a gateway error body
fn error_message(text: &str) -> Option<String> {
    serde_json::from_str::<Value>(text)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = GatewayClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/tasks"), "http://localhost:3000/tasks");
    }

    #[test]
    fn test_task_url_encodes_id() {
        let client = GatewayClient::new("http://localhost:3000");
        assert_eq!(
            client.task_url("7").unwrap().as_str(),
            "http://localhost:3000/tasks/7"
        );
        assert_eq!(
            client.task_url("a/b?c").unwrap().as_str(),
            "http://localhost:3000/tasks/a%2Fb%3Fc"
        );

        let prefixed = GatewayClient::new("http://localhost:3000/api/");
        assert_eq!(
            prefixed.task_url("7").unwrap().as_str(),
            "http://localhost:3000/api/tasks/7"
        );
    }

    #[test]
    fn test_invalid_base_url_is_transport_error() {
        let client = GatewayClient::new("not a url");
        assert!(matches!(client.task_url("7"), Err(ClientError::Transport(_))));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"error":"Task not found"}"#).as_deref(),
            Some("Task not found")
        );
        assert_eq!(error_message("Bad Gateway"), None);
        assert_eq!(error_message(r#"{"error":42}"#), None);
    }

    #[test]
    fn test_snapshot_metrics() {
        let task = |id: &str, status: &str, owner: &str| Task {
            id: id.to_string(),
            title: id.to_string(),
            status: status.to_string(),
            priority: "medium".to_string(),
            due_date: None,
            assigned_to: owner.to_string(),
        };
        let snapshot = Snapshot {
            employees: Vec::new(),
            tasks: vec![
                task("1", "completed", "7"),
                task("2", "pending", "7"),
                task("3", "in_progress", "8"),
            ],
        };

        let summary = snapshot.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completion_rate, 33);

        let stats = snapshot.employee_stats("7");
        assert_eq!((stats.completed, stats.total, stats.rate), (1, 2, 50));
    }
}
