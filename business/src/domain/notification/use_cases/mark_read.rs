use async_trait::async_trait;

use crate::domain::resource::Resource;

pub struct MarkNotificationReadParams {
    pub id: i64,
}

#[async_trait]
pub trait MarkNotificationReadUseCase: Send + Sync {
    async fn execute(&self, params: MarkNotificationReadParams) -> Resource<()>;
}
