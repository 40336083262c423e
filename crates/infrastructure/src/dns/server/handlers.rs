use super::QueryHandler;
use async_trait::async_trait;
use hopdns_application::use_cases::{AnswerZoneQueryUseCase, ResolveQueryUseCase};
use hopdns_domain::Reply;

#[async_trait]
impl QueryHandler for ResolveQueryUseCase {
    async fn handle(&self, query: &str) -> Reply {
        self.execute(query).await.reply
    }
}

#[async_trait]
impl QueryHandler for AnswerZoneQueryUseCase {
    async fn handle(&self, query: &str) -> Reply {
        self.execute(query)
    }
}
