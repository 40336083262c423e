pub mod answer_zone_query;
pub mod resolve_query;

pub use answer_zone_query::AnswerZoneQueryUseCase;
pub use resolve_query::{ResolveQueryUseCase, ResolverAnswer};
