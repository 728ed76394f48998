//! Query cache seeding and dehydration for client hydration

mod cache;
mod dehydrate;

pub use cache::{seed_from_session, QueryCache, USER_QUERY_KEY};
pub use dehydrate::{dehydrate, DehydratedQuery, DehydratedState, QueryState};
