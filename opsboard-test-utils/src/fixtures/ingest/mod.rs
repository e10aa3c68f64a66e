use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn ingest<'a>(&'a mut self) -> IngestFixtures<'a> {
        IngestFixtures { setup: self }
    }
}

pub struct IngestFixtures<'a> {
    pub setup: &'a mut TestContext,
}
