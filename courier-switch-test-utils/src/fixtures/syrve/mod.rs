use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn syrve<'a>(&'a mut self) -> SyrveFixtures<'a> {
        SyrveFixtures { context: self }
    }
}

pub struct SyrveFixtures<'a> {
    pub context: &'a mut TestContext,
}
