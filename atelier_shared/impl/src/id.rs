use atelier_shared_contracts::id::IdService;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    fn generate<I: From<Uuid> + 'static>(&self) -> I {
        // Random v4 ids cannot collide in practice, so concurrent creates
        // need no coordination.
        Uuid::new_v4().into()
    }
}
