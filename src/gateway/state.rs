use std::sync::Arc;

use crate::fetcher::PageFetcher;
use crate::history::VerificationLog;
use crate::reliability::TrustRegistry;
use crate::repository::ArticleRepository;
use crate::verify::VerificationService;

/// Shared handler state, generic over the collaborator seams.
pub struct HandlerState<R, F, T>
where
    R: ArticleRepository,
    F: PageFetcher,
    T: TrustRegistry,
{
    pub service: Arc<VerificationService<R, F, T>>,

    pub repository: Arc<R>,

    pub registry: Arc<T>,

    pub history: Arc<VerificationLog>,
}

impl<R, F, T> Clone for HandlerState<R, F, T>
where
    R: ArticleRepository,
    F: PageFetcher,
    T: TrustRegistry,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            repository: Arc::clone(&self.repository),
            registry: Arc::clone(&self.registry),
            history: Arc::clone(&self.history),
        }
    }
}

impl<R, F, T> HandlerState<R, F, T>
where
    R: ArticleRepository,
    F: PageFetcher,
    T: TrustRegistry,
{
    pub fn new(
        service: Arc<VerificationService<R, F, T>>,
        repository: Arc<R>,
        registry: Arc<T>,
        history: Arc<VerificationLog>,
    ) -> Self {
        Self {
            service,
            repository,
            registry,
            history,
        }
    }
}
