use std::pin::Pin;
use std::sync::Arc;

use crate::error::AppError;
use crate::pipeline::orchestration::analysis_pipeline::AnalysisPipeline;
use crate::pipeline::orchestration::outcome::AnalysisOutcome;
use crate::pipeline::orchestration::request::AnalysisRequest;
use futures::task::Context;
use futures::task::Poll;
use futures::Future;
use tower::Service;

/// Runs analysis requests on the blocking pool so callers can stack tower layers on top.
#[derive(Clone)]
pub struct ClassificationService {
    pipeline: Arc<AnalysisPipeline>,
}

impl ClassificationService {
    pub fn new(pipeline: Arc<AnalysisPipeline>) -> Self {
        Self { pipeline }
    }
}

impl Service<AnalysisRequest> for ClassificationService {
    type Response = AnalysisOutcome;
    type Error = tower::BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: AnalysisRequest) -> Self::Future {
        let pipeline = self.pipeline.clone();

        Box::pin(async move {
            let outcome = tokio::task::spawn_blocking(move || pipeline.analyze(req))
                .await
                .map_err(|err| AppError::Task(err.to_string()))??;
            Ok::<_, tower::BoxError>(outcome)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::pipeline::types::{ManualSignal, Subtype};
    use std::time::Duration;
    use tower::{ServiceBuilder, ServiceExt};

    fn service() -> ClassificationService {
        ClassificationService::new(Arc::new(AnalysisPipeline::new(&Configuration::default())))
    }

    #[tokio::test]
    async fn manual_request_through_layers() {
        let svc = ServiceBuilder::new()
            .concurrency_limit(2)
            .timeout(Duration::from_secs(5))
            .service(service());

        let outcome = svc
            .oneshot(AnalysisRequest::Manual(ManualSignal {
                skin_l: 60.0,
                skin_b: -4.0,
                chroma: 45.0,
                hair_l: 15.0,
                eye_l: 25.0,
            }))
            .await
            .unwrap();
        assert_eq!(
            outcome.report().unwrap().classification.subtype,
            Subtype::TrueWinter
        );
    }

    #[tokio::test]
    async fn decode_failure_surfaces_as_error() {
        let mut svc = service();
        let err = svc
            .call(AnalysisRequest::Image {
                bytes: b"not an image".to_vec(),
                force: false,
            })
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<AppError>().is_some());
    }

    #[tokio::test]
    async fn unreadable_file_fails_only_its_own_request() {
        let svc = service();
        let requests = vec![
            AnalysisRequest::Synthetic {
                key: "alpha".to_string(),
            },
            AnalysisRequest::Path {
                path: std::env::temp_dir().join("color-season-missing").join("face.jpg"),
                force: false,
            },
        ];
        let mut outcomes =
            futures::future::join_all(requests.into_iter().map(|req| svc.clone().oneshot(req)))
                .await
                .into_iter();

        let synthetic = outcomes.next().unwrap().unwrap();
        assert!(synthetic.report().is_some());

        let err = outcomes.next().unwrap().unwrap_err();
        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::Io(_))));
    }

    #[tokio::test]
    async fn concurrent_requests_are_independent() {
        let svc = service();
        let keys = ["alpha", "beta", "gamma", "delta"];
        let outcomes = futures::future::join_all(keys.iter().map(|key| {
            svc.clone().oneshot(AnalysisRequest::Synthetic {
                key: key.to_string(),
            })
        }))
        .await;

        for (key, outcome) in keys.iter().zip(outcomes) {
            let again = service()
                .oneshot(AnalysisRequest::Synthetic {
                    key: key.to_string(),
                })
                .await
                .unwrap();
            assert_eq!(
                outcome.unwrap().report().unwrap().classification.subtype,
                again.report().unwrap().classification.subtype
            );
        }
    }
}
