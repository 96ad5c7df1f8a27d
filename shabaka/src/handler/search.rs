use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use tokio::sync::Mutex;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::error;
use tracing::info;

use crate::Result;
use crate::error::HandlerError;
use crate::graph::GraphBuilder;
use crate::model::TransactionGraph;
use crate::source::TransactionSource;

/// Owns the graph currently on display and replaces it on every search.
///
/// A search fetches one page for the address, builds a new graph from it and
/// swaps it in whole; readers keep whatever `Arc` they already hold. A failed
/// fetch or build leaves the previous graph in place. Starting a search
/// cancels the one in flight, and a cancelled search never touches the
/// displayed graph or the loading flag.
pub struct SearchHandler<S: TransactionSource> {
    source: Arc<S>,
    builder: Arc<GraphBuilder>,
    current: Arc<RwLock<Arc<TransactionGraph>>>,
    loading: Arc<AtomicBool>,
    inflight: Arc<Mutex<CancellationToken>>,
}

impl<S: TransactionSource> Clone for SearchHandler<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            builder: self.builder.clone(),
            current: self.current.clone(),
            loading: self.loading.clone(),
            inflight: self.inflight.clone(),
        }
    }
}

impl<S: TransactionSource> SearchHandler<S> {
    pub fn new(
        source: S,
        builder: GraphBuilder,
    ) -> Self {
        Self {
            source: Arc::new(source),
            builder: Arc::new(builder),
            current: Arc::new(RwLock::new(Arc::new(TransactionGraph::new()))),
            loading: Arc::new(AtomicBool::new(false)),
            inflight: Arc::new(Mutex::new(CancellationToken::new())),
        }
    }

    /// The graph on display
    pub async fn current(&self) -> Arc<TransactionGraph> {
        self.current.read().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub async fn search(
        &self,
        address: &str,
    ) -> Result<Arc<TransactionGraph>> {
        let address = address.trim();
        if address.is_empty() {
            return Err(HandlerError::EmptyAddress.into());
        }

        let token = self.begin().await;
        info!("search::{}::started", address);

        let fetched = tokio::select! {
            _ = token.cancelled() => {
                debug!("search::{}::cancelled_during_fetch", address);
                return Err(HandlerError::Superseded(address.to_string()).into());
            },
            fetched = self.source.fetch_transactions(address) => fetched,
        };

        let records = match fetched {
            Ok(records) => records,
            Err(e) => {
                if !self.finish(&token, None).await {
                    debug!("search::{}::fetch_failed_after_superseded::{}", address, e);
                    return Err(HandlerError::Superseded(address.to_string()).into());
                }
                error!("search::{}::fetch_failed::{}", address, e);
                return Err(e);
            },
        };

        let current = self.current().await;
        let graph = match self.builder.rebuild(&current, &records) {
            Ok(graph) => Arc::new(graph),
            Err(e) => {
                if !self.finish(&token, None).await {
                    debug!("search::{}::build_failed_after_superseded::{}", address, e);
                    return Err(HandlerError::Superseded(address.to_string()).into());
                }
                error!("search::{}::build_failed::{}", address, e);
                return Err(e.into());
            },
        };

        if !self.finish(&token, Some(graph.clone())).await {
            return Err(HandlerError::Superseded(address.to_string()).into());
        }

        info!(
            "search::{}::done::nodes::{}::links::{}",
            address,
            graph.node_count(),
            graph.link_count()
        );
        Ok(graph)
    }

    /// Cancels the search in flight and registers a new one.
    async fn begin(&self) -> CancellationToken {
        let mut inflight = self.inflight.lock().await;
        inflight.cancel();
        *inflight = CancellationToken::new();
        self.loading.store(true, Ordering::SeqCst);
        inflight.clone()
    }

    /// Publishes `graph` and clears the loading flag, unless `token` was
    /// superseded. Returns whether the search was still current.
    async fn finish(
        &self,
        token: &CancellationToken,
        graph: Option<Arc<TransactionGraph>>,
    ) -> bool {
        let _inflight = self.inflight.lock().await;
        if token.is_cancelled() {
            return false;
        }
        if let Some(graph) = graph {
            *self.current.write().await = graph;
        }
        self.loading.store(false, Ordering::SeqCst);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;
    use std::time::Duration;

    use async_trait::async_trait;
    use mockall::predicate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::GraphError;
    use crate::model::TransactionRecord;
    use crate::test_utils::fixtures::TestFixtures;
    use crate::test_utils::mocks::MockSource;
    use crate::test_utils::mocks::create_failing_mock_source;
    use crate::test_utils::mocks::create_mock_source;

    #[tokio::test]
    async fn test_search_replaces_graph() {
        let handler = SearchHandler::new(
            create_mock_source(TestFixtures::records(&[("0xA", "0xB"), ("0xB", "0xC")])),
            GraphBuilder::new(20),
        );

        let graph = handler.search("0xA").await.unwrap();

        assert_eq!(graph.node_count(), 3);
        assert!(Arc::ptr_eq(&graph, &handler.current().await));
        assert!(!handler.is_loading());
    }

    #[tokio::test]
    async fn test_search_passes_trimmed_address() {
        let mut source = MockSource::new();
        source
            .expect_fetch_transactions()
            .with(predicate::function(|address: &str| address == "0xA"))
            .times(1)
            .returning(|_| Ok(vec![]));
        let handler = SearchHandler::new(source, GraphBuilder::new(20));

        let graph = handler.search("  0xA ").await.unwrap();
        assert!(graph.is_empty());
    }

    #[tokio::test]
    async fn test_empty_address_is_rejected_without_fetch() {
        let mut source = MockSource::new();
        source.expect_fetch_transactions().times(0);
        let handler = SearchHandler::new(source, GraphBuilder::new(20));

        let err = handler.search("   ").await.unwrap_err();
        assert_eq!(err.downcast_ref::<HandlerError>(), Some(&HandlerError::EmptyAddress));
        assert!(!handler.is_loading());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_graph() {
        let mut source = MockSource::new();
        source
            .expect_fetch_transactions()
            .with(predicate::function(|address: &str| address == "0xA"))
            .returning(|_| Ok(TestFixtures::records(&[("0xA", "0xB")])));
        source
            .expect_fetch_transactions()
            .with(predicate::function(|address: &str| address == "0xDOWN"))
            .returning(|_| Err(crate::err_with_loc!("upstream unavailable")));
        let handler = SearchHandler::new(source, GraphBuilder::new(20));
        let previous = handler.search("0xA").await.unwrap();

        assert!(handler.search("0xDOWN").await.is_err());

        assert!(Arc::ptr_eq(&previous, &handler.current().await));
        assert!(!handler.is_loading());
    }

    #[tokio::test]
    async fn test_failed_first_search_leaves_empty_graph() {
        let handler = SearchHandler::new(create_failing_mock_source(), GraphBuilder::new(20));

        assert!(handler.search("0xA").await.is_err());
        assert!(handler.current().await.is_empty());
        assert!(!handler.is_loading());
    }

    #[tokio::test]
    async fn test_invalid_record_keeps_previous_graph() {
        let mut records = TestFixtures::records(&[("0xA", "0xB")]);
        records[0].from_address = None;
        let handler = SearchHandler::new(create_mock_source(records), GraphBuilder::new(20));

        let err = handler.search("0xA").await.unwrap_err();

        assert_eq!(err.downcast_ref::<GraphError>(), Some(&GraphError::InvalidRecord { index: 0 }));
        assert!(handler.current().await.is_empty());
        assert!(!handler.is_loading());
    }

    /// Starts a newer search from inside its own fetch of `outer`, then fails
    /// the outer fetch. The newer search lands before the failure surfaces.
    struct ReentrantSource {
        handler: Arc<OnceLock<SearchHandler<ReentrantSource>>>,
        outer: &'static str,
        inner: &'static str,
    }

    #[async_trait]
    impl TransactionSource for ReentrantSource {
        async fn fetch_transactions(
            &self,
            address: &str,
        ) -> Result<Vec<TransactionRecord>> {
            if address != self.outer {
                return Ok(TestFixtures::records(&[(address, "0xB")]));
            }
            if let Some(handler) = self.handler.get() {
                handler.search(self.inner).await?;
            }
            Err(crate::err_with_loc!("upstream dropped the connection"))
        }
    }

    #[tokio::test]
    async fn test_failure_of_superseded_search_reports_superseded() {
        let slot = Arc::new(OnceLock::new());
        let source = ReentrantSource {
            handler: slot.clone(),
            outer: "0xOLD",
            inner: "0xNEW",
        };
        let handler = SearchHandler::new(source, GraphBuilder::new(20));
        assert!(slot.set(handler.clone()).is_ok());

        let err = handler.search("0xOLD").await.unwrap_err();

        assert_eq!(err.downcast_ref::<HandlerError>(), Some(&HandlerError::Superseded("0xOLD".to_string())));
        assert_eq!(handler.current().await.node(0).unwrap().label, "0xNEW");
        assert!(!handler.is_loading());
    }

    #[tokio::test]
    async fn test_newer_search_supersedes_older() {
        let source = TestFixtures::delayed_source(vec![
            ("0xSLOW", Duration::from_millis(200), TestFixtures::records(&[("0xSLOW", "0x1")])),
            ("0xFAST", Duration::from_millis(0), TestFixtures::records(&[("0xFAST", "0x2"), ("0x2", "0x3")])),
        ]);
        let handler = SearchHandler::new(source, GraphBuilder::new(20));

        let slow = tokio::spawn({
            let handler = handler.clone();
            async move { handler.search("0xSLOW").await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        let fast = handler.search("0xFAST").await.unwrap();

        let slow_err = slow.await.unwrap().unwrap_err();
        assert_eq!(
            slow_err.downcast_ref::<HandlerError>(),
            Some(&HandlerError::Superseded("0xSLOW".to_string()))
        );
        assert!(Arc::ptr_eq(&fast, &handler.current().await));
        assert_eq!(handler.current().await.node(0).unwrap().label, "0xFAST");
        assert!(!handler.is_loading());
    }
}
