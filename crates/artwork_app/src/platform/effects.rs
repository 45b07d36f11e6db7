use std::io;

use artwork_core::{Artwork, Effect, FetchFailure, FetchedPage, Msg};
use artwork_engine::{
    ArtworkRecord, CatalogPage, CatalogSettings, EngineEvent, EngineHandle, PageQuery,
};
use catalog_logging::catalog_info;

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: CatalogSettings) -> io::Result<Self> {
        catalog_info!("Catalog endpoint {}", settings.base_url);
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    #[cfg(test)]
    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    generation,
                    request,
                } => {
                    catalog_info!(
                        "FetchPage generation={} page={} limit={}",
                        generation,
                        request.page,
                        request.limit()
                    );
                    self.engine.fetch_page(
                        generation,
                        PageQuery {
                            page: request.page,
                            limit: request.limit(),
                        },
                    );
                }
            }
        }
    }

    /// Drains finished engine work without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { request_id, result } => Msg::PageLoaded {
            generation: request_id,
            result: match result {
                Ok(page) => {
                    catalog_info!("Request {} {}", request_id, fetch_summary(&page));
                    Ok(FetchedPage {
                        records: page.records.into_iter().map(map_record).collect(),
                        total: page.total,
                    })
                }
                // Reported once, by the state when it applies the failure.
                Err(err) => Err(FetchFailure::new(err.to_string())),
            },
        },
    }
}

fn fetch_summary(page: &CatalogPage) -> String {
    let meta = &page.metadata;
    format!(
        "fetched {} ({} bytes, {}): {} records of {}",
        meta.url,
        meta.byte_len,
        meta.content_type.as_deref().unwrap_or("no content type"),
        page.records.len(),
        page.total
    )
}

fn map_record(record: ArtworkRecord) -> Artwork {
    Artwork {
        id: record.id,
        title: record.title.unwrap_or_default(),
        place_of_origin: record.place_of_origin,
        artist_display: record.artist_display,
        inscriptions: record.inscriptions,
        date_start: record.date_start,
        date_end: record.date_end,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use artwork_core::{PageRequest, PageSize};
    use artwork_engine::{CatalogPage, FailureKind, FetchError, FetchMetadata, PageFetcher};

    use super::*;

    struct CannedFetcher;

    #[async_trait::async_trait]
    impl PageFetcher for CannedFetcher {
        async fn fetch_page(&self, query: PageQuery) -> Result<CatalogPage, FetchError> {
            if query.page > 1 {
                return Err(FetchError {
                    kind: FailureKind::HttpStatus(500),
                    message: "500 Internal Server Error".to_string(),
                });
            }
            Ok(CatalogPage {
                records: vec![ArtworkRecord {
                    id: 27992,
                    title: None,
                    place_of_origin: Some("France".to_string()),
                    artist_display: Some("Georges Seurat".to_string()),
                    inscriptions: None,
                    date_start: Some(1884),
                    date_end: Some(1886),
                }],
                total: u64::from(query.limit),
                metadata: FetchMetadata {
                    url: "fake://artworks".to_string(),
                    content_type: None,
                    byte_len: 0,
                },
            })
        }
    }

    fn poll_until_some(runner: &EffectRunner) -> Vec<Msg> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let msgs = runner.poll();
            if !msgs.is_empty() || Instant::now() > deadline {
                return msgs;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    fn fetch(generation: u64, page: u32) -> Effect {
        Effect::FetchPage {
            generation,
            request: PageRequest {
                page,
                page_size: PageSize::TwentyFour,
            },
        }
    }

    #[test]
    fn fetch_effect_round_trips_into_page_loaded() {
        let engine = EngineHandle::with_fetcher(Arc::new(CannedFetcher)).unwrap();
        let runner = EffectRunner::with_engine(engine);

        runner.run(vec![fetch(3, 1)]);
        let msgs = poll_until_some(&runner);

        assert_eq!(
            msgs,
            vec![Msg::PageLoaded {
                generation: 3,
                result: Ok(FetchedPage {
                    records: vec![Artwork {
                        id: 27992,
                        title: String::new(),
                        place_of_origin: Some("France".to_string()),
                        artist_display: Some("Georges Seurat".to_string()),
                        inscriptions: None,
                        date_start: Some(1884),
                        date_end: Some(1886),
                    }],
                    total: 24,
                }),
            }]
        );
    }

    #[test]
    fn fetch_summary_reports_url_size_and_counts() {
        let page = CatalogPage {
            records: Vec::new(),
            total: 129_884,
            metadata: FetchMetadata {
                url: "https://api.artic.edu/api/v1/artworks?page=2&limit=12".to_string(),
                content_type: Some("application/json".to_string()),
                byte_len: 18_204,
            },
        };
        assert_eq!(
            fetch_summary(&page),
            "fetched https://api.artic.edu/api/v1/artworks?page=2&limit=12 \
             (18204 bytes, application/json): 0 records of 129884"
        );

        let bare = CatalogPage {
            metadata: FetchMetadata {
                content_type: None,
                ..page.metadata.clone()
            },
            ..page
        };
        assert!(fetch_summary(&bare).contains("no content type"));
    }

    #[test]
    fn engine_failure_becomes_fetch_failure() {
        let engine = EngineHandle::with_fetcher(Arc::new(CannedFetcher)).unwrap();
        let runner = EffectRunner::with_engine(engine);

        runner.run(vec![fetch(9, 2)]);
        let msgs = poll_until_some(&runner);

        match msgs.as_slice() {
            [Msg::PageLoaded {
                generation: 9,
                result: Err(failure),
            }] => assert!(failure.message.contains("http status 500")),
            other => panic!("unexpected messages {other:?}"),
        }
    }
}
