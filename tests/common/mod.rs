#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use encurtador::application::services::LinkService;
use encurtador::config::StorageBackend;
use encurtador::domain::entities::NewLink;
use encurtador::domain::repositories::LinkRepository;
use encurtador::infrastructure::id_generator::RandomIdGenerator;
use encurtador::infrastructure::persistence::InMemoryLinkRepository;
use encurtador::infrastructure::qr::PngQrEncoder;
use encurtador::routes::app_router;
use encurtador::state::AppState;
use std::sync::Arc;

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());

    let link_service = Arc::new(LinkService::new(
        repo.clone(),
        Arc::new(RandomIdGenerator::default()),
        Arc::new(PngQrEncoder::new()),
    ));

    (AppState::new(link_service, StorageBackend::Memory), repo)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let app = app_router(state, "static");
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap();
    (server, repo)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, short_id: &str, url: &str) {
    repo.create(NewLink::new(short_id, url)).await.unwrap();
}
