//! Mutation surface: one route group per section, session-protected.
//!
//! The contract mirrors the store: POST adds (201 with the assigned id),
//! PATCH merges a partial payload, DELETE removes, PUT replaces a whole
//! collection or singleton. A PATCH/DELETE against an unknown id is 404;
//! the store reports it as a typed outcome instead of swallowing it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{patch, post, put};
use axum::{Json, Router};
use venue_cms_core::document::id::ContentId;
use venue_cms_core::document::model::*;
use venue_cms_core::document::validate;
use venue_cms_core::mutation::types::*;

use crate::auth::Session;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/content/hero", put(put_hero))
        .route("/v1/content/about", put(put_about))
        .route("/v1/content/contact", put(put_contact))
        .route("/v1/content/navbar", put(put_navbar))
        .route("/v1/content/footer", put(put_footer))
        .route("/v1/events", post(add_event).put(replace_events))
        .route("/v1/events/{id}", patch(update_event).delete(delete_event))
        .route(
            "/v1/event-categories",
            post(add_event_category).put(replace_event_categories),
        )
        .route(
            "/v1/event-categories/{id}",
            patch(update_event_category).delete(delete_event_category),
        )
        .route("/v1/gallery", post(add_gallery_image).put(replace_gallery))
        .route(
            "/v1/gallery/{id}",
            patch(update_gallery_image).delete(delete_gallery_image),
        )
        .route(
            "/v1/gallery-categories",
            post(add_gallery_category).put(replace_gallery_categories),
        )
        .route(
            "/v1/gallery-categories/{id}",
            patch(update_gallery_category).delete(delete_gallery_category),
        )
        .route("/v1/team-members", post(add_team_member))
        .route(
            "/v1/team-members/{id}",
            patch(update_team_member).delete(delete_team_member),
        )
        .route(
            "/v1/bottle-service",
            post(add_bottle_package).put(replace_bottle_service),
        )
        .route(
            "/v1/bottle-service/{id}",
            patch(update_bottle_package).delete(delete_bottle_package),
        )
        .route("/v1/nav-links", post(add_nav_link))
        .route(
            "/v1/nav-links/{id}",
            patch(update_nav_link).delete(delete_nav_link),
        )
        .route("/v1/quick-links", post(add_quick_link))
        .route(
            "/v1/quick-links/{id}",
            patch(update_quick_link).delete(delete_quick_link),
        )
        .route("/v1/social-links", post(add_social_link))
        .route(
            "/v1/social-links/{id}",
            patch(update_social_link).delete(delete_social_link),
        )
}

type Created = (StatusCode, Json<MutationOutcome>);

fn created(outcome: MutationOutcome) -> ApiResult<Created> {
    Ok((StatusCode::CREATED, Json(outcome)))
}

fn require_found(outcome: MutationOutcome) -> ApiResult<Json<MutationOutcome>> {
    match &outcome {
        MutationOutcome::NotFound { section, id } => Err(ApiError::NotFound(format!(
            "{section} has no record `{id}`"
        ))),
        MutationOutcome::Applied { .. } => Ok(Json(outcome)),
    }
}

// Singleton sections.

async fn put_hero(
    _session: Session,
    State(state): State<AppState>,
    Json(hero): Json<HeroContent>,
) -> ApiResult<Json<MutationOutcome>> {
    validate::validate_hero(&hero)?;
    Ok(Json(state.store().update_hero(hero)))
}

async fn put_about(
    _session: Session,
    State(state): State<AppState>,
    Json(about): Json<AboutContent>,
) -> Json<MutationOutcome> {
    Json(state.store().update_about(about))
}

async fn put_contact(
    _session: Session,
    State(state): State<AppState>,
    Json(contact): Json<ContactContent>,
) -> Json<MutationOutcome> {
    Json(state.store().update_contact(contact))
}

async fn put_navbar(
    _session: Session,
    State(state): State<AppState>,
    Json(navbar): Json<NavbarContent>,
) -> Json<MutationOutcome> {
    Json(state.store().update_navbar(navbar))
}

async fn put_footer(
    _session: Session,
    State(state): State<AppState>,
    Json(footer): Json<FooterContent>,
) -> Json<MutationOutcome> {
    Json(state.store().update_footer(footer))
}

// Events.

async fn add_event(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<EventInput>,
) -> ApiResult<Created> {
    validate::validate_event(&input)?;
    created(state.store().add_event(input))
}

async fn update_event(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<EventPatch>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().update_event(&ContentId::from(id), change))
}

async fn delete_event(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().delete_event(&ContentId::from(id)))
}

async fn replace_events(
    _session: Session,
    State(state): State<AppState>,
    Json(events): Json<Vec<Event>>,
) -> Json<MutationOutcome> {
    Json(state.store().replace_events(events))
}

// Event categories.

async fn add_event_category(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> ApiResult<Created> {
    validate::validate_category(&input)?;
    created(state.store().add_event_category(input))
}

async fn update_event_category(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<CategoryPatch>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(
        state
            .store()
            .update_event_category(&ContentId::from(id), change),
    )
}

async fn delete_event_category(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().delete_event_category(&ContentId::from(id)))
}

async fn replace_event_categories(
    _session: Session,
    State(state): State<AppState>,
    Json(categories): Json<Vec<EventCategory>>,
) -> Json<MutationOutcome> {
    Json(state.store().replace_event_categories(categories))
}

// Gallery.

async fn add_gallery_image(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<GalleryImageInput>,
) -> ApiResult<Created> {
    validate::validate_gallery_image(&input)?;
    created(state.store().add_gallery_image(input))
}

async fn update_gallery_image(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<GalleryImagePatch>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(
        state
            .store()
            .update_gallery_image(&ContentId::from(id), change),
    )
}

async fn delete_gallery_image(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().delete_gallery_image(&ContentId::from(id)))
}

async fn replace_gallery(
    _session: Session,
    State(state): State<AppState>,
    Json(gallery): Json<Vec<GalleryImage>>,
) -> Json<MutationOutcome> {
    Json(state.store().replace_gallery(gallery))
}

async fn add_gallery_category(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> ApiResult<Created> {
    validate::validate_category(&input)?;
    created(state.store().add_gallery_category(input))
}

async fn update_gallery_category(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<CategoryPatch>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(
        state
            .store()
            .update_gallery_category(&ContentId::from(id), change),
    )
}

async fn delete_gallery_category(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().delete_gallery_category(&ContentId::from(id)))
}

async fn replace_gallery_categories(
    _session: Session,
    State(state): State<AppState>,
    Json(categories): Json<Vec<GalleryCategory>>,
) -> Json<MutationOutcome> {
    Json(state.store().replace_gallery_categories(categories))
}

// Team members.

async fn add_team_member(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<TeamMemberInput>,
) -> ApiResult<Created> {
    validate::validate_team_member(&input)?;
    created(state.store().add_team_member(input))
}

async fn update_team_member(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<TeamMemberPatch>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(
        state
            .store()
            .update_team_member(&ContentId::from(id), change),
    )
}

async fn delete_team_member(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().delete_team_member(&ContentId::from(id)))
}

// Bottle service.

async fn add_bottle_package(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<BottlePackageInput>,
) -> ApiResult<Created> {
    validate::validate_bottle_package(&input)?;
    created(state.store().add_bottle_package(input))
}

async fn update_bottle_package(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<BottlePackagePatch>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(
        state
            .store()
            .update_bottle_package(&ContentId::from(id), change),
    )
}

async fn delete_bottle_package(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().delete_bottle_package(&ContentId::from(id)))
}

async fn replace_bottle_service(
    _session: Session,
    State(state): State<AppState>,
    Json(packages): Json<Vec<BottleServicePackage>>,
) -> Json<MutationOutcome> {
    Json(state.store().replace_bottle_service(packages))
}

// Links.

async fn add_nav_link(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<LinkInput>,
) -> ApiResult<Created> {
    validate::validate_link(&input)?;
    created(state.store().add_nav_link(input))
}

async fn update_nav_link(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<LinkPatch>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().update_nav_link(&ContentId::from(id), change))
}

async fn delete_nav_link(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().delete_nav_link(&ContentId::from(id)))
}

async fn add_quick_link(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<LinkInput>,
) -> ApiResult<Created> {
    validate::validate_link(&input)?;
    created(state.store().add_quick_link(input))
}

async fn update_quick_link(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<LinkPatch>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().update_quick_link(&ContentId::from(id), change))
}

async fn delete_quick_link(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().delete_quick_link(&ContentId::from(id)))
}

async fn add_social_link(
    _session: Session,
    State(state): State<AppState>,
    Json(input): Json<SocialLinkInput>,
) -> ApiResult<Created> {
    validate::validate_social_link(&input)?;
    created(state.store().add_social_link(input))
}

async fn update_social_link(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<SocialLinkPatch>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(
        state
            .store()
            .update_social_link(&ContentId::from(id), change),
    )
}

async fn delete_social_link(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MutationOutcome>> {
    require_found(state.store().delete_social_link(&ContentId::from(id)))
}
